//! Request-side types shared by the composer, configurator and server

use crate::catalog::StructuredExample;
use serde::de::{Deserializer, MapAccess, Visitor};
use serde::ser::{SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Key prefix marking a free-form custom instruction fragment
pub const CUSTOM_FRAGMENT_PREFIX: &str = "custom_";

/// Profile fields supplied by the requester
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RequesterProfile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub full_name: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub industry: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub experience_level: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skills: Option<Skills>,
}

impl RequesterProfile {
    /// Profile with only an experience level set
    pub fn with_experience_level(level: impl Into<String>) -> Self {
        Self {
            experience_level: Some(level.into()),
            ..Default::default()
        }
    }

    pub fn full_name(&self) -> Option<&str> {
        non_blank(self.full_name.as_deref())
    }

    pub fn email(&self) -> Option<&str> {
        non_blank(self.email.as_deref())
    }

    pub fn industry(&self) -> Option<&str> {
        non_blank(self.industry.as_deref())
    }

    pub fn experience_level(&self) -> Option<&str> {
        non_blank(self.experience_level.as_deref())
    }

    /// Skills rendered as a single line, `None` when empty
    pub fn skills_text(&self) -> Option<String> {
        self.skills
            .as_ref()
            .map(|skills| skills.to_string())
            .filter(|text| !text.trim().is_empty())
    }
}

/// Skills arrive either as free text or as a list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Skills {
    List(Vec<String>),
    Text(String),
}

impl fmt::Display for Skills {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Skills::List(items) => write!(f, "{}", items.join(", ")),
            Skills::Text(text) => write!(f, "{}", text),
        }
    }
}

/// Recognized override options (JSON keys are camelCase).
///
/// `creativity` and `max_tokens` stay raw JSON: callers send numbers, numeric
/// strings and worse, and the configurator decides what each one means. The
/// text options read any non-string value as absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationOverrides {
    #[serde(
        default,
        deserialize_with = "string_or_absent",
        skip_serializing_if = "Option::is_none"
    )]
    pub prompt_context: Option<String>,

    #[serde(
        default,
        deserialize_with = "string_or_absent",
        skip_serializing_if = "Option::is_none"
    )]
    pub tone: Option<String>,

    #[serde(
        default,
        deserialize_with = "string_or_absent",
        skip_serializing_if = "Option::is_none"
    )]
    pub custom_prompt: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub creativity: Option<Value>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<Value>,
}

impl GenerationOverrides {
    pub fn tone(&self) -> Option<&str> {
        non_blank(self.tone.as_deref())
    }

    pub fn custom_prompt(&self) -> Option<&str> {
        non_blank(self.custom_prompt.as_deref())
    }
}

/// Ordered `(key, text)` fragments, kept in the order the caller wrote them
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CustomFragments {
    entries: Vec<(String, String)>,
}

impl CustomFragments {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a fragment
    pub fn push(&mut self, key: impl Into<String>, text: impl Into<String>) {
        self.entries.push((key.into(), text.into()));
    }

    /// Builder-style `push`
    pub fn with(mut self, key: impl Into<String>, text: impl Into<String>) -> Self {
        self.push(key, text);
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// All entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Entries carrying the custom prefix, with the prefix stripped
    pub fn instructions(&self) -> impl Iterator<Item = (&str, &str)> {
        self.iter()
            .filter_map(|(k, v)| k.strip_prefix(CUSTOM_FRAGMENT_PREFIX).map(|name| (name, v)))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for CustomFragments {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl Serialize for CustomFragments {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, text) in &self.entries {
            map.serialize_entry(key, text)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for CustomFragments {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct FragmentsVisitor;

        impl<'de> Visitor<'de> for FragmentsVisitor {
            type Value = CustomFragments;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of custom instruction fragments")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
                let mut fragments = CustomFragments::new();
                while let Some((key, value)) = map.next_entry::<String, Value>()? {
                    match value {
                        Value::Null => {}
                        Value::String(text) => fragments.push(key, text),
                        other => fragments.push(key, other.to_string()),
                    }
                }
                Ok(fragments)
            }
        }

        deserializer.deserialize_map(FragmentsVisitor)
    }
}

/// The `custom_instructions` object of a request: override options plus
/// `custom_`-prefixed fragments side by side.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CustomInstructions {
    #[serde(flatten)]
    pub overrides: GenerationOverrides,

    #[serde(flatten)]
    pub fragments: CustomFragments,
}

/// Inputs specific to an optimization run
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OptimizationInput {
    pub existing_resume: String,
    pub job_description: String,
    /// Caller-supplied examples appended after the built-in ones
    pub additional_examples: Vec<StructuredExample>,
}

fn string_or_absent<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    match Value::deserialize(deserializer)? {
        Value::String(text) => Ok(Some(text)),
        _ => Ok(None),
    }
}

pub(crate) fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_fragments_keep_document_order() {
        let fragments: CustomFragments = serde_json::from_str(
            r#"{"custom_zeta": "last letter", "custom_alpha": "first letter", "custom_mid": "m"}"#,
        )
        .unwrap();

        let keys: Vec<&str> = fragments.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["custom_zeta", "custom_alpha", "custom_mid"]);
    }

    #[test]
    fn test_fragments_stringify_non_string_values() {
        let fragments: CustomFragments =
            serde_json::from_value(json!({"custom_count": 3, "custom_none": null})).unwrap();
        let entries: Vec<(&str, &str)> = fragments.iter().collect();
        assert_eq!(entries, vec![("custom_count", "3")]);
    }

    #[test]
    fn test_instructions_filter_prefix() {
        let fragments = CustomFragments::new()
            .with("custom_tone", "Warm")
            .with("note", "ignored")
            .with("custom_focus_area", "Cloud");

        let names: Vec<&str> = fragments.instructions().map(|(k, _)| k).collect();
        assert_eq!(names, vec!["tone", "focus_area"]);
    }

    #[test]
    fn test_custom_instructions_split_overrides_and_fragments() {
        let parsed: CustomInstructions = serde_json::from_value(json!({
            "promptContext": "executive",
            "custom_leadership": "Board-level impact",
            "creativity": "0.4",
            "maxTokens": 1500,
            "custom_positioning": "Thought leader"
        }))
        .unwrap();

        assert_eq!(parsed.overrides.prompt_context.as_deref(), Some("executive"));
        assert_eq!(parsed.overrides.creativity, Some(json!("0.4")));
        assert_eq!(parsed.overrides.max_tokens, Some(json!(1500)));

        let names: Vec<&str> = parsed.fragments.instructions().map(|(k, _)| k).collect();
        assert_eq!(names, vec!["leadership", "positioning"]);
    }

    #[test]
    fn test_non_string_text_overrides_read_as_absent() {
        let parsed: CustomInstructions = serde_json::from_value(json!({
            "promptContext": 1,
            "tone": ["warm"],
            "customPrompt": 7,
            "maxTokens": 1500,
            "custom_focus": "Leadership"
        }))
        .unwrap();

        assert_eq!(parsed.overrides.prompt_context, None);
        assert_eq!(parsed.overrides.tone, None);
        assert_eq!(parsed.overrides.custom_prompt, None);
        assert_eq!(parsed.overrides.max_tokens, Some(json!(1500)));
        assert_eq!(parsed.fragments.len(), 1);
    }

    #[test]
    fn test_skills_accept_text_or_list() {
        let profile: RequesterProfile =
            serde_json::from_value(json!({"skills": ["Rust", "SQL"]})).unwrap();
        assert_eq!(profile.skills_text().as_deref(), Some("Rust, SQL"));

        let profile: RequesterProfile =
            serde_json::from_value(json!({"skills": "Python, ML"})).unwrap();
        assert_eq!(profile.skills_text().as_deref(), Some("Python, ML"));
    }

    #[test]
    fn test_blank_fields_read_as_absent() {
        let profile = RequesterProfile {
            full_name: Some("   ".to_string()),
            skills: Some(Skills::List(vec![])),
            ..Default::default()
        };
        assert!(profile.full_name().is_none());
        assert!(profile.skills_text().is_none());
    }
}
