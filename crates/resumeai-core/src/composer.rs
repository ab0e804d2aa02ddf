//! Prompt composition
//!
//! Builds the text sent to the model from a template record, the requester's
//! profile, override options and custom fragments.

use crate::activity::ActivityRecord;
use crate::catalog::{lookup_industry_profile, structured_examples, ResumeCategory};
use crate::configurator::GenerationSettings;
use crate::types::{CustomFragments, GenerationOverrides, OptimizationInput, RequesterProfile};
use serde::Serialize;
use std::fmt::Write;
use tracing::debug;

/// Fixed guidance appended to every base instruction
pub const SPECIAL_INSTRUCTIONS: &str = "Special Instructions:
1. Maintain professional tone
2. Use industry-specific terminology
3. Highlight unique professional attributes
4. Ensure ATS compatibility
5. Focus on achievements over responsibilities";

pub const DESIRED_OUTCOME: &str = "Desired Outcome:
Create a compelling, personalized professional document that effectively communicates \
the user's professional value proposition.";

/// Requests closing the career-insights prompt
pub const INSIGHTS_REQUESTS: &str = "Please provide:
1. Skill development recommendations
2. Career progression suggestions
3. Resume improvement insights
4. Potential career paths based on observed patterns";

const NOT_PROVIDED: &str = "Not Provided";
const NOT_SPECIFIED: &str = "Not Specified";
const DEFAULT_NAME: &str = "Applicant";
const DEFAULT_INDUSTRY: &str = "General";
const DEFAULT_GUIDANCE: &str = "Enhance resume relevance";

/// Few-shot prompt type used for optimizations
const OPTIMIZATION_EXAMPLES: &str = "professional_resume";

/// A fully resolved resume prompt
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ComposedPrompt {
    pub category: ResumeCategory,
    pub system_instruction: String,
    pub tone: String,
    pub formatting_hint: String,
    /// Template's suggested output length
    pub max_output_tokens: u32,
    /// Final prompt text
    pub text: String,
}

/// Pick the template category: a valid explicit `promptContext` wins, then
/// the requester's experience level, then `professional`.
pub fn resolve_category(
    profile: &RequesterProfile,
    overrides: &GenerationOverrides,
) -> ResumeCategory {
    overrides
        .prompt_context
        .as_deref()
        .and_then(ResumeCategory::from_prompt_context)
        .or_else(|| {
            profile
                .experience_level()
                .and_then(ResumeCategory::from_experience_level)
        })
        .unwrap_or_default()
}

/// Compose the resume generation prompt
pub fn compose(
    profile: &RequesterProfile,
    overrides: &GenerationOverrides,
    fragments: &CustomFragments,
) -> ComposedPrompt {
    let category = resolve_category(profile, overrides);
    let template = category.template();

    let system_instruction = overrides
        .custom_prompt()
        .unwrap_or(template.instruction_text)
        .to_string();
    let tone = overrides.tone().unwrap_or(template.tone).to_string();
    let formatting_hint = template.formatting_hint.to_string();

    let base = base_instruction("resume", profile, fragments);

    let text = format!(
        "{system}\n\n\
         Tone: {tone}\n\
         Formatting Guidelines: {formatting}\n\n\
         User Details:\n\
         - Name: {name}\n\
         - Industry: {industry}\n\
         - Experience Level: {category}\n\n\
         {focus}\n\n\
         {base}",
        system = system_instruction,
        tone = tone,
        formatting = formatting_hint,
        name = profile.full_name().unwrap_or(DEFAULT_NAME),
        industry = profile.industry().unwrap_or(DEFAULT_INDUSTRY),
        category = category,
        focus = template.focus,
        base = base,
    );

    debug!(
        category = %category,
        fragments = fragments.len(),
        prompt_chars = text.len(),
        "Composed resume prompt"
    );

    ComposedPrompt {
        category,
        system_instruction,
        tone,
        formatting_hint,
        max_output_tokens: template.max_output_tokens,
        text,
    }
}

/// Compose the resume optimization prompt
pub fn compose_optimization(
    profile: &RequesterProfile,
    settings: &GenerationSettings,
    fragments: &CustomFragments,
    input: &OptimizationInput,
) -> String {
    let industry = lookup_industry_profile(profile.industry().unwrap_or_default());

    let mut examples = structured_examples(OPTIMIZATION_EXAMPLES);
    examples.extend(input.additional_examples.iter().cloned());
    // Serializing plain structs of strings cannot fail.
    let examples_json = serde_json::to_string_pretty(&examples).unwrap_or_default();

    let guidance = if settings.custom_prompt.trim().is_empty() {
        DEFAULT_GUIDANCE
    } else {
        settings.custom_prompt.as_str()
    };

    format!(
        "Optimize the following resume for the given job description:\n\n\
         Existing Resume:\n{resume}\n\n\
         Job Description:\n{job}\n\n\
         Optimization Instructions:\n\
         - Tone: {tone}\n\
         - Context: {context}\n\
         - Custom Guidance: {guidance}\n\n\
         Industry Focus:\n\
         - Keywords: {keywords}\n\
         - Focus Areas: {focus_areas}\n\n\
         Example Optimizations:\n{examples}\n\n\
         {base}",
        resume = input.existing_resume,
        job = input.job_description,
        tone = settings.tone,
        context = settings.prompt_context,
        guidance = guidance,
        keywords = industry.keywords.join(", "),
        focus_areas = industry.focus_areas.join(", "),
        examples = examples_json,
        base = base_instruction("optimization", profile, fragments),
    )
}

/// Compose the career-insights prompt for one requester's activity history
pub fn compose_insights(records: &[ActivityRecord]) -> String {
    let activities = serde_json::to_string_pretty(records).unwrap_or_else(|_| "[]".to_string());
    format!(
        "Analyze the following user resume generation activities and provide personalized \
         career development insights:\n\n\
         Activities Summary:\n{}\n\n{}\n",
        activities, INSIGHTS_REQUESTS
    )
}

/// Narrative instruction shared by every prompt kind
fn base_instruction(
    template_type: &str,
    profile: &RequesterProfile,
    fragments: &CustomFragments,
) -> String {
    let mut text = format!(
        "Context: {kind} GENERATION for {industry} industry\n\n\
         User Profile:\n\
         - Name: {name}\n\
         - Experience Level: {level}\n\
         - Key Skills: {skills}\n\n\
         {instructions}\n\n\
         {outcome}",
        kind = template_type.to_uppercase(),
        industry = profile.industry().unwrap_or("general"),
        name = profile.full_name().unwrap_or(NOT_PROVIDED),
        level = profile.experience_level().unwrap_or(NOT_SPECIFIED),
        skills = profile.skills_text().as_deref().unwrap_or(NOT_PROVIDED),
        instructions = SPECIAL_INSTRUCTIONS,
        outcome = DESIRED_OUTCOME,
    );

    for (name, instruction) in fragments.instructions() {
        // Writing into a String is infallible.
        let _ = write!(
            text,
            "\n\nCustom Instruction - {}:\n{}",
            titleize(name),
            instruction
        );
    }

    text
}

/// `focus_area` -> `Focus Area`
pub(crate) fn titleize(name: &str) -> String {
    name.split('_')
        .flat_map(str::split_whitespace)
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}
