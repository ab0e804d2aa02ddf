//! Static prompt catalog
//!
//! Resume templates by experience category, optimization strategies by
//! industry, and few-shot examples by prompt type. All tables are fixed at
//! compile time; lookups never fail and fall back to a default entry.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Template selector
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResumeCategory {
    EntryLevel,
    #[default]
    Professional,
    Executive,
}

impl ResumeCategory {
    pub fn key(&self) -> &'static str {
        match self {
            ResumeCategory::EntryLevel => "entry_level",
            ResumeCategory::Professional => "professional",
            ResumeCategory::Executive => "executive",
        }
    }

    /// Parse a category key. `entry` is accepted as shorthand for `entry_level`.
    pub fn parse(key: &str) -> Option<Self> {
        match key.trim().to_ascii_lowercase().as_str() {
            "entry" | "entry_level" => Some(ResumeCategory::EntryLevel),
            "professional" => Some(ResumeCategory::Professional),
            "executive" => Some(ResumeCategory::Executive),
            _ => None,
        }
    }

    /// Exact `promptContext` table: `entry`, `professional`, `executive`.
    /// Case and whitespace variants are not recognized.
    pub fn from_prompt_context(context: &str) -> Option<Self> {
        match context {
            "entry" => Some(ResumeCategory::EntryLevel),
            "professional" => Some(ResumeCategory::Professional),
            "executive" => Some(ResumeCategory::Executive),
            _ => None,
        }
    }

    /// Map a requester's stated experience level onto a category
    pub fn from_experience_level(level: &str) -> Option<Self> {
        match level.trim().to_ascii_lowercase().as_str() {
            "entry" => Some(ResumeCategory::EntryLevel),
            "mid" | "senior" => Some(ResumeCategory::Professional),
            "executive" => Some(ResumeCategory::Executive),
            _ => None,
        }
    }

    pub fn template(&self) -> &'static TemplateRecord {
        match self {
            ResumeCategory::EntryLevel => &ENTRY_LEVEL,
            ResumeCategory::Professional => &PROFESSIONAL,
            ResumeCategory::Executive => &EXECUTIVE,
        }
    }
}

impl fmt::Display for ResumeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Per-category resume instructions
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateRecord {
    /// Persona the model writes as
    pub instruction_text: &'static str,
    /// What this kind of resume should emphasize
    pub focus: &'static str,
    pub tone: &'static str,
    pub formatting_hint: &'static str,
    pub max_output_tokens: u32,
}

static ENTRY_LEVEL: TemplateRecord = TemplateRecord {
    instruction_text: "You are a career coach specializing in helping early-career \
        professionals create impactful resumes. Focus on potential, academic achievements, \
        and transferable skills.",
    focus: "Create an entry-level resume that emphasizes:\n\
        - Educational achievements\n\
        - Internships and academic projects\n\
        - Transferable skills\n\
        - Potential for growth\n\
        - Clear, concise formatting",
    tone: "Encouraging, potential-driven, optimistic",
    formatting_hint: "Use a clean, contemporary layout that emphasizes education and potential",
    max_output_tokens: 800,
};

static PROFESSIONAL: TemplateRecord = TemplateRecord {
    instruction_text: "You are a professional resume writer with 20+ years of experience \
        in career development and talent acquisition. Your goal is to create compelling, \
        ATS-optimized resumes that highlight professional achievements and potential.",
    focus: "Create a professional resume that highlights:\n\
        - Comprehensive work experience\n\
        - Quantifiable achievements\n\
        - Industry-specific skills\n\
        - Career progression\n\
        - Advanced formatting and ATS optimization",
    tone: "Formal, professional, achievement-focused",
    formatting_hint: "Use clean, modern resume formatting with clear sections",
    max_output_tokens: 1200,
};

static EXECUTIVE: TemplateRecord = TemplateRecord {
    instruction_text: "You are a high-level executive recruitment specialist \
        crafting strategic, leadership-oriented resumes for C-suite and senior management roles.",
    focus: "Develop an executive-level resume that demonstrates:\n\
        - Strategic leadership experience\n\
        - High-impact organizational contributions\n\
        - Complex problem-solving skills\n\
        - Comprehensive professional narrative\n\
        - Executive branding and positioning",
    tone: "Strategic, authoritative, impact-driven",
    formatting_hint: "Use a sophisticated, executive-level resume format",
    max_output_tokens: 1500,
};

/// Look up a resume template by category key; unknown keys get `professional`
pub fn lookup_resume_template(category_key: &str) -> &'static TemplateRecord {
    ResumeCategory::parse(category_key)
        .unwrap_or_default()
        .template()
}

/// Optimization strategy for one industry
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndustryProfile {
    pub keywords: &'static [&'static str],
    pub focus_areas: &'static [&'static str],
}

static TECHNOLOGY: IndustryProfile = IndustryProfile {
    keywords: &["agile", "scrum", "cloud", "machine learning", "data analysis"],
    focus_areas: &["technical skills", "project impact", "innovation"],
};

static FINANCE: IndustryProfile = IndustryProfile {
    keywords: &["risk management", "financial modeling", "compliance", "portfolio"],
    focus_areas: &["quantitative skills", "regulatory knowledge", "strategic planning"],
};

static HEALTHCARE: IndustryProfile = IndustryProfile {
    keywords: &["patient care", "clinical", "compliance", "electronic health records"],
    focus_areas: &["certifications", "specialized skills", "patient outcomes"],
};

static MARKETING: IndustryProfile = IndustryProfile {
    keywords: &["digital marketing", "SEO", "content strategy", "analytics"],
    focus_areas: &["campaign performance", "creative solutions", "brand development"],
};

/// Look up an industry profile; unknown keys get `technology`
pub fn lookup_industry_profile(industry_key: &str) -> &'static IndustryProfile {
    match industry_key.trim().to_ascii_lowercase().as_str() {
        "finance" => &FINANCE,
        "healthcare" => &HEALTHCARE,
        "marketing" => &MARKETING,
        _ => &TECHNOLOGY,
    }
}

/// Input half of a few-shot example
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExampleInput {
    pub name: String,
    pub industry: String,
    pub experience_level: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub key_skills: Vec<String>,
}

/// One input/output pair shown to the model
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StructuredExample {
    pub input: ExampleInput,
    pub output: String,
}

/// Built-in few-shot examples for a prompt type; unknown types get none
pub fn structured_examples(prompt_type: &str) -> Vec<StructuredExample> {
    match prompt_type {
        "professional_resume" => vec![
            StructuredExample {
                input: ExampleInput {
                    name: "Sarah Johnson".to_string(),
                    industry: "Technology".to_string(),
                    experience_level: "Mid-Level Software Engineer".to_string(),
                    key_skills: vec![
                        "Python".to_string(),
                        "Machine Learning".to_string(),
                        "Data Analysis".to_string(),
                    ],
                },
                output: "Professional Summary:\n\
                    Innovative software engineer with 5+ years of experience in developing \
                    scalable machine learning solutions. Proven track record of improving \
                    system efficiency by 40% through advanced data analysis techniques.\n\n\
                    Key Achievements:\n\
                    - Developed predictive analytics model reducing operational costs by $250K annually\n\
                    - Led cross-functional team in implementing AI-driven product recommendations"
                    .to_string(),
            },
            StructuredExample {
                input: ExampleInput {
                    name: "Michael Chen".to_string(),
                    industry: "Finance".to_string(),
                    experience_level: "Senior Financial Analyst".to_string(),
                    key_skills: vec![
                        "Financial Modeling".to_string(),
                        "Risk Management".to_string(),
                        "Strategic Planning".to_string(),
                    ],
                },
                output: "Professional Summary:\n\
                    Strategic financial analyst with expertise in comprehensive risk management \
                    and financial modeling. Consistently delivers data-driven insights that \
                    drive organizational growth and optimize financial performance.\n\n\
                    Key Achievements:\n\
                    - Reduced investment portfolio risk by 25% through advanced predictive modeling\n\
                    - Implemented cost-saving strategies resulting in $1.5M annual savings"
                    .to_string(),
            },
        ],
        _ => Vec::new(),
    }
}
