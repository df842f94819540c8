use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Programming language a snippet is written in or converted to.
///
/// `Other` carries languages the engine knows by name but cannot convert;
/// those always take the passthrough fallback in the pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Language {
    JavaScript,
    Python,
    Swift,
    Other(String),
}

impl Language {
    /// Comment marker used when emitting lines in this language.
    pub fn comment_marker(&self) -> &str {
        match self {
            Language::Python => "#",
            _ => "//",
        }
    }

    /// Whether blocks are delimited by braces (vs. indentation).
    pub fn is_brace_delimited(&self) -> bool {
        !matches!(self, Language::Python)
    }
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Language::JavaScript => write!(f, "javascript"),
            Language::Python => write!(f, "python"),
            Language::Swift => write!(f, "swift"),
            Language::Other(name) => write!(f, "{}", name),
        }
    }
}

impl From<&str> for Language {
    fn from(s: &str) -> Self {
        match s.trim().to_lowercase().as_str() {
            "javascript" | "js" => Language::JavaScript,
            "python" | "py" => Language::Python,
            "swift" => Language::Swift,
            other => Language::Other(other.to_string()),
        }
    }
}

impl From<String> for Language {
    fn from(s: String) -> Self {
        Language::from(s.as_str())
    }
}

impl From<Language> for String {
    fn from(lang: Language) -> Self {
        lang.to_string()
    }
}

impl std::str::FromStr for Language {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Language::from(s))
    }
}

/// Reader skill level; selects how detailed the generated explanation is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl Default for SkillLevel {
    fn default() -> Self {
        SkillLevel::Intermediate
    }
}

/// Errors produced by request validation (mirrors the HTTP 400 cases of the
/// surrounding route; the engine itself never errors).
#[derive(Debug, Error)]
pub enum RequestError {
    #[error("source code must not be empty")]
    EmptySource,
    #[error("source and target language are the same: {0}")]
    SameLanguage(Language),
}

/// Body of a conversion request, matching the JSON schema of the
/// surrounding `POST /api/convert` route.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionRequest {
    pub source_code: String,
    pub source_language: Language,
    pub target_language: Language,
    #[serde(default)]
    pub skill_level: SkillLevel,
    #[serde(default)]
    pub generate_readme: bool,
    #[serde(default)]
    pub generate_api: bool,
}

impl ConversionRequest {
    pub fn new(source_code: impl Into<String>, from: Language, to: Language) -> Self {
        Self {
            source_code: source_code.into(),
            source_language: from,
            target_language: to,
            skill_level: SkillLevel::default(),
            generate_readme: false,
            generate_api: false,
        }
    }

    /// Validate the request the way the surrounding route does before
    /// handing it to the engine.
    pub fn validate(&self) -> Result<(), RequestError> {
        if self.source_code.trim().is_empty() {
            return Err(RequestError::EmptySource);
        }
        if self.source_language == self.target_language {
            return Err(RequestError::SameLanguage(self.source_language.clone()));
        }
        Ok(())
    }
}

/// Explanation strings accompanying a conversion, looked up from static
/// templates keyed by the language pair.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Explanation {
    pub high_level: String,
    pub language_differences: String,
    pub step_by_step: Vec<String>,
}

/// Result of a conversion request.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionResult {
    pub target_code: String,
    pub explanation: Explanation,
}
