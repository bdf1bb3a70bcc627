use crate::error::{CvError, Result};
use crate::types::SectionLabel;
use serde::{Deserialize, Serialize};
use tracing::warn;

// Default value functions for serde
fn default_headings() -> Vec<String> {
    [
        "Experience",
        "Work Experience",
        "Professional Experience",
        "Research Experience",
        "Employment",
        "Positions",
        "Professional Positions",
        "Education",
        "Academic",
        "Qualifications",
        "Summary",
        "Profile",
        "About",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn default_section_rules() -> Vec<SectionRule> {
    vec![
        SectionRule::new(SectionLabel::Experience, &["experience"]),
        SectionRule::new(
            SectionLabel::Education,
            &["education", "academic", "qualifications"],
        ),
        SectionRule::new(SectionLabel::Summary, &["summary", "profile", "about"]),
    ]
}

fn default_degree_words() -> Vec<String> {
    [
        "Bachelor", "Bachelors", "B.S", "BS", "BSc", "Master", "MSc", "M.S", "MS", "PhD",
        "Doctor", "Associate",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn default_contact_scan_lines() -> usize {
    50
}

fn default_summary_max_lines() -> usize {
    6
}

fn default_summary_strip_words() -> Vec<String> {
    vec!["Github".to_string(), "LinkedIn".to_string()]
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsingConfig {
    /// Full-line heading vocabulary (matched case-insensitively)
    #[serde(default = "default_headings")]
    pub headings: Vec<String>,
    /// Heading classification rules, evaluated in order; first rule wins
    #[serde(default = "default_section_rules")]
    pub section_rules: Vec<SectionRule>,
    /// Degree keywords anchoring education entries
    #[serde(default = "default_degree_words")]
    pub degree_words: Vec<String>,
    /// Number of leading lines searched for contact details
    #[serde(default = "default_contact_scan_lines")]
    pub contact_scan_lines: usize,
    /// Maximum number of lines joined into the summary
    #[serde(default = "default_summary_max_lines")]
    pub summary_max_lines: usize,
    /// Standalone words removed from the summary text
    #[serde(default = "default_summary_strip_words")]
    pub summary_strip_words: Vec<String>,
}

/// Maps a heading to a section when its lower-cased text contains any keyword.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionRule {
    pub label: SectionLabel,
    pub keywords: Vec<String>,
}

impl SectionRule {
    pub fn new(label: SectionLabel, keywords: &[&str]) -> Self {
        Self {
            label,
            keywords: keywords.iter().map(|k| k.to_lowercase()).collect(),
        }
    }

    /// `heading_lower` must already be lower-cased.
    pub fn matches(&self, heading_lower: &str) -> bool {
        self.keywords
            .iter()
            .any(|keyword| heading_lower.contains(&keyword.to_lowercase()))
    }
}

impl Default for ParsingConfig {
    fn default() -> Self {
        Self {
            headings: default_headings(),
            section_rules: default_section_rules(),
            degree_words: default_degree_words(),
            contact_scan_lines: default_contact_scan_lines(),
            summary_max_lines: default_summary_max_lines(),
            summary_strip_words: default_summary_strip_words(),
        }
    }
}

/// Where the effective config was loaded from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    Default,
    File(String),
    /// The file could not be loaded; defaults were used instead
    Fallback(String),
}

impl ParsingConfig {
    pub fn load_from_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| CvError::Config(format!("cannot read {path}: {e}")))?;
        Self::from_yaml(&content)
    }

    pub fn from_yaml(content: &str) -> Result<Self> {
        let config: ParsingConfig = serde_yaml::from_str(content)
            .map_err(|e| CvError::Config(format!("invalid YAML: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    pub fn load_with_fallback(path: Option<&str>) -> Self {
        Self::load_with_source(path).0
    }

    /// Like `load_with_fallback`, also reporting where the config came from
    pub fn load_with_source(path: Option<&str>) -> (Self, ConfigSource) {
        match path {
            Some(p) => match Self::load_from_file(p) {
                Ok(config) => (config, ConfigSource::File(p.to_string())),
                Err(e) => {
                    warn!("⚠️  Failed to load config from {p} ({e}), using defaults");
                    (Self::default(), ConfigSource::Fallback(p.to_string()))
                }
            },
            None => (Self::default(), ConfigSource::Default),
        }
    }

    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| CvError::Config(e.to_string()))
    }

    fn validate(&self) -> Result<()> {
        if self.headings.iter().all(|h| h.trim().is_empty()) {
            return Err(CvError::Config("heading vocabulary is empty".to_string()));
        }
        if self.degree_words.iter().all(|w| w.trim().is_empty()) {
            return Err(CvError::Config("degree vocabulary is empty".to_string()));
        }
        Ok(())
    }
}
