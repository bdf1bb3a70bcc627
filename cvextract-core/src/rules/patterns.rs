//! Line-level pattern matchers.
//!
//! Fixed shapes (date ranges, email, phone, location) are process-wide
//! statics. Vocabulary-driven matchers (headings, degrees, stripped summary
//! words) are compiled from a [`ParsingConfig`] into a [`PatternSet`].

use std::sync::LazyLock;

use regex::Regex;

use crate::config::{ParsingConfig, SectionRule};
use crate::error::{CvError, Result};
use crate::types::SectionLabel;

const MONTHS: &str = "Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Oct|Nov|Dec|January|February|March|April|May|June|July|August|September|October|November|December";

static YEAR_RANGE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(?:19|20)\d{2}\b.*?(?:Present|(?:19|20)\d{2})").unwrap()
});

static MONTH_RANGE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"(?i)\b(?:{MONTHS})\s+(?:19|20)\d{{2}}\b.*?(?:Present|(?:{MONTHS})\s+(?:19|20)\d{{2}})"
    ))
    .unwrap()
});

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b[\w.+-]+@[\w.-]+\.[A-Za-z]{2,}\b").unwrap());

static PHONE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b\+?\d[\d\s\-()]{6,}\b").unwrap());

static LOCATION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b([A-Z][a-zA-Z]+),\s*([A-Z][a-zA-Z]+)\b").unwrap());

/// Year followed later in the line by "Present" or another year.
pub fn matches_year_range(line: &str) -> bool {
    YEAR_RANGE_RE.is_match(line)
}

/// Month + year followed later by "Present" or another month + year.
pub fn matches_month_range(line: &str) -> bool {
    MONTH_RANGE_RE.is_match(line)
}

/// Either date-range form qualifies.
pub fn is_date_range(line: &str) -> bool {
    matches_year_range(line) || matches_month_range(line)
}

pub fn find_email(text: &str) -> Option<&str> {
    EMAIL_RE.find(text).map(|m| m.as_str())
}

/// First phone-shaped run, whitespace-normalized.
pub fn find_phone(text: &str) -> Option<String> {
    PHONE_RE
        .find(text)
        .map(|m| m.as_str().split_whitespace().collect::<Vec<_>>().join(" "))
        .filter(|phone| !phone.is_empty())
}

/// First "City, Region" pair of capitalized words.
pub fn find_location(text: &str) -> Option<String> {
    LOCATION_RE
        .captures(text)
        .map(|caps| format!("{}, {}", &caps[1], &caps[2]))
}

/// Compiled vocabulary matchers for one parsing run.
#[derive(Debug, Clone)]
pub struct PatternSet {
    heading_re: Regex,
    degree_re: Regex,
    strip_words_re: Option<Regex>,
    section_rules: Vec<SectionRule>,
    pub contact_scan_lines: usize,
    pub summary_max_lines: usize,
}

impl PatternSet {
    pub fn from_config(config: &ParsingConfig) -> Result<Self> {
        let headings = non_empty_alternation("headings", &config.headings)?;
        let degrees = non_empty_alternation("degree_words", &config.degree_words)?;
        let strip_words = alternation(&config.summary_strip_words);

        let heading_re = compile(&format!(r"(?i)^\s*(?:{headings})\s*$"))?;
        let degree_re = compile(&format!(r"(?i)(?:{degrees})"))?;
        let strip_words_re = if strip_words.is_empty() {
            None
        } else {
            Some(compile(&format!(r"(?i)\b(?:{strip_words})\b"))?)
        };

        Ok(Self {
            heading_re,
            degree_re,
            strip_words_re,
            section_rules: config.section_rules.clone(),
            contact_scan_lines: config.contact_scan_lines,
            summary_max_lines: config.summary_max_lines,
        })
    }

    /// Whole-line match against the heading vocabulary.
    pub fn is_heading(&self, line: &str) -> bool {
        self.heading_re.is_match(line)
    }

    /// Canonical label for a heading line. Rules are tried in priority order.
    ///
    /// Returns `None` for non-headings and for headings no rule covers.
    pub fn classify_heading(&self, line: &str) -> Option<SectionLabel> {
        if !self.is_heading(line) {
            return None;
        }
        let key = line.to_lowercase();
        self.section_rules
            .iter()
            .find(|rule| rule.matches(&key))
            .map(|rule| rule.label)
    }

    pub fn is_degree(&self, line: &str) -> bool {
        self.degree_re.is_match(line)
    }

    /// Remove contact tokens and link labels from summary text.
    pub fn clean_summary(&self, text: &str) -> String {
        let mut cleaned = match &self.strip_words_re {
            Some(re) => re.replace_all(text, "").into_owned(),
            None => text.to_string(),
        };
        cleaned = PHONE_RE.replace_all(&cleaned, "").into_owned();
        cleaned = EMAIL_RE.replace_all(&cleaned, "").into_owned();
        cleaned.split_whitespace().collect::<Vec<_>>().join(" ")
    }
}

impl Default for PatternSet {
    fn default() -> Self {
        // The built-in vocabulary is fixed and always compiles.
        Self::from_config(&ParsingConfig::default()).unwrap()
    }
}

fn alternation(words: &[String]) -> String {
    words
        .iter()
        .map(|w| w.trim())
        .filter(|w| !w.is_empty())
        .map(regex::escape)
        .collect::<Vec<_>>()
        .join("|")
}

fn non_empty_alternation(name: &str, words: &[String]) -> Result<String> {
    let joined = alternation(words);
    if joined.is_empty() {
        return Err(CvError::Config(format!("{name} vocabulary is empty")));
    }
    Ok(joined)
}

fn compile(pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|e| CvError::Config(format!("invalid pattern {pattern:?}: {e}")))
}
