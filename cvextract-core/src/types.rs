use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

// ===== SECTION TYPES =====

/// Canonical résumé section a heading line can be classified as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SectionLabel {
    Summary,
    Experience,
    Education,
}

impl SectionLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionLabel::Summary => "summary",
            SectionLabel::Experience => "experience",
            SectionLabel::Education => "education",
        }
    }
}

impl fmt::Display for SectionLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Index of the first heading line for each located section.
///
/// At most one entry per label; the first matching heading wins.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SectionIndex {
    entries: BTreeMap<SectionLabel, usize>,
}

impl SectionIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `index` for `label` unless the label was already seen.
    pub fn record_first(&mut self, label: SectionLabel, index: usize) {
        self.entries.entry(label).or_insert(index);
    }

    pub fn get(&self, label: SectionLabel) -> Option<usize> {
        self.entries.get(&label).copied()
    }

    pub fn contains(&self, label: SectionLabel) -> bool {
        self.entries.contains_key(&label)
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Earliest located heading of any label.
    pub fn first_heading(&self) -> Option<usize> {
        self.entries.values().copied().min()
    }

    /// Earliest heading of a label other than `label` that starts after `after`.
    pub fn next_heading_after(&self, label: SectionLabel, after: usize) -> Option<usize> {
        self.iter()
            .filter(|(other, idx)| *other != label && *idx > after)
            .map(|(_, idx)| idx)
            .min()
    }

    pub fn iter(&self) -> impl Iterator<Item = (SectionLabel, usize)> + '_ {
        self.entries.iter().map(|(label, idx)| (*label, *idx))
    }
}

// ===== RECORD TYPES =====

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub email: String,
    pub phone: String,
    pub location: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExperienceItem {
    /// Always a line that matched a date-range pattern
    pub period: String,
    pub title: String,
    pub company: String,
    pub description: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EducationItem {
    /// Always a line containing a degree keyword
    pub degree: String,
    pub field: String,
    pub institution: String,
}

/// Final structured résumé record.
///
/// Field order here is the serialized field order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResumeRecord {
    pub summary: String,
    pub experience: Vec<ExperienceItem>,
    pub education: Vec<EducationItem>,
    pub contact: ContactInfo,
}

/// Captured intermediate outputs from each pipeline stage
/// Used for diagnostics — lets you inspect each boundary
#[derive(Debug, Clone, Serialize)]
pub struct PipelineStages {
    pub raw_text: String,
    pub lines: Vec<String>,
    pub sections: SectionIndex,
    pub record: ResumeRecord,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_section_index_keeps_first_occurrence() {
        let mut idx = SectionIndex::new();
        idx.record_first(SectionLabel::Experience, 3);
        idx.record_first(SectionLabel::Experience, 9);
        assert_eq!(idx.get(SectionLabel::Experience), Some(3));
        assert_eq!(idx.len(), 1);
    }

    #[test]
    fn test_next_heading_after_skips_earlier_and_own_label() {
        let mut idx = SectionIndex::new();
        idx.record_first(SectionLabel::Summary, 0);
        idx.record_first(SectionLabel::Experience, 4);
        idx.record_first(SectionLabel::Education, 12);
        assert_eq!(idx.next_heading_after(SectionLabel::Experience, 4), Some(12));
        assert_eq!(idx.next_heading_after(SectionLabel::Education, 12), None);
        assert_eq!(idx.first_heading(), Some(0));
    }

    #[test]
    fn test_section_index_serializes_as_label_map() {
        let mut idx = SectionIndex::new();
        idx.record_first(SectionLabel::Education, 7);
        let json = serde_json::to_value(&idx).unwrap();
        assert_eq!(json, serde_json::json!({ "education": 7 }));
    }
}
