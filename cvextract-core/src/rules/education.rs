use tracing::debug;

use super::patterns::{matches_year_range, PatternSet};
use super::window::Window;
use crate::types::{EducationItem, SectionIndex, SectionLabel};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    SeekingAnchor,
    ConsumingInstitution,
    ConsumingField,
}

/// Cursor-based scanner anchored on degree-keyword lines.
pub struct EducationScanner<'a> {
    lines: &'a [String],
    patterns: &'a PatternSet,
    window: Window,
    cursor: usize,
    state: ScanState,
    current: EducationItem,
    items: Vec<EducationItem>,
}

impl<'a> EducationScanner<'a> {
    pub fn new(lines: &'a [String], patterns: &'a PatternSet, window: Window) -> Self {
        let window = Window::new(window.start, window.end.min(lines.len()));
        Self {
            lines,
            patterns,
            window,
            cursor: window.start,
            state: ScanState::SeekingAnchor,
            current: EducationItem::default(),
            items: Vec::new(),
        }
    }

    pub fn scan(mut self) -> Vec<EducationItem> {
        loop {
            let line = self.peek();
            match self.state {
                ScanState::SeekingAnchor => {
                    let Some(line) = line else { break };
                    if self.patterns.is_degree(line) {
                        self.current.degree = line.to_string();
                        self.state = ScanState::ConsumingInstitution;
                    }
                    self.cursor += 1;
                }
                ScanState::ConsumingInstitution => {
                    if let Some(line) = line.filter(|l| !self.patterns.is_heading(l)) {
                        self.current.institution = line.to_string();
                        self.cursor += 1;
                    }
                    self.state = ScanState::ConsumingField;
                }
                ScanState::ConsumingField => {
                    if let Some(line) = line
                        .filter(|l| !self.patterns.is_heading(l) && !matches_year_range(l))
                    {
                        self.current.field = line.to_string();
                        self.cursor += 1;
                    }
                    self.finish_item();
                }
            }
        }
        self.items
    }

    fn peek(&self) -> Option<&'a str> {
        let lines: &'a [String] = self.lines;
        if self.window.contains(self.cursor) {
            Some(lines[self.cursor].as_str())
        } else {
            None
        }
    }

    fn finish_item(&mut self) {
        let item = std::mem::take(&mut self.current);
        debug!(
            "🎓 Education item: {:?} / {:?} / {:?}",
            item.degree, item.institution, item.field
        );
        self.items.push(item);
        self.state = ScanState::SeekingAnchor;
    }
}

/// Extract education items from the education section, falling back to a
/// whole-document scan for degree keywords.
pub fn extract_education(
    lines: &[String],
    sections: &SectionIndex,
    patterns: &PatternSet,
) -> Vec<EducationItem> {
    let window = Window::for_section(SectionLabel::Education, sections, lines.len());
    EducationScanner::new(lines, patterns, window).scan()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::section_locator::find_section_indices;

    fn doc(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    fn education_of(raw: &[&str]) -> Vec<EducationItem> {
        let lines = doc(raw);
        let patterns = PatternSet::default();
        let sections = find_section_indices(&lines, &patterns);
        extract_education(&lines, &sections, &patterns)
    }

    #[test]
    fn test_degree_institution_and_date_line() {
        let items = education_of(&["Education", "Bachelor of Science", "MIT", "2016 - 2020"]);
        assert_eq!(
            items,
            vec![EducationItem {
                degree: "Bachelor of Science".to_string(),
                field: String::new(),
                institution: "MIT".to_string(),
            }]
        );
    }

    #[test]
    fn test_degree_with_field_line() {
        let items = education_of(&[
            "Education",
            "MSc",
            "University of Edinburgh",
            "Artificial Intelligence",
            "BSc",
            "University of Leeds",
            "Physics",
        ]);
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].field, "Artificial Intelligence");
        assert_eq!(items[1].degree, "BSc");
        assert_eq!(items[1].institution, "University of Leeds");
        assert_eq!(items[1].field, "Physics");
    }

    #[test]
    fn test_heading_stops_institution_and_field() {
        let lines = doc(&["PhD Chemistry", "Experience", "2019 - 2020"]);
        let patterns = PatternSet::default();
        let items = EducationScanner::new(&lines, &patterns, Window::new(0, 3)).scan();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].institution, "");
        assert_eq!(items[0].field, "");
    }

    #[test]
    fn test_window_ending_after_degree() {
        let lines = doc(&["Master of Arts"]);
        let patterns = PatternSet::default();
        let items = EducationScanner::new(&lines, &patterns, Window::new(0, 1)).scan();
        assert_eq!(items[0].degree, "Master of Arts");
        assert_eq!(items[0].institution, "");
    }

    #[test]
    fn test_global_scan_without_education_heading() {
        let items = education_of(&["Jane Roe", "Associate Degree", "Community College"]);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].institution, "Community College");
    }

    #[test]
    fn test_no_degree_keywords_yields_nothing() {
        let items = education_of(&["Education", "Harvard University", "Graduated 2012"]);
        assert!(items.is_empty());
    }
}
