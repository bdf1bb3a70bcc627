//! Experience segmentation.
//!
//! A greedy, non-overlapping forward scan over the experience window. Each
//! item is anchored on a date-range line and then grows through title,
//! company and description states until a boundary line or the window end.

use tracing::debug;

use super::patterns::{is_date_range, matches_month_range, matches_year_range, PatternSet};
use super::window::Window;
use crate::types::{ExperienceItem, SectionIndex, SectionLabel};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    SeekingAnchor,
    ConsumingTitle,
    ConsumingCompany,
    ConsumingDescription,
}

/// Cursor-based scanner over one window of lines.
pub struct ExperienceScanner<'a> {
    lines: &'a [String],
    patterns: &'a PatternSet,
    window: Window,
    cursor: usize,
    state: ScanState,
    current: ExperienceItem,
    description: Vec<&'a str>,
    items: Vec<ExperienceItem>,
}

impl<'a> ExperienceScanner<'a> {
    pub fn new(lines: &'a [String], patterns: &'a PatternSet, window: Window) -> Self {
        let window = Window::new(window.start, window.end.min(lines.len()));
        Self {
            lines,
            patterns,
            window,
            cursor: window.start,
            state: ScanState::SeekingAnchor,
            current: ExperienceItem::default(),
            description: Vec::new(),
            items: Vec::new(),
        }
    }

    pub fn scan(mut self) -> Vec<ExperienceItem> {
        loop {
            let line = self.peek();
            match self.state {
                ScanState::SeekingAnchor => {
                    let Some(line) = line else { break };
                    if is_date_range(line) {
                        self.current.period = line.to_string();
                        self.state = ScanState::ConsumingTitle;
                    }
                    self.cursor += 1;
                }
                ScanState::ConsumingTitle => {
                    if let Some(line) = line {
                        self.current.title = line.to_string();
                        self.cursor += 1;
                    }
                    self.state = ScanState::ConsumingCompany;
                }
                ScanState::ConsumingCompany => {
                    if let Some(line) = line {
                        if !matches_year_range(line) && !self.patterns.is_heading(line) {
                            self.current.company = line.to_string();
                            self.cursor += 1;
                        }
                    }
                    self.state = ScanState::ConsumingDescription;
                }
                ScanState::ConsumingDescription => match line {
                    Some(line) if !self.is_item_boundary(line) => {
                        self.description.push(line);
                        self.cursor += 1;
                    }
                    _ => self.finish_item(),
                },
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

    fn is_item_boundary(&self, line: &str) -> bool {
        matches_year_range(line) || matches_month_range(line) || self.patterns.is_heading(line)
    }

    fn finish_item(&mut self) {
        let mut item = std::mem::take(&mut self.current);
        item.description = self.description.join(" ");
        self.description.clear();
        debug!(
            "💼 Experience item: {:?} / {:?} / {:?}",
            item.period, item.title, item.company
        );
        self.items.push(item);
        self.state = ScanState::SeekingAnchor;
    }
}

/// Extract experience items from the experience section, or from the whole
/// document when no experience heading was located.
///
/// The whole-document fallback treats any date-shaped line as an anchor and
/// can pick up unrelated entries; that trade-off is accepted.
pub fn extract_experience(
    lines: &[String],
    sections: &SectionIndex,
    patterns: &PatternSet,
) -> Vec<ExperienceItem> {
    let window = Window::for_section(SectionLabel::Experience, sections, lines.len());
    ExperienceScanner::new(lines, patterns, window).scan()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::section_locator::find_section_indices;

    fn doc(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    fn experience_of(raw: &[&str]) -> Vec<ExperienceItem> {
        let lines = doc(raw);
        let patterns = PatternSet::default();
        let sections = find_section_indices(&lines, &patterns);
        extract_experience(&lines, &sections, &patterns)
    }

    #[test]
    fn test_full_item() {
        let items = experience_of(&[
            "Experience",
            "2020 - Present",
            "Senior Engineer",
            "Acme Corp",
            "Built things.",
            "Shipped more things.",
            "Education",
        ]);
        assert_eq!(
            items,
            vec![ExperienceItem {
                period: "2020 - Present".to_string(),
                title: "Senior Engineer".to_string(),
                company: "Acme Corp".to_string(),
                description: "Built things. Shipped more things.".to_string(),
            }]
        );
    }

    #[test]
    fn test_consecutive_items_do_not_overlap() {
        let items = experience_of(&[
            "Work Experience",
            "Jan 2021 - Present",
            "Staff Engineer",
            "Globex",
            "Led platform team.",
            "2017 - 2020",
            "Engineer",
            "Initech",
            "Wrote reports.",
        ]);
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].description, "Led platform team.");
        assert_eq!(items[1].period, "2017 - 2020");
        assert_eq!(items[1].company, "Initech");
    }

    #[test]
    fn test_date_line_after_title_leaves_company_empty() {
        let items = experience_of(&[
            "Experience",
            "2019 - 2020",
            "Contractor",
            "2018 - 2019",
            "Intern",
        ]);
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].title, "Contractor");
        assert_eq!(items[0].company, "");
        assert_eq!(items[0].description, "");
        assert_eq!(items[1].period, "2018 - 2019");
        assert_eq!(items[1].title, "Intern");
    }

    #[test]
    fn test_window_ending_after_period() {
        let lines = doc(&["2015 - 2016", "Analyst", "Ignored"]);
        let patterns = PatternSet::default();
        let items = ExperienceScanner::new(&lines, &patterns, Window::new(0, 1)).scan();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].period, "2015 - 2016");
        assert_eq!(items[0].title, "");
        assert_eq!(items[0].company, "");
    }

    #[test]
    fn test_window_ending_after_title() {
        let lines = doc(&["2015 - 2016", "Analyst", "Ignored"]);
        let patterns = PatternSet::default();
        let items = ExperienceScanner::new(&lines, &patterns, Window::new(0, 2)).scan();
        assert_eq!(items[0].title, "Analyst");
        assert_eq!(items[0].company, "");
    }

    #[test]
    fn test_title_is_taken_even_when_heading() {
        let lines = doc(&["2015 - 2016", "Education", "MIT"]);
        let patterns = PatternSet::default();
        let items = ExperienceScanner::new(&lines, &patterns, Window::new(0, 3)).scan();
        assert_eq!(items[0].title, "Education");
        assert_eq!(items[0].company, "MIT");
    }

    #[test]
    fn test_no_dates_yields_no_items() {
        let items = experience_of(&["Experience", "Engineer", "Acme", "Did things"]);
        assert!(items.is_empty());
    }

    #[test]
    fn test_global_scan_without_experience_heading() {
        let items = experience_of(&[
            "Jane Roe",
            "2018 - 2022",
            "Researcher",
            "Lab",
            "Education",
            "PhD Biology",
        ]);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].title, "Researcher");
        assert_eq!(items[0].company, "Lab");
        assert_eq!(items[0].description, "");
    }

    #[test]
    fn test_experience_window_after_summary_section() {
        let items = experience_of(&[
            "Summary",
            "Engineer.",
            "Experience",
            "2021 - Present",
            "Lead",
            "Acme",
            "Education",
            "2010 - 2014",
        ]);
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].period, "2021 - Present");
    }
}
