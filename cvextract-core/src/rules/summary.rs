use tracing::debug;

use super::patterns::PatternSet;
use super::window::Window;
use crate::types::{SectionIndex, SectionLabel};

/// Extract the résumé summary paragraph.
///
/// With a located summary heading the paragraph follows it; otherwise the
/// lines before the first located heading are used. Either way accumulation
/// stops at any heading line and keeps at most `summary_max_lines` lines.
pub fn extract_summary(lines: &[String], sections: &SectionIndex, patterns: &PatternSet) -> String {
    let window = summary_window(lines.len(), sections);
    debug!(
        "📝 Summary window {}..{} ({} mode)",
        window.start,
        window.end,
        if sections.contains(SectionLabel::Summary) {
            "explicit"
        } else {
            "fallback"
        }
    );

    let paragraph: Vec<&str> = lines[window.start..window.end]
        .iter()
        .take_while(|line| !patterns.is_heading(line))
        .take(patterns.summary_max_lines)
        .map(String::as_str)
        .collect();

    if paragraph.is_empty() {
        return String::new();
    }
    patterns.clean_summary(&paragraph.join(" "))
}

fn summary_window(len: usize, sections: &SectionIndex) -> Window {
    match sections.get(SectionLabel::Summary) {
        Some(_) => Window::for_section(SectionLabel::Summary, sections, len),
        None => Window::new(0, sections.first_heading().unwrap_or(len)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::section_locator::find_section_indices;

    fn summary_of(raw: &[&str]) -> String {
        let doc: Vec<String> = raw.iter().map(|s| s.to_string()).collect();
        let patterns = PatternSet::default();
        let sections = find_section_indices(&doc, &patterns);
        extract_summary(&doc, &sections, &patterns)
    }

    #[test]
    fn test_explicit_summary_section() {
        let summary = summary_of(&[
            "Jane Roe",
            "Summary",
            "Backend engineer with ten years",
            "of distributed systems work.",
            "Experience",
            "2020 - Present",
        ]);
        assert_eq!(
            summary,
            "Backend engineer with ten years of distributed systems work."
        );
    }

    #[test]
    fn test_explicit_summary_stops_at_unclassified_heading() {
        let summary = summary_of(&["About", "Curious builder.", "Employment", "Acme"]);
        assert_eq!(summary, "Curious builder.");
    }

    #[test]
    fn test_explicit_summary_capped_at_six_lines() {
        let summary = summary_of(&["Profile", "a1", "a2", "a3", "a4", "a5", "a6", "a7", "a8"]);
        assert_eq!(summary, "a1 a2 a3 a4 a5 a6");
    }

    #[test]
    fn test_fallback_uses_lines_before_first_heading() {
        let summary = summary_of(&[
            "Jane Roe",
            "Platform engineer",
            "Education",
            "BSc Physics",
        ]);
        assert_eq!(summary, "Jane Roe Platform engineer");
    }

    #[test]
    fn test_fallback_without_any_heading_strips_contact_tokens() {
        let summary = summary_of(&[
            "Jane Roe",
            "jane@roe.dev",
            "Github LinkedIn",
            "Data engineer",
            "Likes pipelines",
            "Lives online",
            "Seventh line is dropped",
        ]);
        assert_eq!(summary, "Jane Roe Data engineer Likes pipelines Lives online");
    }

    #[test]
    fn test_empty_summary_heading_yields_empty_string() {
        let summary = summary_of(&["Summary", "Experience", "2019 - 2020"]);
        assert_eq!(summary, "");
    }

    #[test]
    fn test_document_starting_with_heading_has_empty_fallback() {
        let summary = summary_of(&["Experience", "2019 - 2020", "Engineer"]);
        assert_eq!(summary, "");
    }
}
