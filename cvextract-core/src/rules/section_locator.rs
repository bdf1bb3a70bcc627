use tracing::debug;

use super::patterns::PatternSet;
use crate::types::SectionIndex;

/// Locate the first heading line of each canonical section.
///
/// A single forward pass; later headings of an already-located label are
/// ignored. Headings no rule classifies record nothing.
pub fn find_section_indices(lines: &[String], patterns: &PatternSet) -> SectionIndex {
    let mut sections = SectionIndex::new();
    for (i, line) in lines.iter().enumerate() {
        if let Some(label) = patterns.classify_heading(line) {
            if !sections.contains(label) {
                debug!("📑 Section '{label}' starts at line {i}: {line:?}");
            }
            sections.record_first(label, i);
        }
    }
    sections
}
