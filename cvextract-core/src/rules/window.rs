use crate::types::{SectionIndex, SectionLabel};

/// Half-open line-index range an extractor may scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Window {
    pub start: usize,
    pub end: usize,
}

impl Window {
    pub fn new(start: usize, end: usize) -> Self {
        Self {
            start,
            end: end.max(start),
        }
    }

    /// Lines after the section's heading up to the next located heading of a
    /// different section, or the whole document when the section is absent.
    ///
    /// Headings located before the anchor never close its window.
    pub fn for_section(label: SectionLabel, sections: &SectionIndex, len: usize) -> Self {
        match sections.get(label) {
            Some(heading) => Self::new(
                heading + 1,
                sections.next_heading_after(label, heading).unwrap_or(len),
            ),
            None => Self::new(0, len),
        }
    }

    pub fn contains(&self, index: usize) -> bool {
        index >= self.start && index < self.end
    }

    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }
}
