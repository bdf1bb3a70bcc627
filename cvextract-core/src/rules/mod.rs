// Heuristic résumé rules - delegates to semantic sub-modules:
// - patterns.rs: line-level matchers and the compiled vocabulary
// - section_locator.rs: heading detection and canonical section indices
// - window.rs: section-bounded scan windows
// - contact.rs, summary.rs, experience.rs, education.rs: segment extractors

pub mod contact;
pub mod education;
pub mod experience;
pub mod patterns;
pub mod section_locator;
pub mod summary;
pub mod window;

pub use contact::extract_contact;
pub use education::{extract_education, EducationScanner};
pub use experience::{extract_experience, ExperienceScanner};
pub use patterns::PatternSet;
pub use section_locator::find_section_indices;
pub use summary::extract_summary;
pub use window::Window;
