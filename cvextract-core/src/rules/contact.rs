use super::patterns::{find_email, find_location, find_phone, PatternSet};
use crate::types::ContactInfo;

/// Search the leading lines of the document for email, phone and location.
///
/// Each field is found independently; a miss leaves it empty.
pub fn extract_contact(lines: &[String], patterns: &PatternSet) -> ContactInfo {
    let take = patterns.contact_scan_lines.min(lines.len());
    let text = lines[..take].join(" \n");

    ContactInfo {
        email: find_email(&text).map(str::to_string).unwrap_or_default(),
        phone: find_phone(&text).unwrap_or_default(),
        location: find_location(&text).unwrap_or_default(),
    }
}
