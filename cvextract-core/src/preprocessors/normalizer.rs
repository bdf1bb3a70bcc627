// Line normalization: raw extracted text -> ordered, non-empty, trimmed lines

/// Typographic dashes folded to ASCII hyphen before splitting.
const DASH_VARIANTS: [char; 8] = [
    '\u{2010}', '\u{2011}', '\u{2012}', '\u{2013}', '\u{2014}', '\u{2015}', '\u{2212}', '\u{FE58}',
];

/// Line boundaries recognised when splitting extracted text.
fn is_line_boundary(c: char) -> bool {
    matches!(
        c,
        '\n' | '\r' | '\u{0B}' | '\u{0C}' | '\u{1C}' | '\u{1D}' | '\u{1E}' | '\u{85}' | '\u{2028}'
            | '\u{2029}'
    )
}

/// Unicode whitespace plus the unit separator, which PDF text layers
/// occasionally emit between words.
fn is_inline_space(c: char) -> bool {
    c.is_whitespace() || c == '\u{1F}'
}

/// Normalize raw text into document-ordered lines.
///
/// Every returned line is trimmed, has no run of more than one space and is
/// never empty.
pub fn normalize_text(text: &str) -> Vec<String> {
    let text: String = text
        .chars()
        .map(|c| if DASH_VARIANTS.contains(&c) { '-' } else { c })
        .collect();

    text.split(is_line_boundary)
        .map(|line| {
            line.split(is_inline_space)
                .filter(|word| !word.is_empty())
                .collect::<Vec<_>>()
                .join(" ")
        })
        .filter(|line| !line.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dashes_are_folded() {
        let lines = normalize_text("2019 \u{2013} 2021\nJan 2020 \u{2014} Present");
        assert_eq!(lines, vec!["2019 - 2021", "Jan 2020 - Present"]);
    }

    #[test]
    fn test_blank_lines_dropped_and_order_kept() {
        let lines = normalize_text("\n\n  First  \r\n\r\n\t\nSecond\u{0C}Third\n   \n");
        assert_eq!(lines, vec!["First", "Second", "Third"]);
    }

    #[test]
    fn test_internal_whitespace_collapsed() {
        let lines = normalize_text("Senior \t  Engineer\u{00A0}\u{00A0}at   Acme");
        assert_eq!(lines, vec!["Senior Engineer at Acme"]);
    }

    #[test]
    fn test_unit_separator_is_whitespace() {
        let lines = normalize_text("Staff\u{1F}Engineer\n\u{1F}\u{1F}\nAcme \u{1F} Corp");
        assert_eq!(lines, vec!["Staff Engineer", "Acme Corp"]);
    }

    #[test]
    fn test_no_empty_or_double_spaced_lines() {
        let samples = [
            "",
            "   \n\t\n",
            "a  b\n\nc   d  e\r\n  f",
            "\u{2028}x\u{2029}  y  \u{85}z",
        ];
        for sample in samples {
            for line in normalize_text(sample) {
                assert!(!line.is_empty());
                assert!(!line.contains("  "), "double space in {line:?}");
                assert_eq!(line.trim(), line);
            }
        }
    }
}
