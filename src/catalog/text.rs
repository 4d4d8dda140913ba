//! Catalog records and the line format
//!
//! Each catalog line is `level||title||content`.

/// Field separator within a catalog line
pub const DELIMITER: &str = "||";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Text {
    /// Level tag as written in the file; unknown tags are kept and simply
    /// never match a level filter.
    pub level: String,
    pub title: String,
    pub content: String,
}

/// Parses one catalog line. Returns `None` for blank lines and for lines
/// that do not split into exactly three fields, including content that
/// itself contains the delimiter.
pub fn parse_line(line: &str) -> Option<Text> {
    let line = line.trim();
    if line.is_empty() {
        return None;
    }

    let parts: Vec<&str> = line.split(DELIMITER).collect();
    match parts.as_slice() {
        [level, title, content] => Some(Text {
            level: level.trim().to_string(),
            title: title.trim().to_string(),
            content: content.trim().to_string(),
        }),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic_line() {
        assert_eq!(
            parse_line("B1||Titel||Some content"),
            Some(Text {
                level: "B1".to_string(),
                title: "Titel".to_string(),
                content: "Some content".to_string(),
            })
        );
    }

    #[test]
    fn test_parse_trims_line_and_fields() {
        let text = parse_line("  A1 || Titel A1-1 ||  Hallo! Ich heiße Anna.  \r").unwrap();
        assert_eq!(text.level, "A1");
        assert_eq!(text.title, "Titel A1-1");
        assert_eq!(text.content, "Hallo! Ich heiße Anna.");
    }

    #[test]
    fn test_too_few_fields_dropped() {
        assert_eq!(parse_line("B1||Titel"), None);
        assert_eq!(parse_line("B1 Titel Some content"), None);
        assert_eq!(parse_line("B1|Titel|Some content"), None);
    }

    #[test]
    fn test_blank_line_dropped() {
        assert_eq!(parse_line(""), None);
        assert_eq!(parse_line("   \t"), None);
    }

    #[test]
    fn test_delimiter_in_content_drops_line() {
        assert_eq!(parse_line("B1||Titel||eins||zwei"), None);
    }

    #[test]
    fn test_empty_fields_are_kept() {
        let text = parse_line("C1||||").unwrap();
        assert_eq!(text.level, "C1");
        assert!(text.title.is_empty());
        assert!(text.content.is_empty());
    }
}
