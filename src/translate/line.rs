//! Raw text splitting and header line parsing.

/// A `Name: Value` pair taken from one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderLine<'a> {
    pub name: &'a str,
    pub value: &'a str,
}

impl<'a> HeaderLine<'a> {
    /// Parse a single line.
    ///
    /// Returns `None` unless the line holds exactly one `:`. Only leading
    /// space characters are trimmed from the value; the name is kept as is.
    pub fn parse(line: &'a str) -> Option<Self> {
        let (name, value) = line.split_once(':')?;
        if value.contains(':') {
            return None;
        }
        Some(Self {
            name,
            value: value.trim_start_matches(' '),
        })
    }

    /// The name with every `-` removed, used for known-table lookups.
    pub fn stripped_name(&self) -> String {
        self.name.replace('-', "")
    }
}

/// Split text on `\r\n` or `\n`, skipping empty segments.
///
/// A `\r` is only part of a separator when a `\n` follows it; a trailing
/// `\r` stays in the last segment.
pub fn split_lines(text: &str) -> impl Iterator<Item = &str> {
    text.split_inclusive('\n')
        .map(|line| {
            line.strip_suffix("\r\n")
                .or_else(|| line.strip_suffix('\n'))
                .unwrap_or(line)
        })
        .filter(|line| !line.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_header_line() {
        let line = HeaderLine::parse("Content-Type:   text/html").unwrap();
        assert_eq!(line.name, "Content-Type");
        assert_eq!(line.value, "text/html");
        assert_eq!(line.stripped_name(), "ContentType");
    }

    #[test]
    fn test_parse_keeps_other_whitespace() {
        let line = HeaderLine::parse(" Accept :\tgzip ").unwrap();
        assert_eq!(line.name, " Accept ");
        assert_eq!(line.value, "\tgzip ");
    }

    #[test]
    fn test_parse_rejects_colon_count() {
        assert!(HeaderLine::parse("no colon here").is_none());
        assert!(HeaderLine::parse("Referer: https://example.com").is_none());
        assert!(HeaderLine::parse("::").is_none());
    }

    #[test]
    fn test_parse_empty_parts() {
        let line = HeaderLine::parse(":").unwrap();
        assert_eq!(line.name, "");
        assert_eq!(line.value, "");
    }

    #[test]
    fn test_split_lines() {
        let lines: Vec<_> = split_lines("a\r\nb\n\r\n\nc\r\n").collect();
        assert_eq!(lines, vec!["a", "b", "c"]);

        // A lone carriage return is not a separator.
        let lines: Vec<_> = split_lines("a\rb\r\r\n").collect();
        assert_eq!(lines, vec!["a\rb\r"]);

        // Nor is one at the very end of the text.
        let lines: Vec<_> = split_lines("X-A: 1\r").collect();
        assert_eq!(lines, vec!["X-A: 1\r"]);

        let lines: Vec<_> = split_lines("X-A: 1\n\r").collect();
        assert_eq!(lines, vec!["X-A: 1", "\r"]);

        assert_eq!(split_lines("\r").collect::<Vec<_>>(), vec!["\r"]);

        assert_eq!(split_lines("").count(), 0);
    }
}
