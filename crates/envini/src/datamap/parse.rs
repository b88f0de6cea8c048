//! Line classification for the INI scanner.
//!
//! Responsibilities:
//! - Classify one logical line as blank, comment, section header, or key/value.
//! - Extract the section name, comment text, key, and quote-stripped value.
//!
//! Does NOT handle:
//! - Splitting the buffer into lines or tracking offsets (see `DataMap::parse_bytes`).
//! - Deciding whether a classified line is an error (the caller owns that).

/// One classified logical line, borrowing from the line text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Line<'a> {
    Blank,
    Comment(&'a str),
    Section(&'a str),
    KeyValue {
        key: &'a str,
        value: &'a str,
        /// False when the line had no `=`; the whole line is then the key.
        has_separator: bool,
    },
}

/// Classify a raw line (with `\r` already removed) by its first non-space character.
pub(crate) fn classify(raw: &str) -> Line<'_> {
    let line = raw.trim();
    let Some(first) = line.chars().next() else {
        return Line::Blank;
    };

    match first {
        '#' | ';' => Line::Comment(line[first.len_utf8()..].trim()),
        '[' => Line::Section(section_name(line)),
        _ => match line.split_once('=') {
            Some((key, value)) => Line::KeyValue {
                key: key.trim(),
                value: strip_quotes(value.trim()),
                has_separator: true,
            },
            None => Line::KeyValue {
                key: line,
                value: "",
                has_separator: false,
            },
        },
    }
}

/// Text between the first `[` and the last `]`, trimmed.
///
/// A header without a closing bracket runs to the end of the line.
fn section_name(line: &str) -> &str {
    let inner = &line[1..];
    let inner = match inner.rfind(']') {
        Some(end) => &inner[..end],
        None => inner,
    };
    inner.trim()
}

/// Remove at most one leading and one trailing double quote.
pub(crate) fn strip_quotes(value: &str) -> &str {
    let value = value.strip_prefix('"').unwrap_or(value);
    value.strip_suffix('"').unwrap_or(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_and_whitespace_lines_are_blank() {
        assert_eq!(classify(""), Line::Blank);
        assert_eq!(classify("   \t "), Line::Blank);
    }

    #[test]
    fn test_hash_and_semicolon_start_comments() {
        assert_eq!(classify("# hello "), Line::Comment("hello"));
        assert_eq!(classify("  ;other"), Line::Comment("other"));
        assert_eq!(classify("#"), Line::Comment(""));
    }

    #[test]
    fn test_section_header_is_trimmed_inside_brackets() {
        assert_eq!(classify("[ Book of Numbers ]"), Line::Section("Book of Numbers"));
        assert_eq!(classify("[Context]  "), Line::Section("Context"));
    }

    #[test]
    fn test_section_header_uses_last_closing_bracket() {
        assert_eq!(classify("[a]b]"), Line::Section("a]b"));
        assert_eq!(classify("[unterminated"), Line::Section("unterminated"));
    }

    #[test]
    fn test_key_value_splits_on_first_equals_only() {
        assert_eq!(
            classify("url = a=b=c"),
            Line::KeyValue {
                key: "url",
                value: "a=b=c",
                has_separator: true
            }
        );
    }

    #[test]
    fn test_key_without_equals_has_empty_value() {
        assert_eq!(
            classify("  lonely key "),
            Line::KeyValue {
                key: "lonely key",
                value: "",
                has_separator: false
            }
        );
    }

    #[test]
    fn test_strip_quotes_removes_one_layer() {
        assert_eq!(strip_quotes("\"hello world\""), "hello world");
        assert_eq!(strip_quotes("\"\"nested\"\""), "\"nested\"");
        assert_eq!(strip_quotes("\"open"), "open");
        assert_eq!(strip_quotes("close\""), "close");
        assert_eq!(strip_quotes("\""), "");
        assert_eq!(strip_quotes("plain"), "plain");
    }

    #[test]
    fn test_quotes_are_stripped_after_trimming() {
        assert_eq!(
            classify("k =   \" padded \"  "),
            Line::KeyValue {
                key: "k",
                value: " padded ",
                has_separator: true
            }
        );
    }
}
