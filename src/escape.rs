use crate::consts::{ESCAPE_CHAR, PLACEHOLDERS};

/// Escapes the given string so it can be used inside a format call
/// without triggering substitution.
///
/// For example: the string "Today" contains both the `d` and `y`
/// placeholders, which would normally be expanded to the day and year
/// respectively. This function puts a backslash in front of every
/// placeholder letter so no expansions are applied.
pub fn escape(subject: &str) -> String {
    let mut output = String::with_capacity(subject.len());
    for c in subject.chars() {
        if PLACEHOLDERS.contains(&c) {
            output.push(ESCAPE_CHAR);
        }
        output.push(c);
    }
    output
}

/// Unescapes a string, removing the backslash in front of every escaped
/// placeholder letter.
///
/// Applied as the final pass of a format call, so escape sequences that
/// were never substituted come out as plain letters. Backslashes that do
/// not precede a placeholder letter are left alone.
pub fn unescape(subject: &str) -> String {
    let mut output = String::with_capacity(subject.len());
    let mut chars = subject.chars().peekable();
    while let Some(c) = chars.next() {
        if c == ESCAPE_CHAR {
            if let Some(next) = chars.peek() {
                if PLACEHOLDERS.contains(next) {
                    // Drop the backslash; the letter is pushed on the next pass
                    continue;
                }
            }
        }
        output.push(c);
    }
    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_marks_every_placeholder_letter() {
        assert_eq!(escape("Today"), "To\\da\\y");
        assert_eq!(escape("YyMmDd"), "\\Y\\y\\M\\m\\D\\d");
    }

    #[test]
    fn test_escape_ignores_other_characters() {
        assert_eq!(escape("2024-08: ok?"), "2024-08: ok?");
        assert_eq!(escape(""), "");
    }

    #[test]
    fn test_escape_is_case_sensitive() {
        // Only the exact placeholder letters are escaped
        assert_eq!(escape("X x Z z"), "X x Z z");
        assert_eq!(escape("Dd"), "\\D\\d");
    }

    #[test]
    fn test_unescape_strips_escaped_placeholders() {
        assert_eq!(unescape("To\\da\\y"), "Today");
        assert_eq!(unescape("\\Y\\y\\M\\m\\D\\d"), "YyMmDd");
    }

    #[test]
    fn test_unescape_leaves_other_backslashes() {
        assert_eq!(unescape("a\\b"), "a\\b");
        assert_eq!(unescape("trailing\\"), "trailing\\");
    }

    #[test]
    fn test_unescape_doubled_backslash() {
        // Only the backslash directly in front of the letter is removed
        assert_eq!(unescape("\\\\Y"), "\\Y");
    }

    #[test]
    fn test_unescape_no_placeholders_is_identity() {
        assert_eq!(unescape("plain text"), "plain text");
        assert_eq!(unescape(""), "");
    }

    #[test]
    fn test_unescape_reverses_escape() {
        for s in [
            "Today",
            "YyMmDd",
            "no placeholders here!",
            "",
            "\\already\\escaped",
            "mixed \\Y and Y",
        ] {
            assert_eq!(unescape(&escape(s)), s, "round trip failed for {s:?}");
        }
    }
}
