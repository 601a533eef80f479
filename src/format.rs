use crate::DateLike;
use crate::consts::{COMPONENT_DIGITS, ESCAPE_CHAR, PLACEHOLDERS, YEAR_DIGITS};
use crate::escape::unescape;

/// Converts the given number to a string of at least `digits` length with
/// leading zeros.
///
/// Values whose decimal representation is already `digits` characters or
/// longer come back unchanged; nothing is ever truncated. Negative values
/// get no special treatment: the minus sign counts toward the length like
/// any other character.
pub fn min_digits(value: i64, digits: usize) -> String {
    let output = value.to_string();

    if output.len() >= digits {
        return output;
    }

    let mut padded = "0".repeat(digits - output.len());
    padded.push_str(&output);
    padded
}

/// A format placeholder letter and the date component it expands to.
///
/// The letter set is fixed: `PLACEHOLDERS` in `consts` must list exactly
/// the letters `from_char` recognizes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Placeholder {
    /// `Y` - full year, zero-padded to 4 digits
    PaddedYear,
    /// `y` - full year
    Year,
    /// `M` - zero-based month index, zero-padded to 2 digits
    PaddedMonth,
    /// `m` - zero-based month index
    Month,
    /// `D` - day of month, zero-padded to 2 digits
    PaddedDay,
    /// `d` - day of month
    Day,
}

impl Placeholder {
    /// Looks up the placeholder for a letter.
    /// Returns `None` for letters outside the placeholder set.
    pub const fn from_char(letter: char) -> Option<Self> {
        match letter {
            'Y' => Some(Self::PaddedYear),
            'y' => Some(Self::Year),
            'M' => Some(Self::PaddedMonth),
            'm' => Some(Self::Month),
            'D' => Some(Self::PaddedDay),
            'd' => Some(Self::Day),
            _ => None,
        }
    }

    /// Expands the placeholder into the matching component of `subject`.
    pub fn expand<D: DateLike + ?Sized>(self, subject: &D) -> String {
        match self {
            Self::PaddedYear => min_digits(i64::from(subject.year()), YEAR_DIGITS),
            Self::Year => subject.year().to_string(),
            Self::PaddedMonth => min_digits(i64::from(subject.month()), COMPONENT_DIGITS),
            Self::Month => subject.month().to_string(),
            Self::PaddedDay => min_digits(i64::from(subject.day()), COMPONENT_DIGITS),
            Self::Day => subject.day().to_string(),
        }
    }
}

/// Error type for format operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    /// A matched letter has no entry in the placeholder table.
    #[error("Unknown format placeholder: {0}")]
    UnknownPlaceholder(char),
}

/// Convert the given date to a string using the format specified
///
/// Currently accepts the following format placeholders:
/// * `Y` - 4 digit year (with leading zeros)
/// * `y` - Year
/// * `M` - 2 digit month index (with leading zeros)
/// * `m` - Month index
/// * `D` - 2 digit day (with leading zeros)
/// * `d` - Day
///
/// Month indices are zero-based (January is 0), matching [`DateLike`].
///
/// If you would like to use any of the above letters literally in your
/// string, placeholders can be escaped using a backslash or the `escape`
/// function.
///
/// # Errors
/// Returns `FormatError::UnknownPlaceholder` if a matched letter is missing
/// from the placeholder table. The scanner and the table cover the same
/// letter set, so through the public API this signals a contract violation
/// rather than a reachable user-facing condition.
pub fn date_to_format<D: DateLike + ?Sized>(
    subject: &D,
    format: &str,
) -> Result<String, FormatError> {
    let output = replace_placeholders(subject, format, &PLACEHOLDERS)?;
    Ok(unescape(&output))
}

/// Single left-to-right substitution pass over `format`.
///
/// A placeholder letter matches at the very start of the string, or when
/// the one character before it is anything other than `ESCAPE_CHAR`; that
/// preceding character is consumed with the match and carried into the
/// output unchanged. Matched regions are not rescanned, so in `"YY"` only
/// the first letter substitutes.
///
/// The letter set is a parameter so the pattern and the dispatch table
/// stay independently checkable; `date_to_format` always passes
/// `PLACEHOLDERS`.
fn replace_placeholders<D: DateLike + ?Sized>(
    subject: &D,
    format: &str,
    placeholders: &[char],
) -> Result<String, FormatError> {
    let chars: Vec<char> = format.chars().collect();
    let mut output = String::with_capacity(format.len());
    let mut pos = 0;

    while pos < chars.len() {
        if pos == 0 && placeholders.contains(&chars[0]) {
            output.push_str(&expand_letter(chars[0], subject)?);
            pos = 1;
        } else if pos + 1 < chars.len()
            && chars[pos] != ESCAPE_CHAR
            && placeholders.contains(&chars[pos + 1])
        {
            output.push(chars[pos]);
            output.push_str(&expand_letter(chars[pos + 1], subject)?);
            pos += 2;
        } else {
            output.push(chars[pos]);
            pos += 1;
        }
    }

    Ok(output)
}

fn expand_letter<D: DateLike + ?Sized>(letter: char, subject: &D) -> Result<String, FormatError> {
    let placeholder =
        Placeholder::from_char(letter).ok_or(FormatError::UnknownPlaceholder(letter))?;
    Ok(placeholder.expand(subject))
}
