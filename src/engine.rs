//! Style composition engine.
//!
//! A styled string has the shape
//!
//! ```text
//! ESCAPE + code[;code]* + END + message [+ ESCAPE + "0" + END]
//! ```
//!
//! with `ESCAPE = "\x1B["` and `END = "m"`. Every function here is pure and
//! total: any code text is accepted, and an empty style produces the
//! degenerate sequence `"\x1B[m"`.

use crate::style::{attribute, ComposedStyle, StyleCode, StyleError};

/// Control sequence introducer that opens every escape sequence.
pub const ESCAPE: &str = "\x1B[";
/// Terminator of a graphic-rendition sequence.
pub const END: &str = "m";
/// Separator between codes inside one sequence.
pub const SEPARATOR: &str = ";";

fn join<'a, I>(codes: I) -> String
where
    I: IntoIterator<Item = &'a StyleCode>,
{
    let mut joined = String::new();
    for code in codes {
        if !joined.is_empty() {
            joined.push_str(SEPARATOR);
        }
        joined.push_str(code.as_str());
    }
    joined
}

/// Builds the escape sequence that starts `style`.
///
/// ```rust
/// use termwrap::new_style;
///
/// assert_eq!(new_style("1"), "\x1B[1m");
/// assert_eq!(new_style(["1", "31"]), "\x1B[1;31m");
/// ```
pub fn new_style<S: Into<ComposedStyle>>(style: S) -> String {
    let style = style.into();
    format!("{ESCAPE}{}{END}", join(&style))
}

/// Returns the reset sequence `"\x1B[0m"`.
pub fn end_style() -> String {
    format!("{ESCAPE}{}{END}", attribute::RESET)
}

/// Wraps `message` in `style`, appending the reset sequence when `ending` is true.
///
/// With `ending = false` the style stays active after the message, so a span
/// can be continued across several writes. The caller then owns the reset.
///
/// ```rust
/// use termwrap::create_style;
///
/// assert_eq!(
///     create_style(["1", "31"], "hello world", true),
///     "\x1B[1;31mhello world\x1B[0m"
/// );
/// assert_eq!(create_style("4", "open", false), "\x1B[4mopen");
/// ```
pub fn create_style<S: Into<ComposedStyle>>(style: S, message: &str, ending: bool) -> String {
    let mut output = new_style(style);
    output.push_str(message);
    if ending {
        output.push_str(&end_style());
    }
    output
}

/// Like [`create_style`], but rejects codes that are not in the registry.
pub fn create_style_checked<S: Into<ComposedStyle>>(
    style: S,
    message: &str,
    ending: bool,
) -> Result<String, StyleError> {
    let style = crate::style::validate(style)?;
    Ok(create_style(style, message, ending))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::{background, foreground};

    #[test]
    fn test_new_style_single_code() {
        assert_eq!(new_style("1"), "\x1B[1m");
        assert_eq!(new_style(foreground::BRIGHT_CYAN), "\x1B[96m");
    }

    #[test]
    fn test_new_style_joins_in_order() {
        assert_eq!(new_style(["41", "1"]), "\x1B[41;1m");
        assert_eq!(new_style(vec!["1", "31", "47"]), "\x1B[1;31;47m");
    }

    #[test]
    fn test_new_style_one_element_collection_matches_scalar() {
        assert_eq!(new_style(["33"]), new_style("33"));
    }

    #[test]
    fn test_new_style_empty_is_degenerate_sequence() {
        assert_eq!(new_style(ComposedStyle::new()), "\x1B[m");
    }

    #[test]
    fn test_new_style_accepts_arbitrary_codes() {
        assert_eq!(new_style("38;5;208"), "\x1B[38;5;208m");
        assert_eq!(new_style(""), "\x1B[m");
    }

    #[test]
    fn test_end_style() {
        assert_eq!(end_style(), "\x1B[0m");
    }

    #[test]
    fn test_create_style_with_ending() {
        assert_eq!(create_style("1", "hello", true), "\x1B[1mhello\x1B[0m");
    }

    #[test]
    fn test_create_style_without_ending() {
        assert_eq!(create_style("1", "hello", false), "\x1B[1mhello");
    }

    #[test]
    fn test_create_style_empty_message() {
        assert_eq!(create_style("4", "", true), "\x1B[4m\x1B[0m");
    }

    #[test]
    fn test_create_style_registry_codes() {
        let out = create_style(
            [background::RED, attribute::BOLD],
            "   WARNING: disk full   ",
            true,
        );
        assert_eq!(out, "\x1B[41;1m   WARNING: disk full   \x1B[0m");
    }

    #[test]
    fn test_create_style_checked_ok() {
        assert_eq!(
            create_style_checked(["1", "31"], "x", true).unwrap(),
            "\x1B[1;31mx\x1B[0m"
        );
    }

    #[test]
    fn test_create_style_checked_rejects_unknown() {
        let err = create_style_checked(["1", "7"], "x", true).unwrap_err();
        assert_eq!(
            err,
            StyleError::UnknownCode {
                code: "7".to_string()
            }
        );
    }
}
