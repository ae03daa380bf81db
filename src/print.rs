//! Printing styled messages to an output stream.

use std::io::{self, Write};

use console::Term;
use serde::{Deserialize, Serialize};

use crate::engine::create_style;
use crate::style::ComposedStyle;

/// Controls what [`print`] does with a composed string.
///
/// The two flags are independent: a call may write, return, do both, or do
/// neither.
///
/// Options deserialize with per-field defaults, so they can live in an
/// application config file:
///
/// ```rust
/// use termwrap::PrintOptions;
///
/// let opts: PrintOptions = serde_json::from_str(r#"{ "return_value": true }"#).unwrap();
/// assert!(opts.print);
/// assert!(opts.return_value);
/// assert_eq!(opts.line_ending, "\n");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PrintOptions {
    /// Write the styled string to the stream.
    pub print: bool,
    /// Return the styled string to the caller.
    pub return_value: bool,
    /// Appended after the styled string when writing. Never part of the returned value.
    pub line_ending: String,
}

impl PrintOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Options that only return the string and never write.
    pub fn silent() -> Self {
        Self::new().print(false).return_value(true)
    }

    pub fn print(mut self, print: bool) -> Self {
        self.print = print;
        self
    }

    pub fn return_value(mut self, return_value: bool) -> Self {
        self.return_value = return_value;
        self
    }

    pub fn line_ending(mut self, line_ending: impl Into<String>) -> Self {
        self.line_ending = line_ending.into();
        self
    }
}

impl Default for PrintOptions {
    fn default() -> Self {
        Self {
            print: true,
            return_value: false,
            line_ending: "\n".to_string(),
        }
    }
}

/// Styles `message` and hands the result to `writer` according to `options`.
///
/// Returns `Some` with the styled string (without the line ending) only when
/// `options.return_value` is set. Write errors are returned as-is.
pub fn print_to<W, S>(
    writer: &mut W,
    message: &str,
    style: S,
    options: &PrintOptions,
) -> io::Result<Option<String>>
where
    W: Write + ?Sized,
    S: Into<ComposedStyle>,
{
    let output = create_style(style, message, true);

    if options.print {
        writer.write_all(output.as_bytes())?;
        writer.write_all(options.line_ending.as_bytes())?;
        tracing::trace!(bytes = output.len(), "wrote styled message");
    }

    Ok(options.return_value.then_some(output))
}

/// Styles `message` and writes it to standard output according to `options`.
///
/// ```rust
/// use termwrap::{print, PrintOptions};
///
/// let out = print("hi", "1", &PrintOptions::silent()).unwrap();
/// assert_eq!(out.as_deref(), Some("\x1B[1mhi\x1B[0m"));
/// ```
pub fn print<S: Into<ComposedStyle>>(
    message: &str,
    style: S,
    options: &PrintOptions,
) -> io::Result<Option<String>> {
    let mut stdout = Term::stdout();
    print_to(&mut stdout, message, style, options)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_print_options_default() {
        let opts = PrintOptions::default();
        assert!(opts.print);
        assert!(!opts.return_value);
        assert_eq!(opts.line_ending, "\n");
    }

    #[test]
    fn test_print_options_builder() {
        let opts = PrintOptions::new()
            .print(false)
            .return_value(true)
            .line_ending("");
        assert!(!opts.print);
        assert!(opts.return_value);
        assert_eq!(opts.line_ending, "");
        assert_eq!(PrintOptions::silent(), PrintOptions::new().print(false).return_value(true));
    }

    #[test]
    fn test_print_options_deserialize_partial() {
        let opts: PrintOptions = serde_json::from_str(r#"{"line_ending": "\r\n"}"#).unwrap();
        assert!(opts.print);
        assert!(!opts.return_value);
        assert_eq!(opts.line_ending, "\r\n");
    }

    #[test]
    fn test_print_to_writes_with_line_ending() {
        let mut buf = Vec::new();
        let result = print_to(&mut buf, "hi", "1", &PrintOptions::default()).unwrap();
        assert_eq!(result, None);
        assert_eq!(String::from_utf8(buf).unwrap(), "\x1B[1mhi\x1B[0m\n");
    }

    #[test]
    fn test_print_to_return_only() {
        let mut buf = Vec::new();
        let result = print_to(&mut buf, "hi", "1", &PrintOptions::silent()).unwrap();
        assert_eq!(result.as_deref(), Some("\x1B[1mhi\x1B[0m"));
        assert!(buf.is_empty());
    }

    #[test]
    fn test_print_to_write_and_return() {
        let mut buf = Vec::new();
        let opts = PrintOptions::new().return_value(true).line_ending(" | ");
        let result = print_to(&mut buf, "x", ["1", "31"], &opts).unwrap();
        assert_eq!(result.as_deref(), Some("\x1B[1;31mx\x1B[0m"));
        assert_eq!(String::from_utf8(buf).unwrap(), "\x1B[1;31mx\x1B[0m | ");
    }

    #[test]
    fn test_print_to_neither_flag() {
        let mut buf = Vec::new();
        let opts = PrintOptions::new().print(false);
        assert_eq!(print_to(&mut buf, "x", "1", &opts).unwrap(), None);
        assert!(buf.is_empty());
    }

    #[test]
    fn test_print_to_propagates_write_error() {
        let err = print_to(&mut BrokenPipe, "x", "1", &PrintOptions::default()).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }

    #[test]
    fn test_print_to_skips_broken_writer_when_not_printing() {
        let result = print_to(&mut BrokenPipe, "x", "1", &PrintOptions::silent()).unwrap();
        assert!(result.is_some());
    }

    #[test]
    fn test_print_silent_does_not_touch_stdout() {
        let out = print("hi", "1", &PrintOptions::silent()).unwrap();
        assert_eq!(out.as_deref(), Some("\x1B[1mhi\x1B[0m"));
    }
}
