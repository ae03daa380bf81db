//! Fixed-style shortcuts over [`print`](crate::print()).
//!
//! Each shortcut comes in two forms: a `*_text` function that only builds the
//! styled string, and a printing form that routes through
//! [`print`](crate::print()) with the caller's [`PrintOptions`].

use std::io;

use serde::{Deserialize, Serialize};

use crate::engine::create_style;
use crate::print::{print, PrintOptions};
use crate::style::{attribute, background, foreground, ComposedStyle, StyleCode};

fn bold_style() -> ComposedStyle {
    attribute::BOLD.into()
}

fn underlined_style() -> ComposedStyle {
    attribute::UNDERLINED.into()
}

fn heading_style() -> ComposedStyle {
    [attribute::BOLD, attribute::UNDERLINED].into()
}

fn warning_style() -> ComposedStyle {
    [background::RED, attribute::BOLD].into()
}

fn warning2_style() -> ComposedStyle {
    [foreground::RED, attribute::BOLD].into()
}

fn warning_message(message: &str) -> String {
    format!("   WARNING: {message}   ")
}

fn note_message(message: &str) -> String {
    create_style(attribute::BOLD, "NOTE: ", true) + message
}

pub fn bold_text(message: &str) -> String {
    create_style(bold_style(), message, true)
}

pub fn bold(message: &str, options: &PrintOptions) -> io::Result<Option<String>> {
    print(message, bold_style(), options)
}

pub fn underlined_text(message: &str) -> String {
    create_style(underlined_style(), message, true)
}

pub fn underlined(message: &str, options: &PrintOptions) -> io::Result<Option<String>> {
    print(message, underlined_style(), options)
}

/// Bold and underlined.
pub fn heading_text(message: &str) -> String {
    create_style(heading_style(), message, true)
}

pub fn heading(message: &str, options: &PrintOptions) -> io::Result<Option<String>> {
    print(message, heading_style(), options)
}

/// Bold on a red background, padded and prefixed with `WARNING:`.
///
/// ```rust
/// use termwrap::shortcuts::warning_text;
///
/// assert_eq!(
///     warning_text("disk full"),
///     "\x1B[41;1m   WARNING: disk full   \x1B[0m"
/// );
/// ```
pub fn warning_text(message: &str) -> String {
    create_style(warning_style(), &warning_message(message), true)
}

pub fn warning(message: &str, options: &PrintOptions) -> io::Result<Option<String>> {
    print(&warning_message(message), warning_style(), options)
}

/// Bold red text, without the banner of [`warning_text`].
pub fn warning2_text(message: &str) -> String {
    create_style(warning2_style(), message, true)
}

pub fn warning2(message: &str, options: &PrintOptions) -> io::Result<Option<String>> {
    print(message, warning2_style(), options)
}

/// A bold `NOTE: ` label followed by the plain message.
pub fn note_text(message: &str) -> String {
    create_style(attribute::RESET, &note_message(message), true)
}

pub fn note(message: &str, options: &PrintOptions) -> io::Result<Option<String>> {
    print(&note_message(message), attribute::RESET, options)
}

/// Colors and margin used by [`highlight`].
///
/// Defaults to bold black text on a white background with a one-space margin.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Highlight {
    pub foreground: StyleCode,
    pub background: StyleCode,
    /// Placed on both sides of the message, inside the styled span.
    pub margin: String,
}

impl Highlight {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn foreground(mut self, code: impl Into<StyleCode>) -> Self {
        self.foreground = code.into();
        self
    }

    pub fn background(mut self, code: impl Into<StyleCode>) -> Self {
        self.background = code.into();
        self
    }

    pub fn margin(mut self, margin: impl Into<String>) -> Self {
        self.margin = margin.into();
        self
    }

    fn style(&self) -> ComposedStyle {
        ComposedStyle::new()
            .with(attribute::BOLD)
            .with(&self.foreground)
            .with(&self.background)
    }

    fn message(&self, message: &str) -> String {
        format!("{margin}{message}{margin}", margin = self.margin)
    }
}

impl Default for Highlight {
    fn default() -> Self {
        Self {
            foreground: foreground::BLACK,
            background: background::WHITE,
            margin: " ".to_string(),
        }
    }
}

pub fn highlight_text(message: &str, highlight: &Highlight) -> String {
    create_style(highlight.style(), &highlight.message(message), true)
}

pub fn highlight(
    message: &str,
    highlight: &Highlight,
    options: &PrintOptions,
) -> io::Result<Option<String>> {
    print(&highlight.message(message), highlight.style(), options)
}
