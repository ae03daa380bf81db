//! # termwrap - ANSI styled text for terminal output
//!
//! `termwrap` turns one or more style codes into a single escape sequence and
//! wraps a message with it, optionally resetting the terminal afterward.
//!
//! ## Core Concepts
//!
//! - [`style`]: Named codes grouped into `attribute`, `foreground` and `background`
//! - [`new_style`] / [`end_style`] / [`create_style`]: The composition engine
//! - [`print()`] / [`print_to`]: Hand a composed string to a stream, return it, or both
//! - [`shortcuts`]: Fixed-style helpers such as `heading` and `warning`
//!
//! ## Quick Example
//!
//! ```rust
//! use termwrap::style::{attribute, foreground};
//! use termwrap::{create_style, end_style, new_style};
//!
//! let out = create_style([attribute::BOLD, foreground::RED], "hello world", true);
//! assert_eq!(out, "\x1B[1;31mhello world\x1B[0m");
//!
//! // Keep a style open across several writes and reset by hand.
//! let mut line = create_style("4", "part one, ", false);
//! line.push_str("part two");
//! line.push_str(&end_style());
//! assert_eq!(line, format!("{}part one, part two\x1B[0m", new_style("4")));
//! ```
//!
//! Codes are not checked against the registry unless you ask for it with
//! [`style::validate`] or [`create_style_checked`].

mod engine;
mod print;
pub mod shortcuts;
pub mod style;

pub use engine::{create_style, create_style_checked, end_style, new_style, END, ESCAPE, SEPARATOR};
pub use print::{print, print_to, PrintOptions};
pub use style::{ComposedStyle, Namespace, StyleCode, StyleError};
