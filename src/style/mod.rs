//! Style codes and the fixed code registry.
//!
//! This module provides the primitives the engine composes:
//!
//! - [`StyleCode`]: One escape-sequence parameter such as `"1"` or `"31"`
//! - [`ComposedStyle`]: An ordered group of codes applied together
//! - [`Namespace`] and the [`attribute`], [`foreground`] and [`background`] tables
//! - [`StyleError`]: Errors from opt-in strict validation
//!
//! Any string is a valid code. The registry exists for naming convenience and
//! for [`validate`], which callers may use when they want unknown codes rejected.

mod code;
mod error;
mod registry;

pub use code::{ComposedStyle, StyleCode};
pub use error::StyleError;
pub use registry::{
    attribute, background, entries, foreground, is_known, lookup, names, validate, Namespace,
};
