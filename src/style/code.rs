//! Style code value types.

use std::borrow::Cow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// A single escape-sequence parameter, e.g. `"1"` for bold or `"31"` for red.
///
/// Identity is the literal value. Registry codes are borrowed `'static`
/// strings; codes built from caller input own their text.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StyleCode(Cow<'static, str>);

impl StyleCode {
    /// Creates a code from a static string without allocating.
    pub const fn from_static(code: &'static str) -> Self {
        Self(Cow::Borrowed(code))
    }

    /// Returns the code text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StyleCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for StyleCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for StyleCode {
    fn from(code: &str) -> Self {
        Self(Cow::Owned(code.to_string()))
    }
}

impl From<String> for StyleCode {
    fn from(code: String) -> Self {
        Self(Cow::Owned(code))
    }
}

impl From<&StyleCode> for StyleCode {
    fn from(code: &StyleCode) -> Self {
        code.clone()
    }
}

/// An ordered group of codes emitted together in one escape sequence.
///
/// Every style argument in this crate converts into a `ComposedStyle`, so a
/// single code and a list of codes go through the same join. A single code is
/// a one-element group.
///
/// # Example
///
/// ```rust
/// use termwrap::style::{attribute, foreground, ComposedStyle};
///
/// let style = ComposedStyle::new()
///     .with(attribute::BOLD)
///     .with(foreground::RED);
/// assert_eq!(style.len(), 2);
///
/// let same: ComposedStyle = ["1", "31"].into();
/// assert_eq!(style, same);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ComposedStyle {
    codes: Vec<StyleCode>,
}

impl ComposedStyle {
    /// Creates an empty style.
    pub fn new() -> Self {
        Self { codes: Vec::new() }
    }

    /// Appends a code, returning the updated style for chaining.
    pub fn with<C: Into<StyleCode>>(mut self, code: C) -> Self {
        self.codes.push(code.into());
        self
    }

    /// Appends a code in place.
    pub fn push<C: Into<StyleCode>>(&mut self, code: C) {
        self.codes.push(code.into());
    }

    pub fn codes(&self) -> &[StyleCode] {
        &self.codes
    }

    pub fn iter(&self) -> std::slice::Iter<'_, StyleCode> {
        self.codes.iter()
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}

impl<'a> IntoIterator for &'a ComposedStyle {
    type Item = &'a StyleCode;
    type IntoIter = std::slice::Iter<'a, StyleCode>;

    fn into_iter(self) -> Self::IntoIter {
        self.codes.iter()
    }
}

impl From<StyleCode> for ComposedStyle {
    fn from(code: StyleCode) -> Self {
        Self { codes: vec![code] }
    }
}

impl From<&StyleCode> for ComposedStyle {
    fn from(code: &StyleCode) -> Self {
        Self {
            codes: vec![code.clone()],
        }
    }
}

impl From<&str> for ComposedStyle {
    fn from(code: &str) -> Self {
        Self {
            codes: vec![code.into()],
        }
    }
}

impl From<String> for ComposedStyle {
    fn from(code: String) -> Self {
        Self {
            codes: vec![code.into()],
        }
    }
}

impl From<&ComposedStyle> for ComposedStyle {
    fn from(style: &ComposedStyle) -> Self {
        style.clone()
    }
}

impl<T: Into<StyleCode>> From<Vec<T>> for ComposedStyle {
    fn from(codes: Vec<T>) -> Self {
        codes.into_iter().collect()
    }
}

impl<T: Into<StyleCode>, const N: usize> From<[T; N]> for ComposedStyle {
    fn from(codes: [T; N]) -> Self {
        codes.into_iter().collect()
    }
}

impl<T: Clone + Into<StyleCode>> From<&[T]> for ComposedStyle {
    fn from(codes: &[T]) -> Self {
        codes.iter().cloned().collect()
    }
}

impl<C: Into<StyleCode>> FromIterator<C> for ComposedStyle {
    fn from_iter<I: IntoIterator<Item = C>>(iter: I) -> Self {
        Self {
            codes: iter.into_iter().map(Into::into).collect(),
        }
    }
}
