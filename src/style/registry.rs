//! Fixed registry of named style codes.
//!
//! Codes are grouped into three namespaces. The bright color variants live
//! next to the standard ones in [`foreground`] and [`background`].
//!
//! | Namespace | Names |
//! |-----------|-------|
//! | `attribute` | reset, bold, light, italic, underlined |
//! | `foreground` | 8 standard colors (30-37), dark_grey and 7 bright colors (90-97) |
//! | `background` | 8 standard colors (40-47), dark_grey and 7 bright colors (100-107) |

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::str::FromStr;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use super::code::{ComposedStyle, StyleCode};
use super::error::StyleError;

/// Text attributes.
pub mod attribute {
    use crate::style::StyleCode;

    pub const RESET: StyleCode = StyleCode::from_static("0");
    pub const BOLD: StyleCode = StyleCode::from_static("1");
    /// Dim / faint text.
    pub const LIGHT: StyleCode = StyleCode::from_static("2");
    pub const ITALIC: StyleCode = StyleCode::from_static("3");
    pub const UNDERLINED: StyleCode = StyleCode::from_static("4");
}

/// Foreground colors.
pub mod foreground {
    use crate::style::StyleCode;

    pub const BLACK: StyleCode = StyleCode::from_static("30");
    pub const RED: StyleCode = StyleCode::from_static("31");
    pub const GREEN: StyleCode = StyleCode::from_static("32");
    pub const YELLOW: StyleCode = StyleCode::from_static("33");
    pub const BLUE: StyleCode = StyleCode::from_static("34");
    pub const PURPLE: StyleCode = StyleCode::from_static("35");
    pub const CYAN: StyleCode = StyleCode::from_static("36");
    pub const WHITE: StyleCode = StyleCode::from_static("37");
    /// Bright black.
    pub const DARK_GREY: StyleCode = StyleCode::from_static("90");
    pub const BRIGHT_RED: StyleCode = StyleCode::from_static("91");
    pub const BRIGHT_GREEN: StyleCode = StyleCode::from_static("92");
    pub const BRIGHT_YELLOW: StyleCode = StyleCode::from_static("93");
    pub const BRIGHT_BLUE: StyleCode = StyleCode::from_static("94");
    pub const BRIGHT_PURPLE: StyleCode = StyleCode::from_static("95");
    pub const BRIGHT_CYAN: StyleCode = StyleCode::from_static("96");
    pub const BRIGHT_WHITE: StyleCode = StyleCode::from_static("97");
}

/// Background colors.
pub mod background {
    use crate::style::StyleCode;

    pub const BLACK: StyleCode = StyleCode::from_static("40");
    pub const RED: StyleCode = StyleCode::from_static("41");
    pub const GREEN: StyleCode = StyleCode::from_static("42");
    pub const YELLOW: StyleCode = StyleCode::from_static("43");
    pub const BLUE: StyleCode = StyleCode::from_static("44");
    pub const PURPLE: StyleCode = StyleCode::from_static("45");
    pub const CYAN: StyleCode = StyleCode::from_static("46");
    pub const WHITE: StyleCode = StyleCode::from_static("47");
    pub const DARK_GREY: StyleCode = StyleCode::from_static("100");
    pub const BRIGHT_RED: StyleCode = StyleCode::from_static("101");
    pub const BRIGHT_GREEN: StyleCode = StyleCode::from_static("102");
    pub const BRIGHT_YELLOW: StyleCode = StyleCode::from_static("103");
    pub const BRIGHT_BLUE: StyleCode = StyleCode::from_static("104");
    pub const BRIGHT_PURPLE: StyleCode = StyleCode::from_static("105");
    pub const BRIGHT_CYAN: StyleCode = StyleCode::from_static("106");
    pub const BRIGHT_WHITE: StyleCode = StyleCode::from_static("107");
}

const ATTRIBUTES: &[(&str, StyleCode)] = &[
    ("reset", attribute::RESET),
    ("bold", attribute::BOLD),
    ("light", attribute::LIGHT),
    ("italic", attribute::ITALIC),
    ("underlined", attribute::UNDERLINED),
];

const FOREGROUND: &[(&str, StyleCode)] = &[
    ("black", foreground::BLACK),
    ("red", foreground::RED),
    ("green", foreground::GREEN),
    ("yellow", foreground::YELLOW),
    ("blue", foreground::BLUE),
    ("purple", foreground::PURPLE),
    ("cyan", foreground::CYAN),
    ("white", foreground::WHITE),
    ("dark_grey", foreground::DARK_GREY),
    ("bright_red", foreground::BRIGHT_RED),
    ("bright_green", foreground::BRIGHT_GREEN),
    ("bright_yellow", foreground::BRIGHT_YELLOW),
    ("bright_blue", foreground::BRIGHT_BLUE),
    ("bright_purple", foreground::BRIGHT_PURPLE),
    ("bright_cyan", foreground::BRIGHT_CYAN),
    ("bright_white", foreground::BRIGHT_WHITE),
];

const BACKGROUND: &[(&str, StyleCode)] = &[
    ("black", background::BLACK),
    ("red", background::RED),
    ("green", background::GREEN),
    ("yellow", background::YELLOW),
    ("blue", background::BLUE),
    ("purple", background::PURPLE),
    ("cyan", background::CYAN),
    ("white", background::WHITE),
    ("dark_grey", background::DARK_GREY),
    ("bright_red", background::BRIGHT_RED),
    ("bright_green", background::BRIGHT_GREEN),
    ("bright_yellow", background::BRIGHT_YELLOW),
    ("bright_blue", background::BRIGHT_BLUE),
    ("bright_purple", background::BRIGHT_PURPLE),
    ("bright_cyan", background::BRIGHT_CYAN),
    ("bright_white", background::BRIGHT_WHITE),
];

/// A group of related codes in the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Namespace {
    Attribute,
    Foreground,
    Background,
}

impl Namespace {
    pub const ALL: [Namespace; 3] = [
        Namespace::Attribute,
        Namespace::Foreground,
        Namespace::Background,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Namespace::Attribute => "attribute",
            Namespace::Foreground => "foreground",
            Namespace::Background => "background",
        }
    }

    fn table(self) -> &'static [(&'static str, StyleCode)] {
        match self {
            Namespace::Attribute => ATTRIBUTES,
            Namespace::Foreground => FOREGROUND,
            Namespace::Background => BACKGROUND,
        }
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Namespace {
    type Err = StyleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Namespace::ALL
            .into_iter()
            .find(|ns| ns.as_str() == s)
            .ok_or_else(|| StyleError::UnknownNamespace {
                name: s.to_string(),
            })
    }
}

static BY_NAME: Lazy<HashMap<Namespace, HashMap<&'static str, &'static StyleCode>>> =
    Lazy::new(|| {
        Namespace::ALL
            .into_iter()
            .map(|ns| (ns, ns.table().iter().map(|(name, code)| (*name, code)).collect()))
            .collect()
    });

static KNOWN_CODES: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    Namespace::ALL
        .into_iter()
        .flat_map(|ns| ns.table().iter().map(|(_, code)| code.as_str()))
        .collect()
});

/// Looks up a code by its semantic name within a namespace.
///
/// ```rust
/// use termwrap::style::{foreground, lookup, Namespace};
///
/// assert_eq!(lookup(Namespace::Foreground, "red"), Some(foreground::RED));
/// assert_eq!(lookup(Namespace::Foreground, "magenta"), None);
/// ```
pub fn lookup(namespace: Namespace, name: &str) -> Option<StyleCode> {
    BY_NAME
        .get(&namespace)
        .and_then(|table| table.get(name))
        .map(|code| (*code).clone())
}

/// Iterates the names of a namespace in declaration order.
pub fn names(namespace: Namespace) -> impl Iterator<Item = &'static str> {
    namespace.table().iter().map(|(name, _)| *name)
}

/// Iterates `(name, code)` pairs of a namespace in declaration order.
pub fn entries(namespace: Namespace) -> impl Iterator<Item = (&'static str, &'static StyleCode)> {
    namespace.table().iter().map(|(name, code)| (*name, code))
}

/// Returns true if `code` appears in any namespace.
pub fn is_known(code: &str) -> bool {
    KNOWN_CODES.contains(code)
}

/// Checks every code of `style` against the registry.
///
/// Composition accepts any code; call this when unknown codes should be
/// rejected instead.
pub fn validate<S: Into<ComposedStyle>>(style: S) -> Result<ComposedStyle, StyleError> {
    let style = style.into();
    if style.is_empty() {
        tracing::debug!("rejected empty style");
        return Err(StyleError::EmptyStyle);
    }
    if let Some(unknown) = style.iter().find(|code| !is_known(code.as_str())) {
        tracing::debug!(code = %unknown, "rejected unknown style code");
        return Err(StyleError::UnknownCode {
            code: unknown.to_string(),
        });
    }
    Ok(style)
}
