//! Style validation errors.

use thiserror::Error;

/// Error returned when strict style validation fails.
///
/// Composition itself never fails; these only come out of
/// [`validate`](crate::style::validate) and the `*_checked` helpers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StyleError {
    /// A code is not present in any registry namespace
    #[error("unknown style code '{code}'")]
    UnknownCode { code: String },
    /// The style contains no codes at all
    #[error("style contains no codes")]
    EmptyStyle,
    /// A namespace name did not match `attribute`, `foreground` or `background`
    #[error("unknown style namespace '{name}'")]
    UnknownNamespace { name: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_code_error_display() {
        let err = StyleError::UnknownCode {
            code: "38;5;200".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("unknown style code"));
        assert!(msg.contains("38;5;200"));
    }

    #[test]
    fn test_empty_style_error_display() {
        assert_eq!(StyleError::EmptyStyle.to_string(), "style contains no codes");
    }

    #[test]
    fn test_unknown_namespace_error_display() {
        let err = StyleError::UnknownNamespace {
            name: "palette".to_string(),
        };
        assert!(err.to_string().contains("'palette'"));
    }
}
