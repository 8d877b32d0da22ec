use std::any::Any;

use thiserror::Error;

use crate::{ErrorExt, StatusCode};

/// Errors in the `.properties` text itself.
///
/// Every variant carries the 1-based physical line on which the problem was
/// detected. A load aborts on the first of these.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum SyntaxError {
    /// A backslash followed by a character outside the escape vocabulary.
    #[error("illegal escape sequence '\\{}' on line {line}", byte_repr(.found))]
    IllegalEscape { line: usize, found: u8 },

    /// A logical line with content but no unescaped `=`.
    #[error("invalid property definition on line {line}: no separator")]
    MissingSeparator { line: usize },

    /// An unescaped `=` before any key content.
    #[error("invalid property definition on line {line}: empty key")]
    EmptyKey { line: usize },

    /// The stream ended right after a continuation backslash.
    #[error("invalid property definition on line {line}: no continuation line")]
    UnterminatedContinuation { line: usize },

    /// A decoded key or value is not valid UTF-8.
    #[error("invalid UTF-8 in property definition on line {line}")]
    InvalidUtf8 { line: usize },

    /// A key or value grew past the configured limit.
    #[error("property member on line {line} exceeds {limit} bytes")]
    MemberTooLong { line: usize, limit: usize },
}

fn byte_repr(b: &u8) -> String {
    std::ascii::escape_default(*b).to_string()
}

impl SyntaxError {
    /// Physical line the error was detected on.
    pub fn line(&self) -> usize {
        match self {
            Self::IllegalEscape { line, .. }
            | Self::MissingSeparator { line }
            | Self::EmptyKey { line }
            | Self::UnterminatedContinuation { line }
            | Self::InvalidUtf8 { line }
            | Self::MemberTooLong { line, .. } => *line,
        }
    }
}

impl ErrorExt for SyntaxError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::IllegalEscape { .. } => StatusCode::IllegalEscape,
            Self::MissingSeparator { .. } => StatusCode::MissingSeparator,
            Self::EmptyKey { .. } => StatusCode::EmptyKey,
            Self::UnterminatedContinuation { .. } => StatusCode::UnterminatedContinuation,
            Self::InvalidUtf8 { .. } => StatusCode::InvalidUtf8,
            Self::MemberTooLong { .. } => StatusCode::SizeLimit,
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn metrics_tags(&self) -> Vec<(&'static str, String)> {
        vec![
            ("error_type", self.type_name()),
            ("status_code", self.status_code().to_string()),
            ("line", self.line().to_string()),
        ]
    }
}
