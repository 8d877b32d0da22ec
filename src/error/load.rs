use std::{any::Any, io};

use propfile_error::{ErrorExt, StatusCode, SyntaxError};
use thiserror::Error;

pub type LoadResult<T> = Result<T, LoadError>;

/// Failure of a load.
///
/// Both variants are transparent: an IO error displays and chains exactly
/// like the `std::io::Error` returned by the reader.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error(transparent)]
    Syntax(#[from] SyntaxError),

    #[error(transparent)]
    Io(#[from] io::Error),
}

impl LoadError {
    /// Line of the offending definition, `None` for IO errors.
    pub fn line(&self) -> Option<usize> {
        match self {
            Self::Syntax(e) => Some(e.line()),
            Self::Io(_) => None,
        }
    }

    pub fn is_io(&self) -> bool {
        matches!(self, Self::Io(_))
    }

    pub fn as_syntax(&self) -> Option<&SyntaxError> {
        match self {
            Self::Syntax(e) => Some(e),
            Self::Io(_) => None,
        }
    }

    /// Returns the underlying IO error, if that is what failed.
    pub fn into_io(self) -> Option<io::Error> {
        match self {
            Self::Io(e) => Some(e),
            Self::Syntax(_) => None,
        }
    }
}

impl ErrorExt for LoadError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Syntax(e) => e.status_code(),
            Self::Io(e) => match e.kind() {
                io::ErrorKind::NotFound => StatusCode::NotFound,
                io::ErrorKind::TimedOut => StatusCode::Timeout,
                io::ErrorKind::UnexpectedEof => StatusCode::UnexpectedEof,
                io::ErrorKind::InvalidData => StatusCode::InvalidData,
                _ => StatusCode::Io,
            },
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error as _;

    use super::*;

    #[test]
    fn test_io_error_is_transparent() {
        let err = LoadError::from(io::Error::new(io::ErrorKind::TimedOut, "slow disk"));
        assert_eq!(err.to_string(), "slow disk");
        assert!(err.is_io());
        assert_eq!(err.line(), None);
        assert_eq!(err.status_code(), StatusCode::Timeout);
        assert_eq!(
            err.into_io().map(|e| e.kind()),
            Some(io::ErrorKind::TimedOut)
        );
    }

    #[test]
    fn test_syntax_error_is_transparent() {
        let err = LoadError::from(SyntaxError::EmptyKey { line: 4 });
        assert_eq!(
            err.to_string(),
            "invalid property definition on line 4: empty key"
        );
        assert_eq!(err.line(), Some(4));
        assert_eq!(err.status_code(), StatusCode::EmptyKey);
        assert!(err.as_syntax().is_some());
        assert!(err.source().is_none());
    }

    #[test]
    fn test_io_kind_mapping() {
        let err = LoadError::from(io::Error::from(io::ErrorKind::NotFound));
        assert_eq!(err.status_code(), StatusCode::NotFound);
        let err = LoadError::from(io::Error::from(io::ErrorKind::BrokenPipe));
        assert_eq!(err.status_code(), StatusCode::Io);
    }
}
