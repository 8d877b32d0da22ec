use std::any::Any;

use propfile_error::{ErrorExt, StatusCode};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("Invalid log filter directive '{directive}': {reason}")]
    InvalidDirective { directive: String, reason: String },

    #[error("Global subscriber already installed: {0}")]
    AlreadyInitialized(#[from] tracing_subscriber::util::TryInitError),
}

impl ErrorExt for LoggingError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidDirective { .. } => StatusCode::InvalidConfig,
            Self::AlreadyInitialized(_) => StatusCode::Internal,
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_directive_is_config_error() {
        let err = LoggingError::InvalidDirective {
            directive: "propfile=loudest".to_string(),
            reason: "unknown level".to_string(),
        };
        assert_eq!(err.status_code(), StatusCode::InvalidConfig);
        assert!(err.status_code().is_client_error());
        assert!(err.client_message().contains("propfile=loudest"));
    }

    #[test]
    fn test_second_install_is_internal() {
        use tracing_subscriber::util::SubscriberInitExt;

        // A fresh subscriber per attempt; only the first can become global.
        let first = tracing_subscriber::registry().try_init();
        let second = tracing_subscriber::registry().try_init();
        let err = LoggingError::from(
            first
                .and(second)
                .expect_err("two global installs cannot both succeed"),
        );
        assert_eq!(err.status_code(), StatusCode::Internal);
        assert_eq!(err.client_message(), "Internal error");
    }
}
