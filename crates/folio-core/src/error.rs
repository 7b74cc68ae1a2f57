//! Error types for Folio

use thiserror::Error;

/// Main error type for Folio operations.
///
/// The only real failure path in the app is contact-form submission, so
/// the taxonomy is small: transport-level failures and non-success HTTP
/// statuses from the form relay. The UI collapses both into a single
/// user-facing error banner, but they stay distinct here for logging.
#[derive(Error, Debug)]
pub enum FolioError {
    /// Form relay answered with a non-success HTTP status
    #[error("Form relay returned status {0}")]
    RelayStatus(u16),

    /// Transport-level failure (connection, DNS, TLS, timeout)
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),
}

impl FolioError {
    /// Whether this error happened before any HTTP status was received.
    pub fn is_transport(&self) -> bool {
        matches!(self, FolioError::Transport(_))
    }
}

/// Result type alias using FolioError
pub type FolioResult<T> = Result<T, FolioError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = FolioError::RelayStatus(502);
        assert_eq!(format!("{}", err), "Form relay returned status 502");
    }

    #[test]
    fn test_status_is_not_transport() {
        assert!(!FolioError::RelayStatus(500).is_transport());
    }
}
