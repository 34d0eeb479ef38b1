//! Error types for plan submission and output actions.

use thiserror::Error;

/// Errors surfaced by the submission pipeline and the output actions.
///
/// The `Display` text of each variant is the message shown to the user,
/// so an alert reads `format!("Error: {err}")`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlanError {
    /// File mode was submitted without a file.
    #[error("No file selected.")]
    Validation,

    /// The backend answered with a non-success status.
    #[error("{message}")]
    Request { status: u16, message: String },

    /// The request never produced a response.
    #[error("Network error: {0}")]
    Network(String),

    /// The response body was not the JSON we expected.
    #[error("Invalid response: {0}")]
    Parse(String),

    /// Writing to the system clipboard failed.
    #[error("Clipboard write failed: {0}")]
    Clipboard(String),

    /// Reading or writing a local file failed.
    #[error("{0}")]
    Io(String),
}

impl PlanError {
    /// Message for the blocking alert shown after a failed submission.
    pub fn alert_text(&self) -> String {
        format!("Error: {self}")
    }
}

impl From<serde_json::Error> for PlanError {
    fn from(e: serde_json::Error) -> Self {
        PlanError::Parse(e.to_string())
    }
}

impl From<std::io::Error> for PlanError {
    fn from(e: std::io::Error) -> Self {
        PlanError::Io(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_error_shows_server_detail() {
        let err = PlanError::Request {
            status: 400,
            message: "bad input".to_string(),
        };
        assert_eq!(err.alert_text(), "Error: bad input");
    }

    #[test]
    fn test_validation_message() {
        assert_eq!(PlanError::Validation.alert_text(), "Error: No file selected.");
    }

    #[test]
    fn test_parse_error_from_serde() {
        let err: PlanError = serde_json::from_str::<serde_json::Value>("{")
            .unwrap_err()
            .into();
        assert!(matches!(err, PlanError::Parse(_)));
    }
}
