// src/error.rs
use thiserror::Error;

use crate::types::Mode;

/// The one message users see for any failed upload or ranking
pub const GENERIC_UPLOAD_ERROR: &str = "Failed to upload. Please try again.";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PanelError {
    #[error("Action unavailable: {reason}")]
    ActionDisabled { reason: DisabledReason },

    #[error(
        "No accepted file among [{}] in {mode} mode (accepted: {})",
        .names.join(", "),
        .mode.accepted_mime_types().join(", ")
    )]
    FileRejected { names: Vec<String>, mode: Mode },

    #[error("{0}")]
    UploadFailed(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DisabledReason {
    #[error("no file selected")]
    NoFileSelected,

    #[error("a request is already in flight")]
    Busy,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let disabled = PanelError::ActionDisabled {
            reason: DisabledReason::NoFileSelected,
        };
        assert_eq!(disabled.to_string(), "Action unavailable: no file selected");

        let rejected = PanelError::FileRejected {
            names: vec!["notes.txt".to_string(), "cv.pdf".to_string()],
            mode: Mode::Bulk,
        };
        let display = rejected.to_string();
        assert!(display.contains("notes.txt, cv.pdf"));
        assert!(display.contains("bulk mode"));
        assert!(display.contains("application/zip"));

        let failed = PanelError::UploadFailed(GENERIC_UPLOAD_ERROR.to_string());
        assert_eq!(failed.to_string(), GENERIC_UPLOAD_ERROR);
    }
}
