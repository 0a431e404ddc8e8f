//! Submission errors

use thiserror::Error;

/// Why a registration request did not succeed
#[derive(Debug, Error)]
pub enum SubmitError {
    /// The request never produced a response
    #[error("failed to reach registration endpoint: {0}")]
    Transport(#[from] reqwest::Error),

    /// The endpoint answered with a non-2xx status
    #[error("registration rejected with status {status}{}", detail(.message))]
    Rejected { status: u16, message: Option<String> },

    /// The background submission task panicked or was cancelled
    #[error("submission task failed: {0}")]
    Task(String),
}

fn detail(message: &Option<String>) -> String {
    message
        .as_deref()
        .map(|m| format!(": {m}"))
        .unwrap_or_default()
}
