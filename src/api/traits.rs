//! Trait abstraction for the registration backend to enable mocking in tests

use super::error::SubmitError;
use crate::state::FormData;
use async_trait::async_trait;
use serde::Deserialize;

/// Successful registration response
///
/// Mirrors the backend's `Register` envelope; both parts are optional since
/// any 2xx counts as success.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RegistrationReceipt {
    pub message: Option<String>,
    pub token: Option<String>,
}

/// Backend that accepts officer registrations
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RegistrationApi: Send + Sync {
    /// Submit a registration request
    async fn register(&self, data: &FormData) -> Result<RegistrationReceipt, SubmitError>;

    /// Short description of where requests go, for the status bar
    fn describe(&self) -> String;
}
