//! HTTP client for the registration endpoint
//!
//! Sends the form as a JSON `POST`. Any 2xx is a success; anything else is
//! turned into [`SubmitError::Rejected`].

use super::error::SubmitError;
use super::traits::{RegistrationApi, RegistrationReceipt};
use crate::state::FormData;
use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;

/// Client for a real registration endpoint
pub struct HttpRegistrationApi {
    client: reqwest::Client,
    endpoint: String,
}

impl HttpRegistrationApi {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, SubmitError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            endpoint: endpoint.into(),
        })
    }
}

#[async_trait]
impl RegistrationApi for HttpRegistrationApi {
    async fn register(&self, data: &FormData) -> Result<RegistrationReceipt, SubmitError> {
        tracing::debug!(endpoint = %self.endpoint, "posting registration request");

        let response = self.client.post(&self.endpoint).json(data).send().await?;
        let status = response.status().as_u16();
        let body = response.text().await?;

        interpret_response(status, &body)
    }

    fn describe(&self) -> String {
        self.endpoint.clone()
    }
}

/// Error body shape, e.g. `{"message": "Username already exists"}`
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

/// Map a status code and body to the typed result
fn interpret_response(status: u16, body: &str) -> Result<RegistrationReceipt, SubmitError> {
    if (200..300).contains(&status) {
        // A 2xx with an empty or non-JSON body is still a success
        return Ok(serde_json::from_str(body).unwrap_or_default());
    }

    let message = serde_json::from_str::<ErrorBody>(body)
        .ok()
        .and_then(|b| b.message)
        .or_else(|| {
            let trimmed = body.trim();
            (!trimmed.is_empty()).then(|| trimmed.to_string())
        });

    Err(SubmitError::Rejected { status, message })
}
