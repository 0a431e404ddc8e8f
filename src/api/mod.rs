//! Registration backend module

mod client;
mod error;
mod simulated;
mod traits;

pub use client::HttpRegistrationApi;
pub use error::SubmitError;
pub use simulated::SimulatedRegistrationApi;
pub use traits::{RegistrationApi, RegistrationReceipt};

#[cfg(test)]
pub use traits::MockRegistrationApi;

use crate::config::PortalConfig;
use std::sync::Arc;

/// Pick the backend described by the configuration
///
/// A configured endpoint gets the HTTP client; otherwise submissions are
/// simulated.
pub fn from_config(config: &PortalConfig) -> Result<Arc<dyn RegistrationApi>, SubmitError> {
    match config.register_endpoint.as_deref() {
        Some(endpoint) => {
            tracing::info!(%endpoint, "using HTTP registration endpoint");
            Ok(Arc::new(HttpRegistrationApi::new(
                endpoint,
                config.request_timeout(),
            )?))
        }
        None => {
            tracing::info!("no registration endpoint configured, simulating submissions");
            Ok(Arc::new(SimulatedRegistrationApi::new(
                config.simulated_latency(),
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_config_defaults_to_simulated() {
        let api = from_config(&PortalConfig::default()).unwrap();
        assert_eq!(api.describe(), "simulated backend");
    }

    #[test]
    fn test_from_config_uses_endpoint() {
        let config = PortalConfig {
            register_endpoint: Some("http://127.0.0.1:8080/auth/register/govt".to_string()),
            ..Default::default()
        };
        let api = from_config(&config).unwrap();
        assert_eq!(api.describe(), "http://127.0.0.1:8080/auth/register/govt");
    }
}
