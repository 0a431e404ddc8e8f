//! Simulated backend used when no endpoint is configured

use super::error::SubmitError;
use super::traits::{RegistrationApi, RegistrationReceipt};
use crate::state::FormData;
use async_trait::async_trait;
use std::time::Duration;

/// Accepts every registration after a fixed delay without any network I/O
#[derive(Debug, Clone)]
pub struct SimulatedRegistrationApi {
    latency: Duration,
}

impl SimulatedRegistrationApi {
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }
}

#[async_trait]
impl RegistrationApi for SimulatedRegistrationApi {
    async fn register(&self, data: &FormData) -> Result<RegistrationReceipt, SubmitError> {
        tracing::debug!(
            username = %data.username,
            latency_ms = self.latency.as_millis() as u64,
            "simulating registration request"
        );
        tokio::time::sleep(self.latency).await;
        Ok(RegistrationReceipt::default())
    }

    fn describe(&self) -> String {
        "simulated backend".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::valid_form_data;
    use std::time::Instant;

    #[test]
    fn test_simulated_register_succeeds_after_latency() {
        let api = SimulatedRegistrationApi::new(Duration::from_millis(20));
        let started = Instant::now();
        let receipt = tokio_test::block_on(api.register(&valid_form_data())).unwrap();
        assert!(started.elapsed() >= Duration::from_millis(20));
        assert_eq!(receipt, RegistrationReceipt::default());
    }

    #[test]
    fn test_describe() {
        let api = SimulatedRegistrationApi::new(Duration::ZERO);
        assert_eq!(api.describe(), "simulated backend");
    }
}
