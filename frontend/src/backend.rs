use std::time::Duration;

use thiserror::Error;
use tracing::info;

use crate::catalog::AnimalCard;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BackendError {
    #[error("donation was rejected: {0}")]
    Rejected(String),

    #[error("donation backend unavailable: {0}")]
    Unavailable(String),
}

/// Where a confirmed donation is sent.
#[allow(async_fn_in_trait)]
pub trait DonationBackend {
    async fn submit(
        &self,
        donor: &str,
        animal: &AnimalCard,
        amount: f64,
    ) -> Result<(), BackendError>;
}

/// Stands in for the contract call: waits `delay` and reports success.
#[derive(Debug, Clone)]
pub struct SimulatedBackend {
    delay: Duration,
}

impl SimulatedBackend {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for SimulatedBackend {
    fn default() -> Self {
        Self::new(Duration::from_millis(2000))
    }
}

impl DonationBackend for SimulatedBackend {
    async fn submit(
        &self,
        donor: &str,
        animal: &AnimalCard,
        amount: f64,
    ) -> Result<(), BackendError> {
        info!(animal = animal.name, amount, donor, "submitting simulated donation");
        tokio::time::sleep(self.delay).await;
        Ok(())
    }
}
