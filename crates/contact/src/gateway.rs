use std::{sync::Arc, time::Duration};

use crate::FormFields;

pub const SUCCESS_MESSAGE: &str = "Thank you! Your message has been received.";
pub const NETWORK_ERROR_MESSAGE: &str = "Network error. Please try again later.";
pub const UNKNOWN_ERROR_MESSAGE: &str = "An unknown error occurred";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Receipt {
    pub message: String,
}

impl Receipt {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Rejection from a gateway, the message is shown to the visitor as is.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct GatewayError {
    message: String,
}

impl GatewayError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn network() -> Self {
        Self::new(NETWORK_ERROR_MESSAGE)
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

pub type Outcome = Result<Receipt, GatewayError>;

/// Destination of a validated form.
///
/// One call produces exactly one outcome: no partial progress, no
/// cancellation.
#[async_trait::async_trait]
pub trait Gateway: Send + Sync {
    async fn submit(&self, fields: &FormFields) -> Outcome;
}

#[async_trait::async_trait]
impl<G: Gateway + ?Sized> Gateway for Arc<G> {
    async fn submit(&self, fields: &FormFields) -> Outcome {
        (**self).submit(fields).await
    }
}

#[async_trait::async_trait]
impl<G: Gateway + ?Sized> Gateway for Box<G> {
    async fn submit(&self, fields: &FormFields) -> Outcome {
        (**self).submit(fields).await
    }
}

/// Demo gateway that waits and then succeeds at random.
///
/// Never deliver real traffic through it.
#[derive(Clone, Debug)]
pub struct SimulatedGateway {
    delay: Duration,
    success_rate: f64,
}

impl Default for SimulatedGateway {
    fn default() -> Self {
        Self {
            delay: Duration::from_millis(1500),
            success_rate: 0.9,
        }
    }
}

impl SimulatedGateway {
    pub fn new(delay: Duration, success_rate: f64) -> Self {
        Self {
            delay,
            success_rate: success_rate.clamp(0.0, 1.0),
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    pub fn success_rate(&self) -> f64 {
        self.success_rate
    }
}

#[async_trait::async_trait]
impl Gateway for SimulatedGateway {
    async fn submit(&self, fields: &FormFields) -> Outcome {
        tokio::time::sleep(self.delay).await;

        let roll = rand::random::<f64>();

        tracing::debug!(
            email = %fields.email,
            roll,
            success_rate = self.success_rate,
            "simulated submission settled"
        );

        if roll < self.success_rate {
            Ok(Receipt::new(SUCCESS_MESSAGE))
        } else {
            Err(GatewayError::network())
        }
    }
}
