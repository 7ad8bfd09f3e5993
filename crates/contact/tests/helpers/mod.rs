#![allow(dead_code)]

use std::sync::Mutex;

use postbox_contact::{FormFields, Gateway, GatewayError, Outcome, Receipt};

/// Gateway that records every call and answers with a fixed outcome.
pub struct StubGateway {
    outcome: Outcome,
    calls: Mutex<Vec<FormFields>>,
}

impl StubGateway {
    pub fn succeeding(message: impl Into<String>) -> Self {
        Self {
            outcome: Ok(Receipt::new(message)),
            calls: Mutex::new(vec![]),
        }
    }

    pub fn rejecting(message: impl Into<String>) -> Self {
        Self {
            outcome: Err(GatewayError::new(message)),
            calls: Mutex::new(vec![]),
        }
    }

    pub fn calls(&self) -> Vec<FormFields> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait::async_trait]
impl Gateway for StubGateway {
    async fn submit(&self, fields: &FormFields) -> Outcome {
        self.calls.lock().unwrap().push(fields.clone());
        self.outcome.clone()
    }
}

pub fn valid_fields() -> FormFields {
    FormFields::new("Test User", "test@example.com", "This is a test message")
}
