use std::time::Duration;

use postbox_contact::{FormFields, Gateway, GatewayError, Outcome, Receipt};
use reqwest::Client;
use serde::Deserialize;

use crate::config::MessagesConfig;

/// Body expected back from the contact endpoint
#[derive(Debug, Default, Deserialize)]
struct SubmissionResponse {
    #[serde(default)]
    success: Option<bool>,
    #[serde(default)]
    message: Option<String>,
}

/// Posts the form as JSON to a remote endpoint
#[derive(Clone)]
pub struct HttpGateway {
    client: Client,
    endpoint: String,
    messages: MessagesConfig,
}

impl HttpGateway {
    pub fn new(
        endpoint: impl Into<String>,
        request_timeout: Duration,
        messages: &MessagesConfig,
    ) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(request_timeout)
            .user_agent(concat!("postbox/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            endpoint: endpoint.into(),
            messages: messages.clone(),
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn message_or(&self, message: Option<String>, fallback: &str) -> String {
        message
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| fallback.to_owned())
    }
}

#[async_trait::async_trait]
impl Gateway for HttpGateway {
    async fn submit(&self, fields: &FormFields) -> Outcome {
        let response = match self.client.post(&self.endpoint).json(fields).send().await {
            Ok(response) => response,
            Err(e) => {
                tracing::error!(
                    error = %e,
                    endpoint = %self.endpoint,
                    timeout = e.is_timeout(),
                    "Contact endpoint unreachable"
                );
                return Err(GatewayError::new(&self.messages.failure));
            }
        };

        let status = response.status();
        let body = match response.json::<SubmissionResponse>().await {
            Ok(body) => body,
            Err(e) => {
                tracing::warn!(error = %e, %status, "Contact endpoint returned an unreadable body");
                SubmissionResponse::default()
            }
        };

        if status.is_success() && body.success.unwrap_or(true) {
            return Ok(Receipt::new(
                self.message_or(body.message, &self.messages.success),
            ));
        }

        tracing::warn!(%status, success = ?body.success, "Contact endpoint rejected submission");

        Err(GatewayError::new(
            self.message_or(body.message, &self.messages.failure),
        ))
    }
}
