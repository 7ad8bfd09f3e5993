mod email;
mod http;

use std::{sync::Arc, time::Duration};

use postbox_contact::{Gateway, SimulatedGateway};

use crate::config::{Config, GatewayKind};

pub use email::EmailGateway;
pub use http::HttpGateway;

/// Build the gateway selected by `gateway.kind`
pub fn build(config: &Config) -> anyhow::Result<Arc<dyn Gateway>> {
    let gateway: Arc<dyn Gateway> = match config.gateway.kind {
        GatewayKind::Simulated => {
            let simulated = &config.gateway.simulated;
            tracing::warn!(
                delay_ms = simulated.delay_ms,
                success_rate = simulated.success_rate,
                "Using simulated gateway, submissions are not delivered anywhere"
            );

            Arc::new(SimulatedGateway::new(
                Duration::from_millis(simulated.delay_ms),
                simulated.success_rate,
            ))
        }
        GatewayKind::Http => {
            let http = &config.gateway.http;
            tracing::info!(endpoint = %http.endpoint, "Using HTTP gateway");

            Arc::new(HttpGateway::new(
                http.endpoint.clone(),
                Duration::from_secs(http.timeout_secs),
                &config.messages,
            )?)
        }
        GatewayKind::Email => Arc::new(EmailGateway::new(&config.email, &config.messages)?),
    };

    Ok(gateway)
}
