use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use postbox_contact::{NETWORK_ERROR_MESSAGE, SUCCESS_MESSAGE};
use serde::Deserialize;
use std::env;
use strum::Display;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    #[serde(default)]
    pub gateway: GatewayConfig,
    #[serde(default)]
    pub email: EmailConfig,
    #[serde(default)]
    pub messages: MessagesConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Clone, Copy, Default, PartialEq, Eq, Display)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum GatewayKind {
    /// Random outcome after a delay, for demos only
    #[default]
    Simulated,
    /// JSON POST to an external endpoint
    Http,
    /// Plain-text email through SMTP
    Email,
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct GatewayConfig {
    #[serde(default)]
    pub kind: GatewayKind,
    #[serde(default)]
    pub simulated: SimulatedConfig,
    #[serde(default)]
    pub http: HttpConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SimulatedConfig {
    #[serde(default = "default_simulated_delay_ms")]
    pub delay_ms: u64,
    #[serde(default = "default_simulated_success_rate")]
    pub success_rate: f64,
}

impl Default for SimulatedConfig {
    fn default() -> Self {
        Self {
            delay_ms: default_simulated_delay_ms(),
            success_rate: default_simulated_success_rate(),
        }
    }
}

fn default_simulated_delay_ms() -> u64 {
    1500
}

fn default_simulated_success_rate() -> f64 {
    0.9
}

#[derive(Debug, Deserialize, Clone)]
pub struct HttpConfig {
    #[serde(default)]
    pub endpoint: String,
    #[serde(default = "default_http_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            endpoint: String::new(),
            timeout_secs: default_http_timeout_secs(),
        }
    }
}

fn default_http_timeout_secs() -> u64 {
    10
}

#[derive(Debug, Deserialize, Clone)]
pub struct EmailConfig {
    #[serde(default = "default_smtp_host")]
    pub smtp_host: String,
    #[serde(default = "default_smtp_port")]
    pub smtp_port: u16,
    #[serde(default)]
    pub smtp_username: String,
    #[serde(default)]
    pub smtp_password: String,
    #[serde(default)]
    pub from_address: String,
    #[serde(default)]
    pub to_address: String,
    #[serde(default = "default_email_subject")]
    pub subject: String,
}

impl Default for EmailConfig {
    fn default() -> Self {
        Self {
            smtp_host: default_smtp_host(),
            smtp_port: default_smtp_port(),
            smtp_username: String::new(),
            smtp_password: String::new(),
            from_address: String::new(),
            to_address: String::new(),
            subject: default_email_subject(),
        }
    }
}

fn default_smtp_host() -> String {
    "localhost".to_string()
}

fn default_smtp_port() -> u16 {
    1025
}

fn default_email_subject() -> String {
    "New message from contact page".to_string()
}

/// Texts shown in the feedback banner by gateways that do not supply their own.
#[derive(Debug, Deserialize, Clone)]
pub struct MessagesConfig {
    #[serde(default = "default_success_message")]
    pub success: String,
    #[serde(default = "default_failure_message")]
    pub failure: String,
}

impl Default for MessagesConfig {
    fn default() -> Self {
        Self {
            success: default_success_message(),
            failure: default_failure_message(),
        }
    }
}

fn default_success_message() -> String {
    SUCCESS_MESSAGE.to_string()
}

fn default_failure_message() -> String {
    NETWORK_ERROR_MESSAGE.to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub json: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            json: false,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (POSTBOX__SERVER__PORT, etc.)
    /// 2. Config file specified by path
    /// 3. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder();

        builder = builder
            .set_default("server.host", "127.0.0.1")?
            .set_default("server.port", 3000)?;

        let config_file_path = config_path
            .or_else(|| env::var("CONFIG_PATH").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        // Optional, ignored when missing
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("POSTBOX")
                .separator("__")
                .try_parsing(true),
        );

        if let Ok(endpoint) = env::var("CONTACT_ENDPOINT") {
            builder = builder
                .set_override("gateway.kind", "http")?
                .set_override("gateway.http.endpoint", endpoint)?;
        }

        builder.build()?.try_deserialize()
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.server.port == 0 {
            return Err("Server port must be greater than 0".to_string());
        }

        let rate = self.gateway.simulated.success_rate;
        if !(0.0..=1.0).contains(&rate) {
            return Err(format!(
                "Simulated success_rate must be between 0 and 1, got {rate}"
            ));
        }

        match self.gateway.kind {
            GatewayKind::Simulated => {}
            GatewayKind::Http => {
                let endpoint = url::Url::parse(&self.gateway.http.endpoint).map_err(|e| {
                    format!(
                        "Invalid gateway endpoint '{}': {e}",
                        self.gateway.http.endpoint
                    )
                })?;

                if !matches!(endpoint.scheme(), "http" | "https") {
                    return Err(format!(
                        "Gateway endpoint must use http or https, got {}",
                        endpoint.scheme()
                    ));
                }

                if self.gateway.http.timeout_secs == 0 {
                    return Err("Gateway timeout_secs must be greater than 0".to_string());
                }
            }
            GatewayKind::Email => {
                if self.email.from_address.is_empty() || self.email.to_address.is_empty() {
                    return Err(
                        "Email gateway requires email.from_address and email.to_address"
                            .to_string(),
                    );
                }
            }
        }

        Ok(())
    }
}
