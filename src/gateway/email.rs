//! Contact delivery through SMTP using lettre

use anyhow::Context;
use askama::Template;
use lettre::{
    Message, SmtpTransport, Transport, message::Mailbox, message::header::ContentType,
    transport::smtp::authentication::Credentials,
};
use postbox_contact::{FormFields, Gateway, GatewayError, Outcome, Receipt};
use tracing::{error, info};

use crate::config::{EmailConfig, MessagesConfig};

#[derive(Template)]
#[template(path = "emails/contact.txt")]
struct ContactEmailTemplate<'a> {
    fields: &'a FormFields,
}

/// Forwards every submission to a fixed inbox as a plain-text email
#[derive(Clone)]
pub struct EmailGateway {
    mailer: SmtpTransport,
    from: Mailbox,
    to: Mailbox,
    subject: String,
    messages: MessagesConfig,
}

impl EmailGateway {
    pub fn new(config: &EmailConfig, messages: &MessagesConfig) -> anyhow::Result<Self> {
        let mailer = if config.smtp_username.is_empty() || config.smtp_password.is_empty() {
            info!(
                smtp_host = %config.smtp_host,
                smtp_port = config.smtp_port,
                "SMTP credentials not configured, using unauthenticated connection (e.g., MailDev)"
            );
            SmtpTransport::builder_dangerous(&config.smtp_host)
                .port(config.smtp_port)
                .build()
        } else {
            info!(
                smtp_host = %config.smtp_host,
                smtp_port = config.smtp_port,
                to = %config.to_address,
                "Email gateway initialized with authentication and TLS"
            );
            let creds =
                Credentials::new(config.smtp_username.clone(), config.smtp_password.clone());
            SmtpTransport::relay(&config.smtp_host)?
                .port(config.smtp_port)
                .credentials(creds)
                .build()
        };

        Ok(Self {
            mailer,
            from: config
                .from_address
                .parse()
                .with_context(|| format!("invalid from_address '{}'", config.from_address))?,
            to: config
                .to_address
                .parse()
                .with_context(|| format!("invalid to_address '{}'", config.to_address))?,
            subject: config.subject.clone(),
            messages: messages.clone(),
        })
    }

    pub(crate) fn compose(&self, fields: &FormFields) -> anyhow::Result<Message> {
        let body = ContactEmailTemplate { fields }
            .render()
            .context("Failed to render contact email template")?;

        let mut builder = Message::builder()
            .from(self.from.clone())
            .to(self.to.clone())
            .subject(&self.subject)
            .header(ContentType::TEXT_PLAIN);

        // The address already passed the form rules, lettre is stricter.
        if let Ok(reply_to) = format!("{} <{}>", fields.name, fields.email).parse::<Mailbox>() {
            builder = builder.reply_to(reply_to);
        }

        Ok(builder.body(body)?)
    }
}

#[async_trait::async_trait]
impl Gateway for EmailGateway {
    async fn submit(&self, fields: &FormFields) -> Outcome {
        let email = match self.compose(fields) {
            Ok(email) => email,
            Err(e) => {
                error!(error = %e, "Failed to build contact email");
                return Err(GatewayError::new(&self.messages.failure));
            }
        };

        let mailer = self.mailer.clone();
        let sent = tokio::task::spawn_blocking(move || mailer.send(&email)).await;

        match sent {
            Ok(Ok(_)) => {
                info!(to = %self.to, from_name = %fields.name, "Contact email sent");
                Ok(Receipt::new(&self.messages.success))
            }
            Ok(Err(e)) => {
                error!(error = %e, to = %self.to, "Failed to send contact email via SMTP");
                Err(GatewayError::new(&self.messages.failure))
            }
            Err(e) => {
                error!(error = %e, "SMTP task aborted");
                Err(GatewayError::new(&self.messages.failure))
            }
        }
    }
}
