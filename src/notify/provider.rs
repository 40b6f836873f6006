//! Transactional email providers over HTTP.

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use tracing::debug;

use crate::error::EmailError;

const RESEND_API_BASE: &str = "https://api.resend.com";
const SENDGRID_API_BASE: &str = "https://api.sendgrid.com";

/// A fully composed message ready to hand to a provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutgoingEmail {
    /// Sender mailbox, `Name <addr>` or a bare address.
    pub from: String,
    pub to: String,
    pub subject: String,
    pub text: String,
    pub html: String,
}

/// What a provider reports after accepting a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryReceipt {
    pub provider: String,
    pub message_id: Option<String>,
}

/// Sends one email through some service.
#[async_trait]
pub trait EmailProvider: Send + Sync {
    /// Short service name (`"resend"`), used in logs and responses.
    fn name(&self) -> &str;

    async fn send(&self, email: &OutgoingEmail) -> Result<DeliveryReceipt, EmailError>;
}

/// Resend (`POST /emails`).
pub struct ResendProvider {
    client: reqwest::Client,
    api_key: Option<SecretString>,
    base_url: String,
}

impl ResendProvider {
    pub fn new(api_key: Option<SecretString>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            base_url: RESEND_API_BASE.to_string(),
        }
    }

    /// Point the provider at another host (a local stub in tests).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }
}

#[derive(Deserialize)]
struct ResendResponse {
    id: Option<String>,
}

#[async_trait]
impl EmailProvider for ResendProvider {
    fn name(&self) -> &str {
        "resend"
    }

    async fn send(&self, email: &OutgoingEmail) -> Result<DeliveryReceipt, EmailError> {
        let api_key = self.api_key.as_ref().ok_or_else(|| EmailError::NotConfigured {
            provider: self.name().into(),
            reason: "RESEND_API_KEY is not set".into(),
        })?;

        let body = serde_json::json!({
            "from": email.from,
            "to": [email.to],
            "subject": email.subject,
            "text": email.text,
            "html": email.html,
        });

        let resp = self
            .client
            .post(format!("{}/emails", self.base_url))
            .bearer_auth(api_key.expose_secret())
            .json(&body)
            .send()
            .await
            .map_err(|e| EmailError::RequestFailed {
                provider: self.name().into(),
                reason: e.to_string(),
            })?;

        let status = resp.status();
        if !status.is_success() {
            return Err(EmailError::Rejected {
                provider: self.name().into(),
                status: status.as_u16(),
                body: resp.text().await.unwrap_or_default(),
            });
        }

        let message_id = resp
            .json::<ResendResponse>()
            .await
            .ok()
            .and_then(|r| r.id);
        debug!(provider = "resend", message_id = ?message_id, "Email accepted");

        Ok(DeliveryReceipt {
            provider: self.name().into(),
            message_id,
        })
    }
}

/// SendGrid v3 (`POST /v3/mail/send`).
pub struct SendGridProvider {
    client: reqwest::Client,
    api_key: Option<SecretString>,
    base_url: String,
}

impl SendGridProvider {
    pub fn new(api_key: Option<SecretString>) -> Self {
        Self {
            client: reqwest::Client::new(),
            api_key,
            base_url: SENDGRID_API_BASE.to_string(),
        }
    }

    /// Point the provider at another host (a local stub in tests).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_string();
        self
    }
}

#[async_trait]
impl EmailProvider for SendGridProvider {
    fn name(&self) -> &str {
        "sendgrid"
    }

    async fn send(&self, email: &OutgoingEmail) -> Result<DeliveryReceipt, EmailError> {
        let api_key = self.api_key.as_ref().ok_or_else(|| EmailError::NotConfigured {
            provider: self.name().into(),
            reason: "SENDGRID_API_KEY is not set".into(),
        })?;

        let (from_name, from_address) = split_mailbox(&email.from);
        let mut from = serde_json::json!({ "email": from_address });
        if let Some(name) = from_name {
            from["name"] = serde_json::Value::String(name.to_string());
        }

        let body = serde_json::json!({
            "personalizations": [{ "to": [{ "email": email.to }] }],
            "from": from,
            "subject": email.subject,
            "content": [
                { "type": "text/plain", "value": email.text },
                { "type": "text/html", "value": email.html },
            ],
        });

        let resp = self
            .client
            .post(format!("{}/v3/mail/send", self.base_url))
            .bearer_auth(api_key.expose_secret())
            .json(&body)
            .send()
            .await
            .map_err(|e| EmailError::RequestFailed {
                provider: self.name().into(),
                reason: e.to_string(),
            })?;

        let status = resp.status();
        if !status.is_success() {
            return Err(EmailError::Rejected {
                provider: self.name().into(),
                status: status.as_u16(),
                body: resp.text().await.unwrap_or_default(),
            });
        }

        let message_id = resp
            .headers()
            .get("x-message-id")
            .and_then(|v| v.to_str().ok())
            .map(str::to_string);
        debug!(provider = "sendgrid", message_id = ?message_id, "Email accepted");

        Ok(DeliveryReceipt {
            provider: self.name().into(),
            message_id,
        })
    }
}

/// Split `Name <addr>` into its display name and address.
pub fn split_mailbox(mailbox: &str) -> (Option<&str>, &str) {
    let mailbox = mailbox.trim();
    match (mailbox.find('<'), mailbox.rfind('>')) {
        (Some(open), Some(close)) if open < close => {
            let name = mailbox[..open].trim().trim_matches('"').trim();
            let address = mailbox[open + 1..close].trim();
            ((!name.is_empty()).then_some(name), address)
        }
        _ => (None, mailbox),
    }
}
