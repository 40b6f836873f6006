//! Professor notification email.
//!
//! A student who wants to talk to a professor submits their address and a
//! chat summary. The notifier picks the best-matching professor, composes
//! the email and sends it through the configured provider, retrying once on
//! the alternate provider.

pub mod compose;
pub mod mailer;
pub mod matching;
pub mod provider;
pub mod routes;

use std::fmt;
use std::str::FromStr;

use secrecy::SecretString;

use crate::error::ConfigError;

pub use compose::{ProfessorEmail, SummaryMessage, compose_professor_email, format_chat_summary};
pub use mailer::{Delivery, Mailer, Notifier, NotifyOutcome};
pub use matching::{professor_score, select_professor};
pub use provider::{
    DeliveryReceipt, EmailProvider, OutgoingEmail, ResendProvider, SendGridProvider,
};
pub use routes::{NotifyRouteState, notify_routes};

/// Default domain for the sender address.
pub const DEFAULT_FROM_DOMAIN: &str = "dcs.bates.edu";

/// Supported transactional email services.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmailService {
    Resend,
    SendGrid,
}

impl EmailService {
    /// The service tried when this one fails.
    pub fn alternate(&self) -> EmailService {
        match self {
            Self::Resend => Self::SendGrid,
            Self::SendGrid => Self::Resend,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Resend => "resend",
            Self::SendGrid => "sendgrid",
        }
    }
}

impl Default for EmailService {
    fn default() -> Self {
        Self::Resend
    }
}

impl fmt::Display for EmailService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for EmailService {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "resend" => Ok(Self::Resend),
            "sendgrid" => Ok(Self::SendGrid),
            other => Err(ConfigError::UnknownEmailService(other.to_string())),
        }
    }
}

/// Email provider settings.
#[derive(Debug, Clone)]
pub struct EmailSettings {
    /// Provider tried first.
    pub service: EmailService,
    /// Domain of the `noreply@` sender address.
    pub from_domain: String,
    pub resend_api_key: Option<SecretString>,
    pub sendgrid_api_key: Option<SecretString>,
}

impl Default for EmailSettings {
    fn default() -> Self {
        Self {
            service: EmailService::default(),
            from_domain: DEFAULT_FROM_DOMAIN.to_string(),
            resend_api_key: None,
            sendgrid_api_key: None,
        }
    }
}

impl EmailSettings {
    /// Read `EMAIL_SERVICE`, `EMAIL_FROM_DOMAIN`, `RESEND_API_KEY` and
    /// `SENDGRID_API_KEY`. Missing keys are allowed; the provider then fails
    /// at send time and the fallback takes over.
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();
        let service = match non_empty_env("EMAIL_SERVICE") {
            Some(value) => value.parse()?,
            None => defaults.service,
        };
        Ok(Self {
            service,
            from_domain: non_empty_env("EMAIL_FROM_DOMAIN").unwrap_or(defaults.from_domain),
            resend_api_key: non_empty_env("RESEND_API_KEY").map(SecretString::from),
            sendgrid_api_key: non_empty_env("SENDGRID_API_KEY").map(SecretString::from),
        })
    }

    /// `DCS Bot <noreply@domain>`.
    pub fn from_address(&self) -> String {
        format!("DCS Bot <noreply@{}>", self.from_domain)
    }

    pub fn api_key(&self, service: EmailService) -> Option<&SecretString> {
        match service {
            EmailService::Resend => self.resend_api_key.as_ref(),
            EmailService::SendGrid => self.sendgrid_api_key.as_ref(),
        }
    }
}

fn non_empty_env(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
