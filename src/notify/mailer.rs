//! Primary/alternate provider delivery and the professor notifier.

use std::sync::Arc;

use tracing::{info, warn};

use super::compose::compose_professor_email;
use super::matching::select_professor;
use super::provider::{DeliveryReceipt, EmailProvider, OutgoingEmail, ResendProvider, SendGridProvider};
use super::{EmailService, EmailSettings};
use crate::error::EmailError;

/// Result of a successful send.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delivery {
    pub receipt: DeliveryReceipt,
    /// True when the primary provider failed and the alternate delivered.
    pub used_fallback: bool,
}

/// Sends through a primary provider, retrying once on the alternate.
pub struct Mailer {
    primary: Arc<dyn EmailProvider>,
    fallback: Arc<dyn EmailProvider>,
}

impl Mailer {
    pub fn new(primary: Arc<dyn EmailProvider>, fallback: Arc<dyn EmailProvider>) -> Self {
        Self { primary, fallback }
    }

    /// Build Resend and SendGrid providers, with the configured service first.
    pub fn from_settings(settings: &EmailSettings) -> Self {
        let provider_for = |service: EmailService| -> Arc<dyn EmailProvider> {
            let key = settings.api_key(service).cloned();
            match service {
                EmailService::Resend => Arc::new(ResendProvider::new(key)),
                EmailService::SendGrid => Arc::new(SendGridProvider::new(key)),
            }
        };
        Self::new(
            provider_for(settings.service),
            provider_for(settings.service.alternate()),
        )
    }

    pub fn primary_name(&self) -> &str {
        self.primary.name()
    }

    pub async fn send(&self, email: &OutgoingEmail) -> Result<Delivery, EmailError> {
        let primary_error = match self.primary.send(email).await {
            Ok(receipt) => {
                return Ok(Delivery {
                    receipt,
                    used_fallback: false,
                });
            }
            Err(e) => e,
        };

        warn!(
            primary = self.primary.name(),
            fallback = self.fallback.name(),
            error = %primary_error,
            "Primary email provider failed; retrying with fallback"
        );

        match self.fallback.send(email).await {
            Ok(receipt) => Ok(Delivery {
                receipt,
                used_fallback: true,
            }),
            Err(fallback_error) => Err(EmailError::AllProvidersFailed {
                primary: self.primary.name().to_string(),
                primary_error: primary_error.to_string(),
                fallback: self.fallback.name().to_string(),
                fallback_error: fallback_error.to_string(),
            }),
        }
    }
}

/// What the notify endpoint reports back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotifyOutcome {
    pub professor_name: &'static str,
    pub provider: String,
    pub used_fallback: bool,
}

/// Picks a professor, composes the inquiry and sends it.
pub struct Notifier {
    mailer: Mailer,
    from_address: String,
}

impl Notifier {
    pub fn new(mailer: Mailer, from_address: impl Into<String>) -> Self {
        Self {
            mailer,
            from_address: from_address.into(),
        }
    }

    pub fn from_settings(settings: &EmailSettings) -> Self {
        Self::new(Mailer::from_settings(settings), settings.from_address())
    }

    pub async fn notify(
        &self,
        student_email: &str,
        summary: &str,
        selected_professor: Option<&str>,
    ) -> Result<NotifyOutcome, EmailError> {
        let professor = select_professor(summary, selected_professor);
        let composed = compose_professor_email(student_email, summary, professor.name);

        let email = OutgoingEmail {
            from: self.from_address.clone(),
            to: professor.email.to_string(),
            subject: composed.subject,
            text: composed.text,
            html: composed.html,
        };

        let delivery = self.mailer.send(&email).await?;
        info!(
            professor = professor.name,
            provider = %delivery.receipt.provider,
            used_fallback = delivery.used_fallback,
            "Professor notified"
        );

        Ok(NotifyOutcome {
            professor_name: professor.name,
            provider: delivery.receipt.provider,
            used_fallback: delivery.used_fallback,
        })
    }
}
