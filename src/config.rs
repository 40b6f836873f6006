//! Configuration types.

use std::time::Duration;

use crate::error::ConfigError;
use crate::notify::EmailSettings;
use crate::questionnaire::SupabaseSettings;

/// Default HTTP port for the service.
pub const DEFAULT_PORT: u16 = 3000;

/// Service configuration, built from environment variables.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Port the HTTP server binds to.
    pub port: u16,
    /// Conversations idle for longer than this are reset.
    pub session_ttl: Duration,
    /// Advisory wall-clock budget for answering one chat message.
    pub processing_budget: Duration,
    /// How often stale conversations are swept from memory.
    pub sweep_interval: Duration,
    pub email: EmailSettings,
    /// Supabase credentials; `None` keeps submissions in memory.
    pub supabase: Option<SupabaseSettings>,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            session_ttl: Duration::from_secs(30 * 60), // 30 minutes
            processing_budget: Duration::from_millis(5000),
            sweep_interval: Duration::from_secs(300), // 5 minutes
            email: EmailSettings::default(),
            supabase: None,
        }
    }
}

impl ServiceConfig {
    /// Build config from environment variables, falling back to defaults for
    /// anything unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let port = env_parse("DCS_GUIDE_PORT")?.unwrap_or(defaults.port);

        let session_ttl = match env_parse::<u64>("DCS_GUIDE_SESSION_TTL_MINUTES")? {
            Some(minutes) => ttl_from_minutes(minutes)?,
            None => defaults.session_ttl,
        };

        let processing_budget = env_parse::<u64>("DCS_GUIDE_PROCESSING_BUDGET_MS")?
            .map(Duration::from_millis)
            .unwrap_or(defaults.processing_budget);

        let sweep_interval = env_parse::<u64>("DCS_GUIDE_SWEEP_INTERVAL_SECS")?
            .map(Duration::from_secs)
            .unwrap_or(defaults.sweep_interval);

        if sweep_interval.is_zero() {
            return Err(ConfigError::InvalidValue {
                key: "DCS_GUIDE_SWEEP_INTERVAL_SECS".into(),
                message: "must be greater than zero".into(),
            });
        }

        Ok(Self {
            port,
            session_ttl,
            processing_budget,
            sweep_interval,
            email: EmailSettings::from_env()?,
            supabase: SupabaseSettings::from_env(),
        })
    }
}

fn ttl_from_minutes(minutes: u64) -> Result<Duration, ConfigError> {
    minutes
        .checked_mul(60)
        .map(Duration::from_secs)
        .ok_or_else(|| ConfigError::InvalidValue {
            key: "DCS_GUIDE_SESSION_TTL_MINUTES".into(),
            message: format!("{minutes} minutes is too large"),
        })
}

/// Parse an optional environment variable. Unset or blank yields `None`.
fn env_parse<T>(key: &str) -> Result<Option<T>, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(raw) if !raw.trim().is_empty() => {
            raw.trim()
                .parse()
                .map(Some)
                .map_err(|e: T::Err| ConfigError::InvalidValue {
                    key: key.to_string(),
                    message: e.to_string(),
                })
        }
        _ => Ok(None),
    }
}
