//! Questionnaire submission storage.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use secrecy::{ExposeSecret, SecretString};
use serde::Serialize;
use tokio::sync::RwLock;
use tracing::{debug, warn};
use uuid::Uuid;

use crate::error::StoreError;

const SUBMISSIONS_TABLE: &str = "questionnaire_submissions";

/// One stored questionnaire answer set.
#[derive(Debug, Clone, Serialize)]
pub struct Submission {
    pub id: Uuid,
    pub submitted_at: DateTime<Utc>,
    /// The answers exactly as the widget sent them.
    pub payload: serde_json::Value,
}

impl Submission {
    pub fn new(payload: serde_json::Value) -> Self {
        Self {
            id: Uuid::new_v4(),
            submitted_at: Utc::now(),
            payload,
        }
    }
}

/// Somewhere submissions can be written.
#[async_trait]
pub trait SubmissionStore: Send + Sync {
    async fn save(&self, submission: &Submission) -> Result<(), StoreError>;
}

/// Keeps submissions in process memory.
#[derive(Default)]
pub struct MemoryStore {
    submissions: RwLock<Vec<Submission>>,
}

impl MemoryStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub async fn all(&self) -> Vec<Submission> {
        self.submissions.read().await.clone()
    }

    pub async fn len(&self) -> usize {
        self.submissions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.submissions.read().await.is_empty()
    }
}

#[async_trait]
impl SubmissionStore for MemoryStore {
    async fn save(&self, submission: &Submission) -> Result<(), StoreError> {
        self.submissions.write().await.push(submission.clone());
        Ok(())
    }
}

/// Supabase project credentials.
#[derive(Debug, Clone)]
pub struct SupabaseSettings {
    pub url: String,
    pub anon_key: SecretString,
}

impl SupabaseSettings {
    /// Read `SUPABASE_URL` and `SUPABASE_ANON_KEY`. Both must be set.
    pub fn from_env() -> Option<Self> {
        let url = std::env::var("SUPABASE_URL").ok().filter(|v| !v.trim().is_empty())?;
        let key = std::env::var("SUPABASE_ANON_KEY")
            .ok()
            .filter(|v| !v.trim().is_empty())?;
        Some(Self {
            url: url.trim().trim_end_matches('/').to_string(),
            anon_key: SecretString::from(key),
        })
    }
}

/// Inserts rows through Supabase's REST interface.
pub struct SupabaseStore {
    client: reqwest::Client,
    settings: SupabaseSettings,
}

impl SupabaseStore {
    pub fn new(settings: SupabaseSettings) -> Self {
        Self {
            client: reqwest::Client::new(),
            settings,
        }
    }

    fn table_url(&self) -> String {
        format!("{}/rest/v1/{SUBMISSIONS_TABLE}", self.settings.url)
    }
}

#[async_trait]
impl SubmissionStore for SupabaseStore {
    async fn save(&self, submission: &Submission) -> Result<(), StoreError> {
        let key = self.settings.anon_key.expose_secret();
        let resp = self
            .client
            .post(self.table_url())
            .header("apikey", key)
            .bearer_auth(key)
            .header("Prefer", "return=minimal")
            .json(submission)
            .send()
            .await
            .map_err(|e| StoreError::Request(e.to_string()))?;

        let status = resp.status();
        if !status.is_success() {
            return Err(StoreError::Rejected {
                status: status.as_u16(),
                body: resp.text().await.unwrap_or_default(),
            });
        }
        debug!(submission_id = %submission.id, "Submission stored in Supabase");
        Ok(())
    }
}

/// Writes to the primary store when there is one, and to memory when there
/// isn't or when the primary fails.
pub struct DegradingStore {
    primary: Option<Arc<dyn SubmissionStore>>,
    memory: Arc<MemoryStore>,
}

impl DegradingStore {
    pub fn new(primary: Option<Arc<dyn SubmissionStore>>, memory: Arc<MemoryStore>) -> Self {
        Self { primary, memory }
    }

    /// Supabase when configured, memory otherwise.
    pub fn from_settings(settings: Option<SupabaseSettings>) -> Self {
        let primary = settings.map(|s| Arc::new(SupabaseStore::new(s)) as Arc<dyn SubmissionStore>);
        Self::new(primary, MemoryStore::new())
    }

    pub fn memory(&self) -> &Arc<MemoryStore> {
        &self.memory
    }
}

#[async_trait]
impl SubmissionStore for DegradingStore {
    async fn save(&self, submission: &Submission) -> Result<(), StoreError> {
        if let Some(primary) = &self.primary {
            match primary.save(submission).await {
                Ok(()) => return Ok(()),
                Err(e) => {
                    warn!(submission_id = %submission.id, error = %e, "Primary store failed; keeping submission in memory");
                }
            }
        }
        self.memory.save(submission).await
    }
}
