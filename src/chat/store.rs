//! In-memory conversation store with idle eviction.
//!
//! Records live only in process memory. A record whose last interaction is
//! older than the TTL is dropped on the next checkout (and by the periodic
//! sweep), so the user starts again from the initial phase.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use chrono::{DateTime, TimeDelta, Utc};
use tokio::sync::RwLock;
use tracing::{debug, info};

use super::state::ConversationState;

/// Source of the current time.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock that only moves when told to.
#[derive(Debug)]
pub struct ManualClock {
    now: Mutex<DateTime<Utc>>,
}

impl ManualClock {
    pub fn new(start: DateTime<Utc>) -> Self {
        Self {
            now: Mutex::new(start),
        }
    }

    pub fn advance(&self, by: Duration) {
        let delta = TimeDelta::from_std(by).unwrap_or(TimeDelta::MAX);
        let mut now = self.now.lock().unwrap_or_else(|e| e.into_inner());
        *now += delta;
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new(Utc::now())
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap_or_else(|e| e.into_inner())
    }
}

/// Whether more than `ttl` has passed between `last_interaction` and `now`.
pub fn is_stale(now: DateTime<Utc>, last_interaction: DateTime<Utc>, ttl: Duration) -> bool {
    let ttl = TimeDelta::from_std(ttl).unwrap_or(TimeDelta::MAX);
    now.signed_duration_since(last_interaction) > ttl
}

/// Conversation records keyed by user id.
///
/// The lock guards map operations only. A request checks a record out,
/// works on its own copy, and commits it back; two concurrent requests for
/// the same user race and the later commit wins.
pub struct ConversationStore {
    records: RwLock<HashMap<String, ConversationState>>,
    clock: Arc<dyn Clock>,
    ttl: Duration,
}

impl ConversationStore {
    pub fn new(clock: Arc<dyn Clock>, ttl: Duration) -> Arc<Self> {
        Arc::new(Self {
            records: RwLock::new(HashMap::new()),
            clock,
            ttl,
        })
    }

    /// Fetch (or create) the record for `user_id`, stamped with the current
    /// time. A stale record is discarded first.
    pub async fn checkout(&self, user_id: &str) -> ConversationState {
        let now = self.clock.now();
        let mut records = self.records.write().await;

        let expired = records
            .get(user_id)
            .filter(|s| is_stale(now, s.last_interaction, self.ttl))
            .map(|s| s.phase);
        if let Some(phase) = expired {
            info!(user_id = %user_id, phase = %phase, "Conversation expired, starting over");
            records.remove(user_id);
        }

        let state = records.entry(user_id.to_string()).or_insert_with(|| {
            debug!(user_id = %user_id, "New conversation");
            ConversationState::new(now)
        });
        state.last_interaction = now;
        state.clone()
    }

    /// Write a whole record back. Last write wins.
    pub async fn commit(&self, user_id: &str, state: ConversationState) {
        self.records.write().await.insert(user_id.to_string(), state);
    }

    /// Look at a record without touching its timestamp. Stale records read
    /// as absent.
    pub async fn peek(&self, user_id: &str) -> Option<ConversationState> {
        let now = self.clock.now();
        self.records
            .read()
            .await
            .get(user_id)
            .filter(|s| !is_stale(now, s.last_interaction, self.ttl))
            .cloned()
    }

    /// Drop a record. Returns whether one existed.
    pub async fn reset(&self, user_id: &str) -> bool {
        self.records.write().await.remove(user_id).is_some()
    }

    /// Remove every stale record. Returns how many were removed.
    pub async fn evict_stale(&self) -> usize {
        let now = self.clock.now();
        let mut records = self.records.write().await;
        let before = records.len();
        records.retain(|_, s| !is_stale(now, s.last_interaction, self.ttl));
        let evicted = before - records.len();
        if evicted > 0 {
            info!(count = evicted, remaining = records.len(), "Evicted idle conversations");
        }
        evicted
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

/// Spawn a background task that sweeps idle conversations every `every`.
pub fn spawn_eviction_task(
    store: Arc<ConversationStore>,
    every: Duration,
) -> tokio::task::JoinHandle<()> {
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(every);
        loop {
            interval.tick().await;
            store.evict_stale().await;
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chat::state::{ExplorationPhase, UserType};

    const TTL: Duration = Duration::from_secs(30 * 60);

    fn store_with_clock() -> (Arc<ConversationStore>, Arc<ManualClock>) {
        let clock = Arc::new(ManualClock::default());
        let store = ConversationStore::new(clock.clone(), TTL);
        (store, clock)
    }

    #[test]
    fn staleness_is_strictly_greater_than_ttl() {
        let last = Utc::now();
        assert!(!is_stale(last, last, TTL));
        assert!(!is_stale(last + TimeDelta::minutes(30), last, TTL));
        assert!(is_stale(last + TimeDelta::minutes(31), last, TTL));
        // clock skew backwards is never stale
        assert!(!is_stale(last - TimeDelta::minutes(5), last, TTL));
    }

    #[tokio::test]
    async fn checkout_creates_default_state() {
        let (store, clock) = store_with_clock();
        let state = store.checkout("u1").await;
        assert_eq!(state.phase, ExplorationPhase::Initial);
        assert_eq!(state.user_type, UserType::Unknown);
        assert_eq!(state.last_interaction, clock.now());
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn commit_then_checkout_round_trips() {
        let (store, clock) = store_with_clock();
        let mut state = store.checkout("u1").await;
        state.phase = ExplorationPhase::Careers;
        store.commit("u1", state).await;

        clock.advance(Duration::from_secs(60));
        let state = store.checkout("u1").await;
        assert_eq!(state.phase, ExplorationPhase::Careers);
        assert_eq!(state.last_interaction, clock.now());
    }

    #[tokio::test]
    async fn idle_conversation_starts_over() {
        let (store, clock) = store_with_clock();
        let mut state = store.checkout("u1").await;
        state.phase = ExplorationPhase::Plan;
        state.record_mentioned_course("DCS 211");
        state.record_mentioned_career("Cybersecurity");
        state.identified_interests.add("design", 2);
        store.commit("u1", state).await;

        clock.advance(Duration::from_secs(31 * 60));
        let state = store.checkout("u1").await;
        assert_eq!(state.phase, ExplorationPhase::Initial);
        assert!(state.identified_interests.is_empty());
        assert!(state.mentioned_courses.is_empty());
        assert!(state.mentioned_careers.is_empty());
    }

    #[tokio::test]
    async fn peek_hides_stale_records() {
        let (store, clock) = store_with_clock();
        store.checkout("u1").await;
        assert!(store.peek("u1").await.is_some());

        clock.advance(Duration::from_secs(31 * 60));
        assert!(store.peek("u1").await.is_none());
        assert!(store.peek("nobody").await.is_none());
    }

    #[tokio::test]
    async fn sweep_removes_only_stale_records() {
        let (store, clock) = store_with_clock();
        store.checkout("old").await;
        clock.advance(Duration::from_secs(20 * 60));
        store.checkout("fresh").await;
        clock.advance(Duration::from_secs(15 * 60));

        assert_eq!(store.evict_stale().await, 1);
        assert!(store.peek("fresh").await.is_some());
        assert_eq!(store.len().await, 1);
    }

    #[tokio::test]
    async fn reset_drops_record() {
        let (store, _clock) = store_with_clock();
        store.checkout("u1").await;
        assert!(store.reset("u1").await);
        assert!(!store.reset("u1").await);
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn eviction_task_sweeps_in_background() {
        let (store, clock) = store_with_clock();
        store.checkout("u1").await;
        clock.advance(Duration::from_secs(31 * 60));

        let handle = spawn_eviction_task(store.clone(), Duration::from_millis(10));
        tokio::time::timeout(Duration::from_secs(5), async {
            while !store.is_empty().await {
                tokio::time::sleep(Duration::from_millis(10)).await;
            }
        })
        .await
        .expect("eviction task should empty the store");
        handle.abort();
    }
}
