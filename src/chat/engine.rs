//! Chat engine: one user message in, one reply out.

use std::sync::{Arc, LazyLock};
use std::time::{Duration, Instant};

use regex::Regex;
use tracing::{debug, info};
use uuid::Uuid;

use super::dispatch::{self, Guidance};
use super::interests::{self, extract_interests};
use super::plan::generate_plan;
use super::recommend::{self, Recommendations};
use super::responses::{self, ProspectiveTopic};
use super::state::{ConversationState, ExplorationPhase, UserType};
use super::store::ConversationStore;
use crate::error::ChatError;

static GREETING_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(hello|hi|hey)\b").expect("valid regex"));

/// The engine's answer to one message.
#[derive(Debug, Clone)]
pub struct ChatReply {
    pub id: Uuid,
    pub response: String,
    pub phase: ExplorationPhase,
}

/// Runs the reply pipeline against the shared conversation store.
pub struct ChatEngine {
    store: Arc<ConversationStore>,
    budget: Duration,
}

impl ChatEngine {
    pub fn new(store: Arc<ConversationStore>, budget: Duration) -> Self {
        Self { store, budget }
    }

    pub fn store(&self) -> &Arc<ConversationStore> {
        &self.store
    }

    /// Answer `message` for `user_id`.
    ///
    /// The processing budget is checked between steps. A message that runs
    /// over it fails with [`ChatError::BudgetExceeded`] and its state changes
    /// are not committed.
    pub async fn respond(&self, user_id: &str, message: &str) -> Result<ChatReply, ChatError> {
        if message.trim().is_empty() {
            return Err(ChatError::InvalidMessage("message content is empty".into()));
        }

        let started = Instant::now();
        let mut state = self.store.checkout(user_id).await;
        self.check_budget(started)?;

        let response = reply_for(&mut state, message);
        self.check_budget(started)?;

        state.merge_interests(&extract_interests(message));
        for code in interests::mentioned_courses(message) {
            state.record_mentioned_course(code);
        }
        for name in interests::mentioned_careers(message) {
            state.record_mentioned_career(name);
        }
        self.check_budget(started)?;

        let phase = state.phase;
        debug!(
            user_id = %user_id,
            user_type = %state.user_type,
            interests = %state.identified_interests,
            "Conversation updated"
        );
        self.store.commit(user_id, state).await;

        info!(
            user_id = %user_id,
            phase = %phase,
            elapsed_ms = started.elapsed().as_millis() as u64,
            "Chat reply generated"
        );

        Ok(ChatReply {
            id: Uuid::new_v4(),
            response,
            phase,
        })
    }

    /// Recommendations for a live conversation, with its current phase.
    pub async fn recommendations(
        &self,
        user_id: &str,
    ) -> Option<(Recommendations, ExplorationPhase)> {
        let state = self.store.peek(user_id).await?;
        let recs = recommend::recommendations(&state.identified_interests, &state.courses_taken);
        Some((recs, state.phase))
    }

    fn check_budget(&self, started: Instant) -> Result<(), ChatError> {
        let elapsed = started.elapsed();
        if elapsed >= self.budget {
            return Err(ChatError::BudgetExceeded {
                budget: self.budget,
                elapsed,
            });
        }
        Ok(())
    }
}

/// Pick the reply text, mutating `state` along the way.
fn reply_for(state: &mut ConversationState, message: &str) -> String {
    let lower = message.to_lowercase();

    if dispatch::reset_requested(&lower) {
        debug!("Conversation reset requested");
        state.reset();
        return responses::RESET_GREETING.to_string();
    }

    if GREETING_RE.is_match(&lower) {
        return responses::GREETING.to_string();
    }

    if let Some(welcome) = classify_user(state, &lower) {
        return welcome.to_string();
    }

    if state.user_type == UserType::Prospective {
        if let Some(topic) = ProspectiveTopic::detect(&lower) {
            return topic.reply().to_string();
        }
    }

    match dispatch::guiding_question(state, message) {
        Guidance::Reply(text) => text,
        Guidance::AdvanceToPlan => {
            state.suggested_plan = true;
            generate_plan(state)
        }
        Guidance::NoGuidance => responses::GENERIC_PROMPT.to_string(),
    }
}

/// First self-identification of a user whose type is still unknown.
fn classify_user(state: &mut ConversationState, lower: &str) -> Option<&'static str> {
    if state.user_type.is_known() {
        return None;
    }
    let has = |words: &[&str]| words.iter().any(|w| lower.contains(w));

    if has(&["prospective", "applying", "interested in"]) {
        state.user_type = UserType::Prospective;
        Some(responses::PROSPECTIVE_WELCOME)
    } else if has(&["current", "student", "taking"]) {
        state.user_type = UserType::Current;
        dispatch::record_courses_taken(state, lower);
        Some(responses::CURRENT_WELCOME)
    } else if has(&["faculty", "staff", "professor"]) {
        state.user_type = UserType::Staff;
        Some(responses::STAFF_WELCOME)
    } else {
        None
    }
}
