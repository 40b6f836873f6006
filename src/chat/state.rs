//! Per-user conversation state.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::interests::InterestScores;

/// Where the user is in the guided exploration.
///
/// The usual path is Initial → Interests → Courses → Careers → Plan →
/// Followup, but keyword rules may jump ahead (a career question from
/// `Initial` goes straight to `Careers`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExplorationPhase {
    Initial,
    Interests,
    Courses,
    Careers,
    Plan,
    Followup,
}

impl ExplorationPhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Initial => "initial",
            Self::Interests => "interests",
            Self::Courses => "courses",
            Self::Careers => "careers",
            Self::Plan => "plan",
            Self::Followup => "followup",
        }
    }
}

impl Default for ExplorationPhase {
    fn default() -> Self {
        Self::Initial
    }
}

impl std::fmt::Display for ExplorationPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Who the user said they are.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserType {
    Unknown,
    Prospective,
    Current,
    Staff,
}

impl UserType {
    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Unknown)
    }
}

impl Default for UserType {
    fn default() -> Self {
        Self::Unknown
    }
}

impl std::fmt::Display for UserType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Unknown => "unknown",
            Self::Prospective => "prospective",
            Self::Current => "current",
            Self::Staff => "staff",
        };
        write!(f, "{s}")
    }
}

/// Everything remembered about one user's conversation.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversationState {
    pub phase: ExplorationPhase,
    /// Max-merged across messages; a category's strength never drops.
    pub identified_interests: InterestScores,
    pub mentioned_courses: Vec<String>,
    pub mentioned_careers: Vec<String>,
    /// Set once the plan has been shown.
    pub suggested_plan: bool,
    pub last_interaction: DateTime<Utc>,
    /// Every raw message seen by the dispatcher, oldest first.
    pub previous_questions: Vec<String>,
    pub user_type: UserType,
    /// Compact course codes (`"DCS109"`), current students only.
    pub courses_taken: Vec<String>,
}

impl ConversationState {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            phase: ExplorationPhase::default(),
            identified_interests: InterestScores::new(),
            mentioned_courses: Vec::new(),
            mentioned_careers: Vec::new(),
            suggested_plan: false,
            last_interaction: now,
            previous_questions: Vec::new(),
            user_type: UserType::default(),
            courses_taken: Vec::new(),
        }
    }

    /// Wipe everything except the interaction timestamp.
    pub fn reset(&mut self) {
        *self = Self::new(self.last_interaction);
    }

    pub fn merge_interests(&mut self, scores: &InterestScores) {
        self.identified_interests.merge_max(scores);
    }

    pub fn top_interests(&self, n: usize) -> Vec<&str> {
        self.identified_interests.top(n)
    }

    pub fn record_course_taken(&mut self, code: String) {
        push_unique(&mut self.courses_taken, code);
    }

    pub fn record_mentioned_course(&mut self, code: &str) {
        push_unique(&mut self.mentioned_courses, code.to_string());
    }

    pub fn record_mentioned_career(&mut self, name: &str) {
        push_unique(&mut self.mentioned_careers, name.to_string());
    }
}

fn push_unique(list: &mut Vec<String>, value: String) {
    if !list.contains(&value) {
        list.push(value);
    }
}
