//! Guiding-question dispatcher.
//!
//! Picks the next guided reply for a message and advances the exploration
//! phase. Rules are checked in a fixed precedence order; the first rule that
//! matches wins.

use std::sync::LazyLock;

use regex::Regex;
use tracing::debug;

use super::responses::{self, ProspectiveTopic};
use super::state::{ConversationState, ExplorationPhase, UserType};
use crate::catalog;

/// Course codes a current student says they have taken (`DCS 109`).
static TAKEN_COURSE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"dcs\s*\d{3}").expect("valid regex"));

/// Course codes that may carry a section letter (`dcs 109d`).
static COURSE_MENTION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"dcs\s*(\d{3}[a-z]?)").expect("valid regex"));

const RESET_KEYWORDS: &[&str] = &["start over", "reset"];

const EXPLORATION_KEYWORDS: &[&str] = &[
    "explore", "interest", "not sure", "help me", "guidance", "advise", "plan", "career", "major",
    "courses", "learn",
];

/// What the dispatcher wants the engine to say.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Guidance {
    /// Send this text.
    Reply(String),
    /// The conversation just reached the plan phase; render the plan.
    AdvanceToPlan,
    /// No rule matched.
    NoGuidance,
}

/// Self-identification phrases checked on every message.
pub fn detect_user_type(lower: &str) -> Option<UserType> {
    let has = |words: &[&str]| words.iter().any(|w| lower.contains(w));
    if has(&["prospective", "thinking about applying", "interested in applying"]) {
        Some(UserType::Prospective)
    } else if has(&["current student", "already taking", "enrolled"]) {
        Some(UserType::Current)
    } else if has(&["faculty", "staff", "teach"]) {
        Some(UserType::Staff)
    } else {
        None
    }
}

/// Record every `DCS ###` in the message as a taken course, in compact form.
pub fn record_courses_taken(state: &mut ConversationState, lower: &str) {
    for found in TAKEN_COURSE_RE.find_iter(lower) {
        state.record_course_taken(catalog::compact_code(found.as_str()));
    }
}

/// Whether the user asked to start the conversation over.
pub fn reset_requested(lower: &str) -> bool {
    RESET_KEYWORDS.iter().any(|w| lower.contains(w))
}

/// First catalog course named by code in the message.
pub fn mentioned_catalog_course(lower: &str) -> Option<&'static catalog::Course> {
    let found = COURSE_MENTION_RE.find(lower)?;
    catalog::find_course(found.as_str())
}

/// Decide the guided reply for `message`, updating `state` in place.
pub fn guiding_question(state: &mut ConversationState, message: &str) -> Guidance {
    let lower = message.to_lowercase();
    let has = |words: &[&str]| words.iter().any(|w| lower.contains(w));

    state.previous_questions.push(message.to_string());

    if let Some(user_type) = detect_user_type(&lower) {
        state.user_type = user_type;
    }
    if state.user_type == UserType::Current {
        record_courses_taken(state, &lower);
    }

    if reset_requested(&lower) {
        debug!("Conversation reset requested");
        state.reset();
        return Guidance::Reply(responses::RESET_GREETING.to_string());
    }

    let asked = state.previous_questions.len();

    match state.user_type {
        UserType::Unknown if asked <= 2 => {
            return Guidance::Reply(responses::ASK_USER_TYPE.to_string());
        }
        UserType::Prospective => {
            if let Some(topic) = ProspectiveTopic::detect(&lower) {
                return Guidance::Reply(topic.reply().to_string());
            }
        }
        UserType::Current => {
            if !state.courses_taken.is_empty() {
                return Guidance::Reply(responses::taken_course_recommendations(
                    &state.courses_taken,
                ));
            }
            if asked == 2 {
                return Guidance::Reply(responses::ASK_COURSES_TAKEN.to_string());
            }
        }
        UserType::Staff if asked == 2 => {
            return Guidance::Reply(responses::STAFF_INFO.to_string());
        }
        UserType::Unknown | UserType::Staff => {}
    }

    if let Some(guidance) = advance_phase(state, &lower) {
        return guidance;
    }

    if let Some(course) = mentioned_catalog_course(&lower) {
        return Guidance::Reply(responses::course_detail(course));
    }

    if !state.identified_interests.is_empty() && has(&["what", "tell me", "how"]) {
        let top = state.top_interests(2);
        return Guidance::Reply(responses::interest_summary(&top));
    }

    Guidance::NoGuidance
}

/// Phase transition rules.
fn advance_phase(state: &mut ConversationState, lower: &str) -> Option<Guidance> {
    let has = |words: &[&str]| words.iter().any(|w| lower.contains(w));
    let phase = state.phase;

    if (phase == ExplorationPhase::Interests && !state.identified_interests.is_empty())
        || has(&["courses i like", "taken courses"])
    {
        state.phase = ExplorationPhase::Courses;
        let text = match state.user_type {
            UserType::Prospective => responses::PROSPECTIVE_COURSES,
            UserType::Current => responses::CURRENT_COURSES,
            UserType::Staff | UserType::Unknown => responses::REFLECT_ON_COURSES,
        };
        return Some(Guidance::Reply(text.to_string()));
    }

    if (phase == ExplorationPhase::Initial && has(EXPLORATION_KEYWORDS)) || has(&["my interests"]) {
        state.phase = ExplorationPhase::Interests;
        return Some(Guidance::Reply(responses::INTERESTS_PROMPT.to_string()));
    }

    if (phase == ExplorationPhase::Interests && has(&["course"])) || has(&["career", "job", "work"]) {
        state.phase = ExplorationPhase::Careers;
        return Some(Guidance::Reply(responses::CAREERS_PROMPT.to_string()));
    }

    if phase == ExplorationPhase::Careers && !state.suggested_plan {
        state.phase = ExplorationPhase::Plan;
        return Some(Guidance::AdvanceToPlan);
    }

    if phase == ExplorationPhase::Plan && !has(&["email", "professor"]) {
        state.phase = ExplorationPhase::Followup;
        return Some(Guidance::Reply(responses::FOLLOWUP_PROMPT.to_string()));
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn state_as(user_type: UserType) -> ConversationState {
        let mut state = ConversationState::new(Utc::now());
        state.user_type = user_type;
        // past the "ask who you are" window
        state.previous_questions = vec!["a".into(), "b".into(), "c".into()];
        state
    }

    fn reply_text(guidance: Guidance) -> String {
        match guidance {
            Guidance::Reply(text) => text,
            other => panic!("expected a reply, got {other:?}"),
        }
    }

    #[test]
    fn course_mention_returns_course_detail() {
        let mut state = state_as(UserType::Staff);
        let text = reply_text(guiding_question(&mut state, "Is DCS 211 hard?"));
        assert!(text.contains("DCS 211"));
        assert!(text.contains("sounds interesting"));
    }

    #[test]
    fn unknown_course_code_falls_through() {
        let mut state = state_as(UserType::Staff);
        assert_eq!(guiding_question(&mut state, "dcs 999?"), Guidance::NoGuidance);
    }

    #[test]
    fn start_over_resets_from_any_phase() {
        use ExplorationPhase::*;
        for phase in [Initial, Interests, Courses, Careers, Plan, Followup] {
            let mut state = state_as(UserType::Current);
            state.phase = phase;
            state.suggested_plan = true;
            state.record_course_taken("DCS211".into());
            state.identified_interests.add("design", 1);

            let text = reply_text(guiding_question(&mut state, "Can we start over?"));
            assert_eq!(text, responses::RESET_GREETING);
            assert_eq!(state.phase, Initial);
            assert_eq!(state.user_type, UserType::Unknown);
            assert!(state.courses_taken.is_empty());
            assert!(state.identified_interests.is_empty());
            assert!(state.previous_questions.is_empty());
            assert!(!state.suggested_plan);
        }
    }

    #[test]
    fn unknown_user_is_asked_who_they_are() {
        let mut state = ConversationState::new(Utc::now());
        let text = reply_text(guiding_question(&mut state, "tell me about DCS"));
        assert_eq!(text, responses::ASK_USER_TYPE);
    }

    #[test]
    fn user_type_is_detected_on_every_message() {
        let mut state = state_as(UserType::Prospective);
        guiding_question(&mut state, "actually I teach here");
        assert_eq!(state.user_type, UserType::Staff);
    }

    #[test]
    fn current_student_courses_are_recorded() {
        let mut state = state_as(UserType::Unknown);
        let text = reply_text(guiding_question(
            &mut state,
            "I'm a current student and took DCS 109 and dcs211",
        ));
        assert_eq!(state.user_type, UserType::Current);
        assert_eq!(state.courses_taken, vec!["DCS109", "DCS211"]);
        assert!(text.contains("DCS 211"));
        assert!(text.contains("DCS 325"));
    }

    #[test]
    fn current_student_without_courses_is_asked_on_second_message() {
        let mut state = ConversationState::new(Utc::now());
        state.user_type = UserType::Current;
        state.previous_questions.push("first".into());
        let text = reply_text(guiding_question(&mut state, "what now?"));
        assert_eq!(text, responses::ASK_COURSES_TAKEN);
    }

    #[test]
    fn prospective_topics_take_precedence_over_phases() {
        let mut state = state_as(UserType::Prospective);
        let text = reply_text(guiding_question(&mut state, "what jobs do graduates get?"));
        assert_eq!(text, ProspectiveTopic::CareerPaths.reply());
        assert_eq!(state.phase, ExplorationPhase::Initial);
    }

    #[test]
    fn phases_advance_to_plan() {
        let mut state = state_as(UserType::Staff);

        let text = reply_text(guiding_question(&mut state, "I'm not sure where to begin"));
        assert_eq!(text, responses::INTERESTS_PROMPT);
        assert_eq!(state.phase, ExplorationPhase::Interests);

        state.identified_interests.add("data_science", 1);
        let text = reply_text(guiding_question(&mut state, "data, I think"));
        assert_eq!(text, responses::REFLECT_ON_COURSES);
        assert_eq!(state.phase, ExplorationPhase::Courses);

        let text = reply_text(guiding_question(&mut state, "what kind of career?"));
        assert_eq!(text, responses::CAREERS_PROMPT);
        assert_eq!(state.phase, ExplorationPhase::Careers);

        assert_eq!(
            guiding_question(&mut state, "building software"),
            Guidance::AdvanceToPlan
        );
        assert_eq!(state.phase, ExplorationPhase::Plan);

        let text = reply_text(guiding_question(&mut state, "looks good"));
        assert_eq!(text, responses::FOLLOWUP_PROMPT);
        assert_eq!(state.phase, ExplorationPhase::Followup);
    }

    #[test]
    fn plan_phase_holds_for_professor_questions() {
        let mut state = state_as(UserType::Staff);
        state.phase = ExplorationPhase::Plan;
        state.suggested_plan = true;
        assert_eq!(
            guiding_question(&mut state, "email the professor"),
            Guidance::NoGuidance
        );
        assert_eq!(state.phase, ExplorationPhase::Plan);
    }

    #[test]
    fn interest_summary_names_top_two() {
        let mut state = state_as(UserType::Staff);
        state.phase = ExplorationPhase::Followup;
        state.identified_interests.add("graphics", 1);
        state.identified_interests.add("theory", 3);
        state.identified_interests.add("design", 1);
        let text = reply_text(guiding_question(&mut state, "what else?"));
        assert!(text.starts_with("Based on your interest in theory and graphics"));
    }
}
