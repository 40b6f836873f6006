//! Questionnaire intake.
//!
//! Submissions are accepted unconditionally; storage problems are logged
//! and the submission is kept in memory instead.

pub mod routes;
pub mod store;

pub use routes::{QuestionnaireRouteState, questionnaire_routes};
pub use store::{
    DegradingStore, MemoryStore, Submission, SubmissionStore, SupabaseSettings, SupabaseStore,
};
