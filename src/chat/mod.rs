//! Guided chat: conversation state, interest tracking and reply selection.
//!
//! A message flows through [`ChatEngine::respond`]: the user's state is
//! checked out of the [`ConversationStore`], the dispatcher picks a reply
//! and advances the phase, the message's interests are merged in, and the
//! state is committed back.

pub mod dispatch;
pub mod engine;
pub mod interests;
pub mod plan;
pub mod recommend;
pub mod responses;
pub mod routes;
pub mod state;
pub mod store;

pub use dispatch::{Guidance, guiding_question};
pub use engine::{ChatEngine, ChatReply};
pub use interests::{InterestScores, extract_interests};
pub use plan::{course_path_for_interest, generate_plan};
pub use recommend::Recommendations;
pub use routes::{ChatRouteState, chat_routes};
pub use state::{ConversationState, ExplorationPhase, UserType};
pub use store::{Clock, ConversationStore, ManualClock, SystemClock, is_stale, spawn_eviction_task};
