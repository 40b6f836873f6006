//! Integration tests for the HTTP API.
//!
//! Each test spins up the full router on a random port with a manual clock
//! and stub email providers, and drives it over real HTTP with reqwest.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use serde_json::{Value, json};
use tokio::net::TcpListener;
use tokio::time::timeout;

use dcs_guide::chat::{ChatEngine, ConversationStore, ExplorationPhase, ManualClock};
use dcs_guide::error::EmailError;
use dcs_guide::notify::{DeliveryReceipt, EmailProvider, Mailer, Notifier, OutgoingEmail};
use dcs_guide::questionnaire::{DegradingStore, MemoryStore};
use dcs_guide::server::{AppDeps, build_router};

/// Maximum time any test is allowed to run before we consider it hung.
const TEST_TIMEOUT: Duration = Duration::from_secs(5);

const SESSION_TTL: Duration = Duration::from_secs(30 * 60);

/// Stub email provider (no real API calls).
struct StubProvider {
    name: &'static str,
    fail: bool,
    sent: Mutex<Vec<OutgoingEmail>>,
}

impl StubProvider {
    fn new(name: &'static str, fail: bool) -> Arc<Self> {
        Arc::new(Self {
            name,
            fail,
            sent: Mutex::new(Vec::new()),
        })
    }
}

#[async_trait]
impl EmailProvider for StubProvider {
    fn name(&self) -> &str {
        self.name
    }

    async fn send(&self, email: &OutgoingEmail) -> Result<DeliveryReceipt, EmailError> {
        self.sent.lock().unwrap().push(email.clone());
        if self.fail {
            return Err(EmailError::RequestFailed {
                provider: self.name.into(),
                reason: "stubbed outage".into(),
            });
        }
        Ok(DeliveryReceipt {
            provider: self.name.into(),
            message_id: None,
        })
    }
}

struct TestServer {
    base: String,
    client: reqwest::Client,
    clock: Arc<ManualClock>,
    engine: Arc<ChatEngine>,
    memory: Arc<MemoryStore>,
    fallback: Arc<StubProvider>,
}

impl TestServer {
    async fn post(&self, path: &str, body: Value) -> (u16, Value) {
        let resp = self
            .client
            .post(format!("{}{path}", self.base))
            .json(&body)
            .send()
            .await
            .unwrap();
        let status = resp.status().as_u16();
        (status, resp.json().await.unwrap())
    }

    async fn get(&self, path: &str) -> (u16, Value) {
        let resp = self
            .client
            .get(format!("{}{path}", self.base))
            .send()
            .await
            .unwrap();
        let status = resp.status().as_u16();
        (status, resp.json().await.unwrap())
    }

    async fn chat(&self, user_id: &str, message: &str) -> Value {
        let (status, body) = self
            .post(
                "/api/chat",
                json!({ "messages": [{ "role": "user", "content": message }], "userId": user_id }),
            )
            .await;
        assert_eq!(status, 200);
        body
    }
}

/// Start the router on a random port.
async fn start_server(primary_fails: bool, fallback_fails: bool) -> TestServer {
    let clock = Arc::new(ManualClock::default());
    let store = ConversationStore::new(clock.clone(), SESSION_TTL);
    let engine = Arc::new(ChatEngine::new(store, Duration::from_secs(5)));

    let primary = StubProvider::new("resend", primary_fails);
    let fallback = StubProvider::new("sendgrid", fallback_fails);
    let notifier = Arc::new(Notifier::new(
        Mailer::new(primary, fallback.clone()),
        "DCS Bot <noreply@dcs.bates.edu>",
    ));

    let memory = MemoryStore::new();
    let submissions = Arc::new(DegradingStore::new(None, memory.clone()));

    let app = build_router(AppDeps {
        engine: engine.clone(),
        notifier,
        submissions,
    });

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let port = listener.local_addr().unwrap().port();

    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    // Give the server a moment to start accepting connections.
    tokio::time::sleep(Duration::from_millis(50)).await;

    TestServer {
        base: format!("http://127.0.0.1:{port}"),
        client: reqwest::Client::new(),
        clock,
        engine,
        memory,
        fallback,
    }
}

#[tokio::test]
async fn health_reports_ok() {
    timeout(TEST_TIMEOUT, async {
        let server = start_server(false, false).await;
        let (status, body) = server.get("/health").await;
        assert_eq!(status, 200);
        assert_eq!(body["status"], "ok");
        assert_eq!(body["service"], "dcs-guide");
    })
    .await
    .expect("test timed out");
}

#[tokio::test]
async fn current_student_gets_next_course_recommendation() {
    timeout(TEST_TIMEOUT, async {
        let server = start_server(false, false).await;

        let body = server.chat("u1", "hi").await;
        assert_eq!(body["success"], true);
        assert!(body["response"].as_str().unwrap().starts_with("Hello! I'm your Bates DCS guide."));
        assert_eq!(body["conversationPhase"], "initial");

        let body = server.chat("u1", "I'm a current student, I've taken DCS 109").await;
        assert!(body["response"].as_str().unwrap().starts_with("Welcome back!"));

        let body = server.chat("u1", "What should I take next?").await;
        let text = body["response"].as_str().unwrap();
        assert!(text.contains("(DCS109)"), "got: {text}");
        assert!(text.contains("DCS 211"));
    })
    .await
    .expect("test timed out");
}

#[tokio::test]
async fn course_mention_gets_course_detail() {
    timeout(TEST_TIMEOUT, async {
        let server = start_server(false, false).await;
        server.chat("prof", "I'm on the faculty here").await;

        let body = server.chat("prof", "Tell me about DCS 211").await;
        let text = body["response"].as_str().unwrap();
        assert!(text.starts_with("DCS 211 sounds interesting!"), "got: {text}");
    })
    .await
    .expect("test timed out");
}

#[tokio::test]
async fn start_over_returns_to_initial() {
    timeout(TEST_TIMEOUT, async {
        let server = start_server(false, false).await;
        server.chat("u2", "I'm a prospective student").await;
        server.chat("u2", "I'm not sure what I like").await;

        let body = server.chat("u2", "let's start over").await;
        assert!(body["response"].as_str().unwrap().starts_with("Let's start fresh!"));
        assert_eq!(body["conversationPhase"], "initial");
    })
    .await
    .expect("test timed out");
}

#[tokio::test]
async fn start_over_wins_over_greeting_and_topics() {
    timeout(TEST_TIMEOUT, async {
        let server = start_server(false, false).await;
        server.chat("u7", "I'm a prospective student").await;

        let mut state = server.engine.store().peek("u7").await.unwrap();
        state.phase = ExplorationPhase::Careers;
        server.engine.store().commit("u7", state).await;

        let body = server
            .chat("u7", "start over, I want to learn something else")
            .await;
        assert!(body["response"].as_str().unwrap().starts_with("Let's start fresh!"));
        assert_eq!(body["conversationPhase"], "initial");

        server.chat("u7", "I'm a prospective student").await;
        let body = server.chat("u7", "hey, can we start over?").await;
        assert!(body["response"].as_str().unwrap().starts_with("Let's start fresh!"));

        // the user type is gone, so the next message asks for it again
        let body = server.chat("u7", "what now").await;
        assert!(
            body["response"]
                .as_str()
                .unwrap()
                .starts_with("To help me provide more relevant information")
        );
    })
    .await
    .expect("test timed out");
}

#[tokio::test]
async fn idle_session_is_forgotten() {
    timeout(TEST_TIMEOUT, async {
        let server = start_server(false, false).await;
        server.chat("u3", "I'm a prospective student").await;

        server.clock.advance(Duration::from_secs(31 * 60));
        let body = server.chat("u3", "what now").await;
        assert!(
            body["response"]
                .as_str()
                .unwrap()
                .starts_with("To help me provide more relevant information")
        );
        assert_eq!(body["conversationPhase"], "initial");
    })
    .await
    .expect("test timed out");
}

#[tokio::test]
async fn empty_messages_get_fallback_reply() {
    timeout(TEST_TIMEOUT, async {
        let server = start_server(false, false).await;
        let (status, body) = server.post("/api/chat", json!({ "messages": [] })).await;
        assert_eq!(status, 200);
        assert_eq!(body["error"], "There was an error processing your request");
        assert!(body["response"].as_str().unwrap().starts_with("**Exploring DCS at Bates**"));
        assert_eq!(body["conversationPhase"], "initial");
    })
    .await
    .expect("test timed out");
}

#[tokio::test]
async fn malformed_chat_body_gets_fallback_reply() {
    timeout(TEST_TIMEOUT, async {
        let server = start_server(false, false).await;
        let resp = server
            .client
            .post(format!("{}/api/chat", server.base))
            .header("content-type", "application/json")
            .body("{not json")
            .send()
            .await
            .unwrap();
        assert_eq!(resp.status().as_u16(), 200);
        let body: Value = resp.json().await.unwrap();
        assert_eq!(body["error"], "There was an error processing your request");
        assert!(body["response"].is_string());
        // parser details stay in the logs
        assert!(body.get("detail").is_none());
        assert_eq!(body.as_object().unwrap().len(), 3);
    })
    .await
    .expect("test timed out");
}

#[tokio::test]
async fn missing_user_id_is_anonymous() {
    timeout(TEST_TIMEOUT, async {
        let server = start_server(false, false).await;
        let (status, _) = server
            .post("/api/chat", json!({ "messages": [{ "content": "I like web design" }] }))
            .await;
        assert_eq!(status, 200);

        let (status, body) = server.get("/api/chat/anonymous/recommendations").await;
        assert_eq!(status, 200);
        assert!(!body["focusAreas"].as_array().unwrap().is_empty());
    })
    .await
    .expect("test timed out");
}

#[tokio::test]
async fn recommendations_reflect_interests() {
    timeout(TEST_TIMEOUT, async {
        let server = start_server(false, false).await;
        let (status, body) = server.get("/api/chat/nobody/recommendations").await;
        assert_eq!(status, 404);
        assert!(body["error"].is_string());

        server.chat("u4", "I care about privacy and security").await;
        let (status, body) = server.get("/api/chat/u4/recommendations").await;
        assert_eq!(status, 200);
        assert_eq!(body["focusAreas"][0], "Cybersecurity");
        assert_eq!(body["careers"][0]["name"], "Cybersecurity");
        assert_eq!(body["courses"][0]["code"], "DCS 211");
        assert_eq!(body["phase"], "initial");
    })
    .await
    .expect("test timed out");
}

#[tokio::test]
async fn notify_requires_email_and_summary() {
    timeout(TEST_TIMEOUT, async {
        let server = start_server(false, false).await;

        let (status, body) = server
            .post("/api/notify-professor", json!({ "summary": "hi" }))
            .await;
        assert_eq!(status, 400);
        assert_eq!(body["error"], "Email field is required");

        let (status, body) = server
            .post("/api/notify-professor", json!({ "email": "s@bates.edu" }))
            .await;
        assert_eq!(status, 400);
        assert_eq!(body["error"], "Summary field is required");
    })
    .await
    .expect("test timed out");
}

#[tokio::test]
async fn notify_falls_back_to_alternate_provider() {
    timeout(TEST_TIMEOUT, async {
        let server = start_server(true, false).await;
        let (status, body) = server
            .post(
                "/api/notify-professor",
                json!({
                    "email": "student@bates.edu",
                    "summary": "Student: I'd love to study machine learning",
                }),
            )
            .await;
        assert_eq!(status, 200);
        assert_eq!(body["message"], "Email sent to Professor Dr. Thompson");
        assert_eq!(body["professorName"], "Dr. Thompson");
        assert_eq!(body["service"], "sendgrid");
        assert_eq!(body["usedFallback"], true);

        let sent = server.fallback.sent.lock().unwrap().clone();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].to, "thompson@bates.edu");
        assert!(sent[0].text.contains("- Email: student@bates.edu"));
    })
    .await
    .expect("test timed out");
}

#[tokio::test]
async fn notify_summarizes_message_history() {
    timeout(TEST_TIMEOUT, async {
        let server = start_server(true, false).await;
        let (status, body) = server
            .post(
                "/api/notify-professor",
                json!({
                    "email": "student@bates.edu",
                    "messages": [
                        { "sender": "bot", "text": "What are you interested in?" },
                        { "sender": "user", "text": "machine learning, mostly" },
                    ],
                }),
            )
            .await;
        assert_eq!(status, 200);
        assert_eq!(body["professorName"], "Dr. Thompson");

        let sent = server.fallback.sent.lock().unwrap().clone();
        assert!(
            sent[0]
                .text
                .contains("Bot: What are you interested in?\n\nStudent: machine learning, mostly")
        );
    })
    .await
    .expect("test timed out");
}

#[tokio::test]
async fn notify_honours_selected_professor() {
    timeout(TEST_TIMEOUT, async {
        let server = start_server(false, false).await;
        let (status, body) = server
            .post(
                "/api/notify-professor",
                json!({
                    "email": "student@bates.edu",
                    "summary": "machine learning",
                    "selectedProfessor": "Barry Lawson",
                }),
            )
            .await;
        assert_eq!(status, 200);
        assert_eq!(body["professorName"], "Barry Lawson");
        assert_eq!(body["service"], "resend");
        assert_eq!(body["usedFallback"], false);
    })
    .await
    .expect("test timed out");
}

#[tokio::test]
async fn notify_reports_total_failure() {
    timeout(TEST_TIMEOUT, async {
        let server = start_server(true, true).await;
        let (status, body) = server
            .post(
                "/api/notify-professor",
                json!({ "email": "student@bates.edu", "summary": "hello" }),
            )
            .await;
        assert_eq!(status, 500);
        assert_eq!(body["error"], "Failed to send email");
    })
    .await
    .expect("test timed out");
}

#[tokio::test]
async fn questionnaire_accepts_any_json() {
    timeout(TEST_TIMEOUT, async {
        let server = start_server(false, false).await;
        for payload in [json!({ "year": "first", "interests": ["data"] }), json!("free text"), json!(null)] {
            let (status, body) = server.post("/api/submit-questionnaire", payload).await;
            assert_eq!(status, 200);
            assert_eq!(body["success"], true);
            assert_eq!(body["message"], "Questionnaire submitted successfully");
        }
        assert_eq!(server.memory.len().await, 3);
    })
    .await
    .expect("test timed out");
}
