//! Common test utilities and helpers
//!
//! Every test builds its own application around an in-memory database, a
//! fixed signing secret and a recording mailer, so tests run in parallel
//! without sharing state.

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum_test::TestServer;
use serde_json::{json, Value};

use ermin_chat::backend::auth::sessions::TokenService;
use ermin_chat::backend::mail::{MailError, Mailer};
use ermin_chat::backend::routes::create_router;
use ermin_chat::backend::server::config::connect_database;
use ermin_chat::backend::server::{AppConfig, AppState};

pub const TEST_SECRET: &str = "integration-test-secret";

/// Mailer that keeps every verification mail in memory
#[derive(Default)]
pub struct RecordingMailer {
    sent: Mutex<Vec<(String, String)>>,
}

impl RecordingMailer {
    pub fn sent(&self) -> Vec<(String, String)> {
        self.sent.lock().unwrap().clone()
    }

    /// Code of the last mail sent to `email`
    pub fn code_for(&self, email: &str) -> Option<String> {
        self.sent()
            .into_iter()
            .rev()
            .find(|(to, _)| to == email)
            .map(|(_, code)| code)
    }
}

#[async_trait]
impl Mailer for RecordingMailer {
    async fn send_verification(&self, email: &str, code: &str) -> Result<(), MailError> {
        self.sent
            .lock()
            .unwrap()
            .push((email.to_string(), code.to_string()));
        Ok(())
    }
}

pub struct TestApp {
    pub server: TestServer,
    pub state: AppState,
    pub mailer: Arc<RecordingMailer>,
}

pub fn test_config() -> AppConfig {
    AppConfig {
        database_url: "sqlite::memory:".to_string(),
        database_name: "chat_history".to_string(),
        jwt_secret: TEST_SECRET.to_string(),
        cors_origins: vec!["*".to_string()],
        smtp: None,
        port: 0,
    }
}

pub async fn test_app() -> TestApp {
    test_app_with_config(test_config()).await
}

pub async fn test_app_with_config(config: AppConfig) -> TestApp {
    let db_pool = connect_database(&config.database_url())
        .await
        .expect("Failed to open test database");
    let mailer = Arc::new(RecordingMailer::default());

    let state = AppState {
        db_pool,
        tokens: Arc::new(TokenService::new(&config.jwt_secret)),
        mailer: mailer.clone(),
        config: Arc::new(config),
    };

    let server =
        TestServer::new(create_router(state.clone())).expect("Failed to start test server");

    TestApp {
        server,
        state,
        mailer,
    }
}

impl TestApp {
    /// Log in with a fresh identity and return `(token, user)`
    pub async fn login(&self, google_id: &str, email: &str) -> (String, Value) {
        let response = self
            .server
            .post("/api/auth/login")
            .json(&json!({
                "google_id": google_id,
                "email": email,
                "name": format!("Test {google_id}"),
                "picture": "https://example.com/avatar.png"
            }))
            .await;
        response.assert_status_ok();

        let body: Value = response.json();
        let token = body["access_token"]
            .as_str()
            .expect("access_token missing")
            .to_string();
        (token, body["user"].clone())
    }

    /// Create a thread and return its JSON
    pub async fn create_chat(&self, token: &str, title: Option<&str>) -> Value {
        let body = match title {
            Some(title) => json!({ "title": title }),
            None => json!({}),
        };
        let response = self
            .server
            .post("/api/chats")
            .authorization_bearer(token)
            .json(&body)
            .await;
        response.assert_status_ok();
        response.json()
    }
}
