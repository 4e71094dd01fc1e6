//! Mock TTS.Monster server for integration tests

#![allow(dead_code)]

use mockito::{Matcher, Mock, Server, ServerGuard};
use tts_monster::{TtsMonsterClient, TtsMonsterClientBuilder};

pub const API_KEY: &str = "test-api-key";

/// Test fixture that owns a mock server
pub struct MockServerFixture {
    pub server: ServerGuard,
    pub base_url: String,
}

impl MockServerFixture {
    pub async fn new() -> Self {
        let server = Server::new_async().await;
        let base_url = server.url();
        Self { server, base_url }
    }

    /// Builder pointed at the mock server with the test API key
    pub fn builder(&self) -> TtsMonsterClientBuilder {
        TtsMonsterClient::builder()
            .api_key(API_KEY)
            .base_url(&self.base_url)
    }

    /// Client with a locally configured allowance (no `user` call at build)
    pub async fn client_with_allowance(&self, allowance: u64, usage: u64) -> TtsMonsterClient {
        self.builder()
            .character_allowance(allowance)
            .character_usage(usage)
            .build()
            .await
            .expect("Failed to build client")
    }

    /// Authenticated JSON response for `POST /{endpoint}`
    pub async fn mock_json_response(&mut self, endpoint: &str, status: usize, body: &str) -> Mock {
        self.server
            .mock("POST", format!("/{}", endpoint).as_str())
            .match_header("authorization", API_KEY)
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(body)
            .create_async()
            .await
    }

    /// Account info with the given quota figures
    pub async fn mock_user(&mut self, usage: u64, allowance: u64) -> Mock {
        let body = serde_json::json!({
            "current_plan": "free",
            "status": "active",
            "renewal_time": 1727392003,
            "character_usage": usage,
            "character_allowance": allowance,
            "portal_url": "https://billing.example/session",
            "has_payment_method": false,
            "downgrading_to_plan": null
        });
        self.mock_json_response("user", 200, &body.to_string()).await
    }

    /// Successful `generate` for an exact request body
    pub async fn mock_generate(
        &mut self,
        voice_id: &str,
        message: &str,
        character_usage: Option<u64>,
    ) -> Mock {
        let mut body = serde_json::json!({
            "status": 200,
            "url": format!("{}/audio/out.wav", self.base_url),
        });
        if let Some(used) = character_usage {
            body["characterUsage"] = serde_json::json!(used);
        }
        self.server
            .mock("POST", "/generate")
            .match_header("authorization", API_KEY)
            .match_body(Matcher::Json(serde_json::json!({
                "voice_id": voice_id,
                "message": message,
                "return_usage": true
            })))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .create_async()
            .await
    }

    /// A mock that must never be hit
    pub async fn mock_unreachable(&mut self, endpoint: &str) -> Mock {
        self.server
            .mock("POST", format!("/{}", endpoint).as_str())
            .with_status(500)
            .expect(0)
            .create_async()
            .await
    }
}
