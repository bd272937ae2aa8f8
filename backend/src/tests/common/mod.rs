// Common test utilities and helpers

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode, header};
use http_body_util::BodyExt;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use tower::ServiceExt;

use crate::config::Config;
use crate::models::{NameRequest, NameResponse};
use crate::services::{GenerateError, NameGenerator};
use crate::{AppState, create_router};

/// The documented sample payload the model is instructed to produce.
pub const SAMPLE_MODEL_JSON: &str = r#"{
    "suggestions": [
        {
            "chinese_name": "米凯尔",
            "pinyin": "mi kai er",
            "characters": [
                { "character": "米", "pinyin": "mi" },
                { "character": "凯", "pinyin": "kai" },
                { "character": "尔", "pinyin": "er" }
            ],
            "meaning": "Rice symbolizes nourishment, triumph and distinction",
            "cultural_notes": "Classic phonetic rendering used for Michael",
            "personality": "Confident and dependable",
            "english_intro": "A phonetic match for Michael with a triumphant tone"
        },
        {
            "chinese_name": "麦克",
            "pinyin": "mai ke",
            "characters": [
                { "character": "麦", "pinyin": "mai" },
                { "character": "克", "pinyin": "ke" }
            ],
            "meaning": "Wheat and overcoming, evoking perseverance",
            "cultural_notes": "Short modern transliteration",
            "personality": "Direct and energetic",
            "english_intro": "A compact everyday rendering of Michael"
        }
    ]
}"#;

/// The same payload wrapped the way the model usually returns it.
pub fn sample_model_output_fenced() -> String {
    format!("```json\n{}\n```", SAMPLE_MODEL_JSON)
}

pub fn sample_response() -> NameResponse {
    serde_json::from_str(SAMPLE_MODEL_JSON).expect("sample payload parses")
}

/// Canned outcome for a stubbed generator.
pub enum StubOutcome {
    Success(NameResponse),
    Timeout,
    Upstream,
    EmptyResult,
}

/// Substitutable `NameGenerator` that records how often it was invoked.
pub struct StubGenerator {
    outcome: StubOutcome,
    pub calls: AtomicUsize,
}

impl StubGenerator {
    pub fn new(outcome: StubOutcome) -> Arc<Self> {
        Arc::new(Self { outcome, calls: AtomicUsize::new(0) })
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl NameGenerator for StubGenerator {
    async fn generate(&self, _request: &NameRequest) -> Result<NameResponse, GenerateError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match &self.outcome {
            StubOutcome::Success(response) => Ok(response.clone()),
            StubOutcome::Timeout => Err(GenerateError::Timeout(20)),
            StubOutcome::Upstream => Err(GenerateError::Upstream("connection refused".to_string())),
            StubOutcome::EmptyResult => Err(GenerateError::EmptyResult),
        }
    }
}

/// Router wired to the given generator with default configuration.
pub fn test_router(generator: Arc<dyn NameGenerator>) -> Router {
    create_router(Arc::new(AppState { generator }), &Config::default())
}

/// POST a raw JSON body to /api/generate and return status plus parsed body.
pub async fn post_generate(router: Router, body: &str) -> (StatusCode, serde_json::Value) {
    let request = Request::builder()
        .method("POST")
        .uri("/api/generate")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request builds");

    let response = router.oneshot(request).await.expect("router responds");
    let status = response.status();
    let bytes = response.into_body().collect().await.expect("body collects").to_bytes();
    let value = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
    (status, value)
}
