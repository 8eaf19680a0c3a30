use axum::{
    Router,
    body::Body,
    http::{Request, Response},
};
use prompt_relay::{
    config::{LlmConfig, ResponseMode},
    llm::LlmClient,
    server::{build_router, handlers::AppState},
};
use std::sync::Arc;
use tower::ServiceExt; // for `oneshot`

use super::mocks::MockLlmClient;

/// LLM config pointed at a local mock server
pub fn create_test_llm_config(base_url: &str) -> LlmConfig {
    LlmConfig {
        base_url: base_url.to_string(),
        api_key: "test-api-key".to_string(),
        model: "llama3-70b-8192".to_string(),
        temperature: None,
        max_tokens: None,
    }
}

/// Router backed by the mock, plus a handle for inspecting recorded requests
pub fn create_test_app(mock: MockLlmClient, mode: ResponseMode) -> (Router, Arc<MockLlmClient>) {
    let mock = Arc::new(mock);
    let llm: Arc<dyn LlmClient> = mock.clone();
    (build_router(AppState::new(llm), mode), mock)
}

pub async fn get(app: &Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();

    app.clone().oneshot(request).await.unwrap()
}

pub async fn body_bytes(response: Response<Body>) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap()
        .to_vec()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}
