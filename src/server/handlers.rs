use super::{
    streaming::text_stream_response,
    types::{
        ChatResponse, ErrorResponse, MISSING_PROMPT_ERROR, NO_RESPONSE, QueryPairs,
        extract_prompt,
    },
};
use crate::{
    Result,
    llm::{ChatCompletionRequest, LlmClient},
};
use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use std::sync::Arc;
use tracing::{debug, info};

#[derive(Clone)]
pub struct AppState {
    pub llm: Arc<dyn LlmClient>,
}

impl AppState {
    pub fn new(llm: Arc<dyn LlmClient>) -> Self {
        Self { llm }
    }
}

fn missing_prompt() -> Response {
    debug!("Rejecting request without a usable prompt");
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: MISSING_PROMPT_ERROR.to_string(),
        }),
    )
        .into_response()
}

/// `GET /api/chat?prompt=...` answered with the whole completion as JSON.
pub async fn chat(
    State(state): State<AppState>,
    Query(query): Query<QueryPairs>,
) -> Result<Response> {
    let Some(prompt) = extract_prompt(&query) else {
        return Ok(missing_prompt());
    };

    info!("Received chat request ({} chars)", prompt.len());

    let completion = state
        .llm
        .create_chat_completion(ChatCompletionRequest::from_prompt(prompt))
        .await?;

    let output = completion.first_content().unwrap_or(NO_RESPONSE).to_string();

    Ok(Json(ChatResponse { response: output }).into_response())
}

/// `GET /api/chat?prompt=...` answered with the completion streamed as
/// plain text.
pub async fn chat_stream(
    State(state): State<AppState>,
    Query(query): Query<QueryPairs>,
) -> Result<Response> {
    let Some(prompt) = extract_prompt(&query) else {
        return Ok(missing_prompt());
    };

    info!("Received streaming chat request ({} chars)", prompt.len());

    let fragments = state
        .llm
        .create_chat_completion_stream(ChatCompletionRequest::from_prompt(prompt))
        .await?;

    Ok(text_stream_response(fragments))
}
