//! Chunked plain-text responses for streamed completions.
//!
//! Each text fragment is written to the body as soon as the upstream
//! produces it; nothing is collected in memory.

use axum::{
    body::Body,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use futures::StreamExt;
use tracing::error;

use crate::llm::TextStream;

pub const TEXT_CONTENT_TYPE: &str = "text/plain; charset=utf-8";

/// Wrap a fragment stream in a 200 response. An `Err` item aborts the body,
/// so the client sees a truncated transfer rather than a status code.
pub fn text_stream_response(fragments: TextStream) -> Response {
    let body = fragments.inspect(|item| {
        if let Err(e) = item {
            error!("Completion stream aborted: {}", e);
        }
    });

    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, TEXT_CONTENT_TYPE),
            (header::CACHE_CONTROL, "no-cache"),
        ],
        Body::from_stream(body),
    )
        .into_response()
}
