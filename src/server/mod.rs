pub mod handlers;
pub mod streaming;
pub mod types;

use crate::{
    Result,
    config::{Config, ResponseMode},
    llm::{LlmClient, OpenAiClient},
};
use axum::{Router, routing::get};
use handlers::AppState;
use std::{net::SocketAddr, sync::Arc};
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

pub const CHAT_ROUTE: &str = "/api/chat";

/// Mounts one of the two prompt handlers on `/api/chat`.
pub fn build_router(state: AppState, mode: ResponseMode) -> Router {
    let chat = match mode {
        ResponseMode::Buffered => get(handlers::chat),
        ResponseMode::Streaming => get(handlers::chat_stream),
    };

    Router::new()
        .route(CHAT_ROUTE, chat)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(CorsLayer::permissive()),
        )
        .with_state(state)
}

pub async fn run(config: Config) -> Result<()> {
    // One client for the whole process, shared read-only by every request
    let llm: Arc<dyn LlmClient> = Arc::new(OpenAiClient::new(config.llm.clone()));
    info!(
        "Using model {} at {}",
        config.llm.model, config.llm.base_url
    );

    let app = build_router(AppState::new(llm), config.server.response_mode);

    let addr = SocketAddr::new(config.server.host.parse()?, config.server.port);

    info!(
        "Starting server on {} ({:?} responses)",
        addr, config.server.response_mode
    );

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
