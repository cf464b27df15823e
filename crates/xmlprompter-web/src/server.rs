//! Axum server setup and router construction.

use std::net::SocketAddr;

use axum::Router;
use axum::routing::{get, post};
use tower_http::cors::{Any, CorsLayer};

use crate::api::{self, AppState};

/// Build the full axum router.
pub fn build_router(state: AppState) -> Router {
    // CORS layer for development (the form UI runs on a different port).
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/prompts/generate", post(api::post_generate))
        .route("/api/prompts/validate", post(api::post_validate))
        .route("/api/prompts/enrich", post(api::post_enrich))
        .route("/api/models", get(api::get_models))
        .route("/api/schema", get(api::get_schema))
        .route("/api/health", get(api::get_health))
        .with_state(state)
        .layer(cors)
}

/// Bind the listener, spawn the serve loop, and return the bound address.
pub async fn start_server(router: Router, bind_addr: SocketAddr) -> Result<SocketAddr, String> {
    let listener = tokio::net::TcpListener::bind(bind_addr)
        .await
        .map_err(|e| format!("failed to bind {bind_addr}: {e}"))?;
    let addr = listener
        .local_addr()
        .map_err(|e| format!("failed to read bound address: {e}"))?;

    tokio::spawn(async move {
        if let Err(e) = axum::serve(listener, router).await {
            tracing::error!("server error: {e}");
        }
    });

    Ok(addr)
}
