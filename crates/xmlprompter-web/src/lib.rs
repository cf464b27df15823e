//! HTTP API for `xmlprompter-rs` powered prompt building.
//!
//! `xmlprompter-web` exposes the prompt engine over a small JSON API:
//! generation, validation, the model registry, the form schema, and the
//! LLM enrichment pass with its deterministic fallback.
//!
//! # Quick start
//!
//! ```ignore
//! use xmlprompter_web::{WebConfig, spawn_web};
//!
//! let config = WebConfig::default();
//! let addr = spawn_web(config).await?;
//! println!("xmlprompter API: http://{addr}");
//! ```
//!
//! # Routes
//!
//! | Route | Description |
//! |-------|-------------|
//! | `POST /api/prompts/generate` | Render a prompt for a model |
//! | `POST /api/prompts/validate` | Validate form input |
//! | `POST /api/prompts/enrich` | LLM enrichment with fallback on failure |
//! | `GET /api/models` | The model registry |
//! | `GET /api/schema` | JSON Schema of the form input |
//! | `GET /api/health` | Liveness probe |

mod api;
mod server;

pub use api::AppState;
pub use server::{build_router, start_server};

use std::net::SocketAddr;
use std::sync::Arc;

use xmlprompter_rs::enrich::EnrichmentClient;

/// Configuration for the web server.
pub struct WebConfig {
    /// Address to bind to. Default: `127.0.0.1:3001`.
    pub bind_addr: SocketAddr,
    /// Enrichment client, when an upstream API key is configured.
    ///
    /// With `None`, `/api/prompts/enrich` always takes the fallback path
    /// and reports the missing configuration as the error.
    pub enrichment: Option<Arc<EnrichmentClient>>,
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3001)),
            enrichment: None,
        }
    }
}

/// Build the router from `config` and start serving on a background task.
///
/// Returns the bound address (useful with port 0 in tests).
pub async fn spawn_web(config: WebConfig) -> Result<SocketAddr, String> {
    let state = AppState {
        enrichment: config.enrichment,
    };
    let router = build_router(state);
    start_server(router, config.bind_addr).await
}
