//! Serve the xmlprompter JSON API.
//!
//! # Usage
//!
//! ```bash
//! # API only (enrichment takes the fallback path)
//! cargo run -p xmlprompter-web
//!
//! # With LLM enrichment enabled
//! OPENAI_API_KEY=sk-... cargo run -p xmlprompter-web
//! OPENAI_API_KEY=sk-... cargo run -p xmlprompter-web -- --enrichment-model gpt-4o
//! cargo run -p xmlprompter-web -- --port 8080
//! ```
//!
//! Then drive it with curl:
//!
//! ```bash
//! curl -s localhost:3001/api/health
//! curl -s localhost:3001/api/models
//! curl -s -X POST localhost:3001/api/prompts/generate \
//!   -H 'content-type: application/json' \
//!   -d '{"formData":{"role":"Engineer","task":"Write a function"},"modelId":"claude-sonnet-4"}'
//! ```

use std::sync::Arc;

use clap::Parser;
use tracing::warn;
use tracing_subscriber::EnvFilter;
use xmlprompter_rs::enrich::EnrichmentClient;
use xmlprompter_web::{WebConfig, spawn_web};

/// xmlprompter JSON API server.
#[derive(Parser)]
#[command(about = "Serve the xmlprompter prompt-building API")]
struct Args {
    /// Port to bind on localhost.
    #[arg(long, default_value_t = 3001)]
    port: u16,

    /// Model for the enrichment pass (overrides OPENAI_MODEL).
    #[arg(long)]
    enrichment_model: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), String> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = Args::parse();

    let enrichment = match std::env::var("OPENAI_API_KEY") {
        Ok(api_key) => {
            let client = match &args.enrichment_model {
                Some(model) => EnrichmentClient::with_model(api_key, model.clone())?,
                None => {
                    let model = std::env::var("OPENAI_MODEL")
                        .unwrap_or_else(|_| xmlprompter_rs::enrich::DEFAULT_ENRICHMENT_MODEL.into());
                    EnrichmentClient::with_model(api_key, model)?
                }
            };
            Some(Arc::new(client))
        }
        Err(_) => {
            warn!("OPENAI_API_KEY not set — /api/prompts/enrich will serve fallbacks");
            None
        }
    };

    let config = WebConfig {
        bind_addr: ([127, 0, 0, 1], args.port).into(),
        enrichment,
    };
    let addr = spawn_web(config).await?;
    println!("xmlprompter API: http://{addr}");

    // The server runs on a background task; keep the process alive.
    std::future::pending::<()>().await;
    Ok(())
}
