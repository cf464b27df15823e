//! REST API endpoint handlers.
//!
//! Generation and validation are synchronous pure calls into
//! `xmlprompter-rs`; enrichment awaits one upstream LLM request and
//! converts any failure into the deterministic fallback plus a 500.

use std::sync::Arc;
use std::time::Instant;

use axum::Json;
use axum::extract::State;
use axum::http::{HeaderMap, StatusCode, header};
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{debug, error};

use xmlprompter_rs::enrich::{DEFAULT_ENRICHMENT_LEVEL, EnrichmentClient, fallback_enrichment};
use xmlprompter_rs::model::{PromptFormat, all_models};
use xmlprompter_rs::validate::validate_prompt;
use xmlprompter_rs::{FormData, json_schema_for, render::generate_prompt};

/// Shared application state passed to all handlers via axum's `State`
/// extractor.
#[derive(Clone, Default)]
pub struct AppState {
    /// Enrichment client; `None` when no upstream API key is configured.
    pub enrichment: Option<Arc<EnrichmentClient>>,
}

// ── Generate ───────────────────────────────────────────────────────

/// Request body for POST /api/prompts/generate.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateRequest {
    pub form_data: FormData,
    pub model_id: String,
    #[serde(default)]
    pub format: Option<PromptFormat>,
}

/// POST /api/prompts/generate — Render a prompt for a model.
///
/// Returns the full render result (prompt, format, metadata) on success,
/// 404 when the model id is unknown.
pub async fn post_generate(Json(body): Json<GenerateRequest>) -> Response {
    match generate_prompt(&body.form_data, &body.model_id, body.format) {
        Ok(result) => (StatusCode::OK, Json(result)).into_response(),
        Err(e) => (StatusCode::NOT_FOUND, Json(json!({"error": e}))).into_response(),
    }
}

// ── Validate ───────────────────────────────────────────────────────

/// Request body for POST /api/prompts/validate.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidateRequest {
    pub form_data: FormData,
    pub model_id: String,
}

/// POST /api/prompts/validate — Validate form input against a model.
///
/// Always 200; problems are reported inside the validation result.
pub async fn post_validate(Json(body): Json<ValidateRequest>) -> Response {
    let report = validate_prompt(&body.form_data, &body.model_id);
    (StatusCode::OK, Json(report)).into_response()
}

// ── Enrich ─────────────────────────────────────────────────────────

/// Request body for POST /api/prompts/enrich. Fields arrive flat, matching
/// the form UI's payload.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EnrichRequest {
    pub role: String,
    pub task: String,
    pub context: String,
    pub requirements: String,
    pub style: String,
    pub output: String,
    pub user_tier: String,
    pub enrichment_level: u8,
}

impl Default for EnrichRequest {
    fn default() -> Self {
        Self {
            role: String::new(),
            task: String::new(),
            context: String::new(),
            requirements: String::new(),
            style: String::new(),
            output: String::new(),
            user_tier: "free".to_string(),
            enrichment_level: DEFAULT_ENRICHMENT_LEVEL,
        }
    }
}

impl EnrichRequest {
    fn form_data(&self) -> FormData {
        FormData {
            role: self.role.clone(),
            task: self.task.clone(),
            context: self.context.clone(),
            requirements: self.requirements.clone(),
            style: self.style.clone(),
            output: self.output.clone(),
        }
    }
}

/// Successful enrichment response.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichResponse {
    pub enriched_prompt: String,
    pub improvements: Vec<String>,
    pub quality_score: u32,
    pub is_enriched: bool,
    /// Wall-clock milliseconds spent on the upstream call.
    pub processing_time: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tokens_used: Option<u32>,
    pub tier: String,
}

/// POST /api/prompts/enrich — Run the LLM enrichment pass.
///
/// 400 when `role` or `task` is missing. An upstream failure (or a missing
/// API key) produces a 500 carrying the deterministic XML fallback — the
/// only recovery path in the system. The optional bearer token is accepted
/// but not verified here.
pub async fn post_enrich(
    State(app): State<AppState>,
    headers: HeaderMap,
    Json(body): Json<EnrichRequest>,
) -> Response {
    if body.role.is_empty() || body.task.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({"error": "role and task are required"})),
        )
            .into_response();
    }

    let authenticated = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v.starts_with("Bearer "));
    debug!(
        "enrich request: tier={}, level={}, authenticated={}",
        body.user_tier, body.enrichment_level, authenticated
    );

    let form = body.form_data();
    let started = Instant::now();

    let outcome = match &app.enrichment {
        Some(client) => {
            client
                .enrich(&form, body.enrichment_level, &body.user_tier)
                .await
        }
        None => Err("enrichment is not configured: OPENAI_API_KEY is not set".to_string()),
    };

    match outcome {
        Ok(enrichment) => {
            let response = EnrichResponse {
                enriched_prompt: enrichment.enriched_prompt,
                improvements: enrichment.improvements,
                quality_score: enrichment.quality_score,
                is_enriched: enrichment.is_enriched,
                processing_time: started.elapsed().as_millis() as u64,
                tokens_used: enrichment.tokens_used,
                tier: body.user_tier,
            };
            (StatusCode::OK, Json(response)).into_response()
        }
        Err(e) => {
            error!("enrichment failed, serving fallback: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "error": e,
                    "fallback": fallback_enrichment(&form),
                })),
            )
                .into_response()
        }
    }
}

// ── Metadata ───────────────────────────────────────────────────────

/// GET /api/models — The model registry, for selector UIs.
pub async fn get_models() -> Json<serde_json::Value> {
    Json(serde_json::to_value(all_models()).unwrap_or_default())
}

/// GET /api/schema — JSON Schema of the form input, for dynamic form UIs.
pub async fn get_schema() -> Json<serde_json::Value> {
    Json(json_schema_for::<FormData>())
}

/// GET /api/health — Liveness probe.
pub async fn get_health() -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
