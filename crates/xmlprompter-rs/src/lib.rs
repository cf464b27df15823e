//! Structured prompt builder for AI models.
//!
//! `xmlprompter-rs` turns a user's structured form input — role, task,
//! context, requirements, style, output — into a model-specific prompt
//! string. Each supported model declares a preferred output format (XML,
//! JSON, Markdown, structured plain text, YAML, or natural language) plus
//! best-practice guidance, and the matching renderer produces the final
//! prompt deterministically. A separate validator scores the input against
//! the model's declared limits without ever throwing.
//!
//! An optional enrichment pass sends the draft through an OpenAI-compatible
//! LLM with an instruction chosen from a 0–100 "creative license" table;
//! when the upstream call fails, a deterministic XML fallback is produced
//! instead.
//!
//! # Getting started
//!
//! ```
//! use xmlprompter_rs::prelude::*;
//!
//! let form = FormData::new("Engineer", "Write a function");
//! let result = generate_prompt(&form, "claude-haiku-3-5", None).unwrap();
//! assert_eq!(result.format, PromptFormat::Xml);
//! assert!(result.prompt.starts_with("<prompt>"));
//!
//! let report = validate_prompt(&form, "claude-haiku-3-5");
//! assert!(report.is_valid);
//! ```
//!
//! # Where to find things
//!
//! - **Model metadata:** [`model::ModelDescriptor`], looked up through
//!   [`model::model_by_id`] against the static [`model::MODELS`] table.
//! - **Rendering:** [`render::generate_prompt`] dispatches to one pure
//!   renderer per [`model::PromptFormat`] variant. Renderers never fail and
//!   never drop a populated field.
//! - **Validation:** [`validate::validate_prompt`] and
//!   [`validate::assess_complexity`] — soft results, populated error and
//!   warning lists, no panics.
//! - **Enrichment:** [`enrich::EnrichmentClient`] for the LLM call,
//!   [`enrich::enrichment_instruction`] for the level table, and
//!   [`enrich::fallback_enrichment`] for the failure path.
//!
//! # Design principles
//!
//! 1. **Deterministic output.** Every renderer is a pure function: same
//!    form, same model, same string. Token estimates derive only from the
//!    prompt length.
//! 2. **Soft validation.** Problems with the user's input are data
//!    (`errors` / `warnings` lists), never control flow. Only an unknown
//!    model id is a hard error, and only at the render entry point.
//! 3. **One recovery path.** The enrichment call has no retry, no backoff,
//!    and no circuit breaker — a failure immediately yields the fallback
//!    template and is terminal for the request.

pub mod enrich;
pub mod model;
pub mod prelude;
pub mod render;
pub mod validate;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

// Re-export schemars for downstream crates.
pub use schemars;

// ── Form input ─────────────────────────────────────────────────────

/// The structured form input a prompt is rendered from.
///
/// All fields are plain strings; an empty string means the field was left
/// blank. Only `role` and `task` are required for a prompt to validate.
/// Serialization uses camelCase to match the HTTP API wire format.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct FormData {
    /// Who the model should act as (e.g. "Senior Rust engineer").
    pub role: String,
    /// What the model should do. The main body of the prompt.
    pub task: String,
    /// Background information the model needs.
    pub context: String,
    /// Constraints and requirements, typically one per line.
    pub requirements: String,
    /// Tone and style guidance.
    pub style: String,
    /// Desired output shape (e.g. "a markdown table").
    pub output: String,
}

impl FormData {
    /// Create a form with the two required fields set.
    pub fn new(role: impl Into<String>, task: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            task: task.into(),
            ..Default::default()
        }
    }

    /// Set the context field.
    pub fn with_context(mut self, context: impl Into<String>) -> Self {
        self.context = context.into();
        self
    }

    /// Set the requirements field.
    pub fn with_requirements(mut self, requirements: impl Into<String>) -> Self {
        self.requirements = requirements.into();
        self
    }

    /// Set the style field.
    pub fn with_style(mut self, style: impl Into<String>) -> Self {
        self.style = style.into();
        self
    }

    /// Set the output field.
    pub fn with_output(mut self, output: impl Into<String>) -> Self {
        self.output = output.into();
        self
    }

    /// Number of non-empty fields.
    pub fn populated_fields(&self) -> usize {
        [
            &self.role,
            &self.task,
            &self.context,
            &self.requirements,
            &self.style,
            &self.output,
        ]
        .iter()
        .filter(|f| !f.is_empty())
        .count()
    }
}

// ── Token estimation ───────────────────────────────────────────────

/// Estimate the token count of a prompt: `ceil(chars / 4)`.
///
/// Deterministic given the string — renderers report this in their
/// metadata so callers can show a size hint without a tokenizer.
pub fn estimate_tokens(text: &str) -> usize {
    text.chars().count().div_ceil(4)
}

// ── Schema generation ──────────────────────────────────────────────

/// Generate a JSON Schema `serde_json::Value` from a type that implements
/// `schemars::JsonSchema`. Form-driven clients fetch the [`FormData`]
/// schema through this to build their input UI dynamically.
pub fn json_schema_for<T: JsonSchema>() -> serde_json::Value {
    let schema = schemars::schema_for!(T);
    serde_json::to_value(schema)
        .unwrap_or_else(|_| serde_json::json!({"type": "object", "properties": {}}))
}
