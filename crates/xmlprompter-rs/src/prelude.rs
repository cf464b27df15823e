//! Convenience re-exports for common `xmlprompter-rs` types.
//!
//! Meant to be glob-imported by binaries and downstream crates:
//!
//! ```
//! use xmlprompter_rs::prelude::*;
//!
//! let form = FormData::new("Engineer", "Write a function");
//! let result = generate_prompt(&form, "gpt-4o", None).unwrap();
//! assert_eq!(result.format, PromptFormat::Json);
//! ```

// ── Core types ──────────────────────────────────────────────────────
pub use crate::{FormData, estimate_tokens, json_schema_for};

// ── Models ──────────────────────────────────────────────────────────
pub use crate::model::{
    CapabilityRating, Complexity, ModelDescriptor, PromptFormat, PromptGuidelines, all_models,
    model_by_id,
};

// ── Rendering ───────────────────────────────────────────────────────
pub use crate::render::{RenderMetadata, RenderResult, SectionBuilder, generate_prompt};

// ── Validation ──────────────────────────────────────────────────────
pub use crate::validate::{ValidationResult, assess_complexity, validate_prompt};

// ── Enrichment ──────────────────────────────────────────────────────
pub use crate::enrich::{
    DEFAULT_ENRICHMENT_LEVEL, Enrichment, EnrichmentClient, enrichment_instruction,
    fallback_enrichment,
};
