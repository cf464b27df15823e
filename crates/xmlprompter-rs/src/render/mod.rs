//! Format renderers and the prompt generation entry point.
//!
//! [`generate_prompt`] resolves the model, picks the output format (the
//! model's preferred format unless overridden), and dispatches to one pure
//! renderer per [`PromptFormat`] variant. Every renderer has the same
//! contract: `render(form, guidelines, model) -> RenderResult`, no side
//! effects, byte-identical output for identical inputs.
//!
//! A populated form field is never silently dropped — each one maps to
//! exactly one labeled section or key in every format. The single
//! exception is `style` in XML, which the source gates on the `xml_tags`
//! model feature.

pub mod json;
pub mod markdown;
pub mod plain;
pub mod sections;
pub mod structured;
pub mod xml;
pub mod yaml;

pub use sections::SectionBuilder;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::FormData;
use crate::model::{PromptFormat, model_by_id};

// ── Result types ───────────────────────────────────────────────────

/// Metadata attached to every rendered prompt.
///
/// `flags` carries the format-specific extras (e.g. `thinkingBlock` for
/// XML, `sectionCount` for Markdown) flattened into the serialized object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderMetadata {
    /// Whether model-specific guidance shaped the output.
    pub model_optimized: bool,
    /// `ceil(prompt chars / 4)` — see [`crate::estimate_tokens`].
    pub estimated_tokens: usize,
    #[serde(flatten)]
    pub flags: serde_json::Map<String, serde_json::Value>,
}

impl RenderMetadata {
    /// Metadata for a finished prompt string, with no flags yet.
    pub fn for_prompt(prompt: &str) -> Self {
        Self {
            model_optimized: true,
            estimated_tokens: crate::estimate_tokens(prompt),
            flags: serde_json::Map::new(),
        }
    }

    /// Attach a format-specific flag.
    pub fn with_flag(mut self, key: &str, value: impl Into<serde_json::Value>) -> Self {
        self.flags.insert(key.to_string(), value.into());
        self
    }
}

/// A rendered prompt plus its format tag and metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderResult {
    pub prompt: String,
    pub format: PromptFormat,
    pub metadata: RenderMetadata,
}

// ── Entry point ────────────────────────────────────────────────────

/// Render a prompt for the given model.
///
/// Resolves the model's guidance and preferred format from the registry,
/// then invokes the matching renderer. `format_override` replaces the
/// model's preferred format when set.
///
/// # Errors
///
/// An unrecognized `model_id` is a hard error — there is no silent
/// default model.
pub fn generate_prompt(
    form: &FormData,
    model_id: &str,
    format_override: Option<PromptFormat>,
) -> Result<RenderResult, String> {
    let model = model_by_id(model_id).ok_or_else(|| format!("unknown model: {model_id}"))?;
    let format = format_override.unwrap_or(model.preferred_format);
    let guidelines = &model.prompt_guidelines;

    debug!(
        "rendering prompt: model={}, format={}, fields={}",
        model.id,
        format,
        form.populated_fields()
    );

    let result = match format {
        PromptFormat::Xml => xml::render(form, guidelines, model),
        PromptFormat::Json => json::render(form, guidelines, model),
        PromptFormat::Markdown => markdown::render(form, guidelines, model),
        PromptFormat::Structured => structured::render(form, guidelines, model),
        PromptFormat::Yaml => yaml::render(form, guidelines, model),
        PromptFormat::Plain => plain::render(form, guidelines, model),
    };
    Ok(result)
}

// ── Shared helpers ─────────────────────────────────────────────────

/// Re-indent a multi-line value for embedding at `indent`.
///
/// Each line is trimmed and the lines re-joined with the target indent,
/// then the whole block is trimmed. Single-line values pass through
/// unchanged apart from trimming.
pub(crate) fn indent_block(value: &str, indent: &str) -> String {
    let joined = value
        .lines()
        .map(str::trim)
        .collect::<Vec<_>>()
        .join(&format!("\n{indent}"));
    joined.trim().to_string()
}

/// `Some(s)` when non-empty, for optional serialization.
pub(crate) fn non_empty(s: &str) -> Option<&str> {
    if s.is_empty() { None } else { Some(s) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::estimate_tokens;

    fn minimal_form() -> FormData {
        FormData::new("Engineer", "Write a function")
    }

    #[test]
    fn unknown_model_is_an_error() {
        let err = generate_prompt(&minimal_form(), "nonexistent-model", None).unwrap_err();
        assert!(err.contains("unknown model"));
    }

    #[test]
    fn preferred_format_used_by_default() {
        let result = generate_prompt(&minimal_form(), "gpt-4o", None).unwrap();
        assert_eq!(result.format, PromptFormat::Json);
    }

    #[test]
    fn format_override_wins() {
        let result =
            generate_prompt(&minimal_form(), "gpt-4o", Some(PromptFormat::Markdown)).unwrap();
        assert_eq!(result.format, PromptFormat::Markdown);
        assert!(result.prompt.contains("## Role"));
    }

    #[test]
    fn renderers_are_idempotent() {
        let form = minimal_form()
            .with_context("Some context")
            .with_requirements("- fast\n- safe");
        for format in PromptFormat::ALL {
            let a = generate_prompt(&form, "claude-sonnet-4", Some(format)).unwrap();
            let b = generate_prompt(&form, "claude-sonnet-4", Some(format)).unwrap();
            assert_eq!(a.prompt, b.prompt, "{format} output not stable");
            assert_eq!(a.metadata, b.metadata);
        }
    }

    #[test]
    fn token_estimate_matches_prompt_length_in_every_format() {
        let form = minimal_form().with_context("background");
        for format in PromptFormat::ALL {
            let result = generate_prompt(&form, "claude-sonnet-4", Some(format)).unwrap();
            assert_eq!(
                result.metadata.estimated_tokens,
                estimate_tokens(&result.prompt),
                "estimate mismatch for {format}"
            );
        }
    }

    #[test]
    fn role_and_task_only_omits_all_other_sections() {
        // With only role and task set, no other field label may appear in
        // any format's output.
        let form = minimal_form();
        let labels = [
            "context",
            "Context",
            "CONTEXT",
            "requirements",
            "Requirements",
            "REQUIREMENTS",
            "<style>",
            "Style Guidelines",
            "STYLE:",
            "output_format",
            "Output Format",
            "OUTPUT FORMAT",
        ];
        for format in PromptFormat::ALL {
            let result = generate_prompt(&form, "claude-sonnet-4", Some(format)).unwrap();
            for label in labels {
                assert!(
                    !result.prompt.contains(label),
                    "{format} output leaked `{label}`:\n{}",
                    result.prompt
                );
            }
        }
    }

    #[test]
    fn indent_block_single_line_passthrough() {
        assert_eq!(indent_block("Write a function", "    "), "Write a function");
    }

    #[test]
    fn indent_block_trims_and_reindents() {
        let block = indent_block("  first line\n   second line ", "    ");
        assert_eq!(block, "first line\n    second line");
    }

    #[test]
    fn indent_block_drops_surrounding_blank_lines() {
        let block = indent_block("\nfirst\n", "  ");
        assert_eq!(block, "first");
    }

    #[test]
    fn metadata_flags_flatten_into_json() {
        let meta = RenderMetadata::for_prompt("abcd").with_flag("thinkingBlock", true);
        let json = serde_json::to_value(&meta).unwrap();
        assert_eq!(json["modelOptimized"], true);
        assert_eq!(json["estimatedTokens"], 1);
        assert_eq!(json["thinkingBlock"], true);
    }
}
