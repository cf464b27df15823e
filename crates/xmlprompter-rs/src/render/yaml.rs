//! YAML renderer — hand-emitted to match a fixed wire style.
//!
//! Short fields (`role`, `style`, `output`) are double-quoted scalars with
//! `"` and newlines escaped; long-form fields (`task`, `context`,
//! `requirements`) are `|` block scalars. No YAML library produces this
//! mixed layout, so the emission is explicit.

use crate::FormData;
use crate::model::{ModelDescriptor, PromptFormat, PromptGuidelines};
use crate::render::{RenderMetadata, RenderResult};

pub fn render(
    form: &FormData,
    guidelines: &PromptGuidelines,
    model: &ModelDescriptor,
) -> RenderResult {
    let mut prompt = String::new();
    prompt.push_str(&format!("model: {}\n", quoted(model.name)));
    prompt.push_str(&format!("provider: {}\n", quoted(model.provider)));

    let mut block_scalars = 0usize;
    if form.populated_fields() > 0 {
        prompt.push_str("prompt:\n");
        push_quoted(&mut prompt, "role", &form.role);
        block_scalars += push_block(&mut prompt, "task", &form.task);
        block_scalars += push_block(&mut prompt, "context", &form.context);
        block_scalars += push_block(&mut prompt, "requirements", &form.requirements);
        push_quoted(&mut prompt, "style", &form.style);
        push_quoted(&mut prompt, "output", &form.output);
    }

    prompt.push_str("optimization:\n  best_practices:\n");
    for bp in guidelines.best_practices {
        prompt.push_str(&format!("    - {}\n", quoted(bp)));
    }
    // Drop the trailing newline so the prompt ends at the last list item.
    let prompt = prompt.trim_end().to_string();

    let metadata = RenderMetadata::for_prompt(&prompt).with_flag("blockScalars", block_scalars);
    RenderResult {
        prompt,
        format: PromptFormat::Yaml,
        metadata,
    }
}

/// Double-quoted scalar with `"` and newlines escaped.
fn quoted(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\\\"").replace('\n', "\\n"))
}

/// `  key: "value"` line. Skipped when the value is empty.
fn push_quoted(prompt: &mut String, key: &str, value: &str) {
    if !value.is_empty() {
        prompt.push_str(&format!("  {key}: {}\n", quoted(value)));
    }
}

/// `  key: |` block scalar with the value indented below. Skipped when the
/// value is empty. Returns 1 when a block was emitted.
fn push_block(prompt: &mut String, key: &str, value: &str) -> usize {
    if value.is_empty() {
        return 0;
    }
    prompt.push_str(&format!("  {key}: |\n"));
    for line in value.lines() {
        prompt.push_str(&format!("    {line}\n"));
    }
    1
}
