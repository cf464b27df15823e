//! XML renderer — `<prompt>` root with one child element per populated
//! field.
//!
//! `role` and `style` are inline elements; the long-form fields (`task`,
//! `context`, `requirements`, `output`) are block elements whose value is
//! re-indented line by line. `<style>` is only emitted for models with the
//! `xml_tags` feature, and a `<thinking>` block is prepended when the model
//! both supports thinking and declares `thinking_tags`.

use crate::FormData;
use crate::model::{ModelDescriptor, PromptFormat, PromptGuidelines};
use crate::render::{RenderMetadata, RenderResult, indent_block};

const THINKING_BLOCK: &str =
    "<thinking>\n  Work through the task step by step before responding.\n</thinking>\n\n";

pub fn render(
    form: &FormData,
    guidelines: &PromptGuidelines,
    model: &ModelDescriptor,
) -> RenderResult {
    let thinking = guidelines.supports_thinking && model.has_feature("thinking_tags");

    let mut prompt = String::new();
    if thinking {
        prompt.push_str(THINKING_BLOCK);
    }

    prompt.push_str("<prompt>\n");
    push_inline(&mut prompt, "role", &form.role);
    push_element(&mut prompt, "task", &form.task);
    push_element(&mut prompt, "context", &form.context);
    push_element(&mut prompt, "requirements", &form.requirements);
    if model.has_feature("xml_tags") {
        push_inline(&mut prompt, "style", &form.style);
    }
    push_element(&mut prompt, "output", &form.output);
    prompt.push_str("</prompt>");

    let metadata = RenderMetadata::for_prompt(&prompt).with_flag("thinkingBlock", thinking);
    RenderResult {
        prompt,
        format: PromptFormat::Xml,
        metadata,
    }
}

/// `  <tag>value</tag>` on a single line. Skipped when the value is empty.
fn push_inline(prompt: &mut String, tag: &str, value: &str) {
    if !value.is_empty() {
        prompt.push_str(&format!("  <{tag}>{value}</{tag}>\n"));
    }
}

/// Block element with the value re-indented one level deeper than the tag.
/// Skipped when the value is empty.
fn push_element(prompt: &mut String, tag: &str, value: &str) {
    if !value.is_empty() {
        let body = indent_block(value, "    ");
        prompt.push_str(&format!("  <{tag}>\n    {body}\n  </{tag}>\n"));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::model_by_id;

    fn render_for(form: &FormData, model_id: &str) -> RenderResult {
        let model = model_by_id(model_id).unwrap();
        render(form, &model.prompt_guidelines, model)
    }

    #[test]
    fn reference_output_matches_exactly() {
        let form = FormData::new("Engineer", "Write a function");
        let result = render_for(&form, "claude-haiku-3-5");
        assert_eq!(
            result.prompt,
            "<prompt>\n  <role>Engineer</role>\n  <task>\n    Write a function\n  </task>\n</prompt>"
        );
    }

    #[test]
    fn thinking_block_prepended_when_supported() {
        let form = FormData::new("Engineer", "Write a function");
        let result = render_for(&form, "claude-sonnet-4");
        assert!(result.prompt.starts_with("<thinking>\n"));
        assert!(result.prompt.contains("\n</thinking>\n\n<prompt>"));
        assert_eq!(result.metadata.flags["thinkingBlock"], true);
    }

    #[test]
    fn no_thinking_block_without_feature() {
        // o1 supports thinking but has no thinking_tags feature.
        let form = FormData::new("Engineer", "Write a function");
        let model = model_by_id("o1").unwrap();
        let result = render(&form, &model.prompt_guidelines, model);
        assert!(result.prompt.starts_with("<prompt>"));
        assert_eq!(result.metadata.flags["thinkingBlock"], false);
    }

    #[test]
    fn style_gated_on_xml_tags_feature() {
        let form = FormData::new("Engineer", "Write a function").with_style("terse");
        let with_feature = render_for(&form, "claude-haiku-3-5");
        assert!(with_feature.prompt.contains("  <style>terse</style>\n"));

        // gpt-4o has no xml_tags feature; style must be dropped.
        let without_feature = render_for(&form, "gpt-4o");
        assert!(!without_feature.prompt.contains("<style>"));
    }

    #[test]
    fn empty_fields_produce_no_tags() {
        let form = FormData::new("Engineer", "Write a function");
        let result = render_for(&form, "claude-haiku-3-5");
        for tag in ["<context>", "<requirements>", "<style>", "<output>"] {
            assert!(!result.prompt.contains(tag), "leaked {tag}");
        }
    }

    #[test]
    fn multiline_task_reindented() {
        let form = FormData::new("Engineer", "  Write a function\n  that adds numbers  ");
        let result = render_for(&form, "claude-haiku-3-5");
        assert!(
            result
                .prompt
                .contains("  <task>\n    Write a function\n    that adds numbers\n  </task>")
        );
    }

    #[test]
    fn output_rendered_as_block_element() {
        let form = FormData::new("Engineer", "Write a function").with_output("a code snippet");
        let result = render_for(&form, "claude-haiku-3-5");
        assert!(
            result
                .prompt
                .contains("  <output>\n    a code snippet\n  </output>\n")
        );
    }
}
