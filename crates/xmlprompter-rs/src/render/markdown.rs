//! Markdown renderer — one `##` heading per populated field in fixed
//! order, closed by an always-present best-practices list.

use crate::FormData;
use crate::model::{ModelDescriptor, PromptFormat, PromptGuidelines};
use crate::render::{RenderMetadata, RenderResult, SectionBuilder};

pub fn render(
    form: &FormData,
    guidelines: &PromptGuidelines,
    model: &ModelDescriptor,
) -> RenderResult {
    let practices = guidelines
        .best_practices
        .iter()
        .enumerate()
        .map(|(i, bp)| format!("{}. {bp}", i + 1))
        .collect::<Vec<_>>()
        .join("\n");

    let section_count = form.populated_fields() + 1;

    let prompt = SectionBuilder::new()
        .heading("Role", &form.role)
        .heading("Task", &form.task)
        .heading("Context", &form.context)
        .heading("Requirements", &form.requirements)
        .heading("Style Guidelines", &form.style)
        .heading("Output Format", &form.output)
        .heading(&format!("Best Practices for {}", model.name), practices)
        .build();

    let metadata = RenderMetadata::for_prompt(&prompt).with_flag("sectionCount", section_count);
    RenderResult {
        prompt,
        format: PromptFormat::Markdown,
        metadata,
    }
}
