//! Plain renderer — natural-language paragraphs with no labels.
//!
//! Opens with "You are a {role}. Your task is: {task}", follows with one
//! unlabeled paragraph per remaining populated field, and closes with a
//! single sentence joining the model's best practices with commas.

use crate::FormData;
use crate::model::{ModelDescriptor, PromptFormat, PromptGuidelines};
use crate::render::{RenderMetadata, RenderResult, SectionBuilder};

pub fn render(
    form: &FormData,
    guidelines: &PromptGuidelines,
    model: &ModelDescriptor,
) -> RenderResult {
    let mut opening = String::new();
    if !form.role.is_empty() {
        opening.push_str(&format!("You are a {}.", form.role));
    }
    if !form.task.is_empty() {
        if !opening.is_empty() {
            opening.push(' ');
        }
        opening.push_str(&format!("Your task is: {}", form.task));
    }

    let closing = if guidelines.best_practices.is_empty() {
        String::new()
    } else {
        format!(
            "For the best results with {}: {}.",
            model.name,
            guidelines.best_practices.join(", ")
        )
    };

    let prompt = SectionBuilder::new()
        .raw(opening)
        .raw(&form.context)
        .raw(&form.requirements)
        .raw(&form.style)
        .raw(&form.output)
        .raw(closing)
        .build();

    let metadata = RenderMetadata::for_prompt(&prompt)
        .with_flag("bestPracticeCount", guidelines.best_practices.len());
    RenderResult {
        prompt,
        format: PromptFormat::Plain,
        metadata,
    }
}
