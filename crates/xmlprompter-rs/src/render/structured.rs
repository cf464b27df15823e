//! Structured renderer — uppercase labeled sections in plain text.
//!
//! `ROLE:` is the only field with a default fallback anywhere in the
//! renderers: an empty role becomes `Assistant`. Requirements lines are
//! bullet-formatted, and the prompt closes with an uppercase model-name
//! optimization section listing the best practices.

use crate::FormData;
use crate::model::{ModelDescriptor, PromptFormat, PromptGuidelines};
use crate::render::{RenderMetadata, RenderResult, SectionBuilder};

pub fn render(
    form: &FormData,
    guidelines: &PromptGuidelines,
    model: &ModelDescriptor,
) -> RenderResult {
    let role = if form.role.is_empty() {
        "Assistant"
    } else {
        form.role.as_str()
    };

    let requirements = bullet_lines(&form.requirements);
    let practices = guidelines
        .best_practices
        .iter()
        .map(|bp| format!("• {bp}"))
        .collect::<Vec<_>>()
        .join("\n");
    let optimization_label = format!("{} OPTIMIZATION", model.name.to_uppercase());

    let prompt = SectionBuilder::new()
        .labeled("ROLE", role)
        .labeled("TASK", &form.task)
        .block("CONTEXT", &form.context)
        .block("REQUIREMENTS", requirements)
        .labeled("STYLE", &form.style)
        .labeled("OUTPUT FORMAT", &form.output)
        .block(&optimization_label, practices)
        .build();

    let metadata = RenderMetadata::for_prompt(&prompt)
        .with_flag("defaultedRole", form.role.is_empty());
    RenderResult {
        prompt,
        format: PromptFormat::Structured,
        metadata,
    }
}

/// Prefix each non-empty line with `•` unless it already carries a bullet
/// marker (`•`, `-`, or `*`).
fn bullet_lines(requirements: &str) -> String {
    requirements
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| {
            if line.starts_with('•') || line.starts_with('-') || line.starts_with('*') {
                line.to_string()
            } else {
                format!("• {line}")
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
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
    fn role_defaults_to_assistant() {
        let form = FormData::new("", "Write a function");
        let result = render_for(&form, "gpt-4o-mini");
        assert!(result.prompt.starts_with("ROLE: Assistant"));
        assert_eq!(result.metadata.flags["defaultedRole"], true);
    }

    #[test]
    fn explicit_role_used_verbatim() {
        let form = FormData::new("Engineer", "Write a function");
        let result = render_for(&form, "gpt-4o-mini");
        assert!(result.prompt.starts_with("ROLE: Engineer"));
        assert_eq!(result.metadata.flags["defaultedRole"], false);
    }

    #[test]
    fn requirements_are_bulleted() {
        let form = FormData::new("Engineer", "Write a function")
            .with_requirements("fast\nsafe");
        let result = render_for(&form, "gpt-4o-mini");
        assert!(result.prompt.contains("REQUIREMENTS:\n• fast\n• safe"));
    }

    #[test]
    fn existing_bullets_left_alone() {
        let form = FormData::new("Engineer", "Write a function")
            .with_requirements("• already\n- dashed\n* starred\nplain");
        let result = render_for(&form, "gpt-4o-mini");
        assert!(
            result
                .prompt
                .contains("REQUIREMENTS:\n• already\n- dashed\n* starred\n• plain")
        );
    }

    #[test]
    fn optimization_section_uses_uppercase_model_name() {
        let form = FormData::new("Engineer", "Write a function");
        let result = render_for(&form, "gpt-4o-mini");
        assert!(result.prompt.contains("GPT-4O MINI OPTIMIZATION:"));
        assert!(result.prompt.contains("• Break the task into short numbered steps"));
    }

    #[test]
    fn empty_fields_have_no_labels() {
        let form = FormData::new("Engineer", "Write a function");
        let result = render_for(&form, "gpt-4o-mini");
        for label in ["CONTEXT:", "REQUIREMENTS:", "STYLE:", "OUTPUT FORMAT:"] {
            assert!(!result.prompt.contains(label), "leaked {label}");
        }
    }
}
