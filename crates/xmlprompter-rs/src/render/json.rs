//! JSON renderer — a pretty-printed object with one key per populated
//! field plus model instructions.
//!
//! Keys follow struct declaration order: `role`, `task`, `context`,
//! `requirements`, `style`, `output_format`, then the always-present
//! `instructions` (the model's best practices) and `model_info` (name and
//! the capability areas rated excellent). Empty fields are skipped rather
//! than serialized as null.

use serde::Serialize;

use crate::FormData;
use crate::model::{ModelDescriptor, PromptFormat, PromptGuidelines};
use crate::render::{RenderMetadata, RenderResult, non_empty};

#[derive(Serialize)]
struct JsonPrompt<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    role: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    task: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    context: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    requirements: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    style: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    output_format: Option<&'a str>,
    instructions: &'a [&'a str],
    model_info: JsonModelInfo<'a>,
}

#[derive(Serialize)]
struct JsonModelInfo<'a> {
    name: &'a str,
    capabilities: Vec<&'a str>,
}

pub fn render(
    form: &FormData,
    guidelines: &PromptGuidelines,
    model: &ModelDescriptor,
) -> RenderResult {
    let doc = JsonPrompt {
        role: non_empty(&form.role),
        task: non_empty(&form.task),
        context: non_empty(&form.context),
        requirements: non_empty(&form.requirements),
        style: non_empty(&form.style),
        output_format: non_empty(&form.output),
        instructions: guidelines.best_practices,
        model_info: JsonModelInfo {
            name: model.name,
            capabilities: model.excellent_capabilities(),
        },
    };

    // Serialization of a plain string struct cannot fail in practice;
    // fall back to an empty object rather than panicking.
    let prompt = serde_json::to_string_pretty(&doc).unwrap_or_else(|_| "{}".to_string());

    let metadata = RenderMetadata::for_prompt(&prompt)
        .with_flag("instructionCount", guidelines.best_practices.len());
    RenderResult {
        prompt,
        format: PromptFormat::Json,
        metadata,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::model_by_id;

    fn render_for(form: &FormData, model_id: &str) -> serde_json::Value {
        let model = model_by_id(model_id).unwrap();
        let result = render(form, &model.prompt_guidelines, model);
        serde_json::from_str(&result.prompt).unwrap()
    }

    #[test]
    fn output_is_valid_json_with_populated_keys() {
        let form = FormData::new("Engineer", "Write a function").with_output("a code block");
        let json = render_for(&form, "gpt-4o");
        assert_eq!(json["role"], "Engineer");
        assert_eq!(json["task"], "Write a function");
        assert_eq!(json["output_format"], "a code block");
    }

    #[test]
    fn empty_fields_absent_not_null() {
        let form = FormData::new("Engineer", "Write a function");
        let json = render_for(&form, "gpt-4o");
        let obj = json.as_object().unwrap();
        for key in ["context", "requirements", "style", "output_format"] {
            assert!(!obj.contains_key(key), "{key} should be absent");
        }
    }

    #[test]
    fn instructions_are_the_best_practices() {
        let form = FormData::new("Engineer", "Write a function");
        let model = model_by_id("gpt-4o").unwrap();
        let json = render_for(&form, "gpt-4o");
        let instructions: Vec<&str> = json["instructions"]
            .as_array()
            .unwrap()
            .iter()
            .map(|v| v.as_str().unwrap())
            .collect();
        assert_eq!(instructions, model.prompt_guidelines.best_practices);
    }

    #[test]
    fn model_info_lists_excellent_capabilities_only() {
        let form = FormData::new("Engineer", "Write a function");
        let json = render_for(&form, "gpt-4o");
        assert_eq!(json["model_info"]["name"], "GPT-4o");
        let caps = json["model_info"]["capabilities"].as_array().unwrap();
        assert!(caps.contains(&"coding".into()));
        // "reasoning" is rated good, not excellent.
        assert!(!caps.contains(&"reasoning".into()));
    }

    #[test]
    fn pretty_printed_with_two_space_indent() {
        let form = FormData::new("Engineer", "Write a function");
        let model = model_by_id("gpt-4o").unwrap();
        let result = render(&form, &model.prompt_guidelines, model);
        assert!(result.prompt.starts_with("{\n  \"role\""));
    }
}
