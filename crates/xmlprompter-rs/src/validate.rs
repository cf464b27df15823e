//! Soft validation of form input against a model's declared limits.
//!
//! [`validate_prompt`] never fails — problems come back as populated
//! `errors` and `warnings` lists. Only the model lookup can short-circuit
//! the checks, and even that is reported as data rather than an `Err`.
//! [`assess_complexity`] is the deterministic scoring behind the
//! complexity field.

use serde::{Deserialize, Serialize};

use crate::FormData;
use crate::model::{Complexity, PromptFormat, model_by_id};

/// Outcome of validating a form against a model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    /// False when any error is present.
    pub is_valid: bool,
    /// Hard problems that block prompt generation.
    pub errors: Vec<String>,
    /// Advisory findings; never affect `is_valid`.
    pub warnings: Vec<String>,
    /// Heuristic complexity of the input.
    pub complexity: Complexity,
    /// The model's preferred format. Absent when the model is unknown.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub recommended_format: Option<PromptFormat>,
}

/// Validate a form against the named model.
///
/// An unknown model short-circuits with a single error and no further
/// checks. Otherwise missing required fields become errors, and oversized
/// or overly complex input becomes warnings.
pub fn validate_prompt(form: &FormData, model_id: &str) -> ValidationResult {
    let Some(model) = model_by_id(model_id) else {
        return ValidationResult {
            is_valid: false,
            errors: vec!["Invalid model selected".to_string()],
            warnings: Vec::new(),
            complexity: Complexity::Low,
            recommended_format: None,
        };
    };

    let mut errors = Vec::new();
    let mut warnings = Vec::new();

    if form.role.is_empty() {
        errors.push("Role is required".to_string());
    }
    if form.task.is_empty() {
        errors.push("Task description is required".to_string());
    }

    if let Some(max_tokens) = model.max_tokens
        && form.task.chars().count() > max_tokens * 3
    {
        warnings.push(format!(
            "Task description is very long for {} — consider trimming it",
            model.name
        ));
    }

    let complexity = assess_complexity(form);
    if complexity == Complexity::High
        && model.prompt_guidelines.max_complexity == Complexity::Medium
    {
        warnings.push(format!(
            "{} works best with medium-complexity prompts — consider splitting this one",
            model.name
        ));
    }

    ValidationResult {
        is_valid: errors.is_empty(),
        errors,
        warnings,
        complexity,
        recommended_format: Some(model.preferred_format),
    }
}

/// Score the input's complexity from field lengths and keywords.
///
/// Five predicates are counted; 3 or more → high, 1 or more → medium,
/// otherwise low. The thresholds are load-bearing for downstream warnings
/// and must not drift.
pub fn assess_complexity(form: &FormData) -> Complexity {
    let predicates = [
        form.requirements.chars().count() > 200,
        form.context.chars().count() > 300,
        form.style.chars().count() > 100,
        form.output.chars().count() > 100,
        form.requirements.contains("multiple") || form.requirements.contains("complex"),
    ];
    let score = predicates.iter().filter(|p| **p).count();

    if score >= 3 {
        Complexity::High
    } else if score >= 1 {
        Complexity::Medium
    } else {
        Complexity::Low
    }
}
