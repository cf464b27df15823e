//! Static model registry: descriptors, formats, and capability metadata.
//!
//! Every supported model is described by a [`ModelDescriptor`] in the
//! process-wide [`MODELS`] table — id, provider, preferred output format,
//! prompt guidance, feature flags, and capability ratings. The table is
//! `const`, immutable, and looked up by id with [`model_by_id`]. The
//! entries are curated guidance, not provider ground truth — close enough
//! to pick a format and warn about oversized prompts.

use serde::{Deserialize, Serialize};

// ── Enums ──────────────────────────────────────────────────────────

/// Output encoding a prompt can be rendered to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PromptFormat {
    Xml,
    Json,
    Markdown,
    Structured,
    Yaml,
    Plain,
}

impl PromptFormat {
    /// All formats, in dispatch order.
    pub const ALL: [PromptFormat; 6] = [
        PromptFormat::Xml,
        PromptFormat::Json,
        PromptFormat::Markdown,
        PromptFormat::Structured,
        PromptFormat::Yaml,
        PromptFormat::Plain,
    ];
}

impl std::fmt::Display for PromptFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            PromptFormat::Xml => "xml",
            PromptFormat::Json => "json",
            PromptFormat::Markdown => "markdown",
            PromptFormat::Structured => "structured",
            PromptFormat::Yaml => "yaml",
            PromptFormat::Plain => "plain",
        };
        write!(f, "{name}")
    }
}

impl std::str::FromStr for PromptFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "xml" => Ok(PromptFormat::Xml),
            "json" => Ok(PromptFormat::Json),
            "markdown" | "md" => Ok(PromptFormat::Markdown),
            "structured" => Ok(PromptFormat::Structured),
            "yaml" | "yml" => Ok(PromptFormat::Yaml),
            "plain" => Ok(PromptFormat::Plain),
            other => Err(format!("unknown format: {other}")),
        }
    }
}

/// Heuristic complexity classification of a prompt's input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Complexity {
    Low,
    Medium,
    High,
}

impl std::fmt::Display for Complexity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Complexity::Low => "low",
            Complexity::Medium => "medium",
            Complexity::High => "high",
        };
        write!(f, "{name}")
    }
}

/// How well a model handles a capability area.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CapabilityRating {
    Excellent,
    Good,
    Fair,
}

// ── Descriptors ────────────────────────────────────────────────────

/// Prompt-engineering guidance for a model.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptGuidelines {
    /// Whether the model benefits from an explicit thinking block.
    pub supports_thinking: bool,
    /// Best-practice strings surfaced in every rendered prompt.
    pub best_practices: &'static [&'static str],
    /// Most complex prompt the model handles well.
    pub max_complexity: Complexity,
}

/// Static description of one supported model.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelDescriptor {
    /// Stable identifier used in API requests and the CLI.
    pub id: &'static str,
    /// Human-readable display name.
    pub name: &'static str,
    /// Provider display name.
    pub provider: &'static str,
    /// The output encoding this model parses best.
    pub preferred_format: PromptFormat,
    /// Prompt-engineering guidance.
    pub prompt_guidelines: PromptGuidelines,
    /// Feature flags consulted by renderers (e.g. `xml_tags`,
    /// `thinking_tags`).
    pub features: &'static [&'static str],
    /// Capability areas with a quality rating each.
    pub capabilities: &'static [(&'static str, CapabilityRating)],
    /// Approximate maximum output tokens, when known.
    pub max_tokens: Option<usize>,
}

impl ModelDescriptor {
    /// Whether the model declares a feature flag.
    pub fn has_feature(&self, feature: &str) -> bool {
        self.features.contains(&feature)
    }

    /// Capability names rated [`CapabilityRating::Excellent`].
    pub fn excellent_capabilities(&self) -> Vec<&'static str> {
        self.capabilities
            .iter()
            .filter(|(_, rating)| *rating == CapabilityRating::Excellent)
            .map(|(name, _)| *name)
            .collect()
    }
}

// ── Registry ───────────────────────────────────────────────────────

/// The full model table. Immutable for the process lifetime.
pub const MODELS: &[ModelDescriptor] = &[
    ModelDescriptor {
        id: "claude-sonnet-4",
        name: "Claude Sonnet 4",
        provider: "Anthropic",
        preferred_format: PromptFormat::Xml,
        prompt_guidelines: PromptGuidelines {
            supports_thinking: true,
            best_practices: &[
                "Use XML tags to separate prompt sections",
                "Put long reference material before the task instructions",
                "Ask for step-by-step reasoning on multi-part problems",
            ],
            max_complexity: Complexity::High,
        },
        features: &["xml_tags", "thinking_tags", "long_context"],
        capabilities: &[
            ("reasoning", CapabilityRating::Excellent),
            ("coding", CapabilityRating::Excellent),
            ("writing", CapabilityRating::Good),
        ],
        max_tokens: Some(8192),
    },
    ModelDescriptor {
        id: "claude-haiku-3-5",
        name: "Claude Haiku 3.5",
        provider: "Anthropic",
        preferred_format: PromptFormat::Xml,
        prompt_guidelines: PromptGuidelines {
            supports_thinking: false,
            best_practices: &[
                "Keep instructions short and concrete",
                "Use XML tags for any multi-part input",
                "Prefer a single clear task per prompt",
            ],
            max_complexity: Complexity::Medium,
        },
        features: &["xml_tags"],
        capabilities: &[
            ("speed", CapabilityRating::Excellent),
            ("summarization", CapabilityRating::Good),
        ],
        max_tokens: Some(4096),
    },
    ModelDescriptor {
        id: "gpt-4o",
        name: "GPT-4o",
        provider: "OpenAI",
        preferred_format: PromptFormat::Json,
        prompt_guidelines: PromptGuidelines {
            supports_thinking: false,
            best_practices: &[
                "State the desired output format explicitly",
                "Lead with the instruction, then supporting data",
                "Use the system role for persistent behavior",
            ],
            max_complexity: Complexity::High,
        },
        features: &["json_mode", "function_calling", "vision"],
        capabilities: &[
            ("coding", CapabilityRating::Excellent),
            ("vision", CapabilityRating::Excellent),
            ("reasoning", CapabilityRating::Good),
        ],
        max_tokens: Some(16384),
    },
    ModelDescriptor {
        id: "gpt-4o-mini",
        name: "GPT-4o mini",
        provider: "OpenAI",
        preferred_format: PromptFormat::Structured,
        prompt_guidelines: PromptGuidelines {
            supports_thinking: false,
            best_practices: &[
                "Break the task into short numbered steps",
                "Avoid long free-form context blocks",
                "Repeat the output constraint at the end",
            ],
            max_complexity: Complexity::Medium,
        },
        features: &["json_mode", "function_calling"],
        capabilities: &[
            ("speed", CapabilityRating::Excellent),
            ("cost", CapabilityRating::Excellent),
            ("reasoning", CapabilityRating::Fair),
        ],
        max_tokens: Some(4096),
    },
    ModelDescriptor {
        id: "o1",
        name: "o1",
        provider: "OpenAI",
        preferred_format: PromptFormat::Markdown,
        prompt_guidelines: PromptGuidelines {
            supports_thinking: true,
            best_practices: &[
                "Describe the goal, not the reasoning steps",
                "Avoid few-shot examples, which constrain the search",
                "Keep the prompt free of chain-of-thought instructions",
            ],
            max_complexity: Complexity::High,
        },
        features: &["reasoning"],
        capabilities: &[
            ("reasoning", CapabilityRating::Excellent),
            ("math", CapabilityRating::Excellent),
            ("speed", CapabilityRating::Fair),
        ],
        max_tokens: Some(32768),
    },
    ModelDescriptor {
        id: "gemini-2.5-pro",
        name: "Gemini 2.5 Pro",
        provider: "Google",
        preferred_format: PromptFormat::Markdown,
        prompt_guidelines: PromptGuidelines {
            supports_thinking: false,
            best_practices: &[
                "Use markdown headings to structure long prompts",
                "Put instructions before examples",
                "Anchor references to earlier sections by heading name",
            ],
            max_complexity: Complexity::High,
        },
        features: &["long_context", "multimodal"],
        capabilities: &[
            ("long_context", CapabilityRating::Excellent),
            ("multimodal", CapabilityRating::Excellent),
            ("coding", CapabilityRating::Good),
        ],
        max_tokens: Some(8192),
    },
    ModelDescriptor {
        id: "gemini-2.0-flash",
        name: "Gemini 2.0 Flash",
        provider: "Google",
        preferred_format: PromptFormat::Plain,
        prompt_guidelines: PromptGuidelines {
            supports_thinking: false,
            best_practices: &[
                "Prefer short conversational instructions",
                "One task per request",
                "Spell out the output length you want",
            ],
            max_complexity: Complexity::Medium,
        },
        features: &["multimodal"],
        capabilities: &[
            ("speed", CapabilityRating::Excellent),
            ("multimodal", CapabilityRating::Good),
        ],
        max_tokens: Some(8192),
    },
    ModelDescriptor {
        id: "mistral-large",
        name: "Mistral Large",
        provider: "Mistral",
        preferred_format: PromptFormat::Yaml,
        prompt_guidelines: PromptGuidelines {
            supports_thinking: false,
            best_practices: &[
                "Keep key-value structure for configuration-like input",
                "State constraints as a list",
                "Close with the expected output format",
            ],
            max_complexity: Complexity::Medium,
        },
        features: &["function_calling"],
        capabilities: &[
            ("multilingual", CapabilityRating::Excellent),
            ("coding", CapabilityRating::Good),
        ],
        max_tokens: Some(4096),
    },
];

/// Look up a model descriptor by id. No side effects; `None` for an
/// unrecognized id — callers decide whether that is an error.
pub fn model_by_id(id: &str) -> Option<&'static ModelDescriptor> {
    MODELS.iter().find(|m| m.id == id)
}

/// The full registry, for listings and selectors.
pub fn all_models() -> &'static [ModelDescriptor] {
    MODELS
}
