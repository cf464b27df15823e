//! LLM enrichment: the instruction-level table, the upstream client, and
//! the deterministic fallback.
//!
//! An enrichment level between 0 and 100 selects a natural-language
//! instruction controlling how much creative latitude the LLM takes with
//! the user's draft. The [`EnrichmentClient`] sends one chat-completion
//! request to an OpenAI-compatible endpoint and parses the reply by
//! splitting on an `IMPROVEMENTS:` marker. There is no retry, backoff, or
//! cancellation — a failed call is terminal and callers serve
//! [`fallback_enrichment`] instead.

use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::FormData;
use crate::render::SectionBuilder;

/// Chat-completions endpoint the client posts to.
pub const OPENAI_URL: &str = "https://api.openai.com/v1/chat/completions";

/// Model used when `OPENAI_MODEL` is not set.
pub const DEFAULT_ENRICHMENT_MODEL: &str = "gpt-4o-mini";

/// Level applied when the caller does not specify one.
pub const DEFAULT_ENRICHMENT_LEVEL: u8 = 50;

const ENRICHMENT_MAX_TOKENS: u32 = 2048;

// ── Instruction table ──────────────────────────────────────────────

/// Instructions keyed at every multiple of 5 from 0 to 100, in ascending
/// order of creative license.
const INSTRUCTIONS: &[(u8, &str)] = &[
    (0, "Preserve the prompt exactly as written. Correct spelling and grammar only; change nothing else."),
    (5, "Keep every sentence intact. Fix obvious typos and normalize punctuation."),
    (10, "Tighten the wording without changing meaning. Do not add or remove any requirement."),
    (15, "Clarify ambiguous phrasing while keeping the author's structure and intent."),
    (20, "Smooth the language and make instructions direct. Keep all original constraints."),
    (25, "Reorganize sentences for readability. Add nothing that was not already implied."),
    (30, "Restructure the prompt into clearer sections. Keep the scope exactly as given."),
    (35, "Sharpen the task definition and make implicit requirements explicit."),
    (40, "Fill small gaps a careful reader would notice, staying close to the original intent."),
    (45, "Add brief clarifying details where the prompt is underspecified."),
    (50, "Balance fidelity and improvement: strengthen structure, clarify intent, and add modest detail where it helps."),
    (55, "Expand thin sections with concrete details that serve the stated goal."),
    (60, "Enrich the prompt with helpful context and examples the author likely intended."),
    (65, "Broaden the requirements with sensible additions that improve the result."),
    (70, "Take moderate creative license: extend the task with valuable related considerations."),
    (75, "Reshape the prompt freely while honoring its core goal. Add substantial supporting detail."),
    (80, "Rework the prompt with significant creative input; introduce structure and ideas of your own."),
    (85, "Treat the prompt as a starting point. Substantially expand its ambition and depth."),
    (90, "Reinvent the prompt around the underlying goal, adding direction the author did not consider."),
    (95, "Use maximum creative latitude short of changing the subject. Rebuild the prompt from first principles."),
    (100, "Reimagine the prompt entirely. Only the underlying subject must survive; everything else is yours to redesign."),
];

/// Look up the instruction closest to `level`.
///
/// The scan is ascending and keeps the first-encountered minimum, so an
/// exact tie favors the lower key: 52 resolves to 50, 53 to 55.
pub fn enrichment_instruction(level: u8) -> &'static str {
    let mut best = INSTRUCTIONS[0];
    for &(key, text) in INSTRUCTIONS {
        if (i16::from(key) - i16::from(level)).abs() < (i16::from(best.0) - i16::from(level)).abs()
        {
            best = (key, text);
        }
    }
    best.1
}

/// Cap the requested level by user tier: the free tier tops out at the
/// default level, everything else at 100.
pub fn effective_level(level: u8, tier: &str) -> u8 {
    if tier == "free" {
        level.min(DEFAULT_ENRICHMENT_LEVEL)
    } else {
        level.min(100)
    }
}

// ── Quality heuristic ──────────────────────────────────────────────

/// Deterministic quality score for a draft: richer forms score higher.
pub fn quality_score(form: &FormData) -> u32 {
    let filled = form.populated_fields() as u32;
    (40 + filled * 9).min(94)
}

// ── Outcome types ──────────────────────────────────────────────────

/// Result of an enrichment pass — real or fallback.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Enrichment {
    /// The rewritten (or fallback-formatted) prompt.
    pub enriched_prompt: String,
    /// Human-readable list of changes the pass made.
    pub improvements: Vec<String>,
    /// Heuristic quality score, 0–100.
    pub quality_score: u32,
    /// False for the fallback path.
    pub is_enriched: bool,
    /// Upstream token usage, when the provider reported it.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tokens_used: Option<u32>,
}

/// Deterministic fallback when the upstream call fails: the draft wrapped
/// in a minimal XML skeleton, one inline tag per populated field.
pub fn fallback_enrichment(form: &FormData) -> Enrichment {
    let mut prompt = String::from("<prompt>\n");
    let fields = [
        ("role", &form.role),
        ("task", &form.task),
        ("context", &form.context),
        ("requirements", &form.requirements),
        ("style", &form.style),
        ("output", &form.output),
    ];
    for (tag, value) in fields {
        if !value.is_empty() {
            prompt.push_str(&format!("  <{tag}>{value}</{tag}>\n"));
        }
    }
    prompt.push_str("</prompt>");

    Enrichment {
        enriched_prompt: prompt,
        improvements: vec!["Wrapped the draft in a minimal XML structure".to_string()],
        quality_score: quality_score(form),
        is_enriched: false,
        tokens_used: None,
    }
}

// ── Wire types ─────────────────────────────────────────────────────

#[derive(Serialize, Debug)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
    max_tokens: u32,
    temperature: f32,
}

#[derive(Serialize, Debug)]
struct ChatMessage<'a> {
    role: &'a str,
    content: String,
}

#[derive(Deserialize, Debug)]
struct RawChatResponse {
    choices: Option<Vec<RawChoice>>,
    error: Option<ApiErrorResponse>,
    #[serde(default)]
    usage: Option<UsageInfo>,
}

#[derive(Deserialize, Debug)]
struct RawChoice {
    message: RawResponseMessage,
}

#[derive(Deserialize, Debug)]
struct RawResponseMessage {
    content: Option<String>,
}

#[derive(Deserialize, Debug)]
struct ApiErrorResponse {
    message: String,
}

#[derive(Deserialize, Debug)]
struct UsageInfo {
    total_tokens: Option<u32>,
}

// ── Client ─────────────────────────────────────────────────────────

/// Async HTTP client for the enrichment chat-completions call.
pub struct EnrichmentClient {
    client: reqwest::Client,
    api_key: String,
    model: String,
}

impl EnrichmentClient {
    /// Create a client with the given API key and the default model.
    pub fn new(api_key: impl Into<String>) -> Result<Self, String> {
        Self::with_model(api_key, DEFAULT_ENRICHMENT_MODEL)
    }

    /// Create a client with an explicit model id.
    pub fn with_model(
        api_key: impl Into<String>,
        model: impl Into<String>,
    ) -> Result<Self, String> {
        let client = reqwest::Client::builder()
            .user_agent("xmlprompter/0.4")
            .timeout(Duration::from_secs(120))
            .build()
            .map_err(|e| format!("failed to build HTTP client: {e}"))?;
        Ok(Self {
            client,
            api_key: api_key.into(),
            model: model.into(),
        })
    }

    /// Create a client from `OPENAI_API_KEY` and optional `OPENAI_MODEL`.
    pub fn from_env() -> Result<Self, String> {
        let api_key =
            std::env::var("OPENAI_API_KEY").map_err(|_| "OPENAI_API_KEY not set".to_string())?;
        let model = std::env::var("OPENAI_MODEL")
            .unwrap_or_else(|_| DEFAULT_ENRICHMENT_MODEL.to_string());
        Self::with_model(api_key, model)
    }

    /// The model this client sends requests to.
    pub fn model(&self) -> &str {
        &self.model
    }

    /// Run one enrichment pass over the draft.
    ///
    /// Single attempt — any upstream failure is returned as `Err` and the
    /// caller decides whether to serve [`fallback_enrichment`].
    pub async fn enrich(
        &self,
        form: &FormData,
        level: u8,
        tier: &str,
    ) -> Result<Enrichment, String> {
        let level = effective_level(level, tier);
        let body = ChatRequest {
            model: &self.model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system_prompt(level),
                },
                ChatMessage {
                    role: "user",
                    content: draft_for(form),
                },
            ],
            max_tokens: ENRICHMENT_MAX_TOKENS,
            temperature: 0.7,
        };

        debug!(
            "enrichment request: model={}, level={}, tier={}, fields={}",
            self.model,
            level,
            tier,
            form.populated_fields()
        );

        let resp = self
            .client
            .post(OPENAI_URL)
            .header("Authorization", format!("Bearer {}", self.api_key))
            .json(&body)
            .send()
            .await
            .map_err(|e| format!("request failed: {e}"))?;

        let status = resp.status();
        let text = resp
            .text()
            .await
            .map_err(|e| format!("failed to read response: {e}"))?;

        debug!("enrichment response: HTTP {} ({} bytes)", status, text.len());

        if !status.is_success() {
            return Err(format!("enrichment API HTTP {status}: {text}"));
        }

        let parsed: RawChatResponse =
            serde_json::from_str(&text).map_err(|e| format!("failed to parse response: {e}"))?;

        if let Some(err) = parsed.error {
            return Err(format!("enrichment API error: {}", err.message));
        }

        let content = parsed
            .choices
            .and_then(|c| c.into_iter().next())
            .and_then(|c| c.message.content)
            .ok_or_else(|| "empty enrichment response".to_string())?;

        let (enriched_prompt, improvements) = parse_enrichment(&content);
        if enriched_prompt.is_empty() {
            return Err("enrichment response had no prompt body".to_string());
        }

        Ok(Enrichment {
            enriched_prompt,
            improvements,
            quality_score: (quality_score(form) + u32::from(level) / 10).min(98),
            is_enriched: true,
            tokens_used: parsed.usage.and_then(|u| u.total_tokens),
        })
    }
}

/// System prompt for the enrichment call, built around the level's
/// instruction.
fn system_prompt(level: u8) -> String {
    format!(
        "You are a prompt engineer improving a draft prompt.\n\n{}\n\n\
         Return the rewritten prompt first. Then, on its own line, write \
         \"IMPROVEMENTS:\" followed by one dash-prefixed line per change you made.",
        enrichment_instruction(level)
    )
}

/// The user-visible draft sent upstream: one labeled section per
/// populated field.
fn draft_for(form: &FormData) -> String {
    SectionBuilder::new()
        .labeled("Role", &form.role)
        .block("Task", &form.task)
        .block("Context", &form.context)
        .block("Requirements", &form.requirements)
        .labeled("Style", &form.style)
        .labeled("Output", &form.output)
        .build()
}

/// Split the model's reply into the rewritten prompt and the improvement
/// list. A missing marker means the whole reply is the prompt.
fn parse_enrichment(content: &str) -> (String, Vec<String>) {
    match content.split_once("IMPROVEMENTS:") {
        Some((prompt, rest)) => {
            let improvements = rest
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(|line| {
                    line.trim_start_matches(['-', '•', '*'])
                        .trim_start()
                        .to_string()
                })
                .filter(|line| !line.is_empty())
                .collect();
            (prompt.trim().to_string(), improvements)
        }
        None => (content.trim().to_string(), Vec::new()),
    }
}
