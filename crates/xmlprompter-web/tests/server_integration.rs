//! Integration tests for the xmlprompter-web server.
//!
//! These tests start a real axum server on a random port and exercise the
//! JSON API with reqwest. No upstream API key is configured, so the
//! enrichment endpoint exercises the fallback path.

use xmlprompter_web::{WebConfig, spawn_web};

/// Helper: spawn a test server on port 0 (random available port).
async fn spawn_test_server() -> String {
    let config = WebConfig {
        bind_addr: ([127, 0, 0, 1], 0).into(),
        enrichment: None,
    };
    let addr = spawn_web(config).await.unwrap();
    format!("http://{addr}")
}

// ── Health and metadata ──────────────────────────────────────────────

#[tokio::test]
async fn health_reports_ok_with_timestamp() {
    let base = spawn_test_server().await;

    let resp = reqwest::get(format!("{base}/api/health")).await.unwrap();
    assert_eq!(resp.status(), 200);

    let json: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(json["status"], "ok");
    assert!(json["timestamp"].as_str().unwrap().contains('T'));
}

#[tokio::test]
async fn models_listing_includes_registry_entries() {
    let base = spawn_test_server().await;

    let resp = reqwest::get(format!("{base}/api/models")).await.unwrap();
    assert_eq!(resp.status(), 200);

    let json: serde_json::Value = resp.json().await.unwrap();
    let models = json.as_array().unwrap();
    assert!(!models.is_empty());
    let sonnet = models
        .iter()
        .find(|m| m["id"] == "claude-sonnet-4")
        .unwrap();
    assert_eq!(sonnet["preferredFormat"], "xml");
    assert_eq!(sonnet["promptGuidelines"]["supportsThinking"], true);
}

#[tokio::test]
async fn schema_describes_the_form() {
    let base = spawn_test_server().await;

    let resp = reqwest::get(format!("{base}/api/schema")).await.unwrap();
    assert_eq!(resp.status(), 200);

    let json: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(json["type"], "object");
    assert!(json["properties"].get("role").is_some());
    assert!(json["properties"].get("task").is_some());
}

// ── Generate ─────────────────────────────────────────────────────────

#[tokio::test]
async fn generate_renders_the_reference_xml() {
    let base = spawn_test_server().await;

    let client = reqwest::Client::new();
    let resp = client
        .post(format!("{base}/api/prompts/generate"))
        .json(&serde_json::json!({
            "formData": {"role": "Engineer", "task": "Write a function"},
            "modelId": "claude-haiku-3-5",
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let json: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(json["format"], "xml");
    assert_eq!(
        json["prompt"],
        "<prompt>\n  <role>Engineer</role>\n  <task>\n    Write a function\n  </task>\n</prompt>"
    );
    assert_eq!(json["metadata"]["modelOptimized"], true);
    assert!(json["metadata"]["estimatedTokens"].as_u64().unwrap() > 0);
}

#[tokio::test]
async fn generate_honors_format_override() {
    let base = spawn_test_server().await;

    let client = reqwest::Client::new();
    let resp = client
        .post(format!("{base}/api/prompts/generate"))
        .json(&serde_json::json!({
            "formData": {"role": "Engineer", "task": "Write a function"},
            "modelId": "claude-sonnet-4",
            "format": "markdown",
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let json: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(json["format"], "markdown");
    assert!(json["prompt"].as_str().unwrap().contains("## Role"));
}

#[tokio::test]
async fn generate_returns_404_for_unknown_model() {
    let base = spawn_test_server().await;

    let client = reqwest::Client::new();
    let resp = client
        .post(format!("{base}/api/prompts/generate"))
        .json(&serde_json::json!({
            "formData": {"role": "Engineer", "task": "Write a function"},
            "modelId": "nonexistent-model",
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);

    let json: serde_json::Value = resp.json().await.unwrap();
    assert!(
        json["error"]
            .as_str()
            .unwrap()
            .contains("unknown model")
    );
}

// ── Validate ─────────────────────────────────────────────────────────

#[tokio::test]
async fn validate_reports_missing_required_fields() {
    let base = spawn_test_server().await;

    let client = reqwest::Client::new();
    let resp = client
        .post(format!("{base}/api/prompts/validate"))
        .json(&serde_json::json!({
            "formData": {},
            "modelId": "claude-sonnet-4",
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let json: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(json["isValid"], false);
    let errors = json["errors"].as_array().unwrap();
    assert!(errors.contains(&"Role is required".into()));
    assert!(errors.contains(&"Task description is required".into()));
}

#[tokio::test]
async fn validate_unknown_model_short_circuits() {
    let base = spawn_test_server().await;

    let client = reqwest::Client::new();
    let resp = client
        .post(format!("{base}/api/prompts/validate"))
        .json(&serde_json::json!({
            "formData": {"role": "x"},
            "modelId": "nonexistent-model",
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 200);

    let json: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(json["isValid"], false);
    assert_eq!(json["errors"], serde_json::json!(["Invalid model selected"]));
    assert!(json.get("recommendedFormat").is_none());
}

// ── Enrich ───────────────────────────────────────────────────────────

#[tokio::test]
async fn enrich_requires_role_and_task() {
    let base = spawn_test_server().await;

    let client = reqwest::Client::new();
    let resp = client
        .post(format!("{base}/api/prompts/enrich"))
        .json(&serde_json::json!({"role": "Engineer"}))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 400);

    let json: serde_json::Value = resp.json().await.unwrap();
    assert!(json["error"].as_str().unwrap().contains("required"));
}

#[tokio::test]
async fn enrich_without_upstream_serves_fallback() {
    let base = spawn_test_server().await;

    let client = reqwest::Client::new();
    let resp = client
        .post(format!("{base}/api/prompts/enrich"))
        .json(&serde_json::json!({
            "role": "Engineer",
            "task": "Write a function",
            "userTier": "pro",
            "enrichmentLevel": 70,
        }))
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), 500);

    let json: serde_json::Value = resp.json().await.unwrap();
    assert!(json["error"].as_str().unwrap().contains("OPENAI_API_KEY"));
    assert_eq!(json["fallback"]["isEnriched"], false);
    let fallback_prompt = json["fallback"]["enrichedPrompt"].as_str().unwrap();
    assert!(fallback_prompt.starts_with("<prompt>"));
    assert!(fallback_prompt.contains("<role>Engineer</role>"));
}
