//! Render, validate, or enrich a structured prompt from the command line.
//!
//! # Examples
//!
//! ```sh
//! # Render with the model's preferred format
//! xmlprompter --role "Engineer" --task "Write a function"
//!
//! # Pick a model and override its format
//! xmlprompter --role "Engineer" --task "Write a function" \
//!   --model gpt-4o --format markdown
//!
//! # Pipe the task from stdin
//! cat task.md | xmlprompter --role "Engineer" --stdin
//!
//! # Validate instead of rendering
//! xmlprompter --role "Engineer" --task "Write a function" --validate
//!
//! # Enrich via the LLM (needs OPENAI_API_KEY)
//! xmlprompter --role "Engineer" --task "Write a function" \
//!   --enrich --level 70 --tier pro
//!
//! # List the model registry
//! xmlprompter --list-models
//! ```

use clap::Parser;
use std::io::{self, Read};
use std::process;
use tracing_subscriber::EnvFilter;
use xmlprompter_rs::prelude::*;

/// Render, validate, or enrich a structured prompt for an AI model.
#[derive(Parser)]
#[command(name = "xmlprompter")]
struct Cli {
    // ── Prompt fields ──────────────────────────────────────────
    /// Who the model should act as
    #[arg(long)]
    role: Option<String>,

    /// What the model should do
    #[arg(long)]
    task: Option<String>,

    /// Background information
    #[arg(long)]
    context: Option<String>,

    /// Constraints, one per line
    #[arg(long)]
    requirements: Option<String>,

    /// Tone and style guidance
    #[arg(long)]
    style: Option<String>,

    /// Desired output shape
    #[arg(long)]
    output: Option<String>,

    /// Read the task description from stdin
    #[arg(long)]
    stdin: bool,

    // ── Model and format ───────────────────────────────────────
    /// Target model id (see --list-models)
    #[arg(long, default_value = "claude-sonnet-4")]
    model: String,

    /// Override the model's preferred format
    /// (xml, json, markdown, structured, yaml, plain)
    #[arg(long)]
    format: Option<String>,

    // ── Actions ────────────────────────────────────────────────
    /// Validate the form and print the report instead of rendering
    #[arg(long)]
    validate: bool,

    /// List available models and exit
    #[arg(long)]
    list_models: bool,

    /// Enrich the prompt through the LLM (reads OPENAI_API_KEY)
    #[arg(long)]
    enrich: bool,

    /// Enrichment level, 0-100
    #[arg(long, default_value_t = DEFAULT_ENRICHMENT_LEVEL)]
    level: u8,

    /// User tier for enrichment level caps
    #[arg(long, default_value = "free")]
    tier: String,

    // ── Output control ─────────────────────────────────────────
    /// Print the full render result as JSON (prompt + metadata)
    #[arg(long)]
    json: bool,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    if cli.list_models {
        for model in all_models() {
            println!(
                "{:<18} {:<10} prefers {:<11} max complexity: {}",
                model.id,
                model.provider,
                model.preferred_format.to_string(),
                model.prompt_guidelines.max_complexity
            );
        }
        return;
    }

    let mut form = FormData {
        role: cli.role.unwrap_or_default(),
        task: cli.task.unwrap_or_default(),
        context: cli.context.unwrap_or_default(),
        requirements: cli.requirements.unwrap_or_default(),
        style: cli.style.unwrap_or_default(),
        output: cli.output.unwrap_or_default(),
    };

    if cli.stdin {
        let mut buf = String::new();
        if let Err(e) = io::stdin().read_to_string(&mut buf) {
            eprintln!("Error: failed to read stdin: {e}");
            process::exit(1);
        }
        form.task = buf.trim().to_string();
    }

    if cli.validate {
        let report = validate_prompt(&form, &cli.model);
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                eprintln!("Error: failed to serialize report: {e}");
                process::exit(1);
            }
        }
        if !report.is_valid {
            process::exit(1);
        }
        return;
    }

    if cli.enrich {
        let client = match EnrichmentClient::from_env() {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error: {e}");
                process::exit(1);
            }
        };
        match client.enrich(&form, cli.level, &cli.tier).await {
            Ok(enrichment) => {
                println!("{}", enrichment.enriched_prompt);
                if !enrichment.improvements.is_empty() {
                    eprintln!("\nImprovements:");
                    for improvement in &enrichment.improvements {
                        eprintln!("- {improvement}");
                    }
                }
            }
            Err(e) => {
                eprintln!("Error: enrichment failed: {e}");
                process::exit(1);
            }
        }
        return;
    }

    let format = match cli.format.as_deref().map(str::parse::<PromptFormat>) {
        Some(Ok(format)) => Some(format),
        Some(Err(e)) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
        None => None,
    };

    match generate_prompt(&form, &cli.model, format) {
        Ok(result) => {
            if cli.json {
                match serde_json::to_string_pretty(&result) {
                    Ok(json) => println!("{json}"),
                    Err(e) => {
                        eprintln!("Error: failed to serialize result: {e}");
                        process::exit(1);
                    }
                }
            } else {
                println!("{}", result.prompt);
            }
        }
        Err(e) => {
            eprintln!("Error: {e}");
            process::exit(1);
        }
    }
}
