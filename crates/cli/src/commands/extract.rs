//! `soapbox extract` — run the claim extraction pipeline over an input file.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use clap::Args;
use tracing::{error, info};

use soapbox_core::gateway::GenerationOptions;
use soapbox_core::ExtractionRecord;
use soapbox_extractor::ClaimExtractor;
use soapbox_gateway::OllamaGateway;

use super::CommandError;

#[derive(Debug, Args)]
pub struct ExtractArgs {
    /// Path to statements (CSV/TSV, ID-delimited blocks, or plain text)
    #[arg(short, long)]
    pub input: PathBuf,

    /// Output JSONL path
    #[arg(short, long, default_value = "extracted_claims.jsonl")]
    pub output: PathBuf,

    /// Model name (default from config)
    #[arg(long)]
    pub model: Option<String>,

    /// Gateway base URL (default from config)
    #[arg(long)]
    pub base_url: Option<String>,

    /// Max words per claim (default from config, 25)
    #[arg(long)]
    pub max_words: Option<usize>,

    /// Additional attempts after the first (default from config, 2)
    #[arg(long)]
    pub retries: Option<u32>,

    /// Sleep seconds between statements (rate limiting)
    #[arg(long)]
    pub sleep: Option<f64>,
}

pub async fn run(args: ExtractArgs, config_path: Option<&Path>) -> Result<(), CommandError> {
    let config = super::load_config(config_path)?;

    // Explicit flags win over config values
    let model = args.model.unwrap_or_else(|| config.model.clone());
    let base_url = args.base_url.unwrap_or_else(|| config.base_url.clone());
    let max_words = args.max_words.unwrap_or(config.max_words);
    let retries = args.retries.unwrap_or(config.retries);
    let sleep_secs = args.sleep.unwrap_or(config.sleep_secs);

    if !args.input.exists() {
        return Err(CommandError::InputNotFound(args.input));
    }

    let statements =
        soapbox_loader::load(&args.input).map_err(|e| CommandError::InputUnreadable(e.to_string()))?;
    if statements.is_empty() {
        return Err(CommandError::NoStatements);
    }
    info!(count = statements.len(), "Loaded statements");

    let gateway = OllamaGateway::with_timeout(&base_url, config.gateway_timeout_secs)
        .map_err(|e| CommandError::other(format!("failed to build gateway client: {e}")))?;

    let extractor = ClaimExtractor::new(Arc::new(gateway), &model)
        .with_max_words(max_words)
        .with_retries(retries)
        .with_max_input_chars(config.max_input_chars)
        .with_options(GenerationOptions {
            temperature: config.temperature,
            num_predict: config.num_predict,
        });

    let file = File::create(&args.output)
        .map_err(|e| CommandError::other(format!("cannot write {}: {e}", args.output.display())))?;
    let mut out = BufWriter::new(file);

    let total = statements.len();
    for (idx, statement) in statements.iter().enumerate() {
        // A transport failure aborts the run; records written so far
        // remain a valid JSONL prefix.
        let outcome = extractor.extract(statement).await.map_err(|e| {
            error!(statement_id = %statement.id, "Gateway transport failure: {e}");
            CommandError::other(format!("gateway failure on {}: {e}", statement.id))
        })?;

        let status = if outcome.converged { "converged" } else { "padded" };
        println!(
            "[{}/{}] {} — {} ({} attempts)",
            idx + 1,
            total,
            statement.id,
            status,
            outcome.attempts.len()
        );

        let record = ExtractionRecord::new(statement, outcome.claims, &model, outcome.attempts);
        let line = serde_json::to_string(&record)
            .map_err(|e| CommandError::other(format!("failed to serialize record: {e}")))?;
        writeln!(out, "{line}")
            .and_then(|_| out.flush())
            .map_err(|e| CommandError::other(format!("failed to write output: {e}")))?;

        if sleep_secs > 0.0 && idx + 1 < total {
            tokio::time::sleep(Duration::from_secs_f64(sleep_secs)).await;
        }
    }

    println!("Done. Wrote {} rows to: {}", total, args.output.display());
    Ok(())
}
