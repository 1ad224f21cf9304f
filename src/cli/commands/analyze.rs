//! Implementation of the `sentinel analyze` command.

use anyhow::{bail, Context, Result};
use chrono::{DateTime, Utc};
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;
use tokio::io::AsyncReadExt;

use crate::cli::output::render::render_response;
use crate::cli::output::{create_spinner_with_message, output, CommandOutput};
use crate::domain::models::{AnalysisRequest, AnalysisResponse, Config, Language, Module};
use crate::services::AnalysisService;

/// Arguments for `sentinel analyze`
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Code, question or scenario to analyze; `-` reads standard input
    #[arg(required_unless_present = "file", conflicts_with = "file")]
    pub input: Option<String>,

    /// Read the input from a file
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Module to run (see `sentinel modules`)
    #[arg(short, long)]
    pub module: Module,

    /// Response language: es or en (defaults to the configured language)
    #[arg(short, long)]
    pub lang: Option<Language>,

    /// Credential for this call only; overrides the configured key
    #[arg(long)]
    pub api_key: Option<String>,
}

/// Rendered analysis plus the context it was produced in
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyzeOutput {
    /// Module that produced the report
    pub module: Module,
    /// Language the model was asked to answer in
    pub language: Language,
    /// When the response was received
    pub generated_at: DateTime<Utc>,
    /// Normalized model response
    #[serde(flatten)]
    pub response: AnalysisResponse,
}

impl CommandOutput for AnalyzeOutput {
    fn to_human(&self) -> String {
        render_response(self.module, &self.response, self.generated_at)
    }
}

/// Run one analysis and print the report.
pub async fn execute(args: AnalyzeArgs, config: &Config, json_mode: bool) -> Result<()> {
    let input = read_input(&args).await?;
    if input.trim().is_empty() {
        bail!("Input is empty; nothing to analyze");
    }

    let service = AnalysisService::from_config(config)?;
    let language = args.lang.unwrap_or(config.language);

    let mut request = AnalysisRequest::new(input, args.module, language);
    if let Some(key) = args.api_key {
        request = request.with_credential(key);
    }

    let spinner = (!json_mode)
        .then(|| create_spinner_with_message(format!("{} // analyzing...", args.module.title())));

    let outcome = service.analyze(request).await;

    if let Some(spinner) = spinner {
        spinner.finish_and_clear();
    }

    let report = AnalyzeOutput {
        module: args.module,
        language,
        generated_at: Utc::now(),
        response: outcome?,
    };
    output(&report, json_mode);
    Ok(())
}

async fn read_input(args: &AnalyzeArgs) -> Result<String> {
    if let Some(path) = &args.file {
        return tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read input file {}", path.display()));
    }

    match args.input.as_deref() {
        Some("-") => {
            let mut buffer = String::new();
            tokio::io::stdin()
                .read_to_string(&mut buffer)
                .await
                .context("Failed to read input from stdin")?;
            Ok(buffer)
        }
        Some(text) => Ok(text.to_string()),
        None => bail!("No input given; pass text, `-` for stdin, or --file"),
    }
}
