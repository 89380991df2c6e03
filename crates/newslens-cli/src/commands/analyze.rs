//! The one-shot analyze command.

use crate::cli::AnalyzeArgs;
use crate::commands::{build_analyzer, provider_for};
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::{records_json, Formatter};
use newslens_domain::ApiKey;
use newslens_pipeline::AnalysisError;
use std::fs;
use tracing::info;

/// Analyze one URL: authenticate, run the pipeline, print the records,
/// and optionally export them as JSON.
pub async fn execute_analyze(
    args: AnalyzeArgs,
    config: &Config,
    api_key: ApiKey,
    formatter: &Formatter,
) -> Result<()> {
    if !api_key.is_plausible() {
        return Err(CliError::InvalidInput(
            "API key looks malformed (too short or blank)".to_string(),
        ));
    }
    if args.url.trim().is_empty() {
        return Err(CliError::InvalidInput("URL must not be empty".to_string()));
    }

    info!("analysis requested for {}", args.url);

    let mut analyzer = build_analyzer(config);

    match analyzer.authenticate(provider_for(config, api_key)).await {
        Ok(()) => {}
        Err(AnalysisError::InvalidCredential) => return Err(CliError::InvalidApiKey),
        Err(e) => return Err(e.into()),
    }

    let analysis = analyzer.analyze(&args.url).await.map_err(|e| {
        eprintln!(
            "{}",
            formatter.error(&format!("{} stage failed: {}", e.stage().name(), e))
        );
        CliError::from(e)
    })?;

    if analysis.metadata.content_truncated {
        eprintln!(
            "{}",
            formatter.warning(&format!(
                "Page text was truncated to {} characters before analysis",
                analysis.metadata.content_chars
            ))
        );
    }

    if analysis.records.is_empty() {
        println!("{}", formatter.info("No relevant Indian companies found."));
    } else {
        println!(
            "{}",
            formatter.success(&format!(
                "{} impacted company(ies) found at {}",
                analysis.records.len(),
                analysis.url
            ))
        );
        println!("{}", formatter.format_records(&analysis.records)?);
    }

    if let Some(path) = args.output {
        fs::write(&path, records_json(&analysis.records)?)?;
        println!(
            "{}",
            formatter.success(&format!("Exported records to {}", path.display()))
        );
    }

    Ok(())
}
