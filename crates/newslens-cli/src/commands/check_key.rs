//! Credential validation command.

use crate::commands::provider_for;
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::Formatter;
use newslens_domain::{ApiKey, CompletionProvider};
use tracing::info;

/// Probe the completion service with the supplied key and report whether
/// it was accepted.
pub async fn execute_check_key(
    config: &Config,
    api_key: ApiKey,
    formatter: &Formatter,
) -> Result<()> {
    if !api_key.is_plausible() {
        return Err(CliError::InvalidInput(
            "API key looks malformed (too short or blank)".to_string(),
        ));
    }

    let provider = provider_for(config, api_key);
    info!("probing completion service with candidate key");
    if provider.validate().await {
        println!("{}", formatter.success("API key accepted"));
        Ok(())
    } else {
        Err(CliError::InvalidApiKey)
    }
}
