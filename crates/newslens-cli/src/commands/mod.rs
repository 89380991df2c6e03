//! Command implementations.

mod analyze;
mod check_key;

pub use analyze::execute_analyze;
pub use check_key::execute_check_key;

use crate::config::Config;
use newslens_domain::ApiKey;
use newslens_fetch::Fetcher;
use newslens_llm::OpenAiProvider;
use newslens_pipeline::Analyzer;

/// Build an analyzer from the loaded configuration. Starts in the
/// awaiting-credential state.
pub fn build_analyzer(config: &Config) -> Analyzer<OpenAiProvider> {
    let fetcher = Fetcher::new(config.fetch_config());
    Analyzer::new(fetcher, config.extractor_config())
}

/// Build a completion provider for a candidate credential.
pub fn provider_for(config: &Config, api_key: ApiKey) -> OpenAiProvider {
    OpenAiProvider::new(api_key, &config.model)
}
