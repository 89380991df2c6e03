//! Newslens CLI - presentation layer for the news impact pipeline.
//!
//! Everything here is UI plumbing around `newslens-pipeline`: argument
//! parsing, configuration, output formatting, and the interactive REPL
//! session. The pipeline is called with a URL and a credential and hands
//! back either records or a stage-tagged error to display.

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;
pub mod repl;

pub use cli::{AnalyzeArgs, Cli, CliFormat, Command};
pub use config::{Config, OutputFormat};
pub use error::{CliError, Result};
pub use output::Formatter;
