//! Interactive REPL (Read-Eval-Print Loop) mode.

use crate::commands::{build_analyzer, provider_for};
use crate::config::Config;
use crate::error::{CliError, Result};
use crate::output::{records_json, Formatter};
use newslens_domain::{ApiKey, ImpactRecord};
use newslens_pipeline::{AnalysisError, SessionState};
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use std::path::PathBuf;

/// Run the interactive REPL.
///
/// The session holds one analyzer; `key` swaps its credential, `analyze`
/// runs the pipeline, and `export` writes the most recent run's records.
pub async fn run_repl(
    config: &Config,
    initial_key: Option<ApiKey>,
    formatter: &Formatter,
) -> Result<()> {
    println!(
        "{}",
        formatter.info(&format!(
            "{} - Type 'help' for commands, 'exit' to quit",
            config.app_name
        ))
    );
    println!();

    let mut editor = DefaultEditor::new().map_err(|e| {
        CliError::Io(std::io::Error::new(
            std::io::ErrorKind::Other,
            format!("Failed to initialize editor: {}", e),
        ))
    })?;

    let history_path = get_history_path()?;
    let _ = editor.load_history(&history_path);

    let mut analyzer = build_analyzer(config);
    let mut last_records: Option<Vec<ImpactRecord>> = None;

    if let Some(key) = initial_key {
        set_key(&mut analyzer, config, key, formatter).await;
    }

    loop {
        let prompt = match analyzer.state() {
            SessionState::Ready => "newslens> ",
            SessionState::AwaitingCredential => "newslens (no key)> ",
        };

        match editor.readline(prompt) {
            Ok(line) => {
                let line = line.trim();

                if line.is_empty() {
                    continue;
                }

                editor.add_history_entry(line).ok();

                let parts: Vec<&str> = line.split_whitespace().collect();
                match parts[0] {
                    "exit" | "quit" | "q" => {
                        println!("{}", formatter.info("Goodbye!"));
                        break;
                    }
                    "help" | "?" => print_help(formatter),
                    "key" => match parts.get(1) {
                        Some(secret) => {
                            set_key(&mut analyzer, config, ApiKey::new(*secret), formatter).await;
                        }
                        None => {
                            eprintln!("{}", formatter.error("Usage: key <secret>"));
                        }
                    },
                    "clear-key" => {
                        analyzer.clear_credential();
                        println!("{}", formatter.info("API key cleared"));
                    }
                    "analyze" => match parts.get(1) {
                        Some(url) => {
                            run_analysis(&mut analyzer, url, formatter, &mut last_records).await;
                        }
                        None => {
                            eprintln!("{}", formatter.error("Usage: analyze <url>"));
                        }
                    },
                    "export" => match parts.get(1) {
                        Some(path) => export_records(path, last_records.as_deref(), formatter),
                        None => {
                            eprintln!("{}", formatter.error("Usage: export <file>"));
                        }
                    },
                    other => {
                        eprintln!(
                            "{}",
                            formatter.error(&format!(
                                "Unknown command: {}. Type 'help' for available commands.",
                                other
                            ))
                        );
                    }
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", formatter.info("Use 'exit' to quit"));
            }
            Err(ReadlineError::Eof) => {
                break;
            }
            Err(err) => {
                eprintln!("{}", formatter.error(&format!("Error: {}", err)));
                break;
            }
        }
    }

    editor.save_history(&history_path).ok();

    Ok(())
}

async fn set_key(
    analyzer: &mut newslens_pipeline::Analyzer<newslens_llm::OpenAiProvider>,
    config: &Config,
    key: ApiKey,
    formatter: &Formatter,
) {
    if !key.is_plausible() {
        eprintln!(
            "{}",
            formatter.error("API key looks malformed (too short or blank)")
        );
        return;
    }

    match analyzer.authenticate(provider_for(config, key)).await {
        Ok(()) => println!("{}", formatter.success("API key accepted")),
        Err(AnalysisError::InvalidCredential) => {
            eprintln!(
                "{}",
                formatter.error("API key rejected by the completion service")
            );
        }
        Err(e) => eprintln!("{}", formatter.error(&e.to_string())),
    }
}

async fn run_analysis(
    analyzer: &mut newslens_pipeline::Analyzer<newslens_llm::OpenAiProvider>,
    url: &str,
    formatter: &Formatter,
    last_records: &mut Option<Vec<ImpactRecord>>,
) {
    match analyzer.analyze(url).await {
        Ok(analysis) => {
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
                match formatter.format_records(&analysis.records) {
                    Ok(rendered) => println!("{}", rendered),
                    Err(e) => eprintln!("{}", formatter.error(&e.to_string())),
                }
            }

            *last_records = Some(analysis.records);
        }
        Err(AnalysisError::NotAuthenticated) => {
            eprintln!(
                "{}",
                formatter.error("No API key set. Use 'key <secret>' first.")
            );
        }
        Err(e) => {
            eprintln!(
                "{}",
                formatter.error(&format!("{} stage failed: {}", e.stage().name(), e))
            );
        }
    }
}

fn export_records(path: &str, records: Option<&[ImpactRecord]>, formatter: &Formatter) {
    let Some(records) = records else {
        eprintln!(
            "{}",
            formatter.error("Nothing to export yet. Run 'analyze <url>' first.")
        );
        return;
    };

    let result = records_json(records).and_then(|json| Ok(std::fs::write(path, json)?));
    match result {
        Ok(()) => println!(
            "{}",
            formatter.success(&format!("Exported records to {}", path))
        ),
        Err(e) => eprintln!("{}", formatter.error(&e.to_string())),
    }
}

fn get_history_path() -> Result<PathBuf> {
    let home = dirs::home_dir()
        .ok_or_else(|| CliError::Config("Could not find home directory".into()))?;
    let newslens_dir = home.join(".newslens");
    std::fs::create_dir_all(&newslens_dir)?;
    Ok(newslens_dir.join("history.txt"))
}

fn print_help(formatter: &Formatter) {
    println!("{}", formatter.info("Available commands:"));
    println!();
    println!("  key <secret>       - Validate and hold an API key for this session");
    println!("  clear-key          - Discard the held API key");
    println!("  analyze <url>      - Analyze a news page (https:// assumed if no scheme)");
    println!("  export <file>      - Write the last run's records as JSON");
    println!("  help, ?            - Show this help");
    println!("  exit, quit, q      - Exit");
    println!();
}
