//! Output formatting for the CLI.

use crate::config::OutputFormat;
use crate::error::Result;
use colored::*;
use newslens_domain::ImpactRecord;
use tabled::{
    builder::Builder,
    settings::{object::Rows, Alignment, Modify, Style},
};

/// Output formatter.
pub struct Formatter {
    format: OutputFormat,
    color_enabled: bool,
}

impl Formatter {
    /// Create a new formatter.
    pub fn new(format: OutputFormat, color_enabled: bool) -> Self {
        Self {
            format,
            color_enabled,
        }
    }

    /// Format impact records for display.
    pub fn format_records(&self, records: &[ImpactRecord]) -> Result<String> {
        match self.format {
            OutputFormat::Json => records_json(records),
            OutputFormat::Table => self.format_records_table(records),
            OutputFormat::Quiet => Ok(self.format_records_quiet(records)),
        }
    }

    /// Format records as a table.
    fn format_records_table(&self, records: &[ImpactRecord]) -> Result<String> {
        if records.is_empty() {
            return Ok(self.colorize("No relevant Indian companies found.", "yellow"));
        }

        let mut builder = Builder::default();
        builder.push_record(["Company", "Impact", "Industry", "Score", "Listed"]);

        for record in records {
            builder.push_record([
                record.company_name.as_str(),
                &record.impact_type.to_string(),
                record.industry.as_str(),
                &record.impact_score.to_string(),
                &record.listed.to_string(),
            ]);
        }

        let mut table = builder.build();
        table
            .with(Style::rounded())
            .with(Modify::new(Rows::first()).with(Alignment::center()));

        Ok(table.to_string())
    }

    /// Format records in quiet mode (company names only).
    fn format_records_quiet(&self, records: &[ImpactRecord]) -> String {
        let names: Vec<&str> = records.iter().map(|r| r.company_name.as_str()).collect();
        names.join("\n")
    }

    /// Format a success message.
    pub fn success(&self, message: &str) -> String {
        self.colorize(&format!("✓ {}", message), "green")
    }

    /// Format an error message.
    pub fn error(&self, message: &str) -> String {
        self.colorize(&format!("✗ {}", message), "red")
    }

    /// Format an info message.
    pub fn info(&self, message: &str) -> String {
        self.colorize(&format!("ℹ {}", message), "blue")
    }

    /// Format a warning message.
    pub fn warning(&self, message: &str) -> String {
        self.colorize(&format!("⚠ {}", message), "yellow")
    }

    /// Colorize text if color is enabled.
    fn colorize(&self, text: &str, color: &str) -> String {
        if !self.color_enabled {
            return text.to_string();
        }

        match color {
            "red" => text.red().to_string(),
            "green" => text.green().to_string(),
            "blue" => text.blue().to_string(),
            "yellow" => text.yellow().to_string(),
            "cyan" => text.cyan().to_string(),
            _ => text.to_string(),
        }
    }
}

/// Pretty-printed JSON for the records, using the export key names
/// ("company name", "impact type", "company industry", "impact score",
/// "listed"). Used for both `--format json` output and file export.
pub fn records_json(records: &[ImpactRecord]) -> Result<String> {
    Ok(serde_json::to_string_pretty(records)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use newslens_domain::{ImpactType, Listed};

    fn sample_records() -> Vec<ImpactRecord> {
        vec![
            ImpactRecord {
                company_name: "Tata Motors".to_string(),
                impact_type: ImpactType::Positive,
                industry: "Automotive".to_string(),
                impact_score: 8,
                listed: Listed::Y,
            },
            ImpactRecord {
                company_name: "Acme Logistics".to_string(),
                impact_type: ImpactType::Negative,
                industry: "Logistics".to_string(),
                impact_score: 3,
                listed: Listed::N,
            },
        ]
    }

    #[test]
    fn test_json_format_uses_export_keys() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let output = formatter.format_records(&sample_records()).unwrap();
        assert!(output.contains("\"company name\""));
        assert!(output.contains("\"impact type\""));
        assert!(output.contains("\"company industry\""));
        assert!(output.contains("\"impact score\""));
        assert!(output.contains("\"listed\""));
        assert!(output.contains("Tata Motors"));
    }

    #[test]
    fn test_table_format() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_records(&sample_records()).unwrap();
        assert!(output.contains("Company"));
        assert!(output.contains("Listed"));
        assert!(output.contains("Tata Motors"));
        assert!(output.contains("negative"));
    }

    #[test]
    fn test_quiet_format_names_only() {
        let formatter = Formatter::new(OutputFormat::Quiet, false);
        let output = formatter.format_records(&sample_records()).unwrap();
        assert_eq!(output, "Tata Motors\nAcme Logistics");
    }

    #[test]
    fn test_empty_records() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let output = formatter.format_records(&[]).unwrap();
        assert!(output.contains("No relevant Indian companies found"));
    }

    #[test]
    fn test_empty_records_json_is_empty_array() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let output = formatter.format_records(&[]).unwrap();
        assert_eq!(output, "[]");
    }

    #[test]
    fn test_colorize_disabled() {
        let formatter = Formatter::new(OutputFormat::Table, false);
        let msg = formatter.success("test");
        assert_eq!(msg, "✓ test");
    }
}
