use crate::{BatchResult, Preset};
use colored::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct JsonRecord {
    pub line: usize,
    pub input: String,
    pub output: Option<String>,
    pub error: Option<String>,
    pub ignored: bool,
}

/// Results for one source.
#[derive(Debug, Serialize, Deserialize)]
pub struct JsonReport {
    pub source: String,
    pub preset: String,
    pub converted: usize,
    pub failed: usize,
    pub results: Vec<JsonRecord>,
}

pub fn print_text_results(source: &str, result: &BatchResult, colored_output: bool) {
    if result.records.is_empty() {
        return;
    }

    if colored_output {
        println!("{}", source.bold().underline());
    } else {
        println!("{}", source);
    }

    for record in &result.records {
        let line_info = format!("{:>4}", record.line);

        match (&record.output, colored_output) {
            (Ok(output), true) => {
                let output = if record.ignored {
                    output.dimmed().to_string()
                } else {
                    output.green().to_string()
                };
                println!("  {} {} {} {}", line_info.blue(), record.input, "→".dimmed(), output);
            }
            (Ok(output), false) => {
                println!("  {} {} → {}", line_info, record.input, output);
            }
            (Err(err), true) => {
                println!(
                    "  {} {} {} {}",
                    line_info.blue(),
                    record.input,
                    "✗".red().bold(),
                    err.to_string().red()
                );
            }
            (Err(err), false) => {
                println!("  {} {} ✗ {}", line_info, record.input, err);
            }
        }
    }
}

pub fn json_report(source: &str, preset: Preset, result: &BatchResult) -> JsonReport {
    let results = result
        .records
        .iter()
        .map(|record| JsonRecord {
            line: record.line,
            input: record.input.clone(),
            output: record.output.as_ref().ok().cloned(),
            error: record.output.as_ref().err().map(|e| e.to_string()),
            ignored: record.ignored,
        })
        .collect();

    JsonReport {
        source: source.to_string(),
        preset: preset.to_string(),
        converted: result.converted_count,
        failed: result.failed_count,
        results,
    }
}

/// Print every source's report as one JSON array.
pub fn print_json_reports(reports: &[JsonReport]) -> serde_json::Result<()> {
    println!("{}", serde_json::to_string_pretty(reports)?);
    Ok(())
}

pub fn print_summary(total_converted: usize, total_failed: usize, colored: bool) {
    println!();
    if total_failed == 0 {
        let value_word = if total_converted == 1 { "value" } else { "values" };
        if colored {
            println!(
                "{} {} {} converted",
                "✓".green().bold(),
                total_converted.to_string().green().bold(),
                value_word
            );
        } else {
            println!("✓ {} {} converted", total_converted, value_word);
        }
    } else {
        let failure_word = if total_failed == 1 { "value" } else { "values" };
        if colored {
            println!(
                "{} {} {} could not be converted, {} converted",
                "✗".red().bold(),
                total_failed.to_string().red().bold(),
                failure_word,
                total_converted
            );
        } else {
            println!(
                "✗ {} {} could not be converted, {} converted",
                total_failed, failure_word, total_converted
            );
        }
    }
}

pub fn print_presets(colored: bool) {
    for preset in Preset::all() {
        let profile = preset.profile();
        let name = format!("{:<13}", preset.name());
        let details = format!(
            "{:<10} separators {:<14} boundaries {:<10} shortcuts {:<5} mode {}",
            profile.convention.to_string(),
            profile.separators.describe(),
            profile.boundaries.describe(),
            profile.shortcuts,
            profile.mode
        );

        if colored {
            println!("  {} {}", name.cyan().bold(), details.dimmed());
        } else {
            println!("  {} {}", name, details);
        }
    }
}

pub fn print_tokens(input: &str, tokens: &[&str], colored: bool) {
    if colored {
        let rendered = tokens
            .iter()
            .map(|token| token.yellow().to_string())
            .collect::<Vec<_>>()
            .join(&" | ".dimmed().to_string());
        println!("{} {} {}", input.bold(), "→".dimmed(), rendered);
    } else {
        println!("{} → {}", input, tokens.join(" | "));
    }
}
