use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use recase::cli::output::{self, OutputFormat};
use recase::config::Overrides;
use recase::input::{self, InputValue};
use recase::{BatchConverter, Config, Converter, Mode, Preset};
use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;
use tracing::{debug, error};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "recase")]
#[command(version, about = "Convert identifiers to camelCase, kebab-case or dot.case", long_about = None)]
struct Cli {
    /// Values to convert (reads stdin when neither values nor --input are given).
    /// Values may start with '-'; options go before them.
    #[arg(value_name = "VALUES", allow_hyphen_values = true)]
    values: Vec<String>,

    /// Target preset (camel, kebab, dot, or a legacy preset; see `recase presets`)
    #[arg(short, long, env = "RECASE_PRESET")]
    to: Option<Preset>,

    /// Read values from a file (one per line, or a JSON array for .json files)
    #[arg(short, long = "input", value_name = "FILE")]
    inputs: Vec<PathBuf>,

    /// Fail on invalid or empty values
    #[arg(long, conflicts_with = "lenient")]
    strict: bool,

    /// Convert invalid or empty values to an empty string
    #[arg(long)]
    lenient: bool,

    /// Output format (text, json)
    #[arg(short = 'o', long)]
    format: Option<OutputFormat>,

    /// Pattern (regex) of values to pass through unchanged
    #[arg(long)]
    ignore_pattern: Vec<String>,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Exit with code 0 even if some values could not be converted
    #[arg(long)]
    no_fail: bool,

    /// Print debug logs
    #[arg(short, long)]
    verbose: bool,

    /// Generate shell completion script
    #[arg(long, value_name = "SHELL")]
    completion: Option<Shell>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List available presets
    Presets,
    /// Show how a value splits into words
    Tokens {
        /// Value to split
        value: String,
        /// Preset whose separators and case boundaries are used
        #[arg(short, long)]
        to: Option<Preset>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    // Handle shell completion generation
    if let Some(shell) = cli.completion {
        let mut cmd = Cli::command();
        generate(shell, &mut cmd, "recase", &mut io::stdout());
        return Ok(());
    }

    let mode = if cli.strict {
        Some(Mode::Strict)
    } else if cli.lenient {
        Some(Mode::Lenient)
    } else {
        None
    };

    // Load configuration
    let config = Config::load(Overrides {
        preset: cli.to,
        mode,
        ignore_patterns: cli.ignore_pattern.clone(),
        format: cli.format,
        no_color: cli.no_color,
    })?;
    debug!(?config, "configuration loaded");

    if !config.color {
        colored::control::set_override(false);
    }

    // Handle subcommands
    if let Some(command) = &cli.command {
        handle_command(command, &config);
        return Ok(());
    }

    let batch = BatchConverter::new(config.preset, config.effective_mode(), &config.ignore_patterns);
    let (sources, missing_files) = collect_sources(&cli)?;

    let mut total_converted = 0;
    let mut total_failed = missing_files;

    let mut reports = Vec::new();

    for (label, values) in &sources {
        let result = batch.run(values);
        match config.format {
            OutputFormat::Text => output::print_text_results(label, &result, config.color),
            OutputFormat::Json => reports.push(output::json_report(label, config.preset, &result)),
        }

        total_converted += result.converted_count;
        total_failed += result.failed_count;
    }

    match config.format {
        OutputFormat::Text => output::print_summary(total_converted, total_failed, config.color),
        OutputFormat::Json => {
            output::print_json_reports(&reports).context("Failed to write JSON output")?
        }
    }

    // Exit with appropriate code
    if total_failed > 0 && !cli.no_fail {
        std::process::exit(1);
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("recase=debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .without_time()
        .with_target(false)
        .try_init()
        .ok();
}

type Source = (String, Vec<InputValue>);

/// Gather values from arguments, files, or stdin. Also returns how many
/// input files could not be found.
fn collect_sources(cli: &Cli) -> Result<(Vec<Source>, usize)> {
    let mut sources = Vec::new();
    let mut missing = 0;

    if !cli.values.is_empty() {
        let values = cli
            .values
            .iter()
            .enumerate()
            .map(|(index, value)| InputValue::text(value.as_str(), index + 1))
            .collect();
        sources.push(("<args>".to_string(), values));
    }

    for path in &cli.inputs {
        if !path.exists() {
            error!("File not found: {}", path.display());
            missing += 1;
            continue;
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;
        let values = input::parse_file(path, &content)
            .with_context(|| format!("Failed to parse file: {}", path.display()))?;
        sources.push((path.display().to_string(), values));
    }

    if cli.values.is_empty() && cli.inputs.is_empty() {
        let stdin = io::stdin();
        if stdin.is_terminal() {
            anyhow::bail!("No values specified. Use --help for usage information.");
        }

        let mut content = String::new();
        stdin
            .lock()
            .read_to_string(&mut content)
            .context("Failed to read stdin")?;
        sources.push(("<stdin>".to_string(), input::plaintext::parse(&content)));
    }

    Ok((sources, missing))
}

fn handle_command(command: &Commands, config: &Config) {
    match command {
        Commands::Presets => output::print_presets(config.color),
        Commands::Tokens { value, to } => {
            let converter = Converter::from_preset(to.unwrap_or(config.preset));
            let tokens = converter.tokens(value);
            output::print_tokens(value.trim(), &tokens, config.color);
        }
    }
}
