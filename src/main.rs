use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

use header_codegen::config::{
    load_config, validate_config, CodegenConfig, ConfigError, LineEnding, OutputFormat,
};
use header_codegen::input::read_input;
use header_codegen::observability::init_logging;
use header_codegen::output::write_translation;
use header_codegen::AppError;

#[derive(Parser)]
#[command(name = "header-codegen")]
#[command(about = "Generate AddHeader statements from raw HTTP header lines", long_about = None)]
struct Cli {
    /// File with header lines; reads stdin when absent or "-"
    input: Option<PathBuf>,

    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Terminate lines with \r\n
    #[arg(long)]
    crlf: bool,

    /// Variable the statements are called on
    #[arg(long, value_name = "IDENT")]
    request_var: Option<String>,

    /// Type holding the symbolic header constants
    #[arg(long, value_name = "IDENT")]
    header_enum: Option<String>,

    /// Report discarded line counts on stderr
    #[arg(long)]
    stats: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), AppError> {
    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => CodegenConfig::default(),
    };
    apply_overrides(&mut config, &cli);
    validate_config(&config).map_err(ConfigError::Validation)?;

    init_logging(&config.observability, cli.verbose);

    let translator = config.translator();
    let tables = translator.tables();
    if let Some(path) = &cli.config {
        tracing::info!(
            path = %path.display(),
            known_headers = tables.known().len(),
            excluded_headers = tables.excluded().len(),
            request_variable = %translator.style().request_variable,
            header_enum = %translator.style().header_enum,
            "Configuration loaded"
        );
    }
    tracing::debug!(
        excluded = ?tables.excluded().iter().collect::<Vec<_>>(),
        "Excluded headers"
    );
    if tables.known().is_empty() {
        tracing::warn!("Known header table is empty; every header uses the quoted form");
    }

    let input = read_input(cli.input.as_deref())?;
    let translation = translator.translate_with_report(&input);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_translation(
        &mut out,
        &translation,
        config.output.format,
        config.output.line_ending,
    )?;

    if cli.stats {
        eprintln!(
            "statements={} malformed={} excluded={}",
            translation.statements.len(),
            translation.discarded.malformed,
            translation.discarded.excluded
        );
    }

    tracing::info!(
        statements = translation.statements.len(),
        discarded = translation.discarded.total(),
        "Done"
    );
    Ok(())
}

/// CLI flags win over file values.
fn apply_overrides(config: &mut CodegenConfig, cli: &Cli) {
    if let Some(format) = cli.format {
        config.output.format = format;
    }
    if cli.crlf {
        config.output.line_ending = LineEnding::Crlf;
    }
    if let Some(request_var) = &cli.request_var {
        config.output.request_variable = request_var.clone();
    }
    if let Some(header_enum) = &cli.header_enum {
        config.output.header_enum = header_enum.clone();
    }
}
