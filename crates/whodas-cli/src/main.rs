use std::io::{Read, Write};
use std::path::PathBuf;

use clap::Parser;
use eyre::{Result, WrapErr};
use whodas_core::Table;

use whodas_cli::config::{load_config, WhodasConfig};
use whodas_cli::output::{render, OutputFormat};

#[derive(Parser, Debug)]
#[command(name = "whodas")]
#[command(about = "WHODAS 2.0 simple scoring", long_about = None)]
#[command(version)]
struct Cli {
    /// JSON array of respondent records (reads stdin when omitted)
    input: Option<PathBuf>,

    /// Write results here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Also score the remunerated-work items (Do52, st_s36)
    #[arg(long, env = "WHODAS_INCLUDE_WORK_ITEMS")]
    include_work_items: bool,

    /// Path to a JSON config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Json)]
    format: OutputFormat,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => WhodasConfig::default(),
    };
    let options = config.score_options(cli.include_work_items);

    let input = match &cli.input {
        Some(path) => std::fs::read_to_string(path)
            .wrap_err_with(|| format!("failed to read {}", path.display()))?,
        None => {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        }
    };
    let table = Table::from_json(&input).wrap_err("failed to parse respondent records")?;
    let rendered = render(&table, &options, cli.format)?;

    match &cli.output {
        Some(path) => std::fs::write(path, rendered)
            .wrap_err_with(|| format!("failed to write {}", path.display()))?,
        None => writeln!(std::io::stdout(), "{rendered}")?,
    }
    Ok(())
}
