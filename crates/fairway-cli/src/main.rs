use std::path::PathBuf;

use anyhow::{Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
use tracing_subscriber::EnvFilter;

use fairway_cli::config::CliConfig;
use fairway_cli::round_file::{RoundFile, score_round};
use fairway_core::config::ScoringSystemKind;

#[derive(Debug, Clone, Copy, Default, ValueEnum)]
enum LogFormat {
    #[default]
    Text,
    Json,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Score a round file and print the summary as JSON
    Score {
        /// Path to the round description (TOML)
        file: PathBuf,
        /// Override the scoring system for this run
        #[arg(long)]
        system: Option<ScoringSystemKind>,
    },
    /// List the built-in course presets
    Presets,
}

#[derive(Parser, Debug)]
#[command(name = "fairway")]
#[command(about = "Stroke-play golf scoring with voor", long_about = None)]
#[command(version)]
struct Cli {
    /// Path to config file (defaults to $FAIRWAY_CONFIG, then ./fairway.toml)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log output format (logs go to stderr)
    #[arg(long, global = true, value_enum, default_value_t = LogFormat::Text)]
    log_format: LogFormat,

    #[command(subcommand)]
    command: Commands,
}

fn init_tracing(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);
    match format {
        LogFormat::Text => builder.init(),
        LogFormat::Json => builder.json().init(),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.log_format);

    let config_path = CliConfig::resolve_path(cli.config.as_deref());
    let config = CliConfig::load(&config_path);
    if let Err(errors) = config.validate() {
        for error in &errors {
            tracing::error!("{}: {error}", config_path.display());
        }
        bail!("invalid configuration in {}", config_path.display());
    }

    match cli.command {
        Commands::Score { file, system } => {
            let mut round = RoundFile::load(&file)?;
            if system.is_some() {
                round.system = system;
            }
            let report = score_round(&round, &config)?;
            println!("{}", fairway_cli::to_json(&report, config.output.pretty)?);
        },
        Commands::Presets => {
            let listings = fairway_cli::preset_listings();
            println!("{}", fairway_cli::to_json(&listings, config.output.pretty)?);
        },
    }
    Ok(())
}
