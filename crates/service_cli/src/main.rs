//! pseu - Pseudorandom Utilities for the Command Line
//!
//! # Commands
//!
//! - `pseu roll [DICE...]` - Roll dice such as `2d6` (default `1d6`)
//! - `pseu rand [RANGE...]` - Draw integers from `n`, `lo-hi` or `lo-hixk`
//! - `pseu pick [WORDS...] -n N` - Pick N distinct words or lines
//! - `pseu shuffle [WORDS...]` - Shuffle words or lines
//!
//! Every command accepts `--seed <SEED>`, a base-64 string (`0-9A-Za-z+/`)
//! that makes the output reproducible.
//!
//! # Architecture
//!
//! This crate is the thin service layer over `pseu_core`: it maps arguments
//! to core requests, owns logging and configuration, and renders results.
//! Logs go to stderr so stdout only ever carries results.

use std::io;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::builder::NonEmptyStringValueParser;
use clap::{Args, Parser, Subcommand};
use tracing::{debug, error, info};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;
mod config;
mod error;
mod input;
mod output;

pub use error::{CliError, Result};

use config::{ConfigError, PseuConfig};
use input::InputFormat;

/// Pseudorandom utilities for the CLI
#[derive(Parser)]
#[command(name = "pseu")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose (debug) logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true, default_value = "pseu.toml")]
    config: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

/// Options shared by every command.
#[derive(Args)]
struct SeedArgs {
    /// Base-64 seed (characters 0-9, A-Z, a-z, + and /) for reproducible output
    #[arg(long)]
    seed: Option<String>,
}

/// Options for commands that take a list of items.
#[derive(Args)]
struct ItemArgs {
    /// Input is a JSON array of strings
    #[arg(long)]
    json: bool,

    /// Use lines of the input instead of words
    #[arg(long)]
    lines: bool,

    /// How words are separated (defaults to the configured separator)
    #[arg(long, value_parser = NonEmptyStringValueParser::new())]
    sep: Option<String>,

    /// The items; read from stdin when none are given
    words: Vec<String>,
}

impl ItemArgs {
    fn format<'a>(&'a self, config: &'a PseuConfig) -> InputFormat<'a> {
        InputFormat {
            json: self.json,
            lines: self.lines,
            separator: self.sep.as_deref().unwrap_or(&config.separator),
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Roll dice
    Roll {
        /// Dice rolls in the form {n}d{m}; 1d6 by default
        dice: Vec<String>,

        /// Print stats (sum, max, min, avg)
        #[arg(long)]
        stats: bool,

        #[command(flatten)]
        seed: SeedArgs,
    },

    /// Generate random numbers
    Rand {
        /// Number ranges: {n}-{m} (inclusive bounds), {n}-{m}x{k} (k draws)
        /// or {n} (for [0, n)); [0, 2^16 - 1] by default
        ranges: Vec<String>,

        /// Print stats (sum, max, min)
        #[arg(long)]
        stats: bool,

        #[command(flatten)]
        seed: SeedArgs,
    },

    /// Pick from a selection of words or lines
    Pick {
        /// Number of words/lines to pick
        #[arg(short, long, default_value_t = 1)]
        n: usize,

        #[command(flatten)]
        items: ItemArgs,

        #[command(flatten)]
        seed: SeedArgs,
    },

    /// Shuffle words or lines
    Shuffle {
        #[command(flatten)]
        items: ItemArgs,

        #[command(flatten)]
        seed: SeedArgs,
    },
}

fn init_tracing(verbose: bool, config: &PseuConfig) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level))
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr).with_target(false))
        .with(filter)
        .init();
}

/// Settings for the log filter: the loaded configuration, or the defaults
/// when loading failed.
fn logging_config(loaded: &std::result::Result<PseuConfig, ConfigError>) -> PseuConfig {
    loaded.as_ref().cloned().unwrap_or_default()
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let loaded = PseuConfig::load_with_env_and_validate(&cli.config);
    init_tracing(cli.verbose, &logging_config(&loaded));

    let config = loaded
        .with_context(|| format!("loading configuration from {}", cli.config.display()))?;
    info!(config = %cli.config.display(), "Configuration loaded");
    debug!(?config, "Effective configuration");

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match &cli.command {
        Commands::Roll { dice, stats, seed } => {
            commands::roll::run(dice, *stats, seed.seed.as_deref(), &config, &mut out)?
        }
        Commands::Rand {
            ranges,
            stats,
            seed,
        } => commands::rand::run(ranges, *stats, seed.seed.as_deref(), &config, &mut out)?,
        Commands::Pick { n, items, seed } => commands::pick::run(
            &items.words,
            *n,
            items.format(&config),
            seed.seed.as_deref(),
            io::stdin().lock(),
            &mut out,
        )?,
        Commands::Shuffle { items, seed } => commands::shuffle::run(
            &items.words,
            items.format(&config),
            seed.seed.as_deref(),
            io::stdin().lock(),
            &mut out,
        )?,
    }

    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("Command failed: {:#}", err);
            eprintln!("pseu: {:#}", err);
            ExitCode::FAILURE
        }
    }
}
