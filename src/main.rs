// Copyright Peter Bower 2025. All Rights Reserved.
// Licensed under Mozilla Public License (MPL) 2.0.

//! moogy-reference CLI - compute reference data for testing moogy.

use std::io::{self, Write};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

use moogy_reference::config::{RunConfig, WORKING_PRECISION_BITS};
use moogy_reference::dataset::write_output;
use moogy_reference::dispatch::Dispatcher;
use moogy_reference::oracle::MpfrOracle;

#[derive(Parser)]
#[command(name = "moogy-reference")]
#[command(version)]
#[command(about = "moogy-reference - compute reference data for testing moogy")]
struct Cli {
    /// Family to generate, e.g. binomial, norm, special_gamma
    #[arg(required_unless_present = "list")]
    distribution: Option<String>,

    /// Working precision of the oracle in bits
    #[arg(long, env = "MOOGY_REFERENCE_PRECISION", default_value_t = WORKING_PRECISION_BITS)]
    precision: u32,

    /// Pretty-print the JSON document
    #[arg(long)]
    pretty: bool,

    /// Trace every evaluated point
    #[arg(short, long, conflicts_with = "quiet")]
    verbose: bool,

    /// Only report errors
    #[arg(short, long)]
    quiet: bool,

    /// List the available families and exit
    #[arg(long)]
    list: bool,
}

fn setup_logging(verbose: bool, quiet: bool) -> Result<()> {
    let level = if quiet {
        Level::ERROR
    } else if verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_thread_ids(false)
        .with_writer(io::stderr)
        .compact()
        .finish();
    tracing::subscriber::set_global_default(subscriber).context("Failed to set subscriber")
}

fn print_families(dispatcher: &Dispatcher) -> Result<()> {
    let mut out = io::stdout().lock();
    for handler in dispatcher.handlers() {
        writeln!(out, "{:<26}{}", handler.name(), handler.description())?;
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.verbose, cli.quiet)?;

    let dispatcher = Dispatcher::standard();
    if cli.list {
        return print_families(&dispatcher);
    }

    let config = RunConfig::new(cli.precision, cli.pretty).context("Invalid configuration")?;
    let Some(name) = cli.distribution else {
        return Ok(());
    };

    // An unknown name is reported but is not a failure.
    let Some(handler) = dispatcher.resolve(&name) else {
        error!("unrecognised distribution '{name}'.");
        return Ok(());
    };

    let oracle = MpfrOracle::new(config.precision)?;
    let output = handler
        .generate(&oracle)
        .with_context(|| format!("Failed to generate '{name}'"))?;

    write_output(&output, io::stdout().lock(), config.pretty).context("Failed to write output")?;

    info!(family = handler.name(), records = output.len(), "Done");
    Ok(())
}
