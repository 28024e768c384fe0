//! Bridge Configuration CLI
//!
//! Resolves test bridge configuration from property files and overrides and
//! prints the result.

use anyhow::Result;
use bridge_config::cli::keys::render_keys;
use bridge_config::cli::show::{ShowArgs, run_show};
use bridge_config::cli::{Cli, Command};
use clap::Parser;
use std::fs::OpenOptions;
use std::io::Write;
use std::sync::Mutex;
use tracing::{Level, debug};
use tracing_subscriber::FmtSubscriber;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging based on --log option
    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    match cli.log.as_str() {
        "0" | "off" => {
            // No logging
        }
        "1" | "stdout" => {
            let subscriber = FmtSubscriber::builder()
                .with_max_level(level)
                .with_writer(std::io::stdout)
                .finish();
            tracing::subscriber::set_global_default(subscriber)?;
        }
        "2" | "stderr" => {
            let subscriber = FmtSubscriber::builder()
                .with_max_level(level)
                .with_writer(std::io::stderr)
                .finish();
            tracing::subscriber::set_global_default(subscriber)?;
        }
        filename => {
            // Log to file (append mode)
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(filename)?;
            let subscriber = FmtSubscriber::builder()
                .with_max_level(level)
                .with_writer(Mutex::new(file))
                .with_ansi(false)
                .finish();
            tracing::subscriber::set_global_default(subscriber)?;
        }
    }

    let output = match cli.command {
        Some(Command::Keys) => render_keys(),
        Some(Command::Show(args)) => run_show(&args)?,
        None => run_show(&ShowArgs::default())?,
    };
    debug!(bytes = output.len(), "writing output");

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(output.as_bytes())?;
    stdout.flush()?;

    Ok(())
}
