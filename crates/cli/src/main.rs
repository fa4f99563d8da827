//! ChemTrack command line client.
//!
//! Loads a chemical inventory from a JSON file, stdin, or the backend API,
//! applies the user's search/filter/sort criteria, and renders the
//! resulting view as a table, JSON, or CSV.

mod cli;
mod fetch;
mod output;

use std::fs;
use std::io::Read;
use std::path::Path;

use anyhow::Context;
use chemtrack_inventory::ChemicalRecord;
use clap::Parser;
use tracing::{info, warn};

use crate::cli::Cli;

fn init_logging(level: &str) {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(&cli.log_level);

    if let Err(errors) = cli.validate() {
        for error in &errors {
            eprintln!("Configuration error: {}", error);
        }
        std::process::exit(1);
    }

    let records = load_records(&cli).await?;
    let criteria = cli.criteria();

    info!(
        total = records.len(),
        sort = %criteria.sort_key,
        "running chemical query"
    );

    let view = chemtrack_query::select(&records, &criteria);
    output::render(&view, cli.format, &mut std::io::stdout().lock())?;

    Ok(())
}

/// Loads the record collection from whichever source the flags selected.
async fn load_records(cli: &Cli) -> anyhow::Result<Vec<ChemicalRecord>> {
    if let Some(server) = cli.server.as_deref() {
        // One request, no retry: a failed fetch degrades to an empty
        // inventory, exactly like the mobile client's list screen.
        return match fetch::fetch_chemicals(server, cli.school.as_deref()).await {
            Ok(records) => Ok(records),
            Err(err) => {
                warn!(error = %err, "fetch failed, continuing with an empty inventory");
                Ok(Vec::new())
            }
        };
    }

    let Some(path) = cli.input.as_deref() else {
        anyhow::bail!("one of --input or --server is required");
    };
    let data = read_input(path)?;
    serde_json::from_str(&data)
        .with_context(|| format!("{} is not a JSON array of chemical records", path.display()))
}

fn read_input(path: &Path) -> anyhow::Result<String> {
    if path == Path::new("-") {
        let mut data = String::new();
        std::io::stdin()
            .read_to_string(&mut data)
            .context("reading stdin")?;
        return Ok(data);
    }

    fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))
}
