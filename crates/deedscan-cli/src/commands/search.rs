//! Search command - query stored transactions.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Args;
use console::style;

use deedscan_core::{JsonFileStore, Pipeline, TransactionService, TranslatorAdapter};

use super::output::format_records;
use super::{load_config, store_path, FilterArgs, OutputFormat};

/// Arguments for the search command.
#[derive(Args)]
pub struct SearchArgs {
    #[command(flatten)]
    filters: FilterArgs,

    /// Record store file (default: from configuration)
    #[arg(long)]
    store: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,
}

pub async fn run(args: SearchArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;
    let path = store_path(args.store.as_deref(), &config);

    if !path.exists() {
        eprintln!(
            "{} No record store at {}, nothing ingested yet.",
            style("ℹ").blue(),
            path.display()
        );
    }

    let store = Arc::new(JsonFileStore::open(&path)?);
    let service = TransactionService::new(Pipeline::new(TranslatorAdapter::disabled()), store)
        .with_unfiltered_limit(config.search.unfiltered_limit);

    let outcome = service.search(&args.filters.to_filter())?;
    let summary = serde_json::json!({ "count": outcome.count });

    println!(
        "{}",
        format_records(&outcome.transactions, &summary, args.format)?
    );

    Ok(())
}
