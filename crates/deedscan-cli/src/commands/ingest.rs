//! Ingest command - extract transactions from deed documents and store them.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

use clap::Args;
use console::style;
use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, error, info, warn};

use deedscan_core::models::config::DeedscanConfig;
use deedscan_core::{InMemoryStore, JsonFileStore, RecordStore, StoredRecord, TransactionService};

use super::output::format_records;
use super::{load_config, store_path, FilterArgs, OutputFormat};

/// Arguments for the ingest command.
#[derive(Args)]
pub struct IngestArgs {
    /// Input file or glob pattern (PDF or UTF-8 text)
    #[arg(required = true)]
    input: String,

    #[command(flatten)]
    filters: FilterArgs,

    /// Record store file (default: from configuration)
    #[arg(long)]
    store: Option<PathBuf>,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Keep names untranslated
    #[arg(long)]
    no_translate: bool,

    /// Extract and print without persisting
    #[arg(long)]
    dry_run: bool,

    /// Report fields that fell back to sentinels or defaults
    #[arg(long)]
    validate: bool,

    /// Continue on error
    #[arg(long)]
    continue_on_error: bool,
}

pub async fn run(args: IngestArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let mut config = load_config(config_path)?;
    if args.no_translate {
        config.translation.enabled = false;
    }

    let files = expand_input(&args.input)?;
    info!("Ingesting {} files", files.len());

    let store: Arc<dyn RecordStore> = if args.dry_run {
        Arc::new(InMemoryStore::new())
    } else {
        let path = store_path(args.store.as_deref(), &config);
        Arc::new(JsonFileStore::open(&path)?)
    };

    let service = TransactionService::from_config(&config, store)?;
    let filter = args.filters.to_filter();

    let pb = ProgressBar::new(files.len() as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files")?
            .progress_chars("=>-"),
    );

    let mut transactions: Vec<StoredRecord> = Vec::new();
    let mut blocks = 0;
    let mut failed: Vec<(PathBuf, String)> = Vec::new();

    for path in &files {
        let file_start = Instant::now();
        let result = match read_document(path, &config) {
            Ok(text) => service.upload(&text, &filter).await.map_err(anyhow::Error::from),
            Err(e) => Err(e),
        };

        match result {
            Ok(outcome) => {
                debug!(
                    "{}: {} blocks, {} stored in {:?}",
                    path.display(),
                    outcome.blocks,
                    outcome.count,
                    file_start.elapsed()
                );
                blocks += outcome.blocks;
                transactions.extend(outcome.transactions);
            }
            Err(e) if args.continue_on_error => {
                warn!("Failed to ingest {}: {}", path.display(), e);
                failed.push((path.clone(), e.to_string()));
            }
            Err(e) => {
                error!("Failed to ingest {}: {}", path.display(), e);
                pb.abandon();
                return Err(e.context(format!("Ingest failed for {}", path.display())));
            }
        }

        pb.inc(1);
    }

    pb.finish_and_clear();

    if args.validate {
        report_issues(&transactions);
    }

    let summary = serde_json::json!({
        "files": files.len() - failed.len(),
        "blocks": blocks,
        "count": transactions.len(),
        "unresolved": transactions
            .iter()
            .filter(|t| t.record.has_unresolved_fields())
            .count(),
        "dry_run": args.dry_run,
    });
    let output = format_records(&transactions, &summary, args.format)?;

    if let Some(output_path) = &args.output {
        fs::write(output_path, &output)?;
        eprintln!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", output);
    }

    if !failed.is_empty() {
        eprintln!("{}", style("Failed files:").red());
        for (path, message) in &failed {
            eprintln!("  - {}: {}", path.display(), message);
        }
    }

    debug!("Total ingest time: {:?}", start.elapsed());

    Ok(())
}

/// Expand a file path or glob pattern into matching files.
fn expand_input(input: &str) -> anyhow::Result<Vec<PathBuf>> {
    let files: Vec<PathBuf> = glob(input)?
        .filter_map(|r| r.ok())
        .filter(|p| p.is_file())
        .collect();

    if files.is_empty() {
        anyhow::bail!("No matching files found for: {}", input);
    }

    Ok(files)
}

/// Read a document as text, decoding PDFs.
fn read_document(path: &Path, config: &DeedscanConfig) -> anyhow::Result<String> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    if extension == "pdf" {
        let data = fs::read(path)?;
        Ok(deedscan_core::extract_document_text(
            &data,
            config.pdf.min_text_length,
        )?)
    } else {
        Ok(fs::read_to_string(path)?)
    }
}

fn report_issues(transactions: &[StoredRecord]) {
    for stored in transactions {
        let issues = stored.record.validate();
        if issues.is_empty() {
            continue;
        }
        eprintln!(
            "{} Record #{} ({}):",
            style("⚠").yellow(),
            stored.id,
            stored.record.fields.document_number
        );
        for issue in &issues {
            eprintln!("  - {}", issue);
        }
    }
}
