//! CLI subcommands.

pub mod config;
pub mod ingest;
mod output;
pub mod search;

use std::path::{Path, PathBuf};

use clap::Args;
use tracing::debug;

use deedscan_core::models::config::DeedscanConfig;
use deedscan_core::FilterSpec;

pub use output::OutputFormat;

/// Record filters shared by `ingest` and `search`.
#[derive(Args, Debug, Default)]
pub struct FilterArgs {
    /// Buyer name substring (case-insensitive, translated name)
    #[arg(long)]
    buyer_name: Option<String>,

    /// Seller name substring (case-insensitive, translated name)
    #[arg(long)]
    seller_name: Option<String>,

    /// Exact house number
    #[arg(long)]
    house_number: Option<String>,

    /// Exact survey number
    #[arg(long)]
    survey_number: Option<String>,

    /// Exact document number
    #[arg(long)]
    document_number: Option<String>,
}

impl FilterArgs {
    pub fn to_filter(&self) -> FilterSpec {
        FilterSpec {
            buyer_name: self.buyer_name.clone(),
            seller_name: self.seller_name.clone(),
            house_number: self.house_number.clone(),
            survey_number: self.survey_number.clone(),
            document_number: self.document_number.clone(),
        }
    }
}

/// Default location of the configuration file.
pub fn default_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("deedscan")
        .join("config.json")
}

/// Configuration file in effect: `--config` if given, else the default path.
pub fn config_path(explicit: Option<&str>) -> PathBuf {
    explicit.map(PathBuf::from).unwrap_or_else(default_config_path)
}

/// Load configuration, falling back to defaults when no file exists.
pub fn load_config(explicit: Option<&str>) -> anyhow::Result<DeedscanConfig> {
    let path = config_path(explicit);
    if path.exists() {
        debug!("Loading configuration from {}", path.display());
        Ok(DeedscanConfig::from_file(&path)?)
    } else if explicit.is_some() {
        anyhow::bail!("Config file not found: {}", path.display())
    } else {
        Ok(DeedscanConfig::default())
    }
}

/// Store path: `--store` if given, else the configured one.
pub fn store_path(explicit: Option<&Path>, config: &DeedscanConfig) -> PathBuf {
    explicit
        .map(Path::to_path_buf)
        .unwrap_or_else(|| config.store.path.clone())
}
