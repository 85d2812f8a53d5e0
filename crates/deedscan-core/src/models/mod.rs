//! Data models: records, filters, configuration.

pub mod config;
pub mod filter;
pub mod record;
