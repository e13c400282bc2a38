//! CLI arguments

use crate::config::DashboardConfig;
use crate::error::Result;
use clap::Parser;
use std::path::PathBuf;

/// Browse and edit products on a REST resource
#[derive(Parser, Debug)]
#[command(name = "product-dashboard")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Configuration file (YAML)
    #[arg(short = 'C', long)]
    pub config: Option<PathBuf>,

    /// Base URL of the REST service
    #[arg(long)]
    pub base_url: Option<String>,

    /// Collection path under the base URL
    #[arg(long)]
    pub resource: Option<String>,

    /// Records per page
    #[arg(long)]
    pub page_size: Option<usize>,

    /// Search debounce window in milliseconds
    #[arg(long)]
    pub debounce_ms: Option<u64>,

    /// Load products on startup
    #[arg(long)]
    pub load: bool,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Resolve the effective config: file (or defaults), then flag overrides
    pub fn resolve_config(&self) -> Result<DashboardConfig> {
        let mut config = match self.config {
            Some(ref path) => DashboardConfig::from_file(path)?,
            None => DashboardConfig::default(),
        };

        if let Some(ref url) = self.base_url {
            config.base_url.clone_from(url);
        }
        if let Some(ref resource) = self.resource {
            config.resource.clone_from(resource);
        }
        if let Some(size) = self.page_size {
            config.page_size = size;
        }
        if let Some(ms) = self.debounce_ms {
            config.search_debounce_ms = ms;
        }

        config.validate()?;
        Ok(config)
    }
}
