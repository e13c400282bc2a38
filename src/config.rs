//! Dashboard configuration
//!
//! Loaded from YAML; every field has a default so an empty file (or no file
//! at all) gives a working setup against JSONPlaceholder.
//!
//! ```yaml
//! base_url: https://jsonplaceholder.typicode.com
//! resource: posts
//! page_size: 5
//! search_debounce_ms: 500
//! user_id: 1
//! timeout_secs: 30
//! ```

use crate::api::DEFAULT_RESOURCE;
use crate::dashboard::DashboardOptions;
use crate::error::{Error, Result, ResultExt};
use crate::http::HttpClientConfig;
use crate::pagination::DEFAULT_PAGE_SIZE;
use serde::{Deserialize, Serialize};
use std::fs;
use std::num::NonZeroUsize;
use std::path::Path;
use std::time::Duration;

/// Default remote service
pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

/// Complete dashboard configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DashboardConfig {
    /// Root URL of the REST service
    pub base_url: String,

    /// Collection path under the base URL
    pub resource: String,

    /// Records per page
    pub page_size: usize,

    /// Quiescence window for search input, in milliseconds
    pub search_debounce_ms: u64,

    /// `userId` sent with creates and updates
    pub user_id: u64,

    /// Request timeout in seconds (unset waits indefinitely)
    pub timeout_secs: Option<u64>,

    /// User agent override
    pub user_agent: Option<String>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            resource: DEFAULT_RESOURCE.to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            search_debounce_ms: 500,
            user_id: 1,
            timeout_secs: None,
            user_agent: None,
        }
    }
}

impl DashboardConfig {
    /// Parse and validate a YAML document
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        // An empty document deserializes as null rather than an empty map
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a YAML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file '{}'", path.display()))?;
        Self::from_yaml_str(&content)
    }

    /// Check the values are usable
    pub fn validate(&self) -> Result<()> {
        if self.base_url.trim().is_empty() {
            return Err(Error::missing_field("base_url"));
        }
        url::Url::parse(&self.base_url)?;

        if self.resource.trim_matches('/').is_empty() {
            return Err(Error::missing_field("resource"));
        }

        if self.page_size == 0 {
            return Err(Error::config("page_size must be greater than zero"));
        }

        Ok(())
    }

    /// Page size as a non-zero value
    pub fn page_size(&self) -> Result<NonZeroUsize> {
        NonZeroUsize::new(self.page_size)
            .ok_or_else(|| Error::config("page_size must be greater than zero"))
    }

    /// HTTP client settings derived from this config
    pub fn http_config(&self) -> HttpClientConfig {
        let mut builder = HttpClientConfig::builder().base_url(&self.base_url);
        if let Some(secs) = self.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        if let Some(ref agent) = self.user_agent {
            builder = builder.user_agent(agent);
        }
        builder.build()
    }

    /// Dashboard settings derived from this config
    pub fn dashboard_options(&self) -> Result<DashboardOptions> {
        Ok(DashboardOptions {
            page_size: self.page_size()?,
            search_debounce: Duration::from_millis(self.search_debounce_ms),
            user_id: self.user_id,
        })
    }
}
