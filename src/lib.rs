//! # Product Dashboard
//!
//! Browse, search, and edit "product" records held by a remote REST
//! resource, one page at a time.
//!
//! ## Features
//!
//! - **Client-side paging**: the whole collection is fetched once and paged
//!   locally with a fixed page size
//! - **Debounced search**: bursts of search input collapse into one request
//! - **In-place mutations**: creates, edits, and deletes update only the
//!   affected record and keep the current page
//! - **Stale-response guard**: an older load or search never overwrites a
//!   newer one
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use product_dashboard::{api::RestProductApi, dashboard::*, http::*};
//! use std::sync::Arc;
//!
//! let client = HttpClient::with_config(
//!     HttpClientConfig::builder()
//!         .base_url("https://jsonplaceholder.typicode.com")
//!         .build(),
//! )?;
//! let dashboard = Dashboard::new(
//!     Arc::new(RestProductApi::new(client, "posts")),
//!     Arc::new(MyRenderer),
//!     Arc::new(MyNotifier),
//!     DashboardOptions::default(),
//! );
//!
//! dashboard.dispatch(Command::Load).await?;
//! dashboard.dispatch(Command::NextPage).await?;
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │        Adapter (console, tests) → Command dispatch       │
//! └──────────────────────────────────────────────────────────┘
//!                              │
//! ┌────────────────────────────┴─────────────────────────────┐
//! │                        Dashboard                         │
//! │   RecordStore + PageController     Renderer / Notifier   │
//! └────────────────────────────┬─────────────────────────────┘
//!                              │
//! ┌──────────────┬─────────────┴───────┬─────────────────────┐
//! │  Debouncer   │   ProductApi (REST) │     HttpClient      │
//! └──────────────┴─────────────────────┴─────────────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Record types
pub mod types;

/// In-memory record store
pub mod store;

/// Page cursor and window derivation
pub mod pagination;

/// HTTP client
pub mod http;

/// Remote product resource
pub mod api;

/// Trailing-edge debounce
pub mod debounce;

/// Session state, commands, and collaborators
pub mod dashboard;

/// YAML configuration
pub mod config;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, Result};
pub use types::*;

pub use config::DashboardConfig;
pub use dashboard::{Command, Dashboard, DashboardOptions};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
