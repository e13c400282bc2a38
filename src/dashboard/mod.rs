//! Dashboard module
//!
//! Ties the record store, page cursor, remote resource, and collaborators
//! together.
//!
//! # Overview
//!
//! - `Dashboard` - Runs each user intent against the remote resource and
//!   reconciles the in-memory state with the result
//! - `DashboardState` - Store plus page cursor, the only mutable session state
//! - `Command` - Dispatch interface for UI adapters
//! - `Renderer` / `Notifier` - Output collaborators
//!
//! Loads and searches replace the store and reset to page 1. Creates, edits
//! and deletes touch only the affected record and keep the current page.
//! Every failure produces one error notice and leaves state untouched.

mod types;

pub use types::{
    Command, DashboardState, Notice, NoticeKind, Notifier, PageView, Renderer,
};

use crate::api::ProductApi;
use crate::debounce::Debouncer;
use crate::error::{Error, Result};
use crate::pagination::Direction;
use crate::types::{NewRecord, Record, RecordId, RecordUpdate};
use std::num::NonZeroUsize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

// ============================================================================
// User-facing messages
// ============================================================================

pub const MSG_LOAD_FAILED: &str = "Failed to load products";
pub const MSG_SEARCH_FAILED: &str = "Search failed";
pub const MSG_CREATE_REQUIRED: &str = "Title and description are required.";
pub const MSG_EDIT_REQUIRED: &str = "Title and body are required.";
pub const MSG_ADDED: &str = "Product added!";
pub const MSG_UPDATED: &str = "Product updated!";
pub const MSG_DELETED: &str = "Product deleted!";

/// Settings the dashboard needs from configuration
#[derive(Debug, Clone)]
pub struct DashboardOptions {
    /// Records per page
    pub page_size: NonZeroUsize,
    /// Search quiescence window
    pub search_debounce: Duration,
    /// `userId` sent with creates and updates
    pub user_id: u64,
}

impl Default for DashboardOptions {
    fn default() -> Self {
        Self {
            page_size: NonZeroUsize::new(crate::pagination::DEFAULT_PAGE_SIZE)
                .unwrap_or(NonZeroUsize::MIN),
            search_debounce: crate::debounce::DEFAULT_DEBOUNCE,
            user_id: 1,
        }
    }
}

/// Product dashboard session
///
/// Cloning is cheap and every clone shares the same session state.
#[derive(Clone)]
pub struct Dashboard {
    api: Arc<dyn ProductApi>,
    renderer: Arc<dyn Renderer>,
    notifier: Arc<dyn Notifier>,
    state: Arc<RwLock<DashboardState>>,
    /// Latest ticket issued to a load or search
    issued_seq: Arc<AtomicU64>,
    /// Ticket of the result currently in the store
    applied_seq: Arc<AtomicU64>,
    search_debouncer: Debouncer,
    user_id: u64,
}

impl Dashboard {
    /// Create a dashboard with an empty store on page 1
    pub fn new(
        api: Arc<dyn ProductApi>,
        renderer: Arc<dyn Renderer>,
        notifier: Arc<dyn Notifier>,
        options: DashboardOptions,
    ) -> Self {
        Self {
            api,
            renderer,
            notifier,
            state: Arc::new(RwLock::new(DashboardState::new(options.page_size))),
            issued_seq: Arc::new(AtomicU64::new(0)),
            applied_seq: Arc::new(AtomicU64::new(0)),
            search_debouncer: Debouncer::new(options.search_debounce),
            user_id: options.user_id,
        }
    }

    /// Snapshot of the current page
    pub async fn view(&self) -> PageView {
        self.state.read().await.view()
    }

    /// Snapshot of the whole session state
    #[cfg(test)]
    pub(crate) async fn snapshot(&self) -> DashboardState {
        self.state.read().await.clone()
    }

    /// Run one command
    ///
    /// `Search` is debounced and returns as soon as it is scheduled.
    pub async fn dispatch(&self, command: Command) -> Result<()> {
        match command {
            Command::Load => self.load().await.map(|_| ()),
            Command::Search(query) => {
                self.trigger_search(query);
                Ok(())
            }
            Command::Create { title, body } => self.create(title, body).await.map(|_| ()),
            Command::Edit { id, title, body } => self.edit(id, title, body).await,
            Command::Delete(id) => self.delete(id).await,
            Command::NextPage => {
                self.next_page().await;
                Ok(())
            }
            Command::PrevPage => {
                self.prev_page().await;
                Ok(())
            }
        }
    }

    // ========================================================================
    // Wholesale replace
    // ========================================================================

    /// Fetch the full collection and show page 1
    ///
    /// Returns `Ok(false)` when the response arrived after the result of a
    /// newer load or search was already shown, and was therefore dropped.
    pub async fn load(&self) -> Result<bool> {
        let ticket = self.next_ticket();
        match self.api.list().await {
            Ok(records) => Ok(self.apply_replace(ticket, records, "load").await),
            Err(e) => Err(self.fail(MSG_LOAD_FAILED.to_string(), e)),
        }
    }

    /// Search immediately and show page 1 of the results
    ///
    /// Same return convention as [`Dashboard::load`].
    pub async fn search(&self, query: &str) -> Result<bool> {
        let query = query.trim();
        let ticket = self.next_ticket();
        match self.api.search(query).await {
            Ok(records) => Ok(self.apply_replace(ticket, records, "search").await),
            Err(e) => Err(self.fail(MSG_SEARCH_FAILED.to_string(), e)),
        }
    }

    /// Schedule a debounced search
    ///
    /// Triggers inside the quiescence window collapse into one search for the
    /// most recent query. Must be called from within a tokio runtime.
    pub fn trigger_search(&self, query: impl Into<String>) {
        let query = query.into();
        let dashboard = self.clone();
        self.search_debouncer.call(move || async move {
            // The notice has already been shown
            let _ = dashboard.search(&query).await;
        });
    }

    /// Wait for a pending debounced search to complete
    pub async fn settle(&self) {
        if self.search_debouncer.is_pending() {
            debug!("Waiting for pending search");
        }
        self.search_debouncer.settle().await;
    }

    // ========================================================================
    // Single-record mutations
    // ========================================================================

    /// Create a record and show it at the front of the list
    pub async fn create(&self, title: Option<String>, body: Option<String>) -> Result<Record> {
        let (Some(title), Some(body)) = (present(title), present(body)) else {
            return Err(self.reject(MSG_CREATE_REQUIRED));
        };

        let new = NewRecord {
            title,
            body,
            user_id: self.user_id,
        };
        let created = match self.api.create(&new).await {
            Ok(record) => record,
            Err(e) => {
                return Err(self.fail(format!("Error adding product: {}", e.brief()), e));
            }
        };

        info!("Created record {}", created.id);
        let view = {
            let mut state = self.state.write().await;
            state.store.insert_front(created.clone());
            state.view()
        };
        self.notifier.notify(&Notice::success(MSG_ADDED));
        self.renderer.reset_form();
        self.renderer.render(&view);
        Ok(created)
    }

    /// Replace the title and body of a record
    pub async fn edit(
        &self,
        id: RecordId,
        title: Option<String>,
        body: Option<String>,
    ) -> Result<()> {
        let (Some(title), Some(body)) = (present(title), present(body)) else {
            return Err(self.reject(MSG_EDIT_REQUIRED));
        };

        let update = RecordUpdate {
            id,
            title,
            body,
            user_id: self.user_id,
        };
        if let Err(e) = self.api.update(&update).await {
            return Err(self.fail(format!("Error updating product: {}", e.brief()), e));
        }

        let view = {
            let mut state = self.state.write().await;
            let matched = state.store.update(id, &update.to_patch());
            info!("Updated record {} ({} local matches)", id, matched);
            state.view()
        };
        self.notifier.notify(&Notice::success(MSG_UPDATED));
        self.renderer.render(&view);
        Ok(())
    }

    /// Delete a record; the current page is kept even if it becomes empty
    pub async fn delete(&self, id: RecordId) -> Result<()> {
        if let Err(e) = self.api.delete(id).await {
            return Err(self.fail(format!("Error deleting product: {}", e.brief()), e));
        }

        let view = {
            let mut state = self.state.write().await;
            let removed = state.store.remove(id);
            info!("Deleted record {} ({} local matches)", id, removed);
            state.view()
        };
        self.notifier.notify(&Notice::success(MSG_DELETED));
        self.renderer.render(&view);
        Ok(())
    }

    // ========================================================================
    // Navigation
    // ========================================================================

    /// Go to the next page; `false` on the last page
    pub async fn next_page(&self) -> bool {
        self.change_page(Direction::Next).await
    }

    /// Go to the previous page; `false` on page 1
    pub async fn prev_page(&self) -> bool {
        self.change_page(Direction::Previous).await
    }

    async fn change_page(&self, direction: Direction) -> bool {
        let view = {
            let mut state = self.state.write().await;
            if !state.advance(direction) {
                return false;
            }
            state.view()
        };
        self.renderer.render(&view);
        true
    }

    // ========================================================================
    // Helpers
    // ========================================================================

    fn next_ticket(&self) -> u64 {
        self.issued_seq.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Install a load/search result unless a newer one is already shown
    ///
    /// Requests that failed never advance `applied_seq`, so they cannot
    /// shadow an older request that succeeded.
    async fn apply_replace(&self, ticket: u64, records: Vec<Record>, kind: &str) -> bool {
        let view = {
            let mut state = self.state.write().await;
            let shown = self.applied_seq.load(Ordering::SeqCst);
            if ticket < shown {
                warn!(
                    "Discarding stale {} response (ticket {}, showing {})",
                    kind, ticket, shown
                );
                return false;
            }
            self.applied_seq.store(ticket, Ordering::SeqCst);
            debug!("Applying {} result with {} records", kind, records.len());
            state.replace(records);
            state.view()
        };
        self.renderer.render(&view);
        true
    }

    fn reject(&self, message: &str) -> Error {
        debug!("Rejected input: {}", message);
        self.notifier.notify(&Notice::error(message));
        Error::validation(message)
    }

    fn fail(&self, message: String, error: Error) -> Error {
        warn!("{}: {}", message, error);
        self.notifier.notify(&Notice::error(message));
        error
    }
}

impl std::fmt::Debug for Dashboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dashboard")
            .field("user_id", &self.user_id)
            .field("search_debouncer", &self.search_debouncer)
            .finish_non_exhaustive()
    }
}

/// `None` for absent or empty input
fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}
