//! Dashboard types: state, commands, and collaborator traits

use crate::pagination::{Direction, PageController};
use crate::store::RecordStore;
use crate::types::{Record, RecordId};
use std::num::NonZeroUsize;

// ============================================================================
// State
// ============================================================================

/// Store and page cursor for one session
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardState {
    pub store: RecordStore,
    pub pager: PageController,
}

impl DashboardState {
    /// Empty store positioned on page 1
    pub fn new(page_size: NonZeroUsize) -> Self {
        Self {
            store: RecordStore::new(),
            pager: PageController::new(page_size),
        }
    }

    /// Install a fresh result set and go back to page 1
    pub fn replace(&mut self, records: Vec<Record>) {
        self.store.replace_all(records);
        self.pager.reset();
    }

    /// Move one page; `true` if the cursor moved
    pub fn advance(&mut self, direction: Direction) -> bool {
        self.pager.advance(direction, &self.store)
    }

    /// Snapshot of what should be on screen
    pub fn view(&self) -> PageView {
        PageView {
            records: self.pager.current_slice(&self.store).to_vec(),
            label: self.pager.page_label(),
            page: self.pager.current_page(),
            max_page: self.pager.max_page(&self.store),
            total: self.store.len(),
        }
    }
}

/// The visible page handed to the renderer
#[derive(Debug, Clone, PartialEq)]
pub struct PageView {
    /// Records on the current page
    pub records: Vec<Record>,
    /// "Page N"
    pub label: String,
    /// Current page (1-indexed)
    pub page: usize,
    /// Last reachable page
    pub max_page: usize,
    /// Records in the whole store
    pub total: usize,
}

impl PageView {
    /// Ids on the current page, in display order
    pub fn ids(&self) -> Vec<RecordId> {
        self.records.iter().map(|r| r.id).collect()
    }
}

// ============================================================================
// Commands
// ============================================================================

/// User intents an adapter can dispatch
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Fetch the full collection
    Load,
    /// Debounced search
    Search(String),
    /// Create from form input
    Create {
        title: Option<String>,
        body: Option<String>,
    },
    /// Edit a record with prompted values
    Edit {
        id: RecordId,
        title: Option<String>,
        body: Option<String>,
    },
    /// Delete a record
    Delete(RecordId),
    /// Next page
    NextPage,
    /// Previous page
    PrevPage,
}

// ============================================================================
// Notices
// ============================================================================

/// Severity of a user notice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// A short message surfaced to the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    /// Create a success notice
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.into(),
        }
    }

    /// Create an error notice
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Error,
            message: message.into(),
        }
    }

    /// Check if this is an error notice
    pub fn is_error(&self) -> bool {
        self.kind == NoticeKind::Error
    }
}

// ============================================================================
// Collaborators
// ============================================================================

/// Displays the current page
pub trait Renderer: Send + Sync {
    /// Draw the given page
    fn render(&self, view: &PageView);

    /// Clear the create form after a successful create
    fn reset_form(&self) {}
}

/// Shows notices to the user
pub trait Notifier: Send + Sync {
    /// Show one notice
    fn notify(&self, notice: &Notice);
}
