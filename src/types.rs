//! Record types shared across the dashboard
//!
//! A record is keyed by its `id`; `title` and `body` are the user-editable
//! fields. Anything else the remote resource sends is carried along untouched.

use serde::{Deserialize, Serialize};

// ============================================================================
// Type Aliases
// ============================================================================

/// JSON value type (re-exported from serde_json)
pub type JsonValue = serde_json::Value;

/// JSON object type
pub type JsonObject = serde_json::Map<String, JsonValue>;

/// Identifier assigned by the remote resource
pub type RecordId = u64;

// ============================================================================
// Record
// ============================================================================

/// One product record as served by the remote resource
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Stable key assigned by the remote resource
    pub id: RecordId,

    /// Short title
    #[serde(default)]
    pub title: String,

    /// Description text
    #[serde(default)]
    pub body: String,

    /// Fields the dashboard does not interpret (e.g. `userId`)
    #[serde(flatten)]
    pub extra: JsonObject,
}

impl Record {
    /// Create a record with no extra fields
    pub fn new(id: RecordId, title: impl Into<String>, body: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            body: body.into(),
            extra: JsonObject::new(),
        }
    }

    /// Return a copy with `patch` merged over this record
    #[must_use]
    pub fn patched(&self, patch: &RecordPatch) -> Self {
        let mut record = self.clone();
        if let Some(ref title) = patch.title {
            record.title.clone_from(title);
        }
        if let Some(ref body) = patch.body {
            record.body.clone_from(body);
        }
        record
    }
}

// ============================================================================
// Patch
// ============================================================================

/// Partial record; `None` fields keep the original value
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordPatch {
    pub title: Option<String>,
    pub body: Option<String>,
}

impl RecordPatch {
    /// Create an empty patch
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the title
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the body
    #[must_use]
    pub fn body(mut self, body: impl Into<String>) -> Self {
        self.body = Some(body.into());
        self
    }
}

// ============================================================================
// Wire Bodies
// ============================================================================

/// Request body for creating a record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewRecord {
    pub title: String,
    pub body: String,
    pub user_id: u64,
}

/// Request body for replacing a record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordUpdate {
    pub id: RecordId,
    pub title: String,
    pub body: String,
    pub user_id: u64,
}

impl RecordUpdate {
    /// The store-side patch this update corresponds to
    pub fn to_patch(&self) -> RecordPatch {
        RecordPatch::new()
            .title(self.title.clone())
            .body(self.body.clone())
    }
}
