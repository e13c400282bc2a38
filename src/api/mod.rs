//! Remote resource module
//!
//! The five REST operations the dashboard performs against its backing
//! resource, behind the [`ProductApi`] trait so the dashboard can be driven
//! by any implementation (the REST client, or an in-memory fake in tests).
//!
//! | Operation | Method | Path                  |
//! |-----------|--------|-----------------------|
//! | list      | GET    | `/{resource}`         |
//! | search    | GET    | `/{resource}?q=...`   |
//! | create    | POST   | `/{resource}`         |
//! | update    | PUT    | `/{resource}/{id}`    |
//! | delete    | DELETE | `/{resource}/{id}`    |

mod rest;

pub use rest::{RestProductApi, DEFAULT_RESOURCE};

use crate::error::Result;
use crate::types::{NewRecord, Record, RecordId, RecordUpdate};
use async_trait::async_trait;

/// Operations against the remote product resource
///
/// Every call either succeeds or returns a transport error; none retries.
#[async_trait]
pub trait ProductApi: Send + Sync {
    /// Fetch the full collection
    async fn list(&self) -> Result<Vec<Record>>;

    /// Fetch the records matching `query`
    async fn search(&self, query: &str) -> Result<Vec<Record>>;

    /// Create a record, returning it with its assigned id
    async fn create(&self, record: &NewRecord) -> Result<Record>;

    /// Replace the title and body of an existing record
    async fn update(&self, record: &RecordUpdate) -> Result<()>;

    /// Delete a record
    async fn delete(&self, id: RecordId) -> Result<()>;
}
