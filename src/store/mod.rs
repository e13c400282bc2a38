//! Record store module
//!
//! Holds the full working set of records for the session.
//!
//! # Overview
//!
//! The store is replaced wholesale by a load or a search, and otherwise
//! changed one record at a time (insert, update, remove). It performs no I/O
//! and knows nothing about pages or rendering.

mod record_store;

pub use record_store::RecordStore;
