//! Pagination module
//!
//! Client-side paging over the record store.
//!
//! # Overview
//!
//! The `PageController` owns the page cursor and a fixed page size. It never
//! touches the store; every call derives the window from the store it is
//! handed, so the visible slice always reflects the latest store contents.

mod controller;

pub use controller::{Direction, PageController, DEFAULT_PAGE_SIZE};
