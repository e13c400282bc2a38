//! HTTP client module
//!
//! Thin wrapper over reqwest used by the remote resource client.
//!
//! # Features
//!
//! - **Base URL joining**: relative paths resolve against a configured base
//! - **Default headers**: applied to every request
//! - **Status classification**: any non-2xx response becomes an error
//!
//! Each call makes exactly one attempt; there is no retry or backoff.

mod client;

pub use client::{HttpClient, HttpClientConfig, HttpClientConfigBuilder, RequestConfig};
