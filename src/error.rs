//! Error types for the product dashboard
//!
//! All public APIs return `Result<T, Error>` where Error is defined here.
//! Errors fall into two families: validation failures caught before any
//! network call, and transport failures from the remote resource.

use thiserror::Error;

/// The main error type for the product dashboard
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Validation Errors
    // ============================================================================
    #[error("{message}")]
    Validation { message: String },

    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Missing required config field: {field}")]
    MissingConfigField { field: String },

    #[error("Failed to parse YAML: {0}")]
    YamlParse(#[from] serde_yaml::Error),

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    // ============================================================================
    // HTTP Errors
    // ============================================================================
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("Request timeout after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    // ============================================================================
    // I/O Errors
    // ============================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ============================================================================
    // Generic Errors
    // ============================================================================
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create a validation error
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a missing field error
    pub fn missing_field(field: impl Into<String>) -> Self {
        Self::MissingConfigField {
            field: field.into(),
        }
    }

    /// Create an HTTP status error
    pub fn http_status(status: u16, body: impl Into<String>) -> Self {
        Self::HttpStatus {
            status,
            body: body.into(),
        }
    }

    /// One-line form for user-facing notices
    ///
    /// Status errors keep only the status line; response bodies can be whole
    /// HTML error pages.
    pub fn brief(&self) -> String {
        match self {
            Error::HttpStatus { status, .. } => {
                match reqwest::StatusCode::from_u16(*status)
                    .ok()
                    .and_then(|s| s.canonical_reason())
                {
                    Some(reason) => format!("HTTP {status} {reason}"),
                    None => format!("HTTP {status}"),
                }
            }
            other => other.to_string(),
        }
    }

    /// True for input that was rejected before reaching the network
    pub fn is_validation(&self) -> bool {
        matches!(self, Error::Validation { .. })
    }

    /// True for failures talking to the remote resource
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            Error::Http(_)
                | Error::HttpStatus { .. }
                | Error::Timeout { .. }
                | Error::InvalidUrl(_)
                | Error::JsonParse(_)
        )
    }
}

/// Result type alias for the product dashboard
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, message: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, message: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", message.into(), inner))
        })
    }

    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", f(), inner))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::validation("Title and body are required.");
        assert_eq!(err.to_string(), "Title and body are required.");

        let err = Error::config("bad page size");
        assert_eq!(err.to_string(), "Configuration error: bad page size");

        let err = Error::missing_field("base_url");
        assert_eq!(err.to_string(), "Missing required config field: base_url");

        let err = Error::http_status(404, "Not found");
        assert_eq!(err.to_string(), "HTTP 404: Not found");
    }

    #[test]
    fn test_error_brief_drops_response_body() {
        let err = Error::http_status(502, "<html><body>Bad gateway page</body></html>");
        assert_eq!(err.brief(), "HTTP 502 Bad Gateway");

        let err = Error::http_status(599, "whatever");
        assert_eq!(err.brief(), "HTTP 599");

        let err = Error::Timeout { timeout_ms: 50 };
        assert_eq!(err.brief(), err.to_string());
    }

    #[test]
    fn test_error_taxonomy() {
        assert!(Error::validation("missing").is_validation());
        assert!(!Error::validation("missing").is_transport());

        assert!(Error::http_status(500, "").is_transport());
        assert!(Error::Timeout { timeout_ms: 10 }.is_transport());
        assert!(!Error::http_status(404, "").is_validation());

        assert!(!Error::config("x").is_transport());
        assert!(!Error::config("x").is_validation());
    }

    #[test]
    fn test_result_context() {
        let result: Result<()> = Err(Error::config("inner"));
        let with_context = result.context("outer");
        assert!(with_context
            .unwrap_err()
            .to_string()
            .contains("outer: Configuration error: inner"));
    }

    #[test]
    fn test_result_with_context_io() {
        let result: std::result::Result<(), std::io::Error> = Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "missing",
        ));
        let err = result
            .with_context(|| "Failed to read config".to_string())
            .unwrap_err();
        assert_eq!(err.to_string(), "Failed to read config: IO error: missing");
    }
}
