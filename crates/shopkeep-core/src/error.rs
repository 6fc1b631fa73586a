// ── Core error types ──
//
// User-facing errors from shopkeep-core. Consumers never see HTTP
// status codes or JSON parse failures directly: every transport-layer
// failure collapses into a single fetch-error message, which is also
// what query state stores. Nothing here is fatal to the process.

use thiserror::Error;

/// Unified error type for the core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Network/transport failure or non-2xx response. The one error kind
    /// query consumers ever observe.
    #[error("Fetch failed: {message}")]
    Fetch { message: String },

    /// A required draft field was empty at submission time.
    #[error("Validation failed: {field} is required")]
    Validation { field: &'static str },

    /// Bad configuration (unparseable base URL and the like).
    #[error("Configuration error: {message}")]
    Config { message: String },
}

// ── Conversion from transport-layer errors ───────────────────────────

impl From<shopkeep_api::Error> for CoreError {
    fn from(err: shopkeep_api::Error) -> Self {
        match err {
            shopkeep_api::Error::InvalidUrl(e) => CoreError::Config {
                message: format!("Invalid URL: {e}"),
            },
            other => CoreError::Fetch {
                message: other.to_string(),
            },
        }
    }
}
