use thiserror::Error;

/// Unified error type for the entire zenith-core library.
/// Every public function returns `Result<T, CoreError>`.
#[derive(Debug, Error)]
pub enum CoreError {
    // ── Client-side validation ──────────────────────────────────────
    #[error("{0}")]
    Validation(String),

    // ── API / Network ───────────────────────────────────────────────
    #[error("API error ({status}): {message}")]
    Api {
        status: u16,
        message: String,
    },

    #[error("Network error: {0}")]
    Network(String),

    #[error("Deserialization error: {0}")]
    Deserialization(String),

    // ── Session ─────────────────────────────────────────────────────
    #[error("Not authenticated — no session token stored")]
    NotAuthenticated,

    #[error("Session storage error: {0}")]
    Storage(String),
}

// ── Conversion helpers (From impls) ─────────────────────────────────

impl From<std::io::Error> for CoreError {
    fn from(e: std::io::Error) -> Self {
        CoreError::Storage(e.to_string())
    }
}

impl From<serde_json::Error> for CoreError {
    fn from(e: serde_json::Error) -> Self {
        CoreError::Deserialization(e.to_string())
    }
}

impl From<reqwest::Error> for CoreError {
    fn from(e: reqwest::Error) -> Self {
        // Sanitize error message: strip query parameters from URLs so a
        // bearer token or other credential never ends up in a log line.
        let msg = e.to_string();
        let sanitized = if let Some(idx) = msg.find('?') {
            format!("{}?<query redacted>", &msg[..idx])
        } else {
            msg
        };
        CoreError::Network(sanitized)
    }
}

impl CoreError {
    /// True when the failure came from a client-side rule rather than
    /// the API or the transport. Shells use this to keep the offending
    /// form on screen instead of showing a generic failure notice.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, CoreError::Validation(_))
    }
}
