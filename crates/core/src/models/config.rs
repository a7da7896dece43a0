use serde::{Deserialize, Serialize};

/// API root used when no other is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:5000/api";

/// Client behavior knobs, with the stock values as defaults.
///
/// The freshness window, retry count, and redirect delays are product
/// defaults rather than requirements, so they live here instead of
/// being baked into the services.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Root of the expense-tracking API, without a trailing slash.
    pub base_url: String,

    /// How long a fetched user profile stays fresh before
    /// `current_user` goes back to the API.
    pub profile_ttl_secs: u64,

    /// Transparent retries after a failed transaction-list fetch.
    pub list_retries: u32,

    /// Pause before navigating to the dashboard after login, long
    /// enough for the success notice to be seen.
    pub login_redirect_delay_ms: u64,

    /// Pause before navigating to the dashboard after signup.
    pub register_redirect_delay_ms: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            profile_ttl_secs: 600,
            list_retries: 1,
            login_redirect_delay_ms: 1200,
            register_redirect_delay_ms: 1500,
        }
    }
}

impl ClientConfig {
    /// Stock config pointed at a different API root.
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }
}
