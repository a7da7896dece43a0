use serde::{Deserialize, Serialize};

use super::route::Redirect;

/// Opaque bearer token issued by the API on register/login.
///
/// The client never decodes it; its presence alone is what the session
/// gate checks. `Debug` never prints the value.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionToken(String);

impl SessionToken {
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// The raw token, for the `Authorization` header and the store.
    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("SessionToken(***)")
    }
}

/// What a successful register or login hands the shell: the notice to
/// show and the navigation to schedule once the notice has been seen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthSuccess {
    pub notice: String,
    pub redirect: Redirect,
}
