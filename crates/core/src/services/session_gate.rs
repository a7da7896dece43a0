use crate::models::route::Route;
use crate::storage::session_store::SessionStore;

/// Decision for a protected mount.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateOutcome {
    /// A token is present; render the protected content.
    Allow,
    /// No token; the shell shows its loading placeholder and navigates
    /// to the route.
    Redirect(Route),
}

impl GateOutcome {
    /// True when the protected content may render.
    #[must_use]
    pub fn is_allowed(&self) -> bool {
        matches!(self, GateOutcome::Allow)
    }
}

/// Presence check guarding protected routes, parameterized by the
/// unauthenticated destination so every protected view shares one
/// guard.
///
/// Only token *presence* is checked, never validity; a stale or forged
/// token passes here and fails at the API. The check runs once per
/// mount, so a token removed mid-session goes unnoticed until the next
/// mount — a known stale-tab limitation, kept as-is.
#[derive(Debug, Clone)]
pub struct SessionGate {
    redirect_to: Route,
}

impl SessionGate {
    pub fn new(redirect_to: Route) -> Self {
        Self { redirect_to }
    }

    /// Gate a mount: `Allow` when a token is stored, `Redirect`
    /// otherwise. An empty stored token counts as absent, and a store
    /// read failure counts as signed out.
    #[must_use]
    pub fn check(&self, store: &dyn SessionStore) -> GateOutcome {
        match store.get() {
            Ok(Some(token)) if !token.expose().is_empty() => GateOutcome::Allow,
            Ok(_) => GateOutcome::Redirect(self.redirect_to),
            Err(e) => {
                tracing::warn!("session store read failed, treating as signed out: {e}");
                GateOutcome::Redirect(self.redirect_to)
            }
        }
    }
}

impl Default for SessionGate {
    fn default() -> Self {
        Self::new(Route::Login)
    }
}
