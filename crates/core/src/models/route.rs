use serde::{Deserialize, Serialize};
use std::time::Duration;

/// The client routes the core names in gate decisions and navigation
/// plans. Rendering and actual navigation belong to the shell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Route {
    /// Marketing landing page, unauthenticated.
    Landing,
    Login,
    Signup,
    /// Protected; reachable only through the session gate.
    Dashboard,
}

impl Route {
    /// URL path for this route.
    #[must_use]
    pub fn path(&self) -> &'static str {
        match self {
            Route::Landing => "/",
            Route::Login => "/login",
            Route::Signup => "/signup",
            Route::Dashboard => "/dashboard",
        }
    }
}

impl std::fmt::Display for Route {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.path())
    }
}

/// A navigation the shell should perform, possibly after a pause.
/// Auth flows linger on the success notice before moving on; logout
/// and the gate navigate immediately.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Redirect {
    pub to: Route,
    /// How long to wait before navigating.
    pub after: Duration,
}

impl Redirect {
    /// Navigate right away.
    #[must_use]
    pub fn immediate(to: Route) -> Self {
        Self {
            to,
            after: Duration::ZERO,
        }
    }

    /// Navigate once `after` has elapsed.
    #[must_use]
    pub fn delayed(to: Route, after: Duration) -> Self {
        Self { to, after }
    }
}
