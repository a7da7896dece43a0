use std::sync::Arc;
use std::time::Duration;

use crate::api::traits::AuthApi;
use crate::errors::CoreError;
use crate::models::cache::CachedQuery;
use crate::models::config::ClientConfig;
use crate::models::route::{Redirect, Route};
use crate::models::session::AuthSuccess;
use crate::models::user::UserProfile;
use crate::storage::session_store::SessionStore;
use crate::validation::{validate_login, validate_signup, LoginForm, SignupForm};

/// Notice shown after a successful login.
pub const LOGIN_NOTICE: &str = "Login Successful! Welcome back.";

/// Notice shown after a successful signup.
pub const REGISTER_NOTICE: &str = "Account created! Welcome to Zenith ✨";

/// Orchestrates the auth flows: validate, call the API, persist the
/// token, and hand the shell its notice plus navigation plan.
///
/// On any failure nothing is persisted and no redirect is produced;
/// the forms stay on screen exactly as submitted.
pub struct AuthService {
    api: Arc<dyn AuthApi>,
}

impl AuthService {
    pub fn new(api: Arc<dyn AuthApi>) -> Self {
        Self { api }
    }

    /// Sign up: run the signup checks, register, store the token.
    /// The redirect lingers long enough for the notice to be seen.
    pub async fn register(
        &self,
        form: &SignupForm,
        store: &dyn SessionStore,
        config: &ClientConfig,
    ) -> Result<AuthSuccess, CoreError> {
        validate_signup(form)?;

        let token = self.api.register(form).await?;
        store.set(&token)?;
        tracing::debug!("account registered, session token stored");

        Ok(AuthSuccess {
            notice: REGISTER_NOTICE.to_string(),
            redirect: Redirect::delayed(
                Route::Dashboard,
                Duration::from_millis(config.register_redirect_delay_ms),
            ),
        })
    }

    /// Sign in: email and password checks, then the token exchange.
    pub async fn login(
        &self,
        form: &LoginForm,
        store: &dyn SessionStore,
        config: &ClientConfig,
    ) -> Result<AuthSuccess, CoreError> {
        validate_login(form)?;

        let token = self.api.login(form).await?;
        store.set(&token)?;
        tracing::debug!("login succeeded, session token stored");

        Ok(AuthSuccess {
            notice: LOGIN_NOTICE.to_string(),
            redirect: Redirect::delayed(
                Route::Dashboard,
                Duration::from_millis(config.login_redirect_delay_ms),
            ),
        })
    }

    /// The signed-in user's profile, served from cache while it is
    /// inside the configured freshness window.
    pub async fn current_user(
        &self,
        store: &dyn SessionStore,
        cache: &mut CachedQuery<UserProfile>,
        config: &ClientConfig,
    ) -> Result<UserProfile, CoreError> {
        let ttl = chrono::Duration::seconds(config.profile_ttl_secs as i64);
        if let Some(profile) = cache.get_fresh(ttl) {
            tracing::debug!("profile served from cache");
            return Ok(profile.clone());
        }

        let token = store.get()?.ok_or(CoreError::NotAuthenticated)?;
        let profile = self.api.current_user(&token).await?;
        cache.store(profile.clone());
        Ok(profile)
    }

    /// Sign out: forget the token and navigate to the login page
    /// immediately. Session-scoped caches are the caller's to drop.
    pub fn logout(&self, store: &dyn SessionStore) -> Result<Redirect, CoreError> {
        store.clear()?;
        tracing::debug!("session token cleared");
        Ok(Redirect::immediate(Route::Login))
    }
}
