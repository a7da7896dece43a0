use async_trait::async_trait;

use crate::errors::CoreError;
use crate::models::session::SessionToken;
use crate::models::transaction::{NewTransaction, Transaction};
use crate::models::user::UserProfile;
use crate::validation::{LoginForm, SignupForm};

/// The authentication endpoints of the API.
///
/// One implementation speaks HTTP; tests swap in mocks. If the wire
/// contract changes, only that one implementation moves.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait AuthApi: Send + Sync {
    /// Create an account; returns the session token to persist.
    async fn register(&self, form: &SignupForm) -> Result<SessionToken, CoreError>;

    /// Exchange credentials for a session token.
    async fn login(&self, form: &LoginForm) -> Result<SessionToken, CoreError>;

    /// Profile of the token's owner.
    async fn current_user(&self, token: &SessionToken) -> Result<UserProfile, CoreError>;
}

/// The transaction endpoints of the API.
#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
pub trait TransactionApi: Send + Sync {
    /// Every record for the token's owner, in the API's order
    /// (assumed chronological, oldest first).
    async fn list(&self, token: &SessionToken) -> Result<Vec<Transaction>, CoreError>;

    /// Create a record; returns it with the server-assigned id.
    async fn create(
        &self,
        token: &SessionToken,
        new: &NewTransaction,
    ) -> Result<Transaction, CoreError>;

    /// Remove a record by id.
    async fn delete(&self, token: &SessionToken, id: &str) -> Result<(), CoreError>;
}
