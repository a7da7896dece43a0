use std::sync::Mutex;

use crate::errors::CoreError;
use crate::models::session::SessionToken;

/// Name of the stored token entry. File-backed stores use it as the
/// file name; browser-backed stores should use it as the storage key.
pub const SESSION_TOKEN_KEY: &str = "token";

/// Where the session token lives between operations.
///
/// The core only ever gets, sets, and clears a single token; shells
/// supply whatever backing fits their platform (browser storage, a
/// file, plain memory). Depending on this trait instead of ambient
/// global state is what lets the gate and auth flows run under test
/// without a real persistence layer.
pub trait SessionStore: Send + Sync {
    /// The stored token, if any.
    fn get(&self) -> Result<Option<SessionToken>, CoreError>;

    /// Persist the token, replacing any previous one.
    fn set(&self, token: &SessionToken) -> Result<(), CoreError>;

    /// Remove the stored token. Clearing an absent token is a no-op.
    fn clear(&self) -> Result<(), CoreError>;
}

/// In-memory store: the session lasts as long as the process.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    token: Mutex<Option<SessionToken>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self) -> Result<Option<SessionToken>, CoreError> {
        let guard = self
            .token
            .lock()
            .map_err(|_| CoreError::Storage("session store lock poisoned".to_string()))?;
        Ok(guard.clone())
    }

    fn set(&self, token: &SessionToken) -> Result<(), CoreError> {
        let mut guard = self
            .token
            .lock()
            .map_err(|_| CoreError::Storage("session store lock poisoned".to_string()))?;
        *guard = Some(token.clone());
        Ok(())
    }

    fn clear(&self) -> Result<(), CoreError> {
        let mut guard = self
            .token
            .lock()
            .map_err(|_| CoreError::Storage("session store lock poisoned".to_string()))?;
        *guard = None;
        Ok(())
    }
}
