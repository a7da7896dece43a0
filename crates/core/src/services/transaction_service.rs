use std::sync::Arc;

use crate::api::traits::TransactionApi;
use crate::errors::CoreError;
use crate::models::cache::CachedQuery;
use crate::models::config::ClientConfig;
use crate::models::transaction::{NewTransaction, Transaction};
use crate::storage::session_store::SessionStore;

/// Notice shown after a record is created.
pub const CREATE_NOTICE: &str = "Expense logged! ₦";

/// Notice shown after a record is deleted.
pub const DELETE_NOTICE: &str = "Log removed";

/// Client for the transaction endpoints, enforcing the dashboard's
/// caching discipline: reads come from the cache while it holds a
/// value, and mutations invalidate it only after the API confirms.
/// The cached list is never patched in place.
pub struct TransactionService {
    api: Arc<dyn TransactionApi>,
}

impl TransactionService {
    pub fn new(api: Arc<dyn TransactionApi>) -> Self {
        Self { api }
    }

    /// The full transaction list, in API order (oldest first).
    ///
    /// Served from the cache when populated. A miss fetches from the
    /// API, retrying `config.list_retries` times transparently before
    /// surfacing the failure; a failed fetch leaves the cache empty.
    pub async fn list(
        &self,
        store: &dyn SessionStore,
        cache: &mut CachedQuery<Vec<Transaction>>,
        config: &ClientConfig,
    ) -> Result<Vec<Transaction>, CoreError> {
        if let Some(cached) = cache.get() {
            tracing::debug!("transaction list served from cache ({} records)", cached.len());
            return Ok(cached.clone());
        }

        let token = store.get()?.ok_or(CoreError::NotAuthenticated)?;

        let mut last_error = None;
        for attempt in 0..=config.list_retries {
            match self.api.list(&token).await {
                Ok(list) => {
                    cache.store(list.clone());
                    return Ok(list);
                }
                Err(e) => {
                    if attempt < config.list_retries {
                        tracing::warn!("transaction list fetch failed, retrying: {e}");
                    }
                    last_error = Some(e);
                }
            }
        }

        Err(last_error
            .unwrap_or_else(|| CoreError::Network("transaction list fetch failed".to_string())))
    }

    /// Create a record, then drop the cached list so the next read
    /// refetches. A failure leaves the cache exactly as it was.
    pub async fn create(
        &self,
        store: &dyn SessionStore,
        cache: &mut CachedQuery<Vec<Transaction>>,
        new: &NewTransaction,
    ) -> Result<Transaction, CoreError> {
        let token = store.get()?.ok_or(CoreError::NotAuthenticated)?;
        let created = self.api.create(&token, new).await?;
        cache.invalidate();
        tracing::debug!("record created, list cache invalidated");
        Ok(created)
    }

    /// Delete a record by id, invalidating the cached list only once
    /// the API confirms.
    pub async fn delete(
        &self,
        store: &dyn SessionStore,
        cache: &mut CachedQuery<Vec<Transaction>>,
        id: &str,
    ) -> Result<(), CoreError> {
        let token = store.get()?.ok_or(CoreError::NotAuthenticated)?;
        self.api.delete(&token, id).await?;
        cache.invalidate();
        tracing::debug!("record {id} deleted, list cache invalidated");
        Ok(())
    }
}
