pub mod api;
pub mod errors;
pub mod models;
pub mod services;
pub mod storage;
pub mod validation;

use std::sync::Arc;

use api::http::HttpApi;
use api::traits::{AuthApi, TransactionApi};
use models::budget::BudgetSummary;
use models::cache::CachedQuery;
use models::config::ClientConfig;
use models::dashboard::DashboardState;
use models::route::{Redirect, Route};
use models::session::AuthSuccess;
use models::transaction::{NewTransaction, Transaction};
use models::user::UserProfile;
use services::auth_service::AuthService;
use services::budget_service::BudgetService;
use services::session_gate::{GateOutcome, SessionGate};
use services::transaction_service::TransactionService;
use storage::session_store::{MemorySessionStore, SessionStore};
use validation::{LoginForm, SignupForm};

use errors::CoreError;

/// Main entry point for the Zenith client core.
/// Holds the session store, query caches, and the services driving the
/// auth and dashboard flows; shells render what it returns.
#[must_use]
pub struct ZenithClient {
    config: ClientConfig,
    store: Box<dyn SessionStore>,
    gate: SessionGate,
    auth_service: AuthService,
    transaction_service: TransactionService,
    budget_service: BudgetService,
    profile_cache: CachedQuery<UserProfile>,
    list_cache: CachedQuery<Vec<Transaction>>,
    dashboard: DashboardState,
}

impl std::fmt::Debug for ZenithClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ZenithClient")
            .field("base_url", &self.config.base_url)
            .field("signed_in", &self.has_session())
            .field("cached_profile", &self.profile_cache.is_populated())
            .field("cached_transactions", &self.list_cache.is_populated())
            .finish()
    }
}

impl ZenithClient {
    /// Client speaking HTTP to the API named in `config`, with the
    /// given session store.
    pub fn new(config: ClientConfig, store: Box<dyn SessionStore>) -> Self {
        let http = Arc::new(HttpApi::new(config.base_url.clone()));
        Self::build(config, store, http.clone(), http)
    }

    /// Client with injected API implementations (tests, offline shells).
    pub fn with_api(
        config: ClientConfig,
        store: Box<dyn SessionStore>,
        auth_api: Arc<dyn AuthApi>,
        transaction_api: Arc<dyn TransactionApi>,
    ) -> Self {
        Self::build(config, store, auth_api, transaction_api)
    }

    /// Client with defaults everywhere: stock config, in-memory session.
    pub fn in_memory() -> Self {
        Self::new(ClientConfig::default(), Box::new(MemorySessionStore::new()))
    }

    /// Client persisting its session under `dir` (native shells).
    #[cfg(not(target_arch = "wasm32"))]
    pub fn with_session_dir(
        config: ClientConfig,
        dir: impl Into<std::path::PathBuf>,
    ) -> Result<Self, CoreError> {
        let store = storage::file::FileSessionStore::new(dir)?;
        Ok(Self::new(config, Box::new(store)))
    }

    // ── Session Gate ────────────────────────────────────────────────

    /// Decide whether a protected mount may render. Reads the store
    /// once; later token changes are not observed until the next call.
    #[must_use]
    pub fn check_session(&self) -> GateOutcome {
        self.gate.check(self.store.as_ref())
    }

    /// True when a session token is currently stored.
    #[must_use]
    pub fn has_session(&self) -> bool {
        self.check_session().is_allowed()
    }

    // ── Auth ────────────────────────────────────────────────────────

    /// Create an account and open a session.
    /// Validation failures surface before any request is made.
    pub async fn register(&mut self, form: &SignupForm) -> Result<AuthSuccess, CoreError> {
        let success = self
            .auth_service
            .register(form, self.store.as_ref(), &self.config)
            .await?;
        self.reset_session_caches();
        Ok(success)
    }

    /// Sign in with existing credentials.
    pub async fn login(&mut self, form: &LoginForm) -> Result<AuthSuccess, CoreError> {
        let success = self
            .auth_service
            .login(form, self.store.as_ref(), &self.config)
            .await?;
        self.reset_session_caches();
        Ok(success)
    }

    /// The signed-in user's profile, cached for the configured
    /// freshness window (10 minutes by default).
    pub async fn current_user(&mut self) -> Result<UserProfile, CoreError> {
        self.auth_service
            .current_user(self.store.as_ref(), &mut self.profile_cache, &self.config)
            .await
    }

    /// Sign out: forget the token and everything fetched with it, and
    /// navigate straight to the login page.
    pub fn logout(&mut self) -> Result<Redirect, CoreError> {
        let redirect = self.auth_service.logout(self.store.as_ref())?;
        self.reset_session_caches();
        self.dashboard = DashboardState::new();
        Ok(redirect)
    }

    // ── Transactions ────────────────────────────────────────────────

    /// Every transaction, newest first. Served from the cache when it
    /// holds a value; a miss fetches and fills the cache, retrying
    /// once transparently by default.
    pub async fn transactions(&mut self) -> Result<Vec<Transaction>, CoreError> {
        let mut list = self
            .transaction_service
            .list(self.store.as_ref(), &mut self.list_cache, &self.config)
            .await?;
        list.reverse(); // API order is oldest-first; display wants newest-first
        Ok(list)
    }

    /// Create an expense directly, without the draft form. Positive
    /// amounts are flipped negative before submission.
    pub async fn add_expense(
        &mut self,
        description: impl Into<String>,
        amount: f64,
        category: impl Into<String>,
    ) -> Result<Transaction, CoreError> {
        let new = NewTransaction::expense(description, amount, category);
        self.transaction_service
            .create(self.store.as_ref(), &mut self.list_cache, &new)
            .await
    }

    /// Delete a record by id.
    pub async fn remove_transaction(&mut self, id: &str) -> Result<(), CoreError> {
        self.transaction_service
            .delete(self.store.as_ref(), &mut self.list_cache, id)
            .await
    }

    // ── Dashboard Flow ──────────────────────────────────────────────

    /// Client-local dashboard state.
    #[must_use]
    pub fn dashboard(&self) -> &DashboardState {
        &self.dashboard
    }

    /// Mutable dashboard state, for draft edits and modal toggles.
    pub fn dashboard_mut(&mut self) -> &mut DashboardState {
        &mut self.dashboard
    }

    /// Submit the add-expense form.
    ///
    /// The draft's amount string is parsed here; input that is not a
    /// finite number is a validation failure and no request is made.
    /// On success the modal closes and the draft resets. On failure
    /// modal, draft, and cached list all stay exactly as they were.
    pub async fn submit_new_expense(&mut self) -> Result<Transaction, CoreError> {
        let amount = self
            .dashboard
            .draft
            .amount
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|a| a.is_finite())
            .ok_or_else(|| CoreError::Validation("Amount must be a number.".to_string()))?;

        let new = NewTransaction::expense(
            self.dashboard.draft.description.clone(),
            amount,
            self.dashboard.draft.category.clone(),
        );
        let created = self
            .transaction_service
            .create(self.store.as_ref(), &mut self.list_cache, &new)
            .await?;

        self.dashboard.finish_add();
        Ok(created)
    }

    /// Delete the record armed for confirmation, if any.
    ///
    /// The pending selection is cleared whether or not the call
    /// succeeds, so the confirmation dialog never sticks around; the
    /// cached list is only dropped when the delete actually happened.
    pub async fn confirm_pending_delete(&mut self) -> Result<(), CoreError> {
        let Some(id) = self.dashboard.pending_delete.take() else {
            return Ok(());
        };

        self.transaction_service
            .delete(self.store.as_ref(), &mut self.list_cache, &id)
            .await
    }

    // ── Budget ──────────────────────────────────────────────────────

    /// Change the monthly ceiling the budget view compares against.
    /// Client-local and session-scoped; the API never sees it.
    pub fn set_monthly_budget(&mut self, budget: f64) {
        self.dashboard.monthly_budget = budget;
    }

    /// Spending-versus-budget view over the current list, fetching it
    /// if the cache is empty.
    pub async fn budget_summary(&mut self) -> Result<BudgetSummary, CoreError> {
        let transactions = self
            .transaction_service
            .list(self.store.as_ref(), &mut self.list_cache, &self.config)
            .await?;
        Ok(self
            .budget_service
            .summarize(&transactions, self.dashboard.monthly_budget))
    }

    // ── Cache Management ────────────────────────────────────────────

    /// Drop the cached transaction list; the next read refetches.
    pub fn invalidate_transactions(&mut self) {
        self.list_cache.invalidate();
    }

    /// Drop the cached profile; the next read refetches.
    pub fn invalidate_profile(&mut self) {
        self.profile_cache.invalidate();
    }

    /// True when the transaction list would be served from cache.
    #[must_use]
    pub fn has_cached_transactions(&self) -> bool {
        self.list_cache.is_populated()
    }

    /// The active configuration.
    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    // ── Internal ────────────────────────────────────────────────────

    /// Session-scoped data never outlives the session it was fetched
    /// in: both caches drop whenever a session opens or closes.
    fn reset_session_caches(&mut self) {
        self.profile_cache.invalidate();
        self.list_cache.invalidate();
    }

    fn build(
        config: ClientConfig,
        store: Box<dyn SessionStore>,
        auth_api: Arc<dyn AuthApi>,
        transaction_api: Arc<dyn TransactionApi>,
    ) -> Self {
        Self {
            auth_service: AuthService::new(auth_api),
            transaction_service: TransactionService::new(transaction_api),
            budget_service: BudgetService::new(),
            gate: SessionGate::new(Route::Login),
            profile_cache: CachedQuery::new(),
            list_cache: CachedQuery::new(),
            dashboard: DashboardState::new(),
            config,
            store,
        }
    }
}
