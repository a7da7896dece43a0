use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use zenith_core::api::traits::{AuthApi, TransactionApi};
use zenith_core::errors::CoreError;
use zenith_core::models::config::ClientConfig;
use zenith_core::models::route::Route;
use zenith_core::models::session::SessionToken;
use zenith_core::models::transaction::{NewTransaction, Transaction};
use zenith_core::models::user::UserProfile;
use zenith_core::services::session_gate::GateOutcome;
#[cfg(not(target_arch = "wasm32"))]
use zenith_core::storage::file::FileSessionStore;
use zenith_core::storage::session_store::{MemorySessionStore, SessionStore};
use zenith_core::validation::{LoginForm, SignupForm};
use zenith_core::ZenithClient;

// ═══════════════════════════════════════════════════════════════════
// Mock API (for testing without a live backend)
// ═══════════════════════════════════════════════════════════════════

struct MockApi {
    records: Mutex<Vec<Transaction>>,
    next_id: AtomicUsize,
    register_calls: AtomicUsize,
    login_calls: AtomicUsize,
    profile_calls: AtomicUsize,
    list_calls: AtomicUsize,
    create_calls: AtomicUsize,
    list_failures: AtomicUsize,
    fail_create: AtomicBool,
}

impl MockApi {
    fn new() -> Self {
        Self {
            records: Mutex::new(Vec::new()),
            next_id: AtomicUsize::new(1),
            register_calls: AtomicUsize::new(0),
            login_calls: AtomicUsize::new(0),
            profile_calls: AtomicUsize::new(0),
            list_calls: AtomicUsize::new(0),
            create_calls: AtomicUsize::new(0),
            list_failures: AtomicUsize::new(0),
            fail_create: AtomicBool::new(false),
        }
    }

    fn with_records(records: Vec<Transaction>) -> Self {
        let api = Self::new();
        *api.records.lock().unwrap() = records;
        api
    }

    /// Insert a record behind the client's back, as another device
    /// writing to the same account would.
    fn push_record(&self, record: Transaction) {
        self.records.lock().unwrap().push(record);
    }

    fn fail_next_lists(&self, n: usize) {
        self.list_failures.store(n, Ordering::SeqCst);
    }

    fn set_fail_create(&self, fail: bool) {
        self.fail_create.store(fail, Ordering::SeqCst);
    }

    fn record_ids(&self) -> Vec<String> {
        self.records
            .lock()
            .unwrap()
            .iter()
            .map(|t| t.id.clone())
            .collect()
    }
}

#[async_trait]
impl AuthApi for MockApi {
    async fn register(&self, form: &SignupForm) -> Result<SessionToken, CoreError> {
        self.register_calls.fetch_add(1, Ordering::SeqCst);
        Ok(SessionToken::new(format!("tok-{}", form.email)))
    }

    async fn login(&self, form: &LoginForm) -> Result<SessionToken, CoreError> {
        self.login_calls.fetch_add(1, Ordering::SeqCst);
        Ok(SessionToken::new(format!("tok-{}", form.email)))
    }

    async fn current_user(&self, _token: &SessionToken) -> Result<UserProfile, CoreError> {
        self.profile_calls.fetch_add(1, Ordering::SeqCst);
        Ok(UserProfile {
            full_name: "Tunde Adebayo".to_string(),
            email: "tunde@example.com".to_string(),
        })
    }
}

#[async_trait]
impl TransactionApi for MockApi {
    async fn list(&self, _token: &SessionToken) -> Result<Vec<Transaction>, CoreError> {
        self.list_calls.fetch_add(1, Ordering::SeqCst);
        if self.list_failures.load(Ordering::SeqCst) > 0 {
            self.list_failures.fetch_sub(1, Ordering::SeqCst);
            return Err(CoreError::Network("connection reset by peer".to_string()));
        }
        Ok(self.records.lock().unwrap().clone())
    }

    async fn create(
        &self,
        _token: &SessionToken,
        new: &NewTransaction,
    ) -> Result<Transaction, CoreError> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);
        if self.fail_create.load(Ordering::SeqCst) {
            return Err(CoreError::Api {
                status: 500,
                message: "Failed to add transaction".to_string(),
            });
        }
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let created = Transaction {
            id: format!("srv-{id}"),
            description: new.description.clone(),
            amount: new.amount,
            category: new.category.clone(),
            created_at: None,
        };
        self.records.lock().unwrap().push(created.clone());
        Ok(created)
    }

    async fn delete(&self, _token: &SessionToken, id: &str) -> Result<(), CoreError> {
        let mut records = self.records.lock().unwrap();
        let before = records.len();
        records.retain(|t| t.id != id);
        if records.len() == before {
            return Err(CoreError::Api {
                status: 404,
                message: "Record not found".to_string(),
            });
        }
        Ok(())
    }
}

fn expense(id: &str, description: &str, amount: f64) -> Transaction {
    Transaction {
        id: id.to_string(),
        description: description.to_string(),
        amount,
        category: "General".to_string(),
        created_at: None,
    }
}

fn signup_form() -> SignupForm {
    SignupForm {
        full_name: "Tunde Adebayo".to_string(),
        email: "tunde@example.com".to_string(),
        password: "Abcdef1!".to_string(),
    }
}

fn login_form() -> LoginForm {
    LoginForm {
        email: "tunde@example.com".to_string(),
        password: "Abcdefg!".to_string(),
    }
}

fn client_with(api: Arc<MockApi>) -> ZenithClient {
    ZenithClient::with_api(
        ClientConfig::default(),
        Box::new(MemorySessionStore::new()),
        api.clone(),
        api,
    )
}

// ═══════════════════════════════════════════════════════════════════
// Auth Journey Tests
// ═══════════════════════════════════════════════════════════════════

#[tokio::test]
async fn test_signup_journey_to_dashboard() {
    let api = Arc::new(MockApi::new());
    let mut client = client_with(api.clone());

    // A fresh visitor is bounced off the dashboard.
    assert_eq!(client.check_session(), GateOutcome::Redirect(Route::Login));

    let success = client.register(&signup_form()).await.unwrap();
    assert_eq!(success.redirect.to, Route::Dashboard);

    // The gate now lets the dashboard mount, and the greeting data
    // is there.
    assert_eq!(client.check_session(), GateOutcome::Allow);
    let profile = client.current_user().await.unwrap();
    assert_eq!(profile.full_name, "Tunde Adebayo");
    assert_eq!(profile.initial(), "T");

    // A brand-new account has nothing to show yet.
    assert!(client.transactions().await.unwrap().is_empty());

    // First expense of the month.
    let created = client
        .add_expense("Fuel for generator", 4500.0, "Transport")
        .await
        .unwrap();
    assert_eq!(created.amount, -4500.0);

    let list = client.transactions().await.unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0].description, "Fuel for generator");

    // Signing out bounces the next visit again.
    client.logout().unwrap();
    assert_eq!(client.check_session(), GateOutcome::Redirect(Route::Login));
}

#[tokio::test]
async fn test_validation_stops_requests_before_the_network() {
    let api = Arc::new(MockApi::new());
    let mut client = client_with(api.clone());

    let bad_signup = SignupForm {
        email: "tunde-at-example.com".to_string(),
        ..signup_form()
    };
    let result = client.register(&bad_signup).await;
    assert!(matches!(result, Err(CoreError::Validation(_))));

    let bad_login = LoginForm {
        password: "short".to_string(),
        ..login_form()
    };
    let result = client.login(&bad_login).await;
    assert!(matches!(result, Err(CoreError::Validation(_))));

    // Neither attempt left the client.
    assert_eq!(api.register_calls.load(Ordering::SeqCst), 0);
    assert_eq!(api.login_calls.load(Ordering::SeqCst), 0);
    assert!(!client.has_session());
}

#[tokio::test]
async fn test_profile_is_cached_per_session() {
    let api = Arc::new(MockApi::new());
    let mut client = client_with(api.clone());
    client.login(&login_form()).await.unwrap();

    client.current_user().await.unwrap();
    client.current_user().await.unwrap();
    assert_eq!(api.profile_calls.load(Ordering::SeqCst), 1);

    // A new session must not inherit the old session's profile.
    client.logout().unwrap();
    client.login(&login_form()).await.unwrap();
    client.current_user().await.unwrap();
    assert_eq!(api.profile_calls.load(Ordering::SeqCst), 2);
}

// ═══════════════════════════════════════════════════════════════════
// Transaction Journey Tests
// ═══════════════════════════════════════════════════════════════════

#[tokio::test]
async fn test_login_and_delete_journey() {
    let api = Arc::new(MockApi::with_records(vec![
        expense("t1", "Jollof rice ingredients", -3200.0),
        expense("t2", "Fuel for generator", -4500.0),
        expense("t3", "Salary", 250_000.0),
    ]));
    let mut client = client_with(api.clone());

    client.login(&login_form()).await.unwrap();

    let list = client.transactions().await.unwrap();
    let ids: Vec<&str> = list.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, ["t3", "t2", "t1"], "newest first");

    // The delete flow goes through the confirmation dialog.
    client.dashboard_mut().request_delete("t2");
    assert_eq!(client.dashboard().pending_delete.as_deref(), Some("t2"));

    client.confirm_pending_delete().await.unwrap();

    assert!(client.dashboard().pending_delete.is_none());
    assert_eq!(api.record_ids(), ["t1", "t3"]);
    let list = client.transactions().await.unwrap();
    assert!(list.iter().all(|t| t.id != "t2"));
}

#[tokio::test]
async fn test_cached_list_is_stale_until_invalidated() {
    let api = Arc::new(MockApi::new());
    let mut client = client_with(api.clone());
    client.login(&login_form()).await.unwrap();

    assert!(client.transactions().await.unwrap().is_empty());

    // Another device logs an expense; this client keeps showing its
    // cached copy until something invalidates it.
    api.push_record(expense("t1", "MTN data bundle", -2500.0));
    assert!(client.transactions().await.unwrap().is_empty());
    assert_eq!(api.list_calls.load(Ordering::SeqCst), 1);

    client.invalidate_transactions();
    let list = client.transactions().await.unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(list[0].description, "MTN data bundle");
    assert_eq!(api.list_calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_failed_create_is_recoverable() {
    let api = Arc::new(MockApi::with_records(vec![expense(
        "t1",
        "Jollof rice ingredients",
        -3200.0,
    )]));
    let mut client = client_with(api.clone());
    client.login(&login_form()).await.unwrap();
    client.transactions().await.unwrap();

    // Fill in the add-expense dialog, then the API falls over.
    client.dashboard_mut().open_add_modal();
    client.dashboard_mut().draft.description = "Bolt to the island".to_string();
    client.dashboard_mut().draft.amount = "1350.50".to_string();
    client.dashboard_mut().draft.category = "Transport".to_string();
    api.set_fail_create(true);

    let result = client.submit_new_expense().await;
    assert!(result.is_err());

    // Nothing is lost: the dialog is still open with the user's
    // input, and the cached list is still served.
    assert!(client.dashboard().add_modal_open);
    assert_eq!(client.dashboard().draft.description, "Bolt to the island");
    assert_eq!(client.transactions().await.unwrap().len(), 1);
    assert_eq!(api.list_calls.load(Ordering::SeqCst), 1);

    // The API heals; resubmitting the same dialog succeeds.
    api.set_fail_create(false);
    let created = client.submit_new_expense().await.unwrap();
    assert_eq!(created.amount, -1350.50);
    assert!(!client.dashboard().add_modal_open);

    let list = client.transactions().await.unwrap();
    assert_eq!(list.len(), 2);
    assert_eq!(list[0].description, "Bolt to the island");
}

// ═══════════════════════════════════════════════════════════════════
// Resilience Tests
// ═══════════════════════════════════════════════════════════════════

#[tokio::test]
async fn test_transient_list_outage_is_invisible() {
    let api = Arc::new(MockApi::with_records(vec![expense(
        "t1",
        "MTN data bundle",
        -2500.0,
    )]));
    api.fail_next_lists(1);
    let mut client = client_with(api.clone());
    client.login(&login_form()).await.unwrap();

    // One failure is absorbed by the transparent retry.
    let list = client.transactions().await.unwrap();
    assert_eq!(list.len(), 1);
    assert_eq!(api.list_calls.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn test_outage_beyond_the_retry_surfaces_then_recovers() {
    let api = Arc::new(MockApi::with_records(vec![expense(
        "t1",
        "MTN data bundle",
        -2500.0,
    )]));
    api.fail_next_lists(2);
    let mut client = client_with(api.clone());
    client.login(&login_form()).await.unwrap();

    let result = client.transactions().await;
    assert!(matches!(result, Err(CoreError::Network(_))));
    assert_eq!(api.list_calls.load(Ordering::SeqCst), 2);
    assert!(!client.has_cached_transactions());

    // The outage passes; the next read works without any reset.
    let list = client.transactions().await.unwrap();
    assert_eq!(list.len(), 1);
    assert!(client.has_cached_transactions());
}

// ═══════════════════════════════════════════════════════════════════
// Budget Journey Tests
// ═══════════════════════════════════════════════════════════════════

#[tokio::test]
async fn test_budget_journey_crosses_the_ceiling() {
    let api = Arc::new(MockApi::with_records(vec![
        expense("t1", "Jollof rice ingredients", -200.0),
        expense("t2", "Bus fare", -300.0),
        expense("t3", "Refund", 500.0),
    ]));
    let mut client = client_with(api.clone());
    client.login(&login_form()).await.unwrap();
    client.set_monthly_budget(1000.0);

    let summary = client.budget_summary().await.unwrap();
    assert_eq!(summary.total_spent, 500.0);
    assert_eq!(summary.usage_percent, 50.0);
    assert!(!summary.is_over_budget);

    // One more expense pushes the month over the ceiling.
    client
        .add_expense("Generator repair", 700.0, "General")
        .await
        .unwrap();

    let summary = client.budget_summary().await.unwrap();
    assert_eq!(summary.total_spent, 1200.0);
    assert_eq!(summary.usage_percent, 100.0);
    assert!(summary.is_over_budget);
}

// ═══════════════════════════════════════════════════════════════════
// File-backed Session Tests (native only)
// ═══════════════════════════════════════════════════════════════════

#[cfg(not(target_arch = "wasm32"))]
#[tokio::test]
async fn test_session_survives_a_restart() {
    let dir = tempfile::tempdir().unwrap();
    let api = Arc::new(MockApi::new());

    // First run: sign in, then the process ends.
    let store = FileSessionStore::new(dir.path()).unwrap();
    let mut client = ZenithClient::with_api(
        ClientConfig::default(),
        Box::new(store),
        api.clone(),
        api.clone(),
    );
    client.login(&login_form()).await.unwrap();
    drop(client);

    // Second run: the token on disk opens the session directly.
    let store = FileSessionStore::new(dir.path()).unwrap();
    let mut client = ZenithClient::with_api(
        ClientConfig::default(),
        Box::new(store),
        api.clone(),
        api,
    );
    assert!(client.has_session());
    assert_eq!(client.check_session(), GateOutcome::Allow);

    // Signing out removes the file, so a third run starts clean.
    client.logout().unwrap();
    assert!(!dir.path().join("token").exists());
}

#[cfg(not(target_arch = "wasm32"))]
#[test]
fn test_with_session_dir_picks_up_an_existing_token() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileSessionStore::new(dir.path()).unwrap();
    store.set(&SessionToken::new("jwt-from-last-run")).unwrap();

    let client = ZenithClient::with_session_dir(ClientConfig::default(), dir.path()).unwrap();
    assert!(client.has_session());
}

#[cfg(not(target_arch = "wasm32"))]
#[test]
fn test_with_session_dir_starts_signed_out_when_dir_is_fresh() {
    let dir = tempfile::tempdir().unwrap();
    let client = ZenithClient::with_session_dir(ClientConfig::default(), dir.path()).unwrap();
    assert_eq!(client.check_session(), GateOutcome::Redirect(Route::Login));
}
