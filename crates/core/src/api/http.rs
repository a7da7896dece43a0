use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::errors::CoreError;
use crate::models::session::SessionToken;
use crate::models::transaction::{NewTransaction, Transaction};
use crate::models::user::UserProfile;
use crate::validation::{LoginForm, SignupForm};

use super::traits::{AuthApi, TransactionApi};

/// Fallback notices for failures where the server sent no usable
/// message, one per operation.
pub const REGISTER_FALLBACK: &str = "Registration failed. Please check your details.";
pub const LOGIN_FALLBACK: &str = "Invalid email or password";
pub const PROFILE_FALLBACK: &str = "Could not load your profile";
pub const LIST_FALLBACK: &str = "Could not load transactions";
pub const CREATE_FALLBACK: &str = "Failed to add transaction";
pub const DELETE_FALLBACK: &str = "Could not delete record";

/// HTTP implementation of the API surface, speaking the camelCase JSON
/// wire format documented by the server.
///
/// The client is built without a request timeout: a submission stays
/// pending until the transport itself gives up, and shells guard
/// against duplicate submissions by disabling their controls.
pub struct HttpApi {
    client: Client,
    base_url: String,
}

impl HttpApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Map a non-success response to `CoreError::Api`, preferring the
    /// server's `{"message"}` body over the operation fallback. An
    /// empty message counts as absent.
    async fn api_error(resp: reqwest::Response, fallback: &str) -> CoreError {
        let status = resp.status().as_u16();
        let message = resp
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(|body| body.message)
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| fallback.to_string());
        CoreError::Api { status, message }
    }
}

// ── Wire types ──────────────────────────────────────────────────────

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct RegisterRequest<'a> {
    full_name: &'a str,
    email: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct LoginRequest<'a> {
    email: &'a str,
    password: &'a str,
}

/// Auth success body. The token is optional on the wire; a success
/// response without one, or with an empty one, persists nothing and is
/// treated as a failure.
#[derive(Deserialize)]
struct AuthResponse {
    token: Option<String>,
}

#[derive(Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl AuthApi for HttpApi {
    async fn register(&self, form: &SignupForm) -> Result<SessionToken, CoreError> {
        let url = format!("{}/auth/register", self.base_url);
        let body = RegisterRequest {
            full_name: &form.full_name,
            email: &form.email,
            password: &form.password,
        };

        let resp = self.client.post(&url).json(&body).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(Self::api_error(resp, REGISTER_FALLBACK).await);
        }

        let auth: AuthResponse = resp
            .json()
            .await
            .map_err(|e| CoreError::Deserialization(format!("Malformed register response: {e}")))?;
        match auth.token.filter(|t| !t.is_empty()) {
            Some(raw) => Ok(SessionToken::new(raw)),
            None => Err(CoreError::Api {
                status: status.as_u16(),
                message: REGISTER_FALLBACK.to_string(),
            }),
        }
    }

    async fn login(&self, form: &LoginForm) -> Result<SessionToken, CoreError> {
        let url = format!("{}/auth/login", self.base_url);
        let body = LoginRequest {
            email: &form.email,
            password: &form.password,
        };

        let resp = self.client.post(&url).json(&body).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(Self::api_error(resp, LOGIN_FALLBACK).await);
        }

        let auth: AuthResponse = resp
            .json()
            .await
            .map_err(|e| CoreError::Deserialization(format!("Malformed login response: {e}")))?;
        match auth.token.filter(|t| !t.is_empty()) {
            Some(raw) => Ok(SessionToken::new(raw)),
            None => Err(CoreError::Api {
                status: status.as_u16(),
                message: LOGIN_FALLBACK.to_string(),
            }),
        }
    }

    async fn current_user(&self, token: &SessionToken) -> Result<UserProfile, CoreError> {
        let url = format!("{}/auth/me", self.base_url);
        let resp = self
            .client
            .get(&url)
            .bearer_auth(token.expose())
            .send()
            .await?;
        if !resp.status().is_success() {
            return Err(Self::api_error(resp, PROFILE_FALLBACK).await);
        }

        resp.json::<UserProfile>()
            .await
            .map_err(|e| CoreError::Deserialization(format!("Malformed profile response: {e}")))
    }
}

#[cfg_attr(target_arch = "wasm32", async_trait(?Send))]
#[cfg_attr(not(target_arch = "wasm32"), async_trait)]
impl TransactionApi for HttpApi {
    async fn list(&self, token: &SessionToken) -> Result<Vec<Transaction>, CoreError> {
        let url = format!("{}/transactions/all", self.base_url);
        let resp = self
            .client
            .get(&url)
            .bearer_auth(token.expose())
            .send()
            .await?;
        if !resp.status().is_success() {
            return Err(Self::api_error(resp, LIST_FALLBACK).await);
        }

        resp.json::<Vec<Transaction>>()
            .await
            .map_err(|e| CoreError::Deserialization(format!("Malformed transaction list: {e}")))
    }

    async fn create(
        &self,
        token: &SessionToken,
        new: &NewTransaction,
    ) -> Result<Transaction, CoreError> {
        let url = format!("{}/transactions/add", self.base_url);
        let resp = self
            .client
            .post(&url)
            .bearer_auth(token.expose())
            .json(new)
            .send()
            .await?;
        if !resp.status().is_success() {
            return Err(Self::api_error(resp, CREATE_FALLBACK).await);
        }

        resp.json::<Transaction>()
            .await
            .map_err(|e| CoreError::Deserialization(format!("Malformed created record: {e}")))
    }

    async fn delete(&self, token: &SessionToken, id: &str) -> Result<(), CoreError> {
        let url = format!("{}/transactions/{id}", self.base_url);
        let resp = self
            .client
            .delete(&url)
            .bearer_auth(token.expose())
            .send()
            .await?;
        if !resp.status().is_success() {
            return Err(Self::api_error(resp, DELETE_FALLBACK).await);
        }

        Ok(())
    }
}
