//! Account endpoints
//!
//! `POST /signup`, `GET /users/{user_id}`, `PATCH /users/{user_id}` and
//! `POST /close`.

use axum::{
    body::Bytes,
    extract::{Path, State},
    routing::{get, post},
    Router,
};
use serde::{Deserialize, Serialize};
use tracing::debug;
use url::form_urlencoded;

use crate::api::middleware::BasicAuth;
use crate::api::state::AppState;
use crate::api::types::{ApiError, Json, JsonRejection};
use crate::domain::account::{Account, AccountId, NewAccount, ProfileSnapshot, ProfileUpdate};
use crate::domain::DomainError;

/// Create the account router
pub fn create_accounts_router() -> Router<AppState> {
    Router::new()
        .route("/signup", post(signup))
        .route("/users/{user_id}", get(get_user).patch(update_user))
        .route("/close", post(close_account))
}

/// Signup request
///
/// Every field is optional at this level so that a missing field surfaces as
/// a validation error instead of a malformed body.
#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    pub user_id: Option<String>,
    pub password: Option<String>,
    pub nickname: Option<String>,
    pub comment: Option<String>,
}

impl From<SignupRequest> for NewAccount {
    fn from(request: SignupRequest) -> Self {
        Self {
            user_id: request.user_id,
            password: request.password,
            nickname: request.nickname,
            comment: request.comment,
        }
    }
}

/// Public projection of an account; never carries the password
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountResponse {
    pub user_id: String,
    pub nickname: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub comment: Option<String>,
}

impl AccountResponse {
    /// Identity only, as echoed after signup
    fn summary(account: &Account) -> Self {
        Self {
            user_id: account.id().to_string(),
            nickname: account.nickname().to_string(),
            comment: None,
        }
    }
}

impl From<&Account> for AccountResponse {
    fn from(account: &Account) -> Self {
        Self {
            comment: account.comment().map(String::from),
            ..Self::summary(account)
        }
    }
}

/// Response carrying a single account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountEnvelope {
    pub message: String,
    pub user: AccountResponse,
}

/// Plain confirmation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

/// Update confirmation with the shared profile history
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateResponse {
    pub message: String,
    pub recipe: Vec<ProfileSnapshot>,
}

/// POST /signup
pub async fn signup(
    State(state): State<AppState>,
    payload: Result<Json<SignupRequest>, JsonRejection>,
) -> Result<Json<AccountEnvelope>, ApiError> {
    let Json(request) = payload.map_err(|rejection| {
        debug!(reason = %rejection.message(), "Rejected signup body");
        DomainError::malformed("required user_id and password")
    })?;

    debug!(user_id = ?request.user_id, "Creating account");

    let account = state.account_service.create(request.into()).await?;

    Ok(Json(AccountEnvelope {
        message: "Account successfully created".to_string(),
        user: AccountResponse::summary(&account),
    }))
}

/// GET /users/{user_id}
pub async fn get_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    BasicAuth(credentials): BasicAuth,
) -> Result<Json<AccountEnvelope>, ApiError> {
    debug!(user_id = %user_id, "Getting account");

    let account = state
        .account_service
        .fetch(&AccountId::from(user_id), credentials.as_ref())
        .await?;

    Ok(Json(AccountEnvelope {
        message: "User details by user_id".to_string(),
        user: AccountResponse::from(&account),
    }))
}

/// PATCH /users/{user_id}
///
/// The body is read as a URL-encoded form whatever its Content-Type.
pub async fn update_user(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    BasicAuth(credentials): BasicAuth,
    body: Bytes,
) -> Result<Json<UpdateResponse>, ApiError> {
    debug!(user_id = %user_id, "Updating account");

    let update = ProfileUpdate::from_pairs(form_urlencoded::parse(&body));

    let recipe = state
        .account_service
        .modify(&AccountId::from(user_id), &update, credentials.as_ref())
        .await?;

    Ok(Json(UpdateResponse {
        message: "User successfully updated".to_string(),
        recipe,
    }))
}

/// POST /close
///
/// The account to remove is the one named by the credentials.
pub async fn close_account(
    State(state): State<AppState>,
    BasicAuth(credentials): BasicAuth,
) -> Result<Json<MessageResponse>, ApiError> {
    let account = state.account_service.close(credentials.as_ref()).await?;

    debug!(user_id = %account.id(), "Account removed");

    Ok(Json(MessageResponse {
        message: "Account and user successfully removed".to_string(),
    }))
}
