//! Account service for signup, profile access and account removal

use std::sync::Arc;

use tokio::sync::Mutex;
use tracing::{debug, info};
use validator::Validate;

use crate::domain::account::{
    Account, AccountId, AccountRepository, Credentials, NewAccount, ProfileSnapshot, ProfileUpdate,
};
use crate::domain::DomainError;

use super::history::ProfileHistory;

/// Account service orchestrating the registry and the profile history
#[derive(Debug)]
pub struct AccountService<R: AccountRepository> {
    repository: Arc<R>,
    /// Held for the whole of an update so history order matches update order
    history: Mutex<ProfileHistory>,
}

impl<R: AccountRepository> AccountService<R> {
    /// Create a new account service
    pub fn new(repository: Arc<R>, history: ProfileHistory) -> Self {
        Self {
            repository,
            history: Mutex::new(history),
        }
    }

    /// Create a new account
    pub async fn create(&self, request: NewAccount) -> Result<Account, DomainError> {
        request
            .validate()
            .map_err(|e| DomainError::validation(e.to_string()))?;

        let NewAccount {
            user_id,
            password,
            nickname,
            comment,
        } = request;

        let (Some(user_id), Some(password)) = (user_id, password) else {
            return Err(DomainError::validation("user_id and password are required"));
        };

        let id = AccountId::from(user_id);

        if self.repository.exists(&id).await? {
            return Err(DomainError::conflict(format!(
                "Account '{}' already exists",
                id
            )));
        }

        let account = Account::new(
            id,
            password,
            nickname.unwrap_or_default(),
            comment.unwrap_or_default(),
        );

        let account = self.repository.insert(account).await?;
        info!(user_id = %account.id(), "Account created");

        Ok(account)
    }

    /// Get an account on behalf of its owner
    ///
    /// The account must exist before credentials are looked at, and the
    /// credentials must name the same account.
    pub async fn fetch(
        &self,
        id: &AccountId,
        credentials: Option<&Credentials>,
    ) -> Result<Account, DomainError> {
        let account = self.find(id).await?;
        let credentials = credentials.ok_or(DomainError::Authentication)?;

        if credentials.user_id() != id || !account.password_matches(credentials.password()) {
            debug!(user_id = %id, "Credential check failed");
            return Err(DomainError::Authentication);
        }

        Ok(account)
    }

    /// Remove the account named by the credentials
    pub async fn close(&self, credentials: Option<&Credentials>) -> Result<Account, DomainError> {
        let credentials = credentials.ok_or(DomainError::Authentication)?;
        let account = self.find(credentials.user_id()).await?;

        if !account.password_matches(credentials.password()) {
            debug!(user_id = %account.id(), "Credential check failed");
            return Err(DomainError::Authentication);
        }

        if !self.repository.remove(account.id()).await? {
            return Err(not_found(account.id()));
        }

        info!(user_id = %account.id(), "Account closed");

        Ok(account)
    }

    /// Update nickname and/or comment, returning the full profile history
    ///
    /// Checks run in order: account exists, no immutable field present, at
    /// least one change requested, credentials name the account, password
    /// matches. A wrong password here is a permission failure rather than an
    /// authentication failure.
    pub async fn modify(
        &self,
        id: &AccountId,
        update: &ProfileUpdate,
        credentials: Option<&Credentials>,
    ) -> Result<Vec<ProfileSnapshot>, DomainError> {
        let mut history = self.history.lock().await;
        let account = self.find(id).await?;

        if let Some(field) = update.rejected_fields().first() {
            return Err(DomainError::immutable_field(field.as_str()));
        }

        if !update.has_changes() {
            return Err(DomainError::NoUpdatableFields);
        }

        let credentials = credentials.ok_or(DomainError::Authentication)?;

        if credentials.user_id() != id {
            debug!(user_id = %id, "Credentials name a different account");
            return Err(DomainError::Authentication);
        }

        if !account.password_matches(credentials.password()) {
            debug!(user_id = %id, "Password mismatch on update");
            return Err(DomainError::forbidden("No Permission for Update"));
        }

        let updated = self.repository.update(id, update).await?;
        history.record(updated.snapshot());

        debug!(user_id = %id, history_len = history.len(), "Profile updated");

        Ok(history.entries())
    }

    /// Current profile history, oldest first
    #[cfg(test)]
    pub async fn history(&self) -> Vec<ProfileSnapshot> {
        self.history.lock().await.entries()
    }

    /// Number of registered accounts
    pub async fn count(&self) -> Result<usize, DomainError> {
        self.repository.count().await
    }

    async fn find(&self, id: &AccountId) -> Result<Account, DomainError> {
        self.repository
            .get(id)
            .await?
            .ok_or_else(|| not_found(id))
    }
}

fn not_found(id: &AccountId) -> DomainError {
    DomainError::not_found(format!("Account '{}' not found", id))
}
