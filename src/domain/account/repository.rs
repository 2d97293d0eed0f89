//! Account repository trait

use async_trait::async_trait;
use std::fmt::Debug;

use super::entity::{Account, AccountId, ProfileUpdate};
use crate::domain::DomainError;

/// Repository trait for the account registry
///
/// Each call is atomic with respect to the others. Callers are expected to
/// check existence themselves when an absent account is a reportable error.
#[async_trait]
pub trait AccountRepository: Send + Sync + Debug {
    /// Get an account by its ID
    async fn get(&self, id: &AccountId) -> Result<Option<Account>, DomainError>;

    /// Insert a new account, failing with a conflict if the ID is taken
    async fn insert(&self, account: Account) -> Result<Account, DomainError>;

    /// Apply a profile update in place and return the updated account
    async fn update(&self, id: &AccountId, update: &ProfileUpdate) -> Result<Account, DomainError>;

    /// Remove an account, returning whether it existed
    async fn remove(&self, id: &AccountId) -> Result<bool, DomainError>;

    /// Number of registered accounts
    async fn count(&self) -> Result<usize, DomainError>;

    /// Check if an account ID exists
    async fn exists(&self, id: &AccountId) -> Result<bool, DomainError> {
        Ok(self.get(id).await?.is_some())
    }
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Arc;
    use tokio::sync::RwLock;

    /// Mock account repository for testing
    #[derive(Debug, Default)]
    pub struct MockAccountRepository {
        accounts: Arc<RwLock<HashMap<String, Account>>>,
        should_fail: Arc<RwLock<bool>>,
    }

    impl MockAccountRepository {
        /// Create a new mock repository
        pub fn new() -> Self {
            Self::default()
        }

        /// Set whether operations should fail
        pub async fn set_should_fail(&self, fail: bool) {
            *self.should_fail.write().await = fail;
        }

        async fn check_should_fail(&self) -> Result<(), DomainError> {
            if *self.should_fail.read().await {
                return Err(DomainError::storage("Mock repository configured to fail"));
            }
            Ok(())
        }
    }

    #[async_trait]
    impl AccountRepository for MockAccountRepository {
        async fn get(&self, id: &AccountId) -> Result<Option<Account>, DomainError> {
            self.check_should_fail().await?;
            let accounts = self.accounts.read().await;
            Ok(accounts.get(id.as_str()).cloned())
        }

        async fn insert(&self, account: Account) -> Result<Account, DomainError> {
            self.check_should_fail().await?;
            let mut accounts = self.accounts.write().await;
            let id = account.id().as_str().to_string();

            if accounts.contains_key(&id) {
                return Err(DomainError::conflict(format!(
                    "Account '{}' already exists",
                    id
                )));
            }

            accounts.insert(id, account.clone());
            Ok(account)
        }

        async fn update(
            &self,
            id: &AccountId,
            update: &ProfileUpdate,
        ) -> Result<Account, DomainError> {
            self.check_should_fail().await?;
            let mut accounts = self.accounts.write().await;

            let account = accounts
                .get_mut(id.as_str())
                .ok_or_else(|| DomainError::not_found(format!("Account '{}' not found", id)))?;

            account.apply(update);
            Ok(account.clone())
        }

        async fn remove(&self, id: &AccountId) -> Result<bool, DomainError> {
            self.check_should_fail().await?;
            let mut accounts = self.accounts.write().await;
            Ok(accounts.remove(id.as_str()).is_some())
        }

        async fn count(&self) -> Result<usize, DomainError> {
            self.check_should_fail().await?;
            Ok(self.accounts.read().await.len())
        }
    }
}
