//! In-memory account repository implementation

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::account::{Account, AccountId, AccountRepository, ProfileUpdate};
use crate::domain::DomainError;

/// In-memory implementation of AccountRepository
///
/// State lives for the lifetime of the process only.
#[derive(Debug)]
pub struct InMemoryAccountRepository {
    accounts: Arc<RwLock<HashMap<String, Account>>>,
}

impl InMemoryAccountRepository {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self {
            accounts: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Create a repository with initial accounts
    #[cfg(test)]
    pub fn with_accounts(accounts: Vec<Account>) -> Self {
        let accounts_map = accounts
            .into_iter()
            .map(|account| (account.id().as_str().to_string(), account))
            .collect();

        Self {
            accounts: Arc::new(RwLock::new(accounts_map)),
        }
    }
}

impl Default for InMemoryAccountRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AccountRepository for InMemoryAccountRepository {
    async fn get(&self, id: &AccountId) -> Result<Option<Account>, DomainError> {
        let accounts = self.accounts.read().await;
        Ok(accounts.get(id.as_str()).cloned())
    }

    async fn insert(&self, account: Account) -> Result<Account, DomainError> {
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

    async fn update(&self, id: &AccountId, update: &ProfileUpdate) -> Result<Account, DomainError> {
        let mut accounts = self.accounts.write().await;

        let account = accounts
            .get_mut(id.as_str())
            .ok_or_else(|| DomainError::not_found(format!("Account '{}' not found", id)))?;

        account.apply(update);

        Ok(account.clone())
    }

    async fn remove(&self, id: &AccountId) -> Result<bool, DomainError> {
        let mut accounts = self.accounts.write().await;
        Ok(accounts.remove(id.as_str()).is_some())
    }

    async fn count(&self) -> Result<usize, DomainError> {
        let accounts = self.accounts.read().await;
        Ok(accounts.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_account(id: &str) -> Account {
        Account::new(AccountId::from(id), "secret123", "", "")
    }

    #[tokio::test]
    async fn test_insert_and_get() {
        let repo = InMemoryAccountRepository::new();

        repo.insert(create_test_account("alice01")).await.unwrap();

        let account = repo.get(&AccountId::from("alice01")).await.unwrap().unwrap();
        assert_eq!(account.id().as_str(), "alice01");
        assert!(repo.exists(&AccountId::from("alice01")).await.unwrap());
    }

    #[tokio::test]
    async fn test_get_missing() {
        let repo = InMemoryAccountRepository::new();

        assert!(repo.get(&AccountId::from("nobody1")).await.unwrap().is_none());
        assert!(!repo.exists(&AccountId::from("nobody1")).await.unwrap());
    }

    #[tokio::test]
    async fn test_duplicate_insert_conflicts() {
        let repo = InMemoryAccountRepository::new();

        repo.insert(create_test_account("alice01")).await.unwrap();
        let result = repo.insert(create_test_account("alice01")).await;

        assert!(matches!(result, Err(DomainError::Conflict { .. })));
        assert_eq!(repo.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_update_in_place() {
        let repo = InMemoryAccountRepository::with_accounts(vec![create_test_account("alice01")]);
        let id = AccountId::from("alice01");

        let updated = repo
            .update(&id, &ProfileUpdate::new(Some("Al".to_string()), None))
            .await
            .unwrap();
        assert_eq!(updated.nickname(), "Al");

        let stored = repo.get(&id).await.unwrap().unwrap();
        assert_eq!(stored.nickname(), "Al");
        assert!(stored.comment().is_none());
    }

    #[tokio::test]
    async fn test_update_missing() {
        let repo = InMemoryAccountRepository::new();

        let result = repo
            .update(&AccountId::from("nobody1"), &ProfileUpdate::default())
            .await;
        assert!(matches!(result, Err(DomainError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_remove_frees_id() {
        let repo = InMemoryAccountRepository::with_accounts(vec![create_test_account("alice01")]);
        let id = AccountId::from("alice01");

        assert!(repo.remove(&id).await.unwrap());
        assert!(!repo.remove(&id).await.unwrap());
        assert_eq!(repo.count().await.unwrap(), 0);

        repo.insert(create_test_account("alice01")).await.unwrap();
        assert_eq!(repo.count().await.unwrap(), 1);
    }
}
