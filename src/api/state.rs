//! Application state for shared services

use std::sync::Arc;

use crate::domain::account::{
    Account, AccountId, AccountRepository, Credentials, NewAccount, ProfileSnapshot, ProfileUpdate,
};
use crate::domain::DomainError;
use crate::infrastructure::account::{AccountService, InMemoryAccountRepository, ProfileHistory};

/// Application state containing shared services using dynamic dispatch
///
/// Each state owns its own registry and history; nothing is process-global.
#[derive(Clone)]
pub struct AppState {
    pub account_service: Arc<dyn AccountServiceTrait>,
}

impl AppState {
    pub fn new(account_service: Arc<dyn AccountServiceTrait>) -> Self {
        Self { account_service }
    }

    /// Fresh in-memory state with the given history capacity
    pub fn in_memory(history_capacity: usize) -> Self {
        let repository = Arc::new(InMemoryAccountRepository::new());
        let service = AccountService::new(repository, ProfileHistory::new(history_capacity));
        Self::new(Arc::new(service))
    }
}

/// Trait for account service operations
#[async_trait::async_trait]
pub trait AccountServiceTrait: Send + Sync {
    async fn create(&self, request: NewAccount) -> Result<Account, DomainError>;
    async fn fetch(
        &self,
        id: &AccountId,
        credentials: Option<&Credentials>,
    ) -> Result<Account, DomainError>;
    async fn close(&self, credentials: Option<&Credentials>) -> Result<Account, DomainError>;
    async fn modify(
        &self,
        id: &AccountId,
        update: &ProfileUpdate,
        credentials: Option<&Credentials>,
    ) -> Result<Vec<ProfileSnapshot>, DomainError>;
    async fn count(&self) -> Result<usize, DomainError>;
}

#[async_trait::async_trait]
impl<R: AccountRepository + 'static> AccountServiceTrait for AccountService<R> {
    async fn create(&self, request: NewAccount) -> Result<Account, DomainError> {
        AccountService::create(self, request).await
    }

    async fn fetch(
        &self,
        id: &AccountId,
        credentials: Option<&Credentials>,
    ) -> Result<Account, DomainError> {
        AccountService::fetch(self, id, credentials).await
    }

    async fn close(&self, credentials: Option<&Credentials>) -> Result<Account, DomainError> {
        AccountService::close(self, credentials).await
    }

    async fn modify(
        &self,
        id: &AccountId,
        update: &ProfileUpdate,
        credentials: Option<&Credentials>,
    ) -> Result<Vec<ProfileSnapshot>, DomainError> {
        AccountService::modify(self, id, update, credentials).await
    }

    async fn count(&self) -> Result<usize, DomainError> {
        AccountService::count(self).await
    }
}
