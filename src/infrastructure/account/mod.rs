//! Account infrastructure module
//!
//! This module provides the in-memory account registry, the shared profile
//! history, and the account service built on top of them.

mod history;
mod repository;
mod service;

pub use history::ProfileHistory;
pub use repository::InMemoryAccountRepository;
pub use service::AccountService;
