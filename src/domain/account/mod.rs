//! Account domain
//!
//! This module provides domain types and traits for user accounts,
//! including the account entity, credentials, profile updates, signup
//! validation, and the registry repository trait.

mod credentials;
mod entity;
mod repository;
mod validation;

pub use credentials::Credentials;
pub use entity::{Account, AccountId, IMMUTABLE_FIELDS, ProfileSnapshot, ProfileUpdate};
pub use repository::AccountRepository;
pub use validation::{NewAccount, validate_excluded_chars};

#[cfg(test)]
pub use repository::mock::MockAccountRepository;
