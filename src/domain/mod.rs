//! Domain layer - Core account rules and entities

pub mod account;
pub mod error;

pub use account::{
    Account, AccountId, AccountRepository, Credentials, NewAccount, ProfileSnapshot, ProfileUpdate,
};
pub use error::DomainError;
