//! Infrastructure layer - Registry, history and service implementations

pub mod account;
pub mod logging;
