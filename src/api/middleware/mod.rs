//! API middleware components

pub mod basic_auth;
pub mod logging;
pub mod security;

pub use basic_auth::{extract_basic_credentials, BasicAuth};
pub use logging::logging_middleware;
pub use security::security_headers_middleware;
