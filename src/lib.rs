//! Account Service API
//!
//! A small HTTP API for user accounts:
//! - Signup with structural validation of id, password and profile fields
//! - Profile lookup gated by Basic-style credentials
//! - Nickname/comment updates with a shared update history
//! - Account removal

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use api::state::AppState;
use tracing::info;

/// Create application state from configuration
pub fn create_app_state(config: &AppConfig) -> AppState {
    let capacity = config.accounts.history_capacity;

    if capacity == 0 {
        info!("Profile history is unbounded");
    } else {
        info!(capacity, "Profile history capacity");
    }

    AppState::in_memory(capacity)
}
