//! User Service
//!
//! A small CRUD API for user records with:
//! - Unique, monotonically increasing user ids
//! - A thread-safe in-memory store with linearizable operations
//! - Typed not-found errors mapped to HTTP 404 at the boundary

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use api::state::AppState;
use infrastructure::user::{InMemoryUserStore, SequentialIdGenerator, UserService};

/// Create the application state with a fresh store and id sequence
pub fn create_app_state() -> AppState {
    let store = Arc::new(InMemoryUserStore::new());
    let ids = Arc::new(SequentialIdGenerator::new());

    AppState::new(Arc::new(UserService::new(store, ids)))
}
