//! User infrastructure module
//!
//! This module provides the id generator, the in-memory user store and the
//! user service that ties them together.

mod id_generator;
mod repository;
mod service;

pub use id_generator::{IdGenerator, SequentialIdGenerator};
pub use repository::InMemoryUserStore;
pub use service::UserService;
