//! Infrastructure layer - concrete implementations of domain traits

pub mod logging;
pub mod user;
