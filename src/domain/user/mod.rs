//! User domain
//!
//! This module provides the user record, field validation and the storage
//! trait the service layer is written against.

mod entity;
mod repository;
mod validation;

pub use entity::{User, UserId};
pub use repository::UserStore;
pub use validation::{
    validate_email, validate_name, UserValidationError, MAX_EMAIL_LENGTH, MAX_NAME_LENGTH,
};

#[cfg(test)]
pub use repository::mock::MockUserStore;
