//! User service for identity assignment and record management

use std::sync::Arc;

use tracing::debug;

use crate::domain::user::{User, UserId, UserStore};
use crate::domain::DomainError;

use super::id_generator::IdGenerator;

/// User service
///
/// The only place users are created. Absent records surface as
/// [`DomainError::UserNotFound`]; nothing is retried.
#[derive(Debug)]
pub struct UserService<S: UserStore, G: IdGenerator> {
    store: Arc<S>,
    ids: Arc<G>,
}

impl<S: UserStore, G: IdGenerator> UserService<S, G> {
    /// Create a new user service
    pub fn new(store: Arc<S>, ids: Arc<G>) -> Self {
        Self { store, ids }
    }

    /// Create a new user with the next available id
    ///
    /// `name` and `email` are expected to be validated already.
    pub async fn create_user(&self, name: &str, email: &str) -> Result<User, DomainError> {
        let user_id = self.ids.next_id()?;
        debug!(user_id = %user_id, "Creating user");

        self.store.create(User::new(user_id, name, email)).await
    }

    /// Get a user by id
    pub async fn get_user(&self, id: UserId) -> Result<User, DomainError> {
        self.store
            .get(id)
            .await?
            .ok_or_else(|| DomainError::user_not_found(id))
    }

    /// Replace a user's email
    pub async fn update_user_email(&self, id: UserId, email: &str) -> Result<User, DomainError> {
        debug!(user_id = %id, "Updating user email");

        self.store
            .update_email(id, email)
            .await?
            .ok_or_else(|| DomainError::user_not_found(id))
    }

    /// Delete a user
    pub async fn delete_user(&self, id: UserId) -> Result<(), DomainError> {
        debug!(user_id = %id, "Deleting user");

        if self.store.delete(id).await? {
            Ok(())
        } else {
            Err(DomainError::user_not_found(id))
        }
    }

    /// Number of stored users
    pub async fn count(&self) -> Result<usize, DomainError> {
        self.store.count().await
    }
}
