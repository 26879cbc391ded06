//! User store trait

use async_trait::async_trait;
use std::fmt::Debug;

use super::entity::{User, UserId};
use crate::domain::DomainError;

/// Storage trait for user records
///
/// Implementations hand out owned copies; a returned `User` never aliases
/// stored state.
#[async_trait]
pub trait UserStore: Send + Sync + Debug {
    /// Insert a record keyed by its id
    async fn create(&self, user: User) -> Result<User, DomainError>;

    /// Get a user by id
    async fn get(&self, id: UserId) -> Result<Option<User>, DomainError>;

    /// Replace the email of an existing user, returning the new record
    async fn update_email(&self, id: UserId, email: &str) -> Result<Option<User>, DomainError>;

    /// Remove a user, returning whether anything was removed
    async fn delete(&self, id: UserId) -> Result<bool, DomainError>;

    /// Number of stored users
    async fn count(&self) -> Result<usize, DomainError>;
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Arc;
    use tokio::sync::RwLock;

    /// Mock user store for testing
    #[derive(Debug, Default)]
    pub struct MockUserStore {
        users: Arc<RwLock<HashMap<UserId, User>>>,
        should_fail: Arc<RwLock<bool>>,
    }

    impl MockUserStore {
        /// Create a new mock store
        pub fn new() -> Self {
            Self::default()
        }

        /// Set whether operations should fail
        pub async fn set_should_fail(&self, fail: bool) {
            *self.should_fail.write().await = fail;
        }

        async fn check_should_fail(&self) -> Result<(), DomainError> {
            if *self.should_fail.read().await {
                return Err(DomainError::storage("Mock store configured to fail"));
            }
            Ok(())
        }
    }

    #[async_trait]
    impl UserStore for MockUserStore {
        async fn create(&self, user: User) -> Result<User, DomainError> {
            self.check_should_fail().await?;
            let mut users = self.users.write().await;
            users.insert(user.id(), user.clone());
            Ok(user)
        }

        async fn get(&self, id: UserId) -> Result<Option<User>, DomainError> {
            self.check_should_fail().await?;
            let users = self.users.read().await;
            Ok(users.get(&id).cloned())
        }

        async fn update_email(&self, id: UserId, email: &str) -> Result<Option<User>, DomainError> {
            self.check_should_fail().await?;
            let mut users = self.users.write().await;

            let Some(user) = users.get(&id) else {
                return Ok(None);
            };

            let updated = user.with_email(email);
            users.insert(id, updated.clone());
            Ok(Some(updated))
        }

        async fn delete(&self, id: UserId) -> Result<bool, DomainError> {
            self.check_should_fail().await?;
            let mut users = self.users.write().await;
            Ok(users.remove(&id).is_some())
        }

        async fn count(&self) -> Result<usize, DomainError> {
            self.check_should_fail().await?;
            Ok(self.users.read().await.len())
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[tokio::test]
        async fn test_create_and_get() {
            let store = MockUserStore::new();
            let user = User::new(UserId::new(1), "James", "james@example.com");

            store.create(user.clone()).await.unwrap();

            let retrieved = store.get(UserId::new(1)).await.unwrap();
            assert_eq!(retrieved, Some(user));
            assert_eq!(store.count().await.unwrap(), 1);
        }

        #[tokio::test]
        async fn test_should_fail() {
            let store = MockUserStore::new();
            store.set_should_fail(true).await;

            let result = store.get(UserId::new(1)).await;
            assert!(matches!(result, Err(DomainError::Storage { .. })));

            store.set_should_fail(false).await;
            assert!(store.get(UserId::new(1)).await.unwrap().is_none());
        }
    }
}
