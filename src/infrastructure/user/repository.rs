//! In-memory user store implementation

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::user::{User, UserId, UserStore};
use crate::domain::DomainError;

/// In-memory implementation of UserStore
///
/// A single lock guards the whole map; every operation takes it once, so
/// concurrent calls take effect in one total order.
#[derive(Debug)]
pub struct InMemoryUserStore {
    users: Arc<RwLock<HashMap<UserId, User>>>,
}

impl InMemoryUserStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self {
            users: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl Default for InMemoryUserStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn create(&self, user: User) -> Result<User, DomainError> {
        let mut users = self.users.write().await;
        let id = user.id();

        if users.contains_key(&id) {
            return Err(DomainError::conflict(format!(
                "User with id={} already exists",
                id
            )));
        }

        users.insert(id, user.clone());

        Ok(user)
    }

    async fn get(&self, id: UserId) -> Result<Option<User>, DomainError> {
        let users = self.users.read().await;
        Ok(users.get(&id).cloned())
    }

    async fn update_email(&self, id: UserId, email: &str) -> Result<Option<User>, DomainError> {
        let mut users = self.users.write().await;

        match users.get_mut(&id) {
            Some(user) => {
                *user = user.with_email(email);
                Ok(Some(user.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, id: UserId) -> Result<bool, DomainError> {
        let mut users = self.users.write().await;
        Ok(users.remove(&id).is_some())
    }

    async fn count(&self) -> Result<usize, DomainError> {
        let users = self.users.read().await;
        Ok(users.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_user(id: u64, name: &str) -> User {
        User::new(
            UserId::new(id),
            name,
            format!("{}@example.com", name.to_lowercase()),
        )
    }

    #[tokio::test]
    async fn test_create_and_get() {
        let store = InMemoryUserStore::new();
        let user = create_test_user(1, "James");

        let created = store.create(user.clone()).await.unwrap();
        assert_eq!(created, user);

        let retrieved = store.get(UserId::new(1)).await.unwrap();
        assert_eq!(retrieved, Some(user));
    }

    #[tokio::test]
    async fn test_get_missing() {
        let store = InMemoryUserStore::new();

        let retrieved = store.get(UserId::new(999)).await.unwrap();
        assert!(retrieved.is_none());
    }

    #[tokio::test]
    async fn test_duplicate_id_rejected() {
        let store = InMemoryUserStore::new();

        store.create(create_test_user(1, "First")).await.unwrap();

        let result = store.create(create_test_user(1, "Second")).await;
        assert!(matches!(result, Err(DomainError::Conflict { .. })));

        // Stored record is untouched
        let retrieved = store.get(UserId::new(1)).await.unwrap().unwrap();
        assert_eq!(retrieved.name(), "First");
        assert_eq!(store.count().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_update_email() {
        let store = InMemoryUserStore::new();
        store.create(create_test_user(1, "Carlos")).await.unwrap();

        let updated = store
            .update_email(UserId::new(1), "carlos@new.example.com")
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.id(), UserId::new(1));
        assert_eq!(updated.name(), "Carlos");
        assert_eq!(updated.email(), "carlos@new.example.com");

        let retrieved = store.get(UserId::new(1)).await.unwrap().unwrap();
        assert_eq!(retrieved, updated);
    }

    #[tokio::test]
    async fn test_update_email_missing_creates_nothing() {
        let store = InMemoryUserStore::new();

        let updated = store
            .update_email(UserId::new(404), "x@example.com")
            .await
            .unwrap();

        assert!(updated.is_none());
        assert_eq!(store.count().await.unwrap(), 0);
    }

    #[tokio::test]
    async fn test_delete() {
        let store = InMemoryUserStore::new();
        store.create(create_test_user(1, "Dave")).await.unwrap();

        assert!(store.delete(UserId::new(1)).await.unwrap());
        assert!(store.get(UserId::new(1)).await.unwrap().is_none());

        // Nothing left to remove
        assert!(!store.delete(UserId::new(1)).await.unwrap());
    }

    #[tokio::test]
    async fn test_returned_copies_do_not_alias_store() {
        let store = InMemoryUserStore::new();
        let created = store.create(create_test_user(1, "Eve")).await.unwrap();

        let changed_locally = created.with_email("other@example.com");
        assert_eq!(changed_locally.email(), "other@example.com");

        let retrieved = store.get(UserId::new(1)).await.unwrap().unwrap();
        assert_eq!(retrieved.email(), "eve@example.com");
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_updates_are_serialized() {
        let store = Arc::new(InMemoryUserStore::new());
        store.create(create_test_user(1, "Shared")).await.unwrap();

        let mut handles = Vec::new();

        for i in 0..32 {
            let store = Arc::clone(&store);
            handles.push(tokio::spawn(async move {
                let email = format!("user{}@example.com", i);
                let updated = store
                    .update_email(UserId::new(1), &email)
                    .await
                    .unwrap()
                    .unwrap();
                // Each writer sees exactly its own write applied
                assert_eq!(updated.email(), email);
                assert_eq!(updated.name(), "Shared");
            }));
        }

        for handle in handles {
            handle.await.unwrap();
        }

        let final_user = store.get(UserId::new(1)).await.unwrap().unwrap();
        assert!(final_user.email().starts_with("user"));
        assert_eq!(store.count().await.unwrap(), 1);
    }
}
