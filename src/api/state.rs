//! Application state for shared services

use std::sync::Arc;

use crate::domain::user::{User, UserId, UserStore};
use crate::domain::DomainError;
use crate::infrastructure::user::{IdGenerator, UserService};

/// Application state containing shared services using dynamic dispatch
#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<dyn UserServiceTrait>,
}

impl AppState {
    pub fn new(user_service: Arc<dyn UserServiceTrait>) -> Self {
        Self { user_service }
    }
}

/// Trait for user service operations
#[async_trait::async_trait]
pub trait UserServiceTrait: Send + Sync {
    async fn create_user(&self, name: &str, email: &str) -> Result<User, DomainError>;
    async fn get_user(&self, id: UserId) -> Result<User, DomainError>;
    async fn update_user_email(&self, id: UserId, email: &str) -> Result<User, DomainError>;
    async fn delete_user(&self, id: UserId) -> Result<(), DomainError>;
    async fn count(&self) -> Result<usize, DomainError>;
}

#[async_trait::async_trait]
impl<S, G> UserServiceTrait for UserService<S, G>
where
    S: UserStore + 'static,
    G: IdGenerator + 'static,
{
    async fn create_user(&self, name: &str, email: &str) -> Result<User, DomainError> {
        UserService::create_user(self, name, email).await
    }

    async fn get_user(&self, id: UserId) -> Result<User, DomainError> {
        UserService::get_user(self, id).await
    }

    async fn update_user_email(&self, id: UserId, email: &str) -> Result<User, DomainError> {
        UserService::update_user_email(self, id, email).await
    }

    async fn delete_user(&self, id: UserId) -> Result<(), DomainError> {
        UserService::delete_user(self, id).await
    }

    async fn count(&self) -> Result<usize, DomainError> {
        UserService::count(self).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_dyn_service_counts_users() {
        let state = crate::create_app_state();
        assert_eq!(state.user_service.count().await.unwrap(), 0);

        let user = state
            .user_service
            .create_user("Hal", "hal@example.com")
            .await
            .unwrap();
        assert_eq!(state.user_service.count().await.unwrap(), 1);

        state.user_service.delete_user(user.id()).await.unwrap();
        assert_eq!(state.user_service.count().await.unwrap(), 0);
    }
}
