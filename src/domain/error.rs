use thiserror::Error;

use super::user::UserId;

/// Core domain errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("User with id={user_id} was not found")]
    UserNotFound { user_id: UserId },

    #[error("Conflict: {message}")]
    Conflict { message: String },

    #[error("Storage error: {message}")]
    Storage { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl DomainError {
    pub fn user_not_found(user_id: UserId) -> Self {
        Self::UserNotFound { user_id }
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }

    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_not_found_error() {
        let error = DomainError::user_not_found(UserId::new(42));
        assert_eq!(error.to_string(), "User with id=42 was not found");
        assert!(matches!(
            error,
            DomainError::UserNotFound { user_id } if user_id == UserId::new(42)
        ));
    }

    #[test]
    fn test_internal_error() {
        let error = DomainError::internal("user id space exhausted");
        assert_eq!(error.to_string(), "Internal error: user id space exhausted");
    }

    #[test]
    fn test_conflict_error() {
        let error = DomainError::conflict("Resource already exists");
        assert_eq!(error.to_string(), "Conflict: Resource already exists");
    }
}
