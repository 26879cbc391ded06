//! User id generation

use parking_lot::Mutex;
use std::fmt::Debug;

use crate::domain::user::UserId;
use crate::domain::DomainError;

/// Trait for assigning user identities
pub trait IdGenerator: Send + Sync + Debug {
    /// Return the next unused id, or an error once no ids are left
    fn next_id(&self) -> Result<UserId, DomainError>;
}

/// Counter-backed generator handing out consecutive ids
///
/// Read, increment and return happen under one lock, so concurrent callers
/// never observe the same value. `u64::MAX` is the last id handed out;
/// after it every call fails instead of wrapping around.
#[derive(Debug)]
pub struct SequentialIdGenerator {
    next: Mutex<Option<u64>>,
}

impl SequentialIdGenerator {
    /// Create a generator whose first id is 1
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    /// Create a generator whose first id is `start`
    pub fn starting_at(start: u64) -> Self {
        Self {
            next: Mutex::new(Some(start)),
        }
    }
}

impl Default for SequentialIdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl IdGenerator for SequentialIdGenerator {
    fn next_id(&self) -> Result<UserId, DomainError> {
        let mut next = self.next.lock();
        let id = next.ok_or_else(|| DomainError::internal("user id space exhausted"))?;
        *next = id.checked_add(1);
        Ok(UserId::new(id))
    }
}
