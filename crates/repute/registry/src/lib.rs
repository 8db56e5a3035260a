//! Repute Registry - append-only participant registry
//!
//! Tracks every registered identity with a stable, insertion-ordered index
//! and O(1) membership lookup. There is no removal operation: the registry
//! only grows, which keeps indices stable for auditability.

#![deny(unsafe_code)]

use repute_types::{RegisteredUser, ReputeError, ReputeResult, UserId};
use std::collections::HashMap;

/// Insertion-ordered registry of participant identities.
#[derive(Clone, Debug, Default)]
pub struct IdentityRegistry {
    users: Vec<RegisteredUser>,
    index: HashMap<UserId, u64>,
}

impl IdentityRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Admit a new identity at the next ordinal index.
    pub fn register(&mut self, user: UserId) -> ReputeResult<RegisteredUser> {
        if self.index.contains_key(&user) {
            return Err(ReputeError::AlreadyRegistered(user));
        }

        let index = self.users.len() as u64;
        let record = RegisteredUser::new(user.clone(), index);
        self.index.insert(user, index);
        self.users.push(record.clone());

        Ok(record)
    }

    pub fn is_registered(&self, user: &UserId) -> bool {
        self.index.contains_key(user)
    }

    pub fn user_count(&self) -> u64 {
        self.users.len() as u64
    }

    /// Look up a participant by ordinal index.
    pub fn user_at(&self, index: u64) -> ReputeResult<&RegisteredUser> {
        self.users
            .get(index as usize)
            .ok_or(ReputeError::IndexOutOfRange {
                index,
                count: self.users.len() as u64,
            })
    }

    /// All participants in registration order.
    pub fn users(&self) -> impl Iterator<Item = &RegisteredUser> {
        self.users.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(id: &str) -> UserId {
        UserId::new(id)
    }

    #[test]
    fn registration_assigns_monotonic_indices() {
        let mut registry = IdentityRegistry::new();

        let alice = registry.register(user("0xa11ce")).unwrap();
        let bob = registry.register(user("0xb0b")).unwrap();

        assert_eq!(alice.index, 0);
        assert_eq!(bob.index, 1);
        assert_eq!(registry.user_count(), 2);
        assert_eq!(registry.user_at(0).unwrap().user, user("0xa11ce"));
        assert_eq!(registry.user_at(1).unwrap().user, user("0xb0b"));
    }

    #[test]
    fn double_registration_fails_and_changes_nothing() {
        let mut registry = IdentityRegistry::new();
        registry.register(user("0xa11ce")).unwrap();

        let result = registry.register(user("0xa11ce"));

        assert_eq!(
            result,
            Err(ReputeError::AlreadyRegistered(user("0xa11ce")))
        );
        assert_eq!(registry.user_count(), 1);
    }

    #[test]
    fn unknown_identities_are_not_registered() {
        let registry = IdentityRegistry::new();
        assert!(!registry.is_registered(&user("0xa11ce")));
    }

    #[test]
    fn out_of_range_index_is_rejected() {
        let mut registry = IdentityRegistry::new();
        registry.register(user("0xa11ce")).unwrap();

        assert_eq!(
            registry.user_at(1).unwrap_err(),
            ReputeError::IndexOutOfRange { index: 1, count: 1 }
        );
    }
}
