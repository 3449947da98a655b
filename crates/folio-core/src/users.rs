//! In-memory user records keyed by a sequential id. Nothing is persisted.

use dashmap::DashMap;
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicU64, Ordering};

/// A stored user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub username: String,
    pub password: String,
}

/// Input for [`UserStore::create_user`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewUser {
    pub username: String,
    pub password: String,
}

impl NewUser {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }
}

/// Owned user store. Construct one per consumer; ids start at 1 and are never reused.
pub struct UserStore {
    users: DashMap<u64, User>,
    next_id: AtomicU64,
}

impl UserStore {
    pub fn new() -> Self {
        Self {
            users: DashMap::new(),
            next_id: AtomicU64::new(1),
        }
    }

    /// Stores a new record under the next id and returns it. Usernames need not be unique.
    pub fn create_user(&self, input: NewUser) -> User {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst);
        let user = User {
            id,
            username: input.username,
            password: input.password,
        };
        self.users.insert(id, user.clone());
        tracing::debug!(target: "folio::users", id, "user created");
        user
    }

    pub fn get_user(&self, id: u64) -> Option<User> {
        self.users.get(&id).map(|entry| entry.value().clone())
    }

    /// First-created user with exactly this username (case-sensitive).
    pub fn get_user_by_username(&self, username: &str) -> Option<User> {
        self.users
            .iter()
            .filter(|entry| entry.value().username == username)
            .min_by_key(|entry| *entry.key())
            .map(|entry| entry.value().clone())
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

impl Default for UserStore {
    fn default() -> Self {
        Self::new()
    }
}
