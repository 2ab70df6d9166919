//! Per-user navigation cursors

use std::collections::HashMap;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::sync::{PoisonError, RwLock};
use tracing::debug;

use crate::catalog::Category;

/// Chat user identifier as handed over by the transport
pub type UserId = i64;

const DEFAULT_SHARDS: usize = 16;

/// Where a user currently is: one active category and a page within it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionCursor {
    pub user_id: UserId,
    pub category: Category,
    /// 1-indexed
    pub page: usize,
}

/// Concurrent map of user cursors.
///
/// Users are spread over independently locked shards, so unrelated users
/// never wait on each other's updates. Nothing here survives a restart.
#[derive(Debug)]
pub struct SessionStore {
    shards: Vec<RwLock<HashMap<UserId, SessionCursor>>>,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::with_shards(DEFAULT_SHARDS)
    }
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store with a specific shard count (at least one)
    pub fn with_shards(count: usize) -> Self {
        let shards = (0..count.max(1))
            .map(|_| RwLock::new(HashMap::new()))
            .collect();
        Self { shards }
    }

    fn shard(&self, user_id: UserId) -> &RwLock<HashMap<UserId, SessionCursor>> {
        let mut hasher = DefaultHasher::new();
        user_id.hash(&mut hasher);
        let index = (hasher.finish() % self.shards.len() as u64) as usize;
        &self.shards[index]
    }

    /// Make `category` the user's active category at `page`, replacing any
    /// previous cursor
    pub fn set_cursor(&self, user_id: UserId, category: Category, page: usize) {
        let cursor = SessionCursor {
            user_id,
            category,
            page,
        };
        let previous = self
            .shard(user_id)
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(user_id, cursor);

        match previous {
            Some(prev) if prev.category != category => {
                debug!("User {} switched {} -> {} p{}", user_id, prev.category, category, page)
            }
            _ => debug!("User {} at {} p{}", user_id, category, page),
        }
    }

    /// Current cursor for a user, if a category is active
    pub fn cursor(&self, user_id: UserId) -> Option<SessionCursor> {
        self.shard(user_id)
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&user_id)
            .copied()
    }

    /// Drop the user's cursor, returning it if there was one
    pub fn clear(&self, user_id: UserId) -> Option<SessionCursor> {
        let removed = self
            .shard(user_id)
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&user_id);
        if removed.is_some() {
            debug!("Cleared session for user {}", user_id);
        }
        removed
    }

    /// Number of users with an active category
    pub fn len(&self) -> usize {
        self.shards
            .iter()
            .map(|shard| shard.read().unwrap_or_else(PoisonError::into_inner).len())
            .sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
