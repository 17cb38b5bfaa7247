//! Shared user service over the in-memory store.

use tokio::sync::RwLock;

use user_api_common::{User, UserDraft, UserId, UserStats};

use crate::store::UserStore;

/// Lock-guarded façade over [`UserStore`].
///
/// Reads share the lock; every mutation holds the write lock for its whole
/// duration, so readers never observe a half-applied change and the id
/// counter cannot hand out duplicates.
#[derive(Debug, Default)]
pub struct UserService {
    store: RwLock<UserStore>,
}

impl UserService {
    pub fn new(store: UserStore) -> Self {
        Self {
            store: RwLock::new(store),
        }
    }

    /// Service backed by the three sample users.
    pub fn with_sample_users() -> Self {
        Self::new(UserStore::with_sample_users())
    }

    pub async fn get_all_users(&self) -> Vec<User> {
        self.store.read().await.list()
    }

    pub async fn get_active_users(&self) -> Vec<User> {
        self.store.read().await.list_active()
    }

    pub async fn get_user_by_id(&self, id: UserId) -> Option<User> {
        self.store.read().await.get(id)
    }

    pub async fn get_user_by_username(&self, username: &str) -> Option<User> {
        self.store.read().await.get_by_username(username)
    }

    pub async fn create_user(&self, draft: UserDraft) -> User {
        let user = self.store.write().await.create(draft);
        tracing::info!(user_id = user.id, username = %user.username, "Created user");
        user
    }

    pub async fn update_user(&self, id: UserId, draft: UserDraft) -> Option<User> {
        let updated = self.store.write().await.update(id, draft);
        match &updated {
            Some(user) => tracing::info!(user_id = id, username = %user.username, "Updated user"),
            None => tracing::debug!(user_id = id, "Update skipped, user not found"),
        }
        updated
    }

    pub async fn delete_user(&self, id: UserId) -> bool {
        let deleted = self.store.write().await.delete(id);
        if deleted {
            tracing::info!(user_id = id, "Deleted user");
        } else {
            tracing::debug!(user_id = id, "Delete skipped, user not found");
        }
        deleted
    }

    /// Soft delete: the record stays, `active` becomes false.
    pub async fn deactivate_user(&self, id: UserId) -> Option<User> {
        let user = self.store.write().await.deactivate(id);
        match &user {
            Some(_) => tracing::info!(user_id = id, "Deactivated user"),
            None => tracing::debug!(user_id = id, "Deactivate skipped, user not found"),
        }
        user
    }

    pub async fn search_users_by_name(&self, term: &str) -> Vec<User> {
        self.store.read().await.search_by_name(term)
    }

    pub async fn get_user_count(&self) -> usize {
        self.store.read().await.count()
    }

    pub async fn get_active_user_count(&self) -> usize {
        self.store.read().await.active_count()
    }

    /// Total, active and inactive counts taken under one read lock.
    pub async fn get_user_stats(&self) -> UserStats {
        self.store.read().await.stats()
    }
}
