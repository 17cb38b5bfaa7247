//! In-memory user store.
//!
//! Records are keyed by id. Ids come from a strictly increasing counter, so
//! key order is also insertion order and every listing below preserves it.

use std::collections::BTreeMap;

use user_api_common::{User, UserDraft, UserId, UserStats};

/// Authoritative collection of users plus the id sequence.
///
/// Not synchronised; see [`crate::service::UserService`] for the shared,
/// lock-guarded wrapper.
#[derive(Debug)]
pub struct UserStore {
    users: BTreeMap<UserId, User>,
    next_id: UserId,
}

impl Default for UserStore {
    fn default() -> Self {
        Self::new()
    }
}

impl UserStore {
    /// Create an empty store. The first id handed out is 1.
    pub fn new() -> Self {
        Self {
            users: BTreeMap::new(),
            next_id: 1,
        }
    }

    /// Create a store holding the three sample users (ids 1, 2, 3).
    pub fn with_sample_users() -> Self {
        let mut store = Self::new();
        for draft in sample_users() {
            store.create(draft);
        }
        store
    }

    pub fn list(&self) -> Vec<User> {
        self.users.values().cloned().collect()
    }

    pub fn list_active(&self) -> Vec<User> {
        self.users.values().filter(|u| u.active).cloned().collect()
    }

    pub fn get(&self, id: UserId) -> Option<User> {
        self.users.get(&id).cloned()
    }

    /// Exact, case-sensitive username match.
    pub fn get_by_username(&self, username: &str) -> Option<User> {
        self.users
            .values()
            .find(|u| u.username == username)
            .cloned()
    }

    /// Store a new record under the next id. The record always starts
    /// active, whatever the draft says.
    pub fn create(&mut self, draft: UserDraft) -> User {
        let id = self.next_id;
        self.next_id += 1;

        let user = User {
            id,
            username: draft.username,
            email: draft.email,
            first_name: draft.first_name,
            last_name: draft.last_name,
            active: true,
        };
        self.users.insert(id, user.clone());
        user
    }

    /// Replace every field except the id. Missing ids are left missing.
    pub fn update(&mut self, id: UserId, draft: UserDraft) -> Option<User> {
        let user = self.users.get_mut(&id)?;
        user.username = draft.username;
        user.email = draft.email;
        user.first_name = draft.first_name;
        user.last_name = draft.last_name;
        user.active = draft.active;
        Some(user.clone())
    }

    pub fn delete(&mut self, id: UserId) -> bool {
        self.users.remove(&id).is_some()
    }

    pub fn deactivate(&mut self, id: UserId) -> Option<User> {
        let user = self.users.get_mut(&id)?;
        user.active = false;
        Some(user.clone())
    }

    /// Case-insensitive substring match on first or last name. An empty
    /// term matches every record.
    pub fn search_by_name(&self, term: &str) -> Vec<User> {
        let needle = term.to_lowercase();
        self.users
            .values()
            .filter(|u| {
                u.first_name.to_lowercase().contains(&needle)
                    || u.last_name.to_lowercase().contains(&needle)
            })
            .cloned()
            .collect()
    }

    pub fn count(&self) -> usize {
        self.users.len()
    }

    pub fn active_count(&self) -> usize {
        self.users.values().filter(|u| u.active).count()
    }

    pub fn stats(&self) -> UserStats {
        UserStats::new(self.count(), self.active_count())
    }
}

fn sample_users() -> [UserDraft; 3] {
    [
        UserDraft::new("johndoe", "john.doe@example.com", "John", "Doe"),
        UserDraft::new("janedoe", "jane.doe@example.com", "Jane", "Doe"),
        UserDraft::new("bobsmith", "bob.smith@example.com", "Bob", "Smith"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn alice() -> UserDraft {
        UserDraft::new("alice", "alice@example.com", "Alice", "Wonder")
    }

    fn usernames(users: &[User]) -> Vec<&str> {
        users.iter().map(|u| u.username.as_str()).collect()
    }

    #[test]
    fn test_sample_users_get_sequential_ids() {
        let store = UserStore::with_sample_users();
        let users = store.list();

        assert_eq!(users.iter().map(|u| u.id).collect::<Vec<_>>(), vec![1, 2, 3]);
        assert_eq!(usernames(&users), vec!["johndoe", "janedoe", "bobsmith"]);
        assert!(users.iter().all(|u| u.active));
    }

    #[test]
    fn test_new_store_is_empty() {
        let mut store = UserStore::new();
        assert_eq!(store.count(), 0);
        assert!(store.list().is_empty());
        assert_eq!(store.create(alice()).id, 1);
    }

    #[test]
    fn test_get_by_id() {
        let store = UserStore::with_sample_users();
        let user = store.get(1).unwrap();
        assert_eq!(user.username, "johndoe");
        assert_eq!(user.email, "john.doe@example.com");

        assert!(store.get(999).is_none());
    }

    #[test]
    fn test_get_by_username_is_exact() {
        let store = UserStore::with_sample_users();
        let user = store.get_by_username("johndoe").unwrap();
        assert_eq!(user.id, 1);
        assert_eq!(user.first_name, "John");

        assert!(store.get_by_username("JohnDoe").is_none());
        assert!(store.get_by_username("john").is_none());
        assert!(store.get_by_username("nonexistent").is_none());
    }

    #[test]
    fn test_create_assigns_next_id() {
        let mut store = UserStore::with_sample_users();
        let created = store.create(alice());

        assert_eq!(created.id, 4);
        assert_eq!(created.username, "alice");
        assert!(created.active);
        assert_eq!(store.count(), 4);
        assert_eq!(store.get(4).unwrap().email, "alice@example.com");
    }

    #[test]
    fn test_create_forces_active() {
        let mut store = UserStore::new();
        let created = store.create(alice().with_active(false));
        assert!(created.active);
        assert!(store.get(created.id).unwrap().active);
    }

    #[test]
    fn test_ids_are_never_reused() {
        let mut store = UserStore::with_sample_users();
        assert!(store.delete(3));

        let created = store.create(alice());
        assert_eq!(created.id, 4);

        let mut last = 0;
        for user in store.list() {
            assert!(user.id > last);
            last = user.id;
        }
    }

    #[test]
    fn test_update_replaces_fields_but_not_id() {
        let mut store = UserStore::with_sample_users();
        let draft = UserDraft::new("johndoe_updated", "john.updated@example.com", "John", "Doe Updated")
            .with_active(false);

        let updated = store.update(1, draft).unwrap();
        assert_eq!(updated.id, 1);
        assert_eq!(updated.username, "johndoe_updated");
        assert_eq!(updated.email, "john.updated@example.com");
        assert_eq!(updated.last_name, "Doe Updated");
        assert!(!updated.active);

        assert_eq!(store.get(1).unwrap().username, "johndoe_updated");
    }

    #[test]
    fn test_update_missing_id_creates_nothing() {
        let mut store = UserStore::with_sample_users();
        assert!(store.update(999, alice()).is_none());
        assert_eq!(store.count(), 3);
        assert!(store.get(999).is_none());
    }

    #[test]
    fn test_delete() {
        let mut store = UserStore::with_sample_users();
        assert!(store.delete(1));
        assert_eq!(store.count(), 2);
        assert!(store.get(1).is_none());

        assert!(!store.delete(1));
        assert!(!store.delete(999));
        assert_eq!(store.count(), 2);
    }

    #[test]
    fn test_deactivate_is_idempotent() {
        let mut store = UserStore::with_sample_users();

        assert!(!store.deactivate(1).unwrap().active);
        assert!(!store.deactivate(1).unwrap().active);
        assert!(!store.get(1).unwrap().active);
        assert_eq!(store.active_count(), 2);

        assert!(store.deactivate(999).is_none());
    }

    #[test]
    fn test_list_active_preserves_order() {
        let mut store = UserStore::with_sample_users();
        store.deactivate(2);

        let active = store.list_active();
        assert_eq!(usernames(&active), vec!["johndoe", "bobsmith"]);
        assert!(active.iter().all(|u| u.active));
    }

    #[test]
    fn test_search_by_last_name() {
        let store = UserStore::with_sample_users();
        let results = store.search_by_name("Doe");
        assert_eq!(usernames(&results), vec!["johndoe", "janedoe"]);
    }

    #[test]
    fn test_search_is_case_insensitive_substring() {
        let store = UserStore::with_sample_users();
        assert_eq!(usernames(&store.search_by_name("john")), vec!["johndoe"]);
        assert_eq!(usernames(&store.search_by_name("MIT")), vec!["bobsmith"]);
        // "o" appears in John, Doe, Bob
        assert_eq!(store.search_by_name("o").len(), 3);
    }

    #[test]
    fn test_search_does_not_match_username_or_email() {
        let store = UserStore::with_sample_users();
        assert!(store.search_by_name("bobsmith").is_empty());
        assert!(store.search_by_name("example.com").is_empty());
        assert!(store.search_by_name("Nonexistent").is_empty());
    }

    #[test]
    fn test_search_empty_term_matches_everything() {
        let store = UserStore::with_sample_users();
        assert_eq!(store.search_by_name("").len(), 3);
    }

    #[test]
    fn test_counts_stay_consistent() {
        let mut store = UserStore::with_sample_users();
        store.deactivate(1);
        store.deactivate(2);
        store.create(alice());
        store.delete(3);

        let inactive = store.list().iter().filter(|u| !u.active).count();
        assert_eq!(store.count(), store.active_count() + inactive);
        assert_eq!(store.active_count(), 1);

        let stats = store.stats();
        assert_eq!(stats.total_users, 3);
        assert_eq!(stats.active_users, 1);
        assert_eq!(stats.inactive_users, 2);
    }

    #[test]
    fn test_returned_records_do_not_alias_storage() {
        let store = UserStore::with_sample_users();
        let mut copy = store.get(1).unwrap();
        copy.active = false;
        copy.email = "changed@example.com".to_string();

        let stored = store.get(1).unwrap();
        assert!(stored.active);
        assert_eq!(stored.email, "john.doe@example.com");
    }
}
