use serde::{Deserialize, Serialize};

/// Aggregate counters returned by `GET /users/stats`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserStats {
    pub total_users: usize,
    pub active_users: usize,
    pub inactive_users: usize,
}

impl UserStats {
    pub fn new(total_users: usize, active_users: usize) -> Self {
        Self {
            total_users,
            active_users,
            inactive_users: total_users.saturating_sub(active_users),
        }
    }
}
