//! Last-seen chat participants, keyed by Telegram user id.
//!
//! Created once at startup and handed to every handler so the admin can
//! `/reply` to a customer by `@username`.

use chrono::{DateTime, Utc};
use dashmap::DashMap;
use std::sync::Arc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeenUser {
    pub user_id: i64,
    pub username: String,
    pub last_message: String,
    pub last_seen: DateTime<Utc>,
}

#[derive(Clone, Default)]
pub struct UserSessions {
    users: Arc<DashMap<i64, SeenUser>>,
}

impl UserSessions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Users without a Telegram username are recorded under their numeric id.
    pub fn track(&self, user_id: i64, username: Option<&str>, last_message: &str) {
        let username = username
            .map(str::to_string)
            .unwrap_or_else(|| user_id.to_string());

        self.users.insert(
            user_id,
            SeenUser {
                user_id,
                username,
                last_message: last_message.to_string(),
                last_seen: Utc::now(),
            },
        );
    }

    pub fn get(&self, user_id: i64) -> Option<SeenUser> {
        self.users.get(&user_id).map(|entry| entry.value().clone())
    }

    /// Case-insensitive, with or without a leading `@`.
    pub fn find_by_username(&self, username: &str) -> Option<i64> {
        let wanted = username.trim_start_matches('@');
        self.users
            .iter()
            .find(|entry| entry.username.eq_ignore_ascii_case(wanted))
            .map(|entry| *entry.key())
    }

    /// Numeric targets are taken as user ids even if never seen.
    pub fn resolve(&self, target: &str) -> Option<i64> {
        let target = target.trim().trim_start_matches('@');
        match target.parse::<i64>() {
            Ok(id) => Some(id),
            Err(_) => self.find_by_username(target),
        }
    }

    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}
