use chrono::NaiveDateTime;
use chrono_tz::Tz;
use teloxide::Bot;

use crate::config::Config;
use crate::database::connection::DatabaseManager;
use crate::services::{notifier::AdminNotifier, user_sessions::UserSessions};
use crate::utils::datetime::local_now;

/// Shared collaborators handed to every handler.
#[derive(Clone)]
pub struct AppContext {
    pub db: DatabaseManager,
    pub sessions: UserSessions,
    pub notifier: AdminNotifier,
    pub admin_chat_id: i64,
    pub support_contact: String,
    pub timezone: Tz,
}

impl AppContext {
    pub fn new(bot: Bot, db: DatabaseManager, sessions: UserSessions, config: &Config) -> Self {
        Self {
            db,
            sessions,
            notifier: AdminNotifier::new(bot, config.admin_chat_id),
            admin_chat_id: config.admin_chat_id,
            support_contact: config.support_contact.clone(),
            timezone: config.timezone,
        }
    }

    /// Current wall-clock time in the business timezone.
    pub fn now(&self) -> NaiveDateTime {
        local_now(self.timezone)
    }

    pub fn is_admin(&self, user_id: i64) -> bool {
        user_id == self.admin_chat_id
    }
}
