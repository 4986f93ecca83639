pub mod health;
pub mod notifier;
pub mod user_sessions;
