use anyhow::{anyhow, Result};
use chrono_tz::Tz;
use std::env;

use crate::utils::validation::validate_telegram_chat_id;

const DEFAULT_DATABASE_URL: &str = "sqlite:./data/orders.db";
const DEFAULT_SUPPORT_CONTACT: &str = "@support";

#[derive(Debug, Clone)]
pub struct Config {
    pub telegram_bot_token: String,
    pub database_url: String,
    pub http_port: u16,
    /// Chat that receives new-order notices and may use `/reply`.
    pub admin_chat_id: i64,
    pub support_contact: String,
    /// Zone the delivery window hours are expressed in.
    pub timezone: Tz,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let token = env::var("TELEGRAM_BOT_TOKEN")
            .map_err(|_| anyhow!("TELEGRAM_BOT_TOKEN must be set"))?;

        if token.trim().is_empty() {
            return Err(anyhow!("TELEGRAM_BOT_TOKEN must be set"));
        }

        let admin_str = env::var("ADMIN_CHAT_ID")
            .map_err(|_| anyhow!("ADMIN_CHAT_ID must be set"))?;
        let admin_chat_id: i64 = admin_str.trim()
            .parse()
            .map_err(|_| anyhow!("Invalid ADMIN_CHAT_ID"))?;
        validate_telegram_chat_id(admin_chat_id)
            .map_err(|e| anyhow!("Invalid ADMIN_CHAT_ID: {}", e))?;

        let database_url = non_empty_var("DATABASE_URL")
            .unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());

        let port_str = env::var("HTTP_PORT")
            .unwrap_or_else(|_| "3000".to_string());
        let http_port = port_str.trim()
            .parse()
            .map_err(|_| anyhow!("Invalid HTTP_PORT"))?;

        let support_contact = non_empty_var("SUPPORT_CONTACT")
            .unwrap_or_else(|| DEFAULT_SUPPORT_CONTACT.to_string());

        let timezone = match non_empty_var("BUSINESS_TIMEZONE") {
            Some(name) => name.trim()
                .parse::<Tz>()
                .map_err(|_| anyhow!("Invalid BUSINESS_TIMEZONE: {}", name))?,
            None => Tz::UTC,
        };

        Ok(Config {
            telegram_bot_token: token,
            database_url,
            http_port,
            admin_chat_id,
            support_contact,
            timezone,
        })
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}
