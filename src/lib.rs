//! # Food Order Bot
//!
//! A Telegram bot that takes food delivery orders: menu selection, quantities,
//! contact details, delivery scheduling and confirmation.
//!
//! ## Features
//! - Delivery window rules (weekdays 7-11 PM, weekends 4-11 PM)
//! - Quarter-hour delivery slots for the rest of today
//! - Orders stored in SQLite and forwarded to an admin chat
//! - Admin `/reply` to customers by id or username

/// Telegram commands, dialogue state and update handlers
pub mod bot;
/// Configuration from environment variables
pub mod config;
/// SQLite connection and order records
pub mod database;
/// Delivery window and slot rules
pub mod delivery;
/// Menu, cart and order draft
pub mod order;
/// Health endpoints, admin notifications and the user directory
pub mod services;
/// Validation, formatting and logging helpers
pub mod utils;
