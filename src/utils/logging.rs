use tracing::{debug, error, info, warn};

/// Logs an incoming command with consistent format
pub fn log_command(command: &str, user: &str, user_id: i64, chat_id: i64) {
    info!("CMD: /{} by {}({}) in chat {}", command, user, user_id, chat_id);
}

/// Logs a conversation step transition
pub fn log_order_step(step: &str, user: &str, user_id: i64, details: Option<&str>) {
    match details {
        Some(d) => debug!("ORDER_STEP: {} for {}({}) - {}", step, user, user_id, d),
        None => debug!("ORDER_STEP: {} for {}({})", step, user, user_id),
    }
}

/// Logs a successfully persisted order
pub fn log_order_placed(order_id: &str, user: &str, user_id: i64, total: i64, delivery_time: &str) {
    info!(
        "ORDER_PLACED: {} by {}({}) total ₹{} for {}",
        order_id, user, user_id, total, delivery_time
    );
}

/// Logs rejected customer input
pub fn log_validation_error(step: &str, value: &str, error: &str, user: &str, user_id: i64) {
    warn!(
        "VALIDATION_ERROR: {} value '{}' invalid: {} - user {}({})",
        step, value, error, user, user_id
    );
}

/// Logs database operations with consistent format
pub fn log_database_operation(operation: &str, table: &str, details: Option<&str>) {
    match details {
        Some(d) => debug!("DB_OP: {} on {} - {}", operation, table, d),
        None => debug!("DB_OP: {} on {}", operation, table),
    }
}

/// Logs database errors with consistent format
pub fn log_database_error(operation: &str, table: &str, error: &str) {
    error!("DB_ERROR: {} on {} failed: {}", operation, table, error);
}

/// Logs system events with consistent format
pub fn log_system_event(event: &str, details: Option<&str>) {
    match details {
        Some(d) => info!("SYSTEM: {} - {}", event, d),
        None => info!("SYSTEM: {}", event),
    }
}
