use tracing::{error, info, warn};

/// Logs command start with consistent format
pub fn log_command_start(command: &str, details: Option<&str>) {
    match details {
        Some(d) => info!("CMD_START: {} - {}", command, d),
        None => info!("CMD_START: {}", command),
    }
}

/// Logs command completion with consistent format
pub fn log_command_success(command: &str, details: Option<&str>) {
    match details {
        Some(d) => info!("CMD_SUCCESS: {} - {}", command, d),
        None => info!("CMD_SUCCESS: {}", command),
    }
}

/// Logs command errors with consistent format
pub fn log_command_error(command: &str, error: &str) {
    error!("CMD_ERROR: {} - {}", command, error);
}

/// Logs rejected user input with consistent format
pub fn log_validation_error(command: &str, field: &str, value: &str, error: &str) {
    warn!(
        "VALIDATION_ERROR: {} - {} field '{}' invalid: {}",
        command, field, value, error
    );
}

/// Logs system events with consistent format
pub fn log_system_event(event: &str, details: Option<&str>) {
    match details {
        Some(d) => info!("SYSTEM: {} - {}", event, d),
        None => info!("SYSTEM: {}", event),
    }
}
