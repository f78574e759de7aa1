use crate::utils::error::{NewsError, Result};
use std::net::SocketAddr;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

pub fn validate_socket_addr(field_name: &str, addr: &str) -> Result<SocketAddr> {
    if addr.trim().is_empty() {
        return Err(NewsError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: addr.to_string(),
            reason: "Address cannot be empty".to_string(),
        });
    }

    addr.parse::<SocketAddr>()
        .map_err(|e| NewsError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: addr.to_string(),
            reason: format!("Invalid socket address: {}", e),
        })
}

pub fn validate_log_level(field_name: &str, level: &str) -> Result<()> {
    validate_non_empty_string(field_name, level)?;

    if !LOG_LEVELS.contains(&level.to_ascii_lowercase().as_str()) {
        return Err(NewsError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: level.to_string(),
            reason: format!("Unsupported log level. Valid levels: {}", LOG_LEVELS.join(", ")),
        });
    }
    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(NewsError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_socket_addr() {
        assert!(validate_socket_addr("bind_addr", "127.0.0.1:8080").is_ok());
        assert!(validate_socket_addr("bind_addr", "[::1]:0").is_ok());
        assert!(validate_socket_addr("bind_addr", "").is_err());
        assert!(validate_socket_addr("bind_addr", "localhost").is_err());
        assert!(validate_socket_addr("bind_addr", "127.0.0.1:99999").is_err());
    }

    #[test]
    fn test_validate_log_level() {
        assert!(validate_log_level("logging.level", "debug").is_ok());
        assert!(validate_log_level("logging.level", "WARN").is_ok());
        assert!(validate_log_level("logging.level", " ").is_err());
        assert!(validate_log_level("logging.level", "loud").is_err());
    }
}
