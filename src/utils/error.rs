use crate::core::requests::RequestKind;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum NewsError {
    #[error("No handler registered for request: {kind}")]
    HandlerNotRegistered { kind: RequestKind },

    #[error("Handler already registered for request: {kind}")]
    DuplicateHandler { kind: RequestKind },

    #[error("Handler registered under {kind} cannot accept that request")]
    HandlerMismatch { kind: RequestKind },

    #[error("Handler for {kind} returned an unexpected response")]
    UnexpectedResponse { kind: RequestKind },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}': {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("HTTP server error: {message}")]
    ServerError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Dispatch,
    Configuration,
    Io,
    Server,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl NewsError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            NewsError::HandlerNotRegistered { .. }
            | NewsError::DuplicateHandler { .. }
            | NewsError::HandlerMismatch { .. }
            | NewsError::UnexpectedResponse { .. } => ErrorCategory::Dispatch,
            NewsError::ConfigError { .. }
            | NewsError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            NewsError::IoError(_) => ErrorCategory::Io,
            NewsError::ServerError { .. } => ErrorCategory::Server,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            // 分派表錯誤代表啟動配置有誤，不可繼續
            ErrorCategory::Dispatch => ErrorSeverity::Critical,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Io | ErrorCategory::Server => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            NewsError::HandlerNotRegistered { kind } => {
                format!("Register a handler for {} before starting the server", kind)
            }
            NewsError::DuplicateHandler { kind } => {
                format!("Remove the second registration for {}", kind)
            }
            NewsError::HandlerMismatch { .. } | NewsError::UnexpectedResponse { .. } => {
                "Check that each handler is registered under its own request kind".to_string()
            }
            NewsError::ConfigError { .. } => {
                "Check the configuration file and command line flags".to_string()
            }
            NewsError::InvalidConfigValueError { field, .. } => {
                format!("Fix the value of '{}' and restart", field)
            }
            NewsError::IoError(_) => "Check file paths and permissions".to_string(),
            NewsError::ServerError { .. } => {
                "Make sure the bind address is free and reachable".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Dispatch => format!("Service misconfigured: {}", self),
            ErrorCategory::Configuration => format!("Invalid configuration: {}", self),
            ErrorCategory::Io => format!("File access failed: {}", self),
            ErrorCategory::Server => format!("Server failed: {}", self),
        }
    }

    /// 對應程序結束碼
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, NewsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dispatch_errors_are_critical() {
        let err = NewsError::HandlerNotRegistered {
            kind: RequestKind::AddNews,
        };
        assert_eq!(err.category(), ErrorCategory::Dispatch);
        assert_eq!(err.severity(), ErrorSeverity::Critical);
        assert_eq!(err.exit_code(), 3);
        assert!(err.to_string().contains("AddNews"));
    }

    #[test]
    fn test_config_error_exit_code() {
        let err = NewsError::InvalidConfigValueError {
            field: "server.bind_addr".to_string(),
            value: "nope".to_string(),
            reason: "not a socket address".to_string(),
        };
        assert_eq!(err.exit_code(), 1);
        assert!(err.recovery_suggestion().contains("server.bind_addr"));
        assert!(err.user_friendly_message().starts_with("Invalid configuration"));
    }
}
