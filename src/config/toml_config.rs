use crate::config::LogFormat;
use crate::utils::error::{NewsError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    pub server: Option<ServerSection>,
    pub logging: Option<LoggingSection>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServerSection {
    pub bind_addr: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingSection {
    pub level: Option<String>,
    pub format: Option<LogFormat>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(NewsError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| NewsError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${BIND_ADDR})，未設定的變數原樣保留
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| NewsError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn bind_addr(&self) -> Option<&str> {
        self.server.as_ref().and_then(|s| s.bind_addr.as_deref())
    }

    pub fn log_level(&self) -> Option<&str> {
        self.logging.as_ref().and_then(|l| l.level.as_deref())
    }

    pub fn log_format(&self) -> Option<LogFormat> {
        self.logging.as_ref().and_then(|l| l.format)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        // 未設定 bind_addr 時沿用預設值
        if let Some(addr) = self.bind_addr() {
            validation::validate_socket_addr("server.bind_addr", addr)?;
        }

        if let Some(level) = self.log_level() {
            validation::validate_log_level("logging.level", level)?;
        }

        Ok(())
    }
}
