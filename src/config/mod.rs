pub mod toml_config;

use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use toml_config::TomlConfig;

pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

/// 合併後的最終設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerSettings {
    pub bind_addr: SocketAddr,
    pub log_format: LogFormat,
    pub log_level: Option<String>,
    pub verbose: bool,
}

impl ServerSettings {
    /// Merges sources. Explicit command line values win over the file,
    /// the file wins over defaults.
    pub fn resolve(
        file: Option<&TomlConfig>,
        bind_addr: Option<&str>,
        json_logs: bool,
        verbose: bool,
    ) -> Result<Self> {
        let log_level = file.and_then(|f| f.log_level());
        if let Some(level) = log_level {
            validation::validate_log_level("logging.level", level)?;
        }

        // 只驗證合併後的位址，命令列值可覆蓋檔案中無效的設定
        let (field, bind_addr) = match (bind_addr, file.and_then(|f| f.bind_addr())) {
            (Some(addr), _) => ("bind_addr", addr),
            (None, Some(addr)) => ("server.bind_addr", addr),
            (None, None) => ("bind_addr", DEFAULT_BIND_ADDR),
        };
        let bind_addr = validation::validate_socket_addr(field, bind_addr)?;

        let log_format = if json_logs {
            LogFormat::Json
        } else {
            file.and_then(|f| f.log_format()).unwrap_or_default()
        };

        Ok(Self {
            bind_addr,
            log_format,
            log_level: log_level.map(str::to_string),
            verbose,
        })
    }
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 8080)),
            log_format: LogFormat::Compact,
            log_level: None,
            verbose: false,
        }
    }
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Default, Serialize, Deserialize, Parser)]
#[command(name = "news-cqrs")]
#[command(about = "News listing and creation service with an in-process mediator")]
pub struct CliConfig {
    #[arg(long, help = "Address to listen on [default: 127.0.0.1:8080]")]
    pub bind_addr: Option<String>,

    #[arg(short, long, help = "Path to a TOML configuration file")]
    pub config: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    pub fn load_settings(&self) -> Result<ServerSettings> {
        let file = match &self.config {
            Some(path) => Some(TomlConfig::from_file(path)?),
            None => None,
        };

        ServerSettings::resolve(
            file.as_ref(),
            self.bind_addr.as_deref(),
            self.json_logs,
            self.verbose,
        )
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.config {
            validation::validate_non_empty_string("config", path)?;
        }
        if let Some(addr) = &self.bind_addr {
            validation::validate_socket_addr("bind_addr", addr)?;
        }
        Ok(())
    }
}
