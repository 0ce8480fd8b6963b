use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("{0}")]
    Cli(#[from] clap::Error),
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Verbosity of the bridge's own diagnostics (not the forwarded entries).
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for tracing::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => tracing::Level::ERROR,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Trace => tracing::Level::TRACE,
        }
    }
}

#[derive(Parser, Debug, Clone)]
#[command(author, version, about = "Forward a Docker engine log file to the host event sink", long_about = None)]
pub struct Config {
    /// Path to the engine log file to forward
    pub log_file: PathBuf,

    /// Event log category the source is registered under
    pub log_name: String,

    /// Event source name recorded on each forwarded entry
    pub source_name: String,

    /// Diagnostic log level
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    pub log_level: LogLevel,
}

impl Config {
    pub fn from_args<I, T>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let config = Self::try_parse_from(args)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.log_name.trim().is_empty() {
            return Err(ConfigError::InvalidConfig(
                "log name must not be empty".to_string(),
            ));
        }
        if self.source_name.trim().is_empty() {
            return Err(ConfigError::InvalidConfig(
                "source name must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BIN: &str = "docker-log-bridge";

    #[test]
    fn test_three_positional_args() {
        let config =
            Config::from_args([BIN, "/var/log/docker.log", "Application", "Docker"]).unwrap();
        assert_eq!(config.log_file, PathBuf::from("/var/log/docker.log"));
        assert_eq!(config.log_name, "Application");
        assert_eq!(config.source_name, "Docker");
        assert_eq!(config.log_level, LogLevel::Info);
    }

    #[test]
    fn test_missing_args_is_an_error() {
        assert!(Config::from_args([BIN]).is_err());
        assert!(Config::from_args([BIN, "/var/log/docker.log"]).is_err());
        assert!(Config::from_args([BIN, "/var/log/docker.log", "Application"]).is_err());
    }

    #[test]
    fn test_extra_args_are_an_error() {
        let result = Config::from_args([BIN, "a.log", "Application", "Docker", "extra"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_blank_names_are_rejected() {
        let result = Config::from_args([BIN, "a.log", "  ", "Docker"]);
        assert!(matches!(result, Err(ConfigError::InvalidConfig(_))));
    }

    #[test]
    fn test_log_level_flag() {
        let config =
            Config::from_args([BIN, "a.log", "Application", "Docker", "--log-level", "debug"])
                .unwrap();
        assert_eq!(config.log_level, LogLevel::Debug);
    }
}
