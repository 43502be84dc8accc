pub mod toml_config;

use crate::utils::error::Result;
use crate::utils::logger::LogFormat;
use crate::utils::validation::{
    validate_path, validate_range, validate_socket_addr, validate_url, Validate,
};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::time::Duration;

pub const DEFAULT_BIND: &str = "127.0.0.1:8080";
pub const DEFAULT_COLLEGE_SERVICE_URL: &str = "http://localhost:9001";
pub const MAX_TIMEOUT_SECONDS: u64 = 300;

/// Settings the composition root needs, whatever their source.
pub trait ConfigProvider: Validate + Send + Sync {
    fn bind_address(&self) -> &str;
    fn college_service_url(&self) -> &str;
    /// `None` leaves timing to the HTTP client's own defaults.
    fn college_timeout(&self) -> Option<Duration>;
    /// `None` keeps students in memory only.
    fn data_file(&self) -> Option<&str>;
    fn log_format(&self) -> LogFormat;
}

pub(crate) fn validate_provider(config: &dyn ConfigProvider, prefix: &str) -> Result<()> {
    validate_socket_addr(&format!("{}bind", prefix), config.bind_address())?;
    validate_url(
        &format!("{}college_service_url", prefix),
        config.college_service_url(),
    )?;
    if let Some(timeout) = config.college_timeout() {
        validate_range(
            &format!("{}college_timeout_seconds", prefix),
            timeout.as_secs(),
            1,
            MAX_TIMEOUT_SECONDS,
        )?;
    }
    if let Some(path) = config.data_file() {
        validate_path(&format!("{}data_file", prefix), path)?;
    }
    Ok(())
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Parser)]
#[command(name = "student-info")]
#[command(about = "Student records service with college enrichment")]
pub struct CliConfig {
    /// Address to listen on
    #[arg(long, env = "STUDENT_INFO_BIND")]
    pub bind: Option<String>,

    /// Base URL of the college service
    #[arg(long, env = "COLLEGE_SERVICE_URL")]
    pub college_service_url: Option<String>,

    /// Per-request timeout for college lookups
    #[arg(long)]
    pub college_timeout_seconds: Option<u64>,

    /// JSON file backing the student store; in-memory when omitted
    #[arg(long)]
    pub data_file: Option<String>,

    /// TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(long, value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn bind_address(&self) -> &str {
        self.bind.as_deref().unwrap_or(DEFAULT_BIND)
    }

    fn college_service_url(&self) -> &str {
        self.college_service_url
            .as_deref()
            .unwrap_or(DEFAULT_COLLEGE_SERVICE_URL)
    }

    fn college_timeout(&self) -> Option<Duration> {
        self.college_timeout_seconds.map(Duration::from_secs)
    }

    fn data_file(&self) -> Option<&str> {
        self.data_file.as_deref()
    }

    fn log_format(&self) -> LogFormat {
        self.log_format
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_provider(self, "")
    }
}

/// Picks the configuration source: the TOML file when `--config` is given
/// (with explicit CLI flags layered on top), otherwise the command line.
pub fn resolve(cli: &CliConfig) -> Result<Box<dyn ConfigProvider>> {
    let provider: Box<dyn ConfigProvider> = match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from: {}", path);
            let mut config = toml_config::TomlConfig::from_file(path)?;
            config.apply_cli_overrides(cli);
            Box::new(config)
        }
        None => Box::new(cli.clone()),
    };
    provider.validate()?;
    Ok(provider)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_defaults() {
        let config = CliConfig::parse_from(["student-info"]);

        assert_eq!(config.bind_address(), "127.0.0.1:8080");
        assert_eq!(config.college_service_url(), "http://localhost:9001");
        assert_eq!(config.college_timeout(), None);
        assert_eq!(config.data_file(), None);
        assert_eq!(config.log_format(), LogFormat::Text);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_cli_flags() {
        let config = CliConfig::parse_from([
            "student-info",
            "--bind",
            "0.0.0.0:9000",
            "--college-service-url",
            "http://colleges.internal:9001",
            "--college-timeout-seconds",
            "5",
            "--data-file",
            "/var/lib/students.json",
            "--log-format",
            "json",
        ]);

        assert_eq!(config.bind_address(), "0.0.0.0:9000");
        assert_eq!(config.college_timeout(), Some(Duration::from_secs(5)));
        assert_eq!(config.data_file(), Some("/var/lib/students.json"));
        assert_eq!(config.log_format(), LogFormat::Json);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_cli_validation_rejects_bad_values() {
        let bad_url = CliConfig {
            college_service_url: Some("colleges".to_string()),
            ..Default::default()
        };
        assert!(bad_url.validate().is_err());

        let bad_timeout = CliConfig {
            college_timeout_seconds: Some(0),
            ..Default::default()
        };
        assert!(bad_timeout.validate().is_err());

        let bad_bind = CliConfig {
            bind: Some("nowhere".to_string()),
            ..Default::default()
        };
        assert!(bad_bind.validate().is_err());
    }

    #[test]
    fn test_resolve_without_config_file_uses_cli() {
        let cli = CliConfig {
            bind: Some("127.0.0.1:3000".to_string()),
            ..Default::default()
        };

        let provider = resolve(&cli).unwrap();

        assert_eq!(provider.bind_address(), "127.0.0.1:3000");
    }
}
