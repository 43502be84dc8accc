use crate::config::{validate_provider, CliConfig, ConfigProvider, DEFAULT_BIND};
use crate::utils::error::{Result, StudentError};
use crate::utils::logger::LogFormat;
use crate::utils::validation::{validate_required_field, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;
use std::time::Duration;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub server: ServerSection,
    pub college_service: CollegeServiceSection,
    #[serde(default)]
    pub store: StoreSection,
    #[serde(default)]
    pub logging: LoggingSection,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ServerSection {
    pub bind: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CollegeServiceSection {
    pub base_url: Option<String>,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StoreSection {
    pub data_file: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingSection {
    #[serde(default)]
    pub format: LogFormat,
}

fn env_var_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\$\{([^}]+)\}").expect("static regex is valid"))
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(|e| StudentError::ConfigError {
            message: format!(
                "cannot read config file {}: {}",
                path.as_ref().display(),
                e
            ),
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed = Self::substitute_env_vars(content);
        let config: TomlConfig = toml::from_str(&processed)?;
        validate_required_field("college_service.base_url", &config.college_service.base_url)?;
        Ok(config)
    }

    /// Replaces `${NAME}` with the value of environment variable `NAME`.
    /// Unset variables are left untouched.
    fn substitute_env_vars(content: &str) -> String {
        env_var_pattern()
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn apply_cli_overrides(&mut self, cli: &CliConfig) {
        if let Some(bind) = &cli.bind {
            tracing::info!("Bind address overridden to: {}", bind);
            self.server.bind = Some(bind.clone());
        }
        if let Some(url) = &cli.college_service_url {
            tracing::info!("College service URL overridden to: {}", url);
            self.college_service.base_url = Some(url.clone());
        }
        if cli.college_timeout_seconds.is_some() {
            self.college_service.timeout_seconds = cli.college_timeout_seconds;
        }
        if cli.data_file.is_some() {
            self.store.data_file = cli.data_file.clone();
        }
    }
}

impl ConfigProvider for TomlConfig {
    fn bind_address(&self) -> &str {
        self.server.bind.as_deref().unwrap_or(DEFAULT_BIND)
    }

    fn college_service_url(&self) -> &str {
        // presence is checked when the file is parsed
        self.college_service.base_url.as_deref().unwrap_or_default()
    }

    fn college_timeout(&self) -> Option<Duration> {
        self.college_service.timeout_seconds.map(Duration::from_secs)
    }

    fn data_file(&self) -> Option<&str> {
        self.store.data_file.as_deref()
    }

    fn log_format(&self) -> LogFormat {
        self.logging.format
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_provider(self, "config.")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    const SAMPLE: &str = r#"
[server]
bind = "0.0.0.0:8080"

[college_service]
base_url = "http://colleges.internal:9001"
timeout_seconds = 10

[store]
data_file = "./data/students.json"

[logging]
format = "json"
"#;

    #[test]
    fn test_parse_full_config() {
        let config = TomlConfig::from_toml_str(SAMPLE).unwrap();

        assert_eq!(config.bind_address(), "0.0.0.0:8080");
        assert_eq!(config.college_service_url(), "http://colleges.internal:9001");
        assert_eq!(config.college_timeout(), Some(Duration::from_secs(10)));
        assert_eq!(config.data_file(), Some("./data/students.json"));
        assert_eq!(config.log_format(), LogFormat::Json);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_minimal_config_uses_defaults() {
        let config = TomlConfig::from_toml_str(
            r#"
[college_service]
base_url = "http://localhost:9001"
"#,
        )
        .unwrap();

        assert_eq!(config.bind_address(), DEFAULT_BIND);
        assert_eq!(config.college_timeout(), None);
        assert_eq!(config.data_file(), None);
        assert_eq!(config.log_format(), LogFormat::Text);
    }

    #[test]
    fn test_missing_base_url_is_rejected() {
        let result = TomlConfig::from_toml_str("[college_service]\ntimeout_seconds = 3\n");
        assert!(matches!(
            result,
            Err(StudentError::MissingConfigError { .. })
        ));
    }

    #[test]
    fn test_invalid_toml_is_rejected() {
        assert!(matches!(
            TomlConfig::from_toml_str("[college_service\nbase_url ="),
            Err(StudentError::TomlParse(_))
        ));
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("STUDENT_INFO_TEST_COLLEGE_HOST", "colleges.test");
        let config = TomlConfig::from_toml_str(
            r#"
[college_service]
base_url = "http://${STUDENT_INFO_TEST_COLLEGE_HOST}:9001"

[store]
data_file = "${STUDENT_INFO_TEST_UNSET_VAR}"
"#,
        )
        .unwrap();

        assert_eq!(config.college_service_url(), "http://colleges.test:9001");
        assert_eq!(config.data_file(), Some("${STUDENT_INFO_TEST_UNSET_VAR}"));
    }

    #[test]
    fn test_cli_overrides_file_values() {
        let mut config = TomlConfig::from_toml_str(SAMPLE).unwrap();
        let cli = CliConfig {
            bind: Some("127.0.0.1:9999".to_string()),
            ..Default::default()
        };

        config.apply_cli_overrides(&cli);

        assert_eq!(config.bind_address(), "127.0.0.1:9999");
        assert_eq!(config.college_service_url(), "http://colleges.internal:9001");
    }

    #[test]
    fn test_from_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("student-info.toml");
        std::fs::write(&path, SAMPLE).unwrap();

        let config = TomlConfig::from_file(&path).unwrap();
        assert_eq!(config.bind_address(), "0.0.0.0:8080");

        assert!(TomlConfig::from_file(temp_dir.path().join("missing.toml")).is_err());
    }

    #[test]
    fn test_out_of_range_timeout_fails_validation() {
        let config = TomlConfig::from_toml_str(
            r#"
[college_service]
base_url = "http://localhost:9001"
timeout_seconds = 1000
"#,
        )
        .unwrap();

        assert!(config.validate().is_err());
    }
}
