use crate::utils::error::{BazaiError, Result};
use crate::utils::validation::Validate;
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_ENDPOINT: &str =
    "https://generativelanguage.googleapis.com/v1beta/models/gemini-2.0-flash-exp:generateContent";
pub const API_KEY_ENV: &str = "GEMINI_API_KEY";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub advice: AdviceConfig,
    #[serde(default)]
    pub storybook: StorybookConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdviceConfig {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    pub api_key: Option<String>,
    #[serde(default = "default_temperature")]
    pub temperature: f64,
    #[serde(default = "default_max_output_tokens")]
    pub max_output_tokens: u32,
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorybookConfig {
    #[serde(default = "default_output_path")]
    pub output_path: String,
    #[serde(default = "default_bundle_filename")]
    pub filename: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default)]
    pub format: LogFormat,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_temperature() -> f64 {
    0.7
}

fn default_max_output_tokens() -> u32 {
    2048
}

fn default_output_path() -> String {
    "./output".to_string()
}

fn default_bundle_filename() -> String {
    "storybook.zip".to_string()
}

impl Default for AdviceConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            api_key: None,
            temperature: default_temperature(),
            max_output_tokens: default_max_output_tokens(),
            timeout_seconds: None,
        }
    }
}

impl Default for StorybookConfig {
    fn default() -> Self {
        Self {
            output_path: default_output_path(),
            filename: default_bundle_filename(),
        }
    }
}

impl AppConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(BazaiError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| BazaiError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 有指定路徑就讀檔，否則使用預設值
    pub fn load(path: Option<&str>) -> Result<Self> {
        match path {
            Some(path) => {
                tracing::debug!("Loading configuration from: {}", path);
                Self::from_file(path)
            }
            None => Ok(Self::default()),
        }
    }

    /// 替換環境變數 (例如 ${GEMINI_API_KEY})
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| BazaiError::ConfigError {
            message: format!("invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        crate::utils::validation::validate_url("advice.endpoint", &self.advice.endpoint)?;
        crate::utils::validation::validate_range(
            "advice.temperature",
            self.advice.temperature,
            0.0,
            2.0,
        )?;
        crate::utils::validation::validate_positive_number(
            "advice.max_output_tokens",
            self.advice.max_output_tokens,
            1,
        )?;
        crate::utils::validation::validate_path(
            "storybook.output_path",
            &self.storybook.output_path,
        )?;
        crate::utils::validation::validate_non_empty_string(
            "storybook.filename",
            &self.storybook.filename,
        )?;
        Ok(())
    }

    /// 依序採用: 命令列參數、設定檔、GEMINI_API_KEY 環境變數
    pub fn resolve_api_key(&self, cli_key: Option<&str>) -> Option<String> {
        cli_key
            .map(str::to_string)
            .or_else(|| self.advice.api_key.clone())
            .or_else(|| std::env::var(API_KEY_ENV).ok())
            .filter(|key| usable_key(key))
    }
}

// 未被替換的 ${VAR} 視為沒有金鑰
fn usable_key(key: &str) -> bool {
    let key = key.trim();
    !key.is_empty() && !key.contains("${")
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[advice]
endpoint = "https://api.example.com/v1/generate"
api_key = "secret"
temperature = 0.3
max_output_tokens = 512
timeout_seconds = 30

[storybook]
output_path = "./books"
filename = "tale.zip"

[logging]
format = "json"
"#;

        let config = AppConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.advice.endpoint, "https://api.example.com/v1/generate");
        assert_eq!(config.advice.api_key.as_deref(), Some("secret"));
        assert_eq!(config.advice.max_output_tokens, 512);
        assert_eq!(config.advice.timeout_seconds, Some(30));
        assert_eq!(config.storybook.filename, "tale.zip");
        assert_eq!(config.logging.format, LogFormat::Json);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = AppConfig::from_toml_str("").unwrap();
        assert_eq!(config.advice.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.advice.temperature, 0.7);
        assert_eq!(config.advice.max_output_tokens, 2048);
        assert!(config.advice.timeout_seconds.is_none());
        assert_eq!(config.storybook.output_path, "./output");
        assert_eq!(config.logging.format, LogFormat::Compact);
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("BAZAI_TEST_ENDPOINT", "https://test.api.com/generate");

        let toml_content = r#"
[advice]
endpoint = "${BAZAI_TEST_ENDPOINT}"
"#;

        let config = AppConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.advice.endpoint, "https://test.api.com/generate");

        std::env::remove_var("BAZAI_TEST_ENDPOINT");
    }

    #[test]
    fn test_unsubstituted_key_counts_as_missing() {
        let toml_content = r#"
[advice]
api_key = "${BAZAI_TEST_MISSING_KEY}"
"#;

        let config = AppConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(
            config.advice.api_key.as_deref(),
            Some("${BAZAI_TEST_MISSING_KEY}")
        );
        assert!(!usable_key(config.advice.api_key.as_deref().unwrap()));
        assert_eq!(
            config.resolve_api_key(Some("from-flag")).as_deref(),
            Some("from-flag")
        );
    }

    #[test]
    fn test_config_validation() {
        let bad_endpoint = AppConfig::from_toml_str("[advice]\nendpoint = \"invalid-url\"\n").unwrap();
        assert!(bad_endpoint.validate().is_err());

        let bad_temperature = AppConfig::from_toml_str("[advice]\ntemperature = 3.5\n").unwrap();
        assert!(bad_temperature.validate().is_err());

        let bad_tokens = AppConfig::from_toml_str("[advice]\nmax_output_tokens = 0\n").unwrap();
        assert!(bad_tokens.validate().is_err());
    }

    #[test]
    fn test_nan_temperature_is_rejected() {
        let config = AppConfig::from_toml_str("[advice]\ntemperature = nan\n").unwrap();
        assert!(config.advice.temperature.is_nan());
        assert!(matches!(
            config.validate(),
            Err(BazaiError::InvalidConfigValueError { .. })
        ));
    }

    #[test]
    fn test_invalid_toml_is_reported() {
        let err = AppConfig::from_toml_str("[advice\nendpoint = ").unwrap_err();
        assert!(matches!(err, BazaiError::ConfigValidationError { .. }));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[storybook]\noutput_path = \"./from-file\"\n")
            .unwrap();

        let config = AppConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.storybook.output_path, "./from-file");
        assert_eq!(config.storybook.filename, "storybook.zip");
    }
}
