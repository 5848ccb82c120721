use thiserror::Error;

#[derive(Error, Debug)]
pub enum BazaiError {
    #[error("Zip operation failed: {0}")]
    ZipError(#[from] zip::result::ZipError),

    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Validation error: {message}")]
    ValidationError { message: String },

    #[error("Classification error: no intensity mapping for mood '{label}'")]
    ClassificationError { label: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    Network,
    Data,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl BazaiError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            BazaiError::ValidationError { .. } => ErrorCategory::Input,
            BazaiError::ConfigError { .. }
            | BazaiError::ConfigValidationError { .. }
            | BazaiError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            BazaiError::ApiError(_) => ErrorCategory::Network,
            BazaiError::ClassificationError { .. } | BazaiError::SerializationError(_) => {
                ErrorCategory::Data
            }
            BazaiError::ZipError(_) | BazaiError::IoError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::High,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Network => ErrorSeverity::Medium,
            ErrorCategory::Data => ErrorSeverity::High,
            ErrorCategory::System => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            BazaiError::ValidationError { .. } => {
                "Provide a name and positive values for height (cm) and weight (kg)"
            }
            BazaiError::ClassificationError { .. } => {
                "Choose one of: Happy, Neutral, Stressed, Tired, Energetic"
            }
            BazaiError::ApiError(_) => "Check the network connection and the advice endpoint",
            BazaiError::ConfigError { .. }
            | BazaiError::ConfigValidationError { .. }
            | BazaiError::InvalidConfigValueError { .. } => {
                "Review the TOML configuration file and command line flags"
            }
            BazaiError::SerializationError(_) => "The data could not be encoded, please report it",
            BazaiError::ZipError(_) | BazaiError::IoError(_) => {
                "Make sure the output directory exists and is writable"
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            // 驗證錯誤直接顯示給使用者
            BazaiError::ValidationError { message } => message.clone(),
            BazaiError::ClassificationError { label } => {
                format!("'{}' is not a supported mood", label)
            }
            BazaiError::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration value '{}' is invalid: {}", field, reason)
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, BazaiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_is_user_facing() {
        let err = BazaiError::ValidationError {
            message: "Please provide valid inputs for name, height, and weight.".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Input);
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert_eq!(
            err.user_friendly_message(),
            "Please provide valid inputs for name, height, and weight."
        );
    }

    #[test]
    fn test_classification_error_category() {
        let err = BazaiError::ClassificationError {
            label: "Sleepy".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Data);
        assert!(err.to_string().contains("Sleepy"));
    }

    #[test]
    fn test_config_errors_are_high_severity() {
        let err = BazaiError::InvalidConfigValueError {
            field: "advice.temperature".to_string(),
            value: "NaN".to_string(),
            reason: "Value must be between 0 and 2".to_string(),
        };
        assert_eq!(err.category(), ErrorCategory::Configuration);
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert!(err.severity() > ErrorSeverity::Medium);
    }

    #[test]
    fn test_io_error_is_critical() {
        let err: BazaiError =
            std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied").into();
        assert_eq!(err.severity(), ErrorSeverity::Critical);
    }
}
