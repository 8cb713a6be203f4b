use thiserror::Error;

#[derive(Error, Debug)]
pub enum PlacesError {
    #[error("Zip operation failed: {0}")]
    ZipError(#[from] zip::result::ZipError),

    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Provider returned status {status}: {message}")]
    ProviderError { status: String, message: String },

    #[error("Could not resolve address: {address}")]
    UnresolvedAddress { address: String },

    #[error("Unknown category: {value}")]
    UnknownCategory { value: String },

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Data processing error: {message}")]
    ProcessingError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Provider,
    Input,
    Configuration,
    Io,
    Processing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl PlacesError {
    pub fn provider(status: impl Into<String>, message: impl Into<String>) -> Self {
        PlacesError::ProviderError {
            status: status.into(),
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            PlacesError::ApiError(_) => ErrorCategory::Network,
            PlacesError::ProviderError { .. } => ErrorCategory::Provider,
            PlacesError::UnresolvedAddress { .. } | PlacesError::UnknownCategory { .. } => {
                ErrorCategory::Input
            }
            PlacesError::ConfigValidationError { .. }
            | PlacesError::InvalidConfigValueError { .. }
            | PlacesError::MissingConfigError { .. } => ErrorCategory::Configuration,
            PlacesError::IoError(_) | PlacesError::ZipError(_) => ErrorCategory::Io,
            PlacesError::CsvError(_)
            | PlacesError::SerializationError(_)
            | PlacesError::ProcessingError { .. } => ErrorCategory::Processing,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::Low,
            ErrorCategory::Network | ErrorCategory::Provider => ErrorSeverity::Medium,
            ErrorCategory::Configuration | ErrorCategory::Processing => ErrorSeverity::High,
            ErrorCategory::Io => ErrorSeverity::Critical,
        }
    }

    /// 供 Provider 相關錯誤判斷使用（傳輸層或 API 狀態）
    pub fn is_provider_failure(&self) -> bool {
        matches!(
            self.category(),
            ErrorCategory::Network | ErrorCategory::Provider
        )
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            PlacesError::ApiError(_) => "Check the network connection and try again",
            PlacesError::ProviderError { status, .. } if status == "REQUEST_DENIED" => {
                "Check that the API key is valid and the Places API is enabled"
            }
            PlacesError::ProviderError { status, .. } if status == "OVER_QUERY_LIMIT" => {
                "The quota is exhausted; wait before running the search again"
            }
            PlacesError::ProviderError { .. } => "Retry later or inspect the provider response",
            PlacesError::UnresolvedAddress { .. } => {
                "Enter a more specific address (include city and postal code)"
            }
            PlacesError::UnknownCategory { .. } => {
                "Run with --list-categories to see the supported categories"
            }
            PlacesError::ConfigValidationError { .. }
            | PlacesError::InvalidConfigValueError { .. }
            | PlacesError::MissingConfigError { .. } => {
                "Review the command line flags or the TOML configuration file"
            }
            PlacesError::IoError(_) | PlacesError::ZipError(_) => {
                "Make sure the output directory exists and is writable"
            }
            PlacesError::CsvError(_)
            | PlacesError::SerializationError(_)
            | PlacesError::ProcessingError { .. } => "Run again with --verbose for details",
        }
    }

    /// 依嚴重程度決定 CLI 的結束碼
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 4,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            PlacesError::UnresolvedAddress { address } => {
                format!("住所から位置情報を取得できませんでした: {}", address)
            }
            PlacesError::ApiError(_) | PlacesError::ProviderError { .. } => {
                format!("エラーが発生しました: {}", self)
            }
            _ => self.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, PlacesError>;
