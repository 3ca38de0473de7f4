use thiserror::Error;

#[derive(Error, Debug)]
pub enum StitchError {
    // 錯誤訊息必須帶出狀態碼，診斷日誌才查得到
    #[error("HTTP error! status: {status}")]
    HttpStatusError { status: u16 },

    #[error("Request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV output error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Page is not valid UTF-8: {0}")]
    EncodingError(#[from] std::string::FromUtf8Error),

    #[error("No element with id \"{id}\"")]
    ElementNotFoundError { id: String },

    #[error("Markup error: {message}")]
    MarkupError { message: String },

    #[error("Data processing error: {message}")]
    ProcessingError { message: String },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Network,
    Markup,
    Io,
    Data,
    Config,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    /// 裝飾性的缺漏，頁面照常可用
    Low,
    /// 暫時性失敗，重跑通常就會過
    Medium,
    /// 資料或站台檔案有問題，需要人工處理
    High,
    /// 配置錯誤，流程根本無法開始
    Critical,
}

impl StitchError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::HttpStatusError { .. } | Self::RequestError(_) => ErrorCategory::Network,
            Self::ElementNotFoundError { .. } | Self::MarkupError { .. } => ErrorCategory::Markup,
            Self::IoError(_) => ErrorCategory::Io,
            Self::SerializationError(_)
            | Self::CsvError(_)
            | Self::EncodingError(_)
            | Self::ProcessingError { .. } => ErrorCategory::Data,
            Self::ConfigError { .. }
            | Self::MissingConfigError { .. }
            | Self::InvalidConfigValueError { .. } => ErrorCategory::Config,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::ElementNotFoundError { .. } => ErrorSeverity::Low,
            Self::HttpStatusError { .. } | Self::RequestError(_) => ErrorSeverity::Medium,
            Self::IoError(_)
            | Self::SerializationError(_)
            | Self::CsvError(_)
            | Self::EncodingError(_)
            | Self::MarkupError { .. }
            | Self::ProcessingError { .. } => ErrorSeverity::High,
            Self::ConfigError { .. }
            | Self::MissingConfigError { .. }
            | Self::InvalidConfigValueError { .. } => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            Self::HttpStatusError { status } => {
                format!("Check that the fragment URL is correct (server answered {})", status)
            }
            Self::RequestError(_) => {
                "Check network connectivity and that the fragment host is reachable".to_string()
            }
            Self::IoError(_) => "Check that the site files exist and are writable".to_string(),
            Self::SerializationError(_) | Self::CsvError(_) => {
                "Inspect the fetched data; the endpoint may have changed its format".to_string()
            }
            Self::EncodingError(_) => "Re-save the page as UTF-8".to_string(),
            Self::ElementNotFoundError { id } => {
                format!("Add an element with id=\"{}\" to the page markup", id)
            }
            Self::MarkupError { .. } => "Fix the page markup; an element is never closed".to_string(),
            Self::ProcessingError { .. } => "Re-run with --verbose for details".to_string(),
            Self::ConfigError { .. }
            | Self::MissingConfigError { .. }
            | Self::InvalidConfigValueError { .. } => {
                "Fix the configuration and run again".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::HttpStatusError { status } => {
                format!("The footer fragment could not be fetched (HTTP {})", status)
            }
            Self::RequestError(_) => "The footer fragment host did not respond".to_string(),
            Self::ElementNotFoundError { id } => {
                format!("The page has no element with id \"{}\"", id)
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, StitchError>;
