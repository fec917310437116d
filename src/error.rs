use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV Parsing Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("URL Parsing Error: {0}")]
    Url(#[from] url::ParseError),

    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("Duplicate storage key '{0}' in option registry")]
    DuplicateKey(String),
}

pub type CfResult<T> = Result<T, ConfigError>;
