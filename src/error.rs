use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    /// Validation, server and connection failures; shown as-is
    #[error(transparent)]
    Recommend(#[from] iem_reco_common::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Invalid server URL: {0}")]
    InvalidServerUrl(String),

    #[error("HTTP client error: {0}")]
    HttpClient(#[from] reqwest::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("JSON error: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, CliError>;
