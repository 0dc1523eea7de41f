use thiserror::Error;

#[derive(Error, Debug)]
pub enum MazevolveError {
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Precondition error: {0}")]
    Precondition(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serde error: {0}")]
    Serde(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, MazevolveError>;
