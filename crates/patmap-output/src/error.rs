use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum OutputError {
    #[error("failed to serialize output document: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("failed to write output {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write to console: {0}")]
    Console(#[source] std::io::Error),
}

pub type Result<T> = std::result::Result<T, OutputError>;
