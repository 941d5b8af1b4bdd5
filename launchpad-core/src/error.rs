use thiserror::Error;

/// Errors surfaced by the store. Absent rows are `Option`, never an error;
/// these cover genuine persistence and document-shape failures only.
#[derive(Debug, Error)]
pub enum Error {
    #[error("store error: {0}")]
    Store(#[from] rusqlite::Error),

    #[error("document error: {0}")]
    Document(#[from] serde_json::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("could not determine a data directory for the database")]
    DataDir,
}

pub type Result<T> = std::result::Result<T, Error>;
