use thiserror::Error;

/// Errors that can arise while building or loading a world.
#[derive(Debug, Error)]
pub enum WorldError {
    /// Wrapper around IO errors (reading seed files).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Wrapper around JSON seed parse errors.
    #[error("seed parse error: {0}")]
    Json(#[from] serde_json::Error),

    /// An exit, door or start position names a location that was never declared.
    #[error("unknown location: {0}")]
    UnknownLocation(String),

    /// Two locations were declared with the same id.
    #[error("duplicate location: {0}")]
    DuplicateLocation(String),

    /// The world has no start location.
    #[error("world has no start location")]
    MissingStart,
}
