use thiserror::Error;

/// Errors raised while building or loading a world.
///
/// Ordinary game outcomes (a wrong key, an item that is too heavy, an
/// unknown name) are not errors; those come back as `bool` or `Option`.
#[derive(Debug, Error)]
pub enum WorldError {
    /// Wrapper around IO errors (reading seed files).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Wrapper around JSON decoding errors for seed files.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// An exit or lookup named a zone the world does not contain.
    #[error("unknown zone: {0}")]
    UnknownZone(String),

    /// A zone with the same name (ignoring case) is already registered.
    #[error("duplicate zone: {0}")]
    DuplicateZone(String),

    /// Seed data is structurally valid JSON but describes an impossible world.
    #[error("invalid seed: {0}")]
    InvalidSeed(String),
}
