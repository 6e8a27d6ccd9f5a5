//! Infrastructure error type.

use std::path::PathBuf;

use crate::registry::RegistryError;

/// Errors from starting or running the service.
///
/// Request-level failures (404, 422, ...) are HTTP responses, not `Error`s.
/// This type covers binding the listener and loading seed data.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("io: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to read seed file {path}: {source}")]
    SeedRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse seed file {path}: {source}")]
    SeedParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Registry(#[from] RegistryError),
}

pub type Result<T> = std::result::Result<T, Error>;
