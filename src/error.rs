use thiserror::Error;

/// Errors that can cross the crate boundary.
///
/// Heuristic mismatches inside the simulation are not errors; they degrade to
/// empty output or no state change. Only the transport boundary and real I/O
/// can fail.
#[derive(Debug, Error)]
pub enum Error {
    #[error("transport failure: {0}")]
    Transport(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
