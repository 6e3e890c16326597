use std::path::PathBuf;

/// Errors surfaced by configuration checks and the file front-end.
///
/// The mining algorithms themselves are infallible: zero support prunes a
/// branch and a zero-support antecedent yields confidence 0.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A threshold fell outside the closed unit interval (or was NaN).
    #[error("{name} must be within [0, 1], got {value}")]
    InvalidThreshold { name: &'static str, value: f64 },

    #[error("failed to access {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read transactions: {0}")]
    Read(#[from] std::io::Error),

    #[error("failed to serialise results: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
