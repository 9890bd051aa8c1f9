use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while reading or writing refiner documents
#[derive(Debug, Error)]
pub enum RefinerError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid refiner document: {source}")]
    Parse {
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to serialize refiner document: {source}")]
    Serialize {
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl RefinerError {
    /// Underlying I/O error kind, if the failure came from the filesystem
    pub fn io_kind(&self) -> Option<std::io::ErrorKind> {
        match self {
            RefinerError::Read { source, .. } | RefinerError::Write { source, .. } => {
                Some(source.kind())
            }
            _ => None,
        }
    }
}
