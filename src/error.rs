use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum UploadError {
    #[error("Failed to read {}: {source}", .path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("{} is not valid UTF-8", .path.display())]
    Encoding { path: PathBuf },
    #[error("Token is not a valid Authorization header value")]
    InvalidToken(#[from] reqwest::header::InvalidHeaderValue),

    #[error("HTTP error: {0}")]
    Network(#[from] reqwest::Error),
}

impl UploadError {
    /// Splits a text read failure into an encoding error or a plain access error.
    pub fn from_read(path: PathBuf, source: std::io::Error) -> Self {
        if source.kind() == std::io::ErrorKind::InvalidData {
            Self::Encoding { path }
        } else {
            Self::FileAccess { path, source }
        }
    }
}
