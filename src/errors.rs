use std::path::PathBuf;
use thiserror::Error;

/// Top-level errors. These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum AssetError {
    #[error("source image not found: {0}")]
    SourceMissing(PathBuf),

    #[error("image error for {path}: {source}")]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("cannot create {path}: {source}")]
    Create {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot bind {addr}: {source}")]
    Bind {
        addr: String,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error: {context}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },
}

impl AssetError {
    /// Create an image error with the affected path.
    pub fn image(path: impl Into<PathBuf>, source: image::ImageError) -> Self {
        Self::Image {
            path: path.into(),
            source,
        }
    }

    /// Create a creation error for an output path.
    pub fn create(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Create {
            path: path.into(),
            source,
        }
    }

    /// Create an I/O error with context.
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            AssetError::SourceMissing(_) => crate::exitcode::NOINPUT,
            AssetError::Image { .. } => crate::exitcode::DATAERR,
            AssetError::Create { .. } => crate::exitcode::CANTCREAT,
            AssetError::Bind { .. } => crate::exitcode::UNAVAILABLE,
            AssetError::Io { .. } => crate::exitcode::IOERR,
        }
    }
}

/// Result type for asset operations.
pub type AssetResult<T> = Result<T, AssetError>;
