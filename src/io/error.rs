//! Error types for map I/O, session documents and command-line validation
//!
//! Maze generation itself never fails: degenerate parameters are clamped and
//! reported through `GeneratedMaze::degenerate`. Everything around it returns
//! [`MazeError`].

use std::fmt;
use std::path::PathBuf;

/// Main error type for everything outside the generation algorithm
#[derive(Debug)]
pub enum MazeError {
    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Session document could not be parsed or serialized
    Json {
        /// Path of the document, if it came from disk
        path: PathBuf,
        /// Underlying serde error
        source: serde_json::Error,
    },

    /// Session document parsed but its contents are inconsistent
    ///
    /// Raised when:
    /// - `tiles` does not have `grid_h` rows of `grid_w` entries
    /// - An entity lies outside the grid
    InvalidDocument {
        /// Description of what's wrong with the document
        reason: String,
    },

    /// Generation or command-line parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Failed to save a preview image to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },
}

impl fmt::Display for MazeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
            Self::Json { path, source } => {
                write!(f, "Invalid map document '{}': {source}", path.display())
            }
            Self::InvalidDocument { reason } => {
                write!(f, "Inconsistent map document: {reason}")
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for MazeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::FileSystem { source, .. } => Some(source),
            Self::Json { source, .. } => Some(source),
            Self::ImageExport { source, .. } => Some(source),
            Self::InvalidDocument { .. } | Self::InvalidParameter { .. } => None,
        }
    }
}

/// Convenience type alias for map I/O results
pub type Result<T> = std::result::Result<T, MazeError>;

impl From<std::io::Error> for MazeError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

impl From<serde_json::Error> for MazeError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json {
            path: PathBuf::from("<memory>"),
            source: err,
        }
    }
}

impl From<image::ImageError> for MazeError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageExport {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> MazeError {
    MazeError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create an inconsistent document error
pub fn invalid_document(reason: &impl ToString) -> MazeError {
    MazeError::InvalidDocument {
        reason: reason.to_string(),
    }
}
