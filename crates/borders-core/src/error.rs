// crates/borders-core/src/error.rs
use std::path::PathBuf;
use thiserror::Error;

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, BordersError>;

/// Errors produced while loading, converting or writing border data.
#[derive(Debug, Error)]
pub enum BordersError {
    /// Input file or directory could not be opened.
    #[error("not found: {0}")]
    NotFound(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed country document, or a failure while serializing output.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A `.poly` file did not follow the expected line structure.
    #[error("{}:{line}: {kind}", .path.display())]
    Poly {
        path: PathBuf,
        line: usize,
        kind: PolyErrorKind,
    },
}

/// What went wrong inside a `.poly` file.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PolyErrorKind {
    #[error("Unknown line: `{0}`")]
    UnknownLine(String),

    #[error("ring index is not an integer: `{0}`")]
    BadRingIndex(String),

    #[error("expected two floating-point values, got `{0}`")]
    BadCoordinate(String),

    #[error("file is empty, expected a boundary name")]
    MissingName,

    #[error("input ended inside an open ring (missing END)")]
    UnterminatedRing,

    #[error("unexpected content after final END: `{0}`")]
    TrailingContent(String),

    /// The line could not be read, e.g. it is not valid UTF-8.
    #[error("cannot read line: {0}")]
    Unreadable(String),
}

impl BordersError {
    /// Returns the `.poly` error kind, if this is a parse failure.
    pub fn poly_kind(&self) -> Option<&PolyErrorKind> {
        match self {
            BordersError::Poly { kind, .. } => Some(kind),
            _ => None,
        }
    }
}
