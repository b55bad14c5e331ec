//! Error types for citymap operations.
//!
//! Every store, model and controller operation returns a [`Result`] instead of
//! aborting. A failed call never leaves the store or the in-memory graph
//! partially updated.
//!
//! ## Error Categorization
//!
//! [`ErrorKind`] uses a 4xx/5xx style categorization:
//! - Input problems (caller's fault): duplicate names, missing names,
//!   unresolved road endpoints, malformed numbers
//! - Internal problems (our fault): database faults, I/O, encoding failures

use thiserror::Error;

/// Result type for citymap operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for citymap operations.
#[derive(Debug, Error)]
pub enum Error {
    /// A location with this name already exists.
    #[error("location '{0}' already exists")]
    DuplicateName(String),

    /// The two locations are already connected by a road.
    #[error("a road between '{start}' and '{end}' already exists")]
    DuplicateRoad {
        /// First endpoint as given by the caller.
        start: String,
        /// Second endpoint as given by the caller.
        end: String,
    },

    /// No location with this name exists.
    #[error("location '{0}' not found")]
    NotFound(String),

    /// A road endpoint does not name an existing location.
    #[error("road endpoint '{0}' does not exist")]
    UnresolvedReference(String),

    /// User-supplied input failed validation.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Database operation failed.
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),

    /// File system operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid configuration file or arguments.
    #[error("configuration error: {0}")]
    Config(String),

    /// Export or import encoding failed.
    #[error("export error: {0}")]
    Export(String),

    /// Internal invariant violated (poisoned lock and similar).
    #[error("internal error: {0}")]
    Internal(String),
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Self::Export(format!("JSON: {e}"))
    }
}

impl From<csv::Error> for Error {
    fn from(e: csv::Error) -> Self {
        Self::Export(format!("CSV: {e}"))
    }
}

/// Categorization of errors for user-visible reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    // === Input Problems (analogous to HTTP 4xx) ===
    /// Add with a name (or road) that already exists
    DuplicateName,

    /// Operation on a name that does not exist
    NotFound,

    /// Road referencing a missing endpoint
    UnresolvedReference,

    /// Non-numeric coordinate or weight, empty name
    InvalidInput,

    /// Unreadable or malformed configuration
    Config,

    // === Internal Problems (analogous to HTTP 5xx) ===
    /// Underlying store fault during a read or write
    PersistenceFailure,

    /// File system failure
    Io,

    /// Encoding failure or broken internal invariant
    Internal,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateName => write!(f, "duplicate name"),
            Self::NotFound => write!(f, "not found"),
            Self::UnresolvedReference => write!(f, "unresolved reference"),
            Self::InvalidInput => write!(f, "invalid input"),
            Self::Config => write!(f, "configuration error"),
            Self::PersistenceFailure => write!(f, "persistence failure"),
            Self::Io => write!(f, "I/O error"),
            Self::Internal => write!(f, "internal error"),
        }
    }
}

impl ErrorKind {
    /// Returns `true` if this is an input problem (4xx-style).
    #[must_use]
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::DuplicateName
                | Self::NotFound
                | Self::UnresolvedReference
                | Self::InvalidInput
                | Self::Config
        )
    }

    /// Returns `true` if this is an internal problem (5xx-style).
    #[must_use]
    pub fn is_internal_error(&self) -> bool {
        matches!(self, Self::PersistenceFailure | Self::Io | Self::Internal)
    }
}

impl Error {
    /// The category this error is reported under.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::DuplicateName(_) | Self::DuplicateRoad { .. } => ErrorKind::DuplicateName,
            Self::NotFound(_) => ErrorKind::NotFound,
            Self::UnresolvedReference(_) => ErrorKind::UnresolvedReference,
            Self::InvalidInput(_) => ErrorKind::InvalidInput,
            Self::Config(_) => ErrorKind::Config,
            Self::Database(_) => ErrorKind::PersistenceFailure,
            Self::Io(_) => ErrorKind::Io,
            Self::Export(_) | Self::Internal(_) => ErrorKind::Internal,
        }
    }

    /// Returns `true` if the caller can fix this by changing the input.
    #[must_use]
    pub fn is_input_error(&self) -> bool {
        self.kind().is_input_error()
    }

    /// Returns `true` if this is a storage, I/O or internal fault.
    #[must_use]
    pub fn is_internal_error(&self) -> bool {
        self.kind().is_internal_error()
    }

    /// Create an invalid input error.
    #[must_use]
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }
}
