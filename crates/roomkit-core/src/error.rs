//! Error handling for RoomKit
//!
//! Provides error types for the layers of the library:
//! - Layout errors (room validation, placement edits, scale resolution)
//! - Persistence errors (design documents and repositories)
//!
//! All error types use `thiserror` for ergonomic error handling. None of them
//! is fatal: the calling UI layer decides whether to report, revert or ignore.

use thiserror::Error;

/// Layout error type
///
/// Represents errors raised by the placement core: invalid rooms, bad
/// placement indices, degenerate view transforms and unknown templates.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LayoutError {
    /// A room dimension is zero, negative or not finite
    #[error("Invalid room {dimension}: {value} (must be a positive number of meters)")]
    InvalidRoomDimension {
        /// The offending dimension name (width, length or height).
        dimension: String,
        /// The rejected value.
        value: f64,
    },

    /// Update or remove addressed a placement index that does not exist
    #[error("Placement index {index} out of range (len {len})")]
    IndexOutOfRange {
        /// The requested index.
        index: usize,
        /// The current length of the placement sequence.
        len: usize,
    },

    /// Scale resolution produced a non-positive or non-finite scale
    #[error("Degenerate view scale {scale}; check room and viewport dimensions")]
    DegenerateScale {
        /// The computed scale.
        scale: f64,
    },

    /// A template id is absent from the session catalog
    #[error("Unknown furniture template: {template_id}")]
    UnknownTemplateReference {
        /// The template id that was not found.
        template_id: String,
    },

    /// A placement field failed validation
    #[error("Invalid placement {field}: {reason}")]
    InvalidPlacement {
        /// The field name.
        field: String,
        /// Why the value was rejected.
        reason: String,
    },

    /// A color is not a `#RGB` / `#RRGGBB` hex string
    #[error("Invalid color '{value}', expected #RGB or #RRGGBB")]
    InvalidColor {
        /// The rejected color string.
        value: String,
    },

    /// A lighting intensity is outside its range
    #[error("Invalid lighting {field}: {value}")]
    InvalidLighting {
        /// The offending field name.
        field: String,
        /// The rejected value.
        value: f64,
    },

    /// A placement referenced by its stable id no longer exists
    #[error("Placement {placement_id} no longer exists")]
    PlacementNotFound {
        /// The stable placement id.
        placement_id: uuid::Uuid,
    },
}

/// Persistence error type
///
/// Represents errors loading or storing design snapshots.
#[derive(Error, Debug)]
pub enum PersistenceError {
    /// No design with the given id
    #[error("Design not found: {id}")]
    DesignNotFound {
        /// The design id.
        id: String,
    },

    /// The backend answered with `success: false`
    #[error("Request rejected: {message}")]
    Rejected {
        /// The backend's message(s), joined.
        message: String,
    },

    /// A successful envelope carried no data
    #[error("Response contained no data")]
    MissingData,

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Main error type for RoomKit
///
/// A unified error type that can represent any error from all layers.
/// This is the primary error type used in public APIs.
#[derive(Error, Debug)]
pub enum Error {
    /// Layout error
    #[error(transparent)]
    Layout(#[from] LayoutError),

    /// Persistence error
    #[error(transparent)]
    Persistence(#[from] PersistenceError),

    /// Standard I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Create an error from a string message
    pub fn other(msg: impl Into<String>) -> Self {
        Error::Other(msg.into())
    }

    /// Check if this is a layout error
    pub fn is_layout_error(&self) -> bool {
        matches!(self, Error::Layout(_))
    }

    /// Check if this is a persistence error
    pub fn is_persistence_error(&self) -> bool {
        matches!(self, Error::Persistence(_))
    }

    /// Check if this error means the addressed placement does not exist
    pub fn is_missing_placement(&self) -> bool {
        matches!(
            self,
            Error::Layout(LayoutError::IndexOutOfRange { .. })
                | Error::Layout(LayoutError::PlacementNotFound { .. })
        )
    }

    /// Returns the layout error, if this is one
    pub fn as_layout(&self) -> Option<&LayoutError> {
        match self {
            Error::Layout(err) => Some(err),
            _ => None,
        }
    }
}

/// Result type using Error
pub type Result<T> = std::result::Result<T, Error>;
