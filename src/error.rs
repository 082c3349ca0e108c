//! Error types for the grid composer

use thiserror::Error;

/// Result type alias for composer operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while editing the grid or composing it.
///
/// The `Display` text of every variant is the status message shown to the
/// user, so callers can surface `err.to_string()` directly.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Bytes could not be decoded as an image
    #[error("Please select an image file ({0})")]
    InvalidImageData(String),

    /// Slot index outside the 10x5 grid
    #[error("Slot {0} is outside the grid")]
    SlotOutOfRange(usize),

    /// Placement into a slot that already holds an image
    #[error("Slot {0} already holds an image")]
    SlotOccupied(usize),

    /// Duplication requested from an empty slot
    #[error("Slot {0} has no image to duplicate")]
    EmptySlot(usize),

    /// Duplication from the last slot
    #[error("Cannot duplicate from the last cell (slot {0})")]
    NoNextSlot(usize),

    /// Duplication target already filled
    #[error("The next cell is already filled (slot {0})")]
    TargetOccupied(usize),

    /// Composition requested with nothing placed
    #[error("Place at least one image")]
    EmptyGrid,

    /// Canvas would exceed the configured maximum
    #[error("Composite of {width}x{height} pixels is too large")]
    CanvasTooLarge { width: u64, height: u64 },

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    ConfigError(String),

    /// Failed to encode the composite
    #[error("Encoding failed: {0}")]
    EncodeError(String),
}

impl Error {
    /// Whether the error was caused by user input or grid state, as opposed
    /// to an internal failure.
    pub fn is_user_error(&self) -> bool {
        !matches!(self, Error::EncodeError(_) | Error::ConfigError(_))
    }
}
