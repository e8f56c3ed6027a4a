//! Error types for tether cooking.
//!
//! Bad geometry is not an error here: it is reported through
//! [`CookerStatus`](crate::CookerStatus). These errors cover misuse of the
//! API itself.

use thiserror::Error;

/// Result type for tether operations.
pub type TetherResult<T> = Result<T, TetherError>;

/// Errors that can occur when configuring a cook or reading its output.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TetherError {
    /// A caller-supplied output buffer cannot hold the tether data.
    #[error(
        "output buffers too small: need {required} elements, got {anchors} anchors and {lengths} lengths"
    )]
    BufferTooSmall {
        /// Elements required (particles times tethers per particle).
        required: usize,
        /// Length of the anchor buffer.
        anchors: usize,
        /// Length of the rest length buffer.
        lengths: usize,
    },

    /// Configuration error.
    #[error("invalid tether configuration: {0}")]
    InvalidConfig(String),
}

impl TetherError {
    /// Create an invalid configuration error.
    pub fn invalid_config(msg: impl Into<String>) -> Self {
        Self::InvalidConfig(msg.into())
    }
}
