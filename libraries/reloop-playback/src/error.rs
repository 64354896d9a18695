//! Error types for playback management

use std::path::PathBuf;
use thiserror::Error;

/// Playback errors
#[derive(Debug, Error)]
pub enum PlaybackError {
    /// Dropped file extension is not in the allow-list
    #[error("Unsupported format: {0:?}")]
    UnsupportedFormat(PathBuf),

    /// Audio collaborator could not open the stream
    #[error("Failed to open stream {path:?}: {reason}")]
    StreamOpen { path: PathBuf, reason: String },

    /// Stream opened but reports zero frames
    #[error("Stream has no frames: {0:?}")]
    EmptyStream(PathBuf),

    /// No track is currently loaded
    #[error("No track loaded")]
    NoTrackLoaded,

    /// Index out of bounds
    #[error("Index out of bounds: {0}")]
    IndexOutOfBounds(usize),
}

impl PlaybackError {
    /// True for failures where the decoder rejected the file
    pub fn is_decode_failure(&self) -> bool {
        matches!(self, Self::StreamOpen { .. } | Self::EmptyStream(_))
    }
}

/// Result type for playback operations
pub type Result<T> = std::result::Result<T, PlaybackError>;
