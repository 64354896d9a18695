//! Error types for the player session

use reloop_playback::PlaybackError;
use std::path::PathBuf;
use thiserror::Error;

/// Session errors
///
/// Only failures the session cannot recover from locally reach the host:
/// missing fonts or icons, bad configuration, snapshot encoding and a
/// failed code swap.
#[derive(Debug, Error)]
pub enum SessionError {
    /// Playback error
    #[error(transparent)]
    Playback(#[from] PlaybackError),

    /// Font or texture could not be loaded
    #[error("Failed to load resource {path:?}: {reason}")]
    ResourceLoad { path: PathBuf, reason: String },

    /// Invalid configuration
    #[error("Configuration error: {0}")]
    Config(String),

    /// Snapshot could not be encoded or decoded
    #[error("Snapshot encoding error: {0}")]
    Snapshot(#[from] serde_json::Error),

    /// The host failed to swap the code module
    #[error("Code swap failed: {0}")]
    Swap(String),
}

/// Result type for session operations
pub type Result<T> = std::result::Result<T, SessionError>;
