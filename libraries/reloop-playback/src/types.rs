//! Core types for playback management

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// One playable item in the playlist
///
/// The path is fixed once created. Only the play counter changes, and only
/// when the track becomes the active one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Track {
    /// File path handed to the audio collaborator
    path: PathBuf,

    /// Number of times this track became the active track
    play_count: u32,
}

impl Track {
    /// Create a track that has never been played
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            play_count: 0,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn play_count(&self) -> u32 {
        self.play_count
    }

    /// Display title: the final path component
    pub fn title(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.to_string_lossy().into_owned())
    }

    pub(crate) fn mark_played(&mut self) {
        self.play_count = self.play_count.saturating_add(1);
    }
}

/// Playback controller state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlaybackState {
    /// No stream open
    Idle,

    /// Opening a stream (transient, never observed between frames)
    Loading,

    /// Currently playing
    Playing,

    /// Paused mid-track
    Paused,
}

/// Navigation direction through the playlist
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    Next,
    Previous,
}

/// Seek request
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SeekTarget {
    /// Offset in seconds from the current position (may be negative)
    Relative(f32),

    /// Position in seconds from the start of the track
    Absolute(f32),
}

/// Configuration for the playback controller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlaybackConfig {
    /// Initial volume (0.0-1.0, default: 0.5)
    pub default_volume: f32,

    /// Volume change per key press (default: 0.1)
    pub volume_step: f32,

    /// Seek distance per key press in seconds (default: 5.0)
    pub seek_step: f32,

    /// Slack before the end of a track that counts as finished (default: 0.035s)
    pub end_tolerance: f32,

    /// Accepted file extensions, matched case-sensitively
    pub formats: Vec<String>,
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        Self {
            default_volume: 0.5,
            volume_step: 0.1,
            seek_step: 5.0,
            end_tolerance: 0.035,
            formats: crate::formats::DEFAULT_EXTENSIONS
                .iter()
                .map(|ext| (*ext).to_string())
                .collect(),
        }
    }
}
