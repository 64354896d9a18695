//! State that survives a reload boundary
//!
//! A snapshot holds plain data only: the playlist and the playback scalars.
//! Stream, font and texture handles never cross the boundary; they are
//! acquired again from this data.

use crate::error::Result;
use reloop_playback::Playlist;
use serde::{Deserialize, Serialize};

/// The opaque session handle owned by the host during a code swap
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    /// Tracks, current/previous pointers and shuffle flag
    pub playlist: Playlist,

    /// Stored volume level (0.0-1.0), independent of mute
    pub volume: f32,

    pub muted: bool,

    pub paused: bool,

    /// Whether a stream was open; false after a failed load left playback idle
    pub loaded: bool,

    /// Seconds into the current track
    pub time_played: f32,
}

impl SessionSnapshot {
    /// Encode for handing across a dynamic-library boundary
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec(self)?)
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        Ok(serde_json::from_slice(bytes)?)
    }
}
