//! Playlist with navigation policy
//!
//! Owns the ordered track list plus the current/previous pointers and the
//! shuffle flag. Navigation is two-phase: [`Playlist::plan`] picks the target
//! index without touching state, and [`Playlist::move_to`] commits it once the
//! track actually loaded. A failed load therefore never moves the pointer.

use crate::error::{PlaybackError, Result};
use crate::formats::SupportedFormats;
use crate::shuffle::draw_index;
use crate::types::{Direction, Track};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Ordered, append-only track list
///
/// Invariant: `current` is `None` or a valid index into `tracks`. The list
/// never shrinks within a session.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Playlist {
    tracks: Vec<Track>,
    current: Option<usize>,
    previous: Option<usize>,
    shuffle: bool,
}

impl Playlist {
    /// Create an empty playlist
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a track if its extension is in the allow-list
    ///
    /// Returns the index of the new track.
    pub fn append(&mut self, path: impl Into<PathBuf>, formats: &SupportedFormats) -> Result<usize> {
        let path = path.into();
        if !formats.is_supported(&path) {
            return Err(PlaybackError::UnsupportedFormat(path));
        }

        self.tracks.push(Track::new(path));
        Ok(self.tracks.len() - 1)
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    /// Allocated capacity of the backing storage
    pub fn capacity(&self) -> usize {
        self.tracks.capacity()
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }

    /// Track at the current pointer, if any
    pub fn current(&self) -> Option<&Track> {
        self.current.and_then(|index| self.tracks.get(index))
    }

    /// Track at `index`, or `None` when out of bounds
    pub fn nth(&self, index: usize) -> Option<&Track> {
        self.tracks.get(index)
    }

    pub fn current_index(&self) -> Option<usize> {
        self.current
    }

    /// Index that was current before the last navigation
    pub fn previous_index(&self) -> Option<usize> {
        self.previous
    }

    pub fn is_shuffle(&self) -> bool {
        self.shuffle
    }

    pub fn set_shuffle(&mut self, enabled: bool) {
        self.shuffle = enabled;
    }

    /// Flip shuffle mode, returning the new state
    pub fn toggle_shuffle(&mut self) -> bool {
        self.shuffle = !self.shuffle;
        self.shuffle
    }

    /// Pick the index `direction` leads to, without changing any state
    ///
    /// Returns `None` for playlists of zero or one track. In shuffle mode both
    /// directions are the same random draw, which never lands on the track
    /// that is playing now (the one that will become `previous_index`).
    pub fn plan<R: Rng + ?Sized>(&self, direction: Direction, rng: &mut R) -> Option<usize> {
        let len = self.tracks.len();
        if len <= 1 {
            return None;
        }

        if self.shuffle {
            return draw_index(rng, len, self.current.or(self.previous));
        }

        let target = match (self.current, direction) {
            (None, Direction::Next) => 0,
            (None, Direction::Previous) => len - 1,
            (Some(current), Direction::Next) => (current + 1) % len,
            (Some(current), Direction::Previous) => (current + len - 1) % len,
        };
        Some(target)
    }

    /// Make `index` the current track and count the play
    ///
    /// The index that was current before the move becomes `previous_index`.
    pub fn move_to(&mut self, index: usize) -> Result<()> {
        let track = self
            .tracks
            .get_mut(index)
            .ok_or(PlaybackError::IndexOutOfBounds(index))?;
        track.mark_played();

        if let Some(current) = self.current {
            self.previous = Some(current);
        }
        self.current = Some(index);
        Ok(())
    }

    /// Forget the current pointer, keeping the tracks
    ///
    /// Used when the current track can no longer be opened.
    pub fn clear_current(&mut self) {
        if let Some(current) = self.current.take() {
            self.previous = Some(current);
        }
    }

    /// Drop pointers that do not index into the list
    ///
    /// Applied to playlists that crossed a reload boundary.
    pub fn validated(mut self) -> Self {
        let len = self.tracks.len();
        if self.current.is_some_and(|index| index >= len) {
            self.current = None;
        }
        if self.previous.is_some_and(|index| index >= len) {
            self.previous = None;
        }
        self
    }
}
