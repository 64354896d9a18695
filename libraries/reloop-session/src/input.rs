//! Per-frame input handed in by the host

use reloop_playback::Vec2;
use std::path::PathBuf;

/// Logical keys the session reacts to
///
/// The host maps physical keys onto these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Pause / resume
    Space,
    /// Seek backward
    Left,
    /// Seek forward
    Right,
    /// Volume up
    Up,
    /// Volume down
    Down,
    NextTrack,
    PreviousTrack,
    ToggleShuffle,
    ToggleMute,
}

/// Window size in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WindowSize {
    pub width: u32,
    pub height: u32,
}

impl WindowSize {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

/// Everything that happened since the previous frame
#[derive(Debug, Clone)]
pub struct FrameInput {
    /// Wall-clock time in seconds
    pub now: f64,

    /// Current window size
    pub window: WindowSize,

    /// Keys pressed this frame, in order
    pub keys: Vec<Key>,

    /// Left-click position, if the button was pressed this frame
    pub click: Option<Vec2>,

    /// Files dropped onto the window this frame
    pub dropped_files: Vec<PathBuf>,
}

impl FrameInput {
    /// A frame with no events
    pub fn idle(now: f64, window: WindowSize) -> Self {
        Self {
            now,
            window,
            keys: Vec::new(),
            click: None,
            dropped_files: Vec::new(),
        }
    }

    pub fn with_keys(mut self, keys: impl IntoIterator<Item = Key>) -> Self {
        self.keys.extend(keys);
        self
    }

    pub fn with_click(mut self, position: Vec2) -> Self {
        self.click = Some(position);
        self
    }

    pub fn with_dropped<I, P>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.dropped_files.extend(paths.into_iter().map(Into::into));
        self
    }
}
