//! Ephemeral overlay notifications
//!
//! One notification is live at a time. Posting overwrites whatever was
//! there, and a notification expires on its own once its duration elapses;
//! nothing else removes it.

use serde::{Deserialize, Serialize};

/// Icons an overlay can show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Icon {
    Muted,
    Unmuted,
    Shuffle,
    CrossedShuffle,
}

/// What a notification draws
#[derive(Debug, Clone, PartialEq)]
pub enum Overlay {
    Text(String),
    Icon(Icon),
}

/// The user action a notification reports
#[derive(Debug, Clone, PartialEq)]
pub enum NotificationKind {
    SeekForward { step: f32 },
    SeekBackward { step: f32 },
    VolumeUp { level: f32 },
    VolumeDown { level: f32 },
    NextTrack { title: String },
    PreviousTrack { title: String },
    ShuffleOn,
    ShuffleOff,
    Mute,
    Unmute,
}

impl NotificationKind {
    /// Resolve what to draw for this kind
    pub fn overlay(&self) -> Overlay {
        match self {
            Self::SeekForward { step } => seek_forward(*step),
            Self::SeekBackward { step } => seek_backward(*step),
            Self::VolumeUp { level } | Self::VolumeDown { level } => volume(*level),
            Self::NextTrack { title } => next_track(title),
            Self::PreviousTrack { title } => previous_track(title),
            Self::ShuffleOn => Overlay::Icon(Icon::Shuffle),
            Self::ShuffleOff => Overlay::Icon(Icon::CrossedShuffle),
            Self::Mute => Overlay::Icon(Icon::Muted),
            Self::Unmute => Overlay::Icon(Icon::Unmuted),
        }
    }
}

fn seek_forward(step: f32) -> Overlay {
    Overlay::Text(format!("+ {:.1}s", step))
}

fn seek_backward(step: f32) -> Overlay {
    Overlay::Text(format!("- {:.1}s", step))
}

fn volume(level: f32) -> Overlay {
    Overlay::Text(format!("Volume: {:.0}%", level * 100.0))
}

fn next_track(title: &str) -> Overlay {
    Overlay::Text(format!("Next: {}", title))
}

fn previous_track(title: &str) -> Overlay {
    Overlay::Text(format!("Previous: {}", title))
}

/// A posted notification
#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub kind: NotificationKind,

    /// Wall-clock seconds when posted
    pub started_at: f64,

    /// Display time in seconds
    pub duration: f64,
}

impl Notification {
    /// True while `now - started_at < duration`
    pub fn is_live(&self, now: f64) -> bool {
        now - self.started_at < self.duration
    }
}

/// Holder for the single live notification
#[derive(Debug, Clone)]
pub struct Notifier {
    current: Option<Notification>,
    duration: f64,
}

impl Notifier {
    /// Create a notifier whose notifications last `duration` seconds
    pub fn new(duration: f64) -> Self {
        Self {
            current: None,
            duration,
        }
    }

    /// Show `kind`, replacing any current notification
    pub fn post(&mut self, kind: NotificationKind, now: f64) {
        self.current = Some(Notification {
            kind,
            started_at: now,
            duration: self.duration,
        });
    }

    pub fn is_live(&self, now: f64) -> bool {
        self.live(now).is_some()
    }

    /// The notification to draw at `now`, if it has not expired
    pub fn live(&self, now: f64) -> Option<&Notification> {
        self.current.as_ref().filter(|n| n.is_live(now))
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }
}
