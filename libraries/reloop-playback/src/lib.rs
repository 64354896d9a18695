//! Reloop - Playback Management
//!
//! Platform-agnostic playback core for Reloop.
//!
//! This crate provides:
//! - Append-only playlist with sequential and shuffle navigation
//! - Playback controller driving one decoded stream at a time
//! - Volume control (linear 0.0-1.0, stepped, mute/unmute)
//! - Ephemeral overlay notifications
//! - Seek-track geometry, cursor sync and click hit-testing
//!
//! # Architecture
//!
//! `reloop-playback` knows nothing about windows, fonts or audio devices.
//! Decoding is provided by the host through [`AudioBackend`] and
//! [`DecodedStream`]; dropping a stream box releases it.
//!
//! # Example: Navigation
//!
//! ```rust
//! use reloop_playback::{Direction, Playlist, SupportedFormats};
//!
//! let formats = SupportedFormats::default();
//! let mut playlist = Playlist::new();
//! playlist.append("/music/a.ogg", &formats).unwrap();
//! playlist.append("/music/b.mp3", &formats).unwrap();
//! assert!(playlist.append("/music/cover.png", &formats).is_err());
//!
//! let mut rng = rand::thread_rng();
//! let target = playlist.plan(Direction::Next, &mut rng).unwrap();
//! // Commit only after the track actually loaded
//! playlist.move_to(target).unwrap();
//! assert_eq!(playlist.current_index(), Some(0));
//! ```

mod controller;
mod error;
pub mod formats;
mod notification;
mod playlist;
mod seek_track;
mod shuffle;
mod source;
pub mod types;
mod volume;

// Public exports
pub use controller::{PlaybackController, TickOutcome};
pub use error::{PlaybackError, Result};
pub use formats::SupportedFormats;
pub use notification::{Icon, Notification, NotificationKind, Notifier, Overlay};
pub use playlist::Playlist;
pub use seek_track::{progress_ratio, SeekTrack, Vec2};
pub use shuffle::draw_index;
pub use source::{AudioBackend, DecodedStream};
pub use types::{Direction, PlaybackConfig, PlaybackState, SeekTarget, Track};
pub use volume::Volume;
