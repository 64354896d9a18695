//! Reloop - Player Session
//!
//! Reload-safe session layer for the Reloop audio player.
//!
//! This crate provides:
//! - Session lifecycle across code swaps (capture / restore)
//! - Per-frame input handling, auto-advance and drawing
//! - Scoped font and icon ownership
//! - Configuration from `reloop.toml` and `RELOOP_*` environment variables
//!
//! # Architecture
//!
//! The host owns the window, the audio device and the swap mechanism. It
//! calls [`Session::frame`] once per frame and brackets every code swap with
//! [`Session::capture`] and [`Session::restore`], or lets [`reload`] do both.
//! Only a [`SessionSnapshot`] crosses the boundary: the playlist plus a few
//! playback scalars. Stream, font and texture handles are released by
//! capture and acquired again by restore.

mod assets;
pub mod config;
mod error;
pub mod input;
mod reload;
pub mod render;
pub mod screen;
mod session;
mod snapshot;

// Public exports
pub use crate::config::{AssetSettings, PlayerConfig, UiSettings};
pub use assets::Assets;
pub use error::{Result, SessionError};
pub use input::{FrameInput, Key, WindowSize};
pub use reload::reload;
pub use render::{Canvas, Color, Font, Rect, ResourceLoader, Texture};
pub use session::{AppState, Session};
pub use snapshot::SessionSnapshot;

// Re-export the playback core so hosts need one dependency
pub use reloop_playback;
