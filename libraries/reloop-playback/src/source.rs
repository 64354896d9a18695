//! Audio decoding collaborator traits
//!
//! Decoding and mixing live outside this crate. The controller only needs to
//! open a stream from a path and drive it through these calls.

use crate::error::Result;
use std::path::Path;

/// Opens decoded streams
///
/// Implemented by the host on top of its audio library.
pub trait AudioBackend {
    /// Open a decodable stream for `path`
    ///
    /// Returns an error if the file cannot be opened. A stream that opens
    /// but reports zero frames is rejected by the controller.
    fn open_stream(&mut self, path: &Path) -> Result<Box<dyn DecodedStream>>;
}

/// A single open decoded-stream handle
///
/// Dropping the box releases the handle. Implementors must free the
/// underlying resource in `Drop`, which makes double release impossible.
pub trait DecodedStream {
    /// Total frames in the stream (0 means the decode failed)
    fn frame_count(&self) -> u64;

    /// Start playback from the current position
    fn play(&mut self);

    fn pause(&mut self);

    fn resume(&mut self);

    fn stop(&mut self);

    /// Seek to `seconds` from the start
    fn seek(&mut self, seconds: f32);

    /// Set output volume (0.0-1.0)
    fn set_volume(&mut self, volume: f32);

    /// Feed the mixer; called once per frame while playing
    fn update(&mut self);

    /// Seconds played so far
    fn time_played(&self) -> f32;

    /// Track length in seconds
    fn length(&self) -> f32;

    fn is_playing(&self) -> bool;
}
