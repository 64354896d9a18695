//! Playback controller - drives the single decoded stream
//!
//! State machine: `Idle` -> `Loading` -> `Playing`/`Paused`, back to
//! `Loading` on every track change and to `Idle` on release. At most one
//! stream is open: a load always drops the previous handle before opening
//! the next one.

use crate::{
    error::{PlaybackError, Result},
    source::{AudioBackend, DecodedStream},
    types::{PlaybackConfig, PlaybackState, SeekTarget, Track},
    volume::Volume,
};
use tracing::{debug, info};

/// Result of one frame of playback
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Nothing to do (idle or paused)
    Idle,

    /// Stream advanced, track still running
    Playing,

    /// Time played reached the end of the track
    Finished,
}

/// Owns the active decoded stream and the playback scalars
///
/// `time_played`, `length`, `paused` and the volume outlive the stream:
/// [`PlaybackController::release`] drops the handle but keeps them, so a
/// released controller still reports where playback was.
pub struct PlaybackController {
    state: PlaybackState,
    stream: Option<Box<dyn DecodedStream>>,

    volume: Volume,
    volume_step: f32,
    seek_step: f32,
    end_tolerance: f32,

    paused: bool,
    time_played: f32,
    length: f32,
}

impl PlaybackController {
    /// Create an idle controller
    pub fn new(config: &PlaybackConfig) -> Self {
        Self {
            state: PlaybackState::Idle,
            stream: None,
            volume: Volume::new(config.default_volume),
            volume_step: config.volume_step,
            seek_step: config.seek_step,
            end_tolerance: config.end_tolerance,
            paused: false,
            time_played: 0.0,
            length: 0.0,
        }
    }

    // ===== Loading =====

    /// Load `track` and start it from the beginning
    ///
    /// On failure the controller is left `Idle` and the error is returned;
    /// callers must not move the playlist pointer.
    pub fn load(&mut self, track: &Track, audio: &mut dyn AudioBackend) -> Result<()> {
        self.open(track, audio)?;
        self.time_played = 0.0;
        self.paused = false;
        if let Some(stream) = self.stream.as_mut() {
            stream.play();
        }
        self.state = PlaybackState::Playing;
        info!(path = %track.path().display(), length = self.length, "Track loaded");
        Ok(())
    }

    /// Reopen `track` and continue from `time_played`
    ///
    /// Used after a reload: the play count is not touched and the paused
    /// flag is honoured.
    pub fn resume_at(
        &mut self,
        track: &Track,
        time_played: f32,
        paused: bool,
        audio: &mut dyn AudioBackend,
    ) -> Result<()> {
        self.open(track, audio)?;
        let position = clamp_position(time_played, self.length);
        self.time_played = position;
        self.paused = paused;

        if let Some(stream) = self.stream.as_mut() {
            stream.play();
            stream.seek(position);
            if paused {
                stream.pause();
            }
        }
        self.state = if paused {
            PlaybackState::Paused
        } else {
            PlaybackState::Playing
        };
        info!(path = %track.path().display(), position, paused, "Track resumed");
        Ok(())
    }

    fn open(&mut self, track: &Track, audio: &mut dyn AudioBackend) -> Result<()> {
        self.release();
        self.state = PlaybackState::Loading;

        let path = track.path();
        let mut stream = match audio.open_stream(path) {
            Ok(stream) => stream,
            Err(e) => {
                self.state = PlaybackState::Idle;
                return Err(e);
            }
        };

        if stream.frame_count() == 0 {
            // Dropping the stream releases the failed handle
            drop(stream);
            self.state = PlaybackState::Idle;
            return Err(PlaybackError::EmptyStream(path.to_path_buf()));
        }

        stream.set_volume(self.volume.gain());
        self.length = stream.length();
        self.stream = Some(stream);
        Ok(())
    }

    /// Drop the open stream, if any
    ///
    /// Safe to call repeatedly. Keeps time played, length, volume and the
    /// paused flag.
    pub fn release(&mut self) {
        if let Some(mut stream) = self.stream.take() {
            stream.stop();
            debug!("Released decoded stream");
        }
        self.state = PlaybackState::Idle;
    }

    // ===== Transport =====

    /// Flip between playing and paused; no-op while idle
    pub fn toggle_pause(&mut self) {
        let Some(stream) = self.stream.as_mut() else {
            return;
        };

        match self.state {
            PlaybackState::Playing => {
                stream.pause();
                self.paused = true;
                self.state = PlaybackState::Paused;
            }
            PlaybackState::Paused => {
                stream.resume();
                self.paused = false;
                self.state = PlaybackState::Playing;
            }
            PlaybackState::Idle | PlaybackState::Loading => {}
        }
    }

    /// Seek, clamping the target into `[0, length]`
    ///
    /// Returns the new position, or `NoTrackLoaded` while idle.
    pub fn seek(&mut self, target: SeekTarget) -> Result<f32> {
        let Some(stream) = self.stream.as_mut() else {
            return Err(PlaybackError::NoTrackLoaded);
        };

        let requested = match target {
            SeekTarget::Relative(delta) => self.time_played + delta,
            SeekTarget::Absolute(position) => position,
        };
        let position = clamp_position(requested, self.length);

        stream.seek(position);
        self.time_played = position;
        debug!(requested, position, "Seek");
        Ok(position)
    }

    /// Seek forward by the configured step
    pub fn seek_forward(&mut self) -> Result<f32> {
        self.seek(SeekTarget::Relative(self.seek_step))
    }

    /// Seek backward by the configured step
    pub fn seek_backward(&mut self) -> Result<f32> {
        self.seek(SeekTarget::Relative(-self.seek_step))
    }

    /// Advance the stream one frame
    ///
    /// Only does work while playing. Reports `Finished` once time played is
    /// within the end tolerance of the track length.
    pub fn tick(&mut self) -> TickOutcome {
        if self.state != PlaybackState::Playing {
            return TickOutcome::Idle;
        }
        let Some(stream) = self.stream.as_mut() else {
            return TickOutcome::Idle;
        };

        stream.update();
        self.time_played = stream.time_played();

        if self.time_played >= self.length - self.end_tolerance {
            debug!(time_played = self.time_played, length = self.length, "Track finished");
            TickOutcome::Finished
        } else {
            TickOutcome::Playing
        }
    }

    // ===== Volume =====

    /// Raise volume one step, returning the new level
    pub fn volume_up(&mut self) -> f32 {
        self.volume.step_up(self.volume_step);
        self.apply_volume();
        self.volume.level()
    }

    /// Lower volume one step, returning the new level
    pub fn volume_down(&mut self) -> f32 {
        self.volume.step_down(self.volume_step);
        self.apply_volume();
        self.volume.level()
    }

    /// Set volume level (0.0-1.0)
    pub fn set_volume(&mut self, level: f32) {
        self.volume.set_level(level);
        self.apply_volume();
    }

    /// Toggle mute, returning whether audio is now muted
    pub fn toggle_mute(&mut self) -> bool {
        self.volume.toggle_mute();
        self.apply_volume();
        self.volume.is_muted()
    }

    pub fn set_muted(&mut self, muted: bool) {
        if muted {
            self.volume.mute();
        } else {
            self.volume.unmute();
        }
        self.apply_volume();
    }

    fn apply_volume(&mut self) {
        if let Some(stream) = self.stream.as_mut() {
            stream.set_volume(self.volume.gain());
        }
    }

    // ===== Queries =====

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    /// True while a stream is open
    pub fn is_loaded(&self) -> bool {
        self.stream.is_some()
    }

    pub fn is_playing(&self) -> bool {
        self.state == PlaybackState::Playing
    }

    /// True if the collaborator reports the stream as audible right now
    pub fn is_stream_playing(&self) -> bool {
        self.stream.as_ref().is_some_and(|stream| stream.is_playing())
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn time_played(&self) -> f32 {
        self.time_played
    }

    pub fn length(&self) -> f32 {
        self.length
    }

    pub fn volume(&self) -> f32 {
        self.volume.level()
    }

    pub fn is_muted(&self) -> bool {
        self.volume.is_muted()
    }

    pub fn seek_step(&self) -> f32 {
        self.seek_step
    }

    pub fn volume_step(&self) -> f32 {
        self.volume_step
    }
}

fn clamp_position(position: f32, length: f32) -> f32 {
    if position.is_nan() {
        return 0.0;
    }
    position.clamp(0.0, length.max(0.0))
}
