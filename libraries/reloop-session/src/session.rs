//! Player session - reload-safe lifecycle and per-frame logic
//!
//! The host drives a session through three calls: [`Session::frame`] once per
//! frame, [`Session::capture`] right before the code module is swapped, and
//! [`Session::restore`] right after. Capture releases every resource handle
//! and returns a [`SessionSnapshot`]; restore builds a fresh session from that
//! snapshot alone, reopening the current track at the recorded position.

use crate::{
    assets::Assets,
    config::PlayerConfig,
    error::Result,
    input::{FrameInput, Key, WindowSize},
    render::{Canvas, ResourceLoader},
    screen,
    snapshot::SessionSnapshot,
};
use reloop_playback::{
    AudioBackend, Direction, NotificationKind, Notifier, PlaybackController, Playlist, SeekTarget,
    SeekTrack, SupportedFormats, TickOutcome, Vec2,
};
use std::path::PathBuf;
use tracing::{debug, info, warn};

/// Application screen state
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    /// No track has loaded yet
    WaitingForInput,

    /// At least one track loaded
    Active,
}

/// Live player session
pub struct Session {
    config: PlayerConfig,
    formats: SupportedFormats,
    app_state: AppState,

    playlist: Playlist,
    controller: PlaybackController,
    notifier: Notifier,
    seek_track: SeekTrack,
    window: WindowSize,

    // None once captured
    assets: Option<Assets>,

    // Stream state seen by the first capture, reported again by later ones
    loaded_at_capture: bool,
}

impl Session {
    /// Start an empty session waiting for dropped files
    pub fn new(config: PlayerConfig, loader: &mut dyn ResourceLoader) -> Result<Self> {
        config.validate()?;
        let assets = Assets::acquire(loader, &config.assets, config.ui.font_size)?;

        let window = WindowSize::new(config.ui.initial_width, config.ui.initial_height);
        let session = Self {
            formats: SupportedFormats::new(&config.playback.formats),
            app_state: AppState::WaitingForInput,
            playlist: Playlist::new(),
            controller: PlaybackController::new(&config.playback),
            notifier: Notifier::new(config.ui.notification_duration),
            seek_track: SeekTrack::new(
                window.width,
                window.height,
                config.ui.track_thickness,
                config.ui.cursor_radius,
            ),
            window,
            assets: Some(assets),
            loaded_at_capture: false,
            config,
        };

        info!("Session started");
        Ok(session)
    }

    // ===== Reload boundary =====

    /// Release every resource handle and hand back the surviving state
    ///
    /// Must complete before the code module is swapped. Calling it again
    /// without a restore in between returns the same snapshot and releases
    /// nothing twice.
    pub fn capture(&mut self) -> SessionSnapshot {
        let loaded = if self.is_captured() {
            self.loaded_at_capture
        } else {
            self.controller.is_loaded()
        };
        self.loaded_at_capture = loaded;

        let snapshot = SessionSnapshot {
            playlist: self.playlist.clone(),
            volume: self.controller.volume(),
            muted: self.controller.is_muted(),
            paused: self.controller.is_paused(),
            loaded,
            time_played: self.controller.time_played(),
        };

        let had_resources = self.assets.is_some() || self.controller.is_loaded();
        self.controller.release();
        self.assets = None;

        if had_resources {
            info!(
                tracks = snapshot.playlist.len(),
                current = ?snapshot.playlist.current_index(),
                time_played = snapshot.time_played,
                "Session captured"
            );
        } else {
            debug!("Session already captured");
        }
        snapshot
    }

    /// Rebuild a session from a snapshot after the code swap
    ///
    /// Reacquires font and icons, reopens the current track, seeks it to the
    /// recorded position and reapplies volume and mute. A session that was
    /// idle at capture stays idle on its current track. A track that can no
    /// longer be opened puts the session back to waiting for input. Failing
    /// to load the font or icons is returned as an error.
    pub fn restore(
        snapshot: SessionSnapshot,
        config: PlayerConfig,
        audio: &mut dyn AudioBackend,
        loader: &mut dyn ResourceLoader,
    ) -> Result<Self> {
        let mut session = Self::new(config, loader)?;
        let SessionSnapshot {
            playlist,
            volume,
            muted,
            paused,
            loaded,
            time_played,
        } = snapshot;

        session.playlist = playlist.validated();
        session.controller.set_volume(volume);
        session.controller.set_muted(muted);

        let Some(track) = session.playlist.current() else {
            info!(tracks = session.playlist.len(), "Session restored without a current track");
            return Ok(session);
        };

        if !loaded {
            // A failed load left playback idle; reopening would start it again
            session.app_state = AppState::Active;
            info!(
                path = %track.path().display(),
                "Session restored idle"
            );
            return Ok(session);
        }

        match session
            .controller
            .resume_at(track, time_played, paused, audio)
        {
            Ok(()) => {
                session.app_state = AppState::Active;
                let (time, length) = (session.controller.time_played(), session.controller.length());
                session.seek_track.sync(time, length);
                info!(
                    path = %track.path().display(),
                    time_played = time,
                    "Session restored"
                );
            }
            Err(e) => {
                warn!(
                    path = %track.path().display(),
                    error = %e,
                    "Current track could not be reopened, waiting for input"
                );
                session.playlist.clear_current();
            }
        }

        Ok(session)
    }

    /// True between `capture` and the next `restore`
    pub fn is_captured(&self) -> bool {
        self.assets.is_none()
    }

    // ===== Frame =====

    /// Run one frame: process input, advance playback, then draw
    pub fn frame(&mut self, input: &FrameInput, audio: &mut dyn AudioBackend, canvas: &mut dyn Canvas) {
        self.update(input, audio);
        self.draw(canvas, input.now);
    }

    /// Process one frame of input and playback
    pub fn update(&mut self, input: &FrameInput, audio: &mut dyn AudioBackend) {
        if self.is_captured() {
            debug!("Frame on a captured session ignored");
            return;
        }

        self.sync_window(input.window);
        self.ingest_dropped(&input.dropped_files, audio);

        if self.app_state == AppState::Active {
            for key in &input.keys {
                self.handle_key(*key, input.now, audio);
            }
            if let Some(click) = input.click {
                self.handle_click(click);
            }
        }

        if self.app_state == AppState::Active && self.controller.is_loaded() {
            if self.controller.tick() == TickOutcome::Finished {
                self.auto_advance(audio);
            }
            if self.controller.is_playing() {
                self.sync_cursor();
            }
        }
    }

    /// Draw the current screen
    pub fn draw(&self, canvas: &mut dyn Canvas, now: f64) {
        canvas.clear(self.config.ui.background);
        let Some(assets) = self.assets.as_ref() else {
            return;
        };
        screen::draw(self, assets, canvas, now);
    }

    fn sync_cursor(&mut self) {
        self.seek_track
            .sync(self.controller.time_played(), self.controller.length());
    }

    fn sync_window(&mut self, window: WindowSize) {
        if window != self.window {
            debug!(width = window.width, height = window.height, "Window resized");
            self.window = window;
            self.seek_track.resize(window.width, window.height);
        }
    }

    // ===== Input handling =====

    fn ingest_dropped(&mut self, paths: &[PathBuf], audio: &mut dyn AudioBackend) {
        let mut first_new = None;

        for path in paths {
            match self.playlist.append(path.clone(), &self.formats) {
                Ok(index) => {
                    info!(path = %path.display(), index, "Added to playlist");
                    first_new.get_or_insert(index);
                }
                Err(e) => warn!(path = %path.display(), error = %e, "Ignoring dropped file"),
            }
        }

        let Some(first_new) = first_new else {
            return;
        };
        if self.controller.is_loaded() {
            return;
        }

        // Nothing playing: start the first new track that loads
        for index in first_new..self.playlist.len() {
            if self.play_index(index, audio) {
                break;
            }
        }
    }

    fn handle_key(&mut self, key: Key, now: f64, audio: &mut dyn AudioBackend) {
        match key {
            Key::Space => self.controller.toggle_pause(),
            Key::Right => {
                if self.controller.seek_forward().is_ok() {
                    self.sync_cursor();
                    let step = self.controller.seek_step();
                    self.notifier.post(NotificationKind::SeekForward { step }, now);
                }
            }
            Key::Left => {
                if self.controller.seek_backward().is_ok() {
                    self.sync_cursor();
                    let step = self.controller.seek_step();
                    self.notifier.post(NotificationKind::SeekBackward { step }, now);
                }
            }
            Key::Up => {
                if self.controller.is_loaded() {
                    let level = self.controller.volume_up();
                    self.notifier.post(NotificationKind::VolumeUp { level }, now);
                }
            }
            Key::Down => {
                if self.controller.is_loaded() {
                    let level = self.controller.volume_down();
                    self.notifier.post(NotificationKind::VolumeDown { level }, now);
                }
            }
            Key::NextTrack => {
                if let Some(title) = self.navigate(Direction::Next, audio) {
                    self.notifier.post(NotificationKind::NextTrack { title }, now);
                }
            }
            Key::PreviousTrack => {
                if let Some(title) = self.navigate(Direction::Previous, audio) {
                    self.notifier
                        .post(NotificationKind::PreviousTrack { title }, now);
                }
            }
            Key::ToggleShuffle => {
                let kind = if self.playlist.toggle_shuffle() {
                    NotificationKind::ShuffleOn
                } else {
                    NotificationKind::ShuffleOff
                };
                self.notifier.post(kind, now);
            }
            Key::ToggleMute => {
                let kind = if self.controller.toggle_mute() {
                    NotificationKind::Mute
                } else {
                    NotificationKind::Unmute
                };
                self.notifier.post(kind, now);
            }
        }
    }

    fn handle_click(&mut self, position: Vec2) {
        if !self.seek_track.hit_test(position) || !self.controller.is_playing() {
            return;
        }

        let target = self.seek_track.time_at(position.x, self.controller.length());
        if self.controller.seek(SeekTarget::Absolute(target)).is_ok() {
            self.seek_track.move_cursor_to(position.x);
            debug!(x = position.x, target, "Clicked on seek track");
        }
    }

    // ===== Navigation =====

    /// Move to the next or previous track, returning its title on success
    pub fn navigate(&mut self, direction: Direction, audio: &mut dyn AudioBackend) -> Option<String> {
        let Some(target) = self.playlist.plan(direction, &mut rand::thread_rng()) else {
            debug!(?direction, tracks = self.playlist.len(), "Nothing to navigate to");
            return None;
        };

        if self.play_index(target, audio) {
            self.playlist.current().map(|track| track.title())
        } else {
            None
        }
    }

    fn auto_advance(&mut self, audio: &mut dyn AudioBackend) {
        // A lone track wraps onto itself
        let target = self
            .playlist
            .plan(Direction::Next, &mut rand::thread_rng())
            .or(self.playlist.current_index());

        match target {
            Some(index) => {
                if !self.play_index(index, audio) {
                    warn!(index, "Auto-advance failed, playback is idle");
                }
            }
            None => self.controller.release(),
        }
    }

    /// Load the track at `index` and commit the playlist pointer on success
    fn play_index(&mut self, index: usize, audio: &mut dyn AudioBackend) -> bool {
        let Some(track) = self.playlist.nth(index) else {
            return false;
        };

        match self.controller.load(track, audio) {
            Ok(()) => {
                if let Err(e) = self.playlist.move_to(index) {
                    warn!(error = %e, "Playlist pointer not moved");
                    return false;
                }
                self.app_state = AppState::Active;
                self.seek_track.sync(0.0, self.controller.length());
                true
            }
            Err(e) => {
                warn!(path = %track.path().display(), error = %e, "Couldn't play track");
                false
            }
        }
    }

    // ===== Queries =====

    pub fn app_state(&self) -> AppState {
        self.app_state
    }

    pub fn playlist(&self) -> &Playlist {
        &self.playlist
    }

    pub fn controller(&self) -> &PlaybackController {
        &self.controller
    }

    pub fn notifier(&self) -> &Notifier {
        &self.notifier
    }

    pub fn seek_track(&self) -> &SeekTrack {
        &self.seek_track
    }

    pub fn window(&self) -> WindowSize {
        self.window
    }

    pub fn config(&self) -> &PlayerConfig {
        &self.config
    }
}
