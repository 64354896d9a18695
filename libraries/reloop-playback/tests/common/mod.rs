//! Fake audio collaborator shared by the integration tests

#![allow(dead_code)]

use reloop_playback::{AudioBackend, DecodedStream, PlaybackError, Result};
use std::cell::RefCell;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::rc::Rc;
use std::sync::Once;

static INIT: Once = Once::new();

pub fn init_tracing() {
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_test_writer()
            .with_max_level(tracing::Level::DEBUG)
            .try_init();
    });
}

/// Everything the fake streams report back to the test
#[derive(Debug, Default)]
pub struct Probe {
    pub opened: Vec<PathBuf>,
    pub live: usize,
    pub released: usize,
    pub volume: f32,
    pub playing: bool,
    pub time_played: f32,
    pub seeks: Vec<f32>,
}

/// Backend serving scripted track lengths
///
/// Unknown paths fail to open; a length of zero yields an empty stream.
pub struct FakeBackend {
    pub lengths: HashMap<PathBuf, f32>,
    pub probe: Rc<RefCell<Probe>>,
    /// Seconds advanced per `update`
    pub frame_step: f32,
}

impl FakeBackend {
    pub fn new(tracks: &[(&str, f32)]) -> Self {
        Self {
            lengths: tracks
                .iter()
                .map(|(path, length)| (PathBuf::from(path), *length))
                .collect(),
            probe: Rc::new(RefCell::new(Probe::default())),
            frame_step: 1.0 / 60.0,
        }
    }

    pub fn remove(&mut self, path: &str) {
        self.lengths.remove(Path::new(path));
    }

    pub fn set_time(&self, seconds: f32) {
        self.probe.borrow_mut().time_played = seconds;
    }

    pub fn probe(&self) -> std::cell::Ref<'_, Probe> {
        self.probe.borrow()
    }
}

impl AudioBackend for FakeBackend {
    fn open_stream(&mut self, path: &Path) -> Result<Box<dyn DecodedStream>> {
        let Some(length) = self.lengths.get(path).copied() else {
            return Err(PlaybackError::StreamOpen {
                path: path.to_path_buf(),
                reason: "file not found".to_string(),
            });
        };

        let mut probe = self.probe.borrow_mut();
        probe.opened.push(path.to_path_buf());
        probe.live += 1;
        probe.time_played = 0.0;
        probe.playing = false;

        Ok(Box::new(FakeStream {
            length,
            frame_step: self.frame_step,
            probe: Rc::clone(&self.probe),
        }))
    }
}

pub struct FakeStream {
    length: f32,
    frame_step: f32,
    probe: Rc<RefCell<Probe>>,
}

impl DecodedStream for FakeStream {
    fn frame_count(&self) -> u64 {
        (self.length * 44_100.0) as u64
    }

    fn play(&mut self) {
        self.probe.borrow_mut().playing = true;
    }

    fn pause(&mut self) {
        self.probe.borrow_mut().playing = false;
    }

    fn resume(&mut self) {
        self.probe.borrow_mut().playing = true;
    }

    fn stop(&mut self) {
        let mut probe = self.probe.borrow_mut();
        probe.playing = false;
        probe.time_played = 0.0;
    }

    fn seek(&mut self, seconds: f32) {
        let mut probe = self.probe.borrow_mut();
        probe.seeks.push(seconds);
        probe.time_played = seconds;
    }

    fn set_volume(&mut self, volume: f32) {
        self.probe.borrow_mut().volume = volume;
    }

    fn update(&mut self) {
        let mut probe = self.probe.borrow_mut();
        if probe.playing {
            probe.time_played += self.frame_step;
        }
    }

    fn time_played(&self) -> f32 {
        self.probe.borrow().time_played
    }

    fn length(&self) -> f32 {
        self.length
    }

    fn is_playing(&self) -> bool {
        self.probe.borrow().playing
    }
}

impl Drop for FakeStream {
    fn drop(&mut self) {
        let mut probe = self.probe.borrow_mut();
        probe.live -= 1;
        probe.released += 1;
    }
}
