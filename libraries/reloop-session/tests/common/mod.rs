//! Fake host collaborators shared by the session tests

#![allow(dead_code)]

use reloop_session::reloop_playback::{AudioBackend, DecodedStream, PlaybackError, Vec2};
use reloop_session::{
    Canvas, Color, Font, FrameInput, PlayerConfig, Rect, ResourceLoader, SessionError, Texture,
    WindowSize,
};
use std::cell::RefCell;
use std::collections::{HashMap, HashSet};
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

pub const WINDOW: WindowSize = WindowSize::new(1000, 600);

pub fn config() -> PlayerConfig {
    init_tracing();
    PlayerConfig::default()
}

/// An empty frame at `now` in the default window
pub fn frame(now: f64) -> FrameInput {
    FrameInput::idle(now, WINDOW)
}

// ===== Audio =====

#[derive(Debug, Default)]
pub struct AudioProbe {
    pub opened: Vec<PathBuf>,
    pub live: usize,
    pub released: usize,
    pub volume: f32,
    pub playing: bool,
    pub time_played: f32,
    pub seeks: Vec<f32>,
}

/// Audio backend with scripted track lengths; unknown paths fail to open
pub struct FakeAudio {
    lengths: HashMap<PathBuf, f32>,
    probe: Rc<RefCell<AudioProbe>>,
}

impl FakeAudio {
    pub fn new(tracks: &[(&str, f32)]) -> Self {
        Self {
            lengths: tracks
                .iter()
                .map(|(path, length)| (PathBuf::from(path), *length))
                .collect(),
            probe: Rc::new(RefCell::new(AudioProbe::default())),
        }
    }

    pub fn remove(&mut self, path: &str) {
        self.lengths.remove(Path::new(path));
    }

    pub fn set_time(&self, seconds: f32) {
        self.probe.borrow_mut().time_played = seconds;
    }

    pub fn probe(&self) -> std::cell::Ref<'_, AudioProbe> {
        self.probe.borrow()
    }

    pub fn shared_probe(&self) -> Rc<RefCell<AudioProbe>> {
        Rc::clone(&self.probe)
    }
}

impl AudioBackend for FakeAudio {
    fn open_stream(
        &mut self,
        path: &Path,
    ) -> reloop_session::reloop_playback::Result<Box<dyn DecodedStream>> {
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
            probe: Rc::clone(&self.probe),
        }))
    }
}

struct FakeStream {
    length: f32,
    probe: Rc<RefCell<AudioProbe>>,
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
            probe.time_played += 1.0 / 60.0;
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

// ===== Resources =====

#[derive(Debug, Default)]
pub struct ResourceProbe {
    pub fonts_loaded: usize,
    pub textures_loaded: usize,
    pub live: usize,
    pub released: usize,
}

/// Loader counting acquisitions and releases; listed paths fail to load
#[derive(Default)]
pub struct FakeLoader {
    pub failing: HashSet<PathBuf>,
    probe: Rc<RefCell<ResourceProbe>>,
}

impl FakeLoader {
    pub fn new() -> Self {
        init_tracing();
        Self::default()
    }

    pub fn fail_on(&mut self, path: impl Into<PathBuf>) {
        self.failing.insert(path.into());
    }

    pub fn probe(&self) -> std::cell::Ref<'_, ResourceProbe> {
        self.probe.borrow()
    }

    pub fn shared_probe(&self) -> Rc<RefCell<ResourceProbe>> {
        Rc::clone(&self.probe)
    }

    fn check(&self, path: &Path) -> reloop_session::Result<()> {
        if self.failing.contains(path) {
            return Err(SessionError::ResourceLoad {
                path: path.to_path_buf(),
                reason: "missing".to_string(),
            });
        }
        let mut probe = self.probe.borrow_mut();
        probe.live += 1;
        Ok(())
    }
}

impl ResourceLoader for FakeLoader {
    fn load_font(&mut self, path: &Path, size: f32) -> reloop_session::Result<Box<dyn Font>> {
        self.check(path)?;
        self.probe.borrow_mut().fonts_loaded += 1;
        Ok(Box::new(FakeFont {
            size,
            probe: Rc::clone(&self.probe),
        }))
    }

    fn load_texture(&mut self, path: &Path) -> reloop_session::Result<Box<dyn Texture>> {
        self.check(path)?;
        self.probe.borrow_mut().textures_loaded += 1;
        Ok(Box::new(FakeTexture {
            probe: Rc::clone(&self.probe),
        }))
    }
}

/// Monospace font: every glyph is half the size wide
struct FakeFont {
    size: f32,
    probe: Rc<RefCell<ResourceProbe>>,
}

impl Font for FakeFont {
    fn measure(&self, text: &str, size: f32, spacing: f32) -> Vec2 {
        let glyphs = text.chars().count() as f32;
        Vec2::new(glyphs * (size / 2.0 + spacing), self.size.max(size))
    }
}

impl Drop for FakeFont {
    fn drop(&mut self) {
        release(&self.probe);
    }
}

/// 64x64 texture
struct FakeTexture {
    probe: Rc<RefCell<ResourceProbe>>,
}

impl Texture for FakeTexture {
    fn width(&self) -> u32 {
        64
    }

    fn height(&self) -> u32 {
        64
    }
}

impl Drop for FakeTexture {
    fn drop(&mut self) {
        release(&self.probe);
    }
}

fn release(probe: &Rc<RefCell<ResourceProbe>>) {
    let mut probe = probe.borrow_mut();
    probe.live -= 1;
    probe.released += 1;
}

// ===== Canvas =====

#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Clear(Color),
    Text { text: String, position: Vec2 },
    Line { start: Vec2, end: Vec2 },
    RoundedRect(Rect),
    Texture { position: Vec2, scale: f32 },
}

/// Canvas recording every draw call
#[derive(Default)]
pub struct RecordingCanvas {
    pub ops: Vec<DrawOp>,
}

impl RecordingCanvas {
    pub fn texts(&self) -> Vec<&str> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                DrawOp::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    pub fn textures(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, DrawOp::Texture { .. }))
            .count()
    }
}

impl Canvas for RecordingCanvas {
    fn clear(&mut self, color: Color) {
        self.ops.push(DrawOp::Clear(color));
    }

    fn draw_text(
        &mut self,
        _font: &dyn Font,
        text: &str,
        position: Vec2,
        _size: f32,
        _spacing: f32,
        _color: Color,
    ) {
        self.ops.push(DrawOp::Text {
            text: text.to_string(),
            position,
        });
    }

    fn draw_line(&mut self, start: Vec2, end: Vec2, _thickness: f32, _color: Color) {
        self.ops.push(DrawOp::Line { start, end });
    }

    fn draw_rounded_rect(&mut self, rect: Rect, _roundness: f32, _color: Color) {
        self.ops.push(DrawOp::RoundedRect(rect));
    }

    fn draw_texture(&mut self, _texture: &dyn Texture, position: Vec2, scale: f32, _tint: Color) {
        self.ops.push(DrawOp::Texture { position, scale });
    }
}
