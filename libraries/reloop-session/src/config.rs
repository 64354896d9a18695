//! Player configuration

use crate::error::{Result, SessionError};
use crate::render::Color;
use reloop_playback::PlaybackConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default config file looked up by [`PlayerConfig::load`]
pub const CONFIG_FILE: &str = "reloop.toml";

/// Prefix for environment overrides (`RELOOP_UI__FONT_SIZE=40`)
pub const ENV_PREFIX: &str = "RELOOP";

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct PlayerConfig {
    #[serde(default)]
    pub playback: PlaybackConfig,

    #[serde(default = "default_ui")]
    pub ui: UiSettings,

    #[serde(default = "default_assets")]
    pub assets: AssetSettings,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct UiSettings {
    #[serde(default = "default_font_size")]
    pub font_size: f32,

    #[serde(default = "default_font_spacing")]
    pub font_spacing: f32,

    /// Seconds a notification stays on screen
    #[serde(default = "default_notification_duration")]
    pub notification_duration: f64,

    #[serde(default = "default_track_thickness")]
    pub track_thickness: f32,

    #[serde(default = "default_cursor_radius")]
    pub cursor_radius: f32,

    /// Edge length status icons are scaled to
    #[serde(default = "default_icon_size")]
    pub icon_size: f32,

    #[serde(default = "default_initial_width")]
    pub initial_width: u32,

    #[serde(default = "default_initial_height")]
    pub initial_height: u32,

    #[serde(default = "default_background")]
    pub background: Color,

    #[serde(default = "default_text_color")]
    pub text_color: Color,

    #[serde(default = "default_track_color")]
    pub track_color: Color,

    #[serde(default = "default_cursor_color")]
    pub cursor_color: Color,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct AssetSettings {
    #[serde(default = "default_font")]
    pub font: PathBuf,

    #[serde(default = "default_muted_icon")]
    pub muted_icon: PathBuf,

    #[serde(default = "default_unmuted_icon")]
    pub unmuted_icon: PathBuf,

    #[serde(default = "default_shuffle_icon")]
    pub shuffle_icon: PathBuf,

    #[serde(default = "default_crossed_shuffle_icon")]
    pub crossed_shuffle_icon: PathBuf,
}

impl PlayerConfig {
    /// Load configuration from `reloop.toml` (if present) and environment
    pub fn load() -> Result<Self> {
        let path = PathBuf::from(CONFIG_FILE);
        Self::build(path.exists().then_some(path.as_path()))
    }

    /// Load configuration from a specific file, then environment
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Err(SessionError::Config(format!(
                "config file not found: {:?}",
                path
            )));
        }
        Self::build(Some(path))
    }

    fn build(path: Option<&Path>) -> Result<Self> {
        let mut settings = config::Config::builder();

        if let Some(path) = path {
            settings = settings.add_source(config::File::from(path));
        }

        // Override with environment variables (prefixed with RELOOP_)
        settings = settings.add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .list_separator(",")
                .with_list_parse_key("playback.formats")
                .try_parsing(true),
        );

        let config: Self = settings
            .build()
            .map_err(|e| SessionError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| SessionError::Config(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        let playback = &self.playback;

        if !(0.0..=1.0).contains(&playback.default_volume) {
            return Err(SessionError::Config(format!(
                "default_volume must be within 0.0-1.0, got {}",
                playback.default_volume
            )));
        }

        for (name, value) in [
            ("volume_step", playback.volume_step),
            ("seek_step", playback.seek_step),
            ("font_size", self.ui.font_size),
            ("track_thickness", self.ui.track_thickness),
        ] {
            if value.is_nan() || value <= 0.0 {
                return Err(SessionError::Config(format!(
                    "{} must be positive, got {}",
                    name, value
                )));
            }
        }

        if playback.end_tolerance.is_nan() || playback.end_tolerance < 0.0 {
            return Err(SessionError::Config(
                "end_tolerance must not be negative".to_string(),
            ));
        }

        if self.ui.notification_duration.is_nan() || self.ui.notification_duration <= 0.0 {
            return Err(SessionError::Config(
                "notification_duration must be positive".to_string(),
            ));
        }

        if playback
            .formats
            .iter()
            .all(|ext| ext.trim_start_matches('.').is_empty())
        {
            return Err(SessionError::Config(
                "at least one audio format is required".to_string(),
            ));
        }

        Ok(())
    }
}

// Default values
fn default_ui() -> UiSettings {
    UiSettings {
        font_size: default_font_size(),
        font_spacing: default_font_spacing(),
        notification_duration: default_notification_duration(),
        track_thickness: default_track_thickness(),
        cursor_radius: default_cursor_radius(),
        icon_size: default_icon_size(),
        initial_width: default_initial_width(),
        initial_height: default_initial_height(),
        background: default_background(),
        text_color: default_text_color(),
        track_color: default_track_color(),
        cursor_color: default_cursor_color(),
    }
}

fn default_font_size() -> f32 {
    50.0
}

fn default_font_spacing() -> f32 {
    2.0
}

fn default_notification_duration() -> f64 {
    1.0
}

fn default_track_thickness() -> f32 {
    5.0
}

fn default_cursor_radius() -> f32 {
    6.0
}

fn default_icon_size() -> f32 {
    48.0
}

fn default_initial_width() -> u32 {
    1000
}

fn default_initial_height() -> u32 {
    600
}

fn default_background() -> Color {
    Color::rgb(24, 24, 24)
}

fn default_text_color() -> Color {
    Color::rgb(245, 245, 245)
}

fn default_track_color() -> Color {
    Color::rgb(86, 205, 234)
}

fn default_cursor_color() -> Color {
    Color::WHITE
}

fn default_assets() -> AssetSettings {
    AssetSettings {
        font: default_font(),
        muted_icon: default_muted_icon(),
        unmuted_icon: default_unmuted_icon(),
        shuffle_icon: default_shuffle_icon(),
        crossed_shuffle_icon: default_crossed_shuffle_icon(),
    }
}

fn default_font() -> PathBuf {
    PathBuf::from("resources/Alegreya-Regular.ttf")
}

fn default_muted_icon() -> PathBuf {
    PathBuf::from("resources/muted.png")
}

fn default_unmuted_icon() -> PathBuf {
    PathBuf::from("resources/unmuted.png")
}

fn default_shuffle_icon() -> PathBuf {
    PathBuf::from("resources/shuffle.png")
}

fn default_crossed_shuffle_icon() -> PathBuf {
    PathBuf::from("resources/crossed_shuffle.png")
}

impl Default for PlayerConfig {
    fn default() -> Self {
        Self {
            playback: PlaybackConfig::default(),
            ui: default_ui(),
            assets: default_assets(),
        }
    }
}
