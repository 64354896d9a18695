//! Scoped ownership of fonts and icon textures
//!
//! Everything is acquired in [`Assets::acquire`] and released when the value
//! is dropped, so a session either holds a complete set of handles or none.

use crate::config::AssetSettings;
use crate::error::Result;
use crate::render::{Font, ResourceLoader, Texture};
use reloop_playback::Icon;
use tracing::{debug, info};

/// Font and icon handles owned by the session
pub struct Assets {
    font: Box<dyn Font>,
    muted: Box<dyn Texture>,
    unmuted: Box<dyn Texture>,
    shuffle: Box<dyn Texture>,
    crossed_shuffle: Box<dyn Texture>,
}

impl Assets {
    /// Load the font and all icons
    ///
    /// If any load fails, the handles already acquired are dropped before
    /// the error is returned.
    pub fn acquire(
        loader: &mut dyn ResourceLoader,
        settings: &AssetSettings,
        font_size: f32,
    ) -> Result<Self> {
        let font = loader.load_font(&settings.font, font_size)?;
        let muted = loader.load_texture(&settings.muted_icon)?;
        let unmuted = loader.load_texture(&settings.unmuted_icon)?;
        let shuffle = loader.load_texture(&settings.shuffle_icon)?;
        let crossed_shuffle = loader.load_texture(&settings.crossed_shuffle_icon)?;

        info!(font = %settings.font.display(), "Assets acquired");
        Ok(Self {
            font,
            muted,
            unmuted,
            shuffle,
            crossed_shuffle,
        })
    }

    pub fn font(&self) -> &dyn Font {
        self.font.as_ref()
    }

    pub fn icon(&self, icon: Icon) -> &dyn Texture {
        match icon {
            Icon::Muted => self.muted.as_ref(),
            Icon::Unmuted => self.unmuted.as_ref(),
            Icon::Shuffle => self.shuffle.as_ref(),
            Icon::CrossedShuffle => self.crossed_shuffle.as_ref(),
        }
    }
}

impl Drop for Assets {
    fn drop(&mut self) {
        debug!("Releasing font and icon textures");
    }
}
