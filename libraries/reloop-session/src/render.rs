//! Rendering collaborator traits
//!
//! Rasterization belongs to the host. The session loads fonts and textures
//! through [`ResourceLoader`] and issues draw calls against a [`Canvas`].
//! Resource handles are boxed trait objects; dropping the box releases the
//! resource.

use crate::error::{Result, SessionError};
use reloop_playback::Vec2;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// RGBA color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Parse `#RRGGBB` or `#RRGGBBAA`
    pub fn from_hex(hex: &str) -> Result<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        let invalid = || SessionError::Config(format!("invalid color {:?}", hex));

        if !matches!(digits.len(), 6 | 8) || !digits.is_ascii() {
            return Err(invalid());
        }
        let channel = |i: usize| u8::from_str_radix(&digits[i..i + 2], 16).map_err(|_| invalid());

        Ok(Self {
            r: channel(0)?,
            g: channel(2)?,
            b: channel(4)?,
            a: if digits.len() == 8 { channel(6)? } else { 255 },
        })
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)?;
        if self.a != 255 {
            write!(f, "{:02X}", self.a)?;
        }
        Ok(())
    }
}

impl TryFrom<String> for Color {
    type Error = SessionError;

    fn try_from(value: String) -> Result<Self> {
        Self::from_hex(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_string()
    }
}

/// Axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    /// Square of side `2 * radius` centred on `center`
    pub fn around(center: Vec2, radius: f32) -> Self {
        Self {
            x: center.x - radius,
            y: center.y - radius,
            width: radius * 2.0,
            height: radius * 2.0,
        }
    }

    /// Grow by `padding` on every side
    pub fn padded(self, padding: f32) -> Self {
        Self {
            x: self.x - padding,
            y: self.y - padding,
            width: self.width + padding * 2.0,
            height: self.height + padding * 2.0,
        }
    }
}

/// A loaded font
pub trait Font {
    /// Size of `text` rendered at `size` with `spacing`
    fn measure(&self, text: &str, size: f32, spacing: f32) -> Vec2;
}

/// A loaded texture
pub trait Texture {
    fn width(&self) -> u32;

    fn height(&self) -> u32;
}

/// Loads fonts and textures
pub trait ResourceLoader {
    fn load_font(&mut self, path: &Path, size: f32) -> Result<Box<dyn Font>>;

    fn load_texture(&mut self, path: &Path) -> Result<Box<dyn Texture>>;
}

/// Draw target for one frame
pub trait Canvas {
    fn clear(&mut self, color: Color);

    fn draw_text(
        &mut self,
        font: &dyn Font,
        text: &str,
        position: Vec2,
        size: f32,
        spacing: f32,
        color: Color,
    );

    fn draw_line(&mut self, start: Vec2, end: Vec2, thickness: f32, color: Color);

    /// `roundness` runs from 0.0 (square corners) to 1.0 (fully round)
    fn draw_rounded_rect(&mut self, rect: Rect, roundness: f32, color: Color);

    fn draw_texture(&mut self, texture: &dyn Texture, position: Vec2, scale: f32, tint: Color);
}
