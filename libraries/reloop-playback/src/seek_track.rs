//! Seek-track geometry and cursor sync
//!
//! The bar spans the window horizontally with a 1/20 margin on each side and
//! sits 1/13 of the height above the bottom edge. The cursor position is a
//! pure function of `time_played / length`.

use serde::{Deserialize, Serialize};

/// 2D point in window coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Visual progress bar
#[derive(Debug, Clone, PartialEq)]
pub struct SeekTrack {
    start: Vec2,
    end: Vec2,
    thickness: f32,
    cursor: Vec2,
    cursor_radius: f32,
}

impl SeekTrack {
    /// Lay out the bar for a `width` x `height` window, cursor at the start
    pub fn new(width: u32, height: u32, thickness: f32, cursor_radius: f32) -> Self {
        let (start, end) = bar_endpoints(width, height);
        Self {
            start,
            end,
            thickness,
            cursor: start,
            cursor_radius,
        }
    }

    /// Recompute the bar for a new window size
    ///
    /// The cursor keeps its horizontal offset until the next playback update
    /// but moves to the new bar height right away.
    pub fn resize(&mut self, width: u32, height: u32) {
        let (start, end) = bar_endpoints(width, height);
        self.start = start;
        self.end = end;
        self.cursor.y = start.y;
    }

    /// Place the cursor for the given progress, returning the capped ratio
    pub fn sync(&mut self, time_played: f32, length: f32) -> f32 {
        let ratio = progress_ratio(time_played, length);
        self.cursor.x = self.start.x + ratio * self.span();
        ratio
    }

    /// Move the cursor directly under a click
    pub fn move_cursor_to(&mut self, x: f32) {
        self.cursor.x = x.clamp(self.start.x, self.end.x);
    }

    /// True if `point` falls on the bar or within its vertical tolerance band
    ///
    /// The band extends `3 * thickness` above and below the bar.
    pub fn hit_test(&self, point: Vec2) -> bool {
        let band = self.thickness + self.thickness * 2.0;
        point.x >= self.start.x
            && point.x <= self.end.x
            && point.y >= self.start.y - band
            && point.y <= self.end.y + band
    }

    /// Track time matching a horizontal position on the bar
    pub fn time_at(&self, x: f32, length: f32) -> f32 {
        let span = self.span();
        if span <= 0.0 {
            return 0.0;
        }
        ((x - self.start.x) / span).clamp(0.0, 1.0) * length
    }

    fn span(&self) -> f32 {
        self.end.x - self.start.x
    }

    pub fn start(&self) -> Vec2 {
        self.start
    }

    pub fn end(&self) -> Vec2 {
        self.end
    }

    pub fn thickness(&self) -> f32 {
        self.thickness
    }

    pub fn cursor(&self) -> Vec2 {
        self.cursor
    }

    pub fn cursor_radius(&self) -> f32 {
        self.cursor_radius
    }
}

fn bar_endpoints(width: u32, height: u32) -> (Vec2, Vec2) {
    let margin_x = (width / 20) as f32;
    let y = height.saturating_sub(height / 13) as f32;
    (
        Vec2::new(margin_x, y),
        Vec2::new(width as f32 - margin_x, y),
    )
}

/// `time_played / length`, capped into 0.0-1.0
pub fn progress_ratio(time_played: f32, length: f32) -> f32 {
    if length <= 0.0 || time_played.is_nan() {
        return 0.0;
    }
    (time_played / length).clamp(0.0, 1.0)
}
