//! Volume control with stepped changes and mute
//!
//! Volume is a linear level in 0.0-1.0. Mute forces the output gain to zero
//! while keeping the stored level, so unmuting restores it exactly.

use serde::{Deserialize, Serialize};

/// Volume controller
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Volume {
    /// Volume level (0.0-1.0)
    level: f32,

    /// Mute state (preserves volume level)
    muted: bool,
}

impl Volume {
    /// Create new volume controller, clamping `level` into 0.0-1.0
    pub fn new(level: f32) -> Self {
        Self {
            level: clamp_level(level),
            muted: false,
        }
    }

    /// Set volume level (0.0-1.0)
    pub fn set_level(&mut self, level: f32) {
        self.level = clamp_level(level);
    }

    /// Get current volume level (0.0-1.0)
    pub fn level(&self) -> f32 {
        self.level
    }

    /// Raise the level by `step`, clamped at 1.0
    pub fn step_up(&mut self, step: f32) {
        self.set_level(self.level + step);
    }

    /// Lower the level by `step`, clamped at 0.0
    pub fn step_down(&mut self, step: f32) {
        self.set_level(self.level - step);
    }

    /// Mute audio (preserves volume level)
    pub fn mute(&mut self) {
        self.muted = true;
    }

    /// Unmute audio (restores previous volume)
    pub fn unmute(&mut self) {
        self.muted = false;
    }

    /// Toggle mute state
    pub fn toggle_mute(&mut self) {
        self.muted = !self.muted;
    }

    /// Check if muted
    pub fn is_muted(&self) -> bool {
        self.muted
    }

    /// Volume to push into the stream
    ///
    /// Returns 0.0 if muted, otherwise the stored level
    pub fn gain(&self) -> f32 {
        if self.muted {
            0.0
        } else {
            self.level
        }
    }
}

impl Default for Volume {
    fn default() -> Self {
        Self::new(0.5)
    }
}

fn clamp_level(level: f32) -> f32 {
    if level.is_nan() {
        0.0
    } else {
        level.clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn create_volume() {
        let vol = Volume::new(0.8);
        assert_eq!(vol.level(), 0.8);
        assert!(!vol.is_muted());
    }

    #[test]
    fn set_volume_level_clamps() {
        let mut vol = Volume::new(0.5);
        vol.set_level(0.75);
        assert_eq!(vol.level(), 0.75);

        vol.set_level(1.5);
        assert_eq!(vol.level(), 1.0);

        vol.set_level(-0.2);
        assert_eq!(vol.level(), 0.0);

        vol.set_level(f32::NAN);
        assert_eq!(vol.level(), 0.0);
    }

    #[test]
    fn steps_clamp_at_bounds() {
        let mut vol = Volume::new(0.95);
        vol.step_up(0.1);
        assert_eq!(vol.level(), 1.0);

        let mut vol = Volume::new(0.05);
        vol.step_down(0.1);
        assert_eq!(vol.level(), 0.0);
    }

    #[test]
    fn mute_unmute_preserves_level() {
        let mut vol = Volume::new(0.3);
        vol.mute();
        assert!(vol.is_muted());
        assert_eq!(vol.gain(), 0.0);
        assert_eq!(vol.level(), 0.3);

        vol.unmute();
        assert!(!vol.is_muted());
        assert_eq!(vol.gain(), 0.3);
    }

    #[test]
    fn toggle_mute() {
        let mut vol = Volume::new(0.8);
        vol.toggle_mute();
        assert!(vol.is_muted());
        vol.toggle_mute();
        assert!(!vol.is_muted());
    }

    #[test]
    fn level_changes_while_muted_apply_on_unmute() {
        let mut vol = Volume::new(0.5);
        vol.mute();
        vol.step_down(0.2);
        assert_eq!(vol.gain(), 0.0);
        vol.unmute();
        assert!((vol.gain() - 0.3).abs() < 1e-6);
    }
}
