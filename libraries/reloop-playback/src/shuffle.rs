//! Shuffle draw for playlist navigation
//!
//! Shuffle has no fixed order: "next" and "previous" are the same uniform
//! draw over the whole playlist, resampled until it differs from the index
//! that must not repeat.

use rand::Rng;

/// Draw a uniformly random index in `0..len`, never returning `avoid`
///
/// Returns `None` when `len <= 1`: with a single track there is nothing else
/// to draw, and resampling would never terminate.
pub fn draw_index<R: Rng + ?Sized>(rng: &mut R, len: usize, avoid: Option<usize>) -> Option<usize> {
    if len <= 1 {
        return None;
    }

    loop {
        let candidate = rng.gen_range(0..len);
        if Some(candidate) != avoid {
            return Some(candidate);
        }
    }
}
