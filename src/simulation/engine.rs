//! High-level runtime engine settings
//!
//! Validation mode, display scale, trail length and frame pacing
//! used when building and running a `Scenario`

use crate::simulation::presets::AU;
use crate::simulation::trail::DEFAULT_TRAIL_LENGTH;

/// 120 px per AU keeps the inner planets comfortably on screen
pub const DEFAULT_PIXELS_PER_AU: f64 = 120.0;

#[derive(Debug, Clone)]
pub struct Engine {
    pub strict: bool, // false = permissive, true = reject degenerate systems up front
    pub pixels_per_metre: f64, // world -> screen scale
    pub max_trail_length: usize, // trail points kept per body
    pub steps_per_frame: u32, // physics ticks per rendered frame
}

impl Default for Engine {
    fn default() -> Self {
        Self {
            strict: false,
            pixels_per_metre: DEFAULT_PIXELS_PER_AU / AU,
            max_trail_length: DEFAULT_TRAIL_LENGTH,
            steps_per_frame: 1,
        }
    }
}
