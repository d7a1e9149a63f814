//! Simulation meters → screen pixels
//!
//! The 2D camera sits on the origin, so projecting is a plain scale. The y
//! axis is flipped to keep the same picture as a y-down screen.

use bevy::math::Vec2;

use crate::configuration::config::DisplayConfig;
use crate::simulation::params::AU;
use crate::simulation::states::NVec2;

/// Pixels per AU at a scaling factor of 1
pub const PIXELS_PER_AU: f64 = 250.0;

#[derive(Debug, Clone, Copy)]
pub struct ScreenProjection {
    pub pixels_per_meter: f64,
}

impl ScreenProjection {
    pub fn new(scaling_factor: f64) -> Self {
        Self {
            pixels_per_meter: PIXELS_PER_AU / scaling_factor / AU,
        }
    }

    pub fn from_display(display: &DisplayConfig) -> Self {
        Self::new(display.scaling_factor)
    }

    pub fn to_screen(&self, x: &NVec2) -> Vec2 {
        Vec2::new(
            (x.x * self.pixels_per_meter) as f32,
            (-x.y * self.pixels_per_meter) as f32,
        )
    }
}

/// Font size of the distance labels, shrunk for wide zooms
pub fn label_font_size(scaling_factor: f64) -> f32 {
    if scaling_factor > 2.0 {
        (16.0 / scaling_factor * 3.5).round() as f32
    } else {
        16.0
    }
}
