//! Flat triangle colors

use serde::{Deserialize, Serialize};

/// Flat RGB color, components in 0.0..=1.0
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const fn new(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b }
    }

    pub const fn magenta() -> Self {
        Self::new(1.0, 0.0, 1.0)
    }

    pub const fn cyan() -> Self {
        Self::new(0.0, 1.0, 1.0)
    }

    pub const fn yellow() -> Self {
        Self::new(1.0, 1.0, 0.0)
    }

    pub const fn white() -> Self {
        Self::new(1.0, 1.0, 1.0)
    }

    /// RGBA at full opacity, in the layout the render pass consumes
    pub const fn rgba(&self) -> [f32; 4] {
        [self.r, self.g, self.b, 1.0]
    }
}
