//! Pen and brush styling for plot strokes and fills
//!
//! Styles are plain owned values copied into plots; paint-time variations
//! (darkening, opacity overrides) operate on local copies so no shared
//! style state is ever mutated mid-frame.

use glam::Vec4;
use serde::{Deserialize, Serialize};

/// Stroke style: color and width in pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Pen {
    pub color: Vec4,
    pub width: f32,
}

impl Pen {
    pub fn new(color: Vec4, width: f32) -> Self {
        Self {
            color,
            width: width.max(0.0),
        }
    }
}

impl Default for Pen {
    fn default() -> Self {
        Self {
            color: Vec4::new(0.0, 0.0, 0.0, 1.0),
            width: 1.0,
        }
    }
}

/// Fill style: base color and an opacity multiplier
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Brush {
    pub color: Vec4,
    pub opacity: f32,
}

impl Brush {
    pub fn new(color: Vec4) -> Self {
        Self {
            color,
            opacity: 1.0,
        }
    }

    /// Copy with a different opacity
    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity.clamp(0.0, 1.0);
        self
    }

    /// Copy with RGB halved, as used for the outer bag fill
    pub fn darkened(mut self) -> Self {
        self.color = Vec4::new(
            self.color.x * 0.5,
            self.color.y * 0.5,
            self.color.z * 0.5,
            self.color.w,
        );
        self
    }

    /// Final RGBA with the opacity multiplier applied to alpha
    pub fn effective_color(&self) -> Vec4 {
        Vec4::new(
            self.color.x,
            self.color.y,
            self.color.z,
            self.color.w * self.opacity,
        )
    }
}

impl Default for Brush {
    fn default() -> Self {
        Self {
            color: Vec4::new(1.0, 1.0, 1.0, 1.0),
            opacity: 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_brush_darkened_halves_rgb() {
        let b = Brush::new(Vec4::new(1.0, 0.5, 0.0, 1.0)).darkened();
        assert_eq!(b.color, Vec4::new(0.5, 0.25, 0.0, 1.0));
    }

    #[test]
    fn test_brush_opacity_clamped() {
        let b = Brush::new(Vec4::ONE).with_opacity(2.0);
        assert_eq!(b.opacity, 1.0);
        let b = b.with_opacity(-1.0);
        assert_eq!(b.opacity, 0.0);
    }

    #[test]
    fn test_effective_color_multiplies_alpha() {
        let b = Brush::new(Vec4::new(0.2, 0.4, 0.6, 0.8)).with_opacity(0.5);
        assert_eq!(b.effective_color(), Vec4::new(0.2, 0.4, 0.6, 0.4));
    }

    #[test]
    fn test_pen_width_non_negative() {
        let p = Pen::new(Vec4::ONE, -3.0);
        assert_eq!(p.width, 0.0);
    }
}
