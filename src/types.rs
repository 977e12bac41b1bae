// Core types shared by the sampler, renderer and loop driver.

use crate::error::Error;
use image::RgbaImage;

/// The window surface we paint into every cycle.
#[derive(Clone)]
pub struct FrameBuffer {
    pub width: usize,      // surface width (device pixels)
    pub height: usize,     // surface height (device pixels)
    pub pixels: Vec<u32>,  // each entry is 0x00RRGGBB for minifb
}

impl FrameBuffer {
    /// A black surface of the given size.
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height, pixels: vec![0u32; width * height] }
    }
}

/// Mirrored, scaled camera pixels for one cycle: rows of RGBA, 4 bytes each.
/// Lives only for the cycle that produced it.
pub type PixelBuffer = RgbaImage;

/// Current size of the viewport (the window's client area).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ViewportSize {
    pub width: usize,
    pub height: usize,
}

impl ViewportSize {
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

/// Distance between sampled grid points and the largest dot diameter.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridParams {
    pub spacing: usize,
    pub max_diameter: f32,
}

impl GridParams {
    pub const DEFAULT_SPACING: usize = 12;
    pub const DEFAULT_DIAMETER: f32 = 10.0;

    pub fn new(spacing: usize, max_diameter: f32) -> Result<Self, Error> {
        if spacing == 0 {
            return Err(Error::InvalidGrid("spacing must be > 0".into()));
        }
        if !max_diameter.is_finite() || max_diameter < 0.0 {
            return Err(Error::InvalidGrid(format!("diameter {max_diameter} must be >= 0")));
        }
        if max_diameter > spacing as f32 {
            log::warn!("dot diameter {max_diameter} exceeds spacing {spacing}; neighbouring dots will overlap");
        }
        Ok(Self { spacing, max_diameter })
    }

    #[inline]
    pub fn max_radius(&self) -> f32 {
        self.max_diameter / 2.0
    }
}

impl Default for GridParams {
    fn default() -> Self {
        Self { spacing: Self::DEFAULT_SPACING, max_diameter: Self::DEFAULT_DIAMETER }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_spacing_is_rejected() {
        assert!(matches!(GridParams::new(0, 10.0), Err(Error::InvalidGrid(_))));
    }

    #[test]
    fn negative_diameter_is_rejected() {
        assert!(matches!(GridParams::new(12, -1.0), Err(Error::InvalidGrid(_))));
    }

    #[test]
    fn oversized_diameter_is_allowed() {
        let g = GridParams::new(4, 10.0).unwrap();
        assert_eq!(g.max_radius(), 5.0);
    }

    #[test]
    fn defaults() {
        let g = GridParams::default();
        assert_eq!(g.spacing, 12);
        assert_eq!(g.max_radius(), 5.0);
        assert_eq!(FrameBuffer::new(3, 2).pixels, vec![0; 6]);
    }
}
