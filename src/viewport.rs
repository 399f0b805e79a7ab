//! Fixed complex-plane viewports and the pixel-to-point mapping.

use num_complex::Complex64;
use serde::{Deserialize, Serialize};

use crate::request::FractalKind;

/// Rectangular region of the complex plane sampled onto the pixel grid.
///
/// Bounds are fixed per fractal kind; there is no pan or zoom. Pixel
/// (0, 0) maps to (`x_min`, `y_min`) and the opposite corner to
/// (`x_max`, `y_max`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    /// Left edge on the real axis.
    pub x_min: f64,
    /// Right edge on the real axis.
    pub x_max: f64,
    /// Top edge on the imaginary axis.
    pub y_min: f64,
    /// Bottom edge on the imaginary axis.
    pub y_max: f64,
}

impl Viewport {
    /// Viewport for the Mandelbrot set.
    pub const MANDELBROT: Viewport = Viewport {
        x_min: -2.0,
        x_max: 1.0,
        y_min: -1.5,
        y_max: 1.5,
    };

    /// Viewport for Julia sets, symmetric about the origin.
    pub const JULIA: Viewport = Viewport {
        x_min: -1.5,
        x_max: 1.5,
        y_min: -1.5,
        y_max: 1.5,
    };

    /// Viewport for the Burning Ship fractal.
    pub const BURNING_SHIP: Viewport = Viewport {
        x_min: -2.0,
        x_max: 1.0,
        y_min: -2.0,
        y_max: 2.0,
    };

    /// Viewport used for the given fractal kind.
    pub fn for_kind(kind: FractalKind) -> Viewport {
        match kind {
            FractalKind::Mandelbrot => Self::MANDELBROT,
            FractalKind::Julia => Self::JULIA,
            FractalKind::BurningShip => Self::BURNING_SHIP,
        }
    }

    /// Map pixel (x, y) to its sample point by linear interpolation.
    ///
    /// Requires `width >= 2` and `height >= 2`; request validation
    /// guarantees this before any pixel is mapped.
    #[inline]
    pub fn map_pixel(&self, x: u32, y: u32, width: u32, height: u32) -> Complex64 {
        let re = x as f64 * (self.x_max - self.x_min) / (width - 1) as f64 + self.x_min;
        let im = y as f64 * (self.y_max - self.y_min) / (height - 1) as f64 + self.y_min;
        Complex64::new(re, im)
    }
}
