//! Fractal kinds and evaluation requests.

use num_complex::Complex64;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{FractalError, Result};

/// Julia constant used when a request does not supply one.
pub const DEFAULT_JULIA_CONSTANT: Complex64 = Complex64 {
    re: -0.8,
    im: 0.156,
};

/// Minimum viable width and height; the pixel mapping divides by `dim - 1`.
pub const MIN_DIMENSION: u32 = 2;

/// The supported escape-time fractal variants.
///
/// The kind selects the initial conditions, the step transform, and the
/// fixed viewport the pixel grid samples.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FractalKind {
    /// z starts at the origin, the sample point is the additive constant.
    Mandelbrot,
    /// z starts at the sample point, the constant is fixed per request.
    Julia,
    /// Components are folded to absolute values before squaring.
    BurningShip,
}

impl FractalKind {
    /// Human-readable label, matching the names the desktop front-end shows.
    pub fn label(&self) -> &'static str {
        match self {
            FractalKind::Mandelbrot => "Mandelbrot Set",
            FractalKind::Julia => "Julia Set",
            FractalKind::BurningShip => "Burning Ship",
        }
    }
}

impl fmt::Display for FractalKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for FractalKind {
    type Err = FractalError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "mandelbrot set" | "mandelbrot" => Ok(FractalKind::Mandelbrot),
            "julia set" | "julia" => Ok(FractalKind::Julia),
            "burning ship" | "burningship" => Ok(FractalKind::BurningShip),
            _ => Err(FractalError::UnknownKind {
                name: s.to_string(),
            }),
        }
    }
}

/// Parameters for a single grid evaluation.
///
/// A request is constructed per generate action and consumed by value;
/// the evaluator reads nothing besides it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FractalRequest {
    /// Which fractal to evaluate.
    pub kind: FractalKind,
    /// Grid width in pixels.
    pub width: u32,
    /// Grid height in pixels.
    pub height: u32,
    /// Iteration bound; cells saturate at this count.
    pub max_iterations: u32,
    /// Julia constant override; ignored for the other kinds.
    pub constant: Option<Complex64>,
}

impl FractalRequest {
    /// Create a request with no Julia constant override.
    pub fn new(kind: FractalKind, width: u32, height: u32, max_iterations: u32) -> Self {
        Self {
            kind,
            width,
            height,
            max_iterations,
            constant: None,
        }
    }

    /// Set the Julia constant.
    pub fn with_constant(mut self, constant: Complex64) -> Self {
        self.constant = Some(constant);
        self
    }

    /// The constant a Julia evaluation will iterate with.
    pub fn julia_constant(&self) -> Complex64 {
        self.constant.unwrap_or(DEFAULT_JULIA_CONSTANT)
    }

    /// Reject parameters the front-end failed to validate.
    pub fn validate(&self) -> Result<()> {
        if self.width < MIN_DIMENSION || self.height < MIN_DIMENSION {
            return Err(FractalError::InvalidDimension {
                width: self.width,
                height: self.height,
            });
        }
        if self.max_iterations < 1 {
            return Err(FractalError::InvalidIterationBound {
                max_iterations: self.max_iterations,
            });
        }
        Ok(())
    }
}

impl Default for FractalRequest {
    /// The desktop front-end defaults: 400x400 Mandelbrot at 20 iterations.
    fn default() -> Self {
        Self::new(FractalKind::Mandelbrot, 400, 400, 20)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_request() {
        let request = FractalRequest::default();
        assert_eq!(request.kind, FractalKind::Mandelbrot);
        assert_eq!(request.width, 400);
        assert_eq!(request.height, 400);
        assert_eq!(request.max_iterations, 20);
        assert!(request.constant.is_none());
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_small_dimensions() {
        let request = FractalRequest::new(FractalKind::Mandelbrot, 1, 400, 20);
        assert_eq!(
            request.validate(),
            Err(FractalError::InvalidDimension {
                width: 1,
                height: 400
            })
        );

        let request = FractalRequest::new(FractalKind::Julia, 400, 0, 20);
        assert!(matches!(
            request.validate(),
            Err(FractalError::InvalidDimension { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_zero_iterations() {
        let request = FractalRequest::new(FractalKind::BurningShip, 400, 400, 0);
        assert_eq!(
            request.validate(),
            Err(FractalError::InvalidIterationBound { max_iterations: 0 })
        );
    }

    #[test]
    fn test_julia_constant_default_and_override() {
        let request = FractalRequest::new(FractalKind::Julia, 100, 100, 20);
        assert_eq!(request.julia_constant(), DEFAULT_JULIA_CONSTANT);

        let c = Complex64::new(0.285, 0.01);
        let request = request.with_constant(c);
        assert_eq!(request.julia_constant(), c);
    }

    #[test]
    fn test_kind_labels_round_trip() {
        for kind in [
            FractalKind::Mandelbrot,
            FractalKind::Julia,
            FractalKind::BurningShip,
        ] {
            let parsed: FractalKind = kind.label().parse().unwrap();
            assert_eq!(parsed, kind);
        }
        assert_eq!(
            "mandelbrot".parse::<FractalKind>().unwrap(),
            FractalKind::Mandelbrot
        );
        assert!(matches!(
            "Sierpinski".parse::<FractalKind>(),
            Err(FractalError::UnknownKind { .. })
        ));
    }

    #[test]
    fn test_request_serde_round_trip() {
        let request = FractalRequest::new(FractalKind::Julia, 320, 240, 50)
            .with_constant(Complex64::new(-0.4, 0.6));
        let json = serde_json::to_string(&request).unwrap();
        let back: FractalRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(back, request);
    }
}
