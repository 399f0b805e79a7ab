//! Escape-time fractal iteration grids.
//!
//! Computes row-major grids of per-pixel iteration counts for the
//! Mandelbrot, Julia, and Burning Ship fractals over fixed viewports of
//! the complex plane. Rendering, color mapping, and widget wiring are the
//! caller's concern; this crate owns only the math.
//!
//! ```
//! use fractal_grid::{evaluate, FractalKind, FractalRequest};
//!
//! let request = FractalRequest::new(FractalKind::Mandelbrot, 80, 60, 20);
//! let grid = evaluate(request).unwrap();
//! assert_eq!(grid.dimensions(), (60, 80));
//! assert!(grid.as_array().iter().all(|&count| count <= 20));
//! ```

pub mod error;
pub mod escape;
pub mod evaluate;
pub mod grid;
pub mod request;
pub mod viewport;

pub use error::{FractalError, Result};
pub use evaluate::{evaluate, evaluate_cancellable, CancelToken};
pub use grid::IterationGrid;
pub use request::{FractalKind, FractalRequest, DEFAULT_JULIA_CONSTANT};
pub use viewport::Viewport;
