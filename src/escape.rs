//! Per-point escape-time kernels.
//!
//! The three fractal kinds share one bound-and-count loop and differ only
//! in where z starts, what the additive constant is, and the per-step
//! transform. Each kind's point function stays individually testable.

use num_complex::Complex64;

/// Squared escape bound; |z| > 2 guarantees divergence under z^2 + c.
const ESCAPE_RADIUS_SQ: f64 = 4.0;

/// Count step applications while z stays within the escape radius.
///
/// Returns the iteration count at loop exit: 0 if z0 is already outside
/// the radius, `max_iterations` if z never leaves it. A non-finite
/// modulus fails the `<=` comparison and counts as escaped at that
/// iteration.
#[inline]
fn iterate<F>(z0: (f64, f64), max_iterations: u32, step: F) -> u32
where
    F: Fn(f64, f64) -> (f64, f64),
{
    let (mut zx, mut zy) = z0;
    let mut iterations = 0;
    while zx * zx + zy * zy <= ESCAPE_RADIUS_SQ && iterations < max_iterations {
        let (nx, ny) = step(zx, zy);
        zx = nx;
        zy = ny;
        iterations += 1;
    }
    iterations
}

/// Mandelbrot: z starts at the origin, the sample point is the constant.
#[inline(always)]
pub fn mandelbrot_point(c: Complex64, max_iterations: u32) -> u32 {
    iterate((0.0, 0.0), max_iterations, |zx, zy| {
        (zx * zx - zy * zy + c.re, 2.0 * zx * zy + c.im)
    })
}

/// Julia: z starts at the sample point, the constant is fixed.
#[inline(always)]
pub fn julia_point(z0: Complex64, c: Complex64, max_iterations: u32) -> u32 {
    iterate((z0.re, z0.im), max_iterations, |zx, zy| {
        (zx * zx - zy * zy + c.re, 2.0 * zx * zy + c.im)
    })
}

/// Burning Ship: components are folded to their absolute values before
/// squaring; the constant is the sample point captured before iterating.
#[inline(always)]
pub fn burning_ship_point(z0: Complex64, max_iterations: u32) -> u32 {
    let c = z0;
    iterate((z0.re, z0.im), max_iterations, |zx, zy| {
        let ax = zx.abs();
        let ay = zy.abs();
        (ax * ax - ay * ay + c.re, 2.0 * ax * ay + c.im)
    })
}
