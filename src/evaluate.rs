//! Grid assembly: validation, row fill, and cooperative cancellation.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

use log::{debug, trace};
use num_complex::Complex64;
use rayon::prelude::*;

use crate::error::{FractalError, Result};
use crate::escape::{burning_ship_point, julia_point, mandelbrot_point};
use crate::grid::IterationGrid;
use crate::request::{FractalKind, FractalRequest};
use crate::viewport::Viewport;

/// Grids with at least this many cells are filled row-parallel.
const PARALLEL_THRESHOLD: usize = 10_000;

/// Cloneable handle for cancelling an in-flight evaluation.
///
/// The evaluator checks the flag between rows; a cancelled evaluation
/// returns [`FractalError::Cancelled`] and discards the partial buffer.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    /// Fresh, un-cancelled token.
    pub fn new() -> Self {
        Self::default()
    }

    /// Request cancellation. Safe to call from any thread.
    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    /// Whether cancellation has been requested.
    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Compute the iteration grid for one request.
///
/// Pure over the request: no I/O, no shared state across calls, and
/// bit-identical output for identical requests regardless of whether the
/// serial or the row-parallel fill path runs.
pub fn evaluate(request: FractalRequest) -> Result<IterationGrid> {
    evaluate_inner(request, None)
}

/// Like [`evaluate`], but checks `cancel` between rows.
pub fn evaluate_cancellable(
    request: FractalRequest,
    cancel: &CancelToken,
) -> Result<IterationGrid> {
    evaluate_inner(request, Some(cancel))
}

fn evaluate_inner(request: FractalRequest, cancel: Option<&CancelToken>) -> Result<IterationGrid> {
    request.validate()?;

    let width = request.width as usize;
    let height = request.height as usize;
    let viewport = Viewport::for_kind(request.kind);
    let constant = request.julia_constant();

    let started = Instant::now();
    let mut cells = vec![0u32; width * height];

    let fill_row = |y: usize, row: &mut [u32]| {
        for (x, cell) in row.iter_mut().enumerate() {
            let sample = viewport.map_pixel(x as u32, y as u32, request.width, request.height);
            *cell = point_value(request.kind, sample, constant, request.max_iterations);
        }
    };

    if cells.len() >= PARALLEL_THRESHOLD {
        trace!("filling {}x{} grid in parallel rows", width, height);
        let cancelled = AtomicBool::new(false);
        cells
            .par_chunks_exact_mut(width)
            .enumerate()
            .for_each(|(y, row)| {
                if let Some(token) = cancel {
                    if token.is_cancelled() {
                        cancelled.store(true, Ordering::Relaxed);
                    }
                }
                if cancelled.load(Ordering::Relaxed) {
                    return;
                }
                fill_row(y, row);
            });
        if cancelled.load(Ordering::Relaxed) {
            return Err(FractalError::Cancelled);
        }
    } else {
        trace!("filling {}x{} grid serially", width, height);
        for (y, row) in cells.chunks_exact_mut(width).enumerate() {
            if let Some(token) = cancel {
                if token.is_cancelled() {
                    return Err(FractalError::Cancelled);
                }
            }
            fill_row(y, row);
        }
    }

    debug!(
        "{} {}x{} at {} iterations evaluated in {:?}",
        request.kind,
        width,
        height,
        request.max_iterations,
        started.elapsed()
    );

    Ok(IterationGrid::from_raw(
        height,
        width,
        request.max_iterations,
        cells,
    ))
}

/// Dispatch one sample to its kind's point function.
#[inline]
fn point_value(
    kind: FractalKind,
    sample: Complex64,
    constant: Complex64,
    max_iterations: u32,
) -> u32 {
    match kind {
        FractalKind::Mandelbrot => mandelbrot_point(sample, max_iterations),
        FractalKind::Julia => julia_point(sample, constant, max_iterations),
        FractalKind::BurningShip => burning_ship_point(sample, max_iterations),
    }
}
