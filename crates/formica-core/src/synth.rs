//! Path synthesis: how an ant moves when it has nothing to follow, and
//! how it walks a straight line once it knows where it is going.
//!
//! Both functions are pure: the only state they touch is the random
//! source handed to [`random_search`].

use crate::error::{FormicaError, Result};
use crate::types::{Path, Point2D};
use rand::Rng;
use std::f64::consts::TAU;

/// Random walk from the nest.
///
/// Each of the `step_count` steps draws a heading uniformly from
/// `[0, 2π)` and moves `step_size` along it. The returned path has
/// `step_count + 1` points (the nest first) and the second value is the
/// point where the walk ended.
pub fn random_search<R: Rng + ?Sized>(
    step_count: usize,
    step_size: f64,
    rng: &mut R,
) -> Result<(Path, Point2D)> {
    if step_count == 0 {
        return Err(FormicaError::invalid_parameter(
            "step_count",
            "must be at least 1",
        ));
    }
    if !step_size.is_finite() || step_size <= 0.0 {
        return Err(FormicaError::invalid_parameter(
            "step_size",
            format!("must be a positive finite number, got {step_size}"),
        ));
    }

    let mut path = Path::with_capacity(step_count + 1);
    let mut current = Point2D::NEST;
    path.push(current);

    for _ in 0..step_count {
        let heading = rng.gen_range(0.0..TAU);
        current = Point2D::new(
            current.x + step_size * heading.cos(),
            current.y + step_size * heading.sin(),
        );
        path.push(current);
    }

    Ok((path, current))
}

/// Straight line from `start` to `end`, both included.
///
/// Produces `sample_count` evenly spaced points. A single sample yields
/// just `start`. The final point is exactly `end`.
pub fn homing_path(start: Point2D, end: Point2D, sample_count: usize) -> Result<Path> {
    if sample_count == 0 {
        return Err(FormicaError::invalid_parameter(
            "sample_count",
            "must be at least 1",
        ));
    }
    if !start.is_finite() || !end.is_finite() {
        return Err(FormicaError::invalid_parameter(
            "coordinates",
            format!("endpoints must be finite, got {start:?} -> {end:?}"),
        ));
    }
    if sample_count == 1 {
        return Ok(Path::from(vec![start]));
    }

    let last = sample_count - 1;
    let dx = (end.x - start.x) / last as f64;
    let dy = (end.y - start.y) / last as f64;

    let path = (0..sample_count)
        .map(|i| {
            if i == last {
                end
            } else {
                Point2D::new(start.x + dx * i as f64, start.y + dy * i as f64)
            }
        })
        .collect();
    Ok(path)
}
