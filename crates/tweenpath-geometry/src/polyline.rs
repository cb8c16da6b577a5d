//! Motion-path previews: adaptive sampling of a curve into a polyline.

use tweenpath_core::{CurveError, Result};
use tweenpath_math::Point2;

use crate::curve::Curve;

/// Maximum recursion depth for adaptive subdivision.
const MAX_DEPTH: u32 = 12;

/// Uniform spans sampled before subdivision starts.
///
/// A single chord can miss a whole wave whose midpoint happens to lie on it.
const MIN_SPANS: usize = 4;

/// Convert a curve to a polyline over progress `[0, 1]`.
///
/// Spans are split recursively while the midpoint deviates from the chord
/// by more than `tolerance`.
pub fn sample_polyline(curve: &dyn Curve, tolerance: f64) -> Result<Vec<Point2>> {
    if !(tolerance.is_finite() && tolerance > 0.0) {
        return Err(CurveError::invalid(format!(
            "polyline tolerance must be positive, got {tolerance}"
        )));
    }

    let mut points = vec![curve.position_at(0.0)?];
    for i in 0..MIN_SPANS {
        let t0 = i as f64 / MIN_SPANS as f64;
        let t1 = (i + 1) as f64 / MIN_SPANS as f64;
        subdivide(curve, t0, t1, tolerance, &mut points, 0)?;
    }
    log::trace!("sampled polyline with {} points", points.len());
    Ok(points)
}

fn subdivide(
    curve: &dyn Curve,
    t0: f64,
    t1: f64,
    tolerance: f64,
    points: &mut Vec<Point2>,
    depth: u32,
) -> Result<()> {
    let p1 = curve.position_at(t1)?;
    if depth >= MAX_DEPTH {
        points.push(p1);
        return Ok(());
    }

    let t_mid = (t0 + t1) * 0.5;
    let p0 = curve.position_at(t0)?;
    let p_mid = curve.position_at(t_mid)?;

    let chord_mid = (p0 + p1) * 0.5;
    if (p_mid - chord_mid).length() > tolerance {
        subdivide(curve, t0, t_mid, tolerance, points, depth + 1)?;
        subdivide(curve, t_mid, t1, tolerance, points, depth + 1)
    } else {
        points.push(p1);
        Ok(())
    }
}
