//! Bernstein-polynomial evaluation of Bézier control polygons.
//!
//! These functions work on raw local control points; time mapping and
//! placement are applied by the curve evaluators.

use tweenpath_math::{DVec2, Point2};

/// Binomial coefficients `C(n, 0..=n)`, built iteratively.
pub fn pascal_row(n: usize) -> Vec<f64> {
    let mut row = Vec::with_capacity(n + 1);
    row.push(1.0);
    for k in 0..n {
        let next = row[k] * (n - k) as f64 / (k + 1) as f64;
        row.push(next.round());
    }
    row
}

/// Degree 1: `(1 - t) p0 + t p1`.
pub fn linear(p0: Point2, p1: Point2, t: f64) -> Point2 {
    (1.0 - t) * p0 + t * p1
}

/// Degree 2 with the expanded blending functions.
pub fn quadratic(p: &[Point2; 3], t: f64) -> Point2 {
    let s = 1.0 - t;
    let f0 = s * s;
    let f1 = 2.0 * s * t;
    let f2 = t * t;
    f0 * p[0] + f1 * p[1] + f2 * p[2]
}

/// Degree 3 with the expanded blending functions.
pub fn cubic(p: &[Point2; 4], t: f64) -> Point2 {
    let s = 1.0 - t;
    let f0 = s * s * s;
    let f1 = 3.0 * s * s * t;
    let f2 = 3.0 * s * t * t;
    let f3 = t * t * t;
    f0 * p[0] + f1 * p[1] + f2 * p[2] + f3 * p[3]
}

/// Any degree: `Σ C(n, i) (1 - t)^(n - i) t^i p_i`.
pub fn general(points: &[Point2], t: f64) -> Point2 {
    let Some(n) = points.len().checked_sub(1) else {
        return DVec2::ZERO;
    };
    let s = 1.0 - t;
    pascal_row(n)
        .iter()
        .zip(points)
        .enumerate()
        .fold(DVec2::ZERO, |acc, (i, (&c, &p))| {
            acc + c * s.powi((n - i) as i32) * t.powi(i as i32) * p
        })
}

/// Evaluate `points` at `t`, using the expanded forms for degrees 0 to 3.
///
/// An empty slice evaluates to the origin.
pub fn point(points: &[Point2], t: f64) -> Point2 {
    match points {
        [] => DVec2::ZERO,
        [p] => *p,
        [p0, p1] => linear(*p0, *p1, t),
        [p0, p1, p2] => quadratic(&[*p0, *p1, *p2], t),
        [p0, p1, p2, p3] => cubic(&[*p0, *p1, *p2, *p3], t),
        _ => general(points, t),
    }
}

/// Successive differences `p_i - p_(i+1)`, one shorter than `points`.
///
/// The Bézier curve over these points is the hodograph of the input scaled
/// by `-1/n`; it points against the direction of travel.
pub fn hodograph(points: &[Point2]) -> Vec<Point2> {
    points.windows(2).map(|w| w[0] - w[1]).collect()
}
