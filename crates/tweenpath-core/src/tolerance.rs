//! Thresholds for degeneracy checks and angle comparison.

/// Relative and angular thresholds.
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Tolerance {
    /// Fraction of a shape's extent below which a length counts as zero.
    pub relative: f64,
    /// Radians.
    pub angular: f64,
}

impl Tolerance {
    /// Thresholds for comparing analytic tangents with secant estimates.
    pub fn loose() -> Self {
        Self {
            relative: 1e-4,
            angular: 1e-3,
        }
    }

    /// Whether `length` vanishes next to a shape spanning `extent`.
    ///
    /// A zero extent makes only a zero length negligible.
    pub fn negligible(self, length: f64, extent: f64) -> bool {
        length <= self.relative * extent
    }

    /// Whether two angles name the same direction, modulo a full turn.
    pub fn angular_eq(self, a: f64, b: f64) -> bool {
        let tau = std::f64::consts::TAU;
        let d = (a - b).rem_euclid(tau);
        d.min(tau - d) < self.angular
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self {
            relative: 1e-9,
            angular: 1e-10,
        }
    }
}
