use super::{DECIMAL_ROUND_ANGLE, DECIMAL_ROUND_COORDINATE};

/// Which precision constant a value is rounded with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundKind {
    /// Coordinates and distances.
    Coordinate,
    /// Angles in radians.
    Angle,
}

impl RoundKind {
    fn decimals(self) -> i32 {
        match self {
            Self::Coordinate => DECIMAL_ROUND_COORDINATE,
            Self::Angle => DECIMAL_ROUND_ANGLE,
        }
    }
}

/// Rounds `x` to the decimal precision of `kind`.
///
/// This is the only floating-point tolerance in the kernel: every stored
/// coordinate and every coordinate/angle comparison goes through it.
/// Negative zero is normalized to positive zero so that equal values print
/// and hash identically. Non-finite values are returned unchanged.
#[must_use]
pub fn round(x: f64, kind: RoundKind) -> f64 {
    if !x.is_finite() {
        return x;
    }
    let scale = 10_f64.powi(kind.decimals());
    let scaled = x * scale;
    // Large magnitudes already carry fewer fractional digits than requested.
    if !scaled.is_finite() {
        return x;
    }
    let r = scaled.round() / scale;
    if r == 0.0 {
        0.0
    } else {
        r
    }
}

/// Rounds to the coordinate precision.
#[must_use]
pub fn round_coord(x: f64) -> f64 {
    round(x, RoundKind::Coordinate)
}

/// Rounds to the angle precision.
#[must_use]
pub fn round_angle(x: f64) -> f64 {
    round(x, RoundKind::Angle)
}

/// Equality of two coordinates or distances after rounding.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn same_coord(a: f64, b: f64) -> bool {
    round_coord(a) == round_coord(b)
}

/// Equality of two angles after rounding.
#[must_use]
#[allow(clippy::float_cmp)]
pub fn same_angle(a: f64, b: f64) -> bool {
    round_angle(a) == round_angle(b)
}
