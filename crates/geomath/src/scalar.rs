//! Scalar precision and epsilon comparison.
//!
//! Policy
//! - One scalar alias [`Real`] fixes the precision of every type and
//!   operation in the crate at build time. Mixed-precision use is not
//!   supported; all callers linking the same build see the same `Real`.
//! - Tolerances are caller-supplied. The crate has no global epsilon; pick
//!   one appropriate to the precision and the magnitudes involved.

/// The scalar type all entities are parametrized over.
#[cfg(feature = "single")]
pub type Real = f32;
/// The scalar type all entities are parametrized over.
#[cfg(not(feature = "single"))]
pub type Real = f64;

/// π at the configured precision.
#[cfg(feature = "single")]
pub const PI: Real = std::f32::consts::PI;
/// π at the configured precision.
#[cfg(not(feature = "single"))]
pub const PI: Real = std::f64::consts::PI;

/// Absolute comparison `|a - b| < eps`, with the difference widened to `f64`
/// before taking the absolute value so that `single` builds do not lose the
/// comparison to intermediate rounding.
#[inline]
pub fn approx_eq(a: Real, b: Real, eps: Real) -> bool {
    f64::from(a - b).abs() < f64::from(eps)
}

/// Narrow an `f64` intermediate to the configured precision.
#[cfg(feature = "single")]
#[inline]
pub(crate) fn narrow(x: f64) -> Real {
    x as f32
}
/// Narrow an `f64` intermediate to the configured precision.
#[cfg(not(feature = "single"))]
#[inline]
pub(crate) fn narrow(x: f64) -> Real {
    x
}

/// Square root computed in `f64` regardless of the configured precision,
/// then narrowed back to `Real`.
#[inline]
pub(crate) fn sqrt_wide(x: Real) -> Real {
    narrow(f64::from(x).sqrt())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn approx_eq_is_strict() {
        assert!(approx_eq(1.0, 1.0, 1e-12));
        assert!(!approx_eq(1.0, 1.0 + 2e-9, 1e-9));
        // The bound is strict: a difference exactly equal to eps fails.
        assert!(!approx_eq(0.0, 1.0, 1.0));
    }

    #[test]
    fn approx_eq_rejects_nan() {
        assert!(!approx_eq(Real::NAN, 0.0, 1.0));
        assert!(!approx_eq(Real::INFINITY, Real::INFINITY, 1.0));
    }

    #[test]
    fn sqrt_wide_exact_squares() {
        assert_eq!(sqrt_wide(25.0), 5.0);
        assert_eq!(sqrt_wide(0.0), 0.0);
    }
}
