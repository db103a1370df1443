//! The complex stress kernel of the cohesive zone.
//!
//! ```text
//! M(z) = (2 / pi) tau_p [ (1 + z / X_c) atan(1 / sqrt(z / X_c)) - sqrt(z / X_c) ]
//! ```
//!
//! Branches: the square root is the principal one, so `Re sqrt(u) >= 0`
//! and the only cut is the negative real axis, i.e. the slipped crack
//! faces behind the tip. On that half plane the principal arctangent of
//! `1 / s` equals
//!
//! ```text
//! atan(1 / s) = (1 / 2i) ln((s + i) / (s - i))
//! ```
//!
//! and `(s + i) / (s - i)` never leaves the closed upper half plane, so
//! the logarithm is continuous everywhere off the faces. On the faces the
//! sign of the zero in `Im z` picks the side: `+0.0` is the limit from
//! `y > 0` and `-0.0` the limit from `y < 0`.
//!
//! Two points need an explicit value:
//!
//! * `z = 0`, the crack tip. `atan(1 / sqrt(u)) -> pi / 2` so `M(0) = tau_p`.
//! * `z = -X_c`, the end of the cohesive zone. The arctangent has a
//!   logarithmic singularity there but it is multiplied by `1 + z / X_c`,
//!   so the product is taken as its limit, zero.

use std::f64::consts::PI;

use num_complex::Complex64;

use crate::cohesive::check_zone_length;
use crate::error::{DomainError, DomainResult};

/// Evaluate `M(z)` for a cohesive zone of length `zone_length` carrying
/// a peak traction `peak_traction`.
pub fn m_of_z(peak_traction: f64, zone_length: f64, z: Complex64) -> DomainResult<Complex64> {
    check_zone_length(zone_length)?;
    if !peak_traction.is_finite() {
        return Err(DomainError::NumericDomainFailure("peak traction"));
    }
    if !z.is_finite() {
        return Err(DomainError::NumericDomainFailure("kernel argument"));
    }

    if z.re == 0.0 && z.im == 0.0 {
        return Ok(Complex64::new(peak_traction, 0.0));
    }

    let ratio = z / zone_length;
    let root = ratio.sqrt();
    let one_plus_ratio = 1.0 + ratio;

    let cohesive = if one_plus_ratio.re == 0.0 && one_plus_ratio.im == 0.0 {
        Complex64::new(0.0, 0.0)
    } else {
        one_plus_ratio * atan_of_reciprocal(root)
    };

    let m = (2.0 / PI) * peak_traction * (cohesive - root);
    if m.is_finite() {
        Ok(m)
    } else {
        Err(DomainError::NumericDomainFailure("kernel M(z)"))
    }
}

/// Principal `atan(1 / root)` for `Re(root) >= 0`.
fn atan_of_reciprocal(root: Complex64) -> Complex64 {
    // (root + i) / (root - i) = numerator / |root - i|^2
    let numerator = Complex64::new(root.norm_sqr() - 1.0, 2.0 * root.re);
    let denominator = (root - Complex64::i()).norm_sqr();
    let log = numerator.ln() - denominator.ln();
    Complex64::new(0.5 * log.im, -0.5 * log.re)
}
