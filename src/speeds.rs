//! Wave speed ratios and the elastodynamic denominator of a steadily
//! moving crack.
//!
//! For a crack running at speed `C_f` the field is written in terms of
//! the stretched coordinates `x + i alpha y` where
//!
//! ```text
//! alpha_s = sqrt(1 - (C_f / C_s)^2)
//! alpha_d = sqrt(1 - (C_f / C_d)^2)
//! D       = 4 alpha_s alpha_d - (1 + alpha_s^2)^2
//! ```
//!
//! `D` is the Rayleigh function. It vanishes at the Rayleigh speed, but it
//! also goes to zero like `(C_f / C_s)^2` as the crack slows down, even
//! though every physical quantity stays bounded there. The singularity
//! test is therefore made on `D / (C_f / C_s)^2`, which tends to
//! `2 (1 - (C_s / C_d)^2)` for a slow crack and only vanishes at the
//! Rayleigh speed.

use crate::error::{DomainError, DomainResult};
use log::{debug, warn};

/// Normalised denominators smaller than this are treated as the Rayleigh root.
pub const RAYLEIGH_TOLERANCE: f64 = 1e-9;

/// Below this the solution is valid but very sensitive to the crack speed.
const RAYLEIGH_WARNING: f64 = 1e-3;

/// Crack speed together with the two bulk wave speeds of the solid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WaveSpeeds {
    /// Speed of the crack tip, `C_f`
    pub crack: f64,
    /// Shear wave speed, `C_s`
    pub shear: f64,
    /// Dilatational (longitudinal) wave speed, `C_d`
    pub dilatational: f64,
}

impl WaveSpeeds {
    pub fn new(crack: f64, shear: f64, dilatational: f64) -> Self {
        Self {
            crack,
            shear,
            dilatational,
        }
    }

    /// Bulk wave speeds of an isotropic linear elastic solid, with the
    /// crack running at `crack_fraction` of the shear wave speed.
    ///
    /// ```text
    /// C_s = sqrt(E / (2 rho (1 + nu)))
    /// C_d = sqrt(E (1 - nu) / (rho (1 + nu) (1 - 2 nu)))
    /// ```
    pub fn from_moduli(
        youngs_modulus: f64,
        poisson_ratio: f64,
        density: f64,
        crack_fraction: f64,
    ) -> DomainResult<Self> {
        if !(youngs_modulus > 0.0) {
            return Err(DomainError::NonPositiveModulus(youngs_modulus));
        }
        if !(poisson_ratio > -1.0 && poisson_ratio < 0.5) {
            return Err(DomainError::InvalidPoissonRatio(poisson_ratio));
        }
        if !(density > 0.0) {
            return Err(DomainError::NonPositiveDensity(density));
        }

        let shear = (youngs_modulus / (2.0 * density * (1.0 + poisson_ratio))).sqrt();
        let dilatational = (youngs_modulus * (1.0 - poisson_ratio)
            / (density * (1.0 + poisson_ratio) * (1.0 - 2.0 * poisson_ratio)))
            .sqrt();

        let speeds = Self::new(crack_fraction * shear, shear, dilatational);
        if !speeds.is_finite() {
            return Err(DomainError::NumericDomainFailure("wave speeds from moduli"));
        }
        Ok(speeds)
    }

    fn is_finite(&self) -> bool {
        self.crack.is_finite() && self.shear.is_finite() && self.dilatational.is_finite()
    }

    /// Checks `0 < C_f < C_s < C_d`.
    pub fn check(&self) -> DomainResult<()> {
        if !self.is_finite() {
            return Err(DomainError::NumericDomainFailure("wave speeds"));
        }

        let subsonic = self.crack > 0.0
            && self.crack < self.shear
            && self.crack < self.dilatational
            && self.shear < self.dilatational;

        if subsonic {
            Ok(())
        } else {
            Err(DomainError::InvalidSpeedOrdering {
                crack_speed: self.crack,
                shear_speed: self.shear,
                dilatational_speed: self.dilatational,
            })
        }
    }
}

/// The dimensionless scalars that every later stage depends on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometry {
    pub alpha_s: f64,
    pub alpha_d: f64,
    /// Rayleigh denominator `D`
    pub denominator: f64,
}

impl Geometry {
    /// Derive `alpha_s`, `alpha_d` and `D`, rejecting speed combinations
    /// at which the steady state solution does not exist.
    pub fn from_speeds(speeds: &WaveSpeeds) -> DomainResult<Geometry> {
        speeds.check()?;

        let alpha_s = alpha(speeds.crack, speeds.shear);
        let alpha_d = alpha(speeds.crack, speeds.dilatational);
        let denominator = denominator(alpha_s, alpha_d);

        let ratio = speeds.crack / speeds.shear;
        let normalised_denominator = denominator / (ratio * ratio);

        if !normalised_denominator.is_finite() {
            return Err(DomainError::NumericDomainFailure("Rayleigh denominator"));
        }

        if normalised_denominator.abs() < RAYLEIGH_TOLERANCE {
            return Err(DomainError::NearRayleighSingularity {
                crack_speed: speeds.crack,
                normalised_denominator,
            });
        }

        if normalised_denominator.abs() < RAYLEIGH_WARNING {
            warn!(
                "***Warning: crack speed {} is within {:.1e} of the Rayleigh root, the field will be very large",
                speeds.crack, normalised_denominator
            );
        }

        debug!(
            "geometry: alpha_s {} alpha_d {} D {}",
            alpha_s, alpha_d, denominator
        );

        Ok(Geometry {
            alpha_s,
            alpha_d,
            denominator,
        })
    }
}

/// `sqrt(1 - (crack_speed / wave_speed)^2)`
///
/// Only meaningful for `crack_speed < wave_speed`; use
/// `Geometry::from_speeds` for a checked version.
pub fn alpha(crack_speed: f64, wave_speed: f64) -> f64 {
    let ratio = crack_speed / wave_speed;
    (1.0 - ratio * ratio).sqrt()
}

/// Rayleigh denominator `4 alpha_s alpha_d - (1 + alpha_s^2)^2`.
pub fn denominator(alpha_s: f64, alpha_d: f64) -> f64 {
    let term = 1.0 + alpha_s * alpha_s;
    4.0 * alpha_s * alpha_d - term * term
}

fn normalised_denominator(crack_speed: f64, shear_speed: f64, dilatational_speed: f64) -> f64 {
    let ratio = crack_speed / shear_speed;
    denominator(
        alpha(crack_speed, shear_speed),
        alpha(crack_speed, dilatational_speed),
    ) / (ratio * ratio)
}

/// Rayleigh wave speed of a solid with the given bulk wave speeds.
///
/// The normalised denominator is positive for slow cracks and equal to
/// -1 at the shear wave speed, with a single root in between. Bisection
/// is run until the bracket cannot be split any further, so the result
/// is the same on every platform.
pub fn rayleigh_speed(shear_speed: f64, dilatational_speed: f64) -> DomainResult<f64> {
    if !(shear_speed.is_finite() && dilatational_speed.is_finite()) {
        return Err(DomainError::NumericDomainFailure("wave speeds"));
    }
    if !(shear_speed > 0.0 && shear_speed < dilatational_speed) {
        return Err(DomainError::InvalidSpeedOrdering {
            crack_speed: 0.0,
            shear_speed,
            dilatational_speed,
        });
    }

    let mut lower = 0.0;
    let mut upper = shear_speed;
    loop {
        let middle = 0.5 * (lower + upper);
        if middle <= lower || middle >= upper {
            break;
        }
        if normalised_denominator(middle, shear_speed, dilatational_speed) > 0.0 {
            lower = middle;
        } else {
            upper = middle;
        }
    }

    let residual = |speed: f64| normalised_denominator(speed, shear_speed, dilatational_speed).abs();
    let root = if lower > 0.0 && residual(lower) <= residual(upper) {
        lower
    } else {
        upper
    };
    debug!("rayleigh speed {} for C_s {} C_d {}", root, shear_speed, dilatational_speed);

    Ok(root)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn reference() -> WaveSpeeds {
        WaveSpeeds::new(1000.0, 3000.0, 5000.0)
    }

    #[test]
    fn geometry_matches_hand_calculation() {
        let geometry = Geometry::from_speeds(&reference()).unwrap();

        assert_relative_eq!(geometry.alpha_s, (8.0f64 / 9.0).sqrt(), max_relative = 1e-15);
        assert_relative_eq!(geometry.alpha_d, 0.96f64.sqrt(), max_relative = 1e-15);
        assert_relative_eq!(geometry.denominator, 0.12714048824570368, max_relative = 1e-13);
    }

    #[test]
    fn crack_at_shear_speed_is_rejected() {
        let speeds = WaveSpeeds::new(3000.0, 3000.0, 5000.0);

        match Geometry::from_speeds(&speeds) {
            Err(DomainError::InvalidSpeedOrdering { crack_speed, .. }) => {
                assert!((crack_speed - 3000.0).abs() < f64::EPSILON)
            }
            other => panic!("expected InvalidSpeedOrdering, got {:?}", other),
        }
    }

    #[test]
    fn other_bad_orderings_are_rejected() {
        let cases = [
            WaveSpeeds::new(0.0, 3000.0, 5000.0),
            WaveSpeeds::new(-10.0, 3000.0, 5000.0),
            WaveSpeeds::new(3500.0, 3000.0, 5000.0),
            WaveSpeeds::new(1000.0, 5000.0, 3000.0),
            WaveSpeeds::new(1000.0, 3000.0, 3000.0),
        ];

        for speeds in cases.iter() {
            assert!(matches!(
                Geometry::from_speeds(speeds),
                Err(DomainError::InvalidSpeedOrdering { .. })
            ));
        }
    }

    #[test]
    fn non_finite_speed_is_a_numeric_failure() {
        let speeds = WaveSpeeds::new(f64::NAN, 3000.0, 5000.0);
        assert!(matches!(
            Geometry::from_speeds(&speeds),
            Err(DomainError::NumericDomainFailure(_))
        ));
    }

    #[test]
    fn rayleigh_speed_of_a_poisson_solid() {
        // nu = 0.25 gives C_d = sqrt(3) C_s and the classical root
        // C_R / C_s = sqrt(2 - 2 / sqrt(3)).
        let root = rayleigh_speed(1.0, 3.0f64.sqrt()).unwrap();
        assert_relative_eq!(root, (2.0 - 2.0 / 3.0f64.sqrt()).sqrt(), max_relative = 1e-12);
    }

    #[test]
    fn crack_at_rayleigh_speed_is_detected() {
        let root = rayleigh_speed(3000.0, 5000.0).unwrap();
        assert_relative_eq!(root, 2742.578888820566, max_relative = 1e-12);

        let speeds = WaveSpeeds::new(root, 3000.0, 5000.0);
        assert!(matches!(
            Geometry::from_speeds(&speeds),
            Err(DomainError::NearRayleighSingularity { .. })
        ));
    }

    #[test]
    fn denominator_changes_sign_across_the_rayleigh_speed() {
        let below = Geometry::from_speeds(&WaveSpeeds::new(2000.0, 3000.0, 5000.0)).unwrap();
        let above = Geometry::from_speeds(&WaveSpeeds::new(2900.0, 3000.0, 5000.0)).unwrap();

        assert!(below.denominator > 0.0);
        assert!(above.denominator < 0.0);
    }

    #[test]
    fn slow_crack_is_not_mistaken_for_the_rayleigh_root() {
        // D itself is ~1e-13 here, but the normalised value is ~1.28.
        let geometry = Geometry::from_speeds(&WaveSpeeds::new(1e-3, 3000.0, 5000.0)).unwrap();
        assert!(geometry.denominator > 0.0);
        assert!(geometry.denominator < 1e-9);
    }

    #[test]
    fn wave_speeds_from_moduli() {
        let speeds = WaveSpeeds::from_moduli(51e9, 0.25, 2678.0, 0.9).unwrap();

        assert_relative_eq!(speeds.dilatational / speeds.shear, 3.0f64.sqrt(), max_relative = 1e-12);
        assert_relative_eq!(
            speeds.shear,
            (51e9f64 / (2.0 * 2678.0 * 1.25)).sqrt(),
            max_relative = 1e-15
        );
        assert_relative_eq!(speeds.crack, 0.9 * speeds.shear, max_relative = 1e-15);
        assert!(speeds.check().is_ok());
    }

    #[test]
    fn wave_speeds_from_bad_moduli() {
        assert_eq!(
            WaveSpeeds::from_moduli(-1.0, 0.25, 2678.0, 0.9),
            Err(DomainError::NonPositiveModulus(-1.0))
        );
        assert_eq!(
            WaveSpeeds::from_moduli(51e9, 0.5, 2678.0, 0.9),
            Err(DomainError::InvalidPoissonRatio(0.5))
        );
        assert_eq!(
            WaveSpeeds::from_moduli(51e9, 0.25, 0.0, 0.9),
            Err(DomainError::NonPositiveDensity(0.0))
        );
    }
}
