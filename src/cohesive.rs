//! Cohesive zone scalars for a steady mode II crack.
//!
//! The cohesive zone of length `X_c` cancels the square root
//! singularity of the sharp crack. Given the fracture energy it fixes the
//! dynamic stress intensity factor and, through the linear slip-weakening
//! assumption, the peak traction carried by the zone.

use std::f64::consts::PI;

use crate::error::{DomainError, DomainResult};
use crate::speeds::{Geometry, WaveSpeeds};
use log::debug;

/// Elastic and fracture properties of the solid.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Elasticity {
    pub poisson_ratio: f64,
    pub youngs_modulus: f64,
    /// Fracture energy `Gamma`
    pub fracture_energy: f64,
}

impl Elasticity {
    pub fn check(&self) -> DomainResult<()> {
        if !(self.poisson_ratio > -1.0 && self.poisson_ratio < 0.5) {
            return Err(DomainError::InvalidPoissonRatio(self.poisson_ratio));
        }
        if !(self.youngs_modulus > 0.0) || self.youngs_modulus.is_infinite() {
            return Err(DomainError::NonPositiveModulus(self.youngs_modulus));
        }
        if self.fracture_energy.is_nan() || self.fracture_energy.is_infinite() {
            return Err(DomainError::NumericDomainFailure("fracture energy"));
        }
        if self.fracture_energy < 0.0 {
            return Err(DomainError::NegativeFractureEnergy(self.fracture_energy));
        }
        Ok(())
    }
}

/// Scalars describing the cohesive zone.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CohesiveZone {
    /// Compliance factor `A2`
    pub compliance: f64,
    /// Dynamic mode II stress intensity factor `K2`
    pub stress_intensity: f64,
    /// Peak cohesive shear traction `tau_p`
    pub peak_traction: f64,
}

impl CohesiveZone {
    /// Derive `A2`, `K2` and `tau_p`.
    pub fn new(
        speeds: &WaveSpeeds,
        geometry: &Geometry,
        elasticity: &Elasticity,
        zone_length: f64,
    ) -> DomainResult<CohesiveZone> {
        elasticity.check()?;
        check_zone_length(zone_length)?;

        let compliance = compliance(
            speeds.crack,
            speeds.shear,
            elasticity.poisson_ratio,
            geometry.alpha_s,
            geometry.denominator,
        );
        if !compliance.is_finite() {
            return Err(DomainError::NumericDomainFailure("compliance A2"));
        }
        if compliance <= 0.0 {
            return Err(DomainError::SuperRayleighSpeed {
                crack_speed: speeds.crack,
                denominator: geometry.denominator,
            });
        }

        let stress_intensity = stress_intensity(
            elasticity.fracture_energy,
            elasticity.youngs_modulus,
            elasticity.poisson_ratio,
            compliance,
        );
        let peak_traction = peak_traction(stress_intensity, zone_length);
        if !(stress_intensity.is_finite() && peak_traction.is_finite()) {
            return Err(DomainError::NumericDomainFailure("stress intensity factor"));
        }

        debug!(
            "cohesive zone: A2 {} K2 {} tau_p {}",
            compliance, stress_intensity, peak_traction
        );

        Ok(CohesiveZone {
            compliance,
            stress_intensity,
            peak_traction,
        })
    }
}

pub fn check_zone_length(zone_length: f64) -> DomainResult<()> {
    if zone_length.is_nan() || zone_length.is_infinite() {
        return Err(DomainError::NumericDomainFailure("cohesive zone length"));
    }
    if zone_length <= 0.0 {
        return Err(DomainError::NonPositiveCohesiveLength(zone_length));
    }
    Ok(())
}

/// `A2 = C_f^2 alpha_s / ((1 - nu) C_s^2 D)`
pub fn compliance(
    crack_speed: f64,
    shear_speed: f64,
    poisson_ratio: f64,
    alpha_s: f64,
    denominator: f64,
) -> f64 {
    let psfactor = 1.0 / (1.0 - poisson_ratio);
    (crack_speed * crack_speed * alpha_s * psfactor) / (shear_speed * shear_speed * denominator)
}

/// `K2 = sqrt(Gamma E / ((1 - nu^2) A2))`
pub fn stress_intensity(
    fracture_energy: f64,
    youngs_modulus: f64,
    poisson_ratio: f64,
    compliance: f64,
) -> f64 {
    ((fracture_energy * youngs_modulus) / ((1.0 - poisson_ratio * poisson_ratio) * compliance))
        .sqrt()
}

/// `tau_p = K2 sqrt(9 pi / (32 X_c))`
pub fn peak_traction(stress_intensity: f64, zone_length: f64) -> f64 {
    stress_intensity * (9.0 * PI / (32.0 * zone_length)).sqrt()
}
