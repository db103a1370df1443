//! Domain errors raised while evaluating the crack tip field.
//!
//! Every variant describes a bad input or a non-finite intermediate.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    /// The crack must run slower than both bulk waves, and the shear wave
    /// slower than the dilatational wave.
    #[error("crack speed {crack_speed} must satisfy 0 < C_f < C_s ({shear_speed}) < C_d ({dilatational_speed})")]
    InvalidSpeedOrdering {
        crack_speed: f64,
        shear_speed: f64,
        dilatational_speed: f64,
    },

    #[error("crack speed {crack_speed} is at the Rayleigh speed (normalised D = {normalised_denominator:.3e})")]
    NearRayleighSingularity {
        crack_speed: f64,
        normalised_denominator: f64,
    },

    /// D < 0 so the compliance A2 is negative and K2 would be complex.
    #[error("crack speed {crack_speed} lies between the Rayleigh and shear wave speeds (D = {denominator:.6e})")]
    SuperRayleighSpeed { crack_speed: f64, denominator: f64 },

    #[error("cohesive zone length must be positive, got {0}")]
    NonPositiveCohesiveLength(f64),

    #[error("fracture energy must not be negative, got {0}")]
    NegativeFractureEnergy(f64),

    #[error("Poisson's ratio must lie in (-1, 0.5), got {0}")]
    InvalidPoissonRatio(f64),

    #[error("Young's modulus must be positive, got {0}")]
    NonPositiveModulus(f64),

    #[error("density must be positive, got {0}")]
    NonPositiveDensity(f64),

    #[error("non-finite value in {0}")]
    NumericDomainFailure(&'static str),
}

pub type DomainResult<T> = Result<T, DomainError>;
