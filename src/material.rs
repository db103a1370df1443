#![allow(clippy::unreadable_literal)]

//! Material parameters of a running cohesive crack, and a small
//! database of parameter sets.

use std::collections::BTreeMap;
use std::fmt;

use crate::cohesive::{check_zone_length, Elasticity};
use crate::error::DomainResult;
use crate::speeds::{Geometry, WaveSpeeds};

/// Everything needed to evaluate the field apart from the point itself.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MaterialParams {
    /// Crack speed `C_f`
    pub crack_speed: f64,
    /// Shear wave speed `C_s`
    pub shear_speed: f64,
    /// Dilatational wave speed `C_d`
    pub dilatational_speed: f64,
    /// Poisson's ratio `nu`
    pub poisson_ratio: f64,
    /// Young's modulus `E`
    pub youngs_modulus: f64,
    /// Fracture energy `Gamma`
    pub fracture_energy: f64,
    /// Length of the cohesive zone `X_c`
    pub zone_length: f64,
}

impl MaterialParams {
    pub fn speeds(&self) -> WaveSpeeds {
        WaveSpeeds::new(self.crack_speed, self.shear_speed, self.dilatational_speed)
    }

    pub fn elasticity(&self) -> Elasticity {
        Elasticity {
            poisson_ratio: self.poisson_ratio,
            youngs_modulus: self.youngs_modulus,
            fracture_energy: self.fracture_energy,
        }
    }

    /// Check every invariant of the parameter set without evaluating the field.
    pub fn check(&self) -> DomainResult<()> {
        Geometry::from_speeds(&self.speeds())?;
        self.elasticity().check()?;
        check_zone_length(self.zone_length)
    }
}

impl fmt::Display for MaterialParams {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "X_c={} C_f={} C_s={} C_d={} nu={} Gamma={} E={}",
            self.zone_length,
            self.crack_speed,
            self.shear_speed,
            self.dilatational_speed,
            self.poisson_ratio,
            self.fracture_energy,
            self.youngs_modulus
        )
    }
}

pub struct Preset {
    pub name: &'static str,
    pub cite: &'static str,
    pub units: &'static str,
    pub params: MaterialParams,
}

lazy_static! {
    static ref PRESETS: BTreeMap<&'static str, Preset> = {
        let mut presets = BTreeMap::new();

        let mut name = "reference";
        presets.insert(
            name,
            Preset {
                name,
                cite: "[benchmark inputs]",
                units: "consistent",
                params: MaterialParams {
                    crack_speed: 1000.0,
                    shear_speed: 3000.0,
                    dilatational_speed: 5000.0,
                    poisson_ratio: 0.3,
                    youngs_modulus: 200000.0,
                    fracture_energy: 100.0,
                    zone_length: 10.0,
                },
            },
        );

        name = "interface:laboratory";
        presets.insert(
            name,
            Preset {
                name,
                cite: "[laboratory fault, rupture at 0.87 C_s]",
                units: "SI (m, m/s, Pa, J/m^2)",
                params: MaterialParams {
                    crack_speed: 2404.0,
                    shear_speed: 2760.0,
                    dilatational_speed: 4790.0,
                    poisson_ratio: 0.25,
                    youngs_modulus: 51e9,
                    fracture_energy: 0.21,
                    zone_length: 13.8e-3,
                },
            },
        );

        presets
    };
}

/// Return the full map of presets as <name, preset>
pub fn get_all_presets() -> &'static BTreeMap<&'static str, Preset> {
    &PRESETS
}

pub fn get_preset(name: &str) -> Option<&'static Preset> {
    PRESETS.get(name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DomainError;

    #[test]
    fn every_preset_is_valid() {
        for (name, preset) in get_all_presets() {
            assert_eq!(*name, preset.name);
            assert!(preset.params.check().is_ok(), "preset {} failed", name);
        }
    }

    #[test]
    fn unknown_preset() {
        assert!(get_preset("reference").is_some());
        assert!(get_preset("no-such-material").is_none());
    }

    #[test]
    fn check_reports_the_first_broken_invariant() {
        let mut params = get_preset("reference").unwrap().params;
        params.zone_length = -1.0;
        assert_eq!(params.check(), Err(DomainError::NonPositiveCohesiveLength(-1.0)));

        params.crack_speed = 3000.0;
        assert!(matches!(
            params.check(),
            Err(DomainError::InvalidSpeedOrdering { .. })
        ));
    }
}
