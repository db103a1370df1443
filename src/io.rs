//! Read material definitions from a finite element material file.
//!
//! The files hold one block per material:
//!
//! ```text
//! # bulk
//! material elastic [
//!     name = moving-block
//!     rho = 1.18e-6
//!     E = 5750
//!     nu = 0.33
//! ]
//!
//! material cohesive_linear [
//!     name = interface_mat
//!     G_c = 0.21
//! ]
//! ```
//!
//! Anything after a `#` is a comment. Sections other than `material`
//! blocks, and sections nested inside a material block, are skipped.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;
use std::str::FromStr;

use log::{debug, warn};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReadError {
    #[error("could not read material file '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("line {line}: {message}")]
    Syntax { line: usize, message: String },

    #[error("line {line}: material block has no name")]
    MissingName { line: usize },

    #[error("material block of type '{kind}' is not closed")]
    Unterminated { kind: String },

    #[error("no material named '{0}' in the file")]
    UnknownMaterial(String),

    #[error("material '{material}' has no parameter '{key}'")]
    MissingParameter { material: String, key: String },

    #[error("material '{material}' parameter '{key}' = '{value}' is not a number")]
    BadValue {
        material: String,
        key: String,
        value: String,
    },
}

/// One `material <kind> [ ... ]` block.
#[derive(Debug, Clone, PartialEq)]
pub struct MaterialBlock {
    pub kind: String,
    pub name: String,
    pub parameters: BTreeMap<String, String>,
}

impl MaterialBlock {
    pub fn get_f64(&self, key: &str) -> Result<f64, ReadError> {
        let value = self
            .parameters
            .get(key)
            .ok_or_else(|| ReadError::MissingParameter {
                material: self.name.clone(),
                key: key.to_string(),
            })?;

        value.parse::<f64>().map_err(|_| ReadError::BadValue {
            material: self.name.clone(),
            key: key.to_string(),
            value: value.clone(),
        })
    }
}

pub fn read_materials(path: &Path) -> Result<BTreeMap<String, MaterialBlock>, ReadError> {
    let content = fs::read_to_string(path).map_err(|source| ReadError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let materials = parse_materials(&content)?;
    debug!(
        "read {} materials from '{}'",
        materials.len(),
        path.display()
    );
    Ok(materials)
}

struct OpenBlock {
    kind: String,
    opened: bool,
    nested: usize,
    line: usize,
    parameters: BTreeMap<String, String>,
}

pub fn parse_materials(content: &str) -> Result<BTreeMap<String, MaterialBlock>, ReadError> {
    let mut materials = BTreeMap::new();
    let mut block: Option<OpenBlock> = None;
    // depth of any non-material section we are skipping
    let mut skipped = 0usize;

    for (i, raw) in content.lines().enumerate() {
        let line_no = i + 1;
        let line = match raw.find('#') {
            Some(start) => &raw[..start],
            None => raw,
        }
        .trim();
        if line.is_empty() {
            continue;
        }

        let opens = line.matches('[').count();
        let closes = line.matches(']').count();

        let mut current = match block.take() {
            Some(current) => current,
            None => {
                if skipped > 0 {
                    skipped = (skipped + opens).saturating_sub(closes);
                    continue;
                }

                let mut words = line.split_whitespace();
                if words.next() != Some("material") {
                    skipped = opens.saturating_sub(closes);
                    continue;
                }

                let kind = words
                    .next()
                    .map(|word| word.trim_end_matches('['))
                    .filter(|word| !word.is_empty())
                    .ok_or_else(|| ReadError::Syntax {
                        line: line_no,
                        message: "material block without a type".to_string(),
                    })?;

                block = Some(OpenBlock {
                    kind: kind.to_string(),
                    opened: opens > 0,
                    nested: 0,
                    line: line_no,
                    parameters: BTreeMap::new(),
                });
                continue;
            }
        };

        if !current.opened {
            if line != "[" {
                return Err(ReadError::Syntax {
                    line: line_no,
                    message: format!("expected '[' after 'material {}'", current.kind),
                });
            }
            current.opened = true;
            block = Some(current);
            continue;
        }

        if current.nested > 0 || opens > 0 {
            current.nested = (current.nested + opens).saturating_sub(closes);
            block = Some(current);
            continue;
        }

        if line == "]" {
            let name = current
                .parameters
                .remove("name")
                .ok_or(ReadError::MissingName { line: current.line })?;
            if materials.contains_key(&name) {
                warn!("material '{}' is defined more than once, keeping the last", name);
            }
            materials.insert(
                name.clone(),
                MaterialBlock {
                    kind: current.kind,
                    name,
                    parameters: current.parameters,
                },
            );
            continue;
        }

        match line.split_once('=') {
            Some((key, value)) => {
                current
                    .parameters
                    .insert(key.trim().to_string(), value.trim().to_string());
            }
            None => {
                return Err(ReadError::Syntax {
                    line: line_no,
                    message: format!("expected 'key = value', found '{}'", line),
                })
            }
        }
        block = Some(current);
    }

    match block {
        Some(current) => Err(ReadError::Unterminated { kind: current.kind }),
        None => Ok(materials),
    }
}

/// Unit system of the numbers in a material file.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UnitSystem {
    /// Pa, kg/m^3, J/m^2
    Si,
    /// MPa for the modulus, and the density and fracture energy in the
    /// units of the millimetre models
    MillimetreMegapascal,
}

impl UnitSystem {
    pub const NAMES: [&'static str; 2] = ["si", "mm-mpa"];

    /// Factors taking (E, rho, G_c) to SI.
    fn factors(self) -> (f64, f64, f64) {
        match self {
            UnitSystem::Si => (1.0, 1.0, 1.0),
            UnitSystem::MillimetreMegapascal => (1e6, 1e9, 1e3),
        }
    }
}

impl FromStr for UnitSystem {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "si" => Ok(UnitSystem::Si),
            "mm-mpa" | "mm_mpa" => Ok(UnitSystem::MillimetreMegapascal),
            _ => Err(format!(
                "unknown unit system '{}', expected one of {:?}",
                s,
                UnitSystem::NAMES
            )),
        }
    }
}

/// Bulk and interface properties taken from a material file, in SI.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolidProperties {
    pub youngs_modulus: f64,
    pub poisson_ratio: f64,
    pub density: f64,
    pub fracture_energy: f64,
}

/// Pick `E`, `nu` and `rho` from the `solid` material and `G_c` from the
/// `interface` material.
pub fn solid_properties(
    materials: &BTreeMap<String, MaterialBlock>,
    solid: &str,
    interface: &str,
    units: UnitSystem,
) -> Result<SolidProperties, ReadError> {
    let lookup = |name: &str| {
        materials
            .get(name)
            .ok_or_else(|| ReadError::UnknownMaterial(name.to_string()))
    };
    let bulk = lookup(solid)?;
    let cohesive = lookup(interface)?;

    let (modulus_factor, density_factor, energy_factor) = units.factors();

    Ok(SolidProperties {
        youngs_modulus: bulk.get_f64("E")? * modulus_factor,
        poisson_ratio: bulk.get_f64("nu")?,
        density: bulk.get_f64("rho")? * density_factor,
        fracture_energy: cohesive.get_f64("G_c")? * energy_factor,
    })
}
