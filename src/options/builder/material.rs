use std::path::Path;

use crate::options::CrackOptions;
use rupture::io::{read_materials, solid_properties};
use rupture::material::{get_preset, MaterialParams};
use rupture::speeds::WaveSpeeds;
use rupture::COMMENT;

/// Crack speed as a fraction of `C_s` when the wave speeds are derived
/// from the moduli and no ratio is given.
pub const DEFAULT_CF_RATIO: f64 = 0.9;

/// Assemble the parameter set from the preset, the material file and
/// any explicit values, in that order of increasing priority.
pub fn get_material_params(options: &CrackOptions) -> Result<(MaterialParams, String), String> {
    let preset = match get_preset(&options.preset) {
        Some(preset) => preset,
        None => {
            return Err(format!(
                "Unknown preset '{}'. Use --list to see the built-in parameter sets.",
                options.preset
            ))
        }
    };
    let mut params = preset.params;
    let mut messages = vec![format!(
        "{}Starting from preset '{}' {}",
        COMMENT, preset.name, preset.cite
    )];

    let overrides = &options.overrides;
    let mut density = overrides.density;

    if !options.material_file.is_empty() {
        let materials = read_materials(Path::new(&options.material_file))
            .map_err(|why| why.to_string())?;
        let props = solid_properties(&materials, &options.solid, &options.interface, options.units)
            .map_err(|why| format!("in material file '{}': {}", options.material_file, why))?;

        params.youngs_modulus = props.youngs_modulus;
        params.poisson_ratio = props.poisson_ratio;
        params.fracture_energy = props.fracture_energy;
        if density.is_none() {
            density = Some(props.density);
        }
        messages.push(format!(
            "{}Using '{}' and '{}' from the material file {} ({:?} units)",
            COMMENT, options.solid, options.interface, options.material_file, options.units
        ));
    }

    if let Some(zone_length) = overrides.zone_length {
        params.zone_length = zone_length;
    }
    if let Some(poisson_ratio) = overrides.poisson_ratio {
        params.poisson_ratio = poisson_ratio;
    }
    if let Some(fracture_energy) = overrides.fracture_energy {
        params.fracture_energy = fracture_energy;
    }
    if let Some(youngs_modulus) = overrides.youngs_modulus {
        params.youngs_modulus = youngs_modulus;
    }

    if let Some(density) = density {
        let ratio = overrides.cf_ratio.unwrap_or(DEFAULT_CF_RATIO);
        let speeds =
            WaveSpeeds::from_moduli(params.youngs_modulus, params.poisson_ratio, density, ratio)
                .map_err(|why| why.to_string())?;
        params.crack_speed = speeds.crack;
        params.shear_speed = speeds.shear;
        params.dilatational_speed = speeds.dilatational;
        messages.push(format!(
            "{}Wave speeds from the moduli with density {}: C_s {:.1} C_d {:.1}",
            COMMENT, density, speeds.shear, speeds.dilatational
        ));
    }

    if let Some(shear_speed) = overrides.shear_speed {
        params.shear_speed = shear_speed;
    }
    if let Some(dilatational_speed) = overrides.dilatational_speed {
        params.dilatational_speed = dilatational_speed;
    }
    if let Some(ratio) = overrides.cf_ratio {
        params.crack_speed = ratio * params.shear_speed;
    }
    if let Some(crack_speed) = overrides.crack_speed {
        params.crack_speed = crack_speed;
    }

    Ok((params, messages.join("\n")))
}
