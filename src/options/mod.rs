//! These are the data structures for command line options as well as
//! the initial default values.

use rupture::bench::BenchmarkSettings;
use rupture::io::UnitSystem;
use rupture::COMMENT;

pub mod builder;
pub mod clap;

#[derive(Debug, Clone, PartialEq)]
pub enum Verbosity {
    Verbose,
    Terse,
}

/// What the program does once the parameters are known.
#[derive(Debug, Clone, PartialEq)]
pub enum Mode {
    /// Evaluate the field at a single point
    Single,
    /// Time the full evaluation chain
    Bench,
    /// Scan the field along lines of constant y
    Profile,
    /// Report the Rayleigh wave speed
    Rayleigh,
    /// Print the extended help
    List,
}

#[derive(Debug, Clone)]
pub struct ProfileOptions {
    pub xmin: f64,
    pub xmax: f64,
    pub npoints: usize,
    /// Heights of the scan lines
    pub ys: Vec<f64>,
    /// Columns to be written out.
    pub output_vars: Vec<String>,
}

/// Explicit values that override the preset or the material file.
#[derive(Debug, Clone, Default)]
pub struct Overrides {
    pub zone_length: Option<f64>,
    pub crack_speed: Option<f64>,
    pub shear_speed: Option<f64>,
    pub dilatational_speed: Option<f64>,
    pub poisson_ratio: Option<f64>,
    pub fracture_energy: Option<f64>,
    pub youngs_modulus: Option<f64>,
    /// Density used to derive the wave speeds from the moduli
    pub density: Option<f64>,
    /// Crack speed as a fraction of the shear wave speed
    pub cf_ratio: Option<f64>,
}

/// Option data for a stress field calculation.
#[derive(Debug, Clone)]
pub struct CrackOptions {
    pub mode: Mode,
    /// Level of verbosity
    pub verbosity: Verbosity,
    /// Name of the built-in parameter set to start from.
    pub preset: String,
    /// Material file to read the elastic and interface properties from.
    pub material_file: String,
    /// Name of the bulk material in the file.
    pub solid: String,
    /// Name of the interface material in the file.
    pub interface: String,
    pub units: UnitSystem,
    pub overrides: Overrides,
    /// Evaluation point for a single calculation
    pub x: f64,
    pub y: f64,
    pub bench: BenchmarkSettings,
    pub profile: ProfileOptions,
}

impl std::fmt::Display for CrackOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let _e = writeln!(f, "{}mode: {:?}", COMMENT, self.mode);
        let _e = writeln!(f, "{}preset: {:?}", COMMENT, self.preset);
        if !self.material_file.is_empty() {
            let _e = writeln!(f, "{}material_file: {:?}", COMMENT, self.material_file);
            let _e = writeln!(f, "{}solid: {:?}", COMMENT, self.solid);
            let _e = writeln!(f, "{}interface: {:?}", COMMENT, self.interface);
            let _e = writeln!(f, "{}units: {:?}", COMMENT, self.units);
        }
        let _e = writeln!(f, "{}overrides: {:?}", COMMENT, self.overrides);

        match self.mode {
            Mode::Bench => {
                let _e = writeln!(f, "{}bench: {:?}", COMMENT, self.bench);
            }
            Mode::Profile => {
                let _e = writeln!(f, "{}profile: {:?}", COMMENT, self.profile);
            }
            _ => (),
        }
        write!(f, "{}point: ({:?}, {:?})", COMMENT, self.x, self.y)
    }
}

pub fn get_default_options() -> CrackOptions {
    CrackOptions {
        mode: Mode::Single,
        verbosity: Verbosity::Terse,
        preset: "reference".to_string(),

        material_file: "".to_string(),
        solid: "moving-block".to_string(),
        interface: "interface_mat".to_string(),
        units: UnitSystem::Si,
        overrides: Overrides::default(),

        x: 1.0,
        y: 2.0,

        bench: BenchmarkSettings::default(),

        profile: ProfileOptions {
            xmin: -50e-3,
            xmax: 50e-3,
            npoints: 201,
            ys: vec![1e-8, 0.1e-3, 0.5e-3, 1.0e-3, 2.0e-3, 5e-3, 10e-3, 15e-3],
            output_vars: vec!["x".to_string(), "sxx".to_string(), "sxy".to_string()],
        },
    }
}
