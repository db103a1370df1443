/// cohesive-crack
///
/// A program to evaluate the stress perturbation around a steadily
/// running mode II (in-plane shear) crack with a cohesive zone.
///
/// The main program only handles the command line flags and the
/// output. The calculations are done through calls to the associated
/// **rupture** library. The flags are used to build the
/// **CrackOptions** data structure, from which the material parameters
/// are assembled.
///
/// Think of the program flow as
///
/// 1. Read the options
/// 2. Assemble the parameters from the preset, the material file and the flags
/// 3. Check the parameters and derive the cohesive zone scalars
/// 4. Evaluate, scan or time the field
/// 5. Write out the requested output

#[macro_use]
extern crate clap;
extern crate env_logger;
extern crate log;
extern crate rupture;

use log::error;
use options::{clap::get_options_clap, builder, Mode};
use rupture::{bench, profile, speeds, FieldEvaluator, MaterialParams, Point, COMMENT};

mod list;
mod options;

fn main() {
    env_logger::init();

    let mut options = options::get_default_options();
    get_options_clap("", &mut options);
    println!("{}cohesive-crack: version {}", COMMENT, crate_version!());
    println!("{}", COMMENT);
    if options.verbosity == options::Verbosity::Verbose {
        println!("{}Options: ", COMMENT);
        println!("{}", options);
    }

    if options.mode == Mode::List {
        list::print_list();
        std::process::exit(0);
    }

    let params = match builder::material::get_material_params(&options) {
        Ok(result) => {
            println!("{}", result.1);
            result.0
        }
        Err(why) => {
            error!("Error: {}", why);
            std::process::exit(1)
        }
    };
    println!("{}Parameters: {}", COMMENT, params);

    let outcome = match options.mode {
        Mode::Rayleigh => print_rayleigh(&params),
        Mode::Bench => run_benchmark(&params, &options.bench),
        Mode::Profile => run_profile(&params, &options.profile),
        Mode::Single | Mode::List => run_single(&params, Point::new(options.x, options.y)),
    };

    if let Err(why) = outcome {
        error!("Error: {}", why);
        std::process::exit(1)
    }
}

fn get_evaluator(params: &MaterialParams) -> Result<FieldEvaluator, String> {
    FieldEvaluator::new(params).map_err(|why| why.to_string())
}

fn print_diagnostics(evaluator: &FieldEvaluator) {
    let geometry = evaluator.geometry();
    let zone = evaluator.zone();
    println!("{}alpha_s: {}", COMMENT, geometry.alpha_s);
    println!("{}alpha_d: {}", COMMENT, geometry.alpha_d);
    println!("{}D: {}", COMMENT, geometry.denominator);
    println!("{}A2: {}", COMMENT, zone.compliance);
    println!("{}K2: {}", COMMENT, zone.stress_intensity);
    println!("{}tau_p: {}", COMMENT, zone.peak_traction);
}

fn run_single(params: &MaterialParams, point: Point) -> Result<(), String> {
    let evaluator = get_evaluator(params)?;
    print_diagnostics(&evaluator);

    let stress = evaluator.stress(point).map_err(|why| why.to_string())?;
    println!("{}Point: x={} y={}", COMMENT, point.x, point.y);
    println!("delta_sigma_xy: {}", stress.sxy);
    println!("delta_sigma_xx: {}", stress.sxx);
    println!("delta_sigma_yy: {}", stress.syy);
    Ok(())
}

fn run_benchmark(params: &MaterialParams, settings: &bench::BenchmarkSettings) -> Result<(), String> {
    // fail on bad parameters before the clock starts
    get_evaluator(params)?;

    println!("{}Running benchmark test...", COMMENT);
    let result = bench::run(params, settings).map_err(|why| why.to_string())?;
    println!("{}", result);
    Ok(())
}

fn run_profile(params: &MaterialParams, settings: &options::ProfileOptions) -> Result<(), String> {
    profile::check_output_vars(&settings.output_vars)?;
    if settings.npoints == 0 {
        return Err("--npoints must be at least 1".to_string());
    }

    let evaluator = get_evaluator(params)?;
    print_diagnostics(&evaluator);

    let xs = profile::linspace(settings.xmin, settings.xmax, settings.npoints);
    let scans = profile::scan(&evaluator, &xs, &settings.ys).map_err(|why| why.to_string())?;
    print!("{}", profile::format_scans(&scans, &settings.output_vars));
    Ok(())
}

fn print_rayleigh(params: &MaterialParams) -> Result<(), String> {
    let rayleigh = speeds::rayleigh_speed(params.shear_speed, params.dilatational_speed)
        .map_err(|why| why.to_string())?;

    println!("{}C_s: {}", COMMENT, params.shear_speed);
    println!("{}C_d: {}", COMMENT, params.dilatational_speed);
    println!("Rayleigh wave speed C_R: {}", rayleigh);
    println!("C_R / C_s: {}", rayleigh / params.shear_speed);
    println!(
        "{}Crack speed C_f {} is {:.4} C_R",
        COMMENT,
        params.crack_speed,
        params.crack_speed / rayleigh
    );
    Ok(())
}
