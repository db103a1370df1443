use crate::options::{CrackOptions, Mode, Verbosity};
use clap::{App, AppSettings, Arg};
use log::error;
use rupture::io::UnitSystem;

/// Get the options from the command line.
pub fn get_options_clap(line: &str, options: &mut CrackOptions) {
    let process = App::new("cohesive-crack: stress field of a running mode II cohesive crack")
        .version(crate_version!())
        .about(include_str!("../description.md"))
        .setting(AppSettings::AllowLeadingHyphen)

        .arg(Arg::with_name("preset")
             .short("p")
             .long("preset")
             .value_name("NAME")
             .help("start from a built-in parameter set, see --list (default reference)")
             .takes_value(true))

        .arg(Arg::with_name("material_file")
             .short("f")
             .long("material_file")
             .value_name("FILE")
             .help("read E, nu and rho of the bulk and G_c of the interface from a material file. The wave speeds are derived from the moduli.")
             .takes_value(true))

        .arg(Arg::with_name("solid")
             .long("solid")
             .value_name("NAME")
             .help("name of the bulk material in the material file (default moving-block)")
             .takes_value(true))

        .arg(Arg::with_name("interface")
             .long("interface")
             .value_name("NAME")
             .help("name of the interface material in the material file (default interface_mat)")
             .takes_value(true))

        .arg(Arg::with_name("units")
             .long("units")
             .value_name("SYSTEM")
             .possible_values(&UnitSystem::NAMES)
             .help("unit system of the material file, converted to SI on reading (default si)")
             .case_insensitive(true)
             .takes_value(true))

        .arg(Arg::with_name("x")
             .short("x")
             .long("x")
             .value_name("X")
             .help("distance ahead of the crack tip of the evaluation point (default 1)")
             .takes_value(true))

        .arg(Arg::with_name("y")
             .short("y")
             .long("y")
             .value_name("Y")
             .help("distance from the crack plane of the evaluation point (default 2). Use -0 for the lower crack face.")
             .takes_value(true))

        .arg(Arg::with_name("xc")
             .long("xc")
             .value_name("LENGTH")
             .help("set the length of the cohesive zone X_c")
             .takes_value(true))

        .arg(Arg::with_name("cf")
             .long("cf")
             .value_name("SPEED")
             .help("set the crack speed C_f")
             .takes_value(true))

        .arg(Arg::with_name("cs")
             .long("cs")
             .value_name("SPEED")
             .help("set the shear wave speed C_s")
             .takes_value(true))

        .arg(Arg::with_name("cd")
             .long("cd")
             .value_name("SPEED")
             .help("set the dilatational wave speed C_d")
             .takes_value(true))

        .arg(Arg::with_name("cf_ratio")
             .long("cf_ratio")
             .value_name("RATIO")
             .help("set the crack speed as a fraction of the shear wave speed (default 0.9 when the speeds come from the moduli)")
             .takes_value(true))

        .arg(Arg::with_name("nu")
             .long("nu")
             .value_name("NU")
             .help("set Poisson's ratio")
             .takes_value(true))

        .arg(Arg::with_name("gamma")
             .long("gamma")
             .value_name("ENERGY")
             .help("set the fracture energy Gamma")
             .takes_value(true))

        .arg(Arg::with_name("youngs")
             .long("youngs")
             .value_name("MODULUS")
             .help("set Young's modulus E")
             .takes_value(true))

        .arg(Arg::with_name("density")
             .long("density")
             .value_name("RHO")
             .help("derive the wave speeds from E, nu and this density")
             .takes_value(true))

        .arg(Arg::with_name("bench")
             .short("b")
             .long("bench")
             .value_name("N")
             .help("time N evaluations starting at the evaluation point, stepping x and y by --step")
             .takes_value(true))

        .arg(Arg::with_name("step")
             .long("step")
             .value_name("STEP")
             .help("increment of x and y between benchmark evaluations (default 0.001)")
             .takes_value(true))

        .arg(Arg::with_name("parallel")
             .long("parallel")
             .help("evaluate the benchmark points on all cores. The sums are the same as for a serial run."))

        .arg(Arg::with_name("profile")
             .long("profile")
             .help("write a table of the field along lines of constant y"))

        .arg(Arg::with_name("xrange")
             .long("xrange")
             .value_name("MIN,MAX")
             .help("range of x for --profile (default -50e-3,50e-3)")
             .takes_value(true)
             .require_delimiter(true)
             .allow_hyphen_values(true))

        .arg(Arg::with_name("npoints")
             .long("npoints")
             .value_name("N")
             .help("number of points along each profile line (default 201)")
             .takes_value(true))

        .arg(Arg::with_name("ys")
             .long("ys")
             .value_name("Y1,Y2,...")
             .help("heights of the profile lines (default 1e-8,1e-4,5e-4,1e-3,2e-3,5e-3,1e-2,1.5e-2)")
             .takes_value(true)
             .require_delimiter(true)
             .allow_hyphen_values(true))

        .arg(Arg::with_name("output_vars")
             .short("o")
             .long("output_vars")
             .value_name("VAR1,VAR2,...")
             .help("columns written by --profile (default x,sxx,sxy)")
             .takes_value(true)
             .require_delimiter(true))

        .arg(Arg::with_name("rayleigh")
             .long("rayleigh")
             .help("print the Rayleigh wave speed of the solid and exit"))

        .arg(Arg::with_name("list")
             .short("l")
             .long("list")
             .help("list the built-in parameter sets, output variables and the material file format"))

        .arg(Arg::with_name("verbose")
             .short("v")
             .long("verbose")
             .help("print the options before starting"));

    // turn the commands into matches
    let matches = if line.is_empty() {
        // this will get them directly from the command line
        process.get_matches()
    } else {
        // add command word since it skips first argument
        process.get_matches_from(("cohesive-crack ".to_string() + line.trim()).split(' '))
    };

    // parameter sources
    if let Some(preset) = matches.value_of("preset") {
        options.preset = preset.to_string();
    }
    if let Some(file) = matches.value_of("material_file") {
        options.material_file = file.to_string();
    }
    if let Some(solid) = matches.value_of("solid") {
        options.solid = solid.to_string();
    }
    if let Some(interface) = matches.value_of("interface") {
        options.interface = interface.to_string();
    }
    if let Ok(units) = value_t!(matches, "units", UnitSystem) {
        options.units = units;
    }

    // evaluation point
    if let Ok(x) = value_t!(matches, "x", f64) {
        options.x = x;
    }
    if let Ok(y) = value_t!(matches, "y", f64) {
        options.y = y;
    }

    // explicit parameters
    if let Ok(xc) = value_t!(matches, "xc", f64) {
        options.overrides.zone_length = Some(xc);
    }
    if let Ok(cf) = value_t!(matches, "cf", f64) {
        options.overrides.crack_speed = Some(cf);
    }
    if let Ok(cs) = value_t!(matches, "cs", f64) {
        options.overrides.shear_speed = Some(cs);
    }
    if let Ok(cd) = value_t!(matches, "cd", f64) {
        options.overrides.dilatational_speed = Some(cd);
    }
    if let Ok(cf_ratio) = value_t!(matches, "cf_ratio", f64) {
        options.overrides.cf_ratio = Some(cf_ratio);
    }
    if let Ok(nu) = value_t!(matches, "nu", f64) {
        options.overrides.poisson_ratio = Some(nu);
    }
    if let Ok(gamma) = value_t!(matches, "gamma", f64) {
        options.overrides.fracture_energy = Some(gamma);
    }
    if let Ok(youngs) = value_t!(matches, "youngs", f64) {
        options.overrides.youngs_modulus = Some(youngs);
    }
    if let Ok(density) = value_t!(matches, "density", f64) {
        options.overrides.density = Some(density);
    }

    // benchmark
    if let Ok(iterations) = value_t!(matches, "bench", usize) {
        options.bench.iterations = iterations;
        options.mode = Mode::Bench;
    }
    if let Ok(step) = value_t!(matches, "step", f64) {
        options.bench.step = step;
    }
    if matches.is_present("parallel") {
        options.bench.parallel = true;
    }

    // profile
    if matches.is_present("profile") {
        options.mode = Mode::Profile;
    }
    if let Ok(xrange) = values_t!(matches, "xrange", f64) {
        match parse_range(&xrange) {
            Ok((xmin, xmax)) => {
                options.profile.xmin = xmin;
                options.profile.xmax = xmax;
            }
            Err(why) => {
                error!("Error: {}", why);
                std::process::exit(2);
            }
        }
    }
    if let Ok(npoints) = value_t!(matches, "npoints", usize) {
        options.profile.npoints = npoints;
    }
    if let Ok(ys) = values_t!(matches, "ys", f64) {
        options.profile.ys = ys;
    }
    if let Ok(output_vars) = values_t!(matches, "output_vars", String) {
        options.profile.output_vars = output_vars;
    }

    // terminating output
    if matches.is_present("rayleigh") {
        options.mode = Mode::Rayleigh;
    }
    if matches.is_present("list") {
        options.mode = Mode::List;
    }
    if matches.is_present("verbose") {
        options.verbosity = Verbosity::Verbose;
        println!("Matches: {:?}", matches);
    }

    // keep the benchmark starting point in step with the evaluation point
    options.bench.start = rupture::Point::new(options.x, options.y);
}

// Expected format: MIN,MAX with MIN < MAX
fn parse_range(values: &[f64]) -> Result<(f64, f64), String> {
    match values {
        [min, max] if min < max => Ok((*min, *max)),
        [min, max] => Err(format!(
            "the range minimum {} must be less than the maximum {}",
            min, max
        )),
        _ => Err(format!(
            "a range needs exactly two values, received {}",
            values.len()
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::{get_options_clap, parse_range};
    use crate::options::{get_default_options, Mode, Verbosity};
    use rupture::io::UnitSystem;

    #[test]
    fn parse_range_works_on_two_values() {
        let (min, max) = parse_range(&[-50e-3, 50e-3]).unwrap();

        assert!((min - -50e-3).abs() <= f64::EPSILON);
        assert!((max - 50e-3).abs() <= f64::EPSILON);
    }

    #[test]
    fn parse_range_rejects_bad_ranges() {
        assert!(parse_range(&[1.0]).is_err());
        assert!(parse_range(&[1.0, 2.0, 3.0]).is_err());
        assert!(parse_range(&[2.0, 1.0]).is_err());
    }

    #[test]
    fn defaults_are_a_single_evaluation() {
        let options = get_default_options();

        assert_eq!(options.mode, Mode::Single);
        assert_eq!(options.verbosity, Verbosity::Terse);
        assert_eq!(options.preset, "reference");
        assert!(options.overrides.crack_speed.is_none());
    }

    #[test]
    fn explicit_parameters() {
        let mut options = get_default_options();
        get_options_clap(
            "--x -5 --y -0 --xc 12 --cf 1500 --cs 3100 --cd 5200 --nu 0.25 --gamma 50 --youngs 1e5",
            &mut options,
        );

        assert_eq!(options.mode, Mode::Single);
        assert!((options.x - -5.0).abs() < f64::EPSILON);
        assert!(options.y == 0.0 && options.y.is_sign_negative());
        assert_eq!(options.overrides.zone_length, Some(12.0));
        assert_eq!(options.overrides.crack_speed, Some(1500.0));
        assert_eq!(options.overrides.shear_speed, Some(3100.0));
        assert_eq!(options.overrides.dilatational_speed, Some(5200.0));
        assert_eq!(options.overrides.poisson_ratio, Some(0.25));
        assert_eq!(options.overrides.fracture_energy, Some(50.0));
        assert_eq!(options.overrides.youngs_modulus, Some(1e5));
    }

    #[test]
    fn benchmark_options() {
        let mut options = get_default_options();
        get_options_clap("--bench 500 --parallel --step 0.01 --x 3", &mut options);

        assert_eq!(options.mode, Mode::Bench);
        assert_eq!(options.bench.iterations, 500);
        assert!(options.bench.parallel);
        assert!((options.bench.step - 0.01).abs() < f64::EPSILON);
        assert!((options.bench.start.x - 3.0).abs() < f64::EPSILON);
        assert!((options.bench.start.y - 2.0).abs() < f64::EPSILON);
    }

    #[test]
    fn profile_options() {
        let mut options = get_default_options();
        get_options_clap(
            "--profile --xrange -20,10 --npoints 31 --ys 0,0.5,-0.5 --output_vars x,y,syy",
            &mut options,
        );

        assert_eq!(options.mode, Mode::Profile);
        assert!((options.profile.xmin - -20.0).abs() < f64::EPSILON);
        assert!((options.profile.xmax - 10.0).abs() < f64::EPSILON);
        assert_eq!(options.profile.npoints, 31);
        assert_eq!(options.profile.ys, vec![0.0, 0.5, -0.5]);
        assert_eq!(options.profile.output_vars, vec!["x", "y", "syy"]);
    }

    #[test]
    fn material_file_options() {
        let mut options = get_default_options();
        get_options_clap(
            "--material_file materials.dat --solid block --interface fault --units mm-mpa --cf_ratio 0.8 --preset interface:laboratory",
            &mut options,
        );

        assert_eq!(options.material_file, "materials.dat");
        assert_eq!(options.solid, "block");
        assert_eq!(options.interface, "fault");
        assert_eq!(options.units, UnitSystem::MillimetreMegapascal);
        assert_eq!(options.overrides.cf_ratio, Some(0.8));
        assert_eq!(options.preset, "interface:laboratory");
    }

    #[test]
    fn list_wins_over_other_modes() {
        let mut options = get_default_options();
        get_options_clap("--bench 10 --rayleigh --list", &mut options);
        assert_eq!(options.mode, Mode::List);
    }
}
