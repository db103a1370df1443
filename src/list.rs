use rupture::material;
use rupture::profile::OUTPUT_VARS;

static HIGHLIGHTS: &str =
"    - Closed form stress perturbation (Sxx, Syy, Sxy) around a steadily
      running mode II crack with a linear slip-weakening cohesive zone
    - Checks of the crack speed against the shear, dilatational and
      Rayleigh wave speeds
    - Line scans of the field for plotting
    - Timing benchmark of the full evaluation chain, serial or parallel
";

static UNITS: &str =
"Any consistent set of units may be used. The built-in 'reference' preset
is a unitless benchmark parameter set, and the
'interface:laboratory' preset is in SI (m, m/s, Pa, J/m^2) so the stresses
come out in Pa.

Values read from a material file are converted to SI with --units. For
mm-mpa, E is multiplied by 1e6, rho by 1e9 and G_c by 1e3.
";

static COORDINATES: &str =
"The crack runs in the +x direction with its tip at the origin, so the
cohesive zone lies on -X_c < x < 0, y = 0. On the crack plane behind the tip
the field is discontinuous across the faces. The sign of a zero y picks the
face: y = 0 evaluates the upper face and y = -0 the lower face.

The solution exists only for 0 < C_f < C_R < C_s < C_d, where C_R is the
Rayleigh wave speed (see --rayleigh).
";

/// Prints out lists of data. Sort of an extended help.
pub fn print_list() {
    let formats = [(
        "Material files",
"Material files hold one block per material. Anything after a '#' is a
comment and sections other than material blocks are skipped.

material elastic [
    name = moving-block
    rho = 1.18e-6
    E = 5750
    nu = 0.33
]

material cohesive_linear [
    name = interface_mat
    G_c = 0.21
]

E, nu and rho are taken from the --solid material and G_c from the
--interface material. The wave speeds are then derived from the moduli and
the crack speed is --cf_ratio (default 0.9) times the shear wave speed.",
    )];

    let mut header = Counter::new();

    header.section("Program Highlights");
    print!("{}", HIGHLIGHTS);

    header.section("Units");
    print!("{}", UNITS);

    header.section("Coordinates");
    print!("{}", COORDINATES);

    header.section("Output Parameters");
    for &(abbrev, descrip) in OUTPUT_VARS.iter() {
        println!("{:20} {}", abbrev, descrip);
    }

    header.section("Parameter Presets");
    println!(
        "{:22} {:>8} {:>8} {:>8} {:>6} {:>10} {:>8} {:>8} Units",
        "Name", "C_f", "C_s", "C_d", "nu", "E", "Gamma", "X_c"
    );
    for (name, preset) in material::get_all_presets().iter() {
        let p = &preset.params;
        println!(
            "{:22} {:>8} {:>8} {:>8} {:>6} {:>10e} {:>8} {:>8} {}",
            name,
            p.crack_speed,
            p.shear_speed,
            p.dilatational_speed,
            p.poisson_ratio,
            p.youngs_modulus,
            p.fracture_energy,
            p.zone_length,
            preset.units
        );
        println!("{:22} {}", "", preset.cite);
    }

    header.section("File formats");
    for &(file, form) in &formats {
        header.subsection(file);
        println!("{}", form);
    }

    println!();
}

struct Counter {
    section: usize,
    subsection: usize,
}

impl Counter {
    fn new() -> Counter {
        Counter {
            section: 0,
            subsection: 0,
        }
    }

    // print as a header
    fn section(&mut self, head: &str) {
        self.section += 1;
        self.subsection = 0;
        let header = format!("{}. {}", self.section, head);
        println!("\n{}", header);
        println!("{}\n", "=".repeat(header.len()));
    }

    fn subsection(&mut self, head: &str) {
        self.subsection += 1;
        let header = format!("{}.{}. {}", self.section, self.subsection, head);
        println!("{}", header);
        println!("{}\n", "-".repeat(header.len()));
    }
}
