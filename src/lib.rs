//! rupture
//! Stress perturbation around a steadily running mode II cohesive crack.
//!
//! The field is the closed form solution for a shear crack moving at a
//! constant subsonic speed `C_f` with a linear slip-weakening cohesive
//! zone of length `X_c` behind the tip. The chain is
//!
//! 1. wave speeds to `alpha_s`, `alpha_d` and the Rayleigh denominator `D` (`speeds`),
//! 2. fracture energy to `A2`, `K2` and the peak traction `tau_p` (`cohesive`),
//! 3. the complex kernel `M(z)` (`kernel`),
//! 4. the stress perturbation `Sxx`, `Syy`, `Sxy` (`stress`).

pub static COMMENT: &str = "#  ";

extern crate log;

#[macro_use]
extern crate lazy_static;

pub mod bench;
pub mod cohesive;
pub mod error;
pub mod io;
pub mod kernel;
pub mod material;
pub mod profile;
pub mod speeds;
pub mod stress;

pub use crate::error::{DomainError, DomainResult};
pub use crate::material::MaterialParams;
pub use crate::stress::{
    delta_sigma_xx, delta_sigma_xy, delta_sigma_yy, evaluate, FieldEvaluator, Point, StressTriple,
};
