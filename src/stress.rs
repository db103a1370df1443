//! Assemble the in-plane stress perturbation from the kernel.
//!
//! With `M_d = M(x + i alpha_d y)` and `M_s = M(x + i alpha_s y)`:
//!
//! ```text
//! Sxx =  2 alpha_s / D               Im[(1 + 2 alpha_d^2 - alpha_s^2) M_d - (1 + alpha_s^2) M_s]
//! Syy = -2 alpha_s (1 + alpha_s^2) / D Im[M_d - M_s]
//! Sxy =  1 / D                        Re[4 alpha_s alpha_d M_d - (1 + alpha_s^2)^2 M_s]
//! ```
//!
//! `x` runs in the direction of propagation with the tip at the origin,
//! so the cohesive zone occupies `-X_c < x < 0` on `y = 0`.

#![allow(clippy::too_many_arguments)]

use num_complex::Complex64;
use rayon::prelude::*;

use crate::cohesive::CohesiveZone;
use crate::error::{DomainError, DomainResult};
use crate::kernel::m_of_z;
use crate::material::MaterialParams;
use crate::speeds::Geometry;

/// Position relative to the crack tip.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// In-plane stress perturbation at a point.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct StressTriple {
    pub sxx: f64,
    pub syy: f64,
    pub sxy: f64,
}

impl StressTriple {
    pub fn is_finite(&self) -> bool {
        self.sxx.is_finite() && self.syy.is_finite() && self.sxy.is_finite()
    }
}

/// Combine the two kernel values into the three stress components.
pub fn assemble(m_d: Complex64, m_s: Complex64, geometry: &Geometry) -> StressTriple {
    let alpha_s = geometry.alpha_s;
    let alpha_d = geometry.alpha_d;
    let d = geometry.denominator;

    let alpha_s_sq = alpha_s * alpha_s;
    let alpha_d_sq = alpha_d * alpha_d;
    let term1 = 1.0 + alpha_s_sq;

    let sxx_tmp = (1.0 + 2.0 * alpha_d_sq - alpha_s_sq) * m_d - term1 * m_s;
    let syy_tmp = m_d - m_s;
    let sxy_tmp = 4.0 * alpha_s * alpha_d * m_d - term1 * term1 * m_s;

    StressTriple {
        sxx: 2.0 * alpha_s / d * sxx_tmp.im,
        syy: -2.0 * alpha_s * term1 / d * syy_tmp.im,
        sxy: sxy_tmp.re / d,
    }
}

/// A parameter set that has been checked once and can then be evaluated
/// at any number of points, from any number of threads.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldEvaluator {
    params: MaterialParams,
    geometry: Geometry,
    zone: CohesiveZone,
}

impl FieldEvaluator {
    pub fn new(params: &MaterialParams) -> DomainResult<Self> {
        let speeds = params.speeds();
        let geometry = Geometry::from_speeds(&speeds)?;
        let zone = CohesiveZone::new(&speeds, &geometry, &params.elasticity(), params.zone_length)?;

        Ok(Self {
            params: *params,
            geometry,
            zone,
        })
    }

    pub fn params(&self) -> &MaterialParams {
        &self.params
    }

    pub fn geometry(&self) -> &Geometry {
        &self.geometry
    }

    pub fn zone(&self) -> &CohesiveZone {
        &self.zone
    }

    /// Stress perturbation at `point`.
    ///
    /// A zero `y` is kept with its sign: `+0.0` evaluates the upper crack
    /// face and `-0.0` the lower one.
    pub fn stress(&self, point: Point) -> DomainResult<StressTriple> {
        if !(point.x.is_finite() && point.y.is_finite()) {
            return Err(DomainError::NumericDomainFailure("evaluation point"));
        }

        let z_d = Complex64::new(point.x, self.geometry.alpha_d * point.y);
        let z_s = Complex64::new(point.x, self.geometry.alpha_s * point.y);

        let tau_p = self.zone.peak_traction;
        let m_d = m_of_z(tau_p, self.params.zone_length, z_d)?;
        let m_s = m_of_z(tau_p, self.params.zone_length, z_s)?;

        let stress = assemble(m_d, m_s, &self.geometry);
        if stress.is_finite() {
            Ok(stress)
        } else {
            Err(DomainError::NumericDomainFailure("stress assembly"))
        }
    }

    /// Evaluate many points on the rayon pool. The results are in the
    /// same order as `points`.
    pub fn stress_at(&self, points: &[Point]) -> Vec<DomainResult<StressTriple>> {
        let mut results = Vec::with_capacity(points.len());
        points
            .par_iter()
            .map(|point| self.stress(*point))
            .collect_into_vec(&mut results);
        results
    }
}

/// Run the whole chain for a single point.
pub fn evaluate(params: &MaterialParams, point: Point) -> DomainResult<StressTriple> {
    FieldEvaluator::new(params)?.stress(point)
}

fn evaluate_args(
    x: f64,
    y: f64,
    x_c: f64,
    c_f: f64,
    c_s: f64,
    c_d: f64,
    nu: f64,
    gamma: f64,
    e: f64,
) -> DomainResult<StressTriple> {
    let params = MaterialParams {
        crack_speed: c_f,
        shear_speed: c_s,
        dilatational_speed: c_d,
        poisson_ratio: nu,
        youngs_modulus: e,
        fracture_energy: gamma,
        zone_length: x_c,
    };
    evaluate(&params, Point::new(x, y))
}

/// Shear stress perturbation `Sxy` at `(x, y)`.
pub fn delta_sigma_xy(
    x: f64,
    y: f64,
    x_c: f64,
    c_f: f64,
    c_s: f64,
    c_d: f64,
    nu: f64,
    gamma: f64,
    e: f64,
) -> DomainResult<f64> {
    evaluate_args(x, y, x_c, c_f, c_s, c_d, nu, gamma, e).map(|stress| stress.sxy)
}

/// Normal stress perturbation `Sxx` at `(x, y)`.
pub fn delta_sigma_xx(
    x: f64,
    y: f64,
    x_c: f64,
    c_f: f64,
    c_s: f64,
    c_d: f64,
    nu: f64,
    gamma: f64,
    e: f64,
) -> DomainResult<f64> {
    evaluate_args(x, y, x_c, c_f, c_s, c_d, nu, gamma, e).map(|stress| stress.sxx)
}

/// Normal stress perturbation `Syy` at `(x, y)`.
pub fn delta_sigma_yy(
    x: f64,
    y: f64,
    x_c: f64,
    c_f: f64,
    c_s: f64,
    c_d: f64,
    nu: f64,
    gamma: f64,
    e: f64,
) -> DomainResult<f64> {
    evaluate_args(x, y, x_c, c_f, c_s, c_d, nu, gamma, e).map(|stress| stress.syy)
}
