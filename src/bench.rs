//! Timing harness for the full evaluation chain.
//!
//! Point `i` of the run is `(x0 + i * step, y0 + i * step)`. Every point
//! goes through the whole chain, parameter checks included, so the
//! timing covers what a caller of `delta_sigma_xy` and `delta_sigma_xx`
//! would pay.

use std::fmt;
use std::time::{Duration, Instant};

use log::info;
use rayon::prelude::*;

use crate::error::DomainResult;
use crate::material::MaterialParams;
use crate::stress::{evaluate, Point};
use crate::COMMENT;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BenchmarkSettings {
    pub start: Point,
    pub step: f64,
    pub iterations: usize,
    /// Evaluate the points on the rayon pool.
    pub parallel: bool,
}

impl Default for BenchmarkSettings {
    fn default() -> Self {
        BenchmarkSettings {
            start: Point::new(1.0, 2.0),
            step: 0.001,
            iterations: 100_000,
            parallel: false,
        }
    }
}

impl BenchmarkSettings {
    pub fn point_at(&self, i: usize) -> Point {
        let offset = i as f64 * self.step;
        Point::new(self.start.x + offset, self.start.y + offset)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BenchmarkResult {
    pub iterations: usize,
    pub elapsed: Duration,
    pub sum_xy: f64,
    pub sum_xx: f64,
}

impl BenchmarkResult {
    /// Mean wall time of a single iteration in microseconds.
    pub fn micros_per_iteration(&self) -> f64 {
        if self.iterations == 0 {
            return 0.0;
        }
        self.elapsed.as_secs_f64() * 1e6 / self.iterations as f64
    }
}

impl fmt::Display for BenchmarkResult {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "{}Benchmark results:", COMMENT)?;
        writeln!(f, "{}Iterations: {}", COMMENT, self.iterations)?;
        writeln!(
            f,
            "{}Total time: {:.6} ms",
            COMMENT,
            self.elapsed.as_secs_f64() * 1e3
        )?;
        writeln!(
            f,
            "{}Time per iteration: {:.6} us",
            COMMENT,
            self.micros_per_iteration()
        )?;
        writeln!(f, "Sum xy: {:.6}", self.sum_xy)?;
        write!(f, "Sum xx: {:.6}", self.sum_xx)
    }
}

/// Run the benchmark.
///
/// The parallel mode collects the per-point results in index order
/// before summing, so both modes give bit-identical sums for any number
/// of threads.
pub fn run(params: &MaterialParams, settings: &BenchmarkSettings) -> DomainResult<BenchmarkResult> {
    info!(
        "benchmark: {} iterations from ({}, {}) step {} parallel {}",
        settings.iterations, settings.start.x, settings.start.y, settings.step, settings.parallel
    );

    let timer = Instant::now();

    let (sum_xy, sum_xx) = if settings.parallel {
        let mut results = Vec::with_capacity(settings.iterations);
        (0..settings.iterations)
            .into_par_iter()
            .map(|i| evaluate(params, settings.point_at(i)))
            .collect_into_vec(&mut results);

        let mut sum_xy = 0.0;
        let mut sum_xx = 0.0;
        for result in results {
            let stress = result?;
            sum_xy += stress.sxy;
            sum_xx += stress.sxx;
        }
        (sum_xy, sum_xx)
    } else {
        let mut sum_xy = 0.0;
        let mut sum_xx = 0.0;
        for i in 0..settings.iterations {
            let stress = evaluate(params, settings.point_at(i))?;
            sum_xy += stress.sxy;
            sum_xx += stress.sxx;
        }
        (sum_xy, sum_xx)
    };

    let elapsed = timer.elapsed();
    info!("benchmark finished in {:?}", elapsed);

    Ok(BenchmarkResult {
        iterations: settings.iterations,
        elapsed,
        sum_xy,
        sum_xx,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DomainError;
    use crate::material::get_preset;
    use approx::assert_relative_eq;

    fn reference() -> MaterialParams {
        get_preset("reference").unwrap().params
    }

    #[test]
    fn default_settings() {
        let settings = BenchmarkSettings::default();
        assert_eq!(settings.point_at(0), Point::new(1.0, 2.0));

        let last = settings.point_at(99_999);
        assert!((last.x - 100.999).abs() < 1e-9);
        assert!((last.y - 101.999).abs() < 1e-9);
    }

    #[test]
    fn full_run_sums() {
        let result = run(&reference(), &BenchmarkSettings::default()).unwrap();

        assert_eq!(result.iterations, 100_000);
        assert!(result.sum_xy.is_finite() && result.sum_xx.is_finite());
        assert_relative_eq!(result.sum_xy, 15310813.665858839, max_relative = 1e-9);
        assert_relative_eq!(result.sum_xx, -21736666.577441946, max_relative = 1e-9);
    }

    #[test]
    fn short_run_sums() {
        let settings = BenchmarkSettings {
            iterations: 1000,
            ..BenchmarkSettings::default()
        };
        let result = run(&reference(), &settings).unwrap();

        assert_relative_eq!(result.sum_xy, 559200.3533228238, max_relative = 1e-10);
        assert_relative_eq!(result.sum_xx, -523468.2136694266, max_relative = 1e-10);
    }

    #[test]
    fn parallel_sums_match_sequential_bit_for_bit() {
        let sequential = BenchmarkSettings {
            iterations: 5000,
            ..BenchmarkSettings::default()
        };
        let parallel = BenchmarkSettings {
            parallel: true,
            ..sequential
        };

        let expected = run(&reference(), &sequential).unwrap();
        for &threads in [1, 3, 8].iter() {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .build()
                .unwrap();
            let result = pool.install(|| run(&reference(), &parallel)).unwrap();

            assert_eq!(expected.sum_xy.to_bits(), result.sum_xy.to_bits());
            assert_eq!(expected.sum_xx.to_bits(), result.sum_xx.to_bits());
        }
    }

    #[test]
    fn repeated_runs_are_identical() {
        let settings = BenchmarkSettings {
            iterations: 2000,
            ..BenchmarkSettings::default()
        };
        let first = run(&reference(), &settings).unwrap();
        let second = run(&reference(), &settings).unwrap();

        assert_eq!(first.sum_xy.to_bits(), second.sum_xy.to_bits());
        assert_eq!(first.sum_xx.to_bits(), second.sum_xx.to_bits());
    }

    #[test]
    fn empty_run() {
        let settings = BenchmarkSettings {
            iterations: 0,
            ..BenchmarkSettings::default()
        };
        let result = run(&reference(), &settings).unwrap();
        assert_eq!(result.sum_xy, 0.0);
        assert_eq!(result.micros_per_iteration(), 0.0);
    }

    #[test]
    fn bad_parameters_stop_the_run() {
        let params = MaterialParams {
            crack_speed: 3000.0,
            ..reference()
        };
        for &parallel in [false, true].iter() {
            let settings = BenchmarkSettings {
                iterations: 10,
                parallel,
                ..BenchmarkSettings::default()
            };
            assert!(matches!(
                run(&params, &settings),
                Err(DomainError::InvalidSpeedOrdering { .. })
            ));
        }
    }

    #[test]
    fn report_layout() {
        let result = BenchmarkResult {
            iterations: 4,
            elapsed: Duration::from_micros(10),
            sum_xy: 1.5,
            sum_xx: -2.0,
        };
        let report = format!("{}", result);

        assert!(report.contains("Iterations: 4"));
        assert!(report.contains("Time per iteration: 2.500000 us"));
        assert!(report.ends_with("Sum xx: -2.000000"));
    }
}
