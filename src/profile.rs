//! Line scans of the stress field, written out as a text table.
//!
//! A scan runs `x` over a range at a fixed height `y`, which is how the
//! field is usually inspected: along the fault plane (`y = 0`) and along
//! lines just off it.

use rayon::prelude::*;

use crate::error::DomainResult;
use crate::stress::{FieldEvaluator, Point, StressTriple};

/// Columns that can be written for each point of a scan.
pub const OUTPUT_VARS: [(&str, &str); 5] = [
    ("x", "distance ahead of the crack tip"),
    ("y", "distance normal to the crack plane"),
    ("sxx", "normal stress perturbation Sxx"),
    ("syy", "normal stress perturbation Syy"),
    ("sxy", "shear stress perturbation Sxy"),
];

/// Return `n` evenly spaced values from `start` to `end` inclusive.
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            (0..n)
                .map(|i| if i == n - 1 { end } else { start + i as f64 * step })
                .collect()
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Scan {
    pub y: f64,
    pub rows: Vec<(Point, StressTriple)>,
}

/// Evaluate the field along `xs` at each height in `ys`.
pub fn scan(evaluator: &FieldEvaluator, xs: &[f64], ys: &[f64]) -> DomainResult<Vec<Scan>> {
    ys.iter()
        .map(|&y| {
            let points = xs.iter().map(|&x| Point::new(x, y)).collect::<Vec<_>>();

            let mut results = Vec::with_capacity(points.len());
            points
                .par_iter()
                .map(|point| evaluator.stress(*point).map(|stress| (*point, stress)))
                .collect_into_vec(&mut results);

            let rows = results.into_iter().collect::<DomainResult<Vec<_>>>()?;
            Ok(Scan { y, rows })
        })
        .collect()
}

/// Check that every requested column is known.
pub fn check_output_vars(output: &[String]) -> Result<(), String> {
    for out in output {
        if !OUTPUT_VARS.iter().any(|(name, _)| *name == out.trim()) {
            return Err(format!(
                "Error: unknown output variable '{}'. Use --list to see the choices.",
                out
            ));
        }
    }
    Ok(())
}

pub fn format_header(output: &[String]) -> String {
    let mut line = String::new();
    for out in output {
        line.push_str(&format!("{:>12} ", out.trim()));
    }
    line
}

pub fn format_line(point: &Point, stress: &StressTriple, output: &[String]) -> String {
    let mut line = String::new();
    for out in output {
        let column = match out.trim() {
            "x" => format!("{:12.6} ", point.x),
            "y" => format!("{:12.6} ", point.y),
            "sxx" => format!("{:12.4} ", stress.sxx),
            "syy" => format!("{:12.4} ", stress.syy),
            "sxy" => format!("{:12.4} ", stress.sxy),
            _ => format!("{:>12} ", "N/A"),
        };
        line.push_str(&column);
    }
    line
}

/// Write every scan as a block of the table, separated by a blank line.
pub fn format_scans(scans: &[Scan], output: &[String]) -> String {
    let mut table = String::new();
    for (i, scan) in scans.iter().enumerate() {
        if i > 0 {
            table.push('\n');
        }
        table.push_str(&format!("{}y = {}\n", crate::COMMENT, scan.y));
        table.push_str(&format_header(output));
        table.push('\n');
        for (point, stress) in &scan.rows {
            table.push_str(&format_line(point, stress, output));
            table.push('\n');
        }
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DomainError;
    use crate::material::get_preset;
    use approx::assert_relative_eq;

    fn columns(names: &[&str]) -> Vec<String> {
        names.iter().map(|name| name.to_string()).collect()
    }

    #[test]
    fn linspace_ends_exactly() {
        let xs = linspace(-20.0, 10.0, 7);
        assert_eq!(xs.len(), 7);
        assert_eq!(xs[0], -20.0);
        assert_eq!(xs[6], 10.0);
        assert!((xs[1] - -15.0).abs() < 1e-12);

        assert!(linspace(0.0, 1.0, 0).is_empty());
        assert_eq!(linspace(3.0, 1.0, 1), vec![3.0]);
    }

    #[test]
    fn scan_along_the_fault() {
        let evaluator = FieldEvaluator::new(&get_preset("reference").unwrap().params).unwrap();
        let xs = [-10.0, -5.0, 0.0, 5.0];
        let scans = scan(&evaluator, &xs, &[0.0, 2.0]).unwrap();

        assert_eq!(scans.len(), 2);
        assert_eq!(scans[0].rows.len(), 4);

        let (point, stress) = scans[0].rows[1];
        assert_eq!(point, Point::new(-5.0, 0.0));
        assert_relative_eq!(stress.sxx, -1979.689494077756, max_relative = 1e-10);
        assert_relative_eq!(stress.sxy, 642.2229937134945, max_relative = 1e-10);

        let (_, tip) = scans[0].rows[2];
        assert_relative_eq!(tip.sxy, evaluator.zone().peak_traction, max_relative = 1e-12);

        let (_, ahead) = scans[0].rows[3];
        assert!(ahead.sxx.abs() < 1e-9);
        assert_relative_eq!(ahead.sxy, 593.5450775043629, max_relative = 1e-10);
    }

    #[test]
    fn scan_reports_bad_points() {
        let evaluator = FieldEvaluator::new(&get_preset("reference").unwrap().params).unwrap();
        assert!(matches!(
            scan(&evaluator, &[1.0, f64::NAN], &[0.0]),
            Err(DomainError::NumericDomainFailure(_))
        ));
    }

    #[test]
    fn output_vars_are_checked() {
        assert!(check_output_vars(&columns(&["x", "sxy", " sxx"])).is_ok());
        assert!(check_output_vars(&columns(&["x", "kmax"])).is_err());
    }

    #[test]
    fn table_layout() {
        let output = columns(&["x", "sxy"]);
        assert_eq!(format_header(&output), format!("{:>12} {:>12} ", "x", "sxy"));

        let stress = StressTriple {
            sxx: 1.0,
            syy: 2.0,
            sxy: 3.25,
        };
        let line = format_line(&Point::new(0.5, 0.0), &stress, &output);
        assert_eq!(line, "    0.500000       3.2500 ");
    }

    #[test]
    fn blocks_are_labelled_by_height() {
        let evaluator = FieldEvaluator::new(&get_preset("reference").unwrap().params).unwrap();
        let scans = scan(&evaluator, &linspace(-1.0, 1.0, 3), &[0.5, 1.0]).unwrap();
        let table = format_scans(&scans, &columns(&["x", "sxx"]));

        assert!(table.contains("#  y = 0.5\n"));
        assert!(table.contains("#  y = 1\n"));
        // two labels, two headers and six rows, plus the blank separator
        assert_eq!(table.lines().count(), 11);
    }
}
