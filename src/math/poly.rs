//! Least-squares polynomial fitting.
//!
//! The fitter solves small, tall regression problems of the form:
//!
//! ```text
//! minimize Σ (y_i - Σ_j c_j x_i^j)^2
//! ```
//!
//! Implementation choices:
//! - The x values are scaled to unit magnitude before the monomial design
//!   matrix is built. Raw field units (flow rates in the hundreds) would push
//!   the fifth-order column toward 1e13 and ruin the conditioning; the solved
//!   coefficients are mapped back to the raw x domain afterwards, which is
//!   the form callers store.
//! - SVD solves the least-squares problem robustly even when the design
//!   matrix is tall (nalgebra's `QR::solve` is intended for square systems
//!   and will panic for non-square matrices), with progressively looser
//!   singular-value tolerances before giving up.

use nalgebra::{DMatrix, DVector};

use crate::domain::Coord;

/// Fit an ascending-order polynomial of `degree` through `points`.
///
/// Returns `None` when the system is under-determined (`points.len() <=
/// degree`), any input value is non-finite, or the decomposition cannot
/// produce a finite solution.
pub fn fit_polynomial(points: &[Coord], degree: usize) -> Option<Vec<f64>> {
    let n = points.len();
    if n <= degree {
        return None;
    }
    if points.iter().any(|c| !c.x.is_finite() || !c.y.is_finite()) {
        return None;
    }

    let scale = points.iter().map(|c| c.x.abs()).fold(0.0_f64, f64::max);
    let scale = if scale > 0.0 { scale } else { 1.0 };

    let mut design = DMatrix::<f64>::zeros(n, degree + 1);
    let mut rhs = DVector::<f64>::zeros(n);
    for (i, coord) in points.iter().enumerate() {
        let u = coord.x / scale;
        let mut term = 1.0;
        for j in 0..=degree {
            design[(i, j)] = term;
            term *= u;
        }
        rhs[i] = coord.y;
    }

    let svd = design.svd(true, true);
    for &tol in &[1e-12, 1e-10, 1e-8] {
        if let Ok(solution) = svd.solve(&rhs, tol) {
            if solution.iter().all(|v| v.is_finite()) {
                // Undo the x scaling: the coefficient of x^j in raw units is
                // the scaled coefficient divided by scale^j.
                let mut coeffs = Vec::with_capacity(degree + 1);
                let mut s = 1.0;
                for j in 0..=degree {
                    coeffs.push(solution[j] / s);
                    s *= scale;
                }
                return Some(coeffs);
            }
        }
    }

    None
}

/// Evaluate an ascending-order coefficient slice at `x` (Horner).
pub fn evaluate(coeffs: &[f64], x: f64) -> f64 {
    coeffs.iter().rev().fold(0.0, |acc, &c| acc * x + c)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn coords(pairs: &[(f64, f64)]) -> Vec<Coord> {
        pairs.iter().map(|&p| Coord::from(p)).collect()
    }

    #[test]
    fn fits_an_exact_line() {
        // y = 2 + 3x
        let points = coords(&[(0.0, 2.0), (1.0, 5.0), (2.0, 8.0)]);
        let coeffs = fit_polynomial(&points, 1).unwrap();

        assert_eq!(coeffs.len(), 2);
        assert!((coeffs[0] - 2.0).abs() < 1e-10);
        assert!((coeffs[1] - 3.0).abs() < 1e-10);
    }

    #[test]
    fn fits_a_quadratic_in_field_scale_units() {
        // y = 50 - 0.01x + 0.0002x^2 sampled at flow-rate-sized x values.
        let truth = [50.0, -0.01, 0.0002];
        let points: Vec<Coord> = (0..8)
            .map(|i| {
                let x = 100.0 * i as f64;
                Coord::new(x, evaluate(&truth, x))
            })
            .collect();

        let coeffs = fit_polynomial(&points, 2).unwrap();
        for (fitted, expected) in coeffs.iter().zip(truth) {
            assert!((fitted - expected).abs() < 1e-9, "{fitted} vs {expected}");
        }
    }

    #[test]
    fn under_determined_systems_are_rejected() {
        let points = coords(&[(0.0, 1.0), (1.0, 2.0), (2.0, 3.0)]);
        assert!(fit_polynomial(&points, 3).is_none());
        assert!(fit_polynomial(&[], 0).is_none());
    }

    #[test]
    fn non_finite_input_is_rejected() {
        let points = coords(&[(0.0, 1.0), (1.0, f64::NAN), (2.0, 3.0)]);
        assert!(fit_polynomial(&points, 1).is_none());

        let points = coords(&[(0.0, 1.0), (f64::INFINITY, 2.0), (2.0, 3.0)]);
        assert!(fit_polynomial(&points, 1).is_none());
    }

    #[test]
    fn horner_matches_direct_evaluation() {
        let coeffs = [1.0, -2.0, 0.5, 0.25];
        let x = 3.0;
        let direct = 1.0 - 2.0 * x + 0.5 * x * x + 0.25 * x * x * x;
        assert!((evaluate(&coeffs, x) - direct).abs() < 1e-12);
        assert_eq!(evaluate(&[], 5.0), 0.0);
    }
}
