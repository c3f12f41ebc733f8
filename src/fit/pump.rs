//! Fitting raw pump samples into coefficient vectors.
//!
//! Vendor pump sheets arrive as unevenly sampled rows of flow rate against
//! head, power, and efficiency. Each attribute is fitted independently so a
//! sheet missing, say, its power column still yields head and efficiency
//! curves. Insufficient data never raises: the attribute's coefficients come
//! back absent and its chart series is omitted downstream.

use tracing::debug;

use crate::domain::{Coefficients, Coord, PumpSample};
use crate::math::fit_polynomial;

/// Minimum number of samples that must carry an attribute before it is fitted.
pub const MIN_ATTRIBUTE_SAMPLES: usize = 5;

/// Flow rate below which the sampled range is considered to reach the y-axis.
///
/// When the lowest sampled flow rate is above this, a synthetic zero-flow
/// point is prepended so the fitted curve stays anchored at the left edge of
/// a chart instead of extrapolating freely.
pub const INTERCEPT_FLOW_THRESHOLD: f64 = 50.0;

/// Polynomial degree of the fitted attribute curves.
pub const FIT_DEGREE: usize = 5;

/// Fitted coefficient vectors, one per pump attribute.
///
/// An absent attribute either was not sampled often enough or could not be
/// fitted; callers treat it as an omitted series.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PumpPerformanceFit {
    pub head: Option<Coefficients>,
    pub power: Option<Coefficients>,
    pub efficiency: Option<Coefficients>,
}

/// How the synthetic zero-flow point takes its value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ZeroFlowRule {
    /// Extend the chord through the two lowest-flow samples back to zero flow.
    Extrapolate,
    /// The attribute is zero at zero flow by definition.
    Zero,
}

/// Fit head, power, and efficiency curves from raw samples.
///
/// `samples` are assumed sorted ascending by flow rate; the caller's data
/// access layer delivers them that way.
pub fn fit_pump_performance(samples: &[PumpSample]) -> PumpPerformanceFit {
    PumpPerformanceFit {
        head: fit_attribute(samples, "head", |s| s.head, ZeroFlowRule::Extrapolate),
        power: fit_attribute(samples, "power", |s| s.power, ZeroFlowRule::Extrapolate),
        efficiency: fit_attribute(samples, "efficiency", |s| s.efficiency, ZeroFlowRule::Zero),
    }
}

fn fit_attribute(
    samples: &[PumpSample],
    label: &'static str,
    value: impl Fn(&PumpSample) -> Option<f64>,
    rule: ZeroFlowRule,
) -> Option<Coefficients> {
    let mut points: Vec<Coord> = samples
        .iter()
        .filter_map(|sample| value(sample).map(|v| Coord::new(sample.flow_rate, v)))
        .collect();

    if points.len() < MIN_ATTRIBUTE_SAMPLES {
        debug!(attribute = label, n = points.len(), "too few samples, skipping fit");
        return None;
    }

    if points[0].x > INTERCEPT_FLOW_THRESHOLD {
        let y0 = match rule {
            ZeroFlowRule::Zero => 0.0,
            ZeroFlowRule::Extrapolate => zero_flow_value(points[0], points[1]),
        };
        points.insert(0, Coord::new(0.0, y0));
    }

    // The bare minimum of points is still rejected once any synthetic point
    // is counted.
    if points.len() == MIN_ATTRIBUTE_SAMPLES {
        debug!(attribute = label, "at minimum point count, skipping fit");
        return None;
    }

    let coeffs = fit_polynomial(&points, FIT_DEGREE)?;
    // FIT_DEGREE + 1 terms always fit the coefficient vector shape.
    Coefficients::from_slice(&coeffs).ok()
}

/// Linear extension of the chord through the two lowest-flow samples to x = 0.
fn zero_flow_value(a: Coord, b: Coord) -> f64 {
    a.y - a.x * (b.y - a.y) / (b.x - a.x)
}

#[cfg(test)]
mod tests {
    use rand::prelude::*;
    use rand::rngs::StdRng;
    use rand_distr::Normal;

    use super::*;
    use crate::math::evaluate;

    fn head_sample(flow_rate: f64, head: f64) -> PumpSample {
        PumpSample {
            flow_rate,
            head: Some(head),
            power: None,
            efficiency: None,
        }
    }

    fn efficiency_sample(flow_rate: f64, efficiency: f64) -> PumpSample {
        PumpSample {
            flow_rate,
            head: None,
            power: None,
            efficiency: Some(efficiency),
        }
    }

    /// Catalog rows from the worked head-curve example: six samples starting
    /// at flow 100, so the zero-flow point is interpolated to (0, 55).
    fn catalog_heads() -> Vec<PumpSample> {
        [
            (100.0, 50.0),
            (200.0, 45.0),
            (300.0, 38.0),
            (400.0, 28.0),
            (500.0, 15.0),
            (600.0, 0.0),
        ]
        .into_iter()
        .map(|(q, h)| head_sample(q, h))
        .collect()
    }

    #[test]
    fn too_few_usable_samples_yield_no_coefficients() {
        let samples: Vec<PumpSample> = catalog_heads().into_iter().take(4).collect();
        let fit = fit_pump_performance(&samples);
        assert_eq!(fit.head, None);
        assert_eq!(fit.power, None);
        assert_eq!(fit.efficiency, None);
    }

    #[test]
    fn five_points_after_synthesis_is_still_rejected() {
        // Lowest flow under the threshold: no synthetic point, five stays five.
        let mut samples = vec![head_sample(30.0, 55.0)];
        samples.extend(catalog_heads().into_iter().take(4));
        assert_eq!(fit_pump_performance(&samples).head, None);

        // Same count but starting above the threshold: the synthetic point
        // lifts the fit to six points and it goes through.
        let samples: Vec<PumpSample> = catalog_heads().into_iter().take(5).collect();
        assert!(fit_pump_performance(&samples).head.is_some());
    }

    #[test]
    fn head_fit_interpolates_the_zero_flow_point() {
        let fit = fit_pump_performance(&catalog_heads());
        let head = fit.head.expect("head fit");

        assert_eq!(head.degree(), Some(FIT_DEGREE));
        assert_eq!(head.get(6), None);
        assert_eq!(head.get(9), None);

        // The chord through (100, 50) and (200, 45) extends back to (0, 55),
        // and the seven assembled points happen to lie on one quintic, so the
        // fit reproduces every input exactly.
        assert!((head.evaluate(0.0) - 55.0).abs() < 1e-6);
        for sample in catalog_heads() {
            let observed = sample.head.unwrap();
            assert!(
                (head.evaluate(sample.flow_rate) - observed).abs() < 1e-6,
                "flow {}: {} vs {}",
                sample.flow_rate,
                head.evaluate(sample.flow_rate),
                observed
            );
        }
    }

    #[test]
    fn efficiency_zero_flow_point_is_pinned_to_zero() {
        // Samples on e(q) = 0.28 q - 0.0004 q^2, which passes through (0, 0).
        // If the zero-flow point were chord-extrapolated like head it would
        // land at (0, 8) and the fit could not pass through the origin.
        let samples: Vec<PumpSample> = (1..=6)
            .map(|i| {
                let q = 100.0 * i as f64;
                efficiency_sample(q, 0.28 * q - 0.0004 * q * q)
            })
            .collect();

        let fit = fit_pump_performance(&samples);
        let efficiency = fit.efficiency.expect("efficiency fit");
        assert!(efficiency.evaluate(0.0).abs() < 1e-6);
        assert!((efficiency.evaluate(300.0) - 48.0).abs() < 1e-6);
    }

    #[test]
    fn efficiency_below_threshold_gets_no_synthetic_point() {
        // Samples on e(q) = 10 + 0.1 q starting at flow 40, under the
        // threshold. With no (0, 0) pinned in, the exact fit keeps the
        // nonzero intercept of the sampled line.
        let samples: Vec<PumpSample> = (0..6)
            .map(|i| {
                let q = 40.0 + 100.0 * i as f64;
                efficiency_sample(q, 10.0 + 0.1 * q)
            })
            .collect();

        let fit = fit_pump_performance(&samples);
        let efficiency = fit.efficiency.expect("efficiency fit");
        assert!((efficiency.evaluate(0.0) - 10.0).abs() < 1e-6);
    }

    #[test]
    fn attributes_are_fitted_independently() {
        let mut samples = catalog_heads();
        // Power is only sampled three times; head keeps its six rows.
        samples[0].power = Some(20.0);
        samples[2].power = Some(25.0);
        samples[4].power = Some(27.0);

        let fit = fit_pump_performance(&samples);
        assert!(fit.head.is_some());
        assert_eq!(fit.power, None);
        assert_eq!(fit.efficiency, None);
    }

    #[test]
    fn recovers_a_random_quintic_exactly() {
        let mut rng = StdRng::seed_from_u64(7);
        let truth: Vec<f64> = (0..=FIT_DEGREE)
            .map(|j| rng.gen_range(-1.0..1.0) / 600.0_f64.powi(j as i32))
            .collect();

        let samples: Vec<PumpSample> = (0..9)
            .map(|i| {
                let q = 75.0 * i as f64;
                head_sample(q, evaluate(&truth, q))
            })
            .collect();

        let head = fit_pump_performance(&samples).head.expect("head fit");
        for sample in &samples {
            let expected = sample.head.unwrap();
            assert!((head.evaluate(sample.flow_rate) - expected).abs() < 1e-8);
        }
    }

    #[test]
    fn noisy_samples_fit_close_to_the_underlying_curve() {
        let truth = [55.0, -0.05, -2.0e-5, 0.0, 0.0, 0.0];
        let mut rng = StdRng::seed_from_u64(42);
        let noise = Normal::new(0.0, 0.05).unwrap();

        let samples: Vec<PumpSample> = (0..=30)
            .map(|i| {
                let q = 20.0 * i as f64;
                head_sample(q, evaluate(&truth, q) + noise.sample(&mut rng))
            })
            .collect();

        let head = fit_pump_performance(&samples).head.expect("head fit");
        for sample in &samples {
            let ideal = evaluate(&truth, sample.flow_rate);
            assert!(
                (head.evaluate(sample.flow_rate) - ideal).abs() < 0.5,
                "flow {} drifted from the underlying curve",
                sample.flow_rate
            );
        }
    }
}
