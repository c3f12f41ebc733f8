//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they can be:
//!
//! - used in-memory while an analysis run assembles its output
//! - handed to outer layers for export and chart rendering
//! - reloaded later for comparisons
//!
//! The curve-type registry is a closed enumeration: every tag the reporting
//! module stores is listed here with its integer key, display name, axis unit
//! categories, and industry application. There is no runtime type discovery.

use serde::{Deserialize, Serialize};

use crate::error::CurveError;

/// Physical-unit category for a curve axis.
///
/// Categories, not concrete units: the caller decides whether a flow rate is
/// bbl/d or m3/d. `unit_label` gives the conventional field unit for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnitCategory {
    FlowRate,
    Pressure,
    Head,
    Power,
    Percent,
    Frequency,
    Depth,
    GasLiquidRatio,
    Temperature,
}

impl UnitCategory {
    pub fn display_name(self) -> &'static str {
        match self {
            UnitCategory::FlowRate => "flow rate",
            UnitCategory::Pressure => "pressure",
            UnitCategory::Head => "head",
            UnitCategory::Power => "power",
            UnitCategory::Percent => "percent",
            UnitCategory::Frequency => "frequency",
            UnitCategory::Depth => "depth",
            UnitCategory::GasLiquidRatio => "gas-liquid ratio",
            UnitCategory::Temperature => "temperature",
        }
    }

    /// Conventional oilfield unit label for terminal output.
    pub fn unit_label(self) -> &'static str {
        match self {
            UnitCategory::FlowRate => "bbl/d",
            UnitCategory::Pressure => "psi",
            UnitCategory::Head => "ft",
            UnitCategory::Power => "hp",
            UnitCategory::Percent => "%",
            UnitCategory::Frequency => "Hz",
            UnitCategory::Depth => "ft",
            UnitCategory::GasLiquidRatio => "scf/stb",
            UnitCategory::Temperature => "degF",
        }
    }
}

/// Industry application a curve belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Application {
    Esp,
    GasLift,
    Ipr,
    Survey,
}

impl Application {
    pub fn display_name(self) -> &'static str {
        match self {
            Application::Esp => "ESP",
            Application::GasLift => "Gas lift",
            Application::Ipr => "IPR",
            Application::Survey => "Survey",
        }
    }
}

/// Curve-type tag.
///
/// Each analysis result stores at most one curve per kind; the kind also
/// carries the metadata a chart needs to label the series. Keys are stable
/// across releases because exported reports reference them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CurveKind {
    PumpHead,
    PumpPower,
    PumpEfficiency,
    RecommendedRangeMin,
    RecommendedRangeMax,
    InflowPerformance,
    OutflowPerformance,
    GasLiftPerformance,
    FlowingBottomholePressure,
    PressureSurvey,
    TemperatureSurvey,
}

impl CurveKind {
    pub const ALL: [CurveKind; 11] = [
        CurveKind::PumpHead,
        CurveKind::PumpPower,
        CurveKind::PumpEfficiency,
        CurveKind::RecommendedRangeMin,
        CurveKind::RecommendedRangeMax,
        CurveKind::InflowPerformance,
        CurveKind::OutflowPerformance,
        CurveKind::GasLiftPerformance,
        CurveKind::FlowingBottomholePressure,
        CurveKind::PressureSurvey,
        CurveKind::TemperatureSurvey,
    ];

    /// Stable integer key.
    pub fn key(self) -> u16 {
        match self {
            CurveKind::PumpHead => 1,
            CurveKind::PumpPower => 2,
            CurveKind::PumpEfficiency => 3,
            CurveKind::RecommendedRangeMin => 4,
            CurveKind::RecommendedRangeMax => 5,
            CurveKind::InflowPerformance => 6,
            CurveKind::OutflowPerformance => 7,
            CurveKind::GasLiftPerformance => 8,
            CurveKind::FlowingBottomholePressure => 9,
            CurveKind::PressureSurvey => 10,
            CurveKind::TemperatureSurvey => 11,
        }
    }

    /// Inverse of [`CurveKind::key`].
    pub fn from_key(key: u16) -> Option<CurveKind> {
        CurveKind::ALL.into_iter().find(|kind| kind.key() == key)
    }

    pub fn display_name(self) -> &'static str {
        match self {
            CurveKind::PumpHead => "Pump head",
            CurveKind::PumpPower => "Pump power",
            CurveKind::PumpEfficiency => "Pump efficiency",
            CurveKind::RecommendedRangeMin => "Recommended range min",
            CurveKind::RecommendedRangeMax => "Recommended range max",
            CurveKind::InflowPerformance => "Inflow performance",
            CurveKind::OutflowPerformance => "Outflow performance",
            CurveKind::GasLiftPerformance => "Gas lift performance",
            CurveKind::FlowingBottomholePressure => "Flowing bottomhole pressure",
            CurveKind::PressureSurvey => "Pressure survey",
            CurveKind::TemperatureSurvey => "Temperature survey",
        }
    }

    /// Unit category of the independent (x) axis.
    pub fn x_unit(self) -> UnitCategory {
        match self {
            CurveKind::PumpHead
            | CurveKind::PumpPower
            | CurveKind::PumpEfficiency
            | CurveKind::RecommendedRangeMin
            | CurveKind::RecommendedRangeMax
            | CurveKind::InflowPerformance
            | CurveKind::OutflowPerformance
            | CurveKind::GasLiftPerformance
            | CurveKind::FlowingBottomholePressure => UnitCategory::FlowRate,
            CurveKind::PressureSurvey | CurveKind::TemperatureSurvey => UnitCategory::Depth,
        }
    }

    /// Unit category of the dependent (y) axis.
    pub fn y_unit(self) -> UnitCategory {
        match self {
            CurveKind::PumpHead
            | CurveKind::RecommendedRangeMin
            | CurveKind::RecommendedRangeMax => UnitCategory::Head,
            CurveKind::PumpPower => UnitCategory::Power,
            CurveKind::PumpEfficiency => UnitCategory::Percent,
            CurveKind::InflowPerformance
            | CurveKind::OutflowPerformance
            | CurveKind::FlowingBottomholePressure
            | CurveKind::PressureSurvey => UnitCategory::Pressure,
            CurveKind::GasLiftPerformance => UnitCategory::FlowRate,
            CurveKind::TemperatureSurvey => UnitCategory::Temperature,
        }
    }

    pub fn application(self) -> Application {
        match self {
            CurveKind::PumpHead
            | CurveKind::PumpPower
            | CurveKind::PumpEfficiency
            | CurveKind::RecommendedRangeMin
            | CurveKind::RecommendedRangeMax => Application::Esp,
            CurveKind::InflowPerformance | CurveKind::OutflowPerformance => Application::Ipr,
            CurveKind::GasLiftPerformance | CurveKind::FlowingBottomholePressure => {
                Application::GasLift
            }
            CurveKind::PressureSurvey | CurveKind::TemperatureSurvey => Application::Survey,
        }
    }
}

/// A single (x, y) value pair on a curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coord {
    pub x: f64,
    pub y: f64,
}

impl Coord {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for Coord {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

/// Stable identity of a stored curve point.
///
/// Reconciliation carries ids over for the slots it keeps and mints new ones
/// for the points it creates, so consumers holding a previous revision of a
/// curve can tell which points survived.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PointId(pub u64);

/// Ordered polynomial coefficient vector.
///
/// Slot `k` holds the coefficient of `x^k`: a constant term plus up to nine
/// ascending-order terms. Slots are independently present or unset; unset
/// slots evaluate as zero. The pump fitter populates degrees 0 through 5 and
/// leaves the rest unset.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Coefficients {
    terms: [Option<f64>; Coefficients::MAX_TERMS],
}

impl Coefficients {
    /// Constant term plus ninth-order term, inclusive.
    pub const MAX_TERMS: usize = 10;

    /// Build from an ascending-order slice, filling slots 0..len.
    pub fn from_slice(values: &[f64]) -> Result<Self, CurveError> {
        if values.len() > Self::MAX_TERMS {
            return Err(CurveError::TooManyCoefficients(values.len()));
        }
        let mut out = Self::default();
        for (degree, value) in values.iter().enumerate() {
            out.terms[degree] = Some(*value);
        }
        Ok(out)
    }

    pub fn get(&self, degree: usize) -> Option<f64> {
        self.terms.get(degree).copied().flatten()
    }

    pub fn set(&mut self, degree: usize, value: f64) -> Result<(), CurveError> {
        if degree >= Self::MAX_TERMS {
            return Err(CurveError::DegreeOutOfRange(degree));
        }
        self.terms[degree] = Some(value);
        Ok(())
    }

    /// Highest populated degree, or `None` when no slot is set.
    pub fn degree(&self) -> Option<usize> {
        self.terms.iter().rposition(Option::is_some)
    }

    pub fn is_empty(&self) -> bool {
        self.terms.iter().all(Option::is_none)
    }

    /// Evaluate `c0 + c1 x + c2 x^2 + ...` by Horner's method.
    pub fn evaluate(&self, x: f64) -> f64 {
        self.terms
            .iter()
            .rev()
            .fold(0.0, |acc, term| acc * x + term.unwrap_or(0.0))
    }
}

/// One raw pump performance sample, typically a vendor catalog row.
///
/// Only the flow rate is mandatory; any attribute column may be missing for
/// a given row. Rows are expected in ascending flow-rate order.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PumpSample {
    pub flow_rate: f64,
    pub head: Option<f64>,
    pub power: Option<f64>,
    pub efficiency: Option<f64>,
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn curve_kind_keys_are_unique_and_invertible() {
        let keys: HashSet<u16> = CurveKind::ALL.iter().map(|kind| kind.key()).collect();
        assert_eq!(keys.len(), CurveKind::ALL.len());

        for kind in CurveKind::ALL {
            assert_eq!(CurveKind::from_key(kind.key()), Some(kind));
        }
        assert_eq!(CurveKind::from_key(0), None);
        assert_eq!(CurveKind::from_key(999), None);
    }

    #[test]
    fn coefficients_reject_too_many_terms() {
        let err = Coefficients::from_slice(&[0.0; 11]).unwrap_err();
        assert_eq!(err, crate::error::CurveError::TooManyCoefficients(11));

        let ok = Coefficients::from_slice(&[0.0; 10]);
        assert!(ok.is_ok());
    }

    #[test]
    fn coefficients_set_rejects_out_of_range_degree() {
        let mut coeffs = Coefficients::default();
        assert_eq!(
            coeffs.set(10, 1.0),
            Err(crate::error::CurveError::DegreeOutOfRange(10))
        );
        assert!(coeffs.set(9, 1.0).is_ok());
        assert_eq!(coeffs.degree(), Some(9));
    }

    #[test]
    fn coefficients_evaluate_treats_gaps_as_zero() {
        let mut coeffs = Coefficients::default();
        coeffs.set(0, 1.0).unwrap();
        coeffs.set(2, 2.0).unwrap();

        // 1 + 2 * 3^2
        assert_eq!(coeffs.evaluate(3.0), 19.0);
        assert_eq!(coeffs.degree(), Some(2));
        assert_eq!(coeffs.get(1), None);
    }

    #[test]
    fn empty_coefficients_evaluate_to_zero() {
        let coeffs = Coefficients::default();
        assert!(coeffs.is_empty());
        assert_eq!(coeffs.degree(), None);
        assert_eq!(coeffs.evaluate(123.0), 0.0);
    }
}
