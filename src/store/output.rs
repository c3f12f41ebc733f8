//! The per-analysis-result curve repository.
//!
//! Each analysis run owns one [`AnalysisOutput`]: at most one curve per
//! [`CurveKind`] plus at most one curve set. It is created empty when the run
//! starts, populated as calculation stages complete, and dropped with the
//! run. The single pipeline that produced the result is the only mutator, so
//! there is no interior locking and no async.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::curve::Curve;
use crate::domain::{Coord, CurveKind};
use crate::sets::{CurveSet, CurveSetKind, CurveSetSource};

/// Curves and curve sets accumulated by one analysis run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisOutput {
    asof_date: NaiveDate,
    curves: Vec<Curve>,
    curve_set: Option<CurveSet>,
}

impl AnalysisOutput {
    /// Create an empty output for a run dated `asof_date`.
    pub fn new(asof_date: NaiveDate) -> Self {
        Self {
            asof_date,
            curves: Vec::new(),
            curve_set: None,
        }
    }

    pub fn asof_date(&self) -> NaiveDate {
        self.asof_date
    }

    /// Store `curve`, reconciling into an existing curve of the same kind.
    ///
    /// `None` is accepted and ignored so calculation stages can forward their
    /// optional products without branching. When a curve of the same kind is
    /// already stored, its point identities survive the overwrite; the
    /// incoming curve's own identities are discarded.
    pub fn set_curve(&mut self, curve: Option<Curve>) {
        let Some(curve) = curve else { return };
        match self.position(curve.kind()) {
            Some(idx) => {
                self.curves[idx].set_coordinates(&curve.coordinates());
                debug!(
                    kind = curve.kind().display_name(),
                    points = self.curves[idx].len(),
                    "curve reconciled"
                );
            }
            None => {
                debug!(
                    kind = curve.kind().display_name(),
                    points = curve.len(),
                    "curve stored"
                );
                self.curves.push(curve);
            }
        }
    }

    /// Same contract as [`AnalysisOutput::set_curve`], from a raw coordinate
    /// list. The curve wrapper is only constructed when the kind is not
    /// stored yet.
    pub fn set_coordinates(&mut self, kind: CurveKind, coords: &[Coord]) {
        match self.position(kind) {
            Some(idx) => self.curves[idx].set_coordinates(coords),
            None => self.curves.push(Curve::from_coordinates(kind, coords)),
        }
    }

    /// Remove and return the curve stored for `kind`.
    ///
    /// Removing an absent kind is a no-op, never an error.
    pub fn remove_curve(&mut self, kind: CurveKind) -> Option<Curve> {
        let idx = self.position(kind)?;
        debug!(kind = kind.display_name(), "curve removed");
        Some(self.curves.remove(idx))
    }

    pub fn get_curve(&self, kind: CurveKind) -> Option<&Curve> {
        self.curves.iter().find(|curve| curve.kind() == kind)
    }

    /// All stored curves, in insertion order.
    pub fn curves(&self) -> &[Curve] {
        &self.curves
    }

    /// Install `set`, replacing any previous curve set unconditionally.
    pub fn replace_curve_set(&mut self, set: CurveSet) {
        debug!(
            source = set.source().display_name(),
            kind = set.kind().display_name(),
            members = set.members().len(),
            "curve set replaced"
        );
        self.curve_set = Some(set);
    }

    /// Build a fresh curve set from sweeps and install it.
    ///
    /// See [`CurveSet::build`] for member order and primary selection.
    pub fn build_curve_set(
        &mut self,
        source: CurveSetSource,
        kind: CurveSetKind,
        sweeps: &[(f64, Vec<Coord>)],
        primary: Option<f64>,
    ) {
        self.replace_curve_set(CurveSet::build(source, kind, sweeps, primary));
    }

    pub fn curve_set(&self) -> Option<&CurveSet> {
        self.curve_set.as_ref()
    }

    pub fn clear_curve_set(&mut self) -> Option<CurveSet> {
        self.curve_set.take()
    }

    // Well-known derived views. Each is a fixed-kind lookup projected to its
    // coordinate list; absence means the chart series is omitted.

    pub fn pump_curve(&self) -> Option<Vec<Coord>> {
        self.coordinates_for(CurveKind::PumpHead)
    }

    pub fn power_curve(&self) -> Option<Vec<Coord>> {
        self.coordinates_for(CurveKind::PumpPower)
    }

    pub fn efficiency_curve(&self) -> Option<Vec<Coord>> {
        self.coordinates_for(CurveKind::PumpEfficiency)
    }

    pub fn inflow_curve(&self) -> Option<Vec<Coord>> {
        self.coordinates_for(CurveKind::InflowPerformance)
    }

    /// Recommended operating envelope as a (min, max) pair of curves; absent
    /// unless both bounds are stored.
    pub fn recommended_range(&self) -> Option<(Vec<Coord>, Vec<Coord>)> {
        Some((
            self.coordinates_for(CurveKind::RecommendedRangeMin)?,
            self.coordinates_for(CurveKind::RecommendedRangeMax)?,
        ))
    }

    fn coordinates_for(&self, kind: CurveKind) -> Option<Vec<Coord>> {
        self.get_curve(kind).map(Curve::coordinates)
    }

    fn position(&self, kind: CurveKind) -> Option<usize> {
        self.curves.iter().position(|curve| curve.kind() == kind)
    }
}
