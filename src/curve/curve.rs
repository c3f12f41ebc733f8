//! Stored curves: identified points under a curve-type tag.

use serde::{Deserialize, Serialize};

use crate::curve::merge;
use crate::domain::{Coord, CurveKind, PointId};

/// A coordinate point with a stable identity.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurvePoint {
    pub id: PointId,
    pub x: f64,
    pub y: f64,
}

impl CurvePoint {
    pub fn coord(&self) -> Coord {
        Coord::new(self.x, self.y)
    }
}

/// An ordered, sampled engineering curve.
///
/// Point order is meaningful: the sequence represents a sampled function,
/// ascending in the independent variable by convention. Nothing here sorts
/// or deduplicates; the supplying calculation stage owns the ordering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Curve {
    kind: CurveKind,
    points: Vec<CurvePoint>,
    next_id: u64,
}

impl Curve {
    pub fn new(kind: CurveKind) -> Self {
        Self {
            kind,
            points: Vec::new(),
            next_id: 0,
        }
    }

    pub fn from_coordinates(kind: CurveKind, coords: &[Coord]) -> Self {
        let mut curve = Self::new(kind);
        curve.set_coordinates(coords);
        curve
    }

    pub fn kind(&self) -> CurveKind {
        self.kind
    }

    pub fn points(&self) -> &[CurvePoint] {
        &self.points
    }

    /// Coordinate projection of the stored points, in order.
    pub fn coordinates(&self) -> Vec<Coord> {
        self.points.iter().map(CurvePoint::coord).collect()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Reconcile the stored point sequence against `coords`.
    ///
    /// Slots the reconciliation carries over keep their [`PointId`]; appended
    /// points receive fresh ids. Ids of dropped points are retired, never
    /// reissued. See [`merge::reconcile`] for the exact carry-over rule.
    pub fn set_coordinates(&mut self, coords: &[Coord]) {
        let mut next = self.next_id;
        self.points = merge::reconcile(&self.points, coords, || {
            let id = PointId(next);
            next += 1;
            id
        });
        self.next_id = next;
    }
}
