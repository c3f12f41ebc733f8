//! Curve-set construction from sweep results.

use serde::{Deserialize, Serialize};

use crate::curve::Curve;
use crate::domain::{Coord, CurveKind};

/// Which analysis family produced a curve set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CurveSetSource {
    Esp,
    GasLift,
}

impl CurveSetSource {
    pub fn display_name(self) -> &'static str {
        match self {
            CurveSetSource::Esp => "ESP",
            CurveSetSource::GasLift => "Gas lift",
        }
    }
}

/// What a curve set's sweep parameter means.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CurveSetKind {
    /// Sensitivity sweep over operating frequency.
    Tornado,
    /// Flowing-bottomhole-pressure family over gas-liquid ratio.
    Fbhp,
}

impl CurveSetKind {
    pub fn display_name(self) -> &'static str {
        match self {
            CurveSetKind::Tornado => "Tornado",
            CurveSetKind::Fbhp => "FBHP",
        }
    }

    /// Curve type stamped on every member of a set of this kind.
    pub fn member_curve(self) -> CurveKind {
        match self {
            CurveSetKind::Tornado => CurveKind::PumpHead,
            CurveSetKind::Fbhp => CurveKind::FlowingBottomholePressure,
        }
    }
}

/// Sweep annotation attached to one member of a curve set.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MemberAnnotation {
    /// The operating frequency this member was computed at.
    Tornado { frequency: f64 },
    /// The gas-liquid ratio this member was computed at, and whether it is
    /// the analysis's chosen representative ratio.
    GasLiquidRatio { ratio: f64, primary: bool },
}

/// One swept curve plus its annotation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurveSetMember {
    pub curve: Curve,
    pub annotation: MemberAnnotation,
}

impl CurveSetMember {
    pub fn is_primary(&self) -> bool {
        matches!(self.annotation, MemberAnnotation::GasLiquidRatio { primary: true, .. })
    }
}

/// A grouped family of swept curves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurveSet {
    source: CurveSetSource,
    kind: CurveSetKind,
    members: Vec<CurveSetMember>,
}

impl CurveSet {
    /// Build a fresh set from `(parameter, coordinates)` sweeps.
    ///
    /// Member order follows `sweeps` exactly; nothing sorts by parameter
    /// value. An empty sweep list still yields a set with its source and
    /// kind recorded, just with zero members. Each member's coordinate list
    /// is a straight copy of the input pairs.
    ///
    /// For FBHP sets a member is primary when its sweep ratio equals
    /// `primary` exactly (bit-for-bit f64 comparison: the caller passes back
    /// one of the keys it swept, not a recomputed value).
    pub fn build(
        source: CurveSetSource,
        kind: CurveSetKind,
        sweeps: &[(f64, Vec<Coord>)],
        primary: Option<f64>,
    ) -> Self {
        let members = sweeps
            .iter()
            .map(|(parameter, coords)| {
                let annotation = match kind {
                    CurveSetKind::Tornado => MemberAnnotation::Tornado {
                        frequency: *parameter,
                    },
                    CurveSetKind::Fbhp => MemberAnnotation::GasLiquidRatio {
                        ratio: *parameter,
                        primary: Some(*parameter) == primary,
                    },
                };
                CurveSetMember {
                    curve: Curve::from_coordinates(kind.member_curve(), coords),
                    annotation,
                }
            })
            .collect();

        Self {
            source,
            kind,
            members,
        }
    }

    pub fn source(&self) -> CurveSetSource {
        self.source
    }

    pub fn kind(&self) -> CurveSetKind {
        self.kind
    }

    pub fn members(&self) -> &[CurveSetMember] {
        &self.members
    }

    /// The representative member of a gas-liquid-ratio family, if one was
    /// marked at build time.
    pub fn primary_member(&self) -> Option<&CurveSetMember> {
        self.members.iter().find(|member| member.is_primary())
    }
}
