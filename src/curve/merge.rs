//! Coordinate-list reconciliation.
//!
//! When a calculation stage re-supplies a curve that is already stored, the
//! stored sequence is reshaped to mirror the new one:
//!
//! - a prefix of slots is carried over, keeping identities but taking the new values
//! - a longer stored sequence loses its tail
//! - a longer new sequence is appended as freshly identified points
//!
//! The carry-over loop stops one short of the new sequence's end
//! (`incoming.len() > i + 1`), so at equal lengths the final slot is
//! re-created rather than carried over. Consumers that diff successive curve
//! revisions rely on this exact boundary; changing it to `> i` is a breaking
//! behavior change even though the resulting values are identical.

use crate::curve::curve::CurvePoint;
use crate::domain::{Coord, PointId};

/// Rebuild `existing` to mirror `incoming`.
///
/// Total over both sequences, with no failure mode: the result always has
/// exactly `incoming.len()` points. `fresh_id` is called once per newly
/// created point, in output order.
pub fn reconcile(
    existing: &[CurvePoint],
    incoming: &[Coord],
    mut fresh_id: impl FnMut() -> PointId,
) -> Vec<CurvePoint> {
    let mut out = Vec::with_capacity(incoming.len());

    let mut i = 0;
    while incoming.len() > i + 1 && i < existing.len() {
        out.push(CurvePoint {
            id: existing[i].id,
            x: incoming[i].x,
            y: incoming[i].y,
        });
        i += 1;
    }

    // Whatever remains of the stored tail is dropped; whatever remains of the
    // incoming sequence is appended under new identities.
    for coord in &incoming[i..] {
        out.push(CurvePoint {
            id: fresh_id(),
            x: coord.x,
            y: coord.y,
        });
    }

    out
}
