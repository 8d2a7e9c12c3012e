//! Narrow-phase collision resolution for circle pairs.
//!
//! Walks the broad-phase cell map, tests every unordered pair of circles that
//! shares a cell, and resolves true overlaps into post-collision velocities
//! (fully elastic, along the collision normal) plus an even positional
//! separation.
//!
//! Velocity results are batched: they are accumulated into a per-body map
//! during the pass and written back only after every pair has been evaluated.
//! A body's second collision in the same tick therefore uses its pre-tick
//! velocity, never a velocity already mutated by an earlier pair. Position
//! corrections, by contrast, are applied immediately and are order-sensitive
//! by design.

use std::collections::{BTreeMap, HashMap};

use tracing::warn;

use super::grid::Cell;
use super::states::{NVec2, System};
use crate::error::{SimError, SimResult};

/// Resolve all candidate collisions in the cell map, mutating the velocities
/// and positions of the bodies it references.
///
/// Every body reachable from the map must be a circle; a non-circle body is a
/// fatal [`SimError::ShapeMismatch`] for the whole call, not a skip. A
/// zero-distance pair (undefined normal) aborts only that pair: it is logged
/// and skipped, and the batched velocities of all other pairs stay intact.
///
/// The map keeps its cells ordered, so the pass visits cells (and therefore
/// writes last-writer-wins velocity results) in the same order on every run.
pub fn resolve_collisions(sys: &mut System, map: &BTreeMap<Cell, Vec<usize>>) -> SimResult<()> {
    // Precondition check up front so no pair work happens on bad input.
    for indices in map.values() {
        for &i in indices {
            if !sys.bodies[i].is_circle() {
                return Err(SimError::ShapeMismatch { index: i });
            }
        }
    }

    // Batched velocity outcome, keyed by body index. Applied after the full
    // pass; until then every pair reads the untouched pre-pass velocities.
    let mut response: HashMap<usize, NVec2> = HashMap::new();

    for indices in map.values() {
        // O(k²) scan per cell; grid sizing keeps k small.
        for (k, &ia) in indices.iter().enumerate() {
            for &ib in &indices[k + 1..] {
                match resolve_circle_pair(sys, ia, ib) {
                    Ok((va, vb)) => {
                        response.insert(ia, va);
                        response.insert(ib, vb);
                    }
                    // Degenerate pair: skip it, keep the rest of the pass.
                    Err(SimError::DegenerateGeometry(msg)) => {
                        warn!(body_a = ia, body_b = ib, "skipping pair: {msg}");
                    }
                    Err(e) => return Err(e),
                }
            }
        }
    }

    for (i, v) in response {
        sys.bodies[i].v = v;
    }

    Ok(())
}

/// Evaluate one circle pair.
///
/// Returns the pair's post-pass velocities: unchanged when the circles are
/// not in contact, otherwise the 1-D elastic exchange along the collision
/// normal. On contact, positions are corrected immediately (half the overlap
/// each, regardless of mass).
fn resolve_circle_pair(sys: &mut System, ia: usize, ib: usize) -> SimResult<(NVec2, NVec2)> {
    let a = &sys.bodies[ia];
    let b = &sys.bodies[ib];

    // Circles guaranteed by the caller's precondition check.
    let ra = a.radius().ok_or(SimError::ShapeMismatch { index: ia })?;
    let rb = b.radius().ok_or(SimError::ShapeMismatch { index: ib })?;

    let delta = b.x - a.x;
    let distance = delta.norm();

    // No contact: both bodies keep their current velocity.
    if distance > ra + rb {
        return Ok((a.v, b.v));
    }

    // Exact coincidence has no usable normal direction. Surfaced as an error
    // rather than inventing an axis; see DESIGN.md.
    if distance == 0.0 {
        return Err(SimError::degenerate(
            "coincident circle centers, collision normal undefined",
        ));
    }

    let normal = delta / distance;

    // Project each velocity onto the collision normal. Only this component
    // takes part in the exchange; the tangential component is unchanged.
    let va_n = a.v.dot(&normal);
    let vb_n = b.v.dot(&normal);

    // 1-D fully elastic collision along the normal:
    //   v_a' = (v_a (m_a - m_b) + 2 m_b v_b) / (m_a + m_b)
    //   v_b' = (v_b (m_b - m_a) + 2 m_a v_a) / (m_a + m_b)
    let (ma, mb) = (a.m, b.m);
    let va_n_after = (va_n * (ma - mb) + 2.0 * mb * vb_n) / (ma + mb);
    let vb_n_after = (vb_n * (mb - ma) + 2.0 * ma * va_n) / (ma + mb);

    // New velocity = old velocity + normal * (v' - v).
    let new_va = a.v + normal * (va_n_after - va_n);
    let new_vb = b.v + normal * (vb_n_after - vb_n);

    // Positional correction: split the overlap evenly regardless of mass
    // (known simplification) and push the circles apart immediately.
    let overlap = (ra + rb - distance) / 2.0;
    let push = overlap * normal;
    sys.bodies[ia].x -= push;
    sys.bodies[ib].x += push;

    Ok((new_va, new_vb))
}
