//! Separating-axis narrow phase for arbitrary convex shape pairs.
//!
//! The separating-axis theorem: two convex shapes are disjoint iff there is
//! an axis along which their 1-D projections do not overlap. The candidate
//! axes are each polygon's edge normals, plus the center-to-center axis when
//! a circle is involved. If every candidate axis shows overlap the shapes
//! collide, and the axis of minimum overlap gives the minimum translation
//! vector (MTV): the smallest displacement that separates them.
//!
//! [`resolve_pair`] applies the MTV split and the same 1-D elastic exchange
//! along the contact normal that the circle resolver uses, generalized to
//! any shape pair. The response is linear only; angular response is not
//! implemented.

use super::states::{Body, NVec2, Shape, System};
use super::vector::{normal, normalize_safe, world_angle};
use crate::error::{SimError, SimResult};

/// A shape's 1-D projection interval onto an axis.
#[derive(Debug, Clone, Copy)]
pub struct Projection {
    /// World angle of the (normalized) projection axis, in `[0, 2π)`.
    pub axis_angle: f64,
    pub min: f64,
    pub max: f64,
}

impl Projection {
    /// Overlap length with another interval on the same axis. Positive means
    /// the intervals intersect; zero or negative means separation.
    pub fn overlap(&self, other: &Projection) -> f64 {
        self.max.min(other.max) - self.min.max(other.min)
    }
}

/// The minimum translation vector for an overlapping pair.
#[derive(Debug, Clone, Copy)]
pub struct Mtv {
    /// Unit axis pointing from the first body toward the second.
    pub axis: NVec2,
    /// Penetration depth along `axis`.
    pub overlap: f64,
}

/// Project a body onto `axis` (normalized internally).
///
/// - Polygon: every world-space vertex is projected via dot product, tracking
///   the running min/max with strict comparisons.
/// - Circle: the interval is `[center·axis − r, center·axis + r]`.
///
/// A zero-magnitude axis is [`SimError::DegenerateGeometry`].
pub fn project_onto_axis(body: &Body, axis: NVec2) -> SimResult<Projection> {
    let unit = normalize_safe(axis);
    if unit == NVec2::zeros() {
        return Err(SimError::degenerate(
            "cannot project onto a zero-magnitude axis",
        ));
    }
    let axis_angle = world_angle(unit)?;

    match &body.shape {
        Shape::Circle { radius } => {
            let center = body.x.dot(&unit);
            Ok(Projection {
                axis_angle,
                min: center - radius,
                max: center + radius,
            })
        }
        Shape::Polygon { vertices, .. } => {
            let mut min = f64::INFINITY;
            let mut max = f64::NEG_INFINITY;
            for vertex in vertices {
                // Vertices are offsets from the body position.
                let p = (body.x + vertex).dot(&unit);
                if p < min {
                    min = p;
                }
                if p > max {
                    max = p;
                }
            }
            Ok(Projection {
                axis_angle,
                min,
                max,
            })
        }
    }
}

/// Candidate separating axes for a pair: each polygon's edge normals, plus
/// the center-to-center axis when either body is a circle. Axes are not
/// normalized here; projection normalizes.
pub fn candidate_axes(a: &Body, b: &Body) -> Vec<NVec2> {
    let mut axes = Vec::new();
    push_edge_normals(a, &mut axes);
    push_edge_normals(b, &mut axes);
    if a.is_circle() || b.is_circle() {
        axes.push(b.x - a.x);
    }
    axes
}

fn push_edge_normals(body: &Body, axes: &mut Vec<NVec2>) {
    if let Shape::Polygon { vertices, .. } = &body.shape {
        for (i, v0) in vertices.iter().enumerate() {
            let v1 = &vertices[(i + 1) % vertices.len()];
            axes.push(normal(v1 - v0));
        }
    }
}

/// Compute the MTV for a pair, or `None` when any candidate axis separates
/// them (touching intervals count as separated).
///
/// The MTV direction is the axis of strictly smallest positive overlap,
/// oriented from `a` toward `b`; on equal overlaps the first candidate axis
/// in order (a's edge normals, b's, then the center axis) wins.
pub fn min_translation_vector(a: &Body, b: &Body) -> SimResult<Option<Mtv>> {
    let axes = candidate_axes(a, b);
    if axes.is_empty() {
        return Err(SimError::degenerate("no candidate axes for pair"));
    }

    let mut best: Option<Mtv> = None;

    for axis in axes {
        let unit = normalize_safe(axis);
        if unit == NVec2::zeros() {
            // Coincident centers or a degenerate edge: no usable direction.
            return Err(SimError::degenerate(
                "zero-magnitude candidate axis, contact normal undefined",
            ));
        }

        let pa = project_onto_axis(a, unit)?;
        let pb = project_onto_axis(b, unit)?;
        let overlap = pa.overlap(&pb);

        // A single separated axis proves the shapes are disjoint.
        if overlap <= 0.0 {
            return Ok(None);
        }

        if best.map_or(true, |m| overlap < m.overlap) {
            best = Some(Mtv {
                axis: unit,
                overlap,
            });
        }
    }

    // Orient the axis from a toward b so corrections push the pair apart.
    Ok(best.map(|mut mtv| {
        if mtv.axis.dot(&(b.x - a.x)) < 0.0 {
            mtv.axis = -mtv.axis;
        }
        mtv
    }))
}

/// Resolve one shape pair via SAT: returns `false` when the pair is
/// separated, otherwise splits the MTV evenly between the two bodies and
/// applies the 1-D elastic exchange along the MTV axis.
///
/// Unlike the batched circle resolver, this writes velocities immediately;
/// it is the per-pair building block for mixed-shape resolution.
pub fn resolve_pair(sys: &mut System, ia: usize, ib: usize) -> SimResult<bool> {
    let (mtv, new_va, new_vb) = {
        let a = &sys.bodies[ia];
        let b = &sys.bodies[ib];

        let Some(mtv) = min_translation_vector(a, b)? else {
            return Ok(false);
        };

        let n = mtv.axis;
        let va_n = a.v.dot(&n);
        let vb_n = b.v.dot(&n);

        // Same elastic exchange as the circle resolver, along the MTV axis.
        let (ma, mb) = (a.m, b.m);
        let va_n_after = (va_n * (ma - mb) + 2.0 * mb * vb_n) / (ma + mb);
        let vb_n_after = (vb_n * (mb - ma) + 2.0 * ma * va_n) / (ma + mb);

        (
            mtv,
            a.v + n * (va_n_after - va_n),
            b.v + n * (vb_n_after - vb_n),
        )
    };

    let push = (mtv.overlap / 2.0) * mtv.axis;
    sys.bodies[ia].x -= push;
    sys.bodies[ia].v = new_va;
    sys.bodies[ib].x += push;
    sys.bodies[ib].v = new_vb;

    Ok(true)
}
