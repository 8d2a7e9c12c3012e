//! 2D vector helpers on top of nalgebra's `Vector2<f64>`.
//!
//! Arithmetic (add, sub, scalar and component-wise multiply, divide, dot,
//! magnitude) comes straight from nalgebra on [`NVec2`]. This module adds the
//! geometry operations the engine needs beyond that:
//! - rotation by an angle (with drift-suppressing rounding)
//! - the 90° normal
//! - zero-safe normalization
//! - angle between two vectors
//! - "world angle" against the +x axis in `[0, 2π)`

use std::f64::consts::TAU;

use crate::error::{SimError, SimResult};
use crate::simulation::states::NVec2;

/// Round to 15 decimal places, suppressing floating accumulation drift from
/// repeated rotations (sin/cos of multiples of π in particular).
fn round15(x: f64) -> f64 {
    (x * 1e15).round() / 1e15
}

/// Rotate `v` counter-clockwise by `theta` radians via the standard 2×2
/// rotation matrix. Components are rounded to 15 decimals.
pub fn rotate(v: NVec2, theta: f64) -> NVec2 {
    let (sin, cos) = theta.sin_cos();
    NVec2::new(
        round15(cos * v.x - sin * v.y),
        round15(sin * v.x + cos * v.y),
    )
}

/// [`rotate`], taking the angle in degrees.
pub fn rotate_deg(v: NVec2, theta_deg: f64) -> NVec2 {
    rotate(v, theta_deg.to_radians())
}

/// The 90° counter-clockwise normal: `(x, y) → (-y, x)`.
pub fn normal(v: NVec2) -> NVec2 {
    NVec2::new(-v.y, v.x)
}

/// Normalize `v`, mapping the zero vector to the zero vector instead of
/// producing NaN. Defined behavior, not an error.
pub fn normalize_safe(v: NVec2) -> NVec2 {
    let mag = v.norm();
    if mag > 0.0 {
        v / mag
    } else {
        NVec2::zeros()
    }
}

/// Angle between `a` and `b` in radians, `acos(a·b / (‖a‖‖b‖))`.
///
/// Either vector having zero magnitude is a [`SimError::DegenerateGeometry`]:
/// the quotient would be NaN and the caller must guard, so the failure is
/// surfaced instead of propagated silently. The cosine is clamped to
/// `[-1, 1]` against float drift on near-parallel inputs.
pub fn angle_between(a: NVec2, b: NVec2) -> SimResult<f64> {
    let mags = a.norm() * b.norm();
    if mags == 0.0 {
        return Err(SimError::degenerate(
            "angle between vectors is undefined for a zero-magnitude vector",
        ));
    }
    Ok((a.dot(&b) / mags).clamp(-1.0, 1.0).acos())
}

/// Angle of `v` relative to the positive x-axis, normalized into `[0, 2π)`.
///
/// Angles are reflected by the sign of the y-component:
/// `y < 0 → angle`, otherwise `2π − angle`. This matches a screen-style
/// y-down axis convention and is intentionally not a general `atan2`.
pub fn world_angle(v: NVec2) -> SimResult<f64> {
    let angle = angle_between(v, NVec2::new(1.0, 0.0))?;
    let world = if v.y < 0.0 { angle } else { TAU - angle };
    Ok(world.rem_euclid(TAU))
}
