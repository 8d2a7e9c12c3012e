//! Core state types for the collision simulation.
//!
//! Defines the body/system structs:
//! - `Shape`  – closed set of collidable shapes (circle or convex polygon)
//! - `Body`   – kinematic state plus shape data and a bounding radius
//! - `System` – the list of bodies and the current simulation time `t`
//!
//! Bodies are created through the validating constructors [`Body::circle`] and
//! [`Body::polygon`]; invalid mass/radius/vertex counts are rejected here,
//! never deferred to resolution time.

use nalgebra::Vector2;

use crate::error::{SimError, SimResult};

pub type NVec2 = Vector2<f64>;

/// The closed set of shapes the engine can simulate.
///
/// The narrow phase only ever switches on this finite set, so new shapes are
/// a deliberate engine extension rather than an open subclassing point.
#[derive(Debug, Clone)]
pub enum Shape {
    Circle {
        radius: f64, // equal to the body's bounding radius
    },
    Polygon {
        /// Vertex offsets from the body position, at least 3, convex outline
        /// in consistent winding order.
        vertices: Vec<NVec2>,
        /// Angular velocity in radians per time unit. The integrator advances
        /// this state each tick, but the vertex offsets are not yet rotated by
        /// it; it exists to carry angular momentum into a future angular
        /// collision response.
        rotational_vel: f64,
        /// Angular acceleration in radians per time unit squared.
        rotational_accel: f64,
    },
}

#[derive(Debug, Clone)]
pub struct Body {
    pub x: NVec2, // position
    pub v: NVec2, // velocity
    pub a: NVec2, // acceleration
    pub m: f64,   // mass, > 0
    /// Half the side length of the smallest enclosing axis-aligned square.
    /// Used only for broad-phase bucketing, never for narrow-phase exactness.
    pub bounding_radius: f64,
    /// Integration step for this body. Callers supply a consistent shared
    /// step (e.g. the inverse of a target tick rate).
    pub dt: f64,
    pub shape: Shape,
}

#[derive(Debug, Clone)]
pub struct System {
    pub bodies: Vec<Body>, // collection of bodies, mutated in place per tick
    pub t: f64,            // time
}

impl Body {
    /// Build a circle body. The bounding radius equals the circle radius.
    ///
    /// Rejects non-positive mass or radius with [`SimError::Configuration`].
    pub fn circle(x: NVec2, v: NVec2, a: NVec2, m: f64, radius: f64, dt: f64) -> SimResult<Self> {
        if !(m > 0.0) {
            return Err(SimError::configuration(format!("mass must be > 0, got {m}")));
        }
        if !(radius > 0.0) {
            return Err(SimError::configuration(format!(
                "circle radius must be > 0, got {radius}"
            )));
        }

        Ok(Self {
            x,
            v,
            a,
            m,
            bounding_radius: radius,
            dt,
            shape: Shape::Circle { radius },
        })
    }

    /// Build a convex polygon body from vertex offsets around the position.
    ///
    /// The bounding radius is `max(‖vertex‖)`, computed once here.
    /// Rejects non-positive mass and fewer than 3 vertices.
    pub fn polygon(
        x: NVec2,
        v: NVec2,
        a: NVec2,
        m: f64,
        vertices: Vec<NVec2>,
        rotational_vel: f64,
        rotational_accel: f64,
        dt: f64,
    ) -> SimResult<Self> {
        if !(m > 0.0) {
            return Err(SimError::configuration(format!("mass must be > 0, got {m}")));
        }
        if vertices.len() < 3 {
            return Err(SimError::configuration(format!(
                "polygon needs at least 3 vertices, got {}",
                vertices.len()
            )));
        }

        let bounding_radius = vertices.iter().map(|v| v.norm()).fold(0.0_f64, f64::max);

        Ok(Self {
            x,
            v,
            a,
            m,
            bounding_radius,
            dt,
            shape: Shape::Polygon {
                vertices,
                rotational_vel,
                rotational_accel,
            },
        })
    }

    /// Radius when this body is a circle.
    pub fn radius(&self) -> Option<f64> {
        match self.shape {
            Shape::Circle { radius } => Some(radius),
            Shape::Polygon { .. } => None,
        }
    }

    pub fn is_circle(&self) -> bool {
        matches!(self.shape, Shape::Circle { .. })
    }
}
