//! Fixed-step time integration for the body system.
//!
//! Provides the single-step semi-implicit (Euler-Cromer) update used by the
//! engine, an optional reflective wall check for circles, and a whole-system
//! pass. Each body carries its own `dt`; a tick advances every body by its
//! configured step.

use super::states::{Body, Shape, System};

/// Rectangular simulation domain `[0, x_max] × [0, y_max]` used for the
/// optional wall reflection.
#[derive(Debug, Clone, Copy)]
pub struct Walls {
    pub x_max: f64,
    pub y_max: f64,
}

/// Advance one body by one step using semi-implicit Euler:
///
/// ```text
/// x_n+1 = x_n + dt * v_n        (position uses the pre-step velocity)
/// v_n+1 = v_n + dt * a_n
/// ```
///
/// Mutates position and velocity in place; `dt` is the body's configured
/// step, not wall-clock time.
pub fn euler_cromer(body: &mut Body) {
    let dt = body.dt;
    body.x += dt * body.v;
    body.v += dt * body.a;

    // Polygons also advance their angular state with the same scheme.
    if let Shape::Polygon {
        ref mut rotational_vel,
        rotational_accel,
        ..
    } = body.shape
    {
        *rotational_vel += dt * rotational_accel;
    }
}

/// Reflect a circle off the domain walls: if the circle's extent leaves
/// `[0, x_max]` or `[0, y_max]`, the corresponding velocity component is
/// inverted. A simple reflective wall, not an energy-exact bounce.
///
/// Polygons are left untouched; wall handling exists for circles only.
pub fn reflect_walls(body: &mut Body, walls: &Walls) {
    let Shape::Circle { radius } = body.shape else {
        return;
    };

    if body.x.x - radius < 0.0 || body.x.x + radius > walls.x_max {
        body.v.x *= -1.0;
    }
    if body.x.y - radius < 0.0 || body.x.y + radius > walls.y_max {
        body.v.y *= -1.0;
    }
}

/// Advance every body in the system by one step, optionally reflecting
/// circles off the domain walls after their position update.
///
/// Does not touch `sys.t`; the engine owns time advancement.
pub fn integrate_system(sys: &mut System, walls: Option<&Walls>) {
    for body in sys.bodies.iter_mut() {
        euler_cromer(body);
        if let Some(w) = walls {
            reflect_walls(body, w);
        }
    }
}
