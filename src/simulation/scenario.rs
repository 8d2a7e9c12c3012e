//! Build fully-initialized simulation scenarios from configuration.
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces a runtime bundle
//! containing:
//! - engine settings (`Engine`: grid, walls)
//! - numerical parameters (`Parameters`)
//! - system state (`System` with bodies at t = 0)
//!
//! All construction-time validation lives on this path: non-positive grid
//! size, step size, run length, mass or radius and under-specified polygons
//! are rejected here with [`SimError::Configuration`], never deferred to
//! resolution time.

use crate::configuration::config::{BodyConfig, ScenarioConfig, ShapeConfig};
use crate::error::{SimError, SimResult};
use crate::simulation::engine::Engine;
use crate::simulation::grid::SpatialGrid;
use crate::simulation::integrator::Walls;
use crate::simulation::params::Parameters;
use crate::simulation::states::{Body, NVec2, System};

/// A fully-initialized runtime scenario, ready for the driver loop.
pub struct Scenario {
    pub engine: Engine,
    pub parameters: Parameters,
    pub system: System,
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> SimResult<Self> {
        // The driver derives its step count from t_end / h0, so both must be
        // strictly positive (this also rejects NaN).
        if !(cfg.parameters.h0 > 0.0) {
            return Err(SimError::configuration(format!(
                "step size h0 must be > 0, got {}",
                cfg.parameters.h0
            )));
        }
        if !(cfg.parameters.t_end > 0.0) {
            return Err(SimError::configuration(format!(
                "run length t_end must be > 0, got {}",
                cfg.parameters.t_end
            )));
        }

        let parameters = Parameters {
            t_end: cfg.parameters.t_end,
            h0: cfg.parameters.h0,
        };

        // Bodies: map `BodyConfig` -> runtime `Body` through the validating
        // constructors. Every body shares the configured step.
        let bodies = cfg
            .bodies
            .iter()
            .map(|bc| build_body(bc, parameters.h0))
            .collect::<SimResult<Vec<Body>>>()?;

        // Initial system state: bodies at t = 0.
        let system = System { bodies, t: 0.0 };

        let engine = Engine {
            grid: SpatialGrid::new(cfg.engine.grid_size)?,
            wall_collision: cfg.engine.wall_collision,
            walls: Walls {
                x_max: cfg.engine.x_max,
                y_max: cfg.engine.y_max,
            },
        };

        Ok(Self {
            engine,
            parameters,
            system,
        })
    }
}

fn build_body(bc: &BodyConfig, dt: f64) -> SimResult<Body> {
    let x = NVec2::new(bc.x[0], bc.x[1]);
    let v = NVec2::new(bc.v[0], bc.v[1]);
    let a = NVec2::new(bc.a[0], bc.a[1]);

    match &bc.shape {
        ShapeConfig::Circle { radius } => Body::circle(x, v, a, bc.m, *radius, dt),
        ShapeConfig::Polygon {
            vertices,
            rotational_vel,
            rotational_accel,
        } => Body::polygon(
            x,
            v,
            a,
            bc.m,
            vertices.iter().map(|p| NVec2::new(p[0], p[1])).collect(),
            *rotational_vel,
            *rotational_accel,
            dt,
        ),
    }
}
