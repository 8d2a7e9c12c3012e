//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! simulation scenario. A scenario consists of:
//!
//! - [`EngineConfig`]     – broad-phase grid size and wall-reflection domain
//! - [`ParametersConfig`] – run length and integration step
//! - [`BodyConfig`]       – initial state and shape for each body
//! - [`ScenarioConfig`]   – top-level wrapper used to load a scenario from YAML
//!
//! # YAML format
//! An example scenario YAML matching these types:
//!
//! ```yaml
//! engine:
//!   grid_size: 50.0         # side length of one broad-phase cell
//!   wall_collision: true    # reflect circles off the domain walls
//!   x_max: 1500.0           # domain is [0, x_max] x [0, y_max]
//!   y_max: 1000.0
//!
//! parameters:
//!   t_end: 10.0             # total simulation time
//!   h0: 0.00833             # fixed step size (e.g. 1 / tick rate)
//!
//! bodies:
//!   - x: [ 100.0, 360.0 ]
//!     v: [ 10.0, 0.0 ]
//!     m: 1.0
//!     shape: !circle
//!       radius: 10.0
//!   - x: [ 800.0, 360.0 ]
//!     v: [ 0.0, 0.0 ]
//!     m: 1.0
//!     shape: !polygon
//!       vertices: [ [ -10.0, -10.0 ], [ 10.0, -10.0 ], [ 0.0, 15.0 ] ]
//!       rotational_vel: 0.0
//! ```
//!
//! Enum variants use YAML tags (`!circle` / `!polygon`), the form serde_yaml
//! deserializes struct variants from.
//!
//! The engine then maps this configuration into its internal runtime scenario
//! representation; validation (positive masses, radii, grid size) happens
//! during that mapping, not here.

use serde::Deserialize;

/// Broad-phase and wall settings.
#[derive(Deserialize, Debug)]
pub struct EngineConfig {
    pub grid_size: f64,       // side length of one broad-phase grid cell
    pub wall_collision: bool, // whether circles reflect off the domain walls
    pub x_max: f64,           // domain extent: [0, x_max] x [0, y_max]
    pub y_max: f64,
}

/// Global numerical parameters for a scenario.
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    pub t_end: f64, // time end
    pub h0: f64,    // time step size, shared by all bodies
}

/// Shape of a configured body: `circle` or `polygon`.
#[derive(Deserialize, Debug, Clone)]
pub enum ShapeConfig {
    #[serde(rename = "circle")]
    Circle { radius: f64 },

    #[serde(rename = "polygon")]
    Polygon {
        /// Vertex offsets from the body position, at least 3, convex,
        /// consistent winding order.
        vertices: Vec<[f64; 2]>,
        #[serde(default)]
        rotational_vel: f64,
        #[serde(default)]
        rotational_accel: f64,
    },
}

/// Configuration for a single body's initial state.
#[derive(Deserialize, Debug)]
pub struct BodyConfig {
    pub x: [f64; 2],            // initial position
    pub v: [f64; 2],            // initial velocity
    #[serde(default)]
    pub a: [f64; 2],            // initial acceleration, defaults to zero
    pub m: f64,                 // mass of the body
    pub shape: ShapeConfig,     // circle or polygon shape data
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug)]
pub struct ScenarioConfig {
    pub engine: EngineConfig,         // grid and wall settings
    pub parameters: ParametersConfig, // run length and step size
    pub bodies: Vec<BodyConfig>,      // initial state of the system
}
