pub mod simulation;
pub mod configuration;
pub mod benchmark;
pub mod error;

pub use simulation::states::{Body, NVec2, Shape, System};
pub use simulation::integrator::{euler_cromer, integrate_system, reflect_walls, Walls};
pub use simulation::grid::{Cell, SpatialGrid};
pub use simulation::collision::resolve_collisions;
pub use simulation::sat::{candidate_axes, min_translation_vector, project_onto_axis, resolve_pair, Mtv, Projection};
pub use simulation::engine::{run_headless, Engine};
pub use simulation::params::Parameters;
pub use simulation::scenario::Scenario;

pub use configuration::config::{BodyConfig, EngineConfig, ParametersConfig, ScenarioConfig, ShapeConfig};

pub use error::{SimError, SimResult};

pub use benchmark::benchmark::{bench_grid, bench_resolve};
