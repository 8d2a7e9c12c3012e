pub mod states;
pub mod vector;
pub mod params;
pub mod engine;
pub mod integrator;
pub mod grid;
pub mod collision;
pub mod sat;
pub mod scenario;
