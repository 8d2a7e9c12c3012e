//! High-level engine: one simulation tick and the headless run loop.
//!
//! A tick is one full synchronous pass with no I/O or suspension points:
//! integrate all bodies → rebuild the spatial grid from the new positions →
//! resolve candidate pairs from the grid. Data flows one way: bodies → grid →
//! pair candidates → resolved velocity/position deltas written back onto the
//! bodies.

use tracing::info;

use super::collision::resolve_collisions;
use super::grid::SpatialGrid;
use super::integrator::{integrate_system, Walls};
use super::params::Parameters;
use super::states::System;
use crate::error::SimResult;

/// Engine settings: the broad-phase grid and the optional wall reflection.
#[derive(Debug, Clone)]
pub struct Engine {
    pub grid: SpatialGrid,
    pub wall_collision: bool, // reflect circles off the domain walls
    pub walls: Walls,
}

impl Engine {
    /// Advance the system by one tick and `sys.t` by `h0`.
    ///
    /// The grid map is a pure function of the post-integration positions and
    /// is discarded after the resolution pass.
    pub fn step(&self, sys: &mut System, h0: f64) -> SimResult<()> {
        let walls = self.wall_collision.then_some(&self.walls);
        integrate_system(sys, walls);

        let map = self.grid.generate_map(sys);
        resolve_collisions(sys, &map)?;

        sys.t += h0;
        Ok(())
    }
}

/// Step the system until `params.t_end`, logging coarse progress.
///
/// The driver decides the step count; a failing tick aborts the run and the
/// error is surfaced to the caller.
pub fn run_headless(engine: &Engine, params: &Parameters, sys: &mut System) -> SimResult<()> {
    let steps = (params.t_end / params.h0).ceil() as u64;
    info!(steps, bodies = sys.bodies.len(), "starting headless run");

    for step in 0..steps {
        engine.step(sys, params.h0)?;

        // Progress roughly every 10% of the run.
        if steps >= 10 && step % (steps / 10) == 0 && step > 0 {
            info!(step, t = sys.t, "tick");
        }
    }

    info!(t = sys.t, "run finished");
    Ok(())
}
