use std::collections::BTreeMap;
use std::time::Instant;

use crate::simulation::collision::resolve_collisions;
use crate::simulation::grid::{Cell, SpatialGrid};
use crate::simulation::states::{Body, NVec2, System};

const GRID_SIZE: f64 = 50.0;
const RADIUS: f64 = 10.0;
const DT: f64 = 1.0 / 120.0;

/// Build a System of n circles scattered over a large square domain.
fn circle_system(n: usize) -> System {
    let mut bodies = Vec::with_capacity(n);

    for i in 0..n {
        let i_f = i as f64;
        // deterministic positions, no rand needed
        let x = NVec2::new(
            500.0 + (i_f * 0.37).sin() * 450.0,
            500.0 + (i_f * 0.13).cos() * 450.0,
        );
        let v = NVec2::new((i_f * 0.07).sin() * 5.0, (i_f * 0.11).cos() * 5.0);

        bodies.push(
            Body::circle(x, v, NVec2::zeros(), 1.0, RADIUS, DT)
                .expect("benchmark body construction"),
        );
    }

    System { bodies, t: 0.0 }
}

/// Time the broad-phase map rebuild across system sizes.
pub fn bench_grid() {
    let ns = [200, 400, 800, 1600, 3200, 6400];
    let reps = 100;

    println!("grid rebuild ({reps} reps per size)");
    for n in ns {
        let sys = circle_system(n);
        let grid = SpatialGrid::new(GRID_SIZE).expect("positive grid size");

        let start = Instant::now();
        let mut cells = 0usize;
        for _ in 0..reps {
            let map = grid.generate_map(&sys);
            cells = map.len();
        }
        let elapsed = start.elapsed();

        println!(
            "n = {n:>6}  cells = {cells:>6}  total = {:>10.3?}  per rebuild = {:>10.3?}",
            elapsed,
            elapsed / reps
        );
    }
}

/// Time a full broad + narrow phase pass across system sizes.
pub fn bench_resolve() {
    let ns = [200, 400, 800, 1600, 3200, 6400];
    let reps = 100;

    println!("broad + narrow phase ({reps} reps per size)");
    for n in ns {
        let grid = SpatialGrid::new(GRID_SIZE).expect("positive grid size");

        let start = Instant::now();
        for _ in 0..reps {
            // Fresh system each rep so positional corrections don't drift the
            // workload across reps.
            let mut sys = circle_system(n);
            let map: BTreeMap<Cell, Vec<usize>> = grid.generate_map(&sys);
            resolve_collisions(&mut sys, &map).expect("circle-only system");
        }
        let elapsed = start.elapsed();

        println!(
            "n = {n:>6}  total = {:>10.3?}  per pass = {:>10.3?}",
            elapsed,
            elapsed / reps
        );
    }
}
