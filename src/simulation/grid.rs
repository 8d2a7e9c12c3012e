//! Broad-phase spatial hash grid.
//!
//! Partitions the body set into uniform square cells. Each body is registered
//! into the cell of its position plus the cells reached by offsetting the
//! position by its bounding radius in +x, +y and both, deduplicated (1 to 4
//! cells). This over-approximation guarantees that two bodies whose true
//! footprints overlap share at least one registered cell even when their
//! centers fall in different base cells.
//!
//! The map is rebuilt from scratch every tick (`O(bodies × 4)`) and holds
//! body indices, never owning references; cells with no bodies are simply
//! absent. Cells are kept ordered so a resolution pass visits them in a
//! deterministic order: velocity batching is last-writer-wins per body, so
//! cell order is observable in the outcome and must not vary run-to-run.

use std::collections::BTreeMap;

use tracing::warn;

use super::states::{NVec2, System};
use crate::error::{SimError, SimResult};

/// Integer grid cell coordinate `(cx, cy)`.
pub type Cell = (i64, i64);

/// A uniform spatial hash grid with square cells of side `grid_size`.
#[derive(Debug, Clone)]
pub struct SpatialGrid {
    grid_size: f64,
}

impl SpatialGrid {
    /// Create a grid. Non-positive `grid_size` is rejected at construction.
    pub fn new(grid_size: f64) -> SimResult<Self> {
        if !(grid_size > 0.0) {
            return Err(SimError::configuration(format!(
                "grid size must be > 0, got {grid_size}"
            )));
        }
        Ok(Self { grid_size })
    }

    /// The cells a body belongs to, based on its smallest enclosing square:
    /// the cell of the position itself and of the position offset by
    /// `bounding_radius` in x, in y, and in both, deduplicated.
    ///
    /// Pure: the same inputs always yield the same set.
    pub fn cells_for(&self, pos: NVec2, bounding_radius: f64) -> Vec<Cell> {
        let x = coerce_nan(pos.x);
        let y = coerce_nan(pos.y);

        let base_x = self.cell_index(x);
        let base_y = self.cell_index(y);
        let off_x = self.cell_index(x + bounding_radius);
        let off_y = self.cell_index(y + bounding_radius);

        let mut cells = vec![
            (base_x, base_y),
            (base_x, off_y),
            (off_x, base_y),
            (off_x, off_y),
        ];
        cells.sort_unstable();
        cells.dedup();
        cells
    }

    /// Build the cell → body-index map for the current body positions.
    ///
    /// Every body lands in each of its 1–4 cells; lists are created on first
    /// insertion. The result is discarded and recomputed every tick, no
    /// incremental diffing.
    pub fn generate_map(&self, sys: &System) -> BTreeMap<Cell, Vec<usize>> {
        let mut spatial_map: BTreeMap<Cell, Vec<usize>> = BTreeMap::new();
        for (i, body) in sys.bodies.iter().enumerate() {
            for cell in self.cells_for(body.x, body.bounding_radius) {
                spatial_map.entry(cell).or_default().push(i);
            }
        }
        spatial_map
    }

    /// Cell index along one axis: floor division, so negative coordinates map
    /// to negative indices (not truncated toward zero).
    fn cell_index(&self, coord: f64) -> i64 {
        (coord / self.grid_size).floor() as i64
    }
}

/// Broad-phase bucketing never fails: a NaN coordinate is treated as 0 so a
/// corrupted body cannot vanish from every cell. Logged as suspicious.
fn coerce_nan(coord: f64) -> f64 {
    if coord.is_nan() {
        warn!("NaN coordinate coerced to 0 during broad-phase bucketing");
        0.0
    } else {
        coord
    }
}
