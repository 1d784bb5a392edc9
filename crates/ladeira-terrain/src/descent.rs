use glam::IVec2;
use ladeira_core::constants::DEFAULT_MAX_STEPS;
use ladeira_core::direction::SCAN_OFFSETS;
use ladeira_core::types::GridCoord;

use crate::height_field::HeightField;

/// One visited cell of a descent path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathPoint {
    pub x: u32,
    pub z: u32,
    pub elevation: f32,
}

/// A greedy steepest-descent path traced from a single seed cell.
///
/// Points are in visit order, seed first. Elevations are non-increasing and
/// consecutive cells are 8-connected. A single-point path means the seed is
/// already a local minimum (or sits on a plateau); the rendering layer drops
/// those rather than drawing degenerate lines.
#[derive(Debug, Clone, PartialEq)]
pub struct DescentPath {
    pub points: Vec<PathPoint>,
    /// Set when the final cell's x and z both strictly exceed the seed's.
    /// Purely cosmetic: downstream it only selects a thicker line width.
    pub descends_along_z: bool,
}

/// Trace the steepest-descent path starting at `seed`, visiting at most
/// `max_steps` cells.
///
/// At each cell the full 3x3 neighborhood is scanned in the fixed
/// `SCAN_OFFSETS` order and the walk moves to the neighbor with the largest
/// strictly positive drop. The strict comparison over a best-so-far that
/// starts at 0 means the first candidate encountered wins ties and the
/// center cell can never be chosen, so the walk terminates at any local
/// minimum, flat cell, or ridge. No lookahead, no state shared across
/// seeds: traces for different seeds are independent.
pub fn trace(field: &HeightField, seed: GridCoord, max_steps: usize) -> DescentPath {
    let width = field.width() as i32;
    let height = field.height() as i32;

    let mut current = seed;
    let mut points = Vec::new();

    for _ in 0..max_steps {
        let idx = (current.y * width + current.x) as usize;
        if idx >= field.cell_count() {
            break;
        }

        let elevation = field.elevations()[idx];
        points.push(PathPoint {
            x: current.x as u32,
            z: current.y as u32,
            elevation,
        });

        let mut steepest = current;
        let mut steepest_drop = 0.0f32;

        for offset in SCAN_OFFSETS {
            let n = current + offset;
            if n.x < 0 || n.x >= width || n.y < 0 || n.y >= height {
                continue;
            }
            let drop = elevation - field.elevations()[(n.y * width + n.x) as usize];
            if drop > steepest_drop {
                steepest_drop = drop;
                steepest = n;
            }
        }

        if steepest_drop <= 0.0 {
            break;
        }
        current = steepest;
    }

    DescentPath {
        points,
        descends_along_z: current.x > seed.x && current.y > seed.y,
    }
}

/// Trace descent paths for every seed on a regular grid of cells,
/// `seed_spacing` cells apart, in a fixed scan order (outer x, inner z) so
/// scene placement downstream is stable across runs.
///
/// Single-point paths are included; callers filter on `points.len() > 1`.
pub fn trace_all(field: &HeightField, seed_spacing: u32, max_steps: usize) -> Vec<DescentPath> {
    let spacing = seed_spacing.max(1);
    let mut paths = Vec::new();
    for x in (0..field.width()).step_by(spacing as usize) {
        for z in (0..field.height()).step_by(spacing as usize) {
            paths.push(trace(field, IVec2::new(x as i32, z as i32), max_steps));
        }
    }
    log::info!(
        "traced {} descent paths (spacing {}, max {} steps)",
        paths.len(),
        spacing,
        max_steps
    );
    paths
}

/// `trace` with the default step budget.
pub fn trace_default(field: &HeightField, seed: GridCoord) -> DescentPath {
    trace(field, seed, DEFAULT_MAX_STEPS)
}
