use ladeira_core::constants::{LINE_WIDTH_ALONG_Z, LINE_WIDTH_DEFAULT, TERRAIN_EXTENT};
use ladeira_terrain::{descent, HeightField};

use crate::grid_mesh::{vertex_position, MeshMode};

/// Line color for descent paths: black over the grayscale terrain.
const LINE_COLOR: [f32; 4] = [0.0, 0.0, 0.0, 1.0];

/// Vertex buffers for one renderable descent line.
pub struct DescentPolyline {
    /// World-space positions, one per visited cell, in visit order.
    pub positions: Vec<[f32; 3]>,
    /// Per-vertex colors, parallel to `positions`.
    pub colors: Vec<[f32; 4]>,
    /// Line width: thicker for paths that descend toward +x/+z.
    pub width: f32,
}

/// Trace descent paths over the whole field and build their vertex buffers.
///
/// Seeds step by `seed_spacing` in the field's raster order, so the output
/// order (and therefore scene placement) is identical across runs. Paths
/// that never leave their seed carry no line and are dropped here.
pub fn build_polylines(
    field: &HeightField,
    seed_spacing: u32,
    max_steps: usize,
    mode: MeshMode,
) -> Vec<DescentPolyline> {
    let paths = descent::trace_all(field, seed_spacing, max_steps);
    let total = paths.len();

    let lines: Vec<DescentPolyline> = paths
        .into_iter()
        .filter(|path| path.points.len() > 1)
        .map(|path| {
            let positions: Vec<[f32; 3]> = path
                .points
                .iter()
                .map(|p| vertex_position(field, p.x, p.z, p.elevation, TERRAIN_EXTENT, mode))
                .collect();
            let colors = vec![LINE_COLOR; positions.len()];
            let width = if path.descends_along_z {
                LINE_WIDTH_ALONG_Z
            } else {
                LINE_WIDTH_DEFAULT
            };
            DescentPolyline {
                positions,
                colors,
                width,
            }
        })
        .collect();

    log::info!(
        "built {} descent polylines ({} single-point paths dropped)",
        lines.len(),
        total - lines.len()
    );
    lines
}
