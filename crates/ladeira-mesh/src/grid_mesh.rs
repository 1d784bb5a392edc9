use ladeira_core::constants::TERRAIN_EXTENT;
use ladeira_core::types::SlopeLabel;
use ladeira_terrain::HeightField;

/// Whether vertex heights follow the terrain or collapse to the plane.
/// Planar supports a flat plan view of the same descent lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MeshMode {
    Surface3D,
    Planar,
}

/// One terrain mesh vertex: world-space position plus the slope label as a
/// float attribute for the shading pass.
#[repr(C)]
#[derive(Clone, Copy, bytemuck::Pod, bytemuck::Zeroable)]
pub struct TerrainVertex {
    pub position: [f32; 3],
    pub slope: f32,
}

/// World-space position of grid vertex (x, z) on a lattice spanning
/// `extent` on both axes, centered on the origin. Row-major vertex order
/// matches `HeightField::elevations()`.
pub fn vertex_position(
    field: &HeightField,
    x: u32,
    z: u32,
    elevation: f32,
    extent: f32,
    mode: MeshMode,
) -> [f32; 3] {
    let half = extent / 2.0;
    let step_x = if field.width() > 1 {
        extent / (field.width() - 1) as f32
    } else {
        0.0
    };
    let step_z = if field.height() > 1 {
        extent / (field.height() - 1) as f32
    } else {
        0.0
    };
    let y = match mode {
        MeshMode::Surface3D => elevation,
        MeshMode::Planar => 0.0,
    };
    [-half + x as f32 * step_x, y, -half + z as f32 * step_z]
}

/// Build the full vertex lattice for a height field. `labels` must be the
/// classifier output for the same field (index-aligned).
pub fn build_terrain_vertices(
    field: &HeightField,
    labels: &[SlopeLabel],
    mode: MeshMode,
) -> Vec<TerrainVertex> {
    debug_assert_eq!(labels.len(), field.cell_count());

    let mut vertices = Vec::with_capacity(field.cell_count());
    for z in 0..field.height() {
        for x in 0..field.width() {
            let i = field.index_of(x, z);
            vertices.push(TerrainVertex {
                position: vertex_position(field, x, z, field.elevations()[i], TERRAIN_EXTENT, mode),
                slope: labels[i].as_f32(),
            });
        }
    }
    vertices
}

#[cfg(test)]
mod tests {
    use super::*;
    use ladeira_core::types::RawRaster;

    fn field(width: u32, height: u32, elevations: &[f32]) -> HeightField {
        HeightField::build(&RawRaster {
            width,
            height,
            data: elevations.iter().map(|&e| Some(e)).collect(),
        })
        .unwrap()
    }

    #[test]
    fn test_lattice_spans_extent() {
        let f = field(3, 3, &[0.0; 9]);
        let labels = vec![SlopeLabel::FlatOrRidge; 9];
        let verts = build_terrain_vertices(&f, &labels, MeshMode::Surface3D);
        assert_eq!(verts.len(), 9);
        let half = TERRAIN_EXTENT / 2.0;
        assert_eq!(verts[0].position, [-half, 0.0, -half]);
        assert_eq!(verts[8].position, [half, 0.0, half]);
        assert_eq!(verts[4].position, [0.0, 0.0, 0.0]);
    }

    #[test]
    fn test_surface_heights_follow_elevations() {
        let f = field(2, 1, &[120.0, 340.0]);
        let labels = vec![SlopeLabel::FlatOrRidge; 2];
        let verts = build_terrain_vertices(&f, &labels, MeshMode::Surface3D);
        assert_eq!(verts[0].position[1], 120.0);
        assert_eq!(verts[1].position[1], 340.0);
    }

    #[test]
    fn test_planar_mode_flattens_y() {
        let f = field(2, 1, &[120.0, 340.0]);
        let labels = vec![SlopeLabel::FlatOrRidge; 2];
        let verts = build_terrain_vertices(&f, &labels, MeshMode::Planar);
        assert!(verts.iter().all(|v| v.position[1] == 0.0));
    }

    #[test]
    fn test_slope_attribute_encoded() {
        let f = field(2, 1, &[0.0, 0.0]);
        let labels = vec![SlopeLabel::GentleDescent, SlopeLabel::SteepDescent];
        let verts = build_terrain_vertices(&f, &labels, MeshMode::Surface3D);
        assert_eq!(verts[0].slope, 1.0);
        assert_eq!(verts[1].slope, 2.0);
    }

    #[test]
    fn test_single_column_does_not_divide_by_zero() {
        let f = field(1, 1, &[7.0]);
        let labels = vec![SlopeLabel::FlatOrRidge];
        let verts = build_terrain_vertices(&f, &labels, MeshMode::Surface3D);
        let half = TERRAIN_EXTENT / 2.0;
        assert_eq!(verts[0].position, [-half, 7.0, -half]);
    }
}
