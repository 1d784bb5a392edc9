//! Single source of truth for shared constants. The tracer, classifier and
//! mesh builders all read defaults from here so they cannot drift apart.

/// Maximum number of cells a single descent trace will visit.
pub const DEFAULT_MAX_STEPS: usize = 50;

/// Grid-axis offset used by the slope classifier when comparing a vertex
/// against its stride neighbors.
pub const DEFAULT_SLOPE_STRIDE: i32 = 3;

/// Dead band around a vertex elevation. A neighbor must clear this margin
/// before the vertex counts as sitting on a descent.
pub const DEFAULT_SLOPE_MARGIN: f32 = 10.0;

/// Drop (beyond the +x stride neighbor) that upgrades a descent to steep.
pub const DEFAULT_STEEP_THRESHOLD: f32 = 25.0;

/// Grid cells between consecutive descent seeds when tracing a whole field.
pub const DEFAULT_SEED_SPACING: u32 = 2;

/// World-space extent of the rendered terrain plane on both the x and z axes.
pub const TERRAIN_EXTENT: f32 = 7500.0;

/// Polyline width for paths that descend toward increasing x and z.
pub const LINE_WIDTH_ALONG_Z: f32 = 3.0;

/// Polyline width for every other path.
pub const LINE_WIDTH_DEFAULT: f32 = 1.0;
