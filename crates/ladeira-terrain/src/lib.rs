pub mod descent;
pub mod height_field;
pub mod slope;

pub use descent::{DescentPath, PathPoint};
pub use height_field::HeightField;
pub use slope::SlopeParams;

use ladeira_core::error::LadeiraError;
use ladeira_core::types::{GridCoord, RawRaster, SlopeLabel};

/// Build an immutable height field from a loader's raw raster.
pub fn build_height_field(raster: &RawRaster) -> Result<HeightField, LadeiraError> {
    HeightField::build(raster)
}

/// Trace the steepest-descent path from one seed cell.
pub fn trace_descent(field: &HeightField, seed: GridCoord, max_steps: usize) -> DescentPath {
    descent::trace(field, seed, max_steps)
}

/// Label every vertex of the field by descent steepness.
pub fn classify_slopes(field: &HeightField, params: SlopeParams) -> Vec<SlopeLabel> {
    slope::classify(field, params)
}
