use ladeira_core::constants::{
    DEFAULT_SLOPE_MARGIN, DEFAULT_SLOPE_STRIDE, DEFAULT_STEEP_THRESHOLD,
};
use ladeira_core::types::SlopeLabel;

use crate::height_field::HeightField;

/// Tuning knobs for the per-vertex slope classification.
#[derive(Debug, Clone, Copy)]
pub struct SlopeParams {
    /// Grid-axis offset of the compared neighbors.
    pub stride: i32,
    /// Dead band around the vertex elevation.
    pub margin: f32,
    /// Extra drop past the +x neighbor that makes a descent steep.
    pub steep_threshold: f32,
}

impl Default for SlopeParams {
    fn default() -> Self {
        Self {
            stride: DEFAULT_SLOPE_STRIDE,
            margin: DEFAULT_SLOPE_MARGIN,
            steep_threshold: DEFAULT_STEEP_THRESHOLD,
        }
    }
}

/// Label every grid vertex by how sharply it sits on a local downhill slope.
///
/// Each vertex is compared against the elevations one stride away along both
/// axes. Out-of-bounds offsets substitute 0.0 rather than clamping, and only
/// the +-x pair feeds the decision even though the +-z pair is fetched. Both
/// choices are contract: the shading pipeline consumes these exact labels,
/// edge mislabeling included, so neither may be "corrected" here.
///
/// Returns one label per vertex, index-aligned with `field.elevations()`.
pub fn classify(field: &HeightField, params: SlopeParams) -> Vec<SlopeLabel> {
    let width = field.width() as i32;
    let height = field.height() as i32;
    let s = params.stride;

    let mut labels = Vec::with_capacity(field.cell_count());
    for z in 0..height {
        for x in 0..width {
            let y = field.elevations()[field.index_of(x as u32, z as u32)];

            let east = field.sample_or_zero(x + s, z);
            let west = field.sample_or_zero(x - s, z);
            let _south = field.sample_or_zero(x, z + s);
            let _north = field.sample_or_zero(x, z - s);

            // Strict comparisons: a vertex exactly margin below a neighbor
            // does not count as descending.
            let descending = y < east - params.margin || y < west - params.margin;
            let plateau = y < east + params.margin && y < west + params.margin;

            let label = if descending && !plateau {
                if y < east - params.steep_threshold {
                    SlopeLabel::SteepDescent
                } else {
                    SlopeLabel::GentleDescent
                }
            } else {
                SlopeLabel::FlatOrRidge
            };
            labels.push(label);
        }
    }
    labels
}

/// `classify` with the default stride, margin and steep threshold.
pub fn classify_default(field: &HeightField) -> Vec<SlopeLabel> {
    classify(field, SlopeParams::default())
}
