use glam::IVec2;
use serde::{Deserialize, Serialize};

/// Grid coordinate in cell-space: x = column, y = row (the z axis of the
/// rendered terrain plane).
pub type GridCoord = IVec2;

/// Raw elevation raster as delivered by an external loader (e.g. a GeoTIFF
/// decoder): a flat row-major sample sequence with `index = z * width + x`.
/// NoData gaps arrive as `null` in JSON and deserialize to `None`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RawRaster {
    pub width: u32,
    pub height: u32,
    pub data: Vec<Option<f32>>,
}

/// Per-vertex slope classification, used downstream to shade downhill
/// terrain. Stored as u8 to match the shader vertex attribute encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[repr(u8)]
pub enum SlopeLabel {
    FlatOrRidge = 0,
    GentleDescent = 1,
    SteepDescent = 2,
}

impl SlopeLabel {
    /// Convert to f32 for a GPU vertex attribute buffer.
    pub fn as_f32(self) -> f32 {
        self as u8 as f32
    }
}
