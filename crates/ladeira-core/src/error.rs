use thiserror::Error;

/// Errors that can occur while building terrain data structures.
///
/// Out-of-bounds lookups are deliberately not represented here: they resolve
/// to sentinel values at the call site (`None` from checked sampling, 0.0
/// from the classifier's raw offset lookup) and never fail.
#[derive(Debug, Error)]
pub enum LadeiraError {
    #[error("invalid raster dimensions: {width}x{height} with {samples} samples")]
    InvalidDimensions {
        width: u32,
        height: u32,
        samples: usize,
    },
}
