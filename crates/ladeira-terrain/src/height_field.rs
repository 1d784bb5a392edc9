use ladeira_core::error::LadeiraError;
use ladeira_core::types::RawRaster;

/// Immutable 2D height field built from a raw elevation raster.
///
/// Samples are row-major with `index = z * width + x`, matching the vertex
/// order of the terrain plane the rendering layer builds from it. Missing
/// raster samples (NoData gaps) are substituted with 0.0 at build time, so
/// every stored elevation is a concrete number.
pub struct HeightField {
    width: u32,
    height: u32,
    elevations: Vec<f32>,
    min_elevation: f32,
    max_elevation: f32,
}

impl HeightField {
    /// Build a height field from loader output.
    ///
    /// Fails with `InvalidDimensions` when either dimension is zero or the
    /// sample count does not match `width * height`.
    pub fn build(raster: &RawRaster) -> Result<Self, LadeiraError> {
        let expected = raster.width as usize * raster.height as usize;
        if raster.width == 0 || raster.height == 0 || raster.data.len() != expected {
            return Err(LadeiraError::InvalidDimensions {
                width: raster.width,
                height: raster.height,
                samples: raster.data.len(),
            });
        }

        let elevations: Vec<f32> = raster.data.iter().map(|s| s.unwrap_or(0.0)).collect();

        // Range over the stored samples (NaN skipped), for texture
        // normalization downstream.
        let mut min_elevation = f32::INFINITY;
        let mut max_elevation = f32::NEG_INFINITY;
        for &e in &elevations {
            min_elevation = min_elevation.min(e);
            max_elevation = max_elevation.max(e);
        }

        log::info!(
            "height field built: {}x{}, elevation range {:.1}..{:.1}",
            raster.width,
            raster.height,
            min_elevation,
            max_elevation
        );

        Ok(Self {
            width: raster.width,
            height: raster.height,
            elevations,
            min_elevation,
            max_elevation,
        })
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// Minimum stored elevation.
    pub fn min_elevation(&self) -> f32 {
        self.min_elevation
    }

    /// Maximum stored elevation.
    pub fn max_elevation(&self) -> f32 {
        self.max_elevation
    }

    /// All stored elevations, row-major.
    pub fn elevations(&self) -> &[f32] {
        &self.elevations
    }

    /// Total number of grid cells.
    pub fn cell_count(&self) -> usize {
        self.elevations.len()
    }

    /// Flat index for an in-bounds coordinate.
    pub fn index_of(&self, x: u32, z: u32) -> usize {
        (z * self.width + x) as usize
    }

    /// Checked lookup. `None` outside `[0, width) x [0, height)`; callers
    /// treat that as "no neighbor in that direction".
    pub fn sample(&self, x: i32, z: i32) -> Option<f32> {
        if x < 0 || x >= self.width as i32 || z < 0 || z >= self.height as i32 {
            return None;
        }
        Some(self.elevations[self.index_of(x as u32, z as u32)])
    }

    /// Lookup that substitutes 0.0 out of bounds.
    ///
    /// Exists only for the slope classifier's stride offsets: the shading
    /// downstream depends on the exact labels this fallback produces near
    /// grid edges, so it must not be changed to clamp or skip. Never use
    /// this inside steepest-descent comparisons.
    pub fn sample_or_zero(&self, x: i32, z: i32) -> f32 {
        self.sample(x, z).unwrap_or(0.0)
    }
}
