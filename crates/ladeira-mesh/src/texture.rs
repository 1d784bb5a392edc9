use ladeira_terrain::HeightField;

/// Grayscale elevation texture: one RGBA8 pixel per grid sample, row-major,
/// brightness proportional to normalized elevation. A degenerate range
/// (flat field) maps everything to black rather than dividing by zero.
pub fn elevation_texture(field: &HeightField) -> Vec<u8> {
    let min = field.min_elevation();
    let range = field.max_elevation() - min;

    let mut pixels = Vec::with_capacity(field.cell_count() * 4);
    for &e in field.elevations() {
        let normalized = if range > 0.0 { (e - min) / range } else { 0.0 };
        let v = (255.0 * normalized).round().clamp(0.0, 255.0) as u8;
        pixels.extend_from_slice(&[v, v, v, 255]);
    }
    pixels
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
    fn test_endpoints_map_to_black_and_white() {
        let f = field(3, 1, &[100.0, 150.0, 200.0]);
        let pixels = elevation_texture(&f);
        assert_eq!(pixels.len(), 12);
        assert_eq!(&pixels[0..4], &[0, 0, 0, 255]);
        assert_eq!(&pixels[4..8], &[128, 128, 128, 255]);
        assert_eq!(&pixels[8..12], &[255, 255, 255, 255]);
    }

    #[test]
    fn test_flat_field_no_nan() {
        let f = field(2, 2, &[42.0; 4]);
        let pixels = elevation_texture(&f);
        assert!(pixels.chunks(4).all(|p| p == [0, 0, 0, 255]));
    }

    #[test]
    fn test_negative_elevations_normalize() {
        let f = field(2, 1, &[-100.0, 100.0]);
        let pixels = elevation_texture(&f);
        assert_eq!(&pixels[0..4], &[0, 0, 0, 255]);
        assert_eq!(&pixels[4..8], &[255, 255, 255, 255]);
    }
}
