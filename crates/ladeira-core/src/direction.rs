use glam::IVec2;

/// The 3x3 neighborhood of a grid cell (center included), in the fixed scan
/// order the descent tracer relies on: dx ascending, then dz ascending.
///
/// The order is load-bearing. Steepest-descent selection keeps the first
/// neighbor whose drop strictly exceeds the running best, so ties resolve to
/// whichever candidate this table lists first. Reordering it changes traced
/// paths on plateaus.
pub const SCAN_OFFSETS: [IVec2; 9] = [
    IVec2::new(-1, -1),
    IVec2::new(-1, 0),
    IVec2::new(-1, 1),
    IVec2::new(0, -1),
    IVec2::new(0, 0),
    IVec2::new(0, 1),
    IVec2::new(1, -1),
    IVec2::new(1, 0),
    IVec2::new(1, 1),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_offsets_cover_neighborhood() {
        assert_eq!(SCAN_OFFSETS.len(), 9);
        for dx in -1..=1 {
            for dz in -1..=1 {
                assert!(
                    SCAN_OFFSETS.contains(&IVec2::new(dx, dz)),
                    "missing offset ({dx}, {dz})"
                );
            }
        }
    }

    #[test]
    fn test_scan_offsets_order() {
        // dx ascending, dz ascending within each dx.
        for pair in SCAN_OFFSETS.windows(2) {
            let (a, b) = (pair[0], pair[1]);
            assert!(
                a.x < b.x || (a.x == b.x && a.y < b.y),
                "{a:?} must precede {b:?}"
            );
        }
    }

    #[test]
    fn test_center_offset_position() {
        assert_eq!(SCAN_OFFSETS[4], IVec2::ZERO);
    }
}
