//! Tests for pattern extraction, deduplication and symmetry variants

#[cfg(test)]
mod tests {
    use crate::{BLACK, WHITE, checkerboard_sample, options, sample_from_rows};
    use ndarray::{Array2, array};
    use overlapwfc::analysis::patterns::{ExtractionOptions, PatternCatalog};
    use overlapwfc::analysis::sample::Sample;
    use overlapwfc::spatial::symmetry::{Symmetry, rotate_90};

    fn numbered_sample() -> Sample {
        let grid = Array2::from_shape_vec((3, 3), (0..9).collect()).unwrap();
        let palette = (0..9u8).map(|i| [i, i, i]).collect();
        Sample::from_indices(grid, palette).unwrap()
    }

    // Tests periodic windows wrap and duplicates accumulate frequency
    // Verified by disabling modular wrapping in window
    #[test]
    fn test_checkerboard_periodic_extraction() {
        let catalog = PatternCatalog::extract(&checkerboard_sample(), &options(2, true)).unwrap();

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.pattern_size(), 2);
        assert_eq!(catalog.get(0).unwrap().pixels(), &array![[0, 1], [1, 0]]);
        assert_eq!(catalog.get(1).unwrap().pixels(), &array![[1, 0], [0, 1]]);
        assert_eq!(catalog.weights(), vec![2.0, 2.0]);
    }

    // Tests bounded extraction only uses windows inside the sample
    // Verified by using periodic position counts
    #[test]
    fn test_bounded_extraction_positions() {
        let catalog = PatternCatalog::extract(&checkerboard_sample(), &options(2, false)).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.get(0).unwrap().frequency(), 1);

        let catalog = PatternCatalog::extract(&numbered_sample(), &options(2, false)).unwrap();
        assert_eq!(catalog.len(), 4);
        assert!(catalog.patterns().iter().all(|p| p.frequency() == 1));
    }

    // Tests frequencies sum to positions times variants
    // Verified by counting only new patterns
    #[test]
    fn test_frequency_total() {
        let with_rotations = ExtractionOptions {
            include_rotations: true,
            ..options(2, false)
        };
        let catalog = PatternCatalog::extract(&numbered_sample(), &with_rotations).unwrap();
        let total: usize = catalog.patterns().iter().map(|p| p.frequency()).sum();
        assert_eq!(total, 4 * 4);
        assert_eq!(catalog.len(), 16);
    }

    // Tests identical variants collapse into one pattern
    // Verified by keying deduplication on symmetry
    #[test]
    fn test_uniform_sample_single_pattern() {
        let sample = sample_from_rows(&[&[0, 0], &[0, 0]], &[BLACK]);
        let all_variants = ExtractionOptions {
            include_rotations: true,
            include_reflections: true,
            ..options(1, true)
        };
        let catalog = PatternCatalog::extract(&sample, &all_variants).unwrap();

        assert_eq!(catalog.len(), 1);
        let pattern = catalog.get(0).unwrap();
        assert_eq!(pattern.frequency(), 32);
        assert_eq!(pattern.symmetry(), Symmetry::IDENTITY);
        assert_eq!(pattern.reference_pixel(), 0);
    }

    // Tests rotation variants appear in the catalog
    // Verified by skipping rotations
    #[test]
    fn test_rotation_variants_present() {
        let with_rotations = ExtractionOptions {
            include_rotations: true,
            ..options(3, false)
        };
        let catalog = PatternCatalog::extract(&numbered_sample(), &with_rotations).unwrap();
        let rotated = rotate_90(numbered_sample().indices());

        assert_eq!(catalog.len(), 4);
        assert!(catalog.patterns().iter().any(|p| p.pixels() == &rotated));
    }

    // Tests pixel lookup uses x as the column
    // Verified by swapping the lookup axes
    #[test]
    fn test_pattern_pixel_coordinates() {
        let catalog = PatternCatalog::extract(&numbered_sample(), &options(3, false)).unwrap();
        let pattern = catalog.get(0).unwrap();

        assert_eq!(pattern.size(), 3);
        assert_eq!(pattern.pixel(2, 0), Some(2));
        assert_eq!(pattern.pixel(0, 2), Some(6));
        assert_eq!(pattern.pixel(3, 0), None);
    }

    // Tests invalid pattern sizes are rejected
    // Verified by removing the size bounds
    #[test]
    fn test_invalid_pattern_size() {
        let sample = checkerboard_sample();
        assert!(PatternCatalog::extract(&sample, &options(0, true)).is_err());
        assert!(PatternCatalog::extract(&sample, &options(3, true)).is_err());
    }

    // Tests extraction is deterministic
    // Verified by iterating the dedup map for ids
    #[test]
    fn test_extraction_idempotent() {
        let sample = sample_from_rows(&[&[0, 1, 1, 0], &[1, 1, 0, 0], &[0, 0, 0, 1]], &[BLACK, WHITE]);
        let all_variants = ExtractionOptions {
            include_rotations: true,
            include_reflections: true,
            ..options(2, true)
        };
        let first = PatternCatalog::extract(&sample, &all_variants).unwrap();
        let second = PatternCatalog::extract(&sample, &all_variants).unwrap();

        assert_eq!(first, second);
        assert!(!first.is_empty());
    }

    // Tests mirroring without rotations also extracts the top-bottom flip
    // Verified by emitting only the left-right reflection
    #[test]
    fn test_mirror_only_extracts_vertical_flip() {
        let sample = sample_from_rows(&[&[0, 0], &[1, 1]], &[BLACK, WHITE]);
        let mirrored = ExtractionOptions {
            include_reflections: true,
            ..options(2, false)
        };
        let catalog = PatternCatalog::extract(&sample, &mirrored).unwrap();

        assert_eq!(catalog.len(), 2);
        let original = catalog.get(0).unwrap();
        assert_eq!(original.pixels(), &array![[0, 0], [1, 1]]);
        assert_eq!(original.frequency(), 2);

        let flipped = catalog.get(1).unwrap();
        assert_eq!(flipped.pixels(), &array![[1, 1], [0, 0]]);
        assert_eq!(flipped.frequency(), 1);
        assert_eq!(flipped.symmetry().index(), 6);
    }
}
