//! Tests for assembling an overlapping model from a sample

#[cfg(test)]
mod tests {
    use crate::{BLACK, WHITE, checkerboard_model, checkerboard_sample, options};
    use overlapwfc::AlgorithmError;
    use overlapwfc::analysis::model::OverlappingModel;

    // Tests the model exposes catalog, weights and palette consistently
    // Verified by taking weights from the wrong catalog order
    #[test]
    fn test_checkerboard_model_parts() {
        let model = checkerboard_model();

        assert_eq!(model.pattern_count(), 2);
        assert_eq!(model.pattern_size(), 2);
        assert_eq!(model.catalog().len(), 2);
        assert_eq!(model.compatibility().pattern_count(), 2);
        assert_eq!(model.weights(), &[2.0, 2.0]);
        assert_eq!(model.palette(), &[BLACK, WHITE]);
    }

    // Tests cached w·ln w terms match the weights
    // Verified by caching ln w only
    #[test]
    fn test_weight_log_weights() {
        let model = checkerboard_model();
        let expected = 2.0 * 2.0_f64.ln();
        for &value in model.weight_log_weights() {
            assert!((value - expected).abs() < 1e-12);
        }
    }

    // Tests palette lookups by index
    // Verified by returning the first color for every index
    #[test]
    fn test_color_lookup() {
        let model = checkerboard_model();
        assert_eq!(model.color(0), Some(BLACK));
        assert_eq!(model.color(1), Some(WHITE));
        assert_eq!(model.color(2), None);
    }

    // Tests extraction errors surface from build
    // Verified by ignoring the extraction result
    #[test]
    fn test_build_rejects_oversized_patterns() {
        let result = OverlappingModel::build(&checkerboard_sample(), &options(4, true));
        assert!(matches!(result, Err(AlgorithmError::InvalidSample { .. })));
    }
}
