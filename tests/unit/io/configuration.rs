//! Tests for synthesis constants and defaults

#[cfg(test)]
mod tests {
    use overlapwfc::io::configuration::{
        DEFAULT_MAX_ATTEMPTS, DEFAULT_OUTPUT_SIZE, DEFAULT_PATTERN_SIZE, DEFAULT_SEED,
        ENTROPY_NOISE_SCALE, MAX_INDIVIDUAL_PROGRESS_BARS, MAX_OUTPUT_DIMENSION, OUTPUT_SUFFIX,
    };

    // Tests seed and pattern defaults
    // Verified by changing constant values
    #[test]
    fn test_default_values() {
        assert_eq!(DEFAULT_SEED, 42);
        assert_eq!(DEFAULT_PATTERN_SIZE, 3);
        assert_eq!(DEFAULT_OUTPUT_SIZE, 48);
        assert_eq!(DEFAULT_MAX_ATTEMPTS, 10);
    }

    // Tests the default output can hold a bounded pattern
    // Verified by shrinking the output below the pattern size
    #[test]
    fn test_default_output_fits_pattern() {
        assert!(DEFAULT_OUTPUT_SIZE >= DEFAULT_PATTERN_SIZE);
        assert!(DEFAULT_OUTPUT_SIZE <= MAX_OUTPUT_DIMENSION);
    }

    // Tests entropy noise is far below any entropy difference
    // Verified by raising the noise scale to one
    #[test]
    fn test_noise_scale_small() {
        let two_versus_three = 3.0_f64.ln() - 2.0_f64.ln();
        assert!(ENTROPY_NOISE_SCALE > 0.0);
        assert!(ENTROPY_NOISE_SCALE < two_versus_three);
    }

    // Tests output and progress settings
    // Verified by changing the suffix
    #[test]
    fn test_output_settings() {
        assert_eq!(OUTPUT_SUFFIX, "_wfc");
        assert_eq!(MAX_INDIVIDUAL_PROGRESS_BARS, 5);
        assert_eq!(MAX_OUTPUT_DIMENSION, 10_000);
    }
}
