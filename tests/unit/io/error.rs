//! Tests for error display and source chaining

#[cfg(test)]
mod tests {
    use overlapwfc::io::error::{AlgorithmError, invalid_parameter, invalid_sample};
    use std::error::Error;
    use std::path::PathBuf;

    // Tests messages name the failing parameter and value
    // Verified by omitting the value from the message
    #[test]
    fn test_invalid_parameter_display() {
        let error = invalid_parameter("output_width", &0, &"must be positive");
        assert_eq!(
            error.to_string(),
            "Invalid parameter 'output_width' = '0': must be positive"
        );
        assert!(error.source().is_none());
    }

    // Tests run failure messages
    // Verified by swapping cell coordinates in the message
    #[test]
    fn test_run_failure_display() {
        let contradiction = AlgorithmError::Contradiction {
            cell: (4, 7),
            iteration: 12,
        };
        assert_eq!(
            contradiction.to_string(),
            "Contradiction at cell (4, 7) during iteration 12"
        );
        assert_eq!(
            AlgorithmError::AttemptsExhausted { attempts: 3 }.to_string(),
            "All 3 attempts ended in contradiction"
        );
        assert_eq!(
            AlgorithmError::BudgetExceeded { budget: 9 }.to_string(),
            "Iteration budget of 9 exhausted before completion"
        );
        assert_eq!(
            AlgorithmError::IncompleteWave { uncollapsed: 2 }.to_string(),
            "Cannot render an incomplete wave (2 cells not collapsed)"
        );
        assert_eq!(
            invalid_sample(&"empty").to_string(),
            "Invalid sample: empty"
        );
    }

    // Tests only contradictions allow a retry
    // Verified by marking budget exhaustion recoverable
    #[test]
    fn test_recoverable_errors() {
        let contradiction = AlgorithmError::Contradiction {
            cell: (0, 0),
            iteration: 1,
        };
        assert!(contradiction.is_recoverable());
        assert!(!AlgorithmError::BudgetExceeded { budget: 1 }.is_recoverable());
        assert!(!invalid_sample(&"bad").is_recoverable());
    }

    // Tests I/O errors convert and keep their source
    // Verified by dropping the source in the From impl
    #[test]
    fn test_io_error_conversion() {
        let io_error = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let error = AlgorithmError::from(io_error);

        assert!(matches!(error, AlgorithmError::FileSystem { .. }));
        assert!(error.source().is_some());
        assert!(error.to_string().contains("missing"));
    }

    // Tests file system errors report operation and path
    // Verified by printing the operation twice
    #[test]
    fn test_file_system_display() {
        let error = AlgorithmError::FileSystem {
            path: PathBuf::from("out/dir"),
            operation: "create directory",
            source: std::io::Error::other("denied"),
        };
        assert_eq!(
            error.to_string(),
            "File system error during create directory on 'out/dir': denied"
        );
    }
}
