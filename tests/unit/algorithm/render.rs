//! Tests for rendering collapsed waves into RGB buffers

#[cfg(test)]
mod tests {
    use crate::{BLACK, WHITE, checkerboard_model, free_model};
    use overlapwfc::AlgorithmError;
    use overlapwfc::algorithm::propagation::{PropagationOutcome, Propagator};
    use overlapwfc::algorithm::render::render;
    use overlapwfc::algorithm::wave::Wave;
    use overlapwfc::analysis::model::OverlappingModel;
    use overlapwfc::spatial::GridTopology;

    fn collapsed_checkerboard(model: &OverlappingModel, width: usize, periodic: bool) -> Wave {
        let mut wave = Wave::new(GridTopology::new(width, width, periodic), model, vec![]);
        let mut propagator = Propagator::new();
        propagator.initialize(&mut wave, model);
        let outcome = propagator.collapse(&mut wave, model, 0, 0);
        assert_eq!(outcome, PropagationOutcome::Stable);
        wave
    }

    // Tests periodic output uses the top-left pixel of each pattern
    // Verified by reading the pattern center instead
    #[test]
    fn test_render_periodic_checkerboard() {
        let model = checkerboard_model();
        let wave = collapsed_checkerboard(&model, 4, true);
        let image = render(&wave, &model, 4, 4).unwrap();

        assert_eq!(image.width(), 4);
        assert_eq!(image.height(), 4);
        assert_eq!(image.data().len(), 4 * 4 * 3);
        for y in 0..4 {
            for x in 0..4 {
                let expected = if (x + y) % 2 == 0 { BLACK } else { WHITE };
                assert_eq!(image.pixel(x, y), Some(expected), "pixel ({x}, {y})");
            }
        }
    }

    // Tests bounded output reads the trailing pixels from edge patterns
    // Verified by clamping offsets to zero at the border
    #[test]
    fn test_render_bounded_checkerboard() {
        let model = checkerboard_model();
        let wave = collapsed_checkerboard(&model, 2, false);
        let image = render(&wave, &model, 3, 3).unwrap();

        for y in 0..3 {
            for x in 0..3 {
                let expected = if (x + y) % 2 == 0 { BLACK } else { WHITE };
                assert_eq!(image.pixel(x, y), Some(expected), "pixel ({x}, {y})");
            }
        }
        assert_eq!(image.pixel(3, 0), None);
    }

    // Tests incomplete waves cannot be rendered
    // Verified by rendering uncollapsed cells with their first pattern
    #[test]
    fn test_render_incomplete_wave() {
        let model = free_model(2);
        let wave = Wave::new(GridTopology::new(3, 3, true), &model, vec![]);

        let result = render(&wave, &model, 3, 3);
        assert!(matches!(
            result,
            Err(AlgorithmError::IncompleteWave { uncollapsed: 9 })
        ));
    }

    // Tests the output must be covered by the wave's patterns
    // Verified by dropping the coverage check
    #[test]
    fn test_render_size_mismatch() {
        let model = checkerboard_model();
        let wave = collapsed_checkerboard(&model, 2, false);

        assert!(matches!(
            render(&wave, &model, 4, 4),
            Err(AlgorithmError::InvalidParameter { .. })
        ));
        assert!(render(&wave, &model, 1, 3).is_err());
    }

    // Tests the buffer can be taken out of the image
    // Verified by returning an empty buffer from into_data
    #[test]
    fn test_into_data() {
        let model = free_model(1);
        let wave = Wave::new(GridTopology::new(2, 1, true), &model, vec![]);
        let image = render(&wave, &model, 2, 1).unwrap();

        assert_eq!(image.into_data(), vec![0, 0, 0, 0, 0, 0]);
    }
}
