//! Tests for cardinal directions and their offsets

#[cfg(test)]
mod tests {
    use overlapwfc::spatial::Direction;
    use std::collections::HashSet;

    // Tests opposite is an involution that negates the offset
    // Verified by mapping Left to Up in opposite
    #[test]
    fn test_opposite_negates_offset() {
        for direction in Direction::ALL {
            let (dx, dy) = direction.offset();
            let (ox, oy) = direction.opposite().offset();
            assert_eq!((dx + ox, dy + oy), (0, 0), "{direction:?}");
            assert_eq!(direction.opposite().opposite(), direction);
            assert_ne!(direction.opposite(), direction);
        }
    }

    // Tests indices are dense and follow the ALL order
    // Verified by swapping two indices
    #[test]
    fn test_indices_dense() {
        let indices: HashSet<usize> = Direction::ALL.iter().map(|d| d.index()).collect();
        assert_eq!(indices.len(), Direction::COUNT);
        for (position, direction) in Direction::ALL.iter().enumerate() {
            assert_eq!(direction.index(), position);
        }
    }

    // Tests offsets use image coordinates with y growing downward
    // Verified by flipping the sign of Up
    #[test]
    fn test_offsets_image_coordinates() {
        assert_eq!(Direction::Left.offset(), (-1, 0));
        assert_eq!(Direction::Up.offset(), (0, -1));
        assert_eq!(Direction::Right.offset(), (1, 0));
        assert_eq!(Direction::Down.offset(), (0, 1));
    }
}
