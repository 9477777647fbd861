//! Cardinal neighbor offsets used by the overlapping adjacency model

/// One of the four unit offsets between orthogonally adjacent cells
///
/// Offsets use image coordinates: `x` grows to the right, `y` grows downward.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Offset `(-1, 0)`
    Left,
    /// Offset `(0, -1)`
    Up,
    /// Offset `(1, 0)`
    Right,
    /// Offset `(0, 1)`
    Down,
}

impl Direction {
    /// Number of directions
    pub const COUNT: usize = 4;

    /// All directions in index order
    pub const ALL: [Self; Self::COUNT] = [Self::Left, Self::Up, Self::Right, Self::Down];

    /// Dense index in `0..Direction::COUNT`
    pub const fn index(self) -> usize {
        match self {
            Self::Left => 0,
            Self::Up => 1,
            Self::Right => 2,
            Self::Down => 3,
        }
    }

    /// Offset as `(dx, dy)`
    pub const fn offset(self) -> (isize, isize) {
        match self {
            Self::Left => (-1, 0),
            Self::Up => (0, -1),
            Self::Right => (1, 0),
            Self::Down => (0, 1),
        }
    }

    /// The direction pointing back to the origin
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Up => Self::Down,
            Self::Right => Self::Left,
            Self::Down => Self::Up,
        }
    }
}
