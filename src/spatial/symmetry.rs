//! Dihedral transforms of square pattern blocks
//!
//! The eight symmetries of a square are numbered so that indices `0..4` are
//! the clockwise rotations by 0°, 90°, 180° and 270°, and index `k + 4` is the
//! horizontal reflection applied after rotation `k`.

use ndarray::Array2;

/// Index of a dihedral transform, in `0..8`
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Symmetry(u8);

impl Symmetry {
    /// The untransformed block
    pub const IDENTITY: Self = Self(0);

    /// Number of distinct transforms
    pub const COUNT: u8 = 8;

    /// Dense index in `0..8`
    pub const fn index(self) -> u8 {
        self.0
    }

    /// Number of clockwise quarter turns before any reflection
    pub const fn quarter_turns(self) -> u8 {
        self.0 % 4
    }

    /// Whether the transform includes a horizontal reflection
    pub const fn is_reflection(self) -> bool {
        self.0 >= 4
    }

    /// Apply this transform to a square block
    pub fn apply(self, block: &Array2<usize>) -> Array2<usize> {
        let mut result = block.clone();
        for _ in 0..self.quarter_turns() {
            result = rotate_90(&result);
        }
        if self.is_reflection() {
            result = reflect(&result);
        }
        result
    }
}

/// Rotate a square block 90° clockwise
pub fn rotate_90(block: &Array2<usize>) -> Array2<usize> {
    let (n, _) = block.dim();
    Array2::from_shape_fn((n, n), |(i, j)| {
        block.get((n - 1 - j, i)).copied().unwrap_or_default()
    })
}

/// Mirror a square block left to right
pub fn reflect(block: &Array2<usize>) -> Array2<usize> {
    let (n, _) = block.dim();
    Array2::from_shape_fn((n, n), |(i, j)| {
        block.get((i, n - 1 - j)).copied().unwrap_or_default()
    })
}

/// Generate the enabled symmetry variants of a block
///
/// The identity comes first, followed by the three rotations when
/// `include_rotations` is set. With `include_reflections`, the reflection of
/// every variant produced so far is appended. Without rotations that yields
/// only the left-right mirror, so the top-bottom mirror (index 6) is added
/// as well. Variants that happen to be equal are all returned; callers count
/// them as separate occurrences.
pub fn variants(
    block: &Array2<usize>,
    include_rotations: bool,
    include_reflections: bool,
) -> Vec<(Symmetry, Array2<usize>)> {
    let mut transforms = vec![(Symmetry::IDENTITY, block.clone())];

    if include_rotations {
        for turns in 1..4 {
            transforms.push((Symmetry(turns), Symmetry(turns).apply(block)));
        }
    }

    if include_reflections {
        let rotated_count = transforms.len();
        for i in 0..rotated_count {
            if let Some((symmetry, transform)) = transforms.get(i) {
                let mirrored = Symmetry(symmetry.0 + 4);
                let reflected = reflect(transform);
                transforms.push((mirrored, reflected));
            }
        }
        if !include_rotations {
            let flipped = Symmetry(6);
            transforms.push((flipped, flipped.apply(block)));
        }
    }

    transforms
}
