//! Sample analysis: palette conversion, pattern extraction and adjacency

/// Adjacency relation between overlapping patterns
pub mod compatibility;
/// Immutable model shared by synthesis runs
pub mod model;
/// Pattern extraction with symmetry expansion
pub mod patterns;
/// Sample validation and palette conversion
pub mod sample;
