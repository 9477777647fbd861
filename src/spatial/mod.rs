//! Spatial data structures and grid manipulation
//!
//! This module contains spatial-related functionality including:
//! - Cardinal directions and their inverses
//! - Periodic and bounded grid topologies
//! - Dihedral symmetry transforms of square blocks

/// Cardinal neighbor directions
pub mod direction;
/// Cell indexing and neighbor lookup
pub mod grid;
/// Rotation and reflection of square pattern blocks
pub mod symmetry;

pub use direction::Direction;
pub use grid::GridTopology;
