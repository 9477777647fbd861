//! Mathematical utilities for the algorithm

/// Weighted Shannon entropy used to rank wave cells
pub mod entropy;
