//! Mutable search state of one synthesis attempt
//!
//! Every cell holds the set of patterns still admissible there together with
//! cached aggregates (count, weight sums, entropy) so the observer can rank
//! cells without rescanning their sets. Per cell, pattern and direction a
//! support counter records how many admissible patterns of the neighbor
//! lying opposite that direction still permit the pattern.

use crate::algorithm::bitset::PatternSet;
use crate::analysis::model::OverlappingModel;
use crate::math::entropy::entropy_from_sums;
use crate::spatial::direction::Direction;
use crate::spatial::grid::GridTopology;

/// Grid of superposed cells
#[derive(Clone, Debug)]
pub struct Wave {
    topology: GridTopology,
    pattern_count: usize,
    admissible: Vec<PatternSet>,
    counts: Vec<usize>,
    weight_sums: Vec<f64>,
    weight_log_weight_sums: Vec<f64>,
    entropies: Vec<f64>,
    noise: Vec<f64>,
    /// Indexed by `cell * pattern_count + pattern`, then by direction index
    support: Vec<[usize; Direction::COUNT]>,
    collapsed_cells: usize,
}

impl Wave {
    /// Create a wave where every cell admits every pattern
    ///
    /// `noise` holds one entropy perturbation per cell; missing entries
    /// count as zero.
    pub fn new(topology: GridTopology, model: &OverlappingModel, noise: Vec<f64>) -> Self {
        let cell_count = topology.cell_count();
        let pattern_count = model.pattern_count();

        let total_weight: f64 = model.weights().iter().sum();
        let total_weight_log_weight: f64 = model.weight_log_weights().iter().sum();
        let initial_entropy = entropy_from_sums(total_weight, total_weight_log_weight);

        let compatibility = model.compatibility();
        let pattern_support: Vec<[usize; Direction::COUNT]> = (0..pattern_count)
            .map(|pattern| {
                Direction::ALL.map(|direction| compatibility.count(pattern, direction.opposite()))
            })
            .collect();

        let mut support = Vec::with_capacity(cell_count * pattern_count);
        for _ in 0..cell_count {
            support.extend_from_slice(&pattern_support);
        }

        let collapsed_cells = if pattern_count == 1 { cell_count } else { 0 };

        Self {
            topology,
            pattern_count,
            admissible: vec![PatternSet::all(pattern_count); cell_count],
            counts: vec![pattern_count; cell_count],
            weight_sums: vec![total_weight; cell_count],
            weight_log_weight_sums: vec![total_weight_log_weight; cell_count],
            entropies: vec![initial_entropy; cell_count],
            noise,
            support,
            collapsed_cells,
        }
    }

    /// Shape and edge behavior of the grid
    pub const fn topology(&self) -> GridTopology {
        self.topology
    }

    /// Number of cells
    pub fn cell_count(&self) -> usize {
        self.counts.len()
    }

    /// Number of patterns in the model
    pub const fn pattern_count(&self) -> usize {
        self.pattern_count
    }

    /// Patterns still admissible in a cell
    pub fn admissible(&self, cell: usize) -> Option<&PatternSet> {
        self.admissible.get(cell)
    }

    /// Number of admissible patterns in a cell
    pub fn count(&self, cell: usize) -> usize {
        self.counts.get(cell).copied().unwrap_or_default()
    }

    /// Weighted Shannon entropy of a cell
    pub fn entropy(&self, cell: usize) -> f64 {
        self.entropies.get(cell).copied().unwrap_or_default()
    }

    /// Random perturbation used to order cells of equal entropy
    pub fn noise(&self, cell: usize) -> f64 {
        self.noise.get(cell).copied().unwrap_or_default()
    }

    /// Whether a cell holds exactly one pattern
    pub fn is_collapsed(&self, cell: usize) -> bool {
        self.count(cell) == 1
    }

    /// The single pattern of a collapsed cell
    pub fn collapsed_pattern(&self, cell: usize) -> Option<usize> {
        if self.is_collapsed(cell) {
            self.admissible(cell).and_then(PatternSet::first)
        } else {
            None
        }
    }

    /// Number of cells holding exactly one pattern
    pub const fn collapsed_cells(&self) -> usize {
        self.collapsed_cells
    }

    /// Whether every cell holds exactly one pattern
    pub fn is_fully_collapsed(&self) -> bool {
        self.collapsed_cells == self.cell_count()
    }

    /// Remaining support of `pattern` in `cell` from the neighbor opposite `direction`
    pub fn support(&self, cell: usize, pattern: usize, direction: Direction) -> usize {
        self.support
            .get(cell * self.pattern_count + pattern)
            .and_then(|counters| counters.get(direction.index()))
            .copied()
            .unwrap_or_default()
    }

    /// Withdraw one unit of support, returning whether it just ran out
    ///
    /// Counters that are already zero, including those of removed
    /// patterns, stay at zero and report `false`.
    pub fn withdraw_support(&mut self, cell: usize, pattern: usize, direction: Direction) -> bool {
        let Some(counter) = self
            .support
            .get_mut(cell * self.pattern_count + pattern)
            .and_then(|counters| counters.get_mut(direction.index()))
        else {
            return false;
        };

        if *counter == 0 {
            return false;
        }
        *counter -= 1;
        *counter == 0
    }

    /// Remove a pattern from a cell and refresh the cached aggregates
    ///
    /// Returns `false` when the pattern was not admissible.
    pub fn remove(&mut self, cell: usize, pattern: usize, model: &OverlappingModel) -> bool {
        let removed = self
            .admissible
            .get_mut(cell)
            .is_some_and(|set| set.remove(pattern));
        if !removed {
            return false;
        }

        if let Some(counters) = self.support.get_mut(cell * self.pattern_count + pattern) {
            *counters = [0; Direction::COUNT];
        }

        let weight = model.weights().get(pattern).copied().unwrap_or_default();
        let weight_log_weight = model
            .weight_log_weights()
            .get(pattern)
            .copied()
            .unwrap_or_default();

        if let Some(count) = self.counts.get_mut(cell) {
            *count -= 1;
            match *count {
                1 => self.collapsed_cells += 1,
                0 => self.collapsed_cells -= 1,
                _ => {}
            }
        }

        let count = self.count(cell);
        if let (Some(sum), Some(log_sum), Some(entropy)) = (
            self.weight_sums.get_mut(cell),
            self.weight_log_weight_sums.get_mut(cell),
            self.entropies.get_mut(cell),
        ) {
            *sum -= weight;
            *log_sum -= weight_log_weight;
            *entropy = if count > 1 {
                entropy_from_sums(*sum, *log_sum)
            } else {
                0.0
            };
        }

        true
    }
}
