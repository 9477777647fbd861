//! Constraint propagation over the wave
//!
//! Removals are queued as `(cell, pattern)` pairs. Draining the queue
//! withdraws the removed pattern's support from each neighbor; a neighbor
//! pattern left without support in some direction is removed in turn. At the
//! fixpoint every admissible pattern of every cell is compatible with at
//! least one admissible pattern of each existing neighbor, which is the same
//! state reached by intersecting each neighbor with the union of patterns
//! compatible with the cell.

use crate::algorithm::wave::Wave;
use crate::analysis::model::OverlappingModel;
use crate::spatial::direction::Direction;

/// Result of draining the propagation queue
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PropagationOutcome {
    /// Every cell still admits at least one pattern
    Stable,
    /// The given cell lost its last pattern
    Contradiction {
        /// Index of the emptied cell
        cell: usize,
    },
}

/// Explicit worklist of pattern removals awaiting their downstream effect
#[derive(Debug, Default)]
pub struct Propagator {
    queue: Vec<(usize, usize)>,
}

impl Propagator {
    /// Create a propagator with an empty queue
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of removals awaiting propagation
    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    /// Whether no removals are waiting
    pub fn is_idle(&self) -> bool {
        self.queue.is_empty()
    }

    /// Remove `pattern` from `cell` and queue the removal
    ///
    /// Returns `true` if the cell is left empty.
    pub fn ban(
        &mut self,
        wave: &mut Wave,
        model: &OverlappingModel,
        cell: usize,
        pattern: usize,
    ) -> bool {
        if wave.remove(cell, pattern, model) {
            self.queue.push((cell, pattern));
        }
        wave.count(cell) == 0
    }

    /// Restrict `cell` to `chosen` and queue every other removal
    ///
    /// # Panics
    ///
    /// Panics if the cell is already collapsed or empty, or if `chosen` is
    /// not admissible there; the observer never selects such cells.
    pub fn collapse(
        &mut self,
        wave: &mut Wave,
        model: &OverlappingModel,
        cell: usize,
        chosen: usize,
    ) -> PropagationOutcome {
        assert!(
            wave.count(cell) > 1,
            "cell {cell} is not in superposition and cannot be collapsed"
        );
        let others: Vec<usize> = wave
            .admissible(cell)
            .map(|set| set.iter().filter(|&pattern| pattern != chosen).collect())
            .unwrap_or_default();
        assert!(
            others.len() + 1 == wave.count(cell),
            "pattern {chosen} is not admissible in cell {cell}"
        );

        for pattern in others {
            self.ban(wave, model, cell, pattern);
        }
        self.propagate(wave, model)
    }

    /// Remove patterns that have no support from an existing neighbor
    ///
    /// Run once on a fresh wave before the first observation so that
    /// patterns which can never be adjacent to anything are excluded
    /// up front.
    pub fn initialize(&mut self, wave: &mut Wave, model: &OverlappingModel) -> PropagationOutcome {
        let topology = wave.topology();
        for cell in 0..wave.cell_count() {
            for pattern in 0..wave.pattern_count() {
                let unsupported = Direction::ALL.into_iter().any(|direction| {
                    topology.neighbor(cell, direction.opposite()).is_some()
                        && wave.support(cell, pattern, direction) == 0
                });
                if unsupported && self.ban(wave, model, cell, pattern) {
                    self.queue.clear();
                    return PropagationOutcome::Contradiction { cell };
                }
            }
        }
        self.propagate(wave, model)
    }

    /// Drain the queue to a fixpoint
    ///
    /// Stops at the first emptied cell and discards the remaining queue.
    pub fn propagate(&mut self, wave: &mut Wave, model: &OverlappingModel) -> PropagationOutcome {
        let topology = wave.topology();
        let compatibility = model.compatibility();

        while let Some((cell, pattern)) = self.queue.pop() {
            for direction in Direction::ALL {
                let Some(neighbor) = topology.neighbor(cell, direction) else {
                    continue;
                };

                for &candidate in compatibility.compatible_with(pattern, direction) {
                    if wave.withdraw_support(neighbor, candidate, direction)
                        && self.ban(wave, model, neighbor, candidate)
                    {
                        self.queue.clear();
                        return PropagationOutcome::Contradiction { cell: neighbor };
                    }
                }
            }
        }

        PropagationOutcome::Stable
    }
}
