use crate::algorithm::wave::Wave;
use crate::analysis::model::OverlappingModel;
use rand::{Rng, SeedableRng, rngs::StdRng};

/// Seeded random selector for reproducible stochastic choices
///
/// Owned by a single run; no process-wide randomness is involved.
#[derive(Clone, Debug)]
pub struct RandomSelector {
    rng: StdRng,
}

impl RandomSelector {
    /// Create a deterministic random selector
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Generic weighted random selection
    ///
    /// Returns index into weights array using cumulative distribution
    pub fn weighted_choice(&mut self, weights: &[f64]) -> usize {
        let total: f64 = weights.iter().sum();
        if total <= 0.0 {
            return 0;
        }

        let mut rand_val = self.rng.random::<f64>() * total;
        for (i, &weight) in weights.iter().enumerate() {
            rand_val -= weight;
            if rand_val <= 0.0 {
                return i;
            }
        }
        weights.len().saturating_sub(1)
    }

    /// Uniform value in `[0, scale)`
    pub fn noise(&mut self, scale: f64) -> f64 {
        self.rng.random::<f64>() * scale
    }
}

/// What the observer found when scanning the wave
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Observation {
    /// The uncollapsed cell with minimum perturbed entropy
    Cell(usize),
    /// No cell is left in superposition
    Collapsed,
    /// A cell with no admissible pattern was found
    Contradiction(usize),
}

/// Find the next cell to collapse
///
/// Ranks uncollapsed cells by entropy plus their fixed perturbation; exact
/// ties keep the lowest cell index.
pub fn observe(wave: &Wave) -> Observation {
    let mut best: Option<(usize, f64)> = None;

    for cell in 0..wave.cell_count() {
        match wave.count(cell) {
            0 => return Observation::Contradiction(cell),
            1 => {}
            _ => {
                let score = wave.entropy(cell) + wave.noise(cell);
                if best.is_none_or(|(_, lowest)| score < lowest) {
                    best = Some((cell, score));
                }
            }
        }
    }

    best.map_or(Observation::Collapsed, |(cell, _)| Observation::Cell(cell))
}

/// Sample one admissible pattern of `cell` proportionally to its frequency
///
/// Returns `None` if the cell admits nothing.
pub fn choose_pattern(
    wave: &Wave,
    cell: usize,
    model: &OverlappingModel,
    selector: &mut RandomSelector,
) -> Option<usize> {
    let candidates = wave.admissible(cell)?.to_vec();
    let weights: Vec<f64> = candidates
        .iter()
        .map(|&pattern| model.weights().get(pattern).copied().unwrap_or_default())
        .collect();

    let choice = selector.weighted_choice(&weights);
    candidates.get(choice).copied()
}
