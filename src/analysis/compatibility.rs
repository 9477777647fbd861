//! Precomputed adjacency relation between overlapping patterns
//!
//! Pattern `q` is compatible with pattern `p` in direction `d` when `q`,
//! placed one pixel away from `p` along `d`, agrees with `p` on every pixel
//! the two blocks share. The relation is stored flat, one entry per
//! `(p, d)`, so propagation answers "which patterns may sit next to `p`"
//! without touching pixel data.

use crate::algorithm::bitset::PatternSet;
use crate::analysis::patterns::{Pattern, PatternCatalog};
use crate::spatial::direction::Direction;

#[derive(Clone, Debug)]
struct Entry {
    members: PatternSet,
    ids: Vec<usize>,
}

/// Flat lookup of compatible patterns indexed by `(pattern, direction)`
#[derive(Clone, Debug)]
pub struct CompatibilityTable {
    pattern_count: usize,
    entries: Vec<Entry>,
}

impl CompatibilityTable {
    /// Compare every ordered pattern pair in every direction
    pub fn build(catalog: &PatternCatalog) -> Self {
        let patterns = catalog.patterns();
        let pattern_count = patterns.len();
        let mut entries = Vec::with_capacity(pattern_count * Direction::COUNT);

        for p in patterns {
            for direction in Direction::ALL {
                let mut members = PatternSet::new(pattern_count);
                let mut ids = Vec::new();
                for (q_id, q) in patterns.iter().enumerate() {
                    if agrees(p, q, direction) {
                        members.insert(q_id);
                        ids.push(q_id);
                    }
                }
                entries.push(Entry { members, ids });
            }
        }

        let pairs: usize = entries.iter().map(|entry| entry.ids.len()).sum();
        log::debug!(
            "compatibility table holds {pairs} directed pairs for {pattern_count} patterns"
        );

        Self {
            pattern_count,
            entries,
        }
    }

    /// Number of patterns the table covers
    pub const fn pattern_count(&self) -> usize {
        self.pattern_count
    }

    fn entry(&self, pattern: usize, direction: Direction) -> Option<&Entry> {
        self.entries.get(pattern * Direction::COUNT + direction.index())
    }

    /// Whether `q` may sit next to `p` in `direction`
    pub fn compatible(&self, p: usize, q: usize, direction: Direction) -> bool {
        self.support(p, direction)
            .is_some_and(|members| members.contains(q))
    }

    /// Ids of patterns that may sit next to `pattern` in `direction`
    pub fn compatible_with(&self, pattern: usize, direction: Direction) -> &[usize] {
        self.entry(pattern, direction)
            .map(|entry| entry.ids.as_slice())
            .unwrap_or_default()
    }

    /// Set of patterns that may sit next to `pattern` in `direction`
    pub fn support(&self, pattern: usize, direction: Direction) -> Option<&PatternSet> {
        self.entry(pattern, direction).map(|entry| &entry.members)
    }

    /// Number of patterns that may sit next to `pattern` in `direction`
    pub fn count(&self, pattern: usize, direction: Direction) -> usize {
        self.compatible_with(pattern, direction).len()
    }
}

/// Pixel-exact agreement of `q`, shifted by `direction`, with `p`
pub fn agrees(p: &Pattern, q: &Pattern, direction: Direction) -> bool {
    let n = p.size() as isize;
    let (dx, dy) = direction.offset();

    let x_range = dx.max(0)..(n + dx).min(n);
    let mut y_range = dy.max(0)..(n + dy).min(n);

    y_range.all(|y| {
        x_range.clone().all(|x| {
            p.pixel(x as usize, y as usize) == q.pixel((x - dx) as usize, (y - dy) as usize)
        })
    })
}
