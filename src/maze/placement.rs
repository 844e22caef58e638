//! Monster and energy placement.
//!
//! Both placers share one acceptance rule: a candidate must be a `Path` cell
//! that is neither the start, the goal, nor already taken. Candidates are
//! drawn from the interior (one cell in from the border where the maze is
//! big enough), and each slot gets a bounded number of samples. A slot that
//! runs out of samples is skipped, so a sparse maze simply ends up with
//! fewer monsters or energy cells.

use rustc_hash::FxHashSet;
use smallvec::SmallVec;
use tracing::{debug, warn};

use super::grid::{CellKind, Grid};
use super::monster::{Monster, MonsterId};
use crate::challenge::ChallengeType;
use crate::core::{GameRng, Position};

/// Places monsters and energy cells on open path cells.
#[derive(Clone, Debug)]
pub struct EntityPlacer {
    start: Position,
    goal: Position,
    attempts: u32,
}

impl EntityPlacer {
    /// Placer that keeps `start` and `goal` clear, sampling up to `attempts`
    /// cells per slot.
    #[must_use]
    pub fn new(start: Position, goal: Position, attempts: u32) -> Self {
        Self { start, goal, attempts }
    }

    /// Place up to `count` monsters.
    ///
    /// Topics are shuffled and handed out one each, so the first
    /// `min(count, distinct topics)` monsters never share a topic. Remaining
    /// slots prefer topics that have not been placed yet and only repeat a
    /// topic once every one has been used.
    pub fn place_monsters(
        &self,
        grid: &Grid,
        count: usize,
        types: &[ChallengeType],
        rng: &mut GameRng,
    ) -> Vec<Monster> {
        let mut topics: Vec<ChallengeType> = Vec::with_capacity(types.len());
        for &kind in types {
            if !topics.contains(&kind) {
                topics.push(kind);
            }
        }
        if topics.is_empty() || count == 0 {
            return Vec::new();
        }
        rng.shuffle(&mut topics);

        let mut monsters = Vec::with_capacity(count);
        let mut occupied = FxHashSet::default();
        let mut used = FxHashSet::default();

        for &kind in topics.iter().take(count) {
            if let Some(position) = self.sample_cell(grid, &occupied, rng) {
                occupied.insert(position);
                used.insert(kind);
                monsters.push(Monster::new(MonsterId::new(monsters.len() as u32), position, kind));
            }
        }

        while monsters.len() < count {
            let Some(position) = self.sample_cell(grid, &occupied, rng) else {
                break;
            };

            let unused: SmallVec<[ChallengeType; 8]> =
                topics.iter().copied().filter(|kind| !used.contains(kind)).collect();
            let pool: &[ChallengeType] = if unused.is_empty() { &topics } else { &unused };
            let Some(&kind) = rng.choose(pool) else {
                break;
            };

            occupied.insert(position);
            used.insert(kind);
            monsters.push(Monster::new(MonsterId::new(monsters.len() as u32), position, kind));
        }

        if monsters.len() < count {
            warn!(placed = monsters.len(), requested = count, "monster placement starved");
        } else {
            debug!(placed = monsters.len(), "monsters placed");
        }
        monsters
    }

    /// Turn up to `count` path cells into energy cells, avoiding monsters.
    ///
    /// Already-placed energy cells are excluded explicitly, not only through
    /// their changed cell kind. Returns the positions converted.
    pub fn place_energy(&self, grid: &mut Grid, count: usize, monsters: &[Monster], rng: &mut GameRng) -> Vec<Position> {
        let mut occupied: FxHashSet<Position> = monsters.iter().map(|m| m.position).collect();
        let mut placed = Vec::with_capacity(count);

        for _ in 0..count {
            let Some(position) = self.sample_cell(grid, &occupied, rng) else {
                break;
            };
            grid.set(position, CellKind::Energy);
            occupied.insert(position);
            placed.push(position);
        }

        if placed.len() < count {
            warn!(placed = placed.len(), requested = count, "energy placement starved");
        } else {
            debug!(placed = placed.len(), "energy cells placed");
        }
        placed
    }

    /// Sample candidate cells until one is accepted or attempts run out.
    fn sample_cell(&self, grid: &Grid, occupied: &FxHashSet<Position>, rng: &mut GameRng) -> Option<Position> {
        let (low, high) = sample_bounds(grid.size())?;
        (0..self.attempts).find_map(|_| {
            let candidate = Position::new(rng.gen_range(low..high), rng.gen_range(low..high));
            self.accepts(grid, occupied, candidate).then_some(candidate)
        })
    }

    fn accepts(&self, grid: &Grid, occupied: &FxHashSet<Position>, candidate: Position) -> bool {
        grid.is(candidate, CellKind::Path)
            && candidate != self.start
            && candidate != self.goal
            && !occupied.contains(&candidate)
    }
}

/// Half-open coordinate range candidates are drawn from.
///
/// Mazes of size 5 and up skip the first interior ring next to the border;
/// smaller ones use the whole interior.
fn sample_bounds(size: i32) -> Option<(i32, i32)> {
    if size >= 5 {
        Some((2, size - 2))
    } else if size >= 3 {
        Some((1, size - 1))
    } else {
        None
    }
}
