//! Maze generation.
//!
//! Generation runs in four passes over an all-wall grid:
//!
//! 1. **Spine**: a monotone walk from start to goal. Each step strictly
//!    reduces the Manhattan distance, so it terminates and connects both ends.
//! 2. **Branches**: 3-5 short random walks. Roots are sampled from the spine,
//!    which lies inside the start/goal bounding box, so every branch touches
//!    the connected area.
//! 3. **Side rooms**: even-indexed interior walls open with probability 0.4,
//!    but only next to an existing path, so no isolated pocket can appear.
//! 4. **Anchors**: start forced to `Path`, goal forced to `Throne`.
//!
//! Every pass only ever opens cells that touch an already-open cell, which is
//! what keeps the whole open area reachable from the start.

use tracing::debug;

use super::grid::{CellKind, Grid};
use crate::core::{Direction, GameRng, Position};

/// Tunables for the carving passes.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeneratorSettings {
    /// Chance the spine steps horizontally while both axes still differ.
    pub horizontal_bias: f64,
    /// Inclusive range of branch counts.
    pub branch_count: (usize, usize),
    /// Inclusive range of branch lengths.
    pub branch_length: (usize, usize),
    /// Per-step chance a branch picks a new direction.
    pub branch_turn_chance: f64,
    /// Chance an eligible even-indexed wall becomes a path.
    pub side_room_chance: f64,
}

impl Default for GeneratorSettings {
    fn default() -> Self {
        Self {
            horizontal_bias: 0.7,
            branch_count: (3, 5),
            branch_length: (3, 6),
            branch_turn_chance: 0.3,
            side_room_chance: 0.4,
        }
    }
}

/// Builds grids with a guaranteed start-to-goal route.
#[derive(Clone, Debug, Default)]
pub struct MazeGenerator {
    settings: GeneratorSettings,
}

impl MazeGenerator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_settings(settings: GeneratorSettings) -> Self {
        Self { settings }
    }

    /// Generate a `size`x`size` grid.
    ///
    /// `start` and `goal` are clamped into the interior, so the border stays
    /// walled even for out-of-range input.
    pub fn generate(&self, size: i32, start: Position, goal: Position, rng: &mut GameRng) -> Grid {
        let mut grid = Grid::filled(size);
        if size < 3 {
            return grid;
        }

        let start = clamp_interior(start, size);
        let goal = clamp_interior(goal, size);

        let spine = self.carve_spine(&mut grid, start, goal, rng);
        self.carve_branches(&mut grid, &spine, rng);
        self.open_side_rooms(&mut grid, rng);

        grid.set(start, CellKind::Path);
        grid.set(goal, CellKind::Throne);

        debug!(
            size,
            spine_len = spine.len(),
            open_cells = size as usize * size as usize - grid.count(CellKind::Wall),
            "maze generated"
        );
        grid
    }

    /// Monotone walk from `start` to `goal`. Returns the cells it carved.
    fn carve_spine(&self, grid: &mut Grid, start: Position, goal: Position, rng: &mut GameRng) -> Vec<Position> {
        let step_x = (goal.x - start.x).signum();
        let step_y = (goal.y - start.y).signum();

        let mut current = start;
        let mut spine = vec![current];
        grid.set(current, CellKind::Path);

        while current != goal {
            let horizontal = current.x != goal.x
                && (current.y == goal.y || rng.gen_bool(self.settings.horizontal_bias));
            current = if horizontal {
                current.offset(step_x, 0)
            } else {
                current.offset(0, step_y)
            };
            grid.set(current, CellKind::Path);
            spine.push(current);
        }
        spine
    }

    /// Short random walks rooted on spine cells.
    fn carve_branches(&self, grid: &mut Grid, spine: &[Position], rng: &mut GameRng) {
        let (min_count, max_count) = self.settings.branch_count;
        let (min_len, max_len) = self.settings.branch_length;
        let branches = rng.gen_range_usize(min_count..max_count + 1);

        for _ in 0..branches {
            let Some(&root) = rng.choose(spine) else {
                return;
            };
            let length = rng.gen_range_usize(min_len..max_len + 1);
            self.carve_branch(grid, root, length, rng);
        }
    }

    fn carve_branch(&self, grid: &mut Grid, root: Position, length: usize, rng: &mut GameRng) {
        let size = grid.size();
        let mut current = root;
        let mut direction = random_direction(rng);

        for _ in 0..length {
            grid.set(current, CellKind::Path);

            let next = current.step(direction);
            if (1..size - 1).contains(&next.x) && (1..size - 1).contains(&next.y) {
                current = next;
            }

            if rng.gen_bool(self.settings.branch_turn_chance) {
                direction = random_direction(rng);
            }
        }
    }

    /// Open even-indexed interior walls that touch an existing path.
    fn open_side_rooms(&self, grid: &mut Grid, rng: &mut GameRng) {
        let size = grid.size();
        for y in (2..size - 2).step_by(2) {
            for x in (2..size - 2).step_by(2) {
                let cell = Position::new(x, y);
                if !grid.is(cell, CellKind::Wall) {
                    continue;
                }
                let touches_path = cell.neighbors4().into_iter().any(|n| grid.is(n, CellKind::Path));
                if touches_path && rng.gen_bool(self.settings.side_room_chance) {
                    grid.set(cell, CellKind::Path);
                }
            }
        }
    }
}

fn random_direction(rng: &mut GameRng) -> Direction {
    Direction::ALL[rng.gen_range_usize(0..Direction::ALL.len())]
}

fn clamp_interior(position: Position, size: i32) -> Position {
    Position::new(position.x.clamp(1, size - 2), position.y.clamp(1, size - 2))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn generate(seed: u64, size: i32) -> Grid {
        let mut rng = GameRng::new(seed);
        MazeGenerator::new().generate(size, Position::new(1, 1), Position::new(size - 2, size - 2), &mut rng)
    }

    #[test]
    fn test_default_maze_invariants() {
        for seed in 0..50 {
            let grid = generate(seed, 15);
            assert!(grid.border_is_walled(), "seed {seed}: border breached");
            assert_eq!(grid.throne(), Some(Position::new(13, 13)), "seed {seed}");
            assert!(grid.is(Position::new(1, 1), CellKind::Path), "seed {seed}");
            assert!(grid.is_connected_from(Position::new(1, 1)), "seed {seed}: pocket found");
        }
    }

    #[test]
    fn test_deterministic_for_seed() {
        assert_eq!(generate(11, 15), generate(11, 15));
        assert_ne!(generate(11, 15), generate(12, 15));
    }

    #[test]
    fn test_spine_reaches_goal_in_reverse_direction() {
        let mut rng = GameRng::new(5);
        let grid = MazeGenerator::new().generate(9, Position::new(7, 7), Position::new(1, 2), &mut rng);
        assert_eq!(grid.throne(), Some(Position::new(1, 2)));
        assert!(grid.reachable_from(Position::new(7, 7)).contains(&Position::new(1, 2)));
    }

    #[test]
    fn test_tiny_grids_terminate() {
        for size in 0..5 {
            let grid = generate(3, size);
            assert_eq!(grid.size(), size.max(0));
            assert!(grid.border_is_walled());
        }
    }

    #[test]
    fn test_out_of_range_anchors_are_clamped() {
        let mut rng = GameRng::new(8);
        let grid = MazeGenerator::new().generate(7, Position::new(0, 0), Position::new(20, 20), &mut rng);
        assert!(grid.border_is_walled());
        assert_eq!(grid.throne(), Some(Position::new(5, 5)));
        assert!(grid.is_connected_from(Position::new(1, 1)));
    }

    #[test]
    fn test_straight_spine_without_bias() {
        let settings = GeneratorSettings {
            horizontal_bias: 1.0,
            branch_count: (0, 0),
            side_room_chance: 0.0,
            ..GeneratorSettings::default()
        };
        let mut rng = GameRng::new(1);
        let grid = MazeGenerator::with_settings(settings).generate(7, Position::new(1, 1), Position::new(5, 5), &mut rng);

        // Right along row 1, then down column 5
        assert_eq!(grid.count(CellKind::Path) + grid.count(CellKind::Throne), 9);
        for x in 1..=5 {
            assert!(grid.is_walkable(Position::new(x, 1)));
        }
        for y in 1..=5 {
            assert!(grid.is_walkable(Position::new(5, y)));
        }
    }
}
