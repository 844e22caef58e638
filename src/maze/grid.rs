//! Square cell grid.
//!
//! ## Invariants after generation
//!
//! - Every border cell is `Wall`
//! - Exactly one cell is `Throne`
//! - The start cell is `Path`
//! - Every non-wall cell is 4-connected to the start through non-wall cells

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::collections::VecDeque;

use crate::core::Position;

/// What occupies a cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CellKind {
    #[default]
    Wall,
    Path,
    Energy,
    Throne,
}

impl CellKind {
    /// Anything but a wall can be walked on.
    #[must_use]
    pub const fn is_walkable(self) -> bool {
        !matches!(self, CellKind::Wall)
    }

    const fn glyph(self) -> char {
        match self {
            CellKind::Wall => '#',
            CellKind::Path => '.',
            CellKind::Energy => '*',
            CellKind::Throne => 'T',
        }
    }
}

/// Row-major square grid of cells.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    size: i32,
    cells: Vec<CellKind>,
}

impl Grid {
    /// A grid where every cell is a wall.
    #[must_use]
    pub fn filled(size: i32) -> Self {
        let side = usize::try_from(size).unwrap_or(0);
        Self {
            size: size.max(0),
            cells: vec![CellKind::Wall; side * side],
        }
    }

    /// Side length.
    #[must_use]
    pub fn size(&self) -> i32 {
        self.size
    }

    #[must_use]
    pub fn in_bounds(&self, position: Position) -> bool {
        (0..self.size).contains(&position.x) && (0..self.size).contains(&position.y)
    }

    #[must_use]
    pub fn is_border(&self, position: Position) -> bool {
        self.in_bounds(position)
            && (position.x == 0 || position.y == 0 || position.x == self.size - 1 || position.y == self.size - 1)
    }

    fn index(&self, position: Position) -> Option<usize> {
        if !self.in_bounds(position) {
            return None;
        }
        // Both coordinates are non-negative once in bounds.
        Some((position.y * self.size + position.x) as usize)
    }

    /// Cell at `position`, or `None` out of bounds.
    #[must_use]
    pub fn get(&self, position: Position) -> Option<CellKind> {
        self.index(position).map(|i| self.cells[i])
    }

    /// Overwrite a cell. Out-of-bounds writes are ignored and return false.
    pub fn set(&mut self, position: Position, kind: CellKind) -> bool {
        match self.index(position) {
            Some(i) => {
                self.cells[i] = kind;
                true
            }
            None => false,
        }
    }

    /// True if the cell exists and is of `kind`.
    #[must_use]
    pub fn is(&self, position: Position, kind: CellKind) -> bool {
        self.get(position) == Some(kind)
    }

    #[must_use]
    pub fn is_walkable(&self, position: Position) -> bool {
        self.get(position).is_some_and(CellKind::is_walkable)
    }

    /// In-bounds orthogonal neighbours.
    #[must_use]
    pub fn neighbors(&self, position: Position) -> SmallVec<[Position; 4]> {
        position
            .neighbors4()
            .into_iter()
            .filter(|&p| self.in_bounds(p))
            .collect()
    }

    /// Iterate `(position, kind)` over the whole grid in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Position, CellKind)> + '_ {
        let size = self.size;
        self.cells.iter().enumerate().map(move |(i, &kind)| {
            let i = i as i32;
            (Position::new(i % size, i / size), kind)
        })
    }

    /// Every position holding `kind`.
    pub fn positions_of(&self, kind: CellKind) -> impl Iterator<Item = Position> + '_ {
        self.cells().filter(move |&(_, k)| k == kind).map(|(p, _)| p)
    }

    #[must_use]
    pub fn count(&self, kind: CellKind) -> usize {
        self.cells.iter().filter(|&&k| k == kind).count()
    }

    /// The throne, if exactly one exists.
    #[must_use]
    pub fn throne(&self) -> Option<Position> {
        let mut thrones = self.positions_of(CellKind::Throne);
        let first = thrones.next()?;
        thrones.next().is_none().then_some(first)
    }

    /// All cells reachable from `start` through walkable cells (BFS).
    ///
    /// Empty when `start` itself is not walkable.
    #[must_use]
    pub fn reachable_from(&self, start: Position) -> FxHashSet<Position> {
        let mut seen = FxHashSet::default();
        if !self.is_walkable(start) {
            return seen;
        }

        let mut queue = VecDeque::new();
        seen.insert(start);
        queue.push_back(start);

        while let Some(current) = queue.pop_front() {
            for next in self.neighbors(current) {
                if self.is_walkable(next) && seen.insert(next) {
                    queue.push_back(next);
                }
            }
        }
        seen
    }

    /// True if every walkable cell is reachable from `start`.
    #[must_use]
    pub fn is_connected_from(&self, start: Position) -> bool {
        let reachable = self.reachable_from(start);
        self.cells().filter(|&(_, k)| k.is_walkable()).all(|(p, _)| reachable.contains(&p))
    }

    /// True if every border cell is a wall.
    #[must_use]
    pub fn border_is_walled(&self) -> bool {
        self.cells().filter(|&(p, _)| self.is_border(p)).all(|(_, k)| k == CellKind::Wall)
    }
}

impl std::fmt::Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.cells.chunks(self.size.max(1) as usize) {
            let line: String = row.iter().map(|k| k.glyph()).collect();
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
