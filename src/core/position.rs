//! Grid coordinates and cardinal directions.
//!
//! Coordinates are signed so that a step off the grid edge produces a
//! negative value the grid can reject, rather than wrapping.

use serde::{Deserialize, Serialize};

/// A cell coordinate. `x` grows right, `y` grows down.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    /// Create a new position.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Position one step in `direction`.
    #[must_use]
    pub const fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self::new(self.x + dx, self.y + dy)
    }

    /// Position offset by an arbitrary delta.
    #[must_use]
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }

    /// Manhattan (4-directional) distance.
    #[must_use]
    pub const fn manhattan(self, other: Self) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }

    /// The four orthogonal neighbours, in `Direction::ALL` order.
    #[must_use]
    pub fn neighbors4(self) -> [Self; 4] {
        Direction::ALL.map(|d| self.step(d))
    }

    /// The eight surrounding cells (orthogonal and diagonal).
    pub fn surrounding8(self) -> impl Iterator<Item = Self> {
        (-1..=1)
            .flat_map(move |dy| (-1..=1).map(move |dx| (dx, dy)))
            .filter(|&(dx, dy)| dx != 0 || dy != 0)
            .map(move |(dx, dy)| self.offset(dx, dy))
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl From<(i32, i32)> for Position {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x, y)
    }
}

/// One of the four cardinal unit moves.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// All directions, in the order random walks index them.
    pub const ALL: [Direction; 4] = [Direction::Up, Direction::Down, Direction::Left, Direction::Right];

    /// Unit vector for this direction.
    #[must_use]
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// Map a keyboard key to a direction (arrows and WASD).
    ///
    /// ```
    /// use cyber_maze::core::Direction;
    ///
    /// assert_eq!(Direction::from_key("ArrowUp"), Some(Direction::Up));
    /// assert_eq!(Direction::from_key("D"), Some(Direction::Right));
    /// assert_eq!(Direction::from_key(" "), None);
    /// ```
    #[must_use]
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "ArrowUp" | "w" | "W" => Some(Direction::Up),
            "ArrowDown" | "s" | "S" => Some(Direction::Down),
            "ArrowLeft" | "a" | "A" => Some(Direction::Left),
            "ArrowRight" | "d" | "D" => Some(Direction::Right),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step() {
        let p = Position::new(3, 3);
        assert_eq!(p.step(Direction::Up), Position::new(3, 2));
        assert_eq!(p.step(Direction::Down), Position::new(3, 4));
        assert_eq!(p.step(Direction::Left), Position::new(2, 3));
        assert_eq!(p.step(Direction::Right), Position::new(4, 3));
    }

    #[test]
    fn test_step_off_origin_goes_negative() {
        assert_eq!(Position::new(0, 0).step(Direction::Left), Position::new(-1, 0));
    }

    #[test]
    fn test_manhattan() {
        assert_eq!(Position::new(1, 1).manhattan(Position::new(13, 13)), 24);
        assert_eq!(Position::new(5, 2).manhattan(Position::new(4, 2)), 1);
        assert_eq!(Position::new(2, 2).manhattan(Position::new(2, 2)), 0);
    }

    #[test]
    fn test_surrounding8() {
        let cells: Vec<_> = Position::new(5, 5).surrounding8().collect();
        assert_eq!(cells.len(), 8);
        assert!(!cells.contains(&Position::new(5, 5)));
        assert!(cells.contains(&Position::new(4, 4)));
        assert!(cells.contains(&Position::new(6, 6)));
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Position::new(2, 7)), "(2, 7)");
    }
}
