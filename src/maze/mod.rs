//! Maze construction: the grid, its generator, and entity placement.
//!
//! Generation and placement run once per session start; afterwards only the
//! movement engine touches the grid (collecting energy cells).

pub mod generator;
pub mod grid;
pub mod monster;
pub mod placement;

pub use generator::{GeneratorSettings, MazeGenerator};
pub use grid::{CellKind, Grid};
pub use monster::{Monster, MonsterId};
pub use placement::EntityPlacer;
