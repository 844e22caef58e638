//! Game configuration.
//!
//! Hosts configure the engine at startup with a `GameConfig`:
//! - Maze geometry (size, start, goal)
//! - Population (monster count, energy cells, challenge topics)
//! - Resource caps and the countdown length
//! - `Rewards`: every score/health/energy delta the rules apply
//!
//! `GameConfig::default()` reproduces the classic 15x15 game.

use serde::{Deserialize, Serialize};

use super::error::ConfigError;
use super::position::Position;
use crate::challenge::ChallengeType;

/// Smallest maze that still has two distinct interior cells.
pub const MIN_MAZE_SIZE: i32 = 4;

/// Score, health and energy deltas applied by the rules.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rewards {
    /// Score for a correct answer.
    pub correct_score: u32,
    /// King health restored by a correct answer.
    pub correct_heal: i32,
    /// Score when an ability converts a wrong answer.
    pub ability_save_score: u32,
    /// King health lost on a wrong answer with no ability left.
    pub wrong_damage: i32,
    /// Score lost on a wrong answer with no ability left (floored at 0).
    pub wrong_penalty: u32,
    /// King health lost when the countdown expires.
    pub timeout_damage: i32,
    /// Score for reaching the throne.
    pub throne_score: u32,
    /// Energy for stepping onto an energy cell.
    pub energy_step_gain: i32,
    /// Score for stepping onto an energy cell.
    pub energy_step_score: u32,
    /// King health restored by the special action next to the throne.
    pub special_heal: i32,
    /// Score for the special-action heal.
    pub special_heal_score: u32,
    /// Energy per cell collected by the special action.
    pub special_energy_gain: i32,
    /// Score per cell collected by the special action.
    pub special_energy_score: u32,
}

impl Default for Rewards {
    fn default() -> Self {
        Self {
            correct_score: 100,
            correct_heal: 5,
            ability_save_score: 50,
            wrong_damage: 20,
            wrong_penalty: 50,
            timeout_damage: 10,
            throne_score: 500,
            energy_step_gain: 30,
            energy_step_score: 30,
            special_heal: 10,
            special_heal_score: 50,
            special_energy_gain: 20,
            special_energy_score: 25,
        }
    }
}

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Side length of the square grid, border included.
    pub maze_size: i32,

    /// Player spawn cell.
    pub start: Position,

    /// Throne cell.
    pub goal: Position,

    /// Monsters requested per session.
    pub monster_count: usize,

    /// Energy cells requested per session.
    pub energy_cells: usize,

    /// Random samples tried per placement slot before giving up.
    pub placement_attempts: u32,

    /// Topics monsters are drawn from.
    pub challenge_types: Vec<ChallengeType>,

    /// King health at session start, and its ceiling.
    pub max_king_health: i32,

    /// Energy ceiling.
    pub max_energy: i32,

    /// Energy at session start.
    pub initial_energy: i32,

    /// Seconds on the challenge countdown.
    pub challenge_seconds: u32,

    /// Ticks a resolved challenge stays on screen before play resumes.
    pub resolve_display_ticks: u32,

    /// How long toasts stay up, in milliseconds.
    pub notify_ms: u64,

    pub rewards: Rewards,

    /// Seed for the controller's RNG.
    pub seed: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            maze_size: 15,
            start: Position::new(1, 1),
            goal: Position::new(13, 13),
            monster_count: 7,
            energy_cells: 5,
            placement_attempts: 100,
            challenge_types: ChallengeType::ALL.to_vec(),
            max_king_health: 100,
            max_energy: 100,
            initial_energy: 100,
            challenge_seconds: 15,
            resolve_display_ticks: 2,
            notify_ms: 2000,
            rewards: Rewards::default(),
            seed: 42,
        }
    }
}

impl GameConfig {
    /// Default configuration with a specific seed.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::default().with_seed(seed)
    }

    /// Set the maze size, moving the goal to the opposite interior corner.
    #[must_use]
    pub fn with_maze_size(mut self, size: i32) -> Self {
        self.maze_size = size;
        self.goal = Position::new(size - 2, size - 2);
        self
    }

    #[must_use]
    pub fn with_start(mut self, start: Position) -> Self {
        self.start = start;
        self
    }

    #[must_use]
    pub fn with_goal(mut self, goal: Position) -> Self {
        self.goal = goal;
        self
    }

    #[must_use]
    pub fn with_monster_count(mut self, count: usize) -> Self {
        self.monster_count = count;
        self
    }

    #[must_use]
    pub fn with_energy_cells(mut self, count: usize) -> Self {
        self.energy_cells = count;
        self
    }

    #[must_use]
    pub fn with_challenge_types(mut self, types: Vec<ChallengeType>) -> Self {
        self.challenge_types = types;
        self
    }

    #[must_use]
    pub fn with_challenge_seconds(mut self, seconds: u32) -> Self {
        self.challenge_seconds = seconds;
        self
    }

    #[must_use]
    pub fn with_resolve_display_ticks(mut self, ticks: u32) -> Self {
        self.resolve_display_ticks = ticks;
        self
    }

    #[must_use]
    pub fn with_rewards(mut self, rewards: Rewards) -> Self {
        self.rewards = rewards;
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Check the configuration can produce a playable session.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.maze_size < MIN_MAZE_SIZE {
            return Err(ConfigError::MazeTooSmall {
                size: self.maze_size,
                min: MIN_MAZE_SIZE,
            });
        }

        for (which, position) in [("start", self.start), ("goal", self.goal)] {
            if !self.is_interior(position) {
                return Err(ConfigError::NotInterior {
                    which,
                    position,
                    size: self.maze_size,
                });
            }
        }

        if self.start == self.goal {
            return Err(ConfigError::StartIsGoal(self.start));
        }
        if self.challenge_types.is_empty() {
            return Err(ConfigError::NoChallengeTypes);
        }
        if self.challenge_seconds == 0 {
            return Err(ConfigError::ZeroCountdown);
        }
        if self.max_king_health <= 0 {
            return Err(ConfigError::NotPositive {
                field: "max_king_health",
                value: self.max_king_health,
            });
        }
        for (field, value) in [("max_energy", self.max_energy), ("initial_energy", self.initial_energy)] {
            if value < 0 {
                return Err(ConfigError::Negative { field, value });
            }
        }
        if self.initial_energy > self.max_energy {
            return Err(ConfigError::AboveMaximum {
                field: "initial_energy",
                value: self.initial_energy.unsigned_abs(),
                max: self.max_energy.unsigned_abs(),
            });
        }
        Ok(())
    }

    /// True for cells strictly inside the border.
    #[must_use]
    pub fn is_interior(&self, position: Position) -> bool {
        let max = self.maze_size - 2;
        (1..=max).contains(&position.x) && (1..=max).contains(&position.y)
    }
}
