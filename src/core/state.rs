//! Session state.
//!
//! ## GameState
//!
//! The complete mutable record of one running session:
//! - Resources: score, king health, energy, defeated count
//! - Board: grid, player and king positions, monsters
//! - Challenge binding and its countdown slot
//! - Input gate (`game_active`) and terminal outcome
//! - Event history
//!
//! A new `GameState` is built for every session start and discarded on
//! return to the menu. All mutation goes through the movement and challenge
//! engines; the helpers here only enforce clamping.

use im::Vector;
use serde::{Deserialize, Serialize};
use tracing::info;

use super::character::{Character, CharacterId};
use super::config::GameConfig;
use super::event::{SessionEvent, SessionOutcome};
use super::position::Position;
use super::rng::GameRng;
use crate::challenge::{ActiveChallenge, CountdownSlot};
use crate::maze::{EntityPlacer, Grid, MazeGenerator, Monster, MonsterId};

/// Mutable record of a running session.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct GameState {
    // === Resources ===
    /// Never negative; penalties floor at zero.
    pub score: u32,

    /// Clamped to `0..=max_king_health`.
    pub king_health: i32,

    /// Clamped to `0..=max_energy`.
    pub energy: i32,

    pub defeated_count: u32,

    // === Board ===
    pub player: Position,
    pub king: Position,
    pub start: Position,
    pub grid: Grid,

    /// Placed once at session start; defeated monsters stay in the list.
    pub monsters: Vec<Monster>,

    /// Energy cells placed at session start (collected ones included).
    pub energy_cells: Vec<Position>,

    pub character: Character,

    // === Flow ===
    /// Gates movement and the special action.
    pub game_active: bool,

    /// The challenge currently bound, open or showing its result.
    pub challenge: Option<ActiveChallenge>,

    /// Countdown for the open challenge.
    pub countdown: CountdownSlot,

    /// Set when a resolution drops king health to zero; applied on close.
    pub game_over_pending: bool,

    pub outcome: Option<SessionOutcome>,

    pub history: Vector<SessionEvent>,

    max_king_health: i32,
    max_energy: i32,
}

impl GameState {
    /// Build a session around an existing grid and monster list.
    #[must_use]
    pub fn new(config: &GameConfig, character: CharacterId, grid: Grid, monsters: Vec<Monster>) -> Self {
        Self {
            score: 0,
            king_health: config.max_king_health,
            energy: config.initial_energy.clamp(0, config.max_energy),
            defeated_count: 0,
            player: config.start,
            king: config.goal,
            start: config.start,
            grid,
            monsters,
            energy_cells: Vec::new(),
            character: Character::new(character),
            game_active: true,
            challenge: None,
            countdown: CountdownSlot::new(),
            game_over_pending: false,
            outcome: None,
            history: Vector::new(),
            max_king_health: config.max_king_health,
            max_energy: config.max_energy,
        }
    }

    /// Generate a fresh session: carve the maze, then place monsters and
    /// energy cells.
    ///
    /// Maze and placement draw from separate streams of `rng`, so the same
    /// session RNG always yields the same board.
    #[must_use]
    pub fn generate(config: &GameConfig, character: CharacterId, rng: &GameRng) -> Self {
        let mut maze_rng = rng.for_context("maze");
        let mut placement_rng = rng.for_context("placement");

        let mut grid = MazeGenerator::new().generate(config.maze_size, config.start, config.goal, &mut maze_rng);
        let placer = EntityPlacer::new(config.start, config.goal, config.placement_attempts);
        let monsters = placer.place_monsters(&grid, config.monster_count, &config.challenge_types, &mut placement_rng);
        let energy_cells = placer.place_energy(&mut grid, config.energy_cells, &monsters, &mut placement_rng);

        let mut state = Self::new(config, character, grid, monsters);
        state.energy_cells = energy_cells;
        state.record(SessionEvent::Started {
            character,
            seed: rng.seed(),
        });

        info!(
            character = %character,
            seed = rng.seed(),
            monsters = state.monsters.len(),
            energy_cells = state.energy_cells.len(),
            "session started"
        );
        state
    }

    // === Resources ===

    pub fn add_score(&mut self, amount: u32) {
        self.score = self.score.saturating_add(amount);
    }

    /// Deduct score, flooring at zero.
    pub fn deduct_score(&mut self, amount: u32) {
        self.score = self.score.saturating_sub(amount);
    }

    pub fn heal_king(&mut self, amount: i32) {
        self.king_health = (self.king_health + amount).clamp(0, self.max_king_health);
    }

    /// Damage the king. Returns true if health reached zero.
    pub fn damage_king(&mut self, amount: i32) -> bool {
        self.king_health = (self.king_health - amount).clamp(0, self.max_king_health);
        self.king_health <= 0
    }

    pub fn gain_energy(&mut self, amount: i32) {
        self.energy = (self.energy + amount).clamp(0, self.max_energy);
    }

    #[must_use]
    pub fn max_king_health(&self) -> i32 {
        self.max_king_health
    }

    #[must_use]
    pub fn max_energy(&self) -> i32 {
        self.max_energy
    }

    // === Monsters ===

    /// The undefeated monster standing on `position`, if any.
    #[must_use]
    pub fn monster_at(&self, position: Position) -> Option<MonsterId> {
        self.monsters.iter().find(|m| m.blocks(position)).map(|m| m.id)
    }

    #[must_use]
    pub fn monster(&self, id: MonsterId) -> Option<&Monster> {
        self.monsters.get(id.index())
    }

    pub fn monster_mut(&mut self, id: MonsterId) -> Option<&mut Monster> {
        self.monsters.get_mut(id.index())
    }

    // === Flow ===

    /// True when movement and the special action are accepted.
    #[must_use]
    pub fn accepts_input(&self) -> bool {
        self.game_active && self.challenge.is_none() && self.outcome.is_none()
    }

    /// True when play is suspended by the player rather than a challenge or
    /// a terminal outcome.
    #[must_use]
    pub fn is_paused(&self) -> bool {
        !self.game_active && self.challenge.is_none() && self.outcome.is_none()
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// Append to the session history.
    pub fn record(&mut self, event: SessionEvent) {
        self.history.push_back(event);
    }

    /// Outcome summary line used by the restart prompt.
    #[must_use]
    pub fn summary(&self) -> String {
        format!(
            "Final Score: {}\nThreats Defeated: {}/{}",
            self.score,
            self.defeated_count,
            self.monsters.len()
        )
    }
}
