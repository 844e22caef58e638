//! Player movement and the special action.
//!
//! A move is validated against the grid and, if it lands, the new cell is
//! evaluated once: a monster encounter takes precedence over the throne,
//! which takes precedence over an energy pickup.

use smallvec::SmallVec;
use tracing::{debug, info};

use crate::challenge::{ChallengeEngine, TimerHandle};
use crate::core::{Direction, GameConfig, GameState, Position, Rewards, SessionEvent, SessionOutcome};
use crate::maze::{CellKind, MonsterId};

/// Result of a movement command.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MoveResult {
    /// Input is not accepted right now (paused, challenge open, game over).
    Ignored,
    /// Target cell is a wall or off the grid. Nothing changed.
    Blocked,
    /// Moved onto a plain cell.
    Moved(Position),
    /// Moved onto an undefeated monster; its challenge is now open.
    Encounter { monster: MonsterId, timer: TimerHandle },
    /// Moved onto the throne; the session is won.
    ReachedThrone,
    /// Moved onto an energy cell and collected it.
    EnergyPickup(Position),
}

impl MoveResult {
    /// True if the player's position changed.
    #[must_use]
    pub const fn moved(self) -> bool {
        !matches!(self, MoveResult::Ignored | MoveResult::Blocked)
    }
}

/// What a special action did.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SpecialActionReport {
    /// The king was adjacent and got healed.
    pub healed: bool,
    /// Energy cells collected from the surrounding eight cells.
    pub collected: SmallVec<[Position; 8]>,
}

impl SpecialActionReport {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        !self.healed && self.collected.is_empty()
    }
}

/// Validates and applies player movement.
#[derive(Clone, Copy, Debug)]
pub struct MovementEngine {
    rewards: Rewards,
    challenges: ChallengeEngine,
}

impl MovementEngine {
    #[must_use]
    pub fn new(rewards: Rewards, challenges: ChallengeEngine) -> Self {
        Self { rewards, challenges }
    }

    #[must_use]
    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(config.rewards, ChallengeEngine::from_config(config))
    }

    /// Try to move the player one cell.
    pub fn attempt_move(&self, state: &mut GameState, direction: Direction) -> MoveResult {
        if !state.accepts_input() {
            return MoveResult::Ignored;
        }

        let from = state.player;
        let to = from.step(direction);
        if !state.grid.is_walkable(to) {
            debug!(%from, ?direction, "move blocked");
            state.record(SessionEvent::Blocked { at: from, direction });
            return MoveResult::Blocked;
        }

        state.player = to;
        state.record(SessionEvent::Moved { from, to });
        self.evaluate_position(state)
    }

    fn evaluate_position(&self, state: &mut GameState) -> MoveResult {
        let here = state.player;

        if let Some(monster) = state.monster_at(here) {
            if let Some(timer) = self.challenges.begin(state, monster) {
                return MoveResult::Encounter { monster, timer };
            }
        }

        if here == state.king {
            state.add_score(self.rewards.throne_score);
            state.game_active = false;
            state.outcome = Some(SessionOutcome::Victory);
            state.record(SessionEvent::ThroneReached { score: state.score });
            state.record(SessionEvent::Ended(SessionOutcome::Victory));
            info!(score = state.score, defeated = state.defeated_count, "throne reached");
            return MoveResult::ReachedThrone;
        }

        if state.grid.is(here, CellKind::Energy) {
            state.grid.set(here, CellKind::Path);
            state.gain_energy(self.rewards.energy_step_gain);
            state.add_score(self.rewards.energy_step_score);
            state.record(SessionEvent::EnergyCollected { at: here });
            return MoveResult::EnergyPickup(here);
        }

        MoveResult::Moved(here)
    }

    /// Heal the king if adjacent to the throne, and collect every energy
    /// cell in the surrounding eight cells.
    ///
    /// The heal has no cooldown: it applies on every call while adjacent.
    pub fn special_action(&self, state: &mut GameState) -> SpecialActionReport {
        let mut report = SpecialActionReport::default();
        if !state.accepts_input() {
            return report;
        }

        if state.player.manhattan(state.king) == 1 {
            state.heal_king(self.rewards.special_heal);
            state.add_score(self.rewards.special_heal_score);
            state.record(SessionEvent::KingHealed {
                health: state.king_health,
            });
            report.healed = true;
        }

        let around: SmallVec<[Position; 8]> = state.player.surrounding8().collect();
        for cell in around {
            if state.grid.is(cell, CellKind::Energy) {
                state.grid.set(cell, CellKind::Path);
                state.gain_energy(self.rewards.special_energy_gain);
                state.add_score(self.rewards.special_energy_score);
                state.record(SessionEvent::EnergyCollected { at: cell });
                report.collected.push(cell);
            }
        }

        debug!(healed = report.healed, collected = report.collected.len(), "special action");
        report
    }
}
