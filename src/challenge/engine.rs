//! Challenge state machine.
//!
//! ```text
//!            begin                 submit / countdown expiry
//!   Idle ───────────────► Open ─────────────────────────────► Resolved
//!    ▲                     │                                     │
//!    │   close (forced)    │           display delay / close     │
//!    └─────────────────────┴─────────────────────────────────────┘
//! ```
//!
//! - **Open**: movement is blocked and the countdown is live.
//! - **Resolved**: effects are applied, the countdown is gone, and the result
//!   stays on screen for `resolve_display_ticks` ticks.
//! - **Close**: unbinds the challenge and restores input, or ends the session
//!   if the resolution left the king at zero health.
//!
//! Every path out of `Open` cancels the countdown, and resolving twice is
//! rejected, so a late tick can never apply a second resolution.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::content::{quiz_for, AnswerTag, QuizContent};
use super::kind::ChallengeType;
use super::timer::{TickResult, TimerHandle};
use crate::core::{ChallengeError, GameConfig, GameState, Rewards, SessionEvent, SessionOutcome};
use crate::maze::MonsterId;

/// How a challenge ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Resolution {
    /// Answered correctly.
    Correct,
    /// Answered wrong, but the character's ability converted it.
    AbilitySaved,
    /// Answered wrong with no ability left.
    Failed,
    /// The countdown ran out.
    Timeout,
}

impl Resolution {
    /// True when the monster was defeated.
    #[must_use]
    pub const fn defeats_monster(self) -> bool {
        matches!(self, Resolution::Correct | Resolution::AbilitySaved)
    }
}

/// Where a bound challenge is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ChallengeStatus {
    Open { timer: TimerHandle },
    Resolved { resolution: Resolution, display_ticks_left: u32 },
}

/// The challenge bound to the session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveChallenge {
    pub monster: MonsterId,
    pub challenge: ChallengeType,
    pub status: ChallengeStatus,
}

impl ActiveChallenge {
    #[must_use]
    pub fn quiz(&self) -> &'static QuizContent {
        quiz_for(self.challenge)
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        matches!(self.status, ChallengeStatus::Open { .. })
    }

    #[must_use]
    pub fn resolution(&self) -> Option<Resolution> {
        match self.status {
            ChallengeStatus::Resolved { resolution, .. } => Some(resolution),
            ChallengeStatus::Open { .. } => None,
        }
    }
}

/// Result of one countdown tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CountdownTick {
    /// The tick did not address the live countdown.
    Stale,
    /// Seconds left.
    Running(u32),
    /// The countdown expired and the challenge resolved as a timeout.
    TimedOut,
}

/// Result of closing a challenge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClosedChallenge {
    pub monster: MonsterId,
    /// Set when closing ended the session.
    pub outcome: Option<SessionOutcome>,
}

/// Applies challenge transitions to a `GameState`.
#[derive(Clone, Copy, Debug)]
pub struct ChallengeEngine {
    rewards: Rewards,
    countdown_seconds: u32,
    display_ticks: u32,
}

impl ChallengeEngine {
    #[must_use]
    pub fn new(rewards: Rewards, countdown_seconds: u32, display_ticks: u32) -> Self {
        Self {
            rewards,
            countdown_seconds,
            display_ticks,
        }
    }

    #[must_use]
    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(config.rewards, config.challenge_seconds, config.resolve_display_ticks)
    }

    /// Bind `monster` and open its challenge.
    ///
    /// Any previous countdown is cancelled before the new one starts.
    /// Returns `None` if the monster does not exist or is already defeated.
    pub fn begin(&self, state: &mut GameState, monster: MonsterId) -> Option<TimerHandle> {
        let target = state.monster(monster).filter(|m| !m.defeated)?;
        let challenge = target.challenge;

        let timer = state.countdown.start(self.countdown_seconds);
        state.challenge = Some(ActiveChallenge {
            monster,
            challenge,
            status: ChallengeStatus::Open { timer },
        });
        state.game_active = false;
        state.record(SessionEvent::EncounterStarted { monster, challenge });

        info!(%monster, %challenge, %timer, "challenge opened");
        Some(timer)
    }

    /// Apply an answer to the open challenge.
    pub fn submit(&self, state: &mut GameState, answer: AnswerTag) -> Result<Resolution, ChallengeError> {
        let active = state.challenge.ok_or(ChallengeError::NoActiveChallenge)?;
        if !active.is_open() {
            return Err(ChallengeError::AlreadyResolved);
        }

        let resolution = match answer {
            AnswerTag::Correct => Resolution::Correct,
            AnswerTag::Wrong if state.character.try_use_ability() => Resolution::AbilitySaved,
            AnswerTag::Wrong => Resolution::Failed,
        };
        self.resolve(state, active.monster, resolution);
        Ok(resolution)
    }

    /// Deliver one countdown tick addressed to `handle`.
    pub fn tick_countdown(&self, state: &mut GameState, handle: TimerHandle) -> CountdownTick {
        let Some(active) = state.challenge.filter(ActiveChallenge::is_open) else {
            return CountdownTick::Stale;
        };

        match state.countdown.tick(handle) {
            TickResult::Stale => CountdownTick::Stale,
            TickResult::Running(remaining) => CountdownTick::Running(remaining),
            TickResult::Expired => {
                self.resolve(state, active.monster, Resolution::Timeout);
                CountdownTick::TimedOut
            }
        }
    }

    /// Advance the post-resolution display delay by one tick, closing the
    /// challenge when it runs out.
    pub fn tick_display(&self, state: &mut GameState) -> Option<ClosedChallenge> {
        let active = state.challenge.as_mut()?;
        let ChallengeStatus::Resolved {
            display_ticks_left, ..
        } = &mut active.status
        else {
            return None;
        };

        *display_ticks_left = display_ticks_left.saturating_sub(1);
        if *display_ticks_left == 0 {
            self.close(state)
        } else {
            None
        }
    }

    /// Unbind the current challenge, whatever its status.
    ///
    /// Cancels the countdown, then either restores input or, if a resolution
    /// left the king at zero health, ends the session in defeat. Closing with
    /// no challenge bound is a no-op.
    pub fn close(&self, state: &mut GameState) -> Option<ClosedChallenge> {
        state.countdown.cancel();
        let active = state.challenge.take()?;
        state.record(SessionEvent::ChallengeClosed {
            monster: active.monster,
        });

        let outcome = if state.game_over_pending {
            state.game_active = false;
            state.outcome = Some(SessionOutcome::Defeat);
            state.record(SessionEvent::Ended(SessionOutcome::Defeat));
            info!(score = state.score, "king has fallen");
            Some(SessionOutcome::Defeat)
        } else {
            state.game_active = true;
            None
        };

        debug!(monster = %active.monster, "challenge closed");
        Some(ClosedChallenge {
            monster: active.monster,
            outcome,
        })
    }

    fn resolve(&self, state: &mut GameState, monster: MonsterId, resolution: Resolution) {
        state.countdown.cancel();
        let rewards = &self.rewards;

        match resolution {
            Resolution::Correct => {
                Self::defeat(state, monster);
                state.add_score(rewards.correct_score);
                state.heal_king(rewards.correct_heal);
            }
            Resolution::AbilitySaved => {
                Self::defeat(state, monster);
                state.add_score(rewards.ability_save_score);
            }
            Resolution::Failed => {
                state.deduct_score(rewards.wrong_penalty);
                if state.damage_king(rewards.wrong_damage) {
                    state.game_over_pending = true;
                }
            }
            Resolution::Timeout => {
                if state.damage_king(rewards.timeout_damage) {
                    state.game_over_pending = true;
                }
            }
        }

        if let Some(active) = state.challenge.as_mut() {
            active.status = ChallengeStatus::Resolved {
                resolution,
                display_ticks_left: self.display_ticks,
            };
        }
        state.record(SessionEvent::ChallengeResolved { monster, resolution });
        info!(
            %monster,
            ?resolution,
            score = state.score,
            king_health = state.king_health,
            "challenge resolved"
        );

        if self.display_ticks == 0 {
            self.close(state);
        }
    }

    fn defeat(state: &mut GameState, monster: MonsterId) {
        if let Some(target) = state.monster_mut(monster) {
            target.defeated = true;
        }
        state.defeated_count += 1;
    }
}
