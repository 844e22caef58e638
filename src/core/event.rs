//! Session history and terminal outcomes.
//!
//! Every state change the engine makes is appended to the session's
//! `history` as a `SessionEvent`. The history is an `im::Vector`, so cloning
//! a `GameState` to inspect or diff it stays cheap.

use serde::{Deserialize, Serialize};

use super::character::CharacterId;
use super::position::{Direction, Position};
use crate::challenge::{ChallengeType, Resolution};
use crate::maze::MonsterId;

/// Terminal result of a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SessionOutcome {
    /// The player reached the throne.
    Victory,
    /// King health dropped to zero.
    Defeat,
}

impl SessionOutcome {
    /// Headline shown in the restart prompt.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            SessionOutcome::Victory => "VICTORY!",
            SessionOutcome::Defeat => "GAME OVER!",
        }
    }
}

/// One entry in the session history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionEvent {
    Started { character: CharacterId, seed: u64 },
    Moved { from: Position, to: Position },
    Blocked { at: Position, direction: Direction },
    EncounterStarted { monster: MonsterId, challenge: ChallengeType },
    ChallengeResolved { monster: MonsterId, resolution: Resolution },
    ChallengeClosed { monster: MonsterId },
    EnergyCollected { at: Position },
    KingHealed { health: i32 },
    ThroneReached { score: u32 },
    Paused,
    Resumed,
    Ended(SessionOutcome),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_titles() {
        assert_eq!(SessionOutcome::Victory.title(), "VICTORY!");
        assert_eq!(SessionOutcome::Defeat.title(), "GAME OVER!");
    }

    #[test]
    fn test_event_serialization() {
        let event = SessionEvent::ChallengeResolved {
            monster: MonsterId::new(2),
            resolution: Resolution::AbilitySaved,
        };
        let json = serde_json::to_string(&event).unwrap();
        let back: SessionEvent = serde_json::from_str(&json).unwrap();
        assert_eq!(event, back);
    }
}
