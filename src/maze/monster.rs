//! Challenge-bearing monsters.
//!
//! Monsters are created once per session by the placer and never removed;
//! a defeated monster stays in the list so overview renders and summaries
//! can still see it. Only the challenge engine flips `defeated`.

use serde::{Deserialize, Serialize};

use crate::challenge::{monster_for, ChallengeType, MonsterProfile};
use crate::core::Position;

/// Stable identifier of a monster within a session (its placement index).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct MonsterId(pub u32);

impl MonsterId {
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for MonsterId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Monster({})", self.0)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Monster {
    pub id: MonsterId,
    pub position: Position,
    pub challenge: ChallengeType,
    pub defeated: bool,
}

impl Monster {
    #[must_use]
    pub fn new(id: MonsterId, position: Position, challenge: ChallengeType) -> Self {
        Self {
            id,
            position,
            challenge,
            defeated: false,
        }
    }

    /// Display identity for this monster's topic.
    #[must_use]
    pub fn profile(&self) -> MonsterProfile {
        monster_for(self.challenge)
    }

    /// True if an undefeated monster stands on `position`.
    #[must_use]
    pub fn blocks(&self, position: Position) -> bool {
        !self.defeated && self.position == position
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blocks_until_defeated() {
        let mut monster = Monster::new(MonsterId::new(0), Position::new(4, 4), ChallengeType::Malware);
        assert!(monster.blocks(Position::new(4, 4)));
        assert!(!monster.blocks(Position::new(4, 5)));

        monster.defeated = true;
        assert!(!monster.blocks(Position::new(4, 4)));
    }

    #[test]
    fn test_profile_follows_topic() {
        let monster = Monster::new(MonsterId::new(3), Position::new(2, 2), ChallengeType::Social);
        assert_eq!(monster.profile().name, "SOCIAL ENGINEER");
        assert_eq!(format!("{}", monster.id), "Monster(3)");
    }
}
