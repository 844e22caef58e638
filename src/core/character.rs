//! Playable characters.
//!
//! Profiles are static. The only mutable part of a character is its ability
//! counter, which belongs to the session and is reset from the profile each
//! time a session starts.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::error::SessionError;

/// Selectable character.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CharacterId {
    #[default]
    Sentinel,
    CryptoMage,
    NetworkRogue,
}

impl CharacterId {
    pub const ALL: [CharacterId; 3] = [CharacterId::Sentinel, CharacterId::CryptoMage, CharacterId::NetworkRogue];

    /// Identifier used by input events.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            CharacterId::Sentinel => "sentinel",
            CharacterId::CryptoMage => "cryptomage",
            CharacterId::NetworkRogue => "networkrogue",
        }
    }

    /// Static profile for this character.
    #[must_use]
    pub fn profile(self) -> &'static CharacterProfile {
        match self {
            CharacterId::Sentinel => &SENTINEL,
            CharacterId::CryptoMage => &CRYPTO_MAGE,
            CharacterId::NetworkRogue => &NETWORK_ROGUE,
        }
    }
}

impl FromStr for CharacterId {
    type Err = SessionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|id| id.as_str().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| SessionError::UnknownCharacter(s.to_string()))
    }
}

impl std::fmt::Display for CharacterId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Display identity, stats and ability of a character.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CharacterProfile {
    pub name: &'static str,
    pub icon: &'static str,
    pub defense: u8,
    pub speed: u8,
    pub ability: &'static str,
    pub ability_description: &'static str,
    pub ability_uses: u8,
}

static SENTINEL: CharacterProfile = CharacterProfile {
    name: "SENTINEL",
    icon: "🛡️",
    defense: 90,
    speed: 60,
    ability: "FIREWALL BURST",
    ability_description: "Blocks 2 incorrect answers automatically",
    ability_uses: 2,
};

static CRYPTO_MAGE: CharacterProfile = CharacterProfile {
    name: "CRYPTO-MAGE",
    icon: "🔮",
    defense: 70,
    speed: 75,
    ability: "DATA ENCRYPT",
    ability_description: "Gives you hints for difficult questions",
    ability_uses: 3,
};

static NETWORK_ROGUE: CharacterProfile = CharacterProfile {
    name: "NETWORK-ROGUE",
    icon: "🗡️",
    defense: 60,
    speed: 95,
    ability: "GHOST PROTOCOL",
    ability_description: "Skip one challenge without penalty",
    ability_uses: 1,
};

/// A character as carried by a running session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Character {
    pub id: CharacterId,
    ability_uses_remaining: u8,
}

impl Character {
    /// Fresh character with a full ability counter.
    #[must_use]
    pub fn new(id: CharacterId) -> Self {
        Self {
            id,
            ability_uses_remaining: id.profile().ability_uses,
        }
    }

    #[must_use]
    pub fn profile(&self) -> &'static CharacterProfile {
        self.id.profile()
    }

    #[must_use]
    pub fn ability_uses_remaining(&self) -> u8 {
        self.ability_uses_remaining
    }

    /// Spend one ability use. Returns false when none are left.
    pub fn try_use_ability(&mut self) -> bool {
        if self.ability_uses_remaining == 0 {
            return false;
        }
        self.ability_uses_remaining -= 1;
        true
    }
}
