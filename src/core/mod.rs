//! Core engine types: RNG, positions, configuration, characters, session
//! state and its history, errors.

pub mod character;
pub mod config;
pub mod error;
pub mod event;
pub mod position;
pub mod rng;
pub mod state;

pub use character::{Character, CharacterId, CharacterProfile};
pub use config::{GameConfig, Rewards, MIN_MAZE_SIZE};
pub use error::{ChallengeError, ConfigError, SessionError};
pub use event::{SessionEvent, SessionOutcome};
pub use position::{Direction, Position};
pub use rng::{GameRng, GameRngState};
pub use state::GameState;
