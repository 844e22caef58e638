//! # cyber-maze
//!
//! Engine for a single-player maze game that teaches cybersecurity
//! awareness. The player picks a character, walks a generated maze toward
//! the king's throne, and answers a timed security quiz for every monster
//! met on the way.
//!
//! ## Design Principles
//!
//! 1. **Explicit Session State**: One `GameState` value per session, owned by
//!    a `SessionController`. All mutation goes through named operations.
//!
//! 2. **Reproducible Boards**: Every random draw goes through a seeded
//!    ChaCha8 `GameRng`; the same seed always yields the same run.
//!
//! 3. **Host-Driven Time**: The challenge countdown is advanced by explicit
//!    ticks and addressed by handle, so a stale tick cannot resolve a
//!    challenge twice.
//!
//! 4. **Injected Presentation**: Rendering is a `PresentationPort` passed in
//!    at construction; the engine runs headless under test.
//!
//! ## Modules
//!
//! - `core`: RNG, positions, configuration, characters, state, events, errors
//! - `maze`: Grid, generator and entity placement
//! - `challenge`: Quiz content, countdown and the challenge state machine
//! - `engine`: Movement rules and the session controller
//! - `presentation`: Output port, view structs and a headless presenter
//!
//! ## Example
//!
//! ```
//! use cyber_maze::{Direction, GameConfig, HeadlessPresenter, SessionController};
//!
//! let mut game = SessionController::new(GameConfig::seeded(7), HeadlessPresenter::new()).unwrap();
//! game.start_session("sentinel").unwrap();
//! game.move_player(Direction::Right);
//! assert!(game.state().is_some());
//! ```

pub mod challenge;
pub mod core;
pub mod engine;
pub mod maze;
pub mod presentation;

// Re-export commonly used types
pub use crate::core::{
    ChallengeError, Character, CharacterId, CharacterProfile, ConfigError, Direction, GameConfig, GameRng,
    GameRngState, GameState, Position, Rewards, SessionError, SessionEvent, SessionOutcome,
};

pub use crate::maze::{CellKind, EntityPlacer, Grid, MazeGenerator, Monster, MonsterId};

pub use crate::challenge::{
    quiz_for, ActiveChallenge, AnswerTag, ChallengeEngine, ChallengeStatus, ChallengeType, QuizContent,
    Resolution, TimerHandle,
};

pub use crate::engine::{KeyResult, MoveResult, MovementEngine, SessionController, SpecialActionReport};

pub use crate::presentation::{BoardView, ChallengeView, HeadlessPresenter, HudView, PresentationPort};
