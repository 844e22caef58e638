//! Timed security quizzes triggered by monster encounters.
//!
//! ## Key Types
//!
//! - `ChallengeType`: quiz topic, also the uniqueness key for monsters
//! - `QuizContent`: static question, options and tip per topic
//! - `CountdownSlot`: the single cancellable countdown
//! - `ChallengeEngine`: Idle → Open → Resolved → Idle transitions

pub mod content;
pub mod engine;
pub mod kind;
pub mod timer;

pub use content::{monster_for, quiz_for, AnswerOption, AnswerTag, MonsterProfile, QuizContent, ThreatLevel};
pub use engine::{ActiveChallenge, ChallengeEngine, ChallengeStatus, ClosedChallenge, CountdownTick, Resolution};
pub use kind::ChallengeType;
pub use timer::{Countdown, CountdownSlot, TickResult, TimerHandle};
