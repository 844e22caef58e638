//! Error types.
//!
//! Nothing in a running session is fatal. Blocked moves and placement
//! starvation are ordinary outcomes, not errors; these enums only cover
//! misconfiguration and commands that make no sense in the current state.

use thiserror::Error;

use super::position::Position;

/// A `GameConfig` that cannot produce a playable maze.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("maze size {size} is too small (minimum {min})")]
    MazeTooSmall { size: i32, min: i32 },

    #[error("{which} position {position} is not an interior cell of a {size}x{size} maze")]
    NotInterior {
        which: &'static str,
        position: Position,
        size: i32,
    },

    #[error("start and goal must differ (both at {0})")]
    StartIsGoal(Position),

    #[error("at least one challenge type is required")]
    NoChallengeTypes,

    #[error("challenge countdown must be at least one second")]
    ZeroCountdown,

    #[error("{field} must be positive (got {value})")]
    NotPositive { field: &'static str, value: i32 },

    #[error("{field} must not be negative (got {value})")]
    Negative { field: &'static str, value: i32 },

    #[error("{field} ({value}) exceeds its maximum ({max})")]
    AboveMaximum {
        field: &'static str,
        value: u32,
        max: u32,
    },
}

/// Rejected session-level command.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("unknown character `{0}`")]
    UnknownCharacter(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(#[from] ConfigError),

    #[error("no session is running")]
    NoSession,
}

/// Rejected challenge command.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum ChallengeError {
    #[error("no challenge is open")]
    NoActiveChallenge,

    #[error("the challenge has already been resolved")]
    AlreadyResolved,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        let err = ConfigError::NotInterior {
            which: "goal",
            position: Position::new(14, 3),
            size: 15,
        };
        assert_eq!(err.to_string(), "goal position (14, 3) is not an interior cell of a 15x15 maze");

        let err = SessionError::from(ConfigError::NoChallengeTypes);
        assert_eq!(
            err.to_string(),
            "invalid configuration: at least one challenge type is required"
        );
    }
}
