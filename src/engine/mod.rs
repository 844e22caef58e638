//! Runtime: movement rules and the session controller that drives them.

pub mod movement;
pub mod session;

pub use movement::{MoveResult, MovementEngine, SpecialActionReport};
pub use session::{KeyResult, SessionController, SPECIAL_ACTION_KEY};
