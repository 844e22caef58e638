//! Presentation boundary: the output port and a headless implementation.

pub mod headless;
pub mod port;

pub use headless::{ChallengeFrame, HeadlessPresenter};
pub use port::{headline, AbilityInfo, BoardView, ChallengeView, HudView, PresentationPort};
