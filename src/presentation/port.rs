//! The narrow interface between the engine and whatever draws it.
//!
//! The session controller pushes read-only views through a
//! [`PresentationPort`] after every state change. Views borrow from the
//! session state, so an implementation copies out whatever it wants to keep.

use crate::challenge::{monster_for, MonsterProfile, QuizContent, Resolution};
use crate::core::{GameState, Position};
use crate::maze::{Grid, Monster};

/// Board snapshot used for both the full view and the overview.
#[derive(Clone, Copy, Debug)]
pub struct BoardView<'a> {
    pub grid: &'a Grid,
    pub player: Position,
    pub king: Position,
    pub monsters: &'a [Monster],
}

impl<'a> BoardView<'a> {
    #[must_use]
    pub fn from_state(state: &'a GameState) -> Self {
        Self {
            grid: &state.grid,
            player: state.player,
            king: state.king,
            monsters: &state.monsters,
        }
    }
}

/// Heads-up display values.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct HudView {
    pub score: u32,
    pub defeated: u32,
    pub total_monsters: usize,
    pub king_health: i32,
    pub energy: i32,
}

impl HudView {
    #[must_use]
    pub fn from_state(state: &GameState) -> Self {
        Self {
            score: state.score,
            defeated: state.defeated_count,
            total_monsters: state.monsters.len(),
            king_health: state.king_health,
            energy: state.energy,
        }
    }
}

/// The character ability as shown next to a challenge.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AbilityInfo {
    pub name: &'static str,
    pub description: &'static str,
    pub uses_remaining: u8,
}

/// Everything needed to draw the challenge modal.
#[derive(Clone, Copy, Debug)]
pub struct ChallengeView<'a> {
    pub monster: &'a Monster,
    pub profile: MonsterProfile,
    pub quiz: &'static QuizContent,
    pub ability: AbilityInfo,
    /// Seconds left while the challenge is open.
    pub remaining: Option<u32>,
    /// Set once the challenge has resolved.
    pub resolution: Option<Resolution>,
}

impl<'a> ChallengeView<'a> {
    /// View of the challenge bound to `state`, if any.
    #[must_use]
    pub fn from_state(state: &'a GameState) -> Option<Self> {
        let active = state.challenge?;
        let monster = state.monster(active.monster)?;
        let profile = state.character.profile();

        Some(Self {
            monster,
            profile: monster_for(active.challenge),
            quiz: active.quiz(),
            ability: AbilityInfo {
                name: profile.ability,
                description: profile.ability_description,
                uses_remaining: state.character.ability_uses_remaining(),
            },
            remaining: state.countdown.live().map(|c| c.remaining),
            resolution: active.resolution(),
        })
    }

    /// Result banner for a resolved challenge.
    #[must_use]
    pub fn headline(&self) -> Option<&'static str> {
        self.resolution.map(headline)
    }
}

/// Banner text for a resolution.
#[must_use]
pub const fn headline(resolution: Resolution) -> &'static str {
    match resolution {
        Resolution::Correct => "THREAT NEUTRALIZED!",
        Resolution::AbilitySaved => "ABILITY ACTIVATED!",
        Resolution::Failed => "SECURITY BREACH!",
        Resolution::Timeout => "TIME OUT!",
    }
}

/// Output side of the game, injected into the session controller.
pub trait PresentationPort {
    /// Full-detail board.
    fn render(&mut self, board: &BoardView<'_>);

    /// Abstracted minimap of the same board.
    fn render_overview(&mut self, board: &BoardView<'_>);

    fn render_hud(&mut self, hud: HudView);

    /// Challenge modal, called when it opens, on each countdown tick and
    /// when it resolves.
    fn render_challenge(&mut self, challenge: &ChallengeView<'_>);

    /// Transient toast.
    fn notify(&mut self, message: &str, duration_ms: u64);

    /// Ask whether to play again after a win or loss. `true` restarts.
    fn prompt_restart_or_exit(&mut self, title: &str, summary: &str) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::challenge::{AnswerTag, ChallengeEngine, ChallengeType};
    use crate::core::{CharacterId, GameConfig};
    use crate::maze::MonsterId;

    fn state() -> GameState {
        let monsters = vec![Monster::new(MonsterId::new(0), Position::new(3, 3), ChallengeType::Malware)];
        GameState::new(&GameConfig::default(), CharacterId::CryptoMage, Grid::filled(15), monsters)
    }

    #[test]
    fn test_hud_from_state() {
        let mut state = state();
        state.add_score(40);
        let hud = HudView::from_state(&state);

        assert_eq!(hud.score, 40);
        assert_eq!(hud.total_monsters, 1);
        assert_eq!(hud.king_health, 100);
    }

    #[test]
    fn test_challenge_view_tracks_lifecycle() {
        let mut state = state();
        assert!(ChallengeView::from_state(&state).is_none());

        let engine = ChallengeEngine::from_config(&GameConfig::default());
        engine.begin(&mut state, MonsterId::new(0));
        let view = ChallengeView::from_state(&state).unwrap();
        assert_eq!(view.profile.name, "MALWARE VIRUS");
        assert_eq!(view.ability.name, "DATA ENCRYPT");
        assert_eq!(view.ability.uses_remaining, 3);
        assert_eq!(view.remaining, Some(15));
        assert_eq!(view.headline(), None);

        engine.submit(&mut state, AnswerTag::Wrong).unwrap();
        let view = ChallengeView::from_state(&state).unwrap();
        assert_eq!(view.remaining, None);
        assert_eq!(view.ability.uses_remaining, 2);
        assert_eq!(view.headline(), Some("ABILITY ACTIVATED!"));
    }
}
