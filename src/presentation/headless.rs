//! A presenter that draws nothing and remembers everything.
//!
//! Used by tests and by hosts that drive the engine without a screen.

use std::collections::VecDeque;

use super::port::{BoardView, ChallengeView, HudView, PresentationPort};
use crate::challenge::{ChallengeType, Resolution};
use crate::core::Position;
use crate::maze::MonsterId;

/// Owned copy of a rendered challenge frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ChallengeFrame {
    pub monster: MonsterId,
    pub challenge: ChallengeType,
    pub remaining: Option<u32>,
    pub resolution: Option<Resolution>,
}

/// Records every call; answers restart prompts from a script.
#[derive(Clone, Debug, Default)]
pub struct HeadlessPresenter {
    pub boards: usize,
    pub overviews: usize,
    /// Player position at the last full render.
    pub last_player: Option<Position>,
    pub huds: Vec<HudView>,
    pub challenges: Vec<ChallengeFrame>,
    pub notifications: Vec<(String, u64)>,
    pub prompts: Vec<(String, String)>,
    /// Answers for upcoming prompts. An empty script answers `false`.
    pub prompt_answers: VecDeque<bool>,
}

impl HeadlessPresenter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue answers for the next restart prompts.
    #[must_use]
    pub fn with_prompt_answers(mut self, answers: impl IntoIterator<Item = bool>) -> Self {
        self.prompt_answers.extend(answers);
        self
    }

    #[must_use]
    pub fn last_hud(&self) -> Option<HudView> {
        self.huds.last().copied()
    }

    #[must_use]
    pub fn last_challenge(&self) -> Option<ChallengeFrame> {
        self.challenges.last().copied()
    }

    /// Messages only, in order.
    pub fn messages(&self) -> impl Iterator<Item = &str> + '_ {
        self.notifications.iter().map(|(message, _)| message.as_str())
    }
}

impl PresentationPort for HeadlessPresenter {
    fn render(&mut self, board: &BoardView<'_>) {
        self.boards += 1;
        self.last_player = Some(board.player);
    }

    fn render_overview(&mut self, _board: &BoardView<'_>) {
        self.overviews += 1;
    }

    fn render_hud(&mut self, hud: HudView) {
        self.huds.push(hud);
    }

    fn render_challenge(&mut self, challenge: &ChallengeView<'_>) {
        self.challenges.push(ChallengeFrame {
            monster: challenge.monster.id,
            challenge: challenge.monster.challenge,
            remaining: challenge.remaining,
            resolution: challenge.resolution,
        });
    }

    fn notify(&mut self, message: &str, duration_ms: u64) {
        self.notifications.push((message.to_string(), duration_ms));
    }

    fn prompt_restart_or_exit(&mut self, title: &str, summary: &str) -> bool {
        self.prompts.push((title.to_string(), summary.to_string()));
        self.prompt_answers.pop_front().unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_script() {
        let mut presenter = HeadlessPresenter::new().with_prompt_answers([true]);

        assert!(presenter.prompt_restart_or_exit("VICTORY!", "Final Score: 1"));
        assert!(!presenter.prompt_restart_or_exit("GAME OVER!", "Final Score: 0"));
        assert_eq!(presenter.prompts.len(), 2);
        assert_eq!(presenter.prompts[1].0, "GAME OVER!");
    }

    #[test]
    fn test_notifications_recorded() {
        let mut presenter = HeadlessPresenter::new();
        presenter.notify("Game Paused", 2000);
        assert_eq!(presenter.messages().collect::<Vec<_>>(), vec!["Game Paused"]);
        assert_eq!(presenter.notifications[0].1, 2000);
    }
}
