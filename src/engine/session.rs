//! Session controller: the single owner of a running game.
//!
//! ## Responsibilities
//!
//! - Character selection and session (re)start
//! - Routing input commands to the movement and challenge engines
//! - Driving the countdown and display delay from host ticks
//! - Re-rendering through the injected `PresentationPort` after each change
//! - Asking restart-or-exit on a terminal outcome
//!
//! The host calls [`SessionController::tick`] once per second. Nothing here
//! spawns timers; the countdown only advances when ticked.

use tracing::{debug, info};

use super::movement::{MoveResult, MovementEngine, SpecialActionReport};
use crate::challenge::{AnswerTag, ChallengeEngine, ChallengeStatus, CountdownTick, Resolution};
use crate::core::{
    ChallengeError, CharacterId, Direction, GameConfig, GameRng, GameState, SessionError, SessionEvent,
    SessionOutcome,
};
use crate::presentation::{BoardView, ChallengeView, HudView, PresentationPort};

/// Key that triggers the special action.
pub const SPECIAL_ACTION_KEY: &str = " ";

/// What a key press did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum KeyResult {
    Move(MoveResult),
    Special(SpecialActionReport),
    /// The key is not bound.
    Unmapped,
}

/// Owns the configuration, presenter, RNG and the current session.
#[derive(Debug)]
pub struct SessionController<P: PresentationPort> {
    config: GameConfig,
    presenter: P,
    rng: GameRng,
    selected: CharacterId,
    movement: MovementEngine,
    challenges: ChallengeEngine,
    session: Option<GameState>,
}

impl<P: PresentationPort> SessionController<P> {
    /// Validate `config` and build a controller sitting at the menu.
    pub fn new(config: GameConfig, presenter: P) -> Result<Self, SessionError> {
        config.validate()?;
        Ok(Self {
            rng: GameRng::new(config.seed),
            selected: CharacterId::default(),
            movement: MovementEngine::from_config(&config),
            challenges: ChallengeEngine::from_config(&config),
            session: None,
            presenter,
            config,
        })
    }

    // === Accessors ===

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    #[must_use]
    pub fn into_presenter(self) -> P {
        self.presenter
    }

    /// The running session, if any.
    #[must_use]
    pub fn state(&self) -> Option<&GameState> {
        self.session.as_ref()
    }

    /// The running session, or `NoSession` at the menu.
    pub fn session(&self) -> Result<&GameState, SessionError> {
        self.session.as_ref().ok_or(SessionError::NoSession)
    }

    /// Mutable access for hosts and tests that stage a position.
    pub fn state_mut(&mut self) -> Option<&mut GameState> {
        self.session.as_mut()
    }

    #[must_use]
    pub fn selected_character(&self) -> CharacterId {
        self.selected
    }

    // === Lifecycle ===

    /// Select a character by id string for the next session.
    pub fn select_character(&mut self, id: &str) -> Result<CharacterId, SessionError> {
        let character: CharacterId = id.parse()?;
        self.selected = character;
        debug!(%character, "character selected");
        Ok(character)
    }

    /// Select a character and start a session with it.
    pub fn start_session(&mut self, id: &str) -> Result<&GameState, SessionError> {
        self.select_character(id)?;
        self.start();
        self.session()
    }

    /// Start a fresh session with the current selection, discarding any
    /// running one.
    pub fn start(&mut self) {
        if let Some(old) = self.session.as_mut() {
            old.countdown.cancel();
        }

        let session_rng = self.rng.fork();
        let state = GameState::generate(&self.config, self.selected, &session_rng);
        render_board(&mut self.presenter, &state);
        self.session = Some(state);
    }

    /// Discard the session and go back to character selection.
    pub fn return_to_menu(&mut self) {
        if let Some(mut state) = self.session.take() {
            state.countdown.cancel();
            info!(score = state.score, "returned to menu");
        }
    }

    // === Input ===

    /// Route a key press: arrows/WASD move, space is the special action.
    pub fn handle_key(&mut self, key: &str) -> KeyResult {
        if key == SPECIAL_ACTION_KEY {
            return KeyResult::Special(self.special_action());
        }
        match Direction::from_key(key) {
            Some(direction) => KeyResult::Move(self.move_player(direction)),
            None => KeyResult::Unmapped,
        }
    }

    pub fn move_player(&mut self, direction: Direction) -> MoveResult {
        let Some(state) = self.session.as_mut() else {
            return MoveResult::Ignored;
        };

        let result = self.movement.attempt_move(state, direction);
        match result {
            MoveResult::Ignored | MoveResult::Blocked => {}
            MoveResult::Moved(_) => render_board(&mut self.presenter, state),
            MoveResult::EnergyPickup(_) => {
                let message = format!("Energy boost! +{} energy", self.config.rewards.energy_step_gain);
                self.presenter.notify(&message, self.config.notify_ms);
                render_board(&mut self.presenter, state);
            }
            MoveResult::Encounter { .. } => {
                render_board(&mut self.presenter, state);
                render_challenge(&mut self.presenter, state);
            }
            MoveResult::ReachedThrone => {
                render_board(&mut self.presenter, state);
                self.finish(SessionOutcome::Victory);
            }
        }
        result
    }

    /// Heal the adjacent king and collect surrounding energy.
    pub fn special_action(&mut self) -> SpecialActionReport {
        let Some(state) = self.session.as_mut() else {
            return SpecialActionReport::default();
        };

        let report = self.movement.special_action(state);
        let rewards = self.config.rewards;
        if report.healed {
            let message = format!(
                "King healed! +{} HP, +{} points",
                rewards.special_heal, rewards.special_heal_score
            );
            self.presenter.notify(&message, self.config.notify_ms);
        }
        for _ in &report.collected {
            let message = format!(
                "Energy collected! +{} energy, +{} points",
                rewards.special_energy_gain, rewards.special_energy_score
            );
            self.presenter.notify(&message, self.config.notify_ms);
        }
        if !report.is_empty() {
            render_board(&mut self.presenter, state);
        }
        report
    }

    /// Answer the open challenge with an outcome tag.
    pub fn submit_answer(&mut self, answer: AnswerTag) -> Result<Resolution, ChallengeError> {
        let state = self.session.as_mut().ok_or(ChallengeError::NoActiveChallenge)?;
        let resolution = self.challenges.submit(state, answer)?;
        self.after_challenge_step();
        Ok(resolution)
    }

    /// Answer the open challenge by option index.
    pub fn choose_option(&mut self, index: usize) -> Result<Resolution, ChallengeError> {
        let active = self
            .session
            .as_ref()
            .and_then(|s| s.challenge)
            .ok_or(ChallengeError::NoActiveChallenge)?;
        self.submit_answer(active.quiz().outcome_of(index))
    }

    /// Toggle pause. Only honoured while playing with no challenge bound and
    /// no terminal outcome. Returns whether the session is now paused.
    pub fn toggle_pause(&mut self) -> bool {
        let Some(state) = self.session.as_mut() else {
            return false;
        };
        if state.challenge.is_some() || state.is_over() {
            return false;
        }

        state.game_active = !state.game_active;
        let paused = !state.game_active;
        let (event, message) = if paused {
            (SessionEvent::Paused, "Game Paused")
        } else {
            (SessionEvent::Resumed, "Game Resumed")
        };
        state.record(event);
        self.presenter.notify(message, self.config.notify_ms);
        info!(paused, "pause toggled");
        paused
    }

    // === Time ===

    /// Advance time by one second.
    ///
    /// Drives the countdown while a challenge is open, and the display
    /// delay once it has resolved. Does nothing otherwise.
    pub fn tick(&mut self) {
        let Some(state) = self.session.as_mut() else {
            return;
        };
        let Some(active) = state.challenge else {
            return;
        };

        match active.status {
            ChallengeStatus::Open { timer } => match self.challenges.tick_countdown(state, timer) {
                CountdownTick::Stale => {}
                CountdownTick::Running(remaining) => {
                    debug!(remaining, "countdown");
                    render_challenge(&mut self.presenter, state);
                }
                CountdownTick::TimedOut => self.after_challenge_step(),
            },
            ChallengeStatus::Resolved { .. } => {
                if self.challenges.tick_display(state).is_some() {
                    self.after_challenge_step();
                }
            }
        }
    }

    /// Close the bound challenge now, skipping any remaining display delay.
    pub fn close_challenge(&mut self) {
        let Some(state) = self.session.as_mut() else {
            return;
        };
        if self.challenges.close(state).is_some() {
            self.after_challenge_step();
        }
    }

    // === Internals ===

    /// Re-render after a challenge transition and handle a defeat it caused.
    fn after_challenge_step(&mut self) {
        let Some(state) = self.session.as_ref() else {
            return;
        };

        if state.challenge.is_some() {
            render_challenge(&mut self.presenter, state);
            self.presenter.render_hud(HudView::from_state(state));
            return;
        }

        render_board(&mut self.presenter, state);
        if let Some(outcome) = state.outcome {
            self.finish(outcome);
        }
    }

    fn finish(&mut self, outcome: SessionOutcome) {
        let Some(state) = self.session.as_ref() else {
            return;
        };

        let summary = state.summary();
        info!(?outcome, score = state.score, defeated = state.defeated_count, "session over");
        if self.presenter.prompt_restart_or_exit(outcome.title(), &summary) {
            self.start();
        } else {
            self.return_to_menu();
        }
    }
}

fn render_board<P: PresentationPort>(presenter: &mut P, state: &GameState) {
    let board = BoardView::from_state(state);
    presenter.render(&board);
    presenter.render_overview(&board);
    presenter.render_hud(HudView::from_state(state));
}

fn render_challenge<P: PresentationPort>(presenter: &mut P, state: &GameState) {
    if let Some(view) = ChallengeView::from_state(state) {
        presenter.render_challenge(&view);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ConfigError, Position};
    use crate::presentation::HeadlessPresenter;

    fn controller() -> SessionController<HeadlessPresenter> {
        SessionController::new(GameConfig::seeded(7), HeadlessPresenter::new()).unwrap()
    }

    /// Put the player next to the first monster and walk onto it.
    fn encounter(controller: &mut SessionController<HeadlessPresenter>) -> bool {
        let Some(state) = controller.state_mut() else {
            return false;
        };
        let Some(monster) = state.monsters.first().copied() else {
            return false;
        };
        for direction in Direction::ALL {
            let (dx, dy) = direction.delta();
            let from = Position::new(monster.position.x - dx, monster.position.y - dy);
            if state.grid.is_walkable(from) && state.monster_at(from).is_none() && from != state.king {
                state.player = from;
                return matches!(controller.move_player(direction), MoveResult::Encounter { .. });
            }
        }
        false
    }

    #[test]
    fn test_invalid_config_rejected() {
        let config = GameConfig::default().with_maze_size(2);
        let err = SessionController::new(config, HeadlessPresenter::new()).unwrap_err();
        assert!(matches!(err, SessionError::InvalidConfig(ConfigError::MazeTooSmall { .. })));
    }

    #[test]
    fn test_negative_energy_ceiling_rejected_before_start() {
        let config = GameConfig {
            max_energy: -1,
            initial_energy: -5,
            ..GameConfig::default()
        };
        let err = SessionController::new(config, HeadlessPresenter::new()).unwrap_err();
        assert!(matches!(
            err,
            SessionError::InvalidConfig(ConfigError::Negative { field: "max_energy", .. })
        ));
    }

    #[test]
    fn test_menu_has_no_session() {
        let mut controller = controller();
        assert!(controller.state().is_none());
        assert_eq!(controller.session().unwrap_err(), SessionError::NoSession);
        assert_eq!(controller.move_player(Direction::Down), MoveResult::Ignored);
        assert!(!controller.toggle_pause());
        assert_eq!(
            controller.submit_answer(AnswerTag::Correct),
            Err(ChallengeError::NoActiveChallenge)
        );
    }

    #[test]
    fn test_unknown_character() {
        let mut controller = controller();
        assert!(matches!(
            controller.start_session("wizard"),
            Err(SessionError::UnknownCharacter(_))
        ));
        assert!(controller.state().is_none());
    }

    #[test]
    fn test_start_session_renders() {
        let mut controller = controller();
        controller.start_session("cryptomage").unwrap();

        assert_eq!(controller.selected_character(), CharacterId::CryptoMage);
        let presenter = controller.presenter();
        assert_eq!(presenter.boards, 1);
        assert_eq!(presenter.overviews, 1);
        assert_eq!(presenter.last_hud().map(|h| h.score), Some(0));
    }

    #[test]
    fn test_pause_round_trip() {
        let mut controller = controller();
        controller.start_session("sentinel").unwrap();

        assert!(controller.toggle_pause());
        assert_eq!(controller.move_player(Direction::Down), MoveResult::Ignored);
        assert!(!controller.toggle_pause());

        let messages: Vec<_> = controller.presenter().messages().collect();
        assert_eq!(messages, vec!["Game Paused", "Game Resumed"]);
    }

    #[test]
    fn test_space_key_is_special_action() {
        let mut controller = controller();
        controller.start_session("sentinel").unwrap();
        assert!(matches!(controller.handle_key(" "), KeyResult::Special(_)));
        assert_eq!(controller.handle_key("q"), KeyResult::Unmapped);
    }

    #[test]
    fn test_encounter_then_answer_then_close() {
        let mut controller = controller();
        controller.start_session("sentinel").unwrap();
        assert!(encounter(&mut controller), "no approach to the first monster");

        assert!(!controller.toggle_pause());
        assert_eq!(controller.presenter().last_challenge().and_then(|c| c.remaining), Some(15));

        assert_eq!(controller.choose_option(99), Ok(Resolution::AbilitySaved));
        assert_eq!(controller.state().map(|s| s.score), Some(50));

        controller.tick();
        controller.tick();
        let state = controller.state().unwrap();
        assert!(state.challenge.is_none());
        assert!(state.accepts_input());
    }

    #[test]
    fn test_victory_prompt_then_menu() {
        let mut controller = controller();
        controller.start_session("sentinel").unwrap();
        let state = controller.state_mut().unwrap();
        let king = state.king;
        state.monsters.iter_mut().for_each(|m| m.defeated = true);
        state.player = Position::new(king.x, king.y - 1);
        state.grid.set(state.player, crate::maze::CellKind::Path);

        assert_eq!(controller.move_player(Direction::Down), MoveResult::ReachedThrone);

        let presenter = controller.presenter();
        assert_eq!(presenter.prompts.len(), 1);
        assert_eq!(presenter.prompts[0].0, "VICTORY!");
        assert!(presenter.prompts[0].1.starts_with("Final Score: 500\n"));
        assert!(controller.state().is_none());
    }
}
