//! The game session state machine.

use tracing::{debug, warn};

use crate::error::EngineError;
use crate::model::Package;
use crate::player::QuestionPlayer;
use crate::rules::{EngineOptions, OptionsProvider, RoundRules};
use crate::strategy::{self, SelectionStrategy, StrategyOutcome, UndoStep};

use super::handler::GameHandler;
use super::stage::{Cursor, RoundEndReason, Stage};

/// One game session.
///
/// Single-threaded cooperative: every mutation happens inside the
/// synchronous `advance`/navigation calls, which never block. A wait for
/// external input is modeled as the stage staying put until the host
/// injects the input and calls [`advance`](Self::advance) again. The engine
/// contains no timers; timeouts arrive from the host as already-resolved
/// booleans.
///
/// At most one of the strategy and the player is driving at any time,
/// mirroring the stage; the strategy outlives the questions of its round
/// (it keeps the remaining-slot set) and both are discarded when the round
/// ends.
pub struct GameEngine<H, O> {
    package: Package,
    handler: H,
    options: O,
    engine_options: EngineOptions,

    stage: Stage,
    cursor: Cursor,
    rules: RoundRules,
    strategy: Option<Box<dyn SelectionStrategy>>,
    player: Option<QuestionPlayer>,
    /// Cursor snapshots taken before each selection, cleared per round.
    history: Vec<Cursor>,
    /// Decided once per round, consumed by the end-round transition.
    end_reason: Option<RoundEndReason>,
    /// Computed once at Begin when the game-themes screen is configured.
    game_themes: Vec<String>,
}

impl<H: GameHandler, O: OptionsProvider> GameEngine<H, O> {
    /// Create a session over a package.
    pub fn new(
        package: Package,
        handler: H,
        options: O,
        engine_options: EngineOptions,
    ) -> Result<Self, EngineError> {
        if package.rounds.is_empty() {
            return Err(EngineError::EmptyPackage);
        }
        Ok(Self {
            package,
            handler,
            options,
            engine_options,
            stage: Stage::Begin,
            cursor: Cursor::UNSET,
            rules: RoundRules::STANDARD,
            strategy: None,
            player: None,
            history: Vec::new(),
            end_reason: None,
            game_themes: Vec::new(),
        })
    }

    /// Current stage.
    #[must_use]
    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// Current navigation cursor.
    #[must_use]
    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    /// The package being played.
    #[must_use]
    pub fn package(&self) -> &Package {
        &self.package
    }

    /// The presentation handler.
    pub fn handler_mut(&mut self) -> &mut H {
        &mut self.handler
    }

    /// Whether `advance` would do anything. Never mutates state.
    #[must_use]
    pub fn can_advance(&self) -> bool {
        match self.stage {
            Stage::End => false,
            Stage::SelectingQuestion => self
                .strategy
                .as_ref()
                .is_some_and(|strategy| strategy.can_advance()),
            _ => true,
        }
    }

    /// Whether mid-round back-navigation is available.
    #[must_use]
    pub fn can_move_back(&self) -> bool {
        self.stage.in_round()
            && self
                .strategy
                .as_ref()
                .is_some_and(|strategy| strategy.can_undo())
    }

    /// Perform one step of the game.
    pub fn advance(&mut self) {
        match self.stage {
            Stage::Begin => self.on_begin(),
            Stage::GameThemes => {
                self.handler.on_game_themes(&self.game_themes);
                self.enter_round(0);
            }
            Stage::Round => self.on_round(),
            Stage::SelectingQuestion => self.on_selecting(),
            Stage::QuestionType => self.on_question_type(),
            Stage::Question => self.on_question(),
            Stage::EndRound => self.on_end_round(),
            Stage::EndGame => {
                self.handler.on_package_finished();
                self.stage = Stage::End;
            }
            Stage::End => {
                warn!("advance called on a finished session");
            }
        }
    }

    /// Undo the most recent selection (or theme deletion), restoring the
    /// board and the cursor, and return to question selection.
    pub fn move_back(&mut self) -> bool {
        if !self.can_move_back() {
            return false;
        }
        let strategy = self.strategy.as_mut().expect("checked by can_move_back");
        let Some(step) = strategy.undo() else {
            return false;
        };
        match step {
            UndoStep::Question { theme, question } => {
                self.cursor = self
                    .history
                    .pop()
                    .unwrap_or(Cursor::at_round(self.cursor.round));
                self.handler.on_question_restored(theme, question);
            }
            UndoStep::Theme { theme } => {
                self.handler.on_theme_restored(theme);
            }
        }
        self.player = None;
        self.end_reason = None;
        self.stage = Stage::SelectingQuestion;
        debug!(cursor = ?self.cursor, "moved back");
        true
    }

    /// Jump to the next round (or to end-of-game past the last one).
    pub fn move_to_next_round(&mut self) -> bool {
        let target = self.cursor.round + 1;
        if target > self.package.rounds.len() as i32 {
            return false;
        }
        self.leave_round();
        self.enter_round(target as usize);
        true
    }

    /// Jump to the previous round.
    pub fn move_to_previous_round(&mut self) -> bool {
        let target = self.cursor.round - 1;
        if target < 0 {
            return false;
        }
        self.leave_round();
        self.enter_round(target as usize);
        true
    }

    /// Jump to a specific round. Re-clicking the current round moves to the
    /// previous one when mid-round back-navigation is available.
    pub fn move_to_round(&mut self, index: usize) -> bool {
        if index >= self.package.rounds.len() {
            return false;
        }
        if index as i32 == self.cursor.round {
            if self.can_move_back() {
                return self.move_to_previous_round();
            }
            return false;
        }
        self.leave_round();
        self.enter_round(index);
        true
    }

    /// Host-injected question choice, valid while selecting.
    pub fn select_question(&mut self, theme: usize, question: usize) -> bool {
        if self.stage != Stage::SelectingQuestion {
            return false;
        }
        let strategy = self
            .strategy
            .as_mut()
            .expect("selecting stage without a strategy");
        match strategy.select(theme, question) {
            Some((theme, question)) => {
                self.apply_selection(theme, question);
                true
            }
            None => false,
        }
    }

    /// Host-injected theme deletion (final round), valid while selecting.
    pub fn delete_theme(&mut self, theme: usize) -> bool {
        if self.stage != Stage::SelectingQuestion {
            return false;
        }
        let strategy = self
            .strategy
            .as_mut()
            .expect("selecting stage without a strategy");
        if strategy.delete_theme(theme) {
            self.handler.on_theme_deleted(theme);
            true
        } else {
            false
        }
    }

    /// Jump the current question straight to its answer.
    pub fn skip_to_answer(&mut self) {
        match self.player.as_mut() {
            Some(player) => player.skip_to_answer(),
            None => warn!("skip_to_answer called with no active question"),
        }
    }

    /// Whether the current question's latest emission was audio/video.
    #[must_use]
    pub fn is_media(&self) -> bool {
        self.player
            .as_ref()
            .is_some_and(QuestionPlayer::is_media)
    }

    // === Stage handlers ===

    fn on_begin(&mut self) {
        self.handler.on_package_started(&self.package);
        if self.engine_options.show_game_themes {
            self.game_themes = self.package.playable_theme_names();
            self.stage = Stage::GameThemes;
        } else {
            self.enter_round(0);
        }
    }

    fn on_round(&mut self) {
        let index = self.cursor.round as usize;
        let round = &self.package.rounds[index];
        self.rules = RoundRules::for_kind(round.kind);
        let strategy = strategy::for_round(round, self.rules.strategy_kind);

        if strategy.should_play() {
            debug!(round = %round.name, "round started");
            self.handler.on_round_started(round);
            self.strategy = Some(strategy);
            self.stage = Stage::SelectingQuestion;
        } else {
            debug!(round = %round.name, "round skipped");
            self.handler.on_round_skipped(round);
            self.enter_round(index + 1);
        }
    }

    fn on_selecting(&mut self) {
        let options = self.options.play_options();
        let strategy = self
            .strategy
            .as_mut()
            .expect("selecting stage without a strategy");
        match strategy.advance(&mut self.handler, &options) {
            StrategyOutcome::Pending => {}
            StrategyOutcome::Selected { theme, question } => {
                self.apply_selection(theme, question);
            }
            StrategyOutcome::RoundEnded => {
                self.end_reason = Some(RoundEndReason::Manual);
                self.stage = Stage::EndRound;
            }
        }
    }

    fn on_question_type(&mut self) {
        let player = self
            .player
            .as_ref()
            .expect("question-type stage without a player");
        let type_name = player.type_name().to_string();
        let is_default = type_name == self.rules.default_question_type;
        self.handler.on_question_type(&type_name, is_default);
        self.stage = Stage::Question;
    }

    fn on_question(&mut self) {
        let options = self.options.play_options();
        let player = self
            .player
            .as_mut()
            .expect("question stage without a player");
        if player.play_next(&mut self.handler, &options) {
            return;
        }

        self.player = None;
        let round_timed_out = self.handler.on_question_end();
        if round_timed_out {
            self.end_reason = Some(RoundEndReason::Timeout);
            self.stage = Stage::EndRound;
            return;
        }
        let more_slots = self
            .strategy
            .as_ref()
            .expect("question stage without a strategy")
            .can_advance();
        if more_slots {
            self.stage = Stage::SelectingQuestion;
        } else {
            self.end_reason = Some(RoundEndReason::Completed);
            self.stage = Stage::EndRound;
        }
    }

    fn on_end_round(&mut self) {
        let reason = self
            .end_reason
            .take()
            .expect("end-round stage without a reason");
        debug!(?reason, "round ended");
        self.handler.on_round_ended(reason);
        let next = (self.cursor.round + 1) as usize;
        self.enter_round(next);
    }

    // === Round transitions ===

    /// Report a manual end for the round being left, if one is active.
    fn leave_round(&mut self) {
        if self.stage.in_round() {
            self.handler.on_round_ended(RoundEndReason::Manual);
        }
    }

    /// Reset per-round state and position at `index` (or end-of-game).
    fn enter_round(&mut self, index: usize) {
        self.strategy = None;
        self.player = None;
        self.history.clear();
        self.end_reason = None;
        if index >= self.package.rounds.len() {
            self.cursor = Cursor::at_round(self.package.rounds.len() as i32);
            self.stage = Stage::EndGame;
        } else {
            self.cursor = Cursor::at_round(index as i32);
            self.stage = Stage::Round;
        }
    }

    fn apply_selection(&mut self, theme: usize, question: usize) {
        let round = &self.package.rounds[self.cursor.round as usize];
        let data = &round.themes[theme].questions[question];

        self.history.push(self.cursor);
        self.cursor.theme = theme as i32;
        self.cursor.question = question as i32;
        self.handler.on_question_selected(theme, question, data);

        let options = self.options.play_options();
        self.player = Some(QuestionPlayer::new(
            data,
            self.rules.default_question_type,
            &options,
            self.engine_options.fallback_right_answer.clone(),
        ));
        self.stage = Stage::QuestionType;
        debug!(theme, question, "question selected");
    }
}
