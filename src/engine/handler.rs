//! Presentation handler contracts.
//!
//! The engine renders nothing. Every notable transition is surfaced through
//! these traits so the host can drive its own presentation layer:
//!
//! - [`QuestionHandler`]: per-step emissions while one question plays.
//! - [`GameHandler`]: session-level notifications (rounds, themes,
//!   selections). It extends [`QuestionHandler`], so a host implements both
//!   contracts on one type and the engine holds a single handler.
//!
//! All methods except [`GameHandler::on_question_end`] default to no-ops;
//! hosts override what they present.

use crate::model::{ContentItem, NumberSet, Package, Question, Round, StepKind};

use super::stage::RoundEndReason;

/// Per-step emissions of the question player.
pub trait QuestionHandler {
    /// A group of content items revealed together, in document order.
    ///
    /// `press_allowed` is the current buzz-in permission under the
    /// question's false-start mode.
    fn on_content(&mut self, items: &[ContentItem], press_allowed: bool) {
        let _ = (items, press_allowed);
    }

    /// The right answer revealed as plain text.
    fn on_answer_revealed(&mut self, text: &str) {
        let _ = text;
    }

    /// The right answer revealed as embedded content.
    fn on_answer_content(&mut self, items: &[ContentItem]) {
        let _ = items;
    }

    /// The player paused at an accept step; the host drives answer
    /// validation and calls `advance` again when done.
    fn on_awaiting_validation(&mut self, right: &[String]) {
        let _ = right;
    }

    /// The player paused pending an external resolution (wager amount,
    /// answerer choice). `range` carries the admissible numbers when the
    /// step declares them.
    fn on_awaiting_resolution(&mut self, kind: StepKind, range: Option<&NumberSet>) {
        let _ = (kind, range);
    }
}

/// Session-level notifications of the game engine.
pub trait GameHandler: QuestionHandler {
    /// The package was announced; the game is starting.
    fn on_package_started(&mut self, package: &Package) {
        let _ = package;
    }

    /// All rounds are done.
    fn on_package_finished(&mut self) {}

    /// Consolidated game-themes list (playable themes only, sorted).
    fn on_game_themes(&mut self, names: &[String]) {
        let _ = names;
    }

    /// A round started.
    fn on_round_started(&mut self, round: &Round) {
        let _ = round;
    }

    /// A round was skipped (nothing playable in it).
    fn on_round_skipped(&mut self, round: &Round) {
        let _ = round;
    }

    /// A round ended.
    fn on_round_ended(&mut self, reason: RoundEndReason) {
        let _ = reason;
    }

    /// The strategy awaits an external question choice.
    fn on_awaiting_selection(&mut self) {}

    /// A question was selected (by the host or automatically).
    fn on_question_selected(&mut self, theme: usize, question: usize, data: &Question) {
        let _ = (theme, question, data);
    }

    /// A selection was undone; the slot is back on the board.
    fn on_question_restored(&mut self, theme: usize, question: usize) {
        let _ = (theme, question);
    }

    /// The chosen question's type was resolved.
    fn on_question_type(&mut self, type_name: &str, is_default: bool) {
        let _ = (type_name, is_default);
    }

    /// Final round: the list of themes still in play.
    fn on_final_themes(&mut self, names: &[String]) {
        let _ = names;
    }

    /// Final round: the strategy awaits a theme deletion.
    fn on_awaiting_theme_deletion(&mut self) {}

    /// Final round: a theme was deleted.
    fn on_theme_deleted(&mut self, theme: usize) {
        let _ = theme;
    }

    /// Final round: a deletion was undone.
    fn on_theme_restored(&mut self, theme: usize) {
        let _ = theme;
    }

    /// The question finished; the host reports whether the round timer
    /// expired meanwhile. A first-class input, not an error.
    fn on_question_end(&mut self) -> bool {
        false
    }
}
