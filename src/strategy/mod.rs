//! Selection strategies: pluggable per-round question/theme choice.
//!
//! A strategy is a pure per-round sub-machine. It owns the round's
//! remaining-slot (or remaining-theme) set and a private undo history, both
//! discarded when the round ends. It knows nothing about the outer session;
//! decisions flow back to the engine as [`StrategyOutcome`] values consumed
//! synchronously within the same `advance` call.

mod elimination;
mod standard;

pub use elimination::EliminationStrategy;
pub use standard::StandardTableStrategy;

use crate::engine::GameHandler;
use crate::model::Round;
use crate::rules::{PlayOptions, StrategyKind};

/// One step's worth of strategy work.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StrategyOutcome {
    /// Waiting for host input (a selection or a deletion).
    Pending,
    /// A slot was chosen; the engine plays `themes[theme].questions[question]`.
    Selected { theme: usize, question: usize },
    /// The strategy ended the round on its own.
    RoundEnded,
}

/// What a successful undo restored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UndoStep {
    /// A selected question is back on the board.
    Question { theme: usize, question: usize },
    /// A deleted theme is back in play.
    Theme { theme: usize },
}

/// Common strategy contract.
///
/// `advance` does at most one unit of work per call; waits for external
/// input are modeled as [`StrategyOutcome::Pending`] with the round's stage
/// staying put, never as an in-process block.
pub trait SelectionStrategy {
    /// Whether the round should be played at all. False means the engine
    /// skips the round without a "round started" notification.
    fn should_play(&self) -> bool;

    /// One step: auto-select when the choice is forced, otherwise ask the
    /// host (via `handler`) and report `Pending`.
    fn advance(&mut self, handler: &mut dyn GameHandler, options: &PlayOptions) -> StrategyOutcome;

    /// Whether any further moves exist.
    fn can_advance(&self) -> bool;

    /// Host-injected slot choice. Returns the accepted `(theme, question)`
    /// pair, or `None` for an invalid/already-removed slot (state
    /// unchanged).
    fn select(&mut self, theme: usize, question: usize) -> Option<(usize, usize)>;

    /// Host-injected theme deletion (final round only). Returns false for
    /// invalid themes; state unchanged.
    fn delete_theme(&mut self, theme: usize) -> bool;

    /// Reverse the most recent step, restoring board state.
    fn undo(&mut self) -> Option<UndoStep>;

    /// Whether there is anything to undo.
    fn can_undo(&self) -> bool;
}

/// Build the strategy for a round.
#[must_use]
pub fn for_round(round: &Round, kind: StrategyKind) -> Box<dyn SelectionStrategy> {
    match kind {
        StrategyKind::SelectByPlayer => Box::new(StandardTableStrategy::new(round)),
        StrategyKind::RemoveOtherThemes => Box::new(EliminationStrategy::new(round)),
    }
}
