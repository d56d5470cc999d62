//! Standard open-table strategy.

use smallvec::SmallVec;
use tracing::trace;

use crate::engine::GameHandler;
use crate::model::Round;
use crate::rules::PlayOptions;

use super::{SelectionStrategy, StrategyOutcome, UndoStep};

type Slot = (usize, usize);

/// Tracks the not-yet-played (theme, question) slots of a standard round.
///
/// With more than one slot remaining, `advance` asks the host for a choice
/// and waits; the choice arrives through [`SelectionStrategy::select`]. The
/// last remaining slot is selected automatically.
#[derive(Debug)]
pub struct StandardTableStrategy {
    /// Remaining slots in board order.
    remaining: Vec<Slot>,
    /// Removed slots, most recent last.
    history: SmallVec<[Slot; 8]>,
    /// A selection prompt was already sent for the current decision point.
    prompted: bool,
}

impl StandardTableStrategy {
    /// Seed the board from the round's playable slots.
    #[must_use]
    pub fn new(round: &Round) -> Self {
        let mut remaining = Vec::new();
        for (theme_index, theme) in round.themes.iter().enumerate() {
            for (question_index, question) in theme.questions.iter().enumerate() {
                if question.is_playable() {
                    remaining.push((theme_index, question_index));
                }
            }
        }
        Self {
            remaining,
            history: SmallVec::new(),
            prompted: false,
        }
    }

    /// Remaining slots in board order.
    #[must_use]
    pub fn remaining(&self) -> &[Slot] {
        &self.remaining
    }

    fn take(&mut self, position: usize) -> Slot {
        let slot = self.remaining.remove(position);
        self.history.push(slot);
        self.prompted = false;
        slot
    }
}

impl SelectionStrategy for StandardTableStrategy {
    fn should_play(&self) -> bool {
        !self.remaining.is_empty()
    }

    fn advance(&mut self, handler: &mut dyn GameHandler, _options: &PlayOptions) -> StrategyOutcome {
        match self.remaining.len() {
            0 => StrategyOutcome::RoundEnded,
            1 => {
                let (theme, question) = self.take(0);
                trace!(theme, question, "auto-selected last remaining slot");
                StrategyOutcome::Selected { theme, question }
            }
            _ => {
                if !self.prompted {
                    handler.on_awaiting_selection();
                    self.prompted = true;
                }
                StrategyOutcome::Pending
            }
        }
    }

    fn can_advance(&self) -> bool {
        !self.remaining.is_empty()
    }

    fn select(&mut self, theme: usize, question: usize) -> Option<(usize, usize)> {
        let position = self
            .remaining
            .iter()
            .position(|&slot| slot == (theme, question))?;
        Some(self.take(position))
    }

    fn delete_theme(&mut self, _theme: usize) -> bool {
        false
    }

    fn undo(&mut self) -> Option<UndoStep> {
        let slot = self.history.pop()?;
        let insert_at = self
            .remaining
            .iter()
            .position(|&other| other > slot)
            .unwrap_or(self.remaining.len());
        self.remaining.insert(insert_at, slot);
        self.prompted = false;
        Some(UndoStep::Question {
            theme: slot.0,
            question: slot.1,
        })
    }

    fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Question, Theme};

    fn round_2x2() -> Round {
        Round::new("r")
            .with_theme(
                Theme::new("A")
                    .with_question(Question::new(100, "q", "a"))
                    .with_question(Question::new(200, "q", "a")),
            )
            .with_theme(
                Theme::new("B")
                    .with_question(Question::new(100, "q", "a"))
                    .with_question(Question::placeholder()),
            )
    }

    #[test]
    fn seeds_only_playable_slots() {
        let strategy = StandardTableStrategy::new(&round_2x2());
        assert_eq!(strategy.remaining(), &[(0, 0), (0, 1), (1, 0)]);
    }

    #[test]
    fn select_removes_and_undo_restores_in_order() {
        let mut strategy = StandardTableStrategy::new(&round_2x2());

        assert_eq!(strategy.select(0, 1), Some((0, 1)));
        assert_eq!(strategy.remaining(), &[(0, 0), (1, 0)]);

        // Re-selecting a removed slot fails without touching state.
        assert_eq!(strategy.select(0, 1), None);
        assert_eq!(strategy.remaining(), &[(0, 0), (1, 0)]);

        assert_eq!(
            strategy.undo(),
            Some(UndoStep::Question {
                theme: 0,
                question: 1
            })
        );
        assert_eq!(strategy.remaining(), &[(0, 0), (0, 1), (1, 0)]);
        assert!(!strategy.can_undo());
    }
}
