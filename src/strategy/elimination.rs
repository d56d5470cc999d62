//! Final-round theme-elimination strategy.

use smallvec::SmallVec;
use tracing::trace;

use crate::engine::GameHandler;
use crate::model::Round;
use crate::rules::PlayOptions;

use super::{SelectionStrategy, StrategyOutcome, UndoStep};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum ElimAction {
    Deleted(usize),
    Selected(usize),
}

/// Eliminates themes one deletion per step until one remains, then
/// auto-selects it.
///
/// Eligible themes are the named, non-empty ones. With
/// `play_all_final_questions` set no elimination happens: each step
/// auto-selects the next remaining theme in order.
#[derive(Debug)]
pub struct EliminationStrategy {
    /// Names of all eligible themes, for the host's elimination screen.
    names: Vec<String>,
    /// Indices (into the round's theme list) still in play.
    remaining: Vec<usize>,
    /// Past deletions/selections, most recent last.
    history: SmallVec<[ElimAction; 8]>,
    /// A deletion prompt was already sent for the current decision point.
    prompted: bool,
    /// The theme list was already announced to the host.
    announced: bool,
}

impl EliminationStrategy {
    /// Seed the eligible-theme set from the round.
    #[must_use]
    pub fn new(round: &Round) -> Self {
        let mut names = Vec::new();
        let mut remaining = Vec::new();
        for (index, theme) in round.themes.iter().enumerate() {
            if !theme.name.is_empty() && !theme.questions.is_empty() {
                names.push(theme.name.clone());
                remaining.push(index);
            }
        }
        Self {
            names,
            remaining,
            history: SmallVec::new(),
            prompted: false,
            announced: false,
        }
    }

    /// Theme indices still in play.
    #[must_use]
    pub fn remaining(&self) -> &[usize] {
        &self.remaining
    }

    fn select_position(&mut self, position: usize) -> StrategyOutcome {
        let theme = self.remaining.remove(position);
        self.history.push(ElimAction::Selected(theme));
        self.prompted = false;
        trace!(theme, "final theme selected");
        StrategyOutcome::Selected { theme, question: 0 }
    }

    fn restore(&mut self, theme: usize) {
        let insert_at = self
            .remaining
            .iter()
            .position(|&other| other > theme)
            .unwrap_or(self.remaining.len());
        self.remaining.insert(insert_at, theme);
        self.prompted = false;
    }
}

impl SelectionStrategy for EliminationStrategy {
    fn should_play(&self) -> bool {
        !self.remaining.is_empty()
    }

    fn advance(&mut self, handler: &mut dyn GameHandler, options: &PlayOptions) -> StrategyOutcome {
        if self.remaining.is_empty() {
            return StrategyOutcome::RoundEnded;
        }

        if options.play_all_final_questions {
            // Every eligible theme gets played, in board order.
            return self.select_position(0);
        }

        if self.remaining.len() == 1 {
            return self.select_position(0);
        }

        if !self.announced {
            handler.on_final_themes(&self.names);
            self.announced = true;
        }
        if !self.prompted {
            handler.on_awaiting_theme_deletion();
            self.prompted = true;
        }
        StrategyOutcome::Pending
    }

    fn can_advance(&self) -> bool {
        !self.remaining.is_empty()
    }

    fn select(&mut self, theme: usize, question: usize) -> Option<(usize, usize)> {
        if question != 0 {
            return None;
        }
        let position = self.remaining.iter().position(|&index| index == theme)?;
        match self.select_position(position) {
            StrategyOutcome::Selected { theme, question } => Some((theme, question)),
            _ => None,
        }
    }

    fn delete_theme(&mut self, theme: usize) -> bool {
        // The last theme in play cannot be deleted, only selected.
        if self.remaining.len() <= 1 {
            return false;
        }
        let Some(position) = self.remaining.iter().position(|&index| index == theme) else {
            return false;
        };
        self.remaining.remove(position);
        self.history.push(ElimAction::Deleted(theme));
        self.prompted = false;
        trace!(theme, "theme deleted");
        true
    }

    fn undo(&mut self) -> Option<UndoStep> {
        match self.history.pop()? {
            ElimAction::Deleted(theme) => {
                self.restore(theme);
                Some(UndoStep::Theme { theme })
            }
            ElimAction::Selected(theme) => {
                self.restore(theme);
                Some(UndoStep::Question { theme, question: 0 })
            }
        }
    }

    fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Question, Theme};

    fn final_round(names: &[&str]) -> Round {
        let mut round = Round::new_final("final");
        for name in names {
            round = round.with_theme(Theme::new(*name).with_question(Question::new(0, "q", "a")));
        }
        round
    }

    #[test]
    fn unnamed_and_empty_themes_are_ineligible() {
        let round = Round::new_final("final")
            .with_theme(Theme::new("").with_question(Question::new(0, "q", "a")))
            .with_theme(Theme::new("Named"))
            .with_theme(Theme::new("Full").with_question(Question::new(0, "q", "a")));

        let strategy = EliminationStrategy::new(&round);
        assert_eq!(strategy.remaining(), &[2]);
    }

    #[test]
    fn cannot_delete_last_theme() {
        let mut strategy = EliminationStrategy::new(&final_round(&["A", "B"]));
        assert!(strategy.delete_theme(0));
        assert!(!strategy.delete_theme(1));
        assert_eq!(strategy.remaining(), &[1]);
    }

    #[test]
    fn undo_restores_deletion() {
        let mut strategy = EliminationStrategy::new(&final_round(&["A", "B", "C"]));
        assert!(strategy.delete_theme(1));
        assert_eq!(strategy.remaining(), &[0, 2]);

        assert_eq!(strategy.undo(), Some(UndoStep::Theme { theme: 1 }));
        assert_eq!(strategy.remaining(), &[0, 1, 2]);
    }
}
