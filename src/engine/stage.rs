//! Session stage, navigation cursor, and round-end reason.

use serde::{Deserialize, Serialize};

/// The engine's current named state.
///
/// `Begin → GameThemes? → Round → SelectingQuestion ⇄ QuestionType →
/// Question → SelectingQuestion | EndRound → Round | EndGame → End`
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stage {
    /// Session created, nothing announced yet.
    #[default]
    Begin,
    /// Game-themes screen pending.
    GameThemes,
    /// A round is about to start (or be skipped).
    Round,
    /// The selection strategy is choosing the next question.
    SelectingQuestion,
    /// A question was chosen; its type is about to be announced.
    QuestionType,
    /// The question player is walking the script.
    Question,
    /// The round ended; the reason is about to be reported.
    EndRound,
    /// All rounds done; package completion is about to be reported.
    EndGame,
    /// Terminal.
    End,
}

impl Stage {
    /// Whether a round is active in this stage.
    #[must_use]
    pub const fn in_round(self) -> bool {
        matches!(
            self,
            Stage::Round
                | Stage::SelectingQuestion
                | Stage::QuestionType
                | Stage::Question
                | Stage::EndRound
        )
    }
}

/// Navigation cursor: indices of the current round/theme/question.
///
/// `-1` is the "not pointing at anything" sentinel. `round` ranges over
/// `[-1, round_count]`, where `round_count` is the end-of-game position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cursor {
    pub round: i32,
    pub theme: i32,
    pub question: i32,
}

impl Cursor {
    /// Cursor pointing at nothing.
    pub const UNSET: Self = Self {
        round: -1,
        theme: -1,
        question: -1,
    };

    /// Cursor at the start of a round (no theme/question chosen).
    #[must_use]
    pub const fn at_round(round: i32) -> Self {
        Self {
            round,
            theme: -1,
            question: -1,
        }
    }
}

impl Default for Cursor {
    fn default() -> Self {
        Self::UNSET
    }
}

/// Why a round stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundEndReason {
    /// Host or strategy ended the round explicitly.
    Manual,
    /// Host reported the round timer expired.
    Timeout,
    /// Every selectable slot was played.
    Completed,
}
