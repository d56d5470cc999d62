//! Per-round-shape rules.

use serde::{Deserialize, Serialize};

use crate::model::{question_types, RoundKind};

/// Which selection strategy drives a round.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StrategyKind {
    /// Open table: a player picks any remaining slot.
    SelectByPlayer,
    /// Final round: themes are deleted until one remains.
    RemoveOtherThemes,
}

/// Rules resolved once per round from its shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoundRules {
    /// Type assigned to questions whose authored type is not played
    /// (specials with `play_specials` off), and the reference for the
    /// "is default type" presentation flag.
    pub default_question_type: &'static str,

    /// Strategy kind for this round shape.
    pub strategy_kind: StrategyKind,
}

impl RoundRules {
    /// Rules for a standard open-table round.
    pub const STANDARD: Self = Self {
        default_question_type: question_types::SIMPLE,
        strategy_kind: StrategyKind::SelectByPlayer,
    };

    /// Rules for a final (elimination) round.
    pub const FINAL: Self = Self {
        default_question_type: question_types::SIMPLE,
        strategy_kind: StrategyKind::RemoveOtherThemes,
    };

    /// Resolve the rules for a round shape.
    #[must_use]
    pub const fn for_kind(kind: RoundKind) -> Self {
        match kind {
            RoundKind::Standard => Self::STANDARD,
            RoundKind::Final => Self::FINAL,
        }
    }
}
