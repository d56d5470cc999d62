//! Package tree: rounds, themes, questions.

use serde::{Deserialize, Serialize};

use super::content::ContentItem;
use super::script::Script;

/// Well-known question type names.
///
/// Type names are open-ended strings (packages may define their own), but
/// these four are recognized by the engine: the three special kinds are
/// downgraded to the round default when `play_specials` is off.
pub mod question_types {
    /// Plain question.
    pub const SIMPLE: &str = "simple";
    /// Wager question: the answerer bids a price.
    pub const STAKE: &str = "stake";
    /// Secret question: handed to another player, price resolved externally.
    pub const SECRET: &str = "secret";
    /// No-risk question: wrong answers do not penalize.
    pub const NO_RISK: &str = "noRisk";

    /// Whether a type name denotes a special kind.
    #[must_use]
    pub fn is_special(name: &str) -> bool {
        matches!(name, STAKE | SECRET | NO_RISK)
    }
}

/// Round shape tag.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RoundKind {
    /// Open table: players pick any remaining question.
    #[default]
    Standard,
    /// Final round: themes are eliminated until one remains.
    Final,
}

/// A single question: price, type, answers, and a playback script.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Question {
    /// Nominal price. Negative marks a non-playable placeholder slot.
    pub price: i64,

    /// Type name (see [`question_types`]).
    pub type_name: String,

    /// Accepted answers. May be empty; the player falls back to a
    /// configured placeholder at reveal time.
    #[serde(default)]
    pub right: Vec<String>,

    /// Known wrong answers (for host-side validation hints).
    #[serde(default)]
    pub wrong: Vec<String>,

    /// Playback script.
    pub script: Script,
}

impl Question {
    /// Create a simple question with the standard show-then-accept script.
    pub fn new(price: i64, text: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            price,
            type_name: question_types::SIMPLE.to_string(),
            right: vec![answer.into()],
            wrong: Vec::new(),
            script: Script::standard(vec![ContentItem::text(text)]),
        }
    }

    /// Create a placeholder slot (already played / authored empty).
    #[must_use]
    pub fn placeholder() -> Self {
        Self {
            price: -1,
            type_name: question_types::SIMPLE.to_string(),
            right: Vec::new(),
            wrong: Vec::new(),
            script: Script::new(),
        }
    }

    /// Set the type name.
    #[must_use]
    pub fn with_type(mut self, type_name: impl Into<String>) -> Self {
        self.type_name = type_name.into();
        self
    }

    /// Replace the script.
    #[must_use]
    pub fn with_script(mut self, script: Script) -> Self {
        self.script = script;
        self
    }

    /// Whether this slot can be played (non-placeholder price).
    #[must_use]
    pub fn is_playable(&self) -> bool {
        self.price >= 0
    }
}

/// A named column of questions.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Theme {
    pub name: String,
    pub questions: Vec<Question>,
}

impl Theme {
    /// Create an empty theme.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            questions: Vec::new(),
        }
    }

    /// Append a question.
    #[must_use]
    pub fn with_question(mut self, question: Question) -> Self {
        self.questions.push(question);
        self
    }

    /// Whether the theme has at least one playable question.
    #[must_use]
    pub fn has_playable_question(&self) -> bool {
        self.questions.iter().any(Question::is_playable)
    }
}

/// An ordered list of themes with a shape tag.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Round {
    pub name: String,
    pub kind: RoundKind,
    pub themes: Vec<Theme>,
}

impl Round {
    /// Create an empty standard round.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: RoundKind::Standard,
            themes: Vec::new(),
        }
    }

    /// Create an empty final round.
    pub fn new_final(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind: RoundKind::Final,
            themes: Vec::new(),
        }
    }

    /// Append a theme.
    #[must_use]
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.themes.push(theme);
        self
    }
}

/// The authored quiz document: an ordered list of rounds.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Package {
    pub name: String,
    pub rounds: Vec<Round>,
}

impl Package {
    /// Create an empty package.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            rounds: Vec::new(),
        }
    }

    /// Append a round.
    #[must_use]
    pub fn with_round(mut self, round: Round) -> Self {
        self.rounds.push(round);
        self
    }

    /// Consolidated list of theme names that contain at least one playable
    /// question: de-duplicated, alphabetically sorted.
    #[must_use]
    pub fn playable_theme_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .rounds
            .iter()
            .flat_map(|round| round.themes.iter())
            .filter(|theme| theme.has_playable_question())
            .map(|theme| theme.name.clone())
            .collect();
        names.sort();
        names.dedup();
        names
    }
}
