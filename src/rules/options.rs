//! Play options: live toggles read at each decision point.

use std::sync::{Arc, RwLock};

use serde::{Deserialize, Serialize};

/// Live-toggleable play options.
///
/// The engine reads a fresh snapshot through [`OptionsProvider`] at every
/// decision point, so a host can flip these mid-game and the next decision
/// sees the new value.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayOptions {
    /// Players answer via press button; buzz-in is allowed while content is
    /// still revealing.
    pub press_mode: bool,

    /// Buzz-in is allowed once all text is out, even if media still plays.
    /// Only consulted when `press_mode` is off.
    pub multimedia_press_mode: bool,

    /// Reveal simple right answers automatically at the accept step.
    pub show_right_answers: bool,

    /// Play special question types (stake/secret/noRisk) as authored.
    /// When off, specials are downgraded to the round's default type.
    pub play_specials: bool,

    /// Final round: play every eligible theme instead of eliminating down
    /// to one.
    pub play_all_final_questions: bool,
}

impl Default for PlayOptions {
    fn default() -> Self {
        Self {
            press_mode: true,
            multimedia_press_mode: false,
            show_right_answers: false,
            play_specials: true,
            play_all_final_questions: false,
        }
    }
}

/// How early a participant may buzz in while content is revealing.
///
/// Resolved once per question from the options snapshot taken at question
/// start.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum FalseStartMode {
    /// Never before the content is fully revealed.
    Disabled,
    /// Once all text items are shown; media may still be running.
    TextOnly,
    /// Immediately.
    Enabled,
}

impl FalseStartMode {
    /// Resolve the mode from an options snapshot.
    #[must_use]
    pub fn from_options(options: &PlayOptions) -> Self {
        if options.press_mode {
            FalseStartMode::Enabled
        } else if options.multimedia_press_mode {
            FalseStartMode::TextOnly
        } else {
            FalseStartMode::Disabled
        }
    }
}

/// Source of live option snapshots.
///
/// Implemented for a plain [`PlayOptions`] (fixed options) and for
/// `Arc<RwLock<PlayOptions>>` (host-toggleable options).
pub trait OptionsProvider {
    /// Current options snapshot.
    fn play_options(&self) -> PlayOptions;
}

impl OptionsProvider for PlayOptions {
    fn play_options(&self) -> PlayOptions {
        *self
    }
}

impl OptionsProvider for Arc<RwLock<PlayOptions>> {
    fn play_options(&self) -> PlayOptions {
        // A poisoned lock means a host thread panicked mid-write; the
        // stored snapshot is still a plain Copy value, safe to read.
        match self.read() {
            Ok(guard) => *guard,
            Err(poisoned) => *poisoned.into_inner(),
        }
    }
}

/// Static per-session configuration, fixed at engine construction.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineOptions {
    /// Show the consolidated game-themes list before the first round.
    pub show_game_themes: bool,

    /// Text revealed when a question declares no right answer.
    pub fallback_right_answer: String,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            show_game_themes: true,
            fallback_right_answer: "(no answer)".to_string(),
        }
    }
}
