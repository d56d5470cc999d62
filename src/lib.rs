//! # quiz-engine
//!
//! A Jeopardy-style trivia game-flow engine. Plays a pre-authored package
//! (rounds → themes → questions) to completion, producing a deterministic
//! sequence of presentation callbacks while accepting external inputs
//! (question selection, theme deletion, answer timing) at well-defined
//! points.
//!
//! ## Design Principles
//!
//! 1. **Presentation-Agnostic**: The engine renders nothing. Every notable
//!    transition is surfaced through the [`GameHandler`]/[`QuestionHandler`]
//!    callback traits.
//!
//! 2. **Cooperative Single-Threading**: All mutation happens inside
//!    synchronous `advance`/navigation calls that never block. Waits for
//!    external input keep the stage put until the host injects the input
//!    and advances again. No timers, no locks; a server gives each session
//!    its own execution context.
//!
//! 3. **Layered State Machines**: The session engine delegates per-round
//!    choice to a pluggable [`SelectionStrategy`] and per-question playback
//!    to the [`QuestionPlayer`], each a self-contained sub-machine with
//!    private undo/step state.
//!
//! ## Modules
//!
//! - `model`: read-only package tree (rounds, themes, questions, scripts)
//! - `rules`: per-round rules and live play options
//! - `strategy`: question/theme selection strategies per round shape
//! - `player`: the question script player
//! - `engine`: the session state machine and handler contracts
//!
//! ## Example
//!
//! ```
//! use quiz_engine::{
//!     EngineOptions, GameEngine, GameHandler, PlayOptions, QuestionHandler,
//!     model::{Package, Question, Round, Theme},
//! };
//!
//! struct Silent;
//! impl QuestionHandler for Silent {}
//! impl GameHandler for Silent {}
//!
//! let package = Package::new("demo").with_round(
//!     Round::new("round 1")
//!         .with_theme(Theme::new("History").with_question(Question::new(100, "Year?", "1492"))),
//! );
//!
//! let mut game = GameEngine::new(
//!     package,
//!     Silent,
//!     PlayOptions::default(),
//!     EngineOptions::default(),
//! )
//! .unwrap();
//!
//! while game.can_advance() {
//!     game.advance();
//! }
//! ```

pub mod engine;
pub mod error;
pub mod model;
pub mod player;
pub mod rules;
pub mod strategy;

// Re-export commonly used types
pub use crate::engine::{Cursor, GameEngine, GameHandler, QuestionHandler, RoundEndReason, Stage};
pub use crate::error::EngineError;
pub use crate::model::{
    ContentItem, ContentKind, NumberSet, Package, Parameter, Placement, Question, Round, RoundKind,
    Script, Step, StepKind, Theme,
};
pub use crate::player::QuestionPlayer;
pub use crate::rules::{
    EngineOptions, FalseStartMode, OptionsProvider, PlayOptions, RoundRules, StrategyKind,
};
pub use crate::strategy::{
    EliminationStrategy, SelectionStrategy, StandardTableStrategy, StrategyOutcome, UndoStep,
};
