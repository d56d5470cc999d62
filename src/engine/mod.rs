//! Session-level game engine.
//!
//! [`GameEngine`] composes the selection strategies and the question player
//! into one state machine and is the only component owning cross-round and
//! cross-question state. See [`Stage`] for the state diagram.

mod game;
mod handler;
mod stage;

pub use game::GameEngine;
pub use handler::{GameHandler, QuestionHandler};
pub use stage::{Cursor, RoundEndReason, Stage};
