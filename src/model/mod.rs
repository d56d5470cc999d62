//! Read-only package tree: the authored quiz document.
//!
//! The engine never mutates this tree. It is produced by a package-loading
//! collaborator (parser, editor, test fixture) and consumed by the engine,
//! the selection strategies, and the question player.

mod content;
mod package;
mod script;

pub use content::{ContentItem, ContentKind, Placement};
pub use package::{question_types, Package, Question, Round, RoundKind, Theme};
pub use script::{params, NumberSet, Parameter, Script, Step, StepKind};
