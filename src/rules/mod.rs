//! Round rules and live play options.
//!
//! Rules are resolved once when a round starts from its shape tag; options
//! are a live snapshot read through [`OptionsProvider`] at each decision
//! point and never cached across calls.

mod options;
mod round_rules;

pub use options::{EngineOptions, FalseStartMode, OptionsProvider, PlayOptions};
pub use round_rules::{RoundRules, StrategyKind};
