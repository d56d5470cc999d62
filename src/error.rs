//! Engine errors.
//!
//! Only construction-time contract checks are errors. Invalid navigation
//! and selection requests are reported as boolean failure returns with
//! state unchanged; missing content is recovered via configured fallbacks;
//! host-reported timeouts and skips are first-class inputs. Mid-session
//! programming-contract violations (advancing a stage whose sub-machine is
//! missing) are bugs and panic.

use thiserror::Error;

/// Errors creating a game session.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    /// The package has no rounds to play.
    #[error("package contains no rounds")]
    EmptyPackage,
}
