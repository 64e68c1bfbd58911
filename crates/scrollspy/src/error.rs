//! Navigation errors
//!
//! The engine is a best-effort UI affordance: the `go_to` surface swallows
//! all of these (logging at debug level) and degrades to a no-op. They are
//! only surfaced by `try_go_to` for hosts that want the reason.

use scrollspy_core::SectionId;
use thiserror::Error;

/// Why a navigation request could not be issued
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigateError {
    /// The id does not resolve to a registered section
    #[error("no section registered for id `{0}`")]
    UnknownSection(SectionId),

    /// The section exists but cannot currently be measured
    #[error("section `{0}` cannot be measured")]
    Unmeasurable(SectionId),

    /// No scroll frame has been registered
    #[error("no scroll frame registered")]
    NoFrame,
}
