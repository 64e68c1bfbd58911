//! Navigation phase state machine
//!
//! The gate that decides whether detection results may be published.
//! While a programmatic scroll is in flight the detector keeps running on
//! scroll events, but the public active id and the change callback are
//! frozen; the latest result is published once when the phase returns to
//! `Idle`. This is what prevents the menu from flickering through
//! intermediate sections during an animated scroll.

use std::fmt;
use std::hash::Hash;

use crate::events::{event_types, EventType};

/// Trait for event-driven state machines
///
/// Implement this on a state enum to define how events cause transitions.
/// `on_event` returns the new state, or `None` if the event does not
/// transition out of the current state.
pub trait StateTransitions:
    Clone + Copy + PartialEq + Eq + Hash + Send + Sync + fmt::Debug + 'static
{
    /// Handle an event and return the new state, or None if no transition
    fn on_event(&self, event: EventType) -> Option<Self>;
}

/// Navigation phases for the publication gate
///
/// ```text
///               NAVIGATE
///     Idle ─────────────────► Navigating
///       ▲                         │
///       │  SETTLED / CANCELLED    │
///       └─────────────────────────┘
/// ```
///
/// # Events
///
/// - `NAVIGATE`: a `go_to` call issued a scroll request
/// - `SETTLED`: the completion poll observed the frame at the target
///   (within tolerance) or the settle timeout elapsed
/// - `CANCELLED`: the flight was invalidated by a frame swap or removal
///   of the target section
///
/// `SCROLL` events never change the phase; scrolling during a flight only
/// updates the detector's internal result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NavPhase {
    /// No programmatic scroll in flight; detection results publish freely
    #[default]
    Idle,
    /// A triggered scroll is in flight; publication is suppressed
    Navigating,
}

impl NavPhase {
    /// Returns true while a triggered scroll is in flight
    pub fn is_navigating(&self) -> bool {
        matches!(self, NavPhase::Navigating)
    }
}

impl StateTransitions for NavPhase {
    fn on_event(&self, event: EventType) -> Option<Self> {
        match (self, event) {
            // Idle -> Navigating: go_to issued a scroll request
            (NavPhase::Idle, event_types::NAVIGATE) => Some(NavPhase::Navigating),

            // Navigating -> Navigating: a second go_to replaces the flight (no change)
            (NavPhase::Navigating, event_types::NAVIGATE) => None,

            // Navigating -> Idle: completion poll settled
            (NavPhase::Navigating, event_types::SETTLED) => Some(NavPhase::Idle),

            // Navigating -> Idle: flight invalidated
            (NavPhase::Navigating, event_types::CANCELLED) => Some(NavPhase::Idle),

            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_navigate_enters_navigating() {
        let phase = NavPhase::Idle;
        assert_eq!(
            phase.on_event(event_types::NAVIGATE),
            Some(NavPhase::Navigating)
        );
    }

    #[test]
    fn test_repeat_navigate_stays_navigating() {
        let phase = NavPhase::Navigating;
        assert_eq!(phase.on_event(event_types::NAVIGATE), None);
    }

    #[test]
    fn test_settled_and_cancelled_return_to_idle() {
        let phase = NavPhase::Navigating;
        assert_eq!(phase.on_event(event_types::SETTLED), Some(NavPhase::Idle));
        assert_eq!(phase.on_event(event_types::CANCELLED), Some(NavPhase::Idle));
    }

    #[test]
    fn test_scroll_never_changes_phase() {
        assert_eq!(NavPhase::Idle.on_event(event_types::SCROLL), None);
        assert_eq!(NavPhase::Navigating.on_event(event_types::SCROLL), None);
    }

    #[test]
    fn test_settled_is_ignored_while_idle() {
        assert_eq!(NavPhase::Idle.on_event(event_types::SETTLED), None);
        assert_eq!(NavPhase::Idle.on_event(event_types::CANCELLED), None);
    }
}
