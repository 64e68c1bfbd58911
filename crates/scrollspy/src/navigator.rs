//! Scroll navigation
//!
//! `go_to` computes a destination offset inside the scroll frame and issues
//! a scroll request; because the platform exposes no discrete "animation
//! finished" event, completion is detected by polling the frame's position
//! on host-driven ticks. Arrival uses a tolerance compare plus a timeout
//! fallback so sub-pixel positions can never leave a flight stuck open.

use scrollspy_core::SectionId;
use tracing::{debug, trace};

use crate::config::MenuConfig;

/// Destination offset for a section inside the frame
///
/// `relative_top` is the section's top edge relative to the frame's top
/// edge; `offset` compensates for a fixed header.
pub fn scroll_target(scroll_top: f32, relative_top: f32, offset: f32) -> f32 {
    scroll_top + relative_top - offset
}

/// An in-flight programmatic navigation
///
/// Exactly one may exist at a time; starting a new navigation replaces (and
/// thereby cancels) the previous record, so a stale flight can never report
/// completion.
#[derive(Debug, Clone)]
pub struct Navigation {
    id: SectionId,
    target: f32,
    elapsed: f32,
}

impl Navigation {
    pub fn new(id: SectionId, target: f32) -> Self {
        Self {
            id,
            target,
            elapsed: 0.0,
        }
    }

    /// The section this navigation was aimed at
    pub fn id(&self) -> &SectionId {
        &self.id
    }

    /// The destination scroll offset
    pub fn target(&self) -> f32 {
        self.target
    }

    /// Advance the completion poll by `dt` seconds given the frame's
    /// observed position; returns true once the flight has settled
    pub fn tick(&mut self, position: f32, dt: f32, config: &MenuConfig) -> bool {
        self.elapsed += dt;

        if (position - self.target).abs() <= config.settle_tolerance {
            trace!(destination = self.target, position, "navigation settled");
            return true;
        }
        if self.elapsed >= config.settle_timeout {
            debug!(
                destination = self.target,
                position,
                elapsed = self.elapsed,
                "navigation settle timeout; forcing completion"
            );
            return true;
        }
        false
    }
}
