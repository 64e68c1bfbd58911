//! Event types driving the navigation state machine
//!
//! Events are plain `u32` constants so state machines can match on
//! `(state, event)` pairs without allocation or dynamic dispatch.

/// Event type identifier
pub type EventType = u32;

/// Event type constants
pub mod event_types {
    /// Scroll input observed on the active frame
    pub const SCROLL: u32 = 30;
    /// Programmatic navigation requested (`go_to`)
    pub const NAVIGATE: u32 = 40;
    /// In-flight navigation reached its target (or timed out)
    pub const SETTLED: u32 = 41;
    /// In-flight navigation invalidated (frame swap, target removed)
    pub const CANCELLED: u32 = 42;
}
