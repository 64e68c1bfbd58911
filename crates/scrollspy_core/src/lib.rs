//! Scrollspy Core
//!
//! Foundational primitives for the scrollspy engine:
//!
//! - **Identifiers**: cheap-to-clone section ids correlating sections and triggers
//! - **Handles**: traits the host implements for scroll frames and sections
//! - **State Machine**: the navigation phase gate that suppresses active-id
//!   flicker while a programmatic scroll is in flight
//! - **Events**: the event-type constants the state machine transitions on
//!
//! # Example
//!
//! ```rust
//! use scrollspy_core::{event_types, NavPhase, StateTransitions};
//!
//! let phase = NavPhase::Idle;
//! let phase = phase.on_event(event_types::NAVIGATE).unwrap();
//! assert!(phase.is_navigating());
//! assert_eq!(phase.on_event(event_types::SETTLED), Some(NavPhase::Idle));
//! ```

pub mod events;
pub mod handles;
pub mod id;
pub mod state;

pub use events::{event_types, EventType};
pub use handles::{ScrollBehavior, ScrollFrame, SectionHandle};
pub use id::SectionId;
pub use state::{NavPhase, StateTransitions};
