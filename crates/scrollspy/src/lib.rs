//! Scrollspy Engine
//!
//! Scroll-position tracking for single-page navigation menus: given labeled
//! content regions ("sections") and navigation controls ("triggers"), the
//! engine continuously determines which section is in view, exposes it as an
//! active identifier, and provides a navigation action that moves the
//! viewport (or a scrollable container) to a target section — without ever
//! flickering through intermediate sections during the animated scroll.
//!
//! The engine has no platform surface of its own: hosts implement the
//! [`ScrollFrame`] and [`SectionHandle`] traits over whatever they render
//! into and drive the engine from their event loop.
//!
//! # Example
//!
//! ```rust
//! use scrollspy::prelude::*;
//! # use std::cell::Cell;
//! # use std::rc::Rc;
//! # #[derive(Clone, Default)]
//! # struct Viewport { scroll: Rc<Cell<f32>> }
//! # impl ScrollFrame for Viewport {
//! #     fn scroll_top(&self) -> f32 { self.scroll.get() }
//! #     fn scroll_to(&self, target: f32, _behavior: ScrollBehavior) {
//! #         self.scroll.set(target);
//! #     }
//! # }
//!
//! let mut menu: ActiveMenu<f32, (), Viewport> = ActiveMenu::new(
//!     MenuConfig::default().with_offset(64.0),
//! );
//! menu.register_frame(Some(Viewport::default()));
//! menu.register_section("intro", -50.0);
//! menu.register_section("features", 520.0);
//!
//! assert_eq!(menu.sample().unwrap().as_str(), "intro");
//! ```

pub mod config;
pub mod detector;
pub mod engine;
pub mod error;
pub mod navigator;
pub mod registry;

pub use config::{FallbackPolicy, MenuConfig};
pub use engine::{ActiveChangeCallback, ActiveMenu, ActiveMenuState, CallbackId, MenuChange};
pub use error::NavigateError;
pub use registry::ElementRegistry;

// Re-export core primitives at crate level for convenience
pub use scrollspy_core::{
    event_types, EventType, NavPhase, ScrollBehavior, ScrollFrame, SectionHandle, SectionId,
    StateTransitions,
};

/// Convenience re-exports for hosts
pub mod prelude {
    pub use crate::config::{FallbackPolicy, MenuConfig};
    pub use crate::engine::{ActiveMenu, ActiveMenuState, MenuChange};
    pub use crate::error::NavigateError;
    pub use scrollspy_core::{ScrollBehavior, ScrollFrame, SectionHandle, SectionId};
}
