//! Keyed stores for sections, triggers, and the scroll frame
//!
//! Registration order is significant: detection tie-breaks and the
//! first-section fallback both follow it, so the stores are
//! insertion-ordered maps. The registry is exclusively owned by the engine
//! and mutated only through the registration contract; it carries live,
//! possibly-partial state and lookups of missing ids are "not found",
//! never errors.

use indexmap::IndexMap;
use scrollspy_core::SectionId;

/// Keyed store mapping identifiers to section and trigger handles, plus the
/// optional scroll frame
///
/// `S` is the section handle type, `T` the (opaque) trigger handle type,
/// `F` the scroll frame type. All registration calls are idempotent per
/// identifier: re-registering replaces the handle in place, keeping the
/// original position in registration order.
#[derive(Debug)]
pub struct ElementRegistry<S, T, F> {
    sections: IndexMap<SectionId, S>,
    triggers: IndexMap<SectionId, T>,
    frame: Option<F>,
}

impl<S, T, F> Default for ElementRegistry<S, T, F> {
    fn default() -> Self {
        Self {
            sections: IndexMap::new(),
            triggers: IndexMap::new(),
            frame: None,
        }
    }
}

impl<S, T, F> ElementRegistry<S, T, F> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace the section handle for `id`
    pub fn register_section(&mut self, id: impl Into<SectionId>, handle: S) {
        self.sections.insert(id.into(), handle);
    }

    /// Remove the section handle for `id`, preserving registration order of
    /// the remaining sections
    pub fn unregister_section(&mut self, id: &str) -> Option<S> {
        self.sections.shift_remove(id)
    }

    /// Add or replace the trigger handle for `id`
    pub fn register_trigger(&mut self, id: impl Into<SectionId>, handle: T) {
        self.triggers.insert(id.into(), handle);
    }

    /// Remove the trigger handle for `id`
    pub fn unregister_trigger(&mut self, id: &str) -> Option<T> {
        self.triggers.shift_remove(id)
    }

    /// Replace the scroll frame (or clear it with `None`)
    pub fn register_frame(&mut self, frame: Option<F>) {
        self.frame = frame;
    }

    pub fn frame(&self) -> Option<&F> {
        self.frame.as_ref()
    }

    pub fn section(&self, id: &str) -> Option<&S> {
        self.sections.get(id)
    }

    pub fn trigger(&self, id: &str) -> Option<&T> {
        self.triggers.get(id)
    }

    /// All registered sections in registration order
    pub fn sections(&self) -> &IndexMap<SectionId, S> {
        &self.sections
    }

    /// All registered triggers in registration order
    pub fn triggers(&self) -> &IndexMap<SectionId, T> {
        &self.triggers
    }

    /// Id of the first registered section, if any
    pub fn first_section_id(&self) -> Option<&SectionId> {
        self.sections.keys().next()
    }

    pub fn has_sections(&self) -> bool {
        !self.sections.is_empty()
    }
}
