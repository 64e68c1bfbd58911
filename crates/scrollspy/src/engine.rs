//! The active-menu engine
//!
//! `ActiveMenu` owns the registry, the detector's latest result, the
//! navigation record, and the publication gate, and is driven entirely by
//! host calls from a single event loop:
//!
//! ```text
//! host registration ──► ElementRegistry ──┐
//! scroll events ──► detect_active ──► pending result
//! trigger clicks ──► go_to ──► Navigation + NavPhase::Navigating
//! host ticks ──► completion poll ──► NavPhase::Idle ──► publish once
//! ```
//!
//! While a triggered scroll is in flight the detector keeps sampling, but
//! the public state and the change callbacks are frozen; on completion the
//! latest result is published exactly once. Change callbacks run
//! synchronously inside the engine call that published the change and must
//! not re-enter the engine.

use std::rc::Rc;

use scrollspy_core::{
    event_types, NavPhase, ScrollBehavior, ScrollFrame, SectionHandle, SectionId, StateTransitions,
};
use slotmap::{new_key_type, SlotMap};
use tracing::{debug, trace};

use crate::config::MenuConfig;
use crate::detector;
use crate::error::NavigateError;
use crate::navigator::{self, Navigation};
use crate::registry::ElementRegistry;

new_key_type! {
    /// Handle to a registered change callback
    pub struct CallbackId;
}

/// Callback invoked when the published state changes
///
/// Uses Rc since the engine is single-threaded.
pub type ActiveChangeCallback = Rc<dyn Fn(&MenuChange)>;

/// The externally observable menu state
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ActiveMenuState {
    /// Id of the section currently considered in view, if any
    pub active: Option<SectionId>,
    /// True while a programmatic navigation's scroll is in flight
    pub transitioning: bool,
}

/// Snapshot handed to change callbacks
///
/// Fired only while not transitioning; carries enough for the host to move
/// its visual marker without re-querying the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuChange {
    /// The new active section id
    pub active: Option<SectionId>,
    /// The previously notified active section id
    pub previous: Option<SectionId>,
    /// Always false when a callback fires; kept so the snapshot mirrors
    /// the observable state
    pub transitioning: bool,
    /// The configured label for the host to apply to the active trigger
    pub active_class: String,
}

/// Scroll-position tracking engine for a single-page navigation menu
///
/// `S` is the section handle type, `T` the opaque trigger handle type, `F`
/// the scroll frame type. One engine instance per menu context; the frame
/// is always injected, never ambient.
///
/// # Example
///
/// ```ignore
/// let mut menu: ActiveMenu<MySection, MyButton, MyViewport> =
///     ActiveMenu::new(MenuConfig::smooth().with_offset(64.0));
/// menu.register_frame(Some(viewport));
/// menu.register_section("intro", intro_handle);
/// menu.on_active_change(|change| move_marker(change));
///
/// // from the host event loop:
/// menu.on_scroll();
/// menu.go_to("intro");
/// while menu.needs_tick() {
///     menu.tick(frame_dt);
/// }
/// ```
pub struct ActiveMenu<S, T, F> {
    registry: ElementRegistry<S, T, F>,
    config: MenuConfig,
    phase: NavPhase,
    navigation: Option<Navigation>,
    /// Latest detector result; tracks scrolling even while the gate is shut
    pending: Option<SectionId>,
    /// Published active id
    active: Option<SectionId>,
    /// Observable state as of the last notification point
    last_notified: (Option<SectionId>, bool),
    callbacks: SlotMap<CallbackId, ActiveChangeCallback>,
}

impl<S, T, F> Default for ActiveMenu<S, T, F>
where
    S: SectionHandle,
    F: ScrollFrame,
{
    fn default() -> Self {
        Self::new(MenuConfig::default())
    }
}

impl<S, T, F> ActiveMenu<S, T, F>
where
    S: SectionHandle,
    F: ScrollFrame,
{
    /// Create an engine with the given configuration and an empty registry
    pub fn new(config: MenuConfig) -> Self {
        Self {
            registry: ElementRegistry::new(),
            config,
            phase: NavPhase::Idle,
            navigation: None,
            pending: None,
            active: None,
            last_notified: (None, false),
            callbacks: SlotMap::with_key(),
        }
    }

    pub fn config(&self) -> &MenuConfig {
        &self.config
    }

    pub fn registry(&self) -> &ElementRegistry<S, T, F> {
        &self.registry
    }

    /// The externally observable state
    pub fn state(&self) -> ActiveMenuState {
        ActiveMenuState {
            active: self.active.clone(),
            transitioning: self.phase.is_navigating(),
        }
    }

    /// The published active section id
    pub fn active(&self) -> Option<&SectionId> {
        self.active.as_ref()
    }

    /// True while a triggered scroll is in flight
    pub fn is_transitioning(&self) -> bool {
        self.phase.is_navigating()
    }

    /// True while the host must drive the completion poll via [`tick`]
    ///
    /// Lets the host hold the poll timer only for the lifetime of a flight
    /// and release it on completion or frame swap.
    ///
    /// [`tick`]: ActiveMenu::tick
    pub fn needs_tick(&self) -> bool {
        self.navigation.is_some()
    }

    // =========================================================================
    // Registration
    // =========================================================================

    /// Add or replace the section handle for `id`; re-samples immediately
    pub fn register_section(&mut self, id: impl Into<SectionId>, handle: S) {
        self.registry.register_section(id, handle);
        self.resample();
        self.publish();
    }

    /// Remove the section for `id`
    ///
    /// Cancels an in-flight navigation aimed at it and re-samples so the
    /// active id never dangles on an unregistered section.
    pub fn unregister_section(&mut self, id: &str) -> Option<S> {
        let removed = self.registry.unregister_section(id);
        if removed.is_some() {
            if self
                .navigation
                .as_ref()
                .is_some_and(|nav| nav.id().as_str() == id)
            {
                self.cancel_navigation();
            }
            if self.pending.as_ref().is_some_and(|p| p.as_str() == id) {
                self.pending = None;
            }
            if self.active.as_ref().is_some_and(|a| a.as_str() == id) {
                self.active = None;
            }
            self.resample();
            self.publish();
        }
        removed
    }

    /// Add or replace the trigger handle for `id`
    pub fn register_trigger(&mut self, id: impl Into<SectionId>, handle: T) {
        self.registry.register_trigger(id, handle);
    }

    /// Remove the trigger handle for `id`
    pub fn unregister_trigger(&mut self, id: &str) -> Option<T> {
        self.registry.unregister_trigger(id)
    }

    /// Replace the scroll frame (or clear it with `None`)
    ///
    /// Swapping frames invalidates prior measurements: any in-flight
    /// navigation is cancelled and detection restarts from the new frame's
    /// current scroll position.
    pub fn register_frame(&mut self, frame: Option<F>) {
        self.registry.register_frame(frame);
        self.cancel_navigation();
        self.resample();
        self.publish();
    }

    // =========================================================================
    // Event entry points
    // =========================================================================

    /// Handle a scroll event of the active frame
    ///
    /// Runs detection; the result publishes immediately unless a triggered
    /// scroll is in flight, in which case it is held until completion.
    pub fn on_scroll(&mut self) {
        self.resample();
        self.publish();
    }

    /// Run detection now and return the current result
    ///
    /// Leaves prior state unchanged when the registry is empty or no frame
    /// is registered.
    pub fn sample(&mut self) -> Option<SectionId> {
        self.resample();
        self.publish();
        self.pending.clone()
    }

    /// Navigate to the section registered under `id`
    ///
    /// A no-op when the id does not resolve, the section cannot be
    /// measured, or no frame is registered; the external trigger is
    /// responsible for only exposing valid ids.
    pub fn go_to(&mut self, id: &str) {
        if let Err(error) = self.try_go_to(id) {
            debug!(%error, "navigation request ignored");
        }
    }

    /// Click-handler adapter for triggers
    pub fn handle_trigger_click(&mut self, id: &str) {
        self.go_to(id);
    }

    /// Navigate to the section registered under `id`, reporting the reason
    /// when the request cannot be issued
    pub fn try_go_to(&mut self, id: &str) -> Result<(), NavigateError> {
        let (sid, target) = {
            let frame = self.registry.frame().ok_or(NavigateError::NoFrame)?;
            let section = self
                .registry
                .section(id)
                .ok_or_else(|| NavigateError::UnknownSection(SectionId::from(id)))?;
            let top = section
                .offset_top()
                .ok_or_else(|| NavigateError::Unmeasurable(SectionId::from(id)))?;
            let relative_top = top - frame.top();
            let target =
                navigator::scroll_target(frame.scroll_top(), relative_top, self.config.offset);
            let behavior = if self.config.smooth {
                ScrollBehavior::Smooth
            } else {
                ScrollBehavior::Instant
            };
            frame.scroll_to(target, behavior);
            (SectionId::from(id), target)
        };

        debug!(section = %sid, destination = target, smooth = self.config.smooth, "navigation started");
        // Replacing the record is the cancellation path: the stale flight's
        // poll can never fire a second completion.
        self.navigation = Some(Navigation::new(sid, target));
        self.apply_phase(event_types::NAVIGATE);
        self.last_notified = (self.active.clone(), true);
        Ok(())
    }

    /// Advance the completion poll by `dt` seconds
    ///
    /// Returns true while a flight is still in progress (the host should
    /// keep ticking). On settle the phase returns to idle, detection
    /// re-measures from the final position, and the result publishes once.
    pub fn tick(&mut self, dt: f32) -> bool {
        let Some(navigation) = self.navigation.as_mut() else {
            return false;
        };
        let settled = match self.registry.frame() {
            Some(frame) => navigation.tick(frame.scroll_top(), dt, &self.config),
            // frame vanished mid-flight; nothing left to observe
            None => true,
        };
        if settled {
            self.navigation = None;
            self.apply_phase(event_types::SETTLED);
            self.resample();
            self.publish();
        }
        self.navigation.is_some()
    }

    // =========================================================================
    // Change notification
    // =========================================================================

    /// Register a change callback; fires whenever `transitioning` is false
    /// and either observable value changed
    pub fn on_active_change<C>(&mut self, callback: C) -> CallbackId
    where
        C: Fn(&MenuChange) + 'static,
    {
        self.callbacks.insert(Rc::new(callback))
    }

    /// Remove a previously registered change callback
    pub fn remove_active_change(&mut self, id: CallbackId) -> bool {
        self.callbacks.remove(id).is_some()
    }

    // =========================================================================
    // Internal
    // =========================================================================

    /// Run detection into `pending`; keeps prior state when there is
    /// nothing to measure
    fn resample(&mut self) {
        let next = match self.registry.frame() {
            Some(frame) if self.registry.has_sections() => {
                detector::detect_active(self.registry.sections(), frame, &self.config)
            }
            _ => return,
        };
        self.pending = next;
    }

    /// Move `pending` into the published state and notify, unless the
    /// transition gate is shut
    fn publish(&mut self) {
        if self.phase.is_navigating() {
            return;
        }
        self.active = self.pending.clone();
        let state = (self.active.clone(), false);
        if state == self.last_notified {
            return;
        }
        let previous = std::mem::replace(&mut self.last_notified, state).0;
        let change = MenuChange {
            active: self.active.clone(),
            previous,
            transitioning: false,
            active_class: self.config.active_class.clone(),
        };
        trace!(active = ?change.active, previous = ?change.previous, "active-menu change");
        for (_, callback) in &self.callbacks {
            callback(&change);
        }
    }

    fn apply_phase(&mut self, event: scrollspy_core::EventType) {
        if let Some(next) = self.phase.on_event(event) {
            trace!(from = ?self.phase, to = ?next, "phase transition");
            self.phase = next;
        }
    }

    fn cancel_navigation(&mut self) {
        if self.navigation.take().is_some() {
            debug!("navigation cancelled");
            self.apply_phase(event_types::CANCELLED);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    /// Frame whose position both scroll behaviors set synchronously
    #[derive(Clone, Default)]
    struct TestFrame {
        scroll: Rc<Cell<f32>>,
    }

    impl ScrollFrame for TestFrame {
        fn scroll_top(&self) -> f32 {
            self.scroll.get()
        }

        fn scroll_to(&self, target: f32, _behavior: ScrollBehavior) {
            self.scroll.set(target);
        }
    }

    type Menu = ActiveMenu<Option<f32>, (), TestFrame>;

    fn menu_with_sections() -> Menu {
        let mut menu = Menu::new(MenuConfig::default());
        menu.register_frame(Some(TestFrame::default()));
        menu.register_section("intro", Some(-50.0));
        menu.register_section("features", Some(120.0));
        menu.register_section("pricing", Some(800.0));
        menu
    }

    #[test]
    fn test_empty_engine_reports_nothing() {
        let mut menu = Menu::new(MenuConfig::default());
        assert_eq!(menu.sample(), None);
        assert_eq!(menu.state(), ActiveMenuState::default());
    }

    #[test]
    fn test_registration_samples_immediately() {
        let menu = menu_with_sections();
        assert_eq!(menu.active().unwrap().as_str(), "intro");
        assert!(!menu.is_transitioning());
    }

    #[test]
    fn test_go_to_unknown_id_is_a_noop() {
        let mut menu = menu_with_sections();
        let before = menu.state();

        menu.go_to("missing");
        assert_eq!(menu.state(), before);
        assert!(!menu.needs_tick());

        assert_eq!(
            menu.try_go_to("missing"),
            Err(NavigateError::UnknownSection(SectionId::from("missing")))
        );
    }

    #[test]
    fn test_go_to_without_frame_reports_no_frame() {
        let mut menu = Menu::new(MenuConfig::default());
        menu.register_section("intro", Some(0.0));
        assert_eq!(menu.try_go_to("intro"), Err(NavigateError::NoFrame));
    }

    #[test]
    fn test_go_to_unmeasurable_section_is_a_noop() {
        let mut menu = menu_with_sections();
        menu.register_section("hidden", None);
        let before = menu.state();

        menu.go_to("hidden");
        assert_eq!(menu.state(), before);
        assert_eq!(
            menu.try_go_to("hidden"),
            Err(NavigateError::Unmeasurable(SectionId::from("hidden")))
        );
    }

    #[test]
    fn test_instant_navigation_settles_on_next_tick() {
        let mut menu = menu_with_sections();
        menu.go_to("pricing");
        assert!(menu.is_transitioning());
        assert!(menu.needs_tick());

        // instant scroll already placed the frame at the target
        assert!(!menu.tick(0.016));
        assert!(!menu.is_transitioning());
        assert!(!menu.needs_tick());
    }

    #[test]
    fn test_transition_completion_notifies_once() {
        let mut menu = menu_with_sections();
        let fired = Rc::new(Cell::new(0));
        let count = Rc::clone(&fired);
        menu.on_active_change(move |change| {
            assert!(!change.transitioning);
            count.set(count.get() + 1);
        });

        menu.go_to("pricing");
        assert_eq!(fired.get(), 0, "no notification while transitioning");

        menu.tick(0.016);
        assert_eq!(fired.get(), 1);

        // extra ticks with no flight are inert
        assert!(!menu.tick(0.016));
        assert_eq!(fired.get(), 1);
    }

    #[test]
    fn test_callback_removal() {
        let mut menu = Menu::new(MenuConfig::default());
        let fired = Rc::new(Cell::new(0));
        let count = Rc::clone(&fired);
        let id = menu.on_active_change(move |_| count.set(count.get() + 1));

        assert!(menu.remove_active_change(id));
        assert!(!menu.remove_active_change(id));

        menu.register_frame(Some(TestFrame::default()));
        menu.register_section("intro", Some(-10.0));
        assert_eq!(fired.get(), 0);
    }

    #[test]
    fn test_unregister_active_section_republishes() {
        let mut menu = menu_with_sections();
        assert_eq!(menu.active().unwrap().as_str(), "intro");

        menu.unregister_section("intro");
        // fallback policy keeps the menu populated from the remaining set
        assert_eq!(menu.active().unwrap().as_str(), "features");
    }

    #[test]
    fn test_unregister_last_section_clears_active() {
        let mut menu = Menu::new(MenuConfig::default());
        menu.register_frame(Some(TestFrame::default()));
        menu.register_section("intro", Some(-10.0));
        assert!(menu.active().is_some());

        menu.unregister_section("intro");
        assert_eq!(menu.active(), None);
    }

    #[test]
    fn test_trigger_click_adapter_navigates() {
        let mut menu = menu_with_sections();
        menu.register_trigger("pricing", ());
        menu.handle_trigger_click("pricing");
        assert!(menu.is_transitioning());
    }

    #[test]
    fn test_active_class_rides_along_in_changes() {
        let mut menu: Menu = ActiveMenu::new(MenuConfig::default().with_active_class("is-current"));
        let seen = Rc::new(Cell::new(false));
        let flag = Rc::clone(&seen);
        menu.on_active_change(move |change| {
            assert_eq!(change.active_class, "is-current");
            flag.set(true);
        });

        menu.register_frame(Some(TestFrame::default()));
        menu.register_section("intro", Some(-10.0));
        assert!(seen.get());
    }
}
