//! Handle traits the host wires into the engine
//!
//! The engine never touches a real viewport or DOM; it measures and scrolls
//! through these traits. Hosts implement them over whatever they have — a
//! browser document, a canvas scroll container, a test double. Handles are
//! reference-like: methods take `&self` and implementations are expected to
//! use interior mutability or shared state where needed.

/// How a requested scroll should move the frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ScrollBehavior {
    /// Jump to the target position synchronously
    #[default]
    Instant,
    /// Animate to the target position; the engine observes completion by
    /// polling the frame's scroll position
    Smooth,
}

/// The coordinate reference scroll position is measured against
///
/// Either a designated scrollable container or the top-level viewport.
/// Exactly one frame is active at a time; swapping frames invalidates all
/// prior measurements.
pub trait ScrollFrame {
    /// Top-edge position of the frame itself
    ///
    /// 0 for the global viewport; a container frame reports its own current
    /// top edge in the same coordinate space its sections measure in.
    fn top(&self) -> f32 {
        0.0
    }

    /// Current vertical scroll position of the frame
    fn scroll_top(&self) -> f32;

    /// Request a scroll to the given position
    fn scroll_to(&self, target: f32, behavior: ScrollBehavior);
}

/// A measurable content region tracked by the engine
///
/// The only required capability is reporting the current top edge. Tops are
/// viewport-relative (they move as the frame scrolls), in the same
/// coordinate space as [`ScrollFrame::top`].
pub trait SectionHandle {
    /// Current top edge of the section, or `None` when the region cannot
    /// be measured right now (detached, zero-size)
    fn offset_top(&self) -> Option<f32>;
}

impl<S: SectionHandle + ?Sized> SectionHandle for &S {
    fn offset_top(&self) -> Option<f32> {
        (**self).offset_top()
    }
}

impl SectionHandle for f32 {
    /// A bare `f32` measures as a fixed viewport-relative top; handy for
    /// tests and static layouts
    fn offset_top(&self) -> Option<f32> {
        Some(*self)
    }
}

impl SectionHandle for Option<f32> {
    fn offset_top(&self) -> Option<f32> {
        *self
    }
}
