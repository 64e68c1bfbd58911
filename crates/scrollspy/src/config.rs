//! Engine configuration

/// Policy applied when no section qualifies as a candidate
///
/// Variants differ on whether the menu should always show an entry once
/// content exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FallbackPolicy {
    /// Fall back to the first registered section so the menu always has an
    /// active entry (default)
    #[default]
    FirstSection,
    /// Leave the active id absent until a section qualifies
    Absent,
}

/// Configuration for the active-menu engine
#[derive(Debug, Clone)]
pub struct MenuConfig {
    /// Candidate threshold and scroll-destination compensation in pixels,
    /// typically the height of a fixed header (default: 0)
    pub offset: f32,
    /// Label the host applies to the active trigger; carried through to
    /// change notifications, never applied by the engine (default: "active")
    pub active_class: String,
    /// Animated vs instant scroll for `go_to` (default: false)
    pub smooth: bool,
    /// What to report when no section is at or above the threshold
    pub fallback: FallbackPolicy,
    /// Distance in pixels at which a polled scroll position counts as
    /// arrived (default: 0.5)
    pub settle_tolerance: f32,
    /// Seconds after which an unsettled navigation is forced to complete,
    /// so `transitioning` can never stick true (default: 3.0)
    pub settle_timeout: f32,
}

impl Default for MenuConfig {
    fn default() -> Self {
        Self {
            offset: 0.0,
            active_class: "active".to_string(),
            smooth: false,
            fallback: FallbackPolicy::default(),
            settle_tolerance: 0.5,
            settle_timeout: 3.0,
        }
    }
}

impl MenuConfig {
    /// Create config with animated navigation enabled
    pub fn smooth() -> Self {
        Self {
            smooth: true,
            ..Default::default()
        }
    }

    /// Set the candidate threshold / destination compensation
    pub fn with_offset(mut self, px: f32) -> Self {
        self.offset = px;
        self
    }

    /// Set the label handed to the host for the active trigger
    pub fn with_active_class(mut self, class: impl Into<String>) -> Self {
        self.active_class = class.into();
        self
    }

    /// Set the no-candidate fallback policy
    pub fn with_fallback(mut self, policy: FallbackPolicy) -> Self {
        self.fallback = policy;
        self
    }

    /// Set the arrival tolerance in pixels
    pub fn with_settle_tolerance(mut self, px: f32) -> Self {
        self.settle_tolerance = px;
        self
    }

    /// Set the settle timeout in seconds
    pub fn with_settle_timeout(mut self, seconds: f32) -> Self {
        self.settle_timeout = seconds;
        self
    }
}
