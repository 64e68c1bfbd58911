//! Active-section detection
//!
//! The closest-above-threshold rule: among sections whose top edge sits at
//! or above the configured offset, the active one is the section the frame
//! has most recently scrolled past — the candidate with the largest
//! viewport-relative top. Runs on every scroll event of the active frame
//! and once after any registration change.

use indexmap::IndexMap;
use scrollspy_core::{ScrollFrame, SectionHandle, SectionId};
use tracing::trace;

use crate::config::{FallbackPolicy, MenuConfig};

/// Compute the active section for the current frame position
///
/// Returns `None` only when no section qualifies and the fallback policy is
/// [`FallbackPolicy::Absent`] (or the section map is empty; callers skip
/// the scan entirely in that case). Sections that cannot currently be
/// measured are skipped for this sample.
pub fn detect_active<S, F>(
    sections: &IndexMap<SectionId, S>,
    frame: &F,
    config: &MenuConfig,
) -> Option<SectionId>
where
    S: SectionHandle,
    F: ScrollFrame,
{
    let frame_top = frame.top();
    let mut best: Option<(&SectionId, f32)> = None;

    for (id, section) in sections {
        let Some(top) = section.offset_top() else {
            trace!(section = %id, "skipping unmeasurable section");
            continue;
        };
        let relative_top = top - frame_top;
        if relative_top > config.offset {
            continue;
        }
        match best {
            // strict comparison keeps the earliest-registered section on ties
            Some((_, best_top)) if relative_top <= best_top => {}
            _ => best = Some((id, relative_top)),
        }
    }

    if let Some((id, relative_top)) = best {
        trace!(active = %id, relative_top, "detected active section");
        return Some(id.clone());
    }

    match config.fallback {
        FallbackPolicy::FirstSection => sections.keys().next().cloned(),
        FallbackPolicy::Absent => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Frame at rest at the global viewport origin
    struct RestingFrame;

    impl ScrollFrame for RestingFrame {
        fn scroll_top(&self) -> f32 {
            0.0
        }

        fn scroll_to(&self, _target: f32, _behavior: scrollspy_core::ScrollBehavior) {}
    }

    fn sections(tops: &[(&str, Option<f32>)]) -> IndexMap<SectionId, Option<f32>> {
        tops.iter()
            .map(|(id, top)| (SectionId::from(*id), *top))
            .collect()
    }

    #[test]
    fn test_largest_relative_top_at_or_below_threshold_wins() {
        // tops [-50, 120, 800] at rest -> "intro"
        let sections = sections(&[
            ("intro", Some(-50.0)),
            ("features", Some(120.0)),
            ("pricing", Some(800.0)),
        ]);
        let active = detect_active(&sections, &RestingFrame, &MenuConfig::default());
        assert_eq!(active.unwrap().as_str(), "intro");
    }

    #[test]
    fn test_scrolled_past_second_section() {
        // tops [-400, -20, 300] -> "features"
        let sections = sections(&[
            ("intro", Some(-400.0)),
            ("features", Some(-20.0)),
            ("pricing", Some(300.0)),
        ]);
        let active = detect_active(&sections, &RestingFrame, &MenuConfig::default());
        assert_eq!(active.unwrap().as_str(), "features");
    }

    #[test]
    fn test_offset_widens_the_candidate_window() {
        let sections = sections(&[("intro", Some(40.0)), ("features", Some(90.0))]);
        let config = MenuConfig::default().with_offset(100.0);
        let active = detect_active(&sections, &RestingFrame, &config);
        assert_eq!(active.unwrap().as_str(), "features");
    }

    #[test]
    fn test_no_candidate_falls_back_to_first_registered() {
        let sections = sections(&[("intro", Some(150.0)), ("features", Some(600.0))]);
        let active = detect_active(&sections, &RestingFrame, &MenuConfig::default());
        assert_eq!(active.unwrap().as_str(), "intro");
    }

    #[test]
    fn test_absent_policy_reports_nothing() {
        let sections = sections(&[("intro", Some(150.0))]);
        let config = MenuConfig::default().with_fallback(FallbackPolicy::Absent);
        assert_eq!(detect_active(&sections, &RestingFrame, &config), None);
    }

    #[test]
    fn test_exact_tie_keeps_registration_order() {
        let sections = sections(&[("intro", Some(-10.0)), ("features", Some(-10.0))]);
        let active = detect_active(&sections, &RestingFrame, &MenuConfig::default());
        assert_eq!(active.unwrap().as_str(), "intro");
    }

    #[test]
    fn test_unmeasurable_sections_are_skipped() {
        let sections = sections(&[
            ("intro", Some(-300.0)),
            ("features", None),
            ("pricing", Some(-20.0)),
        ]);
        let active = detect_active(&sections, &RestingFrame, &MenuConfig::default());
        assert_eq!(active.unwrap().as_str(), "pricing");
    }

    #[test]
    fn test_container_frame_measures_relative_to_its_top() {
        struct ContainerFrame;

        impl ScrollFrame for ContainerFrame {
            fn top(&self) -> f32 {
                100.0
            }

            fn scroll_top(&self) -> f32 {
                0.0
            }

            fn scroll_to(&self, _target: f32, _behavior: scrollspy_core::ScrollBehavior) {}
        }

        // viewport-relative top 80 is above the container's own top edge,
        // so relative to the container it is -20 and qualifies
        let sections = sections(&[("intro", Some(80.0)), ("features", Some(400.0))]);
        let active = detect_active(&sections, &ContainerFrame, &MenuConfig::default());
        assert_eq!(active.unwrap().as_str(), "intro");
    }
}
