//! Simulated Page Example
//!
//! Drives the active-menu engine over a fake scrollable landing page:
//! the "user" scrolls through the content, then clicks the "pricing"
//! trigger and the engine navigates with a smooth scroll, holding the
//! active id steady until the flight settles.
//!
//! Run with: cargo run -p scrollspy --example simulated_page

use std::cell::RefCell;
use std::rc::Rc;

use scrollspy::prelude::*;

/// A fake scrollable document shared between the frame and its sections
#[derive(Default)]
struct PageState {
    scroll: f32,
    smooth_target: Option<f32>,
}

#[derive(Clone, Default)]
struct Page {
    state: Rc<RefCell<PageState>>,
}

impl Page {
    /// Step a pending smooth scroll by at most `step` pixels
    fn animate(&self, step: f32) -> bool {
        let mut state = self.state.borrow_mut();
        let Some(target) = state.smooth_target else {
            return false;
        };
        let delta = target - state.scroll;
        if delta.abs() <= step {
            state.scroll = target;
            state.smooth_target = None;
            false
        } else {
            state.scroll += step * delta.signum();
            true
        }
    }

    fn section(&self, layout_top: f32) -> PageSection {
        PageSection {
            page: self.clone(),
            layout_top,
        }
    }
}

impl ScrollFrame for Page {
    fn scroll_top(&self) -> f32 {
        self.state.borrow().scroll
    }

    fn scroll_to(&self, target: f32, behavior: ScrollBehavior) {
        let mut state = self.state.borrow_mut();
        match behavior {
            ScrollBehavior::Instant => {
                state.scroll = target;
                state.smooth_target = None;
            }
            ScrollBehavior::Smooth => state.smooth_target = Some(target),
        }
    }
}

struct PageSection {
    page: Page,
    layout_top: f32,
}

impl SectionHandle for PageSection {
    fn offset_top(&self) -> Option<f32> {
        Some(self.layout_top - self.page.state.borrow().scroll)
    }
}

fn main() {
    // Initialize tracing for logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let page = Page::default();
    let mut menu: ActiveMenu<PageSection, &str, Page> =
        ActiveMenu::new(MenuConfig::smooth().with_offset(64.0));

    menu.on_active_change(|change: &MenuChange| {
        println!(
            "  -> menu marker moves to {:?} (class {:?})",
            change.active.as_ref().map(SectionId::as_str),
            change.active_class,
        );
    });

    menu.register_frame(Some(page.clone()));
    for (id, top) in [("intro", 0.0), ("features", 900.0), ("pricing", 2200.0)] {
        menu.register_section(id, page.section(top));
        menu.register_trigger(id, id);
    }

    println!("user scrolls down the page:");
    for position in [300.0, 1000.0, 1800.0] {
        page.state.borrow_mut().scroll = position;
        menu.on_scroll();
        println!(
            "scrolled to {position:>6.0}px, active section: {}",
            menu.active().map_or("<none>", SectionId::as_str),
        );
    }

    println!("\nuser clicks the \"pricing\" trigger:");
    menu.handle_trigger_click("pricing");
    let mut frames = 0;
    while menu.needs_tick() {
        page.animate(240.0);
        menu.on_scroll();
        menu.tick(1.0 / 60.0);
        frames += 1;
    }
    println!(
        "flight settled after {frames} frames at {:.0}px, active section: {}",
        page.state.borrow().scroll,
        menu.active().map_or("<none>", SectionId::as_str),
    );
}
