//! Scroll-driven presentation: reveal-on-scroll, anchor smooth scrolling,
//! and the hero parallax offset.
//!
//! All three effects are stateless event wiring over the page model; the
//! only durable state is the `revealed` marker, which is monotonic.

mod anchors;
mod observer;
mod parallax;

pub use anchors::{fragment, intercept, AnchorOutcome};
pub use observer::RevealObserver;
pub use parallax::parallax_offset;

use crate::config::SiteConfig;
use crate::page::Page;

/// Owns the scroll-facing behaviors of one page.
pub struct ViewportAnimator {
    page: Page,
    observer: RevealObserver,
    parallax_rate: f64,
}

impl ViewportAnimator {
    /// Registers the reveal observer and runs the initial pass, so elements
    /// that start inside the viewport are revealed immediately.
    pub fn initialize(page: Page, cfg: &SiteConfig) -> Self {
        let observer = RevealObserver::observe_tagged(&page, &cfg.reveal);
        let animator = Self {
            page,
            observer,
            parallax_rate: cfg.parallax_rate,
        };
        animator.run_scroll_effects();
        animator
    }

    /// Handles a scroll event: records the new offset and applies the
    /// scroll-dependent effects.
    pub fn on_scroll(&self, y: f64) {
        self.page.scroll_to(y);
        self.run_scroll_effects();
    }

    /// Intercepts an anchor activation. When the target exists, the smooth
    /// scroll fires scroll effects at the new position.
    pub fn on_anchor_click(&self, href: &str) -> AnchorOutcome {
        let outcome = anchors::intercept(&self.page, href);
        if outcome.scrolled_to.is_some() {
            self.run_scroll_effects();
        }
        outcome
    }

    /// Smooth-scrolls so the named section's top aligns with the viewport
    /// top. Returns false (and does nothing) when the section is absent.
    pub fn scroll_to_section(&self, name: &str) -> bool {
        let Some(el) = self.page.section(name).and_then(|id| self.page.element(id)) else {
            return false;
        };
        self.page.scroll_to(el.rect.top);
        self.run_scroll_effects();
        true
    }

    fn run_scroll_effects(&self) {
        self.observer.update(&self.page);
        parallax::apply(&self.page, self.parallax_rate);
    }
}
