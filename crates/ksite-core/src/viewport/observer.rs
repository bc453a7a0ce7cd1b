//! Reveal-on-scroll observer.

use crate::config::RevealConfig;
use crate::page::{ElementId, Page, ANIMATE_ON_SCROLL_CLASS, REVEALED_CLASS};

/// Watches scroll-animatable elements and durably marks each one revealed
/// once it intersects the viewport. The marker is never removed, and a
/// revealed element stays on the watch list for the page's lifetime.
pub struct RevealObserver {
    watched: Vec<ElementId>,
    threshold: f64,
    root_margin_bottom_px: f64,
}

impl RevealObserver {
    /// Registers every element currently tagged `animate-on-scroll`.
    pub fn observe_tagged(page: &Page, cfg: &RevealConfig) -> Self {
        Self {
            watched: page.with_class(ANIMATE_ON_SCROLL_CLASS),
            threshold: cfg.threshold,
            root_margin_bottom_px: cfg.root_margin_bottom_px,
        }
    }

    pub fn watched_len(&self) -> usize {
        self.watched.len()
    }

    /// Runs one intersection pass against the current viewport, revealing
    /// any watched element at or past the visibility threshold.
    pub fn update(&self, page: &Page) {
        let viewport = page.viewport();
        for &id in &self.watched {
            let Some(el) = page.element(id) else { continue };
            if el.has_class(REVEALED_CLASS) {
                continue;
            }
            if viewport.intersection_ratio(el.rect, self.root_margin_bottom_px) >= self.threshold {
                page.add_class(id, REVEALED_CLASS);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::{Element, ElementKind, Rect};

    fn tagged_block(top: f64, height: f64) -> Element {
        Element::new(ElementKind::Block)
            .with_class(ANIMATE_ON_SCROLL_CLASS)
            .with_rect(Rect::new(top, height))
    }

    #[test]
    fn reveals_only_elements_past_the_threshold() {
        let page = Page::new(900.0);
        let visible = page.insert(tagged_block(100.0, 200.0));
        let below_fold = page.insert(tagged_block(2000.0, 200.0));

        let observer = RevealObserver::observe_tagged(&page, &RevealConfig::default());
        assert_eq!(observer.watched_len(), 2);
        observer.update(&page);

        assert!(page.has_class(visible, REVEALED_CLASS));
        assert!(!page.has_class(below_fold, REVEALED_CLASS));
    }

    #[test]
    fn reveal_is_monotonic_across_scrolls() {
        let page = Page::new(900.0);
        let block = page.insert(tagged_block(1200.0, 200.0));
        let observer = RevealObserver::observe_tagged(&page, &RevealConfig::default());

        observer.update(&page);
        assert!(!page.has_class(block, REVEALED_CLASS));

        page.scroll_to(800.0);
        observer.update(&page);
        assert!(page.has_class(block, REVEALED_CLASS));

        // Scrolling away never takes the marker back.
        page.scroll_to(0.0);
        observer.update(&page);
        assert!(page.has_class(block, REVEALED_CLASS));
    }

    #[test]
    fn elements_tagged_after_registration_are_not_watched() {
        let page = Page::new(900.0);
        let observer = RevealObserver::observe_tagged(&page, &RevealConfig::default());
        let late = page.insert(tagged_block(100.0, 100.0));
        observer.update(&page);
        assert!(!page.has_class(late, REVEALED_CLASS));
        assert_eq!(observer.watched_len(), 0);
    }
}
