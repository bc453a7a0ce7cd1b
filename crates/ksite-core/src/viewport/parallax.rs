//! Hero parallax offset.

use crate::page::Page;

/// Offset applied to the hero visual at scroll position `scroll_y`. Pure and
/// unclamped: the offset grows linearly for as long as the page scrolls.
pub fn parallax_offset(rate: f64, scroll_y: f64) -> f64 {
    rate * scroll_y
}

/// Applies the current offset to the hero visual, if the page has one.
pub(super) fn apply(page: &Page, rate: f64) {
    if let Some(hero) = page.hero_visual() {
        page.set_translate_y(hero, parallax_offset(rate, page.scroll_y()));
    }
}
