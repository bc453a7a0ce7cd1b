//! The demo promo page: a fixed layout mirroring the real landing page.

use ksite_core::page::{Element, ElementKind, Page, Rect, ANIMATE_ON_SCROLL_CLASS};

pub const VIEWPORT_HEIGHT: f64 = 900.0;

/// Builds the demo page: hero with parallax visual, nav anchors, feature
/// cards that reveal on scroll, the preview and download sections, and the
/// (initially hidden) progress surface.
pub fn build_demo_page() -> Page {
    let page = Page::new(VIEWPORT_HEIGHT);

    page.insert(
        Element::new(ElementKind::Section)
            .named("hero")
            .with_rect(Rect::new(0.0, 800.0)),
    );
    page.insert(
        Element::new(ElementKind::HeroVisual)
            .with_class("hero-visual")
            .with_rect(Rect::new(120.0, 480.0)),
    );

    for href in ["#features", "#preview", "#download"] {
        page.insert(
            Element::new(ElementKind::Anchor {
                href: href.to_string(),
            })
            .with_rect(Rect::new(20.0, 24.0)),
        );
    }

    page.insert(
        Element::new(ElementKind::Section)
            .named("features")
            .with_rect(Rect::new(900.0, 700.0)),
    );
    for top in [950.0, 1150.0, 1350.0] {
        page.insert(
            Element::new(ElementKind::Block)
                .with_class(ANIMATE_ON_SCROLL_CLASS)
                .with_class("feature-card")
                .with_rect(Rect::new(top, 160.0)),
        );
    }

    page.insert(
        Element::new(ElementKind::Section)
            .named("preview")
            .with_rect(Rect::new(1700.0, 600.0)),
    );
    page.insert(
        Element::new(ElementKind::Block)
            .with_class(ANIMATE_ON_SCROLL_CLASS)
            .with_rect(Rect::new(1760.0, 420.0)),
    );

    page.insert(
        Element::new(ElementKind::Section)
            .named("download")
            .with_rect(Rect::new(2400.0, 500.0)),
    );
    let surface = page.insert(
        Element::new(ElementKind::ProgressSurface)
            .named("downloadProgress")
            .with_rect(Rect::new(2500.0, 40.0))
            .hidden(),
    );
    page.insert_child(
        surface,
        Element::new(ElementKind::ProgressFill).with_class("progress-fill"),
    );

    page
}
