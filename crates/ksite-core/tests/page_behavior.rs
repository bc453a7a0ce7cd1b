//! Integration tests for the scroll-facing behaviors and the preview modal,
//! driven through the `App` entry points the way markup events would be.

use std::sync::Arc;
use std::time::Duration;

use ksite_core::app::{App, FEATURES_SECTION};
use ksite_core::config::{ProgressTimings, SiteConfig};
use ksite_core::download::{HostHandoffTrigger, THEME_ARCHIVE};
use ksite_core::page::{
    Element, ElementId, ElementKind, Page, PageEvent, Rect, ANIMATE_ON_SCROLL_CLASS,
    REVEALED_CLASS,
};
use ksite_core::viewport;

struct PromoPage {
    page: Page,
    in_view: ElementId,
    below_fold: ElementId,
    barely_visible: ElementId,
    features_anchor: ElementId,
    dead_anchor: ElementId,
}

/// A page shaped like the landing page: hero visual, two anchors, tagged
/// blocks above and below the fold, and the sections the entry points use.
fn promo_page() -> PromoPage {
    let page = Page::new(900.0);
    page.insert(
        Element::new(ElementKind::HeroVisual)
            .with_class("hero-visual")
            .with_rect(Rect::new(100.0, 400.0)),
    );
    let in_view = page.insert(
        Element::new(ElementKind::Block)
            .with_class(ANIMATE_ON_SCROLL_CLASS)
            .with_rect(Rect::new(200.0, 200.0)),
    );
    // Only 5px of this block sits inside the margin-adjusted viewport,
    // under the 10% threshold.
    let barely_visible = page.insert(
        Element::new(ElementKind::Block)
            .with_class(ANIMATE_ON_SCROLL_CLASS)
            .with_rect(Rect::new(845.0, 100.0)),
    );
    let below_fold = page.insert(
        Element::new(ElementKind::Block)
            .with_class(ANIMATE_ON_SCROLL_CLASS)
            .with_rect(Rect::new(1500.0, 200.0)),
    );
    let features_anchor = page.insert(Element::new(ElementKind::Anchor {
        href: "#features".to_string(),
    }));
    let dead_anchor = page.insert(Element::new(ElementKind::Anchor {
        href: "#missing".to_string(),
    }));
    page.insert(
        Element::new(ElementKind::Section)
            .named(FEATURES_SECTION)
            .with_rect(Rect::new(1400.0, 600.0)),
    );
    page.insert(
        Element::new(ElementKind::Section)
            .named("preview")
            .with_rect(Rect::new(2200.0, 500.0)),
    );
    PromoPage {
        page,
        in_view,
        below_fold,
        barely_visible,
        features_anchor,
        dead_anchor,
    }
}

fn bootstrap(page: &Page) -> App {
    App::bootstrap(
        page.clone(),
        &SiteConfig::default(),
        Arc::new(HostHandoffTrigger),
    )
}

#[test]
fn bootstrap_reveals_elements_already_in_view() {
    let promo = promo_page();
    bootstrap(&promo.page);

    assert!(promo.page.has_class(promo.in_view, REVEALED_CLASS));
    assert!(!promo.page.has_class(promo.barely_visible, REVEALED_CLASS));
    assert!(!promo.page.has_class(promo.below_fold, REVEALED_CLASS));
}

#[test]
fn scrolling_reveals_durably() {
    let promo = promo_page();
    let app = bootstrap(&promo.page);

    // A small scroll brings the barely-visible block fully into view.
    app.handle_event(PageEvent::Scroll { y: 300.0 });
    assert!(promo.page.has_class(promo.barely_visible, REVEALED_CLASS));

    app.handle_event(PageEvent::Scroll { y: 1200.0 });
    assert!(promo.page.has_class(promo.below_fold, REVEALED_CLASS));

    // Scrolling back up never un-reveals.
    app.handle_event(PageEvent::Scroll { y: 0.0 });
    assert!(promo.page.has_class(promo.below_fold, REVEALED_CLASS));
    assert!(promo.page.has_class(promo.barely_visible, REVEALED_CLASS));
}

#[test]
fn scroll_applies_the_parallax_offset() {
    let promo = promo_page();
    let app = bootstrap(&promo.page);

    app.handle_event(PageEvent::Scroll { y: 100.0 });
    let hero = promo.page.hero_visual().unwrap();
    assert_eq!(promo.page.element(hero).unwrap().translate_y, -30.0);

    app.handle_event(PageEvent::Scroll { y: 0.0 });
    assert_eq!(promo.page.element(hero).unwrap().translate_y, 0.0);
}

#[test]
fn anchor_click_scrolls_to_the_target_section() {
    let promo = promo_page();
    let app = bootstrap(&promo.page);

    app.handle_event(PageEvent::Click {
        target: promo.features_anchor,
    });
    assert_eq!(promo.page.scroll_y(), 1400.0);
    // The smooth scroll fires scroll effects at the destination.
    let hero = promo.page.hero_visual().unwrap();
    assert_eq!(promo.page.element(hero).unwrap().translate_y, -420.0);
    assert!(promo.page.has_class(promo.below_fold, REVEALED_CLASS));
}

#[test]
fn anchor_click_with_missing_target_suppresses_and_stays_put() {
    let promo = promo_page();
    let app = bootstrap(&promo.page);
    promo.page.scroll_to(300.0);

    app.handle_event(PageEvent::Click {
        target: promo.dead_anchor,
    });
    assert_eq!(promo.page.scroll_y(), 300.0);

    let outcome = viewport::intercept(&promo.page, "#missing");
    assert!(outcome.default_suppressed);
    assert_eq!(outcome.scrolled_to, None);
}

#[test]
fn entry_points_scroll_to_their_sections() {
    let promo = promo_page();
    let app = bootstrap(&promo.page);

    assert!(app.scroll_to_features());
    assert_eq!(promo.page.scroll_y(), 1400.0);
    assert!(app.scroll_to_preview());
    assert_eq!(promo.page.scroll_y(), 2200.0);

    // A page without those sections: silent no-op.
    let bare = Page::new(900.0);
    let bare_app = bootstrap(&bare);
    assert!(!bare_app.scroll_to_features());
    assert!(!bare_app.scroll_to_preview());
    assert_eq!(bare.scroll_y(), 0.0);
}

#[test]
fn preview_modals_stack_and_close_independently() {
    let promo = promo_page();
    let app = bootstrap(&promo.page);

    let first = app.preview_theme();
    let second = app.preview_theme();
    assert_eq!(promo.page.modals().len(), 2);

    // Close the first via its close affordance.
    let content = promo.page.children(first)[0];
    let close = promo
        .page
        .children(content)
        .into_iter()
        .find(|&id| {
            promo
                .page
                .element(id)
                .is_some_and(|el| el.kind == ElementKind::ModalClose)
        })
        .expect("close affordance");
    app.handle_event(PageEvent::Click { target: close });
    assert!(!promo.page.contains(first));
    assert!(promo.page.contains(second));

    // Close the second via a backdrop click.
    app.handle_event(PageEvent::Click { target: second });
    assert!(promo.page.modals().is_empty());
}

#[test]
fn bootstrap_injects_the_presentation_rules_once() {
    let promo = promo_page();
    bootstrap(&promo.page);

    let styles = promo.page.styles();
    assert_eq!(styles.len(), 1);
    assert!(styles[0].contains(".preview-modal"));
    assert!(styles[0].contains(".success-message"));
}

#[tokio::test]
async fn download_file_entry_point_is_fire_and_forget() {
    let promo = promo_page();
    let cfg = SiteConfig {
        progress: ProgressTimings {
            duration_ms: 50,
            steps: 10,
        },
        notification_ttl_ms: 400,
        ..SiteConfig::default()
    };
    let app = App::bootstrap(promo.page.clone(), &cfg, Arc::new(HostHandoffTrigger));

    app.download_file(THEME_ARCHIVE);

    // The call returned immediately; the outcome shows up on the page.
    let mut waited = Duration::ZERO;
    while promo.page.notifications().is_empty() && waited < Duration::from_secs(2) {
        tokio::time::sleep(Duration::from_millis(20)).await;
        waited += Duration::from_millis(20);
    }
    let notifications = promo.page.notifications();
    assert_eq!(notifications.len(), 1);
    let text = promo.page.element(notifications[0]).unwrap().text.unwrap();
    assert!(text.contains(THEME_ARCHIVE));
}
