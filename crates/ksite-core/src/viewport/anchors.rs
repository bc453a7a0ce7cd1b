//! Same-page anchor interception.

use crate::page::Page;

/// Result of an intercepted anchor activation. Default navigation is always
/// suppressed; `scrolled_to` is set only when the target section exists.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnchorOutcome {
    pub default_suppressed: bool,
    pub scrolled_to: Option<f64>,
}

/// Section name referenced by an in-page href ("#features" -> "features").
/// Returns None for a bare "#" or an href without a fragment.
pub fn fragment(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|rest| !rest.is_empty())
}

/// Intercepts an anchor activation: suppresses navigation unconditionally
/// and smooth-scrolls to the target section when it exists. A missing
/// target is a silent no-op.
pub fn intercept(page: &Page, href: &str) -> AnchorOutcome {
    let target = fragment(href).and_then(|name| page.section(name));
    match target.and_then(|id| page.element(id)) {
        Some(el) => {
            page.scroll_to(el.rect.top);
            AnchorOutcome {
                default_suppressed: true,
                scrolled_to: Some(el.rect.top),
            }
        }
        None => AnchorOutcome {
            default_suppressed: true,
            scrolled_to: None,
        },
    }
}
