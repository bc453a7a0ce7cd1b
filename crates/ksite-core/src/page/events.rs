//! Input events delivered to the page by its host.

use super::element::ElementId;

/// One host event. Scroll and click are the only inputs the behavior layer
/// reacts to; everything else on the page is static.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PageEvent {
    /// The viewport scrolled to offset `y`.
    Scroll { y: f64 },
    /// The element was activated (clicked).
    Click { target: ElementId },
}
