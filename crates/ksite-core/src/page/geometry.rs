//! Vertical page geometry.
//!
//! Every behavior on the page (reveal, parallax, anchor scrolling) depends
//! only on the y axis, so elements carry a vertical extent and nothing more.

/// Vertical extent of an element in document coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub top: f64,
    pub height: f64,
}

impl Rect {
    pub const ZERO: Rect = Rect {
        top: 0.0,
        height: 0.0,
    };

    pub fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

/// Current viewport: scroll offset and visible height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub scroll_y: f64,
    pub height: f64,
}

impl Viewport {
    /// Fraction of `rect` visible inside the viewport after adjusting the
    /// bottom edge by `margin_bottom_px` (negative shrinks, following the
    /// CSS root-margin convention).
    ///
    /// A zero-height rect counts as fully visible when its top lies inside
    /// the adjusted span.
    pub fn intersection_ratio(&self, rect: Rect, margin_bottom_px: f64) -> f64 {
        let root_top = self.scroll_y;
        let root_bottom = self.scroll_y + self.height + margin_bottom_px;
        if root_bottom <= root_top {
            return 0.0;
        }
        if rect.height <= 0.0 {
            return if rect.top >= root_top && rect.top <= root_bottom {
                1.0
            } else {
                0.0
            };
        }
        let visible = rect.bottom().min(root_bottom) - rect.top.max(root_top);
        (visible / rect.height).clamp(0.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEW: Viewport = Viewport {
        scroll_y: 0.0,
        height: 900.0,
    };

    #[test]
    fn fully_visible_element_has_ratio_one() {
        let ratio = VIEW.intersection_ratio(Rect::new(100.0, 200.0), 0.0);
        assert_eq!(ratio, 1.0);
    }

    #[test]
    fn element_below_fold_has_ratio_zero() {
        let ratio = VIEW.intersection_ratio(Rect::new(1500.0, 200.0), 0.0);
        assert_eq!(ratio, 0.0);
    }

    #[test]
    fn partial_overlap_yields_fraction() {
        // Bottom half of the element hangs past the viewport edge.
        let ratio = VIEW.intersection_ratio(Rect::new(800.0, 200.0), 0.0);
        assert!((ratio - 0.5).abs() < 1e-9);
    }

    #[test]
    fn negative_bottom_margin_shrinks_the_root() {
        // Element sits in the last 50px of the viewport; a -50px margin
        // pushes the root edge above it.
        let ratio = VIEW.intersection_ratio(Rect::new(860.0, 40.0), -50.0);
        assert_eq!(ratio, 0.0);
        let unshrunk = VIEW.intersection_ratio(Rect::new(860.0, 40.0), 0.0);
        assert_eq!(unshrunk, 1.0);
    }

    #[test]
    fn scrolled_viewport_sees_lower_elements() {
        let scrolled = Viewport {
            scroll_y: 1000.0,
            height: 900.0,
        };
        let ratio = scrolled.intersection_ratio(Rect::new(1500.0, 200.0), 0.0);
        assert_eq!(ratio, 1.0);
    }

    #[test]
    fn zero_height_rect_counts_when_inside() {
        assert_eq!(VIEW.intersection_ratio(Rect::new(400.0, 0.0), 0.0), 1.0);
        assert_eq!(VIEW.intersection_ratio(Rect::new(2000.0, 0.0), 0.0), 0.0);
    }
}
