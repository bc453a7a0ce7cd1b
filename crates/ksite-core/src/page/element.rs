//! Elements of the modeled page: kinds, classes, and inline style state.

use std::collections::BTreeSet;

use super::geometry::Rect;

/// Opaque element handle. Ids are assigned once and never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementId(pub(crate) u64);

/// Visual flavor of a notification element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

/// The role an element plays for the behavior layer.
#[derive(Debug, Clone, PartialEq)]
pub enum ElementKind {
    /// Plain content block.
    Block,
    /// Named page section that anchors and entry points scroll to.
    Section,
    /// In-page link; `href` is kept verbatim (e.g. "#features").
    Anchor { href: String },
    /// Hero graphic offset by the parallax effect.
    HeroVisual,
    /// Container showing simulated download progress.
    ProgressSurface,
    /// Fill bar inside the progress surface; width tracks percent complete.
    ProgressFill,
    /// Static image reference (preview screenshot).
    Image { src: String },
    /// Transient auto-expiring message.
    Notification { kind: NotificationKind },
    /// Preview modal overlay; clicking the backdrop dismisses it.
    Modal,
    /// Content region inside a modal; clicks here do not close it.
    ModalContent,
    /// Close affordance inside the modal content.
    ModalClose,
    /// Transient hidden link used to hand a download to the host.
    DownloadLink { href: String, download: String },
}

/// Display state; only visibility matters to the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Display {
    #[default]
    Shown,
    Hidden,
}

/// One element of the page.
#[derive(Debug, Clone)]
pub struct Element {
    pub kind: ElementKind,
    /// DOM-style id attribute, used for section lookup ("features", "preview").
    pub name: Option<String>,
    pub classes: BTreeSet<String>,
    pub rect: Rect,
    pub display: Display,
    /// Width of a progress fill, in percent of the surface.
    pub fill_pct: f64,
    /// Vertical translation applied by effects (parallax), in px.
    pub translate_y: f64,
    /// Free text carried by notifications and modal content.
    pub text: Option<String>,
    pub(crate) parent: Option<ElementId>,
}

impl Element {
    pub fn new(kind: ElementKind) -> Self {
        Self {
            kind,
            name: None,
            classes: BTreeSet::new(),
            rect: Rect::ZERO,
            display: Display::Shown,
            fill_pct: 0.0,
            translate_y: 0.0,
            text: None,
            parent: None,
        }
    }

    pub fn named(mut self, name: &str) -> Self {
        self.name = Some(name.to_string());
        self
    }

    pub fn with_class(mut self, class: &str) -> Self {
        self.classes.insert(class.to_string());
        self
    }

    pub fn with_rect(mut self, rect: Rect) -> Self {
        self.rect = rect;
        self
    }

    pub fn with_text(mut self, text: &str) -> Self {
        self.text = Some(text.to_string());
        self
    }

    pub fn hidden(mut self) -> Self {
        self.display = Display::Hidden;
        self
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.contains(class)
    }

    pub fn is_visible(&self) -> bool {
        self.display == Display::Shown
    }
}
