//! In-memory model of the promo page document.
//!
//! The behavior layer mutates this model the way the page script mutates a
//! live document: inserting and removing transient elements, toggling classes
//! and visibility, and scrolling. A `Page` is a cheap cloneable handle; all
//! clones share the same document. Element removal is exactly-once: the
//! second `remove` of an id is a no-op that reports `false`.

mod element;
mod events;
mod geometry;

pub use element::{Display, Element, ElementId, ElementKind, NotificationKind};
pub use events::PageEvent;
pub use geometry::{Rect, Viewport};

use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Marker class for elements that reveal when scrolled into view.
pub const ANIMATE_ON_SCROLL_CLASS: &str = "animate-on-scroll";
/// Durable marker added once an element has entered the viewport.
pub const REVEALED_CLASS: &str = "revealed";

/// Shared handle to the page document.
#[derive(Clone, Default)]
pub struct Page {
    inner: Arc<RwLock<PageInner>>,
}

#[derive(Default)]
struct PageInner {
    next_id: u64,
    elements: HashMap<ElementId, Element>,
    /// Document order of attached elements.
    order: Vec<ElementId>,
    scroll_y: f64,
    viewport_height: f64,
    /// Injected presentation rule blocks, append-only.
    styles: Vec<String>,
}

impl Page {
    /// New empty page with the given viewport height.
    pub fn new(viewport_height: f64) -> Self {
        let page = Page::default();
        page.write().viewport_height = viewport_height;
        page
    }

    fn read(&self) -> RwLockReadGuard<'_, PageInner> {
        self.inner.read().unwrap()
    }

    fn write(&self) -> RwLockWriteGuard<'_, PageInner> {
        self.inner.write().unwrap()
    }

    /// Attaches `element` at the end of the document. Returns its id.
    pub fn insert(&self, element: Element) -> ElementId {
        let mut inner = self.write();
        let id = ElementId(inner.next_id);
        inner.next_id += 1;
        inner.elements.insert(id, element);
        inner.order.push(id);
        id
    }

    /// Attaches `element` as a child of `parent`.
    pub fn insert_child(&self, parent: ElementId, element: Element) -> ElementId {
        let mut child = element;
        child.parent = Some(parent);
        self.insert(child)
    }

    /// Detaches the element. Returns false if it was already gone, so a
    /// removal can never happen twice.
    pub fn remove(&self, id: ElementId) -> bool {
        let mut inner = self.write();
        if inner.elements.remove(&id).is_none() {
            return false;
        }
        inner.order.retain(|&other| other != id);
        true
    }

    /// Detaches the element and every transitive child (modal subtrees).
    pub fn remove_subtree(&self, id: ElementId) -> bool {
        if !self.contains(id) {
            return false;
        }
        let mut doomed = vec![id];
        let mut i = 0;
        while i < doomed.len() {
            let parent = doomed[i];
            doomed.extend(self.children(parent));
            i += 1;
        }
        for id in doomed {
            self.remove(id);
        }
        true
    }

    pub fn contains(&self, id: ElementId) -> bool {
        self.read().elements.contains_key(&id)
    }

    /// Snapshot of an element's current state.
    pub fn element(&self, id: ElementId) -> Option<Element> {
        self.read().elements.get(&id).cloned()
    }

    pub fn parent(&self, id: ElementId) -> Option<ElementId> {
        self.read().elements.get(&id).and_then(|el| el.parent)
    }

    /// Direct children of `id`, in document order.
    pub fn children(&self, id: ElementId) -> Vec<ElementId> {
        let inner = self.read();
        inner
            .order
            .iter()
            .copied()
            .filter(|child| {
                inner
                    .elements
                    .get(child)
                    .is_some_and(|el| el.parent == Some(id))
            })
            .collect()
    }

    /// First element carrying the DOM-style id `name`.
    pub fn by_name(&self, name: &str) -> Option<ElementId> {
        let inner = self.read();
        inner
            .order
            .iter()
            .copied()
            .find(|id| inner.elements[id].name.as_deref() == Some(name))
    }

    /// Elements carrying `class`, in document order.
    pub fn with_class(&self, class: &str) -> Vec<ElementId> {
        let inner = self.read();
        inner
            .order
            .iter()
            .copied()
            .filter(|id| inner.elements[id].has_class(class))
            .collect()
    }

    pub fn add_class(&self, id: ElementId, class: &str) {
        if let Some(el) = self.write().elements.get_mut(&id) {
            el.classes.insert(class.to_string());
        }
    }

    pub fn has_class(&self, id: ElementId, class: &str) -> bool {
        self.read()
            .elements
            .get(&id)
            .is_some_and(|el| el.has_class(class))
    }

    pub fn set_display(&self, id: ElementId, display: Display) {
        if let Some(el) = self.write().elements.get_mut(&id) {
            el.display = display;
        }
    }

    /// Sets a progress fill width, clamped to [0, 100] percent.
    pub fn set_fill_width(&self, id: ElementId, pct: f64) {
        if let Some(el) = self.write().elements.get_mut(&id) {
            el.fill_pct = pct.clamp(0.0, 100.0);
        }
    }

    pub fn set_translate_y(&self, id: ElementId, y: f64) {
        if let Some(el) = self.write().elements.get_mut(&id) {
            el.translate_y = y;
        }
    }

    /// Moves the viewport so its top sits at `y` (never above the document).
    pub fn scroll_to(&self, y: f64) {
        self.write().scroll_y = y.max(0.0);
    }

    pub fn scroll_y(&self) -> f64 {
        self.read().scroll_y
    }

    pub fn viewport(&self) -> Viewport {
        let inner = self.read();
        Viewport {
            scroll_y: inner.scroll_y,
            height: inner.viewport_height,
        }
    }

    /// Appends a block of presentation rules to the page's style list.
    pub fn push_style(&self, css: &str) {
        self.write().styles.push(css.to_string());
    }

    pub fn styles(&self) -> Vec<String> {
        self.read().styles.clone()
    }

    // Capability checks: each optional surface either exists or the caller
    // silently skips the corresponding effect.

    /// The download progress container, if the page has one.
    pub fn progress_surface(&self) -> Option<ElementId> {
        self.first_where(|el| el.kind == ElementKind::ProgressSurface)
    }

    /// The progress fill bar, if the page has one.
    pub fn progress_fill(&self) -> Option<ElementId> {
        self.first_where(|el| el.kind == ElementKind::ProgressFill)
    }

    /// The hero graphic targeted by the parallax effect, if present.
    pub fn hero_visual(&self) -> Option<ElementId> {
        self.first_where(|el| el.kind == ElementKind::HeroVisual)
    }

    /// The named section, if present.
    pub fn section(&self, name: &str) -> Option<ElementId> {
        self.first_where(|el| el.kind == ElementKind::Section && el.name.as_deref() == Some(name))
    }

    /// All notifications currently attached, in document order.
    pub fn notifications(&self) -> Vec<ElementId> {
        self.all_where(|el| matches!(el.kind, ElementKind::Notification { .. }))
    }

    /// All modal overlays currently attached, in document order.
    pub fn modals(&self) -> Vec<ElementId> {
        self.all_where(|el| el.kind == ElementKind::Modal)
    }

    /// Transient download links currently attached (normally none; a link
    /// exists only for the instant of host handoff).
    pub fn download_links(&self) -> Vec<ElementId> {
        self.all_where(|el| matches!(el.kind, ElementKind::DownloadLink { .. }))
    }

    fn first_where(&self, pred: impl Fn(&Element) -> bool) -> Option<ElementId> {
        let inner = self.read();
        inner
            .order
            .iter()
            .copied()
            .find(|id| pred(&inner.elements[id]))
    }

    fn all_where(&self, pred: impl Fn(&Element) -> bool) -> Vec<ElementId> {
        let inner = self.read();
        inner
            .order
            .iter()
            .copied()
            .filter(|id| pred(&inner.elements[id]))
            .collect()
    }
}
