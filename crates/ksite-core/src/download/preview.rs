//! Theme preview modal.
//!
//! The preview is fixed content: one static screenshot reference and one
//! description, regardless of which asset the visitor looked at. Each call
//! builds an independent modal; repeated calls stack.

use crate::page::{Element, ElementId, ElementKind, Page};

/// Static preview screenshot shown in every modal.
pub const PREVIEW_IMAGE: &str = "assets/theme-preview.svg";
pub const PREVIEW_TITLE: &str = "Kaerlin Theme Preview";
pub const PREVIEW_TEXT: &str = "The Kaerlin Theme uses a dark color scheme with green accents \
for a modern, minimalist appearance. The theme optimizes the Discord interface with clean \
lines and a professional look.";

/// Opens a new preview modal and returns its overlay element.
pub fn open(page: &Page) -> ElementId {
    let modal = page.insert(Element::new(ElementKind::Modal).with_class("preview-modal"));
    let content = page.insert_child(
        modal,
        Element::new(ElementKind::ModalContent).with_class("modal-content"),
    );
    page.insert_child(content, Element::new(ElementKind::ModalClose).with_class("close-modal"));
    page.insert_child(
        content,
        Element::new(ElementKind::Block)
            .with_class("modal-title")
            .with_text(PREVIEW_TITLE),
    );
    page.insert_child(
        content,
        Element::new(ElementKind::Image {
            src: PREVIEW_IMAGE.to_string(),
        })
        .with_class("preview-image"),
    );
    page.insert_child(content, Element::new(ElementKind::Block).with_text(PREVIEW_TEXT));
    modal
}

/// Routes a click against open modals. The close affordance and the overlay
/// backdrop dismiss their modal (whole subtree, exactly once); clicks inside
/// the content region are ignored. Returns true when a modal was dismissed.
pub fn handle_click(page: &Page, target: ElementId) -> bool {
    let Some(el) = page.element(target) else {
        return false;
    };
    match el.kind {
        ElementKind::Modal => page.remove_subtree(target),
        ElementKind::ModalClose => match owning_modal(page, target) {
            Some(modal) => page.remove_subtree(modal),
            None => false,
        },
        _ => false,
    }
}

/// Climbs the parent chain to the modal overlay owning `id`.
fn owning_modal(page: &Page, id: ElementId) -> Option<ElementId> {
    let mut current = page.parent(id);
    while let Some(candidate) = current {
        if page
            .element(candidate)
            .is_some_and(|el| el.kind == ElementKind::Modal)
        {
            return Some(candidate);
        }
        current = page.parent(candidate);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close_button_of(page: &Page, modal: ElementId) -> ElementId {
        let content = page.children(modal)[0];
        page.children(content)
            .into_iter()
            .find(|&id| {
                page.element(id)
                    .is_some_and(|el| el.kind == ElementKind::ModalClose)
            })
            .expect("modal has a close affordance")
    }

    #[test]
    fn repeated_opens_stack_independent_modals() {
        let page = Page::new(900.0);
        let first = open(&page);
        let second = open(&page);
        assert_ne!(first, second);
        assert_eq!(page.modals().len(), 2);
    }

    #[test]
    fn close_affordance_dismisses_only_its_own_modal() {
        let page = Page::new(900.0);
        let first = open(&page);
        let second = open(&page);

        assert!(handle_click(&page, close_button_of(&page, first)));
        assert!(!page.contains(first));
        assert!(page.contains(second));

        // Backdrop click dismisses the second.
        assert!(handle_click(&page, second));
        assert!(page.modals().is_empty());
    }

    #[test]
    fn clicks_inside_the_content_are_ignored() {
        let page = Page::new(900.0);
        let modal = open(&page);
        let content = page.children(modal)[0];
        assert!(!handle_click(&page, content));
        assert!(page.contains(modal));
    }
}
