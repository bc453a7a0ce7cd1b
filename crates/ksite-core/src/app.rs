//! Application context: one animator and one orchestrator over a shared page.
//!
//! `App::bootstrap` is the once-per-page entry; everything after that is
//! event-driven (`handle_event`) or explicitly invoked through the
//! markup-facing entry points. The context is an explicit instance owned by
//! whatever owns the page lifecycle; there is no global state.

use std::sync::Arc;

use crate::config::SiteConfig;
use crate::download::{handle_modal_click, theme_catalog, DownloadOrchestrator, DownloadTrigger};
use crate::page::{ElementId, ElementKind, Page, PageEvent};
use crate::viewport::ViewportAnimator;

/// Section the preview button scrolls to.
pub const PREVIEW_SECTION: &str = "preview";
/// Section the features button scrolls to.
pub const FEATURES_SECTION: &str = "features";

/// Presentation rules for notifications and the preview modal, injected once
/// at bootstrap.
pub const STYLE_RULES: &str = r#"
.success-message, .error-message {
    position: fixed;
    top: 20px;
    right: 20px;
    padding: 1rem 2rem;
    border-radius: 8px;
    font-weight: 500;
    z-index: 1000;
    animation: slideInRight 0.3s ease;
}
.success-message {
    background: linear-gradient(135deg, #00ff41, #00cc33);
    color: #000;
    border: 1px solid #00ff41;
}
.error-message {
    background: linear-gradient(135deg, #ff4444, #cc0000);
    color: white;
    border: 1px solid #ff4444;
}
.preview-modal {
    position: fixed;
    inset: 0;
    background: rgba(0, 0, 0, 0.8);
    display: flex;
    align-items: center;
    justify-content: center;
    z-index: 1000;
    animation: fadeIn 0.3s ease;
}
.modal-content {
    background: #111;
    border: 1px solid #00ff41;
    border-radius: 16px;
    padding: 2rem;
    max-width: 600px;
    width: 90%;
    max-height: 80vh;
    overflow-y: auto;
    color: #e0e0e0;
}
.close-modal {
    position: absolute;
    top: 10px;
    right: 15px;
    font-size: 2rem;
    cursor: pointer;
    color: #00ff41;
}
.preview-image {
    width: 100%;
    border-radius: 8px;
    margin-bottom: 1rem;
    border: 1px solid #00ff41;
}
@keyframes slideInRight {
    from { transform: translateX(100%); opacity: 0; }
    to { transform: translateX(0); opacity: 1; }
}
"#;

/// The page's behavior layer, built exactly once at startup.
#[derive(Clone)]
pub struct App {
    page: Page,
    animator: Arc<ViewportAnimator>,
    orchestrator: DownloadOrchestrator,
}

impl App {
    /// Constructs both components over `page`, injects the fixed
    /// presentation rules, and runs the initial reveal pass.
    pub fn bootstrap(page: Page, config: &SiteConfig, trigger: Arc<dyn DownloadTrigger>) -> App {
        page.push_style(STYLE_RULES);
        let animator = Arc::new(ViewportAnimator::initialize(page.clone(), config));
        let orchestrator = DownloadOrchestrator::new(
            page.clone(),
            theme_catalog(),
            trigger,
            config.progress.clone(),
            config.notification_ttl(),
        );
        App {
            page,
            animator,
            orchestrator,
        }
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn orchestrator(&self) -> &DownloadOrchestrator {
        &self.orchestrator
    }

    /// Markup-facing entry point: fire-and-forget download. The sequence
    /// runs on a spawned task; results surface only on the page.
    pub fn download_file(&self, asset_name: &str) {
        let orchestrator = self.orchestrator.clone();
        let name = asset_name.to_string();
        tokio::spawn(async move {
            orchestrator.request_download(&name).await;
        });
    }

    /// Markup-facing entry point: open the theme preview modal.
    pub fn preview_theme(&self) -> ElementId {
        self.orchestrator.preview_asset()
    }

    /// Scrolls to the preview section; no-op (false) when it is absent.
    pub fn scroll_to_preview(&self) -> bool {
        self.animator.scroll_to_section(PREVIEW_SECTION)
    }

    /// Scrolls to the features section; no-op (false) when it is absent.
    pub fn scroll_to_features(&self) -> bool {
        self.animator.scroll_to_section(FEATURES_SECTION)
    }

    /// Routes one host event into the behavior layer: scrolls drive the
    /// reveal observer and the parallax offset; clicks are checked against
    /// anchors first, then open modals.
    pub fn handle_event(&self, event: PageEvent) {
        match event {
            PageEvent::Scroll { y } => self.animator.on_scroll(y),
            PageEvent::Click { target } => {
                if let Some(el) = self.page.element(target) {
                    if let ElementKind::Anchor { href } = &el.kind {
                        self.animator.on_anchor_click(href);
                        return;
                    }
                }
                handle_modal_click(&self.page, target);
            }
        }
    }
}
