//! Transient, auto-expiring notifications.

use std::time::Duration;

use crate::page::{Element, ElementId, ElementKind, NotificationKind, Page};

pub const SUCCESS_HEADING: &str = "✓ Download successful!";
pub const FAILURE_HEADING: &str = "✗ Download failed";

/// Posts notifications onto the page and expires each one exactly once
/// after the configured time-to-live.
///
/// Expiry runs on a spawned task, so a `NotificationCenter` must live
/// inside a tokio runtime.
#[derive(Clone)]
pub struct NotificationCenter {
    page: Page,
    ttl: Duration,
}

impl NotificationCenter {
    pub fn new(page: Page, ttl: Duration) -> Self {
        Self { page, ttl }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Success notification naming the file that was handed to the host.
    pub fn post_success(&self, filename: &str) -> ElementId {
        self.post(
            NotificationKind::Success,
            &format!("{SUCCESS_HEADING} {filename} has been downloaded."),
        )
    }

    /// Generic failure notification; no error detail reaches the user.
    pub fn post_failure(&self) -> ElementId {
        self.post(
            NotificationKind::Error,
            &format!("{FAILURE_HEADING} Please try again."),
        )
    }

    fn post(&self, kind: NotificationKind, message: &str) -> ElementId {
        let class = match kind {
            NotificationKind::Success => "success-message",
            NotificationKind::Error => "error-message",
        };
        let id = self.page.insert(
            Element::new(ElementKind::Notification { kind })
                .with_class(class)
                .with_text(message),
        );
        let page = self.page.clone();
        let ttl = self.ttl;
        tokio::spawn(async move {
            tokio::time::sleep(ttl).await;
            // No-op if something already took the element down.
            page.remove(id);
        });
        id
    }
}
