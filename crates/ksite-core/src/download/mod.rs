//! Download lifecycle orchestration.
//!
//! Drives the sequence behind the page's download button: show the progress
//! surface, advance a simulated transfer in fixed-size timed steps, hand the
//! real fetch to the host through a transient link, and report the outcome
//! as an auto-expiring notification. Sequences do not coordinate: two
//! concurrent requests interleave writes to the shared fill indicator and
//! the last writer wins.

mod catalog;
mod notify;
mod preview;
mod progress;
mod trigger;

pub use catalog::{theme_catalog, AssetCatalog, AssetEntry, THEME_ARCHIVE};
pub use notify::{NotificationCenter, FAILURE_HEADING, SUCCESS_HEADING};
pub use preview::{
    handle_click as handle_modal_click, PREVIEW_IMAGE, PREVIEW_TEXT, PREVIEW_TITLE,
};
pub use progress::ProgressSnapshot;
pub use trigger::{DownloadTrigger, HostHandoffTrigger, TriggerError, TriggerRequest};

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::mpsc::UnboundedReceiver;

use crate::config::ProgressTimings;
use crate::page::{Display, Element, ElementId, ElementKind, Page};

use progress::ProgressBroadcast;

/// Owns the asset catalog and runs download sequences against one page.
///
/// Cloning is cheap; clones share the catalog, the trigger, and the
/// progress subscribers.
#[derive(Clone)]
pub struct DownloadOrchestrator {
    page: Page,
    catalog: Arc<AssetCatalog>,
    trigger: Arc<dyn DownloadTrigger>,
    timings: ProgressTimings,
    broadcast: ProgressBroadcast,
    notifier: NotificationCenter,
}

impl DownloadOrchestrator {
    pub fn new(
        page: Page,
        catalog: AssetCatalog,
        trigger: Arc<dyn DownloadTrigger>,
        timings: ProgressTimings,
        notification_ttl: Duration,
    ) -> Self {
        Self {
            page: page.clone(),
            catalog: Arc::new(catalog),
            trigger,
            timings,
            broadcast: ProgressBroadcast::default(),
            notifier: NotificationCenter::new(page, notification_ttl),
        }
    }

    pub fn catalog(&self) -> &AssetCatalog {
        &self.catalog
    }

    /// Receives every progress snapshot published after this call.
    pub fn subscribe_progress(&self) -> UnboundedReceiver<ProgressSnapshot> {
        self.broadcast.subscribe()
    }

    /// Runs one full download sequence for `asset_name`.
    ///
    /// An unknown name is a diagnostic-only no-op: one error log entry and
    /// zero page mutations. A known name advances through progress
    /// simulation and the host handoff, then posts exactly one success or
    /// failure notification. Nothing is returned; the outcome is only
    /// visible on the page.
    pub async fn request_download(&self, asset_name: &str) {
        let Some(asset) = self.catalog.get(asset_name).cloned() else {
            tracing::error!(asset = asset_name, "file not found in catalog");
            return;
        };

        self.set_progress_visible(true);
        match self.transfer(asset_name, &asset).await {
            Ok(()) => {
                self.set_progress_visible(false);
                self.notifier.post_success(&asset.destination_filename);
                tracing::info!(asset = asset_name, "download handed to host");
            }
            Err(err) => {
                tracing::error!(asset = asset_name, error = %err, "download failed");
                self.set_progress_visible(false);
                self.notifier.post_failure();
            }
        }
    }

    /// Opens the fixed theme preview modal. Always succeeds; each call
    /// stacks a new independent modal.
    pub fn preview_asset(&self) -> ElementId {
        preview::open(&self.page)
    }

    async fn transfer(&self, name: &str, asset: &AssetEntry) -> Result<(), TriggerError> {
        self.simulate_transfer(name).await;
        self.fire_trigger(asset)
    }

    /// Advances the simulated transfer: one timed suspension per step, then
    /// a fill-width update (when the surface exists) and a snapshot to
    /// subscribers. Monotonic from 0 to 100 percent; never fails.
    async fn simulate_transfer(&self, name: &str) {
        let steps = self.timings.steps.max(1);
        let delay = self.timings.step_delay();
        for step in 0..=steps {
            tokio::time::sleep(delay).await;
            let percent = f64::from(step) * 100.0 / f64::from(steps);
            if let Some(fill) = self.page.progress_fill() {
                self.page.set_fill_width(fill, percent);
            }
            self.broadcast.send(&ProgressSnapshot {
                asset: name.to_string(),
                step,
                total_steps: steps,
                percent,
            });
        }
    }

    /// Fabricates the transient hidden link bound to the asset, activates
    /// it through the trigger seam, and detaches it again. The link exists
    /// only for the instant of the handoff.
    fn fire_trigger(&self, asset: &AssetEntry) -> Result<(), TriggerError> {
        let link = self.page.insert(
            Element::new(ElementKind::DownloadLink {
                href: asset.source_url.to_string(),
                download: asset.destination_filename.clone(),
            })
            .hidden(),
        );

        let result = if self.page.contains(link) {
            self.trigger.activate(&TriggerRequest {
                source_url: asset.source_url.clone(),
                destination_filename: asset.destination_filename.clone(),
            })
        } else {
            Err(TriggerError::LinkDetached)
        };

        self.page.remove(link);
        result
    }

    fn set_progress_visible(&self, visible: bool) {
        if let Some(surface) = self.page.progress_surface() {
            let display = if visible {
                Display::Shown
            } else {
                Display::Hidden
            };
            self.page.set_display(surface, display);
        }
    }
}
