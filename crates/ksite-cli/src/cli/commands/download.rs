//! `ksite download <name>` – run the download lifecycle on the demo page.

use std::sync::Arc;

use anyhow::{Context, Result};
use ksite_core::app::App;
use ksite_core::config::SiteConfig;
use ksite_core::download::HostHandoffTrigger;
use ksite_core::page::ElementKind;

use crate::cli::demo;

pub async fn run_download(cfg: &SiteConfig, name: &str) -> Result<()> {
    let page = demo::build_demo_page();
    let app = App::bootstrap(page.clone(), cfg, Arc::new(HostHandoffTrigger));

    if app.orchestrator().catalog().get(name).is_none() {
        println!("No asset named {name:?} in the catalog (see `ksite catalog`).");
        return Ok(());
    }

    let mut progress = app.orchestrator().subscribe_progress();
    let renderer = tokio::spawn(async move {
        while let Some(snap) = progress.recv().await {
            if snap.step % 10 == 0 || snap.step == snap.total_steps {
                println!("  {:>3.0}%  {}", snap.percent, snap.asset);
            }
        }
    });

    app.orchestrator().request_download(name).await;

    // Report the outcome notification before it expires.
    for id in page.notifications() {
        let Some(el) = page.element(id) else { continue };
        if matches!(el.kind, ElementKind::Notification { .. }) {
            println!("{}", el.text.unwrap_or_default());
        }
    }

    // Dropping the app closes the progress channel.
    drop(app);
    renderer.await.context("progress renderer join")?;
    Ok(())
}
