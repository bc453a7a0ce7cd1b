//! `ksite preview` – open the theme preview modal and print its contents.

use std::sync::Arc;

use anyhow::Result;
use ksite_core::app::App;
use ksite_core::config::SiteConfig;
use ksite_core::download::{HostHandoffTrigger, PREVIEW_IMAGE, PREVIEW_TEXT, PREVIEW_TITLE};

use crate::cli::demo;

pub fn run_preview(cfg: &SiteConfig) -> Result<()> {
    let page = demo::build_demo_page();
    let app = App::bootstrap(page.clone(), cfg, Arc::new(HostHandoffTrigger));

    app.preview_theme();
    println!("{PREVIEW_TITLE}");
    println!("  image: {PREVIEW_IMAGE}");
    println!("  {PREVIEW_TEXT}");
    println!("(modal open: {} on page)", page.modals().len());
    Ok(())
}
