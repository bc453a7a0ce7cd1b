//! `ksite tour` – scroll through the demo page, printing what each stop
//! reveals and where the parallax puts the hero visual.

use std::sync::Arc;

use anyhow::Result;
use ksite_core::app::App;
use ksite_core::config::SiteConfig;
use ksite_core::download::HostHandoffTrigger;
use ksite_core::page::{PageEvent, REVEALED_CLASS};

use crate::cli::demo;

pub fn run_tour(cfg: &SiteConfig) -> Result<()> {
    let page = demo::build_demo_page();
    let app = App::bootstrap(page.clone(), cfg, Arc::new(HostHandoffTrigger));

    println!("{:>8} {:>10} {:>9}", "SCROLL", "PARALLAX", "REVEALED");
    for stop in 0..=8 {
        let y = f64::from(stop) * 300.0;
        app.handle_event(PageEvent::Scroll { y });

        let hero_offset = page
            .hero_visual()
            .and_then(|id| page.element(id))
            .map(|el| el.translate_y)
            .unwrap_or_default();
        let revealed = page.with_class(REVEALED_CLASS).len();
        println!("{y:>8.0} {hero_offset:>10.1} {revealed:>9}");
    }
    Ok(())
}
