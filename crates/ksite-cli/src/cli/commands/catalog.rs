//! `ksite catalog` – list the compiled-in downloadable assets.

use anyhow::Result;
use ksite_core::download::theme_catalog;

pub fn run_catalog() -> Result<()> {
    let catalog = theme_catalog();
    if catalog.is_empty() {
        println!("The catalog is empty.");
        return Ok(());
    }

    println!("{:<32} {:<8} {}", "NAME", "SIZE", "URL");
    for (name, entry) in catalog.iter() {
        println!(
            "{:<32} {:<8} {}",
            name, entry.display_size, entry.source_url
        );
    }
    Ok(())
}
