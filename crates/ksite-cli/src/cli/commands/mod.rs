//! CLI command handlers. Each command is in its own file.

mod catalog;
mod download;
mod preview;
mod tour;

pub use catalog::run_catalog;
pub use download::run_download;
pub use preview::run_preview;
pub use tour::run_tour;
