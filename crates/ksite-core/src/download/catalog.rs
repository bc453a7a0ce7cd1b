//! Static catalog of downloadable assets.

use std::collections::BTreeMap;
use url::Url;

/// One downloadable asset: where it lives, what it saves as, and the size
/// string shown to the user.
#[derive(Debug, Clone, PartialEq)]
pub struct AssetEntry {
    pub source_url: Url,
    pub destination_filename: String,
    pub display_size: String,
}

/// Immutable name-to-asset mapping, built once at orchestrator construction.
/// There is no way to add or change entries afterwards.
#[derive(Debug, Clone, Default)]
pub struct AssetCatalog {
    entries: BTreeMap<String, AssetEntry>,
}

impl AssetCatalog {
    pub fn from_entries(entries: impl IntoIterator<Item = (String, AssetEntry)>) -> Self {
        Self {
            entries: entries.into_iter().collect(),
        }
    }

    pub fn get(&self, name: &str) -> Option<&AssetEntry> {
        self.entries.get(name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Asset names in stable (sorted) order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Entries in stable (sorted) name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &AssetEntry)> {
        self.entries.iter().map(|(name, entry)| (name.as_str(), entry))
    }
}

/// Catalog key and saved filename of the published theme archive.
pub const THEME_ARCHIVE: &str = "Kaerlin.discord.theme.zip";

/// Release URL of the published theme archive.
const THEME_URL: &str =
    "https://github.com/Demon675/Kaerlin.discordtheme/releases/download/v.1.0.0/Kaerlin.discord.theme.zip";

/// The compiled-in catalog: the single published theme archive.
pub fn theme_catalog() -> AssetCatalog {
    let source_url = Url::parse(THEME_URL).expect("theme release URL is valid");
    AssetCatalog::from_entries([(
        THEME_ARCHIVE.to_string(),
        AssetEntry {
            source_url,
            destination_filename: THEME_ARCHIVE.to_string(),
            display_size: "15 KB".to_string(),
        },
    )])
}
