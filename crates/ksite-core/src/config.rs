use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// Simulated transfer timing (optional section in config.toml).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProgressTimings {
    /// Total simulated transfer duration in milliseconds.
    pub duration_ms: u64,
    /// Number of fixed-size progress steps per transfer.
    pub steps: u32,
}

impl Default for ProgressTimings {
    fn default() -> Self {
        Self {
            duration_ms: 2000,
            steps: 100,
        }
    }
}

impl ProgressTimings {
    /// Delay between two consecutive progress updates.
    pub fn step_delay(&self) -> Duration {
        Duration::from_millis(self.duration_ms / u64::from(self.steps.max(1)))
    }
}

/// Reveal-on-scroll tuning (optional section in config.toml).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RevealConfig {
    /// Fraction of an element that must be visible before it is revealed.
    pub threshold: f64,
    /// Bottom root margin in px; negative values shrink the viewport edge.
    pub root_margin_bottom_px: f64,
}

impl Default for RevealConfig {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            root_margin_bottom_px: -50.0,
        }
    }
}

/// Global configuration loaded from `~/.config/ksite/config.toml`.
///
/// Only timing and presentation knobs live here; the asset catalog is
/// compiled in and not configurable.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteConfig {
    /// How long a notification stays on the page, in milliseconds.
    pub notification_ttl_ms: u64,
    /// Vertical offset per scrolled pixel applied to the hero visual.
    pub parallax_rate: f64,
    /// Simulated transfer timing; built-in defaults when missing.
    #[serde(default)]
    pub progress: ProgressTimings,
    /// Reveal-on-scroll tuning; built-in defaults when missing.
    #[serde(default)]
    pub reveal: RevealConfig,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            notification_ttl_ms: 3000,
            parallax_rate: -0.3,
            progress: ProgressTimings::default(),
            reveal: RevealConfig::default(),
        }
    }
}

impl SiteConfig {
    pub fn notification_ttl(&self) -> Duration {
        Duration::from_millis(self.notification_ttl_ms)
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("ksite")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<SiteConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = SiteConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: SiteConfig = toml::from_str(&data)?;
    Ok(cfg)
}
