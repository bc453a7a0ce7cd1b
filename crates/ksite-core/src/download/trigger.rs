//! Host download handoff.
//!
//! The actual file transfer is the host environment's job. The orchestrator
//! fabricates a transient hidden link, activates it through this seam, and
//! removes it; implementations decide what activation means.

use thiserror::Error;
use url::Url;

/// Everything the host needs to begin the real transfer.
#[derive(Debug, Clone, PartialEq)]
pub struct TriggerRequest {
    pub source_url: Url,
    pub destination_filename: String,
}

/// Failure of the trigger step. Logged in full; the user only ever sees a
/// generic failure notification.
#[derive(Debug, Error)]
pub enum TriggerError {
    /// The transient link was gone before it could be activated.
    #[error("download link was detached before activation")]
    LinkDetached,
    /// The host environment refused or failed the handoff.
    #[error("host handoff failed: {0}")]
    Host(String),
}

/// Seam to the platform's native download mechanism.
pub trait DownloadTrigger: Send + Sync {
    fn activate(&self, request: &TriggerRequest) -> Result<(), TriggerError>;
}

/// Default trigger: records the handoff in the log and succeeds. Stands in
/// for the browser's native download handling in headless runs.
#[derive(Debug, Default)]
pub struct HostHandoffTrigger;

impl DownloadTrigger for HostHandoffTrigger {
    fn activate(&self, request: &TriggerRequest) -> Result<(), TriggerError> {
        tracing::info!(
            url = %request.source_url,
            filename = %request.destination_filename,
            "handing download to host"
        );
        Ok(())
    }
}
