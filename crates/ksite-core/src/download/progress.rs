//! Progress reporting for simulated transfers.
//!
//! The orchestrator publishes one snapshot per progress step; consumers
//! (the CLI renderer, tests) subscribe and receive every update in order.

use std::sync::{Arc, RwLock};

use tokio::sync::mpsc;

/// Snapshot of simulated progress for one download sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct ProgressSnapshot {
    /// Catalog name of the asset being downloaded.
    pub asset: String,
    /// Current step, 0..=total_steps.
    pub step: u32,
    /// Number of fixed-size steps in the whole transfer.
    pub total_steps: u32,
    /// Percent complete in [0, 100].
    pub percent: f64,
}

impl ProgressSnapshot {
    /// Fraction complete in [0.0, 1.0].
    pub fn fraction(&self) -> f64 {
        self.percent / 100.0
    }
}

/// Fan-out list of progress subscribers; closed receivers are pruned on send.
#[derive(Clone, Default)]
pub(super) struct ProgressBroadcast {
    senders: Arc<RwLock<Vec<mpsc::UnboundedSender<ProgressSnapshot>>>>,
}

impl ProgressBroadcast {
    pub(super) fn subscribe(&self) -> mpsc::UnboundedReceiver<ProgressSnapshot> {
        let (tx, rx) = mpsc::unbounded_channel();
        self.senders.write().unwrap().push(tx);
        rx
    }

    pub(super) fn send(&self, snapshot: &ProgressSnapshot) {
        self.senders
            .write()
            .unwrap()
            .retain(|tx| tx.send(snapshot.clone()).is_ok());
    }
}
