//! Diagnostics sinks for rejected capability strings.

use std::sync::Mutex;

use islimits_types::error::RejectReason;
use serde::Serialize;

use crate::ports::DiagnosticsSink;

/// Emits every rejection as a `tracing` warning.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingDiagnostics;

impl DiagnosticsSink for TracingDiagnostics {
    fn log_rejection(&self, occupant_name: &str, raw: &str, reason: &RejectReason) {
        tracing::warn!(
            occupant = occupant_name,
            capability = raw,
            "Occupant {occupant_name} has capability '{raw}' but {reason}. Ignoring..."
        );
    }
}

/// A rejection captured by [`RecordingDiagnostics`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecordedRejection {
    pub occupant: String,
    pub capability: String,
    pub reason: String,
}

/// Keeps every rejection in memory, in arrival order.
#[derive(Debug, Default)]
pub struct RecordingDiagnostics {
    entries: Mutex<Vec<RecordedRejection>>,
}

impl RecordingDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the rejections recorded so far.
    pub fn entries(&self) -> Vec<RecordedRejection> {
        self.entries
            .lock()
            .map(|entries| entries.clone())
            .unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.entries.lock().map(|entries| entries.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl DiagnosticsSink for RecordingDiagnostics {
    fn log_rejection(&self, occupant_name: &str, raw: &str, reason: &RejectReason) {
        // A poisoned lock only loses the diagnostic.
        if let Ok(mut entries) = self.entries.lock() {
            entries.push(RecordedRejection {
                occupant: occupant_name.to_string(),
                capability: raw.to_string(),
                reason: reason.to_string(),
            });
        }
    }
}
