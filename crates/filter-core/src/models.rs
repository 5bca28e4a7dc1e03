use serde::{Deserialize, Serialize};

/// One backoff observation extracted from a manager line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManagerSample {
    /// Two-character manager identifier.
    pub id: String,
    /// The raw time field, exactly as it appeared on the line.
    pub raw_time: String,
}

/// Final per-manager entry in the summary, in first-seen order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManagerTotal {
    /// Two-character manager identifier.
    pub id: String,
    /// The most recently seen raw time text for this manager.
    pub raw_time: String,
    /// The raw time parsed as seconds.
    pub seconds: f64,
}

/// The finished summary produced after the input is exhausted.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BackoffReport {
    /// Per-manager totals, ordered by first sighting.
    pub managers: Vec<ManagerTotal>,
    /// Sum of the final `seconds` value of every manager.
    pub total_seconds: f64,
}

impl BackoffReport {
    /// Number of distinct managers seen.
    pub fn manager_count(&self) -> usize {
        self.managers.len()
    }
}
