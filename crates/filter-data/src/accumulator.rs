//! Insertion-ordered accumulation of per-manager backoff times.

use std::collections::HashMap;

use filter_core::line_format::parse_seconds;
use filter_core::models::{BackoffReport, ManagerSample, ManagerTotal};
use filter_core::Result;

// ── BackoffLedger ─────────────────────────────────────────────────────────────

/// Maps each manager id to its most recently seen raw time.
///
/// Iteration order is the order in which ids were first recorded. A `Vec`
/// holds the ordered samples and a side index gives O(1) lookup by id.
#[derive(Debug, Default)]
pub struct BackoffLedger {
    samples: Vec<ManagerSample>,
    index: HashMap<String, usize>,
}

impl BackoffLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one observation. A repeat sighting of an id overwrites the
    /// stored time; a new id is appended at the end of the order.
    pub fn record(&mut self, sample: ManagerSample) {
        match self.index.get(&sample.id) {
            Some(&pos) => self.samples[pos].raw_time = sample.raw_time,
            None => {
                self.index.insert(sample.id.clone(), self.samples.len());
                self.samples.push(sample);
            }
        }
    }

    /// Number of distinct manager ids recorded so far.
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    /// Consume the ledger and produce the final report.
    ///
    /// Every stored raw time is parsed as seconds; the first value that fails
    /// to parse aborts with [`filter_core::FilterError::InvalidTimeValue`].
    pub fn finish(self) -> Result<BackoffReport> {
        let mut managers: Vec<ManagerTotal> = Vec::with_capacity(self.samples.len());
        let mut total_seconds = 0.0;

        for sample in self.samples {
            let seconds = parse_seconds(&sample.id, &sample.raw_time)?;
            total_seconds += seconds;
            managers.push(ManagerTotal {
                id: sample.id,
                raw_time: sample.raw_time,
                seconds,
            });
        }

        Ok(BackoffReport {
            managers,
            total_seconds,
        })
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use filter_core::FilterError;

    fn sample(id: &str, time: &str) -> ManagerSample {
        ManagerSample {
            id: id.to_string(),
            raw_time: time.to_string(),
        }
    }

    #[test]
    fn test_record_keeps_first_seen_order() {
        let mut ledger = BackoffLedger::new();
        ledger.record(sample("0c", "1.0"));
        ledger.record(sample("0a", "2.0"));
        ledger.record(sample("0b", "3.0"));

        let report = ledger.finish().unwrap();
        let ids: Vec<&str> = report.managers.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["0c", "0a", "0b"]);
    }

    #[test]
    fn test_repeat_sighting_overwrites_time() {
        let mut ledger = BackoffLedger::new();
        ledger.record(sample("0a", "1.0"));
        ledger.record(sample("0b", "2.0"));
        ledger.record(sample("0a", "9.5"));
        assert_eq!(ledger.len(), 2);

        let report = ledger.finish().unwrap();
        assert_eq!(report.managers[0].id, "0a");
        assert_eq!(report.managers[0].raw_time, "9.5");
        assert!((report.total_seconds - 11.5).abs() < 1e-9);
    }

    #[test]
    fn test_overwrite_does_not_move_id_to_the_back() {
        let mut ledger = BackoffLedger::new();
        ledger.record(sample("0a", "1.0"));
        ledger.record(sample("0b", "2.0"));
        ledger.record(sample("0a", "3.0"));

        let report = ledger.finish().unwrap();
        let ids: Vec<&str> = report.managers.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(ids, vec!["0a", "0b"]);
    }

    #[test]
    fn test_finish_empty_ledger() {
        let report = BackoffLedger::new().finish().unwrap();
        assert!(report.managers.is_empty());
        assert_eq!(report.total_seconds, 0.0);
    }

    #[test]
    fn test_finish_totals_each_id_once() {
        let mut ledger = BackoffLedger::new();
        ledger.record(sample("0a", "1.5"));
        ledger.record(sample("0a", "2.5"));
        ledger.record(sample("0b", "4.0"));

        let report = ledger.finish().unwrap();
        // 0a counts once, with its final value.
        assert!((report.total_seconds - 6.5).abs() < 1e-9);
    }

    #[test]
    fn test_finish_rejects_non_numeric_time() {
        let mut ledger = BackoffLedger::new();
        ledger.record(sample("0a", "bogus"));

        let err = ledger.finish().unwrap_err();
        assert!(matches!(err, FilterError::InvalidTimeValue { .. }));
    }
}
