//! The single scanning pass and summary rendering.
//!
//! `scan` consumes the input once, echoing pass-through lines as it goes and
//! accumulating manager observations; the summary is rendered separately so
//! it always lands after the last pass-through line.

use std::io::{BufRead, Write};

use filter_core::formatting::{format_grand_total, format_manager_total};
use filter_core::line_format::parse_manager_line;
use filter_core::models::BackoffReport;
use filter_core::settings::SummaryFormat;
use filter_core::{FilterError, Result};
use tracing::{debug, warn};

use crate::accumulator::BackoffLedger;
use crate::classifier::{classify, LineClass};

/// Run the scanning pass over `input`, writing pass-through lines to `out`.
///
/// Manager lines feed the ledger and are never echoed; build and bracket
/// lines are dropped. Short manager lines are skipped with a warning unless
/// `strict` is set, in which case the scan aborts with
/// [`FilterError::LineTooShort`].
pub fn scan<R: BufRead, W: Write>(input: R, out: &mut W, strict: bool) -> Result<BackoffReport> {
    let mut ledger = BackoffLedger::new();
    let mut line_number: u64 = 0;
    let mut passed: u64 = 0;
    let mut dropped: u64 = 0;

    for line_result in input.lines() {
        let line = line_result?;
        line_number += 1;

        match classify(&line) {
            LineClass::Manager => match parse_manager_line(&line, line_number) {
                Ok(sample) => ledger.record(sample),
                Err(err @ FilterError::LineTooShort { .. }) if !strict => {
                    warn!("{err}; skipping");
                }
                Err(err) => return Err(err),
            },
            LineClass::Build | LineClass::Bracket => dropped += 1,
            LineClass::PassThrough => {
                writeln!(out, "{}", line)?;
                passed += 1;
            }
        }
    }

    debug!(
        "Scanned {} lines: {} passed through, {} dropped, {} managers",
        line_number,
        passed,
        dropped,
        ledger.len()
    );

    ledger.finish()
}

/// Write the end-of-input summary for `report` to `out`.
pub fn render_report<W: Write>(
    report: &BackoffReport,
    format: SummaryFormat,
    out: &mut W,
) -> Result<()> {
    match format {
        SummaryFormat::Text => {
            for manager in &report.managers {
                writeln!(out, "{}", format_manager_total(&manager.id, &manager.raw_time))?;
            }
            writeln!(out, "{}", format_grand_total(report.total_seconds))?;
        }
        SummaryFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, report)?;
            writeln!(out)?;
        }
    }
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────
