mod bootstrap;

use anyhow::Result;
use clap::Parser;
use filter_core::settings::Settings;
use filter_data::pipeline::{render_report, scan};
use filter_data::reader::open_input;

fn main() -> Result<()> {
    let settings = Settings::parse();

    bootstrap::setup_logging(&settings.log_level)?;

    tracing::debug!("backoff-filter v{} starting", env!("CARGO_PKG_VERSION"));

    let input = open_input(settings.input.as_deref())?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();

    // One pass: pass-through lines are echoed while manager observations
    // accumulate; the summary follows once the input is exhausted.
    let report = scan(input, &mut out, settings.strict)?;
    render_report(&report, settings.format, &mut out)?;

    tracing::debug!(
        "Done: {} managers, {:.6} s total backoff",
        report.manager_count(),
        report.total_seconds
    );

    Ok(())
}
