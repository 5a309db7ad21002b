use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use tracing::{debug, info};

use proximity_lib::{scan_report, DiagnosticSink, ReportRow, ReportStats, ReportSummary};

use crate::args::{Cli, OutputFormat};

/// Build the report for `input` and write it to `output` in the requested format.
pub fn run_report<R, W, S>(
    cli: &Cli,
    input: R,
    output: &mut W,
    diagnostics: S,
) -> Result<ReportStats>
where
    R: BufRead,
    W: Write,
    S: DiagnosticSink,
{
    let config = cli.reference_config()?;
    let filter = config
        .into_filter(&diagnostics)
        .context("invalid reference configuration")?;
    debug!(
        reference = %filter.reference(),
        radius_km = filter.radius_km(),
        "filtering customers"
    );

    let report = scan_report(
        input,
        |record| !cli.is_excluded(&record.name) && filter.is_near(record),
        &diagnostics,
    )
    .context("failed to read customer records")?;

    let rows = report
        .records
        .iter()
        .map(|record| {
            let row = ReportRow::from_record(record);
            if cli.with_distance {
                row.with_distance(filter.distance_to(record).ok())
            } else {
                row
            }
        })
        .collect();
    let summary = ReportSummary::new(rows);

    match cli.format {
        OutputFormat::Text => write!(output, "{}", summary.render_text())?,
        OutputFormat::Json => writeln!(output, "{}", summary.render_json()?)?,
    }
    output.flush()?;

    info!(
        matched = report.stats.matched,
        lines = report.stats.lines,
        malformed = report.stats.malformed,
        "customer report written"
    );
    Ok(report.stats)
}
