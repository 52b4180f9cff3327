use anyhow::{Context, Result, bail};
use tracing::{info, info_span, warn};

use dimdate_calendar::{DateRange, HolidayFlags, holidays_for};
use dimdate_io::{
    LoadReport, LoaderConfig, MemorySink, ParquetSink, RowSink, load_rows, read_summary,
};

use crate::cli::GenerateArgs;
use crate::config::{self, DimDateConfig};
use crate::convert;

/// Holiday totals over a date range.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct HolidayCounts {
    pub federal: usize,
    pub idaho: usize,
}

/// Counts federal and Idaho holidays in `range` without building full rows.
pub fn count_holidays(range: DateRange) -> HolidayCounts {
    range
        .start()
        .iter_days()
        .take(range.len())
        .map(holidays_for)
        .fold(HolidayCounts::default(), |mut acc, flags: HolidayFlags| {
            acc.federal += usize::from(flags.is_federal());
            acc.idaho += usize::from(flags.is_idaho());
            acc
        })
}

/// Applies command-line overrides on top of the loaded config.
fn apply_overrides(config: &mut DimDateConfig, args: &GenerateArgs) {
    if let Some(start) = args.start {
        config.range.start = start;
    }
    if let Some(end) = args.end {
        config.range.end = end;
    }
    if let Some(output) = &args.output {
        config.output.path = output.clone();
    }
    if let Some(batch_size) = args.batch_size {
        config.load.batch_size = batch_size;
    }
}

/// Run the generate-and-load pipeline.
pub fn run(args: GenerateArgs) -> Result<()> {
    let _cmd = info_span!("generate").entered();

    // Step 1: Resolve config
    let mut config = config::load(args.config.as_deref())?;
    apply_overrides(&mut config, &args);

    // Step 2: Build API configs from TOML
    let range = convert::build_range(&config.range)?;
    let loader_cfg = convert::build_loader_config(&config.load)?;
    let writer_cfg = convert::build_writer_config(&config.output)?;

    let expected = range.len();
    info!(
        start = %range.start(),
        end = %range.end(),
        rows = expected,
        batch_size = loader_cfg.batch_size(),
        "generating date dimension"
    );

    // Step 3: Generate and load
    let report = if args.dry_run {
        let report = load_and_finish(range, MemorySink::new(), &loader_cfg)?;
        info!("dry run, no table written");
        report
    } else {
        let path = &config.output.path;
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("failed to create directory: {}", parent.display()))?;
        }
        let sink = ParquetSink::create(path, &writer_cfg)
            .with_context(|| format!("failed to create table file: {}", path.display()))?;
        let report = load_and_finish(range, sink, &loader_cfg)
            .with_context(|| format!("failed to write {}", path.display()))?;
        info!(path = %path.display(), "table written");
        report
    };

    check_report(&report)?;

    // Step 4: Verify what was persisted
    if !args.dry_run {
        let path = &config.output.path;
        let summary = read_summary(path)
            .with_context(|| format!("failed to read back {}", path.display()))?;
        if summary.rows != expected {
            bail!("table holds {} rows, expected {expected}", summary.rows);
        }
        info!(
            rows = summary.rows,
            row_groups = summary.row_groups,
            federal_holidays = summary.federal_holidays,
            idaho_holidays = summary.idaho_holidays,
            "verified table"
        );
    }

    // Step 5: Report holiday totals
    let counts = count_holidays(range);
    info!(federal = counts.federal, idaho = counts.idaho, "holiday counts");

    Ok(())
}

/// Loads every row of `range` into `sink`, then finishes the sink.
///
/// The sink is finished even when the load fails, so batches accepted before
/// the failure remain readable.
fn load_and_finish<S: RowSink>(
    range: DateRange,
    mut sink: S,
    config: &LoaderConfig,
) -> Result<LoadReport> {
    let loaded = load_rows(range.rows(), range.len(), &mut sink, config);
    let finished = sink.finish();
    match (loaded, finished) {
        (Ok(report), Ok(())) => Ok(report),
        (Ok(_), Err(e)) => Err(e).context("failed to finalize sink"),
        (Err(e), finished) => {
            if let Err(fe) = finished {
                warn!(error = %fe, "failed to finalize sink after load error");
            }
            Err(e).context("failed to load rows")
        }
    }
}

/// Fails when the loader did not insert every expected row.
fn check_report(report: &LoadReport) -> Result<()> {
    if report.retries > 0 {
        warn!(retries = report.retries, "load needed retries");
    }
    if !report.is_complete() {
        bail!("inserted {} of {} rows", report.inserted, report.expected);
    }
    info!(
        inserted = report.inserted,
        batches = report.batches,
        "all rows inserted"
    );
    Ok(())
}
