//! Repeat-and-average timing harness
//!
//! Every repeat opens the input afresh and builds a new store, so no state
//! carries from one run to the next. Only the ingestion loop is timed;
//! teardown happens after the clock stops.

use std::io::Write;
use std::path::Path;
use std::time::Duration;

use log::{debug, info};

use crate::config::StoreSettings;
use crate::error::Result;
use crate::ingest::{RunStatistics, ingest};
use crate::input::FastaReader;
use crate::output::Reporter;
use crate::store::{RecordStore, create_store};

/// Accumulated timing over all repeats of one input
#[derive(Clone, Debug, PartialEq)]
pub struct BenchmarkSummary {
    /// Records loaded by the last run
    pub records: usize,
    pub repeats: u64,
    pub total: Duration,
}

impl BenchmarkSummary {
    /// Mean seconds per run
    pub fn average(&self) -> f64 {
        if self.repeats == 0 {
            return 0.0;
        }
        self.total.as_secs_f64() / self.repeats as f64
    }

    /// Mean run time as whole minutes and remaining seconds
    pub fn average_split(&self) -> (u64, f64) {
        let average = self.average();
        let minutes = (average / 60.0).floor();
        (minutes as u64, average - 60.0 * minutes)
    }
}

/// Call `run_once` `repeats` times, summing elapsed time
///
/// The first failing run aborts the benchmark; later repeats never start.
pub fn repeat<F>(repeats: u64, mut run_once: F) -> Result<BenchmarkSummary>
where
    F: FnMut(u64) -> Result<RunStatistics>,
{
    let mut summary = BenchmarkSummary {
        records: 0,
        repeats,
        total: Duration::ZERO,
    };

    for iteration in 0..repeats {
        let stats = run_once(iteration)?;
        debug!(
            "run {}/{}: {} records in {:.6}s",
            iteration + 1,
            repeats,
            stats.records_processed,
            stats.elapsed_seconds()
        );
        summary.total += stats.elapsed;
        summary.records = stats.records_processed;
    }

    Ok(summary)
}

/// Load `path` `repeats` times into stores built from `settings`
pub fn run_repeated<W: Write>(
    path: &Path,
    settings: &StoreSettings,
    repeats: u64,
    reporter: &mut Reporter<W>,
) -> Result<BenchmarkSummary> {
    run_repeated_with(path, repeats, || create_store(settings), reporter)
}

/// Load `path` `repeats` times, asking `make_store` for a fresh store each
/// run
pub fn run_repeated_with<W, F>(
    path: &Path,
    repeats: u64,
    mut make_store: F,
    reporter: &mut Reporter<W>,
) -> Result<BenchmarkSummary>
where
    W: Write,
    F: FnMut() -> Result<Box<dyn RecordStore>>,
{
    let summary = repeat(repeats, |_| {
        let mut reader = FastaReader::open(path)?;
        let mut store = make_store()?;

        let stats = ingest(&mut reader, store.as_mut(), reporter)?;
        reporter.run_finished(&stats, store.footprint())?;

        let released = store.release();
        debug!("released {} records", released);
        Ok(stats)
    })?;

    reporter.benchmark_finished(&summary)?;
    info!(
        "'{}': {} records, {:.6}s average over {} runs",
        path.display(),
        summary.records,
        summary.average(),
        summary.repeats
    );
    Ok(summary)
}
