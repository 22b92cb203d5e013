use std::io::{BufRead, Write};
use std::time::{Duration, Instant};

use crate::error::Result;
use crate::input::FastaReader;
use crate::output::Reporter;
use crate::record::Record;
use crate::store::RecordStore;

/// Records between progress markers
pub const PROGRESS_INTERVAL: usize = 10_000;

/// Counters for a single ingestion run
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RunStatistics {
    pub records_processed: usize,
    pub elapsed: Duration,
    /// Lines consumed by successfully decoded records
    pub line_number: usize,
}

impl RunStatistics {
    pub fn elapsed_seconds(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }
}

/// Feed every record from `reader` into `store`
///
/// The reader decodes into one scratch record that is reused across
/// requests; the store receives its own copy. Malformed input aborts the run
/// with the reader's error unchanged.
pub fn ingest<R: BufRead, W: Write>(
    reader: &mut FastaReader<R>,
    store: &mut dyn RecordStore,
    reporter: &mut Reporter<W>,
) -> Result<RunStatistics> {
    let start = Instant::now();
    let mut stats = RunStatistics::default();
    let mut scratch = Record::default();

    loop {
        if stats.records_processed % PROGRESS_INTERVAL == 0 {
            reporter.progress()?;
        }

        match reader.read_record(&mut scratch)? {
            0 => break,
            lines => {
                stats.line_number += lines;
                stats.records_processed += 1;
                store.insert(scratch.clone())?;
            }
        }
    }

    stats.elapsed = start.elapsed();
    Ok(stats)
}
