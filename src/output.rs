use std::io::{self, Write};
use std::path::Path;

use crate::bench::BenchmarkSummary;
use crate::ingest::RunStatistics;
use crate::store::Footprint;

/// Writes progress and timing reports for benchmark runs
pub struct Reporter<W: Write> {
    writer: W,
    /// Whether progress dots are printed
    progress: bool,
}

impl<W: Write> Reporter<W> {
    pub fn new(writer: W, progress: bool) -> Self {
        Self { writer, progress }
    }

    /// Emit one progress marker, flushed so it shows up immediately
    pub fn progress(&mut self) -> io::Result<()> {
        if !self.progress {
            return Ok(());
        }
        self.writer.write_all(b".")?;
        self.writer.flush()
    }

    /// Per-run record count, plus memory use when the store tracks it
    pub fn run_finished(
        &mut self,
        stats: &RunStatistics,
        footprint: Option<Footprint>,
    ) -> io::Result<()> {
        match footprint {
            Some(fp) => writeln!(
                self.writer,
                " {} FASTA records -- {} allocated ({:.3}% waste)",
                stats.records_processed, fp.allocated_bytes, fp.waste_percent
            ),
            None => writeln!(self.writer, " {} FASTA records", stats.records_processed),
        }
    }

    /// Total and per-run average time over all repeats
    pub fn benchmark_finished(&mut self, summary: &BenchmarkSummary) -> io::Result<()> {
        writeln!(
            self.writer,
            "{:.6} seconds taken for processing total",
            summary.total.as_secs_f64()
        )?;
        let (minutes, seconds) = summary.average_split();
        writeln!(
            self.writer,
            "On average: {} minutes, {:.6} second per run",
            minutes, seconds
        )
    }

    pub fn file_processed(&mut self, path: &Path, records: usize) -> io::Result<()> {
        writeln!(
            self.writer,
            "{} records processed from '{}'",
            records,
            path.display()
        )?;
        self.writer.flush()
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn stats(records: usize) -> RunStatistics {
        RunStatistics {
            records_processed: records,
            elapsed: Duration::ZERO,
            line_number: records * 2,
        }
    }

    fn output(reporter: Reporter<Vec<u8>>) -> String {
        String::from_utf8(reporter.into_inner()).unwrap()
    }

    #[test]
    fn test_progress_dots() {
        let mut reporter = Reporter::new(Vec::new(), true);
        reporter.progress().unwrap();
        reporter.progress().unwrap();
        assert_eq!(output(reporter), "..");
    }

    #[test]
    fn test_quiet_progress() {
        let mut reporter = Reporter::new(Vec::new(), false);
        reporter.progress().unwrap();
        assert_eq!(output(reporter), "");
    }

    #[test]
    fn test_run_line_with_footprint() {
        let mut reporter = Reporter::new(Vec::new(), true);
        let footprint = Footprint {
            allocated_bytes: 48000,
            waste_percent: 99.9,
        };
        reporter.run_finished(&stats(1), Some(footprint)).unwrap();
        assert_eq!(
            output(reporter),
            " 1 FASTA records -- 48000 allocated (99.900% waste)\n"
        );
    }

    #[test]
    fn test_run_line_without_footprint() {
        let mut reporter = Reporter::new(Vec::new(), true);
        reporter.run_finished(&stats(12), None).unwrap();
        assert_eq!(output(reporter), " 12 FASTA records\n");
    }

    #[test]
    fn test_benchmark_lines() {
        let mut reporter = Reporter::new(Vec::new(), true);
        let summary = BenchmarkSummary {
            records: 3,
            repeats: 2,
            total: Duration::from_secs(150),
        };
        reporter.benchmark_finished(&summary).unwrap();
        assert_eq!(
            output(reporter),
            "150.000000 seconds taken for processing total\n\
             On average: 1 minutes, 15.000000 second per run\n"
        );
    }
}
