use std::io::{self, Write};
use std::process;

use clap::{CommandFactory, Parser};
use log::debug;

use fasta_bench::bench;
use fasta_bench::cli::Args;
use fasta_bench::config::Config;
use fasta_bench::error::{BenchError, Result};
use fasta_bench::output::Reporter;

fn main() {
    fasta_bench::setup_sigpipe();
    fasta_bench::init_logging();

    let args = match Args::try_parse() {
        Ok(args) => args,
        // Help and version go to stdout with status 0
        Err(e) if !e.use_stderr() => e.exit(),
        Err(e) => {
            eprint!("{}", e);
            process::exit(1);
        }
    };

    if let Err(e) = run(&args) {
        eprintln!("fasta-bench: {}", e);
        if matches!(e, BenchError::Usage(_)) {
            // The exit status already reports the failure
            if let Err(err) = print_usage() {
                debug!("could not write usage: {}", err);
            }
        }
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    let config = Config::from_args(args)?;

    if config.input_files.is_empty() {
        return Err(BenchError::Usage(
            "no data processed -- provide the name of a file on the command line".to_string(),
        ));
    }
    debug!("{:?}", config);

    let stdout = io::stdout();
    let mut reporter = Reporter::new(stdout.lock(), config.progress);

    for path in &config.input_files {
        let summary = bench::run_repeated(path, &config.store, config.repeats, &mut reporter)
            .map_err(|e| BenchError::Processing {
                path: path.clone(),
                source: Box::new(e),
            })?;
        reporter.file_processed(path, summary.records)?;
    }

    Ok(())
}

fn print_usage() -> io::Result<()> {
    let mut stderr = io::stderr();
    writeln!(stderr)?;
    Args::command().write_help(&mut stderr)
}
