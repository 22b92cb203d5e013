use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::Path;
use std::process;

use clap::{CommandFactory, Parser};
use log::debug;

use fasta_bench::cli::HapaxArgs;
use fasta_bench::error::{BenchError, Result};
use fasta_bench::tally::WordTally;

fn main() {
    fasta_bench::setup_sigpipe();
    fasta_bench::init_logging();

    let args = match HapaxArgs::try_parse() {
        Ok(args) => args,
        Err(e) if !e.use_stderr() => e.exit(),
        Err(e) => {
            eprint!("{}", e);
            process::exit(1);
        }
    };

    if args.files.is_empty() {
        eprintln!("hapax: no data processed -- provide the name of a file on the command line");
        // The exit status already reports the failure
        if let Err(err) = print_usage() {
            debug!("could not write usage: {}", err);
        }
        process::exit(1);
    }

    for path in &args.files {
        if let Err(e) = tally_file(path, &args) {
            eprintln!("hapax: processing '{}' failed: {}", path.display(), e);
            process::exit(1);
        }
    }
}

fn tally_file(path: &Path, args: &HapaxArgs) -> Result<()> {
    let file = File::open(path).map_err(|source| BenchError::Open {
        path: path.to_path_buf(),
        source,
    })?;
    let tally = WordTally::from_reader(BufReader::new(file), args.max_len)?;
    debug!("tallied '{}'", path.display());

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let name = path.display().to_string();

    writeln!(out, "Total word count {}", tally.total_words())?;
    writeln!(out, "Tally loaded")?;
    if args.dump {
        tally.write_data(&mut out, &name)?;
    }
    tally.write_hapax(&mut out, &name, args.length)?;
    out.flush()?;
    Ok(())
}

fn print_usage() -> io::Result<()> {
    let mut stderr = io::stderr();
    writeln!(stderr)?;
    HapaxArgs::command().write_help(&mut stderr)
}
