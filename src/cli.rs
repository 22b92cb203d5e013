use std::path::PathBuf;

use clap::Parser;
use clap::builder::RangedU64ValueParser;

use crate::array::DEFAULT_INITIAL_CAPACITY;
use crate::store::{GrowthTrigger, StoreKind};
use crate::tally::{DEFAULT_MAX_WORD_LEN, MAX_WORD_LEN_LIMIT};

#[derive(Parser, Debug, Clone)]
#[command(
    name = "fasta-bench",
    about = "Prints timing of loading and storing FASTA records"
)]
pub struct Args {
    /// Number of times to repeat the load; reported time is the average
    #[arg(short = 'R', long = "repeats", value_name = "REPEATS", default_value_t = 1)]
    pub repeats: u64,

    /// Container the records are stored in
    #[arg(short = 's', long = "store", value_enum, default_value_t = StoreKind::Array)]
    pub store: StoreKind,

    /// Slots reserved by the array store before it first grows
    #[arg(
        short = 'c',
        long = "initial-capacity",
        value_name = "SLOTS",
        default_value_t = DEFAULT_INITIAL_CAPACITY
    )]
    pub initial_capacity: usize,

    /// When the array store doubles its capacity
    #[arg(long, value_enum, default_value_t = GrowthTrigger::Full)]
    pub growth: GrowthTrigger,

    /// Do not print progress dots
    #[arg(short = 'q', long)]
    pub quiet: bool,

    /// FASTA files to load
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,
}

#[derive(Parser, Debug, Clone)]
#[command(
    name = "hapax",
    about = "Find and print the hapax legomena in one or more files",
    long_about = "Find and print the hapax legomena in one or more files.\n\
                  A \"hapax legomenon\" is a word that occurs only once in the file."
)]
pub struct HapaxArgs {
    /// Print out all data loaded before printing hapax legomena
    #[arg(short = 'd', long = "dump")]
    pub dump: bool,

    /// Only print hapax legomena of length N
    #[arg(short = 'l', long = "length", value_name = "N")]
    pub length: Option<usize>,

    /// Longest word tallied (1-1024); longer words are skipped
    #[arg(
        long = "max-length",
        value_name = "N",
        default_value_t = DEFAULT_MAX_WORD_LEN,
        value_parser = RangedU64ValueParser::<usize>::new().range(1..=MAX_WORD_LEN_LIMIT)
    )]
    pub max_len: usize,

    /// Text files to tally
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,
}
