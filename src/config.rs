use std::path::PathBuf;

use crate::cli::Args;
use crate::error::{BenchError, Result};
use crate::store::{GrowthTrigger, StoreKind};

/// How each run's store is built
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoreSettings {
    pub kind: StoreKind,
    pub initial_capacity: usize,
    pub growth: GrowthTrigger,
}

/// Runtime configuration derived from CLI arguments
#[derive(Clone, Debug)]
pub struct Config {
    pub repeats: u64,
    pub store: StoreSettings,
    pub progress: bool,
    pub input_files: Vec<PathBuf>,
}

impl Config {
    /// Build configuration from parsed CLI arguments
    pub fn from_args(args: &Args) -> Result<Self> {
        if args.repeats == 0 {
            return Err(BenchError::Usage(
                "repeat count must be at least 1".to_string(),
            ));
        }
        if args.initial_capacity == 0 {
            return Err(BenchError::Usage(
                "initial capacity must be at least 1".to_string(),
            ));
        }

        Ok(Config {
            repeats: args.repeats,
            store: StoreSettings {
                kind: args.store,
                initial_capacity: args.initial_capacity,
                growth: args.growth,
            },
            progress: !args.quiet,
            input_files: args.files.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    fn parse(argv: &[&str]) -> Result<Config> {
        Config::from_args(&Args::try_parse_from(argv).unwrap())
    }

    #[test]
    fn test_from_args() {
        let config = parse(&["fasta-bench", "-q", "-c", "16", "--growth", "headroom", "a.fa"]).unwrap();
        assert!(!config.progress);
        assert_eq!(config.repeats, 1);
        assert_eq!(
            config.store,
            StoreSettings {
                kind: StoreKind::Array,
                initial_capacity: 16,
                growth: GrowthTrigger::Headroom,
            }
        );
    }

    #[test]
    fn test_zero_repeats_rejected() {
        assert!(matches!(
            parse(&["fasta-bench", "-R", "0", "a.fa"]),
            Err(BenchError::Usage(_))
        ));
    }

    #[test]
    fn test_zero_capacity_rejected() {
        assert!(matches!(
            parse(&["fasta-bench", "-c", "0", "a.fa"]),
            Err(BenchError::Usage(_))
        ));
    }
}
