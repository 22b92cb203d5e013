use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BenchError {
    #[error("failure opening '{}': {source}", .path.display())]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failure at line {line} of '{}': {reason}", .path.display())]
    Malformed {
        path: PathBuf,
        line: usize,
        reason: String,
    },

    #[error("memory allocation failed for {requested} record slots")]
    Allocation { requested: usize },

    #[error("{0}")]
    Usage(String),

    #[error("processing '{}' failed: {source}", .path.display())]
    Processing {
        path: PathBuf,
        source: Box<BenchError>,
    },
}

impl BenchError {
    /// Line number of a malformed-input failure, looking through `Processing`
    pub fn line(&self) -> Option<usize> {
        match self {
            BenchError::Malformed { line, .. } => Some(*line),
            BenchError::Processing { source, .. } => source.line(),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, BenchError>;
