//! Load FASTA records into competing in-memory stores and time it
//!
//! Three stores share the [`store::RecordStore`] capability: a doubling
//! array, a head-only linked list and a linked list with a tail reference.
//! [`bench`] repeats whole load-and-teardown cycles and averages the time.

pub mod array;
pub mod bench;
pub mod cli;
pub mod config;
pub mod error;
pub mod ingest;
pub mod input;
pub mod list;
pub mod output;
pub mod record;
pub mod store;
pub mod tally;

/// Set up SIGPIPE handling for Unix systems
/// This prevents "broken pipe" errors when output is piped to commands like `head`
#[cfg(unix)]
pub fn setup_sigpipe() {
    unsafe {
        libc::signal(libc::SIGPIPE, libc::SIG_DFL);
    }
}

#[cfg(not(unix))]
pub fn setup_sigpipe() {
    // Windows doesn't have SIGPIPE
}

/// Route `log` output to stderr, filtered by `RUST_LOG` (default `warn`)
pub fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
}
