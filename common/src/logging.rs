//! Common logging initializer
//!
//! Everything goes through `tracing`, filtered by `RUST_LOG`.  Output is either a hierarchical
//! tree (nice for following what happens to a single file) or a compact line-oriented format on
//! stderr, optionally duplicated into an hourly rolling file.
//!

use std::fmt::{Debug, Formatter};

use eyre::Result;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;
use tracing_tree::HierarchicalLayer;

#[tracing::instrument]
pub fn init_logging(name: &'static str, use_tree: bool, use_file: Option<String>) -> Result<LogGuard> {
    // Load filters from environment
    //
    let filter = EnvFilter::from_default_env();

    // Do we want hierarchical output?
    //
    let tree = if use_tree {
        Some(
            HierarchicalLayer::new(2)
                .with_ansi(true)
                .with_span_retrace(true)
                .with_span_modes(true)
                .with_targets(true)
                .with_verbose_entry(true)
                .with_verbose_exit(true)
                .with_bracketed_fields(true),
        )
    } else {
        None
    };

    // Plain output otherwise.
    //
    let plain = if use_tree {
        None
    } else {
        Some(
            tracing_subscriber::fmt::layer()
                .compact()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
    };

    // Log to file?
    //
    let (file, guard) = match use_file {
        Some(dir) => {
            // Basic append-only rolling file for all traces, written by a background thread.
            //
            let file_appender = tracing_appender::rolling::hourly(dir, name);
            let (writer, guard) = tracing_appender::non_blocking(file_appender);
            let layer = tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(writer);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    // Combine filters & exporters
    //
    tracing_subscriber::registry()
        .with(filter)
        .with(tree)
        .with(plain)
        .with(file)
        .try_init()?;

    Ok(LogGuard(guard))
}

/// Keeps the file writer alive, pending lines are flushed when it is dropped.
///
#[derive(Default)]
pub struct LogGuard(Option<WorkerGuard>);

impl Debug for LogGuard {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("LogGuard").field(&self.0.is_some()).finish()
    }
}

/// Counterpart of `init_logging()`, flush the log file if any.
///
#[tracing::instrument]
pub fn close_logging(guard: LogGuard) {
    tracing::trace!("Logging closed.");
    drop(guard);
}
