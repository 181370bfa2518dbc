use tracing::{debug, trace};

use tv_common::{close_logging, init_logging, ConfigFile, LogGuard, Versioned, TAG};

use crate::cli::Opts;
use crate::config::{ProcessConfig, CONFIG, CVERSION};
use crate::error::Status;
use crate::NAME;

/// Context holds what every command needs.
///
#[derive(Debug)]
pub struct Context {
    /// All configuration parameters
    pub config: ProcessConfig,
    /// Dry run
    pub dry_run: bool,
    /// Flushes the log file when dropped
    pub logging: LogGuard,
}

/// Initializes the runtime environment for the application.
///
/// Start logging, then load either the configuration file given with `-c` or the default one.
/// Having no default file is fine, the built-in defaults are used.
///
/// # Errors
///
/// - `ConfigError::NotFound` if the file given with `-c` does not exist.
/// - `Status::BadFileVersion` if the configuration file version does not match the current version.
///
#[tracing::instrument]
pub fn init_runtime(opts: &Opts) -> eyre::Result<Context> {
    // Initialise logging early
    //
    let logging = init_logging(NAME, opts.use_tree, opts.use_file.clone())?;
    trace!("Logging initialised.");

    let cfile = ConfigFile::<ProcessConfig>::load_or_default(TAG, CONFIG, opts.config.as_deref())?;
    debug!("config file: {:?}", cfile.default_file());

    let cfg = cfile.into_inner();
    if cfg.version() != CVERSION {
        return Err(Status::BadFileVersion(cfg.version(), CVERSION).into());
    }

    Ok(Context {
        config: cfg,
        dry_run: opts.dry_run,
        logging,
    })
}

/// Finish everything.
///
#[tracing::instrument]
pub fn finish_runtime(ctx: Context) -> eyre::Result<()> {
    close_logging(ctx.logging);
    Ok(())
}
