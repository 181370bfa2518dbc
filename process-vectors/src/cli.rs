//! Module describing all possible commands and sub-commands to the `process-vectors` driver
//!
//! We have three main commands:
//!
//! - `adsb`
//! - `speed`
//! - `report`
//!
//! `adsb` cuts the ADS-B tracker files down to the columns used by the harness.
//!
//! `speed` replaces the velocity components of the truth files by the ground speed.
//!
//! `report` summarises the alert levels of every DAIDALUS result file into a single JSON file.
//!

use std::path::PathBuf;

use clap::{crate_authors, crate_description, crate_name, crate_version, Parser};

/// CLI options
#[derive(Debug, Parser)]
#[command(disable_version_flag = true)]
#[clap(name = crate_name!(), about = crate_description!())]
#[clap(version = crate_version!(), author = crate_authors!())]
pub struct Opts {
    /// configuration file.
    #[clap(short = 'c', long)]
    pub config: Option<PathBuf>,
    /// Only list the files that would be processed.
    #[clap(short = 'n', long)]
    pub dry_run: bool,
    /// Hierarchical output for logs.
    #[clap(short = 'T', long)]
    pub use_tree: bool,
    /// Also log into this directory.
    #[clap(long)]
    pub use_file: Option<String>,
    /// Sub-commands (see below).
    #[clap(subcommand)]
    pub subcmd: SubCommand,
}

// ------

/// All sub-commands:
///
/// `adsb [-s DIR] [-d DIR] [--fail-fast]`
/// `speed [-s DIR] [-d DIR] [--fail-fast]`
/// `report [-s DIR] [-d DIR] [-o NAME] [--fail-fast]`
/// `version`
///
#[derive(Debug, Parser)]
pub enum SubCommand {
    /// Keep only the harness columns of ADS-B tracker files.
    Adsb(BatchOpts),
    /// Derive ground speed in truth files.
    #[clap(visible_alias = "gs")]
    Speed(BatchOpts),
    /// Generate the alert ranges report.
    Report(ReportOpts),
    /// List all package versions.
    Version,
}

#[derive(Debug, Parser)]
pub struct BatchOpts {
    /// Base directory of input files.
    #[clap(short = 's', long)]
    pub source: Option<PathBuf>,
    /// Base directory for output files.
    #[clap(short = 'd', long)]
    pub dest: Option<PathBuf>,
    /// Stop at the first file in error.
    #[clap(long)]
    pub fail_fast: bool,
}

#[derive(Debug, Parser)]
pub struct ReportOpts {
    /// Directory of result files.
    #[clap(short = 's', long)]
    pub source: Option<PathBuf>,
    /// Directory for the report.
    #[clap(short = 'd', long)]
    pub dest: Option<PathBuf>,
    /// Report file name.
    #[clap(short = 'o', long)]
    pub output: Option<String>,
    /// Stop at the first file in error.
    #[clap(long)]
    pub fail_fast: bool,
}
