//! Utility preparing the RTCA DO-365 MOPS test vectors for the collision-avoidance harness and
//! summarising the DAIDALUS alert results.
//!
//! - `adsb` cuts the ADS-B tracker files down to the columns used by the harness,
//! - `speed` derives ground speed in the truth files,
//! - `report` collapses alert levels into time ranges and writes `report.json`.
//!
//! Defaults can be changed in `$HOME/.config/tv-utils/process-vectors.hcl`
//! (`%LOCALAPPDATA%\tv-utils\process-vectors.hcl` on Windows).
//!

use clap::{crate_authors, crate_version, Parser};
use eyre::Result;
use tracing::trace;

use crate::cli::{Opts, SubCommand};
use crate::cmds::handle_cmds;
use crate::runtime::{finish_runtime, init_runtime};

mod cli;
mod cmds;
mod config;
mod error;
mod runtime;

/// Binary name, using a different binary name
pub const NAME: &str = env!("CARGO_BIN_NAME");
/// Binary version
pub const VERSION: &str = crate_version!();
/// Authors
pub const AUTHORS: &str = crate_authors!();

fn main() -> Result<()> {
    let opts = Opts::parse();

    if let SubCommand::Version = opts.subcmd {
        println!("{} v{} by {}", NAME, VERSION, AUTHORS);
        println!("{}", tv_common::version());
        println!("{}", tv_formats::version());
        return Ok(());
    }

    let ctx = init_runtime(&opts)?;
    trace!("Context: {:?}", ctx);

    handle_cmds(&ctx, &opts)?;

    finish_runtime(ctx)
}
