//! This is the main driver module for all the different commands.
//!

use tracing::info;

pub use adsb::*;
pub use batch::*;
pub use report::*;
pub use speed::*;
pub use stats::*;

use crate::cli::{Opts, SubCommand};
use crate::runtime::Context;

mod adsb;
mod batch;
mod report;
mod speed;
mod stats;

// -----

#[tracing::instrument(skip(ctx))]
pub fn handle_cmds(ctx: &Context, opts: &Opts) -> eyre::Result<()> {
    let stats = match &opts.subcmd {
        SubCommand::Adsb(bopts) => {
            println!("Filter ADS-B tracker files.\n");
            filter_adsb(ctx, bopts)?
        }
        SubCommand::Speed(bopts) => {
            println!("Derive ground speed in truth files.\n");
            derive_speed(ctx, bopts)?
        }
        SubCommand::Report(ropts) => {
            println!("Generate alert report.\n");
            alert_report(ctx, ropts)?
        }
        // Done already.
        //
        SubCommand::Version => return Ok(()),
    };
    println!("Stats: {stats}");

    info!("Done.");
    Ok(())
}
