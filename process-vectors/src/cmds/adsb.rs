//! `adsb` command: keep only the columns of the ADS-B tracker files the harness reads.
//!

use std::path::Path;

use tracing::info;

use tv_formats::{filter_tracker, FormatError};

use crate::cli::BatchOpts;
use crate::cmds::{convert_tree, Stats, Transform};
use crate::config::ADSB_DEFAULTS;
use crate::runtime::Context;

#[derive(Debug)]
pub struct TrackerFilter;

impl Transform for TrackerFilter {
    fn run(&self, input: &Path, output: &Path) -> Result<usize, FormatError> {
        filter_tracker(input, output)
    }
}

#[tracing::instrument(skip(ctx))]
pub fn filter_adsb(ctx: &Context, opts: &BatchOpts) -> eyre::Result<Stats> {
    let batch = ctx.config.adsb.resolve(
        &ADSB_DEFAULTS,
        opts.source.clone(),
        opts.dest.clone(),
        opts.fail_fast,
    );
    info!("Filtering tracker files from {:?} into {:?}", batch.source, batch.dest);

    convert_tree(ctx, &batch, &TrackerFilter)
}
