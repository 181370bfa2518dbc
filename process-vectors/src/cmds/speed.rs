//! `speed` command: replace velocity components by ground speed in truth files.
//!

use std::path::Path;

use tracing::info;

use tv_formats::{convert_truth, FormatError};

use crate::cli::BatchOpts;
use crate::cmds::{convert_tree, Stats, Transform};
use crate::config::SPEED_DEFAULTS;
use crate::runtime::Context;

#[derive(Debug)]
pub struct GroundSpeed;

impl Transform for GroundSpeed {
    fn run(&self, input: &Path, output: &Path) -> Result<usize, FormatError> {
        convert_truth(input, output)
    }
}

#[tracing::instrument(skip(ctx))]
pub fn derive_speed(ctx: &Context, opts: &BatchOpts) -> eyre::Result<Stats> {
    let batch = ctx.config.speed.resolve(
        &SPEED_DEFAULTS,
        opts.source.clone(),
        opts.dest.clone(),
        opts.fail_fast,
    );
    info!("Deriving ground speed from {:?} into {:?}", batch.source, batch.dest);

    convert_tree(ctx, &batch, &GroundSpeed)
}
