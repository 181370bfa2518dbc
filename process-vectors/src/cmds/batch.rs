use std::fmt::Debug;
use std::fs;
use std::path::Path;

use tracing::{error, info, trace, warn};

use tv_common::{find_files, mirror_path};
use tv_formats::FormatError;

use crate::cmds::Stats;
use crate::config::Batch;
use crate::error::Status;
use crate::runtime::Context;

/// This trait define a file-to-file conversion
///
pub trait Transform: Debug {
    fn run(&self, input: &Path, output: &Path) -> Result<usize, FormatError>;
}

/// Apply `task` to every file of the batch, writing results into the mirrored output tree.
///
/// Files in error are logged and skipped unless `fail_fast` is set.
///
#[tracing::instrument(skip(ctx))]
pub fn convert_tree<T>(ctx: &Context, batch: &Batch, task: &T) -> eyre::Result<Stats>
where
    T: Transform,
{
    let files = find_files(&batch.source, &batch.selector)?;
    info!("{} files found in {:?}", files.len(), batch.source);
    if files.is_empty() {
        warn!("Nothing to do in {:?} with {:?}", batch.source, batch.selector);
    }

    let stats = files
        .iter()
        .try_fold(Stats::default(), |stats, input| -> eyre::Result<Stats> {
            let output = mirror_path(&batch.source, &batch.dest, input, batch.strip)?;
            if ctx.dry_run {
                println!("{} -> {}", input.display(), output.display());
                return Ok(stats);
            }

            match convert_one(task, input, &output) {
                Ok(n) => Ok(stats.done(n)),
                Err(e) if batch.fail_fast => Err(e.wrap_err(input.display().to_string())),
                Err(e) => {
                    error!("{}: {:#}", input.display(), e);
                    Ok(stats.failed())
                }
            }
        })?;
    check_stats(stats)
}

#[tracing::instrument]
fn convert_one<T>(task: &T, input: &Path, output: &Path) -> eyre::Result<usize>
where
    T: Transform,
{
    let dir = output
        .parent()
        .ok_or_else(|| Status::NoParent(output.display().to_string()))?;
    fs::create_dir_all(dir)?;

    let n = task.run(input, output)?;
    trace!("{n} lines into {:?}", output);
    Ok(n)
}

/// A batch where every file failed is an error.
///
pub fn check_stats(stats: Stats) -> eyre::Result<Stats> {
    if stats.files == 0 && stats.failed > 0 {
        return Err(Status::AllFailed(stats.failed).into());
    }
    Ok(stats)
}
