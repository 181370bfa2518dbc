//! `report` command: summarise every DAIDALUS result file into a single JSON report.
//!
//! For each file (aka test case), the timestamps of each alert level are collapsed into
//! time ranges.
//!

use std::fs;
use std::path::{Path, PathBuf};

use tracing::{error, info, trace};

use tv_common::find_files;
use tv_formats::{case_name, AlertSeries, Report, ReportEntry};

use crate::cli::ReportOpts;
use crate::cmds::{check_stats, Stats};
use crate::error::Status;
use crate::runtime::Context;

/// Read one result file, returns the case name, its entry and the number of samples.
///
#[tracing::instrument]
pub fn summarise(fname: &Path) -> eyre::Result<(String, ReportEntry, usize)> {
    let name = case_name(fname).ok_or_else(|| Status::BadCaseName(fname.display().to_string()))?;

    let series = AlertSeries::from_path(fname)?;
    trace!("{name}: {} samples", series.len());

    Ok((name, ReportEntry::from_series(&series), series.len()))
}

/// Fold all result files into a report.
///
#[tracing::instrument(skip(files))]
pub fn build_report(files: &[PathBuf], fail_fast: bool) -> eyre::Result<(Report, Stats)> {
    files.iter().try_fold(
        (Report::new(), Stats::default()),
        |(report, stats), fname| match summarise(fname) {
            Ok((name, entry, n)) => Ok((report.with(&name, entry), stats.done(n))),
            Err(e) if fail_fast => Err(e.wrap_err(fname.display().to_string())),
            Err(e) => {
                error!("{}: {:#}", fname.display(), e);
                Ok((report, stats.failed()))
            }
        },
    )
}

#[tracing::instrument(skip(ctx))]
pub fn alert_report(ctx: &Context, opts: &ReportOpts) -> eyre::Result<Stats> {
    let (batch, output) = ctx.config.report.resolve(
        opts.source.clone(),
        opts.dest.clone(),
        opts.output.clone(),
        opts.fail_fast,
    );

    let files = find_files(&batch.source, &batch.selector)?;
    info!("{} result files in {:?}", files.len(), batch.source);

    let fname = batch.dest.join(output);
    if ctx.dry_run {
        files.iter().for_each(|f| println!("{}", f.display()));
        println!("-> {}", fname.display());
        return Ok(Stats::default());
    }

    let (report, stats) = build_report(&files, batch.fail_fast)?;
    let stats = check_stats(stats)?;

    fs::create_dir_all(&batch.dest)?;
    report.write(&fname)?;
    info!("{} test cases written into {}", report.len(), fname.display());

    Ok(stats)
}

#[cfg(test)]
mod tests {
    use tv_formats::{AlertLevel, Interval};

    use super::*;

    const RESULT: &str = "Time, Alert Level\n[s], []\n0, 0\n1, 0\n2, 1\n";

    #[test]
    fn test_summarise() -> eyre::Result<()> {
        let dir = tempfile::tempdir()?;
        let fname = dir.path().join("case01.csv");
        fs::write(&fname, RESULT)?;

        let (name, entry, n) = summarise(&fname)?;
        assert_eq!("case01.csv", name);
        assert_eq!(3, n);
        assert_eq!(&[Interval::new(0., 1.)], entry.get(AlertLevel::None));
        assert_eq!(&[Interval::new(2., 2.)], entry.get(AlertLevel::Preventive));
        Ok(())
    }

    #[test]
    fn test_build_report() -> eyre::Result<()> {
        let dir = tempfile::tempdir()?;
        let good = dir.path().join("case01.csv");
        let bad = dir.path().join("case02.csv");
        fs::write(&good, RESULT)?;
        fs::write(&bad, "Time,Level\n")?;

        let files = vec![good.clone(), bad.clone()];
        let (report, stats) = build_report(&files, false)?;
        assert_eq!(1, report.len());
        assert!(report.get("case01.csv").is_some());
        assert_eq!(1, stats.files);
        assert_eq!(1, stats.failed);

        assert!(build_report(&files, true).is_err());
        Ok(())
    }
}
