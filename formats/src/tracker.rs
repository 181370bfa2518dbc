//! ADS-B tracker files.
//!
//! The test vectors carry a lot of columns, the harness only needs a few of them.
//!

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use csv::{ReaderBuilder, Trim, WriterBuilder};
use tracing::{debug, trace};

use crate::alert::column;
use crate::FormatError;

/// Columns kept from the tracker files, in output order.
///
pub const TRACKER_COLUMNS: [&str; 8] = [
    "TOA(s)",
    "ICAO",
    "LAT(deg)",
    "LON(deg)",
    "ALT(ft)",
    "VS(ft/min)",
    "HDG(deg)",
    "GS(kts)",
];

/// Copy `columns` from `rdr` into `wtr`, in that order.  Values are copied verbatim, fields
/// missing from short lines are written empty.
///
/// Returns the number of lines written, header excluded.
///
#[tracing::instrument(skip(rdr, wtr))]
pub fn select_columns<R, W>(rdr: R, wtr: W, columns: &[&str]) -> Result<usize, FormatError>
where
    R: Read,
    W: Write,
{
    let mut rdr = ReaderBuilder::new()
        .trim(Trim::Headers)
        .flexible(true)
        .from_reader(rdr);
    let mut wtr = WriterBuilder::new().from_writer(wtr);

    let headers = rdr.headers()?.clone();
    let idx = columns
        .iter()
        .map(|c| column(&headers, c))
        .collect::<Result<Vec<_>, _>>()?;
    trace!("idx={idx:?}");

    wtr.write_record(columns)?;

    let mut count = 0;
    for rec in rdr.records() {
        let rec = rec?;
        wtr.write_record(idx.iter().map(|&i| rec.get(i).unwrap_or_default()))?;
        count += 1;
    }
    wtr.flush()?;
    debug!("{count} lines");
    Ok(count)
}

/// Cut down the tracker file `input` into `output`.
///
#[tracing::instrument]
pub fn filter_tracker(input: &Path, output: &Path) -> Result<usize, FormatError> {
    let fh = File::open(input).map_err(|e| FormatError::Open(input.to_path_buf(), e))?;
    let out = File::create(output)?;
    select_columns(fh, out, &TRACKER_COLUMNS)
}
