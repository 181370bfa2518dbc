//! Truth test vectors.
//!
//! These only have the east/west and north/south velocity components, the harness wants ground
//! speed instead.
//!

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim, WriterBuilder};
use tracing::{debug, trace};

use crate::alert::{bad_value, column};
use crate::FormatError;

/// East/west velocity component.
pub const EWV: &str = "EWV(kts)";
/// North/south velocity component.
pub const NSV: &str = "NSV(kts)";
/// Ground speed.
pub const GS: &str = "GS(kts)";

/// Ground speed from its two components.
///
#[inline]
pub fn ground_speed(ewv: f64, nsv: f64) -> f64 {
    ewv.hypot(nsv)
}

/// Where does each output field comes from.
///
#[derive(Clone, Copy, Debug, PartialEq)]
enum Source {
    Copy(usize),
    Speed,
}

/// Replace `EWV(kts)` and `NSV(kts)` by `GS(kts)`.  The new column is appended unless the file
/// already has a `GS(kts)` one, in which case it is overwritten in place.  Fields missing from
/// short lines are written empty.
///
/// Returns the number of lines written, header excluded.
///
#[tracing::instrument(skip(rdr, wtr))]
pub fn derive_ground_speed<R, W>(rdr: R, wtr: W) -> Result<usize, FormatError>
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
    let ewv = column(&headers, EWV)?;
    let nsv = column(&headers, NSV)?;

    let mut layout: Vec<Source> = headers
        .iter()
        .enumerate()
        .filter(|&(i, _)| i != ewv && i != nsv)
        .map(|(i, h)| if h == GS { Source::Speed } else { Source::Copy(i) })
        .collect();
    if !layout.contains(&Source::Speed) {
        layout.push(Source::Speed);
    }
    trace!("layout={layout:?}");

    let out: StringRecord = layout
        .iter()
        .map(|s| match s {
            Source::Copy(i) => &headers[*i],
            Source::Speed => GS,
        })
        .collect();
    wtr.write_record(&out)?;

    let mut count = 0;
    for rec in rdr.records() {
        let rec = rec?;
        let line = rec.position().map(|p| p.line()).unwrap_or_default();

        let gs = match (component(&rec, ewv, EWV, line)?, component(&rec, nsv, NSV, line)?) {
            (Some(e), Some(n)) => format!("{:?}", ground_speed(e, n)),
            _ => String::new(),
        };

        let out: StringRecord = layout
            .iter()
            .map(|s| match s {
                Source::Copy(i) => rec.get(*i).unwrap_or_default(),
                Source::Speed => gs.as_str(),
            })
            .collect();
        wtr.write_record(&out)?;
        count += 1;
    }
    wtr.flush()?;
    debug!("{count} lines");
    Ok(count)
}

/// Empty means missing.
///
fn component(rec: &StringRecord, idx: usize, name: &str, line: u64) -> Result<Option<f64>, FormatError> {
    match rec.get(idx).map(str::trim) {
        None | Some("") => Ok(None),
        Some(v) => v
            .parse::<f64>()
            .map(Some)
            .map_err(|_| bad_value(name, line, v)),
    }
}

/// Convert the truth file `input` into `output`.
///
#[tracing::instrument]
pub fn convert_truth(input: &Path, output: &Path) -> Result<usize, FormatError> {
    let fh = File::open(input).map_err(|e| FormatError::Open(input.to_path_buf(), e))?;
    let out = File::create(output)?;
    derive_ground_speed(fh, out)
}
