//! DAIDALUS result files.
//!
//! These are CSV files with one line per sample, a line of units right after the header and,
//! among others, a `Time` (in seconds) and an `Alert Level` column.  Columns are often padded
//! with spaces around the commas.
//!
//! ```text
//! Time, Alert Level, ...
//! [s],  [none],      ...
//! 0.0,  0,           ...
//! ```
//!

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};
use strum::{EnumIter, IntoEnumIterator};
use tracing::{debug, trace, warn};

use crate::FormatError;

/// Column holding the sample time.
pub const TIME: &str = "Time";
/// Column holding the alert level.
pub const ALERT_LEVEL: &str = "Alert Level";

/// Severity of an alert, as coded in the `Alert Level` column.
///
#[derive(Clone, Copy, Debug, EnumIter, Eq, Ord, PartialEq, PartialOrd)]
#[repr(u8)]
pub enum AlertLevel {
    None = 0,
    Preventive = 1,
    Corrective = 2,
    Warning = 3,
}

impl AlertLevel {
    /// Name used in the report, see `ReportEntry`.
    ///
    pub fn label(&self) -> &'static str {
        match self {
            AlertLevel::None => "None Alert",
            AlertLevel::Preventive => "Preventive Alert",
            AlertLevel::Corrective => "Corrective Alert",
            AlertLevel::Warning => "Warning Alert",
        }
    }
}

impl TryFrom<i64> for AlertLevel {
    type Error = FormatError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(AlertLevel::None),
            1 => Ok(AlertLevel::Preventive),
            2 => Ok(AlertLevel::Corrective),
            3 => Ok(AlertLevel::Warning),
            _ => Err(FormatError::UnknownAlertLevel(value)),
        }
    }
}

/// All the timestamps of a given run, split by alert level, in file order.
///
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AlertSeries {
    pub none: Vec<f64>,
    pub preventive: Vec<f64>,
    pub corrective: Vec<f64>,
    pub warning: Vec<f64>,
}

impl AlertSeries {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, level: AlertLevel) -> &[f64] {
        match level {
            AlertLevel::None => &self.none,
            AlertLevel::Preventive => &self.preventive,
            AlertLevel::Corrective => &self.corrective,
            AlertLevel::Warning => &self.warning,
        }
    }

    pub fn push(&mut self, level: AlertLevel, time: f64) {
        let v = match level {
            AlertLevel::None => &mut self.none,
            AlertLevel::Preventive => &mut self.preventive,
            AlertLevel::Corrective => &mut self.corrective,
            AlertLevel::Warning => &mut self.warning,
        };
        v.push(time);
    }

    /// Total number of samples.
    ///
    pub fn len(&self) -> usize {
        AlertLevel::iter().map(|l| self.get(l).len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Read a result file from any reader.
    ///
    #[tracing::instrument(skip(rdr))]
    pub fn from_reader<R: Read>(rdr: R) -> Result<Self, FormatError> {
        let mut rdr = ReaderBuilder::new()
            .trim(Trim::All)
            .flexible(true)
            .from_reader(rdr);

        let headers = rdr.headers()?.clone();
        let time = column(&headers, TIME)?;
        let level = column(&headers, ALERT_LEVEL)?;
        trace!("{TIME}={time} {ALERT_LEVEL}={level}");

        let mut series = AlertSeries::new();

        // First line after the header is units.
        //
        for rec in rdr.records().skip(1) {
            let rec = rec?;
            if rec.iter().all(str::is_empty) {
                continue;
            }
            let line = rec.position().map(|p| p.line()).unwrap_or_default();

            let t = field(&rec, time, TIME, line)?;
            let t = t.parse::<f64>().map_err(|_| bad_value(TIME, line, t))?;

            let l = field(&rec, level, ALERT_LEVEL, line)?;
            let l = parse_level(l).ok_or_else(|| bad_value(ALERT_LEVEL, line, l))?;

            match AlertLevel::try_from(l) {
                Ok(l) => series.push(l, t),
                Err(e) => warn!("line {line}: {e}, ignored"),
            }
        }
        debug!("{} samples", series.len());
        Ok(series)
    }

    /// Read a result file.
    ///
    #[tracing::instrument]
    pub fn from_path(fname: &Path) -> Result<Self, FormatError> {
        let fh = File::open(fname).map_err(|e| FormatError::Open(fname.to_path_buf(), e))?;
        Self::from_reader(fh)
    }
}

/// Find the index of `name` in the header line.
///
pub(crate) fn column(headers: &StringRecord, name: &str) -> Result<usize, FormatError> {
    headers
        .iter()
        .position(|h| h.trim() == name)
        .ok_or_else(|| FormatError::MissingColumn(name.to_string()))
}

fn field<'a>(rec: &'a StringRecord, idx: usize, name: &str, line: u64) -> Result<&'a str, FormatError> {
    rec.get(idx).ok_or_else(|| bad_value(name, line, ""))
}

pub(crate) fn bad_value(column: &str, line: u64, value: &str) -> FormatError {
    FormatError::BadValue {
        column: column.to_string(),
        line,
        value: value.to_string(),
    }
}

/// Levels are integers but some tools write them as `2.0`.
///
fn parse_level(s: &str) -> Option<i64> {
    s.parse::<i64>().ok().or_else(|| {
        s.parse::<f64>()
            .ok()
            .filter(|f| f.fract() == 0.0)
            .map(|f| f as i64)
    })
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    const RESULT: &str = "\
Time , Alert Level , Ownship Lat
[s] , [none] , [deg]
0 , 0 , 45.0
1 , 0 , 45.1
2 , 1 , 45.2
";

    #[test]
    fn test_from_reader() {
        let s = AlertSeries::from_reader(RESULT.as_bytes()).unwrap();
        assert_eq!(vec![0.0, 1.0], s.none);
        assert_eq!(vec![2.0], s.preventive);
        assert!(s.corrective.is_empty());
        assert!(s.warning.is_empty());
        assert_eq!(3, s.len());
    }

    #[test]
    fn test_units_row_dropped() {
        let data = "Time,Alert Level\n0,3\n1,3\n2,3\n";
        let s = AlertSeries::from_reader(data.as_bytes()).unwrap();
        assert_eq!(vec![1.0, 2.0], s.warning);
    }

    #[test]
    fn test_keep_order_and_duplicates() {
        let data = "Time,Alert Level\ns,-\n5,2\n5,2\n3,2\n";
        let s = AlertSeries::from_reader(data.as_bytes()).unwrap();
        assert_eq!(vec![5.0, 5.0, 3.0], s.corrective);
    }

    #[test]
    fn test_unknown_level_ignored() {
        let data = "Time,Alert Level\ns,-\n0,7\n1,2.0\n";
        let s = AlertSeries::from_reader(data.as_bytes()).unwrap();
        assert_eq!(1, s.len());
        assert_eq!(vec![1.0], s.corrective);
    }

    #[rstest]
    #[case("Time,Level\ns,-\n0,0\n", "Alert Level")]
    #[case("Timestamp,Alert Level\ns,-\n0,0\n", "Time")]
    fn test_missing_column(#[case] data: &str, #[case] name: &str) {
        let r = AlertSeries::from_reader(data.as_bytes());
        match r {
            Err(FormatError::MissingColumn(c)) => assert_eq!(name, c),
            _ => panic!("bad result {r:?}"),
        }
    }

    #[rstest]
    #[case("Time,Alert Level\ns,-\nfoo,0\n", "Time")]
    #[case("Time,Alert Level\ns,-\n0,high\n", "Alert Level")]
    #[case("Time,Alert Level\ns,-\n0,1.5\n", "Alert Level")]
    fn test_bad_value(#[case] data: &str, #[case] name: &str) {
        let r = AlertSeries::from_reader(data.as_bytes());
        match r {
            Err(FormatError::BadValue { column, line, .. }) => {
                assert_eq!(name, column);
                assert_eq!(3, line);
            }
            _ => panic!("bad result {r:?}"),
        }
    }

    #[rstest]
    #[case(0, AlertLevel::None)]
    #[case(1, AlertLevel::Preventive)]
    #[case(2, AlertLevel::Corrective)]
    #[case(3, AlertLevel::Warning)]
    fn test_level_from(#[case] v: i64, #[case] level: AlertLevel) {
        assert_eq!(level, AlertLevel::try_from(v).unwrap());
    }

    #[test]
    fn test_level_bad() {
        assert!(AlertLevel::try_from(4).is_err());
        assert!(AlertLevel::try_from(-1).is_err());
    }

    #[test]
    fn test_from_path_missing() {
        let r = AlertSeries::from_path(Path::new("/nonexistent.csv"));
        assert!(matches!(r, Err(FormatError::Open(_, _))));
    }
}
