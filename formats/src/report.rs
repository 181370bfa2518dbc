//! The alert report.
//!
//! For each test case, the ranges of time spent in each alert level:
//!
//! ```text
//! {
//!   "case01.csv": [
//!     {
//!       "None Alert": [[0.0, 12.0], [40.0, 60.0]],
//!       "Preventive Alert": [[13.0, 39.0]],
//!       "Corrective Alert": [],
//!       "Warning Alert": []
//!     }
//!   ]
//! }
//! ```
//!

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::{debug, trace, warn};

use crate::{collapse, AlertLevel, AlertSeries, FormatError, Interval};

/// The name of a test case is the file name of its result file.
///
pub fn case_name(fname: &Path) -> Option<String> {
    fname
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
}

/// Ranges for each alert level of a single run.
///
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
pub struct ReportEntry {
    #[serde(rename = "None Alert")]
    pub none: Vec<Interval>,
    #[serde(rename = "Preventive Alert")]
    pub preventive: Vec<Interval>,
    #[serde(rename = "Corrective Alert")]
    pub corrective: Vec<Interval>,
    #[serde(rename = "Warning Alert")]
    pub warning: Vec<Interval>,
}

impl ReportEntry {
    pub fn from_series(series: &AlertSeries) -> Self {
        for level in AlertLevel::iter() {
            trace!("{}: {} samples", level.label(), series.get(level).len());
        }
        ReportEntry {
            none: collapse(series.get(AlertLevel::None)),
            preventive: collapse(series.get(AlertLevel::Preventive)),
            corrective: collapse(series.get(AlertLevel::Corrective)),
            warning: collapse(series.get(AlertLevel::Warning)),
        }
    }

    pub fn get(&self, level: AlertLevel) -> &[Interval] {
        match level {
            AlertLevel::None => &self.none,
            AlertLevel::Preventive => &self.preventive,
            AlertLevel::Corrective => &self.corrective,
            AlertLevel::Warning => &self.warning,
        }
    }
}

impl From<&AlertSeries> for ReportEntry {
    fn from(value: &AlertSeries) -> Self {
        ReportEntry::from_series(value)
    }
}

/// The whole report, indexed by test case name.
///
/// Each case is a list for compatibility with the existing consumers of the report, it always
/// holds a single entry.
///
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Report(BTreeMap<String, Vec<ReportEntry>>);

impl Report {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a test case.
    ///
    pub fn insert(&mut self, name: &str, entry: ReportEntry) {
        if self.0.insert(name.to_string(), vec![entry]).is_some() {
            warn!("Duplicate test case {name}, replaced");
        }
    }

    /// Same as `insert()` but for use in a fold.
    ///
    pub fn with(mut self, name: &str, entry: ReportEntry) -> Self {
        self.insert(name, entry);
        self
    }

    pub fn get(&self, name: &str) -> Option<&ReportEntry> {
        self.0.get(name).and_then(|v| v.first())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &String> {
        self.0.keys()
    }

    /// Pretty-printed JSON (2 spaces indentation).
    ///
    pub fn to_json(&self) -> Result<String, FormatError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    #[tracing::instrument(skip(self))]
    pub fn write(&self, fname: &Path) -> Result<(), FormatError> {
        let data = self.to_json()?;
        debug!("{} bytes", data.len());
        fs::write(fname, data)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    fn sample() -> AlertSeries {
        AlertSeries::from_reader("Time,Alert Level\ns,-\n0,0\n1,0\n2,1\n".as_bytes()).unwrap()
    }

    #[test]
    fn test_case_name() {
        let p = Path::new("TestResults").join("case01.csv");
        assert_eq!(Some("case01.csv".to_string()), case_name(&p));
        assert_eq!(None, case_name(Path::new("/")));
    }

    #[test]
    fn test_entry_from_series() {
        let e = ReportEntry::from_series(&sample());
        assert_eq!(vec![Interval::new(0., 1.)], e.none);
        assert_eq!(vec![Interval::new(2., 2.)], e.preventive);
        assert!(e.get(AlertLevel::Corrective).is_empty());
        assert!(e.get(AlertLevel::Warning).is_empty());
    }

    #[test]
    fn test_report_json() {
        let r = Report::new().with("case01.csv", (&sample()).into());
        let v: serde_json::Value = serde_json::from_str(&r.to_json().unwrap()).unwrap();
        let res = json!({
            "case01.csv": [
                {
                    "None Alert": [[0.0, 1.0]],
                    "Preventive Alert": [[2.0, 2.0]],
                    "Corrective Alert": [],
                    "Warning Alert": []
                }
            ]
        });
        assert_eq!(res, v);
    }

    #[test]
    fn test_entry_keys_are_labels() {
        let v = serde_json::to_value(ReportEntry::default()).unwrap();
        let mut keys: Vec<_> = v.as_object().unwrap().keys().cloned().collect();
        keys.sort();
        let mut labels: Vec<_> = AlertLevel::iter().map(|l| l.label().to_string()).collect();
        labels.sort();
        assert_eq!(labels, keys);
    }

    #[test]
    fn test_report_indent() {
        let r = Report::new().with("a", ReportEntry::default());
        let s = r.to_json().unwrap();
        assert!(s.starts_with("{\n  \"a\": [\n    {\n      \"None Alert\": []"));
    }

    #[test]
    fn test_report_replace() {
        let mut r = Report::new();
        r.insert("a", ReportEntry::default());
        r.insert("a", ReportEntry::from_series(&sample()));
        assert_eq!(1, r.len());
        assert_eq!(1, r.get("a").unwrap().none.len());
    }

    #[test]
    fn test_report_write() -> eyre::Result<()> {
        let dir = tempfile::tempdir()?;
        let fname = dir.path().join("report.json");

        let r = Report::new().with("b", ReportEntry::default()).with("a", ReportEntry::default());
        r.write(&fname)?;

        let back: Report = serde_json::from_str(&fs::read_to_string(&fname)?)?;
        assert_eq!(r, back);
        assert_eq!(vec!["a", "b"], back.names().collect::<Vec<_>>());
        Ok(())
    }
}
