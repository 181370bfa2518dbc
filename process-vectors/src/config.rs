//! Configuration module
//!
//! All keys are optional, anything not given in the file nor on the command line gets the
//! defaults below, which match the layout of the DO-365 test vectors.
//!
//! ```hcl
//! version = 1
//!
//! adsb {
//!   source   = "D:/Personal/RTCA DO-365 MOPS_Test_Vectors"
//!   dest     = "D:/Personal/TestADSB"
//!   contains = "_ADSB_Tracke"
//!   depth    = 5
//!   strip    = 1
//! }
//!
//! speed {
//!   source = "D:/Personal/RTCA DO-365 MOPS_Test_Vectors"
//!   dest   = "D:/Personal/RTCA DO-365 MOPS_Test_Cases"
//! }
//!
//! report {
//!   source = "TestResults"
//!   dest   = "TestReports"
//!   output = "report.json"
//! }
//! ```
//!
//! Version History:
//!
//! - v1 is the initial version
//!

use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use tv_common::{Selector, Versioned};

/// Config filename
pub const CONFIG: &str = "process-vectors.hcl";

/// Current version
pub const CVERSION: usize = 1;

/// Test vectors are all in the same tree.
const VECTORS: &str = "RTCA DO-365 MOPS_Test_Vectors";

/// Configuration for the CLI tool
///
#[derive(Debug, Deserialize, Serialize)]
pub struct ProcessConfig {
    pub version: usize,
    /// `adsb` command.
    #[serde(default)]
    pub adsb: StageConfig,
    /// `speed` command.
    #[serde(default)]
    pub speed: StageConfig,
    /// `report` command.
    #[serde(default)]
    pub report: ReportConfig,
}

impl Default for ProcessConfig {
    fn default() -> Self {
        ProcessConfig {
            version: CVERSION,
            adsb: StageConfig::default(),
            speed: StageConfig::default(),
            report: ReportConfig::default(),
        }
    }
}

impl Versioned for ProcessConfig {
    fn version(&self) -> usize {
        self.version
    }
}

/// Parameters for a file-to-file conversion.
///
#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct StageConfig {
    /// Base of the input tree.
    pub source: Option<String>,
    /// Base of the output tree.
    pub dest: Option<String>,
    /// Input file names must contain this.
    pub contains: Option<String>,
    /// Depth of input files inside `source`.
    pub depth: Option<usize>,
    /// Number of leading directories not copied into `dest`.
    pub strip: Option<usize>,
}

#[derive(Clone, Debug, Default, Deserialize, Serialize)]
pub struct ReportConfig {
    /// Directory of the result files.
    pub source: Option<String>,
    /// Directory for the report.
    pub dest: Option<String>,
    /// Name of the report.
    pub output: Option<String>,
}

/// Built-in defaults for a conversion stage.
///
#[derive(Clone, Copy, Debug)]
pub struct StageDefaults {
    pub source: &'static str,
    pub dest: &'static str,
    pub contains: &'static str,
    pub depth: usize,
    pub strip: usize,
}

/// `*\*\*\*\*_ADSB_Tracke*`, first directory level is not kept.
///
pub const ADSB_DEFAULTS: StageDefaults = StageDefaults {
    source: VECTORS,
    dest: "TestADSB",
    contains: "_ADSB_Tracke",
    depth: 5,
    strip: 1,
};

/// `*\*\*\*_Truth_TV*`, the whole tree is kept.
///
pub const SPEED_DEFAULTS: StageDefaults = StageDefaults {
    source: VECTORS,
    dest: "RTCA DO-365 MOPS_Test_Cases",
    contains: "_Truth_TV",
    depth: 4,
    strip: 0,
};

pub const REPORT_SOURCE: &str = "TestResults";
pub const REPORT_DEST: &str = "TestReports";
pub const REPORT_OUTPUT: &str = "report.json";

/// Fully resolved parameters of a batch of files.
///
#[derive(Clone, Debug)]
pub struct Batch {
    pub source: PathBuf,
    pub dest: PathBuf,
    pub selector: Selector,
    pub strip: usize,
    pub fail_fast: bool,
}

impl StageConfig {
    /// Merge CLI values, configuration and defaults, in that order.
    ///
    pub fn resolve(
        &self,
        def: &StageDefaults,
        source: Option<PathBuf>,
        dest: Option<PathBuf>,
        fail_fast: bool,
    ) -> Batch {
        let contains = self.contains.as_deref().unwrap_or(def.contains);
        Batch {
            source: source
                .or_else(|| self.source.as_ref().map(PathBuf::from))
                .unwrap_or_else(|| PathBuf::from(def.source)),
            dest: dest
                .or_else(|| self.dest.as_ref().map(PathBuf::from))
                .unwrap_or_else(|| PathBuf::from(def.dest)),
            selector: Selector::new()
                .contains(contains)
                .depth(self.depth.unwrap_or(def.depth)),
            strip: self.strip.unwrap_or(def.strip),
            fail_fast,
        }
    }
}

impl ReportConfig {
    /// Merge CLI values, configuration and defaults.  Returns the batch and the report name.
    ///
    pub fn resolve(
        &self,
        source: Option<PathBuf>,
        dest: Option<PathBuf>,
        output: Option<String>,
        fail_fast: bool,
    ) -> (Batch, String) {
        let batch = Batch {
            source: source
                .or_else(|| self.source.as_ref().map(PathBuf::from))
                .unwrap_or_else(|| PathBuf::from(REPORT_SOURCE)),
            dest: dest
                .or_else(|| self.dest.as_ref().map(PathBuf::from))
                .unwrap_or_else(|| PathBuf::from(REPORT_DEST)),
            selector: Selector::new().extension("csv").depth(1),
            strip: 0,
            fail_fast,
        };
        let output = output
            .or_else(|| self.output.clone())
            .unwrap_or_else(|| REPORT_OUTPUT.to_string());
        (batch, output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let cfg = ProcessConfig::default();
        assert_eq!(CVERSION, cfg.version());

        let b = cfg.adsb.resolve(&ADSB_DEFAULTS, None, None, false);
        assert_eq!(PathBuf::from(VECTORS), b.source);
        assert_eq!(PathBuf::from("TestADSB"), b.dest);
        assert_eq!(Some(5), b.selector.depth);
        assert_eq!(Some("_ADSB_Tracke".to_string()), b.selector.contains);
        assert_eq!(1, b.strip);
    }

    #[test]
    fn test_cli_overrides_config() {
        let cfg = StageConfig {
            source: Some("from-config".to_string()),
            dest: Some("dest-config".to_string()),
            depth: Some(2),
            ..Default::default()
        };
        let b = cfg.resolve(&SPEED_DEFAULTS, Some(PathBuf::from("from-cli")), None, true);
        assert_eq!(PathBuf::from("from-cli"), b.source);
        assert_eq!(PathBuf::from("dest-config"), b.dest);
        assert_eq!(Some(2), b.selector.depth);
        assert_eq!(Some("_Truth_TV".to_string()), b.selector.contains);
        assert_eq!(0, b.strip);
        assert!(b.fail_fast);
    }

    #[test]
    fn test_report_resolve() {
        let cfg = ReportConfig {
            output: Some("alerts.json".to_string()),
            ..Default::default()
        };
        let (b, out) = cfg.resolve(None, Some(PathBuf::from("out")), None, false);
        assert_eq!(PathBuf::from(REPORT_SOURCE), b.source);
        assert_eq!(PathBuf::from("out"), b.dest);
        assert_eq!(Some("csv".to_string()), b.selector.extension);
        assert_eq!("alerts.json", out);
    }

    #[test]
    fn test_parse_hcl() {
        let data = r##"
version = 1

adsb {
  source = "vectors"
  strip  = 2
}

report {
  output = "r.json"
}
"##;
        let cfg: ProcessConfig = hcl::from_str(data).unwrap();
        assert_eq!(1, cfg.version);
        assert_eq!(Some("vectors".to_string()), cfg.adsb.source);
        assert_eq!(Some(2), cfg.adsb.strip);
        assert!(cfg.speed.source.is_none());
        assert_eq!(Some("r.json".to_string()), cfg.report.output);
    }
}
