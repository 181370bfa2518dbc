//! Definition of the test-vector data formats
//!
//! Three kinds of files are handled here:
//!
//! - ADS-B tracker files, cut down to a fixed set of columns (`tracker`)
//! - truth files, where ground speed is derived from its velocity components (`truth`)
//! - DAIDALUS result files, where alert levels are summarised into time ranges (`alert`,
//!   `interval` and `report`)
//!

pub use alert::*;
pub use error::*;
pub use interval::*;
pub use report::*;
pub use tracker::*;
pub use truth::*;

mod alert;
mod error;
mod interval;
mod report;
mod tracker;
mod truth;

pub fn version() -> String {
    format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
}
