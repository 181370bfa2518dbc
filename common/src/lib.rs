//! This library is there to share some common code amongst all the test-vector utilities.
//!
//! - logging initialisation (`tracing` based)
//! - HCL configuration file loading
//! - discovery of input files and mirroring of the input tree into the output one
//!

mod config;
mod discover;
mod logging;
mod macros;

use clap::{crate_name, crate_version};
pub use config::*;
pub use discover::*;
pub use logging::*;

const NAME: &str = crate_name!();
const VERSION: &str = crate_version!();

pub fn version() -> String {
    format!("{}/{}", NAME, VERSION)
}
