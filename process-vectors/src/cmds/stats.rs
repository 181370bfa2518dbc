//! Statistics of a batch run
//!

use std::fmt::{Display, Formatter};
use std::ops::Add;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Stats {
    /// Files successfully processed
    pub files: usize,
    /// Files in error
    pub failed: usize,
    /// Lines read or written
    pub lines: usize,
}

impl Stats {
    /// One more file done.
    ///
    pub fn done(self, lines: usize) -> Self {
        self + Stats {
            files: 1,
            failed: 0,
            lines,
        }
    }

    /// One more file in error.
    ///
    pub fn failed(self) -> Self {
        self + Stats {
            files: 0,
            failed: 1,
            lines: 0,
        }
    }

    pub fn total(&self) -> usize {
        self.files + self.failed
    }
}

impl Add for Stats {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Stats {
            files: self.files + rhs.files,
            failed: self.failed + rhs.failed,
            lines: self.lines + rhs.lines,
        }
    }
}

impl Display for Stats {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} files processed, {} failed, {} lines",
            self.files, self.failed, self.lines
        )
    }
}
