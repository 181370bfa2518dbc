//! Discovery of input files.
//!
//! Test vectors are stored in deep directory trees like
//! `<base>/<suite>/<scenario>/<encounter>/<run>/<name>_ADSB_Tracker.csv`, the `Selector` describes
//! which files of such a tree we are interested in.  Output files are written into a tree
//! mirroring (a suffix of) the input one, see `mirror_path()`.
//!

use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, trace, warn};
use walkdir::WalkDir;

#[derive(Debug, Error)]
pub enum DiscoverError {
    #[error("{0:?}: not a directory")]
    NotADirectory(PathBuf),
    #[error("{0:?} is not inside {1:?}")]
    NotInBase(PathBuf, PathBuf),
    #[error("{0:?} has no file name")]
    NoFileName(PathBuf),
}

/// Which files do we want.  All criteria must match, an empty `Selector` matches every file.
///
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Selector {
    /// Exact depth below the base directory, 1 means directly inside.
    pub depth: Option<usize>,
    /// The file name must contain this string.
    pub contains: Option<String>,
    /// The file extension, case-insensitive and without the dot.
    pub extension: Option<String>,
}

impl Selector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn depth(mut self, depth: usize) -> Self {
        self.depth = Some(depth);
        self
    }

    pub fn contains(mut self, s: &str) -> Self {
        self.contains = Some(s.to_string());
        self
    }

    pub fn extension(mut self, ext: &str) -> Self {
        self.extension = Some(ext.trim_start_matches('.').to_string());
        self
    }

    /// Check the file name of `path` against our criteria (depth is handled by the walk itself).
    ///
    pub fn matches(&self, path: &Path) -> bool {
        let Some(name) = path.file_name().and_then(OsStr::to_str) else {
            return false;
        };

        if let Some(s) = &self.contains {
            if !name.contains(s.as_str()) {
                return false;
            }
        }

        if let Some(ext) = &self.extension {
            match path.extension().and_then(OsStr::to_str) {
                Some(e) if e.eq_ignore_ascii_case(ext) => (),
                _ => return false,
            }
        }
        true
    }
}

/// Walk `base` and return all regular files matching `sel`, sorted.  Entries that can not be
/// read (permissions, symlink loops) are logged and skipped.
///
#[tracing::instrument]
pub fn find_files(base: &Path, sel: &Selector) -> Result<Vec<PathBuf>, DiscoverError> {
    if !base.is_dir() {
        return Err(DiscoverError::NotADirectory(base.to_path_buf()));
    }

    let mut walk = WalkDir::new(base).follow_links(true).sort_by_file_name();
    if let Some(depth) = sel.depth {
        walk = walk.min_depth(depth).max_depth(depth);
    }

    let mut files = vec![];
    for entry in walk {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("{}, skipped", e);
                continue;
            }
        };
        if entry.file_type().is_file() && sel.matches(entry.path()) {
            trace!("found {:?}", entry.path());
            files.push(entry.into_path());
        }
    }
    files.sort();
    debug!("{} files in {:?}", files.len(), base);
    Ok(files)
}

/// Build the destination path of `file`, found under `base`, into `dest`.  The first `strip`
/// directories of `file` relative to `base` are removed.
///
/// ```
/// use std::path::{Path, PathBuf};
/// use tv_common::mirror_path;
///
/// let p = mirror_path(Path::new("/in"), Path::new("/out"), Path::new("/in/a/b/f.csv"), 1).unwrap();
/// assert_eq!(PathBuf::from("/out/b/f.csv"), p);
/// ```
///
pub fn mirror_path(
    base: &Path,
    dest: &Path,
    file: &Path,
    strip: usize,
) -> Result<PathBuf, DiscoverError> {
    let rel = file
        .strip_prefix(base)
        .map_err(|_| DiscoverError::NotInBase(file.to_path_buf(), base.to_path_buf()))?;
    let name = rel
        .file_name()
        .ok_or_else(|| DiscoverError::NoFileName(file.to_path_buf()))?;

    let dirs = rel.parent().map(Path::components).into_iter().flatten();

    let mut out = dest.to_path_buf();
    out.extend(dirs.skip(strip));
    out.push(name);
    Ok(out)
}
