//! This is the `ConfigFile` struct.
//!
//! This is for finding the right default locations for the configuration files of the various
//! utilities.  This is a configuration file/struct neutral loading engine, storing only the
//! base directory and with `load()` read the proper file or the default one.
//!
//! This encapsulates the configuration file, available with `.inner()` or `.into_inner()`.
//!

use std::fmt::Debug;
use std::fs;
use std::path::{Path, PathBuf};

use directories::BaseDirs;
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::{debug, trace, warn};

use crate::makepath;

/// Main name for the directory base
pub const TAG: &str = "tv-utils";

/// Every configuration file carries a version number.
///
pub trait Versioned {
    fn version(&self) -> usize;
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Unknown config file {0:?}")]
    NotFound(PathBuf),
    #[error("Can not read {0:?}: {1}")]
    Read(PathBuf, std::io::Error),
    #[error("Invalid HCL in {0:?}: {1}")]
    Parse(PathBuf, hcl::Error),
}

/// Configuration for a CLI tool.
///
#[derive(Debug)]
pub struct ConfigFile<T: Debug + DeserializeOwned> {
    /// This is the base directory for all files.
    basedir: PathBuf,
    /// Default filename inside `basedir`.
    fname: String,
    inner: T,
}

/// Returns the base directory for our configuration files
///
/// - `$HOME/.config/<tag>` on UNIX
/// - `%LOCALAPPDATA%\<tag>` on Windows
///
#[tracing::instrument]
pub fn config_dir(tag: &str) -> PathBuf {
    match BaseDirs::new() {
        Some(base) => {
            #[cfg(unix)]
            let base = base.home_dir().join(".config");

            #[cfg(windows)]
            let base = base.data_local_dir().to_path_buf();

            debug!("base = {base:?}");
            base.join(tag)
        }
        None => {
            warn!("No home directory, using current one");
            makepath!(".", tag)
        }
    }
}

impl<T> ConfigFile<T>
where
    T: Debug + DeserializeOwned,
{
    /// Returns the path of the default config directory
    ///
    pub fn config_path(&self) -> PathBuf {
        self.basedir.clone()
    }

    /// Returns the path of the default config file
    ///
    pub fn default_file(&self) -> PathBuf {
        self.basedir.join(&self.fname)
    }

    /// Load the file and return a struct T in the right format.
    ///
    /// Use the following search path:
    /// - file specified on CLI
    /// - default basedir (based on $HOME or $LOCALAPPDATA)
    ///
    #[tracing::instrument]
    pub fn load(tag: &str, name: &str, fname: Option<&Path>) -> Result<ConfigFile<T>, ConfigError> {
        let basedir = config_dir(tag);
        let fname = match fname {
            Some(fname) => fname.to_path_buf(),
            None => basedir.join(name),
        };

        if !fname.exists() {
            return Err(ConfigError::NotFound(fname));
        }

        trace!("Loading config file {fname:?}");

        let data = fs::read_to_string(&fname).map_err(|e| ConfigError::Read(fname.clone(), e))?;
        debug!("string data = {data}");

        let inner: T = hcl::from_str(&data).map_err(|e| ConfigError::Parse(fname.clone(), e))?;
        debug!("struct data = {inner:?}");

        Ok(ConfigFile {
            basedir,
            fname: name.to_string(),
            inner,
        })
    }

    /// Return the inner configuration file
    ///
    pub fn inner(&self) -> &T {
        &self.inner
    }

    /// Consume the file and return its content
    ///
    pub fn into_inner(self) -> T {
        self.inner
    }
}

impl<T> ConfigFile<T>
where
    T: Debug + Default + DeserializeOwned,
{
    /// Same as `load()` except that a missing default file is not an error, the default value of
    /// `T` is used instead.  A missing file explicitly given is still an error.
    ///
    #[tracing::instrument]
    pub fn load_or_default(
        tag: &str,
        name: &str,
        fname: Option<&Path>,
    ) -> Result<ConfigFile<T>, ConfigError> {
        match Self::load(tag, name, fname) {
            Err(ConfigError::NotFound(path)) if fname.is_none() => {
                debug!("No default file {path:?}, using defaults");
                Ok(ConfigFile {
                    basedir: config_dir(tag),
                    fname: name.to_string(),
                    inner: T::default(),
                })
            }
            r => r,
        }
    }
}
