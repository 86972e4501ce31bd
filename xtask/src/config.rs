//! Optional `android-build.toml` at the repo root.
//!
//! ```toml
//! crate_dir = "flutter/rust"
//! cargo = "cargo"
//! ```
//!
//! Relative paths resolve against the directory holding the file.

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::ConfigError;

pub const CONFIG_FILE: &str = "android-build.toml";

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    crate_dir: Option<PathBuf>,
    cargo: Option<String>,
}

/// Resolved settings used to build invocations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BuildConfig {
    /// Program that provides the `ndk` subcommand.
    pub cargo: String,
    /// Working directory for the cross-build.
    pub crate_dir: PathBuf,
}

impl BuildConfig {
    pub fn with_root(root: &Path) -> Self {
        Self {
            cargo: "cargo".to_string(),
            crate_dir: root.to_path_buf(),
        }
    }

    /// Load from `explicit`, or from `<root>/android-build.toml` if present.
    ///
    /// An explicit path that does not exist is an error; a missing default
    /// file just means defaults.
    pub fn load(root: &Path, explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let path = match explicit {
            Some(p) if !p.is_file() => return Err(ConfigError::Missing(p.to_path_buf())),
            Some(p) => p.to_path_buf(),
            None => {
                let p = root.join(CONFIG_FILE);
                if !p.is_file() {
                    log::debug!("no {CONFIG_FILE} under {}, using defaults", root.display());
                    return Ok(Self::with_root(root));
                }
                p
            }
        };

        let text = fs::read_to_string(&path).map_err(|source| ConfigError::Read {
            path: path.clone(),
            source,
        })?;
        let file: ConfigFile = toml::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.clone(),
            source,
        })?;
        log::debug!("loaded {}", path.display());

        let base = path.parent().unwrap_or(root);
        let mut cfg = Self::with_root(root);
        if let Some(dir) = file.crate_dir {
            cfg.crate_dir = if dir.is_absolute() { dir } else { base.join(dir) };
        }
        if let Some(cargo) = file.cargo {
            cfg.cargo = cargo;
        }
        Ok(cfg)
    }

    /// Apply `--crate-dir` from the command line.
    #[must_use]
    pub fn with_crate_dir(mut self, dir: Option<PathBuf>) -> Self {
        if let Some(dir) = dir {
            self.crate_dir = dir;
        }
        self
    }
}
