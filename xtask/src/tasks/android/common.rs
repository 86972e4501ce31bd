use anyhow::{Context, Result};
use std::path::PathBuf;

use super::runner::{DryRunner, Runner, SystemRunner};
use crate::config::BuildConfig;

/// Flags shared by `android build` and `android build-all`.
#[derive(Clone, Debug, Default)]
pub(crate) struct BuildOptions {
    pub(crate) dry_run: bool,
    pub(crate) crate_dir: Option<PathBuf>,
    pub(crate) config: Option<PathBuf>,
}

pub(crate) fn load_config(opts: &BuildOptions) -> Result<BuildConfig> {
    let root = crate::util::repo::repo_root()?;
    let cfg = BuildConfig::load(&root, opts.config.as_deref())
        .context("Loading build configuration")?
        .with_crate_dir(opts.crate_dir.clone());

    log::info!("Crate dir: {}", cfg.crate_dir.display());
    Ok(cfg)
}

pub(crate) fn runner_for(opts: &BuildOptions) -> Box<dyn Runner> {
    if opts.dry_run {
        Box::new(DryRunner)
    } else {
        Box::new(SystemRunner)
    }
}
