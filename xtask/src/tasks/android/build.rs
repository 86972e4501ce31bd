use anyhow::Result;

use super::common::{load_config, runner_for, BuildOptions};
use super::invocation::Invocation;
use super::runner::{execute, Runner};
use super::target::AndroidTarget;
use crate::config::BuildConfig;
use crate::error::BuildError;

pub(crate) fn run(target: AndroidTarget, opts: &BuildOptions) -> Result<()> {
    let cfg = load_config(opts)?;
    let mut runner = runner_for(opts);
    build_one(runner.as_mut(), target, &cfg)?;
    Ok(())
}

/// Exactly one `cargo ndk` call for `target`.
pub(crate) fn build_one(
    runner: &mut dyn Runner,
    target: AndroidTarget,
    cfg: &BuildConfig,
) -> Result<(), BuildError> {
    let spec = target.spec();
    log::info!(
        "Building {} (api {}, {}, features: {})",
        spec.triple(),
        spec.platform,
        spec.profile,
        spec.features.joined()
    );

    execute(runner, &Invocation::for_target(&spec, cfg))?;

    log::info!("Built {}", spec.triple());
    Ok(())
}
