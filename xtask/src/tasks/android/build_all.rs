use anyhow::Result;

use super::build::build_one;
use super::common::{load_config, runner_for, BuildOptions};
use super::runner::Runner;
use super::target::AndroidTarget;
use crate::config::BuildConfig;
use crate::error::BuildError;

pub(crate) fn run(only: &[AndroidTarget], opts: &BuildOptions) -> Result<()> {
    let cfg = load_config(opts)?;
    let targets = selected(only);

    log::info!("Android targets:");
    for t in &targets {
        log::info!("  {}: {}", t.cli_name(), t.triple());
    }

    let mut runner = runner_for(opts);
    build_targets(runner.as_mut(), &targets, &cfg)?;
    Ok(())
}

/// `only` in the order given with repeats dropped, or the full table.
fn selected(only: &[AndroidTarget]) -> Vec<AndroidTarget> {
    if only.is_empty() {
        return AndroidTarget::ALL.to_vec();
    }
    let mut out = Vec::with_capacity(only.len());
    for t in only {
        if !out.contains(t) {
            out.push(*t);
        }
    }
    out
}

/// Sequential, stops at the first failing target.
pub(crate) fn build_targets(
    runner: &mut dyn Runner,
    targets: &[AndroidTarget],
    cfg: &BuildConfig,
) -> Result<(), BuildError> {
    for &t in targets {
        build_one(runner, t, cfg)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tasks::android::runner::testing::RecordingRunner;
    use std::path::Path;

    fn cfg() -> BuildConfig {
        BuildConfig::with_root(Path::new("."))
    }

    fn triples(r: &RecordingRunner) -> Vec<&'static str> {
        r.seen.iter().map(|i| i.triple).collect()
    }

    #[test]
    fn test_builds_all_in_table_order() {
        let mut r = RecordingRunner::default();
        build_targets(&mut r, &selected(&[]), &cfg()).unwrap();
        assert_eq!(
            triples(&r),
            ["aarch64-linux-android", "armv7-linux-androideabi", "i686-linux-android"]
        );
    }

    #[test]
    fn test_stops_after_first_failure() {
        let mut r = RecordingRunner {
            fail_on: Some(("armv7-linux-androideabi", 101)),
            ..Default::default()
        };
        let err = build_targets(&mut r, &selected(&[]), &cfg()).unwrap_err();
        assert_eq!(err.exit_code(), Some(101));
        // x86 never attempted
        assert_eq!(triples(&r), ["aarch64-linux-android", "armv7-linux-androideabi"]);
    }

    #[test]
    fn test_only_keeps_given_order_without_repeats() {
        let picked = selected(&[AndroidTarget::X86, AndroidTarget::Arm64, AndroidTarget::X86]);
        assert_eq!(picked, [AndroidTarget::X86, AndroidTarget::Arm64]);
    }

    #[test]
    fn test_overrides_do_not_leak_between_targets() {
        let mut r = RecordingRunner::default();
        build_targets(
            &mut r,
            &[AndroidTarget::X86, AndroidTarget::Arm64],
            &cfg(),
        )
        .unwrap();
        assert!(r.seen[0].env.contains_key("CFLAGS"));
        assert!(!r.seen[1].env.contains_key("CFLAGS"));
        assert!(std::env::var_os("CFLAGS").map_or(true, |v| v != "-DBROKEN_CLANG_ATOMICS"));
    }
}
