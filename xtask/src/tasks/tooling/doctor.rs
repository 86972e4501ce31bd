use anyhow::{bail, Context, Result};
use std::process::Command;

use crate::tasks::android::target::AndroidTarget;

const NDK_VARS: &[&str] = &["ANDROID_NDK_HOME", "ANDROID_NDK_ROOT"];

pub fn run() -> Result<()> {
    let mut ok = true;

    for tool in ["cargo", "cargo-ndk"] {
        if which::which(tool).is_err() {
            log::error!("missing `{tool}` in PATH");
            ok = false;
        } else {
            log::info!("found {tool}");
        }
    }

    match NDK_VARS.iter().find(|v| std::env::var_os(v).is_some()) {
        Some(v) => log::info!("{v} is set"),
        None => {
            log::error!("none of {} is set", NDK_VARS.join(", "));
            ok = false;
        }
    }

    match installed_targets() {
        Ok(installed) => {
            for missing in missing_targets(&installed) {
                log::error!("rust target not installed: {missing} (rustup target add {missing})");
                ok = false;
            }
        }
        Err(e) => {
            log::error!("{e:#}");
            ok = false;
        }
    }

    if !ok {
        bail!("doctor checks failed");
    }
    log::info!("All checks passed");
    Ok(())
}

fn installed_targets() -> Result<String> {
    let out = Command::new("rustup")
        .args(["target", "list", "--installed"])
        .output()
        .context("Running rustup")?;
    if !out.status.success() {
        bail!("rustup failed with status {}", out.status);
    }
    Ok(String::from_utf8_lossy(&out.stdout).to_string())
}

fn missing_targets(installed: &str) -> Vec<&'static str> {
    AndroidTarget::ALL
        .iter()
        .map(|t| t.triple())
        .filter(|triple| !installed.lines().any(|l| l.trim() == *triple))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_targets() {
        let installed = "aarch64-linux-android\nx86_64-unknown-linux-gnu\n";
        assert_eq!(
            missing_targets(installed),
            ["armv7-linux-androideabi", "i686-linux-android"]
        );
    }

    #[test]
    fn test_nothing_missing() {
        let installed = "i686-linux-android\narmv7-linux-androideabi\naarch64-linux-android\n";
        assert!(missing_targets(installed).is_empty());
    }
}
