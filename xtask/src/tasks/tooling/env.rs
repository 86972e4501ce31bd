use anyhow::Result;

use crate::tasks::android::invocation::env_overrides;
use crate::tasks::android::target::AndroidTarget;

/// Print the variables a build for `target` runs with, so a manual
/// `cargo ndk` session can reproduce it:
///
///   eval "$(cargo xtask env x86)"
pub fn run(target: AndroidTarget, shell: crate::cli::Shell) -> Result<()> {
    print!("{}", exports(target, shell));
    Ok(())
}

fn exports(target: AndroidTarget, shell: crate::cli::Shell) -> String {
    let mut out = String::new();
    for (key, value) in env_overrides(target) {
        match shell {
            crate::cli::Shell::Bash | crate::cli::Shell::Sh => {
                out.push_str(&format!("export {key}=\"{value}\"\n"));
            }
            crate::cli::Shell::Fish => {
                out.push_str(&format!("set -gx {key} \"{value}\"\n"));
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::Shell;

    #[test]
    fn test_arm64_exports_backtrace_only() {
        assert_eq!(
            exports(AndroidTarget::Arm64, Shell::Bash),
            "export RUST_BACKTRACE=\"full\"\n"
        );
    }

    #[test]
    fn test_x86_exports_workaround() {
        let out = exports(AndroidTarget::X86, Shell::Sh);
        assert!(out.contains("export CFLAGS=\"-DBROKEN_CLANG_ATOMICS\"\n"));
        assert!(out.contains("export CXXFLAGS=\"-DBROKEN_CLANG_ATOMICS\"\n"));
        assert!(out.contains("export RUST_BACKTRACE=\"full\"\n"));
    }

    #[test]
    fn test_fish_syntax() {
        assert_eq!(
            exports(AndroidTarget::Armv7, Shell::Fish),
            "set -gx RUST_BACKTRACE \"full\"\n"
        );
    }
}
