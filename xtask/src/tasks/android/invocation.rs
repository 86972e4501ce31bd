use std::collections::BTreeMap;
use std::path::PathBuf;
use std::process::Command;

use super::target::{AndroidTarget, Profile, TargetSpec, BROKEN_CLANG_ATOMICS};
use crate::config::BuildConfig;

/// Variables set on one child process only.
pub type EnvOverrides = BTreeMap<&'static str, String>;

pub fn env_overrides(target: AndroidTarget) -> EnvOverrides {
    let mut env = EnvOverrides::new();
    env.insert("RUST_BACKTRACE", "full".to_string());
    if target.needs_atomics_workaround() {
        env.insert("CFLAGS", BROKEN_CLANG_ATOMICS.to_string());
        env.insert("CXXFLAGS", BROKEN_CLANG_ATOMICS.to_string());
    }
    env
}

/// One fully resolved `cargo ndk` call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Invocation {
    pub triple: &'static str,
    pub program: String,
    pub args: Vec<String>,
    pub env: EnvOverrides,
    pub current_dir: PathBuf,
}

impl Invocation {
    pub fn for_target(spec: &TargetSpec, cfg: &BuildConfig) -> Self {
        let mut args: Vec<String> = vec![
            "ndk".into(),
            "--platform".into(),
            spec.platform.to_string(),
            "--target".into(),
            spec.triple().into(),
            "build".into(),
        ];
        if spec.profile == Profile::Release {
            args.push("--release".into());
        }
        if !spec.features.is_empty() {
            args.push("--features".into());
            args.push(spec.features.joined());
        }
        args.push("--verbose".into());

        Self {
            triple: spec.triple(),
            program: cfg.cargo.clone(),
            args,
            env: env_overrides(spec.target),
            current_dir: cfg.crate_dir.clone(),
        }
    }

    pub fn command(&self) -> Command {
        let mut cmd = Command::new(&self.program);
        cmd.args(&self.args).current_dir(&self.current_dir);
        crate::util::tools_env::apply_to_command(&mut cmd, &self.env);
        cmd
    }

    /// Shell form, e.g. `RUST_BACKTRACE=full cargo ndk ...`.
    pub fn shell_line(&self) -> String {
        let env = self
            .env
            .iter()
            .map(|(k, v)| format!("{k}={}", shell_quote(v)));
        let argv = std::iter::once(&self.program)
            .chain(&self.args)
            .map(|a| shell_quote(a));
        env.chain(argv).collect::<Vec<_>>().join(" ")
    }
}

fn shell_quote(s: &str) -> String {
    let plain = !s.is_empty()
        && s
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "-_.,/=:+@".contains(c));
    if plain {
        s.to_string()
    } else {
        format!("'{}'", s.replace('\'', r"'\''"))
    }
}
