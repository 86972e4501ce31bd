use std::process::Command;

use crate::tasks::android::invocation::EnvOverrides;

/// Sets `overrides` on `cmd` only. The xtask process environment is left
/// untouched so one target's flags never reach the next build.
pub fn apply_to_command(cmd: &mut Command, overrides: &EnvOverrides) {
    for (key, value) in overrides {
        cmd.env(key, value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides_stay_on_child() {
        let key = "XTASK_TOOLS_ENV_PROBE";
        let mut overrides = EnvOverrides::new();
        overrides.insert(key, "1".to_string());

        let mut cmd = Command::new("true");
        apply_to_command(&mut cmd, &overrides);

        assert!(cmd.get_envs().any(|(k, v)| k == key && v.is_some()));
        assert!(std::env::var_os(key).is_none());
    }
}
