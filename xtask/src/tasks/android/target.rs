//! Android target table.
//!
//! Every supported ABI is described once here. Build, env and listing tasks
//! all read from this table, so adding an architecture is a one-line change.

use std::fmt;

/// Minimum Android API level the native library is linked against.
pub const MIN_PLATFORM: u32 = 21;

/// Feature flags enabled on every target.
const BASE_FEATURES: &[&str] = &["flutter"];

/// Hardware codec support. Not built for 32-bit x86.
const HWCODEC: &str = "hwcodec";

/// Workaround for clang's broken 64-bit atomics on i686.
pub const BROKEN_CLANG_ATOMICS: &str = "-DBROKEN_CLANG_ATOMICS";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Profile {
    #[allow(dead_code)] // every built-in target is release
    Debug,
    Release,
}

impl Profile {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Release => "release",
        }
    }
}

impl fmt::Display for Profile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum AndroidTarget {
    #[value(name = "arm64")]
    Arm64,
    #[value(name = "armv7")]
    Armv7,
    #[value(name = "x86")]
    X86,
}

impl AndroidTarget {
    /// All targets in build order.
    pub const ALL: [AndroidTarget; 3] = [Self::Arm64, Self::Armv7, Self::X86];

    pub fn triple(self) -> &'static str {
        match self {
            Self::Arm64 => "aarch64-linux-android",
            Self::Armv7 => "armv7-linux-androideabi",
            Self::X86 => "i686-linux-android",
        }
    }

    /// Directory name under `jniLibs/`.
    pub fn abi(self) -> &'static str {
        match self {
            Self::Arm64 => "arm64-v8a",
            Self::Armv7 => "armeabi-v7a",
            Self::X86 => "x86",
        }
    }

    pub fn cli_name(self) -> &'static str {
        match self {
            Self::Arm64 => "arm64",
            Self::Armv7 => "armv7",
            Self::X86 => "x86",
        }
    }

    fn has_hwcodec(self) -> bool {
        !matches!(self, Self::X86)
    }

    /// True for the target whose C toolchain needs the atomics workaround.
    pub fn needs_atomics_workaround(self) -> bool {
        matches!(self, Self::X86)
    }

    pub fn spec(self) -> TargetSpec {
        let mut features = Features::default();
        for f in BASE_FEATURES {
            features.insert(f);
        }
        if self.has_hwcodec() {
            features.insert(HWCODEC);
        }

        TargetSpec {
            target: self,
            platform: MIN_PLATFORM,
            features,
            profile: Profile::Release,
        }
    }
}

/// Ordered, duplicate-free list of cargo features.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Features(Vec<String>);

impl Features {
    pub fn insert(&mut self, feature: &str) {
        if !self.contains(feature) {
            self.0.push(feature.to_string());
        }
    }

    pub fn contains(&self, feature: &str) -> bool {
        self.0.iter().any(|f| f == feature)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Comma-separated form accepted by `cargo build --features`.
    pub fn joined(&self) -> String {
        self.0.join(",")
    }
}

/// Everything needed to derive one cross-build invocation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TargetSpec {
    pub target: AndroidTarget,
    pub platform: u32,
    pub features: Features,
    pub profile: Profile,
}

impl TargetSpec {
    pub fn triple(&self) -> &'static str {
        self.target.triple()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_triples() {
        assert_eq!(AndroidTarget::Arm64.triple(), "aarch64-linux-android");
        assert_eq!(AndroidTarget::Armv7.triple(), "armv7-linux-androideabi");
        assert_eq!(AndroidTarget::X86.triple(), "i686-linux-android");
    }

    #[test]
    fn test_abi_dirs() {
        assert_eq!(AndroidTarget::Arm64.abi(), "arm64-v8a");
        assert_eq!(AndroidTarget::Armv7.abi(), "armeabi-v7a");
        assert_eq!(AndroidTarget::X86.abi(), "x86");
    }

    #[test]
    fn test_all_specs_are_release_on_platform_21() {
        for t in AndroidTarget::ALL {
            let spec = t.spec();
            assert_eq!(spec.platform, 21);
            assert_eq!(spec.profile, Profile::Release);
            assert!(spec.features.contains("flutter"));
        }
    }

    #[test]
    fn test_x86_omits_hwcodec() {
        assert_eq!(AndroidTarget::Arm64.spec().features.joined(), "flutter,hwcodec");
        assert_eq!(AndroidTarget::Armv7.spec().features.joined(), "flutter,hwcodec");
        assert_eq!(AndroidTarget::X86.spec().features.joined(), "flutter");
    }

    #[test]
    fn test_only_x86_needs_workaround() {
        let flagged: Vec<_> = AndroidTarget::ALL
            .into_iter()
            .filter(|t| t.needs_atomics_workaround())
            .collect();
        assert_eq!(flagged, vec![AndroidTarget::X86]);
    }

    #[test]
    fn test_features_dedup_keeps_order() {
        let mut f = Features::default();
        f.insert("b");
        f.insert("a");
        f.insert("b");
        assert_eq!(f.joined(), "b,a");
        assert!(f.contains("a"));
        assert!(!f.contains("c"));
    }
}
