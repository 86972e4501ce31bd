use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use crate::tasks::android::target::AndroidTarget;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Shell {
    Bash,
    Sh,
    Fish,
}

#[derive(Parser)]
#[command(name = "xtask")]
#[command(about = "Cross-builds the native library for Android via cargo-ndk")]
pub struct Cli {
    /// Debug-level logging (same as RUST_LOG=debug).
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub cmd: Cmd,
}

#[derive(Subcommand)]
pub enum Cmd {
    /// Android cross-builds.
    Android {
        #[command(subcommand)]
        cmd: AndroidCmd,
    },

    /// Print the environment a target's build runs with.
    ///
    /// Usage:
    ///   eval "$(cargo xtask env x86)"
    Env {
        #[arg(value_enum)]
        target: AndroidTarget,

        #[arg(value_enum, default_value_t = Shell::Bash)]
        shell: Shell,
    },

    /// Check that cargo-ndk, the NDK and the rust targets are available.
    Doctor,
}

#[derive(Subcommand)]
pub enum AndroidCmd {
    /// Build the library for one target.
    Build {
        #[arg(value_enum)]
        target: AndroidTarget,

        #[command(flatten)]
        opts: BuildArgs,
    },

    /// Build every target in order, stopping at the first failure.
    #[command(name = "build-all")]
    BuildAll {
        #[arg(
            long = "only",
            value_enum,
            help = "Restrict the run to these targets (repeatable). Order is kept."
        )]
        only: Vec<AndroidTarget>,

        #[command(flatten)]
        opts: BuildArgs,
    },

    /// List the supported targets.
    Targets,
}

#[derive(Args, Clone, Debug, Default)]
pub struct BuildArgs {
    #[arg(long = "dry-run", help = "Print the cargo-ndk command lines instead of running them.")]
    pub dry_run: bool,

    #[arg(
        long = "crate-dir",
        help = "Directory to run cargo-ndk in. Overrides crate_dir from android-build.toml."
    )]
    pub crate_dir: Option<PathBuf>,

    #[arg(long = "config", help = "Config file to use instead of <repo>/android-build.toml.")]
    pub config: Option<PathBuf>,
}
