use anyhow::Result;

use crate::tasks::android::common::BuildOptions;

pub fn run(cli: crate::cli::Cli) -> Result<()> {
    match cli.cmd {
        crate::cli::Cmd::Android { cmd } => match cmd {
            crate::cli::AndroidCmd::Build { target, opts } => {
                crate::tasks::android::build::run(target, &build_options(opts))
            }
            crate::cli::AndroidCmd::BuildAll { only, opts } => {
                crate::tasks::android::build_all::run(&only, &build_options(opts))
            }
            crate::cli::AndroidCmd::Targets => crate::tasks::android::targets::run(),
        },
        crate::cli::Cmd::Env { target, shell } => crate::tasks::tooling::env::run(target, shell),
        crate::cli::Cmd::Doctor => crate::tasks::tooling::doctor::run(),
    }
}

fn build_options(args: crate::cli::BuildArgs) -> BuildOptions {
    BuildOptions {
        dry_run: args.dry_run,
        crate_dir: args.crate_dir,
        config: args.config,
    }
}

/// Exit code for a failed run: the build tool's own code when it has one.
pub fn exit_code(err: &anyhow::Error) -> i32 {
    err.chain()
        .find_map(|e| e.downcast_ref::<crate::error::BuildError>())
        .and_then(crate::error::BuildError::exit_code)
        .unwrap_or(1)
}
