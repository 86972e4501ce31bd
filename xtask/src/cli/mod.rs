mod types;

pub use types::{AndroidCmd, BuildArgs, Cli, Cmd, Shell};
