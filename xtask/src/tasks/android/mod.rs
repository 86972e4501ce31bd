//! Cross-building the native library for Android with `cargo ndk`.
//!
//! - `target` - the per-ABI table (triple, features, API level)
//! - `invocation` - turns a table row into one `cargo ndk` command
//! - `runner` - executes invocations, fail-fast
//! - `build` / `build_all` - the `xtask android` entry points

pub(crate) mod build;
pub(crate) mod build_all;
pub(crate) mod common;
pub mod invocation;
pub(crate) mod runner;
pub mod target;
pub(crate) mod targets;
