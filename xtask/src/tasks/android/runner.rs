use super::invocation::Invocation;
use crate::error::BuildError;

/// How a child build ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Exit {
    pub code: Option<i32>,
}

impl Exit {
    pub fn success(self) -> bool {
        self.code == Some(0)
    }
}

/// Executes invocations. Tests swap in a recorder.
pub trait Runner {
    fn run(&mut self, invocation: &Invocation) -> std::io::Result<Exit>;
}

/// Spawns the real tool with inherited stdio and blocks until it exits.
pub struct SystemRunner;

impl Runner for SystemRunner {
    fn run(&mut self, invocation: &Invocation) -> std::io::Result<Exit> {
        let status = invocation.command().status()?;
        Ok(Exit {
            code: status.code(),
        })
    }
}

/// Prints the shell form instead of running anything.
pub struct DryRunner;

impl Runner for DryRunner {
    fn run(&mut self, invocation: &Invocation) -> std::io::Result<Exit> {
        println!(
            "(cd {} && {})",
            invocation.current_dir.display(),
            invocation.shell_line()
        );
        Ok(Exit { code: Some(0) })
    }
}

/// Runs one invocation. Any non-zero exit is an error; nothing is retried.
pub fn execute(runner: &mut dyn Runner, invocation: &Invocation) -> Result<(), BuildError> {
    log::debug!("{}", invocation.shell_line());
    let exit = runner
        .run(invocation)
        .map_err(|source| BuildError::Spawn {
            program: invocation.program.clone(),
            source,
        })?;

    if !exit.success() {
        return Err(BuildError::ToolFailed {
            triple: invocation.triple.to_string(),
            code: exit.code,
        });
    }
    Ok(())
}
