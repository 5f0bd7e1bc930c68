//! Remote execution client.
//!
//! Runs the task's setup and run commands on the cluster as one
//! short-circuiting chain: setup must succeed before the run command
//! starts, and a failed setup means the run command never executes.

use std::path::Path;

use crate::runner::CommandRunner;
use crate::{sklog_debug, sklog_warn, Error, Result};

/// A sequence of shell steps joined with `&&`.
///
/// Each step is pushed explicitly rather than spliced into a format
/// string, so the short-circuit ordering is visible in the builder and
/// not an accident of string concatenation.
#[derive(Debug, Default)]
pub struct CommandChain {
    steps: Vec<String>,
}

impl CommandChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a `cd` into the given directory.
    pub fn change_dir(mut self, dir: &str) -> Self {
        self.steps.push(format!("cd {}", dir));
        self
    }

    /// Append an arbitrary shell command.
    pub fn then(mut self, command: &str) -> Self {
        self.steps.push(command.to_string());
        self
    }

    /// Render the chain as a single `&&`-joined command string.
    pub fn render(&self) -> String {
        self.steps.join(" && ")
    }
}

pub struct RemoteExecutor<'a> {
    runner: &'a dyn CommandRunner,
    provisioner: &'a str,
}

impl<'a> RemoteExecutor<'a> {
    pub fn new(runner: &'a dyn CommandRunner, provisioner: &'a str) -> Self {
        Self {
            runner,
            provisioner,
        }
    }

    /// Run `setup_command` then `command` in `remote_dir` on the cluster.
    ///
    /// The second `cd` guards against a setup command that changed the
    /// working directory.
    pub fn execute(
        &self,
        cluster_config: &Path,
        remote_dir: &str,
        setup_command: &str,
        command: &str,
    ) -> Result<()> {
        let chain = CommandChain::new()
            .change_dir(remote_dir)
            .then(setup_command)
            .change_dir(remote_dir)
            .then(command);
        let command = format!(
            "{} exec {} \"{}\"",
            self.provisioner,
            cluster_config.display(),
            chain.render()
        );
        let code = self.runner.run(&command)?;
        if code != 0 {
            sklog_warn!("remote execution exited with code {}: {}", code, command);
            return Err(Error::Execution { command, code });
        }
        sklog_debug!("remote execution finished in {}", remote_dir);
        Ok(())
    }
}
