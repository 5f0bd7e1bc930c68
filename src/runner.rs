//! Shell command execution seam.
//!
//! Every external call in the launch pipeline (provision, sync, remote
//! exec) is a single shell-interpreted command string. The
//! [`CommandRunner`] trait is the seam that lets tests substitute a
//! recording double for the real shell.

use std::process::Command;

use crate::{sklog, Error, Result};

/// Runs one shell-interpreted command string and reports its exit code.
///
/// Implementations only fail when the command cannot be started at all;
/// a command that ran and exited non-zero is reported through the
/// returned code so the caller can attach stage-specific context.
pub trait CommandRunner {
    fn run(&self, command: &str) -> Result<i32>;
}

/// Real runner executing commands through `sh -c`.
pub struct ShellRunner;

impl ShellRunner {
    /// Check that the configured provisioner binary is on PATH.
    pub fn ensure_available(binary: &str) -> Result<()> {
        which::which(binary)
            .map(|_| ())
            .map_err(|_| Error::ProvisionerNotAvailable(binary.to_string()))
    }
}

impl CommandRunner for ShellRunner {
    fn run(&self, command: &str) -> Result<i32> {
        sklog!("$ {}", command);
        let status = Command::new("sh").arg("-c").arg(command).status()?;
        // Killed by signal: no exit code, treat as generic failure
        Ok(status.code().unwrap_or(-1))
    }
}
