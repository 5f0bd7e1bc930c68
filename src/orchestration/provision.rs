//! Provisioning client.
//!
//! Thin wrapper over the external autoscaler's `up` subcommand. The
//! autoscaler owns the actual create-or-update semantics; this client's
//! contract is config in, success or failure out.

use std::path::Path;

use crate::runner::CommandRunner;
use crate::{sklog_debug, sklog_warn, Error, Result};

pub struct ProvisionClient<'a> {
    runner: &'a dyn CommandRunner,
    provisioner: &'a str,
}

impl<'a> ProvisionClient<'a> {
    pub fn new(runner: &'a dyn CommandRunner, provisioner: &'a str) -> Self {
        Self {
            runner,
            provisioner,
        }
    }

    /// Bring up (or update in place) the cluster described by the config.
    ///
    /// `--no-config-cache` forces the autoscaler to re-read the config
    /// file we just wrote instead of a stale cached copy.
    pub fn provision(&self, cluster_config: &Path) -> Result<()> {
        let command = format!(
            "{} up -y {} --no-config-cache",
            self.provisioner,
            cluster_config.display()
        );
        let code = self.runner.run(&command)?;
        if code != 0 {
            sklog_warn!("provision exited with code {}: {}", code, command);
            return Err(Error::Provisioning { command, code });
        }
        sklog_debug!("provisioned cluster from {}", cluster_config.display());
        Ok(())
    }
}
