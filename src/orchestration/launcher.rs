//! Task launch sequencing.
//!
//! The launcher drives one task through materialize, provision, sync,
//! and remote execute, in that order, each stage gated on the success
//! of the previous one. The first failure aborts the remaining stages.
//! There is no rollback: a cluster provisioned before a later stage
//! failed stays up, and nothing the launch wrote is removed.

use crate::config::Config;
use crate::core::graph::TaskGraph;
use crate::orchestration::execute::RemoteExecutor;
use crate::orchestration::materialize::ClusterConfigMaterializer;
use crate::orchestration::provision::ProvisionClient;
use crate::orchestration::sync::SyncClient;
use crate::provider::ProviderRegistry;
use crate::runner::CommandRunner;
use crate::{sklog, Error, Result};

/// Stages of one launch, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum LaunchStage {
    Init,
    ConfigMaterialized,
    Provisioned,
    Synced,
    Executed,
}

impl std::fmt::Display for LaunchStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            LaunchStage::Init => "init",
            LaunchStage::ConfigMaterialized => "config-materialized",
            LaunchStage::Provisioned => "provisioned",
            LaunchStage::Synced => "synced",
            LaunchStage::Executed => "executed",
        };
        write!(f, "{}", s)
    }
}

/// Sequences the launch pipeline for a single task.
pub struct Launcher<'a> {
    config: &'a Config,
    registry: &'a ProviderRegistry,
    runner: &'a dyn CommandRunner,
}

impl<'a> Launcher<'a> {
    pub fn new(
        config: &'a Config,
        registry: &'a ProviderRegistry,
        runner: &'a dyn CommandRunner,
    ) -> Self {
        Self {
            config,
            registry,
            runner,
        }
    }

    /// Launch the graph's single task onto provisioned resources.
    ///
    /// Preconditions are checked before any side effect: the graph must
    /// hold exactly one task, and the task's attributes must be valid.
    /// After that the stages run in strict order; any failure aborts the
    /// launch and leaves earlier side effects (including a provisioned
    /// cluster) in place.
    pub fn launch(&self, graph: &TaskGraph) -> Result<()> {
        let task = graph.single_task()?;
        task.validate()?;

        let mut stage = LaunchStage::Init;
        sklog!(
            "launch task={} name={} cloud={} stage={}",
            task.id.short(),
            task.name,
            task.best_resources.cloud,
            stage
        );

        let remote_workdir = self.config.remote_workdir.as_str();
        let output_dir = self.config.output_dir();

        let materializer =
            ClusterConfigMaterializer::new(self.registry, remote_workdir, output_dir.as_deref());
        let cluster_config = materializer.materialize(task)?;
        stage = LaunchStage::ConfigMaterialized;
        sklog!("launch task={} stage={}", task.id.short(), stage);

        let provisioner = self.config.provisioner.as_str();

        ProvisionClient::new(self.runner, provisioner).provision(&cluster_config)?;
        stage = LaunchStage::Provisioned;
        sklog!("launch task={} stage={}", task.id.short(), stage);

        // Files may have changed locally while provisioning ran, so the
        // file mount declared in the cluster config can be stale.
        SyncClient::new(self.runner, provisioner).sync(
            &cluster_config,
            &task.working_dir,
            remote_workdir,
        )?;
        stage = LaunchStage::Synced;
        sklog!("launch task={} stage={}", task.id.short(), stage);

        RemoteExecutor::new(self.runner, provisioner).execute(
            &cluster_config,
            remote_workdir,
            task.effective_setup_command(),
            &task.command,
        )?;
        stage = LaunchStage::Executed;
        sklog!("launch task={} stage={}", task.id.short(), stage);

        Ok(())
    }

    /// Tear down the cluster a graph's task was launched on.
    ///
    /// The graph shape precondition applies here just as it does for
    /// launch; past that, teardown is out of scope and always fails.
    pub fn teardown(&self, graph: &TaskGraph) -> Result<()> {
        graph.single_task()?;
        Err(Error::NotImplemented("cluster teardown"))
    }
}
