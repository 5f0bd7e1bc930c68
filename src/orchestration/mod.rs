//! Launch pipeline for skylift.
//!
//! This module provides the components that take a planned task onto
//! real machines: the cluster config materializer, the provisioning,
//! sync, and remote execution clients over the external autoscaler, and
//! the launcher that sequences them.

mod execute;
mod launcher;
mod materialize;
mod provision;
mod sync;

pub use execute::{CommandChain, RemoteExecutor};
pub use launcher::{LaunchStage, Launcher};
pub use materialize::ClusterConfigMaterializer;
pub use provision::ProvisionClient;
pub use sync::SyncClient;
