//! Task data model for the launch pipeline.
//!
//! A task is the unit of work handed to the launcher: one run command,
//! an optional setup command, a local working directory to sync, and the
//! resource selection the upstream optimizer already made for it.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use uuid::Uuid;

use crate::{Error, Result};

/// Unique identifier for a task.
///
/// Uses UUID v4 for generation and provides a short form display
/// for human-readable output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(pub Uuid);

impl TaskId {
    /// Create a new unique task identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Return first 8 characters of the UUID for display.
    pub fn short(&self) -> String {
        self.0.to_string()[..8].to_string()
    }
}

impl Default for TaskId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for TaskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for TaskId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

/// Cloud provider identifier, e.g. `aws` or `gcp`.
///
/// Normalized to lowercase so that task files may spell it however the
/// operator likes (`AWS`, `aws`) and still hit the registry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String")]
pub struct CloudId(String);

impl From<String> for CloudId {
    fn from(s: String) -> Self {
        Self::new(&s)
    }
}

impl CloudId {
    pub fn new(id: &str) -> Self {
        Self(id.to_lowercase())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CloudId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for CloudId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Resource selection resolved by the upstream optimizer.
///
/// The instance type is an opaque provider-specific descriptor; it is
/// passed through to the cluster config template untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resources {
    /// Target cloud provider.
    pub cloud: CloudId,
    /// Instance type descriptor, e.g. `m5.large`.
    pub instance_type: String,
}

impl Resources {
    pub fn new(cloud: impl Into<CloudId>, instance_type: &str) -> Self {
        Self {
            cloud: cloud.into(),
            instance_type: instance_type.to_string(),
        }
    }
}

/// A single task to launch onto provisioned resources.
///
/// Immutable once handed to the launcher; the launcher only reads it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier, used for logging.
    #[serde(default)]
    pub id: TaskId,
    /// Human-readable name for the task.
    pub name: String,
    /// Command executed remotely after setup.
    pub command: String,
    /// Optional setup command run before `command`.
    #[serde(default)]
    pub setup_command: Option<String>,
    /// Local directory synced to the cluster.
    pub working_dir: PathBuf,
    /// Resource selection made by the upstream optimizer.
    pub best_resources: Resources,
}

impl Task {
    pub fn new(name: &str, command: &str, working_dir: PathBuf, best_resources: Resources) -> Self {
        Self {
            id: TaskId::new(),
            name: name.to_string(),
            command: command.to_string(),
            setup_command: None,
            working_dir,
            best_resources,
        }
    }

    pub fn with_setup(mut self, setup_command: &str) -> Self {
        self.setup_command = Some(setup_command.to_string());
        self
    }

    /// Setup command to run remotely, or the shell no-op when none was given.
    pub fn effective_setup_command(&self) -> &str {
        self.setup_command.as_deref().unwrap_or(":")
    }

    /// Parse a task from its toml file representation.
    pub fn from_toml(text: &str) -> Result<Self> {
        let task: Self = toml::from_str(text)?;
        task.validate()?;
        Ok(task)
    }

    /// Check the attributes the launcher depends on.
    ///
    /// The working directory is checked for existence here rather than at
    /// sync time so a bad task file fails before any cluster is touched.
    pub fn validate(&self) -> Result<()> {
        if self.command.trim().is_empty() {
            return Err(Error::Validation("Task command cannot be empty".to_string()));
        }
        if !self.working_dir.is_dir() {
            return Err(Error::Validation(format!(
                "Working directory does not exist: {}",
                self.working_dir.display()
            )));
        }
        Ok(())
    }
}
