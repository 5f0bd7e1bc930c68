//! Test fixtures for integration tests.
//!
//! Provides a recording [`CommandRunner`] double and a temporary
//! workspace with provider templates and a local working directory.

use std::cell::RefCell;
use std::path::PathBuf;

use tempfile::TempDir;

use skylift::config::Config;
use skylift::core::{Resources, Task};
use skylift::provider::ProviderRegistry;
use skylift::runner::CommandRunner;
use skylift::Result;

/// Command runner double that records every invocation.
///
/// Optionally fails (with a chosen exit code) on the first command
/// containing a given substring, so tests can trip a specific stage.
pub struct RecordingRunner {
    commands: RefCell<Vec<String>>,
    fail_matching: Option<(String, i32)>,
}

impl RecordingRunner {
    /// Runner where every command succeeds.
    pub fn ok() -> Self {
        Self {
            commands: RefCell::new(Vec::new()),
            fail_matching: None,
        }
    }

    /// Runner that fails commands containing `substring` with `code`.
    pub fn failing_on(substring: &str, code: i32) -> Self {
        Self {
            commands: RefCell::new(Vec::new()),
            fail_matching: Some((substring.to_string(), code)),
        }
    }

    /// Commands run so far, in invocation order.
    pub fn commands(&self) -> Vec<String> {
        self.commands.borrow().clone()
    }

    pub fn call_count(&self) -> usize {
        self.commands.borrow().len()
    }
}

impl CommandRunner for RecordingRunner {
    fn run(&self, command: &str) -> Result<i32> {
        self.commands.borrow_mut().push(command.to_string());
        if let Some((substring, code)) = &self.fail_matching {
            if command.contains(substring.as_str()) {
                return Ok(*code);
            }
        }
        Ok(0)
    }
}

/// A temporary workspace with provider templates, a local working dir,
/// and a matching config/registry pair.
pub struct TestWorkspace {
    pub temp_dir: TempDir,
    pub templates_dir: PathBuf,
    pub workdir: PathBuf,
    pub config: Config,
    pub registry: ProviderRegistry,
}

impl TestWorkspace {
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp directory");
        let templates_dir = temp_dir.path().join("templates");
        std::fs::create_dir_all(&templates_dir).expect("Failed to create templates dir");
        std::fs::write(
            templates_dir.join("aws.yml.j2"),
            "cluster_name: skylift-aws\n\
             instance_type: {{ instance_type }}\n\
             file_mounts:\n  {{ remote_working_dir }}: {{ working_dir }}\n",
        )
        .expect("Failed to write aws template");

        let workdir = temp_dir.path().join("app");
        std::fs::create_dir_all(&workdir).expect("Failed to create working dir");
        std::fs::write(workdir.join("train.py"), "print('hi')\n")
            .expect("Failed to write workdir file");

        let config = Config {
            provisioner: "ray".to_string(),
            templates_dir: Some(templates_dir.display().to_string()),
            output_dir: None,
            remote_workdir: "/tmp/workdir".to_string(),
        };
        let registry = ProviderRegistry::with_defaults(&templates_dir);

        Self {
            temp_dir,
            templates_dir,
            workdir,
            config,
            registry,
        }
    }

    /// An AWS task over this workspace's working directory.
    pub fn aws_task(&self, command: &str) -> Task {
        Task::new(
            "test-task",
            command,
            self.workdir.clone(),
            Resources::new("aws", "m5.large"),
        )
    }

    /// Path the materializer writes the AWS cluster config to.
    pub fn rendered_config(&self) -> PathBuf {
        self.templates_dir.join("aws.yml")
    }
}
