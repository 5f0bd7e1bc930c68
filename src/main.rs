use std::fs;
use std::path::PathBuf;

use clap::{Parser, Subcommand};

use skylift::config::Config;
use skylift::core::{Task, TaskGraph};
use skylift::orchestration::Launcher;
use skylift::provider::ProviderRegistry;
use skylift::runner::ShellRunner;
use skylift::{sklog, sklog_error, Result};

/// Skylift - launch planned tasks onto cloud-provisioned clusters
#[derive(Parser, Debug)]
#[command(name = "skylift")]
#[command(version, about, long_about = None)]
#[command(after_help = "ENVIRONMENT:\n    SKYLIFT_DEBUG=1     Enable debug logging (alternative to --debug)")]
pub struct Cli {
    /// Enable debug logging (writes to ~/.skylift/skylift.log)
    #[arg(short = 'd', long)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Launch the task described by a toml task file
    Launch {
        /// Path to the task file
        task_file: PathBuf,

        /// Tear down the task's cluster instead of launching (unimplemented)
        #[arg(long)]
        teardown: bool,
    },

    /// List registered cloud providers and their config templates
    Providers,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    skylift::log::init_with_debug(cli.debug);

    let config = Config::load()?;
    let registry = ProviderRegistry::with_defaults(&config.templates_dir());

    match cli.command {
        Command::Launch {
            task_file,
            teardown,
        } => run_launch(&config, &registry, &task_file, teardown),
        Command::Providers => run_providers(&registry),
    }
}

fn run_launch(
    config: &Config,
    registry: &ProviderRegistry,
    task_file: &PathBuf,
    teardown: bool,
) -> Result<()> {
    let task = Task::from_toml(&fs::read_to_string(task_file)?)?;
    sklog!("loaded task '{}' from {}", task.name, task_file.display());
    let graph = TaskGraph::single(task);

    ShellRunner::ensure_available(&config.provisioner)?;
    let runner = ShellRunner;
    let launcher = Launcher::new(config, registry, &runner);

    let result = if teardown {
        launcher.teardown(&graph)
    } else {
        launcher.launch(&graph)
    };
    match result {
        Ok(()) => {
            println!("Launch complete");
            Ok(())
        }
        Err(err) => {
            sklog_error!("launch aborted: {}", err);
            Err(err)
        }
    }
}

fn run_providers(registry: &ProviderRegistry) -> Result<()> {
    for cloud in registry.clouds() {
        let template = registry.template_for(cloud)?;
        println!("{:<8} {}", cloud, template.display());
    }
    Ok(())
}
