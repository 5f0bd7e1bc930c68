//! Cluster config materialization.
//!
//! Resolves a task's cloud to its registered template and renders it
//! into the concrete cluster config file every later stage consumes.

use std::fs;
use std::path::{Path, PathBuf};

use crate::core::task::Task;
use crate::provider::ProviderRegistry;
use crate::template::{self, TemplateVars, TEMPLATE_SUFFIX};
use crate::{sklog_debug, Error, Result};

/// Renders a task's cluster config from its provider template.
pub struct ClusterConfigMaterializer<'a> {
    registry: &'a ProviderRegistry,
    remote_workdir: &'a str,
    output_dir: Option<&'a Path>,
}

impl<'a> ClusterConfigMaterializer<'a> {
    pub fn new(
        registry: &'a ProviderRegistry,
        remote_workdir: &'a str,
        output_dir: Option<&'a Path>,
    ) -> Self {
        Self {
            registry,
            remote_workdir,
            output_dir,
        }
    }

    /// Write the cluster config for `task` and return its path.
    ///
    /// With an output dir configured the config is written there under
    /// the template's `.j2`-stripped name; otherwise it lands next to
    /// the template. Idempotent: re-materializing the same task
    /// overwrites the prior output with identical content. The remote
    /// working dir is passed to the template so its file mount lands
    /// where the sync and exec stages expect it.
    pub fn materialize(&self, task: &Task) -> Result<PathBuf> {
        let template_path = self.registry.template_for(&task.best_resources.cloud)?;
        sklog_debug!(
            "materialize task={} cloud={} template={}",
            task.id.short(),
            task.best_resources.cloud,
            template_path.display()
        );

        let mut vars = TemplateVars::new();
        vars.insert(
            "instance_type".to_string(),
            task.best_resources.instance_type.clone(),
        );
        vars.insert(
            "working_dir".to_string(),
            task.working_dir.display().to_string(),
        );
        vars.insert(
            "remote_working_dir".to_string(),
            self.remote_workdir.to_string(),
        );

        let output_path = match self.output_dir {
            Some(dir) => Some(output_path_in(dir, template_path)?),
            None => None,
        };
        template::render_to_file(template_path, &vars, output_path.as_deref())
    }
}

/// Output path for a template inside `dir`, named by stripping `.j2`.
fn output_path_in(dir: &Path, template_path: &Path) -> Result<PathBuf> {
    let name = template_path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let stripped = name.strip_suffix(TEMPLATE_SUFFIX).ok_or_else(|| {
        Error::Validation(format!(
            "Template path {} does not end in {}; cannot derive output name",
            template_path.display(),
            TEMPLATE_SUFFIX
        ))
    })?;
    fs::create_dir_all(dir)?;
    Ok(dir.join(stripped))
}
