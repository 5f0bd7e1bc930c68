//! Template rendering for cluster configs.
//!
//! Provider templates are ordinary Jinja2 files (`*.yml.j2`) rendered
//! with minijinja. Rendering is strict: a variable the template needs
//! but the caller did not supply is an error, not an empty string.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use minijinja::{Environment, UndefinedBehavior};

use crate::{sklog, Error, Result};

/// Suffix distinguishing a template from its rendered output.
pub const TEMPLATE_SUFFIX: &str = ".j2";

/// Variables handed to a template render.
///
/// BTreeMap keeps iteration deterministic, so identical inputs always
/// produce byte-identical rendered output.
pub type TemplateVars = BTreeMap<String, String>;

/// Render a template source string with the given variables.
pub fn render(source: &str, vars: &TemplateVars) -> Result<String> {
    let mut env = Environment::new();
    env.set_undefined_behavior(UndefinedBehavior::Strict);
    let template = env
        .template_from_str(source)
        .map_err(|e| Error::TemplateRender(e.to_string()))?;
    template
        .render(vars)
        .map_err(|e| Error::TemplateRender(e.to_string()))
}

/// Render a template file and write the result next to it.
///
/// When `output_path` is `None` the destination is derived by stripping
/// the trailing `.j2`, so `config/aws.yml.j2` renders to
/// `config/aws.yml`. Any existing file at the destination is
/// overwritten.
pub fn render_to_file(
    template_path: &Path,
    vars: &TemplateVars,
    output_path: Option<&Path>,
) -> Result<PathBuf> {
    if !template_path.is_file() {
        return Err(Error::TemplateNotFound {
            path: template_path.to_path_buf(),
        });
    }

    let output = match output_path {
        Some(path) => path.to_path_buf(),
        None => default_output_path(template_path)?,
    };

    let source = fs::read_to_string(template_path)?;
    let content = render(&source, vars)?;
    fs::write(&output, content)?;
    sklog!("Created or updated file {}", output.display());
    Ok(output)
}

/// Derive the output path for a template by stripping `.j2`.
fn default_output_path(template_path: &Path) -> Result<PathBuf> {
    let raw = template_path.to_string_lossy();
    match raw.strip_suffix(TEMPLATE_SUFFIX) {
        Some(stripped) => Ok(PathBuf::from(stripped)),
        None => Err(Error::Validation(format!(
            "Template path {} does not end in {}; pass an explicit output path",
            template_path.display(),
            TEMPLATE_SUFFIX
        ))),
    }
}
