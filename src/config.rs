use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

use crate::{sklog_debug, Error, Result};

/// Default remote directory the working dir is synced into. The cluster
/// config's file mount, the sync destination, and the remote executor's
/// initial `cd` must all use the same value, so it lives here and nowhere
/// else.
pub const DEFAULT_REMOTE_WORKDIR: &str = "/tmp/workdir";

const DEFAULT_PROVISIONER: &str = "ray";
const DEFAULT_TEMPLATES_DIR: &str = "templates";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// External autoscaler binary invoked for provision/sync/execute.
    #[serde(default = "default_provisioner")]
    pub provisioner: String,
    /// Directory holding the provider `.yml.j2` cluster config templates.
    pub templates_dir: Option<String>,
    /// Directory rendered cluster configs are written into. When unset,
    /// a config lands next to its template.
    pub output_dir: Option<String>,
    /// Remote directory the local working dir is synced into.
    #[serde(default = "default_remote_workdir")]
    pub remote_workdir: String,
}

fn default_provisioner() -> String {
    DEFAULT_PROVISIONER.to_string()
}

fn default_remote_workdir() -> String {
    DEFAULT_REMOTE_WORKDIR.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            provisioner: default_provisioner(),
            templates_dir: None,
            output_dir: None,
            remote_workdir: default_remote_workdir(),
        }
    }
}

impl Config {
    pub fn skylift_dir() -> Result<PathBuf> {
        Ok(dirs::home_dir().ok_or(Error::NoHomeDir)?.join(".skylift"))
    }

    pub fn config_path() -> Result<PathBuf> {
        Ok(Self::skylift_dir()?.join("skylift.toml"))
    }

    /// Resolved templates directory, tilde-expanded.
    pub fn templates_dir(&self) -> PathBuf {
        match &self.templates_dir {
            Some(dir) => expand_tilde(dir),
            None => PathBuf::from(DEFAULT_TEMPLATES_DIR),
        }
    }

    /// Resolved output directory for rendered configs, tilde-expanded.
    pub fn output_dir(&self) -> Option<PathBuf> {
        self.output_dir.as_deref().map(expand_tilde)
    }

    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        sklog_debug!("Config::load path={}", path.display());
        if !path.exists() {
            sklog_debug!("Config file not found, using defaults");
            return Ok(Self::default());
        }
        let config: Self = toml::from_str(&fs::read_to_string(&path)?)?;
        sklog_debug!(
            "Config loaded: provisioner={}, templates_dir={:?}, output_dir={:?}, remote_workdir={}",
            config.provisioner,
            config.templates_dir,
            config.output_dir,
            config.remote_workdir
        );
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let dir = Self::skylift_dir()?;
        sklog_debug!("Config::save dir={}", dir.display());
        if !dir.exists() {
            fs::create_dir_all(&dir)?;
        }
        let path = Self::config_path()?;
        fs::write(&path, toml::to_string_pretty(self)?)?;
        sklog_debug!("Config saved to {}", path.display());
        Ok(())
    }
}

fn expand_tilde(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = dirs::home_dir() {
            return home.join(rest);
        }
    }
    PathBuf::from(path)
}
