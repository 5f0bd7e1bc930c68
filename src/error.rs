use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("TOML serialize error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),

    #[error("No home directory")]
    NoHomeDir,

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Launcher supports exactly one task, got {count}")]
    UnsupportedGraphShape { count: usize },

    #[error("No cluster config template registered for cloud '{cloud}'")]
    UnsupportedProvider { cloud: String },

    #[error("Template not found: {}", .path.display())]
    TemplateNotFound { path: PathBuf },

    #[error("Template render failed: {0}")]
    TemplateRender(String),

    #[error("Provisioning failed with exit code {code}: {command}")]
    Provisioning { command: String, code: i32 },

    #[error("Sync failed with exit code {code}: {command}")]
    Sync { command: String, code: i32 },

    #[error("Remote execution failed with exit code {code}: {command}")]
    Execution { command: String, code: i32 },

    #[error("Provisioner not available: {0}")]
    ProvisionerNotAvailable(String),

    #[error("Not implemented: {0}")]
    NotImplemented(&'static str),
}

pub type Result<T> = std::result::Result<T, Error>;
