//! Cloud provider registry.
//!
//! Each supported cloud is a [`CloudProvider`] carrying the cluster
//! config template it provisions from. Providers are registered into a
//! [`ProviderRegistry`] once at startup; after that the registry is
//! read-only and safe to share across concurrent launches.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::core::task::CloudId;
use crate::{Error, Result};

/// A cloud backend skylift can provision on.
///
/// Adding a provider means implementing this trait and registering an
/// instance; the launch pipeline itself never changes.
pub trait CloudProvider {
    /// Provider identifier matched against `Task::best_resources.cloud`.
    fn id(&self) -> CloudId;

    /// Cluster config template rendered for this provider.
    fn config_template(&self) -> &Path;
}

/// Amazon Web Services, provisioned from `aws.yml.j2`.
pub struct Aws {
    template: PathBuf,
}

impl Aws {
    pub fn new(templates_dir: &Path) -> Self {
        Self {
            template: templates_dir.join("aws.yml.j2"),
        }
    }
}

impl CloudProvider for Aws {
    fn id(&self) -> CloudId {
        CloudId::new("aws")
    }

    fn config_template(&self) -> &Path {
        &self.template
    }
}

/// Google Cloud Platform, provisioned from `gcp.yml.j2`.
pub struct Gcp {
    template: PathBuf,
}

impl Gcp {
    pub fn new(templates_dir: &Path) -> Self {
        Self {
            template: templates_dir.join("gcp.yml.j2"),
        }
    }
}

impl CloudProvider for Gcp {
    fn id(&self) -> CloudId {
        CloudId::new("gcp")
    }

    fn config_template(&self) -> &Path {
        &self.template
    }
}

/// Mapping from cloud identifier to cluster config template.
///
/// Built once at startup, never mutated afterwards.
#[derive(Debug, Default)]
pub struct ProviderRegistry {
    templates: HashMap<CloudId, PathBuf>,
}

impl ProviderRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the built-in providers rooted at `templates_dir`.
    pub fn with_defaults(templates_dir: &Path) -> Self {
        let mut registry = Self::new();
        registry.register(&Aws::new(templates_dir));
        registry.register(&Gcp::new(templates_dir));
        registry
    }

    pub fn register(&mut self, provider: &dyn CloudProvider) {
        self.templates
            .insert(provider.id(), provider.config_template().to_path_buf());
    }

    /// Template for a cloud, or `UnsupportedProvider` if unregistered.
    pub fn template_for(&self, cloud: &CloudId) -> Result<&Path> {
        self.templates
            .get(cloud)
            .map(PathBuf::as_path)
            .ok_or_else(|| Error::UnsupportedProvider {
                cloud: cloud.to_string(),
            })
    }

    /// Registered cloud identifiers, sorted for stable display.
    pub fn clouds(&self) -> Vec<&CloudId> {
        let mut clouds: Vec<_> = self.templates.keys().collect();
        clouds.sort_by(|a, b| a.as_str().cmp(b.as_str()));
        clouds
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }
}
