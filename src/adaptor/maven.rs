//! Maven bundle adaptor
//!
//! Recognizes WebObjects applications and frameworks built with Maven by
//! their `woapplication` / `woframework` packaging.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use super::{BundleAdaptorProvider, ClassNameIter};
use crate::config::AdaptorConfig;
use crate::domain::BundleMetadata;
use crate::error::Result;
use crate::resolver;

/// [`BundleAdaptorProvider`] for Maven project layouts
#[derive(Debug, Clone, Default)]
pub struct MavenBundleAdaptor {
    config: AdaptorConfig,
}

impl MavenBundleAdaptor {
    /// Create an adaptor for the standard Maven layout
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an adaptor for a customized layout
    pub fn with_config(config: AdaptorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AdaptorConfig {
        &self.config
    }

    /// Bundle root enclosing `bundle_path`, if any
    pub fn locate(&self, bundle_path: &Path) -> Option<PathBuf> {
        resolver::locate(bundle_path, &self.config)
    }
}

impl BundleAdaptorProvider for MavenBundleAdaptor {
    fn name(&self) -> &str {
        "maven"
    }

    fn is_adaptable(&self, bundle_path: &Path) -> bool {
        resolver::is_adaptable(bundle_path, &self.config)
    }

    fn adaptor_bundle_path(&self, bundle_path: &Path) -> Result<PathBuf> {
        resolver::adaptor_bundle_path(bundle_path, &self.config)
    }

    fn bundle_info(&self, fs_bundle_path: &Path) -> Result<BundleMetadata> {
        resolver::extract_metadata(fs_bundle_path, &self.config)
    }

    fn class_names(&self, fs_bundle_path: &Path) -> Result<ClassNameIter> {
        let names = resolver::list_compiled_classes(fs_bundle_path, &self.config)?;
        Ok(Box::new(names))
    }

    fn resource_paths(&self, fs_bundle_path: &Path) -> Result<Vec<PathBuf>> {
        resolver::resource_paths(fs_bundle_path, &self.config)
    }

    fn properties(&self, fs_bundle_path: &Path) -> Result<BTreeMap<String, String>> {
        resolver::bundle_properties(fs_bundle_path, &self.config)
    }
}
