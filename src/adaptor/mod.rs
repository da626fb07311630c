//! Bundle adaptor providers
//!
//! A bundle-loading host asks each registered [`BundleAdaptorProvider`]
//! whether it understands a path, then queries the first one that does.

pub mod maven;
pub mod registry;

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::domain::BundleMetadata;
use crate::error::Result;

pub use maven::MavenBundleAdaptor;
pub use registry::AdaptorRegistry;

/// Lazy, fallible sequence of class names
pub type ClassNameIter = Box<dyn Iterator<Item = Result<String>> + Send>;

/// Capability a bundle-loading host needs from a project layout
pub trait BundleAdaptorProvider: Send + Sync {
    /// Short identifier of the provider
    fn name(&self) -> &str;

    /// Whether `bundle_path` lies inside a bundle this provider understands
    fn is_adaptable(&self, bundle_path: &Path) -> bool;

    /// Bundle root enclosing `bundle_path`
    ///
    /// Only meaningful after [`is_adaptable`](Self::is_adaptable) returned true.
    fn adaptor_bundle_path(&self, bundle_path: &Path) -> Result<PathBuf>;

    /// Filesystem location of a bundle root returned by
    /// [`adaptor_bundle_path`](Self::adaptor_bundle_path)
    fn fs_bundle_path(&self, adaptor_bundle_path: &Path) -> PathBuf {
        adaptor_bundle_path.to_path_buf()
    }

    fn bundle_info(&self, fs_bundle_path: &Path) -> Result<BundleMetadata>;

    fn class_names(&self, fs_bundle_path: &Path) -> Result<ClassNameIter>;

    fn resource_paths(&self, fs_bundle_path: &Path) -> Result<Vec<PathBuf>>;

    fn properties(&self, fs_bundle_path: &Path) -> Result<BTreeMap<String, String>>;
}
