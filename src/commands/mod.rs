//! Command implementations for the maven-bundle-adaptor CLI

pub mod classes;
pub mod info;
pub mod locate;
pub mod properties;
pub mod resources;
pub mod version;

use std::path::PathBuf;

use maven_bundle_adaptor::{BundleAdaptorProvider, Result};

/// Resolve the bundle root for an optional user-supplied path
///
/// Falls back to the current directory, then walks up to the bundle root.
pub fn bundle_root(adaptor: &dyn BundleAdaptorProvider, path: Option<PathBuf>) -> Result<PathBuf> {
    let start = match path {
        Some(path) => path,
        None => std::env::current_dir()?,
    };

    let root = adaptor.adaptor_bundle_path(&start)?;
    Ok(adaptor.fs_bundle_path(&root))
}
