//! Resource directory resolution
//!
//! Resource directories are collected from the bundle's descriptor and then
//! from each ancestor descriptor in turn. Every collected entry, including the
//! inherited ones, is resolved against the bundle root the walk started from.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::AdaptorConfig;
use crate::descriptor::ProjectDescriptor;
use crate::error::{self, Result};

/// Resource directories declared by the bundle and its ancestors, child first
///
/// Entries are returned as written in the descriptors and are not deduplicated.
pub fn resource_directories(root: &Path, config: &AdaptorConfig) -> Result<Vec<String>> {
    let mut directories = Vec::new();
    let mut visited: Vec<PathBuf> = Vec::new();
    let mut next = Some(config.descriptor_in(root));

    while let Some(descriptor_path) = next.take() {
        let key = dunce::canonicalize(&descriptor_path).unwrap_or_else(|_| descriptor_path.clone());
        if visited.contains(&key) {
            let chain = visited
                .iter()
                .chain(std::iter::once(&key))
                .map(|p| p.display().to_string())
                .collect::<Vec<_>>()
                .join(" -> ");
            return Err(error::descriptor::parent_cycle(chain));
        }

        let descriptor = ProjectDescriptor::read(&descriptor_path)?;
        directories.extend(descriptor.resource_directories.iter().cloned());
        visited.push(key);

        next = descriptor.parent_descriptor_path(&config.descriptor_file);
        if let Some(parent_path) = &next {
            debug!(path = %parent_path.display(), "following parent descriptor");
        }
    }

    Ok(directories)
}

/// Absolute resource paths of the bundle rooted at `root`
pub fn resource_paths(root: &Path, config: &AdaptorConfig) -> Result<Vec<PathBuf>> {
    Ok(resource_directories(root, config)?
        .into_iter()
        .map(|directory| root.join(directory))
        .collect())
}
