//! Bundle properties
//!
//! Merges the `Properties` files found in the bundle's resource directories.

use std::collections::BTreeMap;
use std::path::Path;

use tracing::trace;

use crate::build_properties::PropertyFile;
use crate::config::AdaptorConfig;
use crate::error::Result;

use super::resources::resource_paths;

/// Properties of the bundle rooted at `root`
///
/// Resource directories are visited child first, and the first directory to
/// define a key wins. Directories without a properties file are skipped.
pub fn bundle_properties(root: &Path, config: &AdaptorConfig) -> Result<BTreeMap<String, String>> {
    let mut properties = BTreeMap::new();

    for directory in resource_paths(root, config)? {
        let path = directory.join(&config.properties_file);
        let Some(file) = PropertyFile::read_optional(&path)? else {
            continue;
        };

        trace!(path = %path.display(), entries = file.len(), "merging bundle properties");
        for (key, value) in file.entries() {
            properties
                .entry(key.to_string())
                .or_insert_with(|| value.to_string());
        }
    }

    Ok(properties)
}
