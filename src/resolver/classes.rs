//! Compiled class enumeration
//!
//! Class names are produced lazily while walking the compiled output
//! directory; each call to [`list_compiled_classes`] starts a fresh walk.

use std::path::{Component, Path, PathBuf};

use walkdir::WalkDir;

use crate::config::AdaptorConfig;
use crate::error::{self, Result};

/// Lazy sequence of dotted class names under a compiled output directory
pub struct ClassNames {
    output_root: PathBuf,
    extension: String,
    entries: walkdir::IntoIter,
}

impl ClassNames {
    fn new(output_root: PathBuf, extension: String) -> Self {
        let entries = WalkDir::new(&output_root).into_iter();
        Self {
            output_root,
            extension,
            entries,
        }
    }
}

impl Iterator for ClassNames {
    type Item = Result<String>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let entry = match self.entries.next()? {
                Ok(entry) => entry,
                Err(e) => return Some(Err(e.into())),
            };

            // The walk itself stays on real directories; linked class files still count.
            let path = entry.path();
            if !path.is_file() {
                continue;
            }

            if path.extension().and_then(|e| e.to_str()) != Some(self.extension.as_str()) {
                continue;
            }

            let Ok(relative) = path.strip_prefix(&self.output_root) else {
                continue;
            };

            return Some(Ok(class_name(relative)));
        }
    }
}

/// Dotted class name for a class file path relative to the output root
fn class_name(relative: &Path) -> String {
    relative
        .with_extension("")
        .components()
        .filter_map(|component| match component {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join(".")
}

/// List the compiled classes of the bundle rooted at `root`
///
/// A missing output directory is an error, not an empty listing.
pub fn list_compiled_classes(root: &Path, config: &AdaptorConfig) -> Result<ClassNames> {
    let output_root = root.join(&config.output_directory);
    if !output_root.is_dir() {
        return Err(error::fs::missing_output_directory(
            output_root.display().to_string(),
        ));
    }

    Ok(ClassNames::new(output_root, config.class_extension.clone()))
}
