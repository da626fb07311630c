//! Bundle root location
//!
//! Walks up from a starting path to the nearest directory holding a project
//! descriptor and decides whether that project is a bundle.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::AdaptorConfig;
use crate::descriptor::ProjectDescriptor;
use crate::error::{AdaptorError, Result};

/// Locate the bundle root enclosing `start`
///
/// The nearest descriptor decides: if it is unreadable, malformed or declares
/// a non-bundle packaging, the walk stops there and nothing is found.
pub fn locate(start: &Path, config: &AdaptorConfig) -> Option<PathBuf> {
    let mut current = match dunce::canonicalize(start) {
        Ok(path) => path,
        Err(e) => {
            debug!(path = %start.display(), error = %e, "cannot canonicalize start path");
            return None;
        }
    };

    loop {
        if !current.is_dir() {
            return None;
        }

        let descriptor_path = config.descriptor_in(&current);
        if descriptor_path.exists() {
            return match ProjectDescriptor::read(&descriptor_path) {
                Ok(descriptor) if descriptor.is_bundle() => {
                    debug!(root = %current.display(), packaging = %descriptor.packaging, "located bundle root");
                    Some(current)
                }
                Ok(descriptor) => {
                    debug!(
                        path = %descriptor_path.display(),
                        packaging = %descriptor.packaging,
                        "nearest descriptor is not a bundle"
                    );
                    None
                }
                Err(e) => {
                    debug!(path = %descriptor_path.display(), error = %e, "unreadable descriptor");
                    None
                }
            };
        }

        match current.parent() {
            Some(parent) => current = parent.to_path_buf(),
            None => return None,
        }
    }
}

/// Whether `start` lies inside a bundle
pub fn is_adaptable(start: &Path, config: &AdaptorConfig) -> bool {
    locate(start, config).is_some()
}

/// Bundle root enclosing `start`
///
/// Callers are expected to check [`is_adaptable`] first; a path outside any
/// bundle is reported as [`AdaptorError::NotAdaptable`].
pub fn adaptor_bundle_path(start: &Path, config: &AdaptorConfig) -> Result<PathBuf> {
    locate(start, config).ok_or_else(|| AdaptorError::NotAdaptable {
        path: start.display().to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn pom(packaging: &str) -> String {
        format!(
            "<project><artifactId>demo</artifactId><version>1.0</version><packaging>{packaging}</packaging></project>"
        )
    }

    #[test]
    fn test_locate_from_bundle_root() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("pom.xml"), pom("woframework")).unwrap();

        let located = locate(temp.path(), &AdaptorConfig::default()).unwrap();
        assert_eq!(located, dunce::canonicalize(temp.path()).unwrap());
    }

    #[test]
    fn test_locate_walks_up_from_nested_directory() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("pom.xml"), pom("woapplication")).unwrap();
        let nested = temp.path().join("Components/Main.wo");
        std::fs::create_dir_all(&nested).unwrap();

        let located = locate(&nested, &AdaptorConfig::default()).unwrap();
        assert_eq!(located, dunce::canonicalize(temp.path()).unwrap());
    }

    #[test]
    fn test_nearest_non_bundle_descriptor_stops_walk() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("pom.xml"), pom("woapplication")).unwrap();
        let module = temp.path().join("module");
        std::fs::create_dir_all(module.join("src")).unwrap();
        std::fs::write(module.join("pom.xml"), pom("library")).unwrap();

        assert_eq!(locate(&module.join("src"), &AdaptorConfig::default()), None);
    }

    #[test]
    fn test_malformed_descriptor_stops_walk() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("pom.xml"), pom("woapplication")).unwrap();
        let module = temp.path().join("module");
        std::fs::create_dir_all(&module).unwrap();
        std::fs::write(module.join("pom.xml"), "<project><packaging>").unwrap();

        assert!(!is_adaptable(&module, &AdaptorConfig::default()));
    }

    #[test]
    fn test_file_start_path_is_not_adaptable() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("pom.xml"), pom("woapplication")).unwrap();
        let file = temp.path().join("README.md");
        std::fs::write(&file, "readme").unwrap();

        assert_eq!(locate(&file, &AdaptorConfig::default()), None);
    }

    #[test]
    fn test_missing_start_path_is_not_adaptable() {
        let temp = TempDir::new().unwrap();
        assert!(!is_adaptable(
            &temp.path().join("does-not-exist"),
            &AdaptorConfig::default()
        ));
    }

    #[test]
    fn test_adaptor_bundle_path_not_adaptable() {
        let temp = TempDir::new().unwrap();
        std::fs::write(temp.path().join("pom.xml"), pom("jar")).unwrap();

        let result = adaptor_bundle_path(temp.path(), &AdaptorConfig::default());
        assert!(matches!(result, Err(AdaptorError::NotAdaptable { .. })));
    }
}
