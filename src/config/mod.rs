//! Adaptor configuration
//!
//! Describes the conventional Maven/WebObjects project layout the adaptor
//! reads from. Every field has a default, so an empty YAML document (or no
//! configuration file at all) yields the standard layout.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{self, Result};

/// Default name of the project descriptor
pub const DESCRIPTOR_FILE: &str = "pom.xml";

/// Default name of the secondary build properties file
pub const BUILD_PROPERTIES_FILE: &str = "build.properties";

/// Default compiled output directory, relative to the bundle root
pub const OUTPUT_DIRECTORY: &str = "target/classes";

/// Default extension of compiled class files (without the dot)
pub const CLASS_EXTENSION: &str = "class";

/// Default directory-name suffix of UI components
pub const COMPONENT_SUFFIX: &str = ".wo";

/// Default name of the bundle properties file inside resource directories
pub const PROPERTIES_FILE: &str = "Properties";

/// Layout configuration for [`crate::adaptor::MavenBundleAdaptor`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "snake_case", deny_unknown_fields)]
pub struct AdaptorConfig {
    /// Project descriptor file name looked up in each directory
    pub descriptor_file: String,

    /// Build properties file name at the bundle root
    pub build_properties_file: String,

    /// Compiled output directory, relative to the bundle root
    pub output_directory: PathBuf,

    /// Compiled class file extension (without the dot)
    pub class_extension: String,

    /// Directory-name suffix that marks a UI component
    pub component_suffix: String,

    /// Bundle properties file name looked up in resource directories
    pub properties_file: String,
}

impl Default for AdaptorConfig {
    fn default() -> Self {
        Self {
            descriptor_file: DESCRIPTOR_FILE.to_string(),
            build_properties_file: BUILD_PROPERTIES_FILE.to_string(),
            output_directory: PathBuf::from(OUTPUT_DIRECTORY),
            class_extension: CLASS_EXTENSION.to_string(),
            component_suffix: COMPONENT_SUFFIX.to_string(),
            properties_file: PROPERTIES_FILE.to_string(),
        }
    }
}

impl AdaptorConfig {
    /// Parse configuration from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        if yaml.trim().is_empty() {
            return Ok(Self::default());
        }
        let config: Self = serde_yaml::from_str(yaml)?;
        Ok(config)
    }

    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(error::config::not_found(path.display().to_string()));
        }

        let yaml = std::fs::read_to_string(path)
            .map_err(|e| error::config::read_failed(path.display().to_string(), e.to_string()))?;

        Self::from_yaml(&yaml).map_err(|e| match e {
            crate::error::AdaptorError::ConfigParseFailed { reason, .. } => {
                error::config::parse_failed(path.display().to_string(), reason)
            }
            other => other,
        })
    }

    /// Load configuration from `path` when given, otherwise use the defaults
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Path of the descriptor inside `dir`
    pub fn descriptor_in(&self, dir: &Path) -> PathBuf {
        dir.join(&self.descriptor_file)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AdaptorError;
    use tempfile::TempDir;

    #[test]
    fn test_default_layout() {
        let config = AdaptorConfig::default();
        assert_eq!(config.descriptor_file, "pom.xml");
        assert_eq!(config.build_properties_file, "build.properties");
        assert_eq!(config.output_directory, PathBuf::from("target/classes"));
        assert_eq!(config.class_extension, "class");
        assert_eq!(config.component_suffix, ".wo");
        assert_eq!(config.properties_file, "Properties");
    }

    #[test]
    fn test_empty_yaml_is_default() {
        let config = AdaptorConfig::from_yaml("").unwrap();
        assert_eq!(config, AdaptorConfig::default());
    }

    #[test]
    fn test_partial_yaml_keeps_other_defaults() {
        let config = AdaptorConfig::from_yaml("output_directory: build/classes\n").unwrap();
        assert_eq!(config.output_directory, PathBuf::from("build/classes"));
        assert_eq!(config.descriptor_file, "pom.xml");
    }

    #[test]
    fn test_unknown_key_rejected() {
        let result = AdaptorConfig::from_yaml("packaging: jar\n");
        assert!(matches!(
            result,
            Err(AdaptorError::ConfigParseFailed { .. })
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let temp = TempDir::new().unwrap();
        let result = AdaptorConfig::load(&temp.path().join("adaptor.yaml"));
        assert!(matches!(result, Err(AdaptorError::ConfigNotFound { .. })));
    }

    #[test]
    fn test_load_reports_file_path_on_parse_error() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("adaptor.yaml");
        std::fs::write(&path, "component_suffix: [unclosed").unwrap();

        let err = AdaptorConfig::load(&path).unwrap_err();
        match err {
            AdaptorError::ConfigParseFailed { path: reported, .. } => {
                assert!(reported.ends_with("adaptor.yaml"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_load_or_default_without_path() {
        let config = AdaptorConfig::load_or_default(None).unwrap();
        assert_eq!(config, AdaptorConfig::default());
    }
}
