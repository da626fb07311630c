//! Project descriptor (pom.xml) model
//!
//! A [`ProjectDescriptor`] is the subset of a Maven project model the bundle
//! adaptor needs: packaging, identity, the parent reference and the declared
//! resource directories.

mod pom;

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use tracing::trace;

use crate::domain::BundlePackaging;
use crate::error::{self, Result};
use pom::PomDocument;

/// Packaging of a WebObjects application bundle
pub const APPLICATION_PACKAGING: &str = "woapplication";

/// Packaging of a WebObjects framework bundle
pub const FRAMEWORK_PACKAGING: &str = "woframework";

/// Packaging Maven assumes when `<packaging>` is omitted
pub const DEFAULT_PACKAGING: &str = "jar";

/// Parent location Maven assumes when `<relativePath>` is omitted
pub const DEFAULT_PARENT_RELATIVE_PATH: &str = "../pom.xml";

/// Reference from a descriptor to its parent descriptor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParentReference {
    /// Location of the parent descriptor relative to the child's directory.
    /// Empty when the project disables local parent lookup (`<relativePath/>`).
    pub relative_path: String,

    /// Version declared on the `<parent>` element
    pub version: Option<String>,
}

/// Parsed project descriptor
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectDescriptor {
    /// Path of the descriptor file this model was read from
    pub path: PathBuf,

    /// Declared packaging (`jar` when omitted)
    pub packaging: String,

    pub artifact_id: Option<String>,

    /// Own version; `None` means inherited from the parent
    pub version: Option<String>,

    pub parent: Option<ParentReference>,

    /// Declared `<build><resources>` directories in declaration order
    pub resource_directories: Vec<String>,

    /// Custom `<properties>` entries
    pub properties: BTreeMap<String, String>,
}

impl ProjectDescriptor {
    /// Parse descriptor content read from `path`
    pub fn parse(path: &Path, content: &str) -> Result<Self> {
        let document: PomDocument = quick_xml::de::from_str(content)
            .map_err(|e| error::descriptor::malformed(path.display().to_string(), e.to_string()))?;

        let parent = document.parent.map(|parent| ParentReference {
            relative_path: parent.relative_path.map_or_else(
                || DEFAULT_PARENT_RELATIVE_PATH.to_string(),
                |p| p.text.trim().to_string(),
            ),
            version: non_empty(parent.version),
        });

        let resource_directories = document
            .build
            .and_then(|build| build.resources)
            .map(|resources| resources.resource)
            .unwrap_or_default()
            .into_iter()
            .filter_map(|resource| non_empty(resource.directory))
            .collect();

        let properties = document
            .properties
            .into_iter()
            .map(|(key, value)| (key, value.trim().to_string()))
            .collect();

        Ok(Self {
            path: path.to_path_buf(),
            packaging: non_empty(document.packaging)
                .unwrap_or_else(|| DEFAULT_PACKAGING.to_string()),
            artifact_id: non_empty(document.artifact_id),
            version: non_empty(document.version),
            parent,
            resource_directories,
            properties,
        })
    }

    /// Read and parse the descriptor at `path`
    pub fn read(path: &Path) -> Result<Self> {
        if !path.is_file() {
            return Err(error::descriptor::not_found(path.display().to_string()));
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| error::descriptor::read_failed(path.display().to_string(), e.to_string()))?;

        trace!(path = %path.display(), "parsing project descriptor");
        Self::parse(path, &content)
    }

    /// Bundle kind of this project, if its packaging is a recognized bundle packaging
    pub fn bundle_packaging(&self) -> Option<BundlePackaging> {
        BundlePackaging::recognize(&self.packaging)
    }

    /// Whether this descriptor describes a bundle root
    pub fn is_bundle(&self) -> bool {
        self.bundle_packaging().is_some()
    }

    /// Own version, falling back to the version declared on the parent reference
    pub fn resolved_version(&self) -> Result<&str> {
        self.version
            .as_deref()
            .or_else(|| self.parent.as_ref().and_then(|p| p.version.as_deref()))
            .ok_or_else(|| error::descriptor::missing_version(self.path.display().to_string()))
    }

    /// Custom property value, ignoring empty values
    pub fn property(&self, key: &str) -> Option<&str> {
        self.properties
            .get(key)
            .map(String::as_str)
            .filter(|value| !value.is_empty())
    }

    /// Location of the parent descriptor, resolved against this descriptor's directory
    ///
    /// A relative path naming a directory resolves to `descriptor_file` inside it.
    pub fn parent_descriptor_path(&self, descriptor_file: &str) -> Option<PathBuf> {
        let parent = self.parent.as_ref()?;
        if parent.relative_path.is_empty() {
            return None;
        }

        let base = self.path.parent().unwrap_or_else(|| Path::new(""));
        let resolved = base.join(&parent.relative_path);
        if resolved.is_dir() {
            Some(resolved.join(descriptor_file))
        } else {
            Some(resolved)
        }
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
