//! Raw `pom.xml` document model
//!
//! Only the elements the adaptor reads are modeled; everything else in the
//! document (dependencies, plugins, namespaces) is ignored by the deserializer.

use std::collections::BTreeMap;

use serde::Deserialize;

#[derive(Debug, Default, Deserialize)]
pub(crate) struct PomDocument {
    #[serde(rename = "artifactId")]
    pub artifact_id: Option<String>,
    pub version: Option<String>,
    pub packaging: Option<String>,
    pub parent: Option<PomParent>,
    pub build: Option<PomBuild>,
    #[serde(default)]
    pub properties: BTreeMap<String, String>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct PomParent {
    #[serde(rename = "relativePath")]
    pub relative_path: Option<PomText>,
    pub version: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct PomBuild {
    pub resources: Option<PomResources>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct PomResources {
    #[serde(default, rename = "resource")]
    pub resource: Vec<PomResource>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct PomResource {
    pub directory: Option<String>,
}

/// Element whose text content may legitimately be empty (`<relativePath/>`)
#[derive(Debug, Default, Deserialize)]
pub(crate) struct PomText {
    #[serde(rename = "$text", default)]
    pub text: String,
}
