//! Bundle domain types
//!
//! [`BundleMetadata`] is the record the host reads to register a bundle. Its
//! serialized form uses the host's dictionary keys.

use std::fmt;

use serde::Serialize;

use crate::descriptor::{APPLICATION_PACKAGING, FRAMEWORK_PACKAGING};

/// Bundle signature reported for every bundle
pub const BUNDLE_SIGNATURE: &str = "webo";

/// Manifest implementation version reported for every bundle
pub const MANIFEST_IMPLEMENTATION_VERSION: &str = "0";

/// Kind of bundle a project produces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum BundlePackaging {
    #[serde(rename = "APPL")]
    Application,
    #[serde(rename = "FMWK")]
    Framework,
}

impl BundlePackaging {
    /// Recognize a descriptor packaging value; anything else is not a bundle
    pub fn recognize(packaging: &str) -> Option<Self> {
        match packaging {
            APPLICATION_PACKAGING => Some(Self::Application),
            FRAMEWORK_PACKAGING => Some(Self::Framework),
            _ => None,
        }
    }

    /// Classify an already-located bundle: applications are explicit, the rest are frameworks
    pub fn classify(packaging: &str) -> Self {
        if packaging == APPLICATION_PACKAGING {
            Self::Application
        } else {
            Self::Framework
        }
    }

    /// Host package type code
    pub fn type_code(self) -> &'static str {
        match self {
            Self::Application => "APPL",
            Self::Framework => "FMWK",
        }
    }
}

impl fmt::Display for BundlePackaging {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Application => f.write_str("application"),
            Self::Framework => f.write_str("framework"),
        }
    }
}

/// Metadata describing a located bundle
///
/// Built fresh for every query and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BundleMetadata {
    #[serde(rename = "CFBundlePackageType")]
    pub packaging: BundlePackaging,

    #[serde(rename = "NSExecutable")]
    pub executable: String,

    #[serde(rename = "CFBundleShortVersionString")]
    pub version: String,

    #[serde(rename = "NSPrincipalClass", skip_serializing_if = "Option::is_none")]
    pub principal_class: Option<String>,

    #[serde(rename = "EOAdaptorClassName", skip_serializing_if = "Option::is_none")]
    pub eo_adaptor_class_name: Option<String>,

    #[serde(rename = "CFBundleSignature")]
    pub signature: String,

    #[serde(rename = "Has_WOComponents")]
    pub has_components: bool,

    #[serde(rename = "Manifest-Implementation-Version")]
    pub manifest_implementation_version: String,
}

impl BundleMetadata {
    /// Create metadata with the fixed signature and manifest version
    pub fn new(
        packaging: BundlePackaging,
        executable: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            packaging,
            executable: executable.into(),
            version: version.into(),
            principal_class: None,
            eo_adaptor_class_name: None,
            signature: BUNDLE_SIGNATURE.to_string(),
            has_components: false,
            manifest_implementation_version: MANIFEST_IMPLEMENTATION_VERSION.to_string(),
        }
    }
}
