//! Bundle metadata extraction

use std::path::Path;

use tracing::debug;
use walkdir::WalkDir;

use crate::build_properties::{EO_ADAPTOR_CLASS_NAME_KEY, PRINCIPAL_CLASS_KEY, PropertyFile};
use crate::config::AdaptorConfig;
use crate::descriptor::ProjectDescriptor;
use crate::domain::{BundleMetadata, BundlePackaging};
use crate::error::{self, Result};

/// Extract the metadata of the bundle rooted at `root`
///
/// `build.properties` takes precedence over the descriptor's `<properties>`
/// for the principal and adaptor classes. Any read failure aborts the whole
/// extraction.
pub fn extract_metadata(root: &Path, config: &AdaptorConfig) -> Result<BundleMetadata> {
    let build_properties =
        PropertyFile::read_optional(&root.join(&config.build_properties_file))?;
    let descriptor = ProjectDescriptor::read(&config.descriptor_in(root))?;

    let packaging = BundlePackaging::classify(&descriptor.packaging);
    let executable = descriptor.artifact_id.clone().ok_or_else(|| {
        error::descriptor::malformed(
            descriptor.path.display().to_string(),
            "missing <artifactId>",
        )
    })?;
    let version = descriptor.resolved_version()?;

    let mut metadata = BundleMetadata::new(packaging, executable, version);
    metadata.principal_class = principal_class(build_properties.as_ref(), &descriptor);
    metadata.eo_adaptor_class_name = eo_adaptor_class_name(build_properties.as_ref(), &descriptor);
    metadata.has_components = has_components(root, &config.component_suffix)?;

    debug!(
        root = %root.display(),
        executable = %metadata.executable,
        version = %metadata.version,
        packaging = %metadata.packaging,
        "extracted bundle metadata"
    );
    Ok(metadata)
}

fn principal_class(
    build_properties: Option<&PropertyFile>,
    descriptor: &ProjectDescriptor,
) -> Option<String> {
    match build_properties.and_then(PropertyFile::principal_class) {
        Some(class) => Some(class.to_string()),
        None => descriptor.property(PRINCIPAL_CLASS_KEY).map(str::to_string),
    }
}

fn eo_adaptor_class_name(
    build_properties: Option<&PropertyFile>,
    descriptor: &ProjectDescriptor,
) -> Option<String> {
    // A key present in build.properties wins even when empty.
    match build_properties {
        Some(props) if props.get(EO_ADAPTOR_CLASS_NAME_KEY).is_some() => {
            props.eo_adaptor_class_name().map(str::to_string)
        }
        _ => descriptor
            .property(EO_ADAPTOR_CLASS_NAME_KEY)
            .map(str::to_string),
    }
}

/// Whether any directory under `root` has a name ending in `suffix`
pub fn has_components(root: &Path, suffix: &str) -> Result<bool> {
    for entry in WalkDir::new(root) {
        let entry = entry?;
        if entry.path().is_dir() && entry.file_name().to_string_lossy().ends_with(suffix) {
            return Ok(true);
        }
    }
    Ok(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AdaptorError;
    use tempfile::TempDir;

    fn write(root: &Path, relative: &str, content: &str) {
        let path = root.join(relative);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(path, content).unwrap();
    }

    #[test]
    fn test_extract_application_metadata() {
        let temp = TempDir::new().unwrap();
        write(
            temp.path(),
            "pom.xml",
            "<project><artifactId>demo</artifactId><version>1.2.3</version><packaging>woapplication</packaging></project>",
        );

        let metadata = extract_metadata(temp.path(), &AdaptorConfig::default()).unwrap();
        assert_eq!(metadata.packaging, BundlePackaging::Application);
        assert_eq!(metadata.executable, "demo");
        assert_eq!(metadata.version, "1.2.3");
        assert_eq!(metadata.signature, "webo");
        assert_eq!(metadata.manifest_implementation_version, "0");
        assert_eq!(metadata.principal_class, None);
        assert!(!metadata.has_components);
    }

    #[test]
    fn test_build_properties_override_descriptor_properties() {
        let temp = TempDir::new().unwrap();
        write(
            temp.path(),
            "pom.xml",
            "<project><artifactId>demo</artifactId><version>1</version><packaging>woframework</packaging>\
             <properties><principalClass>from.Pom</principalClass><eoAdaptorClassName>PomAdaptor</eoAdaptorClassName></properties></project>",
        );
        write(
            temp.path(),
            "build.properties",
            "principalClass=from.BuildProperties\neoAdaptorClassName=\n",
        );

        let metadata = extract_metadata(temp.path(), &AdaptorConfig::default()).unwrap();
        assert_eq!(
            metadata.principal_class.as_deref(),
            Some("from.BuildProperties")
        );
        assert_eq!(metadata.eo_adaptor_class_name, None);
    }

    #[test]
    fn test_descriptor_properties_used_without_build_properties() {
        let temp = TempDir::new().unwrap();
        write(
            temp.path(),
            "pom.xml",
            "<project><artifactId>demo</artifactId><version>1</version><packaging>woframework</packaging>\
             <properties><principalClass>from.Pom</principalClass><eoAdaptorClassName>PomAdaptor</eoAdaptorClassName></properties></project>",
        );

        let metadata = extract_metadata(temp.path(), &AdaptorConfig::default()).unwrap();
        assert_eq!(metadata.principal_class.as_deref(), Some("from.Pom"));
        assert_eq!(metadata.eo_adaptor_class_name.as_deref(), Some("PomAdaptor"));
    }

    #[test]
    fn test_missing_artifact_id_is_malformed() {
        let temp = TempDir::new().unwrap();
        write(
            temp.path(),
            "pom.xml",
            "<project><version>1</version><packaging>woframework</packaging></project>",
        );

        let result = extract_metadata(temp.path(), &AdaptorConfig::default());
        assert!(matches!(
            result,
            Err(AdaptorError::MalformedDescriptor { .. })
        ));
    }

    #[test]
    fn test_missing_descriptor_is_fatal() {
        let temp = TempDir::new().unwrap();
        let result = extract_metadata(temp.path(), &AdaptorConfig::default());
        assert!(matches!(
            result,
            Err(AdaptorError::DescriptorNotFound { .. })
        ));
    }

    #[test]
    fn test_has_components_finds_nested_component() {
        let temp = TempDir::new().unwrap();
        std::fs::create_dir_all(temp.path().join("Components/Nested/Main.wo")).unwrap();
        assert!(has_components(temp.path(), ".wo").unwrap());
    }

    #[test]
    fn test_has_components_ignores_files() {
        let temp = TempDir::new().unwrap();
        write(temp.path(), "Components/Main.wo", "not a directory");
        assert!(!has_components(temp.path(), ".wo").unwrap());
    }

    #[cfg(unix)]
    #[test]
    fn test_has_components_follows_symlinked_component() {
        let temp = TempDir::new().unwrap();
        let shared = temp.path().join("shared/Main");
        std::fs::create_dir_all(&shared).unwrap();
        let app = temp.path().join("app");
        std::fs::create_dir_all(&app).unwrap();
        std::os::unix::fs::symlink(&shared, app.join("Linked.wo")).unwrap();

        assert!(has_components(&app, ".wo").unwrap());
    }
}
