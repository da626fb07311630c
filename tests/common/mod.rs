//! Common test utilities for maven-bundle-adaptor integration tests

use std::path::PathBuf;
use tempfile::TempDir;

/// A temporary project tree for integration tests
pub struct TestWorkspace {
    /// Temporary directory
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to workspace root
    pub path: PathBuf,
}

#[allow(dead_code)]
impl TestWorkspace {
    /// Create a new test workspace
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        Self { temp, path }
    }

    /// Write a file in workspace, creating parent directories
    pub fn write_file(&self, path: &str, content: &str) {
        let file_path = self.path.join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directory");
        }
        std::fs::write(&file_path, content).expect("Failed to write file");
    }

    /// Create a directory in workspace
    pub fn create_dir(&self, path: &str) -> PathBuf {
        let dir_path = self.path.join(path);
        std::fs::create_dir_all(&dir_path).expect("Failed to create directory");
        dir_path
    }

    /// Write an empty compiled class file under `<project>/target/classes`
    pub fn write_class(&self, project: &str, class_path: &str) {
        self.write_file(&format!("{project}/target/classes/{class_path}"), "");
    }

    /// Canonical form of a workspace path, as the locator reports it
    pub fn canonical(&self, path: &str) -> PathBuf {
        dunce::canonicalize(self.path.join(path)).expect("Failed to canonicalize path")
    }
}

/// Builder for pom.xml content
#[derive(Default)]
pub struct Pom {
    artifact_id: Option<String>,
    version: Option<String>,
    packaging: Option<String>,
    parent: Option<(Option<String>, Option<String>)>,
    resources: Vec<String>,
    properties: Vec<(String, String)>,
}

#[allow(dead_code)]
impl Pom {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn application(artifact_id: &str, version: &str) -> Self {
        Self::new()
            .artifact_id(artifact_id)
            .version(version)
            .packaging("woapplication")
    }

    pub fn framework(artifact_id: &str, version: &str) -> Self {
        Self::new()
            .artifact_id(artifact_id)
            .version(version)
            .packaging("woframework")
    }

    pub fn artifact_id(mut self, artifact_id: &str) -> Self {
        self.artifact_id = Some(artifact_id.to_string());
        self
    }

    pub fn version(mut self, version: &str) -> Self {
        self.version = Some(version.to_string());
        self
    }

    pub fn packaging(mut self, packaging: &str) -> Self {
        self.packaging = Some(packaging.to_string());
        self
    }

    pub fn parent(mut self, relative_path: Option<&str>, version: Option<&str>) -> Self {
        self.parent = Some((relative_path.map(String::from), version.map(String::from)));
        self
    }

    pub fn resource(mut self, directory: &str) -> Self {
        self.resources.push(directory.to_string());
        self
    }

    pub fn property(mut self, key: &str, value: &str) -> Self {
        self.properties.push((key.to_string(), value.to_string()));
        self
    }

    pub fn build(&self) -> String {
        let mut xml = String::from(
            "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
             <project xmlns=\"http://maven.apache.org/POM/4.0.0\">\n  \
             <modelVersion>4.0.0</modelVersion>\n",
        );
        if let Some((relative_path, version)) = &self.parent {
            xml.push_str("  <parent>\n    <groupId>com.example</groupId>\n    <artifactId>parent</artifactId>\n");
            if let Some(version) = version {
                xml.push_str(&format!("    <version>{version}</version>\n"));
            }
            if let Some(relative_path) = relative_path {
                xml.push_str(&format!("    <relativePath>{relative_path}</relativePath>\n"));
            }
            xml.push_str("  </parent>\n");
        }
        if let Some(artifact_id) = &self.artifact_id {
            xml.push_str(&format!("  <artifactId>{artifact_id}</artifactId>\n"));
        }
        if let Some(version) = &self.version {
            xml.push_str(&format!("  <version>{version}</version>\n"));
        }
        if let Some(packaging) = &self.packaging {
            xml.push_str(&format!("  <packaging>{packaging}</packaging>\n"));
        }
        if !self.properties.is_empty() {
            xml.push_str("  <properties>\n");
            for (key, value) in &self.properties {
                xml.push_str(&format!("    <{key}>{value}</{key}>\n"));
            }
            xml.push_str("  </properties>\n");
        }
        if !self.resources.is_empty() {
            xml.push_str("  <build>\n    <resources>\n");
            for directory in &self.resources {
                xml.push_str(&format!(
                    "      <resource>\n        <directory>{directory}</directory>\n      </resource>\n"
                ));
            }
            xml.push_str("    </resources>\n  </build>\n");
        }
        xml.push_str("</project>\n");
        xml
    }
}
