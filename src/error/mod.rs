//! Error types and handling for the bundle adaptor
//!
//! Uses `thiserror` for error definitions and `miette` for pretty diagnostics.
//!
//! This module is organized into sub-modules by error domain:
//! - [`descriptor`]: Project descriptor (pom.xml) errors
//! - [`fs`]: File system errors
//! - [`config`]: Adaptor configuration errors

pub mod config;
pub mod descriptor;
pub mod fs;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for bundle adaptor operations
#[derive(Error, Diagnostic, Debug)]
pub enum AdaptorError {
    // Descriptor errors
    #[error("Project descriptor not found: {path}")]
    #[diagnostic(
        code(maven_bundle_adaptor::descriptor::not_found),
        help("A bundle root must contain a pom.xml")
    )]
    DescriptorNotFound { path: String },

    #[error("Failed to read project descriptor: {path}: {reason}")]
    #[diagnostic(code(maven_bundle_adaptor::descriptor::read_failed))]
    DescriptorReadFailed { path: String, reason: String },

    #[error("Malformed project descriptor: {path}: {reason}")]
    #[diagnostic(code(maven_bundle_adaptor::descriptor::malformed))]
    MalformedDescriptor { path: String, reason: String },

    #[error("No version declared for project: {path}")]
    #[diagnostic(
        code(maven_bundle_adaptor::descriptor::missing_version),
        help("Declare <version> in the pom.xml or in its <parent> reference")
    )]
    MissingVersion { path: String },

    #[error("Circular parent reference detected: {chain}")]
    #[diagnostic(
        code(maven_bundle_adaptor::descriptor::parent_cycle),
        help("Check the <relativePath> of each <parent> in the chain")
    )]
    ParentCycle { chain: String },

    // Bundle errors
    #[error("Path is not inside a WebObjects bundle: {path}")]
    #[diagnostic(
        code(maven_bundle_adaptor::bundle::not_adaptable),
        help("The nearest pom.xml must declare woapplication or woframework packaging")
    )]
    NotAdaptable { path: String },

    // File system errors
    #[error("Compiled output directory not found: {path}")]
    #[diagnostic(
        code(maven_bundle_adaptor::fs::missing_output_directory),
        help("Compile the project first (e.g. 'mvn compile')")
    )]
    MissingOutputDirectory { path: String },

    #[error("Failed to read properties file: {path}: {reason}")]
    #[diagnostic(code(maven_bundle_adaptor::fs::properties_read_failed))]
    PropertiesReadFailed { path: String, reason: String },

    #[error("IO error: {message}")]
    #[diagnostic(code(maven_bundle_adaptor::fs::io_error))]
    IoError { message: String },

    // Configuration errors
    #[error("Configuration file not found: {path}")]
    #[diagnostic(code(maven_bundle_adaptor::config::not_found))]
    ConfigNotFound { path: String },

    #[error("Failed to read configuration file: {path}")]
    #[diagnostic(code(maven_bundle_adaptor::config::read_failed))]
    ConfigReadFailed { path: String, reason: String },

    #[error("Failed to parse configuration file: {path}: {reason}")]
    #[diagnostic(code(maven_bundle_adaptor::config::parse_failed))]
    ConfigParseFailed { path: String, reason: String },
}

impl From<std::io::Error> for AdaptorError {
    fn from(err: std::io::Error) -> Self {
        AdaptorError::IoError {
            message: err.to_string(),
        }
    }
}

impl From<walkdir::Error> for AdaptorError {
    fn from(err: walkdir::Error) -> Self {
        let message = match err.path() {
            Some(path) => format!("{}: {}", path.display(), err),
            None => err.to_string(),
        };
        AdaptorError::IoError { message }
    }
}

impl From<serde_yaml::Error> for AdaptorError {
    fn from(err: serde_yaml::Error) -> Self {
        AdaptorError::ConfigParseFailed {
            path: "unknown".to_string(),
            reason: err.to_string(),
        }
    }
}

impl From<serde_json::Error> for AdaptorError {
    fn from(err: serde_json::Error) -> Self {
        AdaptorError::IoError {
            message: err.to_string(),
        }
    }
}

/// Result type alias using miette for error handling
pub type Result<T> = miette::Result<T, AdaptorError>;
