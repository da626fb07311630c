//! File system errors

use super::AdaptorError;

/// Creates a missing compiled output directory error
pub fn missing_output_directory(path: impl Into<String>) -> AdaptorError {
    AdaptorError::MissingOutputDirectory { path: path.into() }
}

/// Creates a properties file read error
pub fn properties_read_failed(path: impl Into<String>, reason: impl Into<String>) -> AdaptorError {
    AdaptorError::PropertiesReadFailed {
        path: path.into(),
        reason: reason.into(),
    }
}
