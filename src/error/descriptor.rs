//! Project descriptor errors

use super::AdaptorError;

/// Creates a descriptor not found error
pub fn not_found(path: impl Into<String>) -> AdaptorError {
    AdaptorError::DescriptorNotFound { path: path.into() }
}

/// Creates a descriptor read failed error
pub fn read_failed(path: impl Into<String>, reason: impl Into<String>) -> AdaptorError {
    AdaptorError::DescriptorReadFailed {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a malformed descriptor error
pub fn malformed(path: impl Into<String>, reason: impl Into<String>) -> AdaptorError {
    AdaptorError::MalformedDescriptor {
        path: path.into(),
        reason: reason.into(),
    }
}

/// Creates a missing version error
pub fn missing_version(path: impl Into<String>) -> AdaptorError {
    AdaptorError::MissingVersion { path: path.into() }
}

/// Creates a circular parent reference error
pub fn parent_cycle(chain: impl Into<String>) -> AdaptorError {
    AdaptorError::ParentCycle {
        chain: chain.into(),
    }
}
