//! Key/value property files
//!
//! Reads `build.properties` at a bundle root and `Properties` files inside
//! resource directories. Both use the Java properties text format.

use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use tracing::debug;

use crate::error::{self, Result};

/// Key naming the bundle's principal class
pub const PRINCIPAL_CLASS_KEY: &str = "principalClass";

/// Key naming the bundle's EOF adaptor class
pub const EO_ADAPTOR_CLASS_NAME_KEY: &str = "eoAdaptorClassName";

/// Parsed property file
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PropertyFile {
    entries: HashMap<String, String>,
}

impl PropertyFile {
    /// Read and parse the property file at `path`
    pub fn read(path: &Path) -> Result<Self> {
        let file = File::open(path).map_err(|e| {
            error::fs::properties_read_failed(path.display().to_string(), e.to_string())
        })?;

        let entries = java_properties::read(BufReader::new(file)).map_err(|e| {
            error::fs::properties_read_failed(path.display().to_string(), e.to_string())
        })?;

        Ok(Self { entries })
    }

    /// Read the property file at `path` if it is present and readable
    ///
    /// A missing, non-regular or unreadable file yields `None`; a file that
    /// opens but fails to parse is an error.
    pub fn read_optional(path: &Path) -> Result<Option<Self>> {
        if !path.is_file() {
            return Ok(None);
        }

        let file = match File::open(path) {
            Ok(file) => file,
            Err(e) => {
                debug!(path = %path.display(), error = %e, "skipping unreadable property file");
                return Ok(None);
            }
        };

        let entries = java_properties::read(BufReader::new(file)).map_err(|e| {
            error::fs::properties_read_failed(path.display().to_string(), e.to_string())
        })?;

        Ok(Some(Self { entries }))
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// Declared principal class, as written
    pub fn principal_class(&self) -> Option<&str> {
        self.get(PRINCIPAL_CLASS_KEY)
    }

    /// Declared EOF adaptor class; an empty value counts as undeclared
    pub fn eo_adaptor_class_name(&self) -> Option<&str> {
        self.get(EO_ADAPTOR_CLASS_NAME_KEY)
            .filter(|name| !name.is_empty())
    }

    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
