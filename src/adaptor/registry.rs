//! Adaptor registry
//!
//! Providers are consulted in registration order; the first one that can
//! adapt a path handles it.

use std::path::Path;

use tracing::debug;

use super::{BundleAdaptorProvider, MavenBundleAdaptor};

/// Registry of bundle adaptor providers
pub struct AdaptorRegistry {
    providers: Vec<Box<dyn BundleAdaptorProvider>>,
}

impl AdaptorRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            providers: Vec::new(),
        }
    }

    /// Create a registry with the built-in providers
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(MavenBundleAdaptor::new());
        registry
    }

    /// Append a provider; earlier registrations take precedence
    pub fn register<P>(&mut self, provider: P)
    where
        P: BundleAdaptorProvider + 'static,
    {
        self.providers.push(Box::new(provider));
    }

    /// First provider able to adapt `bundle_path`
    pub fn adaptor_for(&self, bundle_path: &Path) -> Option<&dyn BundleAdaptorProvider> {
        let found = self
            .providers
            .iter()
            .find(|p| p.is_adaptable(bundle_path))
            .map(|p| &**p);

        if found.is_none() {
            debug!(path = %bundle_path.display(), "no adaptor accepts path");
        }
        found
    }

    pub fn providers(&self) -> impl Iterator<Item = &dyn BundleAdaptorProvider> {
        self.providers.iter().map(|p| &**p)
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }
}

impl Default for AdaptorRegistry {
    fn default() -> Self {
        Self::with_defaults()
    }
}
