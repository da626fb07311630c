//! Domain models for the bundle adaptor
//!
//! This module contains the plain data types handed back to the bundle-loading
//! host. They carry no filesystem access of their own.

pub mod bundle;

pub use bundle::{BundleMetadata, BundlePackaging};
