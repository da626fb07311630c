//! Maven bundle adaptor
//!
//! Lets a WebObjects bundle loader treat Maven projects as application and
//! framework bundles. Given any path inside a project, the adaptor finds the
//! enclosing bundle root, reads its `pom.xml` and reports the bundle's
//! metadata, compiled classes, resource directories and properties.
//!
//! ```no_run
//! use std::path::Path;
//! use maven_bundle_adaptor::{AdaptorRegistry, BundleAdaptorProvider};
//!
//! let registry = AdaptorRegistry::with_defaults();
//! let path = Path::new("/work/MyApp/Components");
//! if let Some(adaptor) = registry.adaptor_for(path) {
//!     let root = adaptor.adaptor_bundle_path(path)?;
//!     let info = adaptor.bundle_info(&adaptor.fs_bundle_path(&root))?;
//!     println!("{} {}", info.executable, info.version);
//! }
//! # Ok::<(), maven_bundle_adaptor::AdaptorError>(())
//! ```

pub mod adaptor;
pub mod build_properties;
pub mod config;
pub mod descriptor;
pub mod domain;
pub mod error;
pub mod resolver;

pub use adaptor::{AdaptorRegistry, BundleAdaptorProvider, MavenBundleAdaptor};
pub use config::AdaptorConfig;
pub use descriptor::ProjectDescriptor;
pub use domain::{BundleMetadata, BundlePackaging};
pub use error::{AdaptorError, Result};
