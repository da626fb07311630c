//! Project descriptor resolution
//!
//! The resolver answers the questions a bundle-loading host asks about a path:
//!
//! - [`locate`]: which bundle root, if any, encloses the path
//! - [`metadata`]: identity, version and classification of a bundle
//! - [`classes`]: the compiled classes a bundle provides
//! - [`resources`]: the resource directories, including inherited ones
//! - [`properties`]: the merged `Properties` of those resource directories
//!
//! Every function reads the filesystem afresh; nothing is cached.

pub mod classes;
pub mod locate;
pub mod metadata;
pub mod properties;
pub mod resources;

pub use classes::{ClassNames, list_compiled_classes};
pub use locate::{adaptor_bundle_path, is_adaptable, locate};
pub use metadata::{extract_metadata, has_components};
pub use properties::bundle_properties;
pub use resources::{resource_directories, resource_paths};
