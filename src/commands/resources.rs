//! Resources command implementation

use maven_bundle_adaptor::{BundleAdaptorProvider, Result};

use crate::cli::PathArgs;

pub fn run(adaptor: &dyn BundleAdaptorProvider, args: PathArgs) -> Result<()> {
    let root = super::bundle_root(adaptor, args.path)?;

    for path in adaptor.resource_paths(&root)? {
        println!("{}", path.display());
    }

    Ok(())
}
