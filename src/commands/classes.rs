//! Classes command implementation

use maven_bundle_adaptor::{BundleAdaptorProvider, Result};

use crate::cli::PathArgs;

pub fn run(adaptor: &dyn BundleAdaptorProvider, args: PathArgs) -> Result<()> {
    let root = super::bundle_root(adaptor, args.path)?;

    for name in adaptor.class_names(&root)? {
        println!("{}", name?);
    }

    Ok(())
}
