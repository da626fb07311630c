//! Properties command implementation

use maven_bundle_adaptor::{BundleAdaptorProvider, Result};

use crate::cli::PropertiesArgs;

pub fn run(adaptor: &dyn BundleAdaptorProvider, args: PropertiesArgs) -> Result<()> {
    let root = super::bundle_root(adaptor, args.path)?;
    let properties = adaptor.properties(&root)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&properties)?);
        return Ok(());
    }

    for (key, value) in &properties {
        println!("{key}={value}");
    }

    Ok(())
}
