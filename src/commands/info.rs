//! Info command implementation

use console::Style;
use maven_bundle_adaptor::{BundleAdaptorProvider, BundleMetadata, Result};

use crate::cli::InfoArgs;

pub fn run(adaptor: &dyn BundleAdaptorProvider, args: InfoArgs) -> Result<()> {
    let root = super::bundle_root(adaptor, args.path)?;
    let metadata = adaptor.bundle_info(&root)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&metadata)?);
        return Ok(());
    }

    print_metadata(&root.display().to_string(), &metadata);
    Ok(())
}

fn print_metadata(root: &str, metadata: &BundleMetadata) {
    let label = Style::new().bold();

    println!(
        "  {} {}",
        Style::new().bold().yellow().apply_to(&metadata.executable),
        Style::new().dim().apply_to(&metadata.version)
    );
    println!("    {} {}", label.apply_to("Root:"), root);
    println!(
        "    {} {} ({})",
        label.apply_to("Type:"),
        Style::new().cyan().apply_to(metadata.packaging),
        metadata.packaging.type_code()
    );
    if let Some(principal_class) = &metadata.principal_class {
        println!("    {} {}", label.apply_to("Principal class:"), principal_class);
    }
    if let Some(adaptor_class) = &metadata.eo_adaptor_class_name {
        println!("    {} {}", label.apply_to("EO adaptor class:"), adaptor_class);
    }
    println!(
        "    {} {}",
        label.apply_to("Components:"),
        if metadata.has_components { "yes" } else { "no" }
    );
}
