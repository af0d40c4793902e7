use anyhow::{Context, bail};
use plx_core::schema::SchemaRegistry;

use crate::cli::root_commands::SchemaArgs;
use crate::cli::{GlobalFlags, OutputFormat};

/// Handle `plx schema`.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    let registry = SchemaRegistry::new().context("failed to build schema registry")?;
    let Ok(schema) = registry.get(&args.type_name) else {
        let known = registry.names().collect::<Vec<_>>().join(", ");
        bail!("unknown schema type '{}' (known: {known})", args.type_name);
    };

    let rendered = if flags.format == OutputFormat::Raw {
        serde_json::to_string(schema)?
    } else {
        serde_json::to_string_pretty(schema)?
    };
    println!("{rendered}");
    Ok(())
}
