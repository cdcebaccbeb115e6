use std::path::PathBuf;

use beangen_manifest::BeangenToml;
use clap::Args;
use eyre::Result;

use super::UnwrapOrExit;

#[derive(Args)]
pub struct CheckCommand {
    /// Path to beangen.toml (defaults to ./beangen.toml)
    #[arg(short, long, default_value = "beangen.toml")]
    pub config: PathBuf,
}

impl CheckCommand {
    /// Run the check command
    pub fn run(&self) -> Result<()> {
        let beangen_toml = BeangenToml::open(&self.config).unwrap_or_exit();
        let manifest = beangen_toml.manifest();

        println!("✓ {} is valid\n", self.config.display());

        let count = manifest.beans.len();
        println!("  {} bean{}:", count, if count == 1 { "" } else { "s" });
        for (name, bean) in &manifest.beans {
            let properties = bean.properties.len();
            println!(
                "    {} ({} propert{})",
                manifest.qualified_name(name),
                properties,
                if properties == 1 { "y" } else { "ies" }
            );
        }

        println!("\n  Output: {}", beangen_toml.output_dir().display());
        Ok(())
    }
}
