use std::path::{Path, PathBuf};

use beangen_bean::{BeanGenerator, GenerationReport};
use beangen_core::WriteResult;
use beangen_manifest::BeangenToml;
use clap::Args;
use eyre::{Context, Result};

use super::UnwrapOrExit;

#[derive(Args)]
pub struct GenerateCommand {
    /// Path to beangen.toml (defaults to ./beangen.toml)
    #[arg(short, long, default_value = "beangen.toml")]
    pub config: PathBuf,

    /// Output directory (overrides [output].directory)
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Preview generated code without writing to disk
    #[arg(long)]
    pub dry_run: bool,
}

impl GenerateCommand {
    /// Run the generate command
    pub fn run(&self) -> Result<()> {
        let beangen_toml = BeangenToml::open(&self.config).unwrap_or_exit();
        log::debug!(
            "loaded {} with {} beans",
            beangen_toml.path().display(),
            beangen_toml.manifest().beans.len()
        );
        let generator = BeanGenerator::new(beangen_toml.manifest());

        if self.dry_run {
            return self.run_preview(&generator);
        }

        let output = self
            .output
            .clone()
            .unwrap_or_else(|| beangen_toml.output_dir());
        let report = generator
            .generate(&output)
            .wrap_err("Failed to generate code")?;

        Self::print_summary(&report, &output);
        Ok(())
    }

    fn print_summary(report: &GenerationReport, output: &Path) {
        println!("Generated: {}/", output.display());
        for (path, result) in &report.files {
            let marker = match result {
                WriteResult::Written => '+',
                WriteResult::Unchanged => '=',
            };
            let shown = path.strip_prefix(output).unwrap_or(path);
            println!("  {} {}", marker, shown.display());
        }

        println!();
        println!(
            "{} written, {} unchanged",
            report.count(WriteResult::Written),
            report.count(WriteResult::Unchanged)
        );
    }

    fn run_preview(&self, generator: &BeanGenerator<'_>) -> Result<()> {
        let files = generator.preview()?;

        for file in &files {
            println!("── {} ──", file.path);
            println!("{}", file.content);
        }

        println!("── Summary ──");
        println!("{} files would be generated", files.len());

        Ok(())
    }
}
