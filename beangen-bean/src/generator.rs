use std::path::{Path, PathBuf};

use beangen_core::{GeneratedFile, WriteResult};
use beangen_manifest::Manifest;
use eyre::{Result, WrapErr};

use crate::files::{BeanClass, DelegatorClass, XmlSample};

/// Generates Java beans, delegators and sample documents from a manifest.
pub struct BeanGenerator<'a> {
    manifest: &'a Manifest,
}

/// A generated file for preview
#[derive(Debug)]
pub struct PreviewFile {
    /// Relative path from output directory
    pub path: String,
    /// File content
    pub content: String,
}

/// What happened to each file during generation, in generation order.
#[derive(Debug, Default)]
pub struct GenerationReport {
    pub files: Vec<(PathBuf, WriteResult)>,
}

impl GenerationReport {
    /// Number of files that ended with `result`.
    pub fn count(&self, result: WriteResult) -> usize {
        self.files.iter().filter(|(_, r)| *r == result).count()
    }

    /// Paths whose content changed on disk.
    pub fn written(&self) -> impl Iterator<Item = &Path> {
        self.files
            .iter()
            .filter(|(_, r)| *r == WriteResult::Written)
            .map(|(path, _)| path.as_path())
    }
}

impl<'a> BeanGenerator<'a> {
    pub fn new(manifest: &'a Manifest) -> Self {
        Self { manifest }
    }

    /// Render every file without writing to disk.
    pub fn preview(&self) -> Result<Vec<PreviewFile>> {
        let files = self.files()?;
        Ok(files
            .iter()
            .map(|file| PreviewFile {
                path: file.path(Path::new("")).display().to_string(),
                content: file.render(),
            })
            .collect())
    }

    /// Write every file below `output_dir`. Files whose content is already
    /// up to date are left untouched.
    pub fn generate(&self, output_dir: &Path) -> Result<GenerationReport> {
        let mut report = GenerationReport::default();
        for file in self.files()? {
            let path = file.path(output_dir);
            let result = file
                .write(output_dir)
                .wrap_err_with(|| format!("failed to write {}", path.display()))?;
            log::info!("{:?} {}", result, path.display());
            report.files.push((path, result));
        }
        Ok(report)
    }

    fn files(&self) -> Result<Vec<Box<dyn GeneratedFile>>> {
        let output = &self.manifest.output;
        let mut files: Vec<Box<dyn GeneratedFile>> = Vec::new();

        for (name, bean) in &self.manifest.beans {
            log::debug!("generating bean {}", name);
            let class = BeanClass::build(name, bean, output)
                .wrap_err_with(|| format!("failed to generate bean {}", name))?;
            let delegator = output
                .delegators
                .then(|| DelegatorClass::new(&class, output));

            files.push(Box::new(class));
            if let Some(delegator) = delegator {
                files.push(Box::new(delegator));
            }
            if output.xml_samples {
                let sample = XmlSample::build(name, self.manifest)
                    .wrap_err_with(|| format!("failed to generate sample document for {}", name))?;
                files.push(Box::new(sample));
            }
        }
        Ok(files)
    }
}
