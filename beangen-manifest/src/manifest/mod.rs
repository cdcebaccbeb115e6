//! Manifest types and parsing for beangen.toml files.

mod bean;
mod file;
mod output;
mod parse;
mod validate;

pub use bean::{Bean, Property, to_kebab_case};
pub use file::BeangenToml;
use indexmap::IndexMap;
pub use output::OutputConfig;
pub use parse::parse_manifest;
use serde::Deserialize;
pub use validate::ParseContext;

/// Root manifest for beangen.toml
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Manifest {
    /// Where and how generated files are written
    #[serde(default)]
    pub output: OutputConfig,

    /// Beans to generate, in declaration order
    #[serde(default)]
    pub beans: IndexMap<String, Bean>,
}

impl Manifest {
    /// Look up a bean by name.
    pub fn bean(&self, name: &str) -> Option<&Bean> {
        self.beans.get(name)
    }

    /// Fully qualified class name of a bean, using the output package.
    pub fn qualified_name(&self, bean: &str) -> String {
        match &self.output.package {
            Some(package) => format!("{}.{}", package, bean),
            None => bean.to_string(),
        }
    }
}
