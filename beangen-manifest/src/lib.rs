//! `beangen.toml` manifest parsing and validation.
//!
//! Errors are [`miette`] diagnostics labelled with the offending span of
//! the manifest source.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod manifest;

pub use error::{Error, Result, SourceContext};
pub use manifest::{
    Bean, BeangenToml, Manifest, OutputConfig, ParseContext, Property, parse_manifest,
    to_kebab_case,
};
