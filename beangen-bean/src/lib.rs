//! Java bean generation for beangen.
//!
//! [`BeanGenerator`] turns every bean of a [`Manifest`](beangen_manifest::Manifest)
//! into a Java class, plus an optional delegator class and sample XML
//! document, using the section writers of `beangen-java` and `beangen-xml`.

mod generator;
mod naming;

pub mod files;

pub use generator::{BeanGenerator, GenerationReport, PreviewFile};
