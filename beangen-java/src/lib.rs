//! Java source generation for beangen.
//!
//! - [`JavaWriter`] - a five-section, indentation-aware Java source buffer
//! - [`Method`] / [`Options`] - the method registry and modifier encoding
//! - [`convert`] - expressions for converting between Java types
//! - [`ClassCatalog`] - what is known about JDK classes
//! - [`is_reserved_word`] - Java keyword table

mod catalog;
pub mod convert;
mod keywords;
mod method;
mod options;
mod writer;

pub use catalog::{ClassCatalog, ClassInfo};
pub use keywords::{JAVA_KEYWORDS, is_reserved_word};
pub use method::Method;
pub use options::{Access, MethodSemantic, Options};
pub use writer::{JavaWriter, RIGHT_MARGIN, SECTION_COUNT, Sections, escape_non_ascii};

/// Re-exported so callers can use the writer API without a direct
/// dependency on `beangen-core`.
pub use beangen_core::{CodeWriter, Indent};
