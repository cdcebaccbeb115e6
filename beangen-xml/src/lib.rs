//! XML document generation for beangen.
//!
//! [`XmlWriter`] writes an optional prolog and balanced, indented elements.
//! Every start tag is tracked on a tag stack, so closing a tag that was
//! never opened, or finishing a document with tags still open, is an error.

mod error;
mod writer;

pub use error::{Error, Result};
pub use writer::{XmlWriter, escape_attr, escape_text};

pub use beangen_core::CodeWriter;
