//! Core text-emission engine for beangen.
//!
//! This crate provides the buffer layer every generator writes through:
//!
//! - [`MultiBuffer`] - N independently selectable text buffers
//! - [`IndentingBuffer`] - per-buffer automatic line indentation
//! - [`CodeWriter`] - the shared writing surface, implemented by every writer
//! - [`Selected`] - scoped buffer selection that restores on drop
//! - [`DiffingFileWriter`] - an output stream that only touches bytes that changed
//! - [`GeneratedFile`] - writing generated artifacts to disk

mod buffer;
mod diffing;
mod error;
mod file;
mod indent;
mod indenting;
mod writer;

pub use buffer::{MultiBuffer, Position};
pub use diffing::DiffingFileWriter;
pub use error::{Error, Result};
pub use file::{GeneratedFile, WriteResult};
pub use indent::Indent;
pub use indenting::IndentingBuffer;
pub use writer::{CodeWriter, Selected};
