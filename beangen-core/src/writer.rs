//! The writing surface shared by every buffer-backed writer.

use std::{
    fmt::{self, Display},
    io,
    ops::{Deref, DerefMut},
};

use crate::{MultiBuffer, Position, Result};

/// Shared API of every multi-buffer writer.
///
/// Implementors provide access to their [`MultiBuffer`] and a single
/// [`emit`](CodeWriter::emit) hook through which all text flows; layered
/// policies (indentation, sections, tag stacks) hook in there instead of
/// overriding each write method.
pub trait CodeWriter {
    /// The underlying buffers.
    fn buffers(&self) -> &MultiBuffer;

    /// The underlying buffers, mutably.
    fn buffers_mut(&mut self) -> &mut MultiBuffer;

    /// Append text to the selected buffer, applying this writer's policy.
    fn emit(&mut self, text: &str);

    /// Switch the selected buffer.
    fn select(&mut self, index: usize) -> Result<()> {
        self.buffers_mut().select(index)
    }

    /// Select `index`, remembering the previous selection.
    fn push_select(&mut self, index: usize) -> Result<()> {
        self.buffers_mut().push_select(index)
    }

    /// Restore the selection saved by the matching `push_select`.
    fn pop_select(&mut self) -> Result<()> {
        self.buffers_mut().pop_select()
    }

    /// Select `index` until the returned guard is dropped.
    ///
    /// ```
    /// use beangen_core::{CodeWriter, MultiBuffer};
    ///
    /// let mut out = MultiBuffer::new(2);
    /// {
    ///     let mut body = out.select_scoped(1).unwrap();
    ///     body.write("later");
    /// }
    /// out.write("first ");
    /// assert_eq!(out.contents(), "first later");
    /// ```
    fn select_scoped(&mut self, index: usize) -> Result<Selected<'_, Self>>
    where
        Self: Sized,
    {
        self.push_select(index)?;
        Ok(Selected { writer: self })
    }

    /// Run `f` with `index` selected, restoring the selection afterwards.
    fn with_selected<R, F>(&mut self, index: usize, f: F) -> Result<R>
    where
        Self: Sized,
        F: FnOnce(&mut Self) -> R,
    {
        let mut guard = self.select_scoped(index)?;
        Ok(f(&mut *guard))
    }

    /// Index of the selected buffer.
    fn current_buffer(&self) -> usize {
        self.buffers().current()
    }

    /// Number of buffers.
    fn buffer_count(&self) -> usize {
        self.buffers().buffer_count()
    }

    /// Write a string.
    fn write(&mut self, text: &str) -> &mut Self
    where
        Self: Sized,
    {
        self.emit(text);
        self
    }

    /// Write the textual form of any displayable value (numbers, booleans,
    /// characters, other objects).
    fn write_value(&mut self, value: impl Display) -> &mut Self
    where
        Self: Sized,
    {
        self.emit(&value.to_string());
        self
    }

    /// Write several strings as one piece of text.
    fn write_parts(&mut self, parts: &[&str]) -> &mut Self
    where
        Self: Sized,
    {
        self.emit(&parts.concat());
        self
    }

    /// Start a separated list; the first `write_next` emits no separator.
    fn set_first(&mut self, separator: &str) -> &mut Self
    where
        Self: Sized,
    {
        self.buffers_mut().set_first(separator);
        self
    }

    /// Write one list item, preceded by the separator unless it is the first.
    fn write_next(&mut self, text: &str) -> &mut Self
    where
        Self: Sized,
    {
        if !self.buffers_mut().take_first() {
            let separator = self.buffers().separator().to_string();
            self.emit(&separator);
        }
        self.emit(text);
        self
    }

    /// Write one list item built from several strings.
    fn write_next_parts(&mut self, parts: &[&str]) -> &mut Self
    where
        Self: Sized,
    {
        self.write_next(&parts.concat())
    }

    /// True if any buffer holds text.
    fn any_content(&self) -> bool {
        self.buffers().any_content()
    }

    /// Capture the write cursor of the selected buffer.
    fn current_position(&self) -> Position {
        self.buffers().current_position()
    }

    /// Roll the selected buffer back to `position`.
    fn truncate_at_position(&mut self, position: Position) -> Result<()> {
        self.buffers_mut().truncate_at_position(position)
    }

    /// Pre-size every buffer for `additional` more bytes.
    fn ensure_capacity(&mut self, additional: usize) {
        self.buffers_mut().ensure_capacity(additional);
    }

    /// Flush all buffers, in index order, to a byte stream.
    fn write_to<W: io::Write>(&self, out: &mut W) -> Result<()>
    where
        Self: Sized,
    {
        self.buffers().write_to_stream(out)?;
        Ok(())
    }

    /// Flush all buffers, in index order, to a formatter-style sink.
    fn write_to_fmt<W: fmt::Write>(&self, out: &mut W) -> Result<()>
    where
        Self: Sized,
    {
        self.buffers().write_to_fmt(out)?;
        Ok(())
    }

    /// Append all buffers, in index order, to a string.
    fn write_to_string(&self, out: &mut String) {
        self.buffers().write_to_string(out);
    }

    /// Concatenation of all buffers.
    fn contents(&self) -> String {
        self.buffers().contents()
    }
}

impl CodeWriter for MultiBuffer {
    fn buffers(&self) -> &MultiBuffer {
        self
    }

    fn buffers_mut(&mut self) -> &mut MultiBuffer {
        self
    }

    fn emit(&mut self, text: &str) {
        self.append(text);
    }
}

/// A temporary buffer selection; the previous selection is restored on drop.
pub struct Selected<'a, W: CodeWriter> {
    writer: &'a mut W,
}

impl<W: CodeWriter> Deref for Selected<'_, W> {
    type Target = W;

    fn deref(&self) -> &W {
        self.writer
    }
}

impl<W: CodeWriter> DerefMut for Selected<'_, W> {
    fn deref_mut(&mut self) -> &mut W {
        self.writer
    }
}

impl<W: CodeWriter> Drop for Selected<'_, W> {
    fn drop(&mut self) {
        if let Err(e) = self.writer.pop_select() {
            log::warn!("scoped selection could not be restored: {}", e);
        }
    }
}

/// Implement [`std::fmt::Write`] for a [`CodeWriter`] by routing text through
/// its `emit` hook, so `write!`/`writeln!` work on it.
#[macro_export]
macro_rules! impl_fmt_write {
    ($ty:ty) => {
        impl ::std::fmt::Write for $ty {
            fn write_str(&mut self, s: &str) -> ::std::fmt::Result {
                $crate::CodeWriter::emit(self, s);
                Ok(())
            }
        }
    };
}

impl_fmt_write!(MultiBuffer);
