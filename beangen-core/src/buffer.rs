//! A fixed set of switchable in-memory text buffers.

use std::{fmt, io};

use crate::{Error, Result};

/// A write cursor captured from the selected buffer.
///
/// Positions are tied to the buffer they were taken from; truncating
/// while a different buffer is selected is rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    buffer: usize,
    offset: usize,
}

impl Position {
    /// Index of the buffer this position belongs to.
    pub fn buffer(&self) -> usize {
        self.buffer
    }

    /// Byte offset inside that buffer.
    pub fn offset(&self) -> usize {
        self.offset
    }
}

/// Line bookkeeping of one buffer, kept next to its text so that buffer
/// insertion and reset never leave it out of step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct LineState {
    pub(crate) level: usize,
    /// A line break was emitted and its indentation has not been written yet.
    pub(crate) pending: bool,
}

impl Default for LineState {
    fn default() -> Self {
        Self {
            level: 0,
            pending: true,
        }
    }
}

#[derive(Debug, Clone, Default)]
struct Buffer {
    text: String,
    line: LineState,
}

/// N independent text buffers, one of which is selected for writing.
///
/// Writes always append to the selected buffer. Flushing concatenates every
/// buffer in index order, regardless of the order the writes happened in.
///
/// # Example
///
/// ```
/// use beangen_core::{CodeWriter, MultiBuffer};
///
/// let mut out = MultiBuffer::new(2);
/// out.select(1).unwrap();
/// out.write("B");
/// out.select(0).unwrap();
/// out.write("A");
/// assert_eq!(out.contents(), "AB");
/// ```
#[derive(Debug, Clone)]
pub struct MultiBuffer {
    buffers: Vec<Buffer>,
    current: usize,
    selection_stack: Vec<usize>,
    first: bool,
    separator: String,
}

impl MultiBuffer {
    /// Create a writer with `count` empty buffers (at least one).
    pub fn new(count: usize) -> Self {
        Self {
            buffers: vec![Buffer::default(); count.max(1)],
            current: 0,
            selection_stack: Vec::new(),
            first: true,
            separator: String::new(),
        }
    }

    /// Number of buffers.
    pub fn buffer_count(&self) -> usize {
        self.buffers.len()
    }

    /// Index of the selected buffer.
    pub fn current(&self) -> usize {
        self.current
    }

    /// Contents of one buffer.
    pub fn buffer(&self, index: usize) -> Option<&str> {
        self.buffers.get(index).map(|b| b.text.as_str())
    }

    /// Iterate over all buffers in flush order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.buffers.iter().map(|b| b.text.as_str())
    }

    fn check_index(&self, index: usize) -> Result<()> {
        if index < self.buffers.len() {
            Ok(())
        } else {
            Err(Error::BufferOutOfRange {
                index,
                count: self.buffers.len(),
            })
        }
    }

    /// Switch the selected buffer.
    pub fn select(&mut self, index: usize) -> Result<()> {
        self.check_index(index)?;
        log::trace!("select buffer {} (was {})", index, self.current);
        self.current = index;
        Ok(())
    }

    /// Select `index`, remembering the current selection for [`pop_select`].
    ///
    /// [`pop_select`]: MultiBuffer::pop_select
    pub fn push_select(&mut self, index: usize) -> Result<()> {
        self.check_index(index)?;
        self.selection_stack.push(self.current);
        self.current = index;
        Ok(())
    }

    /// Restore the selection saved by the matching [`push_select`].
    ///
    /// [`push_select`]: MultiBuffer::push_select
    pub fn pop_select(&mut self) -> Result<()> {
        let previous = self
            .selection_stack
            .pop()
            .ok_or(Error::EmptySelectionStack)?;
        self.current = previous;
        Ok(())
    }

    /// Depth of the selection stack.
    pub fn selection_depth(&self) -> usize {
        self.selection_stack.len()
    }

    /// Append text to the selected buffer with no further processing.
    pub fn append(&mut self, text: &str) {
        self.buffers[self.current].text.push_str(text);
    }

    pub(crate) fn line(&self) -> &LineState {
        &self.buffers[self.current].line
    }

    pub(crate) fn line_mut(&mut self) -> &mut LineState {
        &mut self.buffers[self.current].line
    }

    /// Last character of the selected buffer.
    pub fn last_char(&self) -> Option<char> {
        self.buffers[self.current].text.chars().next_back()
    }

    /// Start a new separated list: the next [`take_first`] returns true.
    ///
    /// [`take_first`]: MultiBuffer::take_first
    pub fn set_first(&mut self, separator: impl Into<String>) {
        self.first = true;
        self.separator = separator.into();
    }

    /// Continue a separated list: every following item is preceded by
    /// `separator`.
    pub fn set_separator(&mut self, separator: impl Into<String>) {
        self.first = false;
        self.separator = separator.into();
    }

    /// Separator of the current list.
    pub fn separator(&self) -> &str {
        &self.separator
    }

    /// Returns whether the next list item is the first one, and clears the flag.
    pub fn take_first(&mut self) -> bool {
        std::mem::replace(&mut self.first, false)
    }

    /// True if any buffer holds text.
    pub fn any_content(&self) -> bool {
        self.buffers.iter().any(|b| !b.text.is_empty())
    }

    /// Total length of all buffers in bytes.
    pub fn len(&self) -> usize {
        self.buffers.iter().map(|b| b.text.len()).sum()
    }

    /// True if every buffer is empty.
    pub fn is_empty(&self) -> bool {
        !self.any_content()
    }

    /// Capture the write cursor of the selected buffer.
    pub fn current_position(&self) -> Position {
        Position {
            buffer: self.current,
            offset: self.buffers[self.current].text.len(),
        }
    }

    /// Discard everything written to the selected buffer after `position`.
    pub fn truncate_at_position(&mut self, position: Position) -> Result<()> {
        if position.buffer != self.current {
            return Err(Error::PositionMismatch {
                expected: position.buffer,
                current: self.current,
            });
        }
        let buffer = &mut self.buffers[self.current].text;
        if position.offset > buffer.len() || !buffer.is_char_boundary(position.offset) {
            return Err(Error::PositionOutOfRange {
                buffer: position.buffer,
                offset: position.offset,
                len: buffer.len(),
            });
        }
        buffer.truncate(position.offset);
        Ok(())
    }

    /// Reserve room for `additional` more bytes in every buffer.
    pub fn ensure_capacity(&mut self, additional: usize) {
        for buffer in &mut self.buffers {
            buffer.text.reserve(additional);
        }
    }

    /// Insert `count` empty buffers right after `offset`.
    ///
    /// The selection and the selection stack keep pointing at the same
    /// buffers, but every index above `offset` shifts by `count`.
    pub fn insert_additional_buffers(&mut self, offset: usize, count: usize) -> Result<()> {
        self.check_index(offset)?;
        let at = offset + 1;
        self.buffers
            .splice(at..at, std::iter::repeat_n(Buffer::default(), count));
        let shift = |index: &mut usize| {
            if *index >= at {
                *index += count;
            }
        };
        shift(&mut self.current);
        self.selection_stack.iter_mut().for_each(shift);
        log::debug!(
            "inserted {} buffers after {}, now {}",
            count,
            offset,
            self.buffers.len()
        );
        Ok(())
    }

    /// Empty every buffer and reset the selection to buffer 0.
    pub fn reset(&mut self) {
        self.buffers.fill(Buffer::default());
        self.current = 0;
        self.selection_stack.clear();
        self.first = true;
        self.separator.clear();
    }

    /// Concatenate all buffers into a new string.
    pub fn contents(&self) -> String {
        let mut out = String::with_capacity(self.len());
        self.write_to_string(&mut out);
        out
    }

    /// Append all buffers, in index order, to `out`.
    pub fn write_to_string(&self, out: &mut String) {
        for buffer in &self.buffers {
            out.push_str(&buffer.text);
        }
    }

    /// Write all buffers, in index order, to a formatter-style sink.
    pub fn write_to_fmt<W: fmt::Write + ?Sized>(&self, out: &mut W) -> fmt::Result {
        for buffer in &self.buffers {
            out.write_str(&buffer.text)?;
        }
        Ok(())
    }

    /// Write all buffers, in index order, to a byte stream as UTF-8.
    pub fn write_to_stream<W: io::Write + ?Sized>(&self, out: &mut W) -> io::Result<()> {
        for buffer in &self.buffers {
            out.write_all(buffer.text.as_bytes())?;
        }
        log::debug!("flushed {} bytes from {} buffers", self.len(), self.buffers.len());
        Ok(())
    }

    /// Append each buffer to the buffer with the same index in `other`.
    ///
    /// When `other` has fewer buffers, the surplus buffers are folded into
    /// its last buffer. Surplus buffers in `other` are left untouched.
    pub fn merge_into(&self, other: &mut MultiBuffer) {
        let last = other.buffers.len() - 1;
        for (index, buffer) in self.buffers.iter().enumerate() {
            other.buffers[index.min(last)].text.push_str(&buffer.text);
        }
    }
}

impl Default for MultiBuffer {
    fn default() -> Self {
        Self::new(1)
    }
}
