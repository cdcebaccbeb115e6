//! Automatic line indentation on top of [`MultiBuffer`].

use crate::{
    CodeWriter, Indent, MultiBuffer, Position, Result, buffer::LineState, impl_fmt_write, indent,
};

/// A [`MultiBuffer`] that indents every line it writes.
///
/// Each buffer keeps its own indent level. Indentation is inserted lazily,
/// right before the first character that follows a line break, so a line
/// composed of many writes is indented exactly once and blank lines carry no
/// trailing whitespace.
///
/// Complete lines (text followed by `\n`) also drive the level: a line that
/// starts or ends with `}` is dedented before it is written, and a line that
/// ends with `{` indents the lines after it. The check is purely textual, so
/// braces inside string literals or comments at those positions mis-trigger.
///
/// # Example
///
/// ```
/// use beangen_core::{CodeWriter, IndentingBuffer, Indent};
///
/// let mut out = IndentingBuffer::new(1, Indent::Spaces(4));
/// out.write("if (x) {\n").write("y();\n").write("}\n");
/// assert_eq!(out.contents(), "if (x) {\n    y();\n}\n");
/// ```
#[derive(Debug, Clone)]
pub struct IndentingBuffer {
    out: MultiBuffer,
    indent: String,
    braces: bool,
}

impl IndentingBuffer {
    /// Create a writer with `count` buffers and the given indentation.
    pub fn new(count: usize, indent: Indent) -> Self {
        Self {
            out: MultiBuffer::new(count),
            indent: indent.as_str().to_string(),
            braces: true,
        }
    }

    /// The string written once per indent level.
    pub fn indent_str(&self) -> &str {
        &self.indent
    }

    /// Replace the indent string (any text, e.g. `"  "` or `"\t"`).
    pub fn set_indent_str(&mut self, indent: impl Into<String>) {
        self.indent = indent.into();
    }

    /// Estimated display width of one indent level, counting tabs as
    /// eight columns.
    pub fn indent_width(&self) -> usize {
        indent::display_width(&self.indent)
    }

    /// Whether `{` and `}` at line boundaries change the indent level.
    pub fn brace_indent(&self) -> bool {
        self.braces
    }

    /// Turn the brace heuristic on or off. With it off, only
    /// [`indent_right`](Self::indent_right) and
    /// [`indent_left`](Self::indent_left) change the level.
    pub fn set_brace_indent(&mut self, enabled: bool) {
        self.braces = enabled;
    }

    fn line(&self) -> &LineState {
        self.out.line()
    }

    fn line_mut(&mut self) -> &mut LineState {
        self.out.line_mut()
    }

    /// Indent level of the selected buffer.
    pub fn indent_level(&self) -> usize {
        self.line().level
    }

    /// Set the indent level of the selected buffer.
    pub fn set_indent_level(&mut self, level: usize) {
        self.line_mut().level = level;
    }

    /// True when the next character starts a fresh line of the selected buffer.
    pub fn at_line_start(&self) -> bool {
        self.line().pending
    }

    /// Indent subsequent lines of the selected buffer one more level.
    pub fn indent_right(&mut self) -> &mut Self {
        self.line_mut().level += 1;
        self
    }

    /// Indent subsequent lines of the selected buffer one level less.
    pub fn indent_left(&mut self) -> &mut Self {
        let current = self.out.current();
        let line = self.line_mut();
        if line.level == 0 {
            log::warn!("indent level of buffer {} is already 0", current);
        } else {
            line.level -= 1;
        }
        self
    }

    /// Write the indent string once, inline.
    pub fn indent_one_level(&mut self) -> &mut Self {
        let indent = self.indent.clone();
        self.append_indented(&indent);
        self
    }

    /// End the current line without looking at braces.
    pub fn cr(&mut self) -> &mut Self {
        self.out.append("\n");
        self.line_mut().pending = true;
        self
    }

    /// Write `text`, then end the line.
    pub fn writecr(&mut self, text: &str) -> &mut Self {
        self.emit(text);
        self.cr()
    }

    /// Write several strings as one piece of text, then end the line.
    pub fn writecr_parts(&mut self, parts: &[&str]) -> &mut Self {
        self.emit(&parts.concat());
        self.cr()
    }

    /// Insert `count` empty buffers right after `offset`, each starting at
    /// indent level 0.
    pub fn insert_additional_buffers(&mut self, offset: usize, count: usize) -> Result<()> {
        self.out.insert_additional_buffers(offset, count)
    }

    /// Empty every buffer and reset all indentation.
    pub fn reset(&mut self) {
        self.out.reset();
    }

    /// Apply pending indentation, then append `text` verbatim.
    fn append_indented(&mut self, text: &str) {
        if text.is_empty() {
            return;
        }
        let LineState { level, pending } = *self.line();
        if pending {
            for _ in 0..level {
                self.out.append(&self.indent);
            }
            self.line_mut().pending = false;
        }
        self.out.append(text);
    }

    /// Write one complete line whose trailing newline has been stripped.
    fn write_line(&mut self, body: &str) {
        if !self.braces {
            self.append_indented(body);
            self.cr();
            return;
        }
        if body.starts_with('}') || body.ends_with('}') {
            self.indent_left();
        }
        self.append_indented(body);
        self.cr();
        if body.ends_with('{') {
            self.indent_right();
        }
    }
}

impl CodeWriter for IndentingBuffer {
    fn buffers(&self) -> &MultiBuffer {
        &self.out
    }

    fn buffers_mut(&mut self) -> &mut MultiBuffer {
        &mut self.out
    }

    fn emit(&mut self, text: &str) {
        let mut rest = text;
        while let Some(end) = rest.find('\n') {
            self.write_line(&rest[..end]);
            rest = &rest[end + 1..];
        }
        self.append_indented(rest);
    }

    fn truncate_at_position(&mut self, position: Position) -> Result<()> {
        self.out.truncate_at_position(position)?;
        let pending = matches!(self.out.last_char(), None | Some('\n'));
        self.line_mut().pending = pending;
        Ok(())
    }
}

impl_fmt_write!(IndentingBuffer);
