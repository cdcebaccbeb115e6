//! The sectioned Java source writer.

use std::{borrow::Cow, fmt, io};

use beangen_core::{CodeWriter, Indent, IndentingBuffer, MultiBuffer, Position, Result};
use indexmap::IndexMap;

use crate::{Access, Method, Options};

/// Number of sections a fresh [`JavaWriter`] starts with.
pub const SECTION_COUNT: usize = 5;

/// Column past which [`JavaWriter::begin_for`] wraps its clauses.
pub const RIGHT_MARGIN: usize = 76;

/// Buffer index of every named section of a Java source file.
///
/// Sections are flushed in index order. [`JavaWriter::insert_section_after`]
/// shifts the indices that follow a new section, so always read them from
/// the writer instead of hardcoding them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Sections {
    /// Package, imports and the class declaration line.
    pub header: usize,
    /// Field declarations.
    pub decl: usize,
    /// Constructors.
    pub constructor: usize,
    /// Methods.
    pub body: usize,
    /// The closing brace of the class.
    pub trailer: usize,
}

impl Default for Sections {
    fn default() -> Self {
        Self {
            header: 0,
            decl: 1,
            constructor: 2,
            body: 3,
            trailer: 4,
        }
    }
}

impl Sections {
    fn shift_after(&mut self, index: usize) {
        for section in [
            &mut self.header,
            &mut self.decl,
            &mut self.constructor,
            &mut self.body,
            &mut self.trailer,
        ] {
            if *section > index {
                *section += 1;
            }
        }
    }
}

/// Java source writer with five sections and a method registry.
///
/// Writes go to the selected section (the body after construction) with
/// brace-driven indentation. Higher-level emitters cover declarations,
/// methods and control flow; every method or constructor signature they
/// write is recorded in a registry keyed by `name(parameters)` unless
/// storing is turned off.
///
/// Flushing escapes everything outside printable ASCII as `\uXXXX`.
///
/// # Example
///
/// ```
/// use beangen_java::{CodeWriter, JavaWriter, Options};
///
/// let mut jw = JavaWriter::new();
/// jw.write_class_decl("Point", None, None, Options::PUBLIC);
/// jw.begin_method("getX", "", None, "int", Options::PUBLIC);
/// jw.write_eol("return x");
/// jw.end_method();
///
/// assert_eq!(
///     jw.to_source_string(),
///     "public class Point {\n\tpublic int getX() {\n\t\treturn x;\n\t}\n\n}\n"
/// );
/// assert!(jw.has_method("getX()"));
/// ```
#[derive(Debug, Clone)]
pub struct JavaWriter {
    out: IndentingBuffer,
    sections: Sections,
    store_methods: bool,
    methods: IndexMap<String, Method>,
}

impl Default for JavaWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl JavaWriter {
    /// Create a writer indenting with tabs.
    pub fn new() -> Self {
        Self::with_indent(Indent::JAVA)
    }

    /// Create a writer with the given indentation.
    pub fn with_indent(indent: Indent) -> Self {
        let mut writer = Self {
            out: IndentingBuffer::new(SECTION_COUNT, indent),
            sections: Sections::default(),
            store_methods: true,
            methods: IndexMap::new(),
        };
        writer.select_body();
        writer
    }

    /// Current section indices.
    pub fn sections(&self) -> Sections {
        self.sections
    }

    /// Insert a new section right after section `after` and return its
    /// index. Section indices greater than `after` move up by one.
    pub fn insert_section_after(&mut self, after: usize) -> Result<usize> {
        self.out.insert_additional_buffers(after, 1)?;
        self.sections.shift_after(after);
        log::trace!("inserted section {} into {:?}", after + 1, self.sections);
        Ok(after + 1)
    }

    fn select_section(&mut self, index: usize) -> &mut Self {
        let selected = self.out.select(index);
        debug_assert!(selected.is_ok(), "section {} is out of range", index);
        self
    }

    fn in_section(&mut self, index: usize, f: impl FnOnce(&mut Self)) {
        let previous = self.current_buffer();
        self.select_section(index);
        f(self);
        self.select_section(previous);
    }

    pub fn select_header(&mut self) -> &mut Self {
        self.select_section(self.sections.header)
    }

    pub fn select_decl(&mut self) -> &mut Self {
        self.select_section(self.sections.decl)
    }

    pub fn select_constructor(&mut self) -> &mut Self {
        self.select_section(self.sections.constructor)
    }

    pub fn select_body(&mut self) -> &mut Self {
        self.select_section(self.sections.body)
    }

    pub fn select_trailer(&mut self) -> &mut Self {
        self.select_section(self.sections.trailer)
    }

    /// Whether emitted signatures are recorded in the method registry.
    pub fn store_methods(&self) -> bool {
        self.store_methods
    }

    pub fn set_store_methods(&mut self, store: bool) {
        self.store_methods = store;
    }

    /// Back to five empty sections with the body selected. The method
    /// registry is cleared; the indent string is kept.
    pub fn reset(&mut self) {
        let indent = self.out.indent_str().to_string();
        self.out = IndentingBuffer::new(SECTION_COUNT, Indent::JAVA);
        self.out.set_indent_str(indent);
        self.sections = Sections::default();
        self.methods.clear();
        self.select_body();
    }

    // Indentation

    pub fn indent_str(&self) -> &str {
        self.out.indent_str()
    }

    pub fn set_indent_str(&mut self, indent: impl Into<String>) {
        self.out.set_indent_str(indent);
    }

    pub fn indent_level(&self) -> usize {
        self.out.indent_level()
    }

    pub fn set_indent_level(&mut self, level: usize) {
        self.out.set_indent_level(level);
    }

    pub fn indent_right(&mut self) -> &mut Self {
        self.out.indent_right();
        self
    }

    pub fn indent_left(&mut self) -> &mut Self {
        self.out.indent_left();
        self
    }

    pub fn indent_one_level(&mut self) -> &mut Self {
        self.out.indent_one_level();
        self
    }

    /// End the line without the brace heuristic.
    pub fn cr(&mut self) -> &mut Self {
        self.out.cr();
        self
    }

    pub fn writecr(&mut self, text: &str) -> &mut Self {
        self.out.writecr(text);
        self
    }

    pub fn writecr_parts(&mut self, parts: &[&str]) -> &mut Self {
        self.out.writecr_parts(parts);
        self
    }

    // Statements and declarations

    /// Open a block: `{` and a newline.
    pub fn begin(&mut self) -> &mut Self {
        self.write("{\n")
    }

    /// Close a block: `}` and a newline.
    pub fn end(&mut self) -> &mut Self {
        self.write("}\n")
    }

    /// Close a block and stay on the same line.
    pub fn end_no_cr(&mut self) -> &mut Self {
        self.indent_left();
        self.write("}")
    }

    /// End a statement: `;` and a newline.
    pub fn eol(&mut self) -> &mut Self {
        self.write(";\n")
    }

    pub fn write_eol(&mut self, statement: &str) -> &mut Self {
        self.write(statement);
        self.eol()
    }

    pub fn write_eol_parts(&mut self, parts: &[&str]) -> &mut Self {
        self.write_parts(parts);
        self.eol()
    }

    /// Write `text` as `//` line comments.
    pub fn comment(&mut self, text: &str) -> &mut Self {
        for line in lines_of(text) {
            if line.is_empty() {
                self.write("//");
            } else {
                self.write("// ").write(line);
            }
            self.write("\n");
        }
        self
    }

    /// Write `text` as a `/** ... */` block. A `*/` inside the text is
    /// written as `* /`.
    pub fn big_comment(&mut self, text: &str) -> &mut Self {
        self.write("/**\n");
        for line in lines_of(text) {
            if line.is_empty() {
                self.write(" *");
            } else {
                self.write(" * ").write(&line.replace("*/", "* /"));
            }
            // Separate write so braces at the end of comment text never
            // move the indentation.
            self.write("\n");
        }
        self.write(" */\n")
    }

    /// Write the package statement into the header section.
    pub fn write_package(&mut self, package: &str) -> &mut Self {
        self.in_section(self.sections.header, |jw| {
            jw.write_eol_parts(&["package ", package]).cr();
        });
        self
    }

    /// Write an import statement into the header section.
    pub fn write_import(&mut self, import: &str) -> &mut Self {
        self.in_section(self.sections.header, |jw| {
            jw.write_eol_parts(&["import ", import]);
        });
        self
    }

    /// Write the access keyword followed by a space, if there is one.
    pub fn write_access(&mut self, access: Access) -> &mut Self {
        if let Some(keyword) = access.keyword() {
            self.write_parts(&[keyword, " "]);
        }
        self
    }

    /// Write the access, `static` and `final` keywords of `options`, in
    /// that order and separated by spaces. Returns whether anything was
    /// written, so callers know whether a separating space is needed.
    pub fn write_options(&mut self, options: Options) -> bool {
        let mut keywords = Vec::with_capacity(3);
        keywords.extend(options.access().keyword());
        if options.contains(Options::STATIC) {
            keywords.push("static");
        }
        if options.contains(Options::FINAL) {
            keywords.push("final");
        }
        if keywords.is_empty() {
            return false;
        }
        self.write(&keywords.join(" "));
        true
    }

    /// Write the class declaration into the header section and its closing
    /// brace into the trailer section, then select the body.
    ///
    /// Every section between header and trailer is indented one level
    /// deeper than the declaration.
    pub fn write_class_decl(
        &mut self,
        name: &str,
        extends: Option<&str>,
        implements: Option<&str>,
        options: Options,
    ) -> &mut Self {
        self.select_header();
        if self.write_options(options) {
            self.write(" ");
        }
        self.write_parts(&["class ", name]);
        if let Some(extends) = extends.filter(|e| !e.is_empty()) {
            self.write_parts(&[" extends ", extends]);
        }
        if let Some(implements) = implements.filter(|i| !i.is_empty()) {
            self.write_parts(&[" implements ", implements]);
        }
        self.write(" {\n");

        let level = self.indent_level();
        let Sections {
            header, trailer, ..
        } = self.sections;
        for section in header + 1..trailer {
            self.select_section(section).set_indent_level(level);
        }
        self.select_trailer().set_indent_level(level);
        self.end();
        self.select_body()
    }

    // Methods

    /// Write a signature without a body and record it in the registry.
    pub fn write_method(
        &mut self,
        name: &str,
        parameters: &str,
        exceptions: Option<&str>,
        return_type: &str,
        options: Options,
    ) -> &mut Self {
        let method = Method::new(name, parameters, exceptions, return_type, options);
        self.write_signature(&method);
        if self.store_methods {
            self.add_to_method_store(method);
        }
        self
    }

    pub(crate) fn write_signature(&mut self, method: &Method) {
        if self.write_options(method.options()) {
            self.write(" ");
        }
        if !method.is_constructor() {
            self.write_parts(&[method.return_type(), " "]);
        }
        self.write_parts(&[method.name(), "(", method.parameters(), ")"]);
        if let Some(exceptions) = method.exceptions() {
            self.write_parts(&[" throws ", exceptions]);
        }
    }

    /// Write a signature and open its body.
    pub fn begin_method(
        &mut self,
        name: &str,
        parameters: &str,
        exceptions: Option<&str>,
        return_type: &str,
        options: Options,
    ) -> &mut Self {
        self.write_method(name, parameters, exceptions, return_type, options);
        self.write(" ");
        self.begin()
    }

    /// Write a constructor signature and open its body.
    pub fn begin_constructor(
        &mut self,
        name: &str,
        parameters: &str,
        exceptions: Option<&str>,
        options: Options,
    ) -> &mut Self {
        self.begin_method(name, parameters, exceptions, "", options)
    }

    /// Close a method body and leave a blank line.
    pub fn end_method(&mut self) -> &mut Self {
        self.end();
        self.cr()
    }

    /// Record `method`. A method with the same signature is replaced in
    /// place, keeping its position in the listing.
    pub fn add_to_method_store(&mut self, method: Method) {
        let signature = method.signature();
        if let Some(previous) = self.methods.insert(signature, method) {
            log::debug!("replaced stored method {}", previous.signature());
        }
    }

    /// Stored methods in registration order.
    pub fn stored_methods(&self) -> impl Iterator<Item = &Method> {
        self.methods.values()
    }

    pub fn stored_method(&self, signature: &str) -> Option<&Method> {
        self.methods.get(signature)
    }

    pub fn has_method(&self, signature: &str) -> bool {
        self.methods.contains_key(signature)
    }

    // Control flow

    pub fn begin_if(&mut self, predicate: &str) -> &mut Self {
        self.write_parts(&["if (", predicate, ") "]);
        self.begin()
    }

    /// `} else ` on the closing line of the previous block.
    pub fn end_else(&mut self) -> &mut Self {
        self.end_no_cr();
        self.write(" else ")
    }

    pub fn end_else_begin(&mut self) -> &mut Self {
        self.end_else();
        self.begin()
    }

    pub fn end_else_begin_if(&mut self, predicate: &str) -> &mut Self {
        self.end_else();
        self.begin_if(predicate)
    }

    pub fn begin_while(&mut self, predicate: &str) -> &mut Self {
        self.write_parts(&["while (", predicate, ") "]);
        self.begin()
    }

    pub fn begin_do(&mut self) -> &mut Self {
        self.write("do ");
        self.begin()
    }

    pub fn end_do_while(&mut self, predicate: &str) -> &mut Self {
        self.end_no_cr();
        self.write_parts(&[" while (", predicate, ")"]);
        self.eol()
    }

    pub fn begin_try(&mut self) -> &mut Self {
        self.write("try ");
        self.begin()
    }

    pub fn end_catch(&mut self, parameter: &str) -> &mut Self {
        self.end_no_cr();
        self.write_parts(&[" catch (", parameter, ") "]);
        self.begin()
    }

    pub fn end_finally_begin(&mut self) -> &mut Self {
        self.end_no_cr();
        self.write(" finally ");
        self.begin()
    }

    /// Open a `for` loop, moving the predicate or increment clause to a
    /// continuation line when the estimated column would pass
    /// [`RIGHT_MARGIN`].
    ///
    /// The column estimate counts a tab as eight columns and every other
    /// character as one.
    pub fn begin_for(&mut self, init: &str, predicate: &str, next: &str) -> &mut Self {
        let mut column = self.line_start_column() + "for (".len() + char_len(init);
        self.write_parts(&["for (", init, ";"]);
        let mut wrapped = false;
        for (clause, terminator) in [(predicate, ";"), (next, ")")] {
            if column + 1 + char_len(clause) > RIGHT_MARGIN {
                self.cr();
                if !wrapped {
                    self.indent_right();
                    wrapped = true;
                }
                column = self.line_start_column();
            } else {
                self.write(" ");
                column += 1;
            }
            self.write_parts(&[clause, terminator]);
            column += char_len(clause) + 1;
        }
        if wrapped {
            self.indent_left();
        }
        self.write(" ");
        self.begin()
    }

    fn line_start_column(&self) -> usize {
        self.out.indent_width() * self.indent_level()
    }

    // Output

    /// All sections, in order, with non-ASCII characters escaped.
    pub fn to_source_string(&self) -> String {
        escape_non_ascii(&self.out.contents()).into_owned()
    }

    /// Append every section and stored method of this writer to `other`.
    pub fn merge_into(&self, other: &mut JavaWriter) {
        self.out.buffers().merge_into(other.out.buffers_mut());
        for method in self.methods.values() {
            other.add_to_method_store(method.clone());
        }
    }
}

impl CodeWriter for JavaWriter {
    fn buffers(&self) -> &MultiBuffer {
        self.out.buffers()
    }

    fn buffers_mut(&mut self) -> &mut MultiBuffer {
        self.out.buffers_mut()
    }

    fn emit(&mut self, text: &str) {
        self.out.emit(text);
    }

    fn truncate_at_position(&mut self, position: Position) -> Result<()> {
        self.out.truncate_at_position(position)
    }

    fn write_to<W: io::Write>(&self, out: &mut W) -> Result<()> {
        out.write_all(self.to_source_string().as_bytes())?;
        Ok(())
    }

    fn write_to_fmt<W: fmt::Write>(&self, out: &mut W) -> Result<()> {
        out.write_str(&self.to_source_string())?;
        Ok(())
    }

    fn write_to_string(&self, out: &mut String) {
        out.push_str(&self.to_source_string());
    }

    fn contents(&self) -> String {
        self.to_source_string()
    }
}

beangen_core::impl_fmt_write!(JavaWriter);

/// Escape every character above U+007F, and control characters other than
/// line breaks, tabs and form feeds, as `\uXXXX` UTF-16 escapes.
///
/// ```
/// use beangen_java::escape_non_ascii;
///
/// assert_eq!(escape_non_ascii("caf\u{e9}"), "caf\\u00e9");
/// assert_eq!(escape_non_ascii("plain"), "plain");
/// ```
pub fn escape_non_ascii(text: &str) -> Cow<'_, str> {
    if !text.chars().any(needs_escape) {
        return Cow::Borrowed(text);
    }
    let mut escaped = String::with_capacity(text.len() + 16);
    let mut units = [0u16; 2];
    for c in text.chars() {
        if needs_escape(c) {
            for unit in c.encode_utf16(&mut units) {
                escaped.push_str(&format!("\\u{:04x}", unit));
            }
        } else {
            escaped.push(c);
        }
    }
    Cow::Owned(escaped)
}

fn needs_escape(c: char) -> bool {
    !c.is_ascii() || (c.is_ascii_control() && !matches!(c, '\n' | '\r' | '\t' | '\x0c'))
}

fn lines_of(text: &str) -> impl Iterator<Item = &str> {
    let text = if text.is_empty() { "\n" } else { text };
    text.lines()
}

fn char_len(text: &str) -> usize {
    text.chars().count()
}
