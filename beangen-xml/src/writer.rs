use std::borrow::Cow;

use beangen_core::{CodeWriter, Indent, IndentingBuffer, MultiBuffer, Position};

use crate::{Error, Result};

const HEADER: usize = 0;
const BODY: usize = 1;

#[derive(Debug, Clone, PartialEq, Eq)]
struct Prolog {
    version: String,
    encoding: String,
}

/// Writer for indented XML documents.
///
/// The prolog goes into a header section; everything else is written to
/// the body. Each start tag indents the lines after it by one level and is
/// pushed onto a tag stack that [`end_tag`](XmlWriter::end_tag) pops.
///
/// ```
/// use beangen_xml::XmlWriter;
///
/// let mut xw = XmlWriter::new();
/// xw.start_tag(None, "person", Some("id=\"1\""), true);
/// xw.write_element("name", "Ann & Bo");
/// xw.end_tag(true)?;
///
/// assert_eq!(
///     xw.finish()?,
///     "<?xml version='1.0' encoding='UTF-8' ?>\n\
///      <person id=\"1\">\n  <name>Ann &amp; Bo</name>\n</person>\n"
/// );
/// # Ok::<(), beangen_xml::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct XmlWriter {
    out: IndentingBuffer,
    prolog: Option<Prolog>,
    tags: Vec<String>,
}

impl Default for XmlWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl XmlWriter {
    /// A writer with the `<?xml version='1.0' encoding='UTF-8' ?>` prolog.
    pub fn new() -> Self {
        Self::with_prolog("1.0", "UTF-8")
    }

    /// A writer with a prolog naming `version` and `encoding`.
    pub fn with_prolog(version: &str, encoding: &str) -> Self {
        Self::build(Some(Prolog {
            version: version.to_string(),
            encoding: encoding.to_string(),
        }))
    }

    /// A writer without a prolog, for fragments.
    pub fn without_prolog() -> Self {
        Self::build(None)
    }

    fn build(prolog: Option<Prolog>) -> Self {
        let mut out = IndentingBuffer::new(2, Indent::XML);
        out.set_brace_indent(false);
        let mut writer = Self {
            out,
            prolog,
            tags: Vec::new(),
        };
        writer.write_prolog();
        writer
    }

    fn write_prolog(&mut self) {
        if let Some(prolog) = &self.prolog {
            let line = format!(
                "<?xml version='{}' encoding='{}' ?>",
                prolog.version, prolog.encoding
            );
            let selected = self.out.select(HEADER);
            debug_assert!(selected.is_ok());
            self.out.writecr(&line);
        }
        let selected = self.out.select(BODY);
        debug_assert!(selected.is_ok());
    }

    /// Open a tag: `<ns:name attributes`.
    ///
    /// With `finish` the tag is closed with `>` and a line break, ready for
    /// child elements. Without it the tag stays open for
    /// [`write_attr`](Self::write_attr) and must be completed with
    /// [`finish_start_tag`](Self::finish_start_tag). Either way the tag is
    /// pushed onto the tag stack and the following lines are indented.
    pub fn start_tag(
        &mut self,
        namespace: Option<&str>,
        local_name: &str,
        attributes: Option<&str>,
        finish: bool,
    ) -> &mut Self {
        let name = match namespace.filter(|ns| !ns.is_empty()) {
            Some(ns) => format!("{}:{}", ns, local_name),
            None => local_name.to_string(),
        };
        self.write_parts(&["<", &name]);
        if let Some(attributes) = attributes.map(str::trim).filter(|a| !a.is_empty()) {
            self.write_parts(&[" ", attributes]);
        }
        log::trace!("open <{}> at depth {}", name, self.tags.len());
        self.tags.push(name);
        if finish {
            self.write(">");
            self.out.cr();
        } else {
            self.buffers_mut().set_separator(" ");
        }
        self.out.indent_right();
        self
    }

    /// Write ` name="value"` into a start tag left open by
    /// [`start_tag`](Self::start_tag).
    pub fn write_attr(&mut self, name: &str, value: &str) -> &mut Self {
        let value = escape_attr(value);
        self.write_next_parts(&[name, "=\"", &value, "\""])
    }

    /// Complete an open start tag.
    ///
    /// Without children the tag self-closes with `/>` and is popped from the
    /// tag stack, so no [`end_tag`](Self::end_tag) follows it.
    pub fn finish_start_tag(&mut self, has_children: bool, newline: bool) -> Result<&mut Self> {
        if self.tags.is_empty() {
            return Err(Error::TagStackUnderflow);
        }
        if has_children {
            self.write(">");
        } else {
            self.write("/>");
            self.tags.pop();
            self.out.indent_left();
        }
        if newline {
            self.out.cr();
        }
        Ok(self)
    }

    /// Close the most recently opened tag.
    pub fn end_tag(&mut self, newline: bool) -> Result<&mut Self> {
        let name = self.tags.pop().ok_or(Error::TagStackUnderflow)?;
        self.out.indent_left();
        self.write_parts(&["</", &name, ">"]);
        if newline {
            self.out.cr();
        }
        Ok(self)
    }

    /// Write `<name>text</name>` on its own line. `text` is escaped.
    pub fn write_element(&mut self, name: &str, text: &str) -> &mut Self {
        let text = escape_text(text);
        self.write_parts(&["<", name, ">", &text, "</", name, ">"]);
        self.out.cr();
        self
    }

    /// Write `<!-- text -->` on its own line. Runs of dashes are spaced
    /// apart, since `--` may not appear inside a comment.
    pub fn comment(&mut self, text: &str) -> &mut Self {
        let text = separate_dashes(text);
        self.write_parts(&["<!-- ", &text, " -->"]);
        self.out.cr();
        self
    }

    /// End the line.
    pub fn cr(&mut self) -> &mut Self {
        self.out.cr();
        self
    }

    pub fn indent_level(&self) -> usize {
        self.out.indent_level()
    }

    /// Names of the tags still open, outermost first.
    pub fn open_tags(&self) -> &[String] {
        &self.tags
    }

    /// Empty the document and the tag stack, then write the prolog again.
    pub fn reset(&mut self) {
        self.out.reset();
        self.tags.clear();
        self.write_prolog();
    }

    /// The finished document. Fails if any tag is still open.
    pub fn finish(&self) -> Result<String> {
        if !self.tags.is_empty() {
            return Err(Error::UnclosedTags {
                tags: self.tags.clone(),
            });
        }
        Ok(self.out.contents())
    }
}

impl CodeWriter for XmlWriter {
    fn buffers(&self) -> &MultiBuffer {
        self.out.buffers()
    }

    fn buffers_mut(&mut self) -> &mut MultiBuffer {
        self.out.buffers_mut()
    }

    fn emit(&mut self, text: &str) {
        self.out.emit(text);
    }

    fn truncate_at_position(&mut self, position: Position) -> beangen_core::Result<()> {
        self.out.truncate_at_position(position)
    }
}

beangen_core::impl_fmt_write!(XmlWriter);

/// Escape `&`, `<` and `>` for element content.
pub fn escape_text(text: &str) -> Cow<'_, str> {
    escape(text, |c| match c {
        '&' => Some("&amp;"),
        '<' => Some("&lt;"),
        '>' => Some("&gt;"),
        _ => None,
    })
}

/// Escape markup and quotes for a double- or single-quoted attribute value.
/// Line breaks and tabs become character references so they survive
/// attribute normalization.
pub fn escape_attr(text: &str) -> Cow<'_, str> {
    escape(text, |c| match c {
        '&' => Some("&amp;"),
        '<' => Some("&lt;"),
        '>' => Some("&gt;"),
        '"' => Some("&quot;"),
        '\'' => Some("&apos;"),
        '\n' => Some("&#10;"),
        '\r' => Some("&#13;"),
        '\t' => Some("&#9;"),
        _ => None,
    })
}

fn escape(text: &str, replacement: impl Fn(char) -> Option<&'static str>) -> Cow<'_, str> {
    if !text.chars().any(|c| replacement(c).is_some()) {
        return Cow::Borrowed(text);
    }
    let mut escaped = String::with_capacity(text.len() + 8);
    for c in text.chars() {
        match replacement(c) {
            Some(entity) => escaped.push_str(entity),
            None => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}

fn separate_dashes(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        out.push(c);
        if c == '-' && chars.peek() == Some(&'-') {
            out.push(' ');
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prolog_variants() {
        assert_eq!(
            XmlWriter::with_prolog("1.1", "ISO-8859-1").finish().unwrap(),
            "<?xml version='1.1' encoding='ISO-8859-1' ?>\n"
        );
        assert_eq!(XmlWriter::without_prolog().finish().unwrap(), "");
    }

    #[test]
    fn test_body_written_after_prolog() {
        let mut xw = XmlWriter::new();
        xw.select(0).unwrap();
        xw.write("<!DOCTYPE a>");
        xw.cr();
        xw.select(1).unwrap();
        xw.start_tag(None, "a", None, false);
        xw.finish_start_tag(false, true).unwrap();
        assert_eq!(
            xw.finish().unwrap(),
            "<?xml version='1.0' encoding='UTF-8' ?>\n<!DOCTYPE a>\n<a/>\n"
        );
    }

    #[test]
    fn test_namespace_and_attribute_normalization() {
        let mut xw = XmlWriter::without_prolog();
        xw.start_tag(Some("xs"), "schema", Some("   a=\"1\""), false);
        xw.write_attr("b", "x<\"y\"");
        xw.finish_start_tag(false, false).unwrap();
        assert_eq!(
            xw.finish().unwrap(),
            "<xs:schema a=\"1\" b=\"x&lt;&quot;y&quot;\"/>"
        );
        assert!(xw.open_tags().is_empty());
        assert_eq!(xw.indent_level(), 0);
    }

    #[test]
    fn test_extra_end_tag_fails() {
        let mut xw = XmlWriter::without_prolog();
        xw.start_tag(None, "a", None, true);
        xw.end_tag(true).unwrap();
        assert_eq!(xw.end_tag(true).unwrap_err(), Error::TagStackUnderflow);
        assert_eq!(xw.finish().unwrap(), "<a>\n</a>\n");
    }

    #[test]
    fn test_finish_start_tag_without_open_tag_fails() {
        let mut xw = XmlWriter::without_prolog();
        assert!(xw.finish_start_tag(true, true).is_err());
    }

    #[test]
    fn test_unclosed_tags() {
        let mut xw = XmlWriter::without_prolog();
        xw.start_tag(None, "a", None, true);
        xw.start_tag(Some("p"), "b", None, true);
        assert_eq!(xw.open_tags(), ["a", "p:b"]);
        let err = xw.finish().unwrap_err();
        assert_eq!(err.to_string(), "document finished with 2 open tag(s): a, p:b");
    }

    #[test]
    fn test_braces_in_text_do_not_indent() {
        let mut xw = XmlWriter::without_prolog();
        xw.write_element("code", "if (x) {");
        xw.write_element("code", "}");
        assert_eq!(
            xw.finish().unwrap(),
            "<code>if (x) {</code>\n<code>}</code>\n"
        );
    }

    #[test]
    fn test_comment() {
        let mut xw = XmlWriter::without_prolog();
        xw.comment("a -- b");
        assert_eq!(xw.finish().unwrap(), "<!-- a - - b -->\n");
    }

    #[test]
    fn test_comment_dash_runs() {
        let mut xw = XmlWriter::without_prolog();
        xw.comment("a---b").comment("----");
        let document = xw.finish().unwrap();
        assert_eq!(document, "<!-- a- - -b -->\n<!-- - - - - -->\n");
        for line in document.lines() {
            let body = &line["<!--".len()..line.len() - "-->".len()];
            assert!(!body.contains("--"), "{line}");
        }
    }

    #[test]
    fn test_escape() {
        assert_eq!(escape_text("a < b && c > d"), "a &lt; b &amp;&amp; c &gt; d");
        assert!(matches!(escape_text("plain"), Cow::Borrowed(_)));
        assert_eq!(escape_attr("it's\n"), "it&apos;s&#10;");
    }

    #[test]
    fn test_reset() {
        let mut xw = XmlWriter::new();
        xw.start_tag(None, "a", None, true);
        xw.reset();
        assert!(xw.open_tags().is_empty());
        assert_eq!(
            xw.finish().unwrap(),
            "<?xml version='1.0' encoding='UTF-8' ?>\n"
        );
    }
}
