//! Validation context and utilities for manifest parsing.

use std::sync::Arc;

use beangen_java::is_reserved_word;
use miette::SourceSpan;

use crate::{Result, error::SourceContext};

/// Parsing and validation context that carries source information.
///
/// This struct encapsulates the source content, filename, and current path
/// through the manifest hierarchy, making it easier to pass validation
/// context through nested beans and properties.
///
/// # Example
///
/// ```ignore
/// let ctx = ParseContext::new(src, "beangen.toml");
/// ctx.validate_name("Person", "bean")?;
///
/// let bean = ctx.push("Person");
/// bean.validate_name("age", "property")?;
/// ```
#[derive(Debug, Clone)]
pub struct ParseContext<'a> {
    /// Source context for error reporting (shared across nested contexts)
    source: Arc<SourceContext>,
    /// Path segments for nested validation (e.g., ["Person", "age"])
    path: Vec<&'a str>,
}

impl<'a> ParseContext<'a> {
    /// Create a new parse context with the given source and filename.
    pub fn new(src: &str, filename: &str) -> Self {
        Self {
            source: Arc::new(SourceContext::new(src, filename)),
            path: Vec::new(),
        }
    }

    /// Get the source content.
    pub fn src(&self) -> &str {
        self.source.src()
    }

    /// Get the filename.
    pub fn filename(&self) -> &str {
        self.source.filename()
    }

    /// Get the source context for error creation.
    pub fn source_context(&self) -> &SourceContext {
        &self.source
    }

    /// Push a path segment and return a new context.
    pub fn push(&self, segment: &'a str) -> Self {
        let mut new_path = self.path.clone();
        new_path.push(segment);
        Self {
            source: Arc::clone(&self.source),
            path: new_path,
        }
    }

    /// Get the current path as a dot-separated string.
    pub fn path_string(&self) -> String {
        self.path.join(".")
    }

    /// Get a context description for error messages.
    ///
    /// For example: "property in 'Person'" or just "bean" if no path.
    pub fn context_for(&self, kind: &str) -> String {
        if self.path.is_empty() {
            kind.to_string()
        } else {
            format!("{} in '{}'", kind, self.path_string())
        }
    }

    /// Find the span of a name in the source.
    pub fn find_span(&self, name: &str) -> Option<SourceSpan> {
        find_name_span(self.source.src(), name)
    }

    /// Validate that a name is a usable Java identifier.
    ///
    /// Checks for reserved words and valid identifier format.
    pub fn validate_name(&self, name: &str, kind: &str) -> Result<()> {
        if is_reserved_word(name) {
            return Err(self.source.reserved_word_error(
                name,
                self.context_for(kind),
                self.find_span(name),
            ));
        }

        if let Some(reason) = validate_identifier(name) {
            return Err(self.source.invalid_identifier_error(
                name,
                self.context_for(kind),
                reason,
                self.find_span(name),
            ));
        }

        Ok(())
    }

    /// Validate a dotted Java package name.
    pub fn validate_package(&self, package: &str) -> Result<()> {
        for segment in package.split('.') {
            if segment.is_empty() {
                return Err(self.source.validation_error(
                    format!("package '{}' has an empty segment", package),
                    find_value_span(self.src(), "package", package),
                ));
            }
            self.validate_name(segment, "package segment")?;
        }
        Ok(())
    }

    /// Create a validation error, labelled at `key = value` when it can be
    /// found.
    pub fn value_error(&self, message: impl Into<String>, key: &str, value: &str) -> Box<crate::Error> {
        self.source
            .validation_error(message, find_value_span(self.src(), key, value))
    }
}

/// Find the span of a name in the TOML source
/// Searches for patterns like `.name]`, `.name.`, or `{ name =`
pub(crate) fn find_name_span(src: &str, name: &str) -> Option<SourceSpan> {
    // Table header patterns with leading dot
    // e.g., [beans.Person] or [beans.Person.properties.age]
    let headers = [format!(".{}]", name), format!(".{}.", name)];

    for pattern in &headers {
        if let Some(pos) = src.find(pattern) {
            // +1 to skip the leading dot
            let start = pos + 1;
            return Some(SourceSpan::from((start, name.len())));
        }
    }

    // Inline table patterns
    // e.g., { age = or , age =
    let inline_patterns = [
        (format!("{{ {} ", name), 2usize),
        (format!("{{ {}=", name), 2usize),
        (format!("{{{}=", name), 1usize),
        (format!(", {} ", name), 2usize),
        (format!(", {}=", name), 2usize),
        (format!(",{}=", name), 1usize),
    ];

    for (pattern, skip) in &inline_patterns {
        if let Some(pos) = src.find(pattern) {
            let start = pos + skip;
            return Some(SourceSpan::from((start, name.len())));
        }
    }

    // No fallback - better to have no span than point to wrong location
    None
}

/// Find the span of `value` in an assignment `key = value`, quoted or not.
pub(crate) fn find_value_span(src: &str, key: &str, value: &str) -> Option<SourceSpan> {
    let patterns = [
        format!("{} = \"{}\"", key, value),
        format!("{} = '{}'", key, value),
        format!("{} = {}", key, value),
    ];

    for (i, pattern) in patterns.iter().enumerate() {
        if let Some(pos) = src.find(pattern.as_str()) {
            let quote = usize::from(i < 2);
            let start = pos + key.len() + 3 + quote;
            return Some(SourceSpan::from((start, value.len())));
        }
    }

    None
}

/// Validate that a name is a valid Java identifier.
/// Returns None if valid, Some(reason) if invalid
pub(crate) fn validate_identifier(name: &str) -> Option<&'static str> {
    let mut chars = name.chars();

    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' || c == '$' => {}
        Some(_) => return Some("name must start with a letter, underscore or '$'"),
        None => return Some("name cannot be empty"),
    }

    if chars.any(|c| !(c.is_alphanumeric() || c == '_' || c == '$')) {
        return Some("name must contain only letters, digits, underscores and '$'");
    }

    None
}

/// Validate a Java type reference such as `int`, `java.util.Date` or
/// `java.util.List<String>`.
/// Returns None if valid, Some(reason) if invalid
pub(crate) fn validate_type(ty: &str) -> Option<&'static str> {
    let ty = ty.trim();
    if ty.is_empty() {
        return Some("type cannot be empty");
    }
    let mut depth = 0i32;
    for c in ty.chars() {
        match c {
            '<' => depth += 1,
            '>' => depth -= 1,
            c if c.is_alphanumeric() || matches!(c, '_' | '$' | '.' | ',' | ' ' | '[' | ']' | '?') => {}
            _ => return Some("type contains characters that cannot appear in a Java type"),
        }
        if depth < 0 {
            return Some("type has unbalanced '<' and '>'");
        }
    }
    if depth != 0 {
        return Some("type has unbalanced '<' and '>'");
    }
    None
}
