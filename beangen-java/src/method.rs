use std::cmp::Ordering;

use beangen_core::CodeWriter;

use crate::{JavaWriter, Options};

/// A method or constructor emitted through a [`JavaWriter`].
///
/// Methods are stored in the writer's registry keyed by
/// [`signature`](Method::signature), which is how delegating classes replay
/// signatures and call sites later.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Method {
    name: String,
    parameters: String,
    exceptions: Option<String>,
    return_type: String,
    options: Options,
}

impl Method {
    /// Create a descriptor. An empty `return_type` marks a constructor.
    pub fn new(
        name: impl Into<String>,
        parameters: impl Into<String>,
        exceptions: Option<&str>,
        return_type: impl Into<String>,
        options: Options,
    ) -> Self {
        Self {
            name: name.into(),
            parameters: parameters.into(),
            exceptions: exceptions.filter(|e| !e.is_empty()).map(str::to_string),
            return_type: return_type.into(),
            options,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// The parameter list as written, e.g. `"int index, final String value"`.
    pub fn parameters(&self) -> &str {
        &self.parameters
    }

    pub fn exceptions(&self) -> Option<&str> {
        self.exceptions.as_deref()
    }

    pub fn return_type(&self) -> &str {
        &self.return_type
    }

    pub fn options(&self) -> Options {
        self.options
    }

    /// Registry key: `name(parameters)`.
    pub fn signature(&self) -> String {
        format!("{}({})", self.name, self.parameters)
    }

    pub fn is_static(&self) -> bool {
        self.options.contains(Options::STATIC)
    }

    pub fn is_public(&self) -> bool {
        self.options.access().is_public()
    }

    pub fn is_bean_info(&self) -> bool {
        self.options.contains(Options::BEANINFO)
    }

    pub fn is_unsupported(&self) -> bool {
        self.options.contains(Options::UNSUPPORTED)
    }

    /// Constructors are recorded with an empty return type.
    pub fn is_constructor(&self) -> bool {
        self.return_type.is_empty()
    }

    /// Bare argument names of the parameter list, in order.
    ///
    /// Parameters are split on top-level commas only, so generic types such
    /// as `Map<String, Integer> m` count as one parameter. A leading `final`
    /// and any annotations are skipped, and array brackets written after the
    /// name are dropped.
    pub fn parameter_names(&self) -> Vec<&str> {
        split_top_level(&self.parameters)
            .into_iter()
            .filter_map(parameter_name)
            .collect()
    }

    /// Argument names joined with `", "`, ready for a call site.
    pub fn parameters_no_types(&self) -> String {
        self.parameter_names().join(", ")
    }

    /// Replay this signature (without a body) into `out`. The registry is
    /// not touched.
    pub fn write_method(&self, out: &mut JavaWriter) {
        out.write_signature(self);
    }

    /// Write a call of this method: `name(a, b)`.
    pub fn write_call(&self, out: &mut JavaWriter) {
        out.write_parts(&[&self.name, "("]);
        self.write_parameters_no_types(out);
        out.write(")");
    }

    /// Write the argument names separated by `", "`.
    pub fn write_parameters_no_types(&self, out: &mut JavaWriter) {
        out.write(&self.parameters_no_types());
    }
}

impl Ord for Method {
    fn cmp(&self, other: &Self) -> Ordering {
        self.name
            .cmp(&other.name)
            .then_with(|| self.parameters.cmp(&other.parameters))
            .then_with(|| self.return_type.cmp(&other.return_type))
    }
}

impl PartialOrd for Method {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

fn split_top_level(parameters: &str) -> Vec<&str> {
    let mut parts = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    for (i, c) in parameters.char_indices() {
        match c {
            '<' | '(' | '[' => depth += 1,
            '>' | ')' | ']' => depth = depth.saturating_sub(1),
            ',' if depth == 0 => {
                parts.push(&parameters[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    parts.push(&parameters[start..]);
    parts
}

fn parameter_name(parameter: &str) -> Option<&str> {
    let name = parameter
        .split_whitespace()
        .filter(|token| *token != "final" && !token.starts_with('@'))
        .next_back()?;
    Some(name.trim_end_matches("[]"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn method(parameters: &str) -> Method {
        Method::new("m", parameters, None, "void", Options::PUBLIC)
    }

    #[test]
    fn test_parameter_names() {
        assert_eq!(
            method("int index, final String value").parameter_names(),
            vec!["index", "value"]
        );
        assert!(method("").parameter_names().is_empty());
    }

    #[test]
    fn test_parameter_names_with_generics() {
        let m = method("java.util.Map<String, Integer> map, int[] values, @Nullable Object o");
        assert_eq!(m.parameters_no_types(), "map, values, o");
    }

    #[test]
    fn test_parameter_names_with_c_style_array() {
        assert_eq!(method("String args[]").parameter_names(), vec!["args"]);
    }

    #[test]
    fn test_classification() {
        let ctor = Method::new("Person", "", None, "", Options::PUBLIC);
        assert!(ctor.is_constructor());
        assert!(ctor.is_public());

        let m = Method::new(
            "read",
            "java.io.Reader r",
            Some("java.io.IOException"),
            "Person",
            Options::PRIVATE | Options::STATIC | Options::IO,
        );
        assert!(!m.is_constructor());
        assert!(!m.is_public());
        assert!(m.is_static());
        assert!(!m.is_bean_info());
        assert_eq!(m.exceptions(), Some("java.io.IOException"));
        assert_eq!(m.signature(), "read(java.io.Reader r)");
    }

    #[test]
    fn test_empty_exceptions_are_dropped() {
        let m = Method::new("f", "", Some(""), "void", Options::PUBLIC);
        assert_eq!(m.exceptions(), None);
    }

    #[test]
    fn test_ordering() {
        let mut methods = vec![
            Method::new("setName", "String value", None, "void", Options::PUBLIC),
            Method::new("getName", "", None, "String", Options::PUBLIC),
            Method::new("getAge", "", None, "int", Options::PUBLIC),
            Method::new("getAge", "int index", None, "int", Options::PUBLIC),
        ];
        methods.sort();
        let keys: Vec<_> = methods.iter().map(Method::signature).collect();
        assert_eq!(
            keys,
            ["getAge()", "getAge(int index)", "getName()", "setName(String value)"]
        );
    }
}
