//! Java expressions for converting values between types.
//!
//! Every function here is a pure string transformation over Java type names
//! and expressions. Type names may be primitive (`int`), simple wrapper or
//! class names (`Integer`, `String`) or fully qualified (`java.lang.Integer`).
//! Unknown types never fail: they pass through unchanged or produce the most
//! conservative expression.

use crate::{ClassCatalog, is_reserved_word};

/// The Java primitive types.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Kind {
    Boolean,
    Byte,
    Char,
    Short,
    Int,
    Long,
    Float,
    Double,
}

impl Kind {
    fn from_primitive(type_name: &str) -> Option<Self> {
        let kind = match type_name.trim() {
            "boolean" => Self::Boolean,
            "byte" => Self::Byte,
            "char" => Self::Char,
            "short" => Self::Short,
            "int" => Self::Int,
            "long" => Self::Long,
            "float" => Self::Float,
            "double" => Self::Double,
            _ => return None,
        };
        Some(kind)
    }

    fn from_wrapper(type_name: &str) -> Option<Self> {
        let type_name = type_name.trim();
        let simple = type_name.strip_prefix("java.lang.").unwrap_or(type_name);
        let kind = match simple {
            "Boolean" => Self::Boolean,
            "Byte" => Self::Byte,
            "Character" => Self::Char,
            "Short" => Self::Short,
            "Integer" => Self::Int,
            "Long" => Self::Long,
            "Float" => Self::Float,
            "Double" => Self::Double,
            _ => return None,
        };
        Some(kind)
    }

    fn primitive(self) -> &'static str {
        match self {
            Self::Boolean => "boolean",
            Self::Byte => "byte",
            Self::Char => "char",
            Self::Short => "short",
            Self::Int => "int",
            Self::Long => "long",
            Self::Float => "float",
            Self::Double => "double",
        }
    }

    fn wrapper(self) -> &'static str {
        match self {
            Self::Boolean => "Boolean",
            Self::Byte => "Byte",
            Self::Char => "Character",
            Self::Short => "Short",
            Self::Int => "Integer",
            Self::Long => "Long",
            Self::Float => "Float",
            Self::Double => "Double",
        }
    }

    fn is_numeric(self) -> bool {
        !matches!(self, Self::Boolean | Self::Char)
    }

    fn null_value(self) -> &'static str {
        match self {
            Self::Boolean => "false",
            Self::Char => "'\\0'",
            Self::Byte | Self::Short | Self::Int | Self::Long => "0",
            Self::Float => "0.0f",
            Self::Double => "0.0",
        }
    }

    fn parse_method(self) -> Option<&'static str> {
        match self {
            Self::Byte => Some("Byte.parseByte"),
            Self::Short => Some("Short.parseShort"),
            Self::Int => Some("Integer.parseInt"),
            Self::Long => Some("Long.parseLong"),
            Self::Float => Some("Float.parseFloat"),
            Self::Double => Some("Double.parseDouble"),
            Self::Boolean | Self::Char => None,
        }
    }
}

fn is_string(type_name: &str) -> bool {
    matches!(type_name.trim(), "String" | "java.lang.String")
}

fn is_object(type_name: &str) -> bool {
    matches!(type_name.trim(), "Object" | "java.lang.Object")
}

/// Matches `qualified` written either fully qualified or by simple name.
fn is_class(type_name: &str, qualified: &str) -> bool {
    let simple = qualified.rsplit('.').next().unwrap_or(qualified);
    let type_name = type_name.trim();
    type_name == qualified || type_name == simple
}

fn is_big_decimal(type_name: &str) -> bool {
    is_class(type_name, "java.math.BigDecimal")
}

fn is_big_integer(type_name: &str) -> bool {
    is_class(type_name, "java.math.BigInteger")
}

/// True for the eight Java primitive types.
pub fn is_primitive_type(type_name: &str) -> bool {
    Kind::from_primitive(type_name).is_some()
}

/// True for the eight primitive wrapper classes, simple or qualified.
pub fn is_wrapper_type(type_name: &str) -> bool {
    Kind::from_wrapper(type_name).is_some()
}

/// True for types whose values never change once created, so copies may
/// share them.
pub fn is_immutable(type_name: &str) -> bool {
    is_primitive_type(type_name)
        || is_wrapper_type(type_name)
        || is_string(type_name)
        || is_big_decimal(type_name)
        || is_big_integer(type_name)
        || is_class(type_name, "java.net.URI")
        || is_class(type_name, "java.net.URL")
        || is_class(type_name, "java.io.File")
        || is_class(type_name, "java.util.Locale")
        || is_class(type_name, "javax.xml.namespace.QName")
}

/// True when `new T()` is known to compile. Unknown classes answer `false`.
pub fn is_instantiable(type_name: &str) -> bool {
    ClassCatalog::jdk().is_instantiable(type_name)
}

/// True when values of the type can be copied with `clone()`. Arrays are
/// always cloneable; unknown classes answer `false`.
pub fn is_cloneable(type_name: &str) -> bool {
    type_name.trim().ends_with("[]") || ClassCatalog::jdk().is_cloneable(type_name)
}

/// Box a primitive expression: `Integer.valueOf(expr)`, or
/// `new Integer(expr)` without `use_value_of`. Other types pass through.
pub fn to_object(expr: &str, type_name: &str, use_value_of: bool) -> String {
    match Kind::from_primitive(type_name) {
        Some(kind) if use_value_of => format!("{}.valueOf({})", kind.wrapper(), expr),
        Some(kind) => format!("new {}({})", kind.wrapper(), expr),
        None => expr.to_string(),
    }
}

/// The wrapper class of a primitive type; other types pass through.
pub fn to_object_type(type_name: &str) -> String {
    match Kind::from_primitive(type_name) {
        Some(kind) => kind.wrapper().to_string(),
        None => type_name.trim().to_string(),
    }
}

/// The primitive type of a wrapper class; other types pass through.
pub fn from_object_type(type_name: &str) -> String {
    match Kind::from_wrapper(type_name) {
        Some(kind) => kind.primitive().to_string(),
        None => type_name.trim().to_string(),
    }
}

/// Convert an `Object` expression back to `type_name`, unboxing primitives.
pub fn from_object(type_name: &str, expr: &str) -> String {
    if let Some(kind) = Kind::from_primitive(type_name) {
        return format!(
            "(({}) {}).{}Value()",
            kind.wrapper(),
            expr,
            kind.primitive()
        );
    }
    if is_object(type_name) {
        return expr.to_string();
    }
    format!("(({}) {})", type_name.trim(), expr)
}

/// A `String` expression for the value of `expr`.
pub fn type_to_string(type_name: &str, expr: &str) -> String {
    if is_primitive_type(type_name) {
        format!("String.valueOf({})", expr)
    } else if is_string(type_name) {
        expr.to_string()
    } else {
        format!("{}.toString()", expr)
    }
}

/// The default value of an uninitialized field of `type_name`.
pub fn null_value_for_type(type_name: &str) -> &'static str {
    Kind::from_primitive(type_name).map_or("null", Kind::null_value)
}

/// An expression for a fresh, empty value of `type_name`.
///
/// Primitives get their zero value, strings `""`, wrappers and big numbers
/// a boxed zero, instantiable classes `new T()`, and everything else `null`.
pub fn gen_new_default(type_name: &str) -> String {
    if let Some(kind) = Kind::from_primitive(type_name) {
        return kind.null_value().to_string();
    }
    if let Some(kind) = Kind::from_wrapper(type_name) {
        return format!("{}.valueOf({})", kind.wrapper(), kind.null_value());
    }
    if is_string(type_name) {
        return "\"\"".to_string();
    }
    if is_big_decimal(type_name) {
        return "java.math.BigDecimal.ZERO".to_string();
    }
    if is_big_integer(type_name) {
        return "java.math.BigInteger.ZERO".to_string();
    }
    if is_instantiable(type_name) {
        return format!("new {}()", type_name.trim());
    }
    "null".to_string()
}

/// An expression parsing the `String` expression `expr` as `type_name`.
///
/// Unrecognized types produce `expr` preceded by a comment naming the type,
/// so the generated code shows where a conversion is missing.
///
/// ```
/// use beangen_java::convert::gen_parse_text;
///
/// assert_eq!(gen_parse_text("int", "s", true), "Integer.parseInt(s)");
/// assert_eq!(gen_parse_text("Long", "s", true), "Long.valueOf(Long.parseLong(s))");
/// ```
pub fn gen_parse_text(type_name: &str, expr: &str, use_value_of: bool) -> String {
    if let Some(kind) = Kind::from_primitive(type_name) {
        return parse_primitive(kind, expr);
    }
    if let Some(kind) = Kind::from_wrapper(type_name) {
        return to_object(&parse_primitive(kind, expr), kind.primitive(), use_value_of);
    }
    let type_name = type_name.trim();
    if is_string(type_name) || is_object(type_name) {
        expr.to_string()
    } else if is_big_decimal(type_name) {
        format!("new java.math.BigDecimal({})", expr)
    } else if is_big_integer(type_name) {
        format!("new java.math.BigInteger({})", expr)
    } else if is_class(type_name, "java.net.URI") {
        format!("new java.net.URI({})", expr)
    } else if is_class(type_name, "java.net.URL") {
        format!("new java.net.URL({})", expr)
    } else if is_class(type_name, "javax.xml.namespace.QName") {
        format!("javax.xml.namespace.QName.valueOf({})", expr)
    } else {
        log::debug!("no text conversion for type {}", type_name);
        format!("/* UNKNOWN type for parsing: {} */ {}", type_name, expr)
    }
}

fn parse_primitive(kind: Kind, expr: &str) -> String {
    match kind.parse_method() {
        Some(method) => format!("{}({})", method, expr),
        None if kind == Kind::Char => format!("({}).charAt(0)", expr),
        None => format!("(\"true\".equals({0}) || \"1\".equals({0}))", expr),
    }
}

/// Exceptions the expression from [`gen_parse_text`] may throw.
pub fn exceptions_from_parsing_text(type_name: &str, fully_qualified: bool) -> Vec<String> {
    let qualified = |name: &str| {
        if fully_qualified {
            name.to_string()
        } else {
            name.rsplit('.').next().unwrap_or(name).to_string()
        }
    };
    let numeric = Kind::from_primitive(type_name)
        .or_else(|| Kind::from_wrapper(type_name))
        .is_some_and(Kind::is_numeric);
    if numeric || is_big_decimal(type_name) || is_big_integer(type_name) {
        vec![qualified("java.lang.NumberFormatException")]
    } else if is_class(type_name, "java.net.URI") {
        vec![qualified("java.net.URISyntaxException")]
    } else if is_class(type_name, "java.net.URL") {
        vec![qualified("java.net.MalformedURLException")]
    } else {
        Vec::new()
    }
}

/// A boolean expression comparing `a` and `b` for equality.
///
/// `float` and `double` compare bit patterns so NaN equals NaN and `0.0`
/// differs from `-0.0`. Objects use `equals`, guarded against a null `a`
/// when `a_can_be_null`.
pub fn gen_equals(type_name: &str, a: &str, b: &str, a_can_be_null: bool) -> String {
    match Kind::from_primitive(type_name) {
        Some(Kind::Float) => format!("(Float.floatToIntBits({}) == Float.floatToIntBits({}))", a, b),
        Some(Kind::Double) => format!(
            "(Double.doubleToLongBits({}) == Double.doubleToLongBits({}))",
            a, b
        ),
        Some(_) => format!("({} == {})", a, b),
        None if a_can_be_null => format!("({0} == null ? {1} == null : {0}.equals({1}))", a, b),
        None => format!("{}.equals({})", a, b),
    }
}

/// An `int` expression ordering `var` against the literal `value`; callers
/// compare it with `0`.
pub fn compare_to_text(var: &str, type_name: &str, value: &str) -> String {
    let literal = instance_from(type_name, value);
    match Kind::from_primitive(type_name) {
        Some(kind) => format!("{}.compare({}, {})", kind.wrapper(), var, literal),
        None => format!("{}.compareTo({})", var, literal),
    }
}

/// An `int` expression suitable for `hashCode()` from a value of
/// `type_name`.
pub fn expr_to_int(type_name: &str, expr: &str) -> String {
    match Kind::from_primitive(type_name) {
        Some(Kind::Boolean) => format!("({} ? 1 : 0)", expr),
        Some(Kind::Byte | Kind::Char | Kind::Short) => format!("((int) {})", expr),
        Some(Kind::Int) => expr.to_string(),
        Some(Kind::Long) => format!("((int) ({0} ^ ({0} >>> 32)))", expr),
        Some(Kind::Float) => format!("Float.floatToIntBits({})", expr),
        Some(Kind::Double) => format!(
            "((int) (Double.doubleToLongBits({0}) ^ (Double.doubleToLongBits({0}) >>> 32)))",
            expr
        ),
        None => format!("({0} == null ? 0 : {0}.hashCode())", expr),
    }
}

/// A Java expression constructing the value `value` of `type_name`.
///
/// ```
/// use beangen_java::convert::instance_from;
///
/// assert_eq!(instance_from("long", "7"), "7L");
/// assert_eq!(instance_from("String", "a\"b"), "\"a\\\"b\"");
/// ```
pub fn instance_from(type_name: &str, value: &str) -> String {
    if let Some(kind) = Kind::from_primitive(type_name) {
        return primitive_literal(kind, value);
    }
    if let Some(kind) = Kind::from_wrapper(type_name) {
        return format!("{}.valueOf({})", kind.wrapper(), primitive_literal(kind, value));
    }
    let quoted = format!("\"{}\"", escape_java_string(value));
    let type_name = type_name.trim();
    if is_string(type_name) {
        quoted
    } else if is_class(type_name, "java.net.URI") {
        format!("java.net.URI.create({})", quoted)
    } else if is_class(type_name, "javax.xml.namespace.QName") {
        format!("javax.xml.namespace.QName.valueOf({})", quoted)
    } else if is_big_decimal(type_name) {
        format!("new java.math.BigDecimal({})", quoted)
    } else if is_big_integer(type_name) {
        format!("new java.math.BigInteger({})", quoted)
    } else {
        format!("new {}({})", type_name, quoted)
    }
}

fn primitive_literal(kind: Kind, value: &str) -> String {
    let value = value.trim();
    match kind {
        Kind::Boolean => match value {
            "1" | "true" => "true".to_string(),
            _ => "false".to_string(),
        },
        Kind::Char => {
            let c = value.chars().next().unwrap_or('\0');
            match c {
                '\'' => "'\\''".to_string(),
                '"' => "'\"'".to_string(),
                _ => format!("'{}'", escape_java_string(c.encode_utf8(&mut [0; 4]))),
            }
        }
        Kind::Byte => format!("(byte) {}", value),
        Kind::Short => format!("(short) {}", value),
        Kind::Int => value.to_string(),
        Kind::Long => format!("{}L", value),
        Kind::Float => format!("{}f", value),
        Kind::Double => format!("{}d", value),
    }
}

/// Escape `text` for use inside a Java string literal.
pub fn escape_java_string(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    let mut units = [0u16; 2];
    for c in text.chars() {
        match c {
            '\\' => escaped.push_str("\\\\"),
            '"' => escaped.push_str("\\\""),
            '\n' => escaped.push_str("\\n"),
            '\r' => escaped.push_str("\\r"),
            '\t' => escaped.push_str("\\t"),
            '\x08' => escaped.push_str("\\b"),
            '\x0c' => escaped.push_str("\\f"),
            c if c.is_ascii() && !c.is_ascii_control() => escaped.push(c),
            c => {
                for unit in c.encode_utf16(&mut units) {
                    escaped.push_str(&format!("\\u{:04x}", unit));
                }
            }
        }
    }
    escaped
}

/// Whether `value` can be parsed as `type_name`.
///
/// Used to validate default values before they are turned into code.
/// Unrecognized types accept any non-empty value.
pub fn check_value_to_type(type_name: &str, value: &str) -> bool {
    let kind = Kind::from_primitive(type_name).or_else(|| Kind::from_wrapper(type_name));
    let value = value.trim();
    match kind {
        Some(Kind::Boolean) => matches!(value, "true" | "false" | "1" | "0"),
        Some(Kind::Char) => {
            let mut chars = value.chars();
            matches!((chars.next(), chars.next()), (Some(c), None) if c.len_utf16() == 1)
        }
        Some(Kind::Byte) => value.parse::<i8>().is_ok(),
        Some(Kind::Short) => value.parse::<i16>().is_ok(),
        Some(Kind::Int) => value.parse::<i32>().is_ok(),
        Some(Kind::Long) => value.parse::<i64>().is_ok(),
        Some(Kind::Float) => is_decimal_literal(value) && value.parse::<f32>().is_ok(),
        Some(Kind::Double) => is_decimal_literal(value) && value.parse::<f64>().is_ok(),
        None if is_big_decimal(type_name) => {
            is_decimal_literal(value) && value.parse::<f64>().is_ok()
        }
        None if is_big_integer(type_name) => {
            let digits = value.strip_prefix(['+', '-']).unwrap_or(value);
            !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit())
        }
        None if is_string(type_name) => true,
        None => !value.is_empty(),
    }
}

fn is_decimal_literal(value: &str) -> bool {
    !value.is_empty()
        && value
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, '+' | '-' | '.' | 'e' | 'E'))
}

/// True when the text form of every value of the type is free of XML
/// markup characters, so it can be written without escaping.
pub fn can_produce_no_xml_meta_chars(type_name: &str) -> bool {
    let kind = Kind::from_primitive(type_name).or_else(|| Kind::from_wrapper(type_name));
    kind.is_some_and(|kind| kind != Kind::Char)
        || is_big_decimal(type_name)
        || is_big_integer(type_name)
}

/// `name`, or `_name` when it is a Java reserved word.
pub fn reserved_word(name: &str) -> String {
    if is_reserved_word(name) {
        format!("_{}", name)
    } else {
        name.to_string()
    }
}

/// The unqualified class name of a type: `java.util.List<String>[]`
/// becomes `List`.
pub fn base_name(type_name: &str) -> &str {
    let type_name = type_name.trim();
    let end = type_name.find(['<', '[']).unwrap_or(type_name.len());
    let type_name = type_name[..end].trim_end();
    type_name.rsplit('.').next().unwrap_or(type_name)
}

/// Upper-case the first character: the accessor suffix of a bean
/// property (`firstName` gives `getFirstName`).
pub fn capitalize(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Initial capacity for a hash map holding `entries` entries with load
/// factor 1.0 and no rehash.
pub fn optimal_hash_map_size(entries: usize) -> usize {
    entries * 4 / 3 + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_object() {
        assert_eq!(to_object("x", "int", true), "Integer.valueOf(x)");
        assert_eq!(to_object("x", "char", false), "new Character(x)");
        assert_eq!(to_object("x", "String", true), "x");
        assert_eq!(to_object("x", "Integer", true), "x");
    }

    #[test]
    fn test_object_types() {
        assert_eq!(to_object_type("boolean"), "Boolean");
        assert_eq!(to_object_type("java.util.Date"), "java.util.Date");
        assert_eq!(from_object_type("java.lang.Character"), "char");
        assert_eq!(from_object_type("Double"), "double");
        assert_eq!(from_object_type("String"), "String");
    }

    #[test]
    fn test_from_object() {
        assert_eq!(from_object("int", "o"), "((Integer) o).intValue()");
        assert_eq!(from_object("boolean", "o"), "((Boolean) o).booleanValue()");
        assert_eq!(from_object("java.lang.Object", "o"), "o");
        assert_eq!(from_object("String", "o"), "((String) o)");
    }

    #[test]
    fn test_type_to_string() {
        assert_eq!(type_to_string("double", "d"), "String.valueOf(d)");
        assert_eq!(type_to_string("java.lang.String", "s"), "s");
        assert_eq!(type_to_string("java.util.Date", "d"), "d.toString()");
    }

    #[test]
    fn test_null_values() {
        assert_eq!(null_value_for_type("boolean"), "false");
        assert_eq!(null_value_for_type("char"), "'\\0'");
        assert_eq!(null_value_for_type("long"), "0");
        assert_eq!(null_value_for_type("float"), "0.0f");
        assert_eq!(null_value_for_type("double"), "0.0");
        assert_eq!(null_value_for_type("Integer"), "null");
    }

    #[test]
    fn test_gen_new_default() {
        assert_eq!(gen_new_default("int"), "0");
        assert_eq!(gen_new_default("Integer"), "Integer.valueOf(0)");
        assert_eq!(gen_new_default("String"), "\"\"");
        assert_eq!(gen_new_default("java.util.ArrayList"), "new java.util.ArrayList()");
        assert_eq!(gen_new_default("java.util.List"), "null");
        assert_eq!(gen_new_default("BigDecimal"), "java.math.BigDecimal.ZERO");
    }

    #[test]
    fn test_gen_parse_text() {
        assert_eq!(
            gen_parse_text("boolean", "s", true),
            "(\"true\".equals(s) || \"1\".equals(s))"
        );
        assert_eq!(gen_parse_text("char", "s", true), "(s).charAt(0)");
        assert_eq!(gen_parse_text("double", "s", true), "Double.parseDouble(s)");
        assert_eq!(
            gen_parse_text("Integer", "s", false),
            "new Integer(Integer.parseInt(s))"
        );
        assert_eq!(
            gen_parse_text("java.math.BigDecimal", "s", true),
            "new java.math.BigDecimal(s)"
        );
        assert_eq!(gen_parse_text("String", "s", true), "s");
        assert_eq!(
            gen_parse_text("QName", "s", true),
            "javax.xml.namespace.QName.valueOf(s)"
        );
        assert_eq!(
            gen_parse_text("com.example.Thing", "s", true),
            "/* UNKNOWN type for parsing: com.example.Thing */ s"
        );
    }

    #[test]
    fn test_exceptions_from_parsing_text() {
        assert_eq!(
            exceptions_from_parsing_text("int", true),
            ["java.lang.NumberFormatException"]
        );
        assert_eq!(
            exceptions_from_parsing_text("Long", false),
            ["NumberFormatException"]
        );
        assert_eq!(
            exceptions_from_parsing_text("java.net.URL", false),
            ["MalformedURLException"]
        );
        assert!(exceptions_from_parsing_text("boolean", true).is_empty());
        assert!(exceptions_from_parsing_text("String", true).is_empty());
    }

    #[test]
    fn test_gen_equals() {
        assert_eq!(
            gen_equals("float", "a", "b", false),
            "(Float.floatToIntBits(a) == Float.floatToIntBits(b))"
        );
        assert_eq!(
            gen_equals("double", "a", "b", true),
            "(Double.doubleToLongBits(a) == Double.doubleToLongBits(b))"
        );
        assert_eq!(gen_equals("int", "a", "b", true), "(a == b)");
        assert_eq!(
            gen_equals("String", "a", "b", true),
            "(a == null ? b == null : a.equals(b))"
        );
        assert_eq!(gen_equals("String", "a", "b", false), "a.equals(b)");
    }

    #[test]
    fn test_compare_to_text() {
        assert_eq!(compare_to_text("x", "int", "5"), "Integer.compare(x, 5)");
        assert_eq!(compare_to_text("x", "long", "5"), "Long.compare(x, 5L)");
        assert_eq!(
            compare_to_text("x", "java.math.BigDecimal", "1.5"),
            "x.compareTo(new java.math.BigDecimal(\"1.5\"))"
        );
    }

    #[test]
    fn test_expr_to_int() {
        assert_eq!(expr_to_int("boolean", "b"), "(b ? 1 : 0)");
        assert_eq!(expr_to_int("int", "i"), "i");
        assert_eq!(expr_to_int("char", "c"), "((int) c)");
        assert_eq!(expr_to_int("long", "l"), "((int) (l ^ (l >>> 32)))");
        assert_eq!(expr_to_int("String", "s"), "(s == null ? 0 : s.hashCode())");
    }

    #[test]
    fn test_instance_from_primitives() {
        assert_eq!(instance_from("boolean", "1"), "true");
        assert_eq!(instance_from("boolean", "false"), "false");
        assert_eq!(instance_from("byte", "-3"), "(byte) -3");
        assert_eq!(instance_from("short", "3"), "(short) 3");
        assert_eq!(instance_from("int", " 42 "), "42");
        assert_eq!(instance_from("float", "1.5"), "1.5f");
        assert_eq!(instance_from("double", "2"), "2d");
        assert_eq!(instance_from("char", "x"), "'x'");
        assert_eq!(instance_from("char", "'"), "'\\''");
        assert_eq!(instance_from("char", "\u{e9}"), "'\\u00e9'");
    }

    #[test]
    fn test_instance_from_objects() {
        assert_eq!(instance_from("Integer", "4"), "Integer.valueOf(4)");
        assert_eq!(instance_from("java.lang.String", "line\nnext"), "\"line\\nnext\"");
        assert_eq!(
            instance_from("java.net.URI", "http://x"),
            "java.net.URI.create(\"http://x\")"
        );
        assert_eq!(
            instance_from("java.util.Date", "x"),
            "new java.util.Date(\"x\")"
        );
    }

    #[test]
    fn test_escape_java_string() {
        assert_eq!(escape_java_string("a\\b\t\u{8}\u{c}\r"), "a\\\\b\\t\\b\\f\\r");
        assert_eq!(escape_java_string("\u{1}\u{2603}"), "\\u0001\\u2603");
    }

    #[test]
    fn test_check_value_to_type() {
        assert!(check_value_to_type("int", "42"));
        assert!(!check_value_to_type("int", "4.2"));
        assert!(!check_value_to_type("byte", "200"));
        assert!(check_value_to_type("Short", "-200"));
        assert!(check_value_to_type("boolean", "1"));
        assert!(!check_value_to_type("boolean", "yes"));
        assert!(check_value_to_type("char", "x"));
        assert!(!check_value_to_type("char", "xy"));
        assert!(check_value_to_type("char", "\u{e9}"));
        assert!(!check_value_to_type("char", "\u{1f600}"));
        assert!(!check_value_to_type("Character", "\u{1f600}"));
        assert!(check_value_to_type("double", "1e10"));
        assert!(!check_value_to_type("float", "NaN"));
        assert!(check_value_to_type("java.math.BigInteger", "-12345678901234567890"));
        assert!(!check_value_to_type("BigInteger", "1.0"));
        assert!(check_value_to_type("BigDecimal", "1.25"));
        assert!(check_value_to_type("String", ""));
        assert!(check_value_to_type("com.example.Thing", "anything"));
        assert!(!check_value_to_type("com.example.Thing", ""));
    }

    #[test]
    fn test_checked_values_become_parseable_literals() {
        const BOOL_PARSE: &str = "(\"true\".equals(s) || \"1\".equals(s))";
        let table = [
            ("boolean", "true", "true".to_string(), BOOL_PARSE.to_string()),
            ("byte", "-8", "(byte) -8".into(), "Byte.parseByte(s)".into()),
            ("char", "x", "'x'".into(), "(s).charAt(0)".into()),
            ("short", "300", "(short) 300".into(), "Short.parseShort(s)".into()),
            ("int", "-7", "-7".into(), "Integer.parseInt(s)".into()),
            ("long", "9000000000", "9000000000L".into(), "Long.parseLong(s)".into()),
            ("float", "1.5", "1.5f".into(), "Float.parseFloat(s)".into()),
            ("double", "2.25", "2.25d".into(), "Double.parseDouble(s)".into()),
            (
                "Boolean",
                "false",
                "Boolean.valueOf(false)".into(),
                format!("Boolean.valueOf({})", BOOL_PARSE),
            ),
            (
                "Byte",
                "12",
                "Byte.valueOf((byte) 12)".into(),
                "Byte.valueOf(Byte.parseByte(s))".into(),
            ),
            (
                "Character",
                "'",
                "Character.valueOf('\\'')".into(),
                "Character.valueOf((s).charAt(0))".into(),
            ),
            (
                "Short",
                "-3",
                "Short.valueOf((short) -3)".into(),
                "Short.valueOf(Short.parseShort(s))".into(),
            ),
            (
                "java.lang.Integer",
                "42",
                "Integer.valueOf(42)".into(),
                "Integer.valueOf(Integer.parseInt(s))".into(),
            ),
            (
                "Long",
                "5",
                "Long.valueOf(5L)".into(),
                "Long.valueOf(Long.parseLong(s))".into(),
            ),
            (
                "Float",
                "0.5",
                "Float.valueOf(0.5f)".into(),
                "Float.valueOf(Float.parseFloat(s))".into(),
            ),
            (
                "Double",
                "1e3",
                "Double.valueOf(1e3d)".into(),
                "Double.valueOf(Double.parseDouble(s))".into(),
            ),
        ];
        assert_eq!(table.len(), 16);

        for (type_name, value, literal, parse) in table {
            assert!(check_value_to_type(type_name, value), "{type_name} {value}");
            assert_eq!(instance_from(type_name, value), literal, "{type_name}");
            assert_eq!(gen_parse_text(type_name, "s", true), parse, "{type_name}");
            // Integral and boolean literals carry the checked text unchanged
            if !matches!(from_object_type(type_name).as_str(), "char" | "float" | "double") {
                assert!(literal.contains(value), "{type_name}: {literal}");
            }
        }
    }

    #[test]
    fn test_classification() {
        assert!(is_primitive_type("int"));
        assert!(!is_primitive_type("Integer"));
        assert!(is_wrapper_type("java.lang.Integer"));
        assert!(is_immutable("String"));
        assert!(is_immutable("java.math.BigDecimal"));
        assert!(!is_immutable("java.util.Date"));
        assert!(is_instantiable("java.util.HashMap"));
        assert!(!is_instantiable("com.example.Unknown"));
        assert!(is_cloneable("int[]"));
        assert!(is_cloneable("java.util.Date"));
        assert!(!is_cloneable("com.example.Unknown"));
    }

    #[test]
    fn test_xml_meta_chars() {
        assert!(can_produce_no_xml_meta_chars("int"));
        assert!(can_produce_no_xml_meta_chars("java.lang.Boolean"));
        assert!(!can_produce_no_xml_meta_chars("char"));
        assert!(!can_produce_no_xml_meta_chars("String"));
    }

    #[test]
    fn test_names() {
        assert_eq!(reserved_word("class"), "_class");
        assert_eq!(reserved_word("name"), "name");
        assert_eq!(base_name("java.util.List<String>"), "List");
        assert_eq!(base_name("int[]"), "int");
        assert_eq!(base_name("Person"), "Person");
        assert_eq!(optimal_hash_map_size(3), 5);
        assert_eq!(optimal_hash_map_size(0), 1);
        assert_eq!(capitalize("firstName"), "FirstName");
        assert_eq!(capitalize("x"), "X");
        assert_eq!(capitalize(""), "");
    }
}
