//! Java names derived from manifest property names.

use beangen_java::convert::{capitalize, from_object_type};

/// Backing field of a property: `firstName` is stored in `_FirstName`.
pub fn field_name(property: &str) -> String {
    format!("_{}", capitalize(property))
}

/// Constant holding the default text of a property: `DEFAULT_FIRST_NAME`.
pub fn default_constant(property: &str) -> String {
    format!("DEFAULT_{}", to_upper_snake(property))
}

/// Static method parsing the default of a property: `fetchDefaultFirstName`.
pub fn fetch_default(property: &str) -> String {
    format!("fetchDefault{}", capitalize(property))
}

/// Read accessor: `isActive` for `boolean`, `getName` otherwise.
pub fn getter(property: &str, ty: &str) -> String {
    let prefix = if ty.trim() == "boolean" { "is" } else { "get" };
    format!("{}{}", prefix, capitalize(property))
}

/// Accessor with a custom prefix: `set`, `size`, `add`, `remove`.
pub fn accessor(prefix: &str, property: &str) -> String {
    format!("{}{}", prefix, capitalize(property))
}

/// The type with generic arguments removed, usable in `new T[0]`.
pub fn erased(ty: &str) -> &str {
    let ty = ty.trim();
    match ty.find('<') {
        Some(end) => ty[..end].trim_end(),
        None => ty,
    }
}

/// `orderId` becomes `ORDER_ID`.
pub fn to_upper_snake(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    let mut prev_lower = false;
    for c in name.chars() {
        if c.is_uppercase() && prev_lower {
            out.push('_');
        }
        out.extend(c.to_uppercase());
        prev_lower = c.is_lowercase() || c.is_ascii_digit();
    }
    out
}

/// Placeholder text for a sample XML value of `ty`.
pub fn sample_text(ty: &str, property: &str) -> String {
    let text = match from_object_type(ty).as_str() {
        "boolean" => "false",
        "char" => "x",
        "byte" | "short" | "int" | "long" => "0",
        "float" | "double" => "0.0",
        "java.math.BigInteger" | "BigInteger" => "0",
        "java.math.BigDecimal" | "BigDecimal" => "0.0",
        "java.net.URI" | "URI" | "java.net.URL" | "URL" => "http://example.com/",
        _ => property,
    };
    text.to_string()
}

/// Remove one pair of parentheses enclosing the whole expression.
pub fn strip_outer_parens(expr: &str) -> &str {
    let Some(inner) = expr.strip_prefix('(').and_then(|e| e.strip_suffix(')')) else {
        return expr;
    };
    let mut depth = 0i32;
    for c in inner.chars() {
        match c {
            '(' => depth += 1,
            ')' => depth -= 1,
            _ => {}
        }
        if depth < 0 {
            return expr;
        }
    }
    if depth == 0 { inner } else { expr }
}
