/// Java reserved words, including the literals that cannot be identifiers.
/// Source: https://docs.oracle.com/javase/specs/jls/se17/html/jls-3.html#jls-3.9
pub const JAVA_KEYWORDS: &[&str] = &[
    "abstract", "assert", "boolean", "break", "byte", "case", "catch", "char", "class", "const",
    "continue", "default", "do", "double", "else", "enum", "extends", "final", "finally", "float",
    "for", "goto", "if", "implements", "import", "instanceof", "int", "interface", "long",
    "native", "new", "package", "private", "protected", "public", "return", "short", "static",
    "strictfp", "super", "switch", "synchronized", "this", "throw", "throws", "transient", "try",
    "void", "volatile", "while",
    // Literals
    "true", "false", "null",
    // Underscore is reserved since Java 9
    "_",
];

/// Check if a name is a Java reserved word
pub fn is_reserved_word(name: &str) -> bool {
    JAVA_KEYWORDS.contains(&name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_reserved_word() {
        assert!(is_reserved_word("class"));
        assert!(is_reserved_word("null"));
        assert!(is_reserved_word("goto"));
        assert!(!is_reserved_word("Class"));
        assert!(!is_reserved_word("name"));
    }
}
