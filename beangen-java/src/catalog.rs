use std::{collections::HashMap, sync::LazyLock};

/// What generated code may assume about a class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClassInfo {
    /// Has an accessible no-argument constructor.
    pub instantiable: bool,
    /// Has a public `clone()`.
    pub cloneable: bool,
}

impl ClassInfo {
    pub const fn new(instantiable: bool, cloneable: bool) -> Self {
        Self {
            instantiable,
            cloneable,
        }
    }
}

// (name, instantiable, cloneable)
const JDK_CLASSES: &[(&str, bool, bool)] = &[
    ("java.lang.Object", true, false),
    ("java.lang.String", true, false),
    ("java.lang.StringBuffer", true, false),
    ("java.lang.StringBuilder", true, false),
    ("java.lang.Boolean", false, false),
    ("java.lang.Byte", false, false),
    ("java.lang.Character", false, false),
    ("java.lang.Short", false, false),
    ("java.lang.Integer", false, false),
    ("java.lang.Long", false, false),
    ("java.lang.Float", false, false),
    ("java.lang.Double", false, false),
    ("java.math.BigDecimal", false, false),
    ("java.math.BigInteger", false, false),
    ("java.net.URI", false, false),
    ("java.net.URL", false, false),
    ("java.io.File", false, false),
    ("java.util.Date", true, true),
    ("java.util.Calendar", false, true),
    ("java.util.GregorianCalendar", true, true),
    ("java.util.Locale", false, true),
    ("java.util.ArrayList", true, true),
    ("java.util.LinkedList", true, true),
    ("java.util.Vector", true, true),
    ("java.util.HashMap", true, true),
    ("java.util.LinkedHashMap", true, true),
    ("java.util.TreeMap", true, true),
    ("java.util.Hashtable", true, true),
    ("java.util.Properties", true, true),
    ("java.util.HashSet", true, true),
    ("java.util.LinkedHashSet", true, true),
    ("java.util.TreeSet", true, true),
    ("java.util.List", false, false),
    ("java.util.Map", false, false),
    ("java.util.Set", false, false),
    ("java.util.Collection", false, false),
    ("java.sql.Date", false, true),
    ("java.sql.Time", false, true),
    ("java.sql.Timestamp", false, true),
    ("javax.xml.namespace.QName", false, false),
];

static JDK: LazyLock<ClassCatalog> = LazyLock::new(|| ClassCatalog {
    classes: JDK_CLASSES
        .iter()
        .map(|&(name, instantiable, cloneable)| {
            (name.to_string(), ClassInfo::new(instantiable, cloneable))
        })
        .collect(),
});

/// Known classes and what generated code may do with them.
///
/// The catalog is immutable once built. Unknown classes are neither
/// instantiable nor cloneable, so callers fall back to the most
/// conservative code.
#[derive(Debug, Clone, Default)]
pub struct ClassCatalog {
    classes: HashMap<String, ClassInfo>,
}

impl ClassCatalog {
    /// An empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// The built-in table of common JDK classes.
    pub fn jdk() -> &'static ClassCatalog {
        &JDK
    }

    /// Add or replace a class.
    pub fn with_class(mut self, name: impl Into<String>, info: ClassInfo) -> Self {
        self.classes.insert(name.into(), info);
        self
    }

    /// Look up a class by fully qualified name, falling back to
    /// `java.lang.<name>` for simple names.
    pub fn lookup(&self, name: &str) -> Option<ClassInfo> {
        let name = name.trim();
        self.classes
            .get(name)
            .or_else(|| {
                (!name.contains('.'))
                    .then(|| self.classes.get(&format!("java.lang.{}", name)))
                    .flatten()
            })
            .copied()
    }

    pub fn is_instantiable(&self, name: &str) -> bool {
        self.lookup(name).is_some_and(|info| info.instantiable)
    }

    pub fn is_cloneable(&self, name: &str) -> bool {
        self.lookup(name).is_some_and(|info| info.cloneable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jdk_lookup() {
        let jdk = ClassCatalog::jdk();
        assert!(jdk.is_instantiable("java.util.ArrayList"));
        assert!(jdk.is_cloneable("java.util.ArrayList"));
        assert!(jdk.is_instantiable("String"));
        assert!(!jdk.is_cloneable("String"));
        assert!(!jdk.is_instantiable("Integer"));
    }

    #[test]
    fn test_unknown_is_false() {
        let jdk = ClassCatalog::jdk();
        assert!(!jdk.is_instantiable("com.example.Missing"));
        assert!(!jdk.is_cloneable("Missing"));
        assert_eq!(jdk.lookup("int"), None);
    }

    #[test]
    fn test_with_class() {
        let catalog = ClassCatalog::new().with_class("com.example.Bean", ClassInfo::new(true, false));
        assert!(catalog.is_instantiable("com.example.Bean"));
        assert!(!catalog.is_instantiable("java.util.ArrayList"));
    }
}
