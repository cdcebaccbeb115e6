use indexmap::IndexMap;
use serde::{Deserialize, Deserializer};

/// A `[beans.<Name>]` table.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Bean {
    /// Class javadoc
    pub description: Option<String>,

    /// Superclass of the generated class
    pub extends: Option<String>,

    /// Comma separated interfaces of the generated class
    pub implements: Option<String>,

    /// Root element name of the sample XML document
    pub root: Option<String>,

    /// Namespace prefix for sample XML tags
    pub namespace: Option<String>,

    /// Properties, in declaration order
    #[serde(default)]
    pub properties: IndexMap<String, Property>,
}

impl Bean {
    /// Root element of the sample XML document, falling back to the
    /// bean name in kebab case.
    pub fn root_element(&self, name: &str) -> String {
        match &self.root {
            Some(root) => root.clone(),
            None => to_kebab_case(name),
        }
    }

    pub fn property(&self, name: &str) -> Option<&Property> {
        self.properties.get(name)
    }
}

/// A `[beans.<Name>.properties.<prop>]` table.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Property {
    /// Java type of the property
    #[serde(rename = "type", default = "default_type")]
    pub ty: String,

    /// Whether the property holds a list of values
    #[serde(default)]
    pub indexed: bool,

    /// Default value as source text; numbers and booleans are accepted
    /// and kept in their TOML spelling
    #[serde(default, deserialize_with = "deserialize_default")]
    pub default: Option<String>,

    pub description: Option<String>,

    /// Render as an XML attribute instead of a child element in samples
    #[serde(default)]
    pub attribute: bool,
}

impl Default for Property {
    fn default() -> Self {
        Self {
            ty: default_type(),
            indexed: false,
            default: None,
            description: None,
            attribute: false,
        }
    }
}

impl Property {
    /// Create a property of the given type.
    pub fn new(ty: impl Into<String>) -> Self {
        Self {
            ty: ty.into(),
            ..Self::default()
        }
    }

    /// Type of the field that stores the property: `T[]` when indexed.
    pub fn field_type(&self) -> String {
        if self.indexed {
            format!("{}[]", self.ty)
        } else {
            self.ty.clone()
        }
    }
}

fn default_type() -> String {
    "String".to_string()
}

fn deserialize_default<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawDefault {
        Text(String),
        Integer(i64),
        Float(f64),
        Bool(bool),
    }

    let value = match RawDefault::deserialize(deserializer)? {
        RawDefault::Text(s) => s,
        RawDefault::Integer(i) => i.to_string(),
        RawDefault::Float(f) => f.to_string(),
        RawDefault::Bool(b) => b.to_string(),
    };
    Ok(Some(value))
}

/// Convert a bean name such as `PurchaseOrder` to `purchase-order`.
pub fn to_kebab_case(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    let mut prev_lower = false;
    for c in name.chars() {
        if c.is_uppercase() {
            if prev_lower {
                out.push('-');
            }
            out.extend(c.to_lowercase());
            prev_lower = false;
        } else if c == '_' {
            out.push('-');
            prev_lower = false;
        } else {
            out.push(c);
            prev_lower = c.is_lowercase() || c.is_ascii_digit();
        }
    }
    out
}
