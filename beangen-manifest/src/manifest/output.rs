use std::path::PathBuf;

use beangen_core::Indent;
use serde::{Deserialize, Deserializer};

/// The `[output]` table.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct OutputConfig {
    /// Output directory, relative to the manifest
    #[serde(default = "default_directory")]
    pub directory: PathBuf,

    /// Java package of the generated classes
    pub package: Option<String>,

    /// `"tab"` or a number of spaces
    #[serde(default, deserialize_with = "deserialize_indent")]
    pub indent: Indent,

    /// Box primitives with `valueOf` instead of wrapper constructors
    #[serde(default = "default_true")]
    pub use_value_of: bool,

    /// Generate a delegator class per bean
    #[serde(default)]
    pub delegators: bool,

    /// Generate a sample XML document per bean
    #[serde(default)]
    pub xml_samples: bool,

    /// Encoding named in the XML prolog
    #[serde(default = "default_encoding")]
    pub xml_encoding: String,

    /// Version named in the XML prolog
    #[serde(default = "default_xml_version")]
    pub xml_version: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: default_directory(),
            package: None,
            indent: Indent::default(),
            use_value_of: true,
            delegators: false,
            xml_samples: false,
            xml_encoding: default_encoding(),
            xml_version: default_xml_version(),
        }
    }
}

fn default_directory() -> PathBuf {
    PathBuf::from("generated")
}

fn default_true() -> bool {
    true
}

fn default_encoding() -> String {
    "UTF-8".to_string()
}

fn default_xml_version() -> String {
    "1.0".to_string()
}

fn deserialize_indent<'de, D>(deserializer: D) -> std::result::Result<Indent, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawIndent {
        Name(String),
        Width(i64),
    }

    match RawIndent::deserialize(deserializer)? {
        RawIndent::Name(name) if name == "tab" => Ok(Indent::Tab),
        RawIndent::Width(width @ 1..=16) => Ok(Indent::Spaces(width as u8)),
        _ => Err(D::Error::custom(
            "indent must be \"tab\" or a number of spaces from 1 to 16",
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize)]
    struct Wrapper {
        output: OutputConfig,
    }

    fn parse(src: &str) -> std::result::Result<OutputConfig, toml::de::Error> {
        toml::from_str::<Wrapper>(src).map(|w| w.output)
    }

    #[test]
    fn test_defaults() {
        let output = parse("[output]\n").unwrap();
        assert_eq!(output.directory, PathBuf::from("generated"));
        assert_eq!(output.indent, Indent::Tab);
        assert!(output.use_value_of);
        assert!(!output.delegators);
        assert!(!output.xml_samples);
        assert_eq!(output.xml_encoding, "UTF-8");
        assert_eq!(output.xml_version, "1.0");
    }

    #[test]
    fn test_indent_values() {
        assert_eq!(parse("[output]\nindent = \"tab\"").unwrap().indent, Indent::Tab);
        assert_eq!(parse("[output]\nindent = 4").unwrap().indent, Indent::Spaces(4));
        assert!(parse("[output]\nindent = 0").is_err());
        assert!(parse("[output]\nindent = \"spaces\"").is_err());
    }

    #[test]
    fn test_kebab_case_keys() {
        let output = parse(
            "[output]\nuse-value-of = false\nxml-samples = true\nxml-encoding = \"ISO-8859-1\"",
        )
        .unwrap();
        assert!(!output.use_value_of);
        assert!(output.xml_samples);
        assert_eq!(output.xml_encoding, "ISO-8859-1");
    }

    #[test]
    fn test_unknown_key_rejected() {
        assert!(parse("[output]\nlanguage = \"java\"").is_err());
    }
}
