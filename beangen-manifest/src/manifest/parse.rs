//! Manifest parsing from files and strings.

use std::{collections::HashMap, path::Path, str::FromStr};

use beangen_java::convert::{capitalize, check_value_to_type};

use super::{
    Bean, Manifest,
    validate::{ParseContext, find_value_span, validate_type},
};
use crate::{Error, Result, error::SourceContext};

impl FromStr for Manifest {
    type Err = Box<Error>;

    fn from_str(s: &str) -> Result<Self> {
        parse_manifest(s, "beangen.toml")
    }
}

impl Manifest {
    /// Parse a beangen.toml file from the given path.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Box::new(Error::Io {
                path: path.to_path_buf(),
                source: e,
            })
        })?;
        parse_manifest(&content, &path.display().to_string())
    }

    /// Parse a beangen.toml from a string with a custom filename for error reporting.
    pub fn from_str_with_filename(content: &str, filename: &str) -> Result<Self> {
        parse_manifest(content, filename)
    }
}

/// Parse a manifest from content with the given filename for error reporting.
pub fn parse_manifest(content: &str, filename: &str) -> Result<Manifest> {
    let source_ctx = SourceContext::new(content, filename);
    let manifest: Manifest = toml::from_str(content).map_err(|e| source_ctx.parse_error(e))?;
    validate_manifest(&manifest, content, filename)?;
    Ok(manifest)
}

/// Validate the manifest after parsing.
fn validate_manifest(manifest: &Manifest, src: &str, filename: &str) -> Result<()> {
    let ctx = ParseContext::new(src, filename);

    if manifest.beans.is_empty() {
        return Err(ctx
            .source_context()
            .validation_error("manifest declares no beans", None));
    }

    if let Some(package) = &manifest.output.package {
        ctx.validate_package(package)?;
    }

    for (name, bean) in &manifest.beans {
        ctx.validate_name(name, "bean")?;

        let bean_ctx = ctx.push(name);
        validate_bean(&bean_ctx, bean)?;
    }
    Ok(())
}

fn validate_bean(ctx: &ParseContext<'_>, bean: &Bean) -> Result<()> {
    for (key, ty) in [("extends", &bean.extends), ("implements", &bean.implements)] {
        if let Some(ty) = ty
            && let Some(reason) = validate_type(ty)
        {
            return Err(ctx.value_error(format!("invalid {} '{}': {}", key, ty, reason), key, ty));
        }
    }

    // Accessor suffix -> property that claimed it
    let mut accessors: HashMap<String, &str> = HashMap::new();

    for (name, property) in &bean.properties {
        ctx.validate_name(name, "property")?;

        if let Some(reason) = validate_type(&property.ty) {
            return Err(ctx.value_error(
                format!("invalid type '{}' for property '{}': {}", property.ty, name, reason),
                "type",
                &property.ty,
            ));
        }

        if property.indexed
            && let Some(value) = &property.default
        {
            return Err(ctx.value_error(
                format!("indexed property '{}' cannot have a default", name),
                "default",
                value,
            ));
        }

        if let Some(value) = &property.default
            && !check_value_to_type(&property.ty, value)
        {
            return Err(ctx.source_context().invalid_default_error(
                name.as_str(),
                property.ty.as_str(),
                value.as_str(),
                find_value_span(ctx.src(), "default", value),
            ));
        }

        if property.indexed && property.attribute {
            return Err(ctx.source_context().validation_error(
                format!(
                    "indexed property '{}' cannot be rendered as an XML attribute",
                    name
                ),
                ctx.find_span(name),
            ));
        }

        if let Some(previous) = accessors.insert(capitalize(name), name) {
            return Err(ctx.source_context().validation_error(
                format!(
                    "properties '{}' and '{}' of bean '{}' would share the accessor get{}",
                    previous,
                    name,
                    ctx.path_string(),
                    capitalize(name)
                ),
                ctx.find_span(name),
            ));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const PERSON: &str = r#"
[output]
package = "com.example.model"

[beans.Person]
description = "A person"

[beans.Person.properties.name]
type = "String"

[beans.Person.properties.age]
type = "int"
default = 18

[beans.Person.properties.nicknames]
indexed = true
"#;

    #[test]
    fn test_parse_valid_manifest() {
        let manifest: Manifest = PERSON.parse().unwrap();
        let person = manifest.bean("Person").unwrap();
        assert_eq!(person.description.as_deref(), Some("A person"));
        assert_eq!(person.properties.len(), 3);
        assert_eq!(person.properties["age"].default.as_deref(), Some("18"));
        assert!(person.properties["nicknames"].indexed);
        assert_eq!(manifest.qualified_name("Person"), "com.example.model.Person");
    }

    #[test]
    fn test_no_beans() {
        let err = "[output]\n".parse::<Manifest>().unwrap_err();
        assert_eq!(err.to_string(), "manifest declares no beans");
    }

    #[test]
    fn test_reserved_bean_name() {
        let err = "[beans.class]\n".parse::<Manifest>().unwrap_err();
        assert!(matches!(*err, Error::ReservedWord { .. }));
    }

    #[test]
    fn test_invalid_property_name() {
        let src = "[beans.Person.properties.first-name]\ntype = \"String\"\n";
        let err = src.parse::<Manifest>().unwrap_err();
        assert_eq!(err.to_string(), "invalid property in 'Person' name 'first-name'");
    }

    #[test]
    fn test_invalid_package() {
        let src = "[output]\npackage = \"com.int.model\"\n[beans.A]\n";
        let err = src.parse::<Manifest>().unwrap_err();
        assert!(matches!(*err, Error::ReservedWord { ref name, .. } if name == "int"));
    }

    #[test]
    fn test_invalid_default() {
        let src = "[beans.A.properties.count]\ntype = \"int\"\ndefault = \"many\"\n";
        let err = src.parse::<Manifest>().unwrap_err();
        match *err {
            Error::InvalidDefault { span, ref value, .. } => {
                assert_eq!(value, "many");
                let span = span.unwrap();
                assert_eq!(&src[span.offset()..span.offset() + span.len()], "many");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_invalid_type() {
        let src = "[beans.A.properties.items]\ntype = \"List<String\"\n";
        let err = src.parse::<Manifest>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid type 'List<String' for property 'items': type has unbalanced '<' and '>'"
        );
    }

    #[test]
    fn test_indexed_attribute() {
        let src = "[beans.A.properties.tags]\nindexed = true\nattribute = true\n";
        let err = src.parse::<Manifest>().unwrap_err();
        assert!(err.to_string().contains("cannot be rendered as an XML attribute"));
    }

    #[test]
    fn test_indexed_default() {
        let src = "[beans.A.properties.tags]\nindexed = true\ndefault = \"x\"\n";
        let err = src.parse::<Manifest>().unwrap_err();
        assert_eq!(err.to_string(), "indexed property 'tags' cannot have a default");
    }

    #[test]
    fn test_accessor_collision() {
        let src = "[beans.A.properties.url]\n[beans.A.properties.Url]\n";
        let err = src.parse::<Manifest>().unwrap_err();
        assert_eq!(
            err.to_string(),
            "properties 'url' and 'Url' of bean 'A' would share the accessor getUrl"
        );
    }

    #[test]
    fn test_unknown_field() {
        let src = "[beans.A]\nsuperclass = \"Base\"\n";
        let err = src.parse::<Manifest>().unwrap_err();
        assert!(matches!(*err, Error::Parse { .. }));
    }

    #[test]
    fn test_from_str_with_filename() {
        let err = Manifest::from_str_with_filename("[beans.2A]\n", "custom.toml").unwrap_err();
        match *err {
            Error::InvalidIdentifier { ref src, .. } => assert_eq!(src.name(), "custom.toml"),
            other => panic!("unexpected error: {other}"),
        }
    }
}
