use std::path::{Path, PathBuf};

use beangen_core::{GeneratedFile, Result};
use beangen_java::{
    CodeWriter, JavaWriter, Method, MethodSemantic, Options,
    convert::{
        exceptions_from_parsing_text, expr_to_int, gen_equals, gen_parse_text, instance_from,
        is_cloneable, is_immutable,
    },
};
use beangen_manifest::{Bean, OutputConfig, Property};

use super::{GENERATED_NOTICE, package_path};
use crate::naming::{
    accessor, default_constant, erased, fetch_default, field_name, getter, strip_outer_parens,
};

/// A Java bean class generated from one `[beans.<Name>]` table.
///
/// The class is rendered when built; the writer is kept so its method
/// registry can drive the delegator class.
pub struct BeanClass {
    name: String,
    package: Option<String>,
    writer: JavaWriter,
}

impl BeanClass {
    pub fn build(name: &str, bean: &Bean, output: &OutputConfig) -> Result<Self> {
        let writer = BeanWriter::new(name, bean, output).write()?;
        Ok(Self {
            name: name.to_string(),
            package: output.package.clone(),
            writer,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Methods recorded while writing the class, in writing order.
    pub fn methods(&self) -> impl Iterator<Item = &Method> {
        self.writer.stored_methods()
    }
}

impl GeneratedFile for BeanClass {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(package_path(self.package.as_deref()))
            .join(format!("{}.java", self.name))
    }

    fn render(&self) -> String {
        self.writer.to_source_string()
    }
}

struct BeanWriter<'a> {
    name: &'a str,
    bean: &'a Bean,
    output: &'a OutputConfig,
    jw: JavaWriter,
}

impl<'a> BeanWriter<'a> {
    fn new(name: &'a str, bean: &'a Bean, output: &'a OutputConfig) -> Self {
        Self {
            name,
            bean,
            output,
            jw: JavaWriter::with_indent(output.indent),
        }
    }

    fn write(mut self) -> Result<JavaWriter> {
        // Needs to exist before the class declaration so it gets the class
        // indent level.
        let constants = if defaults(self.bean).next().is_some() {
            let decl = self.jw.sections().decl;
            Some(self.jw.insert_section_after(decl)?)
        } else {
            None
        };

        self.write_header();
        self.write_fields();
        if let Some(section) = constants {
            let bean = self.bean;
            self.jw
                .with_selected(section, |jw| write_constants(jw, defaults(bean)))?;
        }
        self.write_constructors();
        self.write_accessors();
        self.write_object_methods();
        Ok(self.jw)
    }

    fn write_header(&mut self) {
        let jw = &mut self.jw;
        jw.select_header();
        jw.comment(GENERATED_NOTICE);
        if let Some(package) = &self.output.package {
            jw.write_package(package);
        }
        if let Some(description) = &self.bean.description {
            jw.big_comment(description);
        }
        jw.write_class_decl(
            self.name,
            self.bean.extends.as_deref(),
            self.bean.implements.as_deref(),
            Options::PUBLIC,
        );
    }

    fn write_fields(&mut self) {
        let jw = &mut self.jw;
        jw.select_decl();
        for (name, property) in &self.bean.properties {
            jw.write_parts(&["private ", &property.field_type(), " ", &field_name(name)]);
            if property.indexed {
                jw.write_parts(&[" = new ", erased(&property.ty), "[0]"]);
            }
            jw.eol();
        }
        if !self.bean.properties.is_empty() {
            jw.cr();
        }
    }

    fn write_constructors(&mut self) {
        let jw = &mut self.jw;
        jw.select_constructor();

        jw.begin_constructor(self.name, "", None, Options::PUBLIC);
        for (name, _, _) in defaults(self.bean) {
            jw.write_eol_parts(&[&field_name(name), " = ", &fetch_default(name), "()"]);
        }
        jw.end_method();

        let parameters = format!("{} source", self.name);
        jw.begin_constructor(self.name, &parameters, None, Options::PUBLIC);
        for (name, property) in &self.bean.properties {
            let field = field_name(name);
            let source = format!("source.{}", field);
            let field_type = property.field_type();
            if property.indexed {
                jw.write_eol_parts(&[&field, " = ", &source, ".clone()"]);
            } else if !is_immutable(&field_type) && is_cloneable(&field_type) {
                jw.write_eol_parts(&[
                    &field, " = ", &source, " == null ? null : (", &field_type, ") ", &source,
                    ".clone()",
                ]);
            } else {
                jw.write_eol_parts(&[&field, " = ", &source]);
            }
        }
        jw.end_method();
    }

    fn write_accessors(&mut self) {
        let bean = self.bean;
        self.jw.select_body();
        for (name, property) in &bean.properties {
            if let Some(description) = &property.description {
                self.jw.big_comment(description);
            }
            if property.indexed {
                self.write_indexed_accessors(name, property);
            } else {
                self.write_simple_accessors(name, property);
            }
        }
        for (name, property, _) in defaults(bean) {
            self.write_fetch_default(name, property);
        }
    }

    fn write_simple_accessors(&mut self, name: &str, property: &Property) {
        let jw = &mut self.jw;
        let field = field_name(name);
        let ty = property.ty.as_str();

        jw.begin_method(&getter(name, ty), "", None, ty, semantic(MethodSemantic::Getter));
        jw.write_eol_parts(&["return ", &field]);
        jw.end_method();

        let parameters = format!("{} value", ty);
        jw.begin_method(
            &accessor("set", name),
            &parameters,
            None,
            "void",
            semantic(MethodSemantic::Setter),
        );
        jw.write_eol_parts(&[&field, " = value"]);
        jw.end_method();
    }

    fn write_indexed_accessors(&mut self, name: &str, property: &Property) {
        let jw = &mut self.jw;
        let field = field_name(name);
        let ty = property.ty.as_str();
        let array = property.field_type();

        jw.begin_method(&getter(name, ""), "", None, &array, semantic(MethodSemantic::Getter));
        jw.write_eol_parts(&["return ", &field]);
        jw.end_method();

        jw.begin_method(
            &accessor("set", name),
            &format!("{} value", array),
            None,
            "void",
            semantic(MethodSemantic::Setter),
        );
        jw.begin_if("value == null");
        jw.write_eol_parts(&[&field, " = new ", erased(ty), "[0]"]);
        jw.end_else_begin();
        jw.write_eol_parts(&[&field, " = value"]);
        jw.end();
        jw.end_method();

        jw.begin_method(
            &getter(name, ""),
            "int index",
            None,
            ty,
            semantic(MethodSemantic::IndexedGetter),
        );
        jw.write_eol_parts(&["return ", &field, "[index]"]);
        jw.end_method();

        jw.begin_method(
            &accessor("set", name),
            &format!("int index, {} value", ty),
            None,
            "void",
            semantic(MethodSemantic::IndexedSetter),
        );
        jw.write_eol_parts(&[&field, "[index] = value"]);
        jw.end_method();

        jw.begin_method(&accessor("size", name), "", None, "int", semantic(MethodSemantic::Sizer));
        jw.write_eol_parts(&["return ", &field, ".length"]);
        jw.end_method();

        let value = format!("{} value", ty);
        jw.begin_method(&accessor("add", name), &value, None, "int", semantic(MethodSemantic::Adder));
        jw.write_eol_parts(&[&field, " = java.util.Arrays.copyOf(", &field, ", ", &field, ".length + 1)"]);
        jw.write_eol_parts(&[&field, "[", &field, ".length - 1] = value"]);
        jw.write_eol_parts(&["return ", &field, ".length - 1"]);
        jw.end_method();

        jw.begin_method(
            &accessor("remove", name),
            &value,
            None,
            "int",
            semantic(MethodSemantic::Remover),
        );
        let element = format!("{}[i]", field);
        let limit = format!("i < {}.length", field);
        jw.begin_for("int i = 0", &limit, "i++");
        jw.begin_if(strip_outer_parens(&gen_equals(ty, &element, "value", true)));
        jw.write_eol_parts(&[
            &array, " shrunk = java.util.Arrays.copyOf(", &field, ", ", &field, ".length - 1)",
        ]);
        jw.write_eol_parts(&["System.arraycopy(", &field, ", i + 1, shrunk, i, shrunk.length - i)"]);
        jw.write_eol_parts(&[&field, " = shrunk"]);
        jw.write_eol("return i");
        jw.end();
        jw.end();
        jw.write_eol("return -1");
        jw.end_method();
    }

    fn write_fetch_default(&mut self, name: &str, property: &Property) {
        let jw = &mut self.jw;
        let ty = property.ty.as_str();
        let parse = gen_parse_text(ty, &default_constant(name), self.output.use_value_of);
        let checked: Vec<String> = exceptions_from_parsing_text(ty, true)
            .into_iter()
            .filter(|e| e != "java.lang.NumberFormatException")
            .collect();

        jw.begin_method(&fetch_default(name), "", None, ty, Options::PUBLIC | Options::STATIC);
        if checked.is_empty() {
            jw.write_eol_parts(&["return ", &parse]);
        } else {
            jw.begin_try();
            jw.write_eol_parts(&["return ", &parse]);
            jw.end_catch(&format!("{} e", checked.join(" | ")));
            jw.write_eol("throw new IllegalStateException(e)");
            jw.end();
        }
        jw.end_method();
    }

    /// `equals`, `hashCode` and `toString`. They are left out of the
    /// method registry: delegators forward bean accessors only.
    fn write_object_methods(&mut self) {
        let name = self.name;
        let properties = &self.bean.properties;
        let jw = &mut self.jw;
        jw.set_store_methods(false);

        jw.begin_method("equals", "Object o", None, "boolean", Options::PUBLIC);
        jw.begin_if("o == this");
        jw.write_eol("return true");
        jw.end();
        jw.begin_if(&format!("!(o instanceof {})", name));
        jw.write_eol("return false");
        jw.end();
        jw.write_eol_parts(&[name, " other = (", name, ") o"]);
        for (property_name, property) in properties {
            let field = field_name(property_name);
            let other = format!("other.{}", field);
            let predicate = if property.indexed {
                format!("!java.util.Arrays.equals({}, {})", field, other)
            } else {
                format!("!{}", gen_equals(&property.ty, &field, &other, true))
            };
            jw.begin_if(&predicate);
            jw.write_eol("return false");
            jw.end();
        }
        jw.write_eol("return true");
        jw.end_method();

        jw.begin_method("hashCode", "", None, "int", Options::PUBLIC);
        jw.write_eol("int result = 17");
        for (property_name, property) in properties {
            let field = field_name(property_name);
            let hash = if property.indexed {
                format!("java.util.Arrays.hashCode({})", field)
            } else {
                expr_to_int(&property.ty, &field)
            };
            jw.write_eol_parts(&["result = 37 * result + ", &hash]);
        }
        jw.write_eol("return result");
        jw.end_method();

        jw.begin_method("toString", "", None, "String", Options::PUBLIC);
        jw.write_eol_parts(&[
            "StringBuilder sb = new StringBuilder(",
            &instance_from("String", &format!("{}[", name)),
            ")",
        ]);
        for (i, (property_name, property)) in properties.iter().enumerate() {
            let label = if i == 0 {
                format!("{}=", property_name)
            } else {
                format!(", {}=", property_name)
            };
            let field = field_name(property_name);
            let value = if property.indexed {
                format!("java.util.Arrays.toString({})", field)
            } else {
                field
            };
            jw.write_eol_parts(&[
                "sb.append(",
                &instance_from("String", &label),
                ").append(",
                &value,
                ")",
            ]);
        }
        jw.write_eol("sb.append(']')");
        jw.write_eol("return sb.toString()");
        jw.end_method();

        jw.set_store_methods(true);
    }
}

/// Properties with a default value, with that value.
fn defaults(bean: &Bean) -> impl Iterator<Item = (&str, &Property, &str)> {
    bean.properties
        .iter()
        .filter_map(|(name, p)| p.default.as_deref().map(|d| (name.as_str(), p, d)))
}

fn write_constants<'p>(
    jw: &mut JavaWriter,
    defaults: impl Iterator<Item = (&'p str, &'p Property, &'p str)>,
) {
    for (name, _, value) in defaults {
        jw.write_eol_parts(&[
            "public static final String ",
            &default_constant(name),
            " = ",
            &instance_from("String", value),
        ]);
    }
    jw.cr();
}

fn semantic(semantic: MethodSemantic) -> Options {
    Options::PUBLIC.with_semantic(semantic)
}
