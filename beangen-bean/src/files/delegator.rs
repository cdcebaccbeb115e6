use std::path::{Path, PathBuf};

use beangen_core::GeneratedFile;
use beangen_java::{CodeWriter, JavaWriter, Method, Options};
use beangen_manifest::OutputConfig;

use super::{BeanClass, GENERATED_NOTICE, package_path};

/// Field of the delegator holding the wrapped bean.
const TARGET: &str = "_Bean";

/// A class forwarding every public instance method of a bean to a
/// wrapped instance.
///
/// Signatures and call sites are replayed from the bean writer's method
/// registry, sorted by name and parameters.
pub struct DelegatorClass {
    bean: String,
    output: OutputConfig,
    methods: Vec<Method>,
}

impl DelegatorClass {
    pub fn new(bean: &BeanClass, output: &OutputConfig) -> Self {
        let mut methods: Vec<Method> = bean
            .methods()
            .filter(|m| m.is_public() && !m.is_static() && !m.is_constructor())
            .cloned()
            .collect();
        methods.sort();
        Self {
            bean: bean.name().to_string(),
            output: output.clone(),
            methods,
        }
    }

    /// Forwarded methods, sorted.
    pub fn methods(&self) -> &[Method] {
        &self.methods
    }

    pub fn name(&self) -> String {
        format!("{}Delegator", self.bean)
    }
}

impl GeneratedFile for DelegatorClass {
    fn path(&self, base: &Path) -> PathBuf {
        base.join(package_path(self.output.package.as_deref()))
            .join(format!("{}.java", self.name()))
    }

    fn render(&self) -> String {
        let name = self.name();
        let mut jw = JavaWriter::with_indent(self.output.indent);

        jw.select_header();
        jw.comment(GENERATED_NOTICE);
        if let Some(package) = &self.output.package {
            jw.write_package(package);
        }
        jw.big_comment(&format!(
            "Forwards the public methods of {} to a wrapped instance.",
            self.bean
        ));
        jw.write_class_decl(&name, None, None, Options::PUBLIC);

        jw.select_decl();
        jw.write_eol_parts(&["protected ", &self.bean, " ", TARGET]);
        jw.cr();

        jw.select_constructor();
        let parameters = format!("{} bean", self.bean);
        jw.begin_constructor(&name, &parameters, None, Options::PUBLIC);
        jw.write_eol_parts(&[TARGET, " = bean"]);
        jw.end_method();

        jw.select_body();
        for method in &self.methods {
            method.write_method(&mut jw);
            jw.write(" ");
            jw.begin();
            if method.return_type() != "void" {
                jw.write("return ");
            }
            jw.write_parts(&[TARGET, "."]);
            method.write_call(&mut jw);
            jw.eol();
            jw.end_method();
        }

        jw.to_source_string()
    }
}
