use std::path::{Path, PathBuf};

use beangen_core::GeneratedFile;
use beangen_java::convert::base_name;
use beangen_manifest::{Bean, Manifest, to_kebab_case};
use beangen_xml::{Result, XmlWriter};

use crate::naming::sample_text;

/// A sample XML document for one bean.
///
/// Properties whose type names another bean of the manifest are expanded
/// into nested elements. A bean already being expanded is written as a
/// plain text element so cycles terminate.
pub struct XmlSample {
    bean: String,
    document: String,
}

impl XmlSample {
    pub fn build(name: &str, manifest: &Manifest) -> Result<Self> {
        let mut writer = SampleWriter::new(manifest);
        if let Some((name, bean)) = manifest.beans.get_key_value(name) {
            writer.write_root(name, bean)?;
        }
        Ok(Self {
            bean: name.to_string(),
            document: writer.xw.finish()?,
        })
    }
}

impl GeneratedFile for XmlSample {
    fn path(&self, base: &Path) -> PathBuf {
        base.join("samples").join(format!("{}.xml", self.bean))
    }

    fn render(&self) -> String {
        self.document.clone()
    }
}

struct SampleWriter<'a> {
    manifest: &'a Manifest,
    xw: XmlWriter,
    /// Prefix of every element, taken from the root bean.
    namespace: Option<&'a str>,
    /// Beans currently being expanded, outermost first.
    expanding: Vec<&'a str>,
}

impl<'a> SampleWriter<'a> {
    fn new(manifest: &'a Manifest) -> Self {
        let output = &manifest.output;
        Self {
            manifest,
            xw: XmlWriter::with_prolog(&output.xml_version, &output.xml_encoding),
            namespace: None,
            expanding: Vec::new(),
        }
    }

    fn write_root(&mut self, name: &'a str, bean: &'a Bean) -> Result<()> {
        self.xw.comment(&format!("Sample {} document", name));
        self.namespace = bean.namespace.as_deref();
        let declaration = self
            .namespace
            .map(|ns| format!("xmlns:{}=\"urn:{}\"", ns, to_kebab_case(name)));
        self.write_bean(name, bean, &bean.root_element(name), declaration.as_deref())
    }

    /// Write `bean` as the element `element`, attributes first.
    fn write_bean(
        &mut self,
        name: &'a str,
        bean: &'a Bean,
        element: &str,
        declaration: Option<&str>,
    ) -> Result<()> {
        self.expanding.push(name);

        self.xw.start_tag(self.namespace, element, declaration, false);
        for (property_name, property) in bean.properties.iter().filter(|(_, p)| p.attribute) {
            let text = property
                .default
                .clone()
                .unwrap_or_else(|| sample_text(&property.ty, property_name));
            self.xw.write_attr(&to_kebab_case(property_name), &text);
        }

        let has_children = bean.properties.values().any(|p| !p.attribute);
        self.xw.finish_start_tag(has_children, true)?;
        if has_children {
            for (property_name, property) in bean.properties.iter().filter(|(_, p)| !p.attribute) {
                let child = to_kebab_case(property_name);
                match self.nested_bean(&property.ty) {
                    Some((nested_name, nested)) => {
                        self.write_bean(nested_name, nested, &child, None)?;
                    }
                    None => {
                        let text = property
                            .default
                            .clone()
                            .unwrap_or_else(|| sample_text(&property.ty, property_name));
                        let qualified = self.qualify(&child);
                        self.xw.write_element(&qualified, &text);
                    }
                }
            }
            self.xw.end_tag(true)?;
        }

        self.expanding.pop();
        Ok(())
    }

    /// The manifest bean named by `ty`, unless it is already being expanded.
    fn nested_bean(&self, ty: &str) -> Option<(&'a str, &'a Bean)> {
        let simple = base_name(ty);
        let (name, bean) = self.manifest.beans.get_key_value(simple)?;
        if self.expanding.contains(&name.as_str()) {
            log::debug!("not expanding recursive bean {} in sample", name);
            return None;
        }
        Some((name.as_str(), bean))
    }

    fn qualify(&self, element: &str) -> String {
        match self.namespace {
            Some(ns) => format!("{}:{}", ns, element),
            None => element.to_string(),
        }
    }
}
