//! Integration tests for loading beangen.toml from disk.

use beangen_manifest::{BeangenToml, Error, Manifest};
use tempfile::TempDir;

const MANIFEST: &str = r#"
[output]
directory = "src/main/java"
package = "com.example.orders"
indent = 4
delegators = true

[beans.PurchaseOrder]
description = "An order placed by a customer"
implements = "java.io.Serializable"

[beans.PurchaseOrder.properties.orderId]
type = "long"

[beans.PurchaseOrder.properties.comment]
default = "none"

[beans.PurchaseOrder.properties.lines]
type = "LineItem"
indexed = true

[beans.LineItem.properties.sku]
attribute = true

[beans.LineItem.properties.quantity]
type = "int"
default = 1
"#;

#[test]
fn test_open_manifest_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("beangen.toml");
    std::fs::write(&path, MANIFEST).expect("Failed to write manifest");

    let file = BeangenToml::open(&path).expect("Failed to open manifest");
    assert_eq!(file.path(), path.as_path());
    assert_eq!(file.content(), MANIFEST);
    assert_eq!(file.output_dir(), temp_dir.path().join("src/main/java"));

    let manifest = file.manifest();
    let names: Vec<_> = manifest.beans.keys().map(String::as_str).collect();
    assert_eq!(names, ["PurchaseOrder", "LineItem"]);
    assert!(manifest.output.delegators);
    assert_eq!(manifest.output.package.as_deref(), Some("com.example.orders"));
    assert_eq!(
        manifest.bean("PurchaseOrder").unwrap().root_element("PurchaseOrder"),
        "purchase-order"
    );
}

#[test]
fn test_missing_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("beangen.toml");

    let err = Manifest::from_file(&path).unwrap_err();
    match *err {
        Error::Io { path: ref p, .. } => assert_eq!(p, &path),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_error_names_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("beangen.toml");
    std::fs::write(&path, "[beans.Order.properties.new]\n").expect("Failed to write manifest");

    let err = match BeangenToml::open(&path) {
        Ok(_) => panic!("reserved property name accepted"),
        Err(err) => err,
    };
    match *err {
        Error::ReservedWord {
            ref src,
            ref name,
            ref context,
            span,
        } => {
            assert_eq!(src.name(), path.display().to_string());
            assert_eq!(name, "new");
            assert_eq!(context, "property in 'Order'");
            assert!(span.is_some());
        }
        other => panic!("unexpected error: {other}"),
    }
}
