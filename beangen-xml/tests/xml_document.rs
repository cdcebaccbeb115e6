//! Snapshot tests for XML document emission.

use beangen_xml::{CodeWriter, Error, XmlWriter};

#[test]
fn test_nested_document() {
    let mut xw = XmlWriter::new();
    xw.comment("sample");
    xw.start_tag(Some("p"), "person", Some("xmlns:p=\"urn:people\""), true);
    xw.write_element("name", "Ann <Bo>");
    xw.start_tag(None, "address", None, false);
    xw.write_attr("kind", "home");
    xw.finish_start_tag(true, true).unwrap();
    xw.write_element("city", "Oslo");
    xw.end_tag(true).unwrap();
    xw.start_tag(None, "tags", None, false);
    xw.finish_start_tag(false, true).unwrap();
    xw.start_tag(None, "note", None, false);
    xw.finish_start_tag(true, false).unwrap();
    xw.write("inline");
    xw.end_tag(true).unwrap();
    xw.end_tag(true).unwrap();

    insta::assert_snapshot!(xw.finish().unwrap(), @r#"
    <?xml version='1.0' encoding='UTF-8' ?>
    <!-- sample -->
    <p:person xmlns:p="urn:people">
      <name>Ann &lt;Bo&gt;</name>
      <address kind="home">
        <city>Oslo</city>
      </address>
      <tags/>
      <note>inline</note>
    </p:person>
    "#);
}

#[test]
fn test_tag_balance() {
    let mut xw = XmlWriter::without_prolog();
    xw.start_tag(None, "a", None, true);
    xw.start_tag(None, "b", None, true);
    assert_eq!(xw.indent_level(), 2);
    xw.end_tag(true).unwrap();
    xw.end_tag(true).unwrap();
    assert_eq!(xw.indent_level(), 0);

    insta::assert_snapshot!(xw.finish().unwrap(), @r"
    <a>
      <b>
      </b>
    </a>
    ");

    assert!(matches!(xw.end_tag(true), Err(Error::TagStackUnderflow)));
}
