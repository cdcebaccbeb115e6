//! Integration tests for buffer ordering, selection and diffing output.

use std::{
    fs,
    io::Write,
    path::{Path, PathBuf},
};

use beangen_core::{
    CodeWriter, DiffingFileWriter, Error, GeneratedFile, Indent, IndentingBuffer, MultiBuffer,
    WriteResult,
};
use tempfile::TempDir;

#[test]
fn test_buffers_flush_in_index_order() {
    let mut out = IndentingBuffer::new(3, Indent::Spaces(4));
    out.select(2).unwrap();
    out.write("}\n");
    out.select(0).unwrap();
    out.write("class A {\n");
    out.select(1).unwrap();
    out.indent_right();
    out.write("int x;\n");

    insta::assert_snapshot!(out.contents(), @r"
    class A {
        int x;
    }
    ");
}

#[test]
fn test_selection_stack_balance() {
    let mut out = MultiBuffer::new(3);
    out.push_select(2).unwrap();
    out.push_select(1).unwrap();
    assert_eq!(out.selection_depth(), 2);
    out.pop_select().unwrap();
    assert_eq!(out.current(), 2);
    out.pop_select().unwrap();
    assert_eq!(out.current(), 0);
    assert!(matches!(out.pop_select(), Err(Error::EmptySelectionStack)));
    assert!(matches!(
        out.select(3),
        Err(Error::BufferOutOfRange { index: 3, count: 3 })
    ));
}

#[test]
fn test_nested_scoped_selection() {
    let mut out = MultiBuffer::new(3);
    {
        let mut decl = out.select_scoped(1).unwrap();
        decl.write("b");
        {
            let mut trailer = decl.select_scoped(2).unwrap();
            trailer.write("c");
        }
        decl.write("b");
    }
    out.write("a");
    assert_eq!(out.contents(), "abbc");
    assert_eq!(out.selection_depth(), 0);
}

#[test]
fn test_truncate_then_continue() {
    let mut out = IndentingBuffer::new(1, Indent::Tab);
    out.write("void f() {\n");
    let mark = out.current_position();
    out.write("tentative();\n");
    out.truncate_at_position(mark).unwrap();
    out.write("kept();\n").write("}\n");
    assert_eq!(out.contents(), "void f() {\n\tkept();\n}\n");
}

#[test]
fn test_diffing_writer_only_touches_changed_suffix() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("Person.java");
    fs::write(&path, "class Person {\n\tint age;\n}\n").unwrap();

    let mut out = DiffingFileWriter::open(&path).unwrap();
    out.write_all(b"class Person {\n").unwrap();
    assert!(!out.is_changed());
    out.write_all(b"\tlong age;\n}\n").unwrap();
    assert!(out.is_changed());
    assert!(out.finish().unwrap());

    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "class Person {\n\tlong age;\n}\n"
    );
}

#[test]
fn test_diffing_writer_truncates_shorter_output() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("A.java");
    fs::write(&path, "class A {}\n// trailing\n").unwrap();

    let mut out = DiffingFileWriter::open(&path).unwrap();
    out.write_all(b"class A {}\n").unwrap();
    assert!(out.finish().unwrap());
    assert_eq!(fs::read_to_string(&path).unwrap(), "class A {}\n");
}

#[test]
fn test_generated_file_round_trip_on_disk() {
    struct ClassA(IndentingBuffer);

    impl GeneratedFile for ClassA {
        fn path(&self, base: &Path) -> PathBuf {
            base.join("com").join("example").join("A.java")
        }

        fn render(&self) -> String {
            self.0.contents()
        }
    }

    let temp = TempDir::new().unwrap();
    let mut out = IndentingBuffer::new(1, Indent::Tab);
    out.write("class A {\n").write("int x;\n").write("}\n");
    let file = ClassA(out);

    assert_eq!(file.write(temp.path()).unwrap(), WriteResult::Written);
    assert_eq!(file.write(temp.path()).unwrap(), WriteResult::Unchanged);
    assert_eq!(
        fs::read_to_string(temp.path().join("com/example/A.java")).unwrap(),
        "class A {\n\tint x;\n}\n"
    );
}
