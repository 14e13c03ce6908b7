#![allow(clippy::unwrap_used)]

use unpick_diagnostic::ParseError;
use unpick_ir::{Item, ItemSink};

use crate::parse_document;


fn parse(source: &str) -> ItemSink {
    let mut sink = ItemSink::default();
    match parse_document(source, &mut sink) {
        Ok(()) => sink,
        Err(err) => panic!("unexpected parse error in {source:?}: {err}"),
    }
}

fn parse_err(source: &str) -> ParseError {
    let mut sink = ItemSink::default();
    match parse_document(source, &mut sink) {
        Ok(()) => panic!("expected a parse error in {source:?}"),
        Err(err) => err,
    }
}

#[track_caller]
fn check_err(source: &str, line: u32, column: u32, message: &str) {
    let err = parse_err(source);
    assert_eq!(
        (err.line, err.column, err.message()),
        (line, column, message.to_owned()),
        "wrong error for {source:?}"
    );
}

fn only_item(source: &str) -> Item {
    let mut items = parse(source).items;
    assert_eq!(items.len(), 1, "expected exactly one item in {source:?}");
    items.remove(0)
}

/// Parses one constant line in a named group of the given data type.
/// The expression starts at line 3, column 2.
fn constant(data_type: &str, body: &str) -> unpick_ir::Expression {
    let source = format!("unpick v3\ngroup {data_type} g\n\t{body}\n");
    let Item::Group(group) = only_item(&source) else {
        panic!("expected a group in {source:?}");
    };
    assert_eq!(group.constants.len(), 1);
    let mut constants = group.constants;
    constants.remove(0)
}

fn constant_err(data_type: &str, body: &str) -> ParseError {
    parse_err(&format!("unpick v3\ngroup {data_type} g\n\t{body}\n"))
}
