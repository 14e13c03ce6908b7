//! Reader → writer round trips over documents already in canonical form.

use pretty_assertions::assert_eq;
use unpick_fmt::UnpickWriter;
use unpick_parse::parse_document;

#[track_caller]
fn check(source: &str) {
    let mut writer = UnpickWriter::new();
    if let Err(err) = parse_document(source, &mut writer) {
        panic!("failed to parse {source:?}: {err}");
    }
    assert_eq!(writer.output(), source);
}

#[test]
fn empty_document() {
    check("unpick v3\n");
    check("unpick v4\n");
}

#[test]
fn target_field() {
    check("unpick v3\n\ntarget_field foo.Bar baz I g\n");
    check("unpick v3\n\ntarget_field foo.Bar$1 baz [Ljava/lang/String; g\n");
}

#[test]
fn target_method() {
    check("unpick v3\n\ntarget_method foo.Bar baz ()V\n\tparam 0 g\n\tparam 69 h\n\treturn i\n");
    check("unpick v3\n\ntarget_method foo.Bar <init> (I)V\n\tparam 0 g\n");
}

#[test]
fn target_annotation() {
    check("unpick v4\n\ntarget_annotation foo.Bar baz\n");
}

#[test]
fn group_with_attributes() {
    check(concat!(
        "unpick v3\n",
        "\n",
        "group int\n",
        "\t@scope package foo.bar\n",
        "\t@strict\n",
        "\t@format hex\n",
        "\t0xffffffff\n",
    ));
    check(concat!(
        "unpick v3\n",
        "\n",
        "group int flags\n",
        "\t@scope class foo.Bar\n",
        "\t@scope method foo.Bar baz (J)I\n",
        "\t@flags\n",
        "\t1\n",
        "\t2\n",
        "\t4\n",
    ));
}

#[test]
fn doc_block() {
    check("unpick v3\n\n#: \n#: boo\n#: and\n#: \n#: foo\n#: \ngroup int\n");
}

#[test]
fn constant_expressions() {
    check(concat!(
        "unpick v3\n",
        "\n",
        "group int g\n",
        "\t1 + 2 * 3\n",
        "\t(byte) 42\n",
        "\t(1 | 2) << 4\n",
        "\tfoo.Bar.baz:instance:byte\n",
        "\t-2147483648\n",
        "\t~0x10\n",
        "\t'a'\n",
    ));
    check("unpick v3\n\ngroup long g\n\t-9223372036854775808L\n\t0xffffffffffffffffL\n");
    check("unpick v3\n\ngroup double g\n\t1.5\n\t-0.25\n\t2.0\n");
    check("unpick v3\n\ngroup float g\n\t0.5F\n\t1.0F\n");
    check("unpick v3\n\ngroup String g\n\t\"hi\\n\"\n\t\"\\08\"\n");
    check("unpick v3\n\ngroup Class g\n\tfoo.Bar\n");
}

#[test]
fn multiple_items() {
    check(concat!(
        "unpick v3\n",
        "\n",
        "group int g\n",
        "\t42\n",
        "\n",
        "target_field foo.Bar baz I g\n",
        "\n",
        "target_method foo.Bar qux (I)V\n",
        "\tparam 0 g\n",
    ));
}
