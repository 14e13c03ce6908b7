use pretty_assertions::assert_eq;
use rustc_hash::FxHashMap;
use unpick_fmt::UnpickWriter;
use unpick_parse::parse_document;

use crate::{RemapHooks, UnpickRemapper};

/// Map-backed hooks; a missing entry means the name stays as it is.
#[derive(Default)]
struct TestHooks {
    packages: FxHashMap<String, Vec<String>>,
    classes: FxHashMap<String, String>,
    fields: FxHashMap<(String, String, String), String>,
    methods: FxHashMap<(String, String, String), String>,
    field_descs: FxHashMap<(String, String), String>,
}

impl RemapHooks for TestHooks {
    fn map_class_name(&self, class_name: &str) -> String {
        self.classes
            .get(class_name)
            .cloned()
            .unwrap_or_else(|| class_name.to_owned())
    }

    fn map_field_name(&self, class_name: &str, field_name: &str, field_desc: &str) -> String {
        let key = (
            class_name.to_owned(),
            field_name.to_owned(),
            field_desc.to_owned(),
        );
        self.fields
            .get(&key)
            .cloned()
            .unwrap_or_else(|| field_name.to_owned())
    }

    fn map_method_name(&self, class_name: &str, method_name: &str, method_desc: &str) -> String {
        let key = (
            class_name.to_owned(),
            method_name.to_owned(),
            method_desc.to_owned(),
        );
        self.methods
            .get(&key)
            .cloned()
            .unwrap_or_else(|| method_name.to_owned())
    }

    fn classes_in_package(&self, package: &str) -> Vec<String> {
        self.packages.get(package).cloned().unwrap_or_default()
    }

    fn field_desc(&self, class_name: &str, field_name: &str) -> String {
        let key = (class_name.to_owned(), field_name.to_owned());
        self.field_descs
            .get(&key)
            .cloned()
            .unwrap_or_else(|| "Ljava/lang/Object;".to_owned())
    }
}

fn hooks() -> TestHooks {
    let mut hooks = TestHooks::default();
    hooks.packages.insert(
        "unmapped.foo".to_owned(),
        vec!["unmapped.foo.A".to_owned(), "unmapped.foo.B".to_owned()],
    );
    hooks
        .packages
        .insert("unmapped.bar".to_owned(), vec!["unmapped.bar.C".to_owned()]);
    hooks
        .classes
        .insert("unmapped.foo.A".to_owned(), "mapped.foo.X".to_owned());
    hooks
        .classes
        .insert("unmapped.foo.B".to_owned(), "mapped.bar.Y".to_owned());
    hooks
        .classes
        .insert("unmapped.bar.C".to_owned(), "mapped.bar.Z".to_owned());
    hooks.fields.insert(
        (
            "unmapped.foo.B".to_owned(),
            "baz".to_owned(),
            "I".to_owned(),
        ),
        "quux".to_owned(),
    );
    hooks.methods.insert(
        (
            "unmapped.foo.B".to_owned(),
            "foo2".to_owned(),
            "(Lunmapped/foo/A;)V".to_owned(),
        ),
        "bar2".to_owned(),
    );
    hooks
        .field_descs
        .insert(("unmapped.foo.B".to_owned(), "baz".to_owned()), "I".to_owned());
    hooks
}

#[track_caller]
fn check_v(version: u32, original: &str, expected: &str) {
    let original = format!("unpick v{version}\n\n{original}\n");
    let expected = format!("unpick v{version}\n\n{expected}\n");
    let mut remapper = UnpickRemapper::new(hooks(), UnpickWriter::new());
    if let Err(err) = parse_document(&original, &mut remapper) {
        panic!("failed to parse {original:?}: {err}");
    }
    assert_eq!(remapper.into_downstream().output(), expected);
}

#[track_caller]
fn check(original: &str, expected: &str) {
    check_v(3, original, expected);
}

#[test]
fn target_field_names() {
    check(
        "target_field unmapped.foo.B baz I g",
        "target_field mapped.bar.Y quux I g",
    );
}

#[test]
fn target_field_descriptor() {
    check(
        "target_field unmapped.bar.C foo Lunmapped/foo/A; g",
        "target_field mapped.bar.Z foo Lmapped/foo/X; g",
    );
    check(
        "target_field unmapped.bar.C foo [[Lunmapped/foo/A; g",
        "target_field mapped.bar.Z foo [[Lmapped/foo/X; g",
    );
}

#[test]
fn target_method_names() {
    check(
        "target_method unmapped.foo.B foo2 (Lunmapped/foo/A;)V",
        "target_method mapped.bar.Y bar2 (Lmapped/foo/X;)V",
    );
}

#[test]
fn param_and_return_groups_pass_through() {
    check(
        "target_method unmapped.foo.B foo2 (Lunmapped/foo/A;)V\n\tparam 0 g\n\treturn h",
        "target_method mapped.bar.Y bar2 (Lmapped/foo/X;)V\n\tparam 0 g\n\treturn h",
    );
}

#[test]
fn field_expression() {
    check(
        "group int g\n\tunmapped.foo.B.baz",
        "group int g\n\tmapped.bar.Y.quux",
    );
}

#[test]
fn typed_field_expression() {
    check(
        "group float g\n\tunmapped.foo.B.baz:int",
        "group float g\n\tmapped.bar.Y.quux:int",
    );
}

#[test]
fn field_with_unknown_descriptor_keeps_its_name() {
    // The descriptor lookup misses, so the field map key never matches
    check(
        "group float g\n\tunmapped.foo.B.other",
        "group float g\n\tmapped.bar.Y.other",
    );
}

#[test]
fn field_inside_compound_expression() {
    check(
        "group int g\n\t(unmapped.foo.B.baz | 1) << 2",
        "group int g\n\t(mapped.bar.Y.quux | 1) << 2",
    );
    check(
        "group int g\n\t-unmapped.foo.B.baz:instance",
        "group int g\n\t-mapped.bar.Y.quux:instance",
    );
}

#[test]
fn package_scope_expands_to_classes() {
    check(
        "group int\n\t@scope package unmapped.foo\n\t0\n\t1",
        "group int\n\t@scope class mapped.foo.X\n\t@scope class mapped.bar.Y\n\t0\n\t1",
    );
}

#[test]
fn class_scope() {
    check(
        "group int\n\t@scope class unmapped.foo.A",
        "group int\n\t@scope class mapped.foo.X",
    );
}

#[test]
fn method_scope() {
    check(
        "group int\n\t@scope method unmapped.foo.B foo2 (Lunmapped/foo/A;)V",
        "group int\n\t@scope method mapped.bar.Y bar2 (Lmapped/foo/X;)V",
    );
}

#[test]
fn class_reference_in_class_group() {
    check(
        "group Class g\n\tunmapped.foo.A",
        "group Class g\n\tmapped.foo.X",
    );
}

#[test]
fn group_names_are_never_rewritten() {
    check(
        "group int unmapped\n\t@flags\n\t1",
        "group int unmapped\n\t@flags\n\t1",
    );
}

#[test]
fn docs_and_attributes_pass_through() {
    check(
        "#: docs\ngroup int g\n\t@scope class unmapped.foo.A\n\t@strict\n\t@format hex",
        "#: docs\ngroup int g\n\t@scope class mapped.foo.X\n\t@strict\n\t@format hex",
    );
}

#[test]
fn target_annotation_class_is_remapped() {
    check_v(
        4,
        "target_annotation unmapped.foo.A baz",
        "target_annotation mapped.foo.X baz",
    );
}
