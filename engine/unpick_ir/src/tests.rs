use pretty_assertions::assert_eq;

use crate::{
    DataType, DocumentVisitor, Expression, FieldRef, GroupDefinition, GroupFormat, GroupScope,
    Literal, Radix, TargetMethod, UnaryOp,
};

#[test]
fn data_type_keywords_round_trip() {
    for dt in [
        DataType::Byte,
        DataType::Short,
        DataType::Int,
        DataType::Long,
        DataType::Float,
        DataType::Double,
        DataType::Char,
        DataType::String,
        DataType::Class,
    ] {
        assert_eq!(DataType::from_keyword(dt.keyword()), Some(dt));
    }
    assert_eq!(DataType::from_keyword("string"), None);
    assert_eq!(DataType::from_keyword("class"), None);
}

#[test]
fn format_keywords_round_trip() {
    for fmt in [
        GroupFormat::Decimal,
        GroupFormat::Hex,
        GroupFormat::Binary,
        GroupFormat::Octal,
        GroupFormat::Char,
    ] {
        assert_eq!(GroupFormat::from_keyword(fmt.keyword()), Some(fmt));
    }
    assert_eq!(GroupFormat::Hex.to_string(), "hex");
}

#[test]
fn radix_prefixes() {
    assert_eq!(Radix::Decimal.prefix(), "");
    assert_eq!(Radix::Hex.prefix(), "0x");
    assert_eq!(Radix::Binary.prefix(), "0b");
    assert_eq!(Radix::Octal.prefix(), "0");
}

#[test]
fn reference_descriptors() {
    assert_eq!(DataType::Int.field_descriptor(), "I");
    assert_eq!(DataType::Long.field_descriptor(), "J");
    assert_eq!(DataType::String.field_descriptor(), "Ljava/lang/String;");
    assert_eq!(DataType::Class.field_descriptor(), "Ljava/lang/Class;");
}

#[test]
fn group_builder_accumulates() {
    let group = GroupDefinition::named(DataType::Int, "flags")
        .scope(GroupScope::package("foo.bar"))
        .scope(GroupScope::class("foo.Baz"))
        .flags()
        .strict()
        .format(GroupFormat::Hex)
        .constant(Expression::literal(Literal::Integer {
            value: 0xff,
            radix: Radix::Hex,
        }))
        .docs("bit flags")
        .build();

    assert_eq!(group.scopes.len(), 2);
    assert!(group.flags);
    assert!(group.strict);
    assert_eq!(group.name.as_deref(), Some("flags"));
    assert_eq!(group.format, Some(GroupFormat::Hex));
    assert_eq!(group.constants.len(), 1);
    assert_eq!(group.docs.as_deref(), Some("bit flags"));
}

#[test]
fn global_group_has_no_name() {
    let group = GroupDefinition::global(DataType::String).build();
    assert_eq!(group.name, None);
    assert!(group.scopes.is_empty());
    assert!(!group.flags);
}

#[test]
fn method_builder_collects_params() {
    let method = TargetMethod::builder("foo.Bar", "baz", "(IJ)V")
        .param(0, "a")
        .param(1, "b")
        .return_group("r")
        .build();

    assert_eq!(method.param_groups.get(&0).map(String::as_str), Some("a"));
    assert_eq!(method.param_groups.get(&1).map(String::as_str), Some("b"));
    assert_eq!(method.return_group.as_deref(), Some("r"));
}

#[test]
fn negated_literal_shape() {
    let expr = Expression::negated(Literal::int(2_147_483_648));
    let Expression::Unary { op, operand } = expr else {
        panic!("expected unary node");
    };
    assert_eq!(op, UnaryOp::Negate);
    assert!(matches!(*operand, Expression::Literal(Literal::Integer { .. })));
}

#[test]
fn field_ref_defaults_to_static() {
    let field = FieldRef::of("foo.Bar", "baz");
    assert!(field.is_static);
    assert_eq!(field.field_type, None);
    let bare = FieldRef::class("foo.Bar");
    assert_eq!(bare.field_name, None);
}

#[test]
fn visitor_defaults_are_no_ops() {
    struct CountGroups {
        groups: usize,
    }
    impl DocumentVisitor for CountGroups {
        fn visit_group_definition(&mut self, _group: GroupDefinition) {
            self.groups += 1;
        }
    }

    let mut counter = CountGroups { groups: 0 };
    counter.visit_header(3);
    counter.visit_group_definition(GroupDefinition::global(DataType::Int).build());
    counter.visit_target_annotation(crate::TargetAnnotation::new("foo.Bar", "baz"));
    assert_eq!(counter.groups, 1);
}
