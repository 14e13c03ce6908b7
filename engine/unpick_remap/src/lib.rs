//! Name remapping pass for unpick documents.
//!
//! [`UnpickRemapper`] consumes a document stream and immediately re-emits
//! each item on a downstream [`DocumentVisitor`] with every embedded
//! class, field, and method name rewritten through caller-supplied
//! [`RemapHooks`]. The downstream is commonly an
//! `UnpickWriter`, but any visitor works, so reader → remapper → writer
//! composes as a single pass with no intermediate document.
//!
//! Group names, `param` groups, and `return` groups are local identifiers
//! of the document and are never rewritten. Renames are always keyed by
//! the pre-image: hooks receive the original class name and descriptor,
//! never an already-mapped one.

use unpick_ir::{
    DocumentVisitor, Expression, FieldRef, GroupDefinition, GroupScope, TargetAnnotation,
    TargetField, TargetMethod,
};

/// Name lookups supplied by the embedding application, typically backed by
/// a compiled-code symbol table. Class names are dot-separated; the
/// slash-separated internal form appears only inside descriptor strings.
///
/// The engine trusts these hooks: an identity mapping is expressed by
/// returning the input, and nothing a hook returns is validated.
pub trait RemapHooks {
    fn map_class_name(&self, class_name: &str) -> String;

    fn map_field_name(&self, class_name: &str, field_name: &str, field_desc: &str) -> String;

    fn map_method_name(&self, class_name: &str, method_name: &str, method_desc: &str) -> String;

    /// All classes in `package`, as fully qualified dotted names, unmapped.
    /// Used to expand a package scope into per-class scopes.
    fn classes_in_package(&self, package: &str) -> Vec<String>;

    /// Descriptor of a field, for references without an explicit `:type`
    /// suffix.
    fn field_desc(&self, class_name: &str, field_name: &str) -> String;
}

/// A pass-through consumer/producer: every visited item is rewritten and
/// forwarded to `downstream` before the callback returns.
pub struct UnpickRemapper<H, V> {
    hooks: H,
    downstream: V,
}

impl<H: RemapHooks, V: DocumentVisitor> UnpickRemapper<H, V> {
    pub fn new(hooks: H, downstream: V) -> Self {
        UnpickRemapper { hooks, downstream }
    }

    /// Releases the downstream visitor, typically to collect its output.
    pub fn into_downstream(self) -> V {
        self.downstream
    }

    /// Rewrites every `L<name>;` run in a field or method descriptor.
    /// Primitive codes and array prefixes pass through unchanged; a
    /// malformed run with no terminating `;` is forwarded as is.
    fn map_descriptor(&self, descriptor: &str) -> String {
        let mut mapped = String::with_capacity(descriptor.len());
        let mut rest = descriptor;
        while let Some(l_index) = rest.find('L') {
            let Some(semi_offset) = rest[l_index..].find(';') else {
                break;
            };
            let semi_index = l_index + semi_offset;
            mapped.push_str(&rest[..=l_index]);
            let class_name = rest[l_index + 1..semi_index].replace('/', ".");
            mapped.push_str(&self.hooks.map_class_name(&class_name).replace('.', "/"));
            rest = &rest[semi_index..];
        }
        mapped.push_str(rest);
        mapped
    }

    /// A package scope expands to one class scope per class in the
    /// package, in hook order; other scopes map in place.
    fn map_scope(&self, scope: GroupScope, out: &mut Vec<GroupScope>) {
        match scope {
            GroupScope::Package(package) => {
                for class in self.hooks.classes_in_package(&package) {
                    out.push(GroupScope::Class(self.hooks.map_class_name(&class)));
                }
            }
            GroupScope::Class(class) => {
                out.push(GroupScope::Class(self.hooks.map_class_name(&class)));
            }
            GroupScope::Method {
                class_name,
                method_name,
                method_desc,
            } => out.push(GroupScope::Method {
                class_name: self.hooks.map_class_name(&class_name),
                method_name: self
                    .hooks
                    .map_method_name(&class_name, &method_name, &method_desc),
                method_desc: self.map_descriptor(&method_desc),
            }),
        }
    }

    /// Structural transform touching only `Field` leaves.
    fn map_expression(&self, expr: Expression) -> Expression {
        match expr {
            Expression::Field(field) => Expression::Field(self.map_field(field)),
            Expression::Unary { op, operand } => Expression::Unary {
                op,
                operand: Box::new(self.map_expression(*operand)),
            },
            Expression::Binary { op, lhs, rhs } => Expression::Binary {
                op,
                lhs: Box::new(self.map_expression(*lhs)),
                rhs: Box::new(self.map_expression(*rhs)),
            },
            Expression::Cast { data_type, operand } => Expression::Cast {
                data_type,
                operand: Box::new(self.map_expression(*operand)),
            },
            Expression::Paren(inner) => Expression::Paren(Box::new(self.map_expression(*inner))),
            literal @ Expression::Literal(_) => literal,
        }
    }

    fn map_field(&self, field: FieldRef) -> FieldRef {
        let class_name = self.hooks.map_class_name(&field.class_name);
        let Some(field_name) = field.field_name else {
            return FieldRef {
                class_name,
                field_name: None,
                field_type: field.field_type,
                is_static: field.is_static,
            };
        };

        let field_desc = match field.field_type {
            Some(data_type) => data_type.field_descriptor().to_owned(),
            None => self.hooks.field_desc(&field.class_name, &field_name),
        };
        let mapped_name = self
            .hooks
            .map_field_name(&field.class_name, &field_name, &field_desc);

        FieldRef {
            class_name,
            field_name: Some(mapped_name),
            field_type: field.field_type,
            is_static: field.is_static,
        }
    }
}

impl<H: RemapHooks, V: DocumentVisitor> DocumentVisitor for UnpickRemapper<H, V> {
    fn visit_header(&mut self, version: u32) {
        self.downstream.visit_header(version);
    }

    fn visit_group_definition(&mut self, group: GroupDefinition) {
        let GroupDefinition {
            scopes,
            flags,
            strict,
            data_type,
            name,
            constants,
            format,
            docs,
        } = group;

        let mut mapped_scopes = Vec::with_capacity(scopes.len());
        for scope in scopes {
            self.map_scope(scope, &mut mapped_scopes);
        }
        let constants = constants
            .into_iter()
            .map(|constant| self.map_expression(constant))
            .collect();

        self.downstream.visit_group_definition(GroupDefinition {
            scopes: mapped_scopes,
            flags,
            strict,
            data_type,
            name,
            constants,
            format,
            docs,
        });
    }

    fn visit_target_field(&mut self, target: TargetField) {
        self.downstream.visit_target_field(TargetField {
            class_name: self.hooks.map_class_name(&target.class_name),
            field_name: self.hooks.map_field_name(
                &target.class_name,
                &target.field_name,
                &target.field_desc,
            ),
            field_desc: self.map_descriptor(&target.field_desc),
            group_name: target.group_name,
        });
    }

    fn visit_target_method(&mut self, target: TargetMethod) {
        self.downstream.visit_target_method(TargetMethod {
            class_name: self.hooks.map_class_name(&target.class_name),
            method_name: self.hooks.map_method_name(
                &target.class_name,
                &target.method_name,
                &target.method_desc,
            ),
            method_desc: self.map_descriptor(&target.method_desc),
            param_groups: target.param_groups,
            return_group: target.return_group,
        });
    }

    fn visit_target_annotation(&mut self, target: TargetAnnotation) {
        // Annotation members carry no descriptor; the method hook gets an
        // empty one.
        self.downstream.visit_target_annotation(TargetAnnotation {
            class_name: self.hooks.map_class_name(&target.class_name),
            member_name: self
                .hooks
                .map_method_name(&target.class_name, &target.member_name, ""),
        });
    }
}

#[cfg(test)]
mod tests;
