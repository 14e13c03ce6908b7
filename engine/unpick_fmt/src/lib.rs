//! Canonical serializer for the unpick format.
//!
//! [`UnpickWriter`] implements [`DocumentVisitor`] and accumulates the
//! document as text: a header line, then one block per item, each preceded
//! by exactly one blank line. This is the only component with formatting
//! policy; everything it emits reparses to the same AST, and a document
//! already in canonical form round-trips byte for byte.
//!
//! Canonical form means: the configured indent unit (default one tab),
//! one blank line between items, group attributes ordered `@scope`,
//! `@flags`, `@strict`, `@format`, then constants, and `param` lines in
//! ascending index order.

mod expr;

use std::fmt::Write;

use unpick_ir::{
    DocumentVisitor, GroupDefinition, GroupScope, TargetAnnotation, TargetField, TargetMethod,
};

use expr::render_expression;

const DEFAULT_VERSION: u32 = 3;

/// Serializes a visited document to canonical text.
///
/// The version defaults to 3 until [`visit_header`](DocumentVisitor::visit_header)
/// supplies one, so hand-driven writers need not bother with the header.
pub struct UnpickWriter {
    indent: String,
    version: u32,
    body: String,
}

impl UnpickWriter {
    pub fn new() -> Self {
        Self::with_indent("\t")
    }

    /// A writer using `indent` as its indentation unit.
    pub fn with_indent(indent: impl Into<String>) -> Self {
        UnpickWriter {
            indent: indent.into(),
            version: DEFAULT_VERSION,
            body: String::new(),
        }
    }

    /// The document text accumulated so far.
    pub fn output(&self) -> String {
        format!("unpick v{}\n{}", self.version, self.body)
    }

    fn indent(&mut self) {
        self.body.push_str(&self.indent);
    }
}

impl Default for UnpickWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentVisitor for UnpickWriter {
    fn visit_header(&mut self, version: u32) {
        self.version = version;
    }

    fn visit_group_definition(&mut self, group: GroupDefinition) {
        self.body.push('\n');
        if let Some(docs) = &group.docs {
            for line in docs.split('\n') {
                self.body.push_str("#: ");
                self.body.push_str(line);
                self.body.push('\n');
            }
        }

        self.body.push_str("group ");
        self.body.push_str(group.data_type.keyword());
        if let Some(name) = &group.name {
            self.body.push(' ');
            self.body.push_str(name);
        }
        self.body.push('\n');

        for scope in &group.scopes {
            self.indent();
            let _ = match scope {
                GroupScope::Package(name) => write!(self.body, "@scope package {name}"),
                GroupScope::Class(name) => write!(self.body, "@scope class {name}"),
                GroupScope::Method {
                    class_name,
                    method_name,
                    method_desc,
                } => write!(
                    self.body,
                    "@scope method {class_name} {method_name} {method_desc}"
                ),
            };
            self.body.push('\n');
        }
        if group.flags {
            self.indent();
            self.body.push_str("@flags\n");
        }
        if group.strict {
            self.indent();
            self.body.push_str("@strict\n");
        }
        if let Some(format) = group.format {
            self.indent();
            let _ = write!(self.body, "@format {format}");
            self.body.push('\n');
        }
        for constant in &group.constants {
            self.indent();
            render_expression(&mut self.body, constant);
            self.body.push('\n');
        }
    }

    fn visit_target_field(&mut self, target: TargetField) {
        let _ = write!(
            self.body,
            "\ntarget_field {} {} {} {}\n",
            target.class_name, target.field_name, target.field_desc, target.group_name
        );
    }

    fn visit_target_method(&mut self, target: TargetMethod) {
        let _ = write!(
            self.body,
            "\ntarget_method {} {} {}\n",
            target.class_name, target.method_name, target.method_desc
        );

        // Map iteration order must not leak into the output.
        let mut params: Vec<(&u32, &String)> = target.param_groups.iter().collect();
        params.sort_by_key(|(index, _)| **index);
        for (index, group) in params {
            self.indent();
            let _ = write!(self.body, "param {index} {group}");
            self.body.push('\n');
        }
        if let Some(group) = &target.return_group {
            self.indent();
            let _ = write!(self.body, "return {group}");
            self.body.push('\n');
        }
    }

    fn visit_target_annotation(&mut self, target: TargetAnnotation) {
        let _ = write!(
            self.body,
            "\ntarget_annotation {} {}\n",
            target.class_name, target.member_name
        );
    }
}
