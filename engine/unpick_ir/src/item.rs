//! Top-level document items and their builders.

use rustc_hash::FxHashMap;

use crate::{DataType, Expression, GroupFormat, GroupScope};

/// A constant group definition.
///
/// A group with no `name` is the default group for its data type within its
/// scopes. `docs` holds the joined text of the `#:` lines immediately
/// preceding the definition, embedded newlines included.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupDefinition {
    pub scopes: Vec<GroupScope>,
    pub flags: bool,
    pub strict: bool,
    pub data_type: DataType,
    pub name: Option<String>,
    pub constants: Vec<Expression>,
    pub format: Option<GroupFormat>,
    pub docs: Option<String>,
}

impl GroupDefinition {
    /// Starts a builder for an unnamed (default) group.
    pub fn global(data_type: DataType) -> GroupDefinitionBuilder {
        GroupDefinitionBuilder {
            inner: GroupDefinition {
                scopes: Vec::new(),
                flags: false,
                strict: false,
                data_type,
                name: None,
                constants: Vec::new(),
                format: None,
                docs: None,
            },
        }
    }

    /// Starts a builder for a named group.
    pub fn named(data_type: DataType, name: impl Into<String>) -> GroupDefinitionBuilder {
        let mut builder = GroupDefinition::global(data_type);
        builder.inner.name = Some(name.into());
        builder
    }
}

#[derive(Debug, Clone)]
pub struct GroupDefinitionBuilder {
    inner: GroupDefinition,
}

impl GroupDefinitionBuilder {
    pub fn scope(mut self, scope: GroupScope) -> Self {
        self.inner.scopes.push(scope);
        self
    }

    pub fn flags(mut self) -> Self {
        self.inner.flags = true;
        self
    }

    pub fn strict(mut self) -> Self {
        self.inner.strict = true;
        self
    }

    pub fn format(mut self, format: GroupFormat) -> Self {
        self.inner.format = Some(format);
        self
    }

    pub fn constant(mut self, expr: Expression) -> Self {
        self.inner.constants.push(expr);
        self
    }

    pub fn docs(mut self, docs: impl Into<String>) -> Self {
        self.inner.docs = Some(docs.into());
        self
    }

    pub fn build(self) -> GroupDefinition {
        self.inner
    }
}

/// `target_field class field desc group`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetField {
    pub class_name: String,
    pub field_name: String,
    pub field_desc: String,
    pub group_name: String,
}

impl TargetField {
    pub fn new(
        class_name: impl Into<String>,
        field_name: impl Into<String>,
        field_desc: impl Into<String>,
        group_name: impl Into<String>,
    ) -> Self {
        TargetField {
            class_name: class_name.into(),
            field_name: field_name.into(),
            field_desc: field_desc.into(),
            group_name: group_name.into(),
        }
    }
}

/// `target_method class method desc` plus its `param`/`return` lines.
///
/// `param_groups` maps parameter index to group name. Iteration order is
/// unspecified; the writer sorts indices on emission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetMethod {
    pub class_name: String,
    pub method_name: String,
    pub method_desc: String,
    pub param_groups: FxHashMap<u32, String>,
    pub return_group: Option<String>,
}

impl TargetMethod {
    pub fn builder(
        class_name: impl Into<String>,
        method_name: impl Into<String>,
        method_desc: impl Into<String>,
    ) -> TargetMethodBuilder {
        TargetMethodBuilder {
            inner: TargetMethod {
                class_name: class_name.into(),
                method_name: method_name.into(),
                method_desc: method_desc.into(),
                param_groups: FxHashMap::default(),
                return_group: None,
            },
        }
    }
}

#[derive(Debug, Clone)]
pub struct TargetMethodBuilder {
    inner: TargetMethod,
}

impl TargetMethodBuilder {
    pub fn param(mut self, index: u32, group: impl Into<String>) -> Self {
        self.inner.param_groups.insert(index, group.into());
        self
    }

    pub fn return_group(mut self, group: impl Into<String>) -> Self {
        self.inner.return_group = Some(group.into());
        self
    }

    pub fn build(self) -> TargetMethod {
        self.inner
    }
}

/// `target_annotation class member`, accepted from format version 4.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TargetAnnotation {
    pub class_name: String,
    pub member_name: String,
}

impl TargetAnnotation {
    pub fn new(class_name: impl Into<String>, member_name: impl Into<String>) -> Self {
        TargetAnnotation {
            class_name: class_name.into(),
            member_name: member_name.into(),
        }
    }
}

/// Any top-level item, for consumers that collect a document.
#[derive(Debug, Clone, PartialEq)]
pub enum Item {
    Group(GroupDefinition),
    Field(TargetField),
    Method(TargetMethod),
    Annotation(TargetAnnotation),
}
