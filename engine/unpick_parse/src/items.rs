//! Item productions: group definitions and targets.

use rustc_hash::FxHashMap;
use tracing::trace;
use unpick_diagnostic::{ErrorKind, ParseError, ParseResult};
use unpick_ir::{
    DataType, DocumentVisitor, Expression, GroupDefinition, GroupFormat, GroupScope,
    TargetAnnotation, TargetField, TargetMethod,
};
use unpick_lexer::TokenKind;

use crate::Parser;

impl<V: DocumentVisitor> Parser<'_, '_, V> {
    /// `group <datatype> [name]` and its indented attribute lines.
    pub(crate) fn parse_group(&mut self, docs: Option<String>) -> ParseResult<()> {
        let dt_token = self.next()?;
        let data_type = match &dt_token.kind {
            TokenKind::Ident(word) => DataType::from_keyword(word),
            _ => None,
        };
        let Some(data_type) = data_type else {
            return Self::err_expected("data type", &dt_token);
        };

        let mut name = None;
        let token = self.next()?;
        let end = match token.kind {
            TokenKind::Ident(word) if !word.contains('.') => {
                name = Some(word);
                self.next()?
            }
            _ => token,
        };
        if !end.kind.is_newline_or_eof() {
            return Self::err_expected("'\\n'", &end);
        }

        let mut scopes = Vec::new();
        let mut flags = false;
        let mut strict = false;
        let mut format = None;
        let mut constants: Vec<Expression> = Vec::new();

        while matches!(self.peek()?.kind, TokenKind::Indent(_)) {
            self.next()?;
            if self.peek()?.kind == TokenKind::At {
                let at = self.next()?;
                let attr_token = self.next()?;
                let TokenKind::Ident(attr) = &attr_token.kind else {
                    return Self::err_expected("attribute", &attr_token);
                };
                match attr.as_str() {
                    "scope" => scopes.push(self.parse_scope()?),
                    "strict" => {
                        if strict {
                            return Err(ParseError::new(
                                ErrorKind::DuplicateAttribute("strict"),
                                at.line,
                                at.column,
                            ));
                        }
                        strict = true;
                    }
                    "flags" => {
                        if flags {
                            return Err(ParseError::new(
                                ErrorKind::DuplicateAttribute("flags"),
                                at.line,
                                at.column,
                            ));
                        }
                        if name.is_none() {
                            return Err(ParseError::new(
                                ErrorKind::FlagsOnDefaultGroup,
                                at.line,
                                at.column,
                            ));
                        }
                        if matches!(data_type, DataType::String | DataType::Class) {
                            return Err(ParseError::new(
                                ErrorKind::FlagsOnDataType(data_type.keyword()),
                                at.line,
                                at.column,
                            ));
                        }
                        flags = true;
                    }
                    "format" => {
                        if format.is_some() {
                            return Err(ParseError::new(
                                ErrorKind::DuplicateAttribute("format"),
                                at.line,
                                at.column,
                            ));
                        }
                        let value_token = self.next()?;
                        let value = match &value_token.kind {
                            TokenKind::Ident(word) => GroupFormat::from_keyword(word),
                            _ => None,
                        };
                        let Some(value) = value else {
                            return Self::err_expected("format", &value_token);
                        };
                        format = Some(value);
                    }
                    other => {
                        return Err(ParseError::new(
                            ErrorKind::UnknownAttribute(other.to_owned()),
                            attr_token.line,
                            attr_token.column,
                        ));
                    }
                }
                self.expect_newline()?;
            } else {
                constants.push(self.parse_constant(data_type)?);
                self.expect_newline()?;
            }
        }

        trace!(data_type = %data_type, name = name.as_deref(), "parsed group definition");
        self.visitor.visit_group_definition(GroupDefinition {
            scopes,
            flags,
            strict,
            data_type,
            name,
            constants,
            format,
            docs,
        });
        Ok(())
    }

    /// `@scope package <name>` / `@scope class <name>` /
    /// `@scope method <class> <name> <desc>`.
    fn parse_scope(&mut self) -> ParseResult<GroupScope> {
        let kind_token = self.next()?;
        let TokenKind::Ident(kind) = &kind_token.kind else {
            return Self::err_expected("scope type", &kind_token);
        };
        match kind.as_str() {
            "package" => Ok(GroupScope::Package(self.dotted_ident("package name")?)),
            "class" => Ok(GroupScope::Class(self.dotted_ident("class name")?)),
            "method" => {
                let class_name = self.dotted_ident("class name")?;
                let method_name = self.lexer.next_method_name()?;
                let method_desc = self.lexer.next_method_descriptor()?;
                Ok(GroupScope::Method {
                    class_name,
                    method_name,
                    method_desc,
                })
            }
            _ => Self::err_expected("scope type", &kind_token),
        }
    }

    /// `target_field <class> <field> <desc> <group>`.
    pub(crate) fn parse_target_field(&mut self) -> ParseResult<()> {
        let class_name = self.dotted_ident("class name")?;
        let (field_name, ..) = self.simple_ident("identifier")?;
        let field_desc = self.lexer.next_field_descriptor()?;
        let (group_name, ..) = self.simple_ident("identifier")?;
        self.expect_newline()?;

        trace!(class = %class_name, field = %field_name, "parsed target_field");
        self.visitor.visit_target_field(TargetField {
            class_name,
            field_name,
            field_desc,
            group_name,
        });
        Ok(())
    }

    /// `target_method <class> <method> <desc>` and its indented
    /// `param <N> <group>` / `return <group>` lines.
    pub(crate) fn parse_target_method(&mut self) -> ParseResult<()> {
        let class_name = self.dotted_ident("class name")?;
        let method_name = self.lexer.next_method_name()?;
        let method_desc = self.lexer.next_method_descriptor()?;
        self.expect_newline()?;

        let mut param_groups: FxHashMap<u32, String> = FxHashMap::default();
        let mut return_group: Option<String> = None;

        while matches!(self.peek()?.kind, TokenKind::Indent(_)) {
            self.next()?;
            let token = self.next()?;
            let TokenKind::Ident(word) = &token.kind else {
                return Self::err_expected("'param' or 'return'", &token);
            };
            match word.as_str() {
                "param" => {
                    let index_token = self.next()?;
                    let TokenKind::Int(lit) = index_token.kind else {
                        return Self::err_expected("parameter index", &index_token);
                    };
                    if lit.wide || lit.overflow {
                        return Self::err_expected("parameter index", &index_token);
                    }
                    let Ok(index) = u32::try_from(lit.magnitude) else {
                        return Err(ParseError::new(
                            ErrorKind::IntegerOutOfBounds,
                            index_token.line,
                            index_token.column,
                        ));
                    };
                    let (group, ..) = self.simple_ident("identifier")?;
                    if param_groups.insert(index, group).is_some() {
                        return Err(ParseError::new(
                            ErrorKind::DuplicateParameter(index),
                            index_token.line,
                            index_token.column,
                        ));
                    }
                }
                "return" => {
                    if return_group.is_some() {
                        return Err(ParseError::new(
                            ErrorKind::DuplicateReturnGroup,
                            token.line,
                            token.column,
                        ));
                    }
                    let (group, ..) = self.simple_ident("identifier")?;
                    return_group = Some(group);
                }
                _ => return Self::err_expected("'param' or 'return'", &token),
            }
            self.expect_newline()?;
        }

        trace!(class = %class_name, method = %method_name, "parsed target_method");
        self.visitor.visit_target_method(TargetMethod {
            class_name,
            method_name,
            method_desc,
            param_groups,
            return_group,
        });
        Ok(())
    }

    /// `target_annotation <class> <member>`.
    pub(crate) fn parse_target_annotation(&mut self) -> ParseResult<()> {
        let class_name = self.dotted_ident("class name")?;
        let (member_name, ..) = self.simple_ident("identifier")?;
        self.expect_newline()?;

        trace!(class = %class_name, member = %member_name, "parsed target_annotation");
        self.visitor.visit_target_annotation(TargetAnnotation {
            class_name,
            member_name,
        });
        Ok(())
    }
}
