//! Constant expression grammar.
//!
//! Left-associative precedence climbing, lowest to highest:
//! `| → ^ → & → << >> >>> → + - → * / % → unary - ~ → primary`.
//!
//! Alongside the tree, each production tracks the literal kind the
//! expression would evaluate to (with the position of a representative
//! literal), so group parsing can reject constants whose kind is
//! incompatible with the group's data type. Field references contribute no
//! kind; their types are not resolved here.

use unpick_diagnostic::{ErrorKind, ParseError, ParseResult};
use unpick_ir::{
    BinaryOp, DataType, DocumentVisitor, Expression, FieldRef, Literal, Radix, UnaryOp,
};
use unpick_lexer::{IntLiteral, IntRadix, TokenKind};

use crate::Parser;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LiteralKind {
    Int,
    Long,
    Float,
    Double,
    Char,
    Str,
}

/// Promotion rank. `Char` combines like `Int`.
fn numeric_rank(kind: LiteralKind) -> u8 {
    match kind {
        LiteralKind::Char | LiteralKind::Int => 1,
        LiteralKind::Long => 2,
        LiteralKind::Float => 3,
        LiteralKind::Double => 4,
        LiteralKind::Str => 5,
    }
}

fn accepts(data_type: DataType, kind: LiteralKind) -> bool {
    match data_type {
        DataType::Byte | DataType::Short | DataType::Int => {
            matches!(kind, LiteralKind::Int | LiteralKind::Char)
        }
        DataType::Long => matches!(
            kind,
            LiteralKind::Int | LiteralKind::Long | LiteralKind::Char
        ),
        DataType::Float => matches!(
            kind,
            LiteralKind::Int | LiteralKind::Long | LiteralKind::Float | LiteralKind::Char
        ),
        DataType::Double => !matches!(kind, LiteralKind::Str),
        DataType::Char => matches!(kind, LiteralKind::Char | LiteralKind::Int),
        DataType::String => matches!(kind, LiteralKind::Str),
        DataType::Class => false,
    }
}

type KindAt = Option<(LiteralKind, u32, u32)>;

struct TypedExpr {
    expr: Expression,
    /// Kind and position of the literal that determines it; `None` for
    /// expressions made of field references only.
    kind: KindAt,
}

fn merge_kinds(a: KindAt, b: KindAt) -> KindAt {
    match (a, b) {
        (None, k) | (k, None) => k,
        (Some(ka), Some(kb)) => {
            if ka.0 == LiteralKind::Str {
                return Some(ka);
            }
            if kb.0 == LiteralKind::Str {
                return Some(kb);
            }
            if numeric_rank(ka.0) >= numeric_rank(kb.0) {
                Some(ka)
            } else {
                Some(kb)
            }
        }
    }
}

fn combine(op: BinaryOp, lhs: TypedExpr, rhs: TypedExpr) -> TypedExpr {
    TypedExpr {
        kind: merge_kinds(lhs.kind, rhs.kind),
        expr: Expression::binary(op, lhs.expr, rhs.expr),
    }
}

fn convert_radix(radix: IntRadix) -> Radix {
    match radix {
        IntRadix::Decimal => Radix::Decimal,
        IntRadix::Hex => Radix::Hex,
        IntRadix::Binary => Radix::Binary,
        IntRadix::Octal => Radix::Octal,
    }
}

/// The kind a cast expression produces.
fn cast_kind(data_type: DataType) -> LiteralKind {
    match data_type {
        DataType::Byte | DataType::Short | DataType::Int => LiteralKind::Int,
        DataType::Long => LiteralKind::Long,
        DataType::Float => LiteralKind::Float,
        DataType::Double => LiteralKind::Double,
        // Only primitive casts reach here
        _ => LiteralKind::Char,
    }
}

/// Applies the sign-aware bounds rules and converts to an AST literal.
///
/// Decimal magnitudes must fit the signed positive range of their width,
/// one more when negated (the two's-complement minimum). Hex, binary, and
/// octal magnitudes may use the full unsigned bit-pattern range.
fn int_literal(
    lit: IntLiteral,
    line: u32,
    column: u32,
    negated: bool,
) -> ParseResult<(Literal, LiteralKind)> {
    let radix = convert_radix(lit.radix);
    if lit.wide {
        let out_of_bounds = lit.overflow
            || (lit.radix == IntRadix::Decimal
                && lit.magnitude > (1u64 << 63) - 1 + u64::from(negated));
        if out_of_bounds {
            return Err(ParseError::new(ErrorKind::LongOutOfBounds, line, column));
        }
        Ok((
            Literal::Long {
                value: lit.magnitude,
                radix,
            },
            LiteralKind::Long,
        ))
    } else {
        let max = if lit.radix == IntRadix::Decimal {
            (1u64 << 31) - 1 + u64::from(negated)
        } else {
            u64::from(u32::MAX)
        };
        if lit.overflow || lit.magnitude > max {
            return Err(ParseError::new(ErrorKind::IntegerOutOfBounds, line, column));
        }
        #[allow(clippy::cast_possible_truncation)]
        let value = lit.magnitude as u32;
        Ok((Literal::Integer { value, radix }, LiteralKind::Int))
    }
}

impl<V: DocumentVisitor> Parser<'_, '_, V> {
    /// One constant expression line, type-checked against the group's
    /// data type.
    pub(crate) fn parse_constant(&mut self, data_type: DataType) -> ParseResult<Expression> {
        let typed = self.parse_expression(data_type)?;
        if let Some((kind, line, column)) = typed.kind {
            if !accepts(data_type, kind) {
                return Err(ParseError::new(
                    ErrorKind::ConstantTypeMismatch(data_type.keyword()),
                    line,
                    column,
                ));
            }
        }
        Ok(typed.expr)
    }

    fn peek_kind(&mut self) -> ParseResult<TokenKind> {
        Ok(self.peek()?.kind.clone())
    }

    fn parse_expression(&mut self, data_type: DataType) -> ParseResult<TypedExpr> {
        self.parse_bit_or(data_type)
    }

    fn parse_bit_or(&mut self, data_type: DataType) -> ParseResult<TypedExpr> {
        let mut lhs = self.parse_bit_xor(data_type)?;
        while self.peek_kind()? == TokenKind::Pipe {
            self.next()?;
            let rhs = self.parse_bit_xor(data_type)?;
            lhs = combine(BinaryOp::BitOr, lhs, rhs);
        }
        Ok(lhs)
    }

    fn parse_bit_xor(&mut self, data_type: DataType) -> ParseResult<TypedExpr> {
        let mut lhs = self.parse_bit_and(data_type)?;
        while self.peek_kind()? == TokenKind::Caret {
            self.next()?;
            let rhs = self.parse_bit_and(data_type)?;
            lhs = combine(BinaryOp::BitXor, lhs, rhs);
        }
        Ok(lhs)
    }

    fn parse_bit_and(&mut self, data_type: DataType) -> ParseResult<TypedExpr> {
        let mut lhs = self.parse_shift(data_type)?;
        while self.peek_kind()? == TokenKind::Amp {
            self.next()?;
            let rhs = self.parse_shift(data_type)?;
            lhs = combine(BinaryOp::BitAnd, lhs, rhs);
        }
        Ok(lhs)
    }

    fn parse_shift(&mut self, data_type: DataType) -> ParseResult<TypedExpr> {
        let mut lhs = self.parse_additive(data_type)?;
        loop {
            let op = match self.peek_kind()? {
                TokenKind::Shl => BinaryOp::Shl,
                TokenKind::Shr => BinaryOp::Shr,
                TokenKind::Ushr => BinaryOp::Ushr,
                _ => return Ok(lhs),
            };
            self.next()?;
            let rhs = self.parse_additive(data_type)?;
            lhs = combine(op, lhs, rhs);
        }
    }

    fn parse_additive(&mut self, data_type: DataType) -> ParseResult<TypedExpr> {
        let mut lhs = self.parse_multiplicative(data_type)?;
        loop {
            let op = match self.peek_kind()? {
                TokenKind::Plus => BinaryOp::Add,
                TokenKind::Minus => BinaryOp::Sub,
                _ => return Ok(lhs),
            };
            self.next()?;
            let rhs = self.parse_multiplicative(data_type)?;
            lhs = combine(op, lhs, rhs);
        }
    }

    fn parse_multiplicative(&mut self, data_type: DataType) -> ParseResult<TypedExpr> {
        let mut lhs = self.parse_unary(data_type)?;
        loop {
            let op = match self.peek_kind()? {
                TokenKind::Star => BinaryOp::Mul,
                TokenKind::Slash => BinaryOp::Div,
                TokenKind::Percent => BinaryOp::Mod,
                _ => return Ok(lhs),
            };
            self.next()?;
            let rhs = self.parse_unary(data_type)?;
            lhs = combine(op, lhs, rhs);
        }
    }

    fn parse_unary(&mut self, data_type: DataType) -> ParseResult<TypedExpr> {
        match self.peek_kind()? {
            TokenKind::Minus => {
                self.next()?;
                // A literal directly under the minus gets the sign-aware
                // bounds check; anything else is a plain unary node.
                match self.peek_kind()? {
                    TokenKind::Int(lit) => {
                        let token = self.next()?;
                        let (literal, kind) = int_literal(lit, token.line, token.column, true)?;
                        Ok(TypedExpr {
                            expr: Expression::negated(literal),
                            kind: Some((kind, token.line, token.column)),
                        })
                    }
                    TokenKind::Float(value) => {
                        let token = self.next()?;
                        Ok(TypedExpr {
                            expr: Expression::negated(Literal::Float(value)),
                            kind: Some((LiteralKind::Float, token.line, token.column)),
                        })
                    }
                    TokenKind::Double(value) => {
                        let token = self.next()?;
                        Ok(TypedExpr {
                            expr: Expression::negated(Literal::Double(value)),
                            kind: Some((LiteralKind::Double, token.line, token.column)),
                        })
                    }
                    _ => {
                        let operand = self.parse_unary(data_type)?;
                        Ok(TypedExpr {
                            expr: Expression::unary(UnaryOp::Negate, operand.expr),
                            kind: operand.kind,
                        })
                    }
                }
            }
            TokenKind::Tilde => {
                self.next()?;
                let operand = self.parse_unary(data_type)?;
                Ok(TypedExpr {
                    expr: Expression::unary(UnaryOp::BitNot, operand.expr),
                    kind: operand.kind,
                })
            }
            _ => self.parse_primary(data_type),
        }
    }

    fn parse_primary(&mut self, data_type: DataType) -> ParseResult<TypedExpr> {
        let token = self.next()?;
        let at = (token.line, token.column);
        match token.kind {
            TokenKind::Int(lit) => {
                let (literal, kind) = int_literal(lit, at.0, at.1, false)?;
                Ok(TypedExpr {
                    expr: Expression::Literal(literal),
                    kind: Some((kind, at.0, at.1)),
                })
            }
            TokenKind::Float(value) => Ok(TypedExpr {
                expr: Expression::Literal(Literal::Float(value)),
                kind: Some((LiteralKind::Float, at.0, at.1)),
            }),
            TokenKind::Double(value) => Ok(TypedExpr {
                expr: Expression::Literal(Literal::Double(value)),
                kind: Some((LiteralKind::Double, at.0, at.1)),
            }),
            TokenKind::Char(value) => Ok(TypedExpr {
                expr: Expression::Literal(Literal::Character(value)),
                kind: Some((LiteralKind::Char, at.0, at.1)),
            }),
            TokenKind::Str(value) => Ok(TypedExpr {
                expr: Expression::Literal(Literal::String(value)),
                kind: Some((LiteralKind::Str, at.0, at.1)),
            }),
            TokenKind::LParen => self.parse_cast_or_paren(data_type, at),
            TokenKind::Ident(name) => self.parse_field_ref(data_type, name),
            // A bare dot where an expression starts is a float missing
            // its whole part (".5")
            TokenKind::Dot => Err(ParseError::new(ErrorKind::MissingWholePart, at.0, at.1)),
            _ => Self::err_expected("expression", &token),
        }
    }

    /// After `(`: an identifier must be a primitive data type (cast);
    /// anything else is a parenthesized expression.
    fn parse_cast_or_paren(
        &mut self,
        data_type: DataType,
        at: (u32, u32),
    ) -> ParseResult<TypedExpr> {
        if let TokenKind::Ident(word) = self.peek_kind()? {
            let cast_to = DataType::from_keyword(&word)
                .filter(|&dt| !matches!(dt, DataType::String | DataType::Class));
            let Some(cast_to) = cast_to else {
                let token = self.next()?;
                return Self::err_expected("data type", &token);
            };
            self.next()?;
            let rparen = self.next()?;
            if rparen.kind != TokenKind::RParen {
                return Self::err_expected("')'", &rparen);
            }
            let operand = self.parse_primary(data_type)?;
            return Ok(TypedExpr {
                expr: Expression::cast(cast_to, operand.expr),
                kind: Some((cast_kind(cast_to), at.0, at.1)),
            });
        }
        let inner = self.parse_expression(data_type)?;
        let rparen = self.next()?;
        if rparen.kind != TokenKind::RParen {
            return Self::err_expected("')'", &rparen);
        }
        Ok(TypedExpr {
            expr: Expression::paren(inner.expr),
            kind: inner.kind,
        })
    }

    /// `class[.field][:instance][:type]`. In `Class` groups the whole
    /// dotted name is the class; elsewhere the last segment is the field
    /// name and a single-segment name is an error.
    fn parse_field_ref(&mut self, data_type: DataType, name: String) -> ParseResult<TypedExpr> {
        let mut is_static = true;
        let mut field_type = None;

        if self.peek_kind()? == TokenKind::Colon {
            self.next()?;
            let token = self.next()?;
            let TokenKind::Ident(word) = &token.kind else {
                return Self::err_expected("data type", &token);
            };
            if word == "instance" {
                is_static = false;
                if self.peek_kind()? == TokenKind::Colon {
                    self.next()?;
                    let token = self.next()?;
                    let ty = match &token.kind {
                        TokenKind::Ident(word) => DataType::from_keyword(word),
                        _ => None,
                    };
                    let Some(ty) = ty else {
                        return Self::err_expected("data type", &token);
                    };
                    field_type = Some(ty);
                }
            } else {
                let Some(ty) = DataType::from_keyword(word) else {
                    return Self::err_expected("data type", &token);
                };
                field_type = Some(ty);
            }
        }

        let field = if data_type == DataType::Class {
            FieldRef {
                class_name: name,
                field_name: None,
                field_type,
                is_static,
            }
        } else if let Some((class, field)) = name.rsplit_once('.') {
            FieldRef {
                class_name: class.to_owned(),
                field_name: Some(field.to_owned()),
                field_type,
                is_static,
            }
        } else {
            let token = self.peek()?;
            return Self::err_expected("'.'", token);
        };

        Ok(TypedExpr {
            expr: Expression::Field(field),
            kind: None,
        })
    }
}
