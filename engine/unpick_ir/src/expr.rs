//! Constant expressions and literals.

use crate::DataType;
use crate::data_type::Radix;

/// A literal constant value.
///
/// Integer values store the unsigned bit pattern of the written magnitude.
/// Negative constants are never literals: the parser wraps the positive
/// magnitude in a [`UnaryOp::Negate`] node, which is what makes the
/// two's-complement minimum values representable (their magnitude exceeds
/// the positive range of the same width).
#[derive(Debug, Clone, PartialEq)]
pub enum Literal {
    Integer { value: u32, radix: Radix },
    Long { value: u64, radix: Radix },
    Float(f32),
    Double(f64),
    Character(char),
    String(String),
}

impl Literal {
    /// A decimal 32-bit integer literal.
    pub fn int(value: u32) -> Self {
        Literal::Integer {
            value,
            radix: Radix::Decimal,
        }
    }

    /// A decimal 64-bit integer literal.
    pub fn long(value: u64) -> Self {
        Literal::Long {
            value,
            radix: Radix::Decimal,
        }
    }
}

/// Unary operators, highest precedence level of the expression grammar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UnaryOp {
    Negate,
    BitNot,
}

impl UnaryOp {
    pub fn symbol(self) -> &'static str {
        match self {
            UnaryOp::Negate => "-",
            UnaryOp::BitNot => "~",
        }
    }
}

/// Binary operators. Precedence and associativity live in the parser; the
/// AST keeps whatever shape the grammar produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    Add,
    Sub,
    Mul,
    Div,
    Mod,
    BitAnd,
    BitOr,
    BitXor,
    Shl,
    Shr,
    Ushr,
}

impl BinaryOp {
    pub fn symbol(self) -> &'static str {
        match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Mod => "%",
            BinaryOp::BitAnd => "&",
            BinaryOp::BitOr => "|",
            BinaryOp::BitXor => "^",
            BinaryOp::Shl => "<<",
            BinaryOp::Shr => ">>",
            BinaryOp::Ushr => ">>>",
        }
    }
}

/// A reference to a named constant field, or to a bare class.
///
/// `field_name` is `None` for field-less references (legal only in `Class`
/// groups, where the whole dotted name is the class). `field_type` is the
/// explicit `:type` suffix when present; without it, remapping falls back
/// to a descriptor lookup hook. `is_static` defaults to `true`; the
/// `:instance` suffix clears it.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldRef {
    pub class_name: String,
    pub field_name: Option<String>,
    pub field_type: Option<DataType>,
    pub is_static: bool,
}

impl FieldRef {
    /// A static field reference with no explicit type suffix.
    pub fn of(class_name: impl Into<String>, field_name: impl Into<String>) -> Self {
        FieldRef {
            class_name: class_name.into(),
            field_name: Some(field_name.into()),
            field_type: None,
            is_static: true,
        }
    }

    /// A field-less reference to a bare class.
    pub fn class(class_name: impl Into<String>) -> Self {
        FieldRef {
            class_name: class_name.into(),
            field_name: None,
            field_type: None,
            is_static: true,
        }
    }
}

/// A constant expression tree.
///
/// The engine never evaluates these; it only parses, prints, and remaps
/// them. `Paren` nodes are kept so the writer reproduces the source shape
/// exactly instead of re-deriving parenthesization from precedence.
#[derive(Debug, Clone, PartialEq)]
pub enum Expression {
    Literal(Literal),
    Field(FieldRef),
    Unary {
        op: UnaryOp,
        operand: Box<Expression>,
    },
    Binary {
        op: BinaryOp,
        lhs: Box<Expression>,
        rhs: Box<Expression>,
    },
    Cast {
        data_type: DataType,
        operand: Box<Expression>,
    },
    Paren(Box<Expression>),
}

impl Expression {
    pub fn literal(lit: Literal) -> Self {
        Expression::Literal(lit)
    }

    pub fn unary(op: UnaryOp, operand: Expression) -> Self {
        Expression::Unary {
            op,
            operand: Box::new(operand),
        }
    }

    pub fn binary(op: BinaryOp, lhs: Expression, rhs: Expression) -> Self {
        Expression::Binary {
            op,
            lhs: Box::new(lhs),
            rhs: Box::new(rhs),
        }
    }

    pub fn cast(data_type: DataType, operand: Expression) -> Self {
        Expression::Cast {
            data_type,
            operand: Box::new(operand),
        }
    }

    pub fn paren(inner: Expression) -> Self {
        Expression::Paren(Box::new(inner))
    }

    /// A `-literal` node, the canonical form of a negative constant.
    pub fn negated(lit: Literal) -> Self {
        Expression::unary(UnaryOp::Negate, Expression::Literal(lit))
    }
}
