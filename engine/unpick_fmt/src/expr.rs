//! Expression and literal rendering.
//!
//! Binary expressions print with single spaces around the operator and no
//! parenthesization of their own; `Paren` nodes carry the parentheses the
//! source had. A `Negate` wrapping a literal prints as a leading `-`
//! directly against the literal text, which is what makes the
//! two's-complement minimum values come out as single negative tokens.

use std::fmt::Write;

use unpick_ir::{Expression, FieldRef, Literal, Radix};

pub(crate) fn render_expression(out: &mut String, expr: &Expression) {
    match expr {
        Expression::Literal(lit) => render_literal(out, lit),
        Expression::Field(field) => render_field(out, field),
        Expression::Unary { op, operand } => {
            out.push_str(op.symbol());
            render_expression(out, operand);
        }
        Expression::Binary { op, lhs, rhs } => {
            render_expression(out, lhs);
            out.push(' ');
            out.push_str(op.symbol());
            out.push(' ');
            render_expression(out, rhs);
        }
        Expression::Cast { data_type, operand } => {
            out.push('(');
            out.push_str(data_type.keyword());
            out.push_str(") ");
            render_expression(out, operand);
        }
        Expression::Paren(inner) => {
            out.push('(');
            render_expression(out, inner);
            out.push(')');
        }
    }
}

fn render_field(out: &mut String, field: &FieldRef) {
    out.push_str(&field.class_name);
    if let Some(name) = &field.field_name {
        out.push('.');
        out.push_str(name);
    }
    if !field.is_static {
        out.push_str(":instance");
    }
    if let Some(data_type) = field.field_type {
        out.push(':');
        out.push_str(data_type.keyword());
    }
}

fn render_literal(out: &mut String, lit: &Literal) {
    match lit {
        Literal::Integer { value, radix } => render_radix(out, u64::from(*value), *radix),
        Literal::Long { value, radix } => {
            render_radix(out, *value, *radix);
            out.push('L');
        }
        Literal::Float(value) => {
            render_float(out, format!("{value}"), value.is_finite());
            out.push('F');
        }
        Literal::Double(value) => render_float(out, format!("{value}"), value.is_finite()),
        Literal::Character(c) => {
            out.push('\'');
            escape_char(out, *c, '\'', false);
            out.push('\'');
        }
        Literal::String(s) => {
            out.push('"');
            let mut chars = s.chars().peekable();
            while let Some(c) = chars.next() {
                let next_is_octal = chars.peek().is_some_and(|n| ('0'..='7').contains(n));
                escape_char(out, c, '"', next_is_octal);
            }
            out.push('"');
        }
    }
}

fn render_radix(out: &mut String, value: u64, radix: Radix) {
    out.push_str(radix.prefix());
    let _ = match radix {
        Radix::Decimal => write!(out, "{value}"),
        Radix::Hex => write!(out, "{value:x}"),
        Radix::Binary => write!(out, "{value:b}"),
        Radix::Octal => write!(out, "{value:o}"),
    };
}

/// `Display` for floats prints whole values without a decimal point, which
/// would re-lex as an integer; restore the point in that case.
fn render_float(out: &mut String, text: String, finite: bool) {
    out.push_str(&text);
    if finite && !text.contains('.') {
        out.push_str(".0");
    }
}

/// Characters the reader would choke on or a human would not see are
/// escaped; everything else is written raw. `next_is_octal_digit` forces
/// NUL to its three-digit form so the following character cannot be
/// swallowed by the greedy octal escape rule.
fn escape_char(out: &mut String, c: char, quote: char, next_is_octal_digit: bool) {
    match c {
        '\u{8}' => out.push_str("\\b"),
        '\t' => out.push_str("\\t"),
        '\n' => out.push_str("\\n"),
        '\u{c}' => out.push_str("\\f"),
        '\r' => out.push_str("\\r"),
        '\\' => out.push_str("\\\\"),
        '\0' if !next_is_octal_digit => out.push_str("\\0"),
        c if c == quote => {
            out.push('\\');
            out.push(c);
        }
        c if u32::from(c) < 0x20 => {
            let _ = write!(out, "\\{:03o}", u32::from(c));
        }
        c if is_invisible(c) => {
            let _ = write!(out, "\\u{:04x}", u32::from(c));
        }
        c => out.push(c),
    }
}

/// Zero-width, bidi, and other format characters that render as nothing.
fn is_invisible(c: char) -> bool {
    matches!(
        u32::from(c),
        0x7f..=0x9f | 0x200b..=0x200f | 0x2028..=0x202e | 0x2060..=0x2064 | 0xfeff
    )
}
