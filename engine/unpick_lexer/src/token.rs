//! Token model.

use std::fmt;

/// The radix an integer token was written in.
///
/// Mirrors the AST radix but lives here so the lexer has no AST dependency.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IntRadix {
    Decimal,
    Hex,
    Binary,
    Octal,
}

/// An integer token, carried as an unsigned magnitude.
///
/// Bounds are not checked here: whether a magnitude is legal depends on the
/// sign context (`-2147483648` is fine, bare `2147483648` is not), which
/// only the parser knows. `overflow` is set when the digits exceed even a
/// u64, so the parser can report out-of-bounds with the right width.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntLiteral {
    pub magnitude: u64,
    pub radix: IntRadix,
    /// `L`/`l` suffix present.
    pub wide: bool,
    pub overflow: bool,
}

/// A single token with the 1-based position of its first character.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind: TokenKind,
    pub line: u32,
    pub column: u32,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TokenKind {
    /// End of a line. Blank and comment lines collapse to this.
    Newline,
    /// Leading whitespace of an indented line, verbatim.
    Indent(String),
    /// A `#:` documentation line, text after the marker and one space.
    DocLine(String),
    /// Identifier, possibly dot-joined (`foo.Bar$Baz`).
    Ident(String),
    Int(IntLiteral),
    Float(f32),
    Double(f64),
    Char(char),
    Str(String),
    At,
    Dot,
    Colon,
    LParen,
    RParen,
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    Amp,
    Pipe,
    Caret,
    Tilde,
    Shl,
    Shr,
    Ushr,
    Eof,
}

impl TokenKind {
    /// Shorthand used by parser lookahead.
    pub fn is_newline_or_eof(&self) -> bool {
        matches!(self, TokenKind::Newline | TokenKind::Eof)
    }
}

/// Renders the token's source text, for "before 'X' token" messages.
/// Newlines render as the two characters `\n`.
impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Newline => f.write_str("\\n"),
            TokenKind::Indent(ws) => f.write_str(ws),
            TokenKind::DocLine(text) => write!(f, "#: {text}"),
            TokenKind::Ident(name) => f.write_str(name),
            TokenKind::Int(lit) => {
                match lit.radix {
                    IntRadix::Decimal => write!(f, "{}", lit.magnitude)?,
                    IntRadix::Hex => write!(f, "0x{:x}", lit.magnitude)?,
                    IntRadix::Binary => write!(f, "0b{:b}", lit.magnitude)?,
                    IntRadix::Octal => write!(f, "0{:o}", lit.magnitude)?,
                }
                if lit.wide {
                    f.write_str("L")?;
                }
                Ok(())
            }
            TokenKind::Float(value) => write!(f, "{value}F"),
            TokenKind::Double(value) => write!(f, "{value}"),
            TokenKind::Char(c) => write!(f, "'{c}'"),
            TokenKind::Str(s) => write!(f, "\"{s}\""),
            TokenKind::At => f.write_str("@"),
            TokenKind::Dot => f.write_str("."),
            TokenKind::Colon => f.write_str(":"),
            TokenKind::LParen => f.write_str("("),
            TokenKind::RParen => f.write_str(")"),
            TokenKind::Plus => f.write_str("+"),
            TokenKind::Minus => f.write_str("-"),
            TokenKind::Star => f.write_str("*"),
            TokenKind::Slash => f.write_str("/"),
            TokenKind::Percent => f.write_str("%"),
            TokenKind::Amp => f.write_str("&"),
            TokenKind::Pipe => f.write_str("|"),
            TokenKind::Caret => f.write_str("^"),
            TokenKind::Tilde => f.write_str("~"),
            TokenKind::Shl => f.write_str("<<"),
            TokenKind::Shr => f.write_str(">>"),
            TokenKind::Ushr => f.write_str(">>>"),
            TokenKind::Eof => f.write_str("<EOF>"),
        }
    }
}
