//! Recursive-descent parser for the unpick format.
//!
//! [`parse_document`] drives a [`Lexer`](unpick_lexer::Lexer) over the
//! whole source, delivering items to a [`DocumentVisitor`] as they complete.
//! Parsing is fail-fast: the first grammar or validation error aborts the
//! document with a positioned [`ParseError`]; items delivered before the
//! fault remain with the visitor.
//!
//! All validation that the grammar implies happens here as well: constant
//! expressions type-check against their group's data type, duplicate
//! attributes and parameter indices are rejected, and `target_annotation`
//! is gated on format version 4.

use std::io::Read;

use tracing::trace;
use unpick_diagnostic::{Error, ErrorKind, ParseError, ParseResult};
use unpick_ir::DocumentVisitor;
use unpick_lexer::{Lexer, Token, TokenKind};

mod expr;
mod items;

/// Parses a complete document, delivering items to `visitor`.
pub fn parse_document<V: DocumentVisitor>(source: &str, visitor: &mut V) -> ParseResult<()> {
    let mut parser = Parser {
        lexer: Lexer::new(source),
        peeked: None,
        version: 0,
        visitor,
    };
    let result = parser.parse_header().and_then(|()| parser.parse_items());
    if let Err(err) = &result {
        trace!(line = err.line, column = err.column, message = %err.message(), "parse failed");
    }
    result
}

/// Reads the whole source from `reader`, then parses it.
///
/// I/O errors (including invalid UTF-8) are propagated unchanged.
pub fn parse_reader<R: Read, V: DocumentVisitor>(mut reader: R, visitor: &mut V) -> Result<(), Error> {
    let mut source = String::new();
    reader.read_to_string(&mut source)?;
    parse_document(&source, visitor)?;
    Ok(())
}

const FALLBACK_EOF: Token = Token {
    kind: TokenKind::Eof,
    line: 0,
    column: 0,
};

struct Parser<'src, 'v, V> {
    lexer: Lexer<'src>,
    /// One token of lookahead. Must be empty whenever a descriptor or
    /// method-name sub-scanner runs, since those read the raw cursor.
    peeked: Option<Token>,
    version: u32,
    visitor: &'v mut V,
}

impl<V: DocumentVisitor> Parser<'_, '_, V> {
    fn next(&mut self) -> ParseResult<Token> {
        match self.peeked.take() {
            Some(token) => Ok(token),
            None => self.lexer.next_token(),
        }
    }

    fn peek(&mut self) -> ParseResult<&Token> {
        if self.peeked.is_none() {
            self.peeked = Some(self.lexer.next_token()?);
        }
        Ok(self.peeked.as_ref().unwrap_or(&FALLBACK_EOF))
    }

    fn err_expected<T>(expected: &str, token: &Token) -> ParseResult<T> {
        Err(ParseError::new(
            ErrorKind::Expected {
                expected: expected.to_owned(),
                found: token.kind.to_string(),
            },
            token.line,
            token.column,
        ))
    }

    /// Consumes a newline (end of file counts as one).
    fn expect_newline(&mut self) -> ParseResult<()> {
        let token = self.next()?;
        if token.kind.is_newline_or_eof() {
            Ok(())
        } else {
            Self::err_expected("'\\n'", &token)
        }
    }

    /// An identifier token; dotted names are accepted.
    fn dotted_ident(&mut self, expected: &str) -> ParseResult<String> {
        let token = self.next()?;
        match token.kind {
            TokenKind::Ident(name) => Ok(name),
            _ => Self::err_expected(expected, &token),
        }
    }

    /// An identifier token without dots (field, group, member names).
    fn simple_ident(&mut self, expected: &str) -> ParseResult<(String, u32, u32)> {
        let token = self.next()?;
        match token.kind {
            TokenKind::Ident(name) if !name.contains('.') => {
                Ok((name, token.line, token.column))
            }
            _ => Self::err_expected(expected, &token),
        }
    }

    /// The `unpick v<N>` line. Anything else on line 1 is
    /// "Missing version marker" at 1:1; an out-of-range version is reported
    /// at the version token.
    fn parse_header(&mut self) -> ParseResult<()> {
        let missing = || ParseError::new(ErrorKind::MissingVersionMarker, 1, 1);

        let first = self.next()?;
        let TokenKind::Ident(word) = &first.kind else {
            return Err(missing());
        };
        if word != "unpick" || (first.line, first.column) != (1, 1) {
            return Err(missing());
        }

        let version_token = self.next()?;
        let TokenKind::Ident(word) = &version_token.kind else {
            return Err(missing());
        };
        let Some(digits) = word.strip_prefix('v') else {
            return Err(missing());
        };
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(missing());
        }

        let end = self.next()?;
        if !end.kind.is_newline_or_eof() {
            return Err(missing());
        }

        // Digits that overflow u32 are as unsupported as a parsed version
        // outside 3..=4, and report the same way.
        let version = match digits.parse::<u32>() {
            Ok(version) if (3..=4).contains(&version) => version,
            _ => {
                return Err(ParseError::new(
                    ErrorKind::UnsupportedVersion(digits.to_owned()),
                    version_token.line,
                    version_token.column,
                ));
            }
        };

        trace!(version, "parsed header");
        self.version = version;
        self.visitor.visit_header(version);
        Ok(())
    }

    /// Top-level items until end of input. Blank and comment lines between
    /// items are free; a stray indent is not.
    fn parse_items(&mut self) -> ParseResult<()> {
        loop {
            let token = self.next()?;
            match token.kind {
                TokenKind::Eof => return Ok(()),
                TokenKind::Newline => {}
                TokenKind::DocLine(text) => {
                    let docs = self.parse_docs(text)?;
                    let token = self.next()?;
                    match token.kind {
                        TokenKind::Ident(ref word) => {
                            let word = word.clone();
                            self.parse_item(&word, &token, Some(docs))?;
                        }
                        _ => return Self::err_expected("unpick item", &token),
                    }
                }
                TokenKind::Ident(ref word) => {
                    let word = word.clone();
                    self.parse_item(&word, &token, None)?;
                }
                _ => return Self::err_expected("unpick item", &token),
            }
        }
    }

    /// A `#:` block. Lines join with `\n`; the token after the block is
    /// left in the lookahead buffer.
    fn parse_docs(&mut self, first: String) -> ParseResult<String> {
        let mut lines = vec![first];
        loop {
            self.expect_newline()?;
            let token = self.next()?;
            if let TokenKind::DocLine(text) = token.kind {
                lines.push(text);
            } else {
                self.peeked = Some(token);
                return Ok(lines.join("\n"));
            }
        }
    }

    /// Dispatches on an item keyword. Doc blocks are only retained by
    /// group definitions; targets parse and discard them.
    fn parse_item(&mut self, word: &str, token: &Token, docs: Option<String>) -> ParseResult<()> {
        match word {
            "group" => self.parse_group(docs),
            "target_field" => self.parse_target_field(),
            "target_method" => self.parse_target_method(),
            "target_annotation" => {
                if self.version < 4 {
                    return Err(ParseError::new(
                        ErrorKind::TargetAnnotationVersion,
                        token.line,
                        token.column,
                    ));
                }
                self.parse_target_annotation()
            }
            _ => Self::err_expected("unpick item", token),
        }
    }
}

#[cfg(test)]
mod tests;
