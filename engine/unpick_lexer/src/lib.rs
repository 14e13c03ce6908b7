//! Pull-based tokenizer for the unpick format.
//!
//! [`Lexer`] hands out one [`Token`] per call, tracking the 1-based line
//! and column of each token's first character so parse errors can point at
//! the exact fault. Line structure is part of the grammar, so newlines,
//! indentation runs, and `#:` doc lines are tokens of their own; blank
//! lines collapse to a plain newline, and comment lines (`#` without `:`)
//! contribute no token at all.
//!
//! Descriptors and method names do not tokenize like the rest of the
//! language (`()V` would be three tokens, `<init>` would be junk), so the
//! parser asks for them explicitly via the sub-scanners in [`descriptor`]
//! at the positions where the grammar demands them.

mod cursor;
mod descriptor;
mod token;

pub use token::{IntLiteral, IntRadix, Token, TokenKind};

use cursor::Cursor;
use unpick_diagnostic::{ErrorKind, ParseError, ParseResult};

pub struct Lexer<'src> {
    cursor: Cursor<'src>,
    at_line_start: bool,
}

pub(crate) fn is_ident_start(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_' || c == '$'
}

pub(crate) fn is_ident_continue(c: char) -> bool {
    is_ident_start(c) || c.is_ascii_digit()
}

/// Renders a character for "before 'X' token" messages.
pub(crate) fn char_text(c: Option<char>) -> String {
    match c {
        None => "<EOF>".to_owned(),
        Some('\n') => "\\n".to_owned(),
        Some(c) => c.to_string(),
    }
}

impl<'src> Lexer<'src> {
    pub fn new(source: &'src str) -> Self {
        Lexer {
            cursor: Cursor::new(source),
            at_line_start: true,
        }
    }

    /// Produces the next token. [`TokenKind::Eof`] repeats once reached.
    pub fn next_token(&mut self) -> ParseResult<Token> {
        loop {
            if self.at_line_start {
                if let Some(token) = self.line_start()? {
                    return Ok(token);
                }
                continue;
            }

            self.skip_spaces();
            let (line, column) = self.cursor.pos();
            let Some(c) = self.cursor.current() else {
                return Ok(Token {
                    kind: TokenKind::Eof,
                    line,
                    column,
                });
            };

            let kind = match c {
                '\n' => {
                    self.cursor.bump();
                    self.at_line_start = true;
                    TokenKind::Newline
                }
                '\r' if self.cursor.peek_next() == Some('\n') => {
                    self.cursor.bump();
                    self.cursor.bump();
                    self.at_line_start = true;
                    TokenKind::Newline
                }
                // Stray carriage return, treated as whitespace
                '\r' => {
                    self.cursor.bump();
                    continue;
                }
                c if is_ident_start(c) => self.scan_ident()?,
                c if c.is_ascii_digit() => self.scan_number(line, column)?,
                '\'' => self.scan_char()?,
                '"' => self.scan_string()?,
                '@' => self.single(TokenKind::At),
                '.' => self.single(TokenKind::Dot),
                ':' => self.single(TokenKind::Colon),
                '(' => self.single(TokenKind::LParen),
                ')' => self.single(TokenKind::RParen),
                '+' => self.single(TokenKind::Plus),
                '-' => self.single(TokenKind::Minus),
                '*' => self.single(TokenKind::Star),
                '/' => self.single(TokenKind::Slash),
                '%' => self.single(TokenKind::Percent),
                '&' => self.single(TokenKind::Amp),
                '|' => self.single(TokenKind::Pipe),
                '^' => self.single(TokenKind::Caret),
                '~' => self.single(TokenKind::Tilde),
                '<' if self.cursor.peek_next() == Some('<') => {
                    self.cursor.bump();
                    self.cursor.bump();
                    TokenKind::Shl
                }
                '>' => {
                    self.cursor.bump();
                    if self.cursor.current() == Some('>') {
                        self.cursor.bump();
                        if self.cursor.current() == Some('>') {
                            self.cursor.bump();
                            TokenKind::Ushr
                        } else {
                            TokenKind::Shr
                        }
                    } else {
                        return Err(ParseError::new(ErrorKind::UnexpectedChar('>'), line, column));
                    }
                }
                c => return Err(ParseError::new(ErrorKind::UnexpectedChar(c), line, column)),
            };

            return Ok(Token { kind, line, column });
        }
    }

    fn single(&mut self, kind: TokenKind) -> TokenKind {
        self.cursor.bump();
        kind
    }

    fn skip_spaces(&mut self) {
        while matches!(self.cursor.current(), Some(' ' | '\t')) {
            self.cursor.bump();
        }
    }

    /// Classifies the start of a line: blank line (`None`, the caller
    /// loops and emits the newline), comment line (consumed whole,
    /// terminator included, so it neither opens nor closes a block),
    /// doc line, or indentation.
    fn line_start(&mut self) -> ParseResult<Option<Token>> {
        let (line, _) = self.cursor.pos();
        self.at_line_start = false;

        let mut ws = String::new();
        while let Some(c @ (' ' | '\t')) = self.cursor.current() {
            ws.push(c);
            self.cursor.bump();
        }

        match self.cursor.current() {
            None | Some('\n') => Ok(None),
            Some('\r') if self.cursor.peek_next() == Some('\n') => Ok(None),
            Some('#') if self.cursor.peek_next() == Some(':') && ws.is_empty() => {
                self.cursor.bump();
                self.cursor.bump();
                if self.cursor.current() == Some(' ') {
                    self.cursor.bump();
                }
                let mut text = String::new();
                while let Some(c) = self.cursor.current() {
                    if c == '\n' {
                        break;
                    }
                    text.push(c);
                    self.cursor.bump();
                }
                if text.ends_with('\r') {
                    text.pop();
                }
                Ok(Some(Token {
                    kind: TokenKind::DocLine(text),
                    line,
                    column: 1,
                }))
            }
            Some('#') => {
                while self.cursor.current().is_some_and(|c| c != '\n') {
                    self.cursor.bump();
                }
                if self.cursor.current() == Some('\n') {
                    self.cursor.bump();
                }
                self.at_line_start = true;
                Ok(None)
            }
            Some(_) if !ws.is_empty() => Ok(Some(Token {
                kind: TokenKind::Indent(ws),
                line,
                column: 1,
            })),
            Some(_) => Ok(None),
        }
    }

    fn take_ident_word(&mut self, out: &mut String) {
        while let Some(c) = self.cursor.current() {
            if !is_ident_continue(c) {
                break;
            }
            out.push(c);
            self.cursor.bump();
        }
    }

    /// Identifier, merging `.` runs into dotted class names. A `.` directly
    /// attached to the name but not followed by an identifier start is an
    /// error at the dot (dotted names cannot end with a dot or contain two
    /// consecutive dots).
    fn scan_ident(&mut self) -> ParseResult<TokenKind> {
        let mut name = String::new();
        self.take_ident_word(&mut name);
        while self.cursor.current() == Some('.') {
            if self.cursor.peek_next().is_some_and(is_ident_start) {
                name.push('.');
                self.cursor.bump();
                self.take_ident_word(&mut name);
            } else {
                let (line, column) = self.cursor.pos();
                return Err(ParseError::new(
                    ErrorKind::Expected {
                        expected: "identifier".to_owned(),
                        found: ".".to_owned(),
                    },
                    line,
                    column,
                ));
            }
        }
        Ok(TokenKind::Ident(name))
    }

    fn scan_radix_digits(&mut self, base: u32) -> (u64, bool, u32) {
        let mut magnitude = 0u64;
        let mut overflow = false;
        let mut count = 0u32;
        while let Some(d) = self.cursor.current().and_then(|c| c.to_digit(base)) {
            match magnitude
                .checked_mul(u64::from(base))
                .and_then(|m| m.checked_add(u64::from(d)))
            {
                Some(m) => magnitude = m,
                None => overflow = true,
            }
            self.cursor.bump();
            count += 1;
        }
        (magnitude, overflow, count)
    }

    fn int_token(&mut self, magnitude: u64, radix: IntRadix, overflow: bool) -> TokenKind {
        let wide = matches!(self.cursor.current(), Some('L' | 'l'));
        if wide {
            self.cursor.bump();
        }
        TokenKind::Int(IntLiteral {
            magnitude,
            radix,
            wide,
            overflow,
        })
    }

    /// Numeric literal. `line`/`column` are the token start, where bounds
    /// errors for floating literals are reported.
    fn scan_number(&mut self, line: u32, column: u32) -> ParseResult<TokenKind> {
        if self.cursor.current() == Some('0') {
            match self.cursor.peek_next() {
                Some('x' | 'X') => {
                    self.cursor.bump();
                    self.cursor.bump();
                    let (magnitude, overflow, count) = self.scan_radix_digits(16);
                    if count == 0 {
                        let (l, c) = self.cursor.pos();
                        return Err(ParseError::new(ErrorKind::MissingDigits("hex"), l, c));
                    }
                    return Ok(self.int_token(magnitude, IntRadix::Hex, overflow));
                }
                Some('b' | 'B') => {
                    self.cursor.bump();
                    self.cursor.bump();
                    let (magnitude, overflow, count) = self.scan_radix_digits(2);
                    if count == 0 {
                        let (l, c) = self.cursor.pos();
                        return Err(ParseError::new(ErrorKind::MissingDigits("binary"), l, c));
                    }
                    return Ok(self.int_token(magnitude, IntRadix::Binary, overflow));
                }
                Some('0'..='7') => {
                    self.cursor.bump();
                    let (magnitude, overflow, _) = self.scan_radix_digits(8);
                    if let Some(c @ ('8' | '9')) = self.cursor.current() {
                        let (l, col) = self.cursor.pos();
                        return Err(ParseError::new(ErrorKind::UnexpectedChar(c), l, col));
                    }
                    return Ok(self.int_token(magnitude, IntRadix::Octal, overflow));
                }
                Some(c @ ('8' | '9')) => {
                    // "08" is neither octal nor decimal
                    self.cursor.bump();
                    let (l, col) = self.cursor.pos();
                    return Err(ParseError::new(ErrorKind::UnexpectedChar(c), l, col));
                }
                _ => {}
            }
        }

        let mut text = String::new();
        let (mut magnitude, mut overflow) = (0u64, false);
        while let Some(c) = self.cursor.current() {
            let Some(d) = c.to_digit(10) else { break };
            match magnitude
                .checked_mul(10)
                .and_then(|m| m.checked_add(u64::from(d)))
            {
                Some(m) => magnitude = m,
                None => overflow = true,
            }
            text.push(c);
            self.cursor.bump();
        }

        if matches!(self.cursor.current(), Some('.' | 'e' | 'E')) {
            return self.scan_float_rest(&mut text, line, column);
        }
        Ok(self.int_token(magnitude, IntRadix::Decimal, overflow))
    }

    fn scan_float_rest(
        &mut self,
        text: &mut String,
        line: u32,
        column: u32,
    ) -> ParseResult<TokenKind> {
        if self.cursor.current() == Some('.') {
            text.push('.');
            self.cursor.bump();
            if !self.cursor.current().is_some_and(|c| c.is_ascii_digit()) {
                let (l, c) = self.cursor.pos();
                return Err(ParseError::new(ErrorKind::MissingFracPart, l, c));
            }
            while let Some(c) = self.cursor.current() {
                if !c.is_ascii_digit() {
                    break;
                }
                text.push(c);
                self.cursor.bump();
            }
        }

        if let Some('e' | 'E') = self.cursor.current() {
            text.push('e');
            self.cursor.bump();
            if let Some(sign @ ('+' | '-')) = self.cursor.current() {
                text.push(sign);
                self.cursor.bump();
            }
            if !self.cursor.current().is_some_and(|c| c.is_ascii_digit()) {
                let (l, c) = self.cursor.pos();
                return Err(ParseError::new(ErrorKind::MissingExponent, l, c));
            }
            while let Some(c) = self.cursor.current() {
                if !c.is_ascii_digit() {
                    break;
                }
                text.push(c);
                self.cursor.bump();
            }
        }

        // Digits only, so parsing cannot fail; infinity means overflow.
        let value = text.parse::<f64>().unwrap_or(f64::INFINITY);

        if matches!(self.cursor.current(), Some('f' | 'F')) {
            self.cursor.bump();
            #[allow(clippy::cast_possible_truncation)]
            let narrowed = value as f32;
            if narrowed.is_infinite() {
                return Err(ParseError::new(ErrorKind::FloatOutOfBounds, line, column));
            }
            return Ok(TokenKind::Float(narrowed));
        }
        if value.is_infinite() {
            return Err(ParseError::new(ErrorKind::DoubleOutOfBounds, line, column));
        }
        Ok(TokenKind::Double(value))
    }

    /// One escape sequence, cursor on the backslash.
    fn read_escape(&mut self) -> ParseResult<char> {
        self.cursor.bump();
        let (line, column) = self.cursor.pos();
        let c = match self.cursor.current() {
            None | Some('\n') => {
                return Err(ParseError::new(ErrorKind::UnterminatedString, line, column));
            }
            Some(c) => c,
        };
        match c {
            'u' => {
                self.cursor.bump();
                let mut value = 0u32;
                for _ in 0..4 {
                    let (l, col) = self.cursor.pos();
                    let Some(d) = self.cursor.current().and_then(|c| c.to_digit(16)) else {
                        return Err(ParseError::new(ErrorKind::InvalidUnicodeEscape, l, col));
                    };
                    value = value * 16 + d;
                    self.cursor.bump();
                }
                // Unpaired surrogates are not representable
                char::from_u32(value)
                    .ok_or_else(|| ParseError::new(ErrorKind::InvalidUnicodeEscape, line, column))
            }
            d @ '0'..='7' => {
                let first = d.to_digit(8).unwrap_or(0);
                self.cursor.bump();
                let mut value = first;
                if let Some(d2) = self.cursor.current().and_then(|c| c.to_digit(8)) {
                    value = value * 8 + d2;
                    self.cursor.bump();
                    // A third digit only fits when the first is 0-3
                    if first <= 3 {
                        if let Some(d3) = self.cursor.current().and_then(|c| c.to_digit(8)) {
                            value = value * 8 + d3;
                            self.cursor.bump();
                        }
                    }
                }
                // At most \377, always a valid code point
                Ok(char::from_u32(value).unwrap_or('\u{fffd}'))
            }
            'b' => {
                self.cursor.bump();
                Ok('\u{8}')
            }
            't' => {
                self.cursor.bump();
                Ok('\t')
            }
            'n' => {
                self.cursor.bump();
                Ok('\n')
            }
            'f' => {
                self.cursor.bump();
                Ok('\u{c}')
            }
            'r' => {
                self.cursor.bump();
                Ok('\r')
            }
            '\\' | '\'' | '"' => {
                self.cursor.bump();
                Ok(c)
            }
            c => Err(ParseError::new(ErrorKind::InvalidEscape(c), line, column)),
        }
    }

    fn scan_char(&mut self) -> ParseResult<TokenKind> {
        self.cursor.bump();
        let (line, column) = self.cursor.pos();
        let value = match self.cursor.current() {
            Some('\'') => {
                return Err(ParseError::new(ErrorKind::EmptyCharLiteral, line, column));
            }
            None | Some('\n') => {
                return Err(ParseError::new(ErrorKind::UnterminatedString, line, column));
            }
            Some('\\') => self.read_escape()?,
            Some(c) => {
                self.cursor.bump();
                c
            }
        };
        let (line, column) = self.cursor.pos();
        match self.cursor.current() {
            Some('\'') => {
                self.cursor.bump();
                Ok(TokenKind::Char(value))
            }
            None | Some('\n') => {
                Err(ParseError::new(ErrorKind::UnterminatedString, line, column))
            }
            Some(_) => Err(ParseError::new(ErrorKind::MultiCharLiteral, line, column)),
        }
    }

    fn scan_string(&mut self) -> ParseResult<TokenKind> {
        self.cursor.bump();
        let mut value = String::new();
        loop {
            let (line, column) = self.cursor.pos();
            match self.cursor.current() {
                Some('"') => {
                    self.cursor.bump();
                    return Ok(TokenKind::Str(value));
                }
                None | Some('\n') => {
                    return Err(ParseError::new(ErrorKind::UnterminatedString, line, column));
                }
                Some('\\') => value.push(self.read_escape()?),
                Some(c) => {
                    self.cursor.bump();
                    value.push(c);
                }
            }
        }
    }
}
