//! Sub-scanners for JVM descriptors and method names.
//!
//! Descriptors do not follow the main token rules (`()V` would tokenize as
//! parens plus an identifier, `[` and `;` are not tokens at all), so the
//! parser calls these at exactly the grammar positions where a descriptor
//! or method name is required. They read straight off the cursor; the
//! parser guarantees no token is buffered when they run.

use unpick_diagnostic::{ErrorKind, ParseError, ParseResult};

use crate::{Lexer, char_text, is_ident_continue, is_ident_start};

fn is_class_name_char(c: char) -> bool {
    // Slashed internal form is the norm; dotted names are tolerated and
    // normalized downstream.
    is_ident_continue(c) || c == '/' || c == '.'
}

impl Lexer<'_> {
    /// A field descriptor: `B C D F I J S Z`, `L<name>;`, any number of
    /// leading `[`. `V` is rejected here, it is only legal as a method
    /// return type.
    pub fn next_field_descriptor(&mut self) -> ParseResult<String> {
        self.skip_spaces();
        let mut desc = String::new();
        self.scan_field_descriptor(&mut desc)?;
        Ok(desc)
    }

    fn scan_field_descriptor(&mut self, desc: &mut String) -> ParseResult<()> {
        while self.cursor.current() == Some('[') {
            desc.push('[');
            self.cursor.bump();
        }
        let (line, column) = self.cursor.pos();
        match self.cursor.current() {
            None | Some('\n' | '\r' | ' ' | '\t') => Err(ParseError::new(
                ErrorKind::UnexpectedEndOfDescriptor,
                line,
                column,
            )),
            Some(c @ ('B' | 'C' | 'D' | 'F' | 'I' | 'J' | 'S' | 'Z')) => {
                desc.push(c);
                self.cursor.bump();
                Ok(())
            }
            Some('L') => {
                desc.push('L');
                self.cursor.bump();
                self.scan_object_name(desc)
            }
            Some(c) => Err(ParseError::new(
                ErrorKind::IllegalDescriptorChar(c),
                line,
                column,
            )),
        }
    }

    fn scan_object_name(&mut self, desc: &mut String) -> ParseResult<()> {
        let mut name_len = 0usize;
        loop {
            let (line, column) = self.cursor.pos();
            match self.cursor.current() {
                None | Some('\n' | '\r' | ' ' | '\t') => {
                    return Err(ParseError::new(
                        ErrorKind::UnexpectedEndOfDescriptor,
                        line,
                        column,
                    ));
                }
                Some(';') => {
                    if name_len == 0 {
                        return Err(ParseError::new(
                            ErrorKind::IllegalDescriptorChar(';'),
                            line,
                            column,
                        ));
                    }
                    desc.push(';');
                    self.cursor.bump();
                    return Ok(());
                }
                Some(c) if is_class_name_char(c) => {
                    desc.push(c);
                    self.cursor.bump();
                    name_len += 1;
                }
                Some(c) => {
                    return Err(ParseError::new(
                        ErrorKind::IllegalDescriptorChar(c),
                        line,
                        column,
                    ));
                }
            }
        }
    }

    /// A method descriptor: `(<field descriptors>)` then a field descriptor
    /// or `V`.
    pub fn next_method_descriptor(&mut self) -> ParseResult<String> {
        self.skip_spaces();
        let (line, column) = self.cursor.pos();
        let mut desc = String::new();
        match self.cursor.current() {
            None | Some('\n' | '\r') => {
                return Err(ParseError::new(
                    ErrorKind::UnexpectedEndOfDescriptor,
                    line,
                    column,
                ));
            }
            Some('(') => {
                desc.push('(');
                self.cursor.bump();
            }
            Some(c) => {
                return Err(ParseError::new(
                    ErrorKind::IllegalDescriptorChar(c),
                    line,
                    column,
                ));
            }
        }
        while self.cursor.current() != Some(')') {
            self.scan_field_descriptor(&mut desc)?;
        }
        desc.push(')');
        self.cursor.bump();
        if self.cursor.current() == Some('V') {
            desc.push('V');
            self.cursor.bump();
        } else {
            self.scan_field_descriptor(&mut desc)?;
        }
        Ok(desc)
    }

    /// A method name: a plain identifier, `<init>`, or `<clinit>`.
    pub fn next_method_name(&mut self) -> ParseResult<String> {
        self.skip_spaces();
        let (line, column) = self.cursor.pos();
        match self.cursor.current() {
            Some('<') => {
                self.cursor.bump();
                let (word_line, word_column) = self.cursor.pos();
                let mut word = String::new();
                while let Some(c) = self.cursor.current() {
                    if !is_ident_continue(c) {
                        break;
                    }
                    word.push(c);
                    self.cursor.bump();
                }
                if word != "init" && word != "clinit" {
                    let found = if word.is_empty() {
                        char_text(self.cursor.current())
                    } else {
                        word
                    };
                    return Err(ParseError::new(
                        ErrorKind::Expected {
                            expected: "'init' or 'clinit'".to_owned(),
                            found,
                        },
                        word_line,
                        word_column,
                    ));
                }
                let (line, column) = self.cursor.pos();
                if self.cursor.current() != Some('>') {
                    return Err(ParseError::new(
                        ErrorKind::Expected {
                            expected: "'>'".to_owned(),
                            found: char_text(self.cursor.current()),
                        },
                        line,
                        column,
                    ));
                }
                self.cursor.bump();
                Ok(format!("<{word}>"))
            }
            Some(c) if is_ident_start(c) => {
                let mut name = String::new();
                while let Some(c) = self.cursor.current() {
                    if !is_ident_continue(c) {
                        break;
                    }
                    name.push(c);
                    self.cursor.bump();
                }
                Ok(name)
            }
            found => Err(ParseError::new(
                ErrorKind::Expected {
                    expected: "identifier".to_owned(),
                    found: char_text(found),
                },
                line,
                column,
            )),
        }
    }
}
