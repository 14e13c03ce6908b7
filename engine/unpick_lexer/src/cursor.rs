//! Character cursor with 1-based position tracking.

pub(crate) struct Cursor<'src> {
    rest: &'src str,
    line: u32,
    column: u32,
}

impl<'src> Cursor<'src> {
    pub(crate) fn new(source: &'src str) -> Self {
        Cursor {
            rest: source,
            line: 1,
            column: 1,
        }
    }

    /// The character under the cursor, `None` at end of input.
    pub(crate) fn current(&self) -> Option<char> {
        self.rest.chars().next()
    }

    /// One character of lookahead past the current one.
    pub(crate) fn peek_next(&self) -> Option<char> {
        let mut chars = self.rest.chars();
        chars.next();
        chars.next()
    }

    /// Position of the character under the cursor.
    pub(crate) fn pos(&self) -> (u32, u32) {
        (self.line, self.column)
    }

    /// Consumes the current character. Newlines advance the line counter
    /// and reset the column to 1.
    pub(crate) fn bump(&mut self) -> Option<char> {
        let mut chars = self.rest.chars();
        let c = chars.next()?;
        self.rest = chars.as_str();
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(c)
    }
}
