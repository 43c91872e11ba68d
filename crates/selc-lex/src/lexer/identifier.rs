//! Identifier and keyword scanning.

use crate::ascii::is_ident_continue;
use crate::lexer::Lexer;
use crate::token::{keyword_from_ident, Token};

impl<'a> Lexer<'a> {
    /// Scans an identifier or keyword.
    ///
    /// Consumes the maximal run of ASCII letters, digits, and underscores,
    /// then checks the spelling against the keyword table. A hit yields the
    /// keyword token; a miss yields an identifier owning a copy of the
    /// spelling.
    pub(crate) fn scan_identifier(&mut self) -> Token {
        let start = self.cursor.position();

        while is_ident_continue(self.cursor.current()) {
            self.cursor.advance();
        }

        let text = self.cursor.slice_from(start);
        keyword_from_ident(text).unwrap_or_else(|| Token::Ident(text.to_string()))
    }
}
