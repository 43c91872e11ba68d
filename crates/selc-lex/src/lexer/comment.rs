//! Comment scanning.
//!
//! Selena comments come in two forms, both introduced by `#`:
//! a single `#` starts a line comment running to the next line terminator,
//! and `##` opens a block comment running to the next `##` anywhere in the
//! text. Comments are tokens, not discarded trivia; the parser decides what
//! to do with them.

use crate::lexer::Lexer;
use crate::token::Token;

impl<'a> Lexer<'a> {
    /// Scans a comment.
    ///
    /// The cursor must be on a `#`. A second `#` selects the block form,
    /// which is greedy: the first `##` found anywhere closes it, and a
    /// block left open at the end of the text closes implicitly. The line
    /// form's interior stops before the line terminator, so the terminator
    /// still produces its own end-of-line token.
    pub(crate) fn scan_comment(&mut self) -> Token {
        if self.cursor.peek(1) == b'#' {
            return self.scan_block_comment();
        }

        self.cursor.advance();
        let start = self.cursor.position();

        while !self.cursor.is_at_end() && !self.at_line_terminator() {
            self.cursor.advance();
        }

        Token::Comment(self.cursor.slice_from(start).to_string())
    }

    fn scan_block_comment(&mut self) -> Token {
        self.cursor.advance_n(2);
        let start = self.cursor.position();

        loop {
            if self.cursor.is_at_end() {
                // Implicitly closed at end of input.
                return Token::Comment(self.cursor.slice_from(start).to_string());
            }
            if self.cursor.current() == b'#' && self.cursor.peek(1) == b'#' {
                let interior = self.cursor.slice_from(start).to_string();
                self.cursor.advance_n(2);
                return Token::Comment(interior);
            }
            self.cursor.advance();
        }
    }

    /// True when the cursor sits on `\n` or on a `\r` that begins `\r\n`.
    fn at_line_terminator(&self) -> bool {
        self.cursor.current() == b'\n'
            || (self.cursor.current() == b'\r' && self.cursor.peek(1) == b'\n')
    }
}

#[cfg(test)]
mod tests {
    use crate::lexer::Lexer;
    use crate::token::Token;

    fn lex_all(source: &str) -> Vec<Token> {
        Lexer::new(source).collect()
    }

    #[test]
    fn test_line_comment() {
        assert_eq!(
            lex_all("# hello"),
            vec![Token::Comment(" hello".to_string())]
        );
    }

    #[test]
    fn test_line_comment_excludes_terminator() {
        assert_eq!(
            lex_all("# one\nx"),
            vec![
                Token::Comment(" one".to_string()),
                Token::Eol,
                Token::Ident("x".to_string()),
            ]
        );
    }

    #[test]
    fn test_line_comment_excludes_crlf() {
        assert_eq!(
            lex_all("# one\r\nx"),
            vec![
                Token::Comment(" one".to_string()),
                Token::Eol,
                Token::Ident("x".to_string()),
            ]
        );
    }

    #[test]
    fn test_empty_line_comment() {
        assert_eq!(
            lex_all("#\nx"),
            vec![
                Token::Comment(String::new()),
                Token::Eol,
                Token::Ident("x".to_string()),
            ]
        );
    }

    #[test]
    fn test_lone_carriage_return_is_comment_content() {
        // "\r" alone is not a line terminator, so it stays in the interior.
        assert_eq!(
            lex_all("# a\rb"),
            vec![Token::Comment(" a\rb".to_string())]
        );
    }

    #[test]
    fn test_block_comment() {
        assert_eq!(
            lex_all("## interior ##"),
            vec![Token::Comment(" interior ".to_string())]
        );
    }

    #[test]
    fn test_block_comment_spans_lines() {
        assert_eq!(
            lex_all("## one\ntwo ##x"),
            vec![
                Token::Comment(" one\ntwo ".to_string()),
                Token::Ident("x".to_string()),
            ]
        );
    }

    #[test]
    fn test_block_comment_greedy_close() {
        // The first ## closes; the rest of the text lexes normally.
        assert_eq!(
            lex_all("## a ## b ##"),
            vec![
                Token::Comment(" a ".to_string()),
                Token::Ident("b".to_string()),
                Token::Comment(String::new()),
            ]
        );
    }

    #[test]
    fn test_unterminated_block_comment_is_accepted() {
        assert_eq!(
            lex_all("## still open"),
            vec![Token::Comment(" still open".to_string())]
        );
    }

    #[test]
    fn test_empty_block_comment() {
        assert_eq!(lex_all("####"), vec![Token::Comment(String::new())]);
    }

    #[test]
    fn test_comment_between_tokens() {
        assert_eq!(
            lex_all("var # note\nx"),
            vec![
                Token::Var,
                Token::Comment(" note".to_string()),
                Token::Eol,
                Token::Ident("x".to_string()),
            ]
        );
    }
}
