//! Core lexer implementation.
//!
//! This module contains the main Lexer struct, the dispatch loop, and the
//! scanner failure type.

use selc_util::span::Span;

use crate::ascii::is_ident_start;
use crate::cursor::Cursor;
use crate::token::Token;

/// A scanner could not form a token from the bytes at the cursor.
///
/// The dispatcher converts this into a single one-byte
/// [`Token::Unknown`] and keeps going; it is never fatal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct ScanFailure;

/// Result of one scanner attempt.
pub(crate) type ScanResult = Result<Token, ScanFailure>;

/// Lexer for the Selena programming language.
///
/// The lexer transforms source text into a stream of tokens, one call to
/// [`next_token`](Lexer::next_token) at a time. Inline whitespace (spaces
/// and tabs) separates tokens; line terminators are themselves tokens
/// ([`Token::Eol`]), as are comments.
pub struct Lexer<'a> {
    /// Byte cursor for source traversal.
    pub cursor: Cursor<'a>,

    /// Starting position of the current token (byte offset).
    token_start: usize,

    /// Line number where the current token starts (1-based).
    token_start_line: u32,

    /// Column number where the current token starts (1-based).
    token_start_column: u32,
}

impl<'a> Lexer<'a> {
    /// Creates a new lexer for the given source text.
    pub fn new(source: &'a str) -> Self {
        Self {
            cursor: Cursor::new(source),
            token_start: 0,
            token_start_line: 1,
            token_start_column: 1,
        }
    }

    /// Returns the next token from the source text.
    ///
    /// Skips runs of spaces and tabs, then dispatches on the first byte of
    /// the lexeme. When a scanner rejects its input, the cursor is restored
    /// to the start of the lexeme, one byte is consumed, and a single
    /// [`Token::Unknown`] is produced; lexing continues after it.
    ///
    /// Returns [`Token::Eof`] at the end of the text, indefinitely.
    pub fn next_token(&mut self) -> Token {
        self.skip_inline_whitespace();

        self.token_start = self.cursor.position();
        self.token_start_line = self.cursor.line();
        self.token_start_column = self.cursor.column();

        if self.cursor.is_at_end() {
            return Token::Eof;
        }

        if let Some(token) = self.scan_newline() {
            return token;
        }

        let snapshot = self.cursor.snapshot();
        let result = match self.cursor.current() {
            b'#' => Ok(self.scan_comment()),
            b'"' => self.scan_string(),
            b'\'' => self.scan_char(),
            b if is_ident_start(b) => Ok(self.scan_identifier()),
            b if b.is_ascii_digit() => self.scan_number(),
            _ => self.scan_operator(),
        };

        match result {
            Ok(token) => token,
            Err(ScanFailure) => {
                self.cursor.restore(snapshot);
                self.cursor.advance();
                Token::Unknown
            }
        }
    }

    /// Skips spaces and tabs. Line terminators are left in place; they
    /// produce tokens of their own.
    fn skip_inline_whitespace(&mut self) {
        while matches!(self.cursor.current(), b' ' | b'\t') && !self.cursor.is_at_end() {
            self.cursor.advance();
        }
    }

    /// Recognizes `\n` or `\r\n` as one logical end of line.
    ///
    /// A bare `\r` is not a line terminator and is left for the operator
    /// scanner to reject.
    fn scan_newline(&mut self) -> Option<Token> {
        match self.cursor.current() {
            b'\n' => {
                self.cursor.advance();
                Some(Token::Eol)
            }
            b'\r' if self.cursor.peek(1) == b'\n' => {
                self.cursor.advance_n(2);
                Some(Token::Eol)
            }
            _ => None,
        }
    }

    /// Returns the current line number (1-based).
    pub fn line(&self) -> u32 {
        self.cursor.line()
    }

    /// Returns the current column number (1-based).
    pub fn column(&self) -> u32 {
        self.cursor.column()
    }

    /// Returns the current byte position in the source.
    pub fn position(&self) -> usize {
        self.cursor.position()
    }

    /// Returns the starting position of the most recent token.
    pub fn token_start(&self) -> usize {
        self.token_start
    }

    /// Span covering the most recent token.
    pub fn current_span(&self) -> Span {
        Span::new(
            self.token_start,
            self.cursor.position(),
            self.token_start_line,
            self.token_start_column,
        )
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.next_token();
        if token.is_eof() {
            None
        } else {
            Some(token)
        }
    }
}
