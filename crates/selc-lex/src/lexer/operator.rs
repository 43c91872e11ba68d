//! Operator and punctuation scanning.
//!
//! Multi-byte operators use maximal munch: each leading byte checks its
//! longest spellings first, so `<<=` never splits into `<<` and `=`.

use crate::lexer::{Lexer, ScanFailure, ScanResult};
use crate::token::Token;

impl<'a> Lexer<'a> {
    /// Scans an operator or punctuation token.
    ///
    /// An unrecognized leading byte is a scan failure.
    pub(crate) fn scan_operator(&mut self) -> ScanResult {
        match self.cursor.current() {
            b'+' => Ok(self.lex_plus()),
            b'-' => Ok(self.lex_minus()),
            b'*' => Ok(self.lex_star()),
            b'/' => Ok(self.lex_slash()),
            b'=' => Ok(self.lex_equals()),
            b'!' => Ok(self.lex_bang()),
            b'<' => Ok(self.lex_less()),
            b'>' => Ok(self.lex_greater()),
            b'&' => Ok(self.lex_ampersand()),
            b'|' => Ok(self.lex_pipe()),
            b':' => Ok(self.lex_colon()),
            b'.' => Ok(self.lex_dot()),
            b'%' => {
                self.cursor.advance();
                Ok(Token::Percent)
            }
            b'^' => {
                self.cursor.advance();
                Ok(Token::Caret)
            }
            b'~' => {
                self.cursor.advance();
                Ok(Token::Tilde)
            }
            b'?' => {
                self.cursor.advance();
                Ok(Token::Question)
            }
            b'@' => {
                self.cursor.advance();
                Ok(Token::At)
            }
            b',' => {
                self.cursor.advance();
                Ok(Token::Comma)
            }
            b';' => {
                self.cursor.advance();
                Ok(Token::Semicolon)
            }
            b'(' => {
                self.cursor.advance();
                Ok(Token::LParen)
            }
            b')' => {
                self.cursor.advance();
                Ok(Token::RParen)
            }
            b'{' => {
                self.cursor.advance();
                Ok(Token::LBrace)
            }
            b'}' => {
                self.cursor.advance();
                Ok(Token::RBrace)
            }
            b'[' => {
                self.cursor.advance();
                Ok(Token::LBracket)
            }
            b']' => {
                self.cursor.advance();
                Ok(Token::RBracket)
            }
            _ => Err(ScanFailure),
        }
    }

    /// Handles: `+`, `++`, `+=`
    fn lex_plus(&mut self) -> Token {
        self.cursor.advance();
        if self.cursor.match_byte(b'+') {
            Token::PlusPlus
        } else if self.cursor.match_byte(b'=') {
            Token::PlusEq
        } else {
            Token::Plus
        }
    }

    /// Handles: `-`, `->`, `--`, `-=`
    fn lex_minus(&mut self) -> Token {
        self.cursor.advance();
        if self.cursor.match_byte(b'>') {
            Token::Arrow
        } else if self.cursor.match_byte(b'-') {
            Token::MinusMinus
        } else if self.cursor.match_byte(b'=') {
            Token::MinusEq
        } else {
            Token::Minus
        }
    }

    /// Handles: `*`, `*=`
    fn lex_star(&mut self) -> Token {
        self.cursor.advance();
        if self.cursor.match_byte(b'=') {
            Token::StarEq
        } else {
            Token::Star
        }
    }

    /// Handles: `/`, `/=`
    fn lex_slash(&mut self) -> Token {
        self.cursor.advance();
        if self.cursor.match_byte(b'=') {
            Token::SlashEq
        } else {
            Token::Slash
        }
    }

    /// Handles: `=`, `==`
    fn lex_equals(&mut self) -> Token {
        self.cursor.advance();
        if self.cursor.match_byte(b'=') {
            Token::EqEq
        } else {
            Token::Eq
        }
    }

    /// Handles: `!`, `!=`
    fn lex_bang(&mut self) -> Token {
        self.cursor.advance();
        if self.cursor.match_byte(b'=') {
            Token::NotEq
        } else {
            Token::Bang
        }
    }

    /// Handles: `<`, `<=`, `<<`, `<<=`
    fn lex_less(&mut self) -> Token {
        self.cursor.advance();
        if self.cursor.match_byte(b'<') {
            if self.cursor.match_byte(b'=') {
                Token::ShlEq
            } else {
                Token::Shl
            }
        } else if self.cursor.match_byte(b'=') {
            Token::LtEq
        } else {
            Token::Lt
        }
    }

    /// Handles: `>`, `>=`, `>>`, `>>=`
    fn lex_greater(&mut self) -> Token {
        self.cursor.advance();
        if self.cursor.match_byte(b'>') {
            if self.cursor.match_byte(b'=') {
                Token::ShrEq
            } else {
                Token::Shr
            }
        } else if self.cursor.match_byte(b'=') {
            Token::GtEq
        } else {
            Token::Gt
        }
    }

    /// Handles: `&`, `&&`, `&=`
    fn lex_ampersand(&mut self) -> Token {
        self.cursor.advance();
        if self.cursor.match_byte(b'&') {
            Token::AndAnd
        } else if self.cursor.match_byte(b'=') {
            Token::AmpersandEq
        } else {
            Token::Ampersand
        }
    }

    /// Handles: `|`, `||`, `|=`
    fn lex_pipe(&mut self) -> Token {
        self.cursor.advance();
        if self.cursor.match_byte(b'|') {
            Token::OrOr
        } else if self.cursor.match_byte(b'=') {
            Token::PipeEq
        } else {
            Token::Pipe
        }
    }

    /// Handles: `:`, `::`
    fn lex_colon(&mut self) -> Token {
        self.cursor.advance();
        if self.cursor.match_byte(b':') {
            Token::ColonColon
        } else {
            Token::Colon
        }
    }

    /// Handles: `.`, `...`
    ///
    /// Two dots are not a token of their own; `..` lexes as two `.`.
    fn lex_dot(&mut self) -> Token {
        self.cursor.advance();
        if self.cursor.current() == b'.' && self.cursor.peek(1) == b'.' {
            self.cursor.advance_n(2);
            Token::DotDotDot
        } else {
            Token::Dot
        }
    }
}
