//! selc-lex - Lexical Analyzer for the Selena Programming Language
//!
//! This crate converts raw Selena source text into an ordered sequence of
//! typed tokens for the parser. The whole input is consumed in one pass;
//! the result is a [`TokenBuffer`] whose final token is always exactly one
//! [`Token::Eof`].
//!
//! # Example Usage
//!
//! ```
//! use selc_lex::{tokenize, Token};
//! use selc_util::Handler;
//!
//! let handler = Handler::new();
//! let buffer = tokenize("var x = 42", &handler).unwrap();
//!
//! assert_eq!(buffer.get(0), Some(&Token::Var));
//! assert_eq!(buffer.last(), Some(&Token::Eof));
//! ```
//!
//! The pull-based [`Lexer`] is also available directly:
//!
//! ```
//! use selc_lex::{Lexer, Token};
//!
//! let mut lexer = Lexer::new("1 + 2");
//! assert_eq!(lexer.next_token(), Token::Number(1));
//! assert_eq!(lexer.next_token(), Token::Plus);
//! assert_eq!(lexer.next_token(), Token::Number(2));
//! assert_eq!(lexer.next_token(), Token::Eof);
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token type and keyword table
//! - [`lexer`] - Main lexer implementation
//! - [`cursor`] - Byte cursor for source traversal
//! - [`buffer`] - Growable token buffer
//! - [`ascii`] - Byte classification helpers
//! - [`error`] - Fatal error codes
//!
//! # Error model
//!
//! Problems split into two disjoint classes. Anything a scanner cannot
//! classify becomes a single one-byte [`Token::Unknown`] in the stream and
//! the pass continues; whether that is reportable is the parser's call.
//! Fatal conditions (missing collaborators, allocation failure) abort the
//! pass with a [`LexError`], and nothing partial is handed out.

#![warn(missing_docs)]

pub mod ascii;
pub mod buffer;
pub mod cursor;
pub mod error;
pub mod lexer;
pub mod token;

// Re-export main types for convenience
pub use buffer::{TokenBuffer, INITIAL_CAPACITY};
pub use cursor::Cursor;
pub use error::LexError;
pub use lexer::Lexer;
pub use token::{keyword_from_ident, Token};

#[cfg(test)]
mod edge_cases;

use selc_util::diagnostic::{DiagnosticBuilder, DiagnosticCode, Handler};

/// Lexes `source` to completion into a caller-supplied buffer.
///
/// This is the checked entry point: all three collaborators are passed in
/// and may be absent, each absence mapping to its own error code. The
/// buffer is cleared before the pass and, on a fatal failure, cleared
/// again before returning so no partial token sequence escapes. The
/// diagnostic sink receives fatal-condition diagnostics only; recoverable
/// unknown tokens are embedded in the stream without a diagnostic.
///
/// On success the buffer ends with exactly one [`Token::Eof`].
///
/// # Examples
///
/// ```
/// use selc_lex::{generate, LexError, Token, TokenBuffer};
/// use selc_util::Handler;
///
/// let handler = Handler::new();
/// let mut buffer = TokenBuffer::new();
/// generate(Some("var x"), Some(&mut buffer), Some(&handler)).unwrap();
/// assert_eq!(buffer.last(), Some(&Token::Eof));
///
/// let err = generate(None, Some(&mut buffer), Some(&handler));
/// assert_eq!(err, Err(LexError::NoSource));
/// ```
pub fn generate(
    source: Option<&str>,
    buffer: Option<&mut TokenBuffer>,
    handler: Option<&Handler>,
) -> Result<(), LexError> {
    let source = source.ok_or(LexError::NoSource)?;
    let handler = handler.ok_or(LexError::NoErrorSink)?;
    let buffer = buffer.ok_or(LexError::NoBuffer)?;

    buffer.clear();
    let mut lexer = Lexer::new(source);

    loop {
        let token = lexer.next_token();
        let done = token.is_eof();
        if let Err(err) = buffer.push(token) {
            buffer.clear();
            DiagnosticBuilder::error("token buffer allocation failed")
                .code(DiagnosticCode::E_ALLOCATION_FAILED)
                .span(lexer.current_span())
                .emit(handler);
            return Err(err);
        }
        if done {
            return Ok(());
        }
    }
}

/// Lexes `source` to completion, producing a fresh token buffer.
///
/// Convenience wrapper over [`generate`] for callers that do not manage
/// their own buffer.
pub fn tokenize(source: &str, handler: &Handler) -> Result<TokenBuffer, LexError> {
    let mut buffer = TokenBuffer::new();
    generate(Some(source), Some(&mut buffer), Some(handler))?;
    Ok(buffer)
}
