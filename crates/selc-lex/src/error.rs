//! Lexer error codes.

use thiserror::Error;

/// Fatal conditions that abort an entire lexing pass.
///
/// These are the only errors the entry point reports. Anything a scanner
/// merely fails to classify is embedded in the token stream as
/// [`Token::Unknown`](crate::Token::Unknown) instead, and the pass
/// continues.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum LexError {
    /// No source text was provided
    #[error("no source text provided")]
    NoSource,

    /// No diagnostic sink was provided
    #[error("no diagnostic sink provided")]
    NoErrorSink,

    /// No output token buffer was provided
    #[error("no output token buffer provided")]
    NoBuffer,

    /// The token buffer could not be grown
    #[error("token buffer allocation failed")]
    AllocationFailed,
}
