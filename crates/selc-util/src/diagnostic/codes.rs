//! Diagnostic codes for categorizing compiler errors and warnings.
//!
//! Codes follow the format `{prefix}{number}` where the prefix is `E` for
//! errors and `W` for warnings, and the number is rendered with four digits.
//! They let users reference a specific diagnostic in documentation and let
//! tools filter by category.

use std::fmt;

/// A unique code identifying a diagnostic message
///
/// # Examples
///
/// ```
/// use selc_util::diagnostic::DiagnosticCode;
///
/// let code = DiagnosticCode::new("E", 101);
/// assert_eq!(code.as_str(), "E0101");
/// assert_eq!(DiagnosticCode::E_NO_SOURCE.prefix(), "E");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct DiagnosticCode {
    /// The prefix (e.g., "E" for error, "W" for warning)
    pub prefix: &'static str,
    /// The numeric identifier
    pub number: u32,
}

impl DiagnosticCode {
    /// Create a new diagnostic code
    #[inline]
    pub const fn new(prefix: &'static str, number: u32) -> Self {
        Self { prefix, number }
    }

    /// Get the prefix (e.g., "E" for error, "W" for warning)
    #[inline]
    pub const fn prefix(&self) -> &'static str {
        self.prefix
    }

    /// Get the numeric identifier
    #[inline]
    pub const fn number(&self) -> u32 {
        self.number
    }

    /// Get the full code string (e.g., "E0101")
    pub fn as_str(&self) -> String {
        format!("{}{:04}", self.prefix, self.number)
    }

    // =========================================================================
    // PREDEFINED ERROR CODES
    // =========================================================================

    /// E0101: no source text was provided to the lexer
    pub const E_NO_SOURCE: Self = Self::new("E", 101);
    /// E0102: no diagnostic sink was provided to the lexer
    pub const E_NO_ERROR_SINK: Self = Self::new("E", 102);
    /// E0103: no output token buffer was provided to the lexer
    pub const E_NO_BUFFER: Self = Self::new("E", 103);
    /// E0104: token buffer or payload allocation failed
    pub const E_ALLOCATION_FAILED: Self = Self::new("E", 104);

    /// E0201: an input file could not be read
    pub const E_UNREADABLE_INPUT: Self = Self::new("E", 201);

    // =========================================================================
    // PREDEFINED WARNING CODES
    // =========================================================================

    /// W0101: the token stream contains unknown tokens
    pub const W_UNKNOWN_TOKENS: Self = Self::new("W", 101);
}

impl fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:04}", self.prefix, self.number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_format() {
        assert_eq!(DiagnosticCode::new("E", 1).as_str(), "E0001");
        assert_eq!(DiagnosticCode::new("W", 101).as_str(), "W0101");
        assert_eq!(format!("{}", DiagnosticCode::E_NO_SOURCE), "E0101");
    }

    #[test]
    fn test_code_accessors() {
        let code = DiagnosticCode::E_ALLOCATION_FAILED;
        assert_eq!(code.prefix(), "E");
        assert_eq!(code.number(), 104);
    }

    #[test]
    fn test_code_equality() {
        assert_eq!(
            DiagnosticCode::E_NO_SOURCE,
            DiagnosticCode::new("E", 101)
        );
        assert_ne!(DiagnosticCode::E_NO_SOURCE, DiagnosticCode::E_NO_BUFFER);
    }
}
