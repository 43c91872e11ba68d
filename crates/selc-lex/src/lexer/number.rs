//! Number literal scanning.
//!
//! This module handles integer literals in four bases and floating-point
//! literals.

use crate::ascii::is_digit_in_base;
use crate::lexer::{Lexer, ScanFailure, ScanResult};
use crate::token::Token;

impl<'a> Lexer<'a> {
    /// Scans a number literal.
    ///
    /// Base selection looks at the first two bytes: `0x`/`0X` is
    /// hexadecimal, `0b`/`0B` is binary, `0` followed by another digit is
    /// octal, anything else is decimal. Only decimal literals can carry a
    /// fraction or an exponent.
    ///
    /// # Number formats
    ///
    /// - Decimal: `42`, `123`, `0`
    /// - Hexadecimal: `0xFF`, `0x1a`
    /// - Binary: `0b1010`
    /// - Octal: `017`
    /// - Float: `3.14`, `1e10`, `2.5e-3`
    ///
    /// A base prefix with no digits after it is a scan failure.
    pub(crate) fn scan_number(&mut self) -> ScanResult {
        if self.cursor.current() == b'0' {
            match self.cursor.peek(1) {
                b'x' | b'X' => {
                    self.cursor.advance_n(2);
                    return self.scan_integer(16);
                }
                b'b' | b'B' => {
                    self.cursor.advance_n(2);
                    return self.scan_integer(2);
                }
                b if b.is_ascii_digit() => return self.scan_octal(),
                _ => {}
            }
        }
        self.scan_decimal()
    }

    /// Scans the digit run of a prefixed integer in `base`.
    ///
    /// The cursor must be past the two-byte prefix. An empty digit run is a
    /// scan failure; overflow saturates to `u64::MAX`.
    fn scan_integer(&mut self, base: u32) -> ScanResult {
        let digit_start = self.cursor.position();

        while is_digit_in_base(self.cursor.current(), base) {
            self.cursor.advance();
        }

        if self.cursor.position() == digit_start {
            return Err(ScanFailure);
        }

        let digits = self.cursor.slice_from(digit_start);
        let value = u64::from_str_radix(digits, base).unwrap_or(u64::MAX);
        Ok(Token::Number(value))
    }

    /// Scans an octal literal.
    ///
    /// The leading zero participates in the digit run, so `017` is the run
    /// `017` with value 15. Digits past 7 end the run.
    fn scan_octal(&mut self) -> ScanResult {
        let start = self.cursor.position();

        while matches!(self.cursor.current(), b'0'..=b'7') {
            self.cursor.advance();
        }

        let digits = self.cursor.slice_from(start);
        let value = u64::from_str_radix(digits, 8).unwrap_or(u64::MAX);
        Ok(Token::Number(value))
    }

    /// Scans a decimal integer or float literal.
    ///
    /// A `.` marks a fraction only when a digit follows it; `e`/`E` marks
    /// an exponent only when the lookahead shows a digit, or a sign and a
    /// digit. Either marker makes the literal a float.
    fn scan_decimal(&mut self) -> ScanResult {
        let start = self.cursor.position();
        let mut is_float = false;

        while self.cursor.current().is_ascii_digit() {
            self.cursor.advance();
        }

        if self.cursor.current() == b'.' && self.cursor.peek(1).is_ascii_digit() {
            is_float = true;
            self.cursor.advance();
            while self.cursor.current().is_ascii_digit() {
                self.cursor.advance();
            }
        }

        if matches!(self.cursor.current(), b'e' | b'E') {
            let next = self.cursor.peek(1);
            let has_exponent = next.is_ascii_digit()
                || (matches!(next, b'+' | b'-') && self.cursor.peek(2).is_ascii_digit());
            if has_exponent {
                is_float = true;
                self.cursor.advance();
                if matches!(self.cursor.current(), b'+' | b'-') {
                    self.cursor.advance();
                }
                while self.cursor.current().is_ascii_digit() {
                    self.cursor.advance();
                }
            }
        }

        let text = self.cursor.slice_from(start);
        if is_float {
            match text.parse::<f64>() {
                Ok(value) => Ok(Token::Float(value)),
                Err(_) => Err(ScanFailure),
            }
        } else {
            let value = text.parse::<u64>().unwrap_or(u64::MAX);
            Ok(Token::Number(value))
        }
    }
}
