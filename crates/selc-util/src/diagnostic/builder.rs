//! Diagnostic builder for fluent diagnostic construction.

use super::{Diagnostic, DiagnosticCode, Handler, Level};
use crate::span::Span;

/// Builder for constructing diagnostics with a fluent API
///
/// # Examples
///
/// ```
/// use selc_util::diagnostic::{DiagnosticBuilder, DiagnosticCode, Handler};
/// use selc_util::span::Span;
///
/// let handler = Handler::new();
/// DiagnosticBuilder::error("missing source text")
///     .code(DiagnosticCode::E_NO_SOURCE)
///     .span(Span::DUMMY)
///     .help("pass a file path or use --code")
///     .emit(&handler);
/// ```
pub struct DiagnosticBuilder {
    level: Level,
    message: String,
    span: Span,
    code: Option<DiagnosticCode>,
    notes: Vec<String>,
    helps: Vec<String>,
}

impl DiagnosticBuilder {
    /// Start building a diagnostic at the given level
    pub fn new(level: Level, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
            span: Span::DUMMY,
            code: None,
            notes: Vec::new(),
            helps: Vec::new(),
        }
    }

    /// Start building an error diagnostic
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(Level::Error, message)
    }

    /// Start building a warning diagnostic
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(Level::Warning, message)
    }

    /// Attach a source location
    pub fn span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    /// Attach a diagnostic code
    pub fn code(mut self, code: DiagnosticCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Attach a note
    pub fn note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    /// Attach a help suggestion
    pub fn help(mut self, help: impl Into<String>) -> Self {
        self.helps.push(help.into());
        self
    }

    /// Finish building, producing the diagnostic
    pub fn build(self) -> Diagnostic {
        Diagnostic {
            level: self.level,
            message: self.message,
            span: self.span,
            code: self.code,
            notes: self.notes,
            helps: self.helps,
        }
    }

    /// Finish building and emit through the handler
    pub fn emit(self, handler: &Handler) {
        handler.emit(self.build());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_build() {
        let diag = DiagnosticBuilder::error("boom")
            .span(Span::new(3, 4, 1, 4))
            .code(DiagnosticCode::E_ALLOCATION_FAILED)
            .note("while growing the token buffer")
            .build();
        assert_eq!(diag.level, Level::Error);
        assert_eq!(diag.message, "boom");
        assert_eq!(diag.span.start, 3);
        assert_eq!(diag.code, Some(DiagnosticCode::E_ALLOCATION_FAILED));
        assert_eq!(diag.notes.len(), 1);
    }

    #[test]
    fn test_builder_emit() {
        let handler = Handler::new();
        DiagnosticBuilder::warning("odd but legal").emit(&handler);
        assert_eq!(handler.warning_count(), 1);
        assert!(!handler.has_errors());
    }
}
