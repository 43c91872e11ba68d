//! selc-util - Core Utilities and Foundation Types
//!
//! This crate provides the foundation types shared by every phase of the
//! Selena compiler: source locations, the source map, the diagnostic
//! infrastructure, terminal color support, and the fixed message table.
//!
//! # Design notes
//!
//! Everything here is explicit state. There is no process-global error
//! stream and no global color flag: a [`Handler`] collects diagnostics for
//! one compilation, and a [`ColorConfig`] decides whether a particular
//! output stream gets ANSI codes. Both are constructed by the driver and
//! threaded through as parameters.
//!
//! # Module Structure
//!
//! - [`span`] - Source locations and the source map
//! - [`diagnostic`] - Diagnostics, severity levels, codes, and the handler
//! - [`color`] - 16-color terminal palette and color configuration
//! - [`messages`] - Fixed message/resource table keyed by integer code
//! - [`error`] - Error types for utility operations

#![warn(missing_docs)]

pub mod color;
pub mod diagnostic;
pub mod error;
pub mod messages;
pub mod span;

// Re-export main types for convenience
pub use color::{Color, ColorConfig};
pub use diagnostic::{Diagnostic, DiagnosticBuilder, DiagnosticCode, Handler, Level};
pub use error::SourceMapError;
pub use messages::Message;
pub use span::{FileId, SourceFile, SourceMap, Span};

// Re-export commonly used hashing types
pub use rustc_hash::FxHashMap;
pub use rustc_hash::FxHashSet;
