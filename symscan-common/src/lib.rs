//! symscan - Common Types and Utilities
//!
//! This crate contains the error definitions and source location types
//! shared by the frontend and the command-line driver.

pub mod error;
pub mod source_loc;

pub use error::{CompilerError, Diagnostic, ErrorReporter, Severity};
pub use source_loc::{SourceLocation, SourceSpan, SourceTracker};
