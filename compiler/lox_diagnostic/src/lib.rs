//! Diagnostic system for error reporting.
//!
//! Every failure a user can trigger (lex, parse and runtime errors) is
//! converted into a [`Diagnostic`] before it reaches the terminal:
//! - Error code for searchability
//! - Message (what went wrong)
//! - Line and primary label (where it went wrong)
//! - Notes and suggestions (why, and how to fix it)
//!
//! Rendering lives in [`emitter`]; line/column math in [`span_utils`].

mod diagnostic;
pub mod emitter;
mod error_code;
pub mod span_utils;

pub use diagnostic::{Diagnostic, Label};
pub use error_code::ErrorCode;
