//! Diagnostic rendering.
//!
//! [`TerminalEmitter`] is the only backend; the trait keeps the driver
//! independent of where the text goes.

mod terminal;

pub use terminal::{ColorMode, TerminalEmitter};

use crate::Diagnostic;

/// Sink for rendered diagnostics.
pub trait DiagnosticEmitter {
    fn emit(&mut self, diagnostic: &Diagnostic);

    fn emit_all(&mut self, diagnostics: &[Diagnostic]) {
        for diagnostic in diagnostics {
            self.emit(diagnostic);
        }
    }

    fn flush(&mut self);

    /// Closing line after a batch of errors, e.g. "aborting due to 2
    /// previous errors". Nothing for a count of zero.
    fn emit_summary(&mut self, error_count: usize);
}
