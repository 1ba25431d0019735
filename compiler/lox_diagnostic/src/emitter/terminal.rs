//! Terminal Emitter
//!
//! Human-readable diagnostic output with optional ANSI colors. When the
//! source text is attached, labels render as a `file:line:col` location
//! followed by the offending line and a caret underline:
//!
//! ```text
//! error[E1002]: Expecting expression.
//!  --> script.lox:1:7
//!   |
//! 1 | print ;
//!   |       ^ expected expression
//! ```

use std::io::{self, Write};
use std::str::FromStr;

use super::DiagnosticEmitter;
use crate::span_utils::LineOffsetTable;
use crate::{Diagnostic, Label};

/// ANSI color codes for terminal output.
mod colors {
    pub const ERROR: &str = "\x1b[1;31m"; // Bold red
    pub const HELP: &str = "\x1b[1;32m"; // Bold green
    pub const BOLD: &str = "\x1b[1m";
    pub const RESET: &str = "\x1b[0m";
}

/// Color output mode for terminal emitter.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorMode {
    /// Colors when writing to a TTY.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    /// Resolve to a boolean; `is_tty` only matters for `Auto`.
    pub fn should_use_colors(self, is_tty: bool) -> bool {
        match self {
            ColorMode::Auto => is_tty,
            ColorMode::Always => true,
            ColorMode::Never => false,
        }
    }
}

impl FromStr for ColorMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "auto" => Ok(ColorMode::Auto),
            "always" => Ok(ColorMode::Always),
            "never" => Ok(ColorMode::Never),
            other => Err(format!(
                "invalid color mode '{other}' (expected auto, always or never)"
            )),
        }
    }
}

/// Source text attached to the emitter for snippet rendering.
struct SourceView {
    path: Option<String>,
    text: String,
    lines: LineOffsetTable,
}

/// Terminal emitter with optional color support.
pub struct TerminalEmitter<W: Write> {
    writer: W,
    colors: bool,
    source: Option<SourceView>,
}

impl<W: Write> TerminalEmitter<W> {
    /// Create a terminal emitter writing to `writer`.
    ///
    /// `is_tty` is only consulted for `ColorMode::Auto`.
    pub fn with_color_mode(writer: W, mode: ColorMode, is_tty: bool) -> Self {
        TerminalEmitter {
            writer,
            colors: mode.should_use_colors(is_tty),
            source: None,
        }
    }

    /// Attach source text so labels render with line, column and snippet.
    ///
    /// Replaces any previously attached source; the REPL calls this once
    /// per input line.
    pub fn set_source(&mut self, text: impl Into<String>, path: Option<String>) {
        let text = text.into();
        let lines = LineOffsetTable::build(&text);
        self.source = Some(SourceView { path, text, lines });
    }

    /// Builder form of [`set_source`](Self::set_source).
    #[must_use]
    pub fn with_source(mut self, text: impl Into<String>, path: Option<String>) -> Self {
        self.set_source(text, path);
        self
    }

    /// Consume the emitter and return the writer.
    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_colored(&mut self, text: &str, color: &str) {
        if self.colors {
            let _ = write!(self.writer, "{color}{text}{}", colors::RESET);
        } else {
            let _ = write!(self.writer, "{text}");
        }
    }

    fn write_code(&mut self, code: &str) {
        if self.colors {
            let _ = write!(self.writer, "{}[{code}]{}", colors::BOLD, colors::RESET);
        } else {
            let _ = write!(self.writer, "[{code}]");
        }
    }

    /// Render `label`; `primary` adds the `-->` location line.
    fn write_label(&mut self, label: &Label, line: u32, primary: bool) {
        let Some(view) = self.source.as_ref() else {
            if primary {
                let location = if line > 0 {
                    format!("line {line}")
                } else {
                    format!("{:?}", label.span)
                };
                let _ = write!(self.writer, "  --> {location}");
                if !label.message.is_empty() {
                    let _ = write!(self.writer, ": ");
                    self.write_colored(&label.message, colors::ERROR);
                }
                let _ = writeln!(self.writer);
            }
            return;
        };

        let (line, col) = view.lines.offset_to_line_col(&view.text, label.span.start);
        let line_text = view.lines.line_text(&view.text, line).to_string();
        let location = match &view.path {
            Some(path) => format!("{path}:{line}:{col}"),
            None => format!("{line}:{col}"),
        };
        let pad = " ".repeat(line.to_string().len());

        if primary {
            let _ = writeln!(self.writer, "{pad}--> {location}");
        }
        let _ = writeln!(self.writer, "{pad} |");
        let _ = writeln!(self.writer, "{line} | {line_text}");

        // At least one caret, clamped to the end of this line.
        let line_chars = line_text.chars().count();
        let start_col = (col as usize).saturating_sub(1);
        let span_chars = view
            .text
            .get(label.span.to_range())
            .map_or(0, |s| s.split('\n').next().unwrap_or("").chars().count());
        let width = span_chars.min(line_chars.saturating_sub(start_col)).max(1);
        let marker = if primary { "^" } else { "-" };
        let _ = write!(self.writer, "{pad} | {}", " ".repeat(start_col));
        self.write_colored(&marker.repeat(width), colors::ERROR);
        if !label.message.is_empty() {
            let _ = write!(self.writer, " ");
            self.write_colored(&label.message, colors::ERROR);
        }
        let _ = writeln!(self.writer);
    }
}

impl TerminalEmitter<io::Stderr> {
    /// Create a terminal emitter for stderr.
    pub fn stderr(mode: ColorMode, is_tty: bool) -> Self {
        Self::with_color_mode(io::stderr(), mode, is_tty)
    }
}

impl<W: Write> DiagnosticEmitter for TerminalEmitter<W> {
    fn emit(&mut self, diagnostic: &Diagnostic) {
        // Header: error[CODE]: message
        self.write_colored("error", colors::ERROR);
        self.write_code(diagnostic.code.as_str());
        let _ = writeln!(self.writer, ": {}", diagnostic.message);

        for (i, label) in diagnostic.labels.iter().enumerate() {
            self.write_label(label, diagnostic.line, i == 0);
        }
        if diagnostic.labels.is_empty() && diagnostic.line > 0 {
            let _ = writeln!(self.writer, "  --> line {}", diagnostic.line);
        }

        for note in &diagnostic.notes {
            let _ = write!(self.writer, "  = ");
            self.write_colored("note", colors::BOLD);
            let _ = writeln!(self.writer, ": {note}");
        }

        for suggestion in &diagnostic.suggestions {
            let _ = write!(self.writer, "  = ");
            self.write_colored("help", colors::HELP);
            let _ = writeln!(self.writer, ": {suggestion}");
        }

        let _ = writeln!(self.writer);
    }

    fn flush(&mut self) {
        let _ = self.writer.flush();
    }

    fn emit_summary(&mut self, error_count: usize) {
        match error_count {
            0 => {}
            1 => {
                self.write_colored("error", colors::ERROR);
                let _ = writeln!(self.writer, ": aborting due to previous error");
            }
            n => {
                self.write_colored("error", colors::ERROR);
                let _ = writeln!(self.writer, ": aborting due to {n} previous errors");
            }
        }
    }
}

#[cfg(test)]
mod tests;
