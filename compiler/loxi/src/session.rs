//! One interpreter session: source text in, output and diagnostics out.
//!
//! Scripts, REPL lines and the dump commands all go through the same
//! lex → parse → report pipeline. A syntax error anywhere in the input
//! means nothing from it is evaluated.

use std::fmt::Write as _;
use std::io::Write;

use lox_diagnostic::emitter::{DiagnosticEmitter, TerminalEmitter};
use lox_diagnostic::Diagnostic;
use lox_eval::{EvalError, Interpreter, InterpreterBuilder, SharedPrintHandler};
use lox_ir::ast::{AstPrinter, Stmt};
use lox_ir::{Literal, SharedInterner, TokenList};
use lox_lexer::{lex, LexError};
use lox_parse::{parse, parse_interactive, Interactive, ParseError};
use tracing::debug;

use crate::exit_code;

/// How running one input ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Ok,
    SyntaxError,
    RuntimeError,
}

impl Outcome {
    /// Process exit code for this outcome.
    pub fn exit_code(self) -> u8 {
        match self {
            Outcome::Ok => 0,
            Outcome::SyntaxError => exit_code::DATA_ERR,
            Outcome::RuntimeError => exit_code::SOFTWARE,
        }
    }
}

/// Owns the interner, the interpreter and the diagnostic emitter.
///
/// Global bindings persist across calls, so successive REPL lines see
/// each other's definitions, including after an error.
pub struct Session<W: Write> {
    interner: SharedInterner,
    interpreter: Interpreter,
    emitter: TerminalEmitter<W>,
}

impl<W: Write> Session<W> {
    pub fn new(
        emitter: TerminalEmitter<W>,
        print_handler: SharedPrintHandler,
        max_call_depth: usize,
    ) -> Self {
        let interner = SharedInterner::new();
        let interpreter = InterpreterBuilder::new(interner.clone())
            .print_handler(print_handler)
            .max_call_depth(max_call_depth)
            .build();
        Session {
            interner,
            interpreter,
            emitter,
        }
    }

    #[cfg(test)]
    pub(crate) fn interpreter(&self) -> &Interpreter {
        &self.interpreter
    }

    /// Consume the session, returning the emitter (and with it the
    /// diagnostic writer).
    #[cfg(test)]
    pub(crate) fn into_emitter(self) -> TerminalEmitter<W> {
        self.emitter
    }

    /// Run a complete script.
    #[tracing::instrument(level = "debug", skip_all, fields(path = path.unwrap_or("<source>")))]
    pub fn run_source(&mut self, source: &str, path: Option<&str>) -> Outcome {
        match self.parse_program(source, path) {
            Some(statements) => self.execute(&statements),
            None => Outcome::SyntaxError,
        }
    }

    /// Run one REPL line.
    ///
    /// A bare expression has its value printed; anything else runs as a
    /// program.
    #[tracing::instrument(level = "debug", skip_all)]
    pub fn run_line(&mut self, line: &str) -> Outcome {
        self.emitter.set_source(line, None);
        let lexed = lex(line, &self.interner);
        let parsed = parse_interactive(&lexed.tokens, &self.interner);
        if self.report_syntax(&lexed.errors, &parsed.errors) > 0 {
            return Outcome::SyntaxError;
        }

        match parsed.input {
            Interactive::Program(statements) => self.execute(&statements),
            Interactive::Expression(expr) => match self.interpreter.evaluate(&expr) {
                Ok(value) => {
                    let handler = self.interpreter.print_handler();
                    handler.println(&value.to_string());
                    handler.flush();
                    Outcome::Ok
                }
                Err(error) => self.report_runtime(&error),
            },
        }
    }

    /// The token stream of `source`, one token per line.
    pub fn tokens(&mut self, source: &str, path: Option<&str>) -> Result<String, Outcome> {
        self.emitter.set_source(source, path.map(str::to_string));
        let lexed = lex(source, &self.interner);
        let count = self.report_syntax(&lexed.errors, &[]);
        if count > 0 {
            self.emitter.emit_summary(count);
            return Err(Outcome::SyntaxError);
        }
        Ok(self.list_tokens(&lexed.tokens))
    }

    /// The syntax tree of `source` in prefix form, one line per top-level
    /// statement.
    pub fn syntax_tree(&mut self, source: &str, path: Option<&str>) -> Result<String, Outcome> {
        let statements = self
            .parse_program(source, path)
            .ok_or(Outcome::SyntaxError)?;
        Ok(AstPrinter::new(&self.interner).print_program(&statements))
    }

    /// Lex and parse, reporting every syntax error. `None` if there were
    /// any.
    fn parse_program(&mut self, source: &str, path: Option<&str>) -> Option<Vec<Stmt>> {
        self.emitter.set_source(source, path.map(str::to_string));
        let lexed = lex(source, &self.interner);
        let parsed = parse(&lexed.tokens, &self.interner);
        let count = self.report_syntax(&lexed.errors, &parsed.errors);
        if count > 0 {
            debug!(errors = count, "syntax errors, not evaluating");
            self.emitter.emit_summary(count);
            return None;
        }
        Some(parsed.statements)
    }

    fn execute(&mut self, statements: &[Stmt]) -> Outcome {
        match self.interpreter.interpret(statements) {
            Ok(()) => Outcome::Ok,
            Err(error) => self.report_runtime(&error),
        }
    }

    /// Emit lex and parse errors in source order; returns how many.
    fn report_syntax(&mut self, lex_errors: &[LexError], parse_errors: &[ParseError]) -> usize {
        let mut diagnostics: Vec<Diagnostic> = lex_errors
            .iter()
            .map(LexError::to_diagnostic)
            .chain(parse_errors.iter().map(ParseError::to_diagnostic))
            .collect();
        diagnostics.sort_by_key(|diagnostic| diagnostic.primary_span().map(|span| span.start));
        self.emitter.emit_all(&diagnostics);
        self.emitter.flush();
        diagnostics.len()
    }

    fn report_runtime(&mut self, error: &EvalError) -> Outcome {
        debug!(code = %error.code(), "runtime error");
        self.interpreter.print_handler().flush();
        self.emitter.emit(&error.to_diagnostic());
        self.emitter.flush();
        Outcome::RuntimeError
    }

    fn list_tokens(&self, tokens: &TokenList) -> String {
        let mut out = String::new();
        for token in tokens.iter() {
            let kind = format!("{:?}", token.kind);
            let mut line = format!(
                "{:>4} {kind:<12} {}",
                token.line,
                token.text(&self.interner)
            );
            match token.literal {
                Some(Literal::Number(n)) => {
                    let _ = write!(line, " = {n}");
                }
                Some(Literal::Str(s)) => {
                    let _ = write!(line, " = {:?}", self.interner.lookup(s));
                }
                None => {}
            }
            let _ = writeln!(out, "{}", line.trim_end());
        }
        out
    }
}

#[cfg(test)]
mod tests;
