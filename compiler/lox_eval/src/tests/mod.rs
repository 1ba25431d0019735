//! End-to-end tests: source text through lexer, parser and interpreter.

#![allow(clippy::unwrap_used, clippy::expect_used)]

mod classes;
mod programs;

use lox_ir::SharedInterner;

use crate::{buffer_handler, EvalError, Interpreter, InterpreterBuilder, SharedPrintHandler};

/// An interpreter with captured output, ready to run several programs.
pub(crate) struct Harness {
    interner: SharedInterner,
    output: SharedPrintHandler,
    pub interpreter: Interpreter,
}

impl Harness {
    pub fn new() -> Self {
        Self::with_max_depth(crate::DEFAULT_MAX_DEPTH)
    }

    pub fn with_max_depth(depth: usize) -> Self {
        let interner = SharedInterner::new();
        let output = buffer_handler();
        let interpreter = InterpreterBuilder::new(interner.clone())
            .print_handler(output.clone())
            .max_call_depth(depth)
            .build();
        Harness {
            interner,
            output,
            interpreter,
        }
    }

    /// Run a program that must lex and parse cleanly.
    pub fn run(&mut self, source: &str) -> Result<(), EvalError> {
        let lexed = lox_lexer::lex(source, &self.interner);
        assert!(!lexed.has_errors(), "lex errors: {:?}", lexed.errors);
        let parsed = lox_parse::parse(&lexed.tokens, &self.interner);
        assert!(!parsed.has_errors(), "parse errors: {:?}", parsed.errors);
        self.interpreter.interpret(&parsed.statements)
    }

    /// Output printed so far, then cleared.
    pub fn take_output(&self) -> String {
        let output = self.output.get_output();
        self.output.clear();
        output
    }
}

/// Everything `source` prints; fails the test on a runtime error.
pub(crate) fn output_of(source: &str) -> String {
    let mut harness = Harness::new();
    if let Err(error) = harness.run(source) {
        panic!("unexpected runtime error: {error}");
    }
    harness.take_output()
}

/// The runtime error `source` stops with.
pub(crate) fn error_of(source: &str) -> EvalError {
    let mut harness = Harness::new();
    harness.run(source).expect_err("expected a runtime error")
}
