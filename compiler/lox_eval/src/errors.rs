//! Runtime errors.
//!
//! Every error carries the line and span of the token that caused it.
//! Factory functions live here so that message wording stays in one place.

use std::fmt;

use lox_diagnostic::{Diagnostic, ErrorCode};
use lox_ir::{Span, StringInterner, Token};
use thiserror::Error;

/// Result of evaluating an expression.
pub type EvalResult = Result<crate::Value, EvalError>;

/// What went wrong at runtime.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EvalErrorKind {
    #[error("Undefined variable '{name}'.")]
    UndefinedVariable { name: String },

    #[error("Unassigned variable '{name}'.")]
    UnassignedVariable { name: String },

    #[error("Operand must be a number.")]
    OperandNotNumber,

    #[error("Operands must be numbers.")]
    OperandsNotNumbers,

    #[error("Operands must be two numbers or two strings.")]
    InvalidAddOperands,

    #[error("Can only call functions and classes.")]
    NotCallable,

    #[error("Expected {expected} arguments but got {got}.")]
    ArityMismatch { expected: usize, got: usize },

    #[error("Only instances have properties.")]
    PropertyOnNonInstance,

    #[error("Only instances have fields.")]
    FieldOnNonInstance,

    #[error("Undefined property '{name}'.")]
    UndefinedProperty { name: String },

    #[error("Superclass must be a class.")]
    SuperclassNotClass,

    #[error("Stack overflow.")]
    StackOverflow { depth: usize },

    #[error("Can't break outside of a loop.")]
    BreakOutsideLoop,
}

impl EvalErrorKind {
    /// Diagnostic code for this kind.
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::UndefinedVariable { .. } => ErrorCode::E6001,
            Self::UnassignedVariable { .. } => ErrorCode::E6002,
            Self::OperandNotNumber | Self::OperandsNotNumbers | Self::InvalidAddOperands => {
                ErrorCode::E6003
            }
            Self::NotCallable => ErrorCode::E6004,
            Self::ArityMismatch { .. } => ErrorCode::E6005,
            Self::UndefinedProperty { .. } => ErrorCode::E6006,
            Self::PropertyOnNonInstance | Self::FieldOnNonInstance => ErrorCode::E6007,
            Self::SuperclassNotClass => ErrorCode::E6008,
            Self::StackOverflow { .. } => ErrorCode::E6009,
            Self::BreakOutsideLoop => ErrorCode::E6010,
        }
    }

    /// Attach the location of `token`.
    #[must_use]
    pub fn at(self, token: &Token) -> EvalError {
        EvalError::new(self, token.span, token.line)
    }
}

/// A runtime error with its source location.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EvalError {
    pub kind: EvalErrorKind,
    /// Rendered message, equal to `kind.to_string()`.
    pub message: String,
    pub span: Span,
    pub line: u32,
}

impl EvalError {
    pub fn new(kind: EvalErrorKind, span: Span, line: u32) -> Self {
        let message = kind.to_string();
        EvalError {
            kind,
            message,
            span,
            line,
        }
    }

    pub fn code(&self) -> ErrorCode {
        self.kind.code()
    }

    pub fn to_diagnostic(&self) -> Diagnostic {
        let label = match &self.kind {
            EvalErrorKind::ArityMismatch { .. } => "in this call",
            EvalErrorKind::StackOverflow { .. } => "call nested too deeply",
            EvalErrorKind::UndefinedVariable { .. } => "not found in this scope",
            EvalErrorKind::UnassignedVariable { .. } => "read before any value was assigned",
            _ => self.code().description(),
        };
        let diagnostic = Diagnostic::error(self.code())
            .with_message(&self.message)
            .at_line(self.line)
            .with_label(self.span, label);
        match self.kind {
            EvalErrorKind::StackOverflow { depth } => {
                diagnostic.with_note(format!("the call depth limit is {depth}"))
            }
            _ => diagnostic,
        }
    }
}

impl fmt::Display for EvalError {
    /// `message` followed by `[line N]` on its own line.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}\n[line {}]", self.message, self.line)
    }
}

impl std::error::Error for EvalError {}

#[cold]
pub fn undefined_variable(name: &Token, interner: &StringInterner) -> EvalError {
    EvalErrorKind::UndefinedVariable {
        name: name.text(interner).to_string(),
    }
    .at(name)
}

#[cold]
pub fn unassigned_variable(name: &Token, interner: &StringInterner) -> EvalError {
    EvalErrorKind::UnassignedVariable {
        name: name.text(interner).to_string(),
    }
    .at(name)
}

#[cold]
pub fn undefined_property(name: &Token, interner: &StringInterner) -> EvalError {
    EvalErrorKind::UndefinedProperty {
        name: name.text(interner).to_string(),
    }
    .at(name)
}

#[cold]
pub fn arity_mismatch(expected: usize, got: usize, paren: &Token) -> EvalError {
    EvalErrorKind::ArityMismatch { expected, got }.at(paren)
}

#[cold]
pub fn not_callable(paren: &Token) -> EvalError {
    EvalErrorKind::NotCallable.at(paren)
}

#[cold]
pub fn stack_overflow(depth: usize, span: Span, line: u32) -> EvalError {
    EvalError::new(EvalErrorKind::StackOverflow { depth }, span, line)
}

#[cfg(test)]
mod tests;
