//! Error codes for all interpreter diagnostics.
//!
//! The first digit names the stage that produced the error.

use std::fmt;

/// Error codes for all interpreter diagnostics.
///
/// Format: E#### where the first digit indicates phase:
/// - E0xxx: Lexer errors
/// - E1xxx: Parser errors
/// - E6xxx: Runtime errors
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Lexer Errors (E0xxx)
    /// Unexpected character in source
    E0001,
    /// Unterminated string literal
    E0002,
    /// Name table full
    E0003,

    // Parser Errors (E1xxx)
    /// Expected a specific token
    E1001,
    /// Expected expression
    E1002,
    /// Invalid assignment target
    E1003,
    /// More than 255 arguments or parameters
    E1004,
    /// `break` outside a loop
    E1005,
    /// `return` outside a function
    E1006,
    /// `this` outside a class
    E1007,
    /// Invalid use of `super`
    E1008,
    /// Class inherits from itself
    E1009,

    // Runtime Errors (E6xxx)
    /// Undefined variable
    E6001,
    /// Variable read before assignment
    E6002,
    /// Operand type mismatch
    E6003,
    /// Callee is not callable
    E6004,
    /// Wrong number of arguments
    E6005,
    /// Undefined property
    E6006,
    /// Property access on a non-instance
    E6007,
    /// Superclass is not a class
    E6008,
    /// Call depth limit exceeded
    E6009,
    /// `break` escaped a function body
    E6010,
}

impl ErrorCode {
    /// Get the string representation (e.g., "E1001").
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "E0001",
            ErrorCode::E0002 => "E0002",
            ErrorCode::E0003 => "E0003",
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E1003 => "E1003",
            ErrorCode::E1004 => "E1004",
            ErrorCode::E1005 => "E1005",
            ErrorCode::E1006 => "E1006",
            ErrorCode::E1007 => "E1007",
            ErrorCode::E1008 => "E1008",
            ErrorCode::E1009 => "E1009",
            ErrorCode::E6001 => "E6001",
            ErrorCode::E6002 => "E6002",
            ErrorCode::E6003 => "E6003",
            ErrorCode::E6004 => "E6004",
            ErrorCode::E6005 => "E6005",
            ErrorCode::E6006 => "E6006",
            ErrorCode::E6007 => "E6007",
            ErrorCode::E6008 => "E6008",
            ErrorCode::E6009 => "E6009",
            ErrorCode::E6010 => "E6010",
        }
    }

    /// Short description of the error class.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "unexpected character",
            ErrorCode::E0002 => "unterminated string",
            ErrorCode::E0003 => "too many distinct names",
            ErrorCode::E1001 => "unexpected token",
            ErrorCode::E1002 => "expected expression",
            ErrorCode::E1003 => "invalid assignment target",
            ErrorCode::E1004 => "too many arguments or parameters",
            ErrorCode::E1005 => "`break` outside of a loop",
            ErrorCode::E1006 => "`return` outside of a function",
            ErrorCode::E1007 => "`this` outside of a class",
            ErrorCode::E1008 => "invalid use of `super`",
            ErrorCode::E1009 => "class inherits from itself",
            ErrorCode::E6001 => "undefined variable",
            ErrorCode::E6002 => "unassigned variable",
            ErrorCode::E6003 => "operand type mismatch",
            ErrorCode::E6004 => "value is not callable",
            ErrorCode::E6005 => "wrong number of arguments",
            ErrorCode::E6006 => "undefined property",
            ErrorCode::E6007 => "not an instance",
            ErrorCode::E6008 => "superclass must be a class",
            ErrorCode::E6009 => "stack overflow",
            ErrorCode::E6010 => "`break` outside of a loop",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
