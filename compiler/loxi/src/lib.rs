//! Loxi - driver for the Lox interpreter.
//!
//! Wires lexer, parser and evaluator into one [`Session`] shared by the
//! script runner, the REPL and the `parse`/`lex` dump commands, and owns
//! command-line parsing and tracing setup for the `loxi` binary.

mod cli;
mod session;
mod tracing_setup;

pub use cli::{usage, Cli, Command, UsageError};
pub use session::{Outcome, Session};
pub use tracing_setup::init_tracing;

/// Process exit codes, following the BSD `sysexits` convention.
pub mod exit_code {
    /// Bad command-line usage.
    pub const USAGE: u8 = 64;
    /// Lex or parse error in the input.
    pub const DATA_ERR: u8 = 65;
    /// Runtime error while evaluating.
    pub const SOFTWARE: u8 = 70;
    /// The script could not be read.
    pub const IO_ERR: u8 = 74;
}
