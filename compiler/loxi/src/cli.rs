//! Command-line argument parsing.
//!
//! Hand-rolled: the surface is a handful of subcommands and two
//! `--key=value` options.

use std::fmt;

use lox_diagnostic::emitter::ColorMode;
use lox_eval::DEFAULT_MAX_DEPTH;

/// What the binary was asked to do.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Interactive prompt; chosen when no script is given.
    Repl,
    /// Execute a script.
    Run(String),
    /// Print the syntax tree of a script in prefix form.
    Parse(String),
    /// Print the token stream of a script.
    Lex(String),
    Help,
}

/// Parsed command line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cli {
    pub command: Command,
    pub color: ColorMode,
    pub max_depth: usize,
}

/// A malformed command line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UsageError(pub String);

impl fmt::Display for UsageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::error::Error for UsageError {}

impl Cli {
    /// Parse arguments, excluding the program name.
    pub fn parse(args: &[String]) -> Result<Cli, UsageError> {
        let mut color = ColorMode::Auto;
        let mut max_depth = DEFAULT_MAX_DEPTH;
        let mut positional: Vec<&str> = Vec::new();

        for arg in args {
            if let Some(mode) = arg.strip_prefix("--color=") {
                color = mode.parse().map_err(UsageError)?;
            } else if let Some(depth) = arg.strip_prefix("--max-depth=") {
                max_depth = match depth.parse::<usize>() {
                    Ok(n) if n > 0 => n,
                    _ => {
                        return Err(UsageError(format!(
                            "invalid max depth '{depth}' (expected a positive integer)"
                        )))
                    }
                };
            } else if arg == "-h" || arg == "--help" || arg == "help" {
                return Ok(Cli {
                    command: Command::Help,
                    color,
                    max_depth,
                });
            } else if arg.starts_with("--") {
                return Err(UsageError(format!("unknown option '{arg}'")));
            } else {
                positional.push(arg);
            }
        }

        let command = match positional.as_slice() {
            [] => Command::Repl,
            ["run", path] => Command::Run((*path).to_string()),
            ["parse", path] => Command::Parse((*path).to_string()),
            ["lex", path] => Command::Lex((*path).to_string()),
            [cmd @ ("run" | "parse" | "lex")] => {
                return Err(UsageError(format!("'{cmd}' requires a script path")))
            }
            [path] => Command::Run((*path).to_string()),
            _ => return Err(UsageError("too many arguments".to_string())),
        };

        Ok(Cli {
            command,
            color,
            max_depth,
        })
    }
}

/// Usage text for `--help` and usage errors.
pub fn usage() -> &'static str {
    "Usage: loxi [options] [command] [script]

Commands:
  run <script>     Execute a script (default when a script is given)
  parse <script>   Print the syntax tree in prefix form
  lex <script>     Print the token stream
  help             Show this message

With no script, loxi starts an interactive prompt.

Options:
  --color=<auto|always|never>  Colorize diagnostics (default: auto)
  --max-depth=<n>              Maximum call depth before a stack overflow error

Environment:
  LOX_LOG=<filter>   Enable tracing, e.g. LOX_LOG=lox_eval=debug
  LOX_LOG_TREE=1     Render tracing spans as a tree"
}
