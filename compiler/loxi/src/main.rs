//! Loxi CLI: run scripts, dump tokens or syntax trees, or start a REPL.

use std::io::{self, BufRead, IsTerminal, Write};
use std::process::ExitCode;

use lox_diagnostic::emitter::TerminalEmitter;
use lox_eval::stdout_handler;
use loxi::{exit_code, init_tracing, usage, Cli, Command, Outcome, Session};

fn main() -> ExitCode {
    init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let cli = match Cli::parse(&args) {
        Ok(cli) => cli,
        Err(error) => {
            eprintln!("error: {error}");
            eprintln!();
            eprintln!("{}", usage());
            return ExitCode::from(exit_code::USAGE);
        }
    };

    let is_tty = io::stderr().is_terminal();
    let emitter = TerminalEmitter::stderr(cli.color, is_tty);
    let mut session = Session::new(emitter, stdout_handler(), cli.max_depth);

    match &cli.command {
        Command::Help => {
            println!("{}", usage());
            ExitCode::SUCCESS
        }
        Command::Repl => repl(&mut session),
        Command::Run(path) => with_source(path, |source| {
            ExitCode::from(session.run_source(source, Some(path.as_str())).exit_code())
        }),
        Command::Parse(path) => with_source(path, |source| {
            dump(session.syntax_tree(source, Some(path.as_str())))
        }),
        Command::Lex(path) => with_source(path, |source| {
            dump(session.tokens(source, Some(path.as_str())))
        }),
    }
}

/// Read `path` and hand its contents to `run`.
fn with_source(path: &str, run: impl FnOnce(&str) -> ExitCode) -> ExitCode {
    match std::fs::read_to_string(path) {
        Ok(source) => run(&source),
        Err(e) => {
            eprintln!("error: could not read '{path}': {e}");
            ExitCode::from(exit_code::IO_ERR)
        }
    }
}

fn dump(result: Result<String, Outcome>) -> ExitCode {
    match result {
        Ok(text) => {
            print!("{text}");
            if !text.is_empty() && !text.ends_with('\n') {
                println!();
            }
            ExitCode::SUCCESS
        }
        Err(outcome) => ExitCode::from(outcome.exit_code()),
    }
}

/// Read-eval-print loop over stdin. Ends cleanly at end of input.
fn repl<W: Write>(session: &mut Session<W>) -> ExitCode {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut line = String::new();
    loop {
        print!("> ");
        let _ = io::stdout().flush();

        line.clear();
        match input.read_line(&mut line) {
            Ok(0) => {
                println!();
                return ExitCode::SUCCESS;
            }
            Ok(_) => {
                session.run_line(&line);
            }
            Err(e) => {
                eprintln!("error: could not read input: {e}");
                return ExitCode::from(exit_code::IO_ERR);
            }
        }
    }
}
